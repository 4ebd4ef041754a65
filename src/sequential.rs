//! The capability set of a sequential collection: a length, and a
//! bidirectional editing cursor at any index.
//!
//! Positional algorithms (indexed replace, insert, remove and linear search)
//! are provided on top of [`ListCursor`] alone, so any collection that can
//! hand out such a cursor gets them for free.

use crate::error::{ListError, Result};

/// A bidirectional cursor over a sequential collection.
///
/// See [`Cursor`](crate::list::cursor::Cursor) for the contract of each
/// operation.
pub trait ListCursor {
    type Item;

    fn has_next(&self) -> bool;

    fn has_previous(&self) -> bool;

    fn move_next(&mut self) -> Option<&Self::Item>;

    fn move_prev(&mut self) -> Option<&Self::Item>;

    fn next_index(&self) -> usize;

    fn previous_index(&self) -> Option<usize>;
}

/// A [`ListCursor`] that can also edit the collection it walks.
///
/// See [`CursorMut`](crate::list::cursor::CursorMut) for the contract of
/// each operation.
pub trait ListCursorMut: ListCursor {
    fn insert(&mut self, item: Self::Item);

    fn remove(&mut self) -> Result<Self::Item>;

    fn replace(&mut self, item: Self::Item) -> Result<Self::Item>;
}

/// A collection that is only reachable through its cursors.
///
/// Searches walk a read-only [`ListCursor`] and borrow the collection
/// immutably; edits walk a [`ListCursorMut`].
pub trait SequentialList {
    type Item;
    type Cursor<'a>: ListCursor<Item = Self::Item>
    where
        Self: 'a;
    type CursorMut<'a>: ListCursorMut<Item = Self::Item>
    where
        Self: 'a;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Create a read-only cursor before the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::OutOfRange`] if `index > len`.
    fn list_cursor(&self, index: usize) -> Result<Self::Cursor<'_>>;

    /// Create an editing cursor before the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::OutOfRange`] if `index > len`.
    fn list_cursor_mut(&mut self, index: usize) -> Result<Self::CursorMut<'_>>;

    /// Replace the element at `index` and return the old one.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::{List, SequentialList};
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// list.push_back(2);
    /// assert_eq!(list.set_at(1, 5), Ok(2));
    /// assert_eq!(list.get(1), Some(&5));
    /// ```
    fn set_at(&mut self, index: usize, item: Self::Item) -> Result<Self::Item> {
        let len = self.len();
        let mut cursor = self.list_cursor_mut(index)?;
        if cursor.move_next().is_none() {
            return Err(ListError::OutOfRange { index, len });
        }
        cursor.replace(item)
    }

    /// Insert `item` so that it becomes the element at `index`.
    fn insert_at(&mut self, index: usize, item: Self::Item) -> Result<()> {
        self.list_cursor_mut(index)?.insert(item);
        Ok(())
    }

    /// Remove the element at `index` and return it.
    fn remove_at(&mut self, index: usize) -> Result<Self::Item> {
        let len = self.len();
        let mut cursor = self.list_cursor_mut(index)?;
        if cursor.move_next().is_none() {
            return Err(ListError::OutOfRange { index, len });
        }
        cursor.remove()
    }

    /// Returns the index of the first element matching `predicate`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::{List, SequentialList};
    ///
    /// let mut list = List::new();
    /// list.push_back("a");
    /// list.push_back("b");
    ///
    /// let mut cursor = list.cursor_start();
    /// assert_eq!(cursor.move_next(), Some(&"a"));
    /// // Searching only reads the list, so other readers stay valid.
    /// assert_eq!(list.position(|item| *item == "b"), Some(1));
    /// assert_eq!(cursor.move_next(), Some(&"b"));
    /// assert_eq!(list.position(|item| *item == "c"), None);
    /// ```
    fn position<P>(&self, mut predicate: P) -> Option<usize>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        let mut cursor = self.list_cursor(0).ok()?;
        loop {
            let index = cursor.next_index();
            if predicate(cursor.move_next()?) {
                return Some(index);
            }
        }
    }

    fn contains(&self, item: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        self.position(|other| other == item).is_some()
    }
}
