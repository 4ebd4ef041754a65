use crate::error::{ListError, Result};
use crate::list::{Link, List, NodeId};
use crate::sequential::{ListCursor, ListCursorMut};
use log::debug;
use std::fmt;
use std::fmt::Formatter;

/// The node most recently stepped over by a cursor, and the direction of
/// that step. Its presence is what allows `remove` and `replace`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LastMove {
    /// Stepped over by `move_next`: the node is right behind the cursor.
    Forward(NodeId),
    /// Stepped over by `move_prev`: the node is right ahead of the cursor.
    Backward(NodeId),
}

impl LastMove {
    fn node(self) -> NodeId {
        match self {
            LastMove::Forward(id) | LastMove::Backward(id) => id,
        }
    }
}

/// A read-only cursor over a `List`.
///
/// A cursor sits in a *gap*: between two adjacent elements, before the
/// first one or after the last one. In a list with length *n*, there are
/// *n* + 1 gaps, indexed by 0, 1, ..., *n*. The index of a gap is the number
/// of elements before it.
///
/// # Examples
///
/// Here is a simple example showing how the cursors work. (The gap of the
/// cursor is denoted by `|`).
/// ```
/// use cursor_list::List;
///
/// // Create a list: [A B C]
/// let mut list = List::new();
/// list.push_back('A');
/// list.push_back('B');
/// list.push_back('C');
///
/// // Create a cursor at start: [|A B C] (index = 0)
/// let mut cursor = list.cursor_start();
/// assert!(!cursor.has_previous());
///
/// // Move cursor forward: [A|B C] (index = 1)
/// assert_eq!(cursor.move_next(), Some(&'A'));
/// assert_eq!(cursor.next_index(), 1);
///
/// // Create a cursor in the end: [A B C|] (index = 3)
/// let mut cursor = list.cursor_end();
/// assert_eq!(cursor.move_next(), None);
///
/// // Move cursor backward: [A B|C] (index = 2)
/// assert_eq!(cursor.move_prev(), Some(&'C'));
/// assert_eq!(cursor.previous_index(), Some(1));
/// ```
pub struct Cursor<'a, T: 'a> {
    index: usize,
    next: Link,
    prev: Link,
    list: &'a List<T>,
}

/// A cursor over a `List` with editing operations.
///
/// Besides moving like a [`Cursor`], a `CursorMut` can insert an element
/// into its gap, and remove or replace the element it stepped over last.
/// Only a successful [`move_next`] or [`move_prev`] makes an element
/// available to [`remove`] and [`replace`]; an insertion or a removal
/// consumes it.
///
/// A `CursorMut` borrows the list mutably, so no other cursor can observe
/// the list while it is alive. [`CursorMut::view`] temporarily reads the
/// list through the cursor.
///
/// # Examples
///
/// ```compile_fail
/// use cursor_list::List;
///
/// let mut list = List::new();
/// list.push_back(1);
/// let mut cursor = list.cursor_start_mut();
/// println!("{:?}", list.front());
/// cursor.insert(0);
/// ```
///
/// [`move_next`]: CursorMut::move_next
/// [`move_prev`]: CursorMut::move_prev
/// [`remove`]: CursorMut::remove
/// [`replace`]: CursorMut::replace
pub struct CursorMut<'a, T: 'a> {
    index: usize,
    next: Link,
    prev: Link,
    last: Option<LastMove>,
    list: &'a mut List<T>,
}

macro_rules! impl_cursor {
    ($CURSOR:ident) => {
        // Private methods
        impl<'a, T: 'a> $CURSOR<'a, T> {
            /// Step over the next node and return its id, or return `None`
            /// (leaving the cursor untouched) at the end of the list.
            fn step_forward(&mut self) -> Option<NodeId> {
                #[cfg(feature = "length")]
                debug_assert!(self.index <= self.list.len, "cursor index out of bounds");
                let id = self.next?;
                self.prev = Some(id);
                self.next = self.list.node(id).next;
                self.index += 1;
                Some(id)
            }

            /// Step over the previous node and return its id, or return `None`
            /// (leaving the cursor untouched) at the start of the list.
            fn step_backward(&mut self) -> Option<NodeId> {
                #[cfg(feature = "length")]
                debug_assert!(self.index <= self.list.len, "cursor index out of bounds");
                let id = self.prev?;
                self.next = Some(id);
                self.prev = self.list.node(id).prev;
                self.index -= 1;
                Some(id)
            }

            /// Move forward by at most `steps`, stopping at the end of the list.
            pub(crate) fn seek_forward(&mut self, steps: usize) {
                let mut taken = 0;
                while taken < steps && self.step_forward().is_some() {
                    taken += 1;
                }
            }
        }

        impl<'a, T: 'a> $CURSOR<'a, T> {
            /// Returns `true` if there is an element after the cursor.
            pub fn has_next(&self) -> bool {
                self.next.is_some()
            }

            /// Returns `true` if there is an element before the cursor.
            pub fn has_previous(&self) -> bool {
                self.prev.is_some()
            }

            /// Returns the index of the element a [`move_next`](Self::move_next)
            /// would yield, which is the number of elements before the cursor.
            pub fn next_index(&self) -> usize {
                self.index
            }

            /// Returns the index of the element a [`move_prev`](Self::move_prev)
            /// would yield, or `None` at the start of the list.
            pub fn previous_index(&self) -> Option<usize> {
                self.index.checked_sub(1)
            }

            /// Returns the length of the underlying `List`. See [`List::len`].
            pub fn len(&self) -> usize {
                self.list.len()
            }

            /// Returns `true` if the `List` is empty. See [`List::is_empty`].
            pub fn is_empty(&self) -> bool {
                self.list.is_empty()
            }

            /// Returns the element after the cursor without moving.
            pub fn peek_next(&self) -> Option<&T> {
                self.next.map(|id| &self.list.node(id).element)
            }

            /// Returns the element before the cursor without moving.
            pub fn peek_prev(&self) -> Option<&T> {
                self.prev.map(|id| &self.list.node(id).element)
            }
        }

        impl<'a, T: 'a> ListCursor for $CURSOR<'a, T> {
            type Item = T;

            fn has_next(&self) -> bool {
                $CURSOR::has_next(self)
            }

            fn has_previous(&self) -> bool {
                $CURSOR::has_previous(self)
            }

            fn move_next(&mut self) -> Option<&T> {
                $CURSOR::move_next(self)
            }

            fn move_prev(&mut self) -> Option<&T> {
                $CURSOR::move_prev(self)
            }

            fn next_index(&self) -> usize {
                $CURSOR::next_index(self)
            }

            fn previous_index(&self) -> Option<usize> {
                $CURSOR::previous_index(self)
            }
        }

        impl<'a, T: fmt::Debug + 'a> fmt::Debug for $CURSOR<'a, T> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($CURSOR))
                    .field("list", &self.list)
                    .field("index", &self.index)
                    .field("next", &self.peek_next())
                    .field("prev", &self.peek_prev())
                    .finish()
            }
        }
    };
}

impl_cursor!(CursorMut);
impl_cursor!(Cursor);

impl<'a, T: 'a> Clone for Cursor<'a, T> {
    fn clone(&self) -> Self {
        Self {
            index: self.index,
            next: self.next,
            prev: self.prev,
            list: self.list,
        }
    }
}

impl<'a, T: 'a> Cursor<'a, T> {
    pub(crate) fn new(list: &'a List<T>) -> Self {
        Self {
            index: 0,
            next: list.front_node(),
            prev: None,
            list,
        }
    }

    /// Move the cursor forward and return the element it stepped over, or
    /// return `None` at the end of the list.
    ///
    /// This operation should compute in *O*(1) time.
    pub fn move_next(&mut self) -> Option<&'a T> {
        let list = self.list;
        self.step_forward().map(|id| &list.node(id).element)
    }

    /// Move the cursor backward and return the element it stepped over, or
    /// return `None` at the start of the list.
    ///
    /// This operation should compute in *O*(1) time.
    pub fn move_prev(&mut self) -> Option<&'a T> {
        let list = self.list;
        self.step_backward().map(|id| &list.node(id).element)
    }
}

impl<'a, T: 'a> CursorMut<'a, T> {
    pub(crate) fn new(list: &'a mut List<T>) -> Self {
        Self {
            index: 0,
            next: list.front_node(),
            prev: None,
            last: None,
            list,
        }
    }

    /// The element available to `remove`/`replace`, checking the
    /// preconditions both operations share.
    fn last_returned(&self, op: &str) -> Result<LastMove> {
        if self.list.is_empty() {
            debug!("`{}` rejected: the list is empty", op);
            return Err(ListError::Unsupported);
        }
        self.last.ok_or_else(|| {
            debug!("`{}` rejected: no element was returned since the last edit", op);
            ListError::InvalidState
        })
    }

    /// Move the cursor forward and return the element it stepped over, or
    /// return `None` at the end of the list.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    ///
    /// let mut cursor = list.cursor_start_mut();
    /// assert_eq!(cursor.move_next(), Some(&1));
    /// assert_eq!(cursor.next_index(), 1);
    ///
    /// // At the end: nothing happens
    /// assert_eq!(cursor.move_next(), None);
    /// assert_eq!(cursor.next_index(), 1);
    /// ```
    pub fn move_next(&mut self) -> Option<&T> {
        let id = self.step_forward()?;
        self.last = Some(LastMove::Forward(id));
        Some(&self.list.node(id).element)
    }

    /// Move the cursor backward and return the element it stepped over, or
    /// return `None` at the start of the list.
    ///
    /// This operation should compute in *O*(1) time.
    pub fn move_prev(&mut self) -> Option<&T> {
        let id = self.step_backward()?;
        self.last = Some(LastMove::Backward(id));
        Some(&self.list.node(id).element)
    }

    /// Returns a mutable reference to the element after the cursor without
    /// moving.
    ///
    /// Writing through it does not make the element available to `remove`
    /// or `replace`; only a move does.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// list.push_back(2);
    /// let mut cursor = list.cursor_mut(1).unwrap();
    ///
    /// if let Some(next) = cursor.peek_next_mut() {
    ///     *next *= 10;
    /// }
    /// if let Some(prev) = cursor.peek_prev_mut() {
    ///     *prev += 5;
    /// }
    /// assert!(cursor.remove().is_err());
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![6, 20]);
    /// ```
    pub fn peek_next_mut(&mut self) -> Option<&mut T> {
        let id = self.next?;
        Some(&mut self.list.node_mut(id).element)
    }

    /// Returns a mutable reference to the element before the cursor without
    /// moving. See [`CursorMut::peek_next_mut`].
    pub fn peek_prev_mut(&mut self) -> Option<&mut T> {
        let id = self.prev?;
        Some(&mut self.list.node_mut(id).element)
    }

    /// Re-borrow the mutable cursor as a short-lived immutable one.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor {
            index: self.index,
            next: self.next,
            prev: self.prev,
            list: &*self.list,
        }
    }

    /// Temporarily view the list via an immutable reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// let mut cursor = list.cursor_end_mut();
    ///
    /// cursor.insert(2);
    /// assert_eq!(cursor.view().front(), Some(&1));
    /// assert_eq!(cursor.view().len(), 2);
    /// ```
    pub fn view(&self) -> &List<T> {
        &*self.list
    }
}

// Methods that might change the linking structure of the list.
impl<'a, T: 'a> CursorMut<'a, T> {
    /// Insert an element into the gap of the cursor.
    ///
    /// The new element ends up before the cursor: a following
    /// [`move_next`] is unaffected, and a following [`move_prev`] yields the
    /// new element. The index of the cursor becomes `index + 1`. In an empty
    /// list, the new element becomes the only one.
    ///
    /// After an insertion, [`remove`] and [`replace`] fail until the cursor
    /// moves again.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// list.push_back(3);
    /// let mut cursor = list.cursor_mut(1).unwrap();
    ///
    /// cursor.insert(2); // becomes [1, 2, 3]
    /// assert_eq!(cursor.next_index(), 2);
    /// assert_eq!(cursor.peek_next(), Some(&3));
    /// assert!(cursor.remove().is_err());
    ///
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    /// ```
    ///
    /// [`move_next`]: CursorMut::move_next
    /// [`move_prev`]: CursorMut::move_prev
    /// [`remove`]: CursorMut::remove
    /// [`replace`]: CursorMut::replace
    pub fn insert(&mut self, item: T) {
        let id = self.list.attach_node(self.prev, self.next, item);
        self.prev = Some(id);
        self.index += 1;
        self.last = None;
    }

    /// Remove the element returned by the last [`move_next`] or
    /// [`move_prev`] and return it.
    ///
    /// If that element was before the cursor, the index of the cursor becomes
    /// `index - 1`; otherwise it stays put.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Errors
    ///
    /// - [`ListError::Unsupported`] if the list is empty;
    /// - [`ListError::InvalidState`] if the cursor has not moved since it was
    ///   created, or since the last insertion or removal.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::{List, ListError};
    ///
    /// let mut list = List::new();
    /// list.push_back('a');
    /// list.push_back('b');
    /// list.push_back('c');
    /// let mut cursor = list.cursor_mut(1).unwrap();
    ///
    /// assert_eq!(cursor.move_next(), Some(&'b'));
    /// assert_eq!(cursor.remove(), Ok('b')); // becomes [a, c]
    /// assert_eq!(cursor.next_index(), 1);
    ///
    /// // Only once per move
    /// assert_eq!(cursor.remove(), Err(ListError::InvalidState));
    /// ```
    ///
    /// [`move_next`]: CursorMut::move_next
    /// [`move_prev`]: CursorMut::move_prev
    pub fn remove(&mut self) -> Result<T> {
        let last = self.last_returned("remove")?;
        self.last = None;
        let node = self.list.detach_node(last.node());
        match last {
            LastMove::Forward(id) => {
                debug_assert_eq!(self.prev, Some(id));
                self.prev = node.prev;
                self.index -= 1;
            }
            LastMove::Backward(id) => {
                debug_assert_eq!(self.next, Some(id));
                self.next = node.next;
            }
        }
        Ok(node.element)
    }

    /// Replace the element returned by the last [`move_next`] or
    /// [`move_prev`], and return the old one. The cursor does not move, and
    /// the element stays available to `remove` and `replace`.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Errors
    ///
    /// The same as [`CursorMut::remove`].
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back("a");
    /// let mut cursor = list.cursor_start_mut();
    ///
    /// assert_eq!(cursor.move_next(), Some(&"a"));
    /// assert_eq!(cursor.replace("z"), Ok("a"));
    /// assert_eq!(list.front(), Some(&"z"));
    /// ```
    ///
    /// [`move_next`]: CursorMut::move_next
    /// [`move_prev`]: CursorMut::move_prev
    pub fn replace(&mut self, item: T) -> Result<T> {
        let last = self.last_returned("replace")?;
        let node = self.list.node_mut(last.node());
        Ok(std::mem::replace(&mut node.element, item))
    }
}

impl<'a, T: 'a> ListCursorMut for CursorMut<'a, T> {
    fn insert(&mut self, item: T) {
        CursorMut::insert(self, item)
    }

    fn remove(&mut self) -> Result<T> {
        CursorMut::remove(self)
    }

    fn replace(&mut self, item: T) -> Result<T> {
        CursorMut::replace(self, item)
    }
}

#[cfg(test)]
mod tests {
    use crate::list::List;
    use crate::ListError;

    fn list_of<T, I: IntoIterator<Item = T>>(items: I) -> List<T> {
        let mut list = List::new();
        items.into_iter().for_each(|item| list.push_back(item));
        list
    }

    fn items<T: Clone>(list: &List<T>) -> Vec<T> {
        list.iter().cloned().collect()
    }

    #[test]
    fn empty_list_cursor() {
        let mut list = List::<i32>::new();
        let mut cursor = list.cursor_mut(0).unwrap();
        assert!(!cursor.has_next());
        assert!(!cursor.has_previous());
        assert_eq!(cursor.move_next(), None);
        assert_eq!(cursor.move_prev(), None);
        assert_eq!(cursor.next_index(), 0);
        assert_eq!(cursor.previous_index(), None);
        assert_eq!(cursor.remove(), Err(ListError::Unsupported));
        assert_eq!(cursor.replace(1), Err(ListError::Unsupported));
    }

    #[test]
    fn insert_into_empty_then_read() {
        let mut list = List::new();
        list.cursor_mut(0).unwrap().insert("x");
        assert_eq!(list.len(), 1);
        let mut cursor = list.cursor_mut(0).unwrap();
        assert_eq!(cursor.move_next(), Some(&"x"));
        assert_eq!(list.check_links(), 1);
    }

    #[test]
    fn remove_after_move_next() {
        let mut list = list_of(['a', 'b', 'c']);
        let mut cursor = list.cursor_mut(1).unwrap();
        assert_eq!(cursor.move_next(), Some(&'b'));
        assert_eq!(cursor.next_index(), 2);
        assert_eq!(cursor.remove(), Ok('b'));
        assert_eq!(cursor.next_index(), 1);
        assert_eq!(cursor.peek_prev(), Some(&'a'));
        assert_eq!(cursor.peek_next(), Some(&'c'));
        assert_eq!(items(&list), vec!['a', 'c']);
        assert_eq!(list.len(), 2);
        assert_eq!(list.check_links(), 2);
    }

    #[test]
    fn replace_single_element() {
        let mut list = list_of(["a"]);
        let mut cursor = list.cursor_mut(0).unwrap();
        assert_eq!(cursor.move_next(), Some(&"a"));
        assert_eq!(cursor.replace("z"), Ok("a"));
        // replace keeps the element available
        assert_eq!(cursor.replace("y"), Ok("z"));
        assert_eq!(items(&list), vec!["y"]);
    }

    #[test]
    fn remove_head_after_move_prev() {
        let mut list = list_of(['a', 'b']);
        let mut cursor = list.cursor_mut(1).unwrap();
        assert_eq!(cursor.move_prev(), Some(&'a'));
        assert_eq!(cursor.next_index(), 0);
        assert_eq!(cursor.remove(), Ok('a'));
        assert_eq!(cursor.next_index(), 0);
        assert!(!cursor.has_previous());
        assert_eq!(cursor.move_next(), Some(&'b'));
        assert_eq!(items(&list), vec!['b']);
        assert_eq!(list.front(), Some(&'b'));
        assert_eq!(list.check_links(), 1);
    }

    #[test]
    fn remove_tail_after_move_next() {
        let mut list = list_of([1, 2, 3]);
        let mut cursor = list.cursor_mut(2).unwrap();
        assert_eq!(cursor.move_next(), Some(&3));
        assert_eq!(cursor.remove(), Ok(3));
        assert!(!cursor.has_next());
        assert_eq!(cursor.next_index(), 2);
        assert_eq!(items(&list), vec![1, 2]);
        assert_eq!(list.check_links(), 2);
    }

    #[test]
    fn remove_twice_is_invalid() {
        let mut list = list_of([1, 2, 3]);
        let mut cursor = list.cursor_mut(0).unwrap();
        cursor.move_next();
        assert_eq!(cursor.remove(), Ok(1));
        assert_eq!(cursor.remove(), Err(ListError::InvalidState));
        assert_eq!(cursor.replace(9), Err(ListError::InvalidState));
        cursor.move_next();
        assert_eq!(cursor.remove(), Ok(2));
        assert_eq!(items(&list), vec![3]);
    }

    #[test]
    fn fresh_cursor_has_nothing_to_remove() {
        let mut list = list_of([1, 2, 3]);
        let mut cursor = list.cursor_mut(2).unwrap();
        assert_eq!(cursor.remove(), Err(ListError::InvalidState));
        assert_eq!(cursor.replace(0), Err(ListError::InvalidState));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn failed_move_keeps_last_returned() {
        let mut list = list_of([1]);
        let mut cursor = list.cursor_start_mut();
        assert_eq!(cursor.move_next(), Some(&1));
        assert_eq!(cursor.move_next(), None);
        assert_eq!(cursor.replace(5), Ok(1));
        assert_eq!(items(&list), vec![5]);
    }

    #[test]
    fn insert_consumes_last_returned() {
        let mut list = list_of([1, 3]);
        let mut cursor = list.cursor_start_mut();
        cursor.move_next();
        cursor.insert(2);
        assert_eq!(cursor.remove(), Err(ListError::InvalidState));
        assert_eq!(cursor.replace(0), Err(ListError::InvalidState));
        assert_eq!(items(&list), vec![1, 2, 3]);
    }

    #[test]
    fn insert_round_trip() {
        let mut list = list_of([10, 20, 30]);
        let mut cursor = list.cursor_mut(1).unwrap();
        cursor.insert(15);
        assert_eq!(cursor.next_index(), 2);
        assert_eq!(cursor.previous_index(), Some(1));
        assert_eq!(cursor.move_next(), Some(&20));
        assert_eq!(cursor.move_prev(), Some(&20));
        assert_eq!(cursor.move_prev(), Some(&15));
        assert_eq!(cursor.move_prev(), Some(&10));
        assert_eq!(cursor.move_prev(), None);
        assert_eq!(items(&list), vec![10, 15, 20, 30]);
        assert_eq!(list.check_links(), 4);
    }

    #[test]
    fn insert_at_both_ends() {
        let mut list = list_of([2]);
        let mut cursor = list.cursor_start_mut();
        cursor.insert(1);
        assert_eq!(cursor.move_prev(), Some(&1));
        assert_eq!(cursor.view().front(), Some(&1));

        let mut cursor = list.cursor_end_mut();
        cursor.insert(3);
        assert!(!cursor.has_next());
        cursor.insert(4);
        assert_eq!(cursor.next_index(), 4);
        assert_eq!(items(&list), vec![1, 2, 3, 4]);
        assert_eq!(list.check_links(), 4);
    }

    #[test]
    fn insert_after_remove_between() {
        let mut list = list_of(['a', 'b', 'c']);
        let mut cursor = list.cursor_end_mut();
        assert_eq!(cursor.move_prev(), Some(&'c'));
        assert_eq!(cursor.move_prev(), Some(&'b'));
        assert_eq!(cursor.remove(), Ok('b'));
        assert_eq!(cursor.next_index(), 1);
        cursor.insert('x');
        assert_eq!(cursor.peek_next(), Some(&'c'));
        assert_eq!(items(&list), vec!['a', 'x', 'c']);
        assert_eq!(list.check_links(), 3);
    }

    #[test]
    fn drain_through_cursor() {
        let mut list = list_of(0..6);
        let mut cursor = list.cursor_start_mut();
        let mut removed = Vec::new();
        while cursor.move_next().is_some() {
            removed.push(cursor.remove().unwrap());
        }
        assert_eq!(removed, vec![0, 1, 2, 3, 4, 5]);
        assert!(list.is_empty());
        assert_eq!(list.check_links(), 0);
    }

    #[test]
    fn read_only_cursor_walks_both_ways() {
        let list = list_of([1, 2, 3]);
        let mut cursor = list.cursor(1).unwrap();
        let second = cursor.move_next();
        let third = cursor.move_next();
        assert_eq!((second, third), (Some(&2), Some(&3)));
        assert_eq!(cursor.move_next(), None);
        assert_eq!(cursor.move_prev(), Some(&3));
        assert_eq!(cursor.previous_index(), Some(1));
        assert_eq!(cursor.len(), 3);
    }

    #[test]
    fn cursor_debug() {
        let mut list = list_of([1, 2]);
        let cursor = list.cursor_mut(1).unwrap();
        assert_eq!(
            format!("{:?}", cursor),
            "CursorMut { list: [1, 2], index: 1, next: Some(2), prev: Some(1) }"
        );
        assert_eq!(
            format!("{:?}", cursor.as_cursor()),
            "Cursor { list: [1, 2], index: 1, next: Some(2), prev: Some(1) }"
        );
    }

    #[test]
    fn peek_mut_edits_in_place() {
        let mut list = list_of([String::from("a"), String::from("b")]);
        let mut cursor = list.cursor_start_mut();
        assert_eq!(cursor.peek_prev_mut(), None);
        cursor.peek_next_mut().unwrap().push('1');
        assert_eq!(cursor.remove(), Err(ListError::InvalidState));

        assert_eq!(cursor.move_next().map(String::as_str), Some("a1"));
        cursor.peek_prev_mut().unwrap().push('2');
        cursor.peek_next_mut().unwrap().push('3');
        assert_eq!(cursor.remove(), Ok(String::from("a12")));

        assert_eq!(cursor.move_next().map(String::as_str), Some("b3"));
        assert_eq!(cursor.peek_next_mut(), None);
        assert_eq!(items(&list), vec![String::from("b3")]);
        assert_eq!(list.check_links(), 1);
    }

    #[test]
    fn read_only_view_leaves_last_returned_alone() {
        let mut list = list_of([1, 2, 3]);
        let mut cursor = list.cursor_mut(1).unwrap();
        assert_eq!(cursor.move_next(), Some(&2));
        {
            let mut view = cursor.as_cursor();
            assert_eq!(view.move_prev(), Some(&2));
            assert_eq!(view.move_prev(), Some(&1));
            assert_eq!(view.move_prev(), None);
        }
        assert_eq!(cursor.next_index(), 2);
        assert_eq!(cursor.remove(), Ok(2));
        assert_eq!(items(&list), vec![1, 3]);
    }
}
