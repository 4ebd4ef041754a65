use std::fmt::{Debug, Formatter};

use log::{debug, trace};

use crate::error::{ListError, Result};
use crate::list::cursor::{Cursor, CursorMut};
use crate::sequential::SequentialList;
use crate::{IntoIter, Iter, IterMut};

pub mod cursor;
pub mod iterator;

/// Stable address of a node in the arena of a list.
pub(crate) type NodeId = usize;

/// A link to a neighbouring node, or `None` at either end of the chain.
pub(crate) type Link = Option<NodeId>;

/// The `List` is a doubly-linked list whose nodes live in an arena owned by
/// the list. Links between nodes are arena indices, so the list never holds
/// a raw pointer and needs no `unsafe` code.
///
/// The chain is linear (not cyclic): the first node has no `prev` link and
/// the last node has no `next` link. The list only remembers its first node;
/// reaching the end of the list takes *O*(*n*) time.
///
/// Every structural change of the chain goes through a [`CursorMut`]. The
/// convenience methods such as [`List::push_back`] or [`List::remove`] open
/// a cursor and act through it.
///
/// The `List` contains:
/// - the node arena, whose vacant slots form a free list and are reused;
/// - the link `first` to the first node, or `None` if the list is empty;
/// - a length field `len`. It can be disabled by disabling the `length`
///   feature in your `Cargo.toml`, in which case [`List::len`] counts the
///   nodes by traversal:
/// ```text
/// [dependencies]
/// cursor_list = { default-features = false }
/// ```
pub struct List<T> {
    slots: Vec<Slot<T>>,
    free: Link,
    first: Link,
    #[cfg(feature = "length")]
    /// the length of the list
    pub(crate) len: usize,
}

pub(crate) struct Node<T> {
    pub(crate) next: Link,
    pub(crate) prev: Link,
    pub(crate) element: T,
}

enum Slot<T> {
    Occupied(Node<T>),
    Vacant { next_free: Link },
}

// private methods
impl<T> List<T> {
    pub(crate) fn front_node(&self) -> Link {
        self.first
    }

    fn back_node(&self) -> Link {
        let mut id = self.first?;
        while let Some(next) = self.node(id).next {
            id = next;
        }
        Some(id)
    }

    /// Mutable references to every element, in list order.
    pub(crate) fn elements_mut(&mut self) -> Vec<&mut T> {
        let mut rank = vec![None; self.slots.len()];
        let mut count = 0;
        let mut link = self.first;
        while let Some(id) = link {
            rank[id] = Some(count);
            count += 1;
            link = self.node(id).next;
        }
        let mut ordered: Vec<Option<&mut T>> = Vec::with_capacity(count);
        ordered.resize_with(count, || None);
        for (slot, rank) in self.slots.iter_mut().zip(rank) {
            if let Slot::Occupied(node) = slot {
                if let Some(rank) = rank {
                    ordered[rank] = Some(&mut node.element);
                }
            }
        }
        ordered.into_iter().flatten().collect()
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node<T> {
        match &self.slots[id] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => panic!("link to vacant arena slot {}", id),
        }
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        match &mut self.slots[id] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => panic!("link to vacant arena slot {}", id),
        }
    }

    /// Store `node` in a vacant slot (or a new one) and return its id.
    fn alloc(&mut self, node: Node<T>) -> NodeId {
        match self.free {
            Some(id) => {
                match std::mem::replace(&mut self.slots[id], Slot::Occupied(node)) {
                    Slot::Vacant { next_free } => self.free = next_free,
                    Slot::Occupied(_) => panic!("free list points at occupied slot {}", id),
                }
                id
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                self.slots.len() - 1
            }
        }
    }

    /// Take the node out of its slot and push the slot on the free list.
    fn release(&mut self, id: NodeId) -> Node<T> {
        let vacant = Slot::Vacant {
            next_free: self.free,
        };
        match std::mem::replace(&mut self.slots[id], vacant) {
            Slot::Occupied(node) => {
                self.free = Some(id);
                node
            }
            Slot::Vacant { .. } => panic!("released vacant arena slot {}", id),
        }
    }

    /// Make `prev` and `next` neighbours. A missing side is a no-op, except
    /// that a missing `prev` makes `next` the first node.
    fn connect(&mut self, prev: Link, next: Link) {
        match prev {
            Some(prev) => self.node_mut(prev).next = next,
            None => self.first = next,
        }
        if let Some(next) = next {
            self.node_mut(next).prev = prev;
        }
    }

    /// Attach a new node holding `element` between `prev` and `next`, which
    /// must be adjacent (checked only in `#[cfg(debug_assertions)]`).
    pub(crate) fn attach_node(&mut self, prev: Link, next: Link, element: T) -> NodeId {
        #[cfg(debug_assertions)]
        self.assert_adjacent(prev, next);
        let id = self.alloc(Node {
            next,
            prev,
            element,
        });
        self.connect(prev, Some(id));
        self.connect(Some(id), next);
        #[cfg(feature = "length")]
        {
            self.len += 1;
        }
        trace!("attached node {} between {:?} and {:?}", id, prev, next);
        id
    }

    /// Detach the node `id` from the chain and return it.
    ///
    /// The neighbours of a head or tail node are guarded individually, so
    /// detaching either end never follows a missing link.
    pub(crate) fn detach_node(&mut self, id: NodeId) -> Node<T> {
        let node = self.release(id);
        self.connect(node.prev, node.next);
        #[cfg(feature = "length")]
        {
            self.len -= 1;
        }
        trace!("detached node {} from between {:?} and {:?}", id, node.prev, node.next);
        node
    }

    #[cfg(debug_assertions)]
    fn assert_adjacent(&self, prev: Link, next: Link) {
        match prev {
            Some(prev) => assert_eq!(self.node(prev).next, next),
            None => assert_eq!(self.first, next),
        }
        if let Some(next) = next {
            assert_eq!(self.node(next).prev, prev);
        }
    }

    #[cfg(not(feature = "length"))]
    fn count_nodes(&self) -> usize {
        let mut count = 0;
        let mut link = self.first;
        while let Some(id) = link {
            count += 1;
            link = self.node(id).next;
        }
        count
    }

    /// Walk the chain, asserting the link invariants, and return the number
    /// of reachable nodes.
    #[cfg(test)]
    pub(crate) fn check_links(&self) -> usize {
        let live = self
            .slots
            .iter()
            .filter(|slot| matches!(slot, Slot::Occupied(_)))
            .count();
        let mut count = 0;
        let mut prev = None;
        let mut link = self.first;
        while let Some(id) = link {
            assert!(count < live, "cycle detected in the chain");
            let node = self.node(id);
            assert_eq!(node.prev, prev, "broken back link at node {}", id);
            count += 1;
            prev = Some(id);
            link = node.next;
        }
        assert_eq!(count, live, "unreachable nodes left in the arena");
        count
    }
}

impl<T> List<T> {
    /// Create an empty `List`
    ///
    /// # Examples
    /// ```
    /// use cursor_list::List;
    /// let list: List<u32> = List::new();
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: None,
            first: None,
            #[cfg(feature = "length")]
            len: 0,
        }
    }

    /// Returns `true` if the `List` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_front("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    /// Returns the length of the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time with the `length` feature,
    /// and in *O*(*n*) time without it.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.len(), 1);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    ///
    /// list.push_back(3);
    /// assert_eq!(list.len(), 3);
    /// ```
    #[cfg(feature = "length")]
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[cfg(not(feature = "length"))]
    pub fn len(&self) -> usize {
        self.count_nodes()
    }

    /// Removes all elements from the `List`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_front(2);
    /// list.push_front(1);
    ///
    /// list.clear();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.front(), None);
    /// ```
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Provides a reference to the front element, or `None` if the list is
    /// empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.cursor_start().move_next()
    }

    /// Provides a reference to the back element, or `None` if the list is
    /// empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time, since the list only
    /// links to its first node.
    pub fn back(&self) -> Option<&T> {
        self.cursor_end().move_prev()
    }

    /// Provides a mutable reference to the front element, or `None` if the
    /// list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.front_mut(), None);
    ///
    /// list.push_back(1);
    /// if let Some(front) = list.front_mut() {
    ///     *front = 5;
    /// }
    /// assert_eq!(list.front(), Some(&5));
    /// ```
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        let id = self.first?;
        Some(&mut self.node_mut(id).element)
    }

    /// Provides a mutable reference to the back element, or `None` if the
    /// list is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        let id = self.back_node()?;
        Some(&mut self.node_mut(id).element)
    }

    /// Provides a reference to the element at `at`, or `None` if `at` is out
    /// of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back('a');
    /// list.push_back('b');
    /// assert_eq!(list.get(1), Some(&'b'));
    /// assert_eq!(list.get(2), None);
    /// ```
    pub fn get(&self, at: usize) -> Option<&T> {
        self.cursor(at).ok()?.move_next()
    }

    /// Adds an element first in the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_front(2);
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    pub fn push_front(&mut self, elt: T) {
        self.cursor_start_mut().insert(elt);
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let mut cursor = self.cursor_start_mut();
        cursor.move_next()?;
        cursor.remove().ok()
    }

    /// Appends an element to the back of the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    pub fn push_back(&mut self, elt: T) {
        self.cursor_end_mut().insert(elt);
    }

    /// Removes the last element and returns it, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_back(), None);
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.pop_back(), Some(3));
    /// assert_eq!(list.pop_back(), Some(1));
    /// assert_eq!(list.pop_back(), None);
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        let mut cursor = self.cursor_end_mut();
        cursor.move_prev()?;
        cursor.remove().ok()
    }

    /// Create a read-only cursor before the element at `at`, i.e. a cursor
    /// whose [`Cursor::move_next`] yields element `at` and whose
    /// [`Cursor::move_prev`] yields element `at - 1`.
    ///
    /// The cursor is found by starting at the head and moving forward `at`
    /// times, so this operation should compute in *O*(`at`) time.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::OutOfRange`] if `at > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::{List, ListError};
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// let mut cursor = list.cursor(1).unwrap();
    /// assert_eq!(cursor.move_next(), Some(&2));
    ///
    /// assert_eq!(
    ///     list.cursor(3).unwrap_err(),
    ///     ListError::OutOfRange { index: 3, len: 2 }
    /// );
    /// ```
    pub fn cursor(&self, at: usize) -> Result<Cursor<'_, T>> {
        let len = self.len();
        if at > len {
            debug!("rejected cursor at {} for a list of length {}", at, len);
            return Err(ListError::OutOfRange { index: at, len });
        }
        let mut cursor = self.cursor_start();
        cursor.seek_forward(at);
        trace!("opened cursor at {}", at);
        Ok(cursor)
    }

    /// Create a read-only cursor before the first element.
    pub fn cursor_start(&self) -> Cursor<'_, T> {
        Cursor::new(self)
    }

    /// Create a read-only cursor after the last element.
    pub fn cursor_end(&self) -> Cursor<'_, T> {
        let mut cursor = self.cursor_start();
        cursor.seek_forward(usize::MAX);
        cursor
    }

    /// Create an editing cursor before the element at `at`. See
    /// [`List::cursor`] for the positioning rules.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::OutOfRange`] if `at > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back('a');
    /// list.push_back('c');
    ///
    /// let mut cursor = list.cursor_mut(1).unwrap();
    /// cursor.insert('b');
    /// assert_eq!(cursor.move_prev(), Some(&'b'));
    ///
    /// assert_eq!(list.iter().collect::<String>(), "abc");
    /// ```
    pub fn cursor_mut(&mut self, at: usize) -> Result<CursorMut<'_, T>> {
        let len = self.len();
        if at > len {
            debug!("rejected cursor at {} for a list of length {}", at, len);
            return Err(ListError::OutOfRange { index: at, len });
        }
        let mut cursor = self.cursor_start_mut();
        cursor.seek_forward(at);
        trace!("opened editing cursor at {}", at);
        Ok(cursor)
    }

    /// Create an editing cursor before the first element.
    pub fn cursor_start_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self)
    }

    /// Create an editing cursor after the last element.
    pub fn cursor_end_mut(&mut self) -> CursorMut<'_, T> {
        let mut cursor = self.cursor_start_mut();
        cursor.seek_forward(usize::MAX);
        cursor
    }

    /// Insert `elm` so that it becomes the element at `at`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::OutOfRange`] if `at > len`.
    pub fn insert(&mut self, at: usize, elm: T) -> Result<()> {
        self.insert_at(at, elm)
    }

    /// Remove the element at `at` and return it.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::OutOfRange`] if `at >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// list.push_back(2);
    /// list.push_back(3);
    ///
    /// assert_eq!(list.remove(1), Ok(2));
    /// assert!(list.remove(2).is_err());
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 3]);
    /// ```
    pub fn remove(&mut self, at: usize) -> Result<T> {
        self.remove_at(at)
    }

    /// Returns a double-ended iterator over the elements, front to back.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// list.push_back(2);
    /// list.push_back(3);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next_back(), Some(&3));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next_back(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Returns a double-ended iterator that allows modifying each element.
    ///
    /// # Complexity
    ///
    /// Creating the iterator takes *O*(*n*) time and space, since the
    /// elements are gathered in list order up front.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// for item in list.iter_mut() {
    ///     *item *= 10;
    /// }
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![10, 20]);
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.elements_mut())
    }
}

impl<T> SequentialList for List<T> {
    type Item = T;
    type Cursor<'a> = Cursor<'a, T> where Self: 'a;
    type CursorMut<'a> = CursorMut<'a, T> where Self: 'a;

    fn len(&self) -> usize {
        List::len(self)
    }

    fn list_cursor(&self, index: usize) -> Result<Cursor<'_, T>> {
        self.cursor(index)
    }

    fn list_cursor_mut(&mut self, index: usize) -> Result<CursorMut<'_, T>> {
        self.cursor_mut(index)
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut List<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}
