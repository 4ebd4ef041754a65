use crate::list::cursor::Cursor;
use crate::list::List;
use std::fmt;
use std::iter::FusedIterator;
use std::vec;

/// A double-ended iterator over the elements of a `List`.
///
/// It drives a read-only [`Cursor`] from each end and stops when the two
/// meet, so it borrows the list immutably for its whole lifetime.
///
/// # Examples
///
/// ```compile_fail
/// use cursor_list::List;
///
/// let mut list = List::new();
/// list.push_back(1);
/// let mut iter = list.iter();
///
/// // Won't compile, because list is already borrowed immutably.
/// list.push_back(4);
/// println!("{:?}", iter.next());
/// ```
pub struct Iter<'a, T: 'a> {
    list: &'a List<T>,
    front: Cursor<'a, T>,
    // Opened at the end of the list by the first `next_back`.
    back: Option<Cursor<'a, T>>,
}

impl<'a, T: 'a> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            front: self.front.clone(),
            back: self.back.clone(),
        }
    }
}

impl<'a, T: 'a> Iter<'a, T> {
    pub(crate) fn new(list: &'a List<T>) -> Self {
        Self {
            list,
            front: list.cursor_start(),
            back: None,
        }
    }

    /// The gap index where iteration from the front stops.
    #[cfg(feature = "length")]
    fn end_index(&self) -> usize {
        match &self.back {
            Some(back) => back.next_index(),
            None => self.list.len,
        }
    }

    fn exhausted(&self) -> bool {
        match &self.back {
            Some(back) => back.next_index() == self.front.next_index(),
            None => !self.front.has_next(),
        }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let next = if self.exhausted() {
            None
        } else {
            self.front.peek_next()
        };
        f.debug_tuple("Iter").field(&next).finish()
    }
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted() {
            return None;
        }
        self.front.move_next()
    }

    #[cfg(feature = "length")]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end_index() - self.front.next_index();
        (len, Some(len))
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<'a, T: 'a> DoubleEndedIterator for Iter<'a, T> {
    /// Step the back cursor over one element, opening it at the end of the
    /// list first if needed. Its first use takes *O*(*n*) time.
    fn next_back(&mut self) -> Option<Self::Item> {
        let list = self.list;
        let front = self.front.next_index();
        let back = self.back.get_or_insert_with(|| list.cursor_end());
        if back.next_index() == front {
            return None;
        }
        back.move_prev()
    }
}

#[cfg(feature = "length")]
impl<'a, T: 'a> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: 'a> FusedIterator for Iter<'a, T> {}

/// A mutable iterator over the elements of a `List`.
///
/// # Examples
///
/// `List` is not readable after an `IterMut` is created.
/// ```compile_fail
/// use cursor_list::List;
///
/// let mut list = List::new();
/// list.push_back(1);
/// let mut iter = list.iter_mut();
/// println!("{:?}", list.front());
/// println!("{:?}", iter.next());
/// ```
pub struct IterMut<'a, T: 'a> {
    elements: vec::IntoIter<&'a mut T>,
}

impl<'a, T: 'a> IterMut<'a, T> {
    pub(crate) fn new(elements: Vec<&'a mut T>) -> Self {
        Self {
            elements: elements.into_iter(),
        }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for IterMut<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IterMut")
            .field(&self.elements.as_slice())
            .finish()
    }
}

impl<'a, T: 'a> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.elements.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.elements.size_hint()
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<'a, T: 'a> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.elements.next_back()
    }
}

impl<'a, T: 'a> ExactSizeIterator for IterMut<'a, T> {}

impl<'a, T: 'a> FusedIterator for IterMut<'a, T> {}

/// An owning iterator over the elements of a `List`.
///
/// This `struct` is created by the [`into_iter`] method on [`List`]
/// (provided by the `IntoIterator` trait). See its documentation for more.
///
/// [`into_iter`]: List::into_iter
pub struct IntoIter<T> {
    list: List<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(list: List<T>) -> Self {
        Self { list }
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter")
            .field("list", &self.list)
            .finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    #[cfg(feature = "length")]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    /// Pops the back of the list, in *O*(*n*) time.
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back()
    }
}

#[cfg(feature = "length")]
impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

#[cfg(test)]
mod tests {
    use crate::list::List;

    #[test]
    fn iter_is_fused() {
        let mut list = List::new();
        list.push_back(1);
        list.push_back(2);
        let mut iter = list.iter();
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[cfg(feature = "length")]
    #[test]
    fn iter_exact_size() {
        let mut list = List::new();
        (0..4).for_each(|i| list.push_back(i));
        let mut iter = list.iter();
        assert_eq!(iter.len(), 4);
        iter.next();
        assert_eq!(iter.len(), 3);

        let mut into_iter = list.into_iter();
        into_iter.next();
        assert_eq!(into_iter.len(), 3);
    }

    #[test]
    fn iter_from_both_ends() {
        let mut list = List::new();
        (1..=5).for_each(|i| list.push_back(i));
        let mut iter = list.iter();
        assert_eq!(iter.next_back(), Some(&5));
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&4));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next(), Some(&3));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
        assert_eq!(format!("{:?}", iter), "Iter(None)");

        assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(), vec![5, 4, 3, 2, 1]);
        assert_eq!(list.iter().last(), Some(&5));
        assert_eq!(List::<i32>::new().iter().next_back(), None);
    }

    #[cfg(feature = "length")]
    #[test]
    fn iter_exact_size_from_both_ends() {
        let mut list = List::new();
        (0..4).for_each(|i| list.push_back(i));
        let mut iter = list.iter();
        iter.next_back();
        assert_eq!(iter.len(), 3);
        iter.next();
        assert_eq!(iter.len(), 2);
        iter.next_back();
        iter.next_back();
        assert_eq!(iter.len(), 0);
        assert_eq!(iter.next(), None);

        let mut into_iter = list.into_iter();
        assert_eq!(into_iter.next_back(), Some(3));
        assert_eq!(into_iter.len(), 3);
    }

    #[test]
    fn into_iter_from_both_ends() {
        let mut list = List::new();
        (0..4).for_each(|i| list.push_back(i));
        let mut into_iter = list.into_iter();
        assert_eq!(into_iter.next_back(), Some(3));
        assert_eq!(into_iter.next(), Some(0));
        assert_eq!(into_iter.rev().collect::<Vec<_>>(), vec![2, 1]);
    }

    #[test]
    fn iter_mut_writes_in_order() {
        let mut list = List::new();
        (0..3).for_each(|i| list.push_back(i));
        // Scatter the arena so slot order differs from list order.
        list.push_front(10);
        assert_eq!(list.remove(2), Ok(1));
        list.push_back(20);

        let mut iter = list.iter_mut();
        assert_eq!(iter.len(), 4);
        *iter.next().unwrap() += 1;
        *iter.next_back().unwrap() += 2;
        assert_eq!(format!("{:?}", iter), "IterMut([0, 2])");
        for item in iter {
            *item *= 100;
        }
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![11, 0, 200, 22]);

        for item in &mut list {
            *item = -*item;
        }
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![-11, 0, -200, -22]);
        assert_eq!(List::<i32>::new().iter_mut().next(), None);
    }

    #[test]
    fn iter_debug() {
        let mut list = List::new();
        list.push_back('a');
        list.push_back('b');
        let mut iter = list.iter();
        iter.next();
        assert_eq!(format!("{:?}", iter), "Iter(Some('b'))");
    }

    #[test]
    fn into_iter_drains_in_order() {
        let mut list = List::new();
        list.push_back(String::from("x"));
        list.push_back(String::from("y"));
        let drained: Vec<String> = list.into_iter().collect();
        assert_eq!(drained, vec!["x", "y"]);
    }
}
