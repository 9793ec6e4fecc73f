use crate::list::{prev_of, List, Node};
use std::fmt;
use std::iter::{FromIterator, FusedIterator};
use std::marker::PhantomData;
use std::ptr::NonNull;

/// An iterator over the elements of a `List`.
///
/// It uses a pair of nodes `start..end` to represent a half-open subrange
/// of the list, where `start` is inclusive and `end` is not.
///
/// Though the `Iter` does not hold a reference from the list,
/// it actually *borrows* (immutably) from the list, so a phantom
/// marker of `&'a List<T>` is added to protect the list from being
/// write.
///
/// # Examples
///
/// ```compile_fail
/// use sentinel_list::List;
/// use std::iter::FromIterator;
///
/// let mut list = List::from_iter([1, 2, 3]);
/// let mut iter = list.iter();
///
/// // Won't compile, because list is already borrowed immutably.
/// list.push_back(4);
/// println!("{:?}", iter.next());
/// ```
pub struct Iter<'a, T: 'a> {
    start: NonNull<Node<T>>,
    end: NonNull<Node<T>>,
    len: usize,
    _marker: PhantomData<&'a List<T>>,
}

impl<'a, T: 'a> Iter<'a, T> {
    pub(crate) fn new(list: &'a List<T>) -> Self {
        Self {
            start: list.front_node(),
            end: list.sentinel_node(),
            len: list.len(),
            _marker: PhantomData,
        }
    }
}

impl<'a, T: 'a> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            start: self.start,
            end: self.end,
            len: self.len,
            _marker: PhantomData,
        }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;

    /// Return `*start` and reset the iterating range to `(start.next)..end`,
    /// or return `None` if `start..end` is already empty.
    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        // SAFETY: `start..end` is always a valid range of a list,
        // and it is not empty here, so `start` is not the sentinel node.
        let current = unsafe { self.start.as_ref() };
        self.start = current.next;
        self.len -= 1;
        Some(&current.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<'a, T: 'a> DoubleEndedIterator for Iter<'a, T> {
    /// Reset the iterating range to `start..(end.prev)` and return `*end`,
    /// or return `None` if `start..end` is already empty.
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        // SAFETY: `start..end` is always a valid range of a list,
        // and it is not empty here, so `end.prev` is an element node.
        let current = unsafe {
            self.end = prev_of(self.end);
            self.end.as_ref()
        };
        self.len -= 1;
        Some(&current.element)
    }
}

impl<'a, T: 'a> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: 'a> FusedIterator for Iter<'a, T> {}

/// A mutable iterator over the elements of a `List`.
///
/// `start..end` denotes a subrange of the list.
///
/// Though the `IterMut` does not hold a reference from the list,
/// it actually *borrows* (mutably) from the list, so a phantom
/// marker of `&'a mut List<T>` is added to protect the list from
/// begin read.
///
/// # Examples
///
/// `List` is not readable after an `IterMut` is created.
/// ```compile_fail
/// use sentinel_list::List;
/// use std::iter::FromIterator;
///
/// let mut list = List::from_iter([1, 2, 3]);
/// let mut iter = list.iter_mut();
/// println!("{:?}", list.back());
/// println!("{:?}", iter.next());
/// ```
pub struct IterMut<'a, T: 'a> {
    start: NonNull<Node<T>>,
    end: NonNull<Node<T>>,
    len: usize,
    _marker: PhantomData<&'a mut List<T>>,
}

impl<'a, T: 'a> IterMut<'a, T> {
    pub(crate) fn new(list: &'a mut List<T>) -> Self {
        Self {
            start: list.front_node(),
            end: list.sentinel_node(),
            len: list.len(),
            _marker: PhantomData,
        }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for IterMut<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_tuple("IterMut");
        let mut ptr = self.start;
        for _ in 0..self.len {
            // SAFETY: the `len` nodes from `start` are element nodes of the list.
            let current = unsafe { ptr.as_ref() };
            f.field(&current.element);
            ptr = current.next;
        }
        f.finish()
    }
}

impl<'a, T: 'a> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    /// Return `*start` and reset the iterating range to `(start.next)..end`,
    /// or return `None` if `start..end` is already empty.
    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        // SAFETY: `start..end` is always a valid range of a list,
        // and it is not empty here, so `start` is not the sentinel node.
        // Each node is yielded only once.
        let current = unsafe { self.start.as_mut() };
        self.start = current.next;
        self.len -= 1;
        Some(&mut current.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<'a, T: 'a> ExactSizeIterator for IterMut<'a, T> {}

impl<'a, T: 'a> FusedIterator for IterMut<'a, T> {}

impl<'a, T: 'a> DoubleEndedIterator for IterMut<'a, T> {
    /// Reset the iterating range to `start..(end.prev)` and return `*end`,
    /// or return `None` if `start..end` is already empty.
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        // SAFETY: `start..end` is always a valid range of a list,
        // and it is not empty here, so `end.prev` is an element node.
        // Each node is yielded only once.
        let current = unsafe {
            self.end = prev_of(self.end);
            self.end.as_mut()
        };
        self.len -= 1;
        Some(&mut current.element)
    }
}

/// An owning iterator over the elements of a `List`, created by
/// [`List::into_iter`].
///
/// It pops elements off either end of the list it took over, so the elements
/// not yet yielded are dropped along with it.
pub struct IntoIter<T> {
    rest: List<T>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.rest).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.rest.pop_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.rest.len, Some(self.rest.len))
    }

    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.rest.pop_back().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { rest: self }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut List<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        list.extend(iter);
        list
    }
}

/// Append the elements in order, before the sentinel node.
impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut cursor = self.cursor_end_mut();
        for item in iter {
            // `insert` lands on the new element, the sentinel is next to it.
            cursor.insert(item);
            cursor.move_next();
        }
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for List<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

unsafe impl<T: Sync> Send for Iter<'_, T> {}

unsafe impl<T: Sync> Sync for Iter<'_, T> {}

unsafe impl<T: Send> Send for IterMut<'_, T> {}

unsafe impl<T: Sync> Sync for IterMut<'_, T> {}

#[cfg(test)]
mod tests {
    use crate::List;
    use std::iter::FromIterator;

    /// Build a list holding `0..n` through cursor edits: every element is
    /// inserted next to a filler that is erased afterwards, so the nodes are
    /// not allocated in list order.
    fn edited_list(n: i32) -> List<i32> {
        let mut list = List::new();
        let mut cursor = list.cursor_end_mut();
        for i in (0..n).rev() {
            cursor.insert(-1);
            cursor.insert(i);
        }
        cursor.move_to_start();
        while !cursor.is_end() {
            if cursor.current() == Some(&-1) {
                assert_eq!(cursor.erase(), Ok(-1));
            } else {
                cursor.move_next();
            }
        }
        assert_eq!(list.len(), n as usize);
        list
    }

    fn check_both_ends(n: i32, mid: usize) {
        let expected = Vec::from_iter(0..n);
        let mut list = edited_list(n);

        let mut iter = list.iter();
        for (i, item) in expected.iter().enumerate() {
            assert_eq!(iter.next(), Some(item));
            assert_eq!(iter.len(), expected.len() - i - 1);
        }
        // Exhausted by length: the sentinel node is never yielded.
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);

        let mut iter = list.iter().rev();
        for item in expected.iter().rev() {
            assert_eq!(iter.next(), Some(item));
        }
        assert_eq!(iter.next(), None);

        // Both ends meet at `mid`.
        let mut iter = list.iter_mut();
        for &item in &expected[..mid] {
            assert_eq!(iter.next().map(|x| *x), Some(item));
        }
        for &item in expected[mid..].iter().rev() {
            assert_eq!(iter.next_back().map(|x| *x), Some(item));
        }
        assert_eq!(iter.len(), 0);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn iter_both_ends_after_cursor_edits() {
        let cases = [(10, 10), (10, 8), (10, 5), (10, 0), (2, 1), (1, 1), (1, 0), (0, 0)];
        for &(n, mid) in cases.iter() {
            check_both_ends(n, mid);
        }
    }

    #[test]
    fn iter_sees_interleaved_inserts_and_erases() {
        let mut list = List::from_iter(0..6);
        {
            let mut cursor = list.cursor_mut(2);
            assert_eq!(cursor.erase(), Ok(2));
            cursor.insert(20); // [0, 1, 20, 3, 4, 5]
            cursor.move_to_end();
            cursor.insert(60); // [0, 1, 20, 3, 4, 5, 60]
            cursor.move_to_start();
            assert_eq!(cursor.erase(), Ok(0)); // [1, 20, 3, 4, 5, 60]
        }
        let iter = list.iter();
        assert_eq!(iter.len(), 6);
        assert_eq!(Vec::from_iter(iter.copied()), vec![1, 20, 3, 4, 5, 60]);
        assert_eq!(list.iter().last(), Some(&60));
        assert_eq!(list.iter().rev().nth(4), Some(&20));

        for item in list.iter_mut().step_by(2) {
            *item = 0;
        }
        assert_eq!(Vec::from_iter(list), vec![0, 20, 0, 4, 0, 60]);
    }

    #[test]
    fn iter_mut_updates_elements() {
        let mut list = List::from_iter([1.1, 2.2, 3.3]);
        for item in &mut list {
            *item *= 2.0;
        }
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![2.2, 4.4, 6.6]);
    }

    #[test]
    fn into_iter_both_ends() {
        let list = List::from_iter(0..5);
        let mut iter = list.into_iter();
        assert_eq!(iter.len(), 5);
        assert_eq!(iter.next(), Some(0));
        assert_eq!(iter.next_back(), Some(4));
        assert_eq!(format!("{:?}", iter), "IntoIter([1, 2, 3])");
        assert_eq!(Vec::from_iter(iter), vec![1, 2, 3]);
    }

    #[test]
    fn extend_by_value_and_by_ref() {
        let mut list = List::from_iter([1, 2]);
        list.extend(vec![3, 4]);
        list.extend(&[5, 6]);
        assert_eq!(list.len(), 6);
        assert_eq!(list.back(), Ok(&6));
        assert_eq!(Vec::from_iter(&list), vec![&1, &2, &3, &4, &5, &6]);
    }

    #[test]
    fn iter_debug() {
        let mut list = List::from_iter([1, 2, 3]);
        assert_eq!(format!("{:?}", list.iter()), "[1, 2, 3]");
        let mut iter = list.iter_mut();
        iter.next();
        assert_eq!(format!("{:?}", iter), "IterMut(2, 3)");
    }
}
