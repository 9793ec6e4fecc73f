use crate::list::List;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::AddAssign;

/// Two lists are equal if they have the same length and their elements are
/// pairwise equal in order.
///
/// # Examples
///
/// ```
/// use sentinel_list::List;
/// use std::iter::FromIterator;
///
/// let mut a = List::from_iter([1.1, 2.2, 3.3]);
/// let mut b = List::from_iter([1.1, 2.2, 3.3]);
/// assert_eq!(a, b);
///
/// a.push_front(0.0);
/// b.push_front(0.0);
/// assert_eq!(a, b);
///
/// assert_eq!(a.pop_front(), Ok(0.0));
/// assert_ne!(a, b);
/// ```
impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: PartialOrd> PartialOrd for List<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for List<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    /// Overwrite `self` with a copy of `other`, reusing the nodes `self`
    /// already owns.
    fn clone_from(&mut self, other: &Self) {
        let mut cursor = self.cursor_start_mut();
        for elem_other in other {
            match cursor.current_mut() {
                Some(elem) => elem.clone_from(elem_other),
                None => cursor.insert(elem_other.clone()),
            }
            cursor.move_next();
        }
        let end = cursor.view().end_position();
        let erased = cursor.erase_until(end);
        debug_assert!(erased.is_ok());
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for elt in self {
            elt.hash(state);
        }
        self.len().hash(state);
    }
}

/// Append a copy of every element of `other` to the back of the list.
///
/// # Examples
///
/// ```
/// use sentinel_list::List;
/// use std::iter::FromIterator;
///
/// let mut list = List::from_iter([1, 2]);
/// let other = List::from_iter([3, 4]);
///
/// list += &other;
/// assert_eq!(Vec::from_iter(&list), vec![&1, &2, &3, &4]);
/// assert_eq!(other.len(), 2);
///
/// // Appending a list to a copy of itself doubles it.
/// let copy = list.clone();
/// list += &copy;
/// assert_eq!(list.len(), 8);
/// ```
impl<T: Clone> AddAssign<&List<T>> for List<T> {
    fn add_assign(&mut self, other: &List<T>) {
        self.extend(other.iter().cloned());
    }
}

impl<T> List<T> {
    /// Returns `true` if the `List` contains an element equal to the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }

    /// Remove every element equal to `value`, and return how many were removed.
    /// The remaining elements keep their order.
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 1, 3, 1]);
    /// assert_eq!(list.remove(&1), 3);
    /// assert_eq!(Vec::from_iter(&list), vec![&2, &3]);
    ///
    /// assert_eq!(list.remove(&1), 0);
    /// ```
    pub fn remove(&mut self, value: &T) -> usize
    where
        T: PartialEq<T>,
    {
        let mut removed = 0;
        let mut cursor = self.cursor_start_mut();
        while let Some(elem) = cursor.current() {
            if elem == value {
                let erased = cursor.erase();
                debug_assert!(erased.is_ok(), "the cursor is at an element node");
                removed += 1;
            } else {
                cursor.move_next();
            }
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use crate::List;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};
    use std::iter::FromIterator;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn list_remove_scenario() {
        let mut list = List::new();
        list.push_back(1.1);
        list.push_back(2.2);
        list.push_back(3.3);
        assert_eq!(list.len(), 3);
        assert_eq!(list.front(), Ok(&1.1));
        assert_eq!(list.back(), Ok(&3.3));

        assert_eq!(list.remove(&2.2), 1);
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![1.1, 3.3]);

        list.push_back(2.2);
        list.push_back(2.2);
        assert_eq!(list.remove(&2.2), 2);
        assert_eq!(list.remove(&2.2), 0);
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![1.1, 3.3]);
    }

    #[test]
    fn list_remove_everything() {
        let mut list = List::from_iter([7; 5]);
        assert_eq!(list.remove(&7), 5);
        assert!(list.is_empty());
        assert_eq!(list.remove(&7), 0);
    }

    #[test]
    fn list_remove_runs_at_both_ends() {
        let mut list = List::from_iter([2, 2, 1, 2, 3, 2, 2]);
        assert_eq!(list.remove(&2), 5);
        assert_eq!(list.len(), 2);
        assert_eq!(list.front(), Ok(&1));
        assert_eq!(list.back(), Ok(&3));
        assert_eq!(Vec::from_iter(list.iter().rev()), vec![&3, &1]);
    }

    #[test]
    fn list_equality_scenario() {
        let mut a = List::from_iter([1.1, 2.2, 3.3]);
        let mut b = List::from_iter([1.1, 2.2, 3.3]);
        assert_eq!(a, b);

        a.push_front(0.0);
        b.push_front(0.0);
        assert_eq!(a, b);

        assert_eq!(a.pop_front(), Ok(0.0));
        assert_ne!(a, b);
    }

    #[test]
    fn list_equality_needs_equal_length() {
        let a = List::from_iter([1, 2, 3]);
        let b = List::from_iter([1, 2]);
        assert_ne!(a, b);
        assert_ne!(b, a);
        assert_eq!(List::<i32>::new(), List::new());
        assert!(b < a);
    }

    #[test]
    fn list_clone_from_reuses_or_trims() {
        let source = List::from_iter(0..5);

        let mut shorter = List::from_iter([9, 9]);
        shorter.clone_from(&source);
        assert_eq!(shorter, source);

        let mut longer = List::from_iter(10..20);
        longer.clone_from(&source);
        assert_eq!(longer, source);
        assert_eq!(longer.len(), 5);

        let mut target = List::from_iter(0..3);
        target.clone_from(&List::new());
        assert!(target.is_empty());
    }

    #[test]
    fn list_add_assign() {
        let mut list = List::from_iter(vec![String::from("a")]);
        let other = List::from_iter(vec![String::from("b"), String::from("c")]);
        list += &other;
        assert_eq!(list.len(), 3);
        assert_eq!(list.back().map(String::as_str), Ok("c"));
        assert_eq!(other.front().map(String::as_str), Ok("b"));

        list += &List::new();
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn list_hash() {
        let a = List::from_iter([1, 2, 3]);
        let b = List::from_iter([1, 2, 3]);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(hash_of(&a), hash_of(&List::from_iter([1, 2])));
    }
}
