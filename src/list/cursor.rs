use crate::error::ListError;
use crate::list::{next_of, prev_of, seq_of, List, Node};
use std::cmp::Ordering;
use std::fmt;
use std::fmt::Formatter;
use std::hash::{Hash, Hasher};
use std::ptr::{self, NonNull};

/// A cursor over a `List`.
///
/// A `Cursor` is like an iterator, except that it can freely seek back-and-forth.
/// It is `Copy`: copying or dropping a cursor never touches the nodes of the list.
///
/// In a list with length *n*, there are *n* + 1 valid locations for the cursor,
/// indexed by 0, 1, ..., *n*, where *n* is the sentinel node of the list.
///
/// Moving is cyclic: moving forward from the sentinel node wraps to the first
/// node, and moving backward from the first node lands on the sentinel node.
///
/// # Examples
///
/// Here is a simple example showing how the cursors work. (The sentinel node of
/// the list is denoted by `#`).
/// ```
/// use sentinel_list::List;
/// use std::iter::FromIterator;
///
/// // Create a list: [ A B C D #]
/// let list = List::from_iter(['A', 'B', 'C', 'D']);
///
/// // Create a cursor at start: [|A B C D #] (index = 0)
/// let mut cursor = list.cursor_start();
/// assert_eq!(cursor.current(), Some(&'A'));
///
/// // Move cursor forward: [ A|B C D #] (index = 1)
/// cursor.move_next();
/// assert_eq!(cursor.current(), Some(&'B'));
///
/// // Create a cursor in the end: [ A B C D|#] (index = 4)
/// let mut cursor = list.cursor_end();
/// assert_eq!(cursor.current(), None);
///
/// // Move cursor backward: [ A B C|D #] (index = 3)
/// cursor.move_prev();
/// assert_eq!(cursor.current(), Some(&'D'));
///
/// // Move cursor forward twice, passing the sentinel: [|A B C D #] (index = 0)
/// cursor.move_next();
/// cursor.move_next();
/// assert_eq!(cursor.current(), Some(&'A'));
/// ```
pub struct Cursor<'a, T: 'a> {
    pub(crate) index: usize,
    pub(crate) current: NonNull<Node<T>>,
    pub(crate) list: &'a List<T>,
}

impl<'a, T: 'a> Clone for Cursor<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T: 'a> Copy for Cursor<'a, T> {}

/// Compare cursors by its position.
///
/// Only cursors belong to the same list and have the same positions
/// are considered equal.
///
/// # Examples
/// ```
/// use sentinel_list::List;
/// use std::iter::FromIterator;
///
/// let list = List::from_iter([1, 2, 3]);
/// let cursor1 = list.cursor_start();
/// let mut cursor2 = cursor1;
/// // The same list, and the same position.
/// assert_eq!(cursor1, cursor2);
///
/// cursor2.move_next();
/// // The same list, but different positions.
/// assert_ne!(cursor1, cursor2);
///
/// let another_list = list.clone();
/// let cursor3 = another_list.cursor_start();
/// // Different list, even though the elements are equal.
/// assert_ne!(cursor1, cursor3);
/// ```
impl<'a, T: 'a> PartialEq for Cursor<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        self.same_list_with(other) && self.current == other.current
    }
}

impl<'a, T: 'a> Eq for Cursor<'a, T> {}

/// Compare cursors by its position.
///
/// Only cursors belong to the same list can compare, so it is `PartialOrd`
/// but not `Ord`.
///
/// # Examples
/// ```
/// use sentinel_list::List;
/// use std::iter::FromIterator;
///
/// let list = List::from_iter([1, 2, 3]);
/// let cursor1 = list.cursor_start();
/// let cursor2 = cursor1.successor();
/// // They belong to the same list, can compare.
/// assert!(cursor1 < cursor2);
///
/// let another_list = list.clone();
/// let cursor3 = another_list.cursor_end();
/// // They belong to different lists, cannot compare.
/// assert_eq!(cursor1.partial_cmp(&cursor3), None);
/// ```
impl<'a, T: 'a> PartialOrd for Cursor<'a, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if !self.same_list_with(other) {
            return None;
        }
        Some(self.index.cmp(&other.index))
    }
}

/// A cursor over a `List` with editing operations.
///
/// A `CursorMut` is like an iterator, except that it can freely seek back-and-forth,
/// and can safely mutate the list during iteration. This is because the lifetime of
/// its yielded references is tied to its own lifetime, instead of just the underlying
/// list. This means cursors cannot yield multiple elements at once.
///
/// For convenience, [`CursorMut::view`] provides a function to temporarily borrow
/// the list and returns an immutable reference whose lifetime is shorter than the
/// cursor.
///
/// In a list with length *n*, there are *n* + 1 valid locations for the cursor,
/// indexed by 0, 1, ..., *n*, where *n* is the sentinel node of the list.
///
/// # Examples
///
/// ```compile_fail
/// use sentinel_list::List;
/// use std::iter::FromIterator;
///
/// let mut list = List::from_iter([1, 2, 3]);
/// let mut cursor = list.cursor_start_mut();
/// println!("{:?}", list.back());
/// println!("{:?}", cursor.current());
/// ```
pub struct CursorMut<'a, T: 'a> {
    pub(crate) index: usize,
    pub(crate) current: NonNull<Node<T>>,
    pub(crate) list: &'a mut List<T>,
}

/// The identity of a node in a `List`, detached from any borrow of the list.
///
/// A `Position` is taken from a cursor (or from [`List::start_position`] and
/// [`List::end_position`]) and can be kept while the list is mutated. It is
/// only ever compared, never dereferenced: use [`List::cursor_at`] to get back
/// to the node it names.
///
/// Inserting elements never changes which node a position names. Erasing a
/// node invalidates the positions of that node only. A position also carries
/// the sequence number the list stamped on its node, so a stale position never
/// names a node inserted later into the same list, even one reusing the
/// address: [`List::cursor_at`] returns `None` for it and
/// [`CursorMut::erase_until`] rejects it.
///
/// # Examples
///
/// ```
/// use sentinel_list::List;
/// use std::iter::FromIterator;
///
/// let mut list = List::from_iter([1, 2, 3, 4, 5]);
/// let four = list.cursor(3).position();
///
/// // Erase `[2, 4)`, i.e. the elements 2 and 3.
/// let mut cursor = list.cursor_mut(1);
/// assert_eq!(cursor.erase_until(four), Ok(2));
/// assert_eq!(cursor.current(), Some(&4));
///
/// assert_eq!(Vec::from_iter(list), vec![1, 4, 5]);
/// ```
pub struct Position<T> {
    node: NonNull<Node<T>>,
    seq: u64,
}

impl<T> Position<T> {
    /// Take the position of a live node (or sentinel node) of a list.
    pub(crate) fn new(node: NonNull<Node<T>>) -> Self {
        // SAFETY: positions are only taken of nodes linked in a list.
        let seq = unsafe { seq_of(node) };
        Self { node, seq }
    }
}

impl<T> Clone for Position<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Position<T> {}

impl<T> PartialEq for Position<T> {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node && self.seq == other.seq
    }
}

impl<T> Eq for Position<T> {}

impl<T> Hash for Position<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.node.hash(state);
        self.seq.hash(state);
    }
}

impl<T> fmt::Debug for Position<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Position")
            .field(&self.node)
            .field(&self.seq)
            .finish()
    }
}

macro_rules! impl_cursor {
    ($CURSOR:ident) => {
        // Private methods
        impl<'a, T: 'a> $CURSOR<'a, T> {
            pub(crate) fn is_sentinel_node(&self) -> bool {
                self.current == self.list.sentinel_node()
            }
            pub(crate) fn is_front_node(&self) -> bool {
                self.prev_node() == self.list.sentinel_node()
            }
            pub(crate) fn next_node(&self) -> NonNull<Node<T>> {
                // SAFETY: `current.next` is always valid since it is a cyclic list.
                unsafe { next_of(self.current) }
            }
            pub(crate) fn prev_node(&self) -> NonNull<Node<T>> {
                // SAFETY: `current.prev` is always valid since it is a cyclic list.
                unsafe { prev_of(self.current) }
            }

            /// Move forward the cursor by given steps, without checking whether
            /// it will pass through the sentinel node.
            ///
            /// If the moving passes through the sentinel node, the index will
            /// be invalid.
            fn seek_forward_fast(&mut self, steps: usize) {
                self.index += steps;
                (0..steps).for_each(|_| self.current = self.next_node());
            }

            /// Move backward the cursor by given steps, without checking whether
            /// it will pass through the sentinel node.
            ///
            /// If the moving passes through the sentinel node, the index will
            /// be invalid.
            fn seek_backward_fast(&mut self, steps: usize) {
                self.index -= steps;
                (0..steps).for_each(|_| self.current = self.prev_node());
            }
        }

        impl<'a, T: 'a> $CURSOR<'a, T> {
            /// Return the index of the cursor
            pub fn index(&self) -> usize {
                self.index
            }

            /// Returns `true` if the `List` is empty. See [`List::is_empty`].
            pub fn is_empty(&self) -> bool {
                self.list.is_empty()
            }

            /// Returns `true` if the cursor is at the sentinel node, i.e. one
            /// past the last element.
            pub fn is_end(&self) -> bool {
                self.is_sentinel_node()
            }

            /// Returns the [`Position`] of the node the cursor is at.
            pub fn position(&self) -> Position<T> {
                Position::new(self.current)
            }

            /// Move the cursor to the next position.
            ///
            /// From the last node it lands on the sentinel node, and from the
            /// sentinel node it wraps to the first node.
            ///
            /// This operation should compute in *O*(*1*) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use sentinel_list::List;
            /// use std::iter::FromIterator;
            ///
            /// let list = List::from_iter([1, 2, 3]);
            /// let mut cursor = list.cursor(2);
            /// assert_eq!(cursor.current(), Some(&3));
            ///
            /// cursor.move_next();
            /// assert!(cursor.is_end());
            ///
            /// cursor.move_next();
            /// assert_eq!(cursor.current(), Some(&1));
            /// ```
            pub fn move_next(&mut self) {
                if self.is_sentinel_node() {
                    self.index = 0;
                } else {
                    self.index += 1;
                }
                self.current = self.next_node();
            }

            /// Move the cursor to the previous position.
            ///
            /// From the sentinel node it lands on the last node (or stays put
            /// if the list is empty), and from the first node it lands on the
            /// sentinel node.
            ///
            /// This operation should compute in *O*(*1*) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use sentinel_list::List;
            /// use std::iter::FromIterator;
            ///
            /// let list = List::from_iter([1, 2, 3]);
            /// let mut cursor = list.cursor_end();
            ///
            /// cursor.move_prev();
            /// assert_eq!(cursor.current(), Some(&3));
            ///
            /// let mut cursor = list.cursor_start();
            /// cursor.move_prev();
            /// assert!(cursor.is_end());
            /// ```
            pub fn move_prev(&mut self) {
                if self.is_front_node() {
                    self.index = self.list.len();
                } else {
                    self.index -= 1;
                }
                self.current = self.prev_node();
            }

            /// Move the cursor to the given position `target`, or return an error
            /// when `target > len`.
            ///
            /// If an error occurs, the cursor will stay put.
            ///
            /// This operation should compute in *O*(*n*) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use sentinel_list::List;
            /// use std::iter::FromIterator;
            ///
            /// let list = List::from_iter([1, 2, 3]);
            /// let mut cursor = list.cursor_start();
            ///
            /// // The cursor is at the first node
            /// assert_eq!(cursor.current(), Some(&1));
            ///
            /// // Move cursor to a valid place (at the third node)
            /// assert!(cursor.seek_to(2).is_ok());
            /// assert_eq!(cursor.current(), Some(&3));
            ///
            /// // Forbid to move to a invalid place
            /// assert_eq!(cursor.seek_to(5), Err(2));
            ///
            /// // The cursor is still at the third node
            /// assert_eq!(cursor.current(), Some(&3));
            /// ```
            pub fn seek_to(&mut self, target: usize) -> Result<(), usize> {
                let len = self.list.len();
                if target > len {
                    return Err(target - len);
                }
                if target == self.index {
                    return Ok(());
                }
                match target {
                    0 => self.move_to_start(),
                    target if target == len => self.move_to_end(),
                    // current=c, target=t, sentinel=#
                    target if target > self.index => {
                        // target is at the right side of current: [   c----->t   #]
                        if target - self.index <= len - target {
                            // target is near the right side of current: [    c-->t     #]
                            self.seek_forward_fast(target - self.index);
                        } else {
                            // target is far from the right side of current: [ c     t<--#]
                            self.move_to_end();
                            self.seek_backward_fast(len - target);
                        }
                    }
                    _ => {
                        // target is at the left side of current: [   t<-----c   #]
                        if self.index - target <= target {
                            // target is near the left side of current: [    t<--c     #]
                            self.seek_backward_fast(self.index - target);
                        } else {
                            // target is far from the left side of current: [-->t      c #]
                            self.move_to_start();
                            self.seek_forward_fast(target);
                        }
                    }
                }
                Ok(())
            }

            /// Set the cursor to the start of the list (i.e. the first node).
            ///
            /// This operation should compute in *O*(*1*) time.
            #[inline]
            pub fn move_to_start(&mut self) {
                self.index = 0;
                self.current = self.list.front_node();
            }

            /// Set the cursor to the end of the list (i.e. the sentinel node).
            ///
            /// This operation should compute in *O*(*1*) time.
            #[inline]
            pub fn move_to_end(&mut self) {
                self.index = self.list.len();
                self.current = self.list.sentinel_node();
            }
        }

        impl<'a, T: fmt::Debug + 'a> fmt::Debug for $CURSOR<'a, T> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($CURSOR))
                    .field("list", &self.list)
                    .field("current", &self.current())
                    .field("index", &self.index)
                    .finish()
            }
        }
    };
}

impl_cursor!(CursorMut);
impl_cursor!(Cursor);

impl<'a, T: 'a> Cursor<'a, T> {
    pub(crate) fn new(list: &'a List<T>, current: NonNull<Node<T>>, index: usize) -> Self {
        Self {
            index,
            current,
            list,
        }
    }

    fn same_list_with(&self, other: &Self) -> bool {
        ptr::eq(self.list, other.list)
    }

    /// Return an immutable reference of current node of the cursor,
    /// or return `None` if it is located at the sentinel node.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// assert_eq!(list.cursor(0).current(), Some(&1));
    /// assert_eq!(list.cursor(1).current(), Some(&2));
    /// assert_eq!(list.cursor(2).current(), Some(&3));
    /// assert_eq!(list.cursor(3).current(), None);
    /// ```
    pub fn current(&self) -> Option<&'a T> {
        if self.is_sentinel_node() {
            return None;
        }
        // SAFETY: it is safe because non-sentinel nodes must hold a
        // valid element.
        unsafe { Some(&self.current.as_ref().element) }
    }

    /// Return a copy of the cursor moved to the next position, leaving this
    /// one where it is. See [`Cursor::move_next`].
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// let cursor = list.cursor_start();
    /// assert_eq!(cursor.successor().current(), Some(&2));
    /// assert_eq!(cursor.current(), Some(&1));
    /// ```
    pub fn successor(mut self) -> Self {
        self.move_next();
        self
    }

    /// Return a copy of the cursor moved to the previous position, leaving
    /// this one where it is. See [`Cursor::move_prev`].
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// let cursor = list.cursor_end();
    /// assert_eq!(cursor.predecessor().current(), Some(&3));
    /// assert!(cursor.is_end());
    /// ```
    pub fn predecessor(mut self) -> Self {
        self.move_prev();
        self
    }

    /// The list the cursor belongs to.
    pub fn view(&self) -> &'a List<T> {
        self.list
    }
}

impl<'a, T: 'a> CursorMut<'a, T> {
    pub(crate) fn new(list: &'a mut List<T>, current: NonNull<Node<T>>, index: usize) -> Self {
        Self {
            index,
            current,
            list,
        }
    }
}

// Methods that does not change the linking structure of the list.
impl<'a, T: 'a> CursorMut<'a, T> {
    /// Return an immutable reference of current node of the cursor,
    /// or return `None` if it is located at the sentinel node.
    pub fn current(&self) -> Option<&T> {
        if self.is_sentinel_node() {
            return None;
        }
        // SAFETY: it is safe because non-sentinel nodes must hold a
        // valid element.
        unsafe { Some(&self.current.as_ref().element) }
    }

    /// Return a mutable reference of current node of the cursor,
    /// or return `None` if it is located at the sentinel node.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    ///
    /// // Create a cursor and mutate the element in the current node.
    /// let mut cursor = list.cursor_mut(0);
    /// *cursor.current_mut().unwrap() *= 5;
    /// assert_eq!(cursor.current(), Some(&5));
    ///
    /// // Cannot mutate the sentinel node.
    /// assert!(list.cursor_mut(3).current_mut().is_none());
    /// ```
    pub fn current_mut(&mut self) -> Option<&mut T> {
        if self.is_sentinel_node() {
            return None;
        }
        // SAFETY: it is safe because non-sentinel nodes must hold a
        // valid element.
        unsafe { Some(&mut self.current.as_mut().element) }
    }

    /// Convert the cursor into a mutable reference of its current element,
    /// or return `None` if it is located at the sentinel node.
    pub fn into_current_mut(mut self) -> Option<&'a mut T> {
        if self.is_sentinel_node() {
            return None;
        }
        // SAFETY: non-sentinel nodes hold a valid element, and the cursor
        // holding the only borrow of the list is consumed here.
        unsafe { Some(&mut self.current.as_mut().element) }
    }

    /// Re-borrow the mutable cursor as a short-lived immutable one.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(&*self.list, self.current, self.index)
    }

    /// Convert the mutable cursor to an immutable one.
    pub fn into_cursor(self) -> Cursor<'a, T> {
        Cursor::new(self.list, self.current, self.index)
    }

    /// Temporarily view the list via an immutable reference.
    ///
    /// This is useful where the list is not able to read while a
    /// mutable cursor is created and being used. This method
    /// provides an ability of temporarily reading the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor_start_mut();
    ///
    /// // Temporarily view the list
    /// assert_eq!(cursor.view().back(), Ok(&3));
    ///
    /// cursor.insert(4);
    /// assert_eq!(Vec::from_iter(list), vec![4, 1, 2, 3]);
    /// ```
    pub fn view(&self) -> &List<T> {
        &*self.list
    }
}

// Methods that might change the linking structure of the list.
impl<'a, T: 'a> CursorMut<'a, T> {
    /// Add an element before the cursor position, and move the cursor onto
    /// the new element.
    ///
    /// The new element takes over the index of the cursor, so the index
    /// stays the same. Every other node keeps its position.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor_mut(1);
    ///
    /// cursor.insert(4); // becomes [1, 4, 2, 3]
    /// assert_eq!(cursor.index(), 1);
    /// assert_eq!(cursor.current(), Some(&4));
    ///
    /// cursor.move_to_end();
    /// cursor.insert(5); // becomes [1, 4, 2, 3, 5]
    /// assert_eq!(cursor.index(), 4);
    /// assert_eq!(cursor.current(), Some(&5));
    ///
    /// assert_eq!(Vec::from_iter(list), vec![1, 4, 2, 3, 5]);
    /// ```
    pub fn insert(&mut self, item: T) {
        let node = Node::new_detached(item);
        // SAFETY: `self.current.prev` and `self.current` are valid nodes in the list,
        // and they are adjacent, so it is safe.
        unsafe { self.list.attach_node(self.prev_node(), self.current, node) };
        self.current = node;
    }

    /// Remove the element at the cursor and return it, or return
    /// [`ListError::InvalidErase`] if the cursor is at the sentinel node.
    /// After removal, the cursor is moved to the next node and keeps its index.
    ///
    /// This operation should compute in *O*(*1*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::{List, ListError};
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter(0..10);
    /// let mut cursor = list.cursor_mut(5);
    ///
    /// assert_eq!(cursor.erase(), Ok(5)); // becomes [0, 1, 2, 3, 4, 6, 7, 8, 9]
    /// assert_eq!(cursor.index(), 5);
    /// assert_eq!(cursor.current(), Some(&6));
    ///
    /// cursor.move_to_start();
    /// assert_eq!(cursor.erase(), Ok(0)); // becomes [1, 2, 3, 4, 6, 7, 8, 9]
    /// assert_eq!(cursor.index(), 0);
    /// assert_eq!(cursor.current(), Some(&1));
    ///
    /// cursor.move_to_end();
    /// assert_eq!(cursor.erase(), Err(ListError::InvalidErase));
    /// assert_eq!(cursor.index(), 8);
    /// assert_eq!(cursor.current(), None);
    ///
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 3, 4, 6, 7, 8, 9]);
    /// ```
    pub fn erase(&mut self) -> Result<T, ListError> {
        if self.is_sentinel_node() {
            return Err(ListError::InvalidErase);
        }
        let next = self.next_node();
        // SAFETY: `self.current` is a valid non-sentinel node in the list, so it is safe.
        let node = unsafe { self.list.detach_node(self.current) };
        self.current = next;
        Ok(Node::into_element(node))
    }

    /// Remove the elements from the cursor (inclusive) up to `end` (exclusive),
    /// and return how many were removed. After removal, the cursor is at `end`
    /// and keeps its index.
    ///
    /// If `end` cannot be reached moving forward before the sentinel node (it is
    /// behind the cursor, names an erased node, or belongs to another list), no
    /// element is removed and [`ListError::InvalidErase`] is returned.
    ///
    /// This operation should compute in *O*(*k*) time, where *k* is the number
    /// of elements in the range.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::{List, ListError};
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter(0..6);
    /// let one = list.cursor(1).position();
    /// let end = list.end_position();
    ///
    /// let mut cursor = list.cursor_mut(3);
    /// // `1` is behind the cursor.
    /// assert_eq!(cursor.erase_until(one), Err(ListError::InvalidErase));
    /// assert_eq!(cursor.view().len(), 6);
    ///
    /// assert_eq!(cursor.erase_until(end), Ok(3));
    /// assert!(cursor.is_end());
    /// assert_eq!(Vec::from_iter(list), vec![0, 1, 2]);
    /// ```
    pub fn erase_until(&mut self, end: Position<T>) -> Result<usize, ListError> {
        let sentinel = self.list.sentinel_node();
        let mut count = 0;
        let mut node = self.current;
        while Position::new(node) != end {
            if node == sentinel {
                return Err(ListError::InvalidErase);
            }
            // SAFETY: `node` is a valid node reached from the cursor.
            node = unsafe { next_of(node) };
            count += 1;
        }
        for _ in 0..count {
            self.erase()?;
        }
        Ok(count)
    }
}

unsafe impl<T: Sync> Send for Cursor<'_, T> {}

unsafe impl<T: Sync> Sync for Cursor<'_, T> {}

unsafe impl<T: Send> Send for CursorMut<'_, T> {}

unsafe impl<T: Sync> Sync for CursorMut<'_, T> {}

// A position is never dereferenced.
unsafe impl<T> Send for Position<T> {}

unsafe impl<T> Sync for Position<T> {}
