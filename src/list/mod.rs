use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;
use std::mem::{self, MaybeUninit};
use std::ptr::NonNull;

use crate::error::ListError;
use crate::list::cursor::{Cursor, CursorMut, Position};
use crate::{IntoIter, Iter, IterMut};

pub mod cursor;
pub mod iterator;

mod algorithms;

/// The `List` is a doubly-linked list with owned nodes, closed into a cycle by a
/// sentinel node. It allows inserting, removing elements at any given position
/// in constant time. In compromise, accessing or mutating elements at any
/// position take *O*(*n*) time.
///
/// The `List` contains:
/// - a pointer `sentinel` that points to the sentinel node;
/// - a length field `len` indicating the length of the list, updated on every
///   attach and detach;
/// - a counter `next_seq` that stamps every attached node with a sequence
///   number unique within the list.
///
/// # Naming Conventions
///
/// - `front..=back`: a closed range of list nodes, both inclusive;
/// - `start..end`: a half-open range of list nodes, left inclusive and right
///   exclusive (probably the sentinel node).
pub struct List<T> {
    sentinel: NonNull<Node<T>>,
    /// the length of the list
    pub(crate) len: usize,
    next_seq: u64,
    _marker: PhantomData<Box<Node<T>>>,
}

#[repr(C)]
pub(crate) struct Node<T> {
    pub(crate) next: NonNull<Node<T>>,
    pub(crate) prev: NonNull<Node<T>>,
    /// Stamp telling this node apart from any earlier node at the same address.
    /// The sentinel node has `0`.
    pub(crate) seq: u64,
    pub(crate) element: T,
}

// private methods
impl<T> List<T> {
    pub(crate) fn sentinel_node(&self) -> NonNull<Node<T>> {
        self.sentinel
    }
    pub(crate) fn front_node(&self) -> NonNull<Node<T>> {
        // SAFETY: `sentinel.next` is always valid (either `sentinel` itself, or the
        // first element in the list).
        unsafe { next_of(self.sentinel) }
    }

    /// Detach a single node `node` from the list, and return it as a box.
    ///
    /// It is unsafe because it does not check whether `node` belongs to the list,
    /// or whether it is the sentinel node.
    ///
    /// If the `node` does not belong to the list, this function call will make
    /// the list ill-formed.
    pub(crate) unsafe fn detach_node(&mut self, node: NonNull<Node<T>>) -> Box<Node<T>> {
        debug_assert!(node != self.sentinel, "Cannot detach the sentinel node");
        self.len -= 1;
        let node = Box::from_raw(node.as_ptr());
        connect(node.prev, node.next);
        node
    }

    /// Attach a single node `node` to the list, between `prev` and `next`.
    ///
    /// It is unsafe because it does not check whether `prev` and `next` belongs
    /// to the list, or whether the `prev` and `next` is adjacent (only in
    /// `#[cfg(debug_assertions)]`).
    ///
    /// If the `prev` and `next` does not belong to the list, or they are not
    /// adjacent nodes, this function call will make the list ill-formed.
    pub(crate) unsafe fn attach_node(
        &mut self,
        prev: NonNull<Node<T>>,
        next: NonNull<Node<T>>,
        node: NonNull<Node<T>>,
    ) {
        #[cfg(debug_assertions)]
        assert_adjacent(prev, next);
        (*node.as_ptr()).seq = self.next_seq;
        self.next_seq += 1;
        connect(prev, node);
        connect(node, next);
        self.len += 1;
        #[cfg(debug_assertions)]
        {
            assert_adjacent(prev, node);
            assert_adjacent(node, next);
        }
    }
}

impl<T> List<T> {
    /// Create an empty `List`
    ///
    /// # Examples
    /// ```
    /// use sentinel_list::List;
    /// let list: List<u32> = List::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            sentinel: new_sentinel(),
            len: 0,
            next_seq: 1,
            _marker: PhantomData,
        }
    }

    /// Takes all the elements out of the list in *O*(1) time, leaving it
    /// empty with a sentinel node of its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let taken = list.take();
    /// assert_eq!(Vec::from_iter(taken), vec![1, 2, 3]);
    ///
    /// assert!(list.is_empty());
    /// list.push_back(4);
    /// assert_eq!(list.front(), Ok(&4));
    /// ```
    #[inline]
    pub fn take(&mut self) -> Self {
        mem::take(self)
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
    /// use sentinel_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_front("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the length of the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
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
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Removes all elements from the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::{List, ListError};
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list.front(), Ok(&1));
    ///
    /// list.clear();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.front(), Err(ListError::EmptyAccess));
    /// ```
    pub fn clear(&mut self) {
        let end = self.end_position();
        let erased = self.cursor_start_mut().erase_until(end);
        debug_assert!(erased.is_ok(), "the sentinel always ends the list");
    }

    /// Provides a reference to the front element, or an error if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::{List, ListError};
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.front(), Err(ListError::EmptyAccess));
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Ok(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Result<&T, ListError> {
        self.cursor_start().current().ok_or(ListError::EmptyAccess)
    }

    /// Provides a mutable reference to the front element, or an error if the
    /// list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.front_mut().is_err());
    ///
    /// list.push_front(1);
    /// if let Ok(x) = list.front_mut() {
    ///     *x = 5;
    /// }
    /// assert_eq!(list.front(), Ok(&5));
    /// ```
    #[inline]
    pub fn front_mut(&mut self) -> Result<&mut T, ListError> {
        self.cursor_start_mut()
            .into_current_mut()
            .ok_or(ListError::EmptyAccess)
    }

    /// Provides a reference to the back element, or an error if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::{List, ListError};
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.back(), Err(ListError::EmptyAccess));
    ///
    /// list.push_back(1);
    /// assert_eq!(list.back(), Ok(&1));
    /// ```
    #[inline]
    pub fn back(&self) -> Result<&T, ListError> {
        self.cursor_end()
            .predecessor()
            .current()
            .ok_or(ListError::EmptyAccess)
    }

    /// Provides a mutable reference to the back element, or an error if the
    /// list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.back_mut().is_err());
    ///
    /// list.push_back(1);
    /// if let Ok(x) = list.back_mut() {
    ///     *x = 5;
    /// }
    /// assert_eq!(list.back(), Ok(&5));
    /// ```
    #[inline]
    pub fn back_mut(&mut self) -> Result<&mut T, ListError> {
        let mut cursor = self.cursor_end_mut();
        cursor.move_prev();
        cursor.into_current_mut().ok_or(ListError::EmptyAccess)
    }

    /// Adds an element first in the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.front(), Ok(&2));
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Ok(&1));
    /// ```
    pub fn push_front(&mut self, elt: T) {
        self.cursor_start_mut().insert(elt);
    }

    /// Removes the first element and returns it, or an error if the list is
    /// empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::{List, ListError};
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_front(), Err(ListError::EmptyAccess));
    ///
    /// list.push_front(1);
    /// list.push_front(3);
    /// assert_eq!(list.pop_front(), Ok(3));
    /// assert_eq!(list.pop_front(), Ok(1));
    /// assert_eq!(list.pop_front(), Err(ListError::EmptyAccess));
    /// ```
    pub fn pop_front(&mut self) -> Result<T, ListError> {
        if self.is_empty() {
            return Err(ListError::EmptyAccess);
        }
        self.cursor_start_mut().erase()
    }

    /// Appends an element to the back of a list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.back(), Ok(&3));
    /// ```
    pub fn push_back(&mut self, elt: T) {
        self.cursor_end_mut().insert(elt);
    }

    /// Removes the last element from a list and returns it, or an error if
    /// it is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::{List, ListError};
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_back(), Err(ListError::EmptyAccess));
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.pop_back(), Ok(3));
    /// ```
    pub fn pop_back(&mut self) -> Result<T, ListError> {
        if self.is_empty() {
            return Err(ListError::EmptyAccess);
        }
        let mut cursor = self.cursor_end_mut();
        cursor.move_prev();
        cursor.erase()
    }

    /// Provides a cursor at the node with given index.
    ///
    /// By convention, the cursor is pointing to the sentinel node if `at == len`.
    ///
    /// # Panics
    ///
    /// Panics if `at > len`
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// assert_eq!(list.cursor(1).current(), Some(&2));
    /// assert_eq!(list.cursor(3).current(), None);
    /// ```
    pub fn cursor(&self, at: usize) -> Cursor<'_, T> {
        let mut cursor = self.cursor_start();
        if let Err(excess) = cursor.seek_to(at) {
            panic!(
                "Cannot create cursor at a nonexistent index ({} past the end)",
                excess
            );
        }
        cursor
    }

    /// Provides a cursor at the first node.
    ///
    /// The cursor is pointing to the sentinel node if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// let cursor = list.cursor_start();
    /// assert_eq!(cursor.current(), Some(&1));
    ///
    /// let empty: List<i32> = List::new();
    /// assert_eq!(empty.cursor_start(), empty.cursor_end());
    /// ```
    pub fn cursor_start(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.front_node(), 0)
    }

    /// Provides a cursor at the sentinel node.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// let cursor = list.cursor_end();
    /// assert_eq!(cursor.current(), None);
    /// assert_eq!(cursor.predecessor().current(), Some(&3));
    /// ```
    pub fn cursor_end(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.sentinel_node(), self.len)
    }

    /// Provides a cursor with editing operations at the node with given index.
    ///
    /// By convention, the cursor is pointing to the sentinel node if `at == len`.
    ///
    /// # Panics
    ///
    /// Panics if `at > len`
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
    /// if let Some(x) = cursor.current_mut() {
    ///     *x *= 5;
    /// }
    /// assert_eq!(cursor.current(), Some(&10));
    /// assert_eq!(list.cursor_mut(3).current_mut(), None);
    /// ```
    pub fn cursor_mut(&mut self, at: usize) -> CursorMut<'_, T> {
        let mut cursor = self.cursor_start_mut();
        if let Err(excess) = cursor.seek_to(at) {
            panic!(
                "Cannot create cursor at a nonexistent index ({} past the end)",
                excess
            );
        }
        cursor
    }

    /// Provides a cursor with editing operations at the first node.
    ///
    /// The cursor is pointing to the sentinel node if the list is empty.
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
    /// if let Some(x) = cursor.current_mut() {
    ///     *x *= 5;
    /// }
    /// assert_eq!(cursor.current(), Some(&5));
    /// ```
    pub fn cursor_start_mut(&mut self) -> CursorMut<'_, T> {
        let front = self.front_node();
        CursorMut::new(self, front, 0)
    }

    /// Provides a cursor with editing operations at the sentinel node.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor_end_mut();
    ///
    /// cursor.insert(4);
    /// assert_eq!(cursor.current(), Some(&4));
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 3, 4]);
    /// ```
    pub fn cursor_end_mut(&mut self) -> CursorMut<'_, T> {
        let (sentinel, len) = (self.sentinel_node(), self.len);
        CursorMut::new(self, sentinel, len)
    }

    /// Returns the [`Position`] of the first node (the sentinel node if the
    /// list is empty).
    #[inline]
    pub fn start_position(&self) -> Position<T> {
        Position::new(self.front_node())
    }

    /// Returns the [`Position`] of the sentinel node.
    ///
    /// This position never changes during the lifetime of the list, so it can
    /// be taken before a mutable cursor is created and used to bound
    /// [`CursorMut::erase_until`].
    #[inline]
    pub fn end_position(&self) -> Position<T> {
        Position::new(self.sentinel_node())
    }

    /// Finds the node named by `position` and provides a cursor at it, or
    /// returns `None` if no node of this list has that position.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let two = list.cursor(1).position();
    ///
    /// list.push_front(0);
    /// list.pop_back().unwrap();
    ///
    /// let cursor = list.cursor_at(two).unwrap();
    /// assert_eq!(cursor.current(), Some(&2));
    /// assert_eq!(cursor.index(), 2);
    /// ```
    pub fn cursor_at(&self, position: Position<T>) -> Option<Cursor<'_, T>> {
        let mut cursor = self.cursor_start();
        loop {
            if cursor.position() == position {
                return Some(cursor);
            }
            if cursor.is_end() {
                return None;
            }
            cursor.move_next();
        }
    }

    /// Like [`List::cursor_at`], but provides a cursor with editing operations.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 4]);
    /// let four = list.cursor(2).position();
    ///
    /// list.cursor_at_mut(four).unwrap().insert(3);
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 3, 4]);
    /// ```
    pub fn cursor_at_mut(&mut self, position: Position<T>) -> Option<CursorMut<'_, T>> {
        let (current, index) = self
            .cursor_at(position)
            .map(|cursor| (cursor.current, cursor.index))?;
        Some(CursorMut::new(self, current, index))
    }

    /// Provides a forward iterator.
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
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Provides a forward iterator with mutable references.
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
    /// for element in list.iter_mut() {
    ///     *element += 10;
    /// }
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&10));
    /// assert_eq!(iter.next(), Some(&11));
    /// assert_eq!(iter.next(), Some(&12));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
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

impl<T> Node<T> {
    /// Create a detached node with given element. Its links are dangling
    /// until it is attached.
    pub(crate) fn new_detached(element: T) -> NonNull<Node<T>> {
        let node = Box::new(Node {
            next: NonNull::dangling(),
            prev: NonNull::dangling(),
            seq: 0,
            element,
        });
        NonNull::from(Box::leak(node))
    }

    pub(crate) fn into_element(self: Box<Self>) -> T {
        self.element
    }
}

/// Allocate a sentinel node linked to itself.
///
/// The sentinel is allocated as a `Node<MaybeUninit<T>>`, which has the same
/// layout as `Node<T>` under `#[repr(C)]`, and its element is never read.
fn new_sentinel<T>() -> NonNull<Node<T>> {
    let sentinel = Node::new_detached(MaybeUninit::<T>::uninit()).cast::<Node<T>>();
    // SAFETY: `sentinel` is freshly allocated, and only its links are written.
    unsafe { connect(sentinel, sentinel) };
    sentinel
}

/// Free a sentinel node allocated by [`new_sentinel`].
///
/// It is unsafe because `sentinel` must come from [`new_sentinel`] and no
/// other node may still link to it.
unsafe fn free_sentinel<T>(sentinel: NonNull<Node<T>>) {
    drop(Box::from_raw(
        sentinel.cast::<Node<MaybeUninit<T>>>().as_ptr(),
    ));
}

// Links are read and written through raw place expressions instead of
// `as_ref()`/`as_mut()`, so that no reference to a whole `Node<T>` is ever
// created for the sentinel node.

/// Read `node.next`.
///
/// It is unsafe because `node` must be a live node (or sentinel node).
#[inline]
pub(crate) unsafe fn next_of<T>(node: NonNull<Node<T>>) -> NonNull<Node<T>> {
    (*node.as_ptr()).next
}

/// Read `node.prev`.
///
/// It is unsafe because `node` must be a live node (or sentinel node).
#[inline]
pub(crate) unsafe fn prev_of<T>(node: NonNull<Node<T>>) -> NonNull<Node<T>> {
    (*node.as_ptr()).prev
}

/// Read `node.seq`.
///
/// It is unsafe because `node` must be a live node (or sentinel node).
#[inline]
pub(crate) unsafe fn seq_of<T>(node: NonNull<Node<T>>) -> u64 {
    (*node.as_ptr()).seq
}

/// Link `prev -> next` and `next -> prev`.
///
/// It is unsafe because both nodes must be live nodes (or sentinel nodes).
#[inline]
pub(crate) unsafe fn connect<T>(prev: NonNull<Node<T>>, next: NonNull<Node<T>>) {
    (*prev.as_ptr()).next = next;
    (*next.as_ptr()).prev = prev;
}

#[cfg(debug_assertions)]
fn assert_adjacent<T>(prev: NonNull<Node<T>>, next: NonNull<Node<T>>) {
    unsafe {
        assert_eq!(next_of(prev), next);
        assert_eq!(prev_of(next), prev);
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
        // SAFETY: the sentinel comes from `new_sentinel`, and after clearing
        // it only links to itself.
        unsafe { free_sentinel(self.sentinel) };
    }
}

unsafe impl<T: Send> Send for List<T> {}

unsafe impl<T: Sync> Sync for List<T> {}

// Ensure that `List` and its read-only iterators are covariant in their type parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: List<&'static str>) -> List<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn c<'a>(x: IntoIter<&'static str>) -> IntoIter<&'a str> {
        x
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ListError;
    use crate::list::List;
    use std::cell::RefCell;
    use std::iter::FromIterator;
    use std::mem;

    #[derive(Debug)]
    struct DropChecker<'a, T: Copy> {
        value: T,
        dropped: &'a RefCell<Vec<T>>,
    }

    impl<'a, T: Copy> DropChecker<'a, T> {
        fn new(value: T, dropped: &'a RefCell<Vec<T>>) -> Self {
            Self { value, dropped }
        }
    }

    impl<'a, T: Copy> Drop for DropChecker<'a, T> {
        fn drop(&mut self) {
            self.dropped.borrow_mut().push(self.value);
        }
    }

    fn fill_list(list: &mut List<f64>) {
        list.push_back(1.1);
        list.push_back(2.2);
        list.push_back(3.3);
    }

    #[test]
    fn list_create() {
        let mut list = List::<i32>::new();
        assert!(list.is_empty());
        list.push_back(1);
        assert!(!list.is_empty());
        assert_eq!(list.pop_back(), Ok(1));
        assert!(list.is_empty());
    }

    #[test]
    fn list_drop() {
        let dropped = RefCell::new(Vec::<i32>::new());
        let mut list = List::new();
        list.push_back(DropChecker::new(1, &dropped));
        list.push_back(DropChecker::new(2, &dropped));
        list.push_back(DropChecker::new(3, &dropped));
        drop(list);
        assert_eq!(dropped.borrow().as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn list_push_and_pop() {
        let mut list = List::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);

        assert_eq!(list.front(), Err(ListError::EmptyAccess));
        assert_eq!(list.back(), Err(ListError::EmptyAccess));
        assert_eq!(list.pop_front(), Err(ListError::EmptyAccess));
        assert_eq!(list.pop_back(), Err(ListError::EmptyAccess));

        list.push_back(1);
        assert_eq!(list.back(), Ok(&1));
        assert_eq!(list.pop_front(), Ok(1));
        assert_eq!(list.pop_back(), Err(ListError::EmptyAccess));
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);

        list.push_front(1);
        list.push_front(2);
        list.push_back(3);
        assert_eq!(list.back(), Ok(&3));
        assert_eq!(list.front(), Ok(&2));
        assert_eq!(list.pop_front(), Ok(2));
        assert_eq!(list.pop_back(), Ok(3));

        assert_eq!(list.front(), Ok(&1));
        assert_eq!(list.pop_front(), Ok(1));
        assert_eq!(list.front(), Err(ListError::EmptyAccess));
        assert_eq!(list.back(), Err(ListError::EmptyAccess));
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn list_push_back_tracks_ends() {
        let mut list = List::new();
        for i in 0..10 {
            list.push_back(i);
            assert_eq!(list.len(), i as usize + 1);
            assert_eq!(list.front(), Ok(&0));
            assert_eq!(list.back(), Ok(&i));
        }
    }

    #[test]
    fn list_front_back_mut() {
        let mut list = List::from_iter([1, 2, 3]);
        *list.front_mut().unwrap() = 10;
        *list.back_mut().unwrap() = 30;
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![10, 2, 30]);

        let mut empty = List::<i32>::new();
        assert_eq!(empty.front_mut(), Err(ListError::EmptyAccess));
        assert_eq!(empty.back_mut(), Err(ListError::EmptyAccess));
    }

    #[test]
    fn list_empty_and_clear() {
        let mut list = List::new();
        fill_list(&mut list);
        assert!(!list.is_empty());

        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.front(), Err(ListError::EmptyAccess));
        assert_eq!(list.back(), Err(ListError::EmptyAccess));

        // still usable after clearing
        fill_list(&mut list);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn list_size() {
        let mut list = List::new();
        fill_list(&mut list);
        assert_eq!(list.len(), 3);
        list.pop_front().unwrap();
        assert_eq!(list.len(), 2);
        list.clear();
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn list_take_leaves_empty_list() {
        let mut list = List::new();
        fill_list(&mut list);
        let sentinel = list.end_position();

        let mut moved = list.take();
        assert_eq!(moved.len(), 3);
        assert_eq!(Vec::from_iter(moved.iter().copied()), vec![1.1, 2.2, 3.3]);
        // The nodes, sentinel included, moved along.
        assert_eq!(moved.end_position(), sentinel);

        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_ne!(list.end_position(), sentinel);
        list.push_back(4.4);
        assert_eq!(list.front(), Ok(&4.4));

        moved.push_back(5.5);
        assert_eq!(moved.len(), 4);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn list_move_keeps_nodes() {
        let list = List::from_iter([1, 2, 3]);
        let front = list.start_position();
        let moved = list;
        assert_eq!(moved.start_position(), front);
        assert_eq!(Vec::from_iter(moved), vec![1, 2, 3]);
    }

    #[test]
    fn list_move_assign_drops_previous() {
        let dropped = RefCell::new(Vec::<i32>::new());
        let mut dst = List::new();
        dst.push_back(DropChecker::new(1, &dropped));
        dst.push_back(DropChecker::new(2, &dropped));

        let mut src = List::new();
        src.push_back(DropChecker::new(3, &dropped));

        dst = mem::take(&mut src);
        assert_eq!(dropped.borrow().as_slice(), &[1, 2]);
        assert_eq!(dst.len(), 1);
        assert_eq!(dst.front().map(|checker| checker.value), Ok(3));
        assert!(src.is_empty());

        drop(src);
        assert_eq!(dropped.borrow().as_slice(), &[1, 2]);
        drop(dst);
        assert_eq!(dropped.borrow().as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn list_cursor_at_positions() {
        let mut list = List::from_iter(0..5);
        let positions: Vec<_> = (0..5).map(|i| list.cursor(i).position()).collect();

        // Inserting keeps every position valid.
        list.push_front(-1);
        list.cursor_mut(3).insert(10);
        for (value, position) in (0..5).zip(positions.iter().copied()) {
            assert_eq!(list.cursor_at(position).unwrap().current(), Some(&value));
        }

        // Erasing invalidates the erased position only.
        assert_eq!(list.cursor_at_mut(positions[2]).unwrap().erase(), Ok(2));
        assert!(list.cursor_at(positions[2]).is_none());
        for i in [0, 1, 3, 4].iter().copied() {
            let cursor = list.cursor_at(positions[i]).unwrap();
            assert_eq!(cursor.current(), Some(&(i as i32)));
        }

        let end = list.end_position();
        assert_eq!(list.cursor_at(end).unwrap().index(), list.len());
    }

    #[test]
    fn list_stale_position_never_resolves() {
        let mut list = List::from_iter([1, 2, 3]);
        let stale = list.cursor(1).position();
        assert_eq!(list.cursor_at_mut(stale).unwrap().erase(), Ok(2));

        // The freed node is likely to be reused by the next allocation.
        list.push_back(99);
        list.push_front(0);
        assert!(list.cursor_at(stale).is_none());
        assert!(list.cursor_at_mut(stale).is_none());

        let mut cursor = list.cursor_start_mut();
        assert_eq!(cursor.erase_until(stale), Err(ListError::InvalidErase));
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![0, 1, 3, 99]);
    }

    #[test]
    fn list_cursors_and_iterators_own_nothing() {
        let dropped = RefCell::new(Vec::<i32>::new());
        let mut list = List::new();
        for i in 0..4 {
            list.push_back(DropChecker::new(i, &dropped));
        }

        {
            let first = list.cursor_start();
            let copy = first;
            let next = copy.successor();
            let prev = next.predecessor();
            assert!(prev == first);
            assert_eq!(next.current().map(|checker| checker.value), Some(1));
            let end = list.cursor_end();
            assert!(end.predecessor().successor() == end);
        }
        {
            let mut cursor = list.cursor_mut(1);
            let view = cursor.as_cursor();
            assert_eq!(view.current().map(|checker| checker.value), Some(1));
            cursor.move_next();
            cursor.move_prev();
            let cursor = cursor.into_cursor();
            assert_eq!(cursor.index(), 1);
        }
        {
            let positions = [list.start_position(), list.end_position()];
            assert!(list.cursor_at(positions[0]).is_some());
            let mut iter = list.iter();
            let copy = iter.clone();
            assert_eq!(iter.next().map(|checker| checker.value), Some(0));
            assert_eq!(copy.len(), 4);
            let mut iter_mut = list.iter_mut();
            assert_eq!(iter_mut.next_back().map(|checker| checker.value), Some(3));
        }

        assert!(dropped.borrow().is_empty());
        assert_eq!(list.len(), 4);

        drop(list);
        assert_eq!(dropped.borrow().as_slice(), &[0, 1, 2, 3]);
    }

    #[test]
    #[should_panic(expected = "Cannot create cursor at a nonexistent index")]
    fn list_cursor_out_of_bounds() {
        let list = List::from_iter([1, 2, 3]);
        let _ = list.cursor(4);
    }

    #[test]
    fn list_debug() {
        let list = List::from_iter([1, 2, 3]);
        assert_eq!(format!("{:?}", list), "[1, 2, 3]");
        assert_eq!(format!("{:?}", List::<i32>::new()), "[]");
    }
}

// proptest doesn't run under miri with default config
#[cfg(all(not(miri), test))]
mod proptests {
    use crate::error::ListError;
    use crate::list::List;
    use proptest::prelude::*;

    #[derive(Clone, Debug)]
    enum Op {
        PushBack(i32),
        PushFront(i32),
        PopBack,
        PopFront,
        Insert(usize, i32),
        Erase(usize),
        EraseRange(usize, usize),
        Remove(i32),
        Clear,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            4 => (0..5i32).prop_map(Op::PushBack),
            4 => (0..5i32).prop_map(Op::PushFront),
            2 => Just(Op::PopBack),
            2 => Just(Op::PopFront),
            4 => (any::<usize>(), 0..5i32).prop_map(|(at, value)| Op::Insert(at, value)),
            2 => any::<usize>().prop_map(Op::Erase),
            1 => (any::<usize>(), any::<usize>()).prop_map(|(a, b)| Op::EraseRange(a, b)),
            2 => (0..5i32).prop_map(Op::Remove),
            1 => Just(Op::Clear),
        ]
    }

    fn apply(list: &mut List<i32>, model: &mut Vec<i32>, op: Op) {
        match op {
            Op::PushBack(value) => {
                list.push_back(value);
                model.push(value);
            }
            Op::PushFront(value) => {
                list.push_front(value);
                model.insert(0, value);
            }
            Op::PopBack => {
                assert_eq!(list.pop_back(), model.pop().ok_or(ListError::EmptyAccess));
            }
            Op::PopFront => {
                let expected = if model.is_empty() {
                    Err(ListError::EmptyAccess)
                } else {
                    Ok(model.remove(0))
                };
                assert_eq!(list.pop_front(), expected);
            }
            Op::Insert(at, value) => {
                let at = at % (model.len() + 1);
                let mut cursor = list.cursor_mut(at);
                cursor.insert(value);
                assert_eq!(cursor.current(), Some(&value));
                assert_eq!(cursor.index(), at);
                model.insert(at, value);
            }
            Op::Erase(at) => {
                let at = at % (model.len() + 1);
                let mut cursor = list.cursor_mut(at);
                if at == model.len() {
                    assert_eq!(cursor.erase(), Err(ListError::InvalidErase));
                } else {
                    assert_eq!(cursor.erase(), Ok(model.remove(at)));
                    assert_eq!(cursor.current(), model.get(at));
                }
            }
            Op::EraseRange(a, b) => {
                let a = a % (model.len() + 1);
                let b = b % (model.len() + 1);
                let end = list.cursor(b).position();
                let mut cursor = list.cursor_mut(a);
                if a <= b {
                    assert_eq!(cursor.erase_until(end), Ok(b - a));
                    assert_eq!(cursor.position(), end);
                    model.drain(a..b);
                } else {
                    assert_eq!(cursor.erase_until(end), Err(ListError::InvalidErase));
                }
            }
            Op::Remove(value) => {
                let before = model.len();
                model.retain(|x| *x != value);
                assert_eq!(list.remove(&value), before - model.len());
                assert_eq!(list.remove(&value), 0);
            }
            Op::Clear => {
                list.clear();
                model.clear();
            }
        }
    }

    proptest! {
        #[test]
        fn list_matches_vec_model(ops in prop::collection::vec(op(), 0..64)) {
            let mut list = List::new();
            let mut model = Vec::new();
            for op in ops {
                apply(&mut list, &mut model, op);

                prop_assert_eq!(list.len(), model.len());
                prop_assert_eq!(list.is_empty(), model.is_empty());
                prop_assert_eq!(list.front().ok(), model.first());
                prop_assert_eq!(list.back().ok(), model.last());
                prop_assert_eq!(list.iter().copied().collect::<Vec<_>>(), model.clone());
                prop_assert_eq!(
                    list.iter().rev().copied().collect::<Vec<_>>(),
                    model.iter().rev().copied().collect::<Vec<_>>()
                );
            }
        }

        #[test]
        fn list_clone_is_deep(values in prop::collection::vec(any::<i32>(), 0..32), extra in any::<i32>()) {
            let list: List<i32> = values.iter().copied().collect();
            let mut copy = list.clone();
            prop_assert_eq!(&copy, &list);

            copy.push_back(extra);
            prop_assert_ne!(&copy, &list);
            prop_assert_eq!(list.iter().copied().collect::<Vec<_>>(), values);
        }

        #[test]
        fn list_cursor_walk_visits_len_elements(values in prop::collection::vec(any::<i32>(), 0..32)) {
            let list: List<i32> = values.iter().copied().collect();
            let (mut cursor, end) = (list.cursor_start(), list.cursor_end());
            let mut visited = Vec::new();
            while cursor != end {
                visited.push(*cursor.current().unwrap());
                cursor.move_next();
            }
            prop_assert_eq!(visited.len(), list.len());
            prop_assert_eq!(visited, values);
        }
    }
}
