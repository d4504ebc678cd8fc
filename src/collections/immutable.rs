//! Read-only live views over shared sequences
//!
//! An `ImmutableArray` lets one part of the engine hand out a sequence
//! (family membership lists, render queues) that other parts may read but
//! never restructure. The view is not a snapshot: it re-reads the backing
//! vector on every call, so changes made through the owning handle are
//! visible immediately.

use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::Rc;

/// A read-only view over a shared growable sequence.
///
/// The view holds a shared handle to the backing vector and owns no
/// elements. `len` and `get` delegate to the backing vector at call time
/// rather than caching anything, so elements pushed through another handle
/// after construction are observed.
///
/// Neither the view nor its iterator exposes any mutating operation; the
/// only way to change the sequence is through a separately held handle.
pub struct ImmutableArray<T> {
    backing: Rc<RefCell<Vec<T>>>,
}

impl<T> ImmutableArray<T> {
    /// Create a view over an existing shared sequence.
    #[must_use]
    pub fn new(backing: Rc<RefCell<Vec<T>>>) -> Self {
        Self { backing }
    }

    /// Get the current length of the backing sequence.
    #[must_use]
    pub fn len(&self) -> usize {
        self.backing.borrow().len()
    }

    /// Check if the backing sequence is currently empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.backing.borrow().is_empty()
    }

    /// Borrow the element at `index`, or `None` if out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Ref<'_, T>> {
        Ref::filter_map(self.backing.borrow(), |v| v.get(index)).ok()
    }

    /// Borrow the first element.
    #[must_use]
    pub fn first(&self) -> Option<Ref<'_, T>> {
        self.get(0)
    }

    /// Borrow the last element.
    #[must_use]
    pub fn last(&self) -> Option<Ref<'_, T>> {
        Ref::filter_map(self.backing.borrow(), |v| v.last()).ok()
    }

    /// Check whether the backing sequence currently holds `value`.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.backing.borrow().contains(value)
    }

    /// Get the index of the first element equal to `value`.
    #[must_use]
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.backing.borrow().iter().position(|item| item == value)
    }

    /// Copy the current elements out into an owned vector.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.backing.borrow().clone()
    }

    /// Iterate over the elements.
    ///
    /// The iterator is lazy: it re-borrows the backing sequence on every
    /// step, so elements appended mid-iteration are yielded once the cursor
    /// reaches them. It exposes no removal operation.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            backing: &self.backing,
            index: 0,
        }
    }
}

impl<T> Clone for ImmutableArray<T> {
    /// Clone the view; both views observe the same backing sequence.
    fn clone(&self) -> Self {
        Self {
            backing: Rc::clone(&self.backing),
        }
    }
}

impl<T> From<Rc<RefCell<Vec<T>>>> for ImmutableArray<T> {
    fn from(backing: Rc<RefCell<Vec<T>>>) -> Self {
        Self::new(backing)
    }
}

impl<T: PartialEq> PartialEq for ImmutableArray<T> {
    fn eq(&self, other: &Self) -> bool {
        *self.backing.borrow() == *other.backing.borrow()
    }
}

impl<T: fmt::Debug> fmt::Debug for ImmutableArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.backing.borrow().iter()).finish()
    }
}

/// Forward-only iterator over an [`ImmutableArray`].
///
/// Each call to `next` borrows the backing sequence afresh; the yielded
/// item is a shared borrow, so the sequence cannot be mutated while an item
/// is held.
pub struct Iter<'a, T> {
    backing: &'a RefCell<Vec<T>>,
    index: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = Ref<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = Ref::filter_map(self.backing.borrow(), |v| v.get(self.index)).ok()?;
        self.index += 1;
        Some(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shared(values: Vec<i32>) -> Rc<RefCell<Vec<i32>>> {
        Rc::new(RefCell::new(values))
    }

    #[test]
    fn test_len_reflects_backing() {
        let backing = shared(vec![1, 2]);
        let view = ImmutableArray::new(Rc::clone(&backing));

        assert_eq!(view.len(), 2);

        backing.borrow_mut().push(3);
        assert_eq!(view.len(), 3);

        backing.borrow_mut().clear();
        assert!(view.is_empty());
    }

    #[test]
    fn test_get_delegates_at_call_time() {
        let backing = shared(vec![10]);
        let view = ImmutableArray::new(Rc::clone(&backing));

        assert_eq!(*view.get(0).unwrap(), 10);
        assert!(view.get(1).is_none());

        backing.borrow_mut().push(20);
        assert_eq!(*view.get(1).unwrap(), 20);
    }

    #[test]
    fn test_iteration_in_order() {
        let backing = shared((0..10).collect());
        let view = ImmutableArray::new(backing);

        let collected: Vec<i32> = view.iter().map(|item| *item).collect();
        assert_eq!(collected, (0..10).collect::<Vec<i32>>());
    }

    #[test]
    fn test_iteration_is_restartable() {
        let backing = shared(vec![1, 2, 3]);
        let view = ImmutableArray::new(backing);

        let first: Vec<i32> = view.iter().map(|item| *item).collect();
        let second: Vec<i32> = view.iter().map(|item| *item).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_iteration_sees_appends() {
        let backing = shared(vec![1, 2]);
        let view = ImmutableArray::new(Rc::clone(&backing));

        let mut iter = view.iter();
        assert_eq!(*iter.next().unwrap(), 1);

        backing.borrow_mut().push(3);

        assert_eq!(*iter.next().unwrap(), 2);
        assert_eq!(*iter.next().unwrap(), 3);
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_view_leaves_backing_unchanged() {
        let backing = shared(vec![1, 2, 3]);
        let view = ImmutableArray::new(Rc::clone(&backing));

        let _ = view.len();
        let _ = view.get(1);
        let _ = view.contains(&2);
        for _ in view.iter() {}

        assert_eq!(*backing.borrow(), vec![1, 2, 3]);
    }

    #[test]
    fn test_contains_and_index_of() {
        let backing = shared(vec![5, 7, 9]);
        let view = ImmutableArray::new(backing);

        assert!(view.contains(&7));
        assert!(!view.contains(&8));
        assert_eq!(view.index_of(&9), Some(2));
        assert_eq!(view.index_of(&1), None);
    }

    #[test]
    fn test_first_and_last() {
        let backing = shared(vec![4, 5, 6]);
        let view = ImmutableArray::new(backing);

        assert_eq!(*view.first().unwrap(), 4);
        assert_eq!(*view.last().unwrap(), 6);

        let empty = ImmutableArray::new(shared(Vec::new()));
        assert!(empty.first().is_none());
        assert!(empty.last().is_none());
    }

    #[test]
    fn test_clone_shares_backing() {
        let backing = shared(vec![1]);
        let view = ImmutableArray::new(Rc::clone(&backing));
        let cloned = view.clone();

        backing.borrow_mut().push(2);

        assert_eq!(view.len(), 2);
        assert_eq!(cloned.len(), 2);
        assert_eq!(view, cloned);
    }

    #[test]
    fn test_to_vec_copies_out() {
        let backing = shared(vec![1, 2]);
        let view = ImmutableArray::new(Rc::clone(&backing));

        let mut copied = view.to_vec();
        copied.push(3);

        assert_eq!(view.len(), 2);
        assert_eq!(copied, vec![1, 2, 3]);
    }
}
