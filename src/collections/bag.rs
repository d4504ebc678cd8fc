//! Sparse growable storage
//!
//! A `Bag` maps small integer indices (typically entity or component ids) to
//! values without requiring the indices to be dense. Slots that were never
//! written read back as empty.

/// A growable indexed container tolerant of sparse indices.
///
/// Storage is a contiguous array of optional slots with a logical length.
/// `add` appends at the logical end in amortized O(1); `set` writes at an
/// arbitrary index, growing the storage (doubling capacity when exceeded)
/// and leaving any intermediate slots empty.
///
/// The logical length is the highest index ever occupied or extended plus
/// one, not the number of occupied slots.
///
/// # Index policy
///
/// Indices are `usize`, so negative indices are unrepresentable. Reads at or
/// beyond the logical length return `None` rather than failing.
#[derive(Debug, Clone)]
pub struct Bag<T> {
    slots: Vec<Option<T>>,
}

impl<T> Default for Bag<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Bag<T> {
    /// Create a new empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Create a bag with room for `capacity` slots before reallocating.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
        }
    }

    /// Append a value at the current logical end.
    pub fn add(&mut self, value: T) {
        let index = self.slots.len();
        self.grow_for(index);
        self.slots[index] = Some(value);
    }

    /// Write a value at an arbitrary index, growing as needed.
    ///
    /// Slots between the old logical length and `index` are left empty.
    /// Returns the value previously stored at `index`, if any.
    pub fn set(&mut self, index: usize, value: T) -> Option<T> {
        self.grow_for(index);
        self.slots[index].replace(value)
    }

    /// Get the value at `index`.
    ///
    /// Returns `None` for an empty slot or an index at or beyond the
    /// logical length.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Get a mutable reference to the value at `index`.
    #[must_use]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index).and_then(Option::as_mut)
    }

    /// Remove and return the value at `index`.
    ///
    /// The last slot is moved into the vacated position, so ordering is not
    /// preserved. Returns `None` if the slot was empty or out of range.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.slots.len() {
            return None;
        }
        let last = self.slots.pop()?;
        if index < self.slots.len() {
            std::mem::replace(&mut self.slots[index], last)
        } else {
            last
        }
    }

    /// Remove and return the value in the last slot.
    pub fn remove_last(&mut self) -> Option<T> {
        self.slots.pop().flatten()
    }

    /// Check whether any occupied slot holds `value`.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.slots
            .iter()
            .any(|slot| slot.as_ref() == Some(value))
    }

    /// Get the logical length (highest occupied-or-extended index + 1).
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if the bag has no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Get the number of slots available before reallocation.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Drop all values and reset the logical length to zero.
    ///
    /// Capacity is retained.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Ensure the backing storage covers `index`, doubling capacity when
    /// the current allocation is exceeded.
    fn grow_for(&mut self, index: usize) {
        let needed = index + 1;
        if needed > self.slots.capacity() {
            let target = needed.max(self.slots.capacity().max(1) * 2);
            log::trace!(
                "bag capacity grown {} -> {target}",
                self.slots.capacity()
            );
            self.slots.reserve_exact(target - self.slots.len());
        }
        if needed > self.slots.len() {
            self.slots.resize_with(needed, || None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_get() {
        let mut bag = Bag::new();
        bag.add("a");
        bag.add("b");
        bag.add("c");

        assert_eq!(bag.len(), 3);
        assert_eq!(bag.get(1), Some(&"b"));
    }

    #[test]
    fn test_set_overwrites_in_place() {
        let mut bag = Bag::new();
        bag.add("a");
        bag.add("b");
        bag.add("c");

        let previous = bag.set(1, "d");

        assert_eq!(previous, Some("b"));
        assert_eq!(bag.len(), 3);
        assert_eq!(bag.get(1), Some(&"d"));
    }

    #[test]
    fn test_sparse_set_extends_length() {
        let mut bag = Bag::new();
        bag.add(10);
        bag.set(5, 60);

        assert_eq!(bag.len(), 6);
        assert_eq!(bag.get(0), Some(&10));
        assert_eq!(bag.get(3), None);
        assert_eq!(bag.get(5), Some(&60));
    }

    #[test]
    fn test_capacity_doubles_on_growth() {
        let mut bag = Bag::with_capacity(4);
        bag.set(4, 1);

        assert!(bag.capacity() >= 8);
        assert_eq!(bag.len(), 5);
    }

    #[test]
    fn test_get_out_of_range() {
        let bag: Bag<i32> = Bag::new();
        assert_eq!(bag.get(0), None);
        assert_eq!(bag.get(1000), None);
    }

    #[test]
    fn test_remove_moves_last_into_hole() {
        let mut bag = Bag::new();
        bag.add(1);
        bag.add(2);
        bag.add(3);

        let removed = bag.remove(0);

        assert_eq!(removed, Some(1));
        assert_eq!(bag.len(), 2);
        assert_eq!(bag.get(0), Some(&3));
        assert_eq!(bag.get(1), Some(&2));
    }

    #[test]
    fn test_remove_last_slot() {
        let mut bag = Bag::new();
        bag.add(1);
        bag.add(2);

        assert_eq!(bag.remove(1), Some(2));
        assert_eq!(bag.len(), 1);
        assert_eq!(bag.remove_last(), Some(1));
        assert!(bag.is_empty());
        assert_eq!(bag.remove_last(), None);
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut bag = Bag::new();
        bag.add(1);
        assert_eq!(bag.remove(5), None);
        assert_eq!(bag.len(), 1);
    }

    #[test]
    fn test_contains() {
        let mut bag = Bag::new();
        bag.set(3, "x");

        assert!(bag.contains(&"x"));
        assert!(!bag.contains(&"y"));
    }

    #[test]
    fn test_clear_retains_capacity() {
        let mut bag = Bag::new();
        bag.set(7, 1);
        let capacity = bag.capacity();

        bag.clear();

        assert!(bag.is_empty());
        assert_eq!(bag.len(), 0);
        assert_eq!(bag.capacity(), capacity);
    }

    #[test]
    fn test_get_mut() {
        let mut bag = Bag::new();
        bag.add(1);

        if let Some(value) = bag.get_mut(0) {
            *value = 5;
        }

        assert_eq!(bag.get(0), Some(&5));
    }
}
