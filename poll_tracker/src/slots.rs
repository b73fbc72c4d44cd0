/// A fixed-capacity arena of slots.
///
/// All the slots are allocated up front. New entries go to the first empty slot,
/// and occupied slots are never moved or compacted, so the position of an entry
/// is stable for the lifetime of the container.
#[derive(PartialEq, Debug, Clone)]
pub(crate) struct Slots<T> {
    slots: Vec<Option<T>>,
    occupied: usize,
}

impl<T> Slots<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Slots<T> {
        Slots {
            slots: (0..capacity).map(|_| None).collect(),
            occupied: 0,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// The number of occupied slots.
    pub(crate) fn len(&self) -> usize {
        self.occupied
    }

    pub(crate) fn is_full(&self) -> bool {
        self.occupied == self.slots.len()
    }

    /// Places the item in the first empty slot and returns its index.
    /// The item is handed back if every slot is taken.
    pub(crate) fn insert(&mut self, item: T) -> Result<usize, T> {
        match self.slots.iter().position(|s| s.is_none()) {
            Some(idx) => {
                self.slots[idx] = Some(item);
                self.occupied += 1;
                Ok(idx)
            }
            None => Err(item),
        }
    }

    /// Overwrites an occupied slot, returning the previous entry.
    pub(crate) fn replace(&mut self, idx: usize, item: T) -> Option<T> {
        match self.slots.get_mut(idx) {
            Some(slot) if slot.is_some() => slot.replace(item),
            _ => None,
        }
    }

    /// Index of the first occupied slot whose entry matches.
    pub(crate) fn position<P: Fn(&T) -> bool>(&self, pred: P) -> Option<usize> {
        self.slots
            .iter()
            .position(|s| s.as_ref().map(&pred).unwrap_or(false))
    }

    pub(crate) fn get(&self, idx: usize) -> Option<&T> {
        self.slots.get(idx).and_then(|s| s.as_ref())
    }

    pub(crate) fn get_mut(&mut self, idx: usize) -> Option<&mut T> {
        self.slots.get_mut(idx).and_then(|s| s.as_mut())
    }

    /// The occupied slots, in slot order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = &T> {
        self.slots.iter().flatten()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.slots.iter_mut().flatten()
    }
}
