//! Opaque `u64` handles for grids owned on the Rust side of the boundary.
//!
//! A handle is `slot << 32 | generation`. Destroying a grid bumps its
//! slot's generation, so the old handle stops resolving and a second
//! destroy reports an invalid handle instead of freeing twice.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Handle {
    slot: u32,
    generation: u32,
}

impl Handle {
    fn from_raw(raw: u64) -> Self {
        Self {
            slot: (raw >> 32) as u32,
            generation: raw as u32,
        }
    }

    fn into_raw(self) -> u64 {
        (u64::from(self.slot) << 32) | u64::from(self.generation)
    }
}

enum Slot<T> {
    Occupied { generation: u32, value: T },
    /// `next` is the generation the next occupant will carry.
    Vacant { next: u32 },
}

/// Grids (or any owned value) addressed by generation-checked handles.
pub(crate) struct HandleTable<T> {
    slots: Vec<Slot<T>>,
    vacant: Vec<u32>,
}

impl<T> HandleTable<T> {
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            vacant: Vec::new(),
        }
    }

    pub fn insert(&mut self, value: T) -> u64 {
        while let Some(slot) = self.vacant.pop() {
            if let Some(Slot::Vacant { next }) = self.slots.get(slot as usize) {
                let generation = *next;
                self.slots[slot as usize] = Slot::Occupied { generation, value };
                return Handle { slot, generation }.into_raw();
            }
        }
        let slot = self.slots.len() as u32;
        self.slots.push(Slot::Occupied {
            generation: 0,
            value,
        });
        Handle {
            slot,
            generation: 0,
        }
        .into_raw()
    }

    /// `None` for destroyed or never-issued handles.
    pub fn get(&self, raw: u64) -> Option<&T> {
        let handle = Handle::from_raw(raw);
        match self.slots.get(handle.slot as usize)? {
            Slot::Occupied { generation, value } if *generation == handle.generation => {
                Some(value)
            }
            _ => None,
        }
    }

    /// Take the value out and invalidate its handle.
    ///
    /// A slot whose generation would wrap to 0 is retired for good: the
    /// first handle ever issued for it must never resolve again.
    pub fn remove(&mut self, raw: u64) -> Option<T> {
        let handle = Handle::from_raw(raw);
        let entry = self.slots.get_mut(handle.slot as usize)?;
        match &*entry {
            Slot::Occupied { generation, .. } if *generation == handle.generation => {}
            _ => return None,
        }
        let next = handle.generation.wrapping_add(1);
        let Slot::Occupied { value, .. } = std::mem::replace(entry, Slot::Vacant { next }) else {
            return None;
        };
        if next != 0 {
            self.vacant.push(handle.slot);
        }
        Some(value)
    }
}
