//! Generational handle table backing the engine registry.
//!
//! Handles crossing the C boundary outlive any Rust borrow, so a raw
//! index would let a caller reach whatever value later reuses the slot.
//! Each slot carries a generation stamp instead: unregistering bumps the
//! stamp, and a handle whose stamp no longer matches resolves to `None`.
//! Unregistering twice is therefore a safe no-op.

/// Packed handle: generation in the upper 32 bits, slot in the lower 32.
/// Zero is never a live handle (a fresh table starts at generation 1).
fn pack(generation: u32, slot: u32) -> u64 {
    ((generation as u64) << 32) | slot as u64
}

fn unpack(handle: u64) -> (u32, u32) {
    ((handle >> 32) as u32, handle as u32)
}

/// Sentinel terminating the vacant chain.
const END: u32 = u32::MAX;

enum Entry<T> {
    Occupied { generation: u32, value: T },
    /// Vacant entry doubling as a free-list node; `next` is the slot index
    /// of the next vacancy or [`END`]. `generation` is the stamp the slot
    /// will hand out when reoccupied.
    Vacant { generation: u32, next: u32 },
}

/// Maps opaque `u64` handles to owned values.
///
/// Vacant slots form an intrusive free list through the entries
/// themselves, so the table is a single `Vec`. A slot whose generation
/// would wrap back to 0 is retired instead of relinked, so no handle from
/// an earlier epoch can ever match again.
pub(crate) struct HandleTable<T> {
    entries: Vec<Entry<T>>,
    free_head: u32,
}

impl<T> HandleTable<T> {
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            free_head: END,
        }
    }

    pub fn insert(&mut self, value: T) -> u64 {
        if self.free_head != END {
            let slot = self.free_head;
            let entry = &mut self.entries[slot as usize];
            let generation = match *entry {
                Entry::Vacant { generation, next } => {
                    self.free_head = next;
                    generation
                }
                // Occupied entries are never on the free list.
                Entry::Occupied { generation, .. } => generation,
            };
            *entry = Entry::Occupied { generation, value };
            pack(generation, slot)
        } else {
            let slot = self.entries.len() as u32;
            self.entries.push(Entry::Occupied {
                generation: 1,
                value,
            });
            pack(1, slot)
        }
    }

    pub fn get(&self, handle: u64) -> Option<&T> {
        let (generation, slot) = unpack(handle);
        match self.entries.get(slot as usize)? {
            Entry::Occupied {
                generation: g,
                value,
            } if *g == generation => Some(value),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, handle: u64) -> Option<&mut T> {
        let (generation, slot) = unpack(handle);
        match self.entries.get_mut(slot as usize)? {
            Entry::Occupied {
                generation: g,
                value,
            } if *g == generation => Some(value),
            _ => None,
        }
    }

    /// Remove and return the value, staling the handle.
    ///
    /// The vacated slot advertises the next stamp and rejoins the free
    /// list, unless that stamp would wrap to 0; then the slot is left off
    /// the list for good.
    pub fn remove(&mut self, handle: u64) -> Option<T> {
        let (generation, slot) = unpack(handle);
        let entry = self.entries.get_mut(slot as usize)?;
        match entry {
            Entry::Occupied { generation: g, .. } if *g == generation => {
                let next_generation = generation.wrapping_add(1);
                let replacement = Entry::Vacant {
                    generation: next_generation,
                    next: if next_generation == 0 {
                        END
                    } else {
                        self.free_head
                    },
                };
                let Entry::Occupied { value, .. } = std::mem::replace(entry, replacement) else {
                    unreachable!();
                };
                if next_generation != 0 {
                    self.free_head = slot;
                }
                Some(value)
            }
            _ => None,
        }
    }
}
