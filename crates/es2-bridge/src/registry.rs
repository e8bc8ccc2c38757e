//! Handle → host object registry.
//!
//! The protocol addresses every resource kind through one integer handle
//! namespace. Entries are tagged with their kind so a handle of the wrong
//! kind is a detectable protocol violation instead of undefined host
//! behaviour. Handles are 1-based and allocated consecutively; `0` is never
//! allocated (bind commands use it for the default framebuffer).
//!
//! No protocol command releases a resource today, so live protocol traffic
//! observes strictly monotonic handles. The free-list and per-slot
//! generation exist so a future reclamation extension can reuse slots
//! without changing this table's shape.

use es2_protocol::Handle;

use crate::backend::GlObject;
use crate::error::BridgeError;

/// Discriminant stored with every registry entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResourceKind {
    Texture,
    Shader,
    Program,
    Framebuffer,
    IndexBuffer,
}

#[derive(Clone, Copy, Debug)]
struct Entry {
    kind: ResourceKind,
    object: GlObject,
}

#[derive(Clone, Debug)]
struct Slot {
    generation: u32,
    entry: Option<Entry>,
}

/// Session-scoped table mapping protocol handles to live host objects.
#[derive(Default)]
pub struct ResourceTable {
    slots: Vec<Slot>,
    free: Vec<usize>,
}

impl ResourceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `object` under the next handle. Reuses a vacated slot if one
    /// exists, otherwise appends; with no release traffic this returns
    /// consecutive integers in call order.
    pub fn allocate(&mut self, kind: ResourceKind, object: GlObject) -> Handle {
        let entry = Entry { kind, object };
        let index = match self.free.pop() {
            Some(index) => {
                self.slots[index].entry = Some(entry);
                index
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    entry: Some(entry),
                });
                self.slots.len() - 1
            }
        };
        (index + 1) as Handle
    }

    /// Look up a handle regardless of kind.
    pub fn get(&self, handle: Handle) -> Result<(ResourceKind, GlObject), BridgeError> {
        let slot = handle
            .checked_sub(1)
            .and_then(|i| self.slots.get(i as usize))
            .ok_or(BridgeError::HandleNotFound(handle))?;
        let entry = slot.entry.ok_or(BridgeError::HandleNotFound(handle))?;
        Ok((entry.kind, entry.object))
    }

    /// Look up a handle and require it to be of `kind`.
    pub fn get_kind(&self, handle: Handle, kind: ResourceKind) -> Result<GlObject, BridgeError> {
        let (actual, object) = self.get(handle)?;
        if actual != kind {
            return Err(BridgeError::HandleKindMismatch {
                handle,
                expected: kind,
                actual,
            });
        }
        Ok(object)
    }

    /// Vacate a slot and return the host object that occupied it.
    ///
    /// Not reachable from any protocol command; exists for future resource
    /// reclamation. Bumps the slot generation so stale bookkeeping can be
    /// distinguished from the slot's next occupant.
    pub fn release(&mut self, handle: Handle) -> Result<GlObject, BridgeError> {
        let index = handle
            .checked_sub(1)
            .map(|i| i as usize)
            .filter(|&i| i < self.slots.len())
            .ok_or(BridgeError::HandleNotFound(handle))?;
        let slot = &mut self.slots[index];
        let entry = slot.entry.take().ok_or(BridgeError::HandleNotFound(handle))?;
        slot.generation += 1;
        self.free.push(index);
        Ok(entry.object)
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_are_consecutive_across_kinds() {
        let mut table = ResourceTable::new();
        let kinds = [
            ResourceKind::Texture,
            ResourceKind::Shader,
            ResourceKind::Program,
            ResourceKind::Framebuffer,
            ResourceKind::IndexBuffer,
            ResourceKind::Texture,
        ];
        for (i, kind) in kinds.into_iter().enumerate() {
            let handle = table.allocate(kind, GlObject(100 + i as u64));
            assert_eq!(handle, (i + 1) as Handle);
        }
        assert_eq!(table.len(), kinds.len());
    }

    #[test]
    fn unknown_handles_are_rejected() {
        let mut table = ResourceTable::new();
        table.allocate(ResourceKind::Texture, GlObject(1));

        assert!(matches!(table.get(0), Err(BridgeError::HandleNotFound(0))));
        assert!(matches!(table.get(2), Err(BridgeError::HandleNotFound(2))));
        assert!(matches!(
            table.get(u32::MAX),
            Err(BridgeError::HandleNotFound(_))
        ));
    }

    #[test]
    fn kind_mismatch_is_detected() {
        let mut table = ResourceTable::new();
        let tex = table.allocate(ResourceKind::Texture, GlObject(7));

        assert_eq!(table.get_kind(tex, ResourceKind::Texture).unwrap(), GlObject(7));
        let err = table.get_kind(tex, ResourceKind::Program).unwrap_err();
        assert!(matches!(
            err,
            BridgeError::HandleKindMismatch {
                handle: 1,
                expected: ResourceKind::Program,
                actual: ResourceKind::Texture,
            }
        ));
    }

    #[test]
    fn released_handles_stop_resolving() {
        let mut table = ResourceTable::new();
        let a = table.allocate(ResourceKind::Shader, GlObject(1));
        let b = table.allocate(ResourceKind::Shader, GlObject(2));

        assert_eq!(table.release(a).unwrap(), GlObject(1));
        assert!(matches!(table.get(a), Err(BridgeError::HandleNotFound(1))));
        assert!(table.get(b).is_ok());
        assert!(matches!(
            table.release(a),
            Err(BridgeError::HandleNotFound(1))
        ));

        // The vacated slot is reused by the next allocation.
        let c = table.allocate(ResourceKind::Texture, GlObject(3));
        assert_eq!(c, a);
        assert_eq!(table.get(c).unwrap(), (ResourceKind::Texture, GlObject(3)));
    }
}
