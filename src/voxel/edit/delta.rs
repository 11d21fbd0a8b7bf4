//! Edit delta representation.

use crate::core::types::IVec3;
use crate::voxel::voxel::Voxel;

/// Type of edit operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditOp {
    /// Set a single voxel to a specific value
    SetVoxel {
        position: IVec3,
        voxel: Voxel,
    },
    /// Clear a single voxel (make empty)
    ClearVoxel {
        position: IVec3,
    },
}

impl EditOp {
    pub fn position(&self) -> IVec3 {
        match self {
            EditOp::SetVoxel { position, .. } | EditOp::ClearVoxel { position } => *position,
        }
    }

    /// Voxel left at the position once the op is applied
    pub fn result(&self) -> Voxel {
        match self {
            EditOp::SetVoxel { voxel, .. } => *voxel,
            EditOp::ClearVoxel { .. } => Voxel::EMPTY,
        }
    }

    pub fn is_clear(&self) -> bool {
        self.result().is_empty()
    }
}

/// A single applied edit with the voxel it replaced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EditDelta {
    /// Unique identifier, increasing in application order
    pub id: u64,
    /// The edit operation
    pub op: EditOp,
    /// Voxel at the position before the edit
    pub before: Voxel,
}

impl EditDelta {
    /// Create a new edit delta.
    pub fn new(id: u64, op: EditOp, before: Voxel) -> Self {
        Self { id, op, before }
    }

    pub fn position(&self) -> IVec3 {
        self.op.position()
    }

    pub fn after(&self) -> Voxel {
        self.op.result()
    }

    /// Op that restores the previous voxel.
    pub fn inverse(&self) -> EditOp {
        if self.before.is_empty() {
            EditOp::ClearVoxel { position: self.position() }
        } else {
            EditOp::SetVoxel { position: self.position(), voxel: self.before }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_voxel_delta() {
        let stone = Voxel::material(1);
        let delta = EditDelta::new(
            1,
            EditOp::SetVoxel { position: IVec3::new(5, 5, 5), voxel: stone },
            Voxel::EMPTY,
        );

        assert_eq!(delta.position(), IVec3::new(5, 5, 5));
        assert_eq!(delta.after(), stone);
        assert_eq!(delta.inverse(), EditOp::ClearVoxel { position: IVec3::new(5, 5, 5) });
    }

    #[test]
    fn test_clear_voxel_delta() {
        let dirt = Voxel::material(2);
        let delta = EditDelta::new(2, EditOp::ClearVoxel { position: IVec3::ZERO }, dirt);

        assert!(delta.op.is_clear());
        assert!(delta.after().is_empty());
        assert_eq!(delta.inverse(), EditOp::SetVoxel { position: IVec3::ZERO, voxel: dirt });
    }
}
