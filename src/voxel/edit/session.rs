//! Budgeted, undoable edit session over a voxel store.

use crate::core::error::Error;
use crate::core::types::{IVec3, Result};
use crate::voxel::access::{VoxelReader, VoxelWriter};
use crate::voxel::voxel::Voxel;
use super::delta::{EditDelta, EditOp};

/// Records every change made through it and refuses changes past a limit.
///
/// Writes that would leave a voxel unchanged are skipped and not counted.
/// The session never rolls back on its own; call [`EditSession::undo`].
pub struct EditSession<'w, W: ?Sized> {
    world: &'w mut W,
    change_limit: Option<usize>,
    history: Vec<EditDelta>,
    next_id: u64,
}

impl<'w, W: VoxelReader + VoxelWriter + ?Sized> EditSession<'w, W> {
    /// Session without a change limit
    pub fn new(world: &'w mut W) -> Self {
        Self {
            world,
            change_limit: None,
            history: Vec::new(),
            next_id: 1,
        }
    }

    /// Session that fails with `ResourceLimitExceeded` after `limit` changes
    pub fn with_change_limit(world: &'w mut W, limit: usize) -> Self {
        Self {
            change_limit: Some(limit),
            ..Self::new(world)
        }
    }

    pub fn change_limit(&self) -> Option<usize> {
        self.change_limit
    }

    /// Number of voxels changed so far
    pub fn change_count(&self) -> usize {
        self.history.len()
    }

    /// Applied edits, oldest first
    pub fn history(&self) -> &[EditDelta] {
        &self.history
    }

    pub fn into_history(self) -> Vec<EditDelta> {
        self.history
    }

    /// Revert every recorded change, newest first. Returns the number reverted.
    ///
    /// A delta leaves the history only once its write succeeds, so a failed
    /// undo can be retried.
    pub fn undo(&mut self) -> Result<usize> {
        let count = self.history.len();
        while let Some(delta) = self.history.last() {
            let op = delta.inverse();
            self.world.set_voxel(op.position(), op.result())?;
            self.history.pop();
        }
        log::debug!("Undid {} voxel changes", count);
        Ok(count)
    }

    fn apply(&mut self, op: EditOp) -> Result<()> {
        let position = op.position();
        let before = self.world.voxel(position);
        if before == op.result() {
            return Ok(());
        }

        if let Some(limit) = self.change_limit {
            if self.history.len() >= limit {
                log::warn!("Edit session hit its change limit of {}", limit);
                return Err(Error::ResourceLimitExceeded { limit });
            }
        }

        self.world.set_voxel(position, op.result())?;
        self.history.push(EditDelta::new(self.next_id, op, before));
        self.next_id += 1;
        Ok(())
    }
}

impl<'w, W: VoxelReader + ?Sized> VoxelReader for EditSession<'w, W> {
    fn voxel(&self, pos: IVec3) -> Voxel {
        self.world.voxel(pos)
    }
}

impl<'w, W: VoxelReader + VoxelWriter + ?Sized> VoxelWriter for EditSession<'w, W> {
    fn set_voxel(&mut self, pos: IVec3, voxel: Voxel) -> Result<()> {
        let op = if voxel.is_empty() {
            EditOp::ClearVoxel { position: pos }
        } else {
            EditOp::SetVoxel { position: pos, voxel }
        };
        self.apply(op)
    }

    fn clear_voxel(&mut self, pos: IVec3) -> Result<()> {
        self.apply(EditOp::ClearVoxel { position: pos })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voxel::world::VoxelWorld;

    /// World whose writes can be switched off
    struct FlakyWorld {
        inner: VoxelWorld,
        failing: bool,
    }

    impl VoxelReader for FlakyWorld {
        fn voxel(&self, pos: IVec3) -> Voxel {
            self.inner.get(pos)
        }
    }

    impl VoxelWriter for FlakyWorld {
        fn set_voxel(&mut self, pos: IVec3, voxel: Voxel) -> Result<()> {
            if self.failing {
                return Err(Error::Io(std::io::Error::other("store offline")));
            }
            self.inner.set(pos, voxel);
            Ok(())
        }
    }

    #[test]
    fn test_records_changes() {
        let mut world = VoxelWorld::new();
        let mut session = EditSession::new(&mut world);

        session.set_voxel(IVec3::ZERO, Voxel::material(1)).unwrap();
        session.set_voxel(IVec3::Y, Voxel::material(1)).unwrap();
        session.clear_voxel(IVec3::ZERO).unwrap();

        assert_eq!(session.change_count(), 3);
        let ids: Vec<u64> = session.history().iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        drop(session);
        assert_eq!(world.voxel_count(), 1);
    }

    #[test]
    fn test_noop_writes_not_counted() {
        let mut world = VoxelWorld::new();
        world.set(IVec3::ZERO, Voxel::material(4));
        let mut session = EditSession::with_change_limit(&mut world, 0);

        session.set_voxel(IVec3::ZERO, Voxel::material(4)).unwrap();
        session.clear_voxel(IVec3::X).unwrap();
        assert_eq!(session.change_count(), 0);
    }

    #[test]
    fn test_change_limit() {
        let mut world = VoxelWorld::new();
        let mut session = EditSession::with_change_limit(&mut world, 2);

        session.set_voxel(IVec3::new(0, 0, 0), Voxel::material(1)).unwrap();
        session.set_voxel(IVec3::new(0, 1, 0), Voxel::material(1)).unwrap();
        let err = session.set_voxel(IVec3::new(0, 2, 0), Voxel::material(1)).unwrap_err();

        assert!(matches!(err, Error::ResourceLimitExceeded { limit: 2 }));
        assert_eq!(session.change_count(), 2);
        drop(session);
        assert!(world.get(IVec3::new(0, 2, 0)).is_empty());
    }

    #[test]
    fn test_undo_restores_world() {
        let mut world = VoxelWorld::new();
        let grass = Voxel::material(3);
        world.set(IVec3::new(1, 0, 1), grass);

        let mut session = EditSession::new(&mut world);
        session.clear_voxel(IVec3::new(1, 0, 1)).unwrap();
        session.set_voxel(IVec3::new(1, 1, 1), Voxel::material(5)).unwrap();
        session.set_voxel(IVec3::new(1, 1, 1), Voxel::material(6)).unwrap();

        assert_eq!(session.undo().unwrap(), 3);
        assert_eq!(session.change_count(), 0);
        drop(session);

        assert_eq!(world.get(IVec3::new(1, 0, 1)), grass);
        assert!(world.get(IVec3::new(1, 1, 1)).is_empty());
        assert_eq!(world.voxel_count(), 1);
    }

    #[test]
    fn test_failed_undo_keeps_history() {
        let mut world = FlakyWorld { inner: VoxelWorld::new(), failing: false };
        let mut session = EditSession::new(&mut world);
        session.set_voxel(IVec3::ZERO, Voxel::material(2)).unwrap();
        session.set_voxel(IVec3::X, Voxel::material(2)).unwrap();

        session.world.failing = true;
        assert!(matches!(session.undo(), Err(Error::Io(_))));
        assert_eq!(session.change_count(), 2);

        session.world.failing = false;
        assert_eq!(session.undo().unwrap(), 2);
        assert_eq!(session.change_count(), 0);
        drop(session);
        assert_eq!(world.inner.voxel_count(), 0);
    }
}
