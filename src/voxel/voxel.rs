//! Voxel data type

/// Single voxel: color, material and flags in 4 bytes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Voxel {
    /// RGB565 encoded color
    pub color: u16,
    /// Material ID
    pub material_id: u8,
    pub flags: u8,
}

impl Voxel {
    /// Air
    pub const EMPTY: Voxel = Voxel {
        color: 0,
        material_id: 0,
        flags: 0,
    };

    /// Solid voxel identified only by material, colorless
    pub const fn material(material_id: u8) -> Self {
        Self {
            color: 0,
            material_id,
            flags: 0,
        }
    }

    /// Check if voxel is empty (air)
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size() {
        assert_eq!(std::mem::size_of::<Voxel>(), 4);
    }

    #[test]
    fn test_empty() {
        assert!(Voxel::EMPTY.is_empty());
        assert!(Voxel::default().is_empty());
        assert!(!Voxel::material(3).is_empty());
        assert!(!Voxel { color: 0xF800, ..Voxel::EMPTY }.is_empty());
    }
}
