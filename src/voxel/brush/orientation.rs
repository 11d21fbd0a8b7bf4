//! Brush orientations and the block regions they span

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::Error;
use crate::core::types::DVec3;
use crate::math::BlockRegion;

/// Extra blocks a brush region reaches past its radius in the orientation's direction
pub const DEFAULT_REACH: f64 = 10.0;

/// World axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Get unit vector for this axis
    pub fn to_dvec3(self) -> DVec3 {
        match self {
            Axis::X => DVec3::X,
            Axis::Y => DVec3::Y,
            Axis::Z => DVec3::Z,
        }
    }
}

/// Direction a smoothing brush reaches toward.
///
/// North is -Z, South +Z, West -X, East +X.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Orientation {
    #[default]
    Up,
    Down,
    North,
    South,
    East,
    West,
}

impl Orientation {
    pub const ALL: [Orientation; 6] = [
        Orientation::Up,
        Orientation::Down,
        Orientation::North,
        Orientation::South,
        Orientation::East,
        Orientation::West,
    ];

    /// Extended axis and the side (+1 / -1) it is extended on
    pub fn axis_sign(self) -> (Axis, i32) {
        match self {
            Orientation::Up => (Axis::Y, 1),
            Orientation::Down => (Axis::Y, -1),
            Orientation::North => (Axis::Z, -1),
            Orientation::South => (Axis::Z, 1),
            Orientation::East => (Axis::X, 1),
            Orientation::West => (Axis::X, -1),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Orientation::Up => "up",
            Orientation::Down => "down",
            Orientation::North => "north",
            Orientation::South => "south",
            Orientation::East => "east",
            Orientation::West => "west",
        }
    }

    /// Unit vector pointing the way this orientation reaches
    pub fn direction(self) -> DVec3 {
        let (axis, sign) = self.axis_sign();
        axis.to_dvec3() * sign as f64
    }

    /// Block region spanned by a brush at `anchor`.
    ///
    /// The box is `radius` on every side, plus `reach` along the orientation.
    /// Negative radius counts as zero.
    pub fn region(self, anchor: DVec3, radius: f64, reach: f64) -> BlockRegion {
        let half = DVec3::splat(radius.max(0.0));
        let mut min = anchor - half;
        let mut max = anchor + half;

        let (axis, sign) = self.axis_sign();
        let push = axis.to_dvec3() * reach.max(0.0);
        if sign > 0 {
            max += push;
        } else {
            min -= push;
        }

        BlockRegion::from_corners(min, max)
    }
}

/// Brush region with the default reach
pub fn derive_region(anchor: DVec3, radius: f64, orientation: Orientation) -> BlockRegion {
    orientation.region(anchor, radius, DEFAULT_REACH)
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Orientation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Orientation::ALL
            .into_iter()
            .find(|o| o.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidOrientation(s.to_string()))
    }
}

impl TryFrom<String> for Orientation {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Orientation> for String {
    fn from(o: Orientation) -> Self {
        o.name().to_string()
    }
}

impl TryFrom<u8> for Orientation {
    type Error = Error;

    /// Index into [`Orientation::ALL`]
    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Orientation::ALL
            .get(id as usize)
            .copied()
            .ok_or_else(|| Error::InvalidOrientation(format!("id {}", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::IVec3;

    #[test]
    fn test_up_region_at_origin() {
        for r in 0..6 {
            let region = derive_region(DVec3::ZERO, r as f64, Orientation::Up);
            assert_eq!(region.min, IVec3::splat(-r));
            assert_eq!(region.max, IVec3::new(r, r + 10, r));
        }
    }

    #[test]
    fn test_each_orientation_extends_its_side() {
        let anchor = DVec3::new(100.0, 64.0, -20.0);
        let r = 3;
        let base_min = IVec3::new(97, 61, -23);
        let base_max = IVec3::new(103, 67, -17);

        let cases = [
            (Orientation::Up, base_min, base_max + IVec3::new(0, 10, 0)),
            (Orientation::Down, base_min - IVec3::new(0, 10, 0), base_max),
            (Orientation::North, base_min - IVec3::new(0, 0, 10), base_max),
            (Orientation::South, base_min, base_max + IVec3::new(0, 0, 10)),
            (Orientation::West, base_min - IVec3::new(10, 0, 0), base_max),
            (Orientation::East, base_min, base_max + IVec3::new(10, 0, 0)),
        ];
        for (orientation, min, max) in cases {
            let region = derive_region(anchor, r as f64, orientation);
            assert_eq!((region.min, region.max), (min, max), "{}", orientation);
        }
    }

    #[test]
    fn test_regions_exceed_symmetric_cube() {
        for r in [0.0, 1.0, 2.5, 8.0] {
            let cube = BlockRegion::from_corners(DVec3::splat(-r), DVec3::splat(r));
            for orientation in Orientation::ALL {
                let region = derive_region(DVec3::ZERO, r, orientation);
                assert!(region.volume() > cube.volume(), "{} r={}", orientation, r);
            }
        }
    }

    #[test]
    fn test_zero_radius_is_single_column() {
        let region = derive_region(DVec3::new(4.0, 4.0, 4.0), 0.0, Orientation::Up);
        assert_eq!(region.column_count(), 1);
        assert_eq!(region.height(), 11);
    }

    #[test]
    fn test_negative_radius_clamped() {
        let region = derive_region(DVec3::ZERO, -5.0, Orientation::East);
        assert_eq!(region, derive_region(DVec3::ZERO, 0.0, Orientation::East));
    }

    #[test]
    fn test_fractional_anchor_floors() {
        let region = derive_region(DVec3::new(0.5, 0.5, 0.5), 1.0, Orientation::Down);
        assert_eq!(region.min, IVec3::new(-1, -11, -1));
        assert_eq!(region.max, IVec3::new(1, 1, 1));
    }

    #[test]
    fn test_direction() {
        assert_eq!(Orientation::Up.direction(), DVec3::Y);
        assert_eq!(Orientation::North.direction(), -DVec3::Z);
        assert_eq!(Orientation::West.direction(), -DVec3::X);
    }

    #[test]
    fn test_parse() {
        assert_eq!("up".parse::<Orientation>().unwrap(), Orientation::Up);
        assert_eq!(" South ".parse::<Orientation>().unwrap(), Orientation::South);
        for o in Orientation::ALL {
            assert_eq!(o.to_string().parse::<Orientation>().unwrap(), o);
        }
        assert!(matches!("sideways".parse::<Orientation>(), Err(Error::InvalidOrientation(_))));
    }

    #[test]
    fn test_from_id() {
        assert_eq!(Orientation::try_from(0u8).unwrap(), Orientation::Up);
        assert_eq!(Orientation::try_from(5u8).unwrap(), Orientation::West);
        assert!(matches!(Orientation::try_from(6u8), Err(Error::InvalidOrientation(_))));
    }

    #[test]
    fn test_serde_uses_names() {
        let json = serde_json::to_string(&Orientation::East).unwrap();
        assert_eq!(json, "\"east\"");
        let parsed: Orientation = serde_json::from_str("\"down\"").unwrap();
        assert_eq!(parsed, Orientation::Down);
        let err = serde_json::from_str::<Orientation>("\"diagonal\"").unwrap_err();
        assert!(err.to_string().contains("Invalid orientation"));
    }
}
