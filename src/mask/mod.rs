//! Column masks: which (x, z) columns a brush may touch.
//!
//! A mask is a pure predicate over the horizontal position of a column.
//! Brushes hold one as `Option<Box<dyn ColumnMask>>`; no mask means every
//! column is included.

use crate::core::types::IVec2;

/// Predicate deciding whether a column participates in an edit.
pub trait ColumnMask {
    /// `column` is world (x, z); returns true to include it
    fn test(&self, column: IVec2) -> bool;
}

impl<F> ColumnMask for F
where
    F: Fn(IVec2) -> bool,
{
    fn test(&self, column: IVec2) -> bool {
        self(column)
    }
}

/// Accepts columns inside an inclusive (x, z) rectangle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FootprintMask {
    pub min: IVec2,
    pub max: IVec2,
}

impl FootprintMask {
    pub fn new(a: IVec2, b: IVec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }
}

impl ColumnMask for FootprintMask {
    fn test(&self, column: IVec2) -> bool {
        column.cmpge(self.min).all() && column.cmple(self.max).all()
    }
}

/// Accepts columns within `radius` of a center column
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CylinderMask {
    pub center: IVec2,
    pub radius: f64,
}

impl CylinderMask {
    pub fn new(center: IVec2, radius: f64) -> Self {
        Self { center, radius }
    }
}

impl ColumnMask for CylinderMask {
    fn test(&self, column: IVec2) -> bool {
        let d = (column - self.center).as_dvec2();
        d.length_squared() <= self.radius * self.radius
    }
}

/// Negates another mask
#[derive(Clone, Copy, Debug)]
pub struct InvertMask<M>(pub M);

impl<M: ColumnMask> ColumnMask for InvertMask<M> {
    fn test(&self, column: IVec2) -> bool {
        !self.0.test(column)
    }
}
