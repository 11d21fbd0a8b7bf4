//! Mathematical utilities and data structures

pub mod region;

pub use region::BlockRegion;
