//! Pure computations shared by the graph and the tile rasterer.
//!
//! - Great-circle distance and bearing on a spherical Earth
//! - Validation of query boxes and coordinates

pub mod geo_math;
pub mod validation;
