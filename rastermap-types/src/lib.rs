//! # rastermap-types
//!
//! Plain value types exchanged with the rastermap query surfaces.
//!
//! - **Query types**: `QueryBox`, `RasterRequest`
//! - **Result types**: `RasterResult`, `LocationRecord`
//!
//! All types are serializable with Serde. Field names of the result types
//! match the JSON keys the map front end reads.
//!
//! ## Examples
//!
//! ```rust
//! use rastermap_types::bbox::QueryBox;
//!
//! let campus = QueryBox::new(-122.27, -122.25, 37.88, 37.86);
//! assert!(campus.is_well_formed());
//! assert!((campus.width() - 0.02).abs() < 1e-9);
//! ```

pub mod bbox;
pub mod location;
pub mod raster;
