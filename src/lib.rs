//! Tile rastering and location search for a street map.
//!
//! ## Features
//! - **Tile selection**: coarsest zoom depth meeting a viewport's resolution,
//!   clamped tile index ranges, and the exact extent of the chosen tiles
//! - **Street graph**: undirected adjacency with isolated-vertex pruning
//! - **Nearest vertex**: great-circle scan without touching shared state
//! - **Name search**: case and punctuation insensitive trie with prefix listing
//!
//! Everything is built once and then read-only, so a built [`LocationIndex`]
//! and a [`TileSelector`] can be shared across threads without locking.
//!
//! ```rust
//! use rastermap::prelude::*;
//!
//! let selector = TileSelector::new(&Config::default())?;
//! let request = RasterRequest::new(
//!     QueryBox::new(-122.2700, -122.2500, 37.8800, 37.8600),
//!     800.0,
//!     600.0,
//! );
//! let raster = selector.raster(&request);
//! assert!(raster.query_success);
//!
//! let mut builder = IndexBuilder::new();
//! builder.add_vertex(1, -122.2587, 37.8756)?;
//! builder.add_vertex(2, -122.2590, 37.8760)?;
//! builder.set_attribute(1, "name", "Soda Hall")?;
//! builder.add_edge(1, 2)?;
//! let index = builder.build();
//!
//! assert_eq!(index.search_by_prefix("so"), vec!["Soda Hall"]);
//! assert_eq!(index.closest(-122.2591, 37.8761)?, 2);
//! # Ok::<(), rastermap::RasterMapError>(())
//! ```

pub mod builder;
pub mod compute;
pub mod config;
pub mod error;
pub mod graph;
pub mod location;
pub mod raster;
pub mod trie;

pub use builder::IndexBuilder;
pub use config::Config;
pub use error::{RasterMapError, Result};
pub use graph::{NearestVertexFinder, SpatialGraph, Vertex, VertexId};
pub use location::LocationIndex;
pub use raster::{DepthScale, TileGrid, TileSelector, TileSpan};
pub use trie::PrefixIndex;

pub use rastermap_types::bbox::{QueryBox, RasterRequest};
pub use rastermap_types::location::LocationRecord;
pub use rastermap_types::raster::RasterResult;

pub use compute::geo_math::{bearing, distance};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {

    pub use crate::{Config, IndexBuilder, RasterMapError, Result};

    pub use crate::{LocationIndex, LocationRecord};

    pub use crate::{QueryBox, RasterRequest, RasterResult, TileSelector};

    pub use crate::{VertexId, bearing, distance};

    pub use geo::Point;
}
