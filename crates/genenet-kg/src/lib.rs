//! genenet-kg — Gene interaction graph construction and layout.
//!
//! - `GeneGraph`: undirected simple graph built from fetched edges
//! - `spring_layout`: seeded force-directed 2D layout for drawing
//! - CSV export of the deduplicated edge list

pub mod error;
pub mod export;
pub mod graph;
pub mod layout;

pub use error::{KgError, Result};
pub use export::edges_to_csv;
pub use graph::{GeneEdge, GeneGraph};
pub use layout::{spring_layout, spring_layout_seeded, Layout, Point, SpringConfig, DEFAULT_LAYOUT_SEED};
