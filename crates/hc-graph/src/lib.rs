//! hc-graph: path tree layer for hydrocalc.
//!
//! Networks arrive as flat lists of segments joined by node labels
//! (`start`/`end`). This crate turns such a list into an explicit tree:
//!
//! - Label index built once (no repeated linear scans)
//! - Parent and children adjacency in declaration order
//! - Pre-order / post-order traversals for pressure and flow passes
//! - Structural validation (single source, unique end labels, reachability)
//!
//! # Example
//!
//! ```
//! use hc_graph::PathTreeBuilder;
//!
//! let mut builder = PathTreeBuilder::new("RES");
//! let a = builder.add_segment("RES", Some("A"));
//! let b = builder.add_segment("A", Some("B"));
//! let c = builder.add_segment("A", None);
//! let tree = builder.build().unwrap();
//!
//! assert_eq!(tree.source(), a);
//! assert_eq!(tree.children(a), &[b, c]);
//! assert_eq!(tree.parent(b), Some(a));
//! ```

pub mod builder;
pub mod error;
pub mod graph;
pub mod indexing;
pub(crate) mod validate;

pub use builder::PathTreeBuilder;
pub use error::{GraphError, GraphResult};
pub use graph::{PathTree, Segment};
pub use indexing::LabelIndex;
