//! # Datasets - Synthetic Classification Data (Session 0)
//!
//! Labelled 2-D point sets for exercising small classifiers:
//!
//! - **Graph**: an immutable `(points, labels)` dataset
//! - **Generators**: `Simple`, `Diag`, `Split`, `Xor`, `Circle`, `Spiral`
//! - **Config**: a serde record naming a dataset, its size and seed
//!
//! ## Example
//!
//! ```rust
//! use minitorch_datasets::{DatasetConfig, DatasetKind};
//!
//! let config = DatasetConfig::new(DatasetKind::Simple, 50).with_seed(0);
//! let graph = config.generate()?;
//!
//! assert_eq!(graph.n(), 50);
//! for ((x1, _), label) in graph.iter() {
//!     assert_eq!(label == 1, x1 < 0.5);
//! }
//! # Ok::<(), minitorch_datasets::DatasetError>(())
//! ```

pub mod config;
pub mod error;
pub mod generators;
pub mod graph;

pub use config::DatasetConfig;
pub use error::DatasetError;
pub use generators::{circle, diag, make_pts, simple, spiral, split, xor, DatasetKind};
pub use graph::{Graph, Point};
