//! A 2D point clustering library that implements iterative and hierarchical
//! unsupervised clustering algorithms.
//!
//! # Crate Layout
//!
//! Inputs are plain [`Point2D`] values (a fixed-size `nalgebra` vector).
//! Each algorithm consumes an ordered set of points and produces either a
//! labeled flat partition or a cluster tree:
//!
//! - [K-means][KMeans] maintains a fixed number of centers, assigns every
//!   point to its nearest center and recomputes centers as cluster means,
//!   step by step until the assignment stabilizes.
//! - [Agglomerative hierarchical clustering][agglomerative_clustering]
//!   starts from one leaf per point and repeatedly merges the two closest
//!   clusters into a [`ClusterTree`], by default under the
//!   [single-linkage][SingleLinkage] criterion.  The criterion is pluggable
//!   through the [`Linkage`] trait.
//!
//! The [`generator`] module samples random point sets (uniform, Gaussian,
//! ring-shaped) from caller-seeded random sources, to build test inputs and
//! default k-means centers.

#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    rust_2018_idioms
)]

mod algorithms;
pub mod generator;
mod geometry;

pub use crate::algorithms::*;
pub use crate::geometry::distance;
pub use crate::geometry::BoundingBox;
pub use crate::geometry::Point2D;

pub use nalgebra;
pub use rayon;
