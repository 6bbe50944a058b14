use std::fmt;

mod agglomerative;
mod k_means;

pub use agglomerative::agglomerative_clustering;
pub use agglomerative::agglomerative_clustering_with;
pub use agglomerative::ClusterTree;
pub use agglomerative::Linkage;
pub use agglomerative::SingleLinkage;
pub use k_means::KMeans;
pub use k_means::Metadata as KMeansMetadata;

/// Common errors thrown by algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Input point set is empty.
    EmptyInput,

    /// The requested number of clusters is zero.
    ZeroClusters,

    /// Input sets don't have matching lengths.
    InputLenMismatch { expected: usize, actual: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyInput => write!(f, "input point set is empty"),
            Error::ZeroClusters => write!(f, "expected a non-zero number of clusters"),
            Error::InputLenMismatch { expected, actual } => write!(
                f,
                "input sets don't have the same length (expected {expected} items, got {actual})",
            ),
        }
    }
}

impl std::error::Error for Error {}
