use thiserror::Error;

/// Errors returned by the selection routines.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested rank does not name an element of the collection.
    /// An empty collection reports `len == 0` here.
    #[error("rank {rank} is out of bounds for a collection of length {len}")]
    InvalidRank { rank: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
