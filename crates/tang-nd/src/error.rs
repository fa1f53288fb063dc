//! Error types for tang-nd.

use core::fmt;

/// A vector component index was not below the vector's dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OutOfRange {
    /// The requested component index.
    pub index: usize,
    /// Dimension of the vector that was indexed.
    pub len: usize,
}

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "component index {} out of range for vector of dimension {}",
            self.index, self.len
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for OutOfRange {}
