//! Error types for vne operations.
//!
//! Most of the math API treats bad input as a precondition violation and
//! fails fast (see the `# Panics` sections on `Mat3` and `Mat4`). Every
//! such operation also has a checked twin that reports the problem through
//! this [`Error`] enum instead, and the transform graph uses it for stale
//! node handles.
//!
//! # Usage
//!
//! ```rust
//! use vne_core::{Error, Result};
//!
//! fn column(index: usize) -> Result<usize> {
//!     if index >= 4 {
//!         return Err(Error::index_out_of_bounds(index, 4));
//!     }
//!     Ok(index)
//! }
//!
//! assert!(column(7).is_err());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - `vne-math` - Checked column/row access, inverse and division
//! - `vne-scene` - Transform graph handle validation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the checked math API and the transform graph.
///
/// # Categories
///
/// - **Precondition errors**: [`IndexOutOfBounds`](Error::IndexOutOfBounds),
///   [`NearZeroDivisor`](Error::NearZeroDivisor)
/// - **Numerical degeneracy**: [`SingularMatrix`](Error::SingularMatrix)
/// - **Graph errors**: [`NodeNotFound`](Error::NodeNotFound),
///   [`CyclicParent`](Error::CyclicParent)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Column or row index is not smaller than the matrix order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vne_core::Error;
    ///
    /// let err = Error::index_out_of_bounds(4, 4);
    /// assert!(err.to_string().contains("4"));
    /// ```
    #[error("index {index} out of bounds for matrix of order {len}")]
    IndexOutOfBounds {
        /// Requested column or row
        index: usize,
        /// Matrix order (3 or 4)
        len: usize,
    },

    /// The matrix has no inverse.
    #[error("matrix is singular (determinant {determinant})")]
    SingularMatrix {
        /// Determinant that fell under the singularity tolerance
        determinant: f32,
    },

    /// Scalar divisor is too close to zero.
    #[error("divisor {divisor} is too close to zero")]
    NearZeroDivisor {
        /// Offending divisor
        divisor: f32,
    },

    /// Node handle is stale, freed, or belongs to another graph.
    #[error("transform node {index}v{generation} not found")]
    NodeNotFound {
        /// Slot index of the handle
        index: u32,
        /// Generation of the handle
        generation: u32,
    },

    /// Reparenting would make a node its own ancestor.
    #[error("node {node} cannot be parented to {parent}: would create a cycle")]
    CyclicParent {
        /// Slot index of the node being reparented
        node: u32,
        /// Slot index of the requested parent
        parent: u32,
    },
}

impl Error {
    /// Creates an [`Error::IndexOutOfBounds`] error.
    #[inline]
    pub fn index_out_of_bounds(index: usize, len: usize) -> Self {
        Self::IndexOutOfBounds { index, len }
    }

    /// Creates an [`Error::SingularMatrix`] error.
    #[inline]
    pub fn singular(determinant: f32) -> Self {
        Self::SingularMatrix { determinant }
    }

    /// Creates an [`Error::NearZeroDivisor`] error.
    #[inline]
    pub fn near_zero_divisor(divisor: f32) -> Self {
        Self::NearZeroDivisor { divisor }
    }

    /// Creates an [`Error::NodeNotFound`] error.
    #[inline]
    pub fn node_not_found(index: u32, generation: u32) -> Self {
        Self::NodeNotFound { index, generation }
    }

    /// Creates an [`Error::CyclicParent`] error.
    #[inline]
    pub fn cyclic_parent(node: u32, parent: u32) -> Self {
        Self::CyclicParent { node, parent }
    }

    /// Returns `true` if the error comes from a violated precondition
    /// (bad index or near-zero divisor).
    #[inline]
    pub fn is_precondition_error(&self) -> bool {
        matches!(self, Self::IndexOutOfBounds { .. } | Self::NearZeroDivisor { .. })
    }

    /// Returns `true` if this is a transform graph error.
    #[inline]
    pub fn is_graph_error(&self) -> bool {
        matches!(self, Self::NodeNotFound { .. } | Self::CyclicParent { .. })
    }
}
