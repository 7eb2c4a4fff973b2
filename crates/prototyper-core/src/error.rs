//! Error handling for Prototyper
//!
//! Provides error types for the document layers:
//! - Registry errors (identifier bookkeeping)
//! - Model errors (variant and geometry contract violations)
//!
//! All error types use `thiserror` for ergonomic error handling.

use crate::id::ObjectId;
use thiserror::Error;

/// Registry error type
///
/// Represents violations of the one-live-object-per-identifier rule and
/// lookups of identifiers that are not currently registered.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    /// An object is already registered under this identifier
    #[error("Identifier already registered: {id}")]
    DuplicateId {
        /// The identifier that is already live.
        id: ObjectId,
    },

    /// No object is registered under this identifier
    #[error("Identifier not found: {id}")]
    NotFound {
        /// The identifier that did not resolve.
        id: ObjectId,
    },
}

/// Model error type
///
/// Represents operations that reached an object of the wrong kind or asked
/// for geometry the object does not have.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// The object resolved, but to a variant the operation cannot handle
    #[error("Object {id} is a {found}, expected {expected}")]
    VariantMismatch {
        /// The identifier of the object.
        id: ObjectId,
        /// The variant the operation requires.
        expected: String,
        /// The variant actually registered.
        found: String,
    },

    /// A polyline node index is outside the node range
    #[error("Node index {index} out of range for {id} ({node_count} nodes)")]
    NodeOutOfRange {
        /// The polyline identifier.
        id: ObjectId,
        /// The requested node index.
        index: usize,
        /// The number of nodes on the polyline.
        node_count: usize,
    },

    /// A segment was not part of the polyline
    #[error("Segment not found on polyline {id}")]
    SegmentNotFound {
        /// The polyline identifier.
        id: ObjectId,
    },

    /// A group operation was requested with no members
    #[error("Cannot group an empty selection")]
    EmptyGroup,
}

/// Main error type for Prototyper
///
/// Combines all error types into a single enum for convenient error handling.
#[derive(Error, Debug)]
pub enum Error {
    /// Registry error
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Model error
    #[error(transparent)]
    Model(#[from] ModelError),
}

impl Error {
    /// Check if this error means an identifier did not resolve
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Registry(RegistryError::NotFound { .. }))
    }

    /// Check if this is a variant mismatch
    pub fn is_variant_mismatch(&self) -> bool {
        matches!(self, Error::Model(ModelError::VariantMismatch { .. }))
    }
}

/// Result type for Prototyper operations
pub type Result<T> = std::result::Result<T, Error>;
