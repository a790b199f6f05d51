//! Error types for alignviz operations.
//!
//! Conversion itself never fails. Errors come from building a graph with
//! inconsistent input and from the I/O boundary where documents are written out.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for alignviz operations.
pub type Result<T> = std::result::Result<T, VizError>;

/// Error type for graph construction and document output.
#[derive(Error, Debug)]
pub enum VizError {
    /// The output sink could not be opened or written.
    #[error("I/O error writing {}: {source}", path.display())]
    Io {
        /// Destination that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Writing to a caller-supplied stream failed.
    #[error("I/O error writing stream: {0}")]
    Stream(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error details
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A link endpoint does not refer to a node of the graph
    #[error("Node not found: {index}")]
    NodeNotFound {
        /// Index that was looked up
        index: usize,
    },

    /// Link weights must be finite and non-negative
    #[error("Invalid weight {weight} on link {link_id}")]
    InvalidWeight {
        /// Id of the rejected link
        link_id: String,
        /// Offending weight
        weight: f64,
    },
}

impl VizError {
    /// Create an I/O error for the given destination.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a serialization error from a message and optional source.
    pub fn serialization<E>(message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Serialization {
            message: message.into(),
            source: source.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        }
    }
}
