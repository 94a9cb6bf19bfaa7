//! Error types surfaced by dataset operations.

use std::fmt;

/// Errors that can arise while routing dataset operations to graphs.
///
/// The only failure this layer can produce on its own is a graph maker
/// refusing to create a graph; everything else (removing an absent triple,
/// a pattern matching nothing) is a no-op, not an error.
#[derive(Debug)]
pub enum DatasetError {
    /// The graph maker could not produce the default graph at construction.
    DefaultGraphCreation,
    /// The graph maker could not produce a graph for the named graph.
    GraphCreation(String),
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetError::DefaultGraphCreation => {
                write!(f, "cannot create the default graph")
            }
            DatasetError::GraphCreation(name) => {
                write!(f, "cannot create a graph for {}", name)
            }
        }
    }
}

impl std::error::Error for DatasetError {}
