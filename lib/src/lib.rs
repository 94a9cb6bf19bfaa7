//! quadmap — a quad-store view over independently managed RDF graphs.
//!
//! A [`QuadDataset`] pairs one always-present default graph with a registry
//! of named graphs keyed by RDF term. Triple storage lives behind the
//! [`Graph`] trait so storage engines can be swapped without touching the
//! routing logic, and new named graphs are produced lazily by a
//! [`GraphMaker`] the first time a name is touched — by a write *or* by a
//! read.
//!
//! Quick start: add and find quads
//!
//! ```
//! use oxigraph::model::{NamedNode, NamedOrBlankNode, Term};
//! use quadmap::QuadDataset;
//!
//! let mut dataset = QuadDataset::default();
//! let g = NamedNode::new("http://example.org/graph").unwrap();
//! let s = NamedOrBlankNode::from(NamedNode::new("http://example.org/alice").unwrap());
//! let p = NamedNode::new("http://xmlns.com/foaf/0.1/knows").unwrap();
//! let o = Term::from(NamedNode::new("http://example.org/bob").unwrap());
//!
//! dataset
//!     .insert_in_graph(g.as_ref().into(), s.as_ref(), p.as_ref(), o.as_ref())
//!     .unwrap();
//!
//! // One quad, tagged with its graph, from a wildcard search of all
//! // named graphs.
//! let quads: Vec<_> = dataset.quads_in_named_graphs(None, None, None).collect();
//! assert_eq!(quads.len(), 1);
//! assert_eq!(dataset.num_graphs(), 1);
//! ```
//!
//! The default graph is addressed separately and is never part of the
//! named-graph registry:
//!
//! ```
//! use oxigraph::model::{NamedNode, NamedOrBlankNode, Term};
//! use quadmap::QuadDataset;
//!
//! let mut dataset = QuadDataset::default();
//! let s = NamedOrBlankNode::from(NamedNode::new("urn:s").unwrap());
//! let p = NamedNode::new("urn:p").unwrap();
//! let o = Term::from(NamedNode::new("urn:o").unwrap());
//!
//! dataset.insert_in_default(s.as_ref(), p.as_ref(), o.as_ref());
//! assert_eq!(dataset.quads_in_default(None, None, None).count(), 1);
//! assert_eq!(dataset.num_graphs(), 0);
//! ```

pub mod dataset;
pub mod errors;
pub mod graph;
pub mod registry;

pub use dataset::QuadDataset;
pub use errors::DatasetError;
pub use graph::{Graph, GraphMaker, MemGraph, MemGraphMaker};
pub use registry::GraphRegistry;

/// Crate-level result type using the dataset error.
pub type Result<T> = std::result::Result<T, DatasetError>;
