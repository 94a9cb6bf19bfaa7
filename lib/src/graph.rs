//! Pluggable triple storage: the `Graph` and `GraphMaker` traits, plus the
//! in-memory implementations the dataset uses by default.

use oxigraph::model::{
    Graph as OxigraphGraph, NamedNodeRef, NamedOrBlankNodeRef, TermRef, Triple, TripleRef,
};
use std::fmt::Debug;

/// A mutable collection of subject-predicate-object triples.
///
/// Implementations own storage and indexing; the dataset layer only routes
/// operations here and never inspects graph internals. A `None` in any
/// position of `triples_for_pattern` matches every term.
pub trait Graph: Debug + Send + Sync {
    /// Adds a triple to the graph. Returns `true` if the triple was not
    /// already present. Inserting an existing triple is a no-op.
    fn insert(&mut self, triple: TripleRef<'_>) -> bool;

    /// Removes a triple from the graph. Returns `true` if the triple was
    /// present. Removing an absent triple is a no-op, not an error.
    fn remove(&mut self, triple: TripleRef<'_>) -> bool;

    /// Returns a lazy iterator over the triples matching the pattern.
    fn triples_for_pattern<'a>(
        &'a self,
        subject: Option<NamedOrBlankNodeRef<'a>>,
        predicate: Option<NamedNodeRef<'a>>,
        object: Option<TermRef<'a>>,
    ) -> Box<dyn Iterator<Item = Triple> + 'a>;

    /// Number of triples in the graph.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Produces new empty graphs on demand for the dataset's lazy creation path.
///
/// Returning `None` signals that no graph can be created; the dataset
/// treats that as a configuration error, not a soft failure.
pub trait GraphMaker: Debug + Send + Sync {
    fn create(&self) -> Option<Box<dyn Graph>>;
}

/// In-memory [`Graph`] backed by `oxigraph::model::Graph`.
#[derive(Debug, Default)]
pub struct MemGraph {
    triples: OxigraphGraph,
}

impl MemGraph {
    pub fn new() -> Self {
        Self {
            triples: OxigraphGraph::new(),
        }
    }
}

impl Graph for MemGraph {
    fn insert(&mut self, triple: TripleRef<'_>) -> bool {
        self.triples.insert(triple)
    }

    fn remove(&mut self, triple: TripleRef<'_>) -> bool {
        self.triples.remove(triple)
    }

    fn triples_for_pattern<'a>(
        &'a self,
        subject: Option<NamedOrBlankNodeRef<'a>>,
        predicate: Option<NamedNodeRef<'a>>,
        object: Option<TermRef<'a>>,
    ) -> Box<dyn Iterator<Item = Triple> + 'a> {
        Box::new(
            self.triples
                .iter()
                .filter(move |t| {
                    subject.map_or(true, |s| t.subject == s)
                        && predicate.map_or(true, |p| t.predicate == p)
                        && object.map_or(true, |o| t.object == o)
                })
                .map(|t| t.into_owned()),
        )
    }

    fn len(&self) -> usize {
        self.triples.len()
    }
}

/// [`GraphMaker`] producing [`MemGraph`]s. This is the default maker and
/// it never fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct MemGraphMaker;

impl GraphMaker for MemGraphMaker {
    fn create(&self) -> Option<Box<dyn Graph>> {
        Some(Box::new(MemGraph::new()))
    }
}
