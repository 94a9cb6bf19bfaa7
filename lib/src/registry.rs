//! The named-graph registry: owns the default graph and the mapping from
//! graph name to graph, creating entries lazily on first touch.

use crate::errors::DatasetError;
use crate::graph::{Graph, GraphMaker};
use crate::Result;
use log::debug;
use oxigraph::model::{NamedOrBlankNode, NamedOrBlankNodeRef};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Owns the single default graph and the set of named graphs.
///
/// The registry key set only grows: entries are created by [`graph`]
/// (see its note on creation-on-touch) and are never removed by this
/// layer. Clearing all triples from a graph leaves its entry in place.
///
/// [`graph`]: GraphRegistry::graph
#[derive(Debug)]
pub struct GraphRegistry {
    maker: Box<dyn GraphMaker>,
    graphs: HashMap<NamedOrBlankNode, Box<dyn Graph>>,
    default_graph: Box<dyn Graph>,
}

impl GraphRegistry {
    /// Builds a registry whose default graph is produced by `maker`.
    pub fn new(maker: Box<dyn GraphMaker>) -> Result<Self> {
        let default_graph = maker.create().ok_or(DatasetError::DefaultGraphCreation)?;
        Ok(Self {
            maker,
            graphs: HashMap::new(),
            default_graph,
        })
    }

    /// Builds a registry around an existing default graph. The graph is
    /// owned by the registry from here on; named graphs still come from
    /// `maker`.
    pub fn with_default_graph(default_graph: Box<dyn Graph>, maker: Box<dyn GraphMaker>) -> Self {
        Self {
            maker,
            graphs: HashMap::new(),
            default_graph,
        }
    }

    /// The always-present default graph. Never fails, never creates.
    pub fn default_graph(&self) -> &dyn Graph {
        self.default_graph.as_ref()
    }

    pub fn default_graph_mut(&mut self) -> &mut dyn Graph {
        self.default_graph.as_mut()
    }

    /// Resolves `name` to its graph, creating and registering an empty one
    /// if `name` has not been seen before.
    ///
    /// Creation-on-touch: this single lookup path serves both mutation and
    /// query call sites, so a mere pattern query against an unseen name
    /// registers an empty graph for it. Long-running query workloads over
    /// arbitrary graph names will grow the registry accordingly.
    ///
    /// If the maker cannot produce a graph, the error is surfaced
    /// immediately and the registry is left unchanged.
    pub fn graph(&mut self, name: NamedOrBlankNodeRef<'_>) -> Result<&mut dyn Graph> {
        match self.graphs.entry(name.into_owned()) {
            Entry::Occupied(entry) => Ok(entry.into_mut().as_mut()),
            Entry::Vacant(entry) => {
                let graph = self
                    .maker
                    .create()
                    .ok_or_else(|| DatasetError::GraphCreation(name.to_string()))?;
                debug!("created graph {}", name);
                Ok(entry.insert(graph).as_mut())
            }
        }
    }

    /// Non-creating lookup of an existing entry.
    pub fn get(&self, name: NamedOrBlankNodeRef<'_>) -> Option<&dyn Graph> {
        self.graphs.get(&name.into_owned()).map(|g| g.as_ref())
    }

    /// True if `name` is registered, without touching the creation path.
    pub fn contains(&self, name: NamedOrBlankNodeRef<'_>) -> bool {
        self.graphs.contains_key(&name.into_owned())
    }

    /// Iterator over the names of currently registered graphs, each exactly
    /// once, in no particular order.
    pub fn graph_names(&self) -> impl Iterator<Item = &NamedOrBlankNode> {
        self.graphs.keys()
    }

    /// Iterator over `(name, graph)` pairs for currently registered graphs.
    pub fn iter(&self) -> impl Iterator<Item = (&NamedOrBlankNode, &dyn Graph)> {
        self.graphs
            .iter()
            .map(|(name, graph)| (name, graph.as_ref()))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&NamedOrBlankNode, &mut dyn Graph)> {
        self.graphs
            .iter_mut()
            .map(|(name, graph)| (name, graph.as_mut()))
    }

    /// Number of named graphs. The default graph is not counted, and
    /// triples are not counted.
    pub fn len(&self) -> usize {
        self.graphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graphs.is_empty()
    }
}
