//! The quad-level dataset: routes 4-tuple operations to the default graph
//! or to a named graph, and stitches graph results back into quads.

use crate::graph::{Graph, GraphMaker, MemGraph, MemGraphMaker};
use crate::registry::GraphRegistry;
use crate::Result;
use oxigraph::model::{
    GraphName, GraphNameRef, NamedNodeRef, NamedOrBlankNode, NamedOrBlankNodeRef, Quad, QuadRef,
    TermRef, Triple, TripleRef,
};

/// A quad store assembled from one default graph and any number of named
/// graphs, each an independent [`Graph`].
///
/// Quads are never stored as such: every operation decomposes its quad
/// into a graph name and a triple, resolves the graph through the
/// [`GraphRegistry`], and delegates. Results flow back the other way, with
/// each triple tagged by the graph it came from ([`GraphName::DefaultGraph`]
/// for the default graph).
///
/// The dataset performs no locking; callers needing concurrent access
/// should wrap it in their own mutual-exclusion boundary.
#[derive(Debug)]
pub struct QuadDataset {
    registry: GraphRegistry,
}

impl Default for QuadDataset {
    fn default() -> Self {
        Self::with_default_graph(Box::new(MemGraph::new()), Box::new(MemGraphMaker))
    }
}

impl QuadDataset {
    /// Builds a dataset whose default graph is produced by `maker`.
    pub fn new(maker: Box<dyn GraphMaker>) -> Result<Self> {
        Ok(Self {
            registry: GraphRegistry::new(maker)?,
        })
    }

    /// Builds a dataset around an existing default graph. The graph is
    /// owned by the dataset for mutation from here on.
    pub fn with_default_graph(default_graph: Box<dyn Graph>, maker: Box<dyn GraphMaker>) -> Self {
        Self {
            registry: GraphRegistry::with_default_graph(default_graph, maker),
        }
    }

    /// The always-present default graph.
    pub fn default_graph(&self) -> &dyn Graph {
        self.registry.default_graph()
    }

    pub fn default_graph_mut(&mut self) -> &mut dyn Graph {
        self.registry.default_graph_mut()
    }

    /// Resolves a named graph, creating and registering it if absent.
    /// See [`GraphRegistry::graph`] for the creation-on-touch semantics.
    pub fn graph(&mut self, name: NamedOrBlankNodeRef<'_>) -> Result<&mut dyn Graph> {
        self.registry.graph(name)
    }

    /// Names of the currently registered graphs, each exactly once, in no
    /// particular order. The default graph has no name and is not listed.
    pub fn graph_names(&self) -> impl Iterator<Item = &NamedOrBlankNode> {
        self.registry.graph_names()
    }

    /// Number of named graphs. The default graph is not counted.
    pub fn num_graphs(&self) -> usize {
        self.registry.len()
    }

    /// Total number of triples across the default graph and all named
    /// graphs.
    pub fn num_triples(&self) -> usize {
        self.registry.default_graph().len()
            + self
                .registry
                .iter()
                .map(|(_, graph)| graph.len())
                .sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.num_triples() == 0
    }

    /// Adds a triple to the default graph.
    pub fn insert_in_default(
        &mut self,
        subject: NamedOrBlankNodeRef<'_>,
        predicate: NamedNodeRef<'_>,
        object: TermRef<'_>,
    ) -> bool {
        self.registry
            .default_graph_mut()
            .insert(TripleRef::new(subject, predicate, object))
    }

    /// Adds a triple to the named graph `graph_name`, creating the graph
    /// if it is not registered yet.
    pub fn insert_in_graph(
        &mut self,
        graph_name: NamedOrBlankNodeRef<'_>,
        subject: NamedOrBlankNodeRef<'_>,
        predicate: NamedNodeRef<'_>,
        object: TermRef<'_>,
    ) -> Result<bool> {
        Ok(self
            .registry
            .graph(graph_name)?
            .insert(TripleRef::new(subject, predicate, object)))
    }

    /// Removes a triple from the default graph. Removing an absent triple
    /// is a no-op.
    pub fn remove_in_default(
        &mut self,
        subject: NamedOrBlankNodeRef<'_>,
        predicate: NamedNodeRef<'_>,
        object: TermRef<'_>,
    ) -> bool {
        self.registry
            .default_graph_mut()
            .remove(TripleRef::new(subject, predicate, object))
    }

    /// Removes a triple from the named graph `graph_name`. The graph is
    /// resolved through the creating lookup, so removing from an unseen
    /// graph registers it empty.
    pub fn remove_in_graph(
        &mut self,
        graph_name: NamedOrBlankNodeRef<'_>,
        subject: NamedOrBlankNodeRef<'_>,
        predicate: NamedNodeRef<'_>,
        object: TermRef<'_>,
    ) -> Result<bool> {
        Ok(self
            .registry
            .graph(graph_name)?
            .remove(TripleRef::new(subject, predicate, object)))
    }

    /// Adds a quad, routing on its graph component.
    pub fn insert(&mut self, quad: QuadRef<'_>) -> Result<bool> {
        let triple = TripleRef::new(quad.subject, quad.predicate, quad.object);
        Ok(self.target_graph(quad.graph_name)?.insert(triple))
    }

    /// Removes a quad, routing on its graph component. Removing an absent
    /// quad is a no-op.
    pub fn remove(&mut self, quad: QuadRef<'_>) -> Result<bool> {
        let triple = TripleRef::new(quad.subject, quad.predicate, quad.object);
        Ok(self.target_graph(quad.graph_name)?.remove(triple))
    }

    /// True if the dataset holds the quad. Shares the creating lookup with
    /// the find path, so probing an unseen named graph registers it.
    pub fn contains(&mut self, quad: QuadRef<'_>) -> Result<bool> {
        let graph = self.target_graph(quad.graph_name)?;
        Ok(graph
            .triples_for_pattern(Some(quad.subject), Some(quad.predicate), Some(quad.object))
            .next()
            .is_some())
    }

    /// Lazy iterator over the default graph's matches, tagged with
    /// [`GraphName::DefaultGraph`]. `None` is a wildcard.
    pub fn quads_in_default<'a>(
        &'a self,
        subject: Option<NamedOrBlankNodeRef<'a>>,
        predicate: Option<NamedNodeRef<'a>>,
        object: Option<TermRef<'a>>,
    ) -> impl Iterator<Item = Quad> + 'a {
        self.registry
            .default_graph()
            .triples_for_pattern(subject, predicate, object)
            .map(|t| Quad::new(t.subject, t.predicate, t.object, GraphName::DefaultGraph))
    }

    /// Lazy iterator over one named graph's matches, tagged with
    /// `graph_name`. The graph is resolved through the creating lookup:
    /// querying an unseen name registers an empty graph and yields nothing.
    pub fn quads_in_graph<'a>(
        &'a mut self,
        graph_name: NamedOrBlankNodeRef<'_>,
        subject: Option<NamedOrBlankNodeRef<'a>>,
        predicate: Option<NamedNodeRef<'a>>,
        object: Option<TermRef<'a>>,
    ) -> Result<impl Iterator<Item = Quad> + 'a> {
        let tag: GraphName = graph_name.into_owned().into();
        let graph = self.registry.graph(graph_name)?;
        Ok(graph
            .triples_for_pattern(subject, predicate, object)
            .map(move |t| Quad::new(t.subject, t.predicate, t.object, tag.clone())))
    }

    /// Lazy iterator over the matches of every named graph, one graph at a
    /// time in registry order (unspecified across graphs). The default
    /// graph is not searched, and no graph is created.
    pub fn quads_in_named_graphs<'a>(
        &'a self,
        subject: Option<NamedOrBlankNodeRef<'a>>,
        predicate: Option<NamedNodeRef<'a>>,
        object: Option<TermRef<'a>>,
    ) -> impl Iterator<Item = Quad> + 'a {
        self.registry.iter().flat_map(move |(name, graph)| {
            let tag: GraphName = name.clone().into();
            graph
                .triples_for_pattern(subject, predicate, object)
                .map(move |t| Quad::new(t.subject, t.predicate, t.object, tag.clone()))
        })
    }

    /// Routed pattern find. `graph_name` selects the default graph, one
    /// named graph (creating it if absent), or, when `None`, the default
    /// graph followed by every named graph.
    pub fn quads_for_pattern<'a>(
        &'a mut self,
        subject: Option<NamedOrBlankNodeRef<'a>>,
        predicate: Option<NamedNodeRef<'a>>,
        object: Option<TermRef<'a>>,
        graph_name: Option<GraphNameRef<'a>>,
    ) -> Result<Box<dyn Iterator<Item = Quad> + 'a>> {
        match graph_name {
            Some(GraphNameRef::DefaultGraph) => {
                Ok(Box::new(self.quads_in_default(subject, predicate, object)))
            }
            Some(GraphNameRef::NamedNode(n)) => Ok(Box::new(self.quads_in_graph(
                n.into(),
                subject,
                predicate,
                object,
            )?)),
            Some(GraphNameRef::BlankNode(n)) => Ok(Box::new(self.quads_in_graph(
                n.into(),
                subject,
                predicate,
                object,
            )?)),
            None => {
                let this = &*self;
                Ok(Box::new(
                    this.quads_in_default(subject, predicate, object)
                        .chain(this.quads_in_named_graphs(subject, predicate, object)),
                ))
            }
        }
    }

    /// All quads in the dataset: the default graph first, then the named
    /// graphs in registry order.
    pub fn iter(&self) -> impl Iterator<Item = Quad> + '_ {
        self.quads_in_default(None, None, None)
            .chain(self.quads_in_named_graphs(None, None, None))
    }

    /// Copies every triple of `graph` into the named graph `name`,
    /// resolving it through the creating lookup. The supplied graph itself
    /// is not registered and is left untouched.
    pub fn insert_graph(&mut self, name: NamedOrBlankNodeRef<'_>, graph: &dyn Graph) -> Result<()> {
        let target = self.registry.graph(name)?;
        for triple in graph.triples_for_pattern(None, None, None) {
            target.insert(triple.as_ref());
        }
        Ok(())
    }

    /// Removes every triple from the named graph `name`. The registry
    /// entry survives: clearing a graph does not unregister it.
    pub fn clear_graph(&mut self, name: NamedOrBlankNodeRef<'_>) -> Result<()> {
        drain(self.registry.graph(name)?);
        Ok(())
    }

    /// Removes every triple from the default graph and from every named
    /// graph. Registry entries survive with zero triples.
    pub fn clear(&mut self) {
        drain(self.registry.default_graph_mut());
        for (_, graph) in self.registry.iter_mut() {
            drain(graph);
        }
    }

    fn target_graph(&mut self, graph_name: GraphNameRef<'_>) -> Result<&mut dyn Graph> {
        match graph_name {
            GraphNameRef::DefaultGraph => Ok(self.registry.default_graph_mut()),
            GraphNameRef::NamedNode(n) => self.registry.graph(n.into()),
            GraphNameRef::BlankNode(n) => self.registry.graph(n.into()),
        }
    }
}

// The Graph trait only exposes single-triple removal, so clearing goes
// through a materialized copy of the graph's contents.
fn drain(graph: &mut dyn Graph) {
    let triples: Vec<Triple> = graph.triples_for_pattern(None, None, None).collect();
    for triple in &triples {
        graph.remove(triple.as_ref());
    }
}
