use crate::Color;

/// A handle to a [`SectionNode`] owned by a [`SectionGraph`].
///
/// Handles, not references, are how nodes point at each other: the graph is
/// free to grow (and to contain cycles) without anyone holding a borrow of
/// it. `NodeId` is `Copy` and meaningless outside the [`SectionGraph`] that
/// produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// A node in the section dependency graph.
///
/// `name` retains the *full*, unstripped section name as it appeared in the
/// object file's section table (e.g. `.text$foo`); the stripped form only
/// exists as a [`crate::SymbolIndex`] key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionNode {
    name: String,
    color: Color,
    out_edges: Vec<NodeId>,
}

/// The directed graph of sections, and the sole owner of every [`SectionNode`]
/// created during an analysis run.
///
/// Nodes are never removed once created; the whole arena is dropped together
/// at the end of a run.
#[derive(Debug, Default)]
pub struct SectionGraph {
    nodes: Vec<SectionNode>,
}

impl SectionGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new node named `name`, with an empty color and no edges.
    pub fn new_node(&mut self, name: impl Into<String>) -> NodeId {
        let id = NodeId(self.nodes.len());

        self.nodes.push(SectionNode { name: name.into(), color: Color::empty(), out_edges: Vec::new() });

        id
    }

    /// Appends `dst` to `src`'s out-edges, unless it is already present.
    ///
    /// A self-loop from a section that genuinely relocates against itself is
    /// allowed; only duplicate edges are suppressed.
    pub fn connect(&mut self, src: NodeId, dst: NodeId) {
        let node = &mut self.nodes[src.0];

        if !node.out_edges.contains(&dst) {
            node.out_edges.push(dst);
        }
    }

    /// Returns the current color of `node`.
    pub fn color_of(&self, node: NodeId) -> Color {
        self.nodes[node.0].color
    }

    /// Overwrites the color of `node`.
    pub fn set_color(&mut self, node: NodeId, color: Color) {
        self.nodes[node.0].color = color;
    }

    /// Returns the full, unstripped name of `node`.
    pub fn name_of(&self, node: NodeId) -> &str {
        &self.nodes[node.0].name
    }

    /// Returns the ordered, duplicate-free out-edges of `node`.
    pub fn edges_of(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0].out_edges
    }

    /// Iterates over every node currently in the graph.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ColorBit;

    #[test]
    fn connect_deduplicates_edges() {
        let mut graph = SectionGraph::new();
        let a = graph.new_node(".text$a");
        let b = graph.new_node(".text$b");

        graph.connect(a, b);
        graph.connect(a, b);
        graph.connect(a, b);

        assert_eq!(graph.edges_of(a), &[b]);
    }

    #[test]
    fn self_loops_are_allowed() {
        let mut graph = SectionGraph::new();
        let a = graph.new_node(".text$a");

        graph.connect(a, a);

        assert_eq!(graph.edges_of(a), &[a]);
    }

    #[test]
    fn color_starts_empty_and_retains_full_name() {
        let mut graph = SectionGraph::new();
        let a = graph.new_node(".text$a");

        assert_eq!(graph.color_of(a), Color::empty());
        assert_eq!(graph.name_of(a), ".text$a");

        graph.set_color(a, ColorBit::Live.into());
        assert_eq!(graph.color_of(a), ColorBit::Live.into());
    }
}
