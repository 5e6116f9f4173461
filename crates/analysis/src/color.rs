use deadstrip_graph::{Color, NodeId, SectionGraph};

/// Propagates `color` from `seed` to every node reachable from it, via an
/// explicit work stack rather than recursion.
///
/// A node is only re-visited (and its out-edges pushed) while `color`
/// actually adds bits it doesn't already carry; once `prev | color == prev`
/// the walk prunes that branch, which is what bounds this on graphs with
/// cycles.
pub fn colorize(graph: &mut SectionGraph, seed: NodeId, color: Color) {
    let mut stack = vec![seed];

    while let Some(node) = stack.pop() {
        let previous = graph.color_of(node);

        if (previous | color) == previous {
            continue;
        }

        graph.set_color(node, previous | color);
        stack.extend(graph.edges_of(node).iter().copied());
    }
}

#[cfg(test)]
mod tests {
    use deadstrip_graph::ColorBit;

    use super::*;

    #[test]
    fn coloring_is_idempotent() {
        let mut graph = SectionGraph::new();
        let a = graph.new_node("a".to_string());
        let b = graph.new_node("b".to_string());
        graph.connect(a, b);

        colorize(&mut graph, a, ColorBit::Live.into());
        let once = graph.color_of(b);
        colorize(&mut graph, a, ColorBit::Live.into());

        assert_eq!(graph.color_of(b), once);
    }

    #[test]
    fn coloring_is_monotonic() {
        let mut graph = SectionGraph::new();
        let a = graph.new_node("a".to_string());

        colorize(&mut graph, a, ColorBit::WeaklyLive.into());
        colorize(&mut graph, a, ColorBit::Live.into());

        let color = graph.color_of(a);
        assert!(color.contains(ColorBit::Live));
        assert!(color.contains(ColorBit::WeaklyLive));
    }

    #[test]
    fn cycles_terminate() {
        let mut graph = SectionGraph::new();
        let a = graph.new_node("a".to_string());
        let b = graph.new_node("b".to_string());
        graph.connect(a, b);
        graph.connect(b, a);

        colorize(&mut graph, a, ColorBit::Live.into());

        assert!(graph.color_of(a).contains(ColorBit::Live));
        assert!(graph.color_of(b).contains(ColorBit::Live));
    }

    #[test]
    fn self_loop_is_colored_once() {
        let mut graph = SectionGraph::new();
        let a = graph.new_node("a".to_string());
        graph.connect(a, a);

        colorize(&mut graph, a, ColorBit::Live.into());

        assert!(graph.color_of(a).contains(ColorBit::Live));
    }

    #[test]
    fn unreached_node_keeps_empty_color() {
        let mut graph = SectionGraph::new();
        let a = graph.new_node("a".to_string());
        let b = graph.new_node("b".to_string());

        colorize(&mut graph, a, ColorBit::Live.into());

        assert!(graph.color_of(b).is_empty());
    }
}
