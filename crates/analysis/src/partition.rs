use deadstrip_graph::{Color, ObjectFile, SectionGraph, SymbolIndex};

/// Returns the full names of `object_file`'s sections whose node carries a
/// non-empty color.
pub fn used<'graph>(
    graph: &'graph SectionGraph,
    index: &SymbolIndex,
    object_file: &ObjectFile,
) -> Vec<&'graph str> {
    partition_by(graph, index, object_file, |color| !color.is_empty())
}

/// Returns the full names of `object_file`'s sections whose node carries an
/// empty color, i.e. unreached by any seed or unknown-source relocation.
pub fn unused<'graph>(
    graph: &'graph SectionGraph,
    index: &SymbolIndex,
    object_file: &ObjectFile,
) -> Vec<&'graph str> {
    partition_by(graph, index, object_file, |color| color.is_empty())
}

fn partition_by<'graph>(
    graph: &'graph SectionGraph,
    index: &SymbolIndex,
    object_file: &ObjectFile,
    predicate: impl Fn(Color) -> bool,
) -> Vec<&'graph str> {
    object_file
        .sections()
        .iter()
        .filter_map(|key| index.get(key))
        .filter(|&node| predicate(graph.color_of(node)))
        .map(|node| graph.name_of(node))
        .collect()
}
