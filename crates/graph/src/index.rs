use std::collections::HashMap;

use crate::NodeId;

/// Maps a normalized symbol name to the section node that defines it.
///
/// Keys are the grouping-prefix-stripped section name (see
/// [`crate::prefixes::strip_grouping_prefix`]). Insertion is first-write-wins:
/// a second section that normalizes to an already-registered key is treated
/// as a weak/linkonce duplicate and silently dropped, since reachability
/// analysis only needs *a* representative node per key.
#[derive(Debug, Default)]
pub struct SymbolIndex {
    entries: HashMap<String, NodeId>,
}

impl SymbolIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up `key`, returning the node registered under it, if any.
    pub fn get(&self, key: &str) -> Option<NodeId> {
        self.entries.get(key).copied()
    }

    /// Registers `node` under `key`, unless `key` is already taken.
    ///
    /// Returns `true` if this call performed the insertion, `false` if an
    /// entry already existed (in which case the existing node is kept).
    pub fn set(&mut self, key: impl Into<String>, node: NodeId) -> bool {
        use std::collections::hash_map::Entry;

        match self.entries.entry(key.into()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                entry.insert(node);
                true
            }
        }
    }

    /// The number of distinct keys currently registered.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no key has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SectionGraph;

    #[test]
    fn first_write_wins() {
        let mut graph = SectionGraph::new();
        let first = graph.new_node(".text$foo");
        let second = graph.new_node(".text$foo_weak_dup");

        let mut index = SymbolIndex::new();

        assert!(index.set("foo", first));
        assert!(!index.set("foo", second));

        assert_eq!(index.get("foo"), Some(first));
    }

    #[test]
    fn unknown_key_misses() {
        let index = SymbolIndex::new();
        assert_eq!(index.get("missing"), None);
    }
}
