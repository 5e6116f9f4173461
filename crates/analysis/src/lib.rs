//! `deadstrip-analysis` is the reachability engine built on top of
//! [`deadstrip_graph`] and [`deadstrip_parser`]: it drives both dumper
//! parsing passes, colors the resulting graph from a set of seeds, and
//! partitions each object file's sections into used and unused.
//!
//! [`Analysis`] is the single entry point, replacing the process-wide
//! globals the original tool this is modeled on kept for its symbol index
//! and unknown-source queue: every analysis run gets its own instance, with
//! no state surviving between runs.

#![deny(unused)]
#![deny(warnings)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::missing_crate_level_docs)]
#![deny(rustdoc::invalid_codeblock_attributes)]
#![deny(rustdoc::invalid_rust_codeblocks)]

mod color;
mod error;
mod partition;

use deadstrip_graph::{Color, ColorBit, ObjectFile, SectionGraph, SymbolIndex};
use deadstrip_parser::dump;

pub use error::Error;

/// A single reachability analysis run: the graph, its symbol index, and the
/// seeded/unreached coloring computed so far.
#[derive(Debug)]
pub struct Analysis {
    graph: SectionGraph,
    index: SymbolIndex,
}

impl Analysis {
    /// Pass 1: inventories `object_file`'s sections from `dump`.
    ///
    /// Call this once per object file before [`Analysis::compute`].
    pub fn collect(object_file: &mut ObjectFile, dump: &str) {
        self::dump::collect(object_file, dump);
    }

    /// Pass 2: builds the symbol index and the section dependency graph for
    /// every inventoried `object_files`, rescanning `dump` for relocation
    /// records.
    ///
    /// Any relocation targets whose source section was not inventoried (and
    /// is not a configured weak section) are immediately colored
    /// weakly-live, draining the unknown-source queue as part of this call.
    /// A malformed relocation header aborts pass 2 early and is reported,
    /// leaving the graph and index in whatever partial state they reached.
    pub fn compute(object_files: &mut [ObjectFile], dump: &str) -> Result<Self, Error> {
        let mut graph = SectionGraph::new();
        let mut index = SymbolIndex::new();

        self::dump::populate_index(&mut graph, &mut index, object_files);
        let unknown_source_targets = self::dump::build_dependency_graph(&mut graph, &index, dump)?;

        for target in unknown_source_targets {
            color::colorize(&mut graph, target, ColorBit::WeaklyLive.into());
        }

        Ok(Self { graph, index })
    }

    /// Colors the node registered under `seed_name`, and everything
    /// reachable from it, with `color`. Unknown seed names are ignored.
    pub fn colorize(&mut self, seed_name: &str, color: Color) {
        if let Some(node) = self.index.get(seed_name) {
            self::color::colorize(&mut self.graph, node, color);
        }
    }

    /// The full names of `object_file`'s sections that survive stripping.
    pub fn used<'a>(&'a self, object_file: &ObjectFile) -> Vec<&'a str> {
        partition::used(&self.graph, &self.index, object_file)
    }

    /// The full names of `object_file`'s sections that do not survive
    /// stripping.
    pub fn unused<'a>(&'a self, object_file: &ObjectFile) -> Vec<&'a str> {
        partition::unused(&self.graph, &self.index, object_file)
    }

    /// The underlying section graph, for dump formatting.
    pub fn graph(&self) -> &SectionGraph {
        &self.graph
    }

    /// The underlying symbol index, for dump formatting.
    pub fn index(&self) -> &SymbolIndex {
        &self.index
    }
}

#[cfg(test)]
mod tests {
    use deadstrip_graph::ColorBit;

    use super::*;

    // Scenario 1 (spec.md §8): a single seed reaches only its own section.
    const SINGLE_SEED: &str = "\
a.o:     file format pei-i386

Sections:
Idx Name          Size      VMA       LMA       File off  Algn
  0 .text$main    00000010  00000000  00000000  00000040  2**2  CONTENTS, ALLOC, LOAD, CODE
  1 .text$dead    00000010  00000000  00000000  00000050  2**2  CONTENTS, ALLOC, LOAD, CODE

";

    fn inventory(path: &str, dump: &str) -> ObjectFile {
        let mut object_file = ObjectFile::new(path);
        Analysis::collect(&mut object_file, dump);
        object_file
    }

    #[test]
    fn single_seed_reaches_only_itself() {
        let mut object_file = inventory("a.o", SINGLE_SEED);
        let mut analysis = Analysis::compute(std::slice::from_mut(&mut object_file), SINGLE_SEED).unwrap();

        analysis.colorize("main", ColorBit::Live.into());

        assert_eq!(analysis.used(&object_file), vec![".text$main"]);
        assert_eq!(analysis.unused(&object_file), vec![".text$dead"]);
    }

    // Scenario 2: transitive closure through a relocation chain.
    const TRANSITIVE: &str = "\
a.o:     file format pei-i386

Sections:
Idx Name          Size      VMA       LMA       File off  Algn
  0 .text$main    00000010  00000000  00000000  00000040  2**2  CONTENTS, ALLOC, LOAD, CODE
  1 .text$helper  00000010  00000000  00000000  00000050  2**2  CONTENTS, ALLOC, LOAD, CODE
  2 .text$unused  00000010  00000000  00000000  00000060  2**2  CONTENTS, ALLOC, LOAD, CODE

RELOCATION RECORDS FOR [.text$main]:
OFFSET   TYPE              VALUE
00000004 dir32             _helper

RELOCATION RECORDS FOR [.text$helper]:
OFFSET   TYPE              VALUE
00000004 dir32             _unreachable

";

    #[test]
    fn transitive_closure_follows_the_chain() {
        let mut object_file = inventory("a.o", TRANSITIVE);
        let mut analysis = Analysis::compute(std::slice::from_mut(&mut object_file), TRANSITIVE).unwrap();

        analysis.colorize("main", ColorBit::Live.into());

        let mut used = analysis.used(&object_file);
        used.sort_unstable();
        assert_eq!(used, vec![".text$helper", ".text$main"]);
        assert_eq!(analysis.unused(&object_file), vec![".text$unused"]);
    }

    // Scenario 3: a relocation cycle still colors, and terminates, instead
    // of recursing forever.
    const CYCLE: &str = "\
a.o:     file format pei-i386

Sections:
Idx Name          Size      VMA       LMA       File off  Algn
  0 .text$a       00000010  00000000  00000000  00000040  2**2  CONTENTS, ALLOC, LOAD, CODE
  1 .text$b       00000010  00000000  00000000  00000050  2**2  CONTENTS, ALLOC, LOAD, CODE

RELOCATION RECORDS FOR [.text$a]:
OFFSET   TYPE              VALUE
00000004 dir32             _b

RELOCATION RECORDS FOR [.text$b]:
OFFSET   TYPE              VALUE
00000004 dir32             _a

";

    #[test]
    fn cycle_colors_both_sections_without_looping_forever() {
        let mut object_file = inventory("a.o", CYCLE);
        let mut analysis = Analysis::compute(std::slice::from_mut(&mut object_file), CYCLE).unwrap();

        analysis.colorize("a", ColorBit::Live.into());

        let mut used = analysis.used(&object_file);
        used.sort_unstable();
        assert_eq!(used, vec![".text$a", ".text$b"]);
    }

    // Scenario 4: a fastcall-decorated relocation value still resolves to
    // its target section.
    const FASTCALL: &str = "\
a.o:     file format pei-i386

Sections:
Idx Name          Size      VMA       LMA       File off  Algn
  0 .text$main    00000010  00000000  00000000  00000040  2**2  CONTENTS, ALLOC, LOAD, CODE
  1 .text$fast    00000010  00000000  00000000  00000050  2**2  CONTENTS, ALLOC, LOAD, CODE

RELOCATION RECORDS FOR [.text$main]:
OFFSET   TYPE              VALUE
00000004 DISP32            @fast@4

";

    #[test]
    fn fastcall_decoration_resolves_to_its_section() {
        let mut object_file = inventory("a.o", FASTCALL);
        let mut analysis = Analysis::compute(std::slice::from_mut(&mut object_file), FASTCALL).unwrap();

        analysis.colorize("main", ColorBit::Live.into());

        let mut used = analysis.used(&object_file);
        used.sort_unstable();
        assert_eq!(used, vec![".text$fast", ".text$main"]);
    }

    // Scenario 5: a relocation whose source section is unknown (and not
    // weak) still marks its target weakly live.
    const UNKNOWN_SOURCE: &str = "\
a.o:     file format pei-i386

Sections:
Idx Name          Size      VMA       LMA       File off  Algn
  0 .text$main    00000010  00000000  00000000  00000040  2**2  CONTENTS, ALLOC, LOAD, CODE
  1 .text$target  00000010  00000000  00000000  00000050  2**2  CONTENTS, ALLOC, LOAD, CODE

RELOCATION RECORDS FOR [.text$ghost]:
OFFSET   TYPE              VALUE
00000004 dir32             _target

";

    #[test]
    fn unknown_source_marks_target_weakly_live() {
        let mut object_file = inventory("a.o", UNKNOWN_SOURCE);
        let mut analysis = Analysis::compute(std::slice::from_mut(&mut object_file), UNKNOWN_SOURCE).unwrap();

        analysis.colorize("main", ColorBit::Live.into());

        let mut used = analysis.used(&object_file);
        used.sort_unstable();
        assert_eq!(used, vec![".text$target"]);
    }

    // Scenario 6: relocations sourced at a weak section produce no edges
    // and no unknown-source coloring.
    const WEAK_RDATA: &str = "\
a.o:     file format pei-i386

Sections:
Idx Name          Size      VMA       LMA       File off  Algn
  0 .text$main    00000010  00000000  00000000  00000040  2**2  CONTENTS, ALLOC, LOAD, CODE
  1 .rdata        00000010  00000000  00000000  00000050  2**2  CONTENTS, ALLOC, LOAD, DATA
  2 .text$target  00000010  00000000  00000000  00000060  2**2  CONTENTS, ALLOC, LOAD, CODE

RELOCATION RECORDS FOR [.rdata]:
OFFSET   TYPE              VALUE
00000004 dir32             _target

";

    #[test]
    fn weak_section_relocations_do_not_propagate() {
        let mut object_file = inventory("a.o", WEAK_RDATA);
        let mut analysis = Analysis::compute(std::slice::from_mut(&mut object_file), WEAK_RDATA).unwrap();

        analysis.colorize("main", ColorBit::Live.into());

        assert!(analysis.unused(&object_file).contains(&".text$target"));
    }
}
