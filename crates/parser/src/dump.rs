//! The two-pass object dumper parser: pass 1 inventories a single file's
//! sections, pass 2 rescans the whole dump for relocation records once every
//! file has been inventoried and indexed.

use deadstrip_graph::{prefixes, NodeId, ObjectFile, SectionGraph, SymbolIndex};
use nom::{
    bytes::complete::{tag, take_until},
    IResult,
};

use crate::{error::Error, normalize::normalize};

/// Pass 1: scans `dump` for `object_file`'s block and records every section
/// whose name starts with a recognized grouping prefix.
///
/// This implements the `SEEK_FILE → SEEK_SECTIONS → IN_SECTIONS` state
/// machine: it first finds the `<path>:` header matching `object_file`'s
/// path, then the `Sections` heading (case-insensitive), skips that table's
/// one-line sub-header, and collects rows until the next blank line.
pub fn collect(object_file: &mut ObjectFile, dump: &str) {
    let mut lines = dump.lines();

    if !seek(&mut lines, |line| file_header_matches(line, object_file.path())) {
        return;
    }

    if !seek(&mut lines, |line| {
        line.trim().split_once(':').map_or(line.trim(), |(heading, _)| heading).eq_ignore_ascii_case("sections")
    }) {
        return;
    }

    // Skip the table's column sub-header (`Idx Name Size VMA LMA ...`).
    lines.next();

    for line in lines {
        if line.trim().is_empty() {
            return;
        }

        if let Some(name) = second_token(line) {
            if prefixes::has_grouping_prefix(name) {
                object_file.push_section(name);
            }
        }
    }
}

/// Advances `lines` until `predicate` matches a line, or the stream is
/// exhausted. Blank lines are skipped without being tested.
fn seek<'a>(lines: &mut impl Iterator<Item = &'a str>, predicate: impl Fn(&str) -> bool) -> bool {
    for line in lines.by_ref() {
        if line.trim().is_empty() {
            continue;
        }

        if predicate(line) {
            return true;
        }
    }

    false
}

fn file_header_matches(line: &str, path: &str) -> bool {
    match line.trim_start().split_once(':') {
        Some((name, _)) => name == path,
        None => false,
    }
}

/// Returns the second whitespace-delimited token of `line`, i.e. a section
/// table row's name column.
fn second_token(line: &str) -> Option<&str> {
    let mut tokens = line.split_whitespace();
    tokens.next()?;
    tokens.next()
}

/// Inserts every inventoried section into `index` under its prefix-stripped
/// key (first-write-wins), creating a node for it in `graph` if its key
/// isn't already registered. Each inventory entry is rewritten in place to
/// that stripped key, which doubles as the symbol-index lookup key used
/// while reading relocations.
pub fn populate_index(graph: &mut SectionGraph, index: &mut SymbolIndex, object_files: &mut [ObjectFile]) {
    for object_file in object_files.iter_mut() {
        let full_names = object_file.sections().to_vec();

        for (position, full_name) in full_names.iter().enumerate() {
            let stripped = prefixes::strip_grouping_prefix(full_name).to_string();

            if index.get(&stripped).is_none() {
                let node = graph.new_node(full_name.clone());
                index.set(stripped.clone(), node);
            }

            object_file.rewrite_section(position, stripped);
        }
    }
}

/// Pass 2: rescans `dump` for `RELOCATION RECORDS FOR […]` blocks and
/// connects each source section to every relocation target it references.
///
/// Targets discovered in a block whose source section is not inventoried
/// are appended to the returned queue instead of being attached as an edge,
/// unless the source name is a configured weak section, in which case the
/// whole block is ignored. `index` must already have been populated by
/// [`populate_index`].
pub fn build_dependency_graph(
    graph: &mut SectionGraph,
    index: &SymbolIndex,
    dump: &str,
) -> Result<Vec<NodeId>, Error> {
    let mut unknown_source_targets = Vec::new();
    let mut lines = dump.lines();

    while let Some(line) = lines.next() {
        if !line.trim_start().starts_with("RELOCATION") {
            continue;
        }

        let section_name = relocation_header(line).map_err(|_| Error::MalformedRelocationHeader(line.to_string()))?;

        let stripped = prefixes::strip_grouping_prefix(section_name);
        let source = index.get(stripped);

        if source.is_none() && prefixes::is_weak_section(stripped) {
            continue;
        }

        // Skip the table's caption line (`OFFSET TYPE VALUE`).
        lines.next();

        for row in lines.by_ref() {
            if row.trim().is_empty() {
                break;
            }

            let Some(value) = relocation_value(row) else {
                continue;
            };

            let Some(target) = index.get(normalize(value)) else {
                continue;
            };

            match source {
                Some(source_node) => graph.connect(source_node, target),
                None => unknown_source_targets.push(target),
            }
        }
    }

    Ok(unknown_source_targets)
}

/// Parses a `RELOCATION RECORDS FOR [<name>]` header line, returning `<name>`.
fn relocation_header(line: &str) -> IResult<&str, &str> {
    let (rest, _) = tag("RELOCATION RECORDS FOR [")(line.trim_start())?;
    let (rest, name) = take_until("]")(rest)?;
    let (rest, _) = tag("]")(rest)?;

    Ok((rest, name))
}

/// Returns the `VALUE` column of a relocation row (`offset type value`).
fn relocation_value(row: &str) -> Option<&str> {
    row.split_whitespace().nth(2)
}

#[cfg(test)]
mod tests {
    use deadstrip_graph::ObjectFile;

    use super::*;

    const DUMP: &str = "\
a.o:     file format pei-i386

Sections:
Idx Name          Size      VMA       LMA       File off  Algn
  0 .text$main    00000010  00000000  00000000  00000040  2**2  CONTENTS, ALLOC, LOAD, CODE
  1 .text$dead    00000010  00000000  00000000  00000050  2**2  CONTENTS, ALLOC, LOAD, CODE
  2 .bss          00000004  00000000  00000000  00000060  2**2  ALLOC

RELOCATION RECORDS FOR [.text$main]:
OFFSET   TYPE              VALUE
00000004 dir32             _helper

";

    #[test]
    fn collect_keeps_only_grouped_sections() {
        let mut object_file = ObjectFile::new("a.o");
        collect(&mut object_file, DUMP);

        assert_eq!(object_file.sections(), &[".text$main".to_string(), ".text$dead".to_string()]);
    }

    #[test]
    fn collect_ignores_other_files_blocks() {
        let mut object_file = ObjectFile::new("b.o");
        collect(&mut object_file, DUMP);

        assert!(object_file.sections().is_empty());
    }

    #[test]
    fn malformed_relocation_header_is_reported() {
        let mut graph = SectionGraph::new();
        let index = SymbolIndex::new();

        let broken = "RELOCATION RECORDS FOR [.text$main\nOFFSET TYPE VALUE\n";
        let result = build_dependency_graph(&mut graph, &index, broken);

        assert!(result.is_err());
    }
}
