//! `deadstrip-parser` turns an object dumper's textual output into the
//! structures defined by [`deadstrip_graph`]: a per-file section inventory, a
//! symbol index, and the section dependency graph itself.
//!
//! Parsing happens in the two passes the dumper's streaming output demands:
//! [`dump::collect`] inventories a single object file's sections, then, once
//! every file has been inventoried and [`dump::populate_index`] has built the
//! symbol index, [`dump::build_dependency_graph`] rescans the same text for
//! relocation records and wires up the graph's edges.

#![deny(unused)]
#![deny(warnings)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::missing_crate_level_docs)]
#![deny(rustdoc::invalid_codeblock_attributes)]
#![deny(rustdoc::invalid_rust_codeblocks)]

pub mod dump;
mod error;
mod normalize;

pub use error::Error;
pub use normalize::normalize;
