//! `deadstrip-graph` is the core data model of the dependency analysis
//! engine: an arena of section nodes, a symbol index pointing into it, and
//! the per-object-file inventory of sections discovered by the dumper.
//!
//! Nothing in this crate parses anything, colors anything, or talks to the
//! outside world; it only holds the structures that [`deadstrip_parser`] and
//! [`deadstrip_analysis`] build and walk.
//!
//! [`deadstrip_parser`]: https://docs.rs/deadstrip-parser
//! [`deadstrip_analysis`]: https://docs.rs/deadstrip-analysis

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
mod index;
mod inventory;
mod node;
pub mod prefixes;

pub use color::{Color, ColorBit};
pub use index::SymbolIndex;
pub use inventory::ObjectFile;
pub use node::{NodeId, SectionGraph};
