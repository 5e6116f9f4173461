//! `deadstrip-driver` is the orchestration layer above the analysis engine:
//! it owns the [`Configuration`] of one `deadstrip` run, shells out to the
//! object dumper/section remover/linker, and renders the diagnostic dump
//! reports.
//!
//! None of this belongs to the core engine (`deadstrip-graph`,
//! `deadstrip-parser`, `deadstrip-analysis`), which never touches the
//! filesystem or spawns a process; this crate is the thing that does.

#![deny(unused)]
#![deny(warnings)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::missing_crate_level_docs)]
#![deny(rustdoc::invalid_codeblock_attributes)]
#![deny(rustdoc::invalid_rust_codeblocks)]

mod configuration;
mod dump_format;
mod error;
mod tools;

use std::path::PathBuf;

use deadstrip_analysis::Analysis;
use deadstrip_graph::{ColorBit, ObjectFile};

pub use configuration::Configuration;
pub use error::Error;

/// The entry point symbol, always an implicit seed, as in the original tool.
const ENTRY_POINT_SEED: &str = "main";

/// Drives one `deadstrip` run end to end: dump, parse, color, report, strip,
/// link.
#[derive(Debug)]
pub struct Driver {
    configuration: Configuration,
}

impl Driver {
    pub(crate) fn with_configuration(configuration: Configuration) -> Self {
        Self { configuration }
    }

    /// Runs the configured analysis, prints any requested dump reports, and
    /// unless `--no-strip` was given, strips unused sections and links.
    pub fn run(self) -> Result<(), Error> {
        let configuration = &self.configuration;

        if configuration.input_files.is_empty() {
            return Err(Error::NoInputFiles);
        }

        if configuration.dump_cmd {
            println!(
                "{}",
                tools::linker_command_line(
                    &configuration.linker,
                    &configuration.input_files,
                    &configuration.extra_linker_args,
                    &configuration.output_file
                )
            );
        }

        let dump = tools::dump(&configuration.dumper, &configuration.input_files)?;

        let mut object_files: Vec<ObjectFile> =
            configuration.input_files.iter().map(|path| ObjectFile::new(path.to_string_lossy().into_owned())).collect();

        for object_file in object_files.iter_mut() {
            Analysis::collect(object_file, &dump);
        }

        let mut analysis = Analysis::compute(&mut object_files, &dump)?;

        analysis.colorize(ENTRY_POINT_SEED, ColorBit::Live.into());
        for seed in &configuration.extra_seeds {
            analysis.colorize(seed, ColorBit::Live.into());
        }

        if configuration.dump_map {
            print!("{}", dump_format::map(&analysis, &object_files));
        }
        if configuration.dump_used {
            print!("{}", dump_format::used(&analysis, &object_files));
        }
        if configuration.dump_unused {
            print!("{}", dump_format::unused(&analysis, &object_files));
        }

        if configuration.no_strip {
            return Ok(());
        }

        for object_file in &object_files {
            let unused = analysis.unused(object_file);
            tools::remove_sections(&configuration.remover, &unused, &PathBuf::from(object_file.path()))?;
        }

        tools::link(
            &configuration.linker,
            &configuration.input_files,
            &configuration.extra_linker_args,
            &configuration.output_file,
        )
    }
}
