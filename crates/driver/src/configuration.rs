use std::path::PathBuf;

use crate::Driver;

/// Fully resolved settings for one `deadstrip` invocation.
///
/// Mirrors the original `deadstrip` tool's command-line flags: the seed set
/// is `main` plus `extra_seeds`, the three external collaborators default to
/// their conventional names but can each be pointed elsewhere, and the dump
/// flags independently control which diagnostic report, if any, is printed.
#[derive(Debug)]
pub struct Configuration {
    pub(crate) input_files: Vec<PathBuf>,
    pub(crate) output_file: PathBuf,
    pub(crate) extra_seeds: Vec<String>,
    pub(crate) extra_linker_args: Vec<String>,
    pub(crate) dumper: String,
    pub(crate) remover: String,
    pub(crate) linker: String,
    pub(crate) no_strip: bool,
    pub(crate) dump_cmd: bool,
    pub(crate) dump_used: bool,
    pub(crate) dump_unused: bool,
    pub(crate) dump_map: bool,
}

impl Configuration {
    /// Creates a configuration with every collaborator set to its default
    /// and every flag disabled.
    pub fn new(input_files: Vec<PathBuf>, output_file: PathBuf) -> Self {
        Self {
            input_files,
            output_file,
            extra_seeds: Vec::new(),
            extra_linker_args: Vec::new(),
            dumper: "objdump".to_string(),
            remover: "objcopy".to_string(),
            linker: "ld".to_string(),
            no_strip: false,
            dump_cmd: false,
            dump_used: false,
            dump_unused: false,
            dump_map: false,
        }
    }

    /// Adds `symbol` to the seed set, alongside the always-implicit `main`.
    pub fn with_extra_seed(mut self, symbol: String) -> Self {
        self.extra_seeds.push(symbol);
        self
    }

    /// Appends `arguments` to the linker command line, after the input
    /// files. Mirrors the original tool's behavior of forwarding any
    /// switch it doesn't itself recognize straight to the linker.
    pub fn with_extra_linker_args(mut self, arguments: Vec<String>) -> Self {
        self.extra_linker_args.extend(arguments);
        self
    }

    /// Overrides the object dumper (default: `objdump`).
    pub fn with_dumper(mut self, program: String) -> Self {
        self.dumper = program;
        self
    }

    /// Overrides the section remover (default: `objcopy`).
    pub fn with_remover(mut self, program: String) -> Self {
        self.remover = program;
        self
    }

    /// Overrides the linker (default: `ld`).
    pub fn with_linker(mut self, program: String) -> Self {
        self.linker = program;
        self
    }

    /// Runs the analysis and dumps requested, but skips section removal and
    /// linking.
    pub fn with_no_strip(mut self, no_strip: bool) -> Self {
        self.no_strip = no_strip;
        self
    }

    /// Requests the `--dump-cmd` report.
    pub fn with_dump_cmd(mut self, dump_cmd: bool) -> Self {
        self.dump_cmd = dump_cmd;
        self
    }

    /// Requests the `--dump-used` report.
    pub fn with_dump_used(mut self, dump_used: bool) -> Self {
        self.dump_used = dump_used;
        self
    }

    /// Requests the `--dump-unused` report.
    pub fn with_dump_unused(mut self, dump_unused: bool) -> Self {
        self.dump_unused = dump_unused;
        self
    }

    /// Requests the `--dump-map` report.
    pub fn with_dump_map(mut self, dump_map: bool) -> Self {
        self.dump_map = dump_map;
        self
    }

    /// Builds the [`Driver`] that runs this configuration.
    pub fn driver(self) -> Driver {
        Driver::with_configuration(self)
    }
}
