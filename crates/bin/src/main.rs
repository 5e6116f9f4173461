//! `deadstrip-bin` is the executable of `deadstrip`.
//!
//! This crate contains all the implementation to make `deadstrip` an
//! executable that can be used by happy users.

mod error;

use std::{
    env,
    ffi::OsString,
    path::{Path, PathBuf},
    process,
};

use argh::FromArgs;
use deadstrip_driver::Configuration;
use deadstrip_errors::Result;
use error::Error;

fn default_output_file() -> PathBuf {
    PathBuf::from("a.out")
}

/// Switches `deadstrip` parses itself, alongside the value each one consumes
/// (if any). Anything else on the command line is a switch `deadstrip`
/// doesn't recognize, and is forwarded straight to the linker — the same
/// behavior as the original tool, which passed every switch it didn't
/// understand through unchanged.
const VALUE_SWITCHES: &[&str] =
    &["--explain", "--save", "--dumper", "--remover", "--linker", "--output-file", "-o"];
const BOOLEAN_SWITCHES: &[&str] =
    &["--dump-cmd", "--dump-used", "--dump-unused", "--dump-map", "--no-strip", "--help", "-h"];

/// Splits `arguments` into the switches `deadstrip` recognizes (handed to
/// `argh`) and everything else, in order, to forward to the linker.
fn partition_switches(arguments: Vec<String>) -> (Vec<String>, Vec<String>) {
    let mut recognized = Vec::new();
    let mut passthrough = Vec::new();
    let mut arguments = arguments.into_iter();

    while let Some(argument) = arguments.next() {
        if VALUE_SWITCHES.contains(&argument.as_str()) {
            recognized.push(argument);

            if let Some(value) = arguments.next() {
                recognized.push(value);
            }
        } else if BOOLEAN_SWITCHES.contains(&argument.as_str()) {
            recognized.push(argument);
        } else if argument.starts_with('-') && argument != "-" {
            passthrough.push(argument);
        } else {
            recognized.push(argument);
        }
    }

    (recognized, passthrough)
}

/// `deadstrip` is a post-compile, pre-link filter: it analyzes an object
/// dumper's report, computes which sections are reachable from a seed
/// symbol, and strips the rest before handing the remaining object files to
/// a linker.
#[derive(Debug, FromArgs)]
struct Deadstrip {
    /// explain a particular error based on its code (of kind `E...`).
    #[argh(option)]
    explain: Option<String>,

    /// keep an extra seed symbol alive, on top of the implicit `main`
    /// (repeatable).
    #[argh(option)]
    save: Vec<String>,

    /// print the linker command line that would be invoked.
    #[argh(switch)]
    dump_cmd: bool,

    /// print the list of sections that survive stripping.
    #[argh(switch)]
    dump_used: bool,

    /// print the list of sections that do not survive stripping.
    #[argh(switch)]
    dump_unused: bool,

    /// print the full section dependency map.
    #[argh(switch)]
    dump_map: bool,

    /// object dumper to invoke instead of the default (`objdump`).
    #[argh(option)]
    dumper: Option<String>,

    /// section remover to invoke instead of the default (`objcopy`).
    #[argh(option)]
    remover: Option<String>,

    /// linker to invoke instead of the default (`ld`).
    #[argh(option)]
    linker: Option<String>,

    /// run the analysis and requested dumps, but do not remove sections or
    /// invoke the linker.
    #[argh(switch)]
    no_strip: bool,

    /// input object files.
    #[argh(positional)]
    input_files: Vec<PathBuf>,

    /// specify the name and location of the output file. If not specified,
    /// `a.out` is used.
    #[argh(option, short = 'o', default = "default_output_file()")]
    output_file: PathBuf,
}

impl Deadstrip {
    /// Creates a new `Self` type based on [`std::env::args_os`].
    ///
    /// Returns alongside it every switch on the command line that `deadstrip`
    /// itself doesn't recognize, in order, to forward straight to the linker.
    fn new() -> Result<(Self, Vec<String>), Error> {
        // Collect all arguments.
        let arguments =
            env::args_os().map(OsString::into_string).collect::<Result<Vec<_>, _>>().map_err(
                |argument| Error::InvalidArgumentEncoding(argument.to_string_lossy().to_string()),
            )?;

        // Check whether `argv` is present.
        if arguments.is_empty() {
            return Err(Error::ProgramNameIsMissing);
        }

        // Extract the base command from a path.
        let command = Path::new(&arguments[0])
            .file_name()
            .and_then(|file_name| file_name.to_str())
            .unwrap_or(&arguments[0])
            .to_string();

        // Split the rest of the command line into switches `deadstrip` parses
        // itself and everything it forwards to the linker unchanged.
        let (recognized, passthrough) = partition_switches(arguments[1..].to_vec());
        let recognized = recognized.iter().map(String::as_str).collect::<Vec<_>>();

        // Parse and build `Self`.
        match Deadstrip::from_args(&[command.as_str()], &recognized) {
            Ok(deadstrip) => Ok((deadstrip, passthrough)),
            Err(early_exit) => match early_exit.status {
                // The command was parsed successfully and the early exit is due to a flag like
                // `--help` causing early exit with output.
                Ok(()) => {
                    println!("{}", early_exit.output);

                    process::exit(0);
                }

                // The arguments were not successfully parsed.
                Err(()) => Err(Error::CommandLine(early_exit.output.trim().to_string())),
            },
        }
    }

    fn into_configuration(self, extra_linker_args: Vec<String>) -> Configuration {
        let mut configuration = Configuration::new(self.input_files, self.output_file)
            .with_no_strip(self.no_strip)
            .with_dump_cmd(self.dump_cmd)
            .with_dump_used(self.dump_used)
            .with_dump_unused(self.dump_unused)
            .with_dump_map(self.dump_map)
            .with_extra_linker_args(extra_linker_args);

        if let Some(dumper) = self.dumper {
            configuration = configuration.with_dumper(dumper);
        }
        if let Some(remover) = self.remover {
            configuration = configuration.with_remover(remover);
        }
        if let Some(linker) = self.linker {
            configuration = configuration.with_linker(linker);
        }

        for symbol in self.save {
            configuration = configuration.with_extra_seed(symbol);
        }

        configuration
    }
}

fn main() -> Result<()> {
    // Install the error report.
    Error::install_and_configure()?;

    // Build the command-line arguments.
    let (deadstrip, extra_linker_args) = Deadstrip::new()?;

    // Handle the `--explain` option.
    if let Some(error_code) = &deadstrip.explain {
        println!("{}", Error::explain(error_code)?);

        return Ok(());
    }

    // Configure and run the driver.
    let driver = deadstrip.into_configuration(extra_linker_args).driver();

    driver.run().map_err(Error::from)?;

    Ok(())
}
