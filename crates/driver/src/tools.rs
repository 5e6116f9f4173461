use std::{
    path::{Path, PathBuf},
    process::Command,
};

use crate::Error;

/// Runs the configured object dumper over every input file and returns its
/// captured, UTF-8-decoded standard output.
///
/// The returned `String` is handed by reference to both parser passes; an
/// owned, in-memory buffer is trivially rewindable, unlike the named temp
/// file the original tool reopened between passes.
pub fn dump(program: &str, input_files: &[PathBuf]) -> Result<String, Error> {
    let output = Command::new(program)
        .arg("-rh")
        .args(input_files)
        .output()
        .map_err(|source| Error::ToolSpawnFailed(program.to_string(), source))?;

    if !output.status.success() {
        return Err(Error::ToolFailed(program.to_string()));
    }

    String::from_utf8(output.stdout).map_err(|_| Error::NonUtf8Output)
}

/// Invokes the configured section remover to strip `unused` sections from
/// `path` in place. A no-op if `unused` is empty.
pub fn remove_sections(program: &str, unused: &[&str], path: &Path) -> Result<(), Error> {
    if unused.is_empty() {
        return Ok(());
    }

    let status = Command::new(program)
        .args(unused.iter().flat_map(|section| ["-R", section]))
        .arg(path)
        .status()
        .map_err(|source| Error::ToolSpawnFailed(program.to_string(), source))?;

    if !status.success() {
        return Err(Error::ToolFailed(program.to_string()));
    }

    Ok(())
}

/// Invokes the configured linker over `input_files`, producing `output_file`.
///
/// `extra_args` are switches the `deadstrip` command line didn't recognize
/// as one of its own; they are forwarded verbatim, in their original order,
/// the same way the original tool passes unrecognized switches straight
/// through to the linker.
pub fn link(
    program: &str,
    input_files: &[PathBuf],
    extra_args: &[String],
    output_file: &Path,
) -> Result<(), Error> {
    let status = Command::new(program)
        .args(input_files)
        .args(extra_args)
        .arg("-o")
        .arg(output_file)
        .status()
        .map_err(|source| Error::ToolSpawnFailed(program.to_string(), source))?;

    if !status.success() {
        return Err(Error::ToolFailed(program.to_string()));
    }

    Ok(())
}

/// The command line that would be used to invoke the linker, for
/// `--dump-cmd`.
pub fn linker_command_line(
    program: &str,
    input_files: &[PathBuf],
    extra_args: &[String],
    output_file: &Path,
) -> String {
    let mut line = program.to_string();

    for input_file in input_files {
        line.push(' ');
        line.push_str(&input_file.to_string_lossy());
    }

    for extra_arg in extra_args {
        line.push(' ');
        line.push_str(extra_arg);
    }

    line.push_str(" -o ");
    line.push_str(&output_file.to_string_lossy());

    line
}
