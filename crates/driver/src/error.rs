use deadstrip_errors::error;

error! {
    #[doc = "Errors produced while orchestrating a `deadstrip` run."]
    pub enum Error {
        #[code = E001]
        #[message = "No input object files were given."]
        #[help = "Pass at least one object file on the command line."]
        NoInputFiles,

        #[code = E003]
        #[message = "I was not able to spawn an external tool."]
        #[formatted_message("I was not able to spawn `{0}`: {1}")]
        #[help = "Check that the tool is installed and reachable, or point at it explicitly (`--dumper`, `--remover`, `--linker`)."]
        ToolSpawnFailed(String, std::io::Error),

        #[code = E003]
        #[message = "An external tool exited with a failure status."]
        #[formatted_message("`{0}` exited with a failure status.")]
        #[help = "Re-run it by hand outside deadstrip to see its own diagnostics."]
        ToolFailed(String),

        #[code = E004]
        #[message = "The object dumper's output was not valid UTF-8."]
        #[help = "deadstrip expects a textual dumper (e.g. `objdump -rh`); check `--dumper`."]
        NonUtf8Output,

        #[transparent]
        Analysis(#[from] deadstrip_analysis::Error),
    }
}
