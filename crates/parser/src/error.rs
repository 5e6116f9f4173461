use deadstrip_errors::error;

error! {
    #[doc = "Errors produced while parsing an object dumper's textual output."]
    pub enum Error {
        #[code = E002]
        #[message = "The relocation table header was malformed."]
        #[formatted_message("the `RELOCATION RECORDS FOR […]` header was malformed: `{0}`")]
        #[help = "Check that the configured dumper produces `objdump -rh`-style output."]
        MalformedRelocationHeader(String),
    }
}
