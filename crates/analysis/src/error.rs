use deadstrip_errors::error;

error! {
    #[doc = "Errors produced while computing a section reachability analysis."]
    pub enum Error {
        #[transparent]
        Parsing(#[from] deadstrip_parser::Error),
    }
}
