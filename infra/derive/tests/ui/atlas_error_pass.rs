use atlas_derive::atlas_error;
use std::borrow::Cow;

#[atlas_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Lookup failed{}: {query}", format_context(.context))]
    Missing { query: String, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {
    let _: DemoError = std::io::Error::other("boom").into();
    let _: DemoError = "plain message".into();
}
