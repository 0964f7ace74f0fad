use reqwest::StatusCode;
use std::borrow::Cow;

/// Failures of a REST Countries lookup.
#[atlas_derive::atlas_error]
pub enum CountryError {
    /// The request never produced a response (DNS, TLS, timeout, ...).
    #[error("Request failed{}: {source}", format_context(.context))]
    Http { source: reqwest::Error, context: Option<Cow<'static, str>> },

    #[error("Unexpected status {status} from {url}{}", format_context(.context))]
    Status { status: StatusCode, url: String, context: Option<Cow<'static, str>> },

    /// The body was not a JSON array of country records.
    #[error("Malformed response{}: {source}", format_context(.context))]
    Decode { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("No country matches '{query}'")]
    NotFound { query: String },

    #[error("Invalid client configuration{}: {message}", format_context(.context))]
    InvalidConfiguration { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl CountryError {
    /// A lookup that succeeded but matched nothing.
    ///
    /// HTTP failures, 404 included, are request failures and report `false`.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
