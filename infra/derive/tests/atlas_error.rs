use atlas_derive::atlas_error;
use std::borrow::Cow;

#[atlas_error]
pub enum LookupError {
    #[error("Cache I/O failed{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Nothing matched{}: {query}", format_context(.context))]
    NotFound { query: String, context: Option<Cow<'static, str>> },

    #[error("Internal lookup error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read_cache() -> Result<(), std::io::Error> {
    Err(std::io::Error::other("disk unplugged"))
}

#[test]
fn atlas_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/atlas_error_pass.rs");
    t.compile_fail("tests/ui/atlas_error_no_context.rs");
    t.compile_fail("tests/ui/atlas_error_bad_context_type.rs");
    t.compile_fail("tests/ui/atlas_error_tuple_variant.rs");
}

#[test]
fn question_mark_converts_sources() {
    fn run() -> Result<(), LookupError> {
        read_cache()?;
        Ok(())
    }

    let err = run().expect_err("read should fail");
    assert!(matches!(err, LookupError::Io { context: None, .. }));
    assert_eq!(err.to_string(), "Cache I/O failed: disk unplugged");
}

#[test]
fn context_on_source_result_wraps_and_labels() {
    let err = read_cache().context("Reading the cache").expect_err("read should fail");
    assert_eq!(err.to_string(), "Cache I/O failed (Reading the cache): disk unplugged");
}

#[test]
fn context_on_own_result_overwrites_slot() {
    let failing: Result<(), LookupError> =
        Err(LookupError::NotFound { query: "atlantis".to_owned(), context: None });

    let err = failing.context("Searching the map").expect_err("lookup should fail");
    assert_eq!(err.to_string(), "Nothing matched (Searching the map): atlantis");
}

#[test]
fn strings_become_internal_errors() {
    let from_static: LookupError = "static message".into();
    let from_owned: LookupError = String::from("owned message").into();

    assert!(matches!(from_static, LookupError::Internal { .. }));
    assert_eq!(from_owned.to_string(), "Internal lookup error: owned message");
}
