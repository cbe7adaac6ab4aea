use gway_derive::gway_error;
use std::borrow::Cow;

#[gway_error]
pub enum SubmitError {
    #[error("Decode error{}: {source}", format_context(.context))]
    Decode { source: std::num::ParseIntError, context: Option<Cow<'static, str>> },

    #[error("Rejected{}: {message}", format_context(.context))]
    Rejected { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse(raw: &str) -> Result<u32, SubmitError> {
    Ok(raw.parse::<u32>()?)
}

#[test]
fn ui_pass() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/gway_error_pass.rs");
}

#[test]
fn source_errors_convert_with_question_mark() {
    let err = parse("not-a-number").expect_err("parse should fail");
    assert!(matches!(err, SubmitError::Decode { context: None, .. }));
}

#[test]
fn context_is_attached_to_source_results() {
    let err = "x".parse::<u32>().context("Reading page number").expect_err("parse should fail");
    assert!(err.to_string().starts_with("Decode error (Reading page number): "));
}

#[test]
fn context_is_attached_to_own_results() {
    let res: Result<(), SubmitError> =
        Err(SubmitError::Rejected { message: "duplicate".into(), context: None });
    let err = res.context("Submitting lead").expect_err("should stay an error");
    assert_eq!(err.to_string(), "Rejected (Submitting lead): duplicate");
}

#[test]
fn strings_become_internal_errors() {
    let from_static: SubmitError = "unexpected".into();
    let from_owned: SubmitError = format!("code {}", 7).into();

    assert_eq!(from_static.to_string(), "Internal error: unexpected");
    assert_eq!(from_owned.to_string(), "Internal error: code 7");
}
