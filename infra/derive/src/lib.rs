#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Attribute macros used across the workspace: error enums with context
//! support and feature-slice handles.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! gway-derive.workspace = true
//! thiserror.workspace = true
//! ```

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemStruct, parse_macro_input};

/// Turns an enum into a crate error type.
///
/// The enum gets `Debug` and `thiserror::Error` derives (unless already present),
/// a `<Name>Ext` trait with `.context(..)`, `From<Source>` for variants that wrap
/// an upstream error, and `From<&'static str>` / `From<String>` when an `Internal`
/// variant exists. A private `format_context` helper is emitted for use inside
/// `#[error(..)]` strings.
///
/// Every variant must use named fields. Variants with a `source` (or a field
/// marked `#[source]`/`#[from]`) must also carry
/// `context: Option<Cow<'static, str>>`.
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[gway_derive::gway_error]
/// pub enum ArticlesError {
///     #[error("HTTP transport error{}: {source}", format_context(.context))]
///     Http { source: reqwest::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal articles error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn fetch() -> Result<(), ArticlesError> {
///     do_request().context("Fetching published articles")?;
///     Err("unexpected payload".into())
/// }
/// ```
#[proc_macro_attribute]
pub fn gway_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).into()
}

/// Turns a struct into a shareable feature-slice handle.
///
/// Generates `<Name>Inner` with the declared fields, an `Arc`-backed `<Name>`
/// wrapper with `new` and `Deref`, and the `FeatureSlice` impl so the handle can
/// be registered in the site state.
///
/// ```rust,ignore
/// #[gway_derive::gway_slice]
/// pub struct Locations {
///     pub provider: LocationProvider,
/// }
///
/// let slice = Locations::new(LocationsInner { provider });
/// ```
#[proc_macro_attribute]
pub fn gway_slice(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::slice::expand(input).into()
}
