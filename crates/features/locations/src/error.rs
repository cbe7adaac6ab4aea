use std::borrow::Cow;

/// A specialized [`LocationError`] enum of this crate.
#[gway_derive::gway_error]
pub enum LocationError {
    /// The bundled reference dataset could not be parsed.
    #[error("Location dataset error{}: {source}", format_context(.context))]
    Dataset { source: serde_json::Error, context: Option<Cow<'static, str>> },
    /// A dataset file could not be read.
    #[error("Location dataset I/O error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },
    /// The dataset has no entry for the requested country.
    #[error("Unknown country{}: {message}", format_context(.context))]
    UnknownCountry { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal location error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
