use gway_kernel::http::HttpError;
use std::borrow::Cow;

/// A specialized [`ArticlesError`] enum of this crate.
#[gway_derive::gway_error]
pub enum ArticlesError {
    /// The API answered with a non-success status.
    #[error("Articles API status {status}{}", format_context(.context))]
    Status { status: u16, context: Option<Cow<'static, str>> },
    /// The request never completed.
    #[error("Articles API transport error{}: {source}", format_context(.context))]
    Http { source: reqwest::Error, context: Option<Cow<'static, str>> },
    /// The payload did not match the article shape.
    #[error("Articles decode error{}: {source}", format_context(.context))]
    Decode { source: serde_json::Error, context: Option<Cow<'static, str>> },
    /// Empty or path-breaking id/slug.
    #[error("Invalid article key{}: {message}", format_context(.context))]
    InvalidKey { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal articles error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl ArticlesError {
    /// HTTP status if the API answered; lets pages tell "not found" apart.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self.status(), Some(404))
    }
}

impl From<HttpError> for ArticlesError {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::Status { status, context } => Self::Status { status, context },
            HttpError::Transport { source, context } => Self::Http { source, context },
            HttpError::Decode { source, context } => Self::Decode { source, context },
            HttpError::InvalidUrl { message, context } => Self::Internal { message, context },
        }
    }
}
