use std::borrow::Cow;
use thiserror::Error;

/// A specialized [`HistoryError`] enum of this crate.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("Invalid resolver configuration{}: {message}", format_context(.context))]
    InvalidConfiguration { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("History level lookup failed{}: {message}", format_context(.context))]
    Lookup { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("History error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Adds contextual information to history results.
pub trait HistoryErrorExt<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, HistoryError>;
}

impl<T> HistoryErrorExt<T> for Result<T, HistoryError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            match &mut e {
                HistoryError::InvalidConfiguration { context: c, .. }
                | HistoryError::Lookup { context: c, .. }
                | HistoryError::Internal { context: c, .. } => *c = Some(context.into()),
            }
            e
        })
    }
}

impl From<&'static str> for HistoryError {
    #[inline]
    fn from(s: &'static str) -> Self {
        Self::Internal { message: Cow::Borrowed(s), context: None }
    }
}

impl From<String> for HistoryError {
    #[inline]
    fn from(s: String) -> Self {
        Self::Internal { message: Cow::Owned(s), context: None }
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
