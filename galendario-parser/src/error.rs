use std::io;

use thiserror::Error;

/// Everything that can stop an extraction run.
///
/// Any markup contract violation is reported as [`Error::UnexpectedInput`];
/// there is no partial result when one occurs.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unexpected html input: {0}")]
    UnexpectedInput(String),

    #[error("could not read html input: {0}")]
    Read(#[from] io::Error),
}

impl Error {
    pub(crate) fn unexpected<S: Into<String>>(reason: S) -> Self {
        Self::UnexpectedInput(reason.into())
    }

    #[must_use]
    pub fn is_unexpected_input(&self) -> bool {
        matches!(self, Self::UnexpectedInput(_))
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
