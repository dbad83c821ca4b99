// SPDX-License-Identifier: Apache-2.0

use crate::Span;
use thiserror::Error;

/// The error taxonomy. Every variant carries a message and
/// the span it was raised at; `span` is [`Span::none`] when no parser
/// position is available (e.g. programmatically-constructed expressions).
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum Error {
    /// An operator received operands of types it does not accept. Raised at
    /// expression-construction time, before any resolution.
    #[error("unsupported type at {span}: {message}")]
    UnsupportedType { message: String, span: Span },

    /// An operator was invoked with a structurally invalid argument list.
    #[error("unsupported operation at {span}: {message}")]
    UnsupportedOperation { message: String, span: Span },

    /// An identifier is not present in the environment.
    #[error("undefined reference at {span}: {message}")]
    UndefinedReference { message: String, span: Span },

    /// A value-level precondition failed.
    #[error("invalid argument at {span}: {message}")]
    InvalidArgument { message: String, span: Span },

    /// Set operator operands have incompatible structures.
    #[error("structure mismatch at {span}: {message}")]
    StructureMismatch { message: String, span: Span },
}

impl Error {
    pub fn unsupported_type(message: impl Into<String>) -> Self {
        Error::UnsupportedType { message: message.into(), span: Span::none() }
    }

    pub fn unsupported_operation(message: impl Into<String>) -> Self {
        Error::UnsupportedOperation { message: message.into(), span: Span::none() }
    }

    pub fn undefined_reference(message: impl Into<String>) -> Self {
        Error::UndefinedReference { message: message.into(), span: Span::none() }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Error::InvalidArgument { message: message.into(), span: Span::none() }
    }

    pub fn structure_mismatch(message: impl Into<String>) -> Self {
        Error::StructureMismatch { message: message.into(), span: Span::none() }
    }

    /// Attach a parser-supplied span to an error built without one.
    pub fn with_span(self, span: Span) -> Self {
        match self {
            Error::UnsupportedType { message, .. } => Error::UnsupportedType { message, span },
            Error::UnsupportedOperation { message, .. } => {
                Error::UnsupportedOperation { message, span }
            }
            Error::UndefinedReference { message, .. } => {
                Error::UndefinedReference { message, span }
            }
            Error::InvalidArgument { message, .. } => Error::InvalidArgument { message, span },
            Error::StructureMismatch { message, .. } => {
                Error::StructureMismatch { message, span }
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
