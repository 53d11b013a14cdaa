//! Error type definitions

use std::borrow::Cow;

use thiserror::Error;

/// Primary error type for ecviz operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A construction or configuration input is out of its domain
    #[error("invalid parameter '{name}': {reason}")]
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// The requested quantity has no meaning for the current curve
    #[error("{operation} is undefined: {reason}")]
    Undefined {
        /// Operation that was refused
        operation: &'static str,
        /// Why the operation is undefined
        reason: &'static str,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<N: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        name: N,
        reason: R,
    ) -> Self {
        Error::Parameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand to create an Undefined error
    pub fn undefined(operation: &'static str, reason: &'static str) -> Self {
        Error::Undefined { operation, reason }
    }
}

/// Result type for ecviz operations
pub type Result<T> = core::result::Result<T, Error>;
