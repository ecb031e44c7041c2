use std::backtrace::Backtrace;

use crate::solver::engine::VariableId;

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors reported by the solver backend.
///
/// These are caller programming errors, not solver outcomes: an unsolvable
/// problem is `Ok(None)` from the engine, never an `Err`.
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    /// A constraint referenced a variable that has no domain entry.
    #[error("variable ?{0} has no domain entry")]
    UnknownVariable(VariableId),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Inner: {inner}\n{backtrace}")]
    Inner {
        inner: Box<SolverError>,
        backtrace: Box<Backtrace>,
    },
}

impl From<SolverError> for Error {
    fn from(inner: SolverError) -> Self {
        Error::Inner {
            inner: Box::new(inner),
            backtrace: Box::new(Backtrace::capture()),
        }
    }
}
