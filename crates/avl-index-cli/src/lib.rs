//! `avl-menu`: a line-driven console over [`avl_index::AvlTree`].
//!
//! Provides the logic used by the binary entry point:
//! - [`command`]: parse one input line into a [`Command`]
//! - [`session`]: apply commands to an `AvlTree<i64>` and report to a sink
//! - [`shape`]: serializable structure dump for the `dump` command
//!
//! The console layers entirely on the public tree API and holds no
//! invariants of its own.

pub mod command;
pub mod session;
pub mod shape;

pub use command::Command;
pub use session::Session;
pub use shape::Shape;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid choice. Try again.")]
    InvalidChoice(String),
    #[error("Invalid input. Enter integer.")]
    MissingKey,
    #[error("Invalid input '{0}'. Enter integer.")]
    InvalidKey(String),
    #[error("Invalid input. Enter a count.")]
    MissingCount,
    #[error("Invalid count '{0}'.")]
    InvalidCount(String),
    #[error("Invalid seed '{0}'.")]
    InvalidSeed(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Whether the session has to stop. Parse errors are reported and the
    /// loop goes on.
    pub fn is_fatal(&self) -> bool {
        matches!(self, CliError::Io(_) | CliError::Json(_))
    }
}
