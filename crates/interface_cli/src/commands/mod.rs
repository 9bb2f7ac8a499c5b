//! Command implementations
//!
//! Each command writes to the [`CommandContext`](crate::output::CommandContext)
//! it is given and reports an [`Outcome`].

pub mod currency;
pub mod health;
pub mod test_db;

/// Result of a command that ran to completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

impl Outcome {
    /// Process exit code
    pub fn code(self) -> u8 {
        match self {
            Outcome::Success => 0,
            Outcome::Failure => crate::error::EXIT_FAILURE,
        }
    }
}
