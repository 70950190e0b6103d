//! Preconditions evaluated before a command body runs.
//!
//! Requirements are checked in order and the first failure short-circuits
//! the rest. Each failure says which kind of precondition was violated so
//! that callers can tell "not logged in" apart from bad usage.

use std::sync::Arc;

/// Answers whether an authenticated session exists.
pub trait LoginChecker: Send + Sync {
    fn is_logged_in(&self) -> bool;
}

/// Why a command was rejected before running.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequirementFailure {
    #[error("Not logged in. Use 'asg login' to log in.")]
    NotLoggedIn,

    #[error("Incorrect Usage. {0}")]
    Usage(String),
}

impl RequirementFailure {
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Usage(_))
    }
}

/// A single precondition.
pub trait Requirement: Send + Sync {
    fn check(&self) -> Result<(), RequirementFailure>;
}

/// Requires an authenticated session.
pub struct LoginRequirement {
    checker: Arc<dyn LoginChecker>,
}

impl LoginRequirement {
    pub fn new(checker: Arc<dyn LoginChecker>) -> Self {
        Self { checker }
    }
}

impl Requirement for LoginRequirement {
    fn check(&self) -> Result<(), RequirementFailure> {
        if self.checker.is_logged_in() {
            Ok(())
        } else {
            Err(RequirementFailure::NotLoggedIn)
        }
    }
}

/// Requires an exact number of positional arguments.
pub struct ArgCountRequirement {
    expected: usize,
    actual: usize,
}

impl ArgCountRequirement {
    pub fn new(expected: usize, actual: usize) -> Self {
        Self { expected, actual }
    }
}

impl Requirement for ArgCountRequirement {
    fn check(&self) -> Result<(), RequirementFailure> {
        if self.actual == self.expected {
            return Ok(());
        }
        Err(RequirementFailure::Usage(format!(
            "Expected {} argument(s), got {}",
            self.expected, self.actual
        )))
    }
}

/// Evaluate requirements in order, stopping at the first failure.
pub fn check_all(requirements: &[Box<dyn Requirement>]) -> Result<(), RequirementFailure> {
    for requirement in requirements {
        requirement.check()?;
    }
    Ok(())
}
