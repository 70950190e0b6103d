//! ASG Core - model, session and collaborators for inspecting
//! application security groups.
//!
//! This crate holds everything the CLI needs apart from the terminal:
//! the group model, the error taxonomy, the on-disk session, command
//! requirements, the output sink trait and the API repository.

pub mod error;
pub mod model;
pub mod repository;
pub mod requirements;
pub mod session;
pub mod ui;

// Re-export commonly used types
pub use error::{AsgError, Result};
pub use model::{ApplicationSecurityGroup, SecurityRule, SpaceFields};
pub use repository::{AppSecurityGroupRepository, CloudControllerAsgRepository};
pub use requirements::{LoginChecker, Requirement, RequirementFailure};
pub use session::{CurrentUser, Session, SessionStore};
pub use ui::{BufferUi, Ui};
