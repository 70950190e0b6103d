//! Remote retrieval of application security groups.

mod cloud_controller;

pub use cloud_controller::CloudControllerAsgRepository;

use async_trait::async_trait;

use crate::error::Result;
use crate::model::ApplicationSecurityGroup;

/// Looks up application security groups by name.
#[async_trait]
pub trait AppSecurityGroupRepository: Send + Sync {
    /// Fetch the group called `name` together with its rules and spaces.
    async fn read(&self, name: &str) -> Result<ApplicationSecurityGroup>;
}
