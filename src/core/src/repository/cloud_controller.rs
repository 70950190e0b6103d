//! Cloud Controller (v2 API) implementation of the group repository.
//!
//! Groups are looked up with a name filter and inlined relations so that a
//! single request returns the group together with its bound spaces.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::Url;
use serde::Deserialize;

use super::AppSecurityGroupRepository;
use crate::error::{AsgError, Result};
use crate::model::{ApplicationSecurityGroup, SecurityRule, SpaceFields};
use crate::session::Session;

/// Collection path for security groups.
const SECURITY_GROUPS_PATH: &str = "v2/security_groups";

#[derive(Debug, Deserialize)]
struct Page<T> {
    #[serde(default = "Vec::new")]
    resources: Vec<Resource<T>>,
}

#[derive(Debug, Deserialize)]
struct Resource<T> {
    metadata: Metadata,
    entity: T,
}

#[derive(Debug, Deserialize)]
struct Metadata {
    guid: String,
}

#[derive(Debug, Deserialize)]
struct SecurityGroupEntity {
    name: String,
    #[serde(default)]
    rules: Option<Vec<SecurityRule>>,
    #[serde(default)]
    spaces: Option<Vec<Resource<SpaceEntity>>>,
}

#[derive(Debug, Deserialize)]
struct SpaceEntity {
    name: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    error_code: Option<String>,
}

/// Reads groups from a Cloud Controller over HTTP.
///
/// The HTTP client is built on the first lookup, so constructing the
/// repository never fails.
pub struct CloudControllerAsgRepository {
    api_endpoint: String,
    authorization: String,
    timeout: Duration,
    skip_ssl_validation: bool,
}

impl CloudControllerAsgRepository {
    /// Build a repository from the current session.
    pub fn new(session: &Session) -> Self {
        Self {
            api_endpoint: session.api_endpoint.trim().trim_end_matches('/').to_string(),
            authorization: session.authorization(),
            timeout: Duration::from_secs(session.request_timeout_secs),
            skip_ssl_validation: session.skip_ssl_validation,
        }
    }

    fn client(&self) -> Result<reqwest::Client> {
        Ok(reqwest::Client::builder()
            .timeout(self.timeout)
            .danger_accept_invalid_certs(self.skip_ssl_validation)
            .build()?)
    }

    /// `GET /v2/security_groups?q=name:<name>&inline-relations-depth=1`
    fn lookup_url(&self, name: &str) -> Result<Url> {
        let base = format!("{}/{}", self.api_endpoint, SECURITY_GROUPS_PATH);
        Url::parse_with_params(
            &base,
            &[
                ("q", format!("name:{name}")),
                ("inline-relations-depth", "1".to_string()),
            ],
        )
        .map_err(|e| {
            AsgError::ConfigError(format!("Invalid API endpoint '{}': {}", self.api_endpoint, e))
        })
    }
}

#[async_trait]
impl AppSecurityGroupRepository for CloudControllerAsgRepository {
    async fn read(&self, name: &str) -> Result<ApplicationSecurityGroup> {
        let url = self.lookup_url(name)?;
        tracing::debug!(url = %url, "Fetching application security group");

        let response = self
            .client()?
            .get(url)
            .header(AUTHORIZATION, &self.authorization)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), name, "Security group lookup rejected");
            return Err(api_error(status.as_u16(), &body));
        }

        let group = decode_group(name, &body)?;
        tracing::info!(
            name = %group.name,
            guid = %group.guid,
            rules = group.rules.len(),
            spaces = group.spaces.len(),
            "Resolved application security group"
        );
        Ok(group)
    }
}

/// Decode a filtered page into the first matching group.
fn decode_group(name: &str, body: &str) -> Result<ApplicationSecurityGroup> {
    let page: Page<SecurityGroupEntity> = serde_json::from_str(body)?;

    let resource = page
        .resources
        .into_iter()
        .next()
        .ok_or_else(|| AsgError::NotFound(name.to_string()))?;

    let spaces = resource
        .entity
        .spaces
        .unwrap_or_default()
        .into_iter()
        .map(|space| SpaceFields {
            guid: space.metadata.guid,
            name: space.entity.name,
        })
        .collect();

    Ok(ApplicationSecurityGroup {
        name: resource.entity.name,
        guid: resource.metadata.guid,
        rules: resource.entity.rules.unwrap_or_default(),
        spaces,
    })
}

/// Map a non-success response to an API error, preferring the server's
/// own description.
fn api_error(status: u16, body: &str) -> AsgError {
    let message = match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            description: Some(description),
            ..
        }) => description,
        Ok(ErrorBody {
            error_code: Some(code),
            ..
        }) => code,
        _ if body.trim().is_empty() => "no response body".to_string(),
        _ => body.trim().to_string(),
    };
    AsgError::Api { status, message }
}
