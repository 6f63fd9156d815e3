use std::collections::BTreeSet;
use std::fmt;
use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use thiserror::Error;

use crate::models::ProjectInfo;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Fatal failures of the registration request.
///
/// A non-200 response is deliberately NOT in here: the registry answering at
/// all is a completed round-trip, reported through [`Outcome::Rejected`].
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The constructed endpoint URL does not parse. Raised before any network
    /// attempt, with the offending URL for diagnosis.
    #[error("invalid registration URL '{url}'")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The request did not complete within the 30-second budget.
    #[error("timed out sending dependencies to '{url}'")]
    Timeout {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// I/O failure while sending dependencies.
    #[error("sending dependencies to '{url}' failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Result of a completed round-trip to the registry.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Registered,
    Rejected { status: StatusCode, body: String },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Registered => write!(f, "Dependencies registered successfully"),
            Outcome::Rejected { status, body } => write!(
                f,
                "Error sending dependencies - code {}: {}",
                status.as_u16(),
                body
            ),
        }
    }
}

/// Endpoint path for registering a project's dependency set.
///
/// The missing slashes between the `{group}`, `artifacts` and `versions`
/// segments are what deployed registries parse; changing them is a wire
/// format break.
pub fn registration_url(base: &str, project: &ProjectInfo) -> String {
    format!(
        "{}/api/groups/{}artifacts/{}versions/{}",
        base, project.group, project.name, project.version
    )
}

/// Serialize the coordinate set as a JSON array of strings.
///
/// An empty set serializes to `[]`.
pub fn registration_body(coordinates: &BTreeSet<String>) -> String {
    serde_json::Value::from(coordinates.iter().cloned().collect::<Vec<String>>()).to_string()
}

/// POST the coordinate set to the registry at `base_url`.
///
/// Single blocking round-trip over HTTP/1.1 with a 30-second timeout and no
/// retry. Any HTTP response, 200 or not, is an `Ok` outcome; only transport
/// problems are errors.
pub async fn register(
    coordinates: &BTreeSet<String>,
    base_url: &str,
    project: &ProjectInfo,
) -> Result<Outcome, RegistryError> {
    let target = registration_url(base_url, project);
    let url = Url::parse(&target).map_err(|source| RegistryError::InvalidUrl {
        url: target.clone(),
        source,
    })?;

    let body = registration_body(coordinates);

    let client = Client::builder()
        .http1_only()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|source| RegistryError::Transport {
            url: target.clone(),
            source,
        })?;

    let response = client
        .post(url)
        .header("Content-Type", "application/json;charset=UTF-8")
        .body(body)
        .send()
        .await
        .map_err(|source| {
            if source.is_timeout() {
                RegistryError::Timeout {
                    url: target.clone(),
                    source,
                }
            } else {
                RegistryError::Transport {
                    url: target.clone(),
                    source,
                }
            }
        })?;

    let status = response.status();
    if status == StatusCode::OK {
        Ok(Outcome::Registered)
    } else {
        let body = response.text().await.unwrap_or_default();
        Ok(Outcome::Rejected { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(group: &str, name: &str, version: &str) -> ProjectInfo {
        ProjectInfo {
            group: group.to_string(),
            name: name.to_string(),
            version: version.to_string(),
        }
    }

    #[test]
    fn test_registration_url_layout() {
        let url = registration_url("http://localhost:3820", &project("g", "n", "v"));
        assert_eq!(url, "http://localhost:3820/api/groups/gartifacts/nversions/v");
    }

    #[test]
    fn test_registration_body_single_coordinate() {
        let coordinates = BTreeSet::from(["a:b:1".to_string()]);
        assert_eq!(registration_body(&coordinates), r#"["a:b:1"]"#);
    }

    #[test]
    fn test_registration_body_empty_set_is_empty_array() {
        assert_eq!(registration_body(&BTreeSet::new()), "[]");
    }

    #[test]
    fn test_registration_body_multiple_coordinates() {
        let coordinates =
            BTreeSet::from(["a:b:1".to_string(), "c:d".to_string()]);
        assert_eq!(registration_body(&coordinates), r#"["a:b:1","c:d"]"#);
    }

    #[test]
    fn test_rejected_outcome_reports_status_and_body() {
        let outcome = Outcome::Rejected {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: "oops".to_string(),
        };
        let message = outcome.to_string();
        assert!(message.contains("500"));
        assert!(message.contains("oops"));
    }

    #[test]
    fn test_registered_outcome_message() {
        assert_eq!(
            Outcome::Registered.to_string(),
            "Dependencies registered successfully"
        );
    }

    #[tokio::test]
    async fn test_invalid_url_fails_before_any_network_attempt() {
        let coordinates = BTreeSet::new();
        // a base without a scheme makes the constructed URL unparsable
        let result = register(&coordinates, "not a url", &project("g", "n", "v")).await;
        assert!(matches!(result, Err(RegistryError::InvalidUrl { .. })));
    }
}
