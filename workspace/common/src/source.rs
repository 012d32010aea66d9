//! Endpoints and payload shape of the public random-data generator.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{DashboardError, Result};

pub const DEFAULT_BASE_URL: &str = "https://random-data-api.com/api";

/// Records requested per collection when the dashboard mounts.
pub const DEFAULT_INITIAL_BATCH_SIZE: u32 = 5;

/// Resource kinds served by the random-data API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Users,
    Banks,
}

impl Resource {
    fn path(&self) -> &'static str {
        match self {
            Resource::Users => "/users/random_user",
            Resource::Banks => "/bank/random_bank",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Resource::Users => "users",
            Resource::Banks => "banks",
        }
    }
}

/// Location of the random-data API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomDataSource {
    base_url: String,
}

impl Default for RandomDataSource {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl RandomDataSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Url returning `size` random records of `resource`.
    pub fn url(&self, resource: Resource, size: u32) -> String {
        format!("{}{}?size={}", self.base_url, resource.path(), size)
    }
}

// The generator answers with a bare object for a single record.
#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

/// Decodes a response body holding either one record or an array of records.
pub fn decode_records<T: DeserializeOwned>(body: &str) -> Result<Vec<T>> {
    let decoded: OneOrMany<T> =
        serde_json::from_str(body).map_err(|e| DashboardError::Decode(e.to_string()))?;

    Ok(match decoded {
        OneOrMany::Many(records) => records,
        OneOrMany::One(record) => vec![record],
    })
}
