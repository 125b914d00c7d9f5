//! Hand-off of a submitted record from the form to the preview.
//!
//! Records are stored as JSON under a random token, expire after a TTL and
//! can be read only once.

use log::{debug, warn};
use moka::sync::Cache;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

use crate::config::DocumentConfig;
use crate::form::FieldRecord;

#[derive(Debug, Error)]
pub enum HandoffError {
    #[error("failed to encode record: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("failed to decode record: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Opaque key for one stored record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HandoffToken(Uuid);

impl HandoffToken {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for HandoffToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for HandoffToken {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Serialize a record into its hand-off payload.
pub fn encode_record(record: &FieldRecord) -> Result<String, HandoffError> {
    serde_json::to_string(record).map_err(HandoffError::Encode)
}

/// Parse a hand-off payload back into a record.
pub fn decode_record(payload: &str) -> Result<FieldRecord, HandoffError> {
    serde_json::from_str(payload).map_err(HandoffError::Decode)
}

#[derive(Clone)]
pub struct HandoffStore {
    entries: Cache<HandoffToken, String>,
}

impl HandoffStore {
    pub fn new(ttl: Duration, capacity: u64) -> Self {
        let entries = Cache::builder()
            .time_to_live(ttl)
            .max_capacity(capacity)
            .build();
        Self { entries }
    }

    pub fn from_config(config: &DocumentConfig) -> Self {
        Self::new(config.handoff_ttl, config.handoff_capacity)
    }

    /// Store a record and return the token to read it back with.
    pub fn put(&self, record: &FieldRecord) -> Result<HandoffToken, HandoffError> {
        let payload = encode_record(record)?;
        let token = HandoffToken::generate();
        self.entries.insert(token, payload);
        debug!("Stored hand-off record {}", token);
        Ok(token)
    }

    /// Remove and return the record for `token`.
    ///
    /// The removal is atomic, so concurrent callers with the same token see
    /// the record at most once. Missing, expired and unreadable entries all
    /// come back as `None`.
    pub fn take(&self, token: &HandoffToken) -> Option<FieldRecord> {
        let Some(payload) = self.entries.remove(token) else {
            warn!("No hand-off record for {}", token);
            return None;
        };

        match decode_record(&payload) {
            Ok(record) => {
                debug!("Took hand-off record {}", token);
                Some(record)
            }
            Err(e) => {
                warn!("Discarding hand-off record {}: {}", token, e);
                None
            }
        }
    }

    pub fn contains(&self, token: &HandoffToken) -> bool {
        self.entries.contains_key(token)
    }
}

impl Default for HandoffStore {
    fn default() -> Self {
        Self::from_config(&DocumentConfig::default())
    }
}
