//! The persisted plan: every booth and company, as JSON.

use crate::booth::{Booth, BoothStore};
use crate::company::CompanyStore;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// File name offered when saving a plan.
pub const DEFAULT_PLAN_FILE_NAME: &str = "expo-plan.json";

/// Plan persistence errors.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("invalid plan file: {0}")]
    Format(#[source] serde_json::Error),
    #[error("failed to serialize plan: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Everything saved for a floor plan.
///
/// Missing, `null` or unknown top-level keys load as empty collections.
/// Company references are not checked at load time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    #[serde(default, deserialize_with = "null_as_default")]
    pub booths: BoothStore,
    #[serde(default, deserialize_with = "null_as_default")]
    pub companies: CompanyStore,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Plan {
    /// Create an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serialize the plan to pretty-printed JSON bytes.
    pub fn export(&self) -> Result<Vec<u8>, PlanError> {
        serde_json::to_vec_pretty(self).map_err(PlanError::Serialize)
    }

    /// Parse a plan from JSON bytes.
    pub fn import(bytes: &[u8]) -> Result<Self, PlanError> {
        serde_json::from_slice(bytes).map_err(PlanError::Format)
    }

    /// Serialize the plan to a JSON string.
    pub fn to_json(&self) -> Result<String, PlanError> {
        serde_json::to_string_pretty(self).map_err(PlanError::Serialize)
    }

    /// Parse a plan from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, PlanError> {
        serde_json::from_str(json).map_err(PlanError::Format)
    }

    /// Company name shown for a booth, or [`crate::UNASSIGNED`].
    pub fn company_name(&self, booth: &Booth) -> &str {
        self.companies.display_name(booth.company_id.as_ref())
    }

    /// Booths whose company reference no longer resolves.
    pub fn orphaned_booths(&self) -> impl Iterator<Item = &Booth> {
        self.booths.iter().filter(|b| {
            b.company_id
                .as_ref()
                .is_some_and(|r| r.resolve(&self.companies).is_none())
        })
    }
}
