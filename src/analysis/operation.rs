//! Asynchronous analysis operation envelope.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::AnalyzeResult;
use crate::error::{Error, Result};

/// State of an analysis operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OperationStatus {
    /// Queued, not yet picked up
    NotStarted,
    /// Still being analysed
    Running,
    /// Finished with a result
    Succeeded,
    /// Finished with an error
    Failed,
    /// Canceled by the caller
    Canceled,
}

impl std::fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OperationStatus::NotStarted => "notStarted",
            OperationStatus::Running => "running",
            OperationStatus::Succeeded => "succeeded",
            OperationStatus::Failed => "failed",
            OperationStatus::Canceled => "canceled",
        };
        f.write_str(name)
    }
}

/// Error details reported by a failed operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperationError {
    /// Service error code
    pub code: String,
    /// Human-readable message
    pub message: String,
}

/// The envelope returned when polling an analysis operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeOperation {
    /// Operation state
    pub status: OperationStatus,

    /// When the operation was submitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date_time: Option<DateTime<Utc>>,

    /// When the operation last changed state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_date_time: Option<DateTime<Utc>>,

    /// Error details for failed operations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<OperationError>,

    /// The analysis result, present once the operation succeeded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analyze_result: Option<AnalyzeResult>,
}

impl AnalyzeOperation {
    /// Wrap a finished result in a succeeded envelope.
    pub fn succeeded(result: AnalyzeResult) -> Self {
        Self {
            status: OperationStatus::Succeeded,
            created_date_time: None,
            last_updated_date_time: None,
            error: None,
            analyze_result: Some(result),
        }
    }

    /// Time the service spent on the operation, when both timestamps are known.
    pub fn duration(&self) -> Option<chrono::Duration> {
        match (self.created_date_time, self.last_updated_date_time) {
            (Some(created), Some(updated)) => Some(updated - created),
            _ => None,
        }
    }

    /// Unwrap the analysis result, failing unless the operation succeeded.
    pub fn into_result(self) -> Result<AnalyzeResult> {
        if self.status != OperationStatus::Succeeded {
            if let Some(ref error) = self.error {
                log::warn!("Analysis operation {}: {} {}", self.status, error.code, error.message);
            }
            return Err(Error::OperationNotSucceeded(self.status));
        }
        self.analyze_result.ok_or(Error::MissingAnalyzeResult)
    }
}
