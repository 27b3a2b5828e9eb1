//! Analysis payload detection and decoding.
//!
//! A layout analysis result reaches us either bare or wrapped in the
//! operation envelope returned when polling the service. Both are JSON;
//! detection looks at the top-level keys only.

use crate::analysis::{AnalyzeOperation, AnalyzeResult, OperationStatus};
use crate::error::{Error, Result};
use chrono::{DateTime, Duration, Utc};
use serde_json::Value;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Shape of an analysis payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    /// `{"status": ..., "analyzeResult": {...}}`
    Operation,
    /// The analysis result object itself
    Result,
}

impl std::fmt::Display for PayloadKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PayloadKind::Operation => write!(f, "operation envelope"),
            PayloadKind::Result => write!(f, "analysis result"),
        }
    }
}

/// Keys that only an operation envelope carries.
const ENVELOPE_KEYS: &[&str] = &["status", "analyzeResult"];

/// Keys of a bare analysis result.
const RESULT_KEYS: &[&str] = &[
    "paragraphs",
    "sections",
    "tables",
    "pages",
    "content",
    "apiVersion",
    "modelId",
];

/// A decoded payload: the analysis result plus envelope details, if any.
#[derive(Debug, Clone)]
pub struct Payload {
    /// Shape the payload had
    pub kind: PayloadKind,
    /// Operation status (envelopes only)
    pub status: Option<OperationStatus>,
    /// Submission time (envelopes only)
    pub created: Option<DateTime<Utc>>,
    /// Completion time (envelopes only)
    pub last_updated: Option<DateTime<Utc>>,
    /// Time the service spent, when both timestamps are known
    pub duration: Option<Duration>,
    /// The analysis result
    pub result: AnalyzeResult,
}

/// Detect the payload kind of a decoded JSON value.
///
/// # Returns
/// * `Ok(PayloadKind)` if the value looks like an envelope or a result
/// * `Err(Error::UnknownFormat)` otherwise
pub fn detect_payload(value: &Value) -> Result<PayloadKind> {
    let object = value.as_object().ok_or(Error::UnknownFormat)?;

    if ENVELOPE_KEYS.iter().any(|k| object.contains_key(*k)) {
        return Ok(PayloadKind::Operation);
    }
    if RESULT_KEYS.iter().any(|k| object.contains_key(*k)) {
        return Ok(PayloadKind::Result);
    }
    Err(Error::UnknownFormat)
}

/// Detect the payload kind of raw JSON bytes.
///
/// # Example
/// ```
/// use unlayout::detect::{detect_format_from_bytes, PayloadKind};
///
/// let kind = detect_format_from_bytes(br#"{"status": "running"}"#).unwrap();
/// assert_eq!(kind, PayloadKind::Operation);
/// ```
pub fn detect_format_from_bytes(data: &[u8]) -> Result<PayloadKind> {
    let value: Value = serde_json::from_slice(data).map_err(|_| Error::UnknownFormat)?;
    detect_payload(&value)
}

/// Detect the payload kind of a file.
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<PayloadKind> {
    let data = fs::read(path)?;
    detect_format_from_bytes(&data)
}

/// Check if bytes hold a recognizable analysis payload.
pub fn is_analysis_payload(data: &[u8]) -> bool {
    detect_format_from_bytes(data).is_ok()
}

/// Decode a payload from a JSON value, unwrapping an envelope if present.
pub fn decode_payload(value: Value) -> Result<Payload> {
    match detect_payload(&value)? {
        PayloadKind::Result => Ok(Payload {
            kind: PayloadKind::Result,
            status: None,
            created: None,
            last_updated: None,
            duration: None,
            result: serde_json::from_value(value)?,
        }),
        PayloadKind::Operation => {
            let operation: AnalyzeOperation = serde_json::from_value(value)?;
            let status = operation.status;
            let created = operation.created_date_time;
            let last_updated = operation.last_updated_date_time;
            let duration = operation.duration();
            let result = operation.into_result()?;
            Ok(Payload {
                kind: PayloadKind::Operation,
                status: Some(status),
                created,
                last_updated,
                duration,
                result,
            })
        }
    }
}

/// Decode a payload from JSON bytes.
pub fn decode_bytes(data: &[u8]) -> Result<Payload> {
    decode_payload(serde_json::from_slice(data)?)
}

/// Decode a payload from a reader.
pub fn decode_reader<R: Read>(reader: R) -> Result<Payload> {
    decode_payload(serde_json::from_reader(reader)?)
}

/// Decode a payload from a file.
pub fn decode_path<P: AsRef<Path>>(path: P) -> Result<Payload> {
    let data = fs::read(path)?;
    decode_bytes(&data)
}
