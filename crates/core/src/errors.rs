use thiserror::Error;

/// Unified error type for the entire retail-dashboard-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
///
/// Query operations (filtering, grouping, KPI computation) never fail:
/// degenerate input resolves to documented sentinel values, not errors.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Record Validation ───────────────────────────────────────────
    #[error("Record validation failed: {0}")]
    ValidationError(String),

    #[error("Duplicate record id: {0}")]
    DuplicateRecordId(String),

    // ── Import / Export ─────────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}
