//! Response envelope for callers embedding validated records in an API.

use super::now_epoch_ms;
use serde::{Deserialize, Serialize};

/// Outcome wrapper around an optional payload.
///
/// The payload type is anything serializable, typically one of the record
/// shapes in [`crate::model`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
    pub errors: Option<Vec<String>>,
    /// Epoch milliseconds at envelope construction.
    pub timestamp: i64,
}

impl<T> Envelope<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            errors: None,
            timestamp: now_epoch_ms(),
        }
    }

    pub fn error(message: impl Into<String>, errors: Vec<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            errors: Some(errors),
            timestamp: now_epoch_ms(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Envelope;
    use crate::constants::SUCCESS_TASK_CREATED;

    #[test]
    fn ok_envelope_carries_payload_and_no_errors() {
        let envelope = Envelope::ok(SUCCESS_TASK_CREATED, 42_u32);
        assert!(envelope.success);
        assert_eq!(envelope.data, Some(42));
        assert!(envelope.errors.is_none());
        assert!(envelope.timestamp > 0);
    }

    #[test]
    fn error_envelope_carries_error_list_and_no_payload() {
        let envelope: Envelope<u32> =
            Envelope::error("validation failed", vec!["title is required".to_string()]);
        assert!(!envelope.success);
        assert!(envelope.data.is_none());
        assert_eq!(envelope.errors.as_ref().map(Vec::len), Some(1));
    }
}
