//! Unit tests for favorites diagnostics

#[cfg(test)]
mod tests {
    use crate::favorites::error::{CorruptedStateWarning, PersistenceWriteFailure};
    use crate::storage::StorageError;
    use std::error::Error;

    #[test]
    fn test_malformed_display() {
        let warning = CorruptedStateWarning::Malformed {
            key: "@favorites".to_string(),
            reason: "expected value".to_string(),
        };
        assert_eq!(
            warning.to_string(),
            "Favorites payload under '@favorites' is unreadable: expected value"
        );
        assert!(warning.source().is_none());
    }

    #[test]
    fn test_unreadable_keeps_source() {
        let warning = CorruptedStateWarning::Unreadable {
            key: "@favorites".to_string(),
            source: StorageError::Unavailable("disk gone".to_string()),
        };
        assert!(warning.to_string().contains("disk gone"));
        assert!(warning.source().is_some());
    }

    #[test]
    fn test_write_failure_display() {
        let failure = PersistenceWriteFailure {
            key: "@favorites".to_string(),
            count: 2,
            source: StorageError::Unavailable("read-only".to_string()),
        };
        assert_eq!(
            failure.to_string(),
            "Failed to persist 2 favorite(s) under '@favorites': Storage unavailable: read-only"
        );
        assert!(failure.source().is_some());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CorruptedStateWarning>();
        assert_send_sync::<PersistenceWriteFailure>();
    }
}
