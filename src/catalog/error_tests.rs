//! Unit tests for catalog error types

#[cfg(test)]
mod tests {
    use crate::catalog::error::{CatalogError, FetchFailure};
    use std::error::Error;

    #[test]
    fn test_duplicate_load_display() {
        let error = CatalogError::DuplicateLoad { existing: 3 };
        assert_eq!(
            error.to_string(),
            "Catalog already loaded with 3 record(s); a session loads it exactly once"
        );
    }

    #[test]
    fn test_fetch_failure_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.json");
        let failure: FetchFailure = io.into();
        assert!(failure.to_string().contains("missing.json"));
        assert!(failure.source().is_some());
    }

    #[test]
    fn test_fetch_failure_from_decode() {
        let decode = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let failure: FetchFailure = decode.into();
        assert!(matches!(failure, FetchFailure::Decode(_)));
        assert!(failure.to_string().starts_with("Dataset is not a valid record array"));
    }

    #[test]
    fn test_catalog_error_wraps_fetch_failure() {
        let io = std::io::Error::other("offline");
        let error: CatalogError = FetchFailure::from(io).into();
        assert!(matches!(error, CatalogError::Fetch(FetchFailure::Io(_))));
        assert!(error.to_string().starts_with("Failed to fetch catalog"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CatalogError>();
        assert_send_sync::<FetchFailure>();
    }
}
