pub mod analytics;
pub mod config;
pub mod domain;
pub mod duration;
pub mod error;
pub mod export;
pub mod filter;
pub mod ingest;
pub mod log_view;
pub mod session;

#[cfg(test)]
mod tests {
    use super::error::AppError;

    #[test]
    fn app_error_is_structured() {
        let err = AppError::new("EXPORT_CSV_WRITE_FAILED", "write failed")
            .with_details("disk full")
            .with_retryable(true);
        assert_eq!(err.code, "EXPORT_CSV_WRITE_FAILED");
        assert_eq!(err.details.as_deref(), Some("disk full"));
        assert!(err.retryable);
        assert_eq!(
            err.to_string(),
            "[EXPORT_CSV_WRITE_FAILED] write failed (disk full)"
        );
    }
}
