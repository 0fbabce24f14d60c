/// Application-level constants
pub const APP_NAME: &str = "Thoracic";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log filter used when `RUST_LOG` is not set.
/// Per-entity decisions are logged at debug; batch summaries at info.
pub fn default_log_filter() -> &'static str {
    "thoracic_lib=info,thoracic=info"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_name_is_thoracic() {
        assert_eq!(APP_NAME, "Thoracic");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }

    #[test]
    fn default_filter_parses() {
        let filter = tracing_subscriber::EnvFilter::try_new(default_log_filter());
        assert!(filter.is_ok());
    }
}
