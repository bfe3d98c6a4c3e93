use serde::{Deserialize, Serialize};

/// Sentinel values a freshly checked-out config ships with. Credentials
/// equal to these count as not configured.
pub const ACCESS_KEY_PLACEHOLDER: &str = "YOUR_ACCESS_KEY_ID";
pub const SECRET_KEY_PLACEHOLDER: &str = "YOUR_SECRET_ACCESS_KEY";

/// Connection parameters for the dashboard's bucket.
///
/// Loaded once at startup and passed by value to whatever needs it; the
/// catalog treats it as immutable input and there is no runtime mutation
/// path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub region: String,
    pub bucket_name: String,
    pub access_key_id: String,
    pub secret_access_key: String,
    /// Serve everything from the fixed in-memory fixture instead of the
    /// object store.
    #[serde(default)]
    pub use_mock_data: bool,
}

impl DashboardConfig {
    /// The configured mock-mode flag, verbatim.
    pub fn is_mock_mode(&self) -> bool {
        self.use_mock_data
    }

    /// True iff both credential fields are non-empty and not the checkout
    /// placeholders. Presence check only; correctness against the store is
    /// not validated here.
    pub fn credentials_configured(&self) -> bool {
        !self.access_key_id.is_empty()
            && !self.secret_access_key.is_empty()
            && self.access_key_id != ACCESS_KEY_PLACEHOLDER
            && self.secret_access_key != SECRET_KEY_PLACEHOLDER
    }

    /// Public endpoint of the configured bucket. Pure function of the
    /// configuration; no I/O, no failure mode.
    pub fn bucket_base_url(&self) -> String {
        format!(
            "https://{}.s3.{}.amazonaws.com",
            self.bucket_name, self.region
        )
    }

    /// Load configuration from environment variables.
    ///
    /// `S3_BUCKET` is required unless `USE_MOCK_DATA=true`; `S3_REGION`
    /// defaults to us-east-1 and missing credentials stay empty (they fail
    /// the presence check at call time rather than here).
    pub fn from_env() -> Result<Self, ConfigLoadError> {
        let use_mock_data = std::env::var("USE_MOCK_DATA")
            .map(|v| v.to_lowercase() == "true")
            .unwrap_or(false);

        let bucket_name = match std::env::var("S3_BUCKET") {
            Ok(value) => value,
            Err(_) if use_mock_data => String::new(),
            Err(_) => {
                return Err(ConfigLoadError::MissingVar { name: "S3_BUCKET" });
            }
        };

        Ok(Self {
            region: std::env::var("S3_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
            bucket_name,
            access_key_id: std::env::var("S3_ACCESS_KEY").unwrap_or_default(),
            secret_access_key: std::env::var("S3_SECRET_KEY").unwrap_or_default(),
            use_mock_data,
        })
    }

    /// Load configuration from a JSON file.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigLoadError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

/// Errors from the configuration loaders
#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    #[error("{name} environment variable required")]
    MissingVar { name: &'static str },

    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(access_key_id: &str, secret_access_key: &str) -> DashboardConfig {
        DashboardConfig {
            region: "eu-north-1".to_string(),
            bucket_name: "camera-captures".to_string(),
            access_key_id: access_key_id.to_string(),
            secret_access_key: secret_access_key.to_string(),
            use_mock_data: false,
        }
    }

    #[test]
    fn test_credentials_configured() {
        assert!(config("AKIAEXAMPLE", "wJalrEXAMPLEKEY").credentials_configured());
    }

    #[test]
    fn test_placeholder_credentials_not_configured() {
        assert!(!config(ACCESS_KEY_PLACEHOLDER, SECRET_KEY_PLACEHOLDER).credentials_configured());
        assert!(!config("AKIAEXAMPLE", SECRET_KEY_PLACEHOLDER).credentials_configured());
    }

    #[test]
    fn test_empty_credentials_not_configured() {
        assert!(!config("", "").credentials_configured());
        assert!(!config("AKIAEXAMPLE", "").credentials_configured());
    }

    #[test]
    fn test_bucket_base_url() {
        assert_eq!(
            config("a", "b").bucket_base_url(),
            "https://camera-captures.s3.eu-north-1.amazonaws.com"
        );
    }

    #[test]
    fn test_from_json() {
        let cfg: DashboardConfig = serde_json::from_str(
            r#"{
                "region": "us-east-1",
                "bucket_name": "captures",
                "access_key_id": "AKIAEXAMPLE",
                "secret_access_key": "wJalrEXAMPLEKEY"
            }"#,
        )
        .unwrap();

        assert!(!cfg.is_mock_mode());
        assert!(cfg.credentials_configured());
        assert_eq!(cfg.bucket_name, "captures");
    }
}
