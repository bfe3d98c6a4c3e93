use anyhow::{Context, Result};
use camwatch::{create_catalog, format_timestamp, DashboardConfig, ImageCatalog};
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "camwatch-cli")]
#[command(about = "List and delete security-camera captures in a bucket", long_about = None)]
struct Cli {
    /// Path to a JSON config file; overrides the individual options below
    #[arg(short, long, env = "CAMWATCH_CONFIG")]
    config: Option<String>,

    /// S3 region
    #[arg(long, env = "S3_REGION", default_value = "us-east-1")]
    region: String,

    /// S3 bucket name
    #[arg(long, env = "S3_BUCKET")]
    bucket: Option<String>,

    /// S3 access key
    #[arg(long, env = "S3_ACCESS_KEY", default_value = "")]
    access_key: String,

    /// S3 secret key
    #[arg(long, env = "S3_SECRET_KEY", default_value = "")]
    secret_key: String,

    /// Serve from the built-in mock catalog instead of the bucket
    #[arg(long, env = "USE_MOCK_DATA", default_value = "false")]
    mock: bool,

    /// Log level
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the current captures
    List,

    /// Delete a capture by its listing id
    Delete {
        /// Record id from the most recent listing
        id: String,
    },
}

impl Cli {
    fn to_config(&self) -> Result<DashboardConfig> {
        if let Some(path) = &self.config {
            return DashboardConfig::from_file(path)
                .with_context(|| format!("failed to load config from {}", path));
        }

        let bucket_name = match &self.bucket {
            Some(bucket) => bucket.clone(),
            None if self.mock => String::new(),
            None => anyhow::bail!("--bucket (or S3_BUCKET) is required without --mock"),
        };

        Ok(DashboardConfig {
            region: self.region.clone(),
            bucket_name,
            access_key_id: self.access_key.clone(),
            secret_access_key: self.secret_key.clone(),
            use_mock_data: self.mock,
        })
    }

    fn init_logging(&self) {
        let level = match self.log_level.to_lowercase().as_str() {
            "trace" => tracing::Level::TRACE,
            "debug" => tracing::Level::DEBUG,
            "warn" => tracing::Level::WARN,
            "error" => tracing::Level::ERROR,
            _ => tracing::Level::INFO,
        };

        tracing_subscriber::fmt().with_max_level(level).init();
    }
}

async fn list_images(catalog: Arc<dyn ImageCatalog>) -> Result<()> {
    let records = catalog.list_images().await?;

    if records.is_empty() {
        println!("no captures found");
        return Ok(());
    }

    println!(
        "{:<4} {:<22} {:<8} {:<26} url",
        "id", "source", "size", "captured"
    );
    for record in &records {
        println!(
            "{:<4} {:<22} {:<8} {:<26} {}",
            record.id,
            record.source,
            record.size,
            format_timestamp(&record.timestamp),
            record.url
        );
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    cli.init_logging();

    let config = cli.to_config()?;
    info!(
        mock = config.is_mock_mode(),
        bucket = %config.bucket_name,
        "starting camwatch-cli"
    );

    let catalog = create_catalog(config).context("failed to build image catalog")?;

    match &cli.command {
        Commands::List => list_images(catalog).await?,
        Commands::Delete { id } => {
            catalog.delete_image(id).await?;
            println!("deleted image {}", id);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from([
            "camwatch-cli",
            "--bucket",
            "camera-captures",
            "--access-key",
            "test-key",
            "--secret-key",
            "test-secret",
            "list",
        ]);

        assert_eq!(cli.bucket, Some("camera-captures".to_string()));
        assert!(matches!(cli.command, Commands::List));
    }

    #[test]
    fn test_mock_needs_no_bucket() {
        let cli = Cli::parse_from(["camwatch-cli", "--mock", "list"]);

        let config = cli.to_config().unwrap();
        assert!(config.is_mock_mode());
        assert!(config.bucket_name.is_empty());
    }

    #[test]
    fn test_real_mode_requires_bucket() {
        let cli = Cli::parse_from(["camwatch-cli", "list"]);

        assert!(cli.to_config().is_err());
    }
}
