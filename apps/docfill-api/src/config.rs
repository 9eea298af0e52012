//! Service configuration
//!
//! Resolved once at startup from the environment and passed into the
//! application state; handlers never read process-wide path state.

use std::path::PathBuf;

use anyhow::{Context, Result};

pub const DEFAULT_PORT: u16 = 5000;

/// Origins allowed to call the API cross-origin when none are configured.
const DEFAULT_ORIGIN: &str = "https://property-doc-frontend.vercel.app";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    /// Base of the absolute download URLs handed back to callers.
    pub public_base_url: String,
    pub template_path: PathBuf,
    pub uploads_dir: PathBuf,
    pub generated_dir: PathBuf,
    pub allowed_origins: Vec<String>,
}

impl AppConfig {
    /// Read configuration from the environment, falling back to the
    /// defaults the service ships with.
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let public_base_url = std::env::var("PUBLIC_BASE_URL")
            .unwrap_or_else(|_| format!("http://localhost:{port}"));

        let data_dir = std::env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."));

        let template_path = std::env::var("TEMPLATE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| data_dir.join("document_template.pdf"));

        let allowed_origins = std::env::var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| DEFAULT_ORIGIN.to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        Self {
            port,
            public_base_url,
            template_path,
            uploads_dir: data_dir.join("uploads"),
            generated_dir: data_dir.join("generated"),
            allowed_origins,
        }
    }

    /// Create the serving directories if they don't exist. Called once at
    /// startup, before the listener binds.
    pub fn init_dirs(&self) -> Result<()> {
        std::fs::create_dir_all(&self.uploads_dir)
            .with_context(|| format!("creating {}", self.uploads_dir.display()))?;
        std::fs::create_dir_all(&self.generated_dir)
            .with_context(|| format!("creating {}", self.generated_dir.display()))?;
        Ok(())
    }

    /// Absolute URL at which a generated artifact can be fetched.
    pub fn download_url(&self, filename: &str) -> String {
        format!(
            "{}/generated/{}",
            self.public_base_url.trim_end_matches('/'),
            filename
        )
    }
}
