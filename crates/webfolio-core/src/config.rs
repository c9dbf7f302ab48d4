//! Configuration module
//!
//! Environment-based configuration for the API. All settings have sensible
//! defaults so the service runs with no environment at all, except that
//! wildcard CORS is rejected in production.

use std::env;

const DEFAULT_PORT: u16 = 4000;
const DEFAULT_MAX_BODY_SIZE_MB: usize = 100;
const DEFAULT_WEBP_QUALITY: f32 = 100.0;

/// Raster image extensions eligible for transcoding, used when
/// `ALLOWED_EXTENSIONS` is not set.
pub const DEFAULT_IMAGE_EXTENSIONS: &str = "jpg,jpeg,png,gif,bmp,tiff,webp";

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub cors_origins: Vec<String>,
    pub environment: String,
    /// Cap on the whole multipart request body, in bytes.
    pub max_body_size_bytes: usize,
    /// Lower-cased file extensions treated as raster images.
    pub allowed_extensions: Vec<String>,
    /// WebP encoder quality, 0-100.
    pub webp_quality: f32,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let cors_origins_str = env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string());
        let is_production =
            environment.to_lowercase() == "production" || environment.to_lowercase() == "prod";
        if is_production && cors_origins_str.trim() == "*" {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot be '*' in production. Please specify explicit origins."
            ));
        }

        let cors_origins: Vec<String> = cors_origins_str
            .split(',')
            .map(|s| s.trim().to_string())
            .collect();

        let max_body_size_mb = env::var("MAX_BODY_SIZE_MB")
            .unwrap_or_else(|_| DEFAULT_MAX_BODY_SIZE_MB.to_string())
            .parse::<usize>()
            .unwrap_or(DEFAULT_MAX_BODY_SIZE_MB);

        let allowed_extensions = env::var("ALLOWED_EXTENSIONS")
            .unwrap_or_else(|_| DEFAULT_IMAGE_EXTENSIONS.to_string())
            .split(',')
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();

        let webp_quality = env::var("WEBP_QUALITY")
            .unwrap_or_else(|_| DEFAULT_WEBP_QUALITY.to_string())
            .parse::<f32>()
            .unwrap_or(DEFAULT_WEBP_QUALITY)
            .clamp(0.0, 100.0);

        Ok(Config {
            server_port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            cors_origins,
            environment,
            max_body_size_bytes: max_body_size_mb * 1024 * 1024,
            allowed_extensions,
            webp_quality,
        })
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_port: DEFAULT_PORT,
            cors_origins: vec!["*".to_string()],
            environment: "development".to_string(),
            max_body_size_bytes: DEFAULT_MAX_BODY_SIZE_MB * 1024 * 1024,
            allowed_extensions: DEFAULT_IMAGE_EXTENSIONS
                .split(',')
                .map(|s| s.to_string())
                .collect(),
            webp_quality: DEFAULT_WEBP_QUALITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server_port, 4000);
        assert!(!config.is_production());
        assert_eq!(config.webp_quality, 100.0);
        assert!(config.allowed_extensions.contains(&"jpeg".to_string()));
        assert!(config.allowed_extensions.contains(&"tiff".to_string()));
        assert_eq!(config.allowed_extensions.len(), 7);
    }

    #[test]
    fn test_is_production() {
        let mut config = Config::default();
        assert!(!config.is_production());
        config.environment = "Production".to_string();
        assert!(config.is_production());
        config.environment = "prod".to_string();
        assert!(config.is_production());
    }
}
