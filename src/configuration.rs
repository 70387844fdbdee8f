//! src/configuration.rs
use crate::store::supabase::CredentialSource;
use config::{Config, File};
use secrecy::Secret;
use serde::Deserialize;
use std::time::Duration;

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    #[serde(default)]
    pub primary_store: PrimaryStoreSettings,
    /// Filled in after loading; never read from the configuration files.
    #[serde(skip)]
    pub credentials: CredentialSource,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    pub port: u16,
    pub host: String,
    pub hmac_secret: Secret<String>,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct PrimaryStoreSettings {
    pub timeout_milliseconds: u64,
    pub table: String,
}

impl Default for PrimaryStoreSettings {
    fn default() -> Self {
        Self {
            timeout_milliseconds: 10_000,
            table: "waitlist".into(),
        }
    }
}

impl PrimaryStoreSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_milliseconds)
    }
}

#[derive(PartialEq)]
pub enum Environment {
    Local,
    Production,
}
impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.as_ref() {
            "local" => Ok(Environment::Local),
            "production" => Ok(Environment::Production),
            _ => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                s
            )),
        }
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path =
        std::env::current_dir().map_err(|e| config::ConfigError::Foreign(Box::new(e)))?;
    let configuration_directory = base_path.join("configuration");

    // Detect the running environment.
    // Default to `local` if not specified.
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;

    // `APP_APPLICATION__PORT=5001` sets `Settings.application.port`
    let settings = Config::builder()
        .add_source(File::from(configuration_directory.join("base")).required(true))
        .add_source(File::from(configuration_directory.join(environment.as_str())).required(true))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    let mut settings: Settings = settings.try_deserialize()?;

    // Locally the Supabase credentials may live in an env file next to the
    // YAML; in production they come from the process environment only.
    if environment == Environment::Local {
        let supabase_file_path = configuration_directory.join("supabase");
        if supabase_file_path.exists() {
            dotenvy::from_filename(supabase_file_path)
                .map_err(|e| config::ConfigError::Foreign(Box::new(e)))?;
        }
    }
    settings.credentials = CredentialSource::default();

    Ok(settings)
}
