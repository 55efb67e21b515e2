pub mod error;

use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
    time::Duration,
};

use toraja_model::Locale;
use tracing::{debug, info};
use url::Url;

use crate::constants::*;
use crate::models::sources::{EnvConfig, FileConfig};
use crate::util::parse_bool;
use crate::models::{
    Config, ConfigMetadata, CorsConfig, ServerConfig, SiteConfig,
    WeatherConfig,
};
use error::ConfigError;

#[derive(Debug, Default, Clone)]
pub struct ConfigLoaderOptions {
    pub config_path: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
}

/// Result of a load: the composed config plus non-fatal notes for the log.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: Config,
    pub warnings: Vec<String>,
}

#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
    env: Option<EnvConfig>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ConfigLoaderOptions) -> Self {
        Self { options, env: None }
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    /// Use these variables instead of reading `.env` and the process
    /// environment.
    pub fn with_env(mut self, env: EnvConfig) -> Self {
        self.env = Some(env);
        self
    }

    pub fn load(&self) -> Result<ConfigLoad, ConfigError> {
        let (env, env_file_loaded) = match &self.env {
            Some(env) => (env.clone(), false),
            None => {
                let loaded = self.load_env_file()?;
                (EnvConfig::gather(), loaded)
            }
        };

        let (file_config, config_path) = self.load_file_config(&env)?;

        let mut warnings = Vec::new();
        if config_path.is_none() {
            warnings.push(
                "No site config file found; using environment variables and \
                 defaults"
                    .to_string(),
            );
        }

        let metadata = ConfigMetadata {
            config_path,
            env_file_loaded,
        };
        let config = compose(
            file_config.unwrap_or_default(),
            env,
            metadata,
            &mut warnings,
        )?;
        debug!(?config, "configuration composed");
        Ok(ConfigLoad { config, warnings })
    }

    fn load_env_file(&self) -> Result<bool, ConfigError> {
        let result = match &self.options.env_file {
            Some(path) => dotenvy::from_path(path).map(|_| true),
            None => dotenvy::dotenv().map(|_| true),
        };
        // A missing .env file is normal.
        result
            .or_else(|err| match err {
                dotenvy::Error::Io(_) => Ok(false),
                _ => Err(err),
            })
            .map_err(ConfigError::from)
    }

    fn load_file_config(
        &self,
        env: &EnvConfig,
    ) -> Result<(Option<FileConfig>, Option<PathBuf>), ConfigError> {
        let explicit = self
            .options
            .config_path
            .clone()
            .or_else(|| env.config_path.clone());

        let path = match explicit {
            Some(path) if !path.exists() => {
                return Err(ConfigError::MissingConfig { path });
            }
            Some(path) => path,
            None => match DEFAULT_CONFIG_LOCATIONS
                .iter()
                .map(Path::new)
                .find(|candidate| candidate.exists())
            {
                Some(found) => found.to_path_buf(),
                None => return Ok((None, None)),
            },
        };

        let config = load_file(&path)?;
        info!(path = %path.display(), "loaded site config file");
        Ok((Some(config), Some(path)))
    }
}

/// Parse a site file, choosing the format by extension and trying both
/// formats when the extension is unknown.
pub fn load_file(path: &Path) -> Result<FileConfig, ConfigError> {
    let contents =
        fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    let parse_error = |message: String| ConfigError::Parse {
        path: path.to_path_buf(),
        message,
    };

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(&contents)
            .map_err(|err| parse_error(err.to_string())),
        Some("toml") => toml::from_str(&contents)
            .map_err(|err| parse_error(err.to_string())),
        _ => toml::from_str(&contents).or_else(|toml_err| {
            serde_json::from_str(&contents).map_err(|json_err| {
                parse_error(format!(
                    "toml error: {toml_err}; json error: {json_err}"
                ))
            })
        }),
    }
}

/// Merge environment over file over defaults.
pub fn compose(
    file: FileConfig,
    env: EnvConfig,
    metadata: ConfigMetadata,
    warnings: &mut Vec<String>,
) -> Result<Config, ConfigError> {
    let FileConfig {
        server: file_server,
        site: file_site,
        cors: file_cors,
        weather: file_weather,
        carousels,
    } = file;

    let port = match env.server_port {
        Some(raw) => parse_value("SERVER_PORT", &raw)?,
        None => file_server.port.unwrap_or(DEFAULT_PORT),
    };
    let server = ServerConfig {
        host: env
            .server_host
            .or(file_server.host)
            .unwrap_or_else(|| DEFAULT_HOST.to_string()),
        port,
    };

    let base_url = env
        .site_base_url
        .or(file_site.base_url)
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    let default_locale = match env.default_locale.or(file_site.default_locale)
    {
        Some(raw) => Locale::from_str(&raw).map_err(|err| {
            ConfigError::InvalidValue {
                key: "DEFAULT_LOCALE",
                value: raw.clone(),
                reason: err.to_string(),
            }
        })?,
        None => Locale::default(),
    };
    let seed_path = env.seed_path.or(file_site.seed_path);
    if seed_path.is_none() {
        warnings.push(
            "SEED_PATH is not set; content store starts empty".into(),
        );
    }
    let site = SiteConfig {
        base_url: parse_url("SITE_BASE_URL", &base_url)?,
        default_locale,
        seed_path,
        activity_capacity: file_site.activity_capacity,
    };

    let cors = CorsConfig {
        allowed_origins: env
            .cors_allowed_origins
            .or(file_cors.allowed_origins)
            .unwrap_or_default(),
    };

    let enabled = match env.weather_enabled {
        Some(raw) => {
            parse_bool(&raw).ok_or_else(|| ConfigError::InvalidValue {
                key: "WEATHER_ENABLED",
                value: raw,
                reason: "expected true/false, yes/no, on/off or 1/0".into(),
            })?
        }
        None => file_weather.enabled.unwrap_or(true),
    };
    let weather = WeatherConfig {
        enabled,
        base_url: parse_url(
            "WEATHER_BASE_URL",
            &env.weather_base_url
                .or(file_weather.base_url)
                .unwrap_or_else(|| DEFAULT_WEATHER_BASE_URL.to_string()),
        )?,
        location: env
            .weather_location
            .or(file_weather.location)
            .unwrap_or_else(|| DEFAULT_WEATHER_LOCATION.to_string()),
        latitude: env_or(
            "WEATHER_LATITUDE",
            env.weather_latitude,
            file_weather.latitude,
            DEFAULT_WEATHER_LATITUDE,
        )?,
        longitude: env_or(
            "WEATHER_LONGITUDE",
            env.weather_longitude,
            file_weather.longitude,
            DEFAULT_WEATHER_LONGITUDE,
        )?,
        timezone: env
            .weather_timezone
            .or(file_weather.timezone)
            .unwrap_or_else(|| DEFAULT_WEATHER_TIMEZONE.to_string()),
        timeout: Duration::from_millis(env_or(
            "WEATHER_TIMEOUT_MS",
            env.weather_timeout_ms,
            file_weather.timeout_ms,
            DEFAULT_WEATHER_TIMEOUT_MS,
        )?),
    };
    if !(-90.0..=90.0).contains(&weather.latitude)
        || !(-180.0..=180.0).contains(&weather.longitude)
    {
        return Err(ConfigError::InvalidValue {
            key: "WEATHER_LATITUDE/WEATHER_LONGITUDE",
            value: format!("{}, {}", weather.latitude, weather.longitude),
            reason: "coordinates out of range".into(),
        });
    }

    Ok(Config {
        server,
        site,
        cors,
        weather,
        carousels,
        metadata,
    })
}

fn parse_value<T>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|err: T::Err| ConfigError::InvalidValue {
            key,
            value: raw.to_string(),
            reason: err.to_string(),
        })
}

fn env_or<T>(
    key: &'static str,
    env: Option<String>,
    file: Option<T>,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env {
        Some(raw) => parse_value(key, &raw),
        None => Ok(file.unwrap_or(default)),
    }
}

fn parse_url(key: &'static str, raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw.trim())
        .map_err(|source| ConfigError::InvalidUrl { key, source })
}
