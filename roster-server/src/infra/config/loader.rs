use once_cell::sync::Lazy;
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};
use thiserror::Error;
use url::Url;

use super::{
    models::{
        Config, ConfigMetadata, ConfigWarnings, CorsConfig, DatabaseConfig,
        ServerConfig,
    },
    sources::{EnvConfig, FileConfig, FileDatabaseConfig},
};

static DEFAULT_CONFIG_LOCATIONS: Lazy<Vec<PathBuf>> = Lazy::new(|| {
    vec![
        PathBuf::from("roster.toml"),
        PathBuf::from("config/roster.toml"),
    ]
});

#[derive(Debug, Default, Clone)]
pub struct ConfigLoaderOptions {
    pub config_path: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
}

#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ConfigLoaderOptions) -> Self {
        Self { options }
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    /// Load `.env` into the process environment, then resolve configuration
    /// from it.
    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = match &self.options.env_file {
            Some(path) => dotenvy::from_path(path).map(|_| true).or_else(
                |err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                },
            )?,
            None => {
                dotenvy::dotenv().map(|_| true).or_else(|err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                })?
            }
        };

        let mut load = self.load_with_env(EnvConfig::gather())?;
        load.config.metadata.env_file_loaded = env_file_loaded;
        Ok(load)
    }

    /// Resolve configuration from an already-gathered environment. Leaves the
    /// process environment alone.
    pub fn load_with_env(
        &self,
        env: EnvConfig,
    ) -> Result<ConfigLoad, ConfigLoadError> {
        let (file_config, config_path) = self.load_file_config(&env)?;
        let (config, warnings) =
            self.compose_config(file_config, env, config_path)?;
        Ok(ConfigLoad { config, warnings })
    }

    fn load_file_config(
        &self,
        env: &EnvConfig,
    ) -> Result<(Option<FileConfig>, Option<PathBuf>), ConfigLoadError> {
        let explicit = self
            .options
            .config_path
            .clone()
            .or_else(|| env.config_path.clone());

        let path = match explicit {
            Some(path) if !path.exists() => {
                return Err(ConfigLoadError::MissingConfig { path });
            }
            Some(path) => path,
            None => match DEFAULT_CONFIG_LOCATIONS
                .iter()
                .find(|candidate| candidate.exists())
            {
                Some(path) => path.clone(),
                None => return Ok((None, None)),
            },
        };

        let contents =
            fs::read_to_string(&path).map_err(|source| ConfigLoadError::Io {
                path: path.clone(),
                source,
            })?;
        let file_config: FileConfig =
            toml::from_str(&contents).map_err(|source| {
                ConfigLoadError::Parse {
                    path: path.clone(),
                    source,
                }
            })?;

        Ok((Some(file_config), Some(path)))
    }

    fn compose_config(
        &self,
        file_config: Option<FileConfig>,
        env: EnvConfig,
        config_path: Option<PathBuf>,
    ) -> Result<(Config, ConfigWarnings), ConfigLoadError> {
        let mut warnings = ConfigWarnings::default();

        if config_path.is_none() {
            warnings.push_with_hint(
                "No roster.toml detected; falling back to environment variables",
                "Set ROSTER_CONFIG or pass --config to use a file",
            );
        }

        let FileConfig {
            server: file_server,
            database: file_database,
            cors: file_cors,
            dev_mode: file_dev_mode,
        } = file_config.unwrap_or_default();

        let server = ServerConfig {
            host: env
                .server_host
                .clone()
                .or(file_server.host)
                .unwrap_or_else(|| ServerConfig::DEFAULT_HOST.to_string()),
            port: env
                .server_port
                .or(file_server.port)
                .unwrap_or(ServerConfig::DEFAULT_PORT),
        };

        let url = Self::resolve_database_url(&env, &file_database)?
            .ok_or(ConfigLoadError::MissingDatabaseUrl)?;
        let database = DatabaseConfig {
            url,
            max_connections: env
                .database_max_connections
                .or(file_database.max_connections)
                .unwrap_or(DatabaseConfig::DEFAULT_MAX_CONNECTIONS)
                .max(1),
            acquire_timeout: env
                .database_acquire_timeout_secs
                .or(file_database.acquire_timeout_secs)
                .map(Duration::from_secs)
                .unwrap_or(DatabaseConfig::DEFAULT_ACQUIRE_TIMEOUT),
        };

        let allowed_origins = env
            .cors_allowed_origins
            .clone()
            .or(file_cors.allowed_origins)
            .unwrap_or_default();
        for origin in &allowed_origins {
            validate_origin(origin)?;
        }
        let cors = CorsConfig { allowed_origins };

        let dev_mode = env.dev_mode.or(file_dev_mode).unwrap_or(false);
        if dev_mode {
            warnings.push("DEV_MODE enabled; CORS is fully permissive");
        }

        let config = Config {
            server,
            database,
            cors,
            dev_mode,
            metadata: ConfigMetadata {
                config_path,
                env_file_loaded: false,
            },
        };

        Ok((config, warnings))
    }

    fn resolve_database_url(
        env: &EnvConfig,
        file_database: &FileDatabaseConfig,
    ) -> Result<Option<String>, ConfigLoadError> {
        if let Some(url) = env
            .database_url
            .clone()
            .filter(|value| !value.trim().is_empty())
        {
            return Ok(Some(url));
        }

        if let Some(stored_url) = file_database.url.as_deref() {
            let trimmed = stored_url.trim();
            if !trimmed.is_empty() {
                let mut parsed = Url::parse(trimmed).map_err(|source| {
                    ConfigLoadError::InvalidDatabaseUrl { source }
                })?;
                if parsed.password().is_none()
                    && let Some(password) = non_blank(&env.database_password)
                {
                    parsed
                        .set_password(Some(&password))
                        .map_err(|_| ConfigLoadError::InvalidDatabasePassword)?;
                }
                return Ok(Some(parsed.to_string()));
            }
        }

        let host = non_blank(&env.database_host);
        let user = non_blank(&env.database_user);
        let name = non_blank(&env.database_name);

        if let (Some(host), Some(user), Some(name)) = (host, user, name) {
            let port = env.database_port.unwrap_or(5432);
            let mut url =
                Url::parse(&format!("postgresql://{host}:{port}/{name}"))
                    .map_err(|source| ConfigLoadError::InvalidDatabaseUrl {
                        source,
                    })?;
            url.set_username(&user).map_err(|_| {
                ConfigLoadError::InvalidDatabaseUsername {
                    username: user.clone(),
                }
            })?;
            if let Some(password) = non_blank(&env.database_password) {
                url.set_password(Some(&password))
                    .map_err(|_| ConfigLoadError::InvalidDatabasePassword)?;
            }
            return Ok(Some(url.to_string()));
        }

        Ok(None)
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value.clone().filter(|v| !v.trim().is_empty())
}

fn validate_origin(origin: &str) -> Result<(), ConfigLoadError> {
    if origin == "*" {
        return Ok(());
    }
    let invalid = || ConfigLoadError::InvalidCorsOrigin {
        origin: origin.to_string(),
    };
    let url = Url::parse(origin).map_err(|_| invalid())?;
    let path_is_root = url.path().is_empty() || url.path() == "/";
    if !matches!(url.scheme(), "http" | "https")
        || url.host_str().is_none()
        || !path_is_root
    {
        return Err(invalid());
    }
    Ok(())
}

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("configuration file missing: {path}")]
    MissingConfig { path: PathBuf },
    #[error("failed to read configuration {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse configuration {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error(
        "no database configured; set DATABASE_URL or DATABASE_HOST, DATABASE_USER and DATABASE_NAME"
    )]
    MissingDatabaseUrl,
    #[error("invalid database URL")]
    InvalidDatabaseUrl {
        #[source]
        source: url::ParseError,
    },
    #[error("invalid database username '{username}'")]
    InvalidDatabaseUsername { username: String },
    #[error("failed to encode database password into URL")]
    InvalidDatabasePassword,
    #[error("invalid CORS origin '{origin}'")]
    InvalidCorsOrigin { origin: String },
    #[error(transparent)]
    EnvFile(#[from] dotenvy::Error),
}

#[derive(Debug)]
pub struct ConfigLoad {
    pub config: Config,
    pub warnings: ConfigWarnings,
}

impl ConfigLoad {
    pub fn config_path(&self) -> Option<&Path> {
        self.config.metadata.config_path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_must_be_bare_http_origins() {
        assert!(validate_origin("*").is_ok());
        assert!(validate_origin("http://localhost:5173").is_ok());
        assert!(validate_origin("https://roster.example").is_ok());
        assert!(validate_origin("ftp://roster.example").is_err());
        assert!(validate_origin("https://roster.example/app").is_err());
        assert!(validate_origin("localhost").is_err());
    }

    #[test]
    fn database_url_is_assembled_from_parts() {
        let env = EnvConfig {
            database_host: Some("db".into()),
            database_user: Some("roster".into()),
            database_name: Some("catalog".into()),
            database_password: Some("s3cret".into()),
            ..EnvConfig::default()
        };
        let url = ConfigLoader::resolve_database_url(
            &env,
            &FileDatabaseConfig::default(),
        )
        .unwrap();
        assert_eq!(
            url.as_deref(),
            Some("postgresql://roster:s3cret@db:5432/catalog")
        );
    }

    #[test]
    fn partial_parts_resolve_to_nothing() {
        let env = EnvConfig {
            database_host: Some("db".into()),
            database_user: Some("   ".into()),
            database_name: Some("catalog".into()),
            ..EnvConfig::default()
        };
        let url = ConfigLoader::resolve_database_url(
            &env,
            &FileDatabaseConfig::default(),
        )
        .unwrap();
        assert!(url.is_none());
    }

    #[test]
    fn file_url_borrows_password_from_env() {
        let env = EnvConfig {
            database_password: Some("pw".into()),
            ..EnvConfig::default()
        };
        let file = FileDatabaseConfig {
            url: Some("postgresql://roster@db:5432/catalog".into()),
            ..FileDatabaseConfig::default()
        };
        let url = ConfigLoader::resolve_database_url(&env, &file).unwrap();
        assert_eq!(
            url.as_deref(),
            Some("postgresql://roster:pw@db:5432/catalog")
        );
    }
}
