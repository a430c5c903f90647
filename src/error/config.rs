use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Configured database dialect is not one of the supported backends.
    #[error("Unsupported database dialect '{0}', expected one of `mysql`, `postgres`, `sqlite`")]
    UnsupportedDialect(String),

    /// Stored database port is outside the valid range.
    #[error("Invalid database port {0}")]
    InvalidPort(i32),

    /// Name lookup for the configured database host failed.
    #[error("Could not resolve database host '{host}': {source}")]
    HostResolution {
        /// The hostname that failed to resolve
        host: String,
        /// The underlying lookup error
        #[source]
        source: std::io::Error,
    },

    /// Name lookup for the configured database host returned no addresses.
    #[error("No addresses found for database host '{0}'")]
    HostNotFound(String),
}
