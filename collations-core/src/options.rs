use log::LevelFilter;

use crate::charset::Charset;

/// Log levels for registry events.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct LogSettings {
    pub registrations_level: LevelFilter,
    pub lookup_misses_level: LevelFilter,
}

impl Default for LogSettings {
    fn default() -> Self {
        LogSettings {
            registrations_level: LevelFilter::Debug,
            lookup_misses_level: LevelFilter::Debug,
        }
    }
}

impl LogSettings {
    pub fn log_registrations(&mut self, level: LevelFilter) {
        self.registrations_level = level;
    }

    pub fn log_lookup_misses(&mut self, level: LevelFilter) {
        self.lookup_misses_level = level;
    }
}

/// Options which can be used to configure a collation [`Registry`](crate::Registry).
///
/// # Example
///
/// ```rust
/// # use collations_core::{Charset, RegistryOptions};
/// let options = RegistryOptions::new()
///     .server_charset(Charset::Ascii)
///     .log_registrations(log::LevelFilter::Trace);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RegistryOptions {
    pub(crate) server_charset: Option<Charset>,
    pub(crate) server_collation: Option<String>,
    pub(crate) log_settings: LogSettings,
}

impl RegistryOptions {
    /// Creates a new, default set of options ready for configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads options from the environment, loading a `.env` file if present.
    ///
    /// | Variable | Description |
    /// |----------|-------------|
    /// | `CHARACTER_SET_SERVER` | Sets [`server_charset`](Self::server_charset). Unknown names are ignored with a warning. |
    /// | `COLLATION_SERVER` | Sets [`server_collation`](Self::server_collation). |
    pub fn from_env() -> Self {
        let mut options = Self::new();

        if let Ok(name) = dotenvy::var("CHARACTER_SET_SERVER") {
            match Charset::from_name(&name) {
                Some(charset) => options = options.server_charset(charset),
                None => log::warn!("ignoring unknown CHARACTER_SET_SERVER: {:?}", name),
            }
        }

        if let Ok(name) = dotenvy::var("COLLATION_SERVER") {
            options = options.server_collation(&name);
        }

        options
    }

    /// Sets the charset of the server being emulated.
    ///
    /// Unless [`server_collation`](Self::server_collation) is also set, the server
    /// default collation is the default collation of this charset. When neither is
    /// set, `latin1` is assumed.
    pub fn server_charset(mut self, charset: Charset) -> Self {
        self.server_charset = Some(charset);
        self
    }

    /// Sets the name of the server default collation (MySQL's `collation_server`).
    ///
    /// Building the registry fails if no collation with this name is registered, or
    /// if it does not belong to the configured [`server_charset`](Self::server_charset).
    pub fn server_collation(mut self, name: &str) -> Self {
        self.server_collation = Some(name.to_owned());
        self
    }

    /// Sets the level registrations are logged at. Defaults to `DEBUG`.
    pub fn log_registrations(mut self, level: LevelFilter) -> Self {
        self.log_settings.log_registrations(level);
        self
    }

    /// Sets the level failed lookups are logged at. Defaults to `DEBUG`.
    pub fn log_lookup_misses(mut self, level: LevelFilter) -> Self {
        self.log_settings.log_lookup_misses(level);
        self
    }

    /// Get the configured server charset, if any.
    pub fn get_server_charset(&self) -> Option<Charset> {
        self.server_charset
    }

    /// Get the configured server collation name, if any.
    pub fn get_server_collation(&self) -> Option<&str> {
        self.server_collation.as_deref()
    }
}
