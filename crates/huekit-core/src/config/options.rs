// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Configuration options

#[cfg(feature = "serde")] use super::Format;
use super::{Config, Error};
#[cfg(feature = "serde")] use crate::util::warn_about_error;
use std::env::var;
use std::path::PathBuf;

/// Config mode
///
/// See [`Options::from_env`] documentation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ConfigMode {
    /// Read-only mode
    Read,
    /// Read-write mode
    ///
    /// This mode reads config on start and writes changes on exit.
    ReadWrite,
    /// Use default config and write out
    ///
    /// This mode only writes initial (default) config and does not update.
    WriteDefault,
}

impl ConfigMode {
    /// Parse a mode name, case-insensitively
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "READ" => Some(ConfigMode::Read),
            "READWRITE" => Some(ConfigMode::ReadWrite),
            "WRITEDEFAULT" => Some(ConfigMode::WriteDefault),
            _ => None,
        }
    }
}

/// Picker configuration options
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Options {
    /// Config file path. Default: empty. See `HUEKIT_CONFIG` doc.
    pub config_path: PathBuf,
    /// Config mode. Default: Read.
    pub config_mode: ConfigMode,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            config_path: PathBuf::new(),
            config_mode: ConfigMode::Read,
        }
    }
}

impl Options {
    /// Construct a new instance, reading from environment variables
    ///
    /// The `HUEKIT_CONFIG` variable, if given, provides a path to the config
    /// file, which is read or written according to `HUEKIT_CONFIG_MODE`.
    /// The format is guessed from the file extension (see
    /// [`Format::guess_from_path`](super::Format::guess_from_path)).
    /// If `HUEKIT_CONFIG` is not specified, default configuration is used
    /// without reading or writing.
    ///
    /// The `HUEKIT_CONFIG_MODE` variable determines the read/write mode
    /// (case-insensitive):
    ///
    /// -   `Read` (default): read-only
    /// -   `ReadWrite`: read on start-up, write on exit
    /// -   `WriteDefault`: generate default configuration and write it to the
    ///     config path, overwriting any existing config
    pub fn from_env() -> Self {
        let mut options = Options::default();

        if let Ok(v) = var("HUEKIT_CONFIG") {
            options.config_path = v.into();
        }

        if let Ok(v) = var("HUEKIT_CONFIG_MODE") {
            match ConfigMode::from_name(&v) {
                Some(mode) => options.config_mode = mode,
                None => {
                    log::error!("from_env: bad var HUEKIT_CONFIG_MODE={v}");
                    log::error!("from_env: supported config modes: READ, READWRITE, WRITEDEFAULT");
                }
            }
        }

        options
    }

    /// Format of the config file, or `None` without a path
    #[cfg(feature = "serde")]
    fn format(&self) -> Option<Format> {
        let path = &self.config_path;
        (!path.as_os_str().is_empty()).then(|| Format::guess_from_path(path))
    }

    /// Load config on start
    ///
    /// Requires feature "serde" to load/save config.
    pub fn read_config(&self) -> Result<Config, Error> {
        #[cfg(feature = "serde")]
        if let Some(format) = self.format() {
            let path = &self.config_path;
            return match self.config_mode {
                ConfigMode::Read | ConfigMode::ReadWrite => Ok(format.read_path(path)?),
                ConfigMode::WriteDefault => {
                    let config = Config::default();
                    if let Err(error) = format.write_path(path, &config) {
                        warn_about_error("failed to write default config", &error);
                    }
                    Ok(config)
                }
            };
        }

        Ok(Config::default())
    }

    /// Save config (on exit or after changes)
    ///
    /// Config is only written in [`ConfigMode::ReadWrite`] and only when
    /// dirty. Requires feature "serde" to save config.
    pub fn write_config(&self, _config: &Config) -> Result<(), Error> {
        #[cfg(feature = "serde")]
        if self.config_mode == ConfigMode::ReadWrite && _config.is_dirty() {
            if let Some(format) = self.format() {
                format.write_path(&self.config_path, _config)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn mode_names() {
        assert_eq!(ConfigMode::from_name("read"), Some(ConfigMode::Read));
        assert_eq!(ConfigMode::from_name("ReadWrite"), Some(ConfigMode::ReadWrite));
        assert_eq!(ConfigMode::from_name("WRITEDEFAULT"), Some(ConfigMode::WriteDefault));
        assert_eq!(ConfigMode::from_name("write"), None);
    }

    #[test]
    fn no_path_uses_defaults() {
        let options = Options::default();
        assert_eq!(options.read_config().unwrap(), Config::default());
        let mut config = Config::default();
        config.set_history([crate::color::Rgb8::WHITE]);
        assert!(options.write_config(&config).is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn unknown_extension_is_an_error() {
        let options = Options {
            config_path: PathBuf::from("huekit-picker.ini"),
            config_mode: ConfigMode::Read,
        };
        assert!(matches!(
            options.read_config(),
            Err(Error::UnsupportedFormat(Format::Unknown))
        ));
    }
}
