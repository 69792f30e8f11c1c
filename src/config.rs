const APP_PREFIX: &str = "tdo";
const LOG: &str = "tdo.log";
const CONFIG: &str = "config.toml";
use crate::{error::Result, types::Priority};
use log::debug;
use serde::Deserialize;
use std::{fs, path::PathBuf};

fn xdg_dirs() -> Result<xdg::BaseDirectories> {
    Ok(xdg::BaseDirectories::with_prefix(APP_PREFIX)?)
}

pub(super) fn get_log_file() -> Result<PathBuf> {
    Ok(xdg_dirs()?.place_state_file(LOG)?)
}

pub(super) fn find_config_file() -> Result<Option<PathBuf>> {
    Ok(xdg_dirs()?.find_config_file(CONFIG))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub(crate) struct Config {
    pub(crate) title: String,
    /// Selected in the priority field at startup and after every add.
    pub(crate) default_priority: Priority,
    pub(crate) highlight_symbol: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            title: "To-Do List".to_owned(),
            default_priority: Priority::Medium,
            highlight_symbol: ">> ".to_owned(),
        }
    }
}

impl Config {
    /// Reads `config.toml` from the XDG config directory, falling back to the
    /// defaults when there is none.
    pub(crate) fn load() -> Result<Config> {
        match find_config_file()? {
            Some(path) => {
                debug!("Loading config from {path:?}");
                Config::parse(&fs::read_to_string(path)?)
            }
            None => {
                debug!("No config file found, using defaults.");
                Ok(Config::default())
            }
        }
    }

    pub(crate) fn parse(contents: &str) -> Result<Config> {
        Ok(toml::from_str(contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_default() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = Config::parse("default_priority = \"high\"\n").unwrap();
        assert_eq!(config.default_priority, Priority::High);
        assert_eq!(config.title, "To-Do List");
        assert_eq!(config.highlight_symbol, ">> ");
    }

    #[test]
    fn full_file() {
        let config = Config::parse(
            r#"
            title = "Chores"
            default_priority = "Low"
            highlight_symbol = "* "
            "#,
        )
        .unwrap();
        assert_eq!(
            config,
            Config {
                title: "Chores".to_owned(),
                default_priority: Priority::Low,
                highlight_symbol: "* ".to_owned(),
            }
        );
    }

    #[test]
    fn bad_priority_is_an_error() {
        assert!(Config::parse("default_priority = \"urgent\"").is_err());
    }
}
