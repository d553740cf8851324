use anyhow::Context;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::constants::{BASE_EXTENSIONS, WEBP_EXTENSION};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub debug: bool,
    pub accept_webp: bool,
    pub dark_theme: bool,
}

// Default values for the config
impl Default for AppConfig {
    fn default() -> Self {
        Self {
            debug: false,
            accept_webp: true,
            dark_theme: true,
        }
    }
}

fn config_path() -> anyhow::Result<PathBuf> {
    ProjectDirs::from("com", "IconConverter", "IconConverter")
        .map(|d| d.config_dir().join("config.toml"))
        .context("could not determine config dir")
}

impl AppConfig {
    /// Reads `config.toml` from the platform config dir. A missing file is not
    /// an error; the config is never written back.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let txt = fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_toml_str(&txt).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn from_toml_str(txt: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(txt)?)
    }

    pub fn log_level(&self) -> log::LevelFilter {
        if self.debug {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        }
    }

    pub fn allowed_extensions(&self) -> Vec<&'static str> {
        let mut exts = BASE_EXTENSIONS.to_vec();
        if self.accept_webp {
            exts.push(WEBP_EXTENSION);
        }
        exts
    }
}
