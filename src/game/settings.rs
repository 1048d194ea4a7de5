use anyhow::*;
use directories_next::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::game::question::Tier;

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub timer_seconds: u32,
    pub difficulty: u8,
    pub question_count: usize,
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            timer_seconds: 60,
            difficulty: 1,
            question_count: 10,
            seed: None,
        }
    }
}

impl Settings {
    pub fn default_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", "quickmaths")
            .context("could not locate system directories")?;
        Ok(dirs.config_dir().join("settings.toml"))
    }

    pub fn load(path: &Path) -> Result<Settings> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Could not read settings file {}", path.display()))?;
        let settings = toml::from_str(&content)
            .with_context(|| format!("Could not parse settings file {}", path.display()))?;
        Ok(settings)
    }

    /// Loads settings from `path` if given, otherwise from the default location.
    /// A missing default file is not an error.
    pub fn load_or_default(path: Option<&Path>) -> Result<Settings> {
        if let Some(path) = path {
            return Settings::load(path);
        }
        match Settings::default_path().ok().filter(|p| p.exists()) {
            Some(path) => Settings::load(&path),
            None => Ok(Default::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.timer_seconds == 0 {
            return Err(anyhow!("Timer must be at least one second"));
        }
        if self.question_count == 0 {
            return Err(anyhow!("There must be at least one question"));
        }
        Ok(())
    }

    pub fn tier(&self) -> Tier {
        Tier::from(self.difficulty)
    }
}
