use anyhow::bail;

use super::structure::{RoleBotConfigInner, RoleBotConfigTOML};
use std::{ops::Deref, path::PathBuf};

#[derive(Debug, Clone)]
pub struct RoleBotConfig {
    pub path: PathBuf,
    cached: RoleBotConfigTOML,
}

impl RoleBotConfig {
    /// Reads the config at `path`, writing a default one first if nothing is there yet.
    pub fn read(path: PathBuf) -> Result<Self, anyhow::Error> {
        let path = match path.is_dir() {
            true => path.join("config.toml"),
            false => path,
        };

        if !path.exists() {
            return Self::new(path);
        }

        if !path.is_file() {
            bail!(
                "Given path exists and is not a file... either change the path or delete the file."
            );
        }

        let config_str = std::fs::read_to_string(&path)?;

        Ok(Self {
            path,
            cached: toml::from_str(&config_str)?,
        })
    }

    fn new(path: PathBuf) -> Result<Self, anyhow::Error> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let config = Self {
            path,
            cached: RoleBotConfigTOML::default(),
        };

        config.save()?;
        log::warn!("wrote a default config to {:?}", config.path);

        Ok(config)
    }

    pub fn save(&self) -> Result<(), anyhow::Error> {
        std::fs::write(&self.path, toml::to_string(&self.cached)?)?;

        Ok(())
    }
}

impl Deref for RoleBotConfig {
    type Target = RoleBotConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.cached.config
    }
}

impl PartialEq for RoleBotConfig {
    fn eq(&self, other: &Self) -> bool {
        self.cached.config == other.cached.config
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn missing_file_is_created_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = RoleBotConfig::read(path.clone()).unwrap();

        assert!(path.is_file());
        assert_eq!(config.discord.token, "");
        assert_eq!(config.discord.guild, None);
        assert!(!config.discord.remove_commands);
        assert_eq!(config.roles.path, Path::new("roleData.json"));

        assert_eq!(RoleBotConfig::read(path).unwrap(), config);
    }

    #[test]
    fn directory_resolves_to_config_toml() {
        let dir = tempfile::tempdir().unwrap();

        let config = RoleBotConfig::read(dir.path().to_path_buf()).unwrap();

        assert_eq!(config.path, dir.path().join("config.toml"));
    }

    #[test]
    fn reads_all_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[config.discord]
token = "abc"
guild = 1234
remove_commands = true

[config.roles]
path = "data/roles.json"
"#,
        )
        .unwrap();

        let config = RoleBotConfig::read(path).unwrap();

        assert_eq!(config.discord.token, "abc");
        assert_eq!(config.discord.guild, Some(1234));
        assert!(config.discord.remove_commands);
        assert_eq!(config.roles.path, Path::new("data/roles.json"));
    }

    #[test]
    fn optional_keys_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[config.discord]\ntoken = \"abc\"\n").unwrap();

        let config = RoleBotConfig::read(path).unwrap();

        assert_eq!(config.discord.guild, None);
        assert!(!config.discord.remove_commands);
        assert_eq!(config.roles.path, Path::new("roleData.json"));
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[config.discord\n").unwrap();

        assert!(RoleBotConfig::read(path).is_err());
    }
}
