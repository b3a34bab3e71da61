//! Configuration management utilities.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dirs_next::config_dir;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

static DEFAULT_CONFIG: Lazy<&'static str> =
    Lazy::new(|| include_str!("../../assets/default-config.toml"));
static DEFAULT_WORKSPACE_CONFIG_PATH: &str = ".nbstitch/config.toml";

/// Layered configuration loaded from defaults, user, workspace, and env.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub assembly: Assembly,
}

/// Knobs for the assembly pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Assembly {
    #[serde(default)]
    install_directive: Option<String>,
    #[serde(default)]
    skip_marker: Option<String>,
    #[serde(default)]
    accepted_extensions: Option<Vec<String>>,
    #[serde(default)]
    notebook_extension: Option<String>,
}

impl Assembly {
    fn default_install_directive() -> &'static str {
        "!pip install"
    }

    fn default_skip_marker() -> &'static str {
        "# SKIP"
    }

    fn default_accepted_extensions() -> Vec<String> {
        vec!["py".to_owned(), "txt".to_owned()]
    }

    fn default_notebook_extension() -> &'static str {
        "ipynb"
    }

    /// Shell-style prefix for the install cell.
    pub fn install_directive(&self) -> String {
        self.install_directive
            .clone()
            .unwrap_or_else(|| Self::default_install_directive().to_owned())
    }

    /// Trailing marker that excludes a line from the output.
    pub fn skip_marker(&self) -> String {
        self.skip_marker
            .clone()
            .unwrap_or_else(|| Self::default_skip_marker().to_owned())
    }

    /// Extensions (without dot, lowercase) accepted for source files.
    pub fn accepted_extensions(&self) -> Vec<String> {
        self.accepted_extensions
            .clone()
            .unwrap_or_else(Self::default_accepted_extensions)
    }

    /// Extension (without dot) required on the destination path.
    pub fn notebook_extension(&self) -> String {
        self.notebook_extension
            .clone()
            .unwrap_or_else(|| Self::default_notebook_extension().to_owned())
    }
}

/// Environment overrides for critical settings.
#[derive(Debug, Default, Clone)]
pub struct EnvOverrides {
    install_directive: Option<String>,
    skip_marker: Option<String>,
}

impl EnvOverrides {
    fn from_env() -> Self {
        Self {
            install_directive: env::var("NBSTITCH_INSTALL_DIRECTIVE").ok(),
            skip_marker: env::var("NBSTITCH_SKIP_MARKER").ok(),
        }
    }

    #[cfg(test)]
    fn for_tests(install_directive: &str, skip_marker: &str) -> Self {
        Self {
            install_directive: Some(install_directive.to_owned()),
            skip_marker: Some(skip_marker.to_owned()),
        }
    }
}

impl Config {
    /// Load configuration from defaults, user/global config, workspace config, and env overrides.
    pub fn load() -> Result<Self> {
        let env = EnvOverrides::from_env();
        let global = global_config_path();
        let workspace = workspace_config_path()?;
        Self::load_with_layers(global, workspace, env)
    }

    fn load_with_layers(
        global: Option<PathBuf>,
        workspace: Option<PathBuf>,
        env_overrides: EnvOverrides,
    ) -> Result<Self> {
        let mut layers: Vec<Config> = Vec::new();

        layers.push(Self::from_str(&DEFAULT_CONFIG)?);

        if let Some(global_path) = global.filter(|path| path.exists()) {
            layers.push(Self::from_file(&global_path)?);
        }

        if let Some(workspace_path) = workspace.filter(|path| path.exists()) {
            layers.push(Self::from_file(&workspace_path)?);
        }

        let merged = layers.into_iter().reduce(Config::merge).unwrap_or_default();
        Ok(apply_env_overrides(merged, env_overrides))
    }

    fn from_file(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::from_str(&data)
    }

    fn from_str(contents: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(contents).with_context(|| "failed to parse TOML config".to_string())?;
        Ok(config)
    }

    fn merge(self, other: Self) -> Self {
        Self {
            assembly: merge_assembly(self.assembly, other.assembly),
        }
    }
}

fn merge_assembly(mut base: Assembly, overlay: Assembly) -> Assembly {
    if let Some(value) = overlay.install_directive {
        base.install_directive = Some(value);
    }
    if let Some(value) = overlay.skip_marker {
        base.skip_marker = Some(value);
    }
    if let Some(value) = overlay.accepted_extensions {
        base.accepted_extensions = Some(value);
    }
    if let Some(value) = overlay.notebook_extension {
        base.notebook_extension = Some(value);
    }
    base
}

fn apply_env_overrides(mut config: Config, env: EnvOverrides) -> Config {
    if let Some(directive) = env.install_directive {
        config.assembly.install_directive = Some(directive);
    }
    if let Some(marker) = env.skip_marker {
        config.assembly.skip_marker = Some(marker);
    }
    config
}

fn global_config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("nbstitch").join("config.toml"))
}

fn workspace_config_path() -> Result<Option<PathBuf>> {
    let cwd = env::current_dir().context("failed to resolve current directory")?;
    Ok(Some(cwd.join(DEFAULT_WORKSPACE_CONFIG_PATH)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_embedded_asset() {
        let config = Config::load_with_layers(None, None, EnvOverrides::default()).unwrap();
        assert_eq!(config.assembly.install_directive(), "!pip install");
        assert_eq!(config.assembly.skip_marker(), "# SKIP");
        assert_eq!(config.assembly.accepted_extensions(), vec!["py", "txt"]);
        assert_eq!(config.assembly.notebook_extension(), "ipynb");
    }

    #[test]
    fn workspace_layer_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[assembly]\nskip_marker = \"# OMIT\"\naccepted_extensions = [\"py\"]"
        )
        .unwrap();

        let config = Config::load_with_layers(
            None,
            Some(file.path().to_path_buf()),
            EnvOverrides::default(),
        )
        .unwrap();

        assert_eq!(config.assembly.skip_marker(), "# OMIT");
        assert_eq!(config.assembly.accepted_extensions(), vec!["py"]);
        // Untouched keys fall through to the embedded defaults.
        assert_eq!(config.assembly.install_directive(), "!pip install");
    }

    #[test]
    fn env_overrides_win_over_files() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[assembly]\ninstall_directive = \"!pip3 install\"").unwrap();

        let config = Config::load_with_layers(
            None,
            Some(file.path().to_path_buf()),
            EnvOverrides::for_tests("!uv pip install", "# NOPE"),
        )
        .unwrap();

        assert_eq!(config.assembly.install_directive(), "!uv pip install");
        assert_eq!(config.assembly.skip_marker(), "# NOPE");
    }
}
