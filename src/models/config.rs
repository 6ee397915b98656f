use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the optional config file looked up in the workspace root
pub const CONFIG_FILE: &str = "create-project.toml";

/// Configuration loaded from create-project.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub templates: TemplatesConfig,
    #[serde(default)]
    pub javascript: JavaScriptConfig,
    #[serde(default)]
    pub go: GoConfig,
    #[serde(default)]
    pub vcs: VcsConfig,
    #[serde(default)]
    pub workspace: WorkspaceConfig,
}

/// Where the bundled config templates live
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplatesConfig {
    /// Install-level template directory. Defaults to `<exe dir>/global-config`.
    #[serde(default)]
    pub install_dir: Option<PathBuf>,
}

/// JavaScript bootstrap settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JavaScriptConfig {
    #[serde(default = "default_package_manager")]
    pub package_manager: String,
    #[serde(default = "default_dev_dependencies")]
    pub dev_dependencies: Vec<String>,
}

impl Default for JavaScriptConfig {
    fn default() -> Self {
        Self {
            package_manager: default_package_manager(),
            dev_dependencies: default_dev_dependencies(),
        }
    }
}

fn default_package_manager() -> String {
    "npm".to_string()
}

fn default_dev_dependencies() -> Vec<String> {
    vec!["eslint".to_string(), "prettier".to_string()]
}

/// Go bootstrap settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoConfig {
    /// Prefix joined with the project folder name to form the module path
    #[serde(default = "default_module_prefix")]
    pub module_prefix: String,
    #[serde(default = "default_lint_tool")]
    pub lint_tool: String,
}

impl Default for GoConfig {
    fn default() -> Self {
        Self {
            module_prefix: default_module_prefix(),
            lint_tool: default_lint_tool(),
        }
    }
}

fn default_module_prefix() -> String {
    "github.com/yourusername".to_string()
}

fn default_lint_tool() -> String {
    "github.com/golangci/golangci-lint/cmd/golangci-lint".to_string()
}

/// Version control settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VcsConfig {
    #[serde(default = "default_vcs_enabled")]
    pub enabled: bool,
}

impl Default for VcsConfig {
    fn default() -> Self {
        Self {
            enabled: default_vcs_enabled(),
        }
    }
}

fn default_vcs_enabled() -> bool {
    true
}

/// Workspace descriptor settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    #[serde(default)]
    pub membership: MembershipCheck,
}

/// How the descriptor decides whether a project is already registered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MembershipCheck {
    /// Substring search over the raw document text
    #[default]
    Textual,
    /// Exact match against the parsed `folders[*].path` values
    Structural,
}

/// Command line values that take precedence over the config file
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub install_dir: Option<PathBuf>,
    pub module_prefix: Option<String>,
    pub structural: bool,
    pub no_git: bool,
}

impl Config {
    /// Load config from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.to_path_buf(), e))?;
        toml::from_str(&contents).map_err(|e| ConfigError::ParseError(path.to_path_buf(), e))
    }

    /// Try to load config from create-project.toml in the given directory
    pub fn load_from_dir(dir: &Path) -> Result<Self, ConfigError> {
        let config_path = dir.join(CONFIG_FILE);
        if config_path.exists() {
            Self::load_from_file(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Merge CLI overrides into the config
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(dir) = overrides.install_dir {
            self.templates.install_dir = Some(dir);
        }
        if let Some(prefix) = overrides.module_prefix {
            self.go.module_prefix = prefix;
        }
        if overrides.structural {
            self.workspace.membership = MembershipCheck::Structural;
        }
        if overrides.no_git {
            self.vcs.enabled = false;
        }
        self
    }

    /// Install-level template directory, falling back to `global-config`
    /// next to the running executable.
    pub fn install_config_dir(&self) -> Result<PathBuf, ConfigError> {
        if let Some(dir) = &self.templates.install_dir {
            return Ok(dir.clone());
        }
        let exe = std::env::current_exe().map_err(ConfigError::ExecutableDir)?;
        let exe_dir = exe
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        Ok(exe_dir.join("global-config"))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    ReadError(PathBuf, std::io::Error),
    #[error("Failed to parse config file {0}: {1}")]
    ParseError(PathBuf, toml::de::Error),
    #[error("Could not locate the executable directory: {0}")]
    ExecutableDir(std::io::Error),
}
