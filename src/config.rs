//! Configuration loading and placeholder resolution.
//!
//! The config file lives at `$XDG_CONFIG_HOME/theming/config.json`,
//! falling back to `~/.config/theming/config.json`. Every key is
//! optional; defaults target a conventional oomox install. A missing
//! file yields the defaults, a malformed one is an error.

use std::env;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, ThemeError};

const IMAGE_TOKEN: &str = "%IMAGE_PATH%";

/// Configuration as written in config.json.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory the rendered artifacts are written to.
    #[serde(default = "default_cache_path")]
    pub cache_path: String,

    /// Directory theme generators install GTK themes into.
    #[serde(default = "default_theme_path")]
    pub theme_path: String,

    /// Directory theme generators install icon themes into.
    #[serde(default = "default_icon_theme_path")]
    pub icon_theme_path: String,

    /// Icon recoloring script, exposed as `%OOMOX_ICONS_COMMAND%`.
    #[serde(default = "default_oomox_icons_command")]
    pub oomox_icons_command: String,

    /// Theme name handed to oomox, exposed as `%OOMOX_THEME_NAME%`.
    #[serde(default = "default_oomox_theme_name")]
    pub oomox_theme_name: String,

    /// Icon theme name, exposed as `%OOMOX_ICON_THEME_NAME%`.
    #[serde(default = "default_oomox_icon_theme_name")]
    pub oomox_icon_theme_name: String,

    /// Substituted into commands as `%HIDPI%` ("true"/"false").
    #[serde(default)]
    pub hidpi: bool,

    /// Send a desktop notification when generation finishes.
    #[serde(default)]
    pub send_notification: bool,

    /// Commands run after the artifacts are written.
    #[serde(default)]
    pub generating_commands: Vec<CommandTemplate>,

    /// Commands run by `reload` to re-apply the current theme.
    #[serde(default)]
    pub reload_commands: Vec<CommandTemplate>,
}

/// One shell command from the config, with its scheduling flags.
#[derive(Debug, Clone, Deserialize)]
pub struct CommandTemplate {
    /// Shell command text; may contain `%NAME%` placeholders.
    pub command: String,

    /// Run concurrently, after every synchronous command has finished.
    #[serde(default, rename = "async")]
    pub asynchronous: bool,

    /// Warn on non-zero exit instead of aborting.
    #[serde(default)]
    pub ignore_error: bool,

    /// Scheduling hint for callers; the command runner ignores it.
    #[serde(default)]
    pub restart: bool,

    /// Scheduling hint for callers; the command runner ignores it.
    #[serde(default)]
    pub initial: bool,
}

fn default_cache_path() -> String {
    "~/.cache/theming".to_string()
}

fn default_theme_path() -> String {
    "~/.local/share/themes".to_string()
}

fn default_icon_theme_path() -> String {
    "~/.local/share/icons".to_string()
}

fn default_oomox_icons_command() -> String {
    "/opt/oomox/plugins/icons_numix/change_color.sh".to_string()
}

fn default_oomox_theme_name() -> String {
    "oomox-xresources-reverse".to_string()
}

fn default_oomox_icon_theme_name() -> String {
    "oomox-xresources-reverse-flat".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_path: default_cache_path(),
            theme_path: default_theme_path(),
            icon_theme_path: default_icon_theme_path(),
            oomox_icons_command: default_oomox_icons_command(),
            oomox_theme_name: default_oomox_theme_name(),
            oomox_icon_theme_name: default_oomox_icon_theme_name(),
            hidpi: false,
            send_notification: false,
            generating_commands: vec![],
            reload_commands: vec![],
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    pub fn load() -> Result<Self> {
        Self::load_from(&config_file_path()?)
    }

    /// Load configuration from a specific file.
    ///
    /// A file that does not exist yields the built-in defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(ThemeError::Io {
                    path: path.to_path_buf(),
                    message: format!("Failed to read config: {}", e),
                });
            }
        };

        Self::parse(&content)
    }

    /// Parse configuration from a JSON string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| ThemeError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some("Check config.json syntax".to_string()),
        })
    }

    /// Expand paths and substitute command placeholders.
    ///
    /// Substitution happens once here; the command runner executes the
    /// resolved strings as-is. With no image, `%IMAGE_PATH%` cannot be
    /// filled in: a reload command referencing it is rejected so the
    /// literal token never reaches the shell, while generating commands
    /// keep the token (they only run from `generate`, which always has
    /// an image). Unknown `%NAME%` tokens are left untouched.
    pub fn resolve(&self, image: Option<&str>) -> Result<ResolvedConfig> {
        let cache_path = expand_tilde(&self.cache_path)?;
        let theme_path = expand_tilde(&self.theme_path)?;
        let icon_theme_path = expand_tilde(&self.icon_theme_path)?;
        let oomox_icons_command = expand_tilde(&self.oomox_icons_command)?;

        let pairs = [
            ("%CACHE_PATH%", cache_path.as_str()),
            ("%THEME_PATH%", theme_path.as_str()),
            ("%ICON_THEME_PATH%", icon_theme_path.as_str()),
            ("%OOMOX_ICONS_COMMAND%", oomox_icons_command.as_str()),
            ("%OOMOX_THEME_NAME%", self.oomox_theme_name.as_str()),
            ("%OOMOX_ICON_THEME_NAME%", self.oomox_icon_theme_name.as_str()),
            ("%HIDPI%", if self.hidpi { "true" } else { "false" }),
        ];

        let generating_commands =
            substitute_list(&self.generating_commands, &pairs, image, true)?;
        let reload_commands = substitute_list(&self.reload_commands, &pairs, image, false)?;

        Ok(ResolvedConfig {
            cache_path: PathBuf::from(cache_path),
            theme_path: PathBuf::from(theme_path),
            icon_theme_path: PathBuf::from(icon_theme_path),
            send_notification: self.send_notification,
            generating_commands,
            reload_commands,
        })
    }
}

/// Configuration with paths expanded and placeholders substituted.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub cache_path: PathBuf,
    pub theme_path: PathBuf,
    pub icon_theme_path: PathBuf,
    pub send_notification: bool,
    pub generating_commands: Vec<CommandTemplate>,
    pub reload_commands: Vec<CommandTemplate>,
}

fn substitute_list(
    templates: &[CommandTemplate],
    pairs: &[(&str, &str)],
    image: Option<&str>,
    allow_dangling_image: bool,
) -> Result<Vec<CommandTemplate>> {
    templates
        .iter()
        .map(|template| {
            let mut resolved = template.clone();
            for (name, value) in pairs {
                resolved.command = resolved.command.replace(name, value);
            }
            match image {
                Some(path) => resolved.command = resolved.command.replace(IMAGE_TOKEN, path),
                None if !allow_dangling_image && resolved.command.contains(IMAGE_TOKEN) => {
                    return Err(ThemeError::Config {
                        message: format!(
                            "`{}` references {}, but no image is available",
                            template.command, IMAGE_TOKEN
                        ),
                        help: Some(
                            "Commands that use %IMAGE_PATH% only run during generation"
                                .to_string(),
                        ),
                    });
                }
                None => {}
            }
            Ok(resolved)
        })
        .collect()
}

/// Path to the config file, honoring `XDG_CONFIG_HOME`.
pub fn config_file_path() -> Result<PathBuf> {
    let base = match env::var("XDG_CONFIG_HOME") {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => PathBuf::from(home_dir()?).join(".config"),
    };
    Ok(base.join("theming").join("config.json"))
}

/// Replace a leading `~` with `$HOME`.
pub fn expand_tilde(path: &str) -> Result<String> {
    match path.strip_prefix('~') {
        Some(rest) => Ok(format!("{}{}", home_dir()?, rest)),
        None => Ok(path.to_string()),
    }
}

fn home_dir() -> Result<String> {
    env::var("HOME").map_err(|_| ThemeError::Config {
        message: "HOME is not set".to_string(),
        help: Some("Tilde paths and the config location need $HOME".to_string()),
    })
}
