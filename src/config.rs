use serde::Deserialize;
use std::path::PathBuf;
use directories::ProjectDirs;
use anyhow::Result;
use std::fs;

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub menu: MenuConfig,
    #[serde(default)]
    pub properties: PropertyConfig,
    #[serde(default)]
    pub operators: OperatorConfig,
}

#[derive(Deserialize, Debug, Clone)]
pub struct GeneralConfig {
    /// Store location, defaults to `bookmarks.sqlite` in the data dir
    #[serde(default)]
    pub database: Option<PathBuf>,
    #[serde(default = "default_scheme")]
    pub default_scheme: String,
    #[serde(default = "default_bookmark_glyph")]
    pub bookmark_glyph: String,
    #[serde(default = "default_current_prefix")]
    pub current_prefix: String,
}

fn default_scheme() -> String { "https://".to_string() }
fn default_bookmark_glyph() -> String { "\u{1F4C4}".to_string() }
fn default_current_prefix() -> String { "Current: ".to_string() }

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            database: None,
            default_scheme: default_scheme(),
            bookmark_glyph: default_bookmark_glyph(),
            current_prefix: default_current_prefix(),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct MenuConfig {
    #[serde(default = "default_menu_program")]
    pub program: String,
    #[serde(default = "default_font")]
    pub font: String,
    #[serde(default = "default_lines")]
    pub lines: u32,
    #[serde(default = "default_border_width")]
    pub border_width: u32,
    #[serde(default = "default_true")]
    pub centered: bool,
    #[serde(default)]
    pub extra_args: Vec<String>,
    #[serde(default = "default_enhanced_prompt")]
    pub enhanced_prompt: String,
    #[serde(default = "default_uri_prompt")]
    pub raw_prompt: String,
    #[serde(default = "default_uri_prompt")]
    pub bookmarks_prompt: String,
    #[serde(default = "default_bookmark_name_prompt")]
    pub bookmark_name_prompt: String,
}

fn default_menu_program() -> String { "dmenu".to_string() }
fn default_font() -> String { "monospace".to_string() }
fn default_lines() -> u32 { 10 }
fn default_border_width() -> u32 { 5 }
fn default_true() -> bool { true }
fn default_enhanced_prompt() -> String { "URI+:".to_string() }
fn default_uri_prompt() -> String { "URI:".to_string() }
fn default_bookmark_name_prompt() -> String { "Bookmark name".to_string() }

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            program: default_menu_program(),
            font: default_font(),
            lines: default_lines(),
            border_width: default_border_width(),
            centered: true,
            extra_args: Vec::new(),
            enhanced_prompt: default_enhanced_prompt(),
            raw_prompt: default_uri_prompt(),
            bookmarks_prompt: default_uri_prompt(),
            bookmark_name_prompt: default_bookmark_name_prompt(),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct PropertyConfig {
    #[serde(default = "default_property_program")]
    pub program: String,
    #[serde(default = "default_uri_property")]
    pub uri_property: String,
    #[serde(default = "default_go_property")]
    pub go_property: String,
}

fn default_property_program() -> String { "xprop".to_string() }
fn default_uri_property() -> String { "_SURF_URI".to_string() }
fn default_go_property() -> String { "_SURF_GO".to_string() }

impl Default for PropertyConfig {
    fn default() -> Self {
        Self {
            program: default_property_program(),
            uri_property: default_uri_property(),
            go_property: default_go_property(),
        }
    }
}

/// URL templates for the templating operators. `{}` marks where the argument goes.
#[derive(Deserialize, Debug, Clone)]
pub struct OperatorConfig {
    #[serde(default = "default_nightly")]
    pub nightly: String,
    #[serde(default = "default_local")]
    pub local: String,
    #[serde(default = "default_search")]
    pub search: String,
}

fn default_nightly() -> String {
    "https://nightly.test.k8s.elo.dev/nightly-{}/plugin/de.elo.ix.plugin.proxy/administration/".to_string()
}
fn default_local() -> String {
    "http://elo-{}.localhost/repository/plugin/de.elo.ix.plugin.proxy/administration/".to_string()
}
fn default_search() -> String { "https://search.elspeth.xyz/search?q={}".to_string() }

impl Default for OperatorConfig {
    fn default() -> Self {
        Self {
            nightly: default_nightly(),
            local: default_local(),
            search: default_search(),
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("org", "surfmark", "surfmark")
}

impl Config {
    /// Effective store path. The parent directory is created if needed.
    pub fn database_path(&self) -> Result<PathBuf> {
        let path = match &self.general.database {
            Some(path) => path.clone(),
            None => match project_dirs() {
                Some(dirs) => dirs.data_dir().join("bookmarks.sqlite"),
                None => PathBuf::from("bookmarks.sqlite"),
            },
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(path)
    }
}

pub fn load_config() -> Result<Config> {
    let config_path = if let Some(dirs) = project_dirs() {
        dirs.config_dir().join("config.toml")
    } else {
        PathBuf::from("config.toml")
    };

    if !config_path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(config_path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            [menu]
            font = "comic code ligatures"
            lines = 20

            [operators]
            search = "https://example.org/?q={}"
            "#,
        )
        .unwrap();

        assert_eq!(config.menu.font, "comic code ligatures");
        assert_eq!(config.menu.lines, 20);
        assert_eq!(config.menu.border_width, 5);
        assert_eq!(config.menu.program, "dmenu");
        assert_eq!(config.operators.search, "https://example.org/?q={}");
        assert!(config.operators.nightly.contains("{}"));
        assert_eq!(config.general.default_scheme, "https://");
        assert_eq!(config.properties.go_property, "_SURF_GO");
    }

    #[test]
    fn explicit_database_path_parent_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.general.database = Some(dir.path().join("nested").join("marks.sqlite"));

        let path = config.database_path().unwrap();
        assert_eq!(path, dir.path().join("nested").join("marks.sqlite"));
        assert!(dir.path().join("nested").is_dir());
    }
}
