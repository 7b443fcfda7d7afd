use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

use serde_json::json;
use stackdeck::logic::layout::MIN_COLUMN_WIDTH;
use stackdeck::model::{ColumnKindCatalog, ColumnKindSpec, Payload};
use stackdeck::views::demo_catalog;

/// A column opened at startup: a bare kind, or a kind with its first payload
///
/// ```yaml
/// columns:
///   - home
///   - kind: profile
///     payload:
///       userName: Demo User
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum StartupColumn {
    Kind(String),
    Seeded { kind: String, payload: Payload },
}

impl StartupColumn {
    pub fn kind(&self) -> &str {
        match self {
            StartupColumn::Kind(kind) | StartupColumn::Seeded { kind, .. } => kind,
        }
    }

    pub fn payload(&self) -> Option<&Payload> {
        match self {
            StartupColumn::Kind(_) => None,
            StartupColumn::Seeded { payload, .. } => Some(payload),
        }
    }
}

impl From<&str> for StartupColumn {
    fn from(kind: &str) -> Self {
        StartupColumn::Kind(kind.to_string())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub vim_mode: bool,
    #[serde(default = "default_column_width")]
    pub column_width: u16,
    #[serde(default = "default_drag_activation_distance")]
    pub drag_activation_distance: u16,
    /// Columns opened at startup, left to right
    #[serde(default)]
    pub columns: Option<Vec<StartupColumn>>,
    /// Replaces the built-in column kinds when present
    #[serde(default)]
    pub column_kinds: Option<Vec<ColumnKindSpec>>,
}

fn default_column_width() -> u16 {
    34
}

fn default_drag_activation_distance() -> u16 {
    2
}

fn demo_startup_columns() -> Vec<StartupColumn> {
    vec![
        StartupColumn::from("home"),
        StartupColumn::Seeded {
            kind: "profile".to_string(),
            payload: json!({ "userName": "Demo User" }),
        },
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vim_mode: false,
            column_width: default_column_width(),
            drag_activation_distance: default_drag_activation_distance(),
            columns: None,
            column_kinds: None,
        }
    }
}

impl Config {
    /// Parse a YAML config; an empty file means all defaults
    pub fn from_yaml(contents: &str) -> Result<Self> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(contents).context("Invalid config file")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml(&contents).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Column width, raised to the minimum usable width
    pub fn effective_column_width(&self) -> u16 {
        self.column_width.max(MIN_COLUMN_WIDTH)
    }

    fn custom_kinds(&self) -> Option<&[ColumnKindSpec]> {
        self.column_kinds.as_deref().filter(|kinds| !kinds.is_empty())
    }

    /// Catalog offered by the toolbar
    pub fn catalog(&self) -> ColumnKindCatalog {
        match self.custom_kinds() {
            Some(kinds) => ColumnKindCatalog::new(kinds.to_vec()),
            None => demo_catalog(),
        }
    }

    /// Columns to open at startup
    ///
    /// Without an explicit `columns` list, a custom catalog opens one column
    /// of its first kind and the built-in catalog opens the demo columns.
    pub fn startup_columns(&self) -> Vec<StartupColumn> {
        if let Some(columns) = &self.columns {
            return columns.clone();
        }
        match self.custom_kinds() {
            Some(kinds) => kinds
                .first()
                .map(|spec| StartupColumn::Kind(spec.kind.clone()))
                .into_iter()
                .collect(),
            None => demo_startup_columns(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_yaml("").unwrap();
        assert!(!config.vim_mode);
        assert_eq!(config.column_width, 34);
        assert_eq!(config.drag_activation_distance, 2);
        assert_eq!(config.columns, None);
        assert_eq!(config.catalog(), demo_catalog());
        assert_eq!(config.startup_columns(), demo_startup_columns());
    }

    #[test]
    fn test_partial_config() {
        let config = Config::from_yaml("vim_mode: true\ncolumns: [search]\n").unwrap();
        assert!(config.vim_mode);
        assert_eq!(config.startup_columns(), vec![StartupColumn::from("search")]);
        assert_eq!(config.column_width, 34);
    }

    #[test]
    fn test_narrow_column_width_is_raised() {
        let config = Config::from_yaml("column_width: 5").unwrap();
        assert_eq!(config.effective_column_width(), MIN_COLUMN_WIDTH);
    }

    #[test]
    fn test_custom_column_kinds() {
        let yaml = r#"
column_kinds:
  - kind: admin
    label: Admin
    initial_view: UserProfile
    initial_payload:
      userName: Admin
"#;
        let config = Config::from_yaml(yaml).unwrap();
        let catalog = config.catalog();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.label_for("admin"), Some("Admin"));
        assert!(catalog.get("home").is_none());
        assert_eq!(config.startup_columns(), vec![StartupColumn::from("admin")]);
    }

    #[test]
    fn test_seeded_startup_columns() {
        let yaml = r#"
columns:
  - search
  - kind: profile
    payload:
      userName: Ada
"#;
        let columns = Config::from_yaml(yaml).unwrap().startup_columns();
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].kind(), "search");
        assert!(columns[0].payload().is_none());
        assert_eq!(columns[1].kind(), "profile");
        assert_eq!(columns[1].payload(), Some(&json!({ "userName": "Ada" })));
    }

    #[test]
    fn test_explicit_empty_columns_opens_none() {
        let config = Config::from_yaml("columns: []\n").unwrap();
        assert!(config.startup_columns().is_empty());
    }

    #[test]
    fn test_widest_column_width_is_accepted() {
        let config = Config::from_yaml("column_width: 65535").unwrap();
        assert_eq!(config.effective_column_width(), u16::MAX);
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        assert!(Config::from_yaml("columns: {").is_err());
    }
}
