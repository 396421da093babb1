use crate::error::{Result, VitrineError};
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATE_FORMAT: &str = "%d %b %Y";
const DEFAULT_LINE_WIDTH: usize = 100;
const MIN_LINE_WIDTH: usize = 40;

/// Settings stored in `<data dir>/config.json`. Missing keys take their defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct VitrineConfig {
    /// chrono format string used for dates in listings
    #[serde(default = "default_date_format")]
    pub date_format: String,

    #[serde(default = "default_line_width")]
    pub line_width: usize,

    /// List unpublished projects without passing `--drafts`
    #[serde(default)]
    pub show_drafts: bool,
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

fn default_line_width() -> usize {
    DEFAULT_LINE_WIDTH
}

fn is_valid_date_format(format: &str) -> bool {
    !format.is_empty() && !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

impl Default for VitrineConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            line_width: DEFAULT_LINE_WIDTH,
            show_drafts: false,
        }
    }
}

impl VitrineConfig {
    pub const KEYS: &'static [&'static str] = &["date-format", "line-width", "show-drafts"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(VitrineError::Io)?;
        let config: VitrineConfig =
            serde_json::from_str(&content).map_err(VitrineError::Serialization)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(VitrineError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(VitrineError::Serialization)?;
        fs::write(config_path, content).map_err(VitrineError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "date-format" => Some(self.date_format.clone()),
            "line-width" => Some(self.line_width.to_string()),
            "show-drafts" => Some(self.show_drafts.to_string()),
            _ => None,
        }
    }

    /// Sets a key from its textual value. Errors are meant for the user as-is.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "date-format" => {
                if !is_valid_date_format(value) {
                    return Err(format!("Invalid date format: {}", value));
                }
                self.date_format = value.to_string();
            }
            "line-width" => {
                let width: usize = value
                    .parse()
                    .map_err(|_| format!("line-width must be a number, got {}", value))?;
                if width < MIN_LINE_WIDTH {
                    return Err(format!("line-width must be at least {}", MIN_LINE_WIDTH));
                }
                self.line_width = width;
            }
            "show-drafts" => {
                self.show_drafts = match value.to_ascii_lowercase().as_str() {
                    "true" | "yes" | "on" | "1" => true,
                    "false" | "no" | "off" | "0" => false,
                    _ => return Err(format!("show-drafts must be true or false, got {}", value)),
                };
            }
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }

    /// The date format to render with. A hand-edited invalid format falls back to the default.
    pub fn effective_date_format(&self) -> &str {
        if is_valid_date_format(&self.date_format) {
            &self.date_format
        } else {
            DEFAULT_DATE_FORMAT
        }
    }

    pub fn effective_line_width(&self) -> usize {
        self.line_width.max(MIN_LINE_WIDTH)
    }

    pub fn list_all(&self) -> Vec<(String, String)> {
        Self::KEYS
            .iter()
            .filter_map(|key| self.get(key).map(|v| (key.to_string(), v)))
            .collect()
    }
}
