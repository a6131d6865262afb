//! Form layout and timing configuration.
//!
//! Defines the YAML-serializable configuration naming the form sections and
//! labels the engine looks for, the fallback options, and the delays used
//! at suspension points. Every field has a default matching the stock
//! profile editor, so an empty file (or no file) is a valid configuration.
//!
//! # Example YAML
//!
//! ```yaml
//! timing:
//!   activation_delay_ms: 20
//!   render_delay_ms: 50
//!   label_climb_depth: 2
//! sections:
//!   info: Player Info
//!   position: Position
//!   ability: Ability
//!   skills: Player Skills
//!   com_styles: COM Playing Styles
//! fallbacks:
//!   nationality: Others
//!   playing_style: N/A
//! ```

use std::io::{BufReader, BufWriter};
use std::path::Path;
use std::time::Duration;

use profile_sync_core::Tier;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Delays and lookup reach.
///
/// # Examples
///
/// ```
/// # use profile_sync_engine::config::SyncTiming;
/// let timing = SyncTiming::immediate();
/// assert!(timing.render_delay().is_zero());
/// assert_eq!(timing.label_climb_depth, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncTiming {
    /// Wait after a simulated activation before checking the result.
    pub activation_delay_ms: u64,
    /// Wait after opening a disclosure for its option list to render.
    pub render_delay_ms: u64,
    /// How many ancestors of a label node are searched for its control.
    pub label_climb_depth: usize,
}

impl SyncTiming {
    /// Timing with zero delays; suspension points still yield.
    pub fn immediate() -> Self {
        Self {
            activation_delay_ms: 0,
            render_delay_ms: 0,
            ..Self::default()
        }
    }

    pub fn activation_delay(&self) -> Duration {
        Duration::from_millis(self.activation_delay_ms)
    }

    pub fn render_delay(&self) -> Duration {
        Duration::from_millis(self.render_delay_ms)
    }
}

impl Default for SyncTiming {
    fn default() -> Self {
        Self {
            activation_delay_ms: 20,
            render_delay_ms: 50,
            label_climb_depth: 2,
        }
    }
}

/// Heading text of each form section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionTitles {
    pub info: String,
    pub position: String,
    pub ability: String,
    pub skills: String,
    pub com_styles: String,
}

impl Default for SectionTitles {
    fn default() -> Self {
        Self {
            info: "Player Info".to_string(),
            position: "Position".to_string(),
            ability: "Ability".to_string(),
            skills: "Player Skills".to_string(),
            com_styles: "COM Playing Styles".to_string(),
        }
    }
}

/// Form labels of the info section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InfoLabels {
    pub name: String,
    pub club_shirt_name: String,
    pub national_shirt_name: String,
    pub age: String,
    pub foot: String,
    pub reputation: String,
    pub nationality: String,
    pub height: String,
    pub weight: String,
    pub playing_style: String,
}

impl Default for InfoLabels {
    fn default() -> Self {
        Self {
            name: "Player Name".to_string(),
            club_shirt_name: "Shirt Name (Club)".to_string(),
            national_shirt_name: "Shirt Name (National)".to_string(),
            age: "Age".to_string(),
            foot: "Stronger Foot".to_string(),
            reputation: "Reputation".to_string(),
            nationality: "Nationality".to_string(),
            height: "Height".to_string(),
            weight: "Weight".to_string(),
            playing_style: "Playing Style".to_string(),
        }
    }
}

/// Position section settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PositionLayout {
    /// Label of the registered-position text field.
    pub registered_label: String,
    /// Tier every position group is reset to before the record is applied.
    pub default_tier: Tier,
}

impl Default for PositionLayout {
    fn default() -> Self {
        Self {
            registered_label: "Registered Position".to_string(),
            default_tier: Tier::C,
        }
    }
}

/// Options chosen when a requested combobox option is not rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fallbacks {
    pub nationality: String,
    pub playing_style: String,
}

impl Default for Fallbacks {
    fn default() -> Self {
        Self {
            nationality: "Others".to_string(),
            playing_style: "N/A".to_string(),
        }
    }
}

/// Top-level synchronization configuration.
///
/// # Examples
///
/// ```
/// use profile_sync_engine::config::SyncConfig;
///
/// let config: SyncConfig = serde_yaml::from_str("fallbacks: { nationality: Other }").unwrap();
/// assert_eq!(config.fallbacks.nationality, "Other");
/// assert_eq!(config.fallbacks.playing_style, "N/A");
/// assert_eq!(config.sections.info, "Player Info");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    pub timing: SyncTiming,
    pub sections: SectionTitles,
    pub info: InfoLabels,
    pub position: PositionLayout,
    pub fallbacks: Fallbacks,
}

impl SyncConfig {
    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`Io`](crate::SyncError::Io) if the file cannot be read, or
    /// [`Yaml`](crate::SyncError::Yaml) if parsing fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let config = serde_yaml::from_reader(reader)?;
        Ok(config)
    }

    /// Saves the configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`Io`](crate::SyncError::Io) if the file cannot be written,
    /// or [`Yaml`](crate::SyncError::Yaml) if serialization fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);
        serde_yaml::to_writer(writer, self)?;
        Ok(())
    }

    /// Same configuration with zero delays, for offline snapshots and tests.
    pub fn immediate(mut self) -> Self {
        self.timing = SyncTiming {
            label_climb_depth: self.timing.label_climb_depth,
            ..SyncTiming::immediate()
        };
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_yaml() -> &'static str {
        r#"
timing:
  activation_delay_ms: 5
  render_delay_ms: 80
  label_climb_depth: 3
sections:
  info: Basic Info
  skills: Skills
info:
  nationality: Country
position:
  registered_label: Reg. Position
  default_tier: B
fallbacks:
  playing_style: None
"#
    }

    #[test]
    fn test_parse_full_overrides() {
        let config: SyncConfig = serde_yaml::from_str(sample_yaml()).unwrap();
        assert_eq!(config.timing.render_delay(), Duration::from_millis(80));
        assert_eq!(config.timing.label_climb_depth, 3);
        assert_eq!(config.sections.info, "Basic Info");
        assert_eq!(config.sections.position, "Position");
        assert_eq!(config.info.nationality, "Country");
        assert_eq!(config.info.age, "Age");
        assert_eq!(config.position.default_tier, Tier::B);
        assert_eq!(config.fallbacks.playing_style, "None");
        assert_eq!(config.fallbacks.nationality, "Others");
    }

    #[test]
    fn test_empty_document_is_default() {
        let config: SyncConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, SyncConfig::default());
    }

    #[test]
    fn test_immediate_keeps_climb_depth() {
        let mut config = SyncConfig::default();
        config.timing.label_climb_depth = 4;
        let config = config.immediate();
        assert_eq!(config.timing.activation_delay_ms, 0);
        assert_eq!(config.timing.render_delay_ms, 0);
        assert_eq!(config.timing.label_climb_depth, 4);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.yml");

        let mut config = SyncConfig::default();
        config.sections.ability = "Abilities".to_string();
        config.save(&path).unwrap();

        let loaded = SyncConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = SyncConfig::load("/nonexistent/layout.yml").unwrap_err();
        assert!(matches!(err, crate::SyncError::Io(_)));
    }
}
