use crate::resolver::EnumTables;
use serde::Deserialize;

/// Complete tracker configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SlayerConfig {
    #[serde(default)]
    pub tracker: TrackerConfig,
    #[serde(default)]
    pub directory: DirectoryConfig,
    #[serde(default)]
    pub profile: ProfileConfig,
    #[serde(default)]
    pub tables: EnumTables,
}

/// Task tracker behaviour
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TrackerConfig {
    /// Show the remaining-kills counter
    #[serde(default = "default_true")]
    pub show_infobox: bool,
    /// Minutes after the last change before the counter is hidden (0 = never)
    #[serde(default = "default_stat_timeout")]
    pub stat_timeout_minutes: u32,
    #[serde(default = "default_true")]
    pub show_superior_notification: bool,
    /// Enables the `task <name>` developer command
    #[serde(default)]
    pub developer_mode: bool,
    #[serde(default)]
    pub highlight_hull: bool,
    #[serde(default)]
    pub highlight_tile: bool,
    #[serde(default)]
    pub highlight_outline: bool,
    /// ARGB hex colour for highlighted targets
    #[serde(default = "default_target_color")]
    pub target_color: String,
}

fn default_true() -> bool {
    true
}

fn default_stat_timeout() -> u32 {
    5
}

fn default_target_color() -> String {
    "#ffff0000".to_string()
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            show_infobox: true,
            stat_timeout_minutes: default_stat_timeout(),
            show_superior_notification: true,
            developer_mode: false,
            highlight_hull: false,
            highlight_tile: false,
            highlight_outline: false,
            target_color: default_target_color(),
        }
    }
}

impl TrackerConfig {
    pub fn highlights_enabled(&self) -> bool {
        self.highlight_hull || self.highlight_tile || self.highlight_outline
    }
}

/// Directory service (`!task`) configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DirectoryConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Answer and submit `!task` lookups
    #[serde(default = "default_true")]
    pub task_command: bool,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_base_url() -> String {
    std::env::var("SLAYER_DIRECTORY_URL")
        .unwrap_or_else(|_| "https://api.runelite.net/runelite-1.10".to_string())
}

fn default_timeout_seconds() -> u64 {
    10
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            task_command: true,
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

/// Profile storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileConfig {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_profile")]
    pub profile: String,
}

fn default_database() -> String {
    "slayer.db".to_string()
}

fn default_profile() -> String {
    "default".to_string()
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            database: default_database(),
            profile: default_profile(),
        }
    }
}

/// Load configuration from TOML file
pub fn load_config(path: &str) -> Result<SlayerConfig, Box<dyn std::error::Error>> {
    let contents = std::fs::read_to_string(path)?;
    let config: SlayerConfig = toml::from_str(&contents)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::NameResolver;

    #[test]
    fn test_default_config() {
        let config = SlayerConfig::default();
        assert!(config.tracker.show_infobox);
        assert_eq!(config.tracker.stat_timeout_minutes, 5);
        assert!(!config.tracker.developer_mode);
        assert!(!config.tracker.highlights_enabled());
        assert!(config.directory.task_command);
        assert_eq!(config.directory.timeout_seconds, 10);
        assert_eq!(config.profile.database, "slayer.db");
        assert_eq!(config.profile.profile, "default");
    }

    #[test]
    fn test_config_deserialization() {
        let toml = r##"
            [tracker]
            show_infobox = false
            stat_timeout_minutes = 0
            highlight_outline = true
            target_color = "#ff00ff00"

            [directory]
            base_url = "http://localhost:8080"
            task_command = false

            [profile]
            database = "/tmp/slayer.db"
            profile = "iron"

            [[tables.creatures]]
            id = 2
            name = "rats"

            [[tables.locations]]
            id = 1
            name = "Slayer Tower"
        "##;

        let config: SlayerConfig = toml::from_str(toml).unwrap();
        assert!(!config.tracker.show_infobox);
        assert_eq!(config.tracker.stat_timeout_minutes, 0);
        assert!(config.tracker.highlights_enabled());
        assert_eq!(config.tracker.target_color, "#ff00ff00");
        assert_eq!(config.directory.base_url, "http://localhost:8080");
        assert!(!config.directory.task_command);
        assert_eq!(config.profile.profile, "iron");
        assert_eq!(config.tables.creature_name(2).as_deref(), Some("rats"));
        assert_eq!(config.tables.locations(), vec!["Slayer Tower".to_string()]);
    }

    #[test]
    fn test_partial_config() {
        let toml = r#"
            [tracker]
            developer_mode = true
        "#;

        let config: SlayerConfig = toml::from_str(toml).unwrap();
        assert!(config.tracker.developer_mode);
        assert!(config.tracker.show_infobox); // Default
        assert_eq!(config.directory.timeout_seconds, 10); // Default
    }
}
