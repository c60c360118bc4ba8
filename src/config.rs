use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use mealswipe_menu::{MenuSettings, SpringConfig};
use serde::Deserialize;
use std::env;
use validator::Validate;

#[derive(Debug, Deserialize, Clone, Default, Validate)]
pub struct Config {
    #[serde(default)]
    #[validate(nested)]
    pub gesture: GestureConfig,
    #[serde(default)]
    #[validate(nested)]
    pub spring: SpringSettings,
    #[serde(default)]
    #[validate(nested)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone, Validate)]
pub struct GestureConfig {
    /// Release translation (in points) a drag must exceed to commit
    #[serde(default = "default_swipe_threshold")]
    #[validate(range(exclusive_min = 0.0))]
    pub swipe_threshold: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: default_swipe_threshold(),
        }
    }
}

fn default_swipe_threshold() -> f32 {
    mealswipe_menu::SWIPE_THRESHOLD
}

#[derive(Debug, Deserialize, Clone, Validate)]
pub struct SpringSettings {
    #[serde(default = "default_stiffness")]
    #[validate(range(exclusive_min = 0.0))]
    pub stiffness: f32,
    #[serde(default = "default_damping")]
    #[validate(range(exclusive_min = 0.0))]
    pub damping: f32,
    #[serde(default = "default_mass")]
    #[validate(range(exclusive_min = 0.0))]
    pub mass: f32,
    #[serde(default = "default_rest_displacement")]
    #[validate(range(exclusive_min = 0.0))]
    pub rest_displacement: f32,
    #[serde(default = "default_rest_speed")]
    #[validate(range(exclusive_min = 0.0))]
    pub rest_speed: f32,
}

impl Default for SpringSettings {
    fn default() -> Self {
        Self {
            stiffness: default_stiffness(),
            damping: default_damping(),
            mass: default_mass(),
            rest_displacement: default_rest_displacement(),
            rest_speed: default_rest_speed(),
        }
    }
}

fn default_stiffness() -> f32 {
    SpringConfig::default().stiffness
}

fn default_damping() -> f32 {
    SpringConfig::default().damping
}

fn default_mass() -> f32 {
    SpringConfig::default().mass
}

fn default_rest_displacement() -> f32 {
    SpringConfig::default().rest_displacement
}

fn default_rest_speed() -> f32 {
    SpringConfig::default().rest_speed
}

#[derive(Debug, Deserialize, Clone, Validate)]
pub struct DisplayConfig {
    #[serde(default = "default_frame_interval_ms")]
    #[validate(range(min = 1))]
    pub frame_interval_ms: u64,
    /// Upper bound on frames spent waiting for offsets to settle
    #[serde(default = "default_max_settle_frames")]
    #[validate(range(min = 1))]
    pub max_settle_frames: u32,
    #[serde(default = "default_card_width")]
    #[validate(range(min = 8))]
    pub card_width: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: default_frame_interval_ms(),
            max_settle_frames: default_max_settle_frames(),
            card_width: default_card_width(),
        }
    }
}

fn default_frame_interval_ms() -> u64 {
    16
}

fn default_max_settle_frames() -> u32 {
    600
}

fn default_card_width() -> usize {
    48
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CatalogConfig {
    /// JSON catalog file; the built-in sample catalog is used when unset
    #[serde(default)]
    pub path: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (MEALSWIPE__GESTURE__SWIPE_THRESHOLD, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder.set_default("observability.log_level", default_log_level())?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Config file is optional
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("MEALSWIPE")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(catalog_path) = env::var("MEALSWIPE_CATALOG") {
            builder = builder.set_override("catalog.path", catalog_path)?;
        }

        builder.build()?.try_deserialize()
    }

    pub fn menu_settings(&self) -> MenuSettings {
        MenuSettings {
            swipe_threshold: self.gesture.swipe_threshold,
            spring: SpringConfig {
                stiffness: self.spring.stiffness,
                damping: self.spring.damping,
                mass: self.spring.mass,
                rest_displacement: self.spring.rest_displacement,
                rest_speed: self.spring.rest_speed,
            },
        }
    }

    pub fn frame_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.display.frame_interval_ms)
    }
}
