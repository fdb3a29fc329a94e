use crate::error::{Result, SinchaiError};
use crate::models::{CropType, FarmProfile, IrrigationMethod, SoilType};
use dialoguer::Input;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub farm: FarmConfig,
}

/// Farm profile as stored on disk. Enum fields are free-form strings
/// here and validated into the closed sets by `farm_profile()`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FarmConfig {
    pub name: String,
    pub crop: String,
    pub soil: String,
    pub field_size_acres: f64,
    pub irrigation_method: String,
}

impl Config {
    pub fn load(config_override: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => p,
            None => Self::find_config_path()?,
        };

        if !config_path.exists() {
            return Err(SinchaiError::Config(format!(
                "Config file not found at {:?}. Run `sinchai init` to set up.",
                config_path
            )));
        }

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| SinchaiError::Config(format!("Failed to read config: {}", e)))?;

        // Substitute environment variables
        let config_str = Self::substitute_env_vars(&config_str);

        let config: Config = serde_yaml::from_str(&config_str)
            .map_err(|e| SinchaiError::Config(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Validate the stored strings into a typed farm profile.
    pub fn farm_profile(&self) -> Result<FarmProfile> {
        let crop = CropType::from_str(&self.farm.crop).ok_or_else(|| {
            SinchaiError::InvalidInput(format!("Unknown crop '{}'", self.farm.crop))
        })?;
        let soil = SoilType::from_str(&self.farm.soil).ok_or_else(|| {
            SinchaiError::InvalidInput(format!("Unknown soil type '{}'", self.farm.soil))
        })?;
        let irrigation_method =
            IrrigationMethod::from_str(&self.farm.irrigation_method).ok_or_else(|| {
                SinchaiError::InvalidInput(format!(
                    "Unknown irrigation method '{}'",
                    self.farm.irrigation_method
                ))
            })?;
        if !(self.farm.field_size_acres > 0.0) {
            return Err(SinchaiError::InvalidInput(format!(
                "Field size must be positive, got {}",
                self.farm.field_size_acres
            )));
        }

        Ok(FarmProfile::new(
            self.farm.name.clone(),
            crop,
            soil,
            self.farm.field_size_acres,
            irrigation_method,
        ))
    }

    /// Search for config.yaml in standard locations.
    /// Returns the path of the first found config, or the XDG default path if none found.
    fn find_config_path() -> Result<PathBuf> {
        // Try current directory first
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Ok(local_config);
        }

        // Try XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("sinchai").join("config.yaml");
            if xdg_config.exists() {
                return Ok(xdg_config);
            }
        }

        // Return XDG path as the default (will trigger "not found" in load)
        let default_path = dirs::config_dir()
            .ok_or_else(|| SinchaiError::Config("Cannot determine config directory".into()))?
            .join("sinchai")
            .join("config.yaml");
        Ok(default_path)
    }

    /// Returns true if a config file can be found in any standard location.
    pub fn exists(config_override: Option<&PathBuf>) -> bool {
        match config_override {
            Some(p) => p.exists(),
            None => Self::find_config_path()
                .map(|p| p.exists())
                .unwrap_or(false),
        }
    }

    /// Default path for writing new config files (~/.config/sinchai/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| SinchaiError::Config("Cannot determine config directory".into()))?
            .join("sinchai");
        Ok(config_dir.join("config.yaml"))
    }

    /// Run interactive setup prompts and write config to disk.
    /// Returns the loaded Config and the path it was written to.
    pub fn setup_interactive() -> Result<(Self, PathBuf)> {
        println!();
        println!("No configuration found. Let's set up your farm profile!");
        println!();

        let farm_name: String = Input::new()
            .with_prompt("  Farm name")
            .default("Main Field".into())
            .interact_text()
            .map_err(|e| SinchaiError::Config(format!("Input error: {}", e)))?;

        let crop: String = Input::new()
            .with_prompt("  Crop (Wheat, Rice, Tomato, Potato, Cotton, Sugarcane, Maize)")
            .default("Wheat".into())
            .validate_with(|s: &String| match CropType::from_str(s) {
                Some(_) => Ok(()),
                None => Err("unknown crop"),
            })
            .interact_text()
            .map_err(|e| SinchaiError::Config(format!("Input error: {}", e)))?;

        let soil: String = Input::new()
            .with_prompt("  Soil type (Sandy, Loamy, Clay, Black)")
            .default("Loamy".into())
            .validate_with(|s: &String| match SoilType::from_str(s) {
                Some(_) => Ok(()),
                None => Err("unknown soil type"),
            })
            .interact_text()
            .map_err(|e| SinchaiError::Config(format!("Input error: {}", e)))?;

        let field_size_acres: f64 = Input::new()
            .with_prompt("  Field size (acres)")
            .default(1.0)
            .validate_with(|v: &f64| {
                if *v > 0.0 {
                    Ok(())
                } else {
                    Err("field size must be positive")
                }
            })
            .interact_text()
            .map_err(|e| SinchaiError::Config(format!("Input error: {}", e)))?;

        let irrigation_method: String = Input::new()
            .with_prompt("  Irrigation method (Drip, Sprinkler, Flood)")
            .default("Flood".into())
            .validate_with(|s: &String| match IrrigationMethod::from_str(s) {
                Some(_) => Ok(()),
                None => Err("unknown irrigation method"),
            })
            .interact_text()
            .map_err(|e| SinchaiError::Config(format!("Input error: {}", e)))?;

        println!();

        let config = Config {
            farm: FarmConfig {
                name: farm_name,
                crop,
                soil,
                field_size_acres,
                irrigation_method,
            },
        };

        // Write to default config path
        let config_path = Self::default_config_path()?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(&config)
            .map_err(|e| SinchaiError::Config(format!("Failed to serialize config: {}", e)))?;

        // Write with a header comment
        let content = format!(
            "# Sinchai Configuration\n# Generated by `sinchai init`\n# Environment variable substitution (${{VAR}}) is supported.\n\n{}",
            yaml
        );
        std::fs::write(&config_path, content)?;

        println!("Configuration saved to {}", config_path.display());
        println!();

        Ok((config, config_path))
    }

    fn substitute_env_vars(content: &str) -> String {
        let mut result = content.to_string();

        // Find all ${VAR_NAME} patterns and substitute
        let re = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        result
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            farm: FarmConfig {
                name: "Main Field".into(),
                crop: "Wheat".into(),
                soil: "Loamy".into(),
                field_size_acres: 1.0,
                irrigation_method: "Flood".into(),
            },
        }
    }
}
