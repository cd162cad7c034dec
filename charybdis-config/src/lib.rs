use std::collections::HashMap;
use std::path::Path;

use charybdis_types::action::KeyAction;
use serde_derive::Deserialize;

pub mod action_parser;
pub mod error;
pub mod keycode_alias;
pub mod layout;
pub mod pointing;
pub mod transform;
pub mod validation;

pub use error::{ConfigError, ConfigResult};
pub use keycode_alias::KEYCODE_ALIAS;
pub use pointing::{LayerRef, PointingTomlConfig, ScrollSide};

/// Configurations of the keyboard, loaded from `keyboard.toml`.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeyboardTomlConfig {
    /// Basic keyboard info
    keyboard: Option<KeyboardInfo>,
    // Aliases for key maps
    aliases: Option<HashMap<String, String>>,
    // Layers of key maps
    layer: Option<Vec<LayerTomlConfig>>,
    /// Layout config, total row/col of both halves
    layout: Option<LayoutTomlConfig>,
    /// Trackball config
    pointing: Option<PointingTomlConfig>,
}

impl KeyboardTomlConfig {
    /// Read and validate a `keyboard.toml` file
    pub fn new_from_toml_path<P: AsRef<Path>>(config_toml_path: P) -> ConfigResult<Self> {
        let path = config_toml_path.as_ref();
        let s = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::parse(&s, &path.display().to_string())
    }

    /// Parse and validate `keyboard.toml` content
    pub fn new_from_toml_str(config: &str) -> ConfigResult<Self> {
        Self::parse(config, "<string>")
    }

    fn parse(config: &str, path: &str) -> ConfigResult<Self> {
        let config = toml::from_str::<KeyboardTomlConfig>(config).map_err(|e| ConfigError::TomlParse {
            path: path.to_string(),
            message: e.message().to_string(),
        })?;
        validation::validate_config(&config)?;
        Ok(config)
    }

    pub fn keyboard_name(&self) -> Option<&str> {
        self.keyboard.as_ref().map(|k| k.name.as_str())
    }
}

/// Configurations for keyboard info
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeyboardInfo {
    /// Keyboard name
    pub name: String,
    /// Vendor id
    pub vendor_id: Option<u16>,
    /// Product id
    pub product_id: Option<u16>,
    pub manufacturer: Option<String>,
}

/// Configurations for keyboard layout
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutTomlConfig {
    pub rows: u8,
    pub cols: u8,
    pub layers: u8,
    pub matrix_map: Option<String>,
}

/// Configurations for a keymap layer
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayerTomlConfig {
    pub name: Option<String>,
    pub keys: String,
    /// Add GACS modifiers to the home row keys on hold
    #[serde(default)]
    pub home_row_mods: bool,
    /// Add pointer layer to the outer bottom row keys on hold
    #[serde(default)]
    pub pointer_mod: bool,
}

/// Resolved keymap, indexed by `[layer][row][col]`
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutConfig {
    pub rows: u8,
    pub cols: u8,
    pub layers: u8,
    pub keymap: Vec<Vec<Vec<KeyAction>>>,
}

impl LayoutConfig {
    /// Copy the keymap into a fixed-size array, the dimensions must match exactly
    pub fn to_keymap<const ROW: usize, const COL: usize, const NUM_LAYER: usize>(
        &self,
    ) -> ConfigResult<[[[KeyAction; COL]; ROW]; NUM_LAYER]> {
        if (self.rows as usize, self.cols as usize, self.layers as usize) != (ROW, COL, NUM_LAYER) {
            return Err(ConfigError::Validation {
                field: "layout".to_string(),
                message: format!(
                    "keymap is {}x{}x{}, expected {}x{}x{}",
                    self.layers, self.rows, self.cols, NUM_LAYER, ROW, COL
                ),
            });
        }
        let mut keymap = [[[KeyAction::No; COL]; ROW]; NUM_LAYER];
        for (layer, src_layer) in keymap.iter_mut().zip(self.keymap.iter()) {
            for (row, src_row) in layer.iter_mut().zip(src_layer.iter()) {
                for (key, src_key) in row.iter_mut().zip(src_row.iter()) {
                    *key = *src_key;
                }
            }
        }
        Ok(keymap)
    }
}
