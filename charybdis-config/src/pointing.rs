use charybdis::config::{AutoMouseConfig, DEFAULT_CPI, PointingConfig};
use charybdis::layer::Layer;
use charybdis::pointing::scroll::DEFAULT_SCROLL_DIVISOR;
use charybdis::pointing::{ScrollConfig, Side};
use charybdis::UserConfig;
use serde_derive::Deserialize;
use serde_inline_default::serde_inline_default;

use crate::KeyboardTomlConfig;
use crate::error::{ConfigError, ConfigResult};
use crate::layout::resolve_layer_name;

/// A layer, referenced by number or by name
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LayerRef {
    Number(u8),
    Name(String),
}

impl LayerRef {
    fn name(layer: Layer) -> Self {
        LayerRef::Name(layer.name().to_string())
    }
}

/// Half of the keyboard whose trackball scrolls
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollSide {
    #[default]
    Left,
    Right,
}

impl From<ScrollSide> for Side {
    fn from(side: ScrollSide) -> Self {
        match side {
            ScrollSide::Left => Side::Left,
            ScrollSide::Right => Side::Right,
        }
    }
}

/// Configurations for the trackball pair, the `[pointing]` section
#[serde_inline_default]
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PointingTomlConfig {
    /// A trackball is attached
    #[serde_inline_default(true)]
    pub enabled: bool,
    /// Both halves have a trackball
    #[serde_inline_default(true)]
    pub combined: bool,
    /// Enable sniping mode automatically on `auto_sniping_layer`
    #[serde_inline_default(true)]
    pub auto_sniping: bool,
    #[serde_inline_default(LayerRef::name(Layer::Pointer))]
    pub auto_sniping_layer: LayerRef,
    /// Activate `auto_mouse_layer` on trackball motion
    #[serde_inline_default(true)]
    pub auto_mouse: bool,
    #[serde_inline_default(LayerRef::name(Layer::AutoMouse))]
    pub auto_mouse_layer: LayerRef,
    #[serde_inline_default(DEFAULT_CPI)]
    pub left_cpi: u16,
    #[serde_inline_default(DEFAULT_CPI)]
    pub right_cpi: u16,
    /// Sensor counts per horizontal scroll step
    #[serde_inline_default(DEFAULT_SCROLL_DIVISOR)]
    pub scroll_divisor_h: f32,
    /// Sensor counts per vertical scroll step
    #[serde_inline_default(DEFAULT_SCROLL_DIVISOR)]
    pub scroll_divisor_v: f32,
    #[serde(default)]
    pub scroll_side: ScrollSide,
}

/// This separate Default impl is needed when `[pointing]` section is not set in keyboard.toml
impl Default for PointingTomlConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            combined: true,
            auto_sniping: true,
            auto_sniping_layer: LayerRef::name(Layer::Pointer),
            auto_mouse: true,
            auto_mouse_layer: LayerRef::name(Layer::AutoMouse),
            left_cpi: DEFAULT_CPI,
            right_cpi: DEFAULT_CPI,
            scroll_divisor_h: DEFAULT_SCROLL_DIVISOR,
            scroll_divisor_v: DEFAULT_SCROLL_DIVISOR,
            scroll_side: ScrollSide::Left,
        }
    }
}

impl KeyboardTomlConfig {
    pub(crate) fn pointing_config(&self) -> PointingTomlConfig {
        self.pointing.clone().unwrap_or_default()
    }

    /// Resolve the `[pointing]` section into the runtime [`UserConfig`].
    ///
    /// A missing section resolves like an empty one. Layers are only resolved
    /// for the features that are turned on.
    pub fn get_user_config(&self) -> ConfigResult<UserConfig> {
        let pointing = self.pointing_config();

        let auto_sniping_layer = if pointing.enabled && pointing.auto_sniping {
            Some(self.resolve_layer("pointing.auto_sniping_layer", &pointing.auto_sniping_layer)?)
        } else {
            None
        };
        let auto_mouse_layer = if pointing.enabled && pointing.auto_mouse {
            self.resolve_layer("pointing.auto_mouse_layer", &pointing.auto_mouse_layer)?
        } else {
            Layer::AutoMouse.index()
        };

        Ok(UserConfig {
            pointing: PointingConfig {
                enabled: pointing.enabled,
                combined: pointing.combined,
                auto_sniping_layer,
                auto_mouse: AutoMouseConfig {
                    enabled: pointing.auto_mouse,
                    layer: auto_mouse_layer,
                },
                left_cpi: pointing.left_cpi,
                right_cpi: pointing.right_cpi,
                scroll: ScrollConfig {
                    divisor_h: pointing.scroll_divisor_h,
                    divisor_v: pointing.scroll_divisor_v,
                },
                scroll_side: pointing.scroll_side.into(),
            },
        })
    }

    /// Layer number of `layer`, which must exist in the keymap
    pub(crate) fn resolve_layer(&self, field: &str, layer: &LayerRef) -> ConfigResult<u8> {
        let index = match layer {
            LayerRef::Number(n) => Some(*n),
            LayerRef::Name(name) => resolve_layer_name(name, &self.layer_names()?),
        };
        match index {
            Some(index) if index < self.num_layers() => Ok(index),
            _ => Err(ConfigError::UnknownLayer {
                layer: match layer {
                    LayerRef::Number(n) => format!("{} in {}", n, field),
                    LayerRef::Name(name) => format!("{} in {}", name, field),
                },
            }),
        }
    }
}
