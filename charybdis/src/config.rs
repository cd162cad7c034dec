use crate::layer::Layer;
use crate::pointing::{AutoSniping, ScrollConfig, Side};

/// Default resolution of the PMW33xx trackball sensors
pub const DEFAULT_CPI: u16 = 1600;

/// Tunable configurations of the keymap, resolved once at startup.
///
/// Each optional feature is a capability flag here instead of a build-time switch.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserConfig {
    pub pointing: PointingConfig,
}

/// Config for the trackball pair
#[derive(Clone, Debug, PartialEq)]
pub struct PointingConfig {
    /// A pointing device is attached
    pub enabled: bool,
    /// Both halves have a sensor and their reports are merged into one
    pub combined: bool,
    /// Layer that turns sniping mode on while active, `None` disables auto sniping
    pub auto_sniping_layer: Option<u8>,
    pub auto_mouse: AutoMouseConfig,
    pub left_cpi: u16,
    pub right_cpi: u16,
    pub scroll: ScrollConfig,
    /// Half that scrolls at startup, the other half moves the cursor
    pub scroll_side: Side,
}

impl Default for PointingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            combined: true,
            auto_sniping_layer: Some(Layer::Pointer.index()),
            auto_mouse: AutoMouseConfig::default(),
            left_cpi: DEFAULT_CPI,
            right_cpi: DEFAULT_CPI,
            scroll: ScrollConfig::default(),
            scroll_side: Side::Left,
        }
    }
}

impl PointingConfig {
    /// Auto sniping, if pointing is enabled and a sniping layer is set
    pub fn auto_sniping(&self) -> Option<AutoSniping> {
        if self.enabled {
            self.auto_sniping_layer.map(AutoSniping::new)
        } else {
            None
        }
    }

    pub fn cpi(&self, side: Side) -> u16 {
        match side {
            Side::Left => self.left_cpi,
            Side::Right => self.right_cpi,
        }
    }
}

/// Config for the host's automatic mouse layer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AutoMouseConfig {
    pub enabled: bool,
    /// Layer activated on sensor motion
    pub layer: u8,
}

impl Default for AutoMouseConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            layer: Layer::AutoMouse.index(),
        }
    }
}
