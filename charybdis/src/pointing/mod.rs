//! Pointing-device behavior of the split trackball pair

pub mod combine;
pub mod scroll;
pub mod sniping;

pub use combine::combine_reports;
pub use scroll::{ScrollAccumulator, ScrollConfig};
pub use sniping::AutoSniping;

/// Physical half of the split keyboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Side {
    #[default]
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    pub fn is_left(self) -> bool {
        self == Side::Left
    }
}

/// Pointing services provided by the firmware framework.
///
/// All calls are fire-and-forget register writes on the host side, so none of
/// them can fail.
pub trait PointingHost {
    /// Enable or disable the sensor's reduced-sensitivity sniping mode
    fn set_pointer_sniping_enabled(&mut self, enabled: bool);
    /// Set the resolution of the sensor on `side`
    fn set_cpi_on_side(&mut self, side: Side, cpi: u16);
    /// Layer the host activates automatically on sensor motion
    fn set_auto_mouse_layer(&mut self, layer: u8);
    fn set_auto_mouse_enable(&mut self, enabled: bool);
}
