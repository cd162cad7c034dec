//! Callbacks the firmware framework invokes from its event loop.
//!
//! All of them run synchronously on the framework's single thread, so
//! [`UserHooks`] owns its state and takes `&mut self` everywhere.

use usbd_hid::descriptor::MouseReport;

use crate::config::UserConfig;
use crate::layer::LayerState;
use crate::pointing::{PointingHost, ScrollAccumulator, Side, combine_reports};

/// User-level keymap hooks: auto sniping, sensor setup and split scrolling.
pub struct UserHooks {
    config: UserConfig,
    scroll: ScrollAccumulator,
    /// Half whose motion is turned into scrolling
    scroll_side: Side,
}

impl UserHooks {
    pub fn new(config: UserConfig) -> Self {
        let scroll_side = config.pointing.scroll_side;
        if !(config.pointing.enabled && config.pointing.combined) {
            warn!("No combined pointing devices, pointing reports are merged without scrolling");
        }
        Self {
            config,
            scroll: ScrollAccumulator::new(),
            scroll_side,
        }
    }

    pub fn config(&self) -> &UserConfig {
        &self.config
    }

    pub fn scroll_accumulator(&self) -> &ScrollAccumulator {
        &self.scroll
    }

    pub fn scroll_side(&self) -> Side {
        self.scroll_side
    }

    pub fn set_scroll_side(&mut self, side: Side) {
        debug!("Scroll side set to {:?}", side);
        self.scroll_side = side;
    }

    /// Swap the scrolling half and the pointing half
    pub fn toggle_scroll_side(&mut self) {
        self.set_scroll_side(self.scroll_side.opposite());
    }

    /// Called on every layer state change, returns the state for further chaining.
    pub fn layer_state_set<H: PointingHost>(&mut self, host: &mut H, state: LayerState) -> LayerState {
        match self.config.pointing.auto_sniping() {
            Some(sniping) => sniping.on_layer_state_change(host, state),
            None => state,
        }
    }

    /// Called once after the keyboard is initialized.
    pub fn keyboard_post_init<H: PointingHost>(&mut self, host: &mut H) {
        let pointing = &self.config.pointing;
        if !(pointing.enabled && pointing.combined) {
            return;
        }
        for side in [Side::Right, Side::Left] {
            let cpi = pointing.cpi(side);
            info!("Set {:?} sensor CPI to {}", side, cpi);
            host.set_cpi_on_side(side, cpi);
        }
    }

    /// Called once when the pointing device is initialized.
    pub fn pointing_device_init<H: PointingHost>(&mut self, host: &mut H) {
        let pointing = &self.config.pointing;
        if !pointing.enabled || !pointing.auto_mouse.enabled {
            return;
        }
        info!("Enable auto mouse layer {}", pointing.auto_mouse.layer);
        host.set_auto_mouse_layer(pointing.auto_mouse.layer);
        host.set_auto_mouse_enable(true);
    }

    /// Called on every pointing tick with the raw reports of both halves.
    ///
    /// The scroll-side half is turned into scrolling, then both halves are merged.
    pub fn pointing_device_task_combined(&mut self, left: MouseReport, right: MouseReport) -> MouseReport {
        let pointing = &self.config.pointing;
        if !(pointing.enabled && pointing.combined) {
            return combine_reports(left, right);
        }
        self.scroll
            .process_combined(&pointing.scroll, self.scroll_side, left, right)
    }
}

impl Default for UserHooks {
    fn default() -> Self {
        Self::new(UserConfig::default())
    }
}
