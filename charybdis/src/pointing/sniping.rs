use crate::layer::LayerState;
use crate::pointing::PointingHost;

/// Turns sniping mode on while a designated layer is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AutoSniping {
    layer: u8,
}

impl AutoSniping {
    pub const fn new(layer: u8) -> Self {
        Self { layer }
    }

    pub fn layer(&self) -> u8 {
        self.layer
    }

    /// Sniping mode that matches `state`
    pub fn sniping_enabled(&self, state: LayerState) -> bool {
        state.is_on(self.layer)
    }

    /// Push the sniping mode for `state` to the host, then hand `state` back.
    pub fn on_layer_state_change<H: PointingHost>(&self, host: &mut H, state: LayerState) -> LayerState {
        let enabled = self.sniping_enabled(state);
        debug!("Layer state {:#x}: sniping {}", state.bits(), enabled);
        host.set_pointer_sniping_enabled(enabled);
        state
    }
}
