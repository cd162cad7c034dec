use charybdis::pointing::{PointingHost, Side};
use usbd_hid::descriptor::MouseReport;

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

/// A call made into the pointing host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCall {
    Sniping(bool),
    Cpi(Side, u16),
    AutoMouseLayer(u8),
    AutoMouseEnable(bool),
}

/// Records every host call in order
#[derive(Debug, Default)]
pub struct MockHost {
    pub calls: Vec<HostCall>,
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest sniping state set, if any
    pub fn sniping(&self) -> Option<bool> {
        self.calls.iter().rev().find_map(|c| match c {
            HostCall::Sniping(enabled) => Some(*enabled),
            _ => None,
        })
    }
}

impl PointingHost for MockHost {
    fn set_pointer_sniping_enabled(&mut self, enabled: bool) {
        self.calls.push(HostCall::Sniping(enabled));
    }

    fn set_cpi_on_side(&mut self, side: Side, cpi: u16) {
        self.calls.push(HostCall::Cpi(side, cpi));
    }

    fn set_auto_mouse_layer(&mut self, layer: u8) {
        self.calls.push(HostCall::AutoMouseLayer(layer));
    }

    fn set_auto_mouse_enable(&mut self, enabled: bool) {
        self.calls.push(HostCall::AutoMouseEnable(enabled));
    }
}

pub fn report(buttons: u8, x: i8, y: i8) -> MouseReport {
    MouseReport {
        buttons,
        x,
        y,
        wheel: 0,
        pan: 0,
    }
}
