use crate::config::UserConfig;
use crate::layer::LayerState;
use crate::types::action::KeyAction;

/// Keymap represents the stack of layers.
///
/// The conception of Keymap is borrowed from qmk: <https://docs.qmk.fm/#/keymap>.
///
/// Keymap should be binded to the actual pcb matrix definition.
/// The firmware detects hardware key strokes, uses tuple `(row, col, layer)` to retrieve the action from Keymap.
pub struct Keymap<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> {
    /// Layers
    layers: &'a mut [[[KeyAction; COL]; ROW]; NUM_LAYER],
    /// Default layer number, max: 32
    default_layer: u8,
}

impl<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> Keymap<'a, ROW, COL, NUM_LAYER> {
    pub fn new(layers: &'a mut [[[KeyAction; COL]; ROW]; NUM_LAYER], config: &UserConfig) -> Self {
        let mut keymap = Self {
            layers,
            default_layer: 0,
        };
        if !config.pointing.enabled {
            keymap.disable_pointer_keys();
        }
        keymap
    }

    pub fn get_keymap_config(&self) -> (usize, usize, usize) {
        (ROW, COL, NUM_LAYER)
    }

    pub fn get_default_layer(&self) -> u8 {
        self.default_layer
    }

    pub fn set_default_layer(&mut self, layer_num: u8) {
        if layer_num as usize >= NUM_LAYER {
            warn!(
                "Not a valid layer {}, keyboard supports only {} layers",
                layer_num, NUM_LAYER
            );
            return;
        }
        self.default_layer = layer_num;
    }

    pub fn set_action_at(&mut self, row: usize, col: usize, layer_num: usize, action: KeyAction) {
        match self.layers.get_mut(layer_num).and_then(|l| l.get_mut(row)).and_then(|r| r.get_mut(col)) {
            Some(slot) => *slot = action,
            None => warn!("Position ({}, {}) on layer {} is out of the keymap", row, col, layer_num),
        }
    }

    /// Fetch the action stored at a position, no layer resolution
    pub fn get_action_at(&self, row: usize, col: usize, layer_num: usize) -> KeyAction {
        self.layers
            .get(layer_num)
            .and_then(|l| l.get(row))
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(KeyAction::No)
    }

    /// Resolve the action at `(row, col)` for the active layers in `state`.
    ///
    /// Active layers are checked from the highest to the default layer, transparent keys fall through.
    pub fn action_at(&self, row: usize, col: usize, state: LayerState) -> KeyAction {
        if row >= ROW || col >= COL {
            warn!("Position ({}, {}) is out of the keymap", row, col);
            return KeyAction::No;
        }

        // Iterate from higher layer to lower layer, the lowest checked layer is the default layer
        for (layer_idx, layer) in self.layers.iter().enumerate().rev() {
            if self.layer_active(state, layer_idx) {
                let action = layer[row][col];
                if action == KeyAction::Transparent {
                    continue;
                }
                return action;
            }

            if layer_idx as u8 == self.default_layer {
                // No action
                break;
            }
        }

        KeyAction::No
    }

    /// Highest layer that's active in `state`
    pub fn get_activated_layer(&self, state: LayerState) -> u8 {
        for layer_idx in (0..NUM_LAYER).rev() {
            if self.layer_active(state, layer_idx) {
                return layer_idx as u8;
            }
        }

        self.default_layer
    }

    fn layer_active(&self, state: LayerState, layer_idx: usize) -> bool {
        layer_idx as u8 == self.default_layer || (state.bits() != 0 && state.is_on(layer_idx as u8))
    }

    /// Replace pointer-feature keys with `No`, used when no pointing device is attached
    fn disable_pointer_keys(&mut self) {
        let mut disabled = 0usize;
        for layer in self.layers.iter_mut() {
            for row in layer.iter_mut() {
                for action in row.iter_mut() {
                    if action.uses_pointer_key() {
                        *action = KeyAction::No;
                        disabled += 1;
                    }
                }
            }
        }
        debug!("Pointing disabled, removed {} pointer keys from keymap", disabled);
    }
}
