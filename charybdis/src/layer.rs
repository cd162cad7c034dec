/// Layers of the Charybdis Nano keymap, in keymap order.
///
/// Their names are the `name`s of the `[[layer]]` entries in `keyboard.toml`.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Layer {
    Base = 0,
    Numeral = 1,
    Navigation = 2,
    Pointer = 3,
    AutoMouse = 4,
    Media = 5,
    Function = 6,
    Symbols = 7,
}

impl Layer {
    pub const COUNT: usize = 8;

    pub const ALL: [Layer; Layer::COUNT] = [
        Layer::Base,
        Layer::Numeral,
        Layer::Navigation,
        Layer::Pointer,
        Layer::AutoMouse,
        Layer::Media,
        Layer::Function,
        Layer::Symbols,
    ];

    pub const fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    pub const fn name(self) -> &'static str {
        match self {
            Layer::Base => "base",
            Layer::Numeral => "numeral",
            Layer::Navigation => "navigation",
            Layer::Pointer => "pointer",
            Layer::AutoMouse => "automouse",
            Layer::Media => "media",
            Layer::Function => "function",
            Layer::Symbols => "symbols",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|l| l.name() == name)
    }
}

impl From<Layer> for u8 {
    fn from(layer: Layer) -> Self {
        layer.index()
    }
}

/// Bitmask of the currently active layers, bit `n` is layer `n`.
///
/// The firmware owns the state and hands a copy to the layer-change hook.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LayerState(u32);

impl LayerState {
    /// Max number of layers a state can track
    pub const MAX_LAYERS: u8 = 32;

    pub const fn new(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub fn from_layers(layers: &[u8]) -> Self {
        layers.iter().fold(Self::default(), |state, &l| state.with_layer(l))
    }

    /// Set `layer`. Layers out of range are ignored.
    pub fn with_layer(self, layer: u8) -> Self {
        match 1u32.checked_shl(layer as u32) {
            Some(bit) => Self(self.0 | bit),
            None => {
                warn!("Not a valid layer {}, layer state supports only {} layers", layer, Self::MAX_LAYERS);
                self
            }
        }
    }

    /// Clear `layer`. Layers out of range are ignored.
    pub fn without_layer(self, layer: u8) -> Self {
        match 1u32.checked_shl(layer as u32) {
            Some(bit) => Self(self.0 & !bit),
            None => self,
        }
    }

    pub fn toggle_layer(self, layer: u8) -> Self {
        if self.bit_set(layer) {
            self.without_layer(layer)
        } else {
            self.with_layer(layer)
        }
    }

    /// Whether `layer` is active.
    ///
    /// An empty state means only the base layer is active, so layer 0 is
    /// reported on for it.
    pub fn is_on(self, layer: u8) -> bool {
        if self.0 == 0 {
            return layer == 0;
        }
        self.bit_set(layer)
    }

    /// Highest active layer, 0 for an empty state
    pub fn highest_layer(self) -> u8 {
        if self.0 == 0 {
            0
        } else {
            (u32::BITS - 1 - self.0.leading_zeros()) as u8
        }
    }

    fn bit_set(self, layer: u8) -> bool {
        1u32.checked_shl(layer as u32).is_some_and(|bit| self.0 & bit != 0)
    }
}

impl From<u32> for LayerState {
    fn from(bits: u32) -> Self {
        Self(bits)
    }
}
