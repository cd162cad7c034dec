use core::ops::BitOr;

use bitfield_struct::bitfield;

/// To represent all combinations of modifiers, at least 5 bits are needed.
/// 1 bit for Left/Right, 4 bits for modifier type. Represented in LSB format.
///
/// | bit4 | bit3 | bit2 | bit1 | bit0 |
/// | --- | --- | --- | --- | --- |
/// | L/R | GUI | ALT |SHIFT| CTRL|
#[bitfield(u8, order = Lsb, defmt = cfg(feature = "defmt"))]
#[derive(Eq, PartialEq)]
pub struct ModifierCombination {
    #[bits(1)]
    pub ctrl: bool,
    #[bits(1)]
    pub shift: bool,
    #[bits(1)]
    pub alt: bool,
    #[bits(1)]
    pub gui: bool,
    #[bits(1)]
    pub right: bool,
    #[bits(3)]
    _reserved: u8,
}

impl BitOr for ModifierCombination {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.into_bits() | rhs.into_bits())
    }
}

impl ModifierCombination {
    pub const LCTRL: Self = Self::new_from(false, false, false, false, true);
    pub const LSHIFT: Self = Self::new_from(false, false, false, true, false);
    pub const LALT: Self = Self::new_from(false, false, true, false, false);
    pub const LGUI: Self = Self::new_from(false, true, false, false, false);
    pub const RCTRL: Self = Self::new_from(true, false, false, false, true);
    pub const RSHIFT: Self = Self::new_from(true, false, false, true, false);
    pub const RALT: Self = Self::new_from(true, false, true, false, false);
    pub const RGUI: Self = Self::new_from(true, true, false, false, false);

    pub const fn new_from(right: bool, gui: bool, alt: bool, shift: bool, ctrl: bool) -> Self {
        ModifierCombination::new()
            .with_right(right)
            .with_gui(gui)
            .with_alt(alt)
            .with_shift(shift)
            .with_ctrl(ctrl)
    }

    /// No modifier is set. The side bit alone doesn't count.
    pub const fn is_empty(self) -> bool {
        !(self.ctrl() || self.shift() || self.alt() || self.gui())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_combination_bits() {
        assert_eq!(ModifierCombination::LCTRL.into_bits(), 0b0_0001);
        assert_eq!(ModifierCombination::RSHIFT.into_bits(), 0b1_0010);
        assert_eq!(ModifierCombination::LGUI.into_bits(), 0b0_1000);
    }

    #[test]
    fn test_bitor_merges() {
        let m = ModifierCombination::LCTRL | ModifierCombination::LSHIFT;
        assert!(m.ctrl());
        assert!(m.shift());
        assert!(!m.alt());
        assert!(!m.right());
    }

    #[test]
    fn test_empty() {
        assert!(ModifierCombination::new().is_empty());
        assert!(ModifierCombination::new().with_right(true).is_empty());
        assert!(!ModifierCombination::RALT.is_empty());
    }
}
