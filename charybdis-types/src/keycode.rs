//! Keycode definitions.
//!
//! [`KeyCode`] groups four pages: plain HID keyboard usages, consumer (media)
//! keys, pointer-feature keys handled by the keyboard's pointing-device code,
//! and firmware keys handled by the framework itself.

use core::str::FromStr;

use strum::{EnumString, FromRepr, IntoStaticStr};

// Key codes defined in HID spec, plus the mouse key range used by the framework
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, FromRepr, EnumString, IntoStaticStr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HidKeyCode {
    /// Reserved, no-key.
    No = 0x00,
    /// `a` and `A`
    A = 0x04,
    B = 0x05,
    C = 0x06,
    D = 0x07,
    E = 0x08,
    F = 0x09,
    G = 0x0A,
    H = 0x0B,
    I = 0x0C,
    J = 0x0D,
    K = 0x0E,
    L = 0x0F,
    M = 0x10,
    N = 0x11,
    O = 0x12,
    P = 0x13,
    Q = 0x14,
    R = 0x15,
    S = 0x16,
    T = 0x17,
    U = 0x18,
    V = 0x19,
    W = 0x1A,
    X = 0x1B,
    Y = 0x1C,
    /// `z` and `Z`
    Z = 0x1D,
    /// `1` and `!`
    Kc1 = 0x1E,
    /// `2` and `@`
    Kc2 = 0x1F,
    /// `3` and `#`
    Kc3 = 0x20,
    /// `4` and `$`
    Kc4 = 0x21,
    /// `5` and `%`
    Kc5 = 0x22,
    /// `6` and `^`
    Kc6 = 0x23,
    /// `7` and `&`
    Kc7 = 0x24,
    /// `8` and `*`
    Kc8 = 0x25,
    /// `9` and `(`
    Kc9 = 0x26,
    /// `0` and `)`
    Kc0 = 0x27,
    Enter = 0x28,
    Escape = 0x29,
    Backspace = 0x2A,
    Tab = 0x2B,
    Space = 0x2C,
    /// `-` and `_`
    Minus = 0x2D,
    /// `=` and `+`
    Equal = 0x2E,
    /// `[` and `{`
    LeftBracket = 0x2F,
    /// `]` and `}`
    RightBracket = 0x30,
    /// `\` and `|`
    Backslash = 0x31,
    /// `;` and `:`
    Semicolon = 0x33,
    /// `'` and `"`
    Quote = 0x34,
    /// `` ` `` and `~`
    Grave = 0x35,
    /// `,` and `<`
    Comma = 0x36,
    /// `.` and `>`
    Dot = 0x37,
    /// `/` and `?`
    Slash = 0x38,
    CapsLock = 0x39,
    F1 = 0x3A,
    F2 = 0x3B,
    F3 = 0x3C,
    F4 = 0x3D,
    F5 = 0x3E,
    F6 = 0x3F,
    F7 = 0x40,
    F8 = 0x41,
    F9 = 0x42,
    F10 = 0x43,
    F11 = 0x44,
    F12 = 0x45,
    PrintScreen = 0x46,
    ScrollLock = 0x47,
    Pause = 0x48,
    Insert = 0x49,
    Home = 0x4A,
    PageUp = 0x4B,
    Delete = 0x4C,
    End = 0x4D,
    PageDown = 0x4E,
    Right = 0x4F,
    Left = 0x50,
    Down = 0x51,
    Up = 0x52,
    NumLock = 0x53,
    Application = 0x65,
    /// Mouse Button 1(Left)
    MouseBtn1 = 0xD1,
    /// Mouse Button 2(Right)
    MouseBtn2 = 0xD2,
    /// Mouse Button 3(Middle)
    MouseBtn3 = 0xD3,
    /// Mouse Button 4(Back)
    MouseBtn4 = 0xD4,
    /// Mouse Button 5(Forward)
    MouseBtn5 = 0xD5,
    LCtrl = 0xE0,
    LShift = 0xE1,
    LAlt = 0xE2,
    LGui = 0xE3,
    RCtrl = 0xE4,
    RShift = 0xE5,
    RAlt = 0xE6,
    RGui = 0xE7,
}

impl HidKeyCode {
    pub fn is_modifier(self) -> bool {
        HidKeyCode::LCtrl <= self && self <= HidKeyCode::RGui
    }

    pub fn is_mouse_button(self) -> bool {
        HidKeyCode::MouseBtn1 <= self && self <= HidKeyCode::MouseBtn5
    }

    /// Bit index in the mouse report's button mask
    pub fn mouse_button_index(self) -> Option<u8> {
        if self.is_mouse_button() {
            Some(self as u8 - HidKeyCode::MouseBtn1 as u8)
        } else {
            None
        }
    }
}

impl From<u8> for HidKeyCode {
    fn from(value: u8) -> Self {
        Self::from_repr(value).unwrap_or(HidKeyCode::No)
    }
}

/// Keys in consumer page
/// Ref: <https://www.usb.org/sites/default/files/documents/hut1_12v2.pdf#page=75>
#[repr(u16)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, FromRepr, EnumString, IntoStaticStr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConsumerKey {
    No = 0x00,
    PlayPause = 0xCD,
    NextTrack = 0xB5,
    PrevTrack = 0xB6,
    StopPlay = 0xB7,
    Mute = 0xE2,
    VolumeIncrement = 0xE9,
    VolumeDecrement = 0xEA,
}

/// Keys owned by the keyboard's pointing-device code.
///
/// The keymap only places them; cycling DPI, sniping and drag-scroll are
/// implemented by the host firmware.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, FromRepr, EnumString, IntoStaticStr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PointerKey {
    /// Cycle the default DPI forward, reverse when shifted
    DpiMod,
    /// Cycle the sniping DPI forward, reverse when shifted
    SnipingDpiMod,
    /// Momentary sniping mode
    Sniping,
    /// Momentary drag-scroll mode
    DragScroll,
}

/// Keys handled by the firmware framework
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, FromRepr, EnumString, IntoStaticStr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FirmwareKey {
    /// Jump to bootloader
    Bootloader,
    /// Clear the persistent configuration
    EepromClear,
    RgbToggle,
    RgbModeForward,
    RgbModeReverse,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyCode {
    Hid(HidKeyCode),
    Consumer(ConsumerKey),
    Pointer(PointerKey),
    Firmware(FirmwareKey),
}

impl KeyCode {
    /// Look a keycode up by its variant name, e.g. `"Space"`, `"Mute"` or `"DragScroll"`.
    ///
    /// Names are matched exactly; aliases are resolved by `charybdis-config`.
    pub fn from_name(name: &str) -> Option<Self> {
        if let Ok(k) = HidKeyCode::from_str(name) {
            Some(KeyCode::Hid(k))
        } else if let Ok(k) = ConsumerKey::from_str(name) {
            Some(KeyCode::Consumer(k))
        } else if let Ok(k) = PointerKey::from_str(name) {
            Some(KeyCode::Pointer(k))
        } else if let Ok(k) = FirmwareKey::from_str(name) {
            Some(KeyCode::Firmware(k))
        } else {
            None
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            KeyCode::Hid(k) => k.into(),
            KeyCode::Consumer(k) => k.into(),
            KeyCode::Pointer(k) => k.into(),
            KeyCode::Firmware(k) => k.into(),
        }
    }

    pub fn is_pointer(&self) -> bool {
        matches!(self, KeyCode::Pointer(_))
    }
}

impl From<HidKeyCode> for KeyCode {
    fn from(k: HidKeyCode) -> Self {
        KeyCode::Hid(k)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(KeyCode::from_name("Space"), Some(KeyCode::Hid(HidKeyCode::Space)));
        assert_eq!(KeyCode::from_name("Mute"), Some(KeyCode::Consumer(ConsumerKey::Mute)));
        assert_eq!(
            KeyCode::from_name("DragScroll"),
            Some(KeyCode::Pointer(PointerKey::DragScroll))
        );
        assert_eq!(
            KeyCode::from_name("Bootloader"),
            Some(KeyCode::Firmware(FirmwareKey::Bootloader))
        );
        assert_eq!(KeyCode::from_name("space"), None);
        assert_eq!(KeyCode::from_name("NotAKey"), None);
    }

    #[test]
    fn test_name_roundtrip() {
        let k = KeyCode::Hid(HidKeyCode::LeftBracket);
        assert_eq!(k.name(), "LeftBracket");
        assert_eq!(KeyCode::from_name(k.name()), Some(k));
    }

    #[test]
    fn test_mouse_button_index() {
        assert_eq!(HidKeyCode::MouseBtn1.mouse_button_index(), Some(0));
        assert_eq!(HidKeyCode::MouseBtn3.mouse_button_index(), Some(2));
        assert_eq!(HidKeyCode::A.mouse_button_index(), None);
    }

    #[test]
    fn test_from_u8() {
        assert_eq!(HidKeyCode::from(0x2C), HidKeyCode::Space);
        assert_eq!(HidKeyCode::from(0x02), HidKeyCode::No);
        assert!(HidKeyCode::RShift.is_modifier());
        assert!(!HidKeyCode::Z.is_modifier());
    }
}
