//! Keyboard actions.
//!
//! - [`Action`] - Single operations that the keyboard sends or executes
//! - [`KeyAction`] - What a key position does: single, one-shot or tap/hold

use crate::keycode::KeyCode;
use crate::modifier::ModifierCombination;

/// A KeyAction is the action at a keyboard position, stored in keymap.
/// It can be a single action like triggering a key, or a composite keyboard action like tap/hold
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyAction {
    /// No action.
    No,
    /// Transparent action, next layer will be checked.
    Transparent,
    /// A single action, such as triggering a key, or activating a layer. Action is triggered when pressed and cancelled when released.
    Single(Action),
    /// Keep current action active until the next key is triggered.
    OneShot(Action),
    /// General tap/hold action: (tap_action, hold_action)
    TapHold(Action, Action),
}

impl KeyAction {
    /// Convert `KeyAction` to the internal `Action`.
    /// Only valid for `Single` and `OneShot` variant, returns `Action::No` for other variants.
    pub fn to_action(self) -> Action {
        match self {
            KeyAction::Single(a) | KeyAction::OneShot(a) => a,
            _ => Action::No,
        }
    }

    /// The action performed on tap, for tap/hold keys, or the action itself otherwise
    pub fn tap_action(self) -> Action {
        match self {
            KeyAction::TapHold(tap, _) => tap,
            other => other.to_action(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, KeyAction::No)
    }

    /// Whether any part of this action emits a pointer-feature key
    pub fn uses_pointer_key(&self) -> bool {
        match self {
            KeyAction::Single(a) | KeyAction::OneShot(a) => a.is_pointer_key(),
            KeyAction::TapHold(tap, hold) => tap.is_pointer_key() || hold.is_pointer_key(),
            KeyAction::No | KeyAction::Transparent => false,
        }
    }
}

/// A single basic action that a keyboard can execute.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Default action, no action.
    No,
    /// A normal key stroke, uses for all keycodes defined in `KeyCode` enum.
    Key(KeyCode),
    /// Modifier Combination, used for oneshot and mod-tap keys.
    Modifier(ModifierCombination),
    /// Key stroke with modifier combination triggered.
    KeyWithModifier(KeyCode, ModifierCombination),
    /// Activate a layer
    LayerOn(u8),
    /// Toggle a layer
    LayerToggle(u8),
}

impl Action {
    pub fn is_pointer_key(&self) -> bool {
        match self {
            Action::Key(k) | Action::KeyWithModifier(k, _) => k.is_pointer(),
            _ => false,
        }
    }

    /// The layer this action activates or toggles, if any
    pub fn layer(&self) -> Option<u8> {
        match self {
            Action::LayerOn(l) | Action::LayerToggle(l) => Some(*l),
            _ => None,
        }
    }
}
