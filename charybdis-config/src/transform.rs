//! Layer-wide key transforms, applied to a layer's key sequence before it's
//! placed into the matrix.
//!
//! Both expect a layout of 10 keys per row.

use charybdis_types::action::{Action, KeyAction};
use charybdis_types::modifier::ModifierCombination;

use crate::error::{ConfigError, ConfigResult};

/// GACS home-row mods, `(sequence index, hold modifier)`.
///
/// Keys 14 and 15 on the inner columns are left unchanged.
const HOME_ROW_MODS: [(usize, ModifierCombination); 8] = [
    (10, ModifierCombination::LSHIFT),
    (11, ModifierCombination::LCTRL),
    (12, ModifierCombination::LALT),
    (13, ModifierCombination::LGUI),
    (16, ModifierCombination::RGUI),
    (17, ModifierCombination::LALT),
    (18, ModifierCombination::RCTRL),
    (19, ModifierCombination::RSHIFT),
];

/// Outer keys of the bottom row, held for the pointer layer
const POINTER_MOD_KEYS: [usize; 2] = [20, 29];

/// Turn the second row into modifiers on hold
pub fn home_row_mods(layer_name: &str, keys: &mut [KeyAction]) -> ConfigResult<()> {
    require_keys(layer_name, "home_row_mods", keys, 20)?;
    for (index, modifier) in HOME_ROW_MODS {
        keys[index] = hold(layer_name, keys[index], Action::Modifier(modifier))?;
    }
    Ok(())
}

/// Activate `pointer_layer` while holding the outer keys of the third row
pub fn pointer_mod(layer_name: &str, keys: &mut [KeyAction], pointer_layer: u8) -> ConfigResult<()> {
    require_keys(layer_name, "pointer_mod", keys, 30)?;
    for index in POINTER_MOD_KEYS {
        keys[index] = hold(layer_name, keys[index], Action::LayerOn(pointer_layer))?;
    }
    Ok(())
}

fn require_keys(layer_name: &str, transform: &str, keys: &[KeyAction], min: usize) -> ConfigResult<()> {
    if keys.len() < min {
        return Err(ConfigError::Validation {
            field: format!("layer.{}.{}", layer_name, transform),
            message: format!("requires at least {} keys, got {}", min, keys.len()),
        });
    }
    Ok(())
}

/// Add `hold_action` to a key, the key's own action is kept for tapping
fn hold(layer_name: &str, key: KeyAction, hold_action: Action) -> ConfigResult<KeyAction> {
    match key {
        KeyAction::Single(tap) => Ok(KeyAction::TapHold(tap, hold_action)),
        KeyAction::No => Ok(KeyAction::TapHold(Action::No, hold_action)),
        other => Err(ConfigError::Validation {
            field: format!("layer.{}", layer_name),
            message: format!("{:?} already has a hold action or is transparent", other),
        }),
    }
}

#[cfg(test)]
mod test {
    use charybdis_types::keycode::{HidKeyCode, KeyCode};

    use super::*;

    fn row_keys(n: usize) -> Vec<KeyAction> {
        (0..n)
            .map(|i| {
                let k = HidKeyCode::from(HidKeyCode::A as u8 + (i % 26) as u8);
                KeyAction::Single(Action::Key(KeyCode::Hid(k)))
            })
            .collect()
    }

    #[test]
    fn test_home_row_mods() {
        let mut keys = row_keys(30);
        let original = keys.clone();
        home_row_mods("base", &mut keys).unwrap();

        assert_eq!(
            keys[10],
            KeyAction::TapHold(original[10].to_action(), Action::Modifier(ModifierCombination::LSHIFT))
        );
        assert_eq!(
            keys[13],
            KeyAction::TapHold(original[13].to_action(), Action::Modifier(ModifierCombination::LGUI))
        );
        assert_eq!(
            keys[17],
            KeyAction::TapHold(original[17].to_action(), Action::Modifier(ModifierCombination::LALT))
        );
        assert_eq!(
            keys[19],
            KeyAction::TapHold(original[19].to_action(), Action::Modifier(ModifierCombination::RSHIFT))
        );
        assert_eq!(keys[14], original[14]);
        assert_eq!(keys[15], original[15]);
        assert_eq!(keys[..10], original[..10]);
        assert_eq!(keys[20..], original[20..]);
    }

    #[test]
    fn test_pointer_mod() {
        let mut keys = row_keys(35);
        let original = keys.clone();
        pointer_mod("base", &mut keys, 3).unwrap();

        assert_eq!(keys[20], KeyAction::TapHold(original[20].to_action(), Action::LayerOn(3)));
        assert_eq!(keys[29], KeyAction::TapHold(original[29].to_action(), Action::LayerOn(3)));
        assert_eq!(keys[21..29], original[21..29]);
        assert_eq!(keys[30..], original[30..]);
    }

    #[test]
    fn test_too_few_keys() {
        let mut keys = row_keys(19);
        assert!(matches!(
            home_row_mods("base", &mut keys),
            Err(ConfigError::Validation { .. })
        ));
        let mut keys = row_keys(29);
        assert!(matches!(
            pointer_mod("base", &mut keys, 3),
            Err(ConfigError::Validation { .. })
        ));
    }

    #[test]
    fn test_no_key_gets_hold() {
        let mut keys = row_keys(20);
        keys[11] = KeyAction::No;
        home_row_mods("base", &mut keys).unwrap();
        assert_eq!(
            keys[11],
            KeyAction::TapHold(Action::No, Action::Modifier(ModifierCombination::LCTRL))
        );
    }

    #[test]
    fn test_transparent_key_rejected() {
        let mut keys = row_keys(20);
        keys[12] = KeyAction::Transparent;
        assert!(home_row_mods("base", &mut keys).is_err());
    }
}
