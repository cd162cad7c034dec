//! Parse a single normalized key string, e.g. `LT(3, Space)`, into a [`KeyAction`].
//!
//! Aliases and layer names are already resolved by the keymap parser, so layers
//! are plain numbers here.

use charybdis_types::action::{Action, KeyAction};
use charybdis_types::keycode::KeyCode;
use charybdis_types::modifier::ModifierCombination;

use crate::KEYCODE_ALIAS;
use crate::error::{ConfigError, ConfigResult};

pub fn parse_key(key: &str, num_layers: u8) -> ConfigResult<KeyAction> {
    let key = key.trim();
    if key == "__" {
        return Ok(KeyAction::Transparent);
    }
    if key == "No" || (!key.is_empty() && key.trim_start_matches('_').is_empty()) {
        return Ok(KeyAction::No);
    }

    if let Some(internal) = function_args(key, "MO(") {
        let layer = parse_layer(internal, num_layers)?;
        return Ok(KeyAction::Single(Action::LayerOn(layer)));
    }
    if let Some(internal) = function_args(key, "TG(") {
        let layer = parse_layer(internal, num_layers)?;
        return Ok(KeyAction::Single(Action::LayerToggle(layer)));
    }
    if let Some(internal) = function_args(key, "LT(") {
        let (layer, keycode) = two_args(key, internal)?;
        let layer = parse_layer(layer, num_layers)?;
        let keycode = parse_keycode(keycode)?;
        return Ok(KeyAction::TapHold(Action::Key(keycode), Action::LayerOn(layer)));
    }
    if let Some(internal) = function_args(key, "OSM(") {
        let modifiers = parse_modifiers(internal)?;
        return Ok(KeyAction::OneShot(Action::Modifier(modifiers)));
    }
    if let Some(internal) = function_args(key, "MT(") {
        let (keycode, modifiers) = two_args(key, internal)?;
        return Ok(KeyAction::TapHold(
            Action::Key(parse_keycode(keycode)?),
            Action::Modifier(parse_modifiers(modifiers)?),
        ));
    }
    if let Some(internal) = function_args(key, "WM(") {
        let (keycode, modifiers) = two_args(key, internal)?;
        return Ok(KeyAction::Single(Action::KeyWithModifier(
            parse_keycode(keycode)?,
            parse_modifiers(modifiers)?,
        )));
    }
    if let Some(internal) = function_args(key, "SHIFTED(") {
        return Ok(KeyAction::Single(Action::KeyWithModifier(
            parse_keycode(internal)?,
            ModifierCombination::LSHIFT,
        )));
    }

    Ok(KeyAction::Single(Action::Key(parse_keycode(key)?)))
}

/// Resolve a keycode name: exact variant name first, then the alias table
pub fn parse_keycode(name: &str) -> ConfigResult<KeyCode> {
    let name = name.trim();
    KeyCode::from_name(name)
        .or_else(|| {
            KEYCODE_ALIAS
                .get(name)
                .or_else(|| KEYCODE_ALIAS.get(name.to_lowercase().as_str()))
                .and_then(|canonical| KeyCode::from_name(canonical))
        })
        .ok_or_else(|| ConfigError::UnknownKey { key: name.to_string() })
}

/// Parse modifier combination, in types of mod1 | mod2 | ...
pub fn parse_modifiers(modifiers: &str) -> ConfigResult<ModifierCombination> {
    let mut combination = ModifierCombination::new();
    for m in modifiers.split('|').map(str::trim) {
        combination = combination
            | match m {
                "LShift" | "lsft" => ModifierCombination::LSHIFT,
                "LCtrl" | "lctl" => ModifierCombination::LCTRL,
                "LAlt" | "lalt" => ModifierCombination::LALT,
                "LGui" | "lgui" => ModifierCombination::LGUI,
                "RShift" | "rsft" => ModifierCombination::RSHIFT,
                "RCtrl" | "rctl" => ModifierCombination::RCTRL,
                "RAlt" | "ralt" => ModifierCombination::RALT,
                "RGui" | "rgui" => ModifierCombination::RGUI,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        field: "modifier".to_string(),
                        value: m.to_string(),
                        expected: "one of LShift, LCtrl, LAlt, LGui, RShift, RCtrl, RAlt, RGui".to_string(),
                    });
                }
            };
    }
    Ok(combination)
}

fn parse_layer(layer: &str, num_layers: u8) -> ConfigResult<u8> {
    let layer = layer.trim();
    match layer.parse::<u8>() {
        Ok(l) if l < num_layers => Ok(l),
        _ => Err(ConfigError::UnknownLayer {
            layer: layer.to_string(),
        }),
    }
}

/// Arguments between `prefix` and the closing parenthesis
fn function_args<'a>(key: &'a str, prefix: &str) -> Option<&'a str> {
    key.strip_prefix(prefix).and_then(|k| k.strip_suffix(')'))
}

fn two_args<'a>(key: &str, internal: &'a str) -> ConfigResult<(&'a str, &'a str)> {
    internal
        .split_once(',')
        .map(|(a, b)| (a.trim(), b.trim()))
        .filter(|(a, b)| !a.is_empty() && !b.is_empty())
        .ok_or_else(|| ConfigError::InvalidValue {
            field: "layer.keys".to_string(),
            value: key.to_string(),
            expected: "two arguments".to_string(),
        })
}
