//! Validation of keyboard.toml, run once when the config is loaded

use charybdis::layer::LayerState;

use crate::KeyboardTomlConfig;
use crate::error::{ConfigError, ConfigResult};

/// Sensor resolution range supported by the PMW33xx sensors
pub const CPI_RANGE: core::ops::RangeInclusive<u16> = 100..=12000;

/// Validates the entire keyboard configuration
pub fn validate_config(config: &KeyboardTomlConfig) -> ConfigResult<()> {
    validate_layout_section(config)?;
    validate_pointing_section(config)?;
    Ok(())
}

/// Validates the [layout] section and [[layer]] entries
fn validate_layout_section(config: &KeyboardTomlConfig) -> ConfigResult<()> {
    if let Some(layout) = &config.layout {
        for (field, value) in [("rows", layout.rows), ("cols", layout.cols), ("layers", layout.layers)] {
            if value == 0 {
                return Err(ConfigError::InvalidValue {
                    field: format!("layout.{}", field),
                    value: value.to_string(),
                    expected: "a positive number".to_string(),
                });
            }
        }
        if layout.layers > LayerState::MAX_LAYERS {
            return Err(ConfigError::InvalidValue {
                field: "layout.layers".to_string(),
                value: layout.layers.to_string(),
                expected: format!("1 to {}", LayerState::MAX_LAYERS),
            });
        }
    } else if config.layer.is_some() {
        return Err(ConfigError::MissingField {
            field: "layout".to_string(),
        });
    }

    config.layer_names()?;
    Ok(())
}

/// Validates the [pointing] section
fn validate_pointing_section(config: &KeyboardTomlConfig) -> ConfigResult<()> {
    let pointing = config.pointing_config();

    for (field, cpi) in [("pointing.left_cpi", pointing.left_cpi), ("pointing.right_cpi", pointing.right_cpi)] {
        if !CPI_RANGE.contains(&cpi) {
            return Err(ConfigError::InvalidValue {
                field: field.to_string(),
                value: cpi.to_string(),
                expected: format!("{} to {}", CPI_RANGE.start(), CPI_RANGE.end()),
            });
        }
    }

    for (field, divisor) in [
        ("pointing.scroll_divisor_h", pointing.scroll_divisor_h),
        ("pointing.scroll_divisor_v", pointing.scroll_divisor_v),
    ] {
        if !divisor.is_finite() || divisor <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: field.to_string(),
                value: divisor.to_string(),
                expected: "a finite number greater than 0".to_string(),
            });
        }
    }

    // Referenced layers must exist
    config.get_user_config()?;
    Ok(())
}
