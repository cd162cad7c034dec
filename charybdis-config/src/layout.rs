use std::collections::HashMap;

use charybdis::layer::Layer;
use charybdis_types::action::KeyAction;
use pest::Parser;
use pest_derive::Parser;

use crate::error::{ConfigError, ConfigResult};
use crate::{KeyboardTomlConfig, LayoutConfig, action_parser, transform};

// Pest parser using the grammar files
#[derive(Parser)]
#[grammar = "keymap.pest"]
struct ConfigParser;

// Max alias resolution depth to prevent infinite loops
const MAX_ALIAS_RESOLUTION_DEPTH: usize = 10;

impl KeyboardTomlConfig {
    /// Resolve `[[layer]]` entries into a `[layer][row][col]` keymap
    pub fn get_layout_config(&self) -> ConfigResult<LayoutConfig> {
        let aliases = self.aliases.clone().unwrap_or_default();
        let layers = self.layer.clone().unwrap_or_default();
        let layout = self.layout.as_ref().ok_or(ConfigError::MissingField {
            field: "layout".to_string(),
        })?;

        // Check alias keys for whitespace
        for key in aliases.keys() {
            if key.chars().any(char::is_whitespace) {
                return Err(ConfigError::Validation {
                    field: format!("aliases.{}", key),
                    message: "alias key must not contain whitespace characters".to_string(),
                });
            }
        }

        // Mapping between the configuration sequence of keys and the electronic grid
        let sequence_to_grid = match &layout.matrix_map {
            Some(matrix_map) => {
                let coords = Self::parse_matrix_map(matrix_map)?;
                let mut occupied = vec![vec![false; layout.cols as usize]; layout.rows as usize];
                for (row, col) in &coords {
                    if *row >= layout.rows || *col >= layout.cols {
                        return Err(ConfigError::Validation {
                            field: "layout.matrix_map".to_string(),
                            message: format!(
                                "coordinate ({},{}) is out of bounds: ([0..{}], [0..{}]) is the expected range",
                                row,
                                col,
                                layout.rows - 1,
                                layout.cols - 1
                            ),
                        });
                    }
                    if occupied[*row as usize][*col as usize] {
                        return Err(ConfigError::Validation {
                            field: "layout.matrix_map".to_string(),
                            message: format!("duplicate coordinate ({},{})", row, col),
                        });
                    }
                    occupied[*row as usize][*col as usize] = true;
                }
                coords
            }
            None if !layers.is_empty() => {
                return Err(ConfigError::MissingField {
                    field: "layout.matrix_map".to_string(),
                });
            }
            None => Vec::new(),
        };

        if layers.len() > layout.layers as usize {
            return Err(ConfigError::Validation {
                field: "layer".to_string(),
                message: format!(
                    "{} [[layer]] entries is larger than layout.layers: {}",
                    layers.len(),
                    layout.layers
                ),
            });
        }

        let layer_names = self.layer_names()?;
        let pointer_layer = resolve_layer_name(Layer::Pointer.name(), &layer_names);

        let mut keymap = Vec::with_capacity(layout.layers as usize);
        for (layer_number, layer) in layers.iter().enumerate() {
            let layer_label = layer.name.clone().unwrap_or_else(|| layer_number.to_string());
            // Each layer contains a sequence of keymap entries,
            // their number and order should match the above parsed matrix map
            let mut actions = Self::keymap_parser(&layer.keys, &aliases, &layer_names)?
                .iter()
                .map(|key| action_parser::parse_key(key, layout.layers))
                .collect::<ConfigResult<Vec<KeyAction>>>()?;

            if layer.home_row_mods {
                transform::home_row_mods(&layer_label, &mut actions)?;
            }
            if layer.pointer_mod {
                let pointer_layer = pointer_layer
                    .filter(|l| *l < layout.layers)
                    .ok_or(ConfigError::UnknownLayer {
                        layer: Layer::Pointer.name().to_string(),
                    })?;
                transform::pointer_mod(&layer_label, &mut actions, pointer_layer)?;
            }

            if actions.len() > sequence_to_grid.len() {
                return Err(ConfigError::Validation {
                    field: format!("layer.{}", layer_label),
                    message: format!(
                        "contains {} entries, layout.matrix_map has {}",
                        actions.len(),
                        sequence_to_grid.len()
                    ),
                });
            }

            let mut grid = vec![vec![KeyAction::No; layout.cols as usize]; layout.rows as usize];
            for (action, (row, col)) in actions.into_iter().zip(sequence_to_grid.iter()) {
                grid[*row as usize][*col as usize] = action;
            }
            keymap.push(grid);
        }

        // Fill the rest with empty keys
        for _ in keymap.len()..layout.layers as usize {
            keymap.push(vec![vec![KeyAction::No; layout.cols as usize]; layout.rows as usize]);
        }

        Ok(LayoutConfig {
            rows: layout.rows,
            cols: layout.cols,
            layers: layout.layers,
            keymap,
        })
    }

    /// Number of layers in the keymap
    pub(crate) fn num_layers(&self) -> u8 {
        self.layout
            .as_ref()
            .map(|l| l.layers)
            .unwrap_or(Layer::COUNT as u8)
    }

    /// Names of `[[layer]]` entries, mapped to their layer numbers
    pub(crate) fn layer_names(&self) -> ConfigResult<HashMap<String, u8>> {
        let mut layer_names = HashMap::new();
        for (layer_number, layer) in self.layer.iter().flatten().enumerate() {
            if let Some(name) = &layer.name {
                if layer_names.insert(name.clone(), layer_number as u8).is_some() {
                    return Err(ConfigError::Validation {
                        field: "layer.name".to_string(),
                        message: format!("duplicate layer name '{}'", name),
                    });
                }
            }
        }
        Ok(layer_names)
    }

    /// Parses and validates a matrix_map string using Pest.
    /// Ensures the string contains only valid coordinates and whitespace.
    fn parse_matrix_map(matrix_map: &str) -> ConfigResult<Vec<(u8, u8)>> {
        let invalid = |message: String| ConfigError::Validation {
            field: "layout.matrix_map".to_string(),
            message,
        };
        let pairs = ConfigParser::parse(Rule::matrix_map, matrix_map)
            .map_err(|e| invalid(format!("invalid format: {}", e)))?;

        let mut coordinates = Vec::new();
        // The top-level pair is 'matrix_map'. We need to iterate its inner content.
        for pair in pairs {
            for inner_pair in pair.into_inner() {
                match inner_pair.as_rule() {
                    Rule::coordinate => {
                        // Should contain two 'number' pairs
                        let mut coord_parts = inner_pair.into_inner();
                        let mut next_number = || -> ConfigResult<u8> {
                            let s = coord_parts
                                .next()
                                .ok_or_else(|| invalid("missing coordinate".to_string()))?
                                .as_str();
                            s.parse::<u8>()
                                .map_err(|e| invalid(format!("failed to parse '{}': {}", s, e)))
                        };
                        let row = next_number()?;
                        let col = next_number()?;
                        coordinates.push((row, col));
                    }
                    Rule::EOI => {}
                    rule => {
                        return Err(invalid(format!("unexpected rule {:?}", rule)));
                    }
                }
            }
        }
        Ok(coordinates)
    }

    fn alias_resolver(keys: &str, aliases: &HashMap<String, String>) -> ConfigResult<String> {
        let mut current_keys = keys.to_string();

        let mut iterations = 0;

        loop {
            let mut next_keys = String::with_capacity(current_keys.capacity());
            let mut made_replacement = false;
            // Keep track of where we are in current_keys
            let mut last_index = 0;

            while let Some(at_index) = current_keys[last_index..].find('@') {
                let start_index = last_index + at_index;

                // Append the text before the '@'
                next_keys.push_str(&current_keys[last_index..start_index]);

                match current_keys.as_bytes().get(start_index + 1) {
                    // A valid alias starts with '@' followed by a non whitespace
                    Some(first_char) if !first_char.is_ascii_whitespace() => {
                        // Find the end of the alias identifier
                        let mut end_index = start_index + 2;
                        while let Some(c) = current_keys.as_bytes().get(end_index) {
                            if c.is_ascii_whitespace() {
                                break;
                            }
                            end_index += 1;
                        }

                        let alias_key = &current_keys[start_index + 1..end_index];
                        match aliases.get(alias_key) {
                            Some(value) => {
                                next_keys.push_str(value);
                                made_replacement = true;
                            }
                            None => {
                                return Err(ConfigError::Validation {
                                    field: "aliases".to_string(),
                                    message: format!("undefined alias: {}", alias_key),
                                });
                            }
                        }
                        last_index = end_index;
                    }
                    // Treat '@' literally
                    _ => {
                        next_keys.push('@');
                        last_index = start_index + 1;
                    }
                }
            }

            // Append any remaining part of the string after the last '@' or if no '@' was found
            next_keys.push_str(&current_keys[last_index..]);

            if !made_replacement {
                break;
            }

            iterations += 1;
            if iterations >= MAX_ALIAS_RESOLUTION_DEPTH {
                return Err(ConfigError::Validation {
                    field: "aliases".to_string(),
                    message: format!(
                        "alias resolution exceeded maximum depth ({}), potential infinite loop detected in '{}'",
                        MAX_ALIAS_RESOLUTION_DEPTH, keys
                    ),
                });
            }

            current_keys = next_keys;
        }

        Ok(current_keys)
    }

    fn layer_name_resolver(
        prefix: &str,
        pair: pest::iterators::Pair<Rule>,
        layer_names: &HashMap<String, u8>,
    ) -> ConfigResult<String> {
        let mut action = prefix.to_string() + "(";

        for inner_pair in pair.into_inner() {
            match inner_pair.as_rule() {
                // The first argument is the layer name or layer number
                Rule::layer_name => {
                    let layer_name = inner_pair.as_str();
                    let layer_number =
                        resolve_layer_name(layer_name, layer_names).ok_or_else(|| ConfigError::UnknownLayer {
                            layer: layer_name.to_string(),
                        })?;
                    action += layer_number.to_string().as_str();
                }
                Rule::layer_number => {
                    action += inner_pair.as_str();
                }
                _ => {
                    // The second argument is not processed, just forwarded
                    action += ", ";
                    action += inner_pair.as_str();
                }
            }
        }
        action += ")";

        Ok(action)
    }

    fn keymap_parser(
        layer_keys: &str,
        aliases: &HashMap<String, String>,
        layer_names: &HashMap<String, u8>,
    ) -> ConfigResult<Vec<String>> {
        // Resolve aliases first
        let layer_keys = Self::alias_resolver(layer_keys, aliases)?;

        let pairs = ConfigParser::parse(Rule::key_map, &layer_keys).map_err(|e| ConfigError::Validation {
            field: "layer.keys".to_string(),
            message: format!("invalid keymap format: {}", e),
        })?;

        let mut key_action_sequence = Vec::new();
        // The top-level pair is 'key_map'
        for pair in pairs {
            for inner_pair in pair.into_inner() {
                match inner_pair.as_rule() {
                    Rule::no_action
                    | Rule::transparent_action
                    | Rule::simple_keycode
                    | Rule::shifted_action
                    | Rule::osm_action
                    | Rule::mt_action
                    | Rule::wm_action => {
                        key_action_sequence.push(inner_pair.as_str().to_string());
                    }

                    // Layer actions
                    Rule::mo_action => {
                        key_action_sequence.push(Self::layer_name_resolver("MO", inner_pair, layer_names)?);
                    }
                    Rule::tg_action => {
                        key_action_sequence.push(Self::layer_name_resolver("TG", inner_pair, layer_names)?);
                    }
                    Rule::lt_action => {
                        key_action_sequence.push(Self::layer_name_resolver("LT", inner_pair, layer_names)?);
                    }

                    Rule::EOI => {}
                    rule => {
                        return Err(ConfigError::Validation {
                            field: "layer.keys".to_string(),
                            message: format!("unexpected rule {:?}", rule),
                        });
                    }
                }
            }
        }

        Ok(key_action_sequence)
    }
}

/// Layer number of `name`, `[[layer]]` names come first, then the built-in layer names
pub(crate) fn resolve_layer_name(name: &str, layer_names: &HashMap<String, u8>) -> Option<u8> {
    layer_names
        .get(name)
        .copied()
        .or_else(|| Layer::from_name(name).map(Layer::index))
}
