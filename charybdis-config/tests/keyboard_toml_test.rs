use charybdis::keymap::Keymap;
use charybdis::layer::{Layer, LayerState};
use charybdis::pointing::{PointingHost, Side};
use charybdis::types::action::{Action, KeyAction};
use charybdis::types::keycode::{ConsumerKey, FirmwareKey, HidKeyCode, KeyCode};
use charybdis::types::modifier::ModifierCombination;
use charybdis::{UserHooks, k, mo, osm, ptr, shifted};
use charybdis_config::{ConfigError, KeyboardTomlConfig};

fn shipped_config() -> KeyboardTomlConfig {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../charybdis/keyboard.toml");
    KeyboardTomlConfig::new_from_toml_path(path).unwrap()
}

fn hold(tap: HidKeyCode, hold: Action) -> KeyAction {
    KeyAction::TapHold(Action::Key(KeyCode::Hid(tap)), hold)
}

#[derive(Default)]
struct CpiRecorder {
    cpi: Vec<(Side, u16)>,
    auto_mouse_layer: Option<u8>,
}

impl PointingHost for CpiRecorder {
    fn set_pointer_sniping_enabled(&mut self, _enabled: bool) {}

    fn set_cpi_on_side(&mut self, side: Side, cpi: u16) {
        self.cpi.push((side, cpi));
    }

    fn set_auto_mouse_layer(&mut self, layer: u8) {
        self.auto_mouse_layer = Some(layer);
    }

    fn set_auto_mouse_enable(&mut self, _enabled: bool) {}
}

#[test]
fn test_shipped_layout_dimensions() {
    let config = shipped_config();
    assert_eq!(config.keyboard_name(), Some("Charybdis Nano"));

    let layout = config.get_layout_config().unwrap();
    assert_eq!((layout.rows, layout.cols, layout.layers), (8, 5, 8));
    assert_eq!(layout.keymap.len(), Layer::COUNT);
    for layer in &layout.keymap {
        assert_eq!(layer.len(), 8);
        assert!(layer.iter().all(|row| row.len() == 5));
    }
}

#[test]
fn test_shipped_base_layer() {
    let layout = shipped_config().get_layout_config().unwrap();
    let base = &layout.keymap[Layer::Base.index() as usize];

    assert_eq!(base[0][0], k!(Escape));
    assert_eq!(base[4][4], k!(X));
    assert_eq!(base[4][0], k!(LeftBracket));

    // Home row mods
    assert_eq!(base[1][0], hold(HidKeyCode::N, Action::Modifier(ModifierCombination::LSHIFT)));
    assert_eq!(base[1][3], hold(HidKeyCode::S, Action::Modifier(ModifierCombination::LGUI)));
    assert_eq!(base[1][4], k!(G));
    assert_eq!(base[5][4], k!(P));
    assert_eq!(base[5][3], hold(HidKeyCode::H, Action::Modifier(ModifierCombination::RGUI)));
    assert_eq!(base[5][2], hold(HidKeyCode::A, Action::Modifier(ModifierCombination::LALT)));
    assert_eq!(base[5][0], hold(HidKeyCode::I, Action::Modifier(ModifierCombination::RSHIFT)));

    // Pointer layer on the outer bottom keys
    assert_eq!(base[2][0], hold(HidKeyCode::B, Action::LayerOn(Layer::Pointer.index())));
    assert_eq!(base[6][0], hold(HidKeyCode::Y, Action::LayerOn(Layer::Pointer.index())));
    assert_eq!(base[2][1], k!(L));

    // Thumbs
    assert_eq!(base[3][2], hold(HidKeyCode::Space, Action::LayerOn(Layer::Navigation.index())));
    assert_eq!(base[3][3], KeyAction::No);
    assert_eq!(base[3][4], hold(HidKeyCode::Enter, Action::LayerOn(Layer::Numeral.index())));
    assert_eq!(base[7][4], mo!(Layer::Function.index()));
    assert_eq!(base[7][3], osm!(ModifierCombination::LSHIFT));

    // Not in matrix_map
    assert_eq!(base[3][0], KeyAction::No);
    assert_eq!(base[7][0], KeyAction::No);
}

#[test]
fn test_shipped_other_layers() {
    let layout = shipped_config().get_layout_config().unwrap();
    let layer = |l: Layer| &layout.keymap[l.index() as usize];

    assert_eq!(layer(Layer::Numeral)[4][3], k!(Kc7));
    assert_eq!(layer(Layer::Numeral)[3][4], KeyAction::Transparent);
    assert_eq!(layer(Layer::Navigation)[4][3], shifted!(Tab));
    assert_eq!(
        layer(Layer::Pointer)[0][0],
        KeyAction::Single(Action::Key(KeyCode::Firmware(FirmwareKey::Bootloader)))
    );
    assert_eq!(layer(Layer::Pointer)[2][1], ptr!(DragScroll));
    assert_eq!(layer(Layer::Pointer)[2][2], ptr!(Sniping));
    assert_eq!(layer(Layer::Pointer)[0][3], ptr!(DpiMod));
    assert_eq!(layer(Layer::Pointer)[1][2], k!(LAlt));
    assert_eq!(layer(Layer::AutoMouse)[0][0], KeyAction::Transparent);
    assert_eq!(layer(Layer::AutoMouse)[3][2], k!(MouseBtn1));
    assert_eq!(
        layer(Layer::Media)[1][2],
        KeyAction::Single(Action::Key(KeyCode::Consumer(ConsumerKey::Mute)))
    );
    assert_eq!(layer(Layer::Function)[4][0], k!(F12));
    assert_eq!(layer(Layer::Symbols)[0][0], shifted!(LeftBracket));
    assert_eq!(layer(Layer::Symbols)[5][3], k!(RGui));
    assert_eq!(layer(Layer::Symbols)[5][4], KeyAction::No);
}

#[test]
fn test_shipped_keymap_resolution() {
    let config = shipped_config();
    let mut layers = config.get_layout_config().unwrap().to_keymap::<8, 5, 8>().unwrap();
    let user_config = config.get_user_config().unwrap();
    let keymap = Keymap::new(&mut layers, &user_config);

    // Automouse is transparent over the base layer, except the thumbs
    let state = LayerState::from_layers(&[Layer::AutoMouse.index()]);
    assert_eq!(keymap.action_at(0, 1, state), k!(J));
    assert_eq!(keymap.action_at(3, 2, state), k!(MouseBtn1));

    let state = LayerState::from_layers(&[Layer::Pointer.index()]);
    assert_eq!(keymap.action_at(2, 2, state), ptr!(Sniping));
    // Transparent on the pointer layer
    assert_eq!(
        keymap.action_at(2, 0, state),
        hold(HidKeyCode::B, Action::LayerOn(Layer::Pointer.index()))
    );
}

#[test]
fn test_pointer_keys_removed_when_pointing_disabled() {
    let config = KeyboardTomlConfig::new_from_toml_str(
        r#"
        [layout]
        rows = 1
        cols = 3
        layers = 1
        matrix_map = "(0,0) (0,1) (0,2)"

        [[layer]]
        keys = "drgscrl sniping A"

        [pointing]
        enabled = false
        "#,
    )
    .unwrap();
    let mut layers = config.get_layout_config().unwrap().to_keymap::<1, 3, 1>().unwrap();
    let keymap = Keymap::new(&mut layers, &config.get_user_config().unwrap());
    assert_eq!(keymap.get_action_at(0, 0, 0), KeyAction::No);
    assert_eq!(keymap.get_action_at(0, 1, 0), KeyAction::No);
    assert_eq!(keymap.get_action_at(0, 2, 0), k!(A));
}

#[test]
fn test_shipped_hooks_init() {
    let config = shipped_config();
    let mut hooks = UserHooks::new(config.get_user_config().unwrap());
    let mut host = CpiRecorder::default();
    hooks.keyboard_post_init(&mut host);
    hooks.pointing_device_init(&mut host);
    assert_eq!(host.cpi, vec![(Side::Right, 1600), (Side::Left, 1600)]);
    assert_eq!(host.auto_mouse_layer, Some(Layer::AutoMouse.index()));
}

#[test]
fn test_unknown_key() {
    let config = KeyboardTomlConfig::new_from_toml_str(
        r#"
        [layout]
        rows = 1
        cols = 2
        layers = 1
        matrix_map = "(0,0) (0,1)"

        [[layer]]
        keys = "A Hyper"

        [pointing]
        enabled = false
        "#,
    )
    .unwrap();
    assert_eq!(
        config.get_layout_config(),
        Err(ConfigError::UnknownKey {
            key: "Hyper".to_string()
        })
    );
}

#[test]
fn test_unknown_layer() {
    let config = KeyboardTomlConfig::new_from_toml_str(
        r#"
        [layout]
        rows = 1
        cols = 2
        layers = 2
        matrix_map = "(0,0) (0,1)"

        [[layer]]
        name = "base"
        keys = "A LT(raise, B)"

        [pointing]
        enabled = false
        "#,
    )
    .unwrap();
    assert_eq!(
        config.get_layout_config(),
        Err(ConfigError::UnknownLayer {
            layer: "raise".to_string()
        })
    );

    // Layer number out of range
    let config = KeyboardTomlConfig::new_from_toml_str(
        r#"
        [layout]
        rows = 1
        cols = 2
        layers = 2
        matrix_map = "(0,0) (0,1)"

        [[layer]]
        keys = "A MO(2)"

        [pointing]
        enabled = false
        "#,
    )
    .unwrap();
    assert!(matches!(config.get_layout_config(), Err(ConfigError::UnknownLayer { .. })));
}

#[test]
fn test_layout_errors() {
    let too_many_keys = KeyboardTomlConfig::new_from_toml_str(
        r#"
        [layout]
        rows = 1
        cols = 2
        layers = 1
        matrix_map = "(0,0) (0,1)"

        [[layer]]
        keys = "A B C"

        [pointing]
        enabled = false
        "#,
    )
    .unwrap();
    assert!(matches!(too_many_keys.get_layout_config(), Err(ConfigError::Validation { .. })));

    let out_of_bounds = KeyboardTomlConfig::new_from_toml_str(
        r#"
        [layout]
        rows = 1
        cols = 2
        layers = 1
        matrix_map = "(0,0) (1,1)"

        [pointing]
        enabled = false
        "#,
    )
    .unwrap();
    assert!(matches!(out_of_bounds.get_layout_config(), Err(ConfigError::Validation { .. })));

    let duplicated = KeyboardTomlConfig::new_from_toml_str(
        r#"
        [layout]
        rows = 1
        cols = 2
        layers = 1
        matrix_map = "(0,0) (0,0)"

        [pointing]
        enabled = false
        "#,
    )
    .unwrap();
    assert!(matches!(duplicated.get_layout_config(), Err(ConfigError::Validation { .. })));
}

#[test]
fn test_file_errors() {
    assert!(matches!(
        KeyboardTomlConfig::new_from_toml_path("/nonexistent/keyboard.toml"),
        Err(ConfigError::FileRead { .. })
    ));
    assert!(matches!(
        KeyboardTomlConfig::new_from_toml_str("[layout\nrows = 1"),
        Err(ConfigError::TomlParse { .. })
    ));
    assert!(matches!(
        KeyboardTomlConfig::new_from_toml_str("[layout]\nrows = 1\ncols = 1\nlayers = 1\nkeymap = 1\n"),
        Err(ConfigError::TomlParse { .. })
    ));
}
