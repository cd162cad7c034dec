use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Lowercase keycode aliases, mapping to the canonical keycode name
pub static KEYCODE_ALIAS: Lazy<HashMap<&str, &str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    macro_rules! add_alias {
        ($keycode:tt) => {
            m.insert(paste::paste!{ stringify!([<$keycode:lower>]) }, $keycode);
        };
        ($keycode:tt = $( $alias:expr),*) => {
            add_alias!($keycode);
            $(
                m.insert($alias, $keycode);
            )*
        };
    }

    add_alias!("No" = "xxxxxxx");
    add_alias!("A");
    add_alias!("B");
    add_alias!("C");
    add_alias!("D");
    add_alias!("E");
    add_alias!("F");
    add_alias!("G");
    add_alias!("H");
    add_alias!("I");
    add_alias!("J");
    add_alias!("K");
    add_alias!("L");
    add_alias!("M");
    add_alias!("N");
    add_alias!("O");
    add_alias!("P");
    add_alias!("Q");
    add_alias!("R");
    add_alias!("S");
    add_alias!("T");
    add_alias!("U");
    add_alias!("V");
    add_alias!("W");
    add_alias!("X");
    add_alias!("Y");
    add_alias!("Z");
    add_alias!("Kc1" = "1");
    add_alias!("Kc2" = "2");
    add_alias!("Kc3" = "3");
    add_alias!("Kc4" = "4");
    add_alias!("Kc5" = "5");
    add_alias!("Kc6" = "6");
    add_alias!("Kc7" = "7");
    add_alias!("Kc8" = "8");
    add_alias!("Kc9" = "9");
    add_alias!("Kc0" = "0");
    add_alias!("Enter" = "ent");
    add_alias!("Escape" = "esc");
    add_alias!("Backspace" = "bspc");
    add_alias!("Tab");
    add_alias!("Space" = "spc");
    add_alias!("Minus" = "mins", "-");
    add_alias!("Equal" = "eql", "=");
    add_alias!("LeftBracket" = "left_bracket", "lbrc", "[");
    add_alias!("RightBracket" = "right_bracket", "rbrc", "]");
    add_alias!("Backslash" = "bsls", "\\");
    add_alias!("Semicolon" = "scln", ";");
    add_alias!("Quote" = "quot", "'");
    add_alias!("Grave" = "grv", "`");
    add_alias!("Comma" = "comm");
    add_alias!("Dot" = ".");
    add_alias!("Slash" = "slsh", "/");
    add_alias!("CapsLock" = "caps_lock", "caps");
    add_alias!("F1");
    add_alias!("F2");
    add_alias!("F3");
    add_alias!("F4");
    add_alias!("F5");
    add_alias!("F6");
    add_alias!("F7");
    add_alias!("F8");
    add_alias!("F9");
    add_alias!("F10");
    add_alias!("F11");
    add_alias!("F12");
    add_alias!("PrintScreen" = "print_screen", "pscr");
    add_alias!("ScrollLock" = "scroll_lock", "scrl");
    add_alias!("Pause" = "paus", "brk");
    add_alias!("Insert" = "ins");
    add_alias!("Home");
    add_alias!("PageUp" = "page_up", "pgup");
    add_alias!("Delete" = "del");
    add_alias!("End");
    add_alias!("PageDown" = "page_down", "pgdn");
    add_alias!("Right" = "rght");
    add_alias!("Left");
    add_alias!("Down");
    add_alias!("Up");
    add_alias!("NumLock" = "num_lock", "num");
    add_alias!("Application" = "app");
    add_alias!("MouseBtn1" = "ms_btn1", "btn1");
    add_alias!("MouseBtn2" = "ms_btn2", "btn2");
    add_alias!("MouseBtn3" = "ms_btn3", "btn3");
    add_alias!("MouseBtn4" = "ms_btn4", "btn4");
    add_alias!("MouseBtn5" = "ms_btn5", "btn5");
    add_alias!("LCtrl" = "lctl");
    add_alias!("LShift" = "lsft");
    add_alias!("LAlt");
    add_alias!("LGui");
    add_alias!("RCtrl" = "rctl");
    add_alias!("RShift" = "rsft");
    add_alias!("RAlt");
    add_alias!("RGui");

    // Consumer keys
    add_alias!("PlayPause" = "mply");
    add_alias!("NextTrack" = "mnxt");
    add_alias!("PrevTrack" = "mprv");
    add_alias!("StopPlay" = "mstp");
    add_alias!("Mute");
    add_alias!("VolumeIncrement" = "volu");
    add_alias!("VolumeDecrement" = "vold");

    // Pointer keys
    add_alias!("DpiMod" = "dpi_mod");
    add_alias!("SnipingDpiMod" = "sniping_dpi_mod", "s_d_mod");
    add_alias!("Sniping");
    add_alias!("DragScroll" = "drag_scroll", "drgscrl");

    // Firmware keys
    add_alias!("Bootloader" = "qk_boot", "boot");
    add_alias!("EepromClear" = "eeprom_clear", "ee_clr");
    add_alias!("RgbToggle" = "rgb_tog");
    add_alias!("RgbModeForward" = "rgb_mod");
    add_alias!("RgbModeReverse" = "rgb_rmod");

    m
});
