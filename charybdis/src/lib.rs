//! # Charybdis Nano keymap
//!
//! User-level keymap logic for the Charybdis Nano split keyboard: layered key
//! lookup, the auto-sniping layer switch and the split-trackball scroll
//! accumulator. The firmware framework drives everything through
//! [`UserHooks`] and provides its pointing services via
//! [`pointing::PointingHost`].

#![no_std]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod config;
pub mod hooks;
pub mod keymap;
pub mod layer;
pub mod layout_macro;
pub mod pointing;

pub use charybdis_types as types;
pub use config::UserConfig;
pub use hooks::UserHooks;
pub use layer::{Layer, LayerState};
