//! # Charybdis types
//!
//! Fundamental type definitions shared by the Charybdis Nano keymap crates.
//!
//! - [`action`] - What a key does: single actions, one-shots and tap-holds
//! - [`keycode`] - HID keycodes, consumer keys, pointer-feature keys and firmware keys
//! - [`modifier`] - Modifier key combinations
//!
//! `charybdis-config` parses `keyboard.toml` into these types and `charybdis`
//! looks them up at runtime.

#![no_std]

pub mod action;
pub mod keycode;
pub mod modifier;
