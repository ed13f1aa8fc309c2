//! User-configurable bindings: the gameplay remapping table, the hotkey
//! table and its feasibility check.

pub mod hotkey;
pub mod keypad;
pub mod remap;

pub use hotkey::{HotkeyError, HotkeySlot, HotkeyTable, HotkeyTracker, is_impossible_hotkey};
pub use keypad::{GbaKeys, KeypadTranslator};
pub use remap::{GbaButton, RemappingTable};
