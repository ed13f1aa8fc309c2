//! Per-frame input dispatch: one owner for the configuration tables and
//! the state that the frame loop and the menu read every poll.

use std::time::Instant;

use crate::fast_forward::{FastForward, FrameAction};
use crate::gui::{GuiAction, GuiActionResolver};
use crate::input::{AnalogConfig, AxisReader, ButtonSource, Buttons, DeviceProfile, poll_buttons};
use crate::mapping::{GbaKeys, HotkeySlot, HotkeyTable, HotkeyTracker, KeypadTranslator, RemappingTable};

/// Process-wide input configuration, passed explicitly instead of living in
/// globals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputConfig {
    pub device: DeviceProfile,
    pub remapping: RemappingTable,
    pub hotkeys: HotkeyTable,
    pub analog: AnalogConfig,
}

impl InputConfig {
    /// Default tables for `device`.
    pub fn new(device: DeviceProfile) -> Self {
        Self {
            device,
            remapping: RemappingTable::DEFAULT,
            hotkeys: HotkeyTable::DEFAULT,
            analog: AnalogConfig::default(),
        }
    }
}

/// Everything the frame loop needs from one gameplay poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameplayFrame {
    /// Keys the emulated game sees this frame.
    pub keys: GbaKeys,
    /// The menu hotkey was pressed this frame.
    pub menu_requested: bool,
    pub frame: FrameAction,
}

/// Input state for one running game.
///
/// Not internally synchronized. A frontend that polls from another thread
/// must put the whole session behind a lock.
#[derive(Debug, Clone)]
pub struct InputSession {
    config: InputConfig,
    resolver: GuiActionResolver,
    translator: KeypadTranslator,
    hotkeys: HotkeyTracker,
    fast_forward: FastForward,
    /// Hold-fast-forward was held when the menu opened.
    held_fast_forward_at_menu: bool,
    /// Buttons still down from the menu; hidden from the game until released.
    held_from_menu: Buttons,
}

impl InputSession {
    pub fn new(config: InputConfig) -> Self {
        Self {
            config,
            resolver: GuiActionResolver::new(),
            translator: KeypadTranslator::new(),
            hotkeys: HotkeyTracker::new(),
            fast_forward: FastForward::new(),
            held_fast_forward_at_menu: false,
            held_from_menu: Buttons::empty(),
        }
    }

    pub fn config(&self) -> &InputConfig {
        &self.config
    }

    /// Configuration-time edits. Not meant to be called mid-frame.
    pub fn config_mut(&mut self) -> &mut InputConfig {
        &mut self.config
    }

    pub fn fast_forward(&self) -> &FastForward {
        &self.fast_forward
    }

    pub fn fast_forward_mut(&mut self) -> &mut FastForward {
        &mut self.fast_forward
    }

    /// Read the device through the configured stick settings.
    pub fn poll_buttons<S, A>(&self, source: &mut S, axes: &mut A) -> Buttons
    where
        S: ButtonSource + ?Sized,
        A: AxisReader + ?Sized,
    {
        poll_buttons(source, axes, &self.config.analog, &self.config.device)
    }

    /// Run hotkeys, gameplay translation and the frameskip tick for one
    /// emulated frame.
    pub fn gameplay_frame(&mut self, pressed: Buttons) -> GameplayFrame {
        self.hotkeys.update(pressed);
        let table = &self.config.hotkeys;

        self.fast_forward.apply_hold(
            self.hotkeys.is_held(table, HotkeySlot::HoldFastForward),
            self.hotkeys.was_held(table, HotkeySlot::HoldFastForward),
        );
        if self.hotkeys.just_pressed(table, HotkeySlot::ToggleFastForward) {
            self.fast_forward.toggle();
        }
        let menu_requested = self.hotkeys.just_pressed(table, HotkeySlot::Menu);
        if menu_requested {
            log::info!("Menu requested");
        }

        // Hotkey combinations in progress are not passed on to the game, nor
        // is whatever was used to leave the menu.
        self.held_from_menu &= pressed;
        let gameplay = pressed - table.held_buttons(pressed) - self.held_from_menu;
        let keys = self
            .translator
            .translate(gameplay, &self.config.remapping, &self.config.analog);

        GameplayFrame {
            keys,
            menu_requested,
            frame: self.fast_forward.tick(),
        }
    }

    /// Menu navigation for one poll.
    pub fn menu_action(&mut self, pressed: Buttons, now: Instant) -> GuiAction {
        self.resolver.resolve(pressed, now)
    }

    /// Switch input to the menu: fresh repeat timers, and buttons still held
    /// from gameplay do not count as hotkey presses afterwards.
    pub fn enter_menu(&mut self) {
        self.resolver.reset();
        self.hotkeys.latch();
        self.held_fast_forward_at_menu = self
            .hotkeys
            .is_held(&self.config.hotkeys, HotkeySlot::HoldFastForward);
    }

    /// Back to gameplay. `skip_frames` frames are dropped with their audio so
    /// the game does not stutter while catching up. A hold-fast-forward
    /// released while the menu was open ends here. Buttons in `pressed` reach
    /// the game only after they are released and pressed again.
    pub fn leave_menu(&mut self, pressed: Buttons, skip_frames: u8) {
        self.resolver.reset();
        self.hotkeys.update(pressed);
        self.fast_forward.apply_hold(
            self.hotkeys.is_held(&self.config.hotkeys, HotkeySlot::HoldFastForward),
            self.held_fast_forward_at_menu,
        );
        self.hotkeys.latch();
        self.held_fast_forward_at_menu = false;
        self.held_from_menu = pressed;
        self.fast_forward.force_skip(skip_frames);
    }
}
