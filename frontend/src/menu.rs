//! In-game settings menu, driven entirely by [`GuiAction`]s.
//!
//! There is no rendering: the highlighted entry and every change are
//! written to the log.

use handpad_core::fast_forward::{MAX_TARGET, skip_for_target};
use handpad_core::gui::GuiAction;
use handpad_core::input::{AnalogAction, AnalogSensitivity, Buttons};
use handpad_core::mapping::HotkeySlot;
use handpad_core::session::InputSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    Resume,
    FastForwardTarget,
    AnalogSensitivity,
    AnalogAction,
    BindHotkey(HotkeySlot),
    ResetBindings,
    Quit,
}

const ITEMS: [MenuItem; 9] = [
    MenuItem::Resume,
    MenuItem::FastForwardTarget,
    MenuItem::AnalogSensitivity,
    MenuItem::AnalogAction,
    MenuItem::BindHotkey(HotkeySlot::HoldFastForward),
    MenuItem::BindHotkey(HotkeySlot::Menu),
    MenuItem::BindHotkey(HotkeySlot::ToggleFastForward),
    MenuItem::ResetBindings,
    MenuItem::Quit,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome {
    Stay,
    Resume,
    Quit,
}

/// Hotkey capture: wait for everything to be released, then record the
/// union of buttons held until the next full release.
#[derive(Debug, Clone, Copy)]
struct Capture {
    slot: HotkeySlot,
    armed: bool,
    seen: Buttons,
}

#[derive(Debug, Default)]
pub struct Menu {
    cursor: usize,
    capture: Option<Capture>,
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, session: &InputSession) {
        self.cursor = 0;
        self.capture = None;
        log::info!("Menu opened");
        self.log_cursor(session);
    }

    /// Handle one poll. `pressed` is only used while capturing a hotkey.
    pub fn update(
        &mut self,
        action: GuiAction,
        pressed: Buttons,
        session: &mut InputSession,
    ) -> MenuOutcome {
        if let Some(capture) = self.capture.as_mut() {
            if !capture.armed {
                capture.armed = pressed.is_empty();
                return MenuOutcome::Stay;
            }
            if !pressed.is_empty() {
                capture.seen |= pressed;
                return MenuOutcome::Stay;
            }
            if capture.seen.is_empty() {
                return MenuOutcome::Stay;
            }
            let Capture { slot, seen, .. } = *capture;
            self.capture = None;
            let config = session.config_mut();
            let device = config.device;
            if let Err(e) = config.hotkeys.bind(slot, seen, &device) {
                log::warn!("{e}");
            }
            return MenuOutcome::Stay;
        }

        let item = ITEMS[self.cursor];
        match action {
            GuiAction::None => MenuOutcome::Stay,
            GuiAction::Up => {
                self.cursor = (self.cursor + ITEMS.len() - 1) % ITEMS.len();
                self.log_cursor(session);
                MenuOutcome::Stay
            }
            GuiAction::Down => {
                self.cursor = (self.cursor + 1) % ITEMS.len();
                self.log_cursor(session);
                MenuOutcome::Stay
            }
            GuiAction::Left => {
                adjust(item, -1, session);
                self.log_cursor(session);
                MenuOutcome::Stay
            }
            GuiAction::Right => {
                adjust(item, 1, session);
                self.log_cursor(session);
                MenuOutcome::Stay
            }
            GuiAction::Leave => MenuOutcome::Resume,
            GuiAction::Enter => match item {
                MenuItem::Resume => MenuOutcome::Resume,
                MenuItem::Quit => MenuOutcome::Quit,
                MenuItem::BindHotkey(slot) => {
                    log::info!("Press the new combination for {}", slot.name());
                    self.capture = Some(Capture {
                        slot,
                        armed: false,
                        seen: Buttons::empty(),
                    });
                    MenuOutcome::Stay
                }
                MenuItem::ResetBindings => {
                    let config = session.config_mut();
                    config.hotkeys.reset();
                    config.remapping.reset();
                    log::info!("Bindings reset to defaults");
                    MenuOutcome::Stay
                }
                _ => {
                    adjust(item, 1, session);
                    self.log_cursor(session);
                    MenuOutcome::Stay
                }
            },
        }
    }

    fn log_cursor(&self, session: &InputSession) {
        let item = ITEMS[self.cursor];
        log::info!("> {}: {}", label(item), value(item, session));
    }
}

fn label(item: MenuItem) -> &'static str {
    match item {
        MenuItem::Resume => "Resume",
        MenuItem::FastForwardTarget => "Fast-forward target",
        MenuItem::AnalogSensitivity => "Analog sensitivity",
        MenuItem::AnalogAction => "Analog stick in game",
        MenuItem::BindHotkey(slot) => slot.name(),
        MenuItem::ResetBindings => "Reset bindings",
        MenuItem::Quit => "Quit",
    }
}

fn value(item: MenuItem, session: &InputSession) -> String {
    let config = session.config();
    match item {
        MenuItem::FastForwardTarget => {
            let skip = skip_for_target(session.fast_forward().target());
            format!("{}%", (u32::from(skip) + 1) * 100)
        }
        MenuItem::AnalogSensitivity => config.analog.sensitivity.level().to_string(),
        MenuItem::AnalogAction => match config.analog.action {
            AnalogAction::None => String::from("hotkeys only"),
            AnalogAction::DPad => String::from("d-pad"),
        },
        MenuItem::BindHotkey(slot) => config.device.describe(config.hotkeys.get(slot)),
        MenuItem::Resume | MenuItem::ResetBindings | MenuItem::Quit => String::new(),
    }
}

/// Step the value of `item` by `delta`, clamped to its range.
fn adjust(item: MenuItem, delta: i8, session: &mut InputSession) {
    match item {
        MenuItem::FastForwardTarget => {
            let target = session.fast_forward().target().saturating_add_signed(delta);
            session.fast_forward_mut().set_target(target.min(MAX_TARGET));
        }
        MenuItem::AnalogSensitivity => {
            let analog = &mut session.config_mut().analog;
            let level = analog.sensitivity.level().saturating_add_signed(delta);
            analog.sensitivity = AnalogSensitivity::new(level);
        }
        MenuItem::AnalogAction => {
            let analog = &mut session.config_mut().analog;
            analog.action = match analog.action {
                AnalogAction::None => AnalogAction::DPad,
                AnalogAction::DPad => AnalogAction::None,
            };
        }
        _ => {}
    }
}
