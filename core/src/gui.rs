//! Menu navigation: one arbitrated, auto-repeating action per poll.
//!
//! Every call looks at the whole button mask and picks a single winner in
//! the order Enter, Leave, Down, Up, Right, Left. Holding the winner fires
//! once, then again after [`REPEAT_DELAY`], then every [`REPEAT_INTERVAL`].
//!
//! When an action that was firing is overtaken by a higher-priority one
//! (Down held, then Enter added), the overtaken action is suppressed. It
//! stays suppressed until its button is released; only a fresh press makes
//! it eligible again, so releasing Enter while Down is still held yields
//! nothing. An action that was held but never won (Enter held, then Down
//! added) is not suppressed: it wins as soon as Enter is released and fires
//! immediately with a fresh timer.

use std::time::{Duration, Instant};

use crate::input::{ButtonSource, Buttons};

/// Delay between the first firing of a held action and its first repeat.
pub const REPEAT_DELAY: Duration = Duration::from_millis(500);

/// Delay between subsequent repeats of a held action.
pub const REPEAT_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GuiAction {
    /// Nothing to do this poll. Not an error.
    #[default]
    None,
    Up,
    Down,
    Left,
    Right,
    Enter,
    Leave,
}

/// Actions and the buttons that trigger them, highest priority first.
const PRIORITY: [(GuiAction, Buttons); 6] = [
    (GuiAction::Enter, Buttons::FACE_RIGHT),
    (GuiAction::Leave, Buttons::FACE_DOWN),
    (GuiAction::Down, Buttons::DOWN.union(Buttons::ANALOG_DOWN)),
    (GuiAction::Up, Buttons::UP.union(Buttons::ANALOG_UP)),
    (GuiAction::Right, Buttons::RIGHT.union(Buttons::ANALOG_RIGHT)),
    (GuiAction::Left, Buttons::LEFT.union(Buttons::ANALOG_LEFT)),
];

/// Buttons that can ever produce a [`GuiAction`].
pub const GUI_BUTTONS: Buttons = {
    let mut mask = Buttons::empty();
    let mut i = 0;
    while i < PRIORITY.len() {
        mask = mask.union(PRIORITY[i].1);
        i += 1;
    }
    mask
};

/// Bit `n` set = action at `PRIORITY[n]` is held.
fn held_slots(pressed: Buttons) -> u8 {
    PRIORITY
        .iter()
        .enumerate()
        .filter(|(_, (_, mask))| pressed.intersects(*mask))
        .fold(0, |acc, (slot, _)| acc | (1 << slot))
}

#[derive(Debug, Clone, Copy)]
struct Active {
    slot: usize,
    next_fire: Instant,
}

/// Turns raw button masks into menu actions, one per call.
#[derive(Debug, Clone, Default)]
pub struct GuiActionResolver {
    active: Option<Active>,
    suppressed: u8,
}

impl GuiActionResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `source` and resolve against the current time.
    pub fn poll<S: ButtonSource + ?Sized>(&mut self, source: &mut S) -> GuiAction {
        self.resolve(source.pressed_buttons(), Instant::now())
    }

    /// Resolve `pressed` as observed at `now`.
    ///
    /// `now` must not go backwards between calls.
    pub fn resolve(&mut self, pressed: Buttons, now: Instant) -> GuiAction {
        let held = held_slots(pressed);
        // Released buttons lose their suppression; re-pressing starts fresh.
        self.suppressed &= held;

        let eligible = held & !self.suppressed;
        if eligible == 0 {
            self.active = None;
            return GuiAction::None;
        }
        let slot = eligible.trailing_zeros() as usize;

        match self.active.as_mut() {
            Some(active) if active.slot == slot => {
                if now < active.next_fire {
                    return GuiAction::None;
                }
                active.next_fire = now + REPEAT_INTERVAL;
            }
            previous => {
                if let Some(previous) = previous
                    && previous.slot > slot
                    && held & (1 << previous.slot) != 0
                {
                    log::trace!(
                        "{:?} overtaken by {:?}; suppressed until released",
                        PRIORITY[previous.slot].0,
                        PRIORITY[slot].0
                    );
                    self.suppressed |= 1 << previous.slot;
                }
                self.active = Some(Active {
                    slot,
                    next_fire: now + REPEAT_DELAY,
                });
            }
        }

        let action = PRIORITY[slot].0;
        log::debug!("GUI action {action:?}");
        action
    }

    /// Forget all timers and suppression, e.g. when a menu opens or closes.
    pub fn reset(&mut self) {
        self.active = None;
        self.suppressed = 0;
    }
}
