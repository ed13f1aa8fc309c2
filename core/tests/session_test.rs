mod common;

use std::time::Duration;

use common::{Clock, FixedAxes, ScriptedSource};
use handpad_core::fast_forward::FrameAction;
use handpad_core::gui::{GuiAction, REPEAT_DELAY};
use handpad_core::input::{AnalogAction, AnalogSensitivity, Buttons, NoAxes};
use handpad_core::mapping::{GbaButton, GbaKeys, HotkeySlot};
use handpad_core::session::{InputConfig, InputSession};
use handpad_devices::{DINGOO_A320, GCW_ZERO};

fn session_with_ff_hotkeys() -> InputSession {
    let mut config = InputConfig::new(GCW_ZERO);
    config
        .hotkeys
        .bind(HotkeySlot::HoldFastForward, Buttons::R | Buttons::FACE_UP, &GCW_ZERO)
        .unwrap();
    config
        .hotkeys
        .bind(HotkeySlot::ToggleFastForward, Buttons::L | Buttons::FACE_UP, &GCW_ZERO)
        .unwrap();
    InputSession::new(config)
}

// =================================================================
// Polling
// =================================================================

#[test]
fn test_poll_merges_stick_on_gcw_zero() {
    let session = InputSession::new(InputConfig::new(GCW_ZERO));
    let mut source = ScriptedSource::new(&[Buttons::START]);
    let mut axes = FixedAxes {
        horizontal: 0,
        vertical: -32000,
    };
    assert_eq!(
        session.poll_buttons(&mut source, &mut axes),
        Buttons::START | Buttons::ANALOG_UP
    );
}

#[test]
fn test_poll_ignores_stick_on_dingoo() {
    let session = InputSession::new(InputConfig::new(DINGOO_A320));
    let mut source = ScriptedSource::new(&[Buttons::START]);
    let mut axes = FixedAxes {
        horizontal: i16::MIN,
        vertical: i16::MIN,
    };
    assert_eq!(session.poll_buttons(&mut source, &mut axes), Buttons::START);
}

// =================================================================
// Gameplay
// =================================================================

#[test]
fn test_gameplay_translation_with_defaults() {
    let mut session = InputSession::new(InputConfig::new(GCW_ZERO));
    let frame = session.gameplay_frame(Buttons::FACE_RIGHT | Buttons::FACE_DOWN | Buttons::RIGHT);
    assert_eq!(frame.keys, GbaKeys::A | GbaKeys::B | GbaKeys::RIGHT);
    assert!(!frame.menu_requested);
    assert_eq!(frame.frame, FrameAction::Render);
}

#[test]
fn test_analog_dpad_setting() {
    let mut config = InputConfig::new(GCW_ZERO);
    config.analog.action = AnalogAction::DPad;
    config.analog.sensitivity = AnalogSensitivity::new(4);
    let mut session = InputSession::new(config);

    let mut source = ScriptedSource::new(&[Buttons::empty()]);
    let mut axes = FixedAxes {
        horizontal: 6000,
        vertical: 0,
    };
    let pressed = session.poll_buttons(&mut source, &mut axes);
    assert_eq!(session.gameplay_frame(pressed).keys, GbaKeys::RIGHT);
}

#[test]
fn test_menu_hotkey_fires_once_and_is_hidden_from_game() {
    let mut session = InputSession::new(InputConfig::new(GCW_ZERO));
    let combo = Buttons::SELECT | Buttons::START;

    let first = session.gameplay_frame(Buttons::SELECT);
    assert_eq!(first.keys, GbaKeys::SELECT);
    assert!(!first.menu_requested);

    let pressed = session.gameplay_frame(combo | Buttons::FACE_RIGHT);
    assert!(pressed.menu_requested);
    assert_eq!(pressed.keys, GbaKeys::A);

    let held = session.gameplay_frame(combo);
    assert!(!held.menu_requested);
    assert_eq!(held.keys, GbaKeys::empty());
}

#[test]
fn test_remapped_button() {
    let mut config = InputConfig::new(GCW_ZERO);
    config.remapping.set(GbaButton::A, Buttons::FACE_LEFT);
    let mut session = InputSession::new(config);
    assert_eq!(session.gameplay_frame(Buttons::FACE_RIGHT).keys, GbaKeys::empty());
    assert_eq!(session.gameplay_frame(Buttons::FACE_LEFT).keys, GbaKeys::A);
}

// =================================================================
// Fast-forward hotkeys
// =================================================================

#[test]
fn test_hold_hotkey_fast_forwards_while_held() {
    let mut session = session_with_ff_hotkeys();
    let hold = Buttons::R | Buttons::FACE_UP;

    session.gameplay_frame(hold);
    assert_eq!(session.fast_forward().frameskip(), 1);
    let frames: Vec<_> = (0..4).map(|_| session.gameplay_frame(hold).frame).collect();
    assert_eq!(
        frames,
        vec![
            FrameAction::SkipVideo,
            FrameAction::Render,
            FrameAction::SkipVideo,
            FrameAction::Render,
        ]
    );

    session.gameplay_frame(Buttons::FACE_UP);
    assert_eq!(session.fast_forward().frameskip(), 0);
}

#[test]
fn test_toggle_hotkey_on_press_edges() {
    let mut session = session_with_ff_hotkeys();
    let toggle = Buttons::L | Buttons::FACE_UP;

    session.gameplay_frame(toggle);
    session.gameplay_frame(toggle);
    session.gameplay_frame(toggle);
    assert_eq!(session.fast_forward().frameskip(), 1);

    session.gameplay_frame(Buttons::empty());
    assert_eq!(session.fast_forward().frameskip(), 1);

    session.gameplay_frame(toggle);
    session.gameplay_frame(Buttons::empty());
    assert_eq!(session.fast_forward().frameskip(), 0);
}

#[test]
fn test_target_change_applies_to_hotkeys() {
    let mut session = session_with_ff_hotkeys();
    session.fast_forward_mut().set_target(4);
    session.gameplay_frame(Buttons::R | Buttons::FACE_UP);
    assert_eq!(session.fast_forward().frameskip(), 5);
    assert_eq!(session.fast_forward().speed_percent(), 600);
}

// =================================================================
// Menu transitions
// =================================================================

#[test]
fn test_menu_round_trip() {
    let mut clock = Clock::new();
    let mut session = InputSession::new(InputConfig::new(GCW_ZERO));
    let combo = Buttons::SELECT | Buttons::START;

    assert!(session.gameplay_frame(combo).menu_requested);
    session.enter_menu();

    assert_eq!(session.menu_action(Buttons::DOWN, clock.now()), GuiAction::Down);
    clock.advance(Duration::from_millis(10));
    assert_eq!(session.menu_action(Buttons::DOWN, clock.now()), GuiAction::None);
    clock.advance(REPEAT_DELAY);
    assert_eq!(session.menu_action(Buttons::DOWN, clock.now()), GuiAction::Down);
    assert_eq!(
        session.menu_action(Buttons::FACE_DOWN, clock.now()),
        GuiAction::Leave
    );

    // Leaving with the menu combination still held must not reopen it.
    session.leave_menu(combo, 2);
    let frames: Vec<_> = (0..3).map(|_| session.gameplay_frame(combo)).collect();
    assert!(frames.iter().all(|f| !f.menu_requested));
    assert_eq!(frames[0].frame, FrameAction::SkipVideoAndAudio);
    assert_eq!(frames[1].frame, FrameAction::SkipVideoAndAudio);
    assert_eq!(frames[2].frame, FrameAction::Render);
}

#[test]
fn test_hold_released_inside_menu_ends_fast_forward() {
    let mut session = session_with_ff_hotkeys();
    let hold = Buttons::R | Buttons::FACE_UP;
    let menu = Buttons::SELECT | Buttons::START;

    session.gameplay_frame(hold);
    assert!(session.fast_forward().is_fast_forwarding());
    assert!(session.gameplay_frame(hold | menu).menu_requested);
    session.enter_menu();

    session.leave_menu(Buttons::empty(), 2);
    for _ in 0..5 {
        session.gameplay_frame(Buttons::empty());
    }
    assert_eq!(session.fast_forward().frameskip(), 0);
    assert!(!session.fast_forward().is_fast_forwarding());
}

#[test]
fn test_hold_still_held_after_menu_keeps_fast_forward() {
    let mut session = session_with_ff_hotkeys();
    let hold = Buttons::R | Buttons::FACE_UP;

    session.gameplay_frame(hold);
    assert!(session.gameplay_frame(hold | Buttons::SELECT | Buttons::START).menu_requested);
    session.enter_menu();
    session.leave_menu(hold, 0);
    session.gameplay_frame(hold);
    assert_eq!(session.fast_forward().frameskip(), 1);

    session.gameplay_frame(Buttons::empty());
    assert_eq!(session.fast_forward().frameskip(), 0);
}

#[test]
fn test_toggled_fast_forward_survives_menu() {
    let mut session = session_with_ff_hotkeys();

    session.gameplay_frame(Buttons::L | Buttons::FACE_UP);
    session.gameplay_frame(Buttons::empty());
    assert!(session.gameplay_frame(Buttons::SELECT | Buttons::START).menu_requested);
    session.enter_menu();
    session.leave_menu(Buttons::empty(), 0);
    session.gameplay_frame(Buttons::empty());
    assert_eq!(session.fast_forward().frameskip(), 1);
}

#[test]
fn test_leave_button_not_passed_to_game() {
    let mut session = InputSession::new(InputConfig::new(GCW_ZERO));
    assert!(session.gameplay_frame(Buttons::SELECT | Buttons::START).menu_requested);
    session.enter_menu();

    session.leave_menu(Buttons::FACE_DOWN, 0);
    assert_eq!(session.gameplay_frame(Buttons::FACE_DOWN).keys, GbaKeys::empty());
    assert_eq!(
        session.gameplay_frame(Buttons::FACE_DOWN | Buttons::UP).keys,
        GbaKeys::UP
    );

    // A fresh press after the release goes through.
    session.gameplay_frame(Buttons::empty());
    assert_eq!(session.gameplay_frame(Buttons::FACE_DOWN).keys, GbaKeys::B);
}

#[test]
fn test_no_axes_session() {
    let session = InputSession::new(InputConfig::new(GCW_ZERO));
    let mut source = ScriptedSource::new(&[Buttons::UP]);
    assert_eq!(session.poll_buttons(&mut source, &mut NoAxes), Buttons::UP);
}
