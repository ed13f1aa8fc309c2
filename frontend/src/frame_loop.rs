use std::time::{Duration, Instant};

use handpad_core::fast_forward::FrameAction;
use handpad_core::mapping::GbaKeys;
use handpad_core::session::InputSession;
use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Scancode;

use crate::error::FrontendError;
use crate::input::{JoystickAxes, KeyMap, KeyboardPad};
use crate::menu::{Menu, MenuOutcome};

/// Native frame rate of the emulated handheld.
const FRAME_RATE: u32 = 60;

const FRAME_TIME: Duration = Duration::from_nanos(1_000_000_000 / FRAME_RATE as u64);

/// Frames dropped with their audio after leaving the menu.
const RESUME_SKIP_FRAMES: u8 = 2;

/// Window size in native pixels (scaled by `--scale`).
const NATIVE_SIZE: (u32, u32) = (240, 160);

pub struct RunOptions {
    pub scale: u32,
    pub start_in_menu: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Game,
    Menu,
}

pub fn run(
    session: &mut InputSession,
    key_map: &KeyMap,
    options: &RunOptions,
) -> Result<(), FrontendError> {
    let sdl_context = sdl2::init().map_err(FrontendError::SdlInit)?;
    let sdl_video = sdl_context.video().map_err(FrontendError::SdlVideoInit)?;
    let sdl_joystick = sdl_context
        .joystick()
        .map_err(FrontendError::SdlJoystickInit)?;

    let device = session.config().device;
    let (width, height) = NATIVE_SIZE;
    let mut window = sdl_video
        .window(
            &format!("handpad - {}", device.name),
            width * options.scale,
            height * options.scale,
        )
        .position_centered()
        .build()?;
    let mut event_pump = sdl_context
        .event_pump()
        .map_err(FrontendError::SdlEventPumpInit)?;

    let joystick = if device.has_analog_stick {
        match sdl_joystick.num_joysticks() {
            Ok(count) if count > 0 => match sdl_joystick.open(0) {
                Ok(joystick) => {
                    log::info!("Opened joystick 0: {}", joystick.name());
                    Some(joystick)
                }
                Err(e) => {
                    log::warn!("Error opening joystick 0: {e}");
                    None
                }
            },
            _ => None,
        }
    } else {
        None
    };

    let mut pad = KeyboardPad::new();
    let mut axes = JoystickAxes::new(joystick);
    let mut menu = Menu::new();
    let mut mode = Mode::Game;
    if options.start_in_menu {
        session.enter_menu();
        menu.open(session);
        mode = Mode::Menu;
    }

    let mut last_keys = GbaKeys::empty();
    let mut next_frame = Instant::now();
    let mut stats = SpeedStats::new();

    'main: loop {
        // Poll all pending SDL events, translate to device buttons
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => break 'main,

                Event::KeyDown {
                    scancode: Some(Scancode::Escape),
                    ..
                } => break 'main,

                Event::KeyDown {
                    scancode: Some(sc),
                    repeat: false,
                    ..
                } => {
                    if let Some(button) = key_map.get(sc) {
                        pad.set(button, true);
                    }
                }

                Event::KeyUp {
                    scancode: Some(sc), ..
                } => {
                    if let Some(button) = key_map.get(sc) {
                        pad.set(button, false);
                    }
                }

                Event::Window {
                    win_event: WindowEvent::FocusLost,
                    ..
                } => pad.clear(),

                _ => {}
            }
        }

        let pressed = session.poll_buttons(&mut pad, &mut axes);

        match mode {
            Mode::Menu => {
                let action = session.menu_action(pressed, Instant::now());
                match menu.update(action, pressed, session) {
                    MenuOutcome::Stay => {}
                    MenuOutcome::Resume => {
                        log::info!("Resuming");
                        session.leave_menu(pressed, RESUME_SKIP_FRAMES);
                        mode = Mode::Game;
                    }
                    MenuOutcome::Quit => break 'main,
                }
                wait_for_frame(&mut next_frame);
            }
            Mode::Game => {
                let frame = session.gameplay_frame(pressed);
                if frame.keys != last_keys {
                    log::debug!("Keys {:#06x}", frame.keys.to_keyinput());
                    last_keys = frame.keys;
                }
                if frame.menu_requested {
                    session.enter_menu();
                    menu.open(session);
                    mode = Mode::Menu;
                    continue;
                }

                stats.record(frame.frame);
                // Only rendered frames are paced; skipped frames run ahead.
                if frame.frame.renders() {
                    wait_for_frame(&mut next_frame);
                }
                if let Some(speed) = stats.take_speed() {
                    let title = format!("handpad - {} - {speed}%", device.name);
                    if let Err(e) = window.set_title(&title) {
                        log::warn!("Error changing window title to '{title}': {e}");
                    }
                }
            }
        }
    }

    Ok(())
}

fn wait_for_frame(next_frame: &mut Instant) {
    *next_frame += FRAME_TIME;
    match next_frame.checked_duration_since(Instant::now()) {
        Some(wait) => std::thread::sleep(wait),
        // Fell behind; don't try to catch up.
        None => *next_frame = Instant::now(),
    }
}

/// Emulated frames per wall-clock second, as a percentage of real time.
struct SpeedStats {
    since: Instant,
    frames: u32,
}

impl SpeedStats {
    fn new() -> Self {
        Self {
            since: Instant::now(),
            frames: 0,
        }
    }

    fn record(&mut self, frame: FrameAction) {
        if frame != FrameAction::SkipVideoAndAudio {
            self.frames += 1;
        }
    }

    /// Speed over the last second, once a second has passed.
    fn take_speed(&mut self) -> Option<u32> {
        let elapsed = self.since.elapsed();
        if elapsed < Duration::from_secs(1) {
            return None;
        }
        let speed = (f64::from(self.frames) / elapsed.as_secs_f64() / f64::from(FRAME_RATE)
            * 100.0)
            .round() as u32;
        self.since = Instant::now();
        self.frames = 0;
        Some(speed)
    }
}
