use std::collections::VecDeque;
use std::time::{Duration, Instant};

use handpad_core::input::{AxisReader, ButtonSource, Buttons};

/// Button source that replays a fixed script of masks, then reports
/// nothing held.
pub struct ScriptedSource {
    script: VecDeque<Buttons>,
}

impl ScriptedSource {
    pub fn new(script: &[Buttons]) -> Self {
        Self {
            script: script.iter().copied().collect(),
        }
    }
}

impl ButtonSource for ScriptedSource {
    fn pressed_buttons(&mut self) -> Buttons {
        self.script.pop_front().unwrap_or_default()
    }
}

/// Stick held at a fixed position.
pub struct FixedAxes {
    pub horizontal: i16,
    pub vertical: i16,
}

impl AxisReader for FixedAxes {
    fn horizontal_axis(&mut self) -> i16 {
        self.horizontal
    }

    fn vertical_axis(&mut self) -> i16 {
        self.vertical
    }
}

/// Manually advanced clock for repeat-timing tests.
pub struct Clock {
    now: Instant,
}

impl Clock {
    pub fn new() -> Self {
        Self {
            now: Instant::now(),
        }
    }

    pub fn now(&self) -> Instant {
        self.now
    }

    pub fn advance(&mut self, by: Duration) -> Instant {
        self.now += by;
        self.now
    }
}
