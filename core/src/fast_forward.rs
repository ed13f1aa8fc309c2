//! Fast-forward frameskip state, consulted once per frame by the frame loop.
//!
//! `frameskip` is the number of frames skipped per rendered frame: 0 is
//! real time, 1 targets 200%, and so on up to 5 (600%). The UI picks a
//! `target` index 0..=4 which maps to frameskip 1..=5.
//!
//! Independently, `countdown` forces whole frames, video and audio, to be
//! dropped (used after loading state or leaving the menu); while it is
//! non-zero the frameskip level is not consulted.

/// Highest UI target index (600% real time).
pub const MAX_TARGET: u8 = 4;

/// Highest frameskip level.
pub const MAX_FRAMESKIP: u8 = MAX_TARGET + 1;

/// Frameskip level used while fast-forwarding at UI target `target`.
pub const fn skip_for_target(target: u8) -> u8 {
    if target > MAX_TARGET {
        MAX_FRAMESKIP
    } else {
        target + 1
    }
}

/// What the frame loop does with the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameAction {
    /// Emulate, render and play audio.
    Render,
    /// Emulate and play audio, but do not render.
    SkipVideo,
    /// Drop the frame and its audio.
    SkipVideoAndAudio,
}

impl FrameAction {
    #[inline]
    pub fn renders(self) -> bool {
        self == FrameAction::Render
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FastForward {
    frameskip: u8,
    target: u8,
    countdown: u8,
    /// Frames left to skip before the next render at the current level.
    pending_skips: u8,
}

impl FastForward {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_target(target: u8) -> Self {
        Self {
            target: target.min(MAX_TARGET),
            ..Self::default()
        }
    }

    #[inline]
    pub fn frameskip(&self) -> u8 {
        self.frameskip
    }

    #[inline]
    pub fn target(&self) -> u8 {
        self.target
    }

    #[inline]
    pub fn countdown(&self) -> u8 {
        self.countdown
    }

    #[inline]
    pub fn is_fast_forwarding(&self) -> bool {
        self.frameskip > 0
    }

    /// Nominal speed in percent of real time (100 when not fast-forwarding).
    pub fn speed_percent(&self) -> u32 {
        (u32::from(self.frameskip) + 1) * 100
    }

    /// Change the UI target. An active fast-forward picks up the new speed
    /// immediately.
    pub fn set_target(&mut self, target: u8) {
        self.target = target.min(MAX_TARGET);
        if self.frameskip > 0 {
            self.set_frameskip(skip_for_target(self.target));
        }
    }

    /// Drive the hold-to-fast-forward hotkey. `held` is this frame,
    /// `was_held` the previous one. Only a release edge turns fast-forward
    /// off, so an unused hold hotkey leaves a toggled state alone.
    pub fn apply_hold(&mut self, held: bool, was_held: bool) {
        if held {
            self.set_frameskip(skip_for_target(self.target));
        } else if was_held {
            self.set_frameskip(0);
        }
    }

    /// Toggle-hotkey press edge: flip between real time and the target.
    pub fn toggle(&mut self) {
        if self.frameskip == 0 {
            self.set_frameskip(skip_for_target(self.target));
        } else {
            self.set_frameskip(0);
        }
    }

    /// Drop the next `frames` frames together with their audio.
    pub fn force_skip(&mut self, frames: u8) {
        self.countdown = frames;
    }

    /// Advance one frame.
    pub fn tick(&mut self) -> FrameAction {
        if self.countdown > 0 {
            self.countdown -= 1;
            return FrameAction::SkipVideoAndAudio;
        }

        if self.pending_skips > 0 {
            self.pending_skips -= 1;
            FrameAction::SkipVideo
        } else {
            self.pending_skips = self.frameskip;
            FrameAction::Render
        }
    }

    fn set_frameskip(&mut self, level: u8) {
        let level = level.min(MAX_FRAMESKIP);
        if level == self.frameskip {
            return;
        }
        self.frameskip = level;
        self.pending_skips = 0;
        if level == 0 {
            log::info!("Fast-forward off");
        } else {
            log::info!("Fast-forward on ({}%)", self.speed_percent());
        }
    }
}
