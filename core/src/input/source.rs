use super::analog::{AnalogConfig, analog_directions};
use super::button::Buttons;
use super::device::DeviceProfile;

/// Reports the physical buttons held right now.
///
/// Called once per poll. Implementations are expected to return already
/// debounced state.
pub trait ButtonSource {
    fn pressed_buttons(&mut self) -> Buttons;
}

/// Reports signed stick displacement: negative is left/up, positive is
/// right/down.
pub trait AxisReader {
    fn horizontal_axis(&mut self) -> i16;
    fn vertical_axis(&mut self) -> i16;
}

impl<F: FnMut() -> Buttons> ButtonSource for F {
    fn pressed_buttons(&mut self) -> Buttons {
        self()
    }
}

/// Axis reader for devices without a stick.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAxes;

impl AxisReader for NoAxes {
    fn horizontal_axis(&mut self) -> i16 {
        0
    }

    fn vertical_axis(&mut self) -> i16 {
        0
    }
}

/// Read one full button mask: digital buttons from `source` merged with the
/// directions derived from `axes`.
///
/// On a device without a stick the axes are never read and any analog bits
/// reported by `source` are dropped.
pub fn poll_buttons<S, A>(
    source: &mut S,
    axes: &mut A,
    analog: &AnalogConfig,
    device: &DeviceProfile,
) -> Buttons
where
    S: ButtonSource + ?Sized,
    A: AxisReader + ?Sized,
{
    let mut pressed = source.pressed_buttons();
    if device.has_analog_stick {
        let horizontal = axes.horizontal_axis();
        let vertical = axes.vertical_axis();
        pressed |= analog_directions(horizontal, vertical, analog);
    }
    pressed & device.supported_buttons()
}
