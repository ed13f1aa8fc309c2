//! Physical input: the button mask, device capabilities, and the two
//! external collaborators (button source, axis reader).

pub mod analog;
pub mod button;
pub mod device;
pub mod source;

pub use analog::{AnalogAction, AnalogConfig, AnalogSensitivity, analog_directions};
pub use button::{BUTTON_COUNT, Button, Buttons};
pub use device::DeviceProfile;
pub use source::{AxisReader, ButtonSource, NoAxes, poll_buttons};
