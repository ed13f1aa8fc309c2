//! GCW Zero: analog stick present; face buttons A (right), B (bottom),
//! X (left), Y (top).

use handpad_core::input::DeviceProfile;

use crate::registry::DeviceEntry;

pub const PROFILE: DeviceProfile = DeviceProfile::new("GCW Zero", true, "X", "Y");

inventory::submit! {
    DeviceEntry::new("gcw-zero", PROFILE)
}
