//! Dingoo A320: no analog stick, and the left/top face buttons are printed
//! Y and X (the reverse of the GCW Zero).

use handpad_core::input::DeviceProfile;

use crate::registry::DeviceEntry;

pub const PROFILE: DeviceProfile = DeviceProfile::new("Dingoo A320", false, "Y", "X");

inventory::submit! {
    DeviceEntry::new("dingoo-a320", PROFILE)
}
