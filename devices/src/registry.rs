//! Device registry for automatic front-end discovery.
//!
//! Each supported handheld self-registers via [`inventory::submit!`] with a
//! [`DeviceEntry`] containing its CLI name and capability profile. The
//! front-end discovers available devices at runtime without any central
//! list.

use handpad_core::input::DeviceProfile;

/// Describes a supported handheld variant.
pub struct DeviceEntry {
    /// CLI name used to select this device (e.g., "gcw-zero").
    pub name: &'static str,
    pub profile: DeviceProfile,
}

impl DeviceEntry {
    pub const fn new(name: &'static str, profile: DeviceProfile) -> Self {
        Self { name, profile }
    }
}

inventory::collect!(DeviceEntry);

/// Return all registered devices, sorted by name.
pub fn all() -> Vec<&'static DeviceEntry> {
    let mut entries: Vec<_> = inventory::iter::<DeviceEntry>.into_iter().collect();
    entries.sort_by_key(|e| e.name);
    entries
}

/// Look up a device by its CLI name (case-insensitive).
pub fn find(name: &str) -> Option<&'static DeviceEntry> {
    inventory::iter::<DeviceEntry>
        .into_iter()
        .find(|e| e.name.eq_ignore_ascii_case(name))
}
