//! Device identity derived from the factory MAC address.
//!
//! Every unit identifies itself by the last three bytes of its eFuse MAC,
//! which is burned at the factory and survives reflashes.  The same suffix
//! feeds two forms, built once at boot:
//!
//! - `BH-XXYYZZ` (uppercase) — sent as the `id` query parameter on every
//!   remote trigger poll and printed in the boot banner.
//! - `bellhop-xxyyzz` (lowercase) — hostname form for the banner.

use core::fmt::Write;

/// Full 6-byte MAC address.
pub type MacAddress = [u8; 6];

/// Read the factory MAC address from eFuse.
#[cfg(target_os = "espidf")]
pub fn read_mac() -> MacAddress {
    let mut mac: MacAddress = [0u8; 6];
    unsafe {
        esp_idf_svc::sys::esp_efuse_mac_get_default(mac.as_mut_ptr());
    }
    mac
}

/// Simulation: a fixed station MAC out of the Espressif OUI range.
#[cfg(not(target_os = "espidf"))]
pub fn read_mac() -> MacAddress {
    [0x68, 0xB6, 0xB3, 0x4E, 0x7D, 0x2A]
}

/// Both identity forms of one device.
pub struct DeviceIdentity {
    id: heapless::String<12>,
    hostname: heapless::String<24>,
}

impl DeviceIdentity {
    /// Read the eFuse MAC and derive both forms from it.
    pub fn detect() -> Self {
        Self::from_mac(read_mac())
    }

    /// Derive the identity from an explicit MAC.
    pub fn from_mac(mac: MacAddress) -> Self {
        let [.., x, y, z] = mac;
        let mut id = heapless::String::new();
        let mut hostname = heapless::String::new();
        let _ = write!(id, "BH-{x:02X}{y:02X}{z:02X}");
        let _ = write!(hostname, "bellhop-{x:02x}{y:02x}{z:02x}");
        Self { id, hostname }
    }

    /// Uppercase device ID, e.g. `BH-4E7D2A`.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Lowercase hostname form, e.g. `bellhop-4e7d2a`.
    pub fn hostname(&self) -> &str {
        &self.hostname
    }
}
