// Platform adapters reading the local device's query surfaces: sysinfo for
// memory/storage/OS/CPU, DMI for identity, the battery service for the
// charge gauge, and sysfs scans for the graphics and camera surfaces.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use sysinfo::{Disks, System};

use crate::errors::SnapshotError;
use crate::ports::{
    BatteryGauge, CameraPort, CameraSpecs, GraphicsPort, MemoryPort, PowerPort, StoragePort,
    SystemPort,
};

const BYTES_PER_GB: f64 = (1024u64 * 1024 * 1024) as f64;
const DMI_PATH: &str = "/sys/class/dmi/id";
const DRM_PATH: &str = "/sys/class/drm";
const VIDEO_PATH: &str = "/sys/class/video4linux";
const UNKNOWN: &str = "unknown";

/// Live platform queries. Construction refreshes the system tables once;
/// the snapshot is a one-time capture, so nothing re-refreshes.
pub struct Platform {
    system: System,
    disks: Disks,
}

impl Platform {
    pub fn new() -> Self {
        Self {
            system: System::new_all(),
            disks: Disks::new_with_refreshed_list(),
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::new()
    }
}

fn read_sysfs(path: &Path) -> Option<String> {
    fs::read_to_string(path)
        .ok()
        .map(|contents| contents.trim().to_string())
        .filter(|contents| !contents.is_empty())
}

fn dmi_field(name: &str) -> String {
    read_sysfs(&PathBuf::from(DMI_PATH).join(name)).unwrap_or_else(|| UNKNOWN.to_string())
}

impl SystemPort for Platform {
    fn manufacturer(&self) -> String {
        dmi_field("sys_vendor")
    }

    fn model_name(&self) -> String {
        dmi_field("product_name")
    }

    fn model_number(&self) -> String {
        dmi_field("product_version")
    }

    fn os_version(&self) -> String {
        let name = System::name().unwrap_or_else(|| UNKNOWN.to_string());
        let version = System::os_version().unwrap_or_else(|| UNKNOWN.to_string());
        format!("{} {}", name, version)
    }

    fn cpu_arch(&self) -> String {
        let arch = System::cpu_arch();
        let brand = self
            .system
            .cpus()
            .first()
            .map(|cpu| cpu.brand().to_string())
            .filter(|brand| !brand.is_empty())
            .unwrap_or_else(|| UNKNOWN.to_string());
        format!("{} {}", arch, brand)
    }
}

impl MemoryPort for Platform {
    fn ram_gb(&self) -> (f64, f64) {
        (
            self.system.available_memory() as f64 / BYTES_PER_GB,
            self.system.total_memory() as f64 / BYTES_PER_GB,
        )
    }
}

impl StoragePort for Platform {
    fn storage_gb(&self) -> (f64, f64) {
        let mut available = 0u64;
        let mut total = 0u64;
        for disk in self.disks.list() {
            available += disk.available_space();
            total += disk.total_space();
        }
        (
            available as f64 / BYTES_PER_GB,
            total as f64 / BYTES_PER_GB,
        )
    }
}

impl PowerPort for Platform {
    fn battery(&self) -> BatteryGauge {
        match read_battery_percent() {
            Some(percent) => BatteryGauge {
                level: percent.round() as i32,
                scale: 100,
            },
            None => {
                debug!("No battery detected, reporting a full gauge");
                BatteryGauge {
                    level: 100,
                    scale: 100,
                }
            }
        }
    }
}

fn read_battery_percent() -> Option<f32> {
    let manager = battery::Manager::new().ok()?;
    let battery = manager.batteries().ok()?.next()?.ok()?;
    Some(battery.state_of_charge().value * 100.0)
}

impl CameraPort for Platform {
    fn specs(&self) -> Result<CameraSpecs, SnapshotError> {
        let entries = fs::read_dir(VIDEO_PATH)
            .map_err(|e| SnapshotError::CameraQuery(format!("no camera interface: {}", e)))?;

        let mut names = Vec::new();
        for entry in entries.flatten() {
            if let Some(name) = read_sysfs(&entry.path().join("name")) {
                names.push(name);
            }
        }
        if names.is_empty() {
            return Err(SnapshotError::CameraQuery("no camera present".to_string()));
        }
        // capture nodes carry no sensor geometry, so the capability read
        // cannot go further on this platform
        Err(SnapshotError::CameraQuery(format!(
            "sensor geometry unavailable for {}",
            names[0]
        )))
    }
}

impl GraphicsPort for Platform {
    fn renderer(&self) -> String {
        let Ok(entries) = fs::read_dir(DRM_PATH) else {
            return UNKNOWN.to_string();
        };
        for entry in entries.flatten() {
            let Some(uevent) = read_sysfs(&entry.path().join("device/uevent")) else {
                continue;
            };
            let mut driver = None;
            let mut pci_id = None;
            for line in uevent.lines() {
                if let Some(value) = line.strip_prefix("DRIVER=") {
                    driver = Some(value.to_string());
                }
                if let Some(value) = line.strip_prefix("PCI_ID=") {
                    pci_id = Some(value.to_string());
                }
            }
            if let Some(driver) = driver {
                return match pci_id {
                    Some(pci_id) => format!("{} ({})", driver, pci_id),
                    None => driver,
                };
            }
        }
        UNKNOWN.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_figures_are_consistent() {
        let platform = Platform::new();
        let (available, total) = platform.ram_gb();
        assert!(total > 0.0);
        assert!(available <= total);
    }

    #[test]
    fn test_identity_fields_are_non_empty() {
        let platform = Platform::new();
        assert!(!platform.manufacturer().is_empty());
        assert!(!platform.os_version().is_empty());
        assert!(!platform.cpu_arch().is_empty());
        assert!(!platform.renderer().is_empty());
    }

    #[test]
    fn test_battery_gauge_is_within_scale() {
        let platform = Platform::new();
        let gauge = platform.battery();
        assert!(gauge.level >= 0 && gauge.level <= gauge.scale);
    }
}
