use serde::Serialize;

use crate::{allocate::allocate, DeviceDescriptor, Setup, Spot};

/// Result of adding a batch of devices to a setup.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Composition {
    /// The setup with every placed device appended, each carrying its spot.
    pub setup: Setup,
    /// Devices no spot could be found for, in the order they were offered.
    pub unplaced: Vec<DeviceDescriptor>,
}

/// Places `new_devices` one after another, the way a user adds gear to the
/// rig. Each placed device is visible as occupying its spot to the devices
/// that follow it. `setup` is left untouched.
pub fn compose(setup: &Setup, new_devices: &[DeviceDescriptor], available_spots: &[Spot]) -> Composition {
    let mut current = setup.clone();
    let mut unplaced = Vec::new();

    for device in new_devices {
        match allocate(device, current.setup_type, &current.devices, available_spots) {
            Some(spot) => {
                tracing::debug!(device = %device.name, spot = %spot.spot_type, "placed device");
                let placed = device.placed_at(spot.spot_type.clone());
                current = current.with_device(placed);
            }
            None => {
                tracing::debug!(device = %device.name, "no spot available");
                unplaced.push(device.clone());
            }
        }
    }

    Composition {
        setup: current,
        unplaced,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::SpotCatalog, SetupType};

    #[test]
    fn builds_a_dj_booth_in_order() {
        let setup = Setup::new(SetupType::Dj);
        let devices = vec![
            DeviceDescriptor::named("DJM-900NXS2").with_type("mixer"),
            DeviceDescriptor::named("CDJ-3000 A").with_type("cdj"),
            DeviceDescriptor::named("CDJ-3000 B").with_type("cdj"),
            DeviceDescriptor::named("Rekordbox").with_type("laptop"),
        ];
        let spots = SpotCatalog::dj().spots;

        let composition = compose(&setup, &devices, &spots);
        let assigned: Vec<_> = composition
            .setup
            .devices
            .iter()
            .map(|d| d.spot_type.as_deref().unwrap_or_default())
            .collect();

        assert_eq!(assigned, vec!["middle", "middle_left", "middle_right", "middle_back"]);
        assert!(composition.unplaced.is_empty());
        assert!(setup.devices.is_empty());
    }

    #[test]
    fn reports_devices_without_spots() {
        let setup = Setup::new(SetupType::Producer);
        let devices = vec![DeviceDescriptor::typed("keyboard")];

        let composition = compose(&setup, &devices, &[]);
        assert!(composition.setup.devices.is_empty());
        assert_eq!(composition.unplaced, devices);
    }

    #[test]
    fn keeps_existing_devices_in_front() {
        let setup = Setup::new(SetupType::Musician)
            .with_device(DeviceDescriptor::typed("guitar").placed_at("center_stage"));
        let devices = vec![DeviceDescriptor::named("Boss DS-1").with_type("pedal")];

        let composition = compose(&setup, &devices, &SpotCatalog::musician().spots);
        assert_eq!(composition.setup.devices.len(), 2);
        assert_eq!(
            composition.setup.devices[1].spot_type.as_deref(),
            Some("pedalboard")
        );
    }
}
