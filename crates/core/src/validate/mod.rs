use serde::Serialize;

use crate::{priority::spot_priorities, role::classify, DeviceDescriptor, SetupType, Spot};

/// Whether `device` may sit in `spot` based on its role alone.
///
/// Occupancy is not considered here; use [`check_placement`] when the
/// current device list matters.
pub fn can_place(
    device: &DeviceDescriptor,
    spot: &Spot,
    setup_type: impl Into<Option<SetupType>>,
) -> bool {
    spot_priorities(setup_type, classify(device))
        .iter()
        .any(|candidate| *candidate == spot.spot_type)
}

/// Outcome of a manual drag-to-spot request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "verdict", rename_all = "camelCase")]
pub enum PlacementVerdict {
    Allowed,
    /// The device's role does not list this spot.
    RoleMismatch,
    /// Another device already sits in the spot.
    Occupied { by: String },
}

impl PlacementVerdict {
    pub fn is_allowed(&self) -> bool {
        matches!(self, PlacementVerdict::Allowed)
    }
}

/// Role compatibility plus an exclusivity check against `devices`.
///
/// A device only counts as the occupant itself when it is already placed in
/// `spot`; an unplaced twin of the occupant is still blocked.
pub fn check_placement(
    device: &DeviceDescriptor,
    spot: &Spot,
    setup_type: impl Into<Option<SetupType>>,
    devices: &[DeviceDescriptor],
) -> PlacementVerdict {
    if !can_place(device, spot, setup_type) {
        return PlacementVerdict::RoleMismatch;
    }

    if device.spot_type.as_deref() == Some(spot.spot_type.as_str()) {
        return PlacementVerdict::Allowed;
    }

    let occupant = devices
        .iter()
        .find(|other| other.spot_type.as_deref() == Some(spot.spot_type.as_str()));

    match occupant {
        Some(other) => PlacementVerdict::Occupied {
            by: other.name.clone(),
        },
        None => PlacementVerdict::Allowed,
    }
}
