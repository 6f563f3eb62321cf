use std::collections::HashSet;

use crate::{
    brain::find_brain, device::occupied_spots, priority::spot_priorities, role::classify,
    DeviceDescriptor, Role, SetupType, Spot,
};

/// Spot a second laptop gravitates to in a DJ booth.
const DJ_LAPTOP_SPOT: &str = "middle_back";

/// Picks the spot a newly added device should occupy.
///
/// The rules run in a fixed order and the first one that applies decides;
/// nothing is revisited afterwards, so identical inputs always produce the
/// identical spot:
///
/// 1. a second brain goes to a free `middle_back` (DJ laptops only) or the
///    first free spot;
/// 2. the first brain takes its top unoccupied priority spot;
/// 3. inputs and effects take the first free spot in priority order;
/// 4. everything else takes the first free spot, or the first spot when
///    every spot is taken.
///
/// `None` means there are no spots at all and the caller should fall back to
/// manual placement. The returned spot is always one of `available_spots`.
pub fn allocate<'a>(
    device: &DeviceDescriptor,
    setup_type: impl Into<Option<SetupType>>,
    existing_devices: &[DeviceDescriptor],
    available_spots: &'a [Spot],
) -> Option<&'a Spot> {
    let setup_type = setup_type.into();
    let role = classify(device);
    let has_brain = find_brain(existing_devices, setup_type).is_some();
    let occupied = occupied_spots(existing_devices);
    let priorities: Vec<&str> = spot_priorities(setup_type, role)
        .iter()
        .copied()
        .filter(|spot| !occupied.contains(spot))
        .collect();

    if role == Role::Brain && has_brain {
        let is_dj_laptop =
            setup_type == Some(SetupType::Dj) && device.lower_type().contains("laptop");
        if is_dj_laptop && !occupied.contains(DJ_LAPTOP_SPOT) {
            if let Some(spot) = find_spot(available_spots, DJ_LAPTOP_SPOT) {
                tracing::debug!(spot = %spot.spot_type, "secondary brain: dj laptop spot");
                return Some(spot);
            }
        }
        tracing::debug!("secondary brain: first free spot");
        return first_free_or_first(available_spots, &occupied);
    }

    if role == Role::Brain {
        let spot = priorities
            .first()
            .and_then(|preferred| find_spot(available_spots, preferred))
            .or_else(|| available_spots.first());
        tracing::debug!(spot = ?spot.map(|s| &s.spot_type), "primary brain");
        return spot;
    }

    if matches!(role, Role::Input | Role::Effects) {
        let preferred = priorities.iter().find_map(|preferred| {
            available_spots
                .iter()
                .find(|spot| spot.spot_type == *preferred && !occupied.contains(spot.spot_type.as_str()))
        });
        if let Some(spot) = preferred {
            tracing::debug!(%role, spot = %spot.spot_type, "priority spot");
            return Some(spot);
        }
    }

    tracing::debug!(%role, "default placement");
    first_free_or_first(available_spots, &occupied)
}

fn find_spot<'a>(spots: &'a [Spot], spot_type: &str) -> Option<&'a Spot> {
    spots.iter().find(|spot| spot.spot_type == spot_type)
}

fn first_free_or_first<'a>(spots: &'a [Spot], occupied: &HashSet<&str>) -> Option<&'a Spot> {
    spots
        .iter()
        .find(|spot| !occupied.contains(spot.spot_type.as_str()))
        .or_else(|| spots.first())
}
