use crate::{Role, SetupType};

/// Ordered spot preferences for one role, most preferred first.
pub type RolePriorities = (Role, &'static [&'static str]);

const DJ_PRIORITIES: &[RolePriorities] = &[
    (Role::Brain, &["middle", "middle_back"]),
    (Role::Input, &["middle_left", "middle_right", "far_left", "far_right"]),
    (Role::Output, &["back_left", "back_right", "front_left", "front_right"]),
    (Role::Effects, &["middle_back", "far_left", "far_right"]),
    (Role::Accessory, &["front_left", "front_right", "back_left", "back_right"]),
];

const PRODUCER_PRIORITIES: &[RolePriorities] = &[
    (Role::Brain, &["center", "left_desk"]),
    (Role::Input, &["keyboard_front", "left_desk", "right_desk", "rack_left"]),
    (Role::Output, &["left_monitor", "right_monitor"]),
    (Role::Effects, &["rack_left", "rack_right"]),
    (Role::Accessory, &["floor_left", "floor_right"]),
];

const MUSICIAN_PRIORITIES: &[RolePriorities] = &[
    (Role::Brain, &["center_stage"]),
    (Role::Input, &["center_stage", "stage_left", "stage_right", "front_center"]),
    (Role::Output, &["amp_left", "amp_right", "back_center"]),
    (Role::Effects, &["pedalboard", "front_center"]),
    (Role::Accessory, &["stage_left", "stage_right"]),
];

/// The static `SetupType x Role` preference table.
pub fn priority_table(setup_type: SetupType) -> &'static [RolePriorities] {
    match setup_type {
        SetupType::Dj => DJ_PRIORITIES,
        SetupType::Producer => PRODUCER_PRIORITIES,
        SetupType::Musician => MUSICIAN_PRIORITIES,
    }
}

/// Preferred spot identifiers for `role` in a setup of `setup_type`.
///
/// Unknown setup types and roles without entries yield an empty slice.
pub fn spot_priorities(setup_type: impl Into<Option<SetupType>>, role: Role) -> &'static [&'static str] {
    setup_type
        .into()
        .map(priority_table)
        .and_then(|table| table.iter().find(|(entry, _)| *entry == role))
        .map(|(_, spots)| *spots)
        .unwrap_or(&[])
}

/// Every spot identifier the table mentions for `setup_type`, in first-seen
/// order without duplicates.
pub fn referenced_spots(setup_type: SetupType) -> Vec<&'static str> {
    let mut seen = Vec::new();
    for (_, spots) in priority_table(setup_type) {
        for spot in spots.iter() {
            if !seen.contains(spot) {
                seen.push(*spot);
            }
        }
    }
    seen
}
