use std::fmt;

use serde::{Deserialize, Serialize};

use crate::DeviceDescriptor;

/// Functional category of a device within a rig.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Central hub the rest of the rig is wired around.
    Brain,
    Input,
    Output,
    Effects,
    Accessory,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Brain,
        Role::Input,
        Role::Output,
        Role::Effects,
        Role::Accessory,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Brain => "brain",
            Role::Input => "input",
            Role::Output => "output",
            Role::Effects => "effects",
            Role::Accessory => "accessory",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Device type/name keyword to role. Order matters: name matching returns the
/// first key contained in the name, so earlier entries win.
pub const ROLE_TAXONOMY: &[(&str, Role)] = &[
    ("mixer", Role::Brain),
    ("djm", Role::Brain),
    ("laptop", Role::Brain),
    ("computer", Role::Brain),
    ("audio_interface", Role::Brain),
    ("interface", Role::Brain),
    ("cdj", Role::Input),
    ("turntable", Role::Input),
    ("controller", Role::Input),
    ("keyboard", Role::Input),
    ("synthesizer", Role::Input),
    ("synth", Role::Input),
    ("drum_machine", Role::Input),
    ("drum machine", Role::Input),
    ("sampler", Role::Input),
    ("microphone", Role::Input),
    ("guitar", Role::Input),
    ("bass", Role::Input),
    ("drums", Role::Input),
    ("midi", Role::Input),
    ("speaker", Role::Output),
    ("monitor", Role::Output),
    ("headphones", Role::Output),
    ("subwoofer", Role::Output),
    ("amplifier", Role::Output),
    ("amp", Role::Output),
    ("effects", Role::Effects),
    ("fx", Role::Effects),
    ("pedal", Role::Effects),
    ("reverb", Role::Effects),
    ("delay", Role::Effects),
    ("stand", Role::Accessory),
    ("cable", Role::Accessory),
    ("case", Role::Accessory),
    ("light", Role::Accessory),
    ("accessory", Role::Accessory),
];

/// Role assumed for devices the taxonomy does not recognise. Unknown gear is
/// treated as a source so it never claims a brain spot.
pub const DEFAULT_ROLE: Role = Role::Input;

/// Resolves a device to exactly one role.
///
/// The lower-cased type is looked up as an exact taxonomy key first. Failing
/// that, the lower-cased name is scanned for each key as a substring in
/// taxonomy order. Anything left over becomes [`DEFAULT_ROLE`].
pub fn classify(device: &DeviceDescriptor) -> Role {
    let device_type = device.lower_type();
    if let Some(role) = lookup_exact(&device_type) {
        return role;
    }

    let name = device.lower_name();
    if let Some(role) = lookup_contained(&name) {
        return role;
    }

    tracing::trace!(name = %device.name, device_type = %device_type, "no taxonomy match, defaulting role");
    DEFAULT_ROLE
}

fn lookup_exact(key: &str) -> Option<Role> {
    if key.is_empty() {
        return None;
    }
    ROLE_TAXONOMY
        .iter()
        .find(|(entry, _)| *entry == key)
        .map(|(_, role)| *role)
}

fn lookup_contained(text: &str) -> Option<Role> {
    if text.is_empty() {
        return None;
    }
    ROLE_TAXONOMY
        .iter()
        .find(|(entry, _)| text.contains(entry))
        .map(|(_, role)| *role)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn device(name: &str, device_type: Option<&str>) -> DeviceDescriptor {
        DeviceDescriptor {
            name: name.to_string(),
            device_type: device_type.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn type_takes_precedence_over_name() {
        let speaker_named_mixer = device("Mixer Monitor", Some("speaker"));
        assert_eq!(classify(&speaker_named_mixer), Role::Output);
    }

    #[test]
    fn type_match_ignores_case() {
        assert_eq!(classify(&device("", Some("MIXER"))), Role::Brain);
        assert_eq!(classify(&device("", Some("Pedal"))), Role::Effects);
    }

    #[test]
    fn type_must_match_a_whole_key() {
        // "cdj-3000" is not a key, so the name decides.
        let cdj = device("Pioneer CDJ-3000", Some("cdj-3000"));
        assert_eq!(classify(&cdj), Role::Input);

        let unknown = device("Something", Some("cdj-3000"));
        assert_eq!(classify(&unknown), Role::Input);
    }

    #[test]
    fn name_substrings_follow_taxonomy_order() {
        // Known fuzziness: the stand is caught by "mixer" before "stand".
        assert_eq!(classify(&device("Mixer Stand", None)), Role::Brain);
        assert_eq!(classify(&device("Laptop Stand", None)), Role::Brain);
        assert_eq!(classify(&device("Speaker Stand", None)), Role::Output);
        assert_eq!(classify(&device("Focusrite Audio Interface", None)), Role::Brain);
        assert_eq!(classify(&device("Boss Delay Pedal", None)), Role::Effects);
        assert_eq!(classify(&device("XLR Cable", None)), Role::Accessory);
    }

    #[test]
    fn unknown_devices_default_to_input() {
        assert_eq!(classify(&device("Mystery Box", None)), DEFAULT_ROLE);
        assert_eq!(classify(&device("", None)), Role::Input);
    }

    #[test]
    fn classification_is_stable() {
        let d = device("Pioneer DJM-900NXS2", Some("hardware"));
        let first = classify(&d);
        for _ in 0..10 {
            assert_eq!(classify(&d.clone()), first);
        }
        assert_eq!(first, Role::Brain);
    }
}
