use crate::{DeviceDescriptor, SetupType};

const DJ_BRAIN_KEYWORDS: &[&str] = &["mixer", "djm"];
const DJ_BRAIN_TYPES: &[&str] = &["mixer", "djm"];

const PRODUCER_BRAIN_KEYWORDS: &[&str] = &["laptop", "computer", "interface"];
const PRODUCER_BRAIN_TYPES: &[&str] = &["laptop", "computer", "audio_interface"];

/// Finds the central device of a setup.
///
/// DJ and Producer rigs look for the first device whose lower-cased name or
/// type mentions a hub keyword. Musician rigs have no obvious hub, so the
/// first device in list order stands in. Unknown setup types have no brain.
pub fn find_brain(
    devices: &[DeviceDescriptor],
    setup_type: impl Into<Option<SetupType>>,
) -> Option<&DeviceDescriptor> {
    match setup_type.into()? {
        SetupType::Dj => first_matching(devices, DJ_BRAIN_KEYWORDS, DJ_BRAIN_TYPES),
        SetupType::Producer => {
            first_matching(devices, PRODUCER_BRAIN_KEYWORDS, PRODUCER_BRAIN_TYPES)
        }
        SetupType::Musician => devices.first(),
    }
}

fn first_matching<'a>(
    devices: &'a [DeviceDescriptor],
    keywords: &[&str],
    types: &[&str],
) -> Option<&'a DeviceDescriptor> {
    devices.iter().find(|device| {
        let name = device.lower_name();
        let device_type = device.lower_type();
        types.contains(&device_type.as_str())
            || keywords
                .iter()
                .any(|keyword| name.contains(keyword) || device_type.contains(keyword))
    })
}
