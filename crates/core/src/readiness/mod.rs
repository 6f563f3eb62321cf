use serde::{Deserialize, Serialize};

use crate::{brain::find_brain, role::classify, DeviceDescriptor, Role, SetupType};

/// Structural completeness of a setup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessReport {
    pub has_brain: bool,
    pub has_inputs: bool,
    pub has_outputs: bool,
    pub is_basic_setup: bool,
    pub is_complete_setup: bool,
}

/// Coarse progress bucket derived from a [`ReadinessReport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SetupStage {
    Empty,
    Started,
    Basic,
    Complete,
}

impl ReadinessReport {
    pub fn stage(&self) -> SetupStage {
        if self.is_complete_setup {
            SetupStage::Complete
        } else if self.is_basic_setup {
            SetupStage::Basic
        } else if self.has_brain || self.has_inputs || self.has_outputs {
            SetupStage::Started
        } else {
            SetupStage::Empty
        }
    }

    /// Roles still needed for a complete setup, brain first.
    pub fn missing(&self) -> Vec<Role> {
        [
            (self.has_brain, Role::Brain),
            (self.has_inputs, Role::Input),
            (self.has_outputs, Role::Output),
        ]
        .into_iter()
        .filter(|(present, _)| !present)
        .map(|(_, role)| role)
        .collect()
    }
}

/// Reports which structural pieces of a setup are in place.
pub fn evaluate(
    devices: &[DeviceDescriptor],
    setup_type: impl Into<Option<SetupType>>,
) -> ReadinessReport {
    let has_brain = find_brain(devices, setup_type).is_some();
    let has_inputs = devices.iter().any(|device| classify(device) == Role::Input);
    let has_outputs = devices.iter().any(|device| classify(device) == Role::Output);

    ReadinessReport {
        has_brain,
        has_inputs,
        has_outputs,
        is_basic_setup: has_brain && has_inputs,
        is_complete_setup: has_brain && has_inputs && has_outputs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_setup_is_not_ready() {
        let report = evaluate(&[], SetupType::Dj);
        assert_eq!(report, ReadinessReport::default());
        assert_eq!(report.stage(), SetupStage::Empty);
        assert_eq!(report.missing(), vec![Role::Brain, Role::Input, Role::Output]);
    }

    #[test]
    fn mixer_and_decks_make_a_basic_setup() {
        let devices = vec![
            DeviceDescriptor::typed("mixer"),
            DeviceDescriptor::named("CDJ-3000").with_type("cdj"),
        ];
        let report = evaluate(&devices, SetupType::Dj);

        assert!(report.is_basic_setup);
        assert!(!report.is_complete_setup);
        assert_eq!(report.stage(), SetupStage::Basic);
        assert_eq!(report.missing(), vec![Role::Output]);
    }

    #[test]
    fn speakers_complete_the_setup() {
        let devices = vec![
            DeviceDescriptor::typed("mixer"),
            DeviceDescriptor::typed("turntable"),
            DeviceDescriptor::named("KRK Rokit").with_type("speaker"),
        ];
        let report = evaluate(&devices, SetupType::Dj);
        assert!(report.is_complete_setup);
        assert_eq!(report.stage(), SetupStage::Complete);
        assert!(report.missing().is_empty());
    }

    #[test]
    fn inputs_without_brain_are_only_started() {
        let devices = vec![DeviceDescriptor::typed("turntable")];
        let report = evaluate(&devices, SetupType::Dj);
        assert!(report.has_inputs);
        assert!(!report.is_basic_setup);
        assert_eq!(report.stage(), SetupStage::Started);
    }

    #[test]
    fn musician_first_device_counts_as_brain() {
        let devices = vec![DeviceDescriptor::typed("guitar")];
        let report = evaluate(&devices, SetupType::Musician);
        assert!(report.has_brain);
        assert!(report.has_inputs);
        assert!(report.is_basic_setup);
    }
}
