use std::{collections::HashSet, path::Path};

use serde::{Deserialize, Serialize};

use crate::{RigError, Result, SetupType, Spot};

/// Top-level configuration: the scene's spot catalog for every setup type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RigConfig {
    #[serde(default = "SpotCatalog::dj")]
    pub dj: SpotCatalog,
    #[serde(default = "SpotCatalog::producer")]
    pub producer: SpotCatalog,
    #[serde(default = "SpotCatalog::musician")]
    pub musician: SpotCatalog,
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            dj: SpotCatalog::dj(),
            producer: SpotCatalog::producer(),
            musician: SpotCatalog::musician(),
        }
    }
}

impl RigConfig {
    /// Parses an override document. Catalogs left out keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        tracing::debug!(?path, "loaded rig config");
        Self::from_json_str(&contents)
    }

    pub fn catalog(&self, setup_type: SetupType) -> &SpotCatalog {
        match setup_type {
            SetupType::Dj => &self.dj,
            SetupType::Producer => &self.producer,
            SetupType::Musician => &self.musician,
        }
    }

    /// Ordered spots for allocation. Unknown setup types have none.
    pub fn spots_for(&self, setup_type: impl Into<Option<SetupType>>) -> &[Spot] {
        match setup_type.into() {
            Some(setup_type) => &self.catalog(setup_type).spots,
            None => &[],
        }
    }

    /// Resolves a spot identifier within the catalog for `setup_type`. An
    /// unknown setup type searches every catalog in turn, so callers can still
    /// ask about the spot and get a role answer back.
    pub fn spot(&self, setup_type: impl Into<Option<SetupType>>, spot_type: &str) -> Result<&Spot> {
        let matches = |spot: &&Spot| spot.spot_type == spot_type;
        let found = match setup_type.into() {
            Some(setup_type) => self.catalog(setup_type).spots.iter().find(matches),
            None => SetupType::ALL
                .iter()
                .flat_map(|setup_type| self.catalog(*setup_type).spots.iter())
                .find(matches),
        };
        found.ok_or_else(|| RigError::UnknownSpot(spot_type.to_string()))
    }

    fn validate(&self) -> Result<()> {
        for setup_type in SetupType::ALL {
            let mut seen = HashSet::new();
            for spot in &self.catalog(setup_type).spots {
                if !seen.insert(spot.spot_type.as_str()) {
                    return Err(RigError::msg(format!(
                        "duplicate spot `{}` in {setup_type} catalog",
                        spot.spot_type
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Ordered list of spots a scene offers for one setup type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpotCatalog {
    pub spots: Vec<Spot>,
}

impl SpotCatalog {
    pub fn new(spots: Vec<Spot>) -> Self {
        Self { spots }
    }

    /// DJ booth: mixer in the middle, decks either side, speakers behind.
    pub fn dj() -> Self {
        Self::new(vec![
            Spot::new("middle", 0.0, 1.0, 0.0),
            Spot::new("middle_left", -0.6, 1.0, 0.0),
            Spot::new("middle_right", 0.6, 1.0, 0.0),
            Spot::new("far_left", -1.2, 1.0, 0.0),
            Spot::new("far_right", 1.2, 1.0, 0.0),
            Spot::new("middle_back", 0.0, 1.1, -0.5),
            Spot::new("back_left", -1.8, 0.0, -1.0),
            Spot::new("back_right", 1.8, 0.0, -1.0),
            Spot::new("front_left", -1.8, 0.0, 1.0),
            Spot::new("front_right", 1.8, 0.0, 1.0),
        ])
    }

    pub fn producer() -> Self {
        Self::new(vec![
            Spot::new("center", 0.0, 0.8, 0.0),
            Spot::new("keyboard_front", 0.0, 0.75, 0.5),
            Spot::new("left_desk", -0.7, 0.8, 0.0),
            Spot::new("right_desk", 0.7, 0.8, 0.0),
            Spot::new("left_monitor", -1.0, 1.1, -0.4),
            Spot::new("right_monitor", 1.0, 1.1, -0.4),
            Spot::new("rack_left", -1.5, 0.5, 0.0),
            Spot::new("rack_right", 1.5, 0.5, 0.0),
            Spot::new("floor_left", -1.2, 0.0, 0.6),
            Spot::new("floor_right", 1.2, 0.0, 0.6),
        ])
    }

    pub fn musician() -> Self {
        Self::new(vec![
            Spot::new("center_stage", 0.0, 0.0, 0.0),
            Spot::new("stage_left", -1.5, 0.0, 0.0),
            Spot::new("stage_right", 1.5, 0.0, 0.0),
            Spot::new("front_center", 0.0, 0.0, 1.0),
            Spot::new("pedalboard", 0.0, 0.0, 0.6),
            Spot::new("amp_left", -1.0, 0.0, -1.2),
            Spot::new("amp_right", 1.0, 0.0, -1.2),
            Spot::new("back_center", 0.0, 0.0, -1.5),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::priority::referenced_spots;

    #[test]
    fn default_catalogs_cover_every_priority_spot() {
        let config = RigConfig::default();
        for setup_type in SetupType::ALL {
            for spot_type in referenced_spots(setup_type) {
                assert!(
                    config.spot(setup_type, spot_type).is_ok(),
                    "{setup_type} catalog is missing {spot_type}"
                );
            }
        }
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = RigConfig::from_json_str(
            r#"{"dj":{"spots":[{"type":"middle","position":{"x":0,"y":2,"z":0}}]}}"#,
        )
        .unwrap();

        assert_eq!(config.spots_for(SetupType::Dj).len(), 1);
        assert_eq!(config.spots_for(SetupType::Dj)[0].position.y, 2.0);
        assert_eq!(config.producer, SpotCatalog::producer());
    }

    #[test]
    fn rejects_duplicate_spots() {
        let err = RigConfig::from_json_str(
            r#"{"musician":{"spots":[{"type":"pedalboard"},{"type":"pedalboard"}]}}"#,
        )
        .unwrap_err();
        assert!(format!("{err}").contains("pedalboard"));
    }

    #[test]
    fn unknown_spot_is_an_error() {
        let config = RigConfig::default();
        let err = config.spot(SetupType::Dj, "balcony").unwrap_err();
        assert!(matches!(err, RigError::UnknownSpot(ref spot) if spot == "balcony"));
        assert!(config.spots_for(None).is_empty());
    }

    #[test]
    fn unknown_setup_type_resolves_spots_from_any_catalog() {
        use crate::{check_placement, DeviceDescriptor, PlacementVerdict};

        let config = RigConfig::default();
        let spot = config.spot(None, "pedalboard").unwrap();
        assert_eq!(spot.spot_type, "pedalboard");
        assert!(config.spot(None, "balcony").is_err());

        // The check then answers with a role mismatch instead of failing.
        let mixer = DeviceDescriptor::typed("mixer");
        let middle = config.spot(None, "middle").unwrap();
        assert_eq!(
            check_placement(&mixer, middle, None, &[]),
            PlacementVerdict::RoleMismatch
        );
    }
}
