use std::{collections::HashSet, fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::RigError;

/// The kind of rig being assembled. Chosen once per setup; switching it
/// conceptually starts a new setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SetupType {
    #[serde(rename = "DJ")]
    Dj,
    Producer,
    Musician,
}

impl SetupType {
    pub const ALL: [SetupType; 3] = [SetupType::Dj, SetupType::Producer, SetupType::Musician];

    pub fn as_str(self) -> &'static str {
        match self {
            SetupType::Dj => "DJ",
            SetupType::Producer => "Producer",
            SetupType::Musician => "Musician",
        }
    }

    /// Parses a setup type, mapping anything unrecognised to `None` instead
    /// of failing. Engine operations treat `None` as an unknown setup type.
    pub fn parse_lenient(value: &str) -> Option<Self> {
        value.parse().ok()
    }
}

impl fmt::Display for SetupType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SetupType {
    type Err = RigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dj" => Ok(SetupType::Dj),
            "producer" => Ok(SetupType::Producer),
            "musician" => Ok(SetupType::Musician),
            _ => Err(RigError::UnknownSetupType(s.to_string())),
        }
    }
}

/// Any piece of gear supplied by the catalog or persistence layer. The engine
/// only reads `name`, `device_type` and `spot_type`; connector lists are
/// carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceDescriptor {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub device_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spot_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inputs: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outputs: Option<Vec<Value>>,
}

impl DeviceDescriptor {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn typed(device_type: impl Into<String>) -> Self {
        Self {
            device_type: Some(device_type.into()),
            ..Default::default()
        }
    }

    pub fn with_type(mut self, device_type: impl Into<String>) -> Self {
        self.device_type = Some(device_type.into());
        self
    }

    /// Returns a copy of the descriptor assigned to `spot_type`.
    pub fn placed_at(&self, spot_type: impl Into<String>) -> Self {
        Self {
            spot_type: Some(spot_type.into()),
            ..self.clone()
        }
    }

    pub fn lower_name(&self) -> String {
        self.name.to_lowercase()
    }

    /// Lower-cased type tag, empty when the device carries none.
    pub fn lower_type(&self) -> String {
        self.device_type
            .as_deref()
            .map(str::to_lowercase)
            .unwrap_or_default()
    }
}

/// Coordinate of a spot inside the scene. Owned by the scene configuration;
/// the engine never computes it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// A named placement slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spot {
    #[serde(rename = "type")]
    pub spot_type: String,
    #[serde(default)]
    pub position: Position,
}

impl Spot {
    pub fn new(spot_type: impl Into<String>, x: f32, y: f32, z: f32) -> Self {
        Self {
            spot_type: spot_type.into(),
            position: Position { x, y, z },
        }
    }

    /// Spot without a meaningful coordinate, handy when only the identifier
    /// matters.
    pub fn named(spot_type: impl Into<String>) -> Self {
        Self::new(spot_type, 0.0, 0.0, 0.0)
    }
}

/// Spot identifiers currently claimed by `devices`.
pub fn occupied_spots(devices: &[DeviceDescriptor]) -> HashSet<&str> {
    devices
        .iter()
        .filter_map(|device| device.spot_type.as_deref())
        .collect()
}

/// An ordered device list plus the setup type it was built for. Treated as a
/// value: helpers return new setups instead of mutating in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Setup {
    #[serde(default, deserialize_with = "lenient_setup_type")]
    pub setup_type: Option<SetupType>,
    #[serde(default)]
    pub devices: Vec<DeviceDescriptor>,
}

impl Setup {
    pub fn new(setup_type: impl Into<Option<SetupType>>) -> Self {
        Self {
            setup_type: setup_type.into(),
            devices: Vec::new(),
        }
    }

    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn occupied_spots(&self) -> HashSet<&str> {
        occupied_spots(&self.devices)
    }

    /// Device currently sitting in `spot_type`, if any.
    pub fn occupant(&self, spot_type: &str) -> Option<&DeviceDescriptor> {
        self.devices
            .iter()
            .find(|device| device.spot_type.as_deref() == Some(spot_type))
    }

    pub fn with_device(&self, device: DeviceDescriptor) -> Self {
        let mut devices = self.devices.clone();
        devices.push(device);
        Self {
            setup_type: self.setup_type,
            devices,
        }
    }
}

fn lenient_setup_type<'de, D>(deserializer: D) -> Result<Option<SetupType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(SetupType::parse_lenient))
}
