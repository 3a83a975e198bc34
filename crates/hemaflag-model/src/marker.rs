//! Tracked blood-cell markers and versioned template profiles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::disease::DiseaseDescriptor;
use crate::error::ModelError;

/// Status glyph that flags a marker as elevated.
pub const UP_INDICATOR: &str = "↑";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Marker {
    /// Abnormal white blood cell count.
    Awbc,
    /// Sickle red blood cell count.
    Srbc,
}

impl Marker {
    /// Processing order within a row.
    pub const ALL: [Marker; 2] = [Marker::Awbc, Marker::Srbc];

    pub fn code(self) -> &'static str {
        match self {
            Marker::Awbc => "AWBC",
            Marker::Srbc => "SRBC",
        }
    }

    /// Header label of the status column.
    pub fn status_header(self) -> &'static str {
        match self {
            Marker::Awbc => "AWBC#",
            Marker::Srbc => "SRBC#",
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Marker {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().trim_end_matches('#').to_ascii_uppercase().as_str() {
            "AWBC" => Ok(Marker::Awbc),
            "SRBC" => Ok(Marker::Srbc),
            _ => Err(ModelError::UnknownMarker(value.to_string())),
        }
    }
}

/// Template wording version.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Plain wording.
    V1,
    /// Wording with numbered citation markers.
    #[default]
    V2,
}

impl Profile {
    pub fn as_str(self) -> &'static str {
        match self {
            Profile::V1 => "v1",
            Profile::V2 => "v2",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Profile {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "v1" => Ok(Profile::V1),
            "v2" => Ok(Profile::V2),
            _ => Err(ModelError::UnknownProfile(value.to_string())),
        }
    }
}

/// Text bundle applied when a marker is flagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerTemplate {
    pub marker: Marker,
    /// Clinical prompt; fills the prompt cell and leads `总结1`.
    pub prompt: &'static str,
    /// Rationale; fills the basis cell.
    pub basis: &'static str,
    /// Short label for `总结2`.
    pub short: &'static str,
    /// Interpretation for `解读`.
    pub interpretation: &'static str,
    pub disease: DiseaseDescriptor,
}

impl MarkerTemplate {
    /// Keywords that mark free text as already covering this marker.
    pub fn keywords(&self) -> &'static [&'static str] {
        self.disease.keywords
    }
}

/// Numbered literature reference cited by a template profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Reference {
    pub number: u8,
    pub marker: Marker,
    pub citation: &'static str,
}
