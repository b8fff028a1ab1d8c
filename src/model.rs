use std::{fmt::Display, num::ParseIntError, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum_macros::{EnumCount, EnumIter, EnumString, IntoStaticStr};

/// One of the dashboard's content tabs. The lowercase name doubles as the
/// id of the tab's content panel and as the `currentNav` value.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum Tab {
    Statistics,
    Courses,
    Videos,
    Articles,
    Documentation,
}

impl Tab {
    /// Id of the content panel shown while this tab is selected.
    pub fn panel_id(self) -> &'static str {
        self.into()
    }

    pub fn nav_id(self) -> String {
        format!("nav-{}", self.panel_id())
    }

    /// Statistics only summarizes the other tabs, so nothing can be added
    /// to it.
    pub fn accepts_content(self) -> bool {
        self != Tab::Statistics
    }

    /// Parses the label of a nav link or the value of the select menu.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::from_str(&label.trim().to_lowercase()).ok()
    }
}

impl Display for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.panel_id())
    }
}

/// Completion state of a course section, shown as a background colour.
/// Stored under its colour class.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount, EnumString, IntoStaticStr,
)]
pub enum SectionStatus {
    #[strum(serialize = "bg-red-400")]
    ToDo,
    #[strum(serialize = "bg-orange-400")]
    InProgress,
    #[strum(serialize = "bg-lime-400")]
    Completed,
}

impl SectionStatus {
    /// Prefix shared by every colour class. An element carrying any class
    /// with this prefix already has a colour.
    pub const CLASS_PREFIX: &'static str = "bg-";

    pub fn from_checks(cards_made: bool, complete: bool) -> Self {
        match (cards_made, complete) {
            (true, true) => Self::Completed,
            (true, false) | (false, true) => Self::InProgress,
            (false, false) => Self::ToDo,
        }
    }

    pub fn class(self) -> &'static str {
        self.into()
    }
}

impl Serialize for SectionStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.class())
    }
}

impl<'de> Deserialize<'de> for SectionStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let class = String::deserialize(deserializer)?;
        Self::from_str(&class)
            .map_err(|_| serde::de::Error::custom(format!("unknown colour class '{class}'")))
    }
}

impl Display for SectionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SectionStatus::ToDo => write!(f, "to-do"),
            SectionStatus::InProgress => write!(f, "in-progress"),
            SectionStatus::Completed => write!(f, "completed"),
        }
    }
}

/// Database id of a course or a section, as rendered into element ids.
///
/// Templates pass ids to the handlers both as numbers and as quoted
/// strings, so both forms are accepted when reading stored arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Id(pub u32);

impl Display for Id {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Id {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Id)
    }
}

impl From<u32> for Id {
    fn from(value: u32) -> Self {
        Id(value)
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(u32),
            Text(String),
        }

        match RawId::deserialize(deserializer)? {
            RawId::Number(n) => Ok(Id(n)),
            RawId::Text(s) => s.parse().map_err(serde::de::Error::custom),
        }
    }
}

/// Saved colour of one section, an element of a `course-{id}-sections`
/// array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionColour {
    pub id: Id,
    pub colour: SectionStatus,
}
