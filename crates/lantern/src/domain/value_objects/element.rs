//! Element - Elemental affinity of a monster

use serde::{Deserialize, Serialize};

/// Elemental affinity, fixed when the monster is summoned
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Water,
    Wind,
    Earth,
    Light,
    Dark,
}

impl Element {
    pub const ALL: [Element; 6] = [
        Element::Fire,
        Element::Water,
        Element::Wind,
        Element::Earth,
        Element::Light,
        Element::Dark,
    ];
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Element::Fire => write!(f, "fire"),
            Element::Water => write!(f, "water"),
            Element::Wind => write!(f, "wind"),
            Element::Earth => write!(f, "earth"),
            Element::Light => write!(f, "light"),
            Element::Dark => write!(f, "dark"),
        }
    }
}

impl std::str::FromStr for Element {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fire" => Ok(Element::Fire),
            "water" => Ok(Element::Water),
            "wind" => Ok(Element::Wind),
            "earth" => Ok(Element::Earth),
            "light" => Ok(Element::Light),
            "dark" => Ok(Element::Dark),
            _ => Err(format!("Unknown element: {}", s)),
        }
    }
}
