//! EvolutionStage - Ordered forms a monster passes through

use serde::{Deserialize, Serialize};

/// Evolution stage, ordered from first form to final form
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "lowercase")]
pub enum EvolutionStage {
    #[default]
    Wisp,
    Ember,
    Ignite,
    Blaze,
    Inferno,
    Phoenix,
}

impl EvolutionStage {
    /// All stages in evolution order
    pub const ORDER: [EvolutionStage; 6] = [
        EvolutionStage::Wisp,
        EvolutionStage::Ember,
        EvolutionStage::Ignite,
        EvolutionStage::Blaze,
        EvolutionStage::Inferno,
        EvolutionStage::Phoenix,
    ];

    /// Total XP required to evolve into this stage
    pub fn threshold(self) -> u64 {
        match self {
            EvolutionStage::Wisp => 0,
            EvolutionStage::Ember => 100,
            EvolutionStage::Ignite => 500,
            EvolutionStage::Blaze => 1_500,
            EvolutionStage::Inferno => 5_000,
            EvolutionStage::Phoenix => 15_000,
        }
    }

    /// Position in [`EvolutionStage::ORDER`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The immediate next stage, or `None` at the final stage
    pub fn next(self) -> Option<EvolutionStage> {
        Self::ORDER.get(self.index() + 1).copied()
    }

    pub fn is_final(self) -> bool {
        self.next().is_none()
    }
}

impl std::fmt::Display for EvolutionStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvolutionStage::Wisp => write!(f, "wisp"),
            EvolutionStage::Ember => write!(f, "ember"),
            EvolutionStage::Ignite => write!(f, "ignite"),
            EvolutionStage::Blaze => write!(f, "blaze"),
            EvolutionStage::Inferno => write!(f, "inferno"),
            EvolutionStage::Phoenix => write!(f, "phoenix"),
        }
    }
}

impl std::str::FromStr for EvolutionStage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "wisp" => Ok(EvolutionStage::Wisp),
            "ember" => Ok(EvolutionStage::Ember),
            "ignite" => Ok(EvolutionStage::Ignite),
            "blaze" => Ok(EvolutionStage::Blaze),
            "inferno" => Ok(EvolutionStage::Inferno),
            "phoenix" => Ok(EvolutionStage::Phoenix),
            _ => Err(format!("Unknown evolution stage: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_matches_thresholds() {
        let thresholds: Vec<u64> = EvolutionStage::ORDER.iter().map(|s| s.threshold()).collect();
        assert_eq!(thresholds, vec![0, 100, 500, 1500, 5000, 15000]);
        assert!(thresholds.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_next_walks_one_step() {
        assert_eq!(EvolutionStage::Wisp.next(), Some(EvolutionStage::Ember));
        assert_eq!(EvolutionStage::Inferno.next(), Some(EvolutionStage::Phoenix));
        assert_eq!(EvolutionStage::Phoenix.next(), None);
        assert!(EvolutionStage::Phoenix.is_final());
    }

    #[test]
    fn test_index_matches_order() {
        for (i, stage) in EvolutionStage::ORDER.iter().enumerate() {
            assert_eq!(stage.index(), i);
        }
    }
}
