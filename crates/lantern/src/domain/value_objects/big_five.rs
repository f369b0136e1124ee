//! BigFive - Five trait scores of a monster, each kept within 0..=100

use serde::{Deserialize, Serialize};

pub const TRAIT_MIN: u8 = 0;
pub const TRAIT_MAX: u8 = 100;
pub const TRAIT_INITIAL: u8 = 50;

/// Big Five trait scores
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", try_from = "StoredBigFive")]
pub struct BigFive {
    pub openness: u8,
    pub conscientiousness: u8,
    pub extraversion: u8,
    pub agreeableness: u8,
    pub emotional_stability: u8,
}

/// Unchecked wire form; scores above [`TRAIT_MAX`] are rejected on the way in
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredBigFive {
    openness: u8,
    conscientiousness: u8,
    extraversion: u8,
    agreeableness: u8,
    emotional_stability: u8,
}

impl TryFrom<StoredBigFive> for BigFive {
    type Error = String;

    fn try_from(stored: StoredBigFive) -> Result<Self, Self::Error> {
        let scores = [
            ("openness", stored.openness),
            ("conscientiousness", stored.conscientiousness),
            ("extraversion", stored.extraversion),
            ("agreeableness", stored.agreeableness),
            ("emotionalStability", stored.emotional_stability),
        ];
        if let Some((name, score)) = scores.iter().find(|(_, score)| *score > TRAIT_MAX) {
            return Err(format!("{name} must be at most {TRAIT_MAX}, got {score}"));
        }

        Ok(Self {
            openness: stored.openness,
            conscientiousness: stored.conscientiousness,
            extraversion: stored.extraversion,
            agreeableness: stored.agreeableness,
            emotional_stability: stored.emotional_stability,
        })
    }
}

/// Partial trait changes; `None` leaves the trait untouched
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BigFiveDelta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openness: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conscientiousness: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extraversion: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agreeableness: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emotional_stability: Option<i32>,
}

impl BigFiveDelta {
    pub fn openness(delta: i32) -> Self {
        Self {
            openness: Some(delta),
            ..Self::default()
        }
    }

    pub fn conscientiousness(delta: i32) -> Self {
        Self {
            conscientiousness: Some(delta),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl Default for BigFive {
    fn default() -> Self {
        Self {
            openness: TRAIT_INITIAL,
            conscientiousness: TRAIT_INITIAL,
            extraversion: TRAIT_INITIAL,
            agreeableness: TRAIT_INITIAL,
            emotional_stability: TRAIT_INITIAL,
        }
    }
}

impl BigFive {
    /// Apply deltas, clamping every touched trait into 0..=100
    pub fn apply(&mut self, delta: &BigFiveDelta) {
        adjust(&mut self.openness, delta.openness);
        adjust(&mut self.conscientiousness, delta.conscientiousness);
        adjust(&mut self.extraversion, delta.extraversion);
        adjust(&mut self.agreeableness, delta.agreeableness);
        adjust(&mut self.emotional_stability, delta.emotional_stability);
    }
}

fn adjust(score: &mut u8, delta: Option<i32>) {
    if let Some(delta) = delta {
        let next = i64::from(*score) + i64::from(delta);
        *score = next.clamp(i64::from(TRAIT_MIN), i64::from(TRAIT_MAX)) as u8;
    }
}
