//! Monster - The progression entity grown by value-driven actions
//!
//! Pure domain entity without infrastructure dependencies. Mutation goes
//! through [`Progression`](super::Progression), which owns the record.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::{BigFive, BigFiveDelta, Element, EvolutionStage};

/// Owner of every monster in this single-user build
pub const LOCAL_USER_ID: &str = "local-user";

/// Monster - traits, element, form and accumulated experience
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Monster {
    id: Uuid,
    user_id: String,
    #[serde(default)]
    primary_value_id: String,
    big_five: BigFive,
    element: Element,
    current_form: EvolutionStage,
    total_xp: u64,
    #[serde(default)]
    unlocked_skills: Vec<String>,
    #[serde(default)]
    darkside_warnings: Vec<String>,
}

/// Where a monster stands relative to its next evolution
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EvolutionProgress {
    pub current_form: EvolutionStage,
    pub next_form: Option<EvolutionStage>,
    pub next_threshold: Option<u64>,
    /// XP still missing for the next form (0 once reached)
    pub xp_to_next: Option<u64>,
    pub eligible: bool,
}

impl Monster {
    /// Summon a fresh monster at the first form
    pub fn new(element: Element, primary_value_id: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: LOCAL_USER_ID.to_string(),
            primary_value_id: primary_value_id.into(),
            big_five: BigFive::default(),
            element,
            current_form: EvolutionStage::default(),
            total_xp: 0,
            unlocked_skills: Vec::new(),
            darkside_warnings: Vec::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn primary_value_id(&self) -> &str {
        &self.primary_value_id
    }

    pub fn big_five(&self) -> &BigFive {
        &self.big_five
    }

    pub fn element(&self) -> Element {
        self.element
    }

    pub fn current_form(&self) -> EvolutionStage {
        self.current_form
    }

    pub fn total_xp(&self) -> u64 {
        self.total_xp
    }

    pub fn unlocked_skills(&self) -> &[String] {
        &self.unlocked_skills
    }

    pub fn darkside_warnings(&self) -> &[String] {
        &self.darkside_warnings
    }

    pub(crate) fn grant_xp(&mut self, amount: u64) {
        self.total_xp = self.total_xp.saturating_add(amount);
    }

    pub(crate) fn adjust_traits(&mut self, delta: &BigFiveDelta) {
        self.big_five.apply(delta);
    }

    pub(crate) fn unlock_skill(&mut self, skill_id: &str) -> bool {
        push_unique(&mut self.unlocked_skills, skill_id)
    }

    pub(crate) fn add_darkside_warning(&mut self, warning: &str) -> bool {
        push_unique(&mut self.darkside_warnings, warning)
    }

    /// True when the XP threshold of the immediate next form is met
    pub fn is_evolution_eligible(&self) -> bool {
        self.current_form
            .next()
            .is_some_and(|next| self.total_xp >= next.threshold())
    }

    /// Step to the next form without checking XP; `None` at the final form
    pub(crate) fn evolve(&mut self) -> Option<EvolutionStage> {
        let next = self.current_form.next()?;
        self.current_form = next;
        Some(next)
    }

    pub fn evolution_progress(&self) -> EvolutionProgress {
        let next_form = self.current_form.next();
        let next_threshold = next_form.map(EvolutionStage::threshold);
        EvolutionProgress {
            current_form: self.current_form,
            next_form,
            next_threshold,
            xp_to_next: next_threshold.map(|t| t.saturating_sub(self.total_xp)),
            eligible: self.is_evolution_eligible(),
        }
    }
}

fn push_unique(items: &mut Vec<String>, item: &str) -> bool {
    if items.iter().any(|existing| existing == item) {
        return false;
    }
    items.push(item.to_string());
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_monster_defaults() {
        let monster = Monster::new(Element::Water, "V021");
        assert_eq!(monster.user_id(), LOCAL_USER_ID);
        assert_eq!(monster.primary_value_id(), "V021");
        assert_eq!(monster.element(), Element::Water);
        assert_eq!(monster.current_form(), EvolutionStage::Wisp);
        assert_eq!(monster.total_xp(), 0);
        assert_eq!(*monster.big_five(), BigFive::default());
        assert!(monster.unlocked_skills().is_empty());
        assert!(monster.darkside_warnings().is_empty());
    }

    #[test]
    fn test_evolution_progress_counts_down() {
        let mut monster = Monster::new(Element::Fire, "V001");
        monster.grant_xp(40);
        let progress = monster.evolution_progress();
        assert_eq!(progress.next_form, Some(EvolutionStage::Ember));
        assert_eq!(progress.next_threshold, Some(100));
        assert_eq!(progress.xp_to_next, Some(60));
        assert!(!progress.eligible);
    }

    #[test]
    fn test_evolution_progress_at_final_form() {
        let mut monster = Monster::new(Element::Fire, "V001");
        monster.grant_xp(20_000);
        while monster.evolve().is_some() {}
        let progress = monster.evolution_progress();
        assert_eq!(progress.current_form, EvolutionStage::Phoenix);
        assert_eq!(progress.next_form, None);
        assert_eq!(progress.xp_to_next, None);
        assert!(!progress.eligible);
    }

    #[test]
    fn test_serializes_camel_case() {
        let monster = Monster::new(Element::Dark, "V051");
        let json = serde_json::to_value(&monster).unwrap();
        assert_eq!(json["userId"], "local-user");
        assert_eq!(json["currentForm"], "wisp");
        assert_eq!(json["element"], "dark");
        assert_eq!(json["totalXp"], 0);
        assert_eq!(json["bigFive"]["emotionalStability"], 50);
        assert!(json["unlockedSkills"].as_array().unwrap().is_empty());
    }
}
