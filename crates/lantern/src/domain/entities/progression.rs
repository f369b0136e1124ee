//! Progression - Monster record plus daily streak
//!
//! The single owner of the monster and the streak counter. Every mutator
//! is a safe no-op when no monster has been summoned yet and reports
//! whether anything changed, so callers can tell "no monster" apart from
//! "applied".

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::monster::{EvolutionProgress, Monster};
use crate::domain::value_objects::{ActionLevel, BigFiveDelta, Element, EvolutionStage};

/// Storage key the progression snapshot lives under
pub const PROGRESSION_SNAPSHOT_KEY: &str = "monster-storage";

/// Trait bump for actions at level 3 and above
const CONSCIENTIOUSNESS_BONUS: i32 = 2;
/// Trait bump for actions at level 4 and above
const OPENNESS_BONUS: i32 = 3;

/// Full progression state; this is also the persisted snapshot shape
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Progression {
    monster: Option<Monster>,
    streak: u32,
    last_action_date: Option<NaiveDate>,
}

/// Result of logging an action
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ActionOutcome {
    pub level: ActionLevel,
    pub streak: u32,
    /// XP actually added (0 when no monster exists)
    pub xp_granted: u64,
}

impl Progression {
    pub fn monster(&self) -> Option<&Monster> {
        self.monster.as_ref()
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn last_action_date(&self) -> Option<NaiveDate> {
        self.last_action_date
    }

    /// Summon a fresh monster, discarding any previous one
    pub fn initialize(&mut self, element: Element, primary_value_id: &str) -> &Monster {
        self.monster.insert(Monster::new(element, primary_value_id))
    }

    pub fn grant_experience(&mut self, amount: u64) -> bool {
        match self.monster.as_mut() {
            Some(monster) => {
                monster.grant_xp(amount);
                true
            }
            None => false,
        }
    }

    pub fn adjust_traits(&mut self, delta: &BigFiveDelta) -> bool {
        match self.monster.as_mut() {
            Some(monster) => {
                monster.adjust_traits(delta);
                true
            }
            None => false,
        }
    }

    /// Log an action performed on `today`.
    ///
    /// The streak and last action date are updated even without a monster;
    /// XP and trait changes only apply to an existing one.
    pub fn log_action(&mut self, level: ActionLevel, today: NaiveDate) -> ActionOutcome {
        self.streak = match self.last_action_date {
            Some(last) if last == today => self.streak,
            Some(last) if last.succ_opt() == Some(today) => self.streak.saturating_add(1),
            _ => 1,
        };
        self.last_action_date = Some(today);

        let xp = level.xp();
        let xp_granted = if self.grant_experience(xp) { xp } else { 0 };

        if level.get() >= 3 {
            self.adjust_traits(&BigFiveDelta::conscientiousness(CONSCIENTIOUSNESS_BONUS));
        }
        if level.get() >= 4 {
            self.adjust_traits(&BigFiveDelta::openness(OPENNESS_BONUS));
        }

        ActionOutcome {
            level,
            streak: self.streak,
            xp_granted,
        }
    }

    pub fn unlock_skill(&mut self, skill_id: &str) -> bool {
        self.monster
            .as_mut()
            .is_some_and(|monster| monster.unlock_skill(skill_id))
    }

    pub fn check_evolution_eligible(&self) -> bool {
        self.monster
            .as_ref()
            .is_some_and(Monster::is_evolution_eligible)
    }

    /// Advance one form regardless of XP; gate with
    /// [`Progression::check_evolution_eligible`].
    pub fn evolve(&mut self) -> Option<EvolutionStage> {
        self.monster.as_mut()?.evolve()
    }

    pub fn add_darkside_warning(&mut self, warning: &str) -> bool {
        self.monster
            .as_mut()
            .is_some_and(|monster| monster.add_darkside_warning(warning))
    }

    pub fn evolution_progress(&self) -> Option<EvolutionProgress> {
        self.monster.as_ref().map(Monster::evolution_progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::BigFive;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn level(l: u8) -> ActionLevel {
        ActionLevel::new(l).unwrap()
    }

    fn summoned() -> Progression {
        let mut progression = Progression::default();
        progression.initialize(Element::Fire, "V001");
        progression
    }

    #[test]
    fn test_initialize_overwrites_previous_monster() {
        let mut progression = summoned();
        progression.grant_experience(300);
        let first_id = progression.monster().unwrap().id();

        progression.initialize(Element::Light, "V021");
        let monster = progression.monster().unwrap();
        assert_ne!(monster.id(), first_id);
        assert_eq!(monster.total_xp(), 0);
        assert_eq!(monster.element(), Element::Light);
    }

    #[test]
    fn test_mutators_are_noops_without_monster() {
        let mut progression = Progression::default();
        assert!(!progression.grant_experience(10));
        assert!(!progression.adjust_traits(&BigFiveDelta::openness(5)));
        assert!(!progression.unlock_skill("focus"));
        assert!(!progression.add_darkside_warning("burnout"));
        assert!(!progression.check_evolution_eligible());
        assert_eq!(progression.evolve(), None);
        assert_eq!(progression.evolution_progress(), None);
        assert!(progression.monster().is_none());
    }

    #[test]
    fn test_log_action_without_monster_still_counts_streak() {
        let mut progression = Progression::default();
        let outcome = progression.log_action(level(2), date(2026, 10, 16));
        assert_eq!(outcome.streak, 1);
        assert_eq!(outcome.xp_granted, 0);
        assert_eq!(progression.last_action_date(), Some(date(2026, 10, 16)));
        assert!(progression.monster().is_none());
    }

    #[test]
    fn test_streak_first_action() {
        let mut progression = summoned();
        progression.log_action(level(1), date(2026, 10, 16));
        assert_eq!(progression.streak(), 1);
    }

    #[test]
    fn test_streak_same_day_unchanged() {
        let mut progression = summoned();
        progression.log_action(level(1), date(2026, 10, 15));
        progression.log_action(level(1), date(2026, 10, 16));
        progression.log_action(level(1), date(2026, 10, 16));
        assert_eq!(progression.streak(), 2);
    }

    #[test]
    fn test_streak_next_day_increments() {
        let mut progression = summoned();
        progression.log_action(level(1), date(2026, 10, 14));
        progression.log_action(level(1), date(2026, 10, 15));
        progression.log_action(level(1), date(2026, 10, 16));
        assert_eq!(progression.streak(), 3);
    }

    #[test]
    fn test_streak_continues_across_month_and_year() {
        let mut progression = summoned();
        progression.log_action(level(1), date(2026, 12, 31));
        progression.log_action(level(1), date(2027, 1, 1));
        assert_eq!(progression.streak(), 2);
    }

    #[test]
    fn test_streak_resets_after_gap() {
        let mut progression = summoned();
        progression.log_action(level(1), date(2026, 10, 10));
        progression.log_action(level(1), date(2026, 10, 11));
        progression.log_action(level(1), date(2026, 10, 13));
        assert_eq!(progression.streak(), 1);
    }

    #[test]
    fn test_streak_resets_when_clock_goes_backwards() {
        let mut progression = summoned();
        progression.log_action(level(1), date(2026, 10, 16));
        progression.log_action(level(1), date(2026, 10, 15));
        assert_eq!(progression.streak(), 1);
    }

    #[test]
    fn test_log_action_xp_and_traits() {
        let today = date(2026, 10, 16);

        let mut p1 = summoned();
        assert_eq!(p1.log_action(level(1), today).xp_granted, 5);
        assert_eq!(*p1.monster().unwrap().big_five(), BigFive::default());

        let mut p3 = summoned();
        p3.log_action(level(3), today);
        let stats = p3.monster().unwrap().big_five();
        assert_eq!(stats.conscientiousness, 52);
        assert_eq!(stats.openness, 50);
        assert_eq!(p3.monster().unwrap().total_xp(), 30);

        let mut p4 = summoned();
        p4.log_action(level(4), today);
        let stats = p4.monster().unwrap().big_five();
        assert_eq!(stats.conscientiousness, 52);
        assert_eq!(stats.openness, 53);
        assert_eq!(p4.monster().unwrap().total_xp(), 50);

        let mut p5 = summoned();
        assert_eq!(p5.log_action(level(5), today).xp_granted, 100);
        assert_eq!(p5.monster().unwrap().total_xp(), 100);
    }

    #[test]
    fn test_total_xp_never_decreases() {
        let mut progression = summoned();
        let mut previous = 0;
        for (i, amount) in [0, 5, 1_000, 0, u64::MAX, 7].into_iter().enumerate() {
            progression.grant_experience(amount);
            progression.log_action(level((i % 5) as u8 + 1), date(2026, 10, 1 + i as u32));
            let xp = progression.monster().unwrap().total_xp();
            assert!(xp >= previous);
            previous = xp;
        }
        assert_eq!(previous, u64::MAX);
    }

    #[test]
    fn test_trait_bumps_clamp_at_max() {
        let mut progression = summoned();
        progression.adjust_traits(&BigFiveDelta::openness(49));
        progression.log_action(level(4), date(2026, 10, 16));
        assert_eq!(progression.monster().unwrap().big_five().openness, 100);
    }

    #[test]
    fn test_eligibility_uses_next_stage_threshold() {
        let mut progression = summoned();
        progression.grant_experience(100);
        assert!(progression.check_evolution_eligible());
        assert_eq!(progression.evolve(), Some(EvolutionStage::Ember));

        progression.grant_experience(399);
        assert_eq!(progression.monster().unwrap().total_xp(), 499);
        assert!(!progression.check_evolution_eligible());

        progression.grant_experience(1);
        assert!(progression.check_evolution_eligible());
        assert_eq!(progression.evolve(), Some(EvolutionStage::Ignite));
    }

    #[test]
    fn test_evolve_is_unconditional_and_single_step() {
        let mut progression = summoned();
        assert!(!progression.check_evolution_eligible());
        assert_eq!(progression.evolve(), Some(EvolutionStage::Ember));

        progression.grant_experience(100_000);
        assert_eq!(progression.evolve(), Some(EvolutionStage::Ignite));
        assert_eq!(
            progression.monster().unwrap().current_form(),
            EvolutionStage::Ignite
        );
    }

    #[test]
    fn test_evolve_stops_at_final_stage() {
        let mut progression = summoned();
        progression.grant_experience(1_000_000);
        let mut stages = Vec::new();
        while let Some(stage) = progression.evolve() {
            stages.push(stage);
        }
        assert_eq!(stages, EvolutionStage::ORDER[1..].to_vec());
        assert!(!progression.check_evolution_eligible());
        assert_eq!(progression.evolve(), None);
        assert_eq!(
            progression.monster().unwrap().current_form(),
            EvolutionStage::Phoenix
        );
    }

    #[test]
    fn test_unlock_skill_is_idempotent() {
        let mut progression = summoned();
        assert!(progression.unlock_skill("early-riser"));
        assert!(!progression.unlock_skill("early-riser"));
        assert!(progression.unlock_skill("deep-focus"));
        assert_eq!(
            progression.monster().unwrap().unlocked_skills(),
            ["early-riser", "deep-focus"]
        );
    }

    #[test]
    fn test_darkside_warning_is_idempotent() {
        let mut progression = summoned();
        assert!(progression.add_darkside_warning("perfectionism"));
        assert!(!progression.add_darkside_warning("perfectionism"));
        assert_eq!(
            progression.monster().unwrap().darkside_warnings(),
            ["perfectionism"]
        );
    }

    #[test]
    fn test_snapshot_roundtrip_shape() {
        let mut progression = summoned();
        progression.log_action(level(3), date(2026, 10, 16));

        let json = serde_json::to_value(&progression).unwrap();
        assert_eq!(json["streak"], 1);
        assert_eq!(json["lastActionDate"], "2026-10-16");
        assert_eq!(json["monster"]["totalXp"], 30);

        let restored: Progression = serde_json::from_value(json).unwrap();
        assert_eq!(restored, progression);
    }

    #[test]
    fn test_empty_snapshot_deserializes() {
        let restored: Progression = serde_json::from_str("{}").unwrap();
        assert_eq!(restored, Progression::default());
        assert_eq!(restored.streak(), 0);
    }
}
