//! Monster progression DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use lantern::{ActionOutcome, BigFive, BigFiveDelta, EvolutionProgress, Monster, Progression};

// ============================================
// Request DTOs
// ============================================

/// Summon (or re-summon) the monster
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InitializeMonsterRequest {
    /// fire, water, wind, earth, light or dark
    pub element: String,
    pub primary_value_id: String,
}

/// Grant experience points
#[derive(Debug, Deserialize, ToSchema)]
pub struct GrantXpRequest {
    /// Must not be negative
    pub amount: i64,
}

/// Partial trait changes; omitted traits stay as they are
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdjustTraitsRequest {
    pub openness: Option<i32>,
    pub conscientiousness: Option<i32>,
    pub extraversion: Option<i32>,
    pub agreeableness: Option<i32>,
    pub emotional_stability: Option<i32>,
}

/// Log a value-driven action
#[derive(Debug, Deserialize, ToSchema)]
pub struct LogActionRequest {
    /// 1 to 5
    pub level: i64,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UnlockSkillRequest {
    pub skill_id: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct DarksideWarningRequest {
    pub warning: String,
}

impl From<AdjustTraitsRequest> for BigFiveDelta {
    fn from(req: AdjustTraitsRequest) -> Self {
        Self {
            openness: req.openness,
            conscientiousness: req.conscientiousness,
            extraversion: req.extraversion,
            agreeableness: req.agreeableness,
            emotional_stability: req.emotional_stability,
        }
    }
}

// ============================================
// Response DTOs
// ============================================

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BigFiveResponse {
    pub openness: u8,
    pub conscientiousness: u8,
    pub extraversion: u8,
    pub agreeableness: u8,
    pub emotional_stability: u8,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonsterResponse {
    pub id: Uuid,
    pub user_id: String,
    pub primary_value_id: String,
    pub big_five: BigFiveResponse,
    pub element: String,
    pub current_form: String,
    pub total_xp: u64,
    pub unlocked_skills: Vec<String>,
    pub darkside_warnings: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EvolutionResponse {
    pub current_form: String,
    pub next_form: Option<String>,
    pub next_threshold: Option<u64>,
    pub xp_to_next: Option<u64>,
    pub eligible: bool,
}

/// Whole progression state
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProgressionResponse {
    pub monster: Option<MonsterResponse>,
    pub streak: u32,
    pub last_action_date: Option<NaiveDate>,
    pub evolution: Option<EvolutionResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LogActionResponse {
    pub level: u8,
    pub streak: u32,
    pub xp_granted: u64,
    pub progression: ProgressionResponse,
}

impl From<&BigFive> for BigFiveResponse {
    fn from(stats: &BigFive) -> Self {
        Self {
            openness: stats.openness,
            conscientiousness: stats.conscientiousness,
            extraversion: stats.extraversion,
            agreeableness: stats.agreeableness,
            emotional_stability: stats.emotional_stability,
        }
    }
}

impl From<&Monster> for MonsterResponse {
    fn from(monster: &Monster) -> Self {
        Self {
            id: monster.id(),
            user_id: monster.user_id().to_string(),
            primary_value_id: monster.primary_value_id().to_string(),
            big_five: monster.big_five().into(),
            element: monster.element().to_string(),
            current_form: monster.current_form().to_string(),
            total_xp: monster.total_xp(),
            unlocked_skills: monster.unlocked_skills().to_vec(),
            darkside_warnings: monster.darkside_warnings().to_vec(),
        }
    }
}

impl From<EvolutionProgress> for EvolutionResponse {
    fn from(progress: EvolutionProgress) -> Self {
        Self {
            current_form: progress.current_form.to_string(),
            next_form: progress.next_form.map(|s| s.to_string()),
            next_threshold: progress.next_threshold,
            xp_to_next: progress.xp_to_next,
            eligible: progress.eligible,
        }
    }
}

impl From<&Progression> for ProgressionResponse {
    fn from(progression: &Progression) -> Self {
        Self {
            monster: progression.monster().map(MonsterResponse::from),
            streak: progression.streak(),
            last_action_date: progression.last_action_date(),
            evolution: progression.evolution_progress().map(EvolutionResponse::from),
        }
    }
}

impl LogActionResponse {
    pub fn new(outcome: ActionOutcome, progression: &Progression) -> Self {
        Self {
            level: outcome.level.get(),
            streak: outcome.streak,
            xp_granted: outcome.xp_granted,
            progression: progression.into(),
        }
    }
}
