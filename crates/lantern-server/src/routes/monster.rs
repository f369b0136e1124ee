//! Monster Routes - Progression of the single local monster
//!
//! HTTP handlers that delegate to ProgressionService. Mutations on a
//! missing monster are no-ops in the domain; here they answer 404 so
//! clients can tell the difference.

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use lantern::{ActionLevel, Element};

use super::ApiError;
use crate::application::EvolveOutcome;
use crate::models::{
    AdjustTraitsRequest, DarksideWarningRequest, ErrorResponse, EvolutionResponse,
    GrantXpRequest, InitializeMonsterRequest, LogActionRequest, LogActionResponse,
    ProgressionResponse, UnlockSkillRequest,
};
use crate::AppState;

async fn current(state: &AppState) -> Json<ProgressionResponse> {
    Json((&state.progression.snapshot().await).into())
}

/// Reply with the current state when the mutation applied, 404 otherwise
async fn applied_or_missing(
    state: &AppState,
    applied: bool,
) -> Result<Json<ProgressionResponse>, ApiError> {
    if applied {
        Ok(current(state).await)
    } else {
        Err(ApiError::no_monster())
    }
}

/// Get the progression state
#[utoipa::path(
    get,
    path = "/api/monster",
    responses(
        (status = 200, description = "Current progression", body = ProgressionResponse)
    ),
    tag = "Monster"
)]
pub async fn get_monster(State(state): State<AppState>) -> Json<ProgressionResponse> {
    current(&state).await
}

/// Summon a new monster, replacing any existing one
#[utoipa::path(
    post,
    path = "/api/monster",
    request_body = InitializeMonsterRequest,
    responses(
        (status = 200, description = "Monster summoned", body = ProgressionResponse),
        (status = 400, description = "Unknown element", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Monster"
)]
pub async fn initialize_monster(
    State(state): State<AppState>,
    Json(payload): Json<InitializeMonsterRequest>,
) -> Result<Json<ProgressionResponse>, ApiError> {
    let element: Element = payload.element.parse().map_err(ApiError::bad_request)?;

    state
        .progression
        .initialize(element, &payload.primary_value_id)
        .await?;

    Ok(current(&state).await)
}

/// Grant experience points
#[utoipa::path(
    post,
    path = "/api/monster/xp",
    request_body = GrantXpRequest,
    responses(
        (status = 200, description = "XP granted", body = ProgressionResponse),
        (status = 400, description = "Negative amount", body = ErrorResponse),
        (status = 404, description = "No monster", body = ErrorResponse)
    ),
    tag = "Monster"
)]
pub async fn grant_xp(
    State(state): State<AppState>,
    Json(payload): Json<GrantXpRequest>,
) -> Result<Json<ProgressionResponse>, ApiError> {
    let amount = u64::try_from(payload.amount)
        .map_err(|_| ApiError::bad_request("XP amount must not be negative"))?;

    let applied = state.progression.grant_experience(amount).await?;
    applied_or_missing(&state, applied).await
}

/// Adjust Big Five traits (clamped to 0-100)
#[utoipa::path(
    post,
    path = "/api/monster/traits",
    request_body = AdjustTraitsRequest,
    responses(
        (status = 200, description = "Traits adjusted", body = ProgressionResponse),
        (status = 404, description = "No monster", body = ErrorResponse)
    ),
    tag = "Monster"
)]
pub async fn adjust_traits(
    State(state): State<AppState>,
    Json(payload): Json<AdjustTraitsRequest>,
) -> Result<Json<ProgressionResponse>, ApiError> {
    let applied = state.progression.adjust_traits(&payload.into()).await?;
    applied_or_missing(&state, applied).await
}

/// Log a value-driven action for today
#[utoipa::path(
    post,
    path = "/api/monster/actions",
    request_body = LogActionRequest,
    responses(
        (status = 200, description = "Action logged", body = LogActionResponse),
        (status = 400, description = "Level outside 1-5", body = ErrorResponse)
    ),
    tag = "Monster"
)]
pub async fn log_action(
    State(state): State<AppState>,
    Json(payload): Json<LogActionRequest>,
) -> Result<Json<LogActionResponse>, ApiError> {
    let level = u8::try_from(payload.level)
        .map_err(|e| e.to_string())
        .and_then(ActionLevel::new)
        .map_err(ApiError::bad_request)?;

    let outcome = state.progression.log_action(level).await?;
    let snapshot = state.progression.snapshot().await;

    Ok(Json(LogActionResponse::new(outcome, &snapshot)))
}

/// Unlock a skill (idempotent)
#[utoipa::path(
    post,
    path = "/api/monster/skills",
    request_body = UnlockSkillRequest,
    responses(
        (status = 200, description = "Skill unlocked or already present", body = ProgressionResponse),
        (status = 404, description = "No monster", body = ErrorResponse)
    ),
    tag = "Monster"
)]
pub async fn unlock_skill(
    State(state): State<AppState>,
    Json(payload): Json<UnlockSkillRequest>,
) -> Result<Json<ProgressionResponse>, ApiError> {
    state.progression.unlock_skill(&payload.skill_id).await?;
    require_monster(&state).await
}

/// Record a darkside warning (idempotent)
#[utoipa::path(
    post,
    path = "/api/monster/warnings",
    request_body = DarksideWarningRequest,
    responses(
        (status = 200, description = "Warning recorded or already present", body = ProgressionResponse),
        (status = 404, description = "No monster", body = ErrorResponse)
    ),
    tag = "Monster"
)]
pub async fn add_darkside_warning(
    State(state): State<AppState>,
    Json(payload): Json<DarksideWarningRequest>,
) -> Result<Json<ProgressionResponse>, ApiError> {
    state
        .progression
        .add_darkside_warning(&payload.warning)
        .await?;
    require_monster(&state).await
}

/// Evolution progress of the monster
#[utoipa::path(
    get,
    path = "/api/monster/evolution",
    responses(
        (status = 200, description = "Evolution progress", body = EvolutionResponse),
        (status = 404, description = "No monster", body = ErrorResponse)
    ),
    tag = "Monster"
)]
pub async fn get_evolution(
    State(state): State<AppState>,
) -> Result<Json<EvolutionResponse>, ApiError> {
    state
        .progression
        .evolution_progress()
        .await
        .map(|progress| Json(progress.into()))
        .ok_or_else(ApiError::no_monster)
}

/// Evolve one form when the XP threshold is met
#[utoipa::path(
    post,
    path = "/api/monster/evolve",
    responses(
        (status = 200, description = "Monster evolved", body = ProgressionResponse),
        (status = 404, description = "No monster", body = ErrorResponse),
        (status = 409, description = "Not eligible to evolve", body = ErrorResponse)
    ),
    tag = "Monster"
)]
pub async fn evolve(State(state): State<AppState>) -> Result<Json<ProgressionResponse>, ApiError> {
    match state.progression.evolve_if_eligible().await? {
        EvolveOutcome::Evolved(_) => Ok(current(&state).await),
        EvolveOutcome::NoMonster => Err(ApiError::no_monster()),
        EvolveOutcome::NotEligible(progress) => Err(ApiError::new(
            StatusCode::CONFLICT,
            match progress.xp_to_next {
                Some(xp) => format!("Not enough XP to evolve ({xp} more needed)"),
                None => format!("Already at the final form ({})", progress.current_form),
            },
        )),
    }
}

async fn require_monster(state: &AppState) -> Result<Json<ProgressionResponse>, ApiError> {
    let response = current(state).await;
    if response.monster.is_some() {
        Ok(response)
    } else {
        Err(ApiError::no_monster())
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/monster", get(get_monster).post(initialize_monster))
        .route("/api/monster/xp", post(grant_xp))
        .route("/api/monster/traits", post(adjust_traits))
        .route("/api/monster/actions", post(log_action))
        .route("/api/monster/skills", post(unlock_skill))
        .route("/api/monster/warnings", post(add_darkside_warning))
        .route("/api/monster/evolution", get(get_evolution))
        .route("/api/monster/evolve", post(evolve))
}
