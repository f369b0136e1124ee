//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    AdjustTraitsRequest,
    // Analysis models
    AnalyzeRequest,
    // Monster models
    BigFiveResponse,
    CoreValueResponse,
    DarksideWarningRequest,
    ErrorResponse,
    EvolutionResponse,
    GrantXpRequest,
    InitializeMonsterRequest,
    LogActionRequest,
    LogActionResponse,
    MonsterResponse,
    ProgressionResponse,
    UnlockSkillRequest,
    ValueAnalysisResponse,
    ValueFindingResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Analysis endpoints
        super::analyze::analyze,
        super::analyze::list_values,
        // Monster endpoints
        super::monster::get_monster,
        super::monster::initialize_monster,
        super::monster::grant_xp,
        super::monster::adjust_traits,
        super::monster::log_action,
        super::monster::unlock_skill,
        super::monster::add_darkside_warning,
        super::monster::get_evolution,
        super::monster::evolve,
    ),
    info(
        title = "Lantern API",
        version = "0.1.0",
        description = "Values reflection and monster progression.\n\nAnswers about envy, rage and loss are turned into a values analysis; value-driven actions grow the monster.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Analysis", description = "Analysis - Values analysis via Gemini"),
        (name = "Monster", description = "Monster - XP, traits, streaks and evolution"),
    ),
    components(
        schemas(
            // Analysis
            AnalyzeRequest,
            ValueFindingResponse,
            ValueAnalysisResponse,
            CoreValueResponse,
            ErrorResponse,
            // Monster
            InitializeMonsterRequest,
            GrantXpRequest,
            AdjustTraitsRequest,
            LogActionRequest,
            UnlockSkillRequest,
            DarksideWarningRequest,
            BigFiveResponse,
            MonsterResponse,
            EvolutionResponse,
            ProgressionResponse,
            LogActionResponse,
        )
    ),
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        for path in [
            "/api/analyze",
            "/api/values",
            "/api/monster",
            "/api/monster/xp",
            "/api/monster/traits",
            "/api/monster/actions",
            "/api/monster/skills",
            "/api/monster/warnings",
            "/api/monster/evolution",
            "/api/monster/evolve",
        ] {
            assert!(paths.contains(&path), "missing {path}");
        }
    }
}
