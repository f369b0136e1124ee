//! Progression Application Service (Use Case)
//!
//! Owns the single progression record. The snapshot is loaded once at
//! startup and saved after every mutation while the lock is held, so the
//! persisted order always matches the mutation order.

use chrono::NaiveDate;
use std::sync::Arc;
use tokio::sync::Mutex;

use lantern::{
    ActionLevel, ActionOutcome, BigFiveDelta, DomainError, Element, EvolutionProgress,
    EvolutionStage, Monster, Progression, SnapshotRepository, PROGRESSION_SNAPSHOT_KEY,
};

/// Result of a gated evolution attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvolveOutcome {
    Evolved(EvolutionStage),
    /// Threshold not met, or already at the final form
    NotEligible(EvolutionProgress),
    NoMonster,
}

/// Application service for monster progression
pub struct ProgressionService<R: SnapshotRepository + ?Sized> {
    repo: Arc<R>,
    state: Mutex<Progression>,
}

impl<R: SnapshotRepository + ?Sized> ProgressionService<R> {
    /// Restore the last snapshot, or start empty when none exists
    pub async fn load(repo: Arc<R>) -> Result<Self, DomainError> {
        let state = match repo.load(PROGRESSION_SNAPSHOT_KEY).await? {
            Some(snapshot) => serde_json::from_value(snapshot).map_err(|e| {
                DomainError::Repository(format!("Corrupt progression snapshot: {e}"))
            })?,
            None => Progression::default(),
        };

        Ok(Self {
            repo,
            state: Mutex::new(state),
        })
    }

    async fn mutate<T>(
        &self,
        apply: impl FnOnce(&mut Progression) -> T,
    ) -> Result<T, DomainError> {
        let mut state = self.state.lock().await;
        let previous = state.clone();
        let result = apply(&mut state);

        if let Err(e) = self.persist(&state).await {
            // Memory must not run ahead of storage
            *state = previous;
            return Err(e);
        }

        Ok(result)
    }

    async fn persist(&self, state: &Progression) -> Result<(), DomainError> {
        let snapshot = serde_json::to_value(state)
            .map_err(|e| DomainError::Repository(format!("Failed to encode snapshot: {e}")))?;
        self.repo.save(PROGRESSION_SNAPSHOT_KEY, &snapshot).await
    }

    /// Copy of the whole progression state
    pub async fn snapshot(&self) -> Progression {
        self.state.lock().await.clone()
    }

    /// Summon a fresh monster, replacing any existing one
    pub async fn initialize(
        &self,
        element: Element,
        primary_value_id: &str,
    ) -> Result<Monster, DomainError> {
        let monster = self
            .mutate(|p| p.initialize(element, primary_value_id).clone())
            .await?;

        tracing::info!(
            "🔥 Summoned {} monster {} (value {})",
            element,
            monster.id(),
            primary_value_id
        );

        Ok(monster)
    }

    pub async fn grant_experience(&self, amount: u64) -> Result<bool, DomainError> {
        self.mutate(|p| p.grant_experience(amount)).await
    }

    pub async fn adjust_traits(&self, delta: &BigFiveDelta) -> Result<bool, DomainError> {
        self.mutate(|p| p.adjust_traits(delta)).await
    }

    /// Log an action dated with the local calendar day
    pub async fn log_action(&self, level: ActionLevel) -> Result<ActionOutcome, DomainError> {
        self.log_action_on(level, chrono::Local::now().date_naive())
            .await
    }

    pub async fn log_action_on(
        &self,
        level: ActionLevel,
        today: NaiveDate,
    ) -> Result<ActionOutcome, DomainError> {
        let outcome = self.mutate(|p| p.log_action(level, today)).await?;

        tracing::info!(
            "📝 Logged {} action: +{} XP, streak {}",
            level,
            outcome.xp_granted,
            outcome.streak
        );

        Ok(outcome)
    }

    pub async fn unlock_skill(&self, skill_id: &str) -> Result<bool, DomainError> {
        self.mutate(|p| p.unlock_skill(skill_id)).await
    }

    pub async fn check_evolution_eligible(&self) -> bool {
        self.state.lock().await.check_evolution_eligible()
    }

    pub async fn evolution_progress(&self) -> Option<EvolutionProgress> {
        self.state.lock().await.evolution_progress()
    }

    /// Advance one form without checking XP
    pub async fn evolve(&self) -> Result<Option<EvolutionStage>, DomainError> {
        let stage = self.mutate(|p| p.evolve()).await?;
        if let Some(stage) = stage {
            tracing::info!("✨ Monster evolved into {}", stage);
        }
        Ok(stage)
    }

    /// Evolve only when the XP threshold of the next form is met.
    ///
    /// Eligibility is checked and applied under one lock, so a refusal
    /// carries the exact progress it was judged on.
    pub async fn evolve_if_eligible(&self) -> Result<EvolveOutcome, DomainError> {
        let outcome = self
            .mutate(|p| match p.evolution_progress() {
                None => EvolveOutcome::NoMonster,
                Some(progress) if !progress.eligible => EvolveOutcome::NotEligible(progress),
                Some(progress) => match p.evolve() {
                    Some(stage) => EvolveOutcome::Evolved(stage),
                    None => EvolveOutcome::NotEligible(progress),
                },
            })
            .await?;
        if let EvolveOutcome::Evolved(stage) = outcome {
            tracing::info!("✨ Monster evolved into {}", stage);
        }
        Ok(outcome)
    }

    pub async fn add_darkside_warning(&self, warning: &str) -> Result<bool, DomainError> {
        let added = self.mutate(|p| p.add_darkside_warning(warning)).await?;
        if added {
            tracing::info!("🌑 Darkside warning recorded");
        }
        Ok(added)
    }
}
