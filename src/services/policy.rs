use rand::{seq::SliceRandom, RngCore};

use crate::{
    db::CatalogStore,
    models::{Item, UserId, Variant},
};

use super::history::ranked_genres;

/// What a policy actually did, which may differ from what was requested
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyOutcome {
    /// Uniform sample over all candidates
    Baseline,
    /// Sample restricted to the user's favorite genre
    Affinity { genre: String },
}

impl PolicyOutcome {
    pub fn variant(&self) -> Variant {
        match self {
            PolicyOutcome::Baseline => Variant::Baseline,
            PolicyOutcome::Affinity { .. } => Variant::Affinity,
        }
    }
}

/// Items picked by a policy together with how they were picked
#[derive(Debug)]
pub struct Selection<'a> {
    pub items: Vec<&'a Item>,
    pub outcome: PolicyOutcome,
}

/// Strategy that turns a user's candidates into a recommendation sample
pub trait PersonalizationPolicy: Send + Sync {
    fn variant(&self) -> Variant;

    /// Picks at most `limit` items from `candidates`.
    ///
    /// Never returns more than `min(limit, candidates.len())` items and never
    /// an item outside `candidates`.
    fn select<'a>(
        &self,
        store: &CatalogStore,
        user_id: UserId,
        candidates: Vec<&'a Item>,
        limit: usize,
        rng: &mut dyn RngCore,
    ) -> Selection<'a>;
}

/// Uniform random sample without replacement, in random order.
///
/// Asking for more than is available returns everything.
pub fn sample_uniform<'a>(
    mut candidates: Vec<&'a Item>,
    limit: usize,
    rng: &mut dyn RngCore,
) -> Vec<&'a Item> {
    let amount = limit.min(candidates.len());
    let (chosen, _) = candidates.partial_shuffle(rng, amount);
    chosen.to_vec()
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BaselinePolicy;

impl PersonalizationPolicy for BaselinePolicy {
    fn variant(&self) -> Variant {
        Variant::Baseline
    }

    fn select<'a>(
        &self,
        _store: &CatalogStore,
        _user_id: UserId,
        candidates: Vec<&'a Item>,
        limit: usize,
        rng: &mut dyn RngCore,
    ) -> Selection<'a> {
        Selection {
            items: sample_uniform(candidates, limit, rng),
            outcome: PolicyOutcome::Baseline,
        }
    }
}

/// Restricts candidates to the user's most frequent genre.
///
/// Falls back to [`BaselinePolicy`] over the full candidate set when the user
/// has no history or no unseen items of that genre remain.
#[derive(Debug, Default, Clone, Copy)]
pub struct AffinityPolicy;

impl PersonalizationPolicy for AffinityPolicy {
    fn variant(&self) -> Variant {
        Variant::Affinity
    }

    fn select<'a>(
        &self,
        store: &CatalogStore,
        user_id: UserId,
        candidates: Vec<&'a Item>,
        limit: usize,
        rng: &mut dyn RngCore,
    ) -> Selection<'a> {
        let Some(favorite) = favorite_genre(store, user_id) else {
            tracing::debug!(user_id, "No history, affinity falls back to baseline");
            return BaselinePolicy.select(store, user_id, candidates, limit, rng);
        };

        let matching: Vec<&'a Item> = candidates
            .iter()
            .copied()
            .filter(|item| item.genre == favorite)
            .collect();

        if matching.is_empty() {
            tracing::debug!(
                user_id,
                genre = %favorite,
                "No unseen items in favorite genre, affinity falls back to baseline"
            );
            return BaselinePolicy.select(store, user_id, candidates, limit, rng);
        }

        Selection {
            items: sample_uniform(matching, limit, rng),
            outcome: PolicyOutcome::Affinity { genre: favorite },
        }
    }
}

/// Most frequent genre in the user's history; ties go to the genre seen first
pub fn favorite_genre(store: &CatalogStore, user_id: UserId) -> Option<String> {
    ranked_genres(store, user_id)
        .into_iter()
        .next()
        .map(|top| top.genre)
}

static BASELINE: BaselinePolicy = BaselinePolicy;
static AFFINITY: AffinityPolicy = AffinityPolicy;

impl Variant {
    /// Strategy implementing this variant
    pub fn policy(self) -> &'static dyn PersonalizationPolicy {
        match self {
            Variant::Baseline => &BASELINE,
            Variant::Affinity => &AFFINITY,
        }
    }
}
