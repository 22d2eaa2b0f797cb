use rand::RngCore;

use crate::{
    db::CatalogStore,
    models::{RecommendationResult, UserId, Variant},
};

use super::{candidates::generate_candidates, explanation::explain, policy::PolicyOutcome};

/// Generates personalized recommendations for a user
///
/// Excludes everything the user has already rated, samples the remaining
/// candidates with the policy behind `variant`, and explains each pick by what
/// the policy actually did. Unknown users and exhausted catalogs produce an
/// empty result rather than an error.
pub fn recommend(
    store: &CatalogStore,
    user_id: UserId,
    variant: Variant,
    limit: usize,
    rng: &mut dyn RngCore,
) -> RecommendationResult {
    if store.user(user_id).is_none() {
        tracing::debug!(user_id, "Recommendation requested for unknown user");
        return RecommendationResult::empty(user_id, variant);
    }

    let candidates = generate_candidates(store, user_id);
    if candidates.is_empty() {
        tracing::debug!(user_id, "No unseen items left");
        return RecommendationResult::empty(user_id, variant);
    }

    let candidate_count = candidates.len();
    let policy = variant.policy();
    let selection = policy.select(store, user_id, candidates, limit, rng);

    let favorite_genre = match &selection.outcome {
        PolicyOutcome::Affinity { genre } => Some(genre.clone()),
        PolicyOutcome::Baseline => None,
    };
    let recommendations = explain(&selection);

    tracing::debug!(
        user_id,
        policy = %policy.variant(),
        applied = %selection.outcome.variant(),
        candidates = candidate_count,
        returned = recommendations.len(),
        "Recommendations generated"
    );

    RecommendationResult {
        user_id,
        variant,
        applied_variant: selection.outcome.variant(),
        favorite_genre,
        count: recommendations.len(),
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::db::catalog::fixtures::*;
    use crate::models::ItemId;
    use crate::services::explanation::GENERIC_EXPLANATION;
    use crate::services::history::seen_items;

    #[test]
    fn test_never_recommends_seen_items() {
        let store = sample_store();
        for seed in 0..20 {
            for variant in [Variant::Baseline, Variant::Affinity] {
                let mut rng = StdRng::seed_from_u64(seed);
                let result = recommend(&store, 1, variant, 10, &mut rng);
                let seen = seen_items(&store, 1);
                assert!(result
                    .recommendations
                    .iter()
                    .all(|r| !seen.contains(&r.item_id)));
            }
        }
    }

    #[test]
    fn test_result_size_is_min_of_limit_and_candidates() {
        let store = sample_store();
        let mut rng = StdRng::seed_from_u64(1);

        // user 1 has 4 unseen items
        for (limit, expected) in [(0, 0), (2, 2), (4, 4), (9, 4)] {
            let result = recommend(&store, 1, Variant::Baseline, limit, &mut rng);
            assert_eq!(result.count, expected);
            assert_eq!(result.recommendations.len(), expected);
        }
    }

    #[test]
    fn test_affinity_match_is_explained_with_genre() {
        let store = sample_store();
        let mut rng = StdRng::seed_from_u64(3);

        let result = recommend(&store, 1, Variant::Affinity, 5, &mut rng);

        assert_eq!(result.variant, Variant::Affinity);
        assert_eq!(result.applied_variant, Variant::Affinity);
        assert_eq!(result.favorite_genre.as_deref(), Some("Action"));
        let ids: HashSet<ItemId> = result.recommendations.iter().map(|r| r.item_id).collect();
        assert_eq!(ids, HashSet::from([5, 7]));
        assert!(result
            .recommendations
            .iter()
            .all(|r| r.genre == "Action" && r.explanation == "Because you like Action"));
    }

    #[test]
    fn test_new_user_affinity_falls_back_with_generic_explanation() {
        let store = sample_store();
        let mut rng = StdRng::seed_from_u64(3);

        let result = recommend(&store, 2, Variant::Affinity, 5, &mut rng);

        assert_eq!(result.variant, Variant::Affinity);
        assert_eq!(result.applied_variant, Variant::Baseline);
        assert_eq!(result.favorite_genre, None);
        assert_eq!(result.count, 5);
        assert!(result
            .recommendations
            .iter()
            .all(|r| r.explanation == GENERIC_EXPLANATION && r.variant == Variant::Baseline));
    }

    #[test]
    fn test_exhausted_catalog_returns_empty() {
        let store = sample_store();
        let mut rng = StdRng::seed_from_u64(3);

        let result = recommend(&store, 3, Variant::Affinity, 5, &mut rng);

        assert_eq!(result.count, 0);
        assert!(result.recommendations.is_empty());
    }

    #[test]
    fn test_unknown_user_returns_empty() {
        let store = sample_store();
        let mut rng = StdRng::seed_from_u64(3);

        let result = recommend(&store, 500, Variant::Baseline, 5, &mut rng);

        assert_eq!(result.user_id, 500);
        assert_eq!(result.count, 0);
    }
}
