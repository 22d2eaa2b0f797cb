use crate::models::RecommendedItem;

use super::policy::{PolicyOutcome, Selection};

pub const GENERIC_EXPLANATION: &str = "Popular item you haven't seen yet";

/// Rationale shown next to an item, based on what the policy actually did
pub fn explanation_for(outcome: &PolicyOutcome) -> String {
    match outcome {
        PolicyOutcome::Affinity { genre } => format!("Because you like {}", genre),
        PolicyOutcome::Baseline => GENERIC_EXPLANATION.to_string(),
    }
}

/// Attaches explanations and the applied variant tag to every selected item
pub fn explain(selection: &Selection<'_>) -> Vec<RecommendedItem> {
    let explanation = explanation_for(&selection.outcome);
    let variant = selection.outcome.variant();

    selection
        .items
        .iter()
        .map(|item| RecommendedItem::new(item, explanation.clone(), variant))
        .collect()
}
