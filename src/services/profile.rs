use crate::{
    db::CatalogStore,
    error::{AppError, AppResult},
    models::{ProfileSummary, UserId, UserInfo},
};

use super::history::ranked_genres;

/// Builds the analytics summary for one user.
///
/// Fails with [`AppError::NotFound`] when the user is not in the users table.
/// A user without history gets an empty genre list and a zero count; the
/// location always comes from the user record.
pub fn profile_summary(
    store: &CatalogStore,
    user_id: UserId,
    top_n: usize,
) -> AppResult<ProfileSummary> {
    let user = store
        .user(user_id)
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;

    let mut top_genres = ranked_genres(store, user_id);
    top_genres.truncate(top_n);

    Ok(ProfileSummary {
        user: UserInfo::from(user),
        top_genres,
        location: user.location(),
        history_count: store.interactions_for(user_id).len(),
    })
}
