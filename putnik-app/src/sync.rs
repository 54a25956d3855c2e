//! Detached best-effort side effects.
//!
//! Favourite toggles and profile edits trigger writes the user never
//! waits for: a vault write and a remote sync. They run as detached
//! tasks, their failures are logged at debug and otherwise swallowed,
//! and nothing deduplicates overlapping runs: two rapid toggles can
//! race and the server keeps whichever write lands last. That is the
//! intended contract, not an oversight; these paths are not
//! correctness-critical and must not grow transactional machinery.

use std::future::Future;
use std::sync::Arc;

use putnik_api::{FavoriteKind, FavoriteRecord, GuideClient};

/// Spawn a fire-and-forget task on the ambient Tokio runtime.
///
/// The task's outcome is intentionally dropped; callers that need the
/// result should await it instead.
///
/// # Panics
/// Panics when called outside a Tokio runtime, as [`tokio::spawn`] does.
pub fn spawn_detached<F>(task: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    drop(tokio::spawn(task));
}

/// Build the favourites payload: routes first, then places.
#[must_use]
pub fn favorites_payload(
    route_ids: impl IntoIterator<Item = String>,
    attraction_ids: impl IntoIterator<Item = String>,
) -> Vec<FavoriteRecord> {
    route_ids
        .into_iter()
        .map(|item_id| FavoriteRecord {
            kind: FavoriteKind::Route,
            item_id,
        })
        .chain(attraction_ids.into_iter().map(|item_id| FavoriteRecord {
            kind: FavoriteKind::Place,
            item_id,
        }))
        .collect()
}

/// Push the favourite sets to the server, best-effort.
///
/// No-op without a token and user id. Failures are logged and dropped.
pub async fn push_favorites(
    client: Arc<GuideClient>,
    token: Option<String>,
    user_id: Option<String>,
    favorites: Vec<FavoriteRecord>,
) {
    let (Some(token), Some(user_id)) = (token, user_id) else {
        return;
    };
    if let Err(err) = client.sync_favorites(&user_id, &token, &favorites).await {
        log::debug!("favourite sync skipped: {err}");
    }
}
