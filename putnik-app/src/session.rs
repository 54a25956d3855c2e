//! The shared application state object.
//!
//! One [`Session`] is constructed at startup, hydrated from the vault,
//! and handed by reference to every view. Mutators take `&self`; state
//! lives behind a mutex so detached tasks and views can share the
//! session through an `Arc`.
//!
//! Persistence and remote sync are deliberately best-effort: mutators
//! update the in-memory state synchronously, then spawn detached writes
//! (see [`crate::sync`]). Hydration and logout follow the same contract.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use putnik_api::{GuideClient, decode_claims};
use putnik_core::{
    Attraction, Category, DraftError, Route, RouteDraft, UserRoute, aggregate, curated_routes,
};

use crate::sync::{favorites_payload, push_favorites, spawn_detached};
use crate::vault::{Vault, keys};

/// Profile fields shown on the account screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// Account login; read-only in the UI, filled from token claims.
    pub username: String,
    /// Display name.
    pub name: String,
    /// Contact phone.
    pub phone: String,
    /// Contact email.
    pub email: String,
}

/// A partial profile edit; `None` fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfilePatch {
    /// New login.
    pub username: Option<String>,
    /// New display name.
    pub name: Option<String>,
    /// New contact phone.
    pub phone: Option<String>,
    /// New contact email.
    pub email: Option<String>,
}

/// Persisted authentication state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthState {
    /// Bearer token.
    pub token: String,
    /// Server-assigned role.
    pub role: String,
}

#[derive(Debug, Default)]
struct SessionState {
    interests: HashSet<Category>,
    favorite_route_ids: HashSet<String>,
    favorite_attraction_ids: HashSet<String>,
    draft: RouteDraft,
    user_routes: Vec<UserRoute>,
    auth: Option<AuthState>,
    user_id: Option<String>,
    profile: Profile,
}

/// The application state shared across views.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use putnik_api::GuideClient;
/// use putnik_app::{MemoryVault, Session};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let session = Session::new(Arc::new(MemoryVault::new()), Arc::new(GuideClient::new()?));
/// assert!(session.auth().is_none());
/// assert_eq!(session.browseable_routes().len(), 3); // the curated catalogue
/// # Ok(())
/// # }
/// ```
pub struct Session {
    state: Mutex<SessionState>,
    curated: Vec<Route>,
    vault: Arc<dyn Vault>,
    client: Arc<GuideClient>,
}

impl Session {
    /// Create a session over the given vault and API client. The curated
    /// catalogue is materialized once here and never mutated.
    #[must_use]
    pub fn new(vault: Arc<dyn Vault>, client: Arc<GuideClient>) -> Self {
        Self {
            state: Mutex::new(SessionState::default()),
            curated: curated_routes(),
            vault,
            client,
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // --- favourites ---

    /// Favourite route ids.
    #[must_use]
    pub fn favorite_route_ids(&self) -> HashSet<String> {
        self.lock().favorite_route_ids.clone()
    }

    /// Favourite attraction ids.
    #[must_use]
    pub fn favorite_attraction_ids(&self) -> HashSet<String> {
        self.lock().favorite_attraction_ids.clone()
    }

    /// Whether a route is favourited.
    #[must_use]
    pub fn is_favorite_route(&self, id: &str) -> bool {
        self.lock().favorite_route_ids.contains(id)
    }

    /// Whether an attraction is favourited.
    #[must_use]
    pub fn is_favorite_attraction(&self, id: &str) -> bool {
        self.lock().favorite_attraction_ids.contains(id)
    }

    /// Flip a route in or out of the favourite set.
    ///
    /// The in-memory set changes synchronously; the vault write and the
    /// server sync run detached and may fail silently.
    pub fn toggle_favorite_route(&self, id: &str) {
        let (routes, attractions, token, user_id) = {
            let mut state = self.lock();
            toggle(&mut state.favorite_route_ids, id);
            snapshot_favorites(&state)
        };
        self.persist_favorites(keys::FAVORITE_ROUTES, routes.clone());
        self.spawn_favorite_sync(routes, attractions, token, user_id);
    }

    /// Flip an attraction in or out of the favourite set.
    ///
    /// Same detached-write contract as [`Session::toggle_favorite_route`].
    pub fn toggle_favorite_attraction(&self, id: &str) {
        let (routes, attractions, token, user_id) = {
            let mut state = self.lock();
            toggle(&mut state.favorite_attraction_ids, id);
            snapshot_favorites(&state)
        };
        self.persist_favorites(keys::FAVORITE_ATTRACTIONS, attractions.clone());
        self.spawn_favorite_sync(routes, attractions, token, user_id);
    }

    fn persist_favorites(&self, key: &'static str, mut ids: Vec<String>) {
        ids.sort();
        let vault = Arc::clone(&self.vault);
        spawn_detached(async move {
            let Ok(json) = serde_json::to_string(&ids) else {
                return;
            };
            if let Err(err) = vault.put(key, &json) {
                log::debug!("favourite persist skipped: {err}");
            }
        });
    }

    fn spawn_favorite_sync(
        &self,
        routes: Vec<String>,
        attractions: Vec<String>,
        token: Option<String>,
        user_id: Option<String>,
    ) {
        let client = Arc::clone(&self.client);
        let payload = favorites_payload(routes, attractions);
        spawn_detached(push_favorites(client, token, user_id, payload));
    }

    // --- interests ---

    /// Categories the user marked as interesting.
    #[must_use]
    pub fn interests(&self) -> HashSet<Category> {
        self.lock().interests.clone()
    }

    /// Replace the interest set.
    pub fn set_interests(&self, interests: HashSet<Category>) {
        self.lock().interests = interests;
    }

    // --- route draft ---

    /// Stops currently in the draft.
    #[must_use]
    pub fn draft_stops(&self) -> Vec<Attraction> {
        self.lock().draft.stops().to_vec()
    }

    /// Add a stop to the draft; duplicate ids are a no-op. Returns
    /// whether the draft changed.
    pub fn add_stop(&self, attraction: Attraction) -> bool {
        self.lock().draft.add(attraction)
    }

    /// Remove a draft stop by attraction id.
    pub fn remove_stop(&self, id: &str) {
        self.lock().draft.remove(id);
    }

    /// Reorder the draft; out-of-range indices are ignored.
    pub fn move_stop(&self, from: usize, to: usize) {
        self.lock().draft.move_stop(from, to);
    }

    /// Drop every draft stop.
    pub fn clear_draft(&self) {
        self.lock().draft.clear();
    }

    /// Finalize the draft into a user route, store it and clear the
    /// draft.
    ///
    /// # Errors
    /// [`DraftError::Empty`] when the draft has no stops; the draft is
    /// left untouched in that case.
    pub fn finalize_draft(&self, title: Option<&str>) -> Result<UserRoute, DraftError> {
        let created_at_ms = unix_millis();
        let mut state = self.lock();
        let route = state.draft.finalize(title, created_at_ms)?;
        state.draft.clear();
        insert_user_route(&mut state.user_routes, route.clone());
        Ok(route)
    }

    // --- routes ---

    /// User routes, most recent first.
    #[must_use]
    pub fn user_routes(&self) -> Vec<UserRoute> {
        self.lock().user_routes.clone()
    }

    /// Store a user route at the front, replacing any same-id entry.
    pub fn add_user_route(&self, route: UserRoute) {
        insert_user_route(&mut self.lock().user_routes, route);
    }

    /// The browsable route list: user routes, then the curated
    /// catalogue.
    #[must_use]
    pub fn browseable_routes(&self) -> Vec<Route> {
        aggregate(&self.lock().user_routes, &self.curated)
    }

    /// Find a browsable route by id. With colliding ids the user route
    /// wins, matching the aggregated ordering.
    #[must_use]
    pub fn find_route(&self, id: &str) -> Option<Route> {
        self.browseable_routes().into_iter().find(|r| r.id == id)
    }

    // --- auth and profile ---

    /// Current auth state.
    #[must_use]
    pub fn auth(&self) -> Option<AuthState> {
        self.lock().auth.clone()
    }

    /// Current bearer token.
    #[must_use]
    pub fn auth_token(&self) -> Option<String> {
        self.lock().auth.as_ref().map(|a| a.token.clone())
    }

    /// Account id derived from the token claims.
    #[must_use]
    pub fn user_id(&self) -> Option<String> {
        self.lock().user_id.clone()
    }

    /// Current profile.
    #[must_use]
    pub fn profile(&self) -> Profile {
        self.lock().profile.clone()
    }

    /// Install a bearer token and role, derive the user id and login
    /// from the token claims, and persist auth (detached).
    pub fn set_auth(&self, token: impl Into<String>, role: impl Into<String>) {
        let auth = AuthState {
            token: token.into(),
            role: role.into(),
        };
        let claims = decode_claims(&auth.token).unwrap_or_default();
        {
            let mut state = self.lock();
            state.user_id = claims.user_id;
            if let Some(username) = claims.username {
                state.profile.username = username;
            }
            state.auth = Some(auth.clone());
        }
        let vault = Arc::clone(&self.vault);
        spawn_detached(async move {
            let Ok(json) = serde_json::to_string(&auth) else {
                return;
            };
            if let Err(err) = vault.put(keys::AUTH, &json) {
                log::debug!("auth persist skipped: {err}");
            }
        });
    }

    /// Drop the authenticated identity and its persisted traces.
    ///
    /// Favourite sets, local and persisted, survive a logout; only
    /// auth, the derived user id and the persisted profile are cleared.
    pub fn logout(&self) {
        {
            let mut state = self.lock();
            state.auth = None;
            state.user_id = None;
        }
        let vault = Arc::clone(&self.vault);
        spawn_detached(async move {
            for key in [keys::AUTH, keys::PROFILE] {
                if let Err(err) = vault.delete(key) {
                    log::debug!("logout cleanup skipped for {key}: {err}");
                }
            }
        });
    }

    /// Merge a profile edit and persist the result (detached).
    pub fn update_profile(&self, patch: ProfilePatch) {
        let merged = {
            let mut state = self.lock();
            let profile = &mut state.profile;
            if let Some(username) = patch.username {
                profile.username = username;
            }
            if let Some(name) = patch.name {
                profile.name = name;
            }
            if let Some(phone) = patch.phone {
                profile.phone = phone;
            }
            if let Some(email) = patch.email {
                profile.email = email;
            }
            profile.clone()
        };
        let vault = Arc::clone(&self.vault);
        spawn_detached(async move {
            let Ok(json) = serde_json::to_string(&merged) else {
                return;
            };
            if let Err(err) = vault.put(keys::PROFILE, &json) {
                log::debug!("profile persist skipped: {err}");
            }
        });
    }

    /// Restore persisted state from the vault.
    ///
    /// Unknown or corrupt values are ignored key by key; hydration never
    /// fails. Auth goes through [`Session::set_auth`] so the claims are
    /// re-derived.
    pub fn hydrate(&self) {
        if let Some(auth) = self.read_json::<AuthState>(keys::AUTH) {
            self.set_auth(auth.token, auth.role);
        }
        if let Some(profile) = self.read_json::<Profile>(keys::PROFILE) {
            let mut state = self.lock();
            // The stored profile wins over claim-derived fields, except
            // where it is blank.
            if !profile.username.is_empty() {
                state.profile.username = profile.username;
            }
            state.profile.name = profile.name;
            state.profile.phone = profile.phone;
            state.profile.email = profile.email;
        }
        if let Some(ids) = self.read_json::<Vec<String>>(keys::FAVORITE_ROUTES) {
            self.lock().favorite_route_ids = ids.into_iter().collect();
        }
        if let Some(ids) = self.read_json::<Vec<String>>(keys::FAVORITE_ATTRACTIONS) {
            self.lock().favorite_attraction_ids = ids.into_iter().collect();
        }
    }

    fn read_json<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.vault.get(key) {
            Ok(Some(raw)) => serde_json::from_str(&raw).ok(),
            Ok(None) => None,
            Err(err) => {
                log::debug!("hydration skipped for {key}: {err}");
                None
            }
        }
    }
}

fn toggle(set: &mut HashSet<String>, id: &str) {
    if !set.remove(id) {
        set.insert(id.to_owned());
    }
}

fn snapshot_favorites(
    state: &SessionState,
) -> (Vec<String>, Vec<String>, Option<String>, Option<String>) {
    (
        state.favorite_route_ids.iter().cloned().collect(),
        state.favorite_attraction_ids.iter().cloned().collect(),
        state.auth.as_ref().map(|a| a.token.clone()),
        state.user_id.clone(),
    )
}

fn insert_user_route(routes: &mut Vec<UserRoute>, route: UserRoute) {
    routes.retain(|r| r.id != route.id);
    routes.insert(0, route);
}

fn unix_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
        .unwrap_or(0)
}
