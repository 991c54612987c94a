//! Shared application state and its transition function.
//!
//! `reduce` is pure: it reads a snapshot and an action and builds the next
//! snapshot. [`Store`] owns the current snapshot behind an `Arc` so views can
//! hold on to a consistent copy while the UI keeps dispatching.

use std::sync::Arc;

use serde::Deserialize;

use crate::domain::mock::DEFAULT_CITY;
use crate::domain::{Listing, Shop, UserPatch, UserProfile};

// ============================================================================
// State
// ============================================================================

/// Application-wide state shared by every section.
///
/// Listings and shops are `Arc`-wrapped so that transitions which do not
/// touch them (city changes, loading flags, errors) share the collections
/// with the previous snapshot instead of copying them.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub current_city: String,
    pub user: Option<UserProfile>,
    /// Always equal to `user.is_some()`.
    pub is_authenticated: bool,
    pub listings: Arc<Vec<Listing>>,
    pub shops: Arc<Vec<Shop>>,
    pub loading: bool,
    pub last_error: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            current_city: DEFAULT_CITY.to_string(),
            user: None,
            is_authenticated: false,
            listings: Arc::new(Vec::new()),
            shops: Arc::new(Vec::new()),
            loading: false,
            last_error: None,
        }
    }
}

// ============================================================================
// Actions
// ============================================================================

/// Named state transitions.
///
/// Deserializes from `{"type": "SET_CITY", "payload": "Chicago"}`; any
/// unrecognized `type` becomes [`StoreAction::Unknown`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StoreAction {
    SetUser(Option<UserProfile>),
    UpdateUser(UserPatch),
    SetCity(String),
    SetListings(Vec<Listing>),
    SetShops(Vec<Shop>),
    SetLoading(bool),
    SetError(String),
    ClearError,
    #[serde(other)]
    Unknown,
}

impl StoreAction {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetUser(_) => "SET_USER",
            Self::UpdateUser(_) => "UPDATE_USER",
            Self::SetCity(_) => "SET_CITY",
            Self::SetListings(_) => "SET_LISTINGS",
            Self::SetShops(_) => "SET_SHOPS",
            Self::SetLoading(_) => "SET_LOADING",
            Self::SetError(_) => "SET_ERROR",
            Self::ClearError => "CLEAR_ERROR",
            Self::Unknown => "UNKNOWN",
        }
    }
}

/// Compute the state that follows `state` under `action`.
///
/// Never fails. Unknown actions, and `UpdateUser` with nobody signed in,
/// return an unchanged copy.
pub fn reduce(state: &AppState, action: &StoreAction) -> AppState {
    let mut next = state.clone();
    match action {
        StoreAction::SetUser(user) => {
            next.is_authenticated = user.is_some();
            next.user = user.clone();
        }
        StoreAction::UpdateUser(patch) => {
            if let Some(user) = &state.user {
                next.user = Some(patch.apply_to(user));
            }
        }
        StoreAction::SetCity(city) => next.current_city = city.clone(),
        StoreAction::SetListings(listings) => next.listings = Arc::new(listings.clone()),
        StoreAction::SetShops(shops) => next.shops = Arc::new(shops.clone()),
        StoreAction::SetLoading(loading) => next.loading = *loading,
        StoreAction::SetError(error) => next.last_error = Some(error.clone()),
        StoreAction::ClearError => next.last_error = None,
        StoreAction::Unknown => {
            tracing::debug!("Ignoring unknown store action");
        }
    }
    next
}

// ============================================================================
// Store Handle
// ============================================================================

/// Owner of the current state snapshot.
///
/// Cloning the snapshot via [`Store::state`] is O(1).
#[derive(Debug, Default)]
pub struct Store {
    state: Arc<AppState>,
}

impl Store {
    pub fn new(initial: AppState) -> Self {
        Self {
            state: Arc::new(initial),
        }
    }

    pub fn state(&self) -> Arc<AppState> {
        Arc::clone(&self.state)
    }

    /// Borrow the current snapshot without bumping the refcount.
    pub fn get(&self) -> &AppState {
        &self.state
    }

    /// Apply `action` and replace the current snapshot.
    pub fn dispatch(&mut self, action: StoreAction) {
        tracing::debug!(action = action.name(), "Dispatching store action");
        let next = reduce(&self.state, &action);
        self.state = Arc::new(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{mock, SubscriptionTier};
    use pretty_assertions::assert_eq;

    fn loaded_state() -> AppState {
        AppState {
            listings: Arc::new(mock::listings()),
            shops: Arc::new(mock::shops()),
            ..AppState::default()
        }
    }

    #[test]
    fn test_initial_state() {
        let state = AppState::default();
        assert_eq!(state.current_city, "New York");
        assert!(state.user.is_none());
        assert!(!state.is_authenticated);
        assert!(state.listings.is_empty());
        assert!(state.shops.is_empty());
        assert!(!state.loading);
        assert!(state.last_error.is_none());
    }

    #[test]
    fn test_set_user_marks_authenticated() {
        let state = reduce(
            &AppState::default(),
            &StoreAction::SetUser(Some(UserProfile::new("Sazid"))),
        );
        assert!(state.is_authenticated);
        assert_eq!(state.user.as_ref().map(|u| u.name.as_str()), Some("Sazid"));

        let state = reduce(&state, &StoreAction::SetUser(None));
        assert!(!state.is_authenticated);
        assert!(state.user.is_none());
    }

    #[test]
    fn test_update_user_merges_fields() {
        let state = reduce(
            &AppState::default(),
            &StoreAction::SetUser(Some(UserProfile::new("Sazid"))),
        );
        let patch = UserPatch {
            subscription_tier: Some(SubscriptionTier::Premium),
            ..UserPatch::default()
        };
        let state = reduce(&state, &StoreAction::UpdateUser(patch));

        let user = state.user.unwrap();
        assert_eq!(user.name, "Sazid");
        assert_eq!(user.subscription_tier, SubscriptionTier::Premium);
    }

    #[test]
    fn test_update_user_without_user_is_noop() {
        let before = AppState::default();
        let patch = UserPatch {
            name: Some("Ghost".to_string()),
            ..UserPatch::default()
        };
        let after = reduce(&before, &StoreAction::UpdateUser(patch));
        assert_eq!(after, before);
    }

    #[test]
    fn test_set_city_leaves_collections_untouched() {
        let before = loaded_state();
        let after = reduce(&before, &StoreAction::SetCity("Chicago".to_string()));

        assert_eq!(after.current_city, "Chicago");
        assert!(Arc::ptr_eq(&before.listings, &after.listings));
        assert!(Arc::ptr_eq(&before.shops, &after.shops));
    }

    #[test]
    fn test_set_listings_replaces_wholesale() {
        let before = loaded_state();
        let only_first: Vec<_> = mock::listings().into_iter().take(1).collect();
        let after = reduce(&before, &StoreAction::SetListings(only_first));

        assert_eq!(after.listings.len(), 1);
        assert_eq!(before.listings.len(), 3, "input snapshot must not change");
    }

    #[test]
    fn test_loading_and_error_flags() {
        let state = reduce(&AppState::default(), &StoreAction::SetLoading(true));
        assert!(state.loading);

        let state = reduce(&state, &StoreAction::SetError("timeout".to_string()));
        assert_eq!(state.last_error.as_deref(), Some("timeout"));

        let state = reduce(&state, &StoreAction::ClearError);
        assert!(state.last_error.is_none());
        assert!(state.loading);
    }

    #[test]
    fn test_unknown_action_leaves_state_unchanged() {
        let before = loaded_state();
        let after = reduce(&before, &StoreAction::Unknown);
        assert_eq!(after, before);
    }

    #[test]
    fn test_action_deserializes_from_tagged_json() {
        let action: StoreAction =
            serde_json::from_str(r#"{"type": "SET_CITY", "payload": "Houston"}"#).unwrap();
        assert_eq!(action, StoreAction::SetCity("Houston".to_string()));

        let action: StoreAction = serde_json::from_str(r#"{"type": "CLEAR_ERROR"}"#).unwrap();
        assert_eq!(action, StoreAction::ClearError);

        let action: StoreAction =
            serde_json::from_str(r#"{"type": "SET_USER", "payload": {"name": "Abrar"}}"#).unwrap();
        assert!(matches!(action, StoreAction::SetUser(Some(ref u)) if u.name == "Abrar"));
    }

    #[test]
    fn test_unrecognized_action_type_maps_to_unknown() {
        let action: StoreAction =
            serde_json::from_str(r#"{"type": "LAUNCH_ROCKET"}"#).unwrap();
        assert_eq!(action, StoreAction::Unknown);
    }

    #[test]
    fn test_store_dispatch_keeps_old_snapshot() {
        let mut store = Store::default();
        let before = store.state();

        store.dispatch(StoreAction::SetCity("Phoenix".to_string()));

        assert_eq!(before.current_city, "New York");
        assert_eq!(store.get().current_city, "Phoenix");
    }
}
