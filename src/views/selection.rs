//! View-local selection state: favorites, reactions and detail panels.
//!
//! None of these are persisted. They hold identifiers only, so an id that
//! no longer exists in the current collection is simply never matched.

use std::collections::HashSet;
use std::hash::Hash;

use crate::domain::Reaction;

/// A set of ids with a single toggle operation (favorites, saved routes).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleSet<K: Eq + Hash> {
    items: HashSet<K>,
}

impl<K: Eq + Hash> Default for ToggleSet<K> {
    fn default() -> Self {
        Self {
            items: HashSet::new(),
        }
    }
}

impl<K: Eq + Hash> ToggleSet<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `id` if absent, remove it if present. Returns whether it is now in the set.
    pub fn toggle(&mut self, id: K) -> bool {
        if self.items.remove(&id) {
            false
        } else {
            self.items.insert(id);
            true
        }
    }

    pub fn contains(&self, id: &K) -> bool {
        self.items.contains(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

/// Single-select reaction with toggle-off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReactionPicker {
    active: Option<Reaction>,
}

impl ReactionPicker {
    /// Picking the active reaction clears it; picking another replaces it.
    pub fn pick(&mut self, reaction: Reaction) -> Option<Reaction> {
        self.active = if self.active == Some(reaction) {
            None
        } else {
            Some(reaction)
        };
        self.active
    }

    pub fn active(&self) -> Option<Reaction> {
        self.active
    }

    /// Feedback line shown under the article, e.g. "You loved this article!".
    pub fn feedback(&self) -> Option<String> {
        self.active
            .map(|r| format!("You {} this article!", r.past_tense()))
    }
}

/// At most one open detail panel, identified by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailSelection<K> {
    open: Option<K>,
}

impl<K> Default for DetailSelection<K> {
    fn default() -> Self {
        Self { open: None }
    }
}

impl<K: PartialEq + Clone> DetailSelection<K> {
    pub fn open(&mut self, id: K) {
        self.open = Some(id);
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn id(&self) -> Option<&K> {
        self.open.as_ref()
    }

    /// Find the selected item in `items`. Stale ids resolve to `None`.
    pub fn resolve<'a, T>(&self, items: &'a [T], id_of: impl Fn(&T) -> &K) -> Option<&'a T> {
        let open = self.open.as_ref()?;
        items.iter().find(|item| id_of(item) == open)
    }
}
