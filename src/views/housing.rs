use crate::domain::Listing;

use super::selection::{DetailSelection, ToggleSet};

/// Upper bound of the rent slider.
pub const MAX_RENT: u32 = 5000;

/// Room-count filter offered by the housing search bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoomFilter {
    #[default]
    All,
    Exactly(u32),
}

impl RoomFilter {
    /// Options in the order the selector cycles through them.
    pub const OPTIONS: [RoomFilter; 4] = [
        Self::All,
        Self::Exactly(1),
        Self::Exactly(2),
        Self::Exactly(3),
    ];

    pub fn label(self) -> String {
        match self {
            Self::All => "All Rooms".to_string(),
            Self::Exactly(1) => "1 Room".to_string(),
            // TODO: "3+" still matches exactly three rooms; switch to `>=` once
            // product confirms the label is the intended behavior.
            Self::Exactly(3) => "3+ Rooms".to_string(),
            Self::Exactly(n) => format!("{n} Rooms"),
        }
    }

    pub fn next(self) -> Self {
        let idx = Self::OPTIONS.iter().position(|o| *o == self).unwrap_or(0);
        Self::OPTIONS[(idx + 1) % Self::OPTIONS.len()]
    }

    fn matches(self, rooms: u32) -> bool {
        match self {
            Self::All => true,
            Self::Exactly(n) => rooms == n,
        }
    }
}

/// Criteria for the housing list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HousingFilter {
    pub search: String,
    pub min_price: u32,
    pub max_price: u32,
    pub rooms: RoomFilter,
}

impl Default for HousingFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            min_price: 0,
            max_price: MAX_RENT,
            rooms: RoomFilter::All,
        }
    }
}

impl HousingFilter {
    pub fn matches(&self, listing: &Listing) -> bool {
        let needle = self.search.to_lowercase();
        let text_match = needle.is_empty()
            || listing.title.to_lowercase().contains(&needle)
            || listing.location.to_lowercase().contains(&needle);

        text_match
            && (self.min_price..=self.max_price).contains(&listing.price)
            && self.rooms.matches(listing.rooms)
    }
}

/// Listings satisfying `filter`, in their original order.
///
/// `min_price > max_price` yields nothing.
pub fn filter_listings<'a>(listings: &'a [Listing], filter: &HousingFilter) -> Vec<&'a Listing> {
    listings.iter().filter(|l| filter.matches(l)).collect()
}

/// Step used by the price bound keys.
pub const PRICE_STEP: u32 = 100;

/// Housing screen state.
#[derive(Debug, Default)]
pub struct HousingView {
    pub filter: HousingFilter,
    /// Whether typed characters go into the search box.
    pub editing: bool,
    /// Row cursor in the filtered list.
    pub cursor: usize,
    pub detail: DetailSelection<String>,
    pub favorites: ToggleSet<String>,
}

impl HousingView {
    pub fn raise_min(&mut self) {
        self.filter.min_price = (self.filter.min_price + PRICE_STEP).min(MAX_RENT);
    }

    pub fn lower_min(&mut self) {
        self.filter.min_price = self.filter.min_price.saturating_sub(PRICE_STEP);
    }

    pub fn raise_max(&mut self) {
        self.filter.max_price = (self.filter.max_price + PRICE_STEP).min(MAX_RENT);
    }

    pub fn lower_max(&mut self) {
        self.filter.max_price = self.filter.max_price.saturating_sub(PRICE_STEP);
    }

    pub fn reset_transient(&mut self) {
        self.editing = false;
        self.cursor = 0;
        self.detail.close();
        self.favorites.clear();
    }
}
