use std::cmp::Ordering;

use crate::domain::{PriceTier, Shop, ShopCategory};

use super::selection::{DetailSelection, ToggleSet};

/// Sort order of the shop directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShopSort {
    #[default]
    Rating,
    Distance,
    Reviews,
    Name,
}

impl ShopSort {
    pub const ALL: [ShopSort; 4] = [Self::Rating, Self::Distance, Self::Reviews, Self::Name];

    pub fn label(self) -> &'static str {
        match self {
            Self::Rating => "Highest Rated",
            Self::Distance => "Nearest",
            Self::Reviews => "Most Reviews",
            Self::Name => "Name A-Z",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Rating => Self::Distance,
            Self::Distance => Self::Reviews,
            Self::Reviews => Self::Name,
            Self::Name => Self::Rating,
        }
    }

    fn compare(self, a: &Shop, b: &Shop) -> Ordering {
        match self {
            Self::Rating => b.rating.total_cmp(&a.rating),
            Self::Distance => match (distance_value(&a.distance), distance_value(&b.distance)) {
                (Some(x), Some(y)) => x.total_cmp(&y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
            Self::Reviews => b.reviews.cmp(&a.reviews),
            Self::Name => a
                .name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.name.cmp(&b.name)),
        }
    }
}

/// Numeric prefix of a distance text such as `"0.3 miles"`.
pub fn distance_value(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let end = trimmed
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || c == '.' || (i == 0 && c == '-')))
        .map_or(trimmed.len(), |(i, _)| i);
    trimmed[..end].parse().ok()
}

/// Criteria for the shop directory. `None` means "all".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShopFilter {
    pub search: String,
    pub category: Option<ShopCategory>,
    pub price: Option<PriceTier>,
    pub sort: ShopSort,
}

impl ShopFilter {
    pub fn matches(&self, shop: &Shop) -> bool {
        let needle = self.search.to_lowercase();
        let text_match = needle.is_empty()
            || shop.name.to_lowercase().contains(&needle)
            || shop.category.id().contains(&needle)
            || shop.subcategory.to_lowercase().contains(&needle);

        text_match
            && self.category.is_none_or(|c| c == shop.category)
            && self.price.is_none_or(|p| p == shop.price)
    }

    /// Step the category selector: all, then each category, then back to all.
    pub fn cycle_category(&mut self) {
        self.category = match self.category {
            None => ShopCategory::ALL.first().copied(),
            Some(current) => {
                let idx = ShopCategory::ALL.iter().position(|c| *c == current);
                idx.and_then(|i| ShopCategory::ALL.get(i + 1)).copied()
            }
        };
    }

    pub fn cycle_price(&mut self) {
        self.price = match self.price {
            None => PriceTier::ALL.first().copied(),
            Some(current) => {
                let idx = PriceTier::ALL.iter().position(|p| *p == current);
                idx.and_then(|i| PriceTier::ALL.get(i + 1)).copied()
            }
        };
    }
}

/// Shops satisfying `filter`, ordered by `filter.sort`.
///
/// The sort is stable and the input is left untouched.
pub fn filter_and_sort_shops<'a>(shops: &'a [Shop], filter: &ShopFilter) -> Vec<&'a Shop> {
    let mut result: Vec<&Shop> = shops.iter().filter(|s| filter.matches(s)).collect();
    result.sort_by(|a, b| filter.sort.compare(a, b));
    result
}

/// Shop directory state.
#[derive(Debug, Default)]
pub struct ShopsView {
    pub filter: ShopFilter,
    pub editing: bool,
    pub cursor: usize,
    pub detail: DetailSelection<String>,
    pub favorites: ToggleSet<String>,
}

impl ShopsView {
    pub fn reset_transient(&mut self) {
        self.editing = false;
        self.cursor = 0;
        self.detail.close();
        self.favorites.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::mock;
    use pretty_assertions::assert_eq;

    fn names(shops: &[&Shop]) -> Vec<String> {
        shops.iter().map(|s| s.name.clone()).collect()
    }

    #[test]
    fn test_default_sort_is_rating_desc() {
        let shops = mock::shops();
        let ratings: Vec<f64> = filter_and_sort_shops(&shops, &ShopFilter::default())
            .iter()
            .map(|s| s.rating)
            .collect();
        assert_eq!(ratings, vec![4.9, 4.8, 4.5, 4.3]);
    }

    #[test]
    fn test_distance_sort_uses_numeric_prefix() {
        let shops = mock::shops();
        let filter = ShopFilter {
            sort: ShopSort::Distance,
            ..ShopFilter::default()
        };
        assert_eq!(
            names(&filter_and_sort_shops(&shops, &filter)),
            [
                "Harun Bhat Ghor",
                "Ifan's Beauty Salon",
                "Sazid Fitness Center",
                "Walton Electronics"
            ]
        );
    }

    #[test]
    fn test_unparseable_distance_sorts_last() {
        let mut shops = mock::shops();
        shops[0].distance = "nearby".to_string();
        let filter = ShopFilter {
            sort: ShopSort::Distance,
            ..ShopFilter::default()
        };
        let sorted = filter_and_sort_shops(&shops, &filter);
        assert_eq!(sorted.last().map(|s| s.id.as_str()), Some("1"));
    }

    #[test]
    fn test_equal_ratings_keep_input_order() {
        let mut shops = mock::shops();
        for shop in &mut shops {
            shop.rating = 4.5;
        }
        shops[2].rating = 4.9;
        let filter = ShopFilter::default();

        let ids = |shops: &[Shop]| -> Vec<String> {
            filter_and_sort_shops(shops, &filter)
                .iter()
                .map(|s| s.id.clone())
                .collect()
        };
        assert_eq!(ids(&shops), ["3", "1", "2", "4"]);

        shops.reverse();
        assert_eq!(ids(&shops), ["3", "4", "2", "1"]);
    }

    #[test]
    fn test_reviews_and_name_sorts() {
        let shops = mock::shops();
        let by_reviews = ShopFilter {
            sort: ShopSort::Reviews,
            ..ShopFilter::default()
        };
        let reviews: Vec<u32> = filter_and_sort_shops(&shops, &by_reviews)
            .iter()
            .map(|s| s.reviews)
            .collect();
        assert_eq!(reviews, vec![203, 156, 127, 89]);

        let by_name = ShopFilter {
            sort: ShopSort::Name,
            ..ShopFilter::default()
        };
        assert_eq!(
            names(&filter_and_sort_shops(&shops, &by_name)),
            [
                "Harun Bhat Ghor",
                "Ifan's Beauty Salon",
                "Sazid Fitness Center",
                "Walton Electronics"
            ]
        );
    }

    #[test]
    fn test_search_matches_category_id_and_subcategory() {
        let shops = mock::shops();
        let by_category = ShopFilter {
            search: "fitness".to_string(),
            ..ShopFilter::default()
        };
        assert_eq!(
            names(&filter_and_sort_shops(&shops, &by_category)),
            ["Sazid Fitness Center"]
        );

        let by_subcategory = ShopFilter {
            search: "NAILS".to_string(),
            ..ShopFilter::default()
        };
        assert_eq!(
            names(&filter_and_sort_shops(&shops, &by_subcategory)),
            ["Ifan's Beauty Salon"]
        );
    }

    #[test]
    fn test_category_and_price_filters() {
        let shops = mock::shops();
        let filter = ShopFilter {
            price: Some(PriceTier::Pricey),
            ..ShopFilter::default()
        };
        assert_eq!(
            names(&filter_and_sort_shops(&shops, &filter)),
            ["Sazid Fitness Center", "Walton Electronics"]
        );

        let filter = ShopFilter {
            category: Some(ShopCategory::Healthcare),
            ..ShopFilter::default()
        };
        assert!(filter_and_sort_shops(&shops, &filter).is_empty());
    }

    #[test]
    fn test_sort_does_not_mutate_input() {
        let shops = mock::shops();
        let before: Vec<String> = shops.iter().map(|s| s.id.clone()).collect();
        let _ = filter_and_sort_shops(&shops, &ShopFilter::default());
        let after: Vec<String> = shops.iter().map(|s| s.id.clone()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_distance_value_parsing() {
        assert_eq!(distance_value("0.3 miles"), Some(0.3));
        assert_eq!(distance_value("12 km"), Some(12.0));
        assert_eq!(distance_value("far away"), None);
        assert_eq!(distance_value(""), None);
    }

    #[test]
    fn test_cycle_category_wraps_to_all() {
        let mut filter = ShopFilter::default();
        for _ in 0..ShopCategory::ALL.len() {
            filter.cycle_category();
            assert!(filter.category.is_some());
        }
        filter.cycle_category();
        assert_eq!(filter.category, None);
    }
}
