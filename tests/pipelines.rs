//! Integration tests for the pure filter, sort and pagination pipelines over
//! the built-in data.

use cityguide::domain::{mock, Landlord, Listing, PriceTier, ShopCategory};
use cityguide::views::{
    filter_and_sort_shops, filter_listings, page_tokens, paginate, total_pages, HousingFilter,
    PageToken, RoomFilter, ShopFilter, ShopSort,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn shop_names(filter: &ShopFilter) -> Vec<String> {
    let shops = mock::shops();
    filter_and_sort_shops(&shops, filter)
        .into_iter()
        .map(|s| s.name.clone())
        .collect()
}

fn listing_ids(listings: &[&Listing]) -> Vec<String> {
    listings.iter().map(|l| l.id.clone()).collect()
}

// ============================================================================
// Housing
// ============================================================================

#[test]
fn test_housing_filter_combines_criteria() {
    let listings = mock::listings();
    let filter = HousingFilter {
        search: "heights".to_string(),
        min_price: 1000,
        max_price: 2000,
        rooms: RoomFilter::Exactly(1),
    };
    assert_eq!(listing_ids(&filter_listings(&listings, &filter)), vec!["2"]);
}

#[test]
fn test_housing_search_matches_location() {
    let listings = mock::listings();
    let filter = HousingFilter {
        search: "BASHUNDHARA".to_string(),
        ..HousingFilter::default()
    };
    assert_eq!(listing_ids(&filter_listings(&listings, &filter)), vec!["3"]);
}

#[test]
fn test_inverted_price_range_is_empty() {
    let listings = mock::listings();
    let filter = HousingFilter {
        min_price: 3000,
        max_price: 1000,
        ..HousingFilter::default()
    };
    assert!(filter_listings(&listings, &filter).is_empty());
}

/// Listing with just the fields the housing filter reads.
fn generated_listing(
    id: usize,
    title: String,
    location: String,
    price: u32,
    rooms: u32,
) -> Listing {
    Listing {
        id: id.to_string(),
        title,
        price,
        location,
        rooms,
        bathrooms: 1,
        area: 50,
        images: Vec::new(),
        description: String::new(),
        landlord: Landlord {
            name: "Owner".to_string(),
            phone: "555".to_string(),
            email: "owner@example.com".to_string(),
            rating: 4.0,
        },
        rating: 4.0,
        reviews: 0,
        features: Vec::new(),
        virtual_tour: false,
    }
}

fn listings_strategy() -> impl Strategy<Value = Vec<Listing>> {
    // A small alphabet keeps search hits frequent
    prop::collection::vec(
        ("[abAB ]{0,8}", "[abAB ]{0,8}", 0u32..=6000, 0u32..=4),
        0..24,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (title, location, price, rooms))| {
                generated_listing(i, title, location, price, rooms)
            })
            .collect()
    })
}

/// The housing predicate restated independently of `HousingFilter::matches`.
fn expected_match(listing: &Listing, filter: &HousingFilter) -> bool {
    let needle = filter.search.to_lowercase();
    let text = needle.is_empty()
        || listing.title.to_lowercase().contains(&needle)
        || listing.location.to_lowercase().contains(&needle);
    let rooms = match filter.rooms {
        RoomFilter::All => true,
        RoomFilter::Exactly(n) => listing.rooms == n,
    };
    text && listing.price >= filter.min_price && listing.price <= filter.max_price && rooms
}

proptest! {
    #[test]
    fn prop_housing_filter_is_exact_and_order_preserving(
        listings in listings_strategy(),
        min in 0u32..=6000,
        max in 0u32..=6000,
        rooms in 0usize..4,
        search in "[abAB]{0,2}",
    ) {
        let filter = HousingFilter {
            search,
            min_price: min,
            max_price: max,
            rooms: RoomFilter::OPTIONS[rooms],
        };

        let result = listing_ids(&filter_listings(&listings, &filter));
        // Sound and complete: exactly the matching listings, in input order
        let expected: Vec<String> = listings
            .iter()
            .filter(|l| expected_match(l, &filter))
            .map(|l| l.id.clone())
            .collect();
        prop_assert_eq!(result, expected);
    }

    #[test]
    fn prop_empty_search_and_full_range_keep_everything(listings in listings_strategy()) {
        let filter = HousingFilter {
            max_price: 6000,
            ..HousingFilter::default()
        };
        prop_assert_eq!(filter_listings(&listings, &filter).len(), listings.len());
    }
}

// ============================================================================
// Shops
// ============================================================================

#[test]
fn test_shop_sort_orders() {
    let mut filter = ShopFilter::default();
    assert_eq!(
        shop_names(&filter),
        vec![
            "Ifan's Beauty Salon",
            "Harun Bhat Ghor",
            "Sazid Fitness Center",
            "Walton Electronics"
        ]
    );

    filter.sort = ShopSort::Distance;
    assert_eq!(
        shop_names(&filter),
        vec![
            "Harun Bhat Ghor",
            "Ifan's Beauty Salon",
            "Sazid Fitness Center",
            "Walton Electronics"
        ]
    );

    filter.sort = ShopSort::Reviews;
    assert_eq!(
        shop_names(&filter),
        vec![
            "Ifan's Beauty Salon",
            "Walton Electronics",
            "Harun Bhat Ghor",
            "Sazid Fitness Center"
        ]
    );

    filter.sort = ShopSort::Name;
    assert_eq!(
        shop_names(&filter),
        vec![
            "Harun Bhat Ghor",
            "Ifan's Beauty Salon",
            "Sazid Fitness Center",
            "Walton Electronics"
        ]
    );
}

#[test]
fn test_shop_category_and_price_filters() {
    let filter = ShopFilter {
        category: Some(ShopCategory::Restaurants),
        ..ShopFilter::default()
    };
    assert_eq!(shop_names(&filter), vec!["Harun Bhat Ghor"]);

    let filter = ShopFilter {
        price: Some(PriceTier::Pricey),
        sort: ShopSort::Name,
        ..ShopFilter::default()
    };
    assert_eq!(
        shop_names(&filter),
        vec!["Sazid Fitness Center", "Walton Electronics"]
    );
}

#[test]
fn test_shop_search_matches_subcategory() {
    let filter = ShopFilter {
        search: "electro".to_string(),
        ..ShopFilter::default()
    };
    assert_eq!(shop_names(&filter), vec!["Walton Electronics"]);
}

// ============================================================================
// Comment pagination
// ============================================================================

#[test]
fn test_comment_pages() {
    let comments = mock::comments();
    assert_eq!(total_pages(comments.len(), 3), 4);
    assert_eq!(paginate(&comments, 1, 3).len(), 3);
    assert_eq!(paginate(&comments, 4, 3).len(), 1);
    assert!(paginate(&comments, 5, 3).is_empty());
    assert!(paginate(&comments, 0, 3).is_empty());
}

#[test]
fn test_page_tokens_collapse_gaps() {
    use PageToken::{Ellipsis, Page};
    assert_eq!(page_tokens(1, 1), vec![]);
    assert_eq!(page_tokens(1, 4), vec![Page(1), Page(2), Ellipsis, Page(4)]);
    assert_eq!(
        page_tokens(5, 10),
        vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
    );
}
