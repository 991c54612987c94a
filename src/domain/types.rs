use std::collections::HashMap;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

// ============================================================================
// Housing
// ============================================================================

/// Contact details of the person renting out a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Landlord {
    pub name: String,
    pub phone: String,
    pub email: String,
    /// Rating in `[0, 5]`.
    pub rating: f64,
}

/// A rentable housing unit shown in the Housing section.
///
/// Produced by a [`Catalog`](crate::catalog::Catalog) and never modified
/// afterwards; a city change replaces the whole collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub title: String,
    /// Monthly rent.
    pub price: u32,
    pub location: String,
    pub rooms: u32,
    pub bathrooms: u32,
    pub area: u32,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub description: String,
    pub landlord: Landlord,
    /// Aggregate rating in `[0, 5]`.
    pub rating: f64,
    #[serde(default)]
    pub reviews: u32,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default, rename = "isVirtualTourAvailable")]
    pub virtual_tour: bool,
}

// ============================================================================
// Shops
// ============================================================================

/// Closed set of shop categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShopCategory {
    Restaurants,
    Shopping,
    Services,
    Healthcare,
    Entertainment,
    Fitness,
    Beauty,
    Automotive,
}

impl ShopCategory {
    /// Every category, in the order the category bar shows them.
    pub const ALL: [ShopCategory; 8] = [
        Self::Restaurants,
        Self::Shopping,
        Self::Services,
        Self::Healthcare,
        Self::Entertainment,
        Self::Fitness,
        Self::Beauty,
        Self::Automotive,
    ];

    /// Lowercase identifier, also matched by the shop search box.
    pub fn id(self) -> &'static str {
        match self {
            Self::Restaurants => "restaurants",
            Self::Shopping => "shopping",
            Self::Services => "services",
            Self::Healthcare => "healthcare",
            Self::Entertainment => "entertainment",
            Self::Fitness => "fitness",
            Self::Beauty => "beauty",
            Self::Automotive => "automotive",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Restaurants => "Restaurants",
            Self::Shopping => "Shopping",
            Self::Services => "Services",
            Self::Healthcare => "Healthcare",
            Self::Entertainment => "Entertainment",
            Self::Fitness => "Fitness",
            Self::Beauty => "Beauty",
            Self::Automotive => "Automotive",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }
}

/// Shop price tier, written as one to four dollar signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PriceTier {
    #[serde(rename = "$")]
    Budget,
    #[serde(rename = "$$")]
    Moderate,
    #[serde(rename = "$$$")]
    Pricey,
    #[serde(rename = "$$$$")]
    Luxury,
}

impl PriceTier {
    pub const ALL: [PriceTier; 4] = [Self::Budget, Self::Moderate, Self::Pricey, Self::Luxury];

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Budget => "$",
            Self::Moderate => "$$",
            Self::Pricey => "$$$",
            Self::Luxury => "$$$$",
        }
    }

    /// Number of filled dollar signs (1..=4).
    pub fn level(self) -> usize {
        self.symbol().len()
    }
}

/// Days in display order, Monday first.
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Opening hours keyed by weekday, serialized as `{"Monday": "9:00 AM - 5:00 PM"}`.
///
/// Values are free text, `"Closed"` on days off.
pub type WeekHours = HashMap<Weekday, String>;

/// Whether an hours text marks the shop as closed.
pub fn is_closed_text(hours: &str) -> bool {
    hours.trim().eq_ignore_ascii_case("closed")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopContact {
    pub phone: String,
    pub email: String,
    /// Optional; shops without a website simply omit the link.
    #[serde(default)]
    pub website: Option<String>,
}

/// A local business shown in the Shops section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shop {
    pub id: String,
    pub name: String,
    pub category: ShopCategory,
    pub subcategory: String,
    pub address: String,
    /// Display text such as `"0.3 miles"`; sorting uses its numeric prefix.
    pub distance: String,
    pub rating: f64,
    #[serde(default)]
    pub reviews: u32,
    #[serde(rename = "priceRange")]
    pub price: PriceTier,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub hours: WeekHours,
    pub contact: ShopContact,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub deals: Vec<String>,
    #[serde(default)]
    pub is_open: bool,
}

impl Shop {
    pub fn hours_on(&self, day: Weekday) -> Option<&str> {
        self.hours.get(&day).map(String::as_str)
    }

    /// Known days and their hours, Monday first.
    pub fn week_hours(&self) -> Vec<(Weekday, &str)> {
        WEEK.iter()
            .filter_map(|day| self.hours_on(*day).map(|h| (*day, h)))
            .collect()
    }
}

/// Full English weekday name, Monday first.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

// ============================================================================
// Users and plans
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionTier {
    #[default]
    Free,
    Basic,
    Premium,
}

impl SubscriptionTier {
    pub fn label(self) -> &'static str {
        match self {
            Self::Free => "Free",
            Self::Basic => "Basic",
            Self::Premium => "Premium",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    #[serde(default)]
    pub subscription_tier: SubscriptionTier,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl UserProfile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subscription_tier: SubscriptionTier::Free,
            email: None,
            phone: None,
        }
    }
}

/// Partial profile update. Only `Some` fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserPatch {
    pub name: Option<String>,
    pub subscription_tier: Option<SubscriptionTier>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl UserPatch {
    /// Shallow merge: fields present in the patch replace the profile's.
    pub fn apply_to(&self, user: &UserProfile) -> UserProfile {
        UserProfile {
            name: self.name.clone().unwrap_or_else(|| user.name.clone()),
            subscription_tier: self.subscription_tier.unwrap_or(user.subscription_tier),
            email: self.email.clone().or_else(|| user.email.clone()),
            phone: self.phone.clone().or_else(|| user.phone.clone()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BillingPeriod {
    #[default]
    Monthly,
    Yearly,
}

impl BillingPeriod {
    pub fn toggle(self) -> Self {
        match self {
            Self::Monthly => Self::Yearly,
            Self::Yearly => Self::Monthly,
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Self::Monthly => "month",
            Self::Yearly => "year",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlanFeature {
    pub name: &'static str,
    pub included: bool,
    pub premium: bool,
}

/// A subscription plan card.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    pub tier: SubscriptionTier,
    pub name: &'static str,
    pub description: &'static str,
    pub monthly_price: f64,
    pub yearly_price: f64,
    pub popular: bool,
    pub features: Vec<PlanFeature>,
}

impl Plan {
    pub fn price(&self, period: BillingPeriod) -> f64 {
        match period {
            BillingPeriod::Monthly => self.monthly_price,
            BillingPeriod::Yearly => self.yearly_price,
        }
    }

    /// What a year costs on the yearly plan compared with twelve monthly payments.
    pub fn yearly_savings(&self) -> f64 {
        (self.monthly_price * 12.0 - self.yearly_price).max(0.0)
    }

    pub fn is_free(&self) -> bool {
        self.tier == SubscriptionTier::Free
    }
}

// ============================================================================
// Community article
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: u32,
    pub author: String,
    pub content: String,
    /// Relative time text, e.g. `"2 hours ago"`.
    pub timestamp: String,
}

/// Reaction a reader can leave on the article or on a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reaction {
    Like,
    Love,
    Smile,
}

impl Reaction {
    pub const ALL: [Reaction; 3] = [Self::Like, Self::Love, Self::Smile];

    pub fn label(self) -> &'static str {
        match self {
            Self::Like => "Like",
            Self::Love => "Love",
            Self::Smile => "Smile",
        }
    }

    /// Past tense used in the "You ... this article!" feedback line.
    pub fn past_tense(self) -> &'static str {
        match self {
            Self::Like => "liked",
            Self::Love => "loved",
            Self::Smile => "smiled",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub title: &'static str,
    pub author: &'static str,
    pub paragraphs: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AuthorProfile {
    pub name: &'static str,
    pub headline: &'static str,
    pub bio: &'static str,
    pub location: &'static str,
    pub education: &'static str,
    pub joined: &'static str,
    pub expertise: Vec<&'static str>,
    pub achievements: Vec<&'static str>,
}

// ============================================================================
// Street navigation
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TransportMode {
    #[default]
    Walking,
    Driving,
    Transit,
    Cycling,
}

impl TransportMode {
    pub const ALL: [TransportMode; 4] = [Self::Walking, Self::Driving, Self::Transit, Self::Cycling];

    pub fn label(self) -> &'static str {
        match self {
            Self::Walking => "Walking",
            Self::Driving => "Driving",
            Self::Transit => "Public Transit",
            Self::Cycling => "Cycling",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Walking => Self::Driving,
            Self::Driving => Self::Transit,
            Self::Transit => Self::Cycling,
            Self::Cycling => Self::Walking,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub id: String,
    pub name: String,
    pub from: String,
    pub to: String,
    pub duration_minutes: u32,
    pub distance: String,
    pub mode: TransportMode,
    pub steps: Vec<String>,
    pub safety_rating: f64,
    pub landmarks: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopularRoute {
    pub from: &'static str,
    pub to: &'static str,
    pub users: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_tier_serde_uses_dollar_signs() {
        let tier: PriceTier = serde_json::from_str("\"$$$\"").unwrap();
        assert_eq!(tier, PriceTier::Pricey);
        assert_eq!(serde_json::to_string(&PriceTier::Budget).unwrap(), "\"$\"");
        assert_eq!(PriceTier::Luxury.level(), 4);
    }

    #[test]
    fn test_category_ids_round_trip() {
        for cat in ShopCategory::ALL {
            assert_eq!(ShopCategory::from_id(cat.id()), Some(cat));
        }
        assert_eq!(ShopCategory::from_id("all"), None);
    }

    #[test]
    fn test_user_patch_keeps_absent_fields() {
        let user = UserProfile {
            name: "Sazid".to_string(),
            subscription_tier: SubscriptionTier::Basic,
            email: Some("sazid@example.com".to_string()),
            phone: None,
        };
        let patch = UserPatch {
            phone: Some("01645016880".to_string()),
            ..UserPatch::default()
        };

        let merged = patch.apply_to(&user);
        assert_eq!(merged.name, "Sazid");
        assert_eq!(merged.subscription_tier, SubscriptionTier::Basic);
        assert_eq!(merged.email.as_deref(), Some("sazid@example.com"));
        assert_eq!(merged.phone.as_deref(), Some("01645016880"));
    }

    #[test]
    fn test_shop_without_website_deserializes() {
        let json = r#"{
            "id": "9",
            "name": "Corner Garage",
            "category": "automotive",
            "subcategory": "Repairs",
            "address": "1 Side St",
            "distance": "2.0 miles",
            "rating": 4.1,
            "priceRange": "$",
            "hours": {"Monday": "Closed"},
            "contact": {"phone": "555", "email": "garage@example.com"}
        }"#;
        let shop: Shop = serde_json::from_str(json).unwrap();
        assert!(shop.contact.website.is_none());
        assert!(shop.deals.is_empty());
        assert!(shop.hours_on(Weekday::Mon).is_some_and(is_closed_text));
        assert_eq!(shop.hours_on(Weekday::Tue), None);
    }

    #[test]
    fn test_shop_hours_decode_from_day_name_map() {
        let json = r#"{
            "id": "1",
            "name": "Harun Bhat Ghor",
            "category": "restaurants",
            "subcategory": "Italian",
            "address": "123 Main Street",
            "distance": "0.3 miles",
            "rating": 4.8,
            "priceRange": "$$",
            "hours": {
                "Monday": "11:00 AM - 10:00 PM",
                "Tuesday": "11:00 AM - 10:00 PM",
                "Wednesday": "11:00 AM - 10:00 PM",
                "Thursday": "11:00 AM - 10:00 PM",
                "Friday": "11:00 AM - 11:00 PM",
                "Saturday": "11:00 AM - 11:00 PM",
                "Sunday": "Closed"
            },
            "contact": {"phone": "555", "email": "info@example.com"}
        }"#;
        let shop: Shop = serde_json::from_str(json).unwrap();
        assert_eq!(shop.hours.len(), 7);
        assert_eq!(shop.hours_on(Weekday::Fri), Some("11:00 AM - 11:00 PM"));
        assert!(shop.hours_on(Weekday::Sun).is_some_and(is_closed_text));

        let days: Vec<Weekday> = shop.week_hours().into_iter().map(|(d, _)| d).collect();
        assert_eq!(days, WEEK.to_vec());
    }

    #[test]
    fn test_shop_hours_round_trip_through_json() {
        let shop = crate::domain::mock::shops().remove(0);
        let json = serde_json::to_string(&shop).unwrap();
        let decoded: Shop = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.hours, shop.hours);
    }

    #[test]
    fn test_yearly_savings() {
        let plan = Plan {
            tier: SubscriptionTier::Basic,
            name: "Navigator",
            description: "",
            monthly_price: 10.0,
            yearly_price: 100.0,
            popular: false,
            features: Vec::new(),
        };
        assert!((plan.yearly_savings() - 20.0).abs() < f64::EPSILON);
        assert_eq!(plan.price(BillingPeriod::Yearly), 100.0);
    }
}
