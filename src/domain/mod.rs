//! Domain records for the city portal and the built-in demonstration data.

pub mod mock;
mod types;

pub use types::{
    is_closed_text, weekday_name, Article, AuthorProfile, BillingPeriod, Comment, Landlord,
    Listing, Plan, PlanFeature, PopularRoute, PriceTier, Reaction, Route, Shop, ShopCategory,
    ShopContact, SubscriptionTier, TransportMode, UserPatch, UserProfile, WeekHours, WEEK,
};
