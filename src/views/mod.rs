//! Per-section view state and the pure pipelines that derive what each
//! section shows from the shared state.

pub mod comments;
pub mod community;
pub mod housing;
pub mod navigator;
pub mod pagination;
pub mod section;
pub mod selection;
pub mod shops;
pub mod subscription;

pub use comments::{paginate, total_pages};
pub use community::CommunityView;
pub use housing::{filter_listings, HousingFilter, HousingView, RoomFilter};
pub use navigator::{NavField, NavigatorView, RouteQuery};
pub use pagination::{page_tokens, PageToken};
pub use section::Section;
pub use selection::{DetailSelection, ReactionPicker, ToggleSet};
pub use shops::{filter_and_sort_shops, ShopFilter, ShopSort, ShopsView};
pub use subscription::{Checkout, PlanChoice, SubscriptionView};
