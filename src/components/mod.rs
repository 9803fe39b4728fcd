//! UI Components
//!
//! Leptos components shared by both directory layouts.

mod store_visuals;
mod store_card;
mod featured_showcase;
mod hero_stats;
mod filter_bar;
mod results_state;
mod store_table;
mod store_detail;
mod site_chrome;

pub use store_visuals::{ShippingBadge, StoreLogo};
pub use store_card::StoreCard;
pub use featured_showcase::FeaturedShowcase;
pub use hero_stats::HeroStats;
pub use filter_bar::FilterBar;
pub use results_state::ResultsState;
pub use store_table::StoreTable;
pub use store_detail::StoreDetail;
pub use site_chrome::{SiteFooter, SiteHeader};
