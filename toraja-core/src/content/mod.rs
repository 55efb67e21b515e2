//! Site content: storage, seeding, admin activity, and curated selections.

pub mod activity;
pub mod featured;
pub mod seed;
pub mod store;

pub use activity::{ActivityAction, ActivityEntry, ActivityLog};
pub use featured::{featured_destinations, upcoming_rambu_solo};
pub use seed::SeedData;
pub use store::{ContentStore, InMemoryContentStore, Upserted};
