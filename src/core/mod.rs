pub mod aggregate;
pub mod filter;
pub mod seed;
pub mod store;

pub use aggregate::{count_by, count_by_emotion, count_by_place, top_n};
pub use filter::{filter, filter_by_period, matches, select};
pub use store::FeedbackStore;
