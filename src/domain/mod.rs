pub mod catalog;
pub mod filter;
pub mod listing;

pub use filter::{FilterError, ListingFilter};
pub use listing::{Category, Feature, Listing, Status, Testimonial};
