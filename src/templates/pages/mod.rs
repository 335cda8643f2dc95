pub mod about;
pub mod contact;
pub mod home;
pub mod legal;
pub mod listing_detail;
pub mod listings;
pub mod not_found;

pub use about::about_page;
pub use contact::{contact_page, contact_sent_page};
pub use home::home_page;
pub use legal::{legal_page, LegalDoc};
pub use listing_detail::listing_detail_page;
pub use listings::{listing_results, listings_page};
pub use not_found::not_found_page;
