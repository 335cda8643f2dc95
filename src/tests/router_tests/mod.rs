mod api_tests;
mod contact_tests;
mod listings_tests;
mod pages_tests;
mod static_tests;
