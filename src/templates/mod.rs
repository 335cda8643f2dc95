pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use layouts::site::{site_layout, PageMeta};
