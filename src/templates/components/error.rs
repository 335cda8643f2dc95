use crate::templates::layouts::site::{site_layout, PageMeta};
use maud::{html, Markup};

/// Generic error document for statuses other than 404.
pub fn error_page(status: u16, message: &str) -> Markup {
    let title = format!("Error {status}");

    site_layout(
        &PageMeta::new(&title, ""),
        html! {
            section class="container narrow error-page" {
                h1 { (title) }
                p { (message) }
                p { a href="/" { "← Volver al inicio" } }
            }
        },
    )
}
