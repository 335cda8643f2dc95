// templates/pages/not_found.rs

use crate::templates::{
    components::{link_button, ButtonStyle},
    site_layout, PageMeta,
};
use maud::{html, Markup};

pub fn not_found_page() -> Markup {
    site_layout(
        &PageMeta::new("Página no encontrada", ""),
        html! {
            section class="container narrow not-found" {
                p class="error-code" aria-hidden="true" { "404" }
                h1 { "Página no encontrada" }
                p { "Lo sentimos, la página que buscas no existe o ha sido movida." }

                div class="hero-actions" {
                    (link_button("Volver al inicio", "/", ButtonStyle::Primary))
                    (link_button("Ver promociones", "/propiedades", ButtonStyle::Outline))
                }

                p { "También puedes visitar:" }
                ul {
                    li { a href="/nosotros" { "Sobre nosotros" } }
                    li { a href="/contacto" { "Contacto" } }
                }
            }
        },
    )
}
