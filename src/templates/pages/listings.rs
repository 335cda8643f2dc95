// templates/pages/listings.rs

use crate::domain::{Listing, ListingFilter};
use crate::format::plural;
use crate::templates::{
    components::{
        breadcrumbs, filter_panel, filters::RESULTS_ID, link_button, property_card, ButtonStyle,
    },
    site_layout, PageMeta,
};
use maud::{html, Markup};

pub fn listings_page(filter: &ListingFilter, results: &[&Listing]) -> Markup {
    site_layout(
        &PageMeta::new("Promociones", "/propiedades")
            .description("Promociones de obra nueva en venta en Madrid y alrededores."),
        html! {
            div class="container" {
                (breadcrumbs(&[("Inicio", Some("/")), ("Promociones", None)]))
                h1 { "Nuestras promociones" }

                div class="listings-layout" {
                    aside { (filter_panel(filter)) }
                    (listing_results(filter, results))
                }
            }
        },
    )
}

/// Result count and cards; also served alone for htmx requests.
pub fn listing_results(filter: &ListingFilter, results: &[&Listing]) -> Markup {
    html! {
        section id=(RESULTS_ID) class="listing-results" aria-live="polite" {
            div class="results-header" {
                p class="results-count" {
                    (results.len()) " "
                    (plural(results.len(), "promoción encontrada", "promociones encontradas"))
                }
                // Lives in the swapped fragment so it tracks every htmx refresh.
                @if filter.is_active() {
                    a href="/propiedades" class="btn btn-ghost" { "Limpiar" }
                }
            }

            @if results.is_empty() {
                div class="empty-state" {
                    h2 { "No hay promociones que coincidan" }
                    p { "Prueba a ampliar los criterios de búsqueda." }
                    (link_button("Ver todas las promociones", "/propiedades", ButtonStyle::Outline))
                }
            } @else {
                div class="property-grid" {
                    @for listing in results {
                        (property_card(listing))
                    }
                }
            }

            @if filter.is_active() {
                p class="share-link" {
                    a href={ "/propiedades?" (filter.to_query()) } { "Enlace a esta búsqueda" }
                }
            }
        }
    }
}
