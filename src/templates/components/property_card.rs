use crate::domain::{Listing, Status};
use crate::format::{format_month_year, format_price, nbsp, plural, truncate};
use maud::{html, Markup};

const SUMMARY_CHARS: usize = 110;

pub fn status_badge(status: Status) -> Markup {
    html! {
        span class={ "badge badge-" (status.slug()) } { (nbsp(status.label())) }
    }
}

/// Summary card linking to the listing detail page.
pub fn property_card(listing: &Listing) -> Markup {
    let open = listing.status.is_open_for_sale();

    html! {
        article.property-card.is-closed[!open] data-listing-id=(listing.id) {
            a href=(listing.detail_path()) class="card-link" {
                div class="card-media" {
                    @if let Some(src) = listing.cover_image() {
                        img src=(src) alt=(listing.title) loading="lazy" width="640" height="384";
                    } @else {
                        div class="card-media-empty" aria-hidden="true" {}
                    }
                    (status_badge(listing.status))
                }
                div class="card-body" {
                    h3 { (listing.title) }
                    p class="location" { (listing.location) }
                    p class="category" { (listing.category.label()) }
                    ul class="specs" {
                        li { (listing.bedrooms) span class="sr-only" { " dormitorios" } }
                        li { (listing.bathrooms) span class="sr-only" { " baños" } }
                        li { (listing.area_m2) "m²" span class="sr-only" { " construidos" } }
                    }
                    p class="summary" { (truncate(listing.summary, SUMMARY_CHARS)) }
                    p class="delivery" { "Entrega: " (format_month_year(listing.delivery_date)) }
                    div class="price-row" {
                        p class="price" { (format_price(listing.price)) }
                        @if listing.available_units > 0 {
                            p class="units" {
                                (listing.available_units) " "
                                (plural(usize::from(listing.available_units), "unidad disponible", "unidades disponibles"))
                            }
                        }
                    }
                }
            }
        }
    }
}
