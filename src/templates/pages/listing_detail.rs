// templates/pages/listing_detail.rs

use crate::domain::Listing;
use crate::format::{format_date, format_number, format_price, plural};
use crate::templates::{
    components::{breadcrumbs, card, link_button, status_badge, ButtonStyle},
    site_layout, PageMeta,
};
use maud::{html, Markup};

pub fn listing_detail_page(listing: &Listing) -> Markup {
    let contact_href = format!("/contacto?propiedad={}", listing.id);

    site_layout(
        &PageMeta::new(listing.title, "/propiedades").description(listing.summary),
        html! {
            article class="container listing-detail" data-listing-id=(listing.id) {
                (breadcrumbs(&[
                    ("Inicio", Some("/")),
                    ("Promociones", Some("/propiedades")),
                    (listing.title, None),
                ]))

                header class="detail-header" {
                    (status_badge(listing.status))
                    h1 { (listing.title) }
                    p class="location" {
                        (listing.location) " · "
                        a href=(listing.map_url()) target="_blank" rel="noopener noreferrer" { "Ver en el mapa" }
                    }
                    p class="price" { "Desde " (format_price(listing.price)) }
                }

                @if !listing.images.is_empty() {
                    div class="gallery" {
                        @for (i, src) in listing.images.iter().enumerate() {
                            img
                                src=(src)
                                alt={ (listing.title) " · imagen " (i + 1) }
                                loading=(if i == 0 { "eager" } else { "lazy" });
                        }
                    }
                }

                div class="detail-grid" {
                    div {
                        section class="description" {
                            h2 { "Descripción" }
                            p { (listing.description) }
                        }

                        @if !listing.features.is_empty() {
                            section class="features" {
                                h2 { "Características" }
                                ul {
                                    @for feature in listing.features {
                                        li data-feature=(feature.slug()) { (feature.label()) }
                                    }
                                }
                            }
                        }
                    }

                    aside {
                        (card("Ficha", specs(listing)))
                        (card("¿Te interesa?", html! {
                            @if listing.status.is_open_for_sale() {
                                p {
                                    (listing.available_units) " de " (listing.total_units) " "
                                    (plural(usize::from(listing.total_units), "unidad disponible", "unidades disponibles"))
                                }
                            } @else {
                                p { "Esta promoción no tiene unidades a la venta ahora mismo." }
                            }
                            (link_button("Solicitar información", &contact_href, ButtonStyle::Primary))
                        }))
                    }
                }
            }
        },
    )
}

fn specs(listing: &Listing) -> Markup {
    html! {
        dl class="specs-list" {
            dt { "Tipo" } dd { (listing.category.label()) }
            dt { "Dormitorios" } dd { (listing.bedrooms) }
            dt { "Baños" } dd { (listing.bathrooms) }
            dt { "Superficie" } dd { (format_number(listing.area_m2.into())) " m²" }
            @if let Some(plot) = listing.plot_m2 {
                dt { "Parcela" } dd { (format_number(plot.into())) " m²" }
            }
            dt { "Entrega prevista" } dd { (format_date(listing.delivery_date)) }
        }
    }
}
