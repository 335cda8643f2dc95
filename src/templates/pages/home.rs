// templates/pages/home.rs

use crate::company;
use crate::domain::{catalog, Testimonial};
use crate::format::format_number;
use crate::templates::{
    components::{link_button, property_card, ButtonStyle},
    site_layout, PageMeta,
};
use maud::{html, Markup};

pub fn home_page() -> Markup {
    let open_count = catalog::open_for_sale().count();

    site_layout(
        &PageMeta::new("", "/"),
        html! {
            section class="hero" {
                div class="container" {
                    p class="eyebrow" { (company::TAGLINE) }
                    h1 { "Construimos hogares para toda la vida" }
                    p class="lead" {
                        "Más de " (company::EXPERIENCE_YEARS) " años creando viviendas de calidad "
                        "en Madrid y alrededores."
                    }
                    div class="hero-actions" {
                        (link_button("Ver promociones", "/propiedades", ButtonStyle::Primary))
                        (link_button("Contactar", "/contacto", ButtonStyle::Outline))
                    }
                }
            }

            section class="stats" aria-label="Cifras" {
                dl class="container stats-grid" {
                    div { dt { "Años de experiencia" } dd { (company::EXPERIENCE_YEARS) "+" } }
                    div { dt { "Viviendas construidas" } dd { (format_number(company::HOMES_BUILT.into())) "+" } }
                    div { dt { "Promociones en venta" } dd { (open_count) } }
                }
            }

            section class="container featured" {
                h2 { "Promociones destacadas" }
                div class="property-grid" {
                    @for listing in catalog::featured() {
                        (property_card(listing))
                    }
                }
                p { (link_button("Ver todas las promociones", "/propiedades", ButtonStyle::Outline)) }
            }

            section class="container reasons" {
                h2 { "¿Por qué elegirnos?" }
                ul class="reason-grid" {
                    @for (title, text) in company::REASONS {
                        li {
                            h3 { (title) }
                            p { (text) }
                        }
                    }
                }
            }

            section class="container testimonials" {
                h2 { "Lo que dicen nuestros clientes" }
                div class="testimonial-grid" {
                    @for t in catalog::testimonials() {
                        (testimonial(t))
                    }
                }
            }

            section class="cta" {
                div class="container" {
                    h2 { "¿Buscas tu nuevo hogar?" }
                    p { "Te asesoramos sin compromiso sobre la promoción que mejor encaja contigo." }
                    (link_button("Hablemos", "/contacto", ButtonStyle::Primary))
                }
            }
        },
    )
}

fn testimonial(t: &Testimonial) -> Markup {
    let stars = "★".repeat(usize::from(t.rating));

    html! {
        figure class="testimonial" {
            p class="rating" aria-label={ (t.rating) " de 5" } { (stars) }
            blockquote { p { (t.text) } }
            figcaption {
                strong { (t.name) }
                ", " (t.development)
            }
        }
    }
}
