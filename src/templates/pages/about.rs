// templates/pages/about.rs

use crate::company;
use crate::domain::catalog;
use crate::format::format_number;
use crate::templates::{
    components::{breadcrumbs, link_button, ButtonStyle},
    site_layout, PageMeta,
};
use maud::{html, Markup};

pub fn about_page() -> Markup {
    site_layout(
        &PageMeta::new("Sobre nosotros", "/nosotros"),
        html! {
            div class="container" {
                (breadcrumbs(&[("Inicio", Some("/")), ("Nosotros", None)]))

                section class="intro" {
                    h1 { "Sobre " (company::NAME) }
                    p class="lead" {
                        "Desde 1995 construimos, promovemos y vendemos viviendas pensadas "
                        "para durar. Más de " (format_number(company::HOMES_BUILT.into()))
                        " familias ya viven en una casa nuestra."
                    }
                }

                dl class="stats-grid" {
                    div { dt { "Años de experiencia" } dd { (company::EXPERIENCE_YEARS) } }
                    div { dt { "Viviendas construidas" } dd { (format_number(company::HOMES_BUILT.into())) } }
                    div { dt { "Promociones" } dd { (catalog::all().len()) } }
                }

                section class="timeline" {
                    h2 { "Nuestra historia" }
                    ol {
                        @for (year, title, text) in company::MILESTONES {
                            li {
                                time datetime=(year) { (year) }
                                h3 { (title) }
                                p { (text) }
                            }
                        }
                    }
                }

                section class="values" {
                    h2 { "Nuestros valores" }
                    ul class="reason-grid" {
                        @for (title, text) in company::VALUES {
                            li { h3 { (title) } p { (text) } }
                        }
                    }
                }

                section class="team" {
                    h2 { "Equipo" }
                    ul class="team-grid" {
                        @for (name, role) in company::TEAM {
                            li { strong { (name) } br; span { (role) } }
                        }
                    }
                }

                (link_button("Habla con nosotros", "/contacto", ButtonStyle::Primary))
            }
        },
    )
}
