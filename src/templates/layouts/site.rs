use crate::company;
use maud::{html, Markup, DOCTYPE};

/// Per-page document metadata.
pub struct PageMeta<'a> {
    pub title: &'a str,
    pub description: &'a str,
    /// Path of the navigation entry to highlight.
    pub active: &'a str,
}

impl<'a> PageMeta<'a> {
    pub fn new(title: &'a str, active: &'a str) -> Self {
        Self {
            title,
            description: company::SEO_DESCRIPTION,
            active,
        }
    }

    pub fn description(mut self, description: &'a str) -> Self {
        self.description = description;
        self
    }
}

pub fn site_layout(meta: &PageMeta<'_>, content: Markup) -> Markup {
    let full_title = if meta.title.is_empty() {
        company::SEO_TITLE.to_string()
    } else {
        format!("{} - {}", meta.title, company::SHORT_NAME)
    };

    html! {
        (DOCTYPE)
        html lang="es" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (full_title) }
                meta name="description" content=(meta.description);
                link rel="icon" type="image/svg+xml" href="/favicon.svg";
                link rel="stylesheet" href="/assets/site.css";
                script src="https://unpkg.com/htmx.org@1.9.12" defer {}
            }
            body {
                a href="#main-content" class="skip-link" { "Saltar al contenido principal" }
                (site_header(meta.active))
                main id="main-content" {
                    (content)
                }
                (site_footer())
            }
        }
    }
}

fn site_header(active: &str) -> Markup {
    html! {
        header class="site-header" {
            nav class="container" aria-label="Navegación principal" {
                a href="/" class="brand" { (company::SHORT_NAME) }
                ul class="nav-links" {
                    @for (label, path) in company::NAV_ITEMS {
                        li {
                            @if *path == active {
                                a href=(path) aria-current="page" class="active" { (label) }
                            } @else {
                                a href=(path) { (label) }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn site_footer() -> Markup {
    html! {
        footer class="site-footer" {
            div class="container footer-grid" {
                section {
                    p class="brand" { (company::NAME) }
                    p { (company::TAGLINE) }
                    p { "Más de " (company::EXPERIENCE_YEARS) " años construyendo hogares." }
                }
                section {
                    h2 { "Contacto" }
                    ul {
                        li { a href=(format!("tel:{}", company::PHONE.replace(' ', ""))) { (company::PHONE) } }
                        li { a href=(format!("mailto:{}", company::EMAIL)) { (company::EMAIL) } }
                        li { (company::ADDRESS) }
                    }
                }
                section {
                    h2 { "Legal" }
                    ul {
                        @for (label, path) in company::LEGAL_LINKS {
                            li { a href=(path) { (label) } }
                        }
                    }
                }
            }
            p class="container copyright" {
                "© " (chrono::Utc::now().format("%Y").to_string()) " " (company::NAME)
            }
        }
    }
}
