use maud::{html, Markup};

/// Trail of `(label, href)`; the last item is the current page and has no link.
pub fn breadcrumbs(items: &[(&str, Option<&str>)]) -> Markup {
    html! {
        nav class="breadcrumbs" aria-label="Ruta de navegación" {
            ol {
                @for (label, href) in items {
                    li {
                        @match href {
                            Some(href) => a href=(href) { (label) },
                            None => span aria-current="page" { (label) },
                        }
                    }
                }
            }
        }
    }
}
