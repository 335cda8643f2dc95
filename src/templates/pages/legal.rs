// templates/pages/legal.rs

use crate::company;
use crate::templates::{components::breadcrumbs, site_layout, PageMeta};
use maud::{html, Markup};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegalDoc {
    Notice,
    Privacy,
    Cookies,
}

impl LegalDoc {
    pub fn title(self) -> &'static str {
        match self {
            LegalDoc::Notice => "Aviso legal",
            LegalDoc::Privacy => "Política de privacidad",
            LegalDoc::Cookies => "Política de cookies",
        }
    }
}

pub fn legal_page(doc: LegalDoc) -> Markup {
    let body = match doc {
        LegalDoc::Notice => html! {
            p {
                "Este sitio web es titularidad de " (company::NAME) ", con domicilio en "
                (company::ADDRESS) ". Puedes contactar con nosotros en " (company::EMAIL) "."
            }
            p {
                "La información sobre promociones tiene carácter orientativo y no constituye "
                "oferta contractual. Precios, superficies y fechas de entrega pueden variar."
            }
        },
        LegalDoc::Privacy => html! {
            p {
                "Los datos que nos facilitas a través del formulario de contacto se usan "
                "únicamente para responder a tu consulta."
            }
            p {
                "No cedemos tus datos a terceros. Puedes ejercer tus derechos de acceso, "
                "rectificación y supresión escribiendo a " (company::EMAIL) "."
            }
        },
        LegalDoc::Cookies => html! {
            p { "Este sitio solo utiliza cookies técnicas necesarias para su funcionamiento." }
            p { "No usamos cookies de análisis ni de publicidad." }
        },
    };

    site_layout(
        &PageMeta::new(doc.title(), ""),
        html! {
            article class="container narrow legal" {
                (breadcrumbs(&[("Inicio", Some("/")), (doc.title(), None)]))
                h1 { (doc.title()) }
                (body)
            }
        },
    )
}
