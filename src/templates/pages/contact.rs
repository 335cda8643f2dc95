// templates/pages/contact.rs

use crate::company;
use crate::contact::{ContactForm, FieldErrors, Receipt};
use crate::templates::{
    components::{breadcrumbs, card, contact_form, contact_success},
    site_layout, PageMeta,
};
use maud::{html, Markup};

/// Full contact page. `errors` is empty on first render.
pub fn contact_page(form: &ContactForm, errors: &FieldErrors) -> Markup {
    contact_layout(contact_form(form, errors))
}

/// Page shown after a successful submission without htmx.
pub fn contact_sent_page(receipt: &Receipt) -> Markup {
    contact_layout(contact_success(receipt))
}

fn contact_layout(area: Markup) -> Markup {
    site_layout(
        &PageMeta::new("Contacto", "/contacto")
            .description("Escríbenos y te informamos sin compromiso sobre nuestras promociones."),
        html! {
            div class="container" {
                (breadcrumbs(&[("Inicio", Some("/")), ("Contacto", None)]))
                h1 { "Contacta con nosotros" }

                div class="contact-layout" {
                    (area)

                    aside {
                        (card("Datos de contacto", html! {
                            ul class="contact-details" {
                                li { a href=(format!("tel:{}", company::PHONE.replace(' ', ""))) { (company::PHONE) } }
                                li { a href=(format!("mailto:{}", company::EMAIL)) { (company::EMAIL) } }
                                li { (company::ADDRESS) }
                            }
                        }))
                        (card("Horario", html! {
                            p { "Lunes a viernes, de 9:00 a 19:00" }
                            p { "Sábados, de 10:00 a 14:00" }
                        }))
                    }
                }
            }
        },
    )
}
