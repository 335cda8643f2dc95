use crate::contact::form::MESSAGE_MAX;
use crate::format::format_date;
use crate::contact::{ContactForm, Field, FieldErrors, Receipt, Subject};
use crate::templates::components::form_controls::{checkbox, select, text_input, textarea, Control};
use crate::templates::components::{link_button, submit_button, ButtonStyle};
use maud::{html, Markup};

/// Element swapped in place by htmx on submit.
pub const CONTACT_AREA_ID: &str = "contact-form-area";

pub fn contact_form(form: &ContactForm, errors: &FieldErrors) -> Markup {
    let mut subjects: Vec<(&str, &str)> = vec![("", "Selecciona un asunto…")];
    subjects.extend(Subject::ALL.iter().map(|s| (s.slug(), s.label())));

    html! {
        div id=(CONTACT_AREA_ID) {
            form
                method="post"
                action="/contacto"
                hx-post="/contacto"
                hx-target={ "#" (CONTACT_AREA_ID) }
                hx-swap="outerHTML"
                hx-disabled-elt="button"
                class="contact-form"
                novalidate
            {
                @if !errors.is_empty() {
                    div class="form-alert" role="alert" {
                        p { "Revisa los campos marcados antes de enviar:" }
                        ul {
                            @for (field, message) in errors.iter() {
                                li { a href={ "#field-" (field.key()) } { (message) } }
                            }
                        }
                    }
                }

                (text_input(
                    &Control::new(Field::Name.key(), "Nombre completo", &form.name)
                        .required()
                        .error(errors.get(Field::Name)),
                    "text", "name", "Tu nombre",
                ))
                (text_input(
                    &Control::new(Field::Email.key(), "Email", &form.email)
                        .required()
                        .error(errors.get(Field::Email)),
                    "email", "email", "tu@email.com",
                ))
                (text_input(
                    &Control::new(Field::Phone.key(), "Teléfono", &form.phone)
                        .required()
                        .help("Incluye el prefijo del país")
                        .error(errors.get(Field::Phone)),
                    "tel", "tel", "+34 600 000 000",
                ))
                (select(
                    &Control::new(Field::Subject.key(), "Asunto", &form.subject)
                        .required()
                        .error(errors.get(Field::Subject)),
                    &subjects,
                ))
                (text_input(
                    &Control::new(Field::Property.key(), "Promoción de interés (opcional)", &form.property)
                        .help("Si te interesa alguna promoción concreta")
                        .error(errors.get(Field::Property)),
                    "text", "off", "Nombre de la promoción",
                ))
                (textarea(
                    &Control::new(Field::Message.key(), "Mensaje", &form.message)
                        .required()
                        .error(errors.get(Field::Message)),
                    6, MESSAGE_MAX, "Cuéntanos en qué podemos ayudarte…",
                ))
                (checkbox(
                    &Control::new(Field::AcceptPrivacy.key(), "", "")
                        .error(errors.get(Field::AcceptPrivacy)),
                    form.accept_privacy,
                    html! {
                        "He leído y acepto la "
                        a href="/privacidad" target="_blank" rel="noopener noreferrer" { "política de privacidad" }
                    },
                ))

                (submit_button("Enviar mensaje"))
                p class="microcopy" { "Nos pondremos en contacto contigo lo antes posible." }
            }
        }
    }
}

pub fn contact_success(receipt: &Receipt) -> Markup {
    html! {
        div id=(CONTACT_AREA_ID) class="contact-success" role="status" {
            h2 { "¡Mensaje enviado!" }
            p { "Gracias por escribirnos. Te responderemos en breve." }
            p { "Referencia: " strong { (receipt.reference) } }
            p class="microcopy" { "Recibido el " (format_date(receipt.received_at.date_naive())) }
            (link_button("Ver promociones", "/propiedades", ButtonStyle::Outline))
        }
    }
}
