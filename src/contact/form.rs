// src/contact/form.rs

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use url::form_urlencoded;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9\s()\-]{9,}$").expect("valid phone regex"));

pub const NAME_MIN: usize = 2;
pub const NAME_MAX: usize = 100;
pub const MESSAGE_MIN: usize = 10;
pub const MESSAGE_MAX: usize = 1000;
pub const PROPERTY_MAX: usize = 100;

const REQUIRED: &str = "Este campo es obligatorio";

/// Form controls, in the order they appear on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Subject,
    Property,
    Message,
    AcceptPrivacy,
}

impl Field {
    /// The `name` attribute of the control.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Subject => "subject",
            Field::Property => "property",
            Field::Message => "message",
            Field::AcceptPrivacy => "accept_privacy",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    Information,
    Visit,
    Quote,
    Other,
}

impl Subject {
    pub const ALL: [Subject; 4] = [
        Subject::Information,
        Subject::Visit,
        Subject::Quote,
        Subject::Other,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Subject::Information => "information",
            Subject::Visit => "visit",
            Subject::Quote => "quote",
            Subject::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Subject::Information => "Solicitar información",
            Subject::Visit => "Agendar visita",
            Subject::Quote => "Solicitar presupuesto",
            Subject::Other => "Otro",
        }
    }

    fn from_slug(s: &str) -> Option<Self> {
        Subject::ALL.into_iter().find(|sub| sub.slug() == s)
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw values as typed by the visitor. Kept verbatim so a rejected form can be
/// rendered again without losing input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub property: String,
    pub message: String,
    pub accept_privacy: bool,
}

/// A form that passed validation. Values are trimmed; email is lowercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: Subject,
    pub property: Option<String>,
    pub message: String,
}

/// First failing rule per field, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<(Field, String)>);

impl FieldErrors {
    fn push(&mut self, field: Field, message: impl Into<String>) {
        self.0.push((field, message.into()));
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, m)| m.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Field to focus after a rejected submit.
    pub fn first(&self) -> Option<Field> {
        self.0.first().map(|(f, _)| *f)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

impl ContactForm {
    /// Decode an `application/x-www-form-urlencoded` body. Unknown keys are ignored.
    pub fn from_urlencoded(body: &[u8]) -> Self {
        let mut form = ContactForm::default();

        for (key, value) in form_urlencoded::parse(body) {
            match key.as_ref() {
                "name" => form.name = value.into_owned(),
                "email" => form.email = value.into_owned(),
                "phone" => form.phone = value.into_owned(),
                "subject" => form.subject = value.into_owned(),
                "property" => form.property = value.into_owned(),
                "message" => form.message = value.into_owned(),
                "accept_privacy" => {
                    form.accept_privacy = matches!(value.as_ref(), "on" | "true" | "1" | "yes")
                }
                _ => {}
            }
        }

        form
    }

    /// Pre-filled form for a given development of interest.
    pub fn for_property(title: &str) -> Self {
        ContactForm {
            property: title.to_string(),
            subject: Subject::Information.slug().to_string(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<ContactRequest, FieldErrors> {
        let mut errors = FieldErrors::default();

        let name = self.name.trim();
        let email = self.email.trim();
        let phone = self.phone.trim();
        let subject = self.subject.trim();
        let property = self.property.trim();
        let message = self.message.trim();

        if name.is_empty() {
            errors.push(Field::Name, REQUIRED);
        } else if let Some(msg) = length_error(name, NAME_MIN, NAME_MAX) {
            errors.push(Field::Name, msg);
        }

        if email.is_empty() {
            errors.push(Field::Email, REQUIRED);
        } else if !EMAIL_RE.is_match(email) {
            errors.push(Field::Email, "Por favor, introduce un email válido");
        }

        if phone.is_empty() {
            errors.push(Field::Phone, REQUIRED);
        } else if !PHONE_RE.is_match(phone) {
            errors.push(Field::Phone, "Por favor, introduce un teléfono válido");
        }

        let parsed_subject = Subject::from_slug(subject);
        if subject.is_empty() {
            errors.push(Field::Subject, REQUIRED);
        } else if parsed_subject.is_none() {
            errors.push(Field::Subject, "Selecciona un asunto de la lista");
        }

        if property.chars().count() > PROPERTY_MAX {
            errors.push(
                Field::Property,
                format!("No puede exceder {PROPERTY_MAX} caracteres"),
            );
        }

        if message.is_empty() {
            errors.push(Field::Message, REQUIRED);
        } else if let Some(msg) = length_error(message, MESSAGE_MIN, MESSAGE_MAX) {
            errors.push(Field::Message, msg);
        }

        if !self.accept_privacy {
            errors.push(
                Field::AcceptPrivacy,
                "Debes aceptar la política de privacidad",
            );
        }

        match parsed_subject {
            Some(subject) if errors.is_empty() => Ok(ContactRequest {
                name: name.to_string(),
                email: email.to_lowercase(),
                phone: phone.to_string(),
                subject,
                property: (!property.is_empty()).then(|| property.to_string()),
                message: message.to_string(),
            }),
            _ => Err(errors),
        }
    }
}

fn length_error(value: &str, min: usize, max: usize) -> Option<String> {
    let len = value.chars().count();
    if len < min {
        Some(format!("Debe tener al menos {min} caracteres"))
    } else if len > max {
        Some(format!("No puede exceder {max} caracteres"))
    } else {
        None
    }
}
