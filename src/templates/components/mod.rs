use maud::{html, Markup};

pub mod breadcrumbs;
pub mod card;
pub mod contact_form;
pub mod error;
pub mod filters;
pub mod form_controls;
pub mod property_card;

pub use breadcrumbs::breadcrumbs;
pub use card::card;
pub use contact_form::{contact_form, contact_success};
pub use error::error_page;
pub use filters::filter_panel;
pub use property_card::{property_card, status_badge};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    Primary,
    Outline,
}

impl ButtonStyle {
    fn class(self) -> &'static str {
        match self {
            ButtonStyle::Primary => "btn btn-primary",
            ButtonStyle::Outline => "btn btn-outline",
        }
    }
}

/// An anchor styled as a button.
pub fn link_button(label: &str, href: &str, style: ButtonStyle) -> Markup {
    html! {
        a href=(href) class=(style.class()) { (label) }
    }
}

pub fn submit_button(label: &str) -> Markup {
    html! {
        button type="submit" class=(ButtonStyle::Primary.class()) {
            span class="btn-text" { (label) }
            span class="spinner" aria-hidden="true" {}
        }
    }
}
