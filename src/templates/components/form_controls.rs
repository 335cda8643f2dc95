use maud::{html, Markup};

/// Shared attributes of a labelled form control.
pub struct Control<'a> {
    pub name: &'a str,
    pub label: &'a str,
    pub value: &'a str,
    pub error: Option<&'a str>,
    pub required: bool,
    pub help: Option<&'a str>,
}

impl<'a> Control<'a> {
    pub fn new(name: &'a str, label: &'a str, value: &'a str) -> Self {
        Self {
            name,
            label,
            value,
            error: None,
            required: false,
            help: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    pub fn help(mut self, help: &'a str) -> Self {
        self.help = Some(help);
        self
    }

    fn id(&self) -> String {
        format!("field-{}", self.name)
    }

    fn error_id(&self) -> String {
        format!("field-{}-error", self.name)
    }

    fn described_by(&self) -> Option<String> {
        self.error.map(|_| self.error_id())
    }
}

fn label(ctl: &Control<'_>) -> Markup {
    html! {
        label for=(ctl.id()) {
            (ctl.label)
            @if ctl.required {
                span class="required" aria-hidden="true" { " *" }
            }
        }
    }
}

fn messages(ctl: &Control<'_>) -> Markup {
    html! {
        @if let Some(err) = ctl.error {
            p id=(ctl.error_id()) class="field-error" role="alert" { (err) }
        } @else if let Some(help) = ctl.help {
            p class="field-help" { (help) }
        }
    }
}

/// `<input>` with label, inline error and optional helper text.
pub fn text_input(ctl: &Control<'_>, input_type: &str, autocomplete: &str, placeholder: &str) -> Markup {
    html! {
        div.field.has-error[ctl.error.is_some()] {
            (label(ctl))
            input
                type=(input_type)
                id=(ctl.id())
                name=(ctl.name)
                value=(ctl.value)
                autocomplete=(autocomplete)
                placeholder=(placeholder)
                required[ctl.required]
                aria-invalid=[ctl.error.map(|_| "true")]
                aria-describedby=[ctl.described_by()];
            (messages(ctl))
        }
    }
}

pub fn textarea(ctl: &Control<'_>, rows: u32, max_chars: usize, placeholder: &str) -> Markup {
    let count = ctl.value.chars().count();

    html! {
        div.field.has-error[ctl.error.is_some()] {
            (label(ctl))
            textarea
                id=(ctl.id())
                name=(ctl.name)
                rows=(rows)
                maxlength=(max_chars)
                placeholder=(placeholder)
                required[ctl.required]
                aria-invalid=[ctl.error.map(|_| "true")]
                aria-describedby=[ctl.described_by()]
            { (ctl.value) }
            p class="char-count" { (count) " / " (max_chars) }
            (messages(ctl))
        }
    }
}

/// `<select>`; `options` are `(value, label)` pairs, the empty value acting as
/// the placeholder.
pub fn select(ctl: &Control<'_>, options: &[(&str, &str)]) -> Markup {
    html! {
        div.field.has-error[ctl.error.is_some()] {
            (label(ctl))
            select
                id=(ctl.id())
                name=(ctl.name)
                required[ctl.required]
                aria-invalid=[ctl.error.map(|_| "true")]
                aria-describedby=[ctl.described_by()]
            {
                @for (value, text) in options {
                    option value=(value) selected[*value == ctl.value] { (text) }
                }
            }
            (messages(ctl))
        }
    }
}

/// Single checkbox whose label may contain markup (links).
pub fn checkbox(ctl: &Control<'_>, checked: bool, label_body: Markup) -> Markup {
    html! {
        div.field.checkbox.has-error[ctl.error.is_some()] {
            input
                type="checkbox"
                id=(ctl.id())
                name=(ctl.name)
                value="on"
                checked[checked]
                aria-invalid=[ctl.error.map(|_| "true")]
                aria-describedby=[ctl.described_by()];
            label for=(ctl.id()) { (label_body) }
            (messages(ctl))
        }
    }
}
