use crate::domain::{Category, Feature, ListingFilter, Status};
use crate::format::format_price;
use maud::{html, Markup};

pub const MIN_PRICE_OPTIONS: [u32; 6] = [100_000, 150_000, 200_000, 250_000, 300_000, 400_000];
pub const MAX_PRICE_OPTIONS: [u32; 6] = [200_000, 250_000, 300_000, 400_000, 500_000, 600_000];
pub const BEDROOM_OPTIONS: [u8; 5] = [1, 2, 3, 4, 5];

/// Results container the panel refreshes through htmx.
pub const RESULTS_ID: &str = "listing-results";

/// Filter sidebar. Submits as GET so the URL always carries the filter state.
pub fn filter_panel(filter: &ListingFilter) -> Markup {
    html! {
        form
            class="filters card"
            method="get"
            action="/propiedades"
            role="search"
            hx-get="/propiedades"
            hx-trigger="change, submit"
            hx-target={ "#" (RESULTS_ID) }
            hx-swap="outerHTML"
            hx-push-url="true"
        {
            div class="filters-header" {
                h2 { "Filtros" }
            }

            fieldset {
                legend { "Estado" }
                @for status in Status::ALL {
                    (check("status", status.slug(), status.label(), filter.statuses.contains(&status)))
                }
            }

            fieldset {
                legend { "Tipo de vivienda" }
                @for category in Category::ALL {
                    (check("type", category.slug(), category.label(), filter.categories.contains(&category)))
                }
            }

            fieldset {
                legend { "Precio" }
                label for="filter-min-price" { "Desde" }
                select id="filter-min-price" name="minPrice" {
                    option value="" selected[filter.min_price.is_none()] { "Sin mínimo" }
                    @for price in MIN_PRICE_OPTIONS {
                        option value=(price) selected[filter.min_price == Some(price)] { (format_price(price)) }
                    }
                }
                label for="filter-max-price" { "Hasta" }
                select id="filter-max-price" name="maxPrice" {
                    option value="" selected[filter.max_price.is_none()] { "Sin máximo" }
                    @for price in MAX_PRICE_OPTIONS {
                        option value=(price) selected[filter.max_price == Some(price)] { (format_price(price)) }
                    }
                }
            }

            fieldset {
                legend { "Dormitorios mínimos" }
                select id="filter-bedrooms" name="bedrooms" aria-label="Dormitorios mínimos" {
                    option value="" selected[filter.min_bedrooms.is_none()] { "Cualquiera" }
                    @for n in BEDROOM_OPTIONS {
                        option value=(n) selected[filter.min_bedrooms == Some(n)] { (n) "+" }
                    }
                }
            }

            fieldset {
                legend { "Características" }
                @for feature in Feature::FILTERABLE {
                    (check("features", feature.slug(), feature.label(), filter.features.contains(&feature)))
                }
            }

            @for location in &filter.locations {
                input type="hidden" name="location" value=(location);
            }

            button type="submit" class="btn btn-primary" { "Aplicar filtros" }
        }
    }
}

fn check(name: &str, value: &str, label: &str, checked: bool) -> Markup {
    let id = format!("filter-{name}-{value}");
    html! {
        div class="field checkbox" {
            input type="checkbox" id=(id) name=(name) value=(value) checked[checked];
            label for=(id) { (label) }
        }
    }
}
