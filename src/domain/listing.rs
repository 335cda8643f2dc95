// src/domain/listing.rs

use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("unknown status '{0}'")]
    UnknownStatus(String),
    #[error("unknown property type '{0}'")]
    UnknownCategory(String),
    #[error("unknown feature '{0}'")]
    UnknownFeature(String),
}

/// Sales status of a development.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Available,
    InConstruction,
    SoldOut,
    ComingSoon,
}

impl Status {
    pub const ALL: [Status; 4] = [
        Status::Available,
        Status::InConstruction,
        Status::SoldOut,
        Status::ComingSoon,
    ];

    /// Stable identifier used in URLs.
    pub fn slug(self) -> &'static str {
        match self {
            Status::Available => "available",
            Status::InConstruction => "in-construction",
            Status::SoldOut => "sold-out",
            Status::ComingSoon => "coming-soon",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Status::Available => "Disponible",
            Status::InConstruction => "En construcción",
            Status::SoldOut => "Vendido",
            Status::ComingSoon => "Próximamente",
        }
    }

    /// Units can still be reserved.
    pub fn is_open_for_sale(self) -> bool {
        matches!(self, Status::Available | Status::InConstruction)
    }
}

impl FromStr for Status {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Status::ALL
            .into_iter()
            .find(|st| st.slug().eq_ignore_ascii_case(needle))
            .ok_or_else(|| CatalogError::UnknownStatus(s.to_string()))
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Kind of home on offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Chalet,
    Apartment,
    Duplex,
    Penthouse,
    Studio,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Chalet,
        Category::Apartment,
        Category::Duplex,
        Category::Penthouse,
        Category::Studio,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Category::Chalet => "chalet",
            Category::Apartment => "apartment",
            Category::Duplex => "duplex",
            Category::Penthouse => "penthouse",
            Category::Studio => "studio",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Chalet => "Chalet",
            Category::Apartment => "Piso",
            Category::Duplex => "Dúplex",
            Category::Penthouse => "Ático",
            Category::Studio => "Estudio",
        }
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.slug().eq_ignore_ascii_case(needle))
            .ok_or_else(|| CatalogError::UnknownCategory(s.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Amenity tag attached to a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    Garage,
    Pool,
    Garden,
    Terrace,
    Elevator,
    Storage,
    AirConditioning,
    Heating,
    Paddle,
    Playground,
    Security,
}

impl Feature {
    pub const ALL: [Feature; 11] = [
        Feature::Garage,
        Feature::Pool,
        Feature::Garden,
        Feature::Terrace,
        Feature::Elevator,
        Feature::Storage,
        Feature::AirConditioning,
        Feature::Heating,
        Feature::Paddle,
        Feature::Playground,
        Feature::Security,
    ];

    /// Subset offered as checkboxes in the filter panel.
    pub const FILTERABLE: [Feature; 6] = [
        Feature::Garage,
        Feature::Pool,
        Feature::Garden,
        Feature::Terrace,
        Feature::Elevator,
        Feature::Storage,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Feature::Garage => "garage",
            Feature::Pool => "pool",
            Feature::Garden => "garden",
            Feature::Terrace => "terrace",
            Feature::Elevator => "elevator",
            Feature::Storage => "storage",
            Feature::AirConditioning => "air-conditioning",
            Feature::Heating => "heating",
            Feature::Paddle => "paddle",
            Feature::Playground => "playground",
            Feature::Security => "security",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Feature::Garage => "Garaje",
            Feature::Pool => "Piscina",
            Feature::Garden => "Jardín",
            Feature::Terrace => "Terraza",
            Feature::Elevator => "Ascensor",
            Feature::Storage => "Trastero",
            Feature::AirConditioning => "Aire acondicionado",
            Feature::Heating => "Calefacción",
            Feature::Paddle => "Pádel",
            Feature::Playground => "Zona infantil",
            Feature::Security => "Seguridad",
        }
    }
}

impl FromStr for Feature {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Feature::ALL
            .into_iter()
            .find(|f| f.slug().eq_ignore_ascii_case(needle))
            .ok_or_else(|| CatalogError::UnknownFeature(s.to_string()))
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A development for sale in the static catalog.
///
/// Records are fixed at build time. `available_units <= total_units` is expected
/// but not enforced.
#[derive(Debug)]
pub struct Listing {
    pub id: u32,
    pub title: &'static str,
    pub category: Category,
    pub location: &'static str,
    pub status: Status,
    /// One or two sentences, used on cards.
    pub summary: &'static str,
    pub description: &'static str,
    /// Whole euros.
    pub price: u32,
    pub bedrooms: u8,
    pub bathrooms: u8,
    pub area_m2: u16,
    pub plot_m2: Option<u16>,
    pub features: &'static [Feature],
    pub images: &'static [&'static str],
    pub coordinates: Coordinates,
    pub total_units: u16,
    pub available_units: u16,
    /// Planned handover; past dates mean delivered.
    pub delivery_date: NaiveDate,
    pub featured: bool,
}

impl Listing {
    pub fn has_feature(&self, feature: Feature) -> bool {
        self.features.contains(&feature)
    }

    pub fn cover_image(&self) -> Option<&'static str> {
        self.images.first().copied()
    }

    pub fn detail_path(&self) -> String {
        format!("/propiedades/{}", self.id)
    }

    /// Link to an OpenStreetMap view centred on the development.
    pub fn map_url(&self) -> String {
        format!(
            "https://www.openstreetmap.org/?mlat={lat}&mlon={lng}#map=15/{lat}/{lng}",
            lat = self.coordinates.lat,
            lng = self.coordinates.lng
        )
    }
}

/// Customer review shown on the home page.
#[derive(Debug)]
pub struct Testimonial {
    pub id: u32,
    pub name: &'static str,
    pub development: &'static str,
    pub text: &'static str,
    /// 1..=5
    pub rating: u8,
}
