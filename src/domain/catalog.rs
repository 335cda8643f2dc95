// src/domain/catalog.rs

use crate::domain::filter::ListingFilter;
use crate::domain::listing::{
    Category, Coordinates, Feature, Listing, Status, Testimonial,
};
use chrono::NaiveDate;

/// Calendar date checked at compile time.
const fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(d) => d,
        None => panic!("invalid calendar date in catalog"),
    }
}

static LISTINGS: [Listing; 6] = [
    Listing {
        id: 1,
        title: "La Estrella del Señorío",
        category: Category::Chalet,
        location: "Illescas, Toledo",
        status: Status::Available,
        summary: "Chalets adosados en un entorno natural, con las mejores comodidades.",
        description: "46 chalets adosados de 4 dormitorios en una ubicación privilegiada. \
            Cada vivienda cuenta con garaje individual y acceso a amplias zonas comunes \
            con piscina, pádel y zona infantil.",
        price: 285_000,
        bedrooms: 4,
        bathrooms: 3,
        area_m2: 180,
        plot_m2: Some(200),
        features: &[
            Feature::Garage,
            Feature::Pool,
            Feature::Garden,
            Feature::Paddle,
            Feature::Playground,
        ],
        images: &[
            "/images/properties/estrella-1.svg",
            "/images/properties/estrella-2.svg",
            "/images/properties/estrella-3.svg",
        ],
        coordinates: Coordinates { lat: 40.1301, lng: -3.8472 },
        total_units: 46,
        available_units: 12,
        delivery_date: date(2025, 12, 1),
        featured: true,
    },
    Listing {
        id: 2,
        title: "Residencial Las Encinas",
        category: Category::Apartment,
        location: "Parla, Madrid",
        status: Status::InConstruction,
        summary: "Viviendas modernas con buenas calidades en una ubicación estratégica.",
        description: "Promoción de 80 viviendas de 2 y 3 dormitorios con garaje y trastero \
            incluidos. Excelentes comunicaciones con el centro de Madrid.",
        price: 195_000,
        bedrooms: 3,
        bathrooms: 2,
        area_m2: 95,
        plot_m2: None,
        features: &[
            Feature::Garage,
            Feature::Storage,
            Feature::Elevator,
            Feature::AirConditioning,
        ],
        images: &[
            "/images/properties/encinas-1.svg",
            "/images/properties/encinas-2.svg",
        ],
        coordinates: Coordinates { lat: 40.2375, lng: -3.7681 },
        total_units: 80,
        available_units: 35,
        delivery_date: date(2026, 6, 1),
        featured: true,
    },
    Listing {
        id: 3,
        title: "Residencial El Mirador",
        category: Category::Duplex,
        location: "Getafe, Madrid",
        status: Status::Available,
        summary: "Dúplex con terraza y vistas panorámicas.",
        description: "24 dúplex con amplias terrazas y diseño funcional, en una zona \
            tranquila con todos los servicios a mano.",
        price: 245_000,
        bedrooms: 3,
        bathrooms: 2,
        area_m2: 120,
        plot_m2: None,
        features: &[
            Feature::Terrace,
            Feature::Garage,
            Feature::Storage,
            Feature::Elevator,
            Feature::Heating,
        ],
        images: &[
            "/images/properties/mirador-1.svg",
            "/images/properties/mirador-2.svg",
            "/images/properties/mirador-3.svg",
        ],
        coordinates: Coordinates { lat: 40.3063, lng: -3.7325 },
        total_units: 24,
        available_units: 8,
        delivery_date: date(2025, 9, 1),
        featured: false,
    },
    Listing {
        id: 4,
        title: "Áticos Premium Centro",
        category: Category::Penthouse,
        location: "Madrid Centro",
        status: Status::ComingSoon,
        summary: "Áticos en pleno centro de Madrid con vistas sobre la ciudad.",
        description: "Promoción de 12 áticos de alto standing con terrazas amplias y \
            acabados premium en el corazón de Madrid.",
        price: 450_000,
        bedrooms: 3,
        bathrooms: 2,
        area_m2: 110,
        plot_m2: None,
        features: &[
            Feature::Terrace,
            Feature::Garage,
            Feature::Storage,
            Feature::Elevator,
            Feature::AirConditioning,
            Feature::Security,
        ],
        images: &[
            "/images/properties/aticos-1.svg",
            "/images/properties/aticos-2.svg",
        ],
        coordinates: Coordinates { lat: 40.4168, lng: -3.7038 },
        total_units: 12,
        available_units: 12,
        delivery_date: date(2026, 12, 1),
        featured: true,
    },
    Listing {
        id: 5,
        title: "Villa Las Rozas",
        category: Category::Chalet,
        location: "Las Rozas, Madrid",
        status: Status::SoldOut,
        summary: "Chalets independientes en una zona residencial tranquila.",
        description: "15 chalets independientes sobre parcelas de 400 m² con jardín \
            privado y piscina.",
        price: 520_000,
        bedrooms: 5,
        bathrooms: 3,
        area_m2: 250,
        plot_m2: Some(400),
        features: &[
            Feature::Garage,
            Feature::Pool,
            Feature::Garden,
            Feature::AirConditioning,
            Feature::Heating,
        ],
        images: &[
            "/images/properties/villa-1.svg",
            "/images/properties/villa-2.svg",
        ],
        coordinates: Coordinates { lat: 40.5569, lng: -3.8736 },
        total_units: 15,
        available_units: 0,
        delivery_date: date(2024, 3, 1),
        featured: false,
    },
    Listing {
        id: 6,
        title: "Residencial Nuevo Parque",
        category: Category::Apartment,
        location: "Móstoles, Madrid",
        status: Status::InConstruction,
        summary: "Pisos junto al parque con excelentes comunicaciones.",
        description: "120 viviendas de 2 y 3 dormitorios con zonas verdes, garaje y \
            trastero.",
        price: 175_000,
        bedrooms: 2,
        bathrooms: 1,
        area_m2: 75,
        plot_m2: None,
        features: &[Feature::Garage, Feature::Storage, Feature::Elevator],
        images: &["/images/properties/parque-1.svg"],
        coordinates: Coordinates { lat: 40.3223, lng: -3.8649 },
        total_units: 120,
        available_units: 85,
        delivery_date: date(2026, 3, 1),
        featured: false,
    },
];

static TESTIMONIALS: [Testimonial; 4] = [
    Testimonial {
        id: 1,
        name: "María González",
        development: "Residencial Las Encinas, Parla",
        text: "El proceso de compra fue transparente y claro. La calidad de los \
            acabados es excelente y el servicio posventa impecable.",
        rating: 5,
    },
    Testimonial {
        id: 2,
        name: "Carlos Jiménez",
        development: "La Estrella del Señorío, Illescas",
        text: "Profesionales, atentos y siempre dispuestos a resolver cualquier duda. \
            Nuestro chalet superó nuestras expectativas.",
        rating: 5,
    },
    Testimonial {
        id: 3,
        name: "Ana Martínez",
        development: "Residencial El Mirador, Getafe",
        text: "El dúplex tiene una distribución perfecta y las zonas comunes son \
            preciosas. El trato humano marca la diferencia.",
        rating: 5,
    },
    Testimonial {
        id: 4,
        name: "David López",
        development: "Áticos Premium Centro, Madrid",
        text: "Nos ayudaron durante toda la financiación y las visitas fueron muy \
            productivas. Las vistas del ático son increíbles.",
        rating: 5,
    },
];

/// Every listing, in catalog order.
pub fn all() -> &'static [Listing] {
    &LISTINGS
}

pub fn find(id: u32) -> Option<&'static Listing> {
    LISTINGS.iter().find(|l| l.id == id)
}

pub fn featured() -> impl Iterator<Item = &'static Listing> {
    LISTINGS.iter().filter(|l| l.featured)
}

/// Listings that still have units on sale (available or under construction).
pub fn open_for_sale() -> impl Iterator<Item = &'static Listing> {
    LISTINGS.iter().filter(|l| l.status.is_open_for_sale())
}

/// Listings satisfying every present criterion, in catalog order.
pub fn filter(criteria: &ListingFilter) -> Vec<&'static Listing> {
    LISTINGS.iter().filter(|l| criteria.matches(l)).collect()
}

pub fn testimonials() -> &'static [Testimonial] {
    &TESTIMONIALS
}
