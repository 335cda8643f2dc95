// src/company.rs
//
// Static company facts and navigation shared by every page.

pub const NAME: &str = "ALISI S.A.";
pub const SHORT_NAME: &str = "ALISI";
pub const TAGLINE: &str = "Promotora de Viviendas";
pub const EXPERIENCE_YEARS: u32 = 25;
pub const HOMES_BUILT: u32 = 1300;
pub const PHONE: &str = "+34 965 000 000";
pub const EMAIL: &str = "info@alisisa.com";
pub const ADDRESS: &str = "Madrid, España";

pub const SEO_TITLE: &str = "ALISI - Promotora de Viviendas";
pub const SEO_DESCRIPTION: &str = "ALISI S.A., más de 25 años construyendo, \
    promoviendo y vendiendo viviendas de calidad en Madrid y alrededores.";

/// (label, path) pairs for the main navigation.
pub const NAV_ITEMS: &[(&str, &str)] = &[
    ("Inicio", "/"),
    ("Promociones", "/propiedades"),
    ("Nosotros", "/nosotros"),
    ("Contacto", "/contacto"),
];

/// (label, path) pairs for the footer's legal column.
pub const LEGAL_LINKS: &[(&str, &str)] = &[
    ("Aviso legal", "/aviso-legal"),
    ("Privacidad", "/privacidad"),
    ("Cookies", "/cookies"),
];

/// (year, title, description)
pub const MILESTONES: &[(&str, &str, &str)] = &[
    ("1995", "Fundación", "Nace la empresa con su primera promoción en Madrid."),
    ("2000", "Expansión regional", "Primeras promociones fuera de la capital."),
    ("2008", "500 viviendas entregadas", "Medio millar de familias ya viven en casas nuestras."),
    ("2015", "Certificación de calidad", "Todos los procesos de obra pasan a estar certificados."),
    ("2020", "Innovación sostenible", "Eficiencia energética de serie en cada vivienda."),
    ("2024", "Más de 2000 familias", "Seguimos creciendo con cada entrega."),
];

/// (title, description)
pub const REASONS: &[(&str, &str)] = &[
    ("1.300+ viviendas", "Construidas con altos estándares de calidad y diseño."),
    ("25 años de experiencia", "Más de dos décadas en el sector inmobiliario de Madrid."),
    ("Calidad garantizada", "Certificaciones de calidad en todos nuestros proyectos."),
    ("Mejores ubicaciones", "Promociones en las zonas más demandadas del área metropolitana."),
    ("Atención personalizada", "Un equipo que te acompaña en cada paso de la compra."),
    ("Acabados premium", "Materiales de primera calidad cuidados hasta el último detalle."),
];

/// (title, description)
pub const VALUES: &[(&str, &str)] = &[
    ("Compromiso", "Cumplimos plazos y calidades en cada entrega."),
    ("Transparencia", "Información clara en todo el proceso de compra."),
    ("Cercanía", "Trato humano antes, durante y después de la venta."),
];

/// (name, role)
pub const TEAM: &[(&str, &str)] = &[
    ("Luis Sánchez", "Director general"),
    ("Elena Ruiz", "Directora comercial"),
    ("Javier Moreno", "Jefe de obra"),
];
