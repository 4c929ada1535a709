//! Ecuadorian provinces.
//!
//! The first two digits of a cédula or RUC are the code of the province where
//! it was issued (01–24). The client form also offers a city list per province.

/// Lowest valid province code.
pub const MIN_PROVINCE_CODE: u8 = 1;

/// Highest valid province code.
pub const MAX_PROVINCE_CODE: u8 = 24;

/// The 24 provinces, indexed by `code - 1`.
pub static PROVINCES: [&str; 24] = [
    "Azuay",
    "Bolívar",
    "Cañar",
    "Carchi",
    "Cotopaxi",
    "Chimborazo",
    "El Oro",
    "Esmeraldas",
    "Guayas",
    "Imbabura",
    "Loja",
    "Los Ríos",
    "Manabí",
    "Morona Santiago",
    "Napo",
    "Pastaza",
    "Pichincha",
    "Tungurahua",
    "Zamora Chinchipe",
    "Galápagos",
    "Sucumbíos",
    "Orellana",
    "Santo Domingo de los Tsáchilas",
    "Santa Elena",
];

/// Name of the province with the given code, if the code is in 1..=24.
pub fn province_name(code: u8) -> Option<&'static str> {
    if (MIN_PROVINCE_CODE..=MAX_PROVINCE_CODE).contains(&code) {
        Some(PROVINCES[usize::from(code - 1)])
    } else {
        None
    }
}

/// Check whether `name` is one of the 24 provinces (case-insensitive).
pub fn is_known_province(name: &str) -> bool {
    let name = name.trim();
    PROVINCES
        .iter()
        .any(|p| p.to_lowercase() == name.to_lowercase())
}

/// Cities offered for a province on the client form.
///
/// Unknown provinces (and provinces without a city list) yield an empty slice.
pub fn cities_of(province: &str) -> &'static [&'static str] {
    let province = province.trim().to_lowercase();
    CITIES
        .iter()
        .find(|(p, _)| p.to_lowercase() == province)
        .map(|(_, cities)| *cities)
        .unwrap_or(&[])
}

static CITIES: &[(&str, &[&str])] = &[
    (
        "Pichincha",
        &[
            "Quito",
            "Cayambe",
            "Rumiñahui",
            "Mejía",
            "Pedro Vicente Maldonado",
            "San Miguel de los Bancos",
            "Puerto Quito",
        ],
    ),
    (
        "Azuay",
        &[
            "Cuenca",
            "Girón",
            "Paute",
            "Chordeleg",
            "El Pan",
            "San Fernando",
            "Santa Isabel",
        ],
    ),
    (
        "Bolívar",
        &[
            "Guaranda",
            "Chillanes",
            "Echeandía",
            "Las Naves",
            "San Miguel",
        ],
    ),
    (
        "Carchi",
        &["Tulcán", "Bolívar", "Espejo", "Montúfar", "Mira", "San Gabriel"],
    ),
    (
        "Cañar",
        &["Azogues", "Biblián", "La Troncal", "Cañar", "El Tambo", "Deleg"],
    ),
    (
        "Chimborazo",
        &["Riobamba", "Alausí", "Guano", "Colta", "Penipe", "Chunchi"],
    ),
    (
        "Cotopaxi",
        &["Latacunga", "Salcedo", "La Maná", "Pangua", "Pujilí", "Sigchos"],
    ),
    (
        "El Oro",
        &[
            "Machala",
            "Pasaje",
            "Zaruma",
            "Arenillas",
            "Balsas",
            "Chilla",
            "El Guabo",
            "Piñas",
            "Santa Rosa",
        ],
    ),
    (
        "Esmeraldas",
        &["Esmeraldas", "Atacames", "Muisne", "Río Verde", "Quinindé"],
    ),
    (
        "Guayas",
        &[
            "Guayaquil",
            "Samborondón",
            "Durán",
            "Balao",
            "Balzar",
            "Naranjal",
            "Playas",
            "Daule",
            "Yaguachi",
        ],
    ),
    (
        "Imbabura",
        &["Ibarra", "Otavalo", "Cotacachi", "Antonio Ante", "Urcuquí", "Pimampiro"],
    ),
    (
        "Loja",
        &["Loja", "Catamayo", "Cariamanga", "Pindal", "Macará", "Saraguro"],
    ),
    (
        "Los Ríos",
        &[
            "Babahoyo",
            "Quevedo",
            "Vinces",
            "Montalvo",
            "Ventanas",
            "Valencia",
            "Urdaneta",
            "Palenque",
        ],
    ),
    (
        "Manabí",
        &[
            "Portoviejo",
            "Manta",
            "Chone",
            "Jama",
            "Jipijapa",
            "El Carmen",
            "Pedernales",
            "Puerto López",
            "Montecristi",
            "Bahía de Caráquez",
        ],
    ),
    (
        "Morona Santiago",
        &["Macas", "Sucúa", "Gualaquiza", "Tiwintza", "San Juan Bosco"],
    ),
    (
        "Napo",
        &["Tena", "Archidona", "El Chaco", "Baeza", "Quijos", "Carlos Julio Arosemena Tola"],
    ),
    ("Orellana", &["Coca", "La Joya de los Sachas", "Loreto", "Aguarico"]),
    ("Pastaza", &["Puyo", "Mera", "Arajuno", "Santa Clara"]),
    (
        "Tungurahua",
        &[
            "Ambato", "Baños", "Patate", "Cevallos", "Mocha", "Pelileo", "Quero", "Píllaro",
        ],
    ),
    (
        "Zamora Chinchipe",
        &["Zamora", "Yantzaza", "Centinela del Cóndor", "Chinchipe", "El Pangui"],
    ),
    (
        "Galápagos",
        &["Puerto Ayora", "Puerto Baquerizo Moreno", "Isabela", "San Cristóbal"],
    ),
    ("Sucumbíos", &["Nueva Loja", "Shushufindi", "Cascales", "Putumayo"]),
];
