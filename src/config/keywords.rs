// Static rule vocabulary. All matching happens on folded text (lowercased,
// accents stripped), so every marker here is written in folded form.

/// Markers that put a message in the rural-collateral scenario.
pub static RURAL_MARKERS: &[&str] = &[
    "rural",
    "rurais",
    "fazenda",
    "sitio",
    "chacara",
];

/// Phrases stating that a location is outside the covered area.
pub static COVERAGE_NEGATIVE_MARKERS: &[&str] = &[
    "nao atendemos",
    "nao trabalhamos",
    "fora da area de cobertura",
    "fora de cobertura",
    "nao chegamos a",
];

/// Cities the lender serves, in canonical spelling. Extracted candidates are
/// resolved against this table so typos and encoding damage collapse to one
/// spelling; candidates that resolve to nothing are kept as typed.
pub static CIDADES_ATENDIDAS: &[&str] = &[
    "São Paulo",
    "Campinas",
    "Ribeirão Preto",
    "Sorocaba",
    "Belo Horizonte",
    "Uberlândia",
    "Curitiba",
    "Porto Alegre",
    "Goiânia",
    "Cuiabá",
];

/// Minimum Jaro-Winkler score for a candidate to canonicalize to a table city.
pub const CITY_SIMILARITY_THRESHOLD: f64 = 0.85;

/// UTF-8 text that went through a Latin-1/cp1252 decode upstream. Each pair is
/// (broken sequence, intended character); applied before any matching.
pub static MOJIBAKE_REPAIRS: &[(&str, &str)] = &[
    ("Ã¡", "á"),
    ("Ã\u{a0}", "à"),
    ("Ã¢", "â"),
    ("Ã£", "ã"),
    ("Ã©", "é"),
    ("Ãª", "ê"),
    ("Ã\u{ad}", "í"),
    ("Ã³", "ó"),
    ("Ã´", "ô"),
    ("Ãµ", "õ"),
    ("Ãº", "ú"),
    ("Ã§", "ç"),
    ("Ã\u{81}", "Á"),
    ("Ã\u{80}", "À"),
    ("Ã\u{82}", "Â"),
    ("Ãƒ", "Ã"),
    ("Ã‰", "É"),
    ("ÃŠ", "Ê"),
    ("Ã\u{8d}", "Í"),
    ("Ã“", "Ó"),
    ("Ã”", "Ô"),
    ("Ã•", "Õ"),
    ("Ãš", "Ú"),
    ("Ã‡", "Ç"),
];
