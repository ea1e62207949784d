use crate::config::keywords::MOJIBAKE_REPAIRS;

/// A message prepared for rule matching. `original` keeps casing and accents
/// (used for proper-noun extraction), `folded` is what predicates match on.
pub struct NormalizedMessage {
    pub original: String,
    pub folded: String,
}

pub fn normalize(raw: &str) -> NormalizedMessage {
    let original = repair_mojibake(raw);
    let folded = fold(&original);
    NormalizedMessage { original, folded }
}

/// Undoes UTF-8 text that was decoded as Latin-1 somewhere upstream, e.g.
/// "GoiÃ¢nia" back to "Goiânia". Text without artifacts passes through.
pub fn repair_mojibake(text: &str) -> String {
    if !text.contains('Ã') {
        return text.to_string();
    }
    let mut repaired = text.to_string();
    for (broken, intended) in MOJIBAKE_REPAIRS {
        if repaired.contains(broken) {
            repaired = repaired.replace(broken, intended);
        }
    }
    repaired
}

/// Lowercases and strips Portuguese accents, so keyword markers can be
/// written once in plain ASCII.
pub fn fold(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .map(strip_accent)
        .collect()
}

fn strip_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        'ñ' => 'n',
        _ => c,
    }
}
