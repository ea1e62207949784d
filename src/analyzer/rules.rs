use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::normalize::{fold, normalize, NormalizedMessage};
use crate::config::keywords::{
    CIDADES_ATENDIDAS, CITY_SIMILARITY_THRESHOLD, COVERAGE_NEGATIVE_MARKERS, RURAL_MARKERS,
};
use crate::models::analysis::{Analysis, AnalysisKind};

struct Rule {
    name: &'static str,
    matches: fn(&NormalizedMessage) -> bool,
    build: fn(&NormalizedMessage) -> Analysis,
}

// Evaluated top to bottom, first match wins. The order is part of the
// contract: a message mentioning both a rural restriction and an uncovered
// city classifies as the rural scenario.
static RULES: &[Rule] = &[
    Rule {
        name: "rural_apenas_sem_limite",
        matches: is_rural_without_limit,
        build: build_rural_without_limit,
    },
    Rule {
        name: "rural_com_limite_explicito",
        matches: is_rural_with_explicit_limit,
        build: build_rural_with_explicit_limit,
    },
    Rule {
        name: "cidade_nao_atendida",
        matches: is_city_not_covered,
        build: build_city_not_covered,
    },
];

/// Classifies a chat message against the local business rules, without any
/// remote call. Total: every input, including the empty string, yields an
/// `Analysis`; no rule matching means [`Analysis::none`].
pub fn analyze_message(raw: &str) -> Analysis {
    let msg = normalize(raw);
    for rule in RULES {
        if (rule.matches)(&msg) {
            debug!(rule = rule.name, "message matched local rule");
            return (rule.build)(&msg);
        }
    }
    Analysis::none()
}

fn mentions_rural(msg: &NormalizedMessage) -> bool {
    RURAL_MARKERS.iter().any(|kw| msg.folded.contains(kw))
}

static PERCENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{1,3})(?:[.,]\d+)?\s*(?:%|por cento)").unwrap());

/// Integer part of the first percentage stated in the message, if any.
fn explicit_percentage(msg: &NormalizedMessage) -> Option<u32> {
    PERCENT_RE
        .captures(&msg.folded)
        .and_then(|caps| caps[1].parse().ok())
}

// Rural collateral with no published loan-to-value limit. A stated 30% is the
// standard cap, so it does not count as a competing limit.
fn is_rural_without_limit(msg: &NormalizedMessage) -> bool {
    mentions_rural(msg) && explicit_percentage(msg).map_or(true, |p| p == 30)
}

fn is_rural_with_explicit_limit(msg: &NormalizedMessage) -> bool {
    mentions_rural(msg) && explicit_percentage(msg).map_or(false, |p| p != 30)
}

fn is_city_not_covered(msg: &NormalizedMessage) -> bool {
    COVERAGE_NEGATIVE_MARKERS
        .iter()
        .any(|kw| msg.folded.contains(kw))
}

fn build_rural_without_limit(msg: &NormalizedMessage) -> Analysis {
    Analysis {
        kind: AnalysisKind::RuralApenasSemLimite,
        cidade: extract_city(msg),
        needs_rural_confirmation: true,
        should_limit_to_30_percent: true,
    }
}

fn build_rural_with_explicit_limit(msg: &NormalizedMessage) -> Analysis {
    Analysis {
        kind: AnalysisKind::RuralComLimiteExplicito,
        cidade: extract_city(msg),
        needs_rural_confirmation: false,
        should_limit_to_30_percent: false,
    }
}

fn build_city_not_covered(msg: &NormalizedMessage) -> Analysis {
    Analysis {
        kind: AnalysisKind::CidadeNaoAtendida,
        cidade: extract_city(msg),
        needs_rural_confirmation: false,
        should_limit_to_30_percent: false,
    }
}

// Captures the capitalized word run after "cidade" / "cidade de", e.g.
// "cidade Teste," -> "Teste", "cidade de São Paulo temos" -> "São Paulo".
static CITY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i:\bcidade\s+(?:de\s+)?)([\p{Lu}][\p{L}'\-]*(?:\s(?:d[aeo]s?\s)?[\p{Lu}][\p{L}'\-]*)*)")
        .unwrap()
});

fn extract_city(msg: &NormalizedMessage) -> Option<String> {
    if let Some(caps) = CITY_RE.captures(&msg.original) {
        let candidate = caps[1].trim();
        if !candidate.is_empty() {
            return Some(resolve_city(candidate));
        }
    }
    // No "cidade X" phrase; the message may still name a served city directly.
    CIDADES_ATENDIDAS
        .iter()
        .find(|name| msg.folded.contains(&fold(name)))
        .map(|name| name.to_string())
}

// Exact match first, then substring, then similarity, mirroring how chat
// search resolves free-typed names.
fn resolve_city(candidate: &str) -> String {
    let folded_candidate = fold(candidate);
    if let Some(name) = CIDADES_ATENDIDAS
        .iter()
        .find(|name| fold(name) == folded_candidate)
    {
        return (*name).to_string();
    }
    if folded_candidate.chars().count() >= 4 {
        if let Some(name) = CIDADES_ATENDIDAS.iter().find(|name| {
            let folded_name = fold(name);
            folded_name.contains(&folded_candidate) || folded_candidate.contains(&folded_name)
        }) {
            debug!("resolved city '{}' to '{}' by substring", candidate, name);
            return (*name).to_string();
        }
    }
    let best = CIDADES_ATENDIDAS
        .iter()
        .map(|name| (strsim::jaro_winkler(&fold(name), &folded_candidate), *name))
        .filter(|(score, _)| *score >= CITY_SIMILARITY_THRESHOLD)
        .max_by(|a, b| a.0.partial_cmp(&b.0).unwrap());
    if let Some((score, name)) = best {
        debug!(
            "resolved city '{}' to '{}' with similarity {:.2}",
            candidate, name, score
        );
        return name.to_string();
    }
    candidate.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(text: &str) -> NormalizedMessage {
        normalize(text)
    }

    #[test]
    fn percentage_extraction_variants() {
        assert_eq!(explicit_percentage(&msg("limite de 50%")), Some(50));
        assert_eq!(explicit_percentage(&msg("limite de 50 %")), Some(50));
        assert_eq!(explicit_percentage(&msg("50 por cento do valor")), Some(50));
        assert_eq!(explicit_percentage(&msg("12,5% ao ano")), Some(12));
        assert_eq!(explicit_percentage(&msg("sem limite definido")), None);
        assert_eq!(explicit_percentage(&msg("R$ 300.000 de credito")), None);
    }

    #[test]
    fn thirty_percent_is_not_a_competing_limit() {
        assert!(is_rural_without_limit(&msg("imóvel rural, limite de 30%")));
        assert!(!is_rural_without_limit(&msg("imóvel rural, limite de 50%")));
        assert!(is_rural_with_explicit_limit(&msg("imóvel rural, limite de 50%")));
    }

    #[test]
    fn city_extraction_after_marker() {
        let rural = msg("Para a cidade Teste, trabalhamos apenas com imóveis rurais.");
        assert_eq!(extract_city(&rural).as_deref(), Some("Teste"));

        let with_de = msg("Na cidade de São Paulo temos atendimento completo.");
        assert_eq!(extract_city(&with_de).as_deref(), Some("São Paulo"));
    }

    #[test]
    fn city_without_marker_resolves_from_the_served_table() {
        let direct = msg("Vocês atendem Sorocaba com imóvel rural?");
        assert_eq!(extract_city(&direct).as_deref(), Some("Sorocaba"));
    }

    #[test]
    fn city_resolution_canonicalizes_typos() {
        // accent dropped -> exact match after folding
        assert_eq!(resolve_city("Goiania"), "Goiânia");
        // one letter missing -> similarity match
        assert_eq!(resolve_city("Curitba"), "Curitiba");
        // unknown city stays as typed
        assert_eq!(resolve_city("Santos"), "Santos");
    }

    #[test]
    fn coverage_rule_matches_negative_phrasing() {
        assert!(is_city_not_covered(&msg("Infelizmente não atendemos essa região.")));
        assert!(!is_city_not_covered(&msg("trabalhamos apenas com imóveis rurais")));
    }
}
