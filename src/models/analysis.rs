use serde::{Deserialize, Serialize};

/// Categories a message can classify into. Closed set: every message maps to
/// exactly one of these, `Nenhuma` being the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisKind {
    RuralApenasSemLimite,
    RuralComLimiteExplicito,
    CidadeNaoAtendida,
    Nenhuma,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    #[serde(rename = "type")]
    pub kind: AnalysisKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cidade: Option<String>, // omitted when no city could be extracted, never Some("")
    pub needs_rural_confirmation: bool,
    pub should_limit_to_30_percent: bool,
}

impl Analysis {
    /// The no-match result: no rule applies, caller falls through to the
    /// remote agent.
    pub fn none() -> Self {
        Self {
            kind: AnalysisKind::Nenhuma,
            cidade: None,
            needs_rural_confirmation: false,
            should_limit_to_30_percent: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_has_all_flags_clear() {
        let analysis = Analysis::none();
        assert_eq!(analysis.kind, AnalysisKind::Nenhuma);
        assert!(analysis.cidade.is_none());
        assert!(!analysis.needs_rural_confirmation);
        assert!(!analysis.should_limit_to_30_percent);
    }

    #[test]
    fn serializes_to_the_chat_ui_contract() {
        let analysis = Analysis {
            kind: AnalysisKind::RuralApenasSemLimite,
            cidade: Some("Teste".to_string()),
            needs_rural_confirmation: true,
            should_limit_to_30_percent: true,
        };
        let json = serde_json::to_value(&analysis).unwrap();
        assert_eq!(json["type"], "rural_apenas_sem_limite");
        assert_eq!(json["cidade"], "Teste");
        assert_eq!(json["needsRuralConfirmation"], true);
        assert_eq!(json["shouldLimitTo30Percent"], true);
    }

    #[test]
    fn cidade_is_omitted_when_absent() {
        let json = serde_json::to_value(Analysis::none()).unwrap();
        assert!(json.get("cidade").is_none());
    }
}
