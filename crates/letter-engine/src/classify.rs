//! Variable classification and template suggestions
//!
//! Classification is a deliberately simple substring heuristic, not a
//! learned model. It is exposed as an injectable policy so callers can
//! replace it without touching the parsing pipeline.
//!
//! Known limitation, preserved on purpose: required/optional matching is
//! done on date-related French/English substrings, so a name that happens
//! to contain one of them (say `sejour`) is classified as required even
//! when it is not a date field.

use serde::{Deserialize, Serialize};
use template_types::TemplateCategory;

/// Date/time substrings that mark a variable as required
pub const DATE_KEYWORDS: &[&str] = &[
    "jour", "mois", "annee", "date", "heure", "day", "month", "year", "hour",
];

/// Suggested display name when no keyword rule matches
pub const DEFAULT_TEMPLATE_NAME: &str = "Nouveau modèle";

/// Required/optional partition of a variable name set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub required: Vec<String>,
    pub optional: Vec<String>,
}

/// Proposed display name and category for a new template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub name: String,
    pub category: TemplateCategory,
}

/// Policy turning a set of variable names into a classification and a
/// template suggestion
pub trait ClassificationPolicy: Send + Sync {
    /// Partition names into required and optional
    fn classify(&self, names: &[String]) -> Classification;

    /// Derive a display name and category from the names
    fn suggest(&self, names: &[String]) -> Suggestion;
}

/// Default keyword-based policy
pub struct KeywordPolicy;

// Ordered: the first rule whose keyword appears anywhere in the joined
// names wins.
const SUGGESTION_RULES: &[(&[&str], TemplateCategory, &str)] = &[
    (
        &["incident", "kilometrage", "km", "distance"],
        TemplateCategory::VehicleWarning,
        "Avertissement véhicule",
    ),
    (
        &["contrat", "contract"],
        TemplateCategory::Contract,
        "Contrat de travail",
    ),
    (
        &["licenciement", "termination"],
        TemplateCategory::Termination,
        "Lettre de licenciement",
    ),
    (
        &["demission", "resignation"],
        TemplateCategory::Resignation,
        "Lettre de démission",
    ),
];

impl ClassificationPolicy for KeywordPolicy {
    fn classify(&self, names: &[String]) -> Classification {
        let mut required = Vec::new();
        let mut optional = Vec::new();
        for name in names {
            if DATE_KEYWORDS.iter().any(|keyword| name.contains(keyword)) {
                required.push(name.clone());
            } else {
                optional.push(name.clone());
            }
        }
        Classification { required, optional }
    }

    fn suggest(&self, names: &[String]) -> Suggestion {
        let joined = names.join(" ").to_lowercase();
        for (keywords, category, name) in SUGGESTION_RULES {
            if keywords.iter().any(|keyword| joined.contains(keyword)) {
                return Suggestion {
                    name: (*name).to_string(),
                    category: *category,
                };
            }
        }
        Suggestion {
            name: DEFAULT_TEMPLATE_NAME.to_string(),
            category: TemplateCategory::General,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_date_keywords_are_required() {
        let classification =
            KeywordPolicy.classify(&names(&["date_debut", "prenom", "annee_validite"]));
        assert_eq!(
            classification.required,
            names(&["date_debut", "annee_validite"])
        );
        assert_eq!(classification.optional, names(&["prenom"]));
    }

    #[test]
    fn test_classification_partitions_all_names() {
        let input = names(&["jour_reprise", "nom", "heure_entretien", "motif"]);
        let classification = KeywordPolicy.classify(&input);
        assert_eq!(
            classification.required.len() + classification.optional.len(),
            input.len()
        );
    }

    #[test]
    fn test_substring_overmatch_is_preserved() {
        // "sejour" contains "jour" - known heuristic limitation
        let classification = KeywordPolicy.classify(&names(&["lieu_sejour"]));
        assert_eq!(classification.required, names(&["lieu_sejour"]));
    }

    #[test]
    fn test_vehicle_rule_wins_over_later_rules() {
        let suggestion = KeywordPolicy.suggest(&names(&["date_incident", "type_contrat"]));
        assert_eq!(suggestion.category, TemplateCategory::VehicleWarning);
        assert_eq!(suggestion.name, "Avertissement véhicule");
    }

    #[test]
    fn test_contract_suggestion() {
        let suggestion = KeywordPolicy.suggest(&names(&["type_contrat", "salaire"]));
        assert_eq!(suggestion.category, TemplateCategory::Contract);
    }

    #[test]
    fn test_termination_and_resignation_suggestions() {
        let termination = KeywordPolicy.suggest(&names(&["motif_licenciement"]));
        assert_eq!(termination.category, TemplateCategory::Termination);

        let resignation = KeywordPolicy.suggest(&names(&["date_demission"]));
        assert_eq!(resignation.category, TemplateCategory::Resignation);
    }

    #[test]
    fn test_fallback_suggestion() {
        let suggestion = KeywordPolicy.suggest(&names(&["prenom", "nom"]));
        assert_eq!(suggestion.category, TemplateCategory::General);
        assert_eq!(suggestion.name, DEFAULT_TEMPLATE_NAME);
    }

    #[test]
    fn test_empty_set_falls_back_to_default_name() {
        let suggestion = KeywordPolicy.suggest(&[]);
        assert_eq!(suggestion.name, DEFAULT_TEMPLATE_NAME);
        assert_eq!(suggestion.category, TemplateCategory::General);
    }
}
