use std::fmt;

/// One discovered placeholder in a template document.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct VariableInfo {
    /// Canonical identifier (lowercase, alphanumeric/underscore)
    pub name: String,
    /// Occurrences across all scanned document parts, always >= 1
    pub count: u32,
}

impl VariableInfo {
    pub fn new(name: impl Into<String>, count: u32) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

/// Output of one extraction run over a single document.
///
/// `required` and `optional` partition the variable names: every name in
/// `variables` appears in exactly one of the two lists.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    /// All discovered variables, sorted by name
    pub variables: Vec<VariableInfo>,
    /// Names a downstream generation step must receive data for
    pub required: Vec<String>,
    /// Names that may safely be left unfilled
    pub optional: Vec<String>,
    /// Display name proposed for the new template
    pub suggested_name: String,
    /// Category proposed for the new template
    pub suggested_category: TemplateCategory,
}

impl ExtractionResult {
    /// All variable names, in the same order as `variables`
    pub fn names(&self) -> Vec<&str> {
        self.variables.iter().map(|v| v.name.as_str()).collect()
    }
}

/// Category a template is filed under in the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateCategory {
    /// Warning letter about vehicle usage (incidents, mileage)
    VehicleWarning,
    /// Employment contract
    Contract,
    /// Termination letter
    Termination,
    /// Resignation acknowledgement
    Resignation,
    /// Fallback when no category keyword matches
    General,
}

impl TemplateCategory {
    /// Label shown in the dashboard (French-facing product)
    pub fn label(&self) -> &'static str {
        match self {
            TemplateCategory::VehicleWarning => "Avertissement véhicule",
            TemplateCategory::Contract => "Contrat",
            TemplateCategory::Termination => "Licenciement",
            TemplateCategory::Resignation => "Démission",
            TemplateCategory::General => "Général",
        }
    }
}

impl fmt::Display for TemplateCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
