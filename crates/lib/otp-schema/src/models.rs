use serde::Serialize;

/// Total matches reported by the platform against the rows actually returned.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ResultCount {
    pub count: u64,
    pub returned: usize,
}

impl ResultCount {
    #[must_use]
    pub const fn new(count: u64, returned: usize) -> Self {
        Self { count, returned }
    }
}

/// Target header shared by association summaries.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TargetSummary {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub biotype: String,
}

/// Normalized `target_disease_associations` result.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AssociationsReport {
    pub summary: AssociationsSummary,
    pub associations: Vec<Association>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssociationsSummary {
    pub target: TargetSummary,
    pub disease_associations: ResultCount,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Association {
    pub disease: AssociatedDisease,
    pub overall_score: f64,
    pub evidence_scores: Vec<EvidenceScore>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AssociatedDisease {
    pub id: String,
    pub name: String,
    /// Present only when the caller asked for disease details.
    #[serde(flatten)]
    pub details: Option<DiseaseDetails>,
}

/// Free-text description and therapeutic areas, copied from the platform.
///
/// `description` serializes as `null` when the platform has none, so the key
/// is always present alongside `therapeuticAreas`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DiseaseDetails {
    pub description: Option<String>,
    pub therapeutic_areas: Vec<TherapeuticAreaRef>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TherapeuticAreaRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EvidenceScore {
    pub source: String,
    pub score: f64,
}

/// Normalized `disease_evidence` result.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EvidenceReport {
    pub summary: EvidenceSummary,
    pub evidences: Vec<EvidenceItem>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EvidenceSummary {
    pub disease: DiseaseRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<TargetRef>,
    pub evidence_count: ResultCount,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DiseaseRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TargetRef {
    pub id: String,
    pub symbol: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EvidenceItem {
    pub id: String,
    pub score: f64,
    pub data_type: String,
    pub datasource_id: String,
    pub target: EvidenceTargetSummary,
    pub disease: DiseaseRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub literature: Option<Literature>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_mining: Option<Vec<TextMiningMatch>>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EvidenceTargetSummary {
    pub id: String,
    pub symbol: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SourceLink {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Literature {
    pub publication_id: String,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TextMiningMatch {
    pub text: String,
    pub matched_terms: Vec<MatchedTerm>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MatchedTerm {
    #[serde(rename = "type")]
    pub kind: TermKind,
    pub term: String,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TermKind {
    Disease,
    Target,
}

/// Normalized `target_info` result.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TargetReport {
    pub target: TargetDetails,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TargetDetails {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub biotype: String,
    pub function_descriptions: Vec<String>,
    pub target_classes: Vec<TargetClass>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TargetClass {
    pub id: i64,
    pub label: String,
}
