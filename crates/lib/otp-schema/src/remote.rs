//! Shapes of the `data` objects returned by the platform for each catalog query.
//!
//! Only the fields the adapters read are modeled. Root entities are `Option`
//! because the platform answers unknown identifiers with `null`.

use serde::Deserialize;

/// `data` of [`crate::queries::TARGET_INFO`].
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TargetInfoData {
    pub target: Option<TargetRecord>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TargetRecord {
    pub id: String,
    pub approved_symbol: String,
    pub approved_name: String,
    pub biotype: String,
    #[serde(default)]
    pub function_descriptions: Vec<String>,
    #[serde(default)]
    pub target_class: Vec<TargetClassRecord>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TargetClassRecord {
    pub id: i64,
    pub label: String,
}

/// `data` of [`crate::queries::TARGET_ASSOCIATED_DISEASES`].
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TargetAssociatedDiseasesData {
    pub target: Option<AssociatedTarget>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssociatedTarget {
    pub id: String,
    pub approved_symbol: String,
    pub approved_name: String,
    pub biotype: String,
    pub associated_diseases: AssociatedDiseases,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AssociatedDiseases {
    pub count: u64,
    pub rows: Vec<AssociatedDiseaseRow>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssociatedDiseaseRow {
    pub disease: DiseaseRecord,
    pub score: f64,
    #[serde(default)]
    pub datasource_scores: Option<Vec<ScoredComponent>>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DiseaseRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub therapeutic_areas: Option<Vec<TherapeuticArea>>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TherapeuticArea {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ScoredComponent {
    pub id: String,
    pub score: f64,
}

/// `data` of [`crate::queries::DISEASE_EVIDENCE`].
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DiseaseEvidenceData {
    #[serde(default)]
    pub target: Option<EvidenceQueryTarget>,
    pub disease: Option<EvidenceDisease>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EvidenceQueryTarget {
    pub id: String,
    pub approved_symbol: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct EvidenceDisease {
    pub id: String,
    pub name: String,
    pub evidences: Evidences,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Evidences {
    pub count: u64,
    pub rows: Vec<EvidenceRow>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EvidenceRow {
    pub id: String,
    pub score: f64,
    pub datatype_id: String,
    pub datasource_id: String,
    pub target: EvidenceTarget,
    pub disease: EvidenceDiseaseRef,
    #[serde(default)]
    pub urls: Option<Vec<LabelledUri>>,
    #[serde(default)]
    pub literature: Option<Vec<String>>,
    #[serde(default)]
    pub publication_first_author: Option<String>,
    #[serde(default)]
    pub publication_year: Option<i64>,
    #[serde(default)]
    pub text_mining_sentences: Option<Vec<TextMiningSentence>>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EvidenceTarget {
    pub id: String,
    pub approved_symbol: String,
    pub approved_name: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct EvidenceDiseaseRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LabelledUri {
    pub nice_name: String,
    pub url: String,
}

/// A literature sentence in which both the disease and the target were recognized.
///
/// Offsets are character positions into `text`; the end offsets are exclusive.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TextMiningSentence {
    pub text: String,
    #[serde(default)]
    pub section: Option<String>,
    #[serde(rename = "dStart")]
    pub d_start: i64,
    #[serde(rename = "dEnd")]
    pub d_end: i64,
    #[serde(rename = "tStart")]
    pub t_start: i64,
    #[serde(rename = "tEnd")]
    pub t_end: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_target_parses_as_none() {
        let data: TargetAssociatedDiseasesData =
            serde_json::from_value(json!({ "target": null })).expect("null target");
        assert!(data.target.is_none());
    }

    #[test]
    fn missing_count_is_rejected() {
        let err = serde_json::from_value::<TargetAssociatedDiseasesData>(json!({
            "target": {
                "id": "ENSG00000157764",
                "approvedSymbol": "BRAF",
                "approvedName": "B-Raf proto-oncogene",
                "biotype": "protein_coding",
                "associatedDiseases": { "rows": [] }
            }
        }))
        .expect_err("count is required");
        assert!(err.to_string().contains("count"));
    }

    #[test]
    fn evidence_optional_fields_default() {
        let row: EvidenceRow = serde_json::from_value(json!({
            "id": "ev1",
            "score": 0.5,
            "datatypeId": "genetic_association",
            "datasourceId": "gwas_credible_sets",
            "target": { "id": "T", "approvedSymbol": "S", "approvedName": "N" },
            "disease": { "id": "D", "name": "DN" }
        }))
        .expect("sparse evidence row");
        assert!(row.literature.is_none());
        assert!(row.text_mining_sentences.is_none());
        assert!(row.urls.is_none());
    }
}
