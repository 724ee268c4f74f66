use otp_schema::models::{
    DiseaseRef,
    EvidenceItem,
    EvidenceReport,
    EvidenceSummary,
    EvidenceTargetSummary,
    Literature,
    MatchedTerm,
    ResultCount,
    SourceLink,
    TargetRef,
    TermKind,
    TextMiningMatch,
};
use otp_schema::queries::DISEASE_EVIDENCE;
use otp_schema::remote::{DiseaseEvidenceData, EvidenceRow, TextMiningSentence};
use serde::Serialize;

use super::{
    AdapterError,
    ControlError,
    OtpControlPlane,
    build_variables,
    check_count,
    require_int_range,
    require_non_blank,
};

pub const TOOL_NAME: &str = "disease_evidence";

pub const DEFAULT_DISEASE_ID: &str = "EFO_0006335";
pub const DEFAULT_TARGET_ID: &str = "ENSG00000091157";
pub const DEFAULT_DATASOURCE_ID: &str = "gwas_credible_sets";
pub const DEFAULT_SIZE: i64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvidenceRequest {
    pub disease_id: String,
    pub target_id: String,
    pub datasource_ids: Option<Vec<String>>,
    pub enable_indirect: bool,
    pub size: i64,
}

impl Default for EvidenceRequest {
    fn default() -> Self {
        Self {
            disease_id: DEFAULT_DISEASE_ID.to_string(),
            target_id: DEFAULT_TARGET_ID.to_string(),
            datasource_ids: Some(vec![DEFAULT_DATASOURCE_ID.to_string()]),
            enable_indirect: true,
            size: DEFAULT_SIZE,
        }
    }
}

impl EvidenceRequest {
    #[must_use]
    pub fn new(disease_id: impl Into<String>, target_id: impl Into<String>) -> Self {
        Self {
            disease_id: disease_id.into(),
            target_id: target_id.into(),
            ..Self::default()
        }
    }

    /// Restricts results to `datasource_ids`; `None` queries every datasource.
    #[must_use]
    pub fn with_datasource_ids(mut self, datasource_ids: Option<Vec<String>>) -> Self {
        self.datasource_ids = datasource_ids;
        self
    }

    #[must_use]
    pub const fn with_indirect(mut self, enable_indirect: bool) -> Self {
        self.enable_indirect = enable_indirect;
        self
    }

    #[must_use]
    pub const fn with_size(mut self, size: i64) -> Self {
        self.size = size;
        self
    }

    fn validate(&self) -> Result<(), ControlError> {
        require_non_blank("diseaseId", &self.disease_id)?;
        require_non_blank("targetId", &self.target_id)?;
        require_int_range("size", self.size, 1)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EvidenceVariables<'a> {
    disease_id: &'a str,
    ensembl_id: &'a str,
    datasource_ids: Option<&'a [String]>,
    enable_indirect: bool,
    size: i64,
}

impl<'a> From<&'a EvidenceRequest> for EvidenceVariables<'a> {
    fn from(request: &'a EvidenceRequest) -> Self {
        Self {
            disease_id: &request.disease_id,
            ensembl_id: &request.target_id,
            datasource_ids: request.datasource_ids.as_deref(),
            enable_indirect: request.enable_indirect,
            size: request.size,
        }
    }
}

impl OtpControlPlane {
    /// Lists evidence records linking a target to a disease.
    ///
    /// # Errors
    /// Returns an [`AdapterError`] naming the disease when validation, the
    /// remote call, or response parsing fails.
    pub async fn disease_evidence(
        &self,
        request: EvidenceRequest,
    ) -> Result<EvidenceReport, AdapterError> {
        self.fetch_evidence(&request).await.map_err(|source| {
            AdapterError::logged(
                TOOL_NAME,
                format!("evidence for disease {}", request.disease_id),
                source,
            )
        })
    }

    async fn fetch_evidence(&self, request: &EvidenceRequest) -> Result<EvidenceReport, ControlError> {
        request.validate()?;
        let variables = build_variables(&EvidenceVariables::from(request))?;
        let data: DiseaseEvidenceData = self.fetch(&DISEASE_EVIDENCE, &variables).await?;
        if data.disease.is_none() {
            return Err(ControlError::MissingField(format!(
                "no disease returned for {}",
                request.disease_id
            )));
        }
        normalize_evidence(data)
    }
}

/// Flattens the platform's evidence rows into the report shape.
///
/// # Errors
/// Returns [`ControlError::MissingField`] when the disease is absent or the
/// platform reports fewer evidences than it returned rows.
pub fn normalize_evidence(data: DiseaseEvidenceData) -> Result<EvidenceReport, ControlError> {
    let disease = data
        .disease
        .ok_or_else(|| ControlError::MissingField("disease".to_string()))?;
    let evidences = disease.evidences;
    let returned = evidences.rows.len();
    check_count("evidences", evidences.count, returned)?;

    Ok(EvidenceReport {
        summary: EvidenceSummary {
            disease: DiseaseRef {
                id: disease.id,
                name: disease.name,
            },
            target: data.target.map(|target| TargetRef {
                id: target.id,
                symbol: target.approved_symbol,
            }),
            evidence_count: ResultCount::new(evidences.count, returned),
        },
        evidences: evidences.rows.into_iter().map(normalize_row).collect(),
    })
}

fn normalize_row(row: EvidenceRow) -> EvidenceItem {
    let literature = literature(
        row.literature.as_deref(),
        row.publication_first_author.as_deref(),
        row.publication_year,
    );
    let text_mining = row
        .text_mining_sentences
        .filter(|sentences| !sentences.is_empty())
        .map(|sentences| sentences.iter().map(text_mining_match).collect());

    EvidenceItem {
        id: row.id,
        score: row.score,
        data_type: row.datatype_id,
        datasource_id: row.datasource_id,
        target: EvidenceTargetSummary {
            id: row.target.id,
            symbol: row.target.approved_symbol,
            name: row.target.approved_name,
        },
        disease: DiseaseRef {
            id: row.disease.id,
            name: row.disease.name,
        },
        source: row
            .urls
            .and_then(|urls| urls.into_iter().next())
            .map(|uri| SourceLink {
                name: uri.nice_name,
                url: uri.url,
            }),
        literature,
        text_mining,
    }
}

fn literature(ids: Option<&[String]>, author: Option<&str>, year: Option<i64>) -> Option<Literature> {
    let publication_id = ids?
        .iter()
        .map(|id| id.trim())
        .find(|id| !id.is_empty())?
        .to_string();
    let title = match (author.map(str::trim).filter(|author| !author.is_empty()), year) {
        (Some(author), Some(year)) => Some(format!("{author} et al. ({year})")),
        (Some(author), None) => Some(format!("{author} et al.")),
        (None, _) => None,
    };
    Some(Literature {
        publication_id,
        title,
    })
}

fn text_mining_match(sentence: &TextMiningSentence) -> TextMiningMatch {
    let spans = [
        (TermKind::Disease, sentence.d_start, sentence.d_end),
        (TermKind::Target, sentence.t_start, sentence.t_end),
    ];
    let matched_terms = spans
        .into_iter()
        .filter_map(|(kind, start, end)| {
            span(&sentence.text, start, end).map(|term| MatchedTerm { kind, term })
        })
        .collect();
    TextMiningMatch {
        text: sentence.text.clone(),
        matched_terms,
    }
}

/// Characters `[start, end)` of `text`, with `end` clamped to the text length.
fn span(text: &str, start: i64, end: i64) -> Option<String> {
    let start = usize::try_from(start).ok()?;
    let end = usize::try_from(end).ok()?;
    let len = text.chars().count();
    if start >= len || end <= start {
        return None;
    }
    let term: String = text.chars().skip(start).take(end.min(len) - start).collect();
    let term = term.trim();
    (!term.is_empty()).then(|| term.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn evidence_data() -> DiseaseEvidenceData {
        serde_json::from_value(json!({
            "target": { "id": "ENSG00000091157", "approvedSymbol": "WDR7" },
            "disease": {
                "id": "EFO_0006335",
                "name": "systolic blood pressure",
                "evidences": {
                    "count": 3,
                    "rows": [
                        {
                            "id": "ev-gwas",
                            "score": 0.61,
                            "datatypeId": "genetic_association",
                            "datasourceId": "gwas_credible_sets",
                            "target": {
                                "id": "ENSG00000091157",
                                "approvedSymbol": "WDR7",
                                "approvedName": "WD repeat domain 7"
                            },
                            "disease": { "id": "EFO_0006335", "name": "systolic blood pressure" },
                            "urls": [
                                { "niceName": "GWAS Catalog", "url": "https://www.ebi.ac.uk/gwas" }
                            ],
                            "literature": ["", "30224653"],
                            "publicationFirstAuthor": "Evangelou E",
                            "publicationYear": 2018,
                            "textMiningSentences": []
                        },
                        {
                            "id": "ev-epmc",
                            "score": 0.2,
                            "datatypeId": "literature",
                            "datasourceId": "europepmc",
                            "target": {
                                "id": "ENSG00000091157",
                                "approvedSymbol": "WDR7",
                                "approvedName": "WD repeat domain 7"
                            },
                            "disease": { "id": "EFO_0006335", "name": "systolic blood pressure" },
                            "literature": null,
                            "textMiningSentences": [
                                {
                                    "text": "WDR7 variants raise blood pressure.",
                                    "section": "abstract",
                                    "dStart": 20,
                                    "dEnd": 34,
                                    "tStart": 0,
                                    "tEnd": 4
                                }
                            ]
                        }
                    ]
                }
            }
        }))
        .expect("fixture should parse")
    }

    #[test]
    fn default_request_matches_documented_defaults() {
        let request = EvidenceRequest::default();
        assert_eq!(request.disease_id, DEFAULT_DISEASE_ID);
        assert_eq!(request.target_id, DEFAULT_TARGET_ID);
        assert_eq!(
            request.datasource_ids,
            Some(vec![DEFAULT_DATASOURCE_ID.to_string()])
        );
        assert!(request.enable_indirect);
        assert_eq!(request.size, DEFAULT_SIZE);
    }

    #[test]
    fn null_datasource_filter_is_not_sent() {
        let request = EvidenceRequest::default().with_datasource_ids(None);
        let variables = build_variables(&EvidenceVariables::from(&request)).expect("variables");

        assert!(!variables.contains_key("datasourceIds"));
        assert_eq!(variables.get("ensemblId"), Some(&json!(DEFAULT_TARGET_ID)));
        assert!(variables.check_against(&DISEASE_EVIDENCE).is_ok());
    }

    #[test]
    fn literature_present_only_with_publication_id() {
        let report = normalize_evidence(evidence_data()).expect("report");
        let value = serde_json::to_value(&report).expect("serialize");
        let rows = value["evidences"].as_array().expect("rows");

        assert_eq!(
            rows[0]["literature"],
            json!({ "publicationId": "30224653", "title": "Evangelou E et al. (2018)" })
        );
        assert!(rows[1].get("literature").is_none());
    }

    #[test]
    fn text_mining_present_only_with_sentences() {
        let report = normalize_evidence(evidence_data()).expect("report");
        let value = serde_json::to_value(&report).expect("serialize");
        let rows = value["evidences"].as_array().expect("rows");

        assert!(rows[0].get("textMining").is_none());
        assert_eq!(
            rows[1]["textMining"],
            json!([{
                "text": "WDR7 variants raise blood pressure.",
                "matchedTerms": [
                    { "type": "disease", "term": "blood pressure" },
                    { "type": "target", "term": "WDR7" }
                ]
            }])
        );
    }

    #[test]
    fn summary_and_rows_are_flattened() {
        let report = normalize_evidence(evidence_data()).expect("report");

        assert_eq!(report.summary.disease.name, "systolic blood pressure");
        assert_eq!(
            report.summary.target,
            Some(TargetRef {
                id: "ENSG00000091157".to_string(),
                symbol: "WDR7".to_string(),
            })
        );
        assert_eq!(report.summary.evidence_count, ResultCount::new(3, 2));
        assert_eq!(report.evidences.len(), 2);
        assert_eq!(report.evidences[0].data_type, "genetic_association");
        assert_eq!(
            report.evidences[0].source,
            Some(SourceLink {
                name: "GWAS Catalog".to_string(),
                url: "https://www.ebi.ac.uk/gwas".to_string(),
            })
        );
        assert!(report.evidences[1].source.is_none());
    }

    #[test]
    fn non_positive_size_is_rejected() {
        for size in [0, -5] {
            let Err(ControlError::InvalidInput(message)) =
                EvidenceRequest::default().with_size(size).validate()
            else {
                panic!("size {size} should be invalid input");
            };
            assert!(message.contains("size"));
        }
    }

    #[test]
    fn span_counts_characters_not_bytes() {
        let text = "Mutations in CD40LG cause Sjögren's syndrome.";
        assert_eq!(span(text, 26, 44), Some("Sjögren's syndrome".to_string()));
        assert_eq!(span(text, 13, 19), Some("CD40LG".to_string()));
        assert_eq!(span("β-thalassemia in HBB carriers", 0, 13), Some("β-thalassemia".to_string()));
    }

    #[test]
    fn span_skips_out_of_range_offsets() {
        assert_eq!(span("BRAF", 0, 99), Some("BRAF".to_string()));
        assert_eq!(span("BRAF", 4, 6), None);
        assert_eq!(span("BRAF", -1, 2), None);
        assert_eq!(span("BRAF", 2, 2), None);
    }

    #[test]
    fn missing_disease_is_a_shape_error() {
        let data: DiseaseEvidenceData =
            serde_json::from_value(json!({ "target": null, "disease": null })).expect("nulls");
        assert!(matches!(
            normalize_evidence(data),
            Err(ControlError::MissingField(_))
        ));
    }
}
