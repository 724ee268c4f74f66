use otp_schema::models::{
    AssociatedDisease,
    Association,
    AssociationsReport,
    AssociationsSummary,
    DiseaseDetails,
    EvidenceScore,
    ResultCount,
    TargetSummary,
    TherapeuticAreaRef,
};
use otp_schema::queries::TARGET_ASSOCIATED_DISEASES;
use otp_schema::remote::{AssociatedDiseaseRow, AssociatedTarget, TargetAssociatedDiseasesData};
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

pub const TOOL_NAME: &str = "target_disease_associations";

pub const DEFAULT_ORDER_BY_SCORE: &str = "score";
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Zero-based page selection passed through to the platform.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Page {
    pub index: i64,
    pub size: i64,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            index: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Per-datasource weighting override.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DatasourceSetting {
    pub id: String,
    pub weight: f64,
    pub propagate: bool,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssociationsRequest {
    pub target_id: String,
    pub page: Page,
    pub order_by_score: String,
    pub disease_ids: Option<Vec<String>>,
    pub datasources: Option<Vec<DatasourceSetting>>,
    pub enable_indirect: bool,
    pub facet_filters: Option<Vec<String>>,
    pub id_prefix_filter: String,
    pub include_disease_details: bool,
}

impl AssociationsRequest {
    #[must_use]
    pub fn new(target_id: impl Into<String>) -> Self {
        Self {
            target_id: target_id.into(),
            page: Page::default(),
            order_by_score: DEFAULT_ORDER_BY_SCORE.to_string(),
            disease_ids: None,
            datasources: None,
            enable_indirect: false,
            facet_filters: None,
            id_prefix_filter: String::new(),
            include_disease_details: false,
        }
    }

    #[must_use]
    pub const fn with_page(mut self, page: Page) -> Self {
        self.page = page;
        self
    }

    #[must_use]
    pub fn with_disease_ids(mut self, disease_ids: Vec<String>) -> Self {
        self.disease_ids = Some(disease_ids);
        self
    }

    #[must_use]
    pub fn with_datasources(mut self, datasources: Vec<DatasourceSetting>) -> Self {
        self.datasources = Some(datasources);
        self
    }

    #[must_use]
    pub const fn with_indirect(mut self, enable_indirect: bool) -> Self {
        self.enable_indirect = enable_indirect;
        self
    }

    #[must_use]
    pub fn with_facet_filters(mut self, facet_filters: Vec<String>) -> Self {
        self.facet_filters = Some(facet_filters);
        self
    }

    #[must_use]
    pub const fn with_disease_details(mut self, include: bool) -> Self {
        self.include_disease_details = include;
        self
    }

    fn validate(&self) -> Result<(), ControlError> {
        require_non_blank("targetId", &self.target_id)?;
        require_int_range("page.index", self.page.index, 0)?;
        require_int_range("page.size", self.page.size, 1)
    }
}

/// Variables for `TargetAssociatedDiseases`; `includeDiseaseDetails` never leaves the adapter.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AssociationsVariables<'a> {
    target_id: &'a str,
    page: Page,
    order_by_score: &'a str,
    datasources: Option<&'a [DatasourceSetting]>,
    #[serde(rename = "Bs")]
    disease_ids: Option<&'a [String]>,
    enable_indirect: bool,
    facet_filters: Option<&'a [String]>,
    #[serde(rename = "BFilter")]
    id_prefix_filter: &'a str,
}

impl<'a> From<&'a AssociationsRequest> for AssociationsVariables<'a> {
    fn from(request: &'a AssociationsRequest) -> Self {
        Self {
            target_id: &request.target_id,
            page: request.page,
            order_by_score: &request.order_by_score,
            datasources: request.datasources.as_deref(),
            disease_ids: request.disease_ids.as_deref(),
            enable_indirect: request.enable_indirect,
            facet_filters: request.facet_filters.as_deref(),
            id_prefix_filter: &request.id_prefix_filter,
        }
    }
}

impl OtpControlPlane {
    /// Lists diseases associated with a target, scored overall and per datasource.
    ///
    /// # Errors
    /// Returns an [`AdapterError`] naming the target when validation, the
    /// remote call, or response parsing fails.
    pub async fn target_disease_associations(
        &self,
        request: AssociationsRequest,
    ) -> Result<AssociationsReport, AdapterError> {
        self.fetch_associations(&request).await.map_err(|source| {
            AdapterError::logged(
                TOOL_NAME,
                format!("associated diseases for target {}", request.target_id),
                source,
            )
        })
    }

    async fn fetch_associations(
        &self,
        request: &AssociationsRequest,
    ) -> Result<AssociationsReport, ControlError> {
        request.validate()?;
        let variables = build_variables(&AssociationsVariables::from(request))?;
        let data: TargetAssociatedDiseasesData =
            self.fetch(&TARGET_ASSOCIATED_DISEASES, &variables).await?;
        let target = data.target.ok_or_else(|| {
            ControlError::MissingField(format!("no target returned for {}", request.target_id))
        })?;
        normalize_associations(target, request.include_disease_details)
    }
}

/// Flattens the platform's association rows into the report shape.
///
/// # Errors
/// Returns [`ControlError::MissingField`] when the platform reports fewer
/// associations than it returned rows.
pub fn normalize_associations(
    target: AssociatedTarget,
    include_disease_details: bool,
) -> Result<AssociationsReport, ControlError> {
    let AssociatedTarget {
        id,
        approved_symbol,
        approved_name,
        biotype,
        associated_diseases,
    } = target;

    let returned = associated_diseases.rows.len();
    check_count("associatedDiseases", associated_diseases.count, returned)?;

    let associations = associated_diseases
        .rows
        .into_iter()
        .map(|row| normalize_row(row, include_disease_details))
        .collect();

    Ok(AssociationsReport {
        summary: AssociationsSummary {
            target: TargetSummary {
                id,
                symbol: approved_symbol,
                name: approved_name,
                biotype,
            },
            disease_associations: ResultCount::new(associated_diseases.count, returned),
        },
        associations,
    })
}

fn normalize_row(row: AssociatedDiseaseRow, include_disease_details: bool) -> Association {
    let disease = row.disease;
    let details = include_disease_details.then(|| DiseaseDetails {
        description: disease.description,
        therapeutic_areas: disease
            .therapeutic_areas
            .unwrap_or_default()
            .into_iter()
            .map(|area| TherapeuticAreaRef {
                id: area.id,
                name: area.name,
            })
            .collect(),
    });

    Association {
        disease: AssociatedDisease {
            id: disease.id,
            name: disease.name,
            details,
        },
        overall_score: row.score,
        evidence_scores: row
            .datasource_scores
            .unwrap_or_default()
            .into_iter()
            .map(|component| EvidenceScore {
                source: component.id,
                score: component.score,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    use crate::variables::Variables;

    fn braf() -> AssociatedTarget {
        serde_json::from_value(json!({
            "id": "ENSG00000157764",
            "approvedSymbol": "BRAF",
            "approvedName": "B-Raf proto-oncogene, serine/threonine kinase",
            "biotype": "protein_coding",
            "associatedDiseases": {
                "count": 812,
                "rows": [
                    {
                        "disease": {
                            "id": "EFO_0000756",
                            "name": "melanoma",
                            "description": "A malignant neoplasm of melanocytes.",
                            "therapeuticAreas": [
                                { "id": "OTAR_0000018", "name": "cancer or benign tumor" }
                            ]
                        },
                        "score": 0.83,
                        "datasourceScores": [
                            { "id": "cancer_gene_census", "score": 0.95 },
                            { "id": "chembl", "score": 0.91 }
                        ]
                    },
                    {
                        "disease": {
                            "id": "MONDO_0008903",
                            "name": "lung cancer",
                            "description": null,
                            "therapeuticAreas": []
                        },
                        "score": 0.71,
                        "datasourceScores": null
                    }
                ]
            }
        }))
        .expect("fixture should parse")
    }

    fn variables_for(request: &AssociationsRequest) -> Variables {
        build_variables(&AssociationsVariables::from(request)).expect("variables")
    }

    #[test]
    fn unset_optionals_are_not_sent() {
        let variables = variables_for(&AssociationsRequest::new("ENSG00000157764"));

        for key in ["Bs", "datasources", "facetFilters", "includeDiseaseDetails"] {
            assert!(!variables.contains_key(key), "{key} should be omitted");
        }
        assert_eq!(variables.get("orderByScore"), Some(&json!("score")));
        assert_eq!(variables.get("BFilter"), Some(&json!("")));
        assert_eq!(variables.get("enableIndirect"), Some(&json!(false)));
        assert_eq!(variables.get("page"), Some(&json!({ "index": 0, "size": 10 })));
        assert!(variables.iter().all(|(_, value)| !value.is_null()));
        assert!(variables.check_against(&TARGET_ASSOCIATED_DISEASES).is_ok());
    }

    #[test]
    fn set_optionals_are_sent() {
        let request = AssociationsRequest::new("ENSG00000157764")
            .with_disease_ids(vec!["EFO_0000756".to_string()])
            .with_datasources(vec![DatasourceSetting {
                id: "chembl".to_string(),
                weight: 0.5,
                propagate: true,
                required: false,
            }])
            .with_facet_filters(vec!["OTAR_0000018".to_string()])
            .with_disease_details(true);
        let variables = variables_for(&request);

        assert_eq!(variables.get("Bs"), Some(&json!(["EFO_0000756"])));
        assert_eq!(
            variables.get("datasources"),
            Some(&json!([
                { "id": "chembl", "weight": 0.5, "propagate": true, "required": false }
            ]))
        );
        assert_eq!(variables.get("facetFilters"), Some(&json!(["OTAR_0000018"])));
        assert!(!variables.contains_key("includeDiseaseDetails"));
    }

    #[test]
    fn negative_page_index_is_rejected() {
        let request = AssociationsRequest::new("ENSG00000157764").with_page(Page {
            index: -1,
            size: 10,
        });
        let Err(ControlError::InvalidInput(message)) = request.validate() else {
            panic!("negative index should be invalid input");
        };
        assert!(message.contains("page.index"));
    }

    #[test]
    fn page_size_above_graphql_int_is_rejected() {
        let request = AssociationsRequest::new("ENSG00000157764").with_page(Page {
            index: 0,
            size: i64::from(i32::MAX) + 1,
        });
        assert!(matches!(
            request.validate(),
            Err(ControlError::InvalidInput(_))
        ));
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let request = AssociationsRequest::new("ENSG00000157764").with_page(Page {
            index: 0,
            size: 0,
        });
        assert!(matches!(
            request.validate(),
            Err(ControlError::InvalidInput(_))
        ));
    }

    #[test]
    fn details_omitted_by_default() {
        let report = normalize_associations(braf(), false).expect("report");
        let value = serde_json::to_value(&report).expect("serialize");

        for row in value["associations"].as_array().expect("rows") {
            let disease = row["disease"].as_object().expect("disease");
            assert!(!disease.contains_key("description"));
            assert!(!disease.contains_key("therapeuticAreas"));
        }
    }

    #[test]
    fn details_included_when_requested() {
        let report = normalize_associations(braf(), true).expect("report");
        let value = serde_json::to_value(&report).expect("serialize");
        let rows = value["associations"].as_array().expect("rows");

        for row in rows {
            let disease = row["disease"].as_object().expect("disease");
            assert!(disease.contains_key("description"));
            assert!(disease.contains_key("therapeuticAreas"));
        }
        assert_eq!(
            rows[0]["disease"]["therapeuticAreas"][0]["name"],
            "cancer or benign tumor"
        );
        assert_eq!(rows[1]["disease"].get("description"), Some(&Value::Null));
    }

    #[test]
    fn summary_and_scores_are_flattened() {
        let report = normalize_associations(braf(), false).expect("report");

        assert_eq!(report.summary.target.symbol, "BRAF");
        assert_eq!(report.summary.disease_associations, ResultCount::new(812, 2));
        assert_eq!(report.associations.len(), 2);
        assert!((report.associations[0].overall_score - 0.83).abs() < f64::EPSILON);
        assert_eq!(report.associations[0].evidence_scores[1].source, "chembl");
        assert!(report.associations[1].evidence_scores.is_empty());
    }

    #[test]
    fn count_below_rows_is_a_shape_error() {
        let mut target = braf();
        target.associated_diseases.count = 1;
        assert!(matches!(
            normalize_associations(target, false),
            Err(ControlError::MissingField(_))
        ));
    }
}
