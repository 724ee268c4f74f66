/// A variable declared by a query document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariableSlot {
    pub name: &'static str,
    /// Non-null in the document (`Type!`).
    pub required: bool,
}

impl VariableSlot {
    const fn required(name: &'static str) -> Self {
        Self { name, required: true }
    }

    const fn optional(name: &'static str) -> Self {
        Self {
            name,
            required: false,
        }
    }
}

/// A parameterized GraphQL operation sent to the platform API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryDocument {
    pub operation_name: &'static str,
    pub document: &'static str,
    pub variables: &'static [VariableSlot],
}

impl QueryDocument {
    /// Returns the slot declared under `name`, if any.
    #[must_use]
    pub fn slot(&self, name: &str) -> Option<&VariableSlot> {
        self.variables.iter().find(|slot| slot.name == name)
    }

    /// Names of the variables the document declares as non-null.
    pub fn required_slots(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.variables
            .iter()
            .filter(|slot| slot.required)
            .map(|slot| slot.name)
    }
}

pub const TARGET_INFO: QueryDocument = QueryDocument {
    operation_name: "TargetInfo",
    document: r"
    query TargetInfo($targetId: String!) {
      target(ensemblId: $targetId) {
        id
        approvedSymbol
        approvedName
        biotype
        functionDescriptions
        targetClass {
          id
          label
        }
      }
    }
",
    variables: &[VariableSlot::required("targetId")],
};

pub const TARGET_ASSOCIATED_DISEASES: QueryDocument = QueryDocument {
    operation_name: "TargetAssociatedDiseases",
    document: r"
    query TargetAssociatedDiseases(
      $targetId: String!,
      $page: Pagination,
      $orderByScore: String!,
      $datasources: [DatasourceSettingsInput!],
      $Bs: [String!],
      $enableIndirect: Boolean!,
      $facetFilters: [String!],
      $BFilter: String!
    ) {
      target(ensemblId: $targetId) {
        id
        approvedSymbol
        approvedName
        biotype
        associatedDiseases(
          page: $page,
          orderByScore: $orderByScore,
          datasources: $datasources,
          Bs: $Bs,
          enableIndirect: $enableIndirect,
          facetFilters: $facetFilters,
          BFilter: $BFilter
        ) {
          count
          rows {
            disease {
              id
              name
              description
              therapeuticAreas {
                id
                name
              }
            }
            score
            datasourceScores {
              id
              score
            }
          }
        }
      }
    }
",
    variables: &[
        VariableSlot::required("targetId"),
        VariableSlot::optional("page"),
        VariableSlot::required("orderByScore"),
        VariableSlot::optional("datasources"),
        VariableSlot::optional("Bs"),
        VariableSlot::required("enableIndirect"),
        VariableSlot::optional("facetFilters"),
        VariableSlot::required("BFilter"),
    ],
};

pub const DISEASE_EVIDENCE: QueryDocument = QueryDocument {
    operation_name: "DiseaseEvidence",
    document: r"
    query DiseaseEvidence(
      $diseaseId: String!,
      $ensemblId: String!,
      $datasourceIds: [String!],
      $enableIndirect: Boolean!,
      $size: Int!
    ) {
      target(ensemblId: $ensemblId) {
        id
        approvedSymbol
      }
      disease(efoId: $diseaseId) {
        id
        name
        evidences(
          ensemblIds: [$ensemblId]
          enableIndirect: $enableIndirect
          datasourceIds: $datasourceIds
          size: $size
        ) {
          count
          rows {
            id
            score
            datatypeId
            datasourceId
            target {
              id
              approvedSymbol
              approvedName
            }
            disease {
              id
              name
            }
            urls {
              niceName
              url
            }
            literature
            publicationFirstAuthor
            publicationYear
            textMiningSentences {
              text
              section
              dStart
              dEnd
              tStart
              tEnd
            }
          }
        }
      }
    }
",
    variables: &[
        VariableSlot::required("diseaseId"),
        VariableSlot::required("ensemblId"),
        VariableSlot::optional("datasourceIds"),
        VariableSlot::required("enableIndirect"),
        VariableSlot::required("size"),
    ],
};

/// Every document in the catalog.
pub const ALL: [QueryDocument; 3] = [TARGET_INFO, TARGET_ASSOCIATED_DISEASES, DISEASE_EVIDENCE];
