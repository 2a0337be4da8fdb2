use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Error;

/// A gnomAD data release that queries can be run against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Dataset {
    #[serde(rename = "gnomad_r2_1")]
    GnomadR2_1,
    #[serde(rename = "gnomad_r3")]
    GnomadR3,
    #[default]
    #[serde(rename = "gnomad_r4")]
    GnomadR4,
    #[serde(rename = "gnomad_sv_r2_1")]
    GnomadSvR2_1,
    #[serde(rename = "gnomad_sv_r4")]
    GnomadSvR4,
    #[serde(rename = "gnomad_cnv_r4")]
    GnomadCnvR4,
    #[serde(rename = "exac")]
    Exac,
}

impl Dataset {
    pub const ALL: [Self; 7] = [
        Self::GnomadR2_1,
        Self::GnomadR3,
        Self::GnomadR4,
        Self::GnomadSvR2_1,
        Self::GnomadSvR4,
        Self::GnomadCnvR4,
        Self::Exac,
    ];

    /// The identifier the gnomAD API expects for this dataset.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GnomadR2_1 => "gnomad_r2_1",
            Self::GnomadR3 => "gnomad_r3",
            Self::GnomadR4 => "gnomad_r4",
            Self::GnomadSvR2_1 => "gnomad_sv_r2_1",
            Self::GnomadSvR4 => "gnomad_sv_r4",
            Self::GnomadCnvR4 => "gnomad_cnv_r4",
            Self::Exac => "exac",
        }
    }

    /// Resolve a caller-supplied dataset name, ignoring case.
    ///
    /// Unrecognized names fall back to [`Dataset::GnomadR4`].
    #[must_use]
    pub fn normalize(candidate: &str) -> Self {
        let lowered = candidate.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|dataset| dataset.as_str() == lowered)
            .unwrap_or_default()
    }
}

impl std::fmt::Display for Dataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Genome assembly that coordinates and identifiers are interpreted against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ReferenceGenome {
    GRCh37,
    #[default]
    GRCh38,
}

impl ReferenceGenome {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GRCh37 => "GRCh37",
            Self::GRCh38 => "GRCh38",
        }
    }

    /// Resolve a caller-supplied assembly name. Matching is case-sensitive;
    /// anything other than `GRCh37` or `GRCh38` becomes [`ReferenceGenome::GRCh38`].
    #[must_use]
    pub fn normalize(candidate: &str) -> Self {
        match candidate {
            "GRCh37" => Self::GRCh37,
            _ => Self::GRCh38,
        }
    }
}

impl std::fmt::Display for ReferenceGenome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of a GraphQL POST: the query text plus its bound variables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphQlRequest {
    pub query: String,
    pub variables: Value,
}

/// Decoded GraphQL response envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphQlResponse {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<GraphQlError>>,
}

impl GraphQlResponse {
    /// Unwrap the `data` field, failing if the service reported any errors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GraphQl`] with every message, in order, when the
    /// `errors` list is present and non-empty.
    pub fn into_data(self) -> Result<Option<Value>, Error> {
        match self.errors {
            Some(errors) if !errors.is_empty() => Err(Error::GraphQl(
                errors.into_iter().map(|e| e.message).collect(),
            )),
            _ => Ok(self.data),
        }
    }
}

/// One entry of a GraphQL `errors` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphQlError {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn dataset_normalize_ignores_case() {
        for dataset in Dataset::ALL {
            let upper = dataset.as_str().to_uppercase();
            assert_eq!(Dataset::normalize(&upper), dataset);
            assert_eq!(Dataset::normalize(dataset.as_str()), dataset);
        }
        assert_eq!(Dataset::normalize("GnomAD_SV_r4"), Dataset::GnomadSvR4);
    }

    #[test]
    fn dataset_normalize_falls_back_to_r4() {
        assert_eq!(Dataset::normalize(""), Dataset::GnomadR4);
        assert_eq!(Dataset::normalize("gnomad_r5"), Dataset::GnomadR4);
        assert_eq!(Dataset::normalize(" gnomad_r3"), Dataset::GnomadR4);
    }

    #[test]
    fn dataset_serializes_to_api_identifier() {
        assert_eq!(json!(Dataset::GnomadSvR2_1), json!("gnomad_sv_r2_1"));
        assert_eq!(json!(Dataset::Exac), json!("exac"));
    }

    #[test]
    fn reference_genome_normalize_is_case_sensitive() {
        assert_eq!(ReferenceGenome::normalize("GRCh37"), ReferenceGenome::GRCh37);
        assert_eq!(ReferenceGenome::normalize("GRCh38"), ReferenceGenome::GRCh38);
        assert_eq!(ReferenceGenome::normalize("grch37"), ReferenceGenome::GRCh38);
        assert_eq!(ReferenceGenome::normalize("hg19"), ReferenceGenome::GRCh38);
        assert_eq!(ReferenceGenome::normalize(""), ReferenceGenome::GRCh38);
    }

    #[test]
    fn reference_genome_serializes_verbatim() {
        assert_eq!(json!(ReferenceGenome::GRCh37), json!("GRCh37"));
    }

    #[test]
    fn response_with_errors_fails() {
        let response: GraphQlResponse = serde_json::from_value(json!({
            "data": null,
            "errors": [
                { "message": "A" },
                { "message": "B", "extensions": { "code": "BAD_USER_INPUT" } }
            ]
        }))
        .unwrap();

        let err = response.into_data().unwrap_err();
        assert_eq!(err.to_string(), "GraphQL errors: A; B");
    }

    #[test]
    fn response_with_empty_errors_yields_data() {
        let response: GraphQlResponse = serde_json::from_value(json!({
            "data": { "gene": null },
            "errors": []
        }))
        .unwrap();

        assert_eq!(response.into_data().unwrap(), Some(json!({ "gene": null })));
    }

    #[test]
    fn response_without_fields_decodes() {
        let response: GraphQlResponse = serde_json::from_str("{}").unwrap();
        assert!(response.into_data().unwrap().is_none());
    }
}
