use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use gnomad_core::error::Error;
use gnomad_core::traits::GraphQlClient;
use gnomad_core::types::{Dataset, GraphQlRequest, ReferenceGenome};

use crate::queries::ResultShape;
use crate::tools::Tool;

type Arguments = Map<String, Value>;

/// Result of a `tools/call`: always exactly one text block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolOutput {
    pub content: Vec<Content>,
}

/// An MCP content block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Content {
    Text { text: String },
}

impl ToolOutput {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![Content::Text { text: text.into() }],
        }
    }

    /// Render a failure the way callers pattern-match on it: `Error: <message>`.
    pub fn error(err: &Error) -> Self {
        Self::text(format!("Error: {err}"))
    }

    /// Text of the single content block.
    pub fn as_text(&self) -> &str {
        match self.content.first() {
            Some(Content::Text { text }) => text,
            None => "",
        }
    }
}

/// Turns tool invocations into gnomAD queries.
///
/// Each call validates and normalizes its arguments, performs at most one
/// round trip through the client, and unwraps the tool's slice of the
/// response. Nothing is shared between calls apart from the client itself.
#[derive(Clone)]
pub struct Dispatcher {
    client: Arc<dyn GraphQlClient>,
}

impl Dispatcher {
    pub fn new(client: Arc<dyn GraphQlClient>) -> Self {
        Self { client }
    }

    /// Run the named tool. Failures are folded into the output text rather
    /// than returned, so this never fails.
    pub async fn call(&self, name: &str, arguments: Option<&Value>) -> ToolOutput {
        tracing::debug!("Calling tool {name}");

        match self.try_call(name, arguments).await {
            Ok(value) => ToolOutput::text(serde_json::to_string_pretty(&value).unwrap_or_default()),
            Err(err) => {
                tracing::warn!("Tool {name} failed: {err}");
                ToolOutput::error(&err)
            }
        }
    }

    async fn try_call(&self, name: &str, arguments: Option<&Value>) -> Result<Value, Error> {
        let tool = Tool::from_name(name).ok_or_else(|| Error::UnknownTool(name.to_string()))?;
        let args = arguments
            .and_then(Value::as_object)
            .ok_or_else(|| Error::invalid("Invalid arguments provided"))?;

        let variables = bind_variables(tool, args)?;
        let spec = tool.query();

        let response = self
            .client
            .execute(GraphQlRequest {
                query: spec.template.to_string(),
                variables,
            })
            .await?;

        let data = response.into_data()?;
        Ok(extract(data.as_ref(), spec.result_path, spec.shape))
    }
}

/// Validate `args` for `tool` and build the GraphQL variables.
///
/// # Errors
///
/// Returns [`Error::InvalidArguments`] when a required argument is missing or
/// malformed. No request is issued in that case.
pub fn bind_variables(tool: Tool, args: &Arguments) -> Result<Value, Error> {
    let gene = if tool.is_gene_scoped() {
        GeneRef::from_args(args)?
    } else {
        GeneRef::default()
    };

    let variables = match tool {
        Tool::Search => json!({
            "query": required_str(args, "query")?,
            "referenceGenome": reference_genome(args),
        }),
        Tool::GetGene => json!({
            "geneId": gene.id,
            "geneSymbol": gene.symbol,
            "referenceGenome": reference_genome(args),
        }),
        Tool::GetVariant => json!({
            "variantId": required_str(args, "variant_id")?,
            "datasetId": dataset(args, Dataset::GnomadR4),
        }),
        Tool::GetVariantsInGene | Tool::GetCoverage => json!({
            "geneId": gene.id,
            "geneSymbol": gene.symbol,
            "datasetId": dataset(args, Dataset::GnomadR4),
            "referenceGenome": reference_genome(args),
        }),
        Tool::GetTranscript => json!({
            "transcriptId": required_str(args, "transcript_id")?,
            "referenceGenome": reference_genome(args),
        }),
        Tool::GetRegionVariants => region_variables(args, Dataset::GnomadR4)?,
        Tool::GetStructuralVariants => region_variables(args, Dataset::GnomadSvR4)?,
        Tool::GetMitochondrialVariants => json!({
            "datasetId": dataset(args, Dataset::GnomadR3),
        }),
    };

    Ok(variables)
}

/// Gene identity for gene-scoped tools. Absent fields serialize as `null`,
/// which the API's nullable `$geneId`/`$geneSymbol` arguments expect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct GeneRef {
    id: Option<String>,
    symbol: Option<String>,
}

impl GeneRef {
    fn from_args(args: &Arguments) -> Result<Self, Error> {
        let gene = Self {
            id: optional_text(args, "gene_id"),
            symbol: optional_text(args, "gene_symbol"),
        };
        if gene.id.is_none() && gene.symbol.is_none() {
            return Err(Error::invalid(
                "Either gene_id or gene_symbol must be provided",
            ));
        }
        Ok(gene)
    }
}

fn region_variables(args: &Arguments, default_dataset: Dataset) -> Result<Value, Error> {
    Ok(json!({
        "chrom": required_chrom(args)?,
        "start": required_int(args, "start")?,
        "stop": required_int(args, "stop")?,
        "datasetId": dataset(args, default_dataset),
        "referenceGenome": reference_genome(args),
    }))
}

/// Non-empty string argument; empty strings count as absent.
fn optional_str<'a>(args: &'a Arguments, key: &str) -> Option<&'a str> {
    args.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

fn required_str<'a>(args: &'a Arguments, key: &str) -> Result<&'a str, Error> {
    optional_str(args, key).ok_or_else(|| missing(key))
}

/// Identifier given as a non-empty string or a bare number (`17`, `7157`).
fn optional_text(args: &Arguments, key: &str) -> Option<String> {
    match args.get(key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

/// Chromosomes are usually strings but callers often send `1` or `22`.
fn required_chrom(args: &Arguments) -> Result<String, Error> {
    optional_text(args, "chrom").ok_or_else(|| missing("chrom"))
}

/// Integer argument given as a JSON number or numeric string. Fractions
/// are truncated toward zero.
fn required_int(args: &Arguments, key: &str) -> Result<i64, Error> {
    let value = args
        .get(key)
        .filter(|v| !v.is_null())
        .ok_or_else(|| missing(key))?;

    let parsed = match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(truncate)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(truncate))
        }
        _ => None,
    };

    parsed.ok_or_else(|| {
        Error::invalid(format!("Invalid '{key}' parameter: expected an integer"))
    })
}

#[allow(clippy::cast_possible_truncation)]
fn truncate(n: f64) -> Option<i64> {
    n.is_finite().then(|| n.trunc() as i64)
}

fn dataset(args: &Arguments, default: Dataset) -> Dataset {
    optional_str(args, "dataset").map_or(default, Dataset::normalize)
}

fn reference_genome(args: &Arguments) -> ReferenceGenome {
    optional_str(args, "reference_genome")
        .map_or_else(ReferenceGenome::default, ReferenceGenome::normalize)
}

fn missing(key: &str) -> Error {
    Error::invalid(format!("Missing '{key}' parameter"))
}

/// Walk `path` from `data`. A missing or null result becomes the shape's
/// empty value instead of an error.
fn extract(data: Option<&Value>, path: &[&str], shape: ResultShape) -> Value {
    data.and_then(|root| path.iter().try_fold(root, |node, key| node.get(*key)))
        .filter(|value| !value.is_null())
        .cloned()
        .unwrap_or_else(|| match shape {
            ResultShape::List => Value::Array(Vec::new()),
            ResultShape::Single => Value::Null,
        })
}
