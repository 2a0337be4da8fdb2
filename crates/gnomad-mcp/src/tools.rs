use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Definition of an MCP tool as reported by `tools/list`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// The closed set of gnomAD tools this server exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    Search,
    GetGene,
    GetVariant,
    GetVariantsInGene,
    GetTranscript,
    GetRegionVariants,
    GetCoverage,
    GetStructuralVariants,
    GetMitochondrialVariants,
}

impl Tool {
    /// Every tool, in catalog order.
    pub const ALL: [Self; 9] = [
        Self::Search,
        Self::GetGene,
        Self::GetVariant,
        Self::GetVariantsInGene,
        Self::GetTranscript,
        Self::GetRegionVariants,
        Self::GetCoverage,
        Self::GetStructuralVariants,
        Self::GetMitochondrialVariants,
    ];

    /// Name used on the wire in `tools/call`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::GetGene => "get_gene",
            Self::GetVariant => "get_variant",
            Self::GetVariantsInGene => "get_variants_in_gene",
            Self::GetTranscript => "get_transcript",
            Self::GetRegionVariants => "get_region_variants",
            Self::GetCoverage => "get_coverage",
            Self::GetStructuralVariants => "get_structural_variants",
            Self::GetMitochondrialVariants => "get_mitochondrial_variants",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.name() == name)
    }

    /// Tools keyed by a gene that accept either `gene_id` or `gene_symbol`.
    pub const fn is_gene_scoped(self) -> bool {
        matches!(self, Self::GetGene | Self::GetVariantsInGene | Self::GetCoverage)
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Search => "Search for genes, variants, or regions in gnomAD",
            Self::GetGene => "Get detailed information about a gene including constraint scores",
            Self::GetVariant => "Get detailed information about a specific variant",
            Self::GetVariantsInGene => "Get all variants in a specific gene",
            Self::GetTranscript => "Get information about a specific transcript",
            Self::GetRegionVariants => "Get variants in a specific genomic region",
            Self::GetCoverage => "Get coverage information for a gene",
            Self::GetStructuralVariants => "Get structural variants in a genomic region",
            Self::GetMitochondrialVariants => "Get mitochondrial variants",
        }
    }

    /// JSON Schema describing the tool's arguments and their defaults.
    pub fn input_schema(self) -> Value {
        match self {
            Self::Search => json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Search query (gene symbol, gene ID, variant ID, rsID, etc.)"
                    },
                    "reference_genome": reference_genome_property("Reference genome (GRCh37 or GRCh38)"),
                    "dataset": dataset_property(
                        "Dataset ID (gnomad_r4, gnomad_r3, gnomad_r2_1, etc.)",
                        "gnomad_r4"
                    )
                },
                "required": ["query"]
            }),
            Self::GetGene => json!({
                "type": "object",
                "properties": {
                    "gene_id": {
                        "type": "string",
                        "description": "Ensembl gene ID (e.g., ENSG00000141510)"
                    },
                    "gene_symbol": {
                        "type": "string",
                        "description": "Gene symbol (e.g., TP53)"
                    },
                    "reference_genome": reference_genome_property("Reference genome (GRCh37 or GRCh38)")
                }
            }),
            Self::GetVariant => json!({
                "type": "object",
                "properties": {
                    "variant_id": {
                        "type": "string",
                        "description": "Variant ID in format: chr-pos-ref-alt (e.g., 1-55516888-G-A)"
                    },
                    "dataset": dataset_property(
                        "Dataset ID (gnomad_r4, gnomad_r3, gnomad_r2_1, etc.)",
                        "gnomad_r4"
                    )
                },
                "required": ["variant_id"]
            }),
            Self::GetVariantsInGene | Self::GetCoverage => json!({
                "type": "object",
                "properties": {
                    "gene_id": {
                        "type": "string",
                        "description": "Ensembl gene ID"
                    },
                    "gene_symbol": {
                        "type": "string",
                        "description": "Gene symbol"
                    },
                    "dataset": dataset_property("Dataset ID", "gnomad_r4"),
                    "reference_genome": reference_genome_property("Reference genome")
                }
            }),
            Self::GetTranscript => json!({
                "type": "object",
                "properties": {
                    "transcript_id": {
                        "type": "string",
                        "description": "Ensembl transcript ID (e.g., ENST00000269305)"
                    },
                    "reference_genome": reference_genome_property("Reference genome")
                },
                "required": ["transcript_id"]
            }),
            Self::GetRegionVariants => region_schema(
                "Chromosome (1-22, X, Y)",
                dataset_property("Dataset ID", "gnomad_r4"),
            ),
            Self::GetStructuralVariants => region_schema(
                "Chromosome",
                dataset_property("Dataset ID (gnomad_sv_r4, gnomad_sv_r2_1)", "gnomad_sv_r4"),
            ),
            Self::GetMitochondrialVariants => json!({
                "type": "object",
                "properties": {
                    "dataset": dataset_property("Dataset ID", "gnomad_r3")
                }
            }),
        }
    }

    pub fn definition(self) -> ToolDefinition {
        ToolDefinition {
            name: self.name().to_string(),
            description: self.description().to_string(),
            input_schema: self.input_schema(),
        }
    }
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

fn dataset_property(description: &str, default: &str) -> Value {
    json!({
        "type": "string",
        "description": description,
        "default": default
    })
}

fn reference_genome_property(description: &str) -> Value {
    json!({
        "type": "string",
        "description": description,
        "default": "GRCh38"
    })
}

fn region_schema(chrom_description: &str, dataset: Value) -> Value {
    json!({
        "type": "object",
        "properties": {
            "chrom": {
                "type": "string",
                "description": chrom_description
            },
            "start": {
                "type": "number",
                "description": "Start position"
            },
            "stop": {
                "type": "number",
                "description": "Stop position"
            },
            "dataset": dataset,
            "reference_genome": reference_genome_property("Reference genome")
        },
        "required": ["chrom", "start", "stop"]
    })
}

/// Registry of all MCP tools exposed by the server.
pub struct ToolRegistry;

impl ToolRegistry {
    /// Return the list of tool definitions for the MCP `tools/list` method.
    #[must_use]
    pub fn definitions() -> Vec<ToolDefinition> {
        Tool::ALL.into_iter().map(Tool::definition).collect()
    }
}
