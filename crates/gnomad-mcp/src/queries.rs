//! GraphQL documents sent to the gnomAD API, and where each tool's answer
//! lives in the response.

use crate::tools::Tool;

/// How a tool's result is located in the `data` field of a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuerySpec {
    pub template: &'static str,
    /// Keys walked from `data` down to the result.
    pub result_path: &'static [&'static str],
    pub shape: ResultShape,
}

/// What a tool returns when its result path is missing from the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultShape {
    /// Missing results become `[]`.
    List,
    /// Missing results become `null`.
    Single,
}

impl Tool {
    pub const fn query(self) -> QuerySpec {
        match self {
            Self::Search => QuerySpec {
                template: SEARCH,
                result_path: &["searchResults"],
                shape: ResultShape::List,
            },
            Self::GetGene => QuerySpec {
                template: GET_GENE,
                result_path: &["gene"],
                shape: ResultShape::Single,
            },
            Self::GetVariant => QuerySpec {
                template: GET_VARIANT,
                result_path: &["variant"],
                shape: ResultShape::Single,
            },
            Self::GetVariantsInGene => QuerySpec {
                template: GET_VARIANTS_IN_GENE,
                result_path: &["gene", "variants"],
                shape: ResultShape::List,
            },
            Self::GetTranscript => QuerySpec {
                template: GET_TRANSCRIPT,
                result_path: &["transcript"],
                shape: ResultShape::Single,
            },
            Self::GetRegionVariants => QuerySpec {
                template: GET_REGION_VARIANTS,
                result_path: &["region", "variants"],
                shape: ResultShape::List,
            },
            Self::GetCoverage => QuerySpec {
                template: GET_COVERAGE,
                result_path: &["gene", "coverage"],
                shape: ResultShape::Single,
            },
            Self::GetStructuralVariants => QuerySpec {
                template: GET_STRUCTURAL_VARIANTS,
                result_path: &["region", "structural_variants"],
                shape: ResultShape::List,
            },
            Self::GetMitochondrialVariants => QuerySpec {
                template: GET_MITOCHONDRIAL_VARIANTS,
                result_path: &["mitochondrial_variants"],
                shape: ResultShape::List,
            },
        }
    }
}

pub const SEARCH: &str = r"
query SearchGene($query: String!, $referenceGenome: ReferenceGenomeId!) {
  searchResults(query: $query, referenceGenome: $referenceGenome) {
    label
    value: url
  }
}
";

pub const GET_GENE: &str = r"
query GetGene($geneId: String, $geneSymbol: String, $referenceGenome: ReferenceGenomeId!) {
  gene(gene_id: $geneId, gene_symbol: $geneSymbol, reference_genome: $referenceGenome) {
    gene_id
    symbol
    name
    canonical_transcript_id
    hgnc_id
    omim_id
    chrom
    start
    stop
    strand
    gnomad_constraint {
      exp_lof
      exp_mis
      exp_syn
      obs_lof
      obs_mis
      obs_syn
      oe_lof
      oe_lof_lower
      oe_lof_upper
      oe_mis
      oe_mis_lower
      oe_mis_upper
      oe_syn
      oe_syn_lower
      oe_syn_upper
      lof_z
      mis_z
      syn_z
      pLI
    }
    transcripts {
      transcript_id
      transcript_version
      reference_genome
    }
  }
}
";

pub const GET_VARIANT: &str = r"
query GetVariant($variantId: String!, $datasetId: DatasetId!) {
  variant(variantId: $variantId, dataset: $datasetId) {
    variant_id
    reference_genome
    chrom
    pos
    ref
    alt
    rsids
    caid
    colocated_variants
    multi_nucleotide_variants {
      combined_variant_id
      changes_amino_acids
      n_individuals
      other_constituent_snvs
    }
    exome {
      ac
      an
      ac_hemi
      ac_hom
      faf95 {
        popmax
        popmax_population
      }
      filters
      populations {
        id
        ac
        an
        ac_hemi
        ac_hom
      }
    }
    genome {
      ac
      an
      ac_hemi
      ac_hom
      faf95 {
        popmax
        popmax_population
      }
      filters
      populations {
        id
        ac
        an
        ac_hemi
        ac_hom
      }
    }
    transcript_consequences {
      gene_id
      gene_symbol
      transcript_id
      consequence_terms
      is_canonical
      major_consequence
      polyphen_prediction
      sift_prediction
      lof
      lof_filter
      lof_flags
    }
  }
}
";

pub const GET_VARIANTS_IN_GENE: &str = r"
query GetVariantsInGene($geneId: String, $geneSymbol: String, $datasetId: DatasetId!, $referenceGenome: ReferenceGenomeId!) {
  gene(gene_id: $geneId, gene_symbol: $geneSymbol, reference_genome: $referenceGenome) {
    variants(dataset: $datasetId) {
      variant_id
      pos
      rsids
      consequence
      hgvsc
      hgvsp
      lof
      exome {
        ac
        an
        af
        filters
      }
      genome {
        ac
        an
        af
        filters
      }
    }
  }
}
";

pub const GET_TRANSCRIPT: &str = r"
query GetTranscript($transcriptId: String!, $referenceGenome: ReferenceGenomeId!) {
  transcript(transcript_id: $transcriptId, reference_genome: $referenceGenome) {
    transcript_id
    transcript_version
    reference_genome
    chrom
    start
    stop
    strand
    gene_id
    gene_symbol
    gene_version
    gnomad_constraint {
      exp_lof
      exp_mis
      exp_syn
      obs_lof
      obs_mis
      obs_syn
      oe_lof
      oe_lof_lower
      oe_lof_upper
      oe_mis
      oe_mis_lower
      oe_mis_upper
      oe_syn
      oe_syn_lower
      oe_syn_upper
      lof_z
      mis_z
      syn_z
      pLI
    }
  }
}
";

pub const GET_REGION_VARIANTS: &str = r"
query GetRegionVariants($chrom: String!, $start: Int!, $stop: Int!, $datasetId: DatasetId!, $referenceGenome: ReferenceGenomeId!) {
  region(chrom: $chrom, start: $start, stop: $stop, reference_genome: $referenceGenome) {
    variants(dataset: $datasetId) {
      variant_id
      pos
      rsids
      consequence
      hgvsc
      hgvsp
      lof
      exome {
        ac
        an
        af
        filters
      }
      genome {
        ac
        an
        af
        filters
      }
    }
  }
}
";

pub const GET_COVERAGE: &str = r"
query GetCoverage($geneId: String, $geneSymbol: String, $datasetId: DatasetId!, $referenceGenome: ReferenceGenomeId!) {
  gene(gene_id: $geneId, gene_symbol: $geneSymbol, reference_genome: $referenceGenome) {
    coverage(dataset: $datasetId) {
      exome {
        pos
        mean
        median
        over_1
        over_5
        over_10
        over_15
        over_20
        over_25
        over_30
        over_50
        over_100
      }
      genome {
        pos
        mean
        median
        over_1
        over_5
        over_10
        over_15
        over_20
        over_25
        over_30
        over_50
        over_100
      }
    }
  }
}
";

pub const GET_STRUCTURAL_VARIANTS: &str = r"
query GetStructuralVariants($chrom: String!, $start: Int!, $stop: Int!, $datasetId: DatasetId!, $referenceGenome: ReferenceGenomeId!) {
  region(chrom: $chrom, start: $start, stop: $stop, reference_genome: $referenceGenome) {
    structural_variants(dataset: $datasetId) {
      variant_id
      chrom
      pos
      end
      length
      type
      alts
      ac
      an
      af
      homozygote_count
      hemizygote_count
      filters
    }
  }
}
";

pub const GET_MITOCHONDRIAL_VARIANTS: &str = r"
query GetMitochondrialVariants($datasetId: DatasetId!) {
  mitochondrial_variants(dataset: $datasetId) {
    variant_id
    pos
    ref
    alt
    rsids
    ac_het
    ac_hom
    an
    af_het
    af_hom
    max_heteroplasmy
    filters
  }
}
";
