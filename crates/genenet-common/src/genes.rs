//! Gene symbol input handling.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Gene list shown in the input box on first load.
pub const DEFAULT_GENES: &str = "FSHR, LHCGR, CYP19A1, ESR1, INHBA, GNRHR";

/// NCBI taxonomy id for Homo sapiens, used by STRING queries and links.
pub const HUMAN_TAXON_ID: u32 = 9606;

/// A trimmed, non-empty gene symbol exactly as the user typed it.
/// Case is preserved; no alias resolution happens here.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeneSymbol(String);

impl GeneSymbol {
    /// Returns `None` for empty or whitespace-only input.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for GeneSymbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GeneSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Split free-text input on commas and newlines.
///
/// Order is preserved and duplicates are kept; an input with nothing but
/// separators and whitespace yields an empty list, which callers treat as
/// a no-op.
pub fn parse_gene_list(input: &str) -> Vec<GeneSymbol> {
    input
        .split(|c| c == ',' || c == '\n' || c == '\r')
        .filter_map(GeneSymbol::new)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols(list: &[GeneSymbol]) -> Vec<&str> {
        list.iter().map(GeneSymbol::as_str).collect()
    }

    #[test]
    fn test_parse_default_list() {
        let genes = parse_gene_list(DEFAULT_GENES);
        assert_eq!(symbols(&genes), vec!["FSHR", "LHCGR", "CYP19A1", "ESR1", "INHBA", "GNRHR"]);
    }

    #[test]
    fn test_parse_skips_blank_entries() {
        let genes = parse_gene_list(" FSHR ,, \n LHCGR,\r\n ");
        assert_eq!(symbols(&genes), vec!["FSHR", "LHCGR"]);
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        assert!(parse_gene_list("   ,  \n ").is_empty());
        assert!(parse_gene_list("").is_empty());
    }

    #[test]
    fn test_case_and_duplicates_preserved() {
        let genes = parse_gene_list("esr1, ESR1, esr1");
        assert_eq!(symbols(&genes), vec!["esr1", "ESR1", "esr1"]);
    }

    #[test]
    fn test_gene_symbol_rejects_blank() {
        assert!(GeneSymbol::new("  ").is_none());
        assert_eq!(GeneSymbol::new(" KRAS ").unwrap().as_str(), "KRAS");
    }
}
