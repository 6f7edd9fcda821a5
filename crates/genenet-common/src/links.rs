//! Outbound hyperlinks to external gene-network resources.
//!
//! These are only ever rendered as anchors; nothing here performs a request.

use url::Url;

use crate::error::{GenenetError, Result};
use crate::genes::{GeneSymbol, HUMAN_TAXON_ID};

const GENEMANIA_SEARCH_URL: &str = "https://genemania.org/search/human/";
const GIANT_SEARCH_URL: &str = "https://giant-api.princeton.edu/api/search/genes";
const STRING_NETWORK_URL: &str = "https://string-db.org/cgi/network";
const PATHWAY_COMMONS_SEARCH_URL: &str = "https://www.pathwaycommons.org/pc2/search.do";

pub const NETWORKX_DOCS_URL: &str = "https://networkx.org/";

fn parse(base: &str) -> Result<Url> {
    Url::parse(base).map_err(|e| GenenetError::InvalidInput(format!("{base}: {e}")))
}

/// `https://genemania.org/search/human/{gene}` with the gene as an encoded path segment.
pub fn genemania_url(gene: &GeneSymbol) -> Result<String> {
    let mut url = parse(GENEMANIA_SEARCH_URL)?;
    url.path_segments_mut()
        .map_err(|_| GenenetError::InvalidInput(GENEMANIA_SEARCH_URL.to_string()))?
        .pop_if_empty()
        .push(gene.as_str());
    Ok(url.into())
}

pub fn giant_url(gene: &GeneSymbol) -> Result<String> {
    let url = Url::parse_with_params(GIANT_SEARCH_URL, &[("q", gene.as_str())])
        .map_err(|e| GenenetError::InvalidInput(e.to_string()))?;
    Ok(url.into())
}

/// Combined STRING network view; identifiers are newline-separated (`%0A`).
pub fn string_network_url(genes: &[GeneSymbol]) -> Result<String> {
    let identifiers = join(genes, "\n");
    let url = Url::parse_with_params(
        STRING_NETWORK_URL,
        &[
            ("species", HUMAN_TAXON_ID.to_string()),
            ("identifiers", identifiers),
        ],
    )
    .map_err(|e| GenenetError::InvalidInput(e.to_string()))?;
    Ok(url.into())
}

pub fn pathway_commons_url(genes: &[GeneSymbol]) -> Result<String> {
    let url = Url::parse_with_params(PATHWAY_COMMONS_SEARCH_URL, &[("q", join(genes, ","))])
        .map_err(|e| GenenetError::InvalidInput(e.to_string()))?;
    Ok(url.into())
}

fn join(genes: &[GeneSymbol], sep: &str) -> String {
    genes.iter().map(GeneSymbol::as_str).collect::<Vec<_>>().join(sep)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genes::parse_gene_list;

    fn gene(s: &str) -> GeneSymbol {
        GeneSymbol::new(s).unwrap()
    }

    #[test]
    fn test_genemania_path_segment() {
        assert_eq!(
            genemania_url(&gene("FSHR")).unwrap(),
            "https://genemania.org/search/human/FSHR"
        );
    }

    #[test]
    fn test_genemania_encodes_reserved_chars() {
        let url = genemania_url(&gene("HLA A/B")).unwrap();
        assert_eq!(url, "https://genemania.org/search/human/HLA%20A%2FB");
    }

    #[test]
    fn test_giant_query() {
        assert_eq!(
            giant_url(&gene("ESR1")).unwrap(),
            "https://giant-api.princeton.edu/api/search/genes?q=ESR1"
        );
    }

    #[test]
    fn test_string_network_newline_joined() {
        let genes = parse_gene_list("FSHR, LHCGR");
        assert_eq!(
            string_network_url(&genes).unwrap(),
            "https://string-db.org/cgi/network?species=9606&identifiers=FSHR%0ALHCGR"
        );
    }

    #[test]
    fn test_pathway_commons_comma_joined() {
        let genes = parse_gene_list("FSHR, LHCGR");
        assert_eq!(
            pathway_commons_url(&genes).unwrap(),
            "https://www.pathwaycommons.org/pc2/search.do?q=FSHR%2CLHCGR"
        );
    }
}
