//! STRING interaction network API client.
//!
//! Endpoint: https://string-db.org/api/json/network

use std::time::Duration;

use async_trait::async_trait;
use genenet_common::sandbox::SandboxClient;
use genenet_common::GeneSymbol;
use genenet_config::StringDbConfig;
use serde_json::Value;
use tracing::{debug, instrument};

use super::InteractionSource;
use crate::error::{FetchError, Result};
use crate::models::{Edge, InteractionSourceKind, StringInteraction};

const NETWORK_PATH: &str = "/api/json/network";

pub struct StringDbClient {
    client: SandboxClient,
    network_url: String,
    species: u32,
}

impl StringDbClient {
    pub fn new(config: &StringDbConfig) -> Result<Self> {
        let mut client = SandboxClient::new(Duration::from_secs(config.timeout_secs))?;
        // A configured mirror is trusted implicitly.
        client.allow_url_host(&config.base_url)?;
        Ok(Self {
            client,
            network_url: format!("{}{}", config.base_url.trim_end_matches('/'), NETWORK_PATH),
            species: config.species,
        })
    }

    pub fn network_url(&self) -> &str {
        &self.network_url
    }
}

#[async_trait]
impl InteractionSource for StringDbClient {
    fn kind(&self) -> InteractionSourceKind {
        InteractionSourceKind::StringDb
    }

    #[instrument(skip(self, genes), fields(n_genes = genes.len()))]
    async fn network(&self, genes: &[GeneSymbol]) -> Result<Vec<Edge>> {
        let identifiers = genes
            .iter()
            .map(GeneSymbol::as_str)
            .collect::<Vec<_>>()
            .join("\n");
        let species = self.species.to_string();
        let params = [("identifiers", identifiers.as_str()), ("species", species.as_str())];

        let resp = self.client
            .get(&self.network_url)?
            .query(&params)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Network(format!("STRING returned HTTP {}", status)));
        }

        let body = resp.text().await?;
        parse_network_response(&body)
    }
}

/// Parse a STRING `network` JSON body.
///
/// The body must be an array; individual records lacking
/// `preferredName_A`, `preferredName_B` or a numeric `score` are dropped.
pub fn parse_network_response(body: &str) -> Result<Vec<Edge>> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| FetchError::Parse(format!("invalid JSON: {}", e)))?;

    let records = match value {
        Value::Array(records) => records,
        Value::Object(obj) => {
            // STRING reports bad identifiers as {"Error": ..., "ErrorMessage": ...}
            let message = obj
                .get("ErrorMessage")
                .or_else(|| obj.get("Error"))
                .and_then(Value::as_str)
                .unwrap_or("expected a JSON array, got an object");
            return Err(FetchError::Parse(message.to_string()));
        }
        _ => return Err(FetchError::Parse("expected a JSON array".to_string())),
    };

    let total = records.len();
    let edges: Vec<Edge> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| {
            match serde_json::from_value::<StringInteraction>(record) {
                Ok(r) => Some(r.into()),
                Err(e) => {
                    debug!(index, error = %e, "Dropping malformed STRING record");
                    None
                }
            }
        })
        .collect();

    debug!(total, kept = edges.len(), "Parsed STRING network response");
    Ok(edges)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_record() {
        let body = r#"[{"preferredName_A":"FSHR","preferredName_B":"LHCGR","score":0.9}]"#;
        let edges = parse_network_response(body).unwrap();
        assert_eq!(edges, vec![Edge::new("FSHR", "LHCGR", 0.9)]);
    }

    #[test]
    fn test_parse_ignores_extra_fields() {
        let body = r#"[{
            "stringId_A": "9606.ENSP00000304236",
            "stringId_B": "9606.ENSP00000294954",
            "preferredName_A": "FSHR",
            "preferredName_B": "LHCGR",
            "ncbiTaxonId": "9606",
            "score": 0.902,
            "escore": 0.1
        }]"#;
        let edges = parse_network_response(body).unwrap();
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].score, 0.902);
    }

    #[test]
    fn test_malformed_records_dropped() {
        let body = r#"[
            {"preferredName_A":"A","preferredName_B":"B","score":0.5},
            {"preferredName_A":"A","score":0.5},
            {"preferredName_A":"A","preferredName_B":"C","score":"high"},
            42,
            {"preferredName_A":"C","preferredName_B":"C","score":1}
        ]"#;
        let edges = parse_network_response(body).unwrap();
        assert_eq!(
            edges,
            vec![Edge::new("A", "B", 0.5), Edge::new("C", "C", 1.0)]
        );
    }

    #[test]
    fn test_empty_array() {
        assert!(parse_network_response("[]").unwrap().is_empty());
    }

    #[test]
    fn test_error_object_is_parse_error() {
        let body = r#"{"Error":"not found","ErrorMessage":"identifiers not found"}"#;
        match parse_network_response(body) {
            Err(FetchError::Parse(msg)) => assert_eq!(msg, "identifiers not found"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        assert!(matches!(parse_network_response("<html>"), Err(FetchError::Parse(_))));
    }

    #[test]
    fn test_network_url_from_config() {
        let config = StringDbConfig {
            base_url: "https://version-12-0.string-db.org/".to_string(),
            ..Default::default()
        };
        let client = StringDbClient::new(&config).unwrap();
        assert_eq!(
            client.network_url(),
            "https://version-12-0.string-db.org/api/json/network"
        );
        assert_eq!(client.kind(), InteractionSourceKind::StringDb);
    }
}
