//! Tool × criterion score matrix.

use serde::Serialize;
use tracing::debug;

use crate::criteria::{self, Criterion, CRITERIA};
use crate::error::{Result, ScoreError};

pub const MIN_SCORE: u8 = 1;
pub const MAX_SCORE: u8 = 5;

const N_CRITERIA: usize = CRITERIA.len();

pub const TOTAL_COLUMN: &str = "Total Score";

/// Expert prior scores, one row per tool, columns in `CRITERIA` order.
#[rustfmt::skip]
const DEFAULT_SCORES: [(&str, [u8; N_CRITERIA]); 6] = [
    ("GeneMANIA",        [5, 5, 2, 3, 5, 3, 5]),
    ("STRING-db",        [4, 5, 3, 4, 5, 2, 5]),
    ("GIANT",            [5, 5, 3, 4, 5, 2, 5]),
    ("Cytoscape+ClueGO", [4, 4, 2, 5, 5, 3, 5]),
    ("NetworkX",         [1, 3, 1, 5, 5, 1, 2]),
    ("Pathway Commons",  [5, 5, 2, 5, 5, 2, 4]),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolScores {
    pub tool: String,
    pub scores: [u8; N_CRITERIA],
}

impl ToolScores {
    pub fn total(&self) -> u32 {
        self.scores.iter().map(|&s| u32::from(s)).sum()
    }
}

/// Per-session evaluation table.
///
/// Each `set_score` touches exactly one cell; totals are summed on every
/// call to `total`, so they always match the current cells.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreMatrix {
    rows: Vec<ToolScores>,
}

impl Default for ScoreMatrix {
    fn default() -> Self {
        Self::init()
    }
}

impl ScoreMatrix {
    pub fn init() -> Self {
        let rows = DEFAULT_SCORES
            .iter()
            .map(|(tool, scores)| ToolScores { tool: tool.to_string(), scores: *scores })
            .collect();
        Self { rows }
    }

    pub fn criteria(&self) -> &'static [Criterion] {
        &CRITERIA
    }

    pub fn tools(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|r| r.tool.as_str())
    }

    pub fn rows(&self) -> &[ToolScores] {
        &self.rows
    }

    fn row(&self, tool: &str) -> Result<&ToolScores> {
        self.rows
            .iter()
            .find(|r| r.tool == tool)
            .ok_or_else(|| ScoreError::UnknownTool(tool.to_string()))
    }

    fn column(criterion: &str) -> Result<usize> {
        criteria::position(criterion).ok_or_else(|| ScoreError::UnknownCriterion(criterion.to_string()))
    }

    pub fn get(&self, tool: &str, criterion: &str) -> Result<u8> {
        let col = Self::column(criterion)?;
        Ok(self.row(tool)?.scores[col])
    }

    /// Set one cell. Values outside `[MIN_SCORE, MAX_SCORE]` are rejected
    /// and the previous value stays in place.
    pub fn set_score(&mut self, tool: &str, criterion: &str, value: i64) -> Result<()> {
        if value < i64::from(MIN_SCORE) || value > i64::from(MAX_SCORE) {
            return Err(ScoreError::Range { value, min: MIN_SCORE, max: MAX_SCORE });
        }
        let col = Self::column(criterion)?;
        let row = self
            .rows
            .iter_mut()
            .find(|r| r.tool == tool)
            .ok_or_else(|| ScoreError::UnknownTool(tool.to_string()))?;

        // Range checked above.
        row.scores[col] = value as u8;
        debug!(tool, criterion, value, "Score updated");
        Ok(())
    }

    pub fn total(&self, tool: &str) -> Result<u32> {
        Ok(self.row(tool)?.total())
    }

    /// Back to the built-in defaults.
    pub fn reset(&mut self) {
        *self = Self::init();
    }

    /// `Tool`, each criterion in declaration order, then `Total Score`.
    pub fn export_csv(&self) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());

        let mut header = Vec::with_capacity(N_CRITERIA + 2);
        header.push("Tool");
        header.extend(CRITERIA.iter().map(|c| c.name));
        header.push(TOTAL_COLUMN);
        writer.write_record(&header)?;

        for row in &self.rows {
            let mut record = Vec::with_capacity(N_CRITERIA + 2);
            record.push(row.tool.clone());
            record.extend(row.scores.iter().map(|s| s.to_string()));
            record.push(row.total().to_string());
            writer.write_record(&record)?;
        }

        let bytes = writer.into_inner().map_err(|e| ScoreError::Export(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| ScoreError::Export(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const BIO: &str = "Biological Context";

    #[test]
    fn test_default_string_db_total() {
        let m = ScoreMatrix::init();
        assert_eq!(m.total("STRING-db").unwrap(), 4 + 5 + 3 + 4 + 5 + 2 + 5);
        assert_eq!(m.total("STRING-db").unwrap(), 28);
    }

    #[test]
    fn test_giant_spelling() {
        let m = ScoreMatrix::init();
        assert!(m.total("GIANT").is_ok());
        assert_eq!(m.total("GAINT"), Err(ScoreError::UnknownTool("GAINT".into())));
    }

    #[test]
    fn test_tool_order() {
        let m = ScoreMatrix::init();
        assert_eq!(
            m.tools().collect::<Vec<_>>(),
            vec!["GeneMANIA", "STRING-db", "GIANT", "Cytoscape+ClueGO", "NetworkX", "Pathway Commons"]
        );
    }

    #[test]
    fn test_boundaries() {
        let mut m = ScoreMatrix::init();
        assert_eq!(
            m.set_score("NetworkX", BIO, 0),
            Err(ScoreError::Range { value: 0, min: 1, max: 5 })
        );
        assert!(matches!(m.set_score("NetworkX", BIO, 6), Err(ScoreError::Range { value: 6, .. })));
        assert_eq!(m.get("NetworkX", BIO).unwrap(), 1);

        m.set_score("NetworkX", BIO, 5).unwrap();
        assert_eq!(m.get("NetworkX", BIO).unwrap(), 5);
        m.set_score("NetworkX", BIO, 1).unwrap();
        assert_eq!(m.get("NetworkX", BIO).unwrap(), 1);
    }

    #[test]
    fn test_rejected_edit_keeps_prior_value() {
        let mut m = ScoreMatrix::init();
        m.set_score("GIANT", "Visual Insight", 3).unwrap();
        assert!(m.set_score("GIANT", "Visual Insight", 42).is_err());
        assert_eq!(m.get("GIANT", "Visual Insight").unwrap(), 3);
    }

    #[test]
    fn test_total_tracks_edits() {
        let mut m = ScoreMatrix::init();
        m.set_score("STRING-db", BIO, 1).unwrap();
        assert_eq!(m.total("STRING-db").unwrap(), 25);
        m.set_score("STRING-db", "Clinical Explainability", 5).unwrap();
        assert_eq!(m.total("STRING-db").unwrap(), 28);

        let expected: u32 = m
            .criteria()
            .iter()
            .map(|c| u32::from(m.get("STRING-db", c.name).unwrap()))
            .sum();
        assert_eq!(m.total("STRING-db").unwrap(), expected);
    }

    #[test]
    fn test_edit_is_isolated() {
        let mut m = ScoreMatrix::init();
        let before = m.clone();
        m.set_score("GeneMANIA", "AI-readiness", 5).unwrap();
        for (a, b) in before.rows().iter().zip(m.rows()) {
            if a.tool != "GeneMANIA" {
                assert_eq!(a, b);
            }
        }
        assert_eq!(m.total("GeneMANIA").unwrap(), before.total("GeneMANIA").unwrap() + 2);
    }

    #[test]
    fn test_unknown_names() {
        let mut m = ScoreMatrix::init();
        assert_eq!(m.set_score("Nope", BIO, 3), Err(ScoreError::UnknownTool("Nope".into())));
        assert_eq!(
            m.set_score("GIANT", "Nope", 3),
            Err(ScoreError::UnknownCriterion("Nope".into()))
        );
    }

    #[test]
    fn test_reset() {
        let mut m = ScoreMatrix::init();
        m.set_score("GIANT", BIO, 1).unwrap();
        m.reset();
        assert_eq!(m, ScoreMatrix::init());
    }

    #[test]
    fn test_export_default() {
        let csv = ScoreMatrix::init().export_csv().unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines[0],
            "Tool,Biological Context,Network Connectivity,Clinical Utility,AI-readiness,\
             Interoperability,Clinical Explainability,Visual Insight,Total Score"
        );
        assert_eq!(lines[2], "STRING-db,4,5,3,4,5,2,5,28");
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn test_export_reflects_edits() {
        let mut m = ScoreMatrix::init();
        m.set_score("NetworkX", "Visual Insight", 5).unwrap();
        let csv = m.export_csv().unwrap();
        assert!(csv.lines().any(|l| l == "NetworkX,1,3,1,5,5,1,5,21"));
    }
}
