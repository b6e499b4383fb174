//! Result serialization: one pretty-printed JSON file per run.

use std::fs;
use std::path::Path;

use crate::app::Result;
use crate::domain::ResultsMapping;

/// Write the aggregate mapping as indented UTF-8 JSON.
///
/// Called exactly once, at the end of a run; a failure here is fatal.
pub fn write_results(path: &Path, results: &ResultsMapping) -> Result<()> {
    let json = serde_json::to_string_pretty(results)?;
    fs::write(path, json)?;
    Ok(())
}

/// End-of-run statistics, computed from the aggregate mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub cities_processed: usize,
    pub cities_with_clubs: usize,
    pub total_clubs: usize,
}

impl RunSummary {
    pub fn from_results(results: &ResultsMapping) -> Self {
        Self {
            cities_processed: results.len(),
            cities_with_clubs: results.values().filter(|clubs| !clubs.is_empty()).count(),
            total_clubs: results.values().map(Vec::len).sum(),
        }
    }
}

impl std::fmt::Display for RunSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Overall statistics:")?;
        writeln!(f, "- Cities processed: {}", self.cities_processed)?;
        writeln!(f, "- Cities with clubs: {}", self.cities_with_clubs)?;
        write!(f, "- Total clubs found: {}", self.total_clubs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Club;

    fn sample_results() -> ResultsMapping {
        let mut results = ResultsMapping::new();
        results.insert(
            "london".to_string(),
            vec![
                Club::new("Padel One", "/club/1-padel-one"),
                Club::new("Court Two", "/club/2-court-two"),
            ],
        );
        results.insert("hull".to_string(), vec![]);
        results
    }

    #[test]
    fn test_write_results_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("club_links.json");

        write_results(&path, &sample_results()).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

        assert_eq!(value["london"][0]["club_name"], "Padel One");
        assert_eq!(value["london"][1]["club_link"], "/club/2-court-two");
        assert_eq!(value["hull"], serde_json::json!([]));
        // Human-readable indentation.
        assert!(raw.contains('\n'));
    }

    #[test]
    fn test_summary_counts() {
        let summary = RunSummary::from_results(&sample_results());
        assert_eq!(summary.cities_processed, 2);
        assert_eq!(summary.cities_with_clubs, 1);
        assert_eq!(summary.total_clubs, 2);
    }

    #[test]
    fn test_summary_display_lines() {
        let text = RunSummary::from_results(&sample_results()).to_string();
        assert!(text.contains("Cities processed: 2"));
        assert!(text.contains("Total clubs found: 2"));
    }
}
