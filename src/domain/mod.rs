pub mod cities;
pub mod club;

use std::collections::BTreeMap;

pub use cities::TOP_CITIES;
pub use club::Club;

/// City name → unique clubs found there, built once per run.
pub type ResultsMapping = BTreeMap<String, Vec<Club>>;
