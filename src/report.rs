use std::fmt;
use std::time::Duration;

use serde::Serialize;

use crate::ranking::Ranking;

/// What gets printed for one processed word list.
#[derive(Debug, Serialize)]
pub struct Report {
    /// File path, or `stdin`.
    pub source: String,
    #[serde(flatten)]
    pub ranking: Ranking,
    pub words: usize,
    pub rejected: usize,
    #[serde(rename = "elapsed_secs", serialize_with = "serialize_secs")]
    pub elapsed: Duration,
}

fn serialize_secs<S: serde::Serializer>(elapsed: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(elapsed.as_secs_f64())
}

impl Report {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let or_none = |w: &Option<String>| w.clone().unwrap_or_else(|| "(none)".to_string());

        writeln!(f, "FOR {}--------", self.source)?;
        writeln!(f, "Longest Compound Word: {}", or_none(&self.ranking.longest))?;
        writeln!(
            f,
            "Second Largest Compound Word: {}",
            or_none(&self.ranking.second_longest)
        )?;
        write!(
            f,
            "Time taken to process the file: {} seconds",
            self.elapsed.as_secs_f64()
        )
    }
}
