use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Result of a single analysis run. Always recomputed in full; the score is
/// the sum of the awarded rule buckets and the suggestions list holds one
/// entry per failed bucket, in evaluation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoReport {
    pub score: u8,
    pub suggestions: Vec<String>,
}

impl SeoReport {
    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.score)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    #[default]
    Low,
    Medium,
    High,
}

impl ScoreBand {
    /// Band thresholds: 80 and up is high, 50 to 79 is medium, the rest low.
    /// Scores above 100 are clamped rather than rejected.
    pub fn from_score(score: u8) -> Self {
        match score.min(100) {
            80..=100 => Self::High,
            50..=79 => Self::Medium,
            _ => Self::Low,
        }
    }
}

impl FromStr for ScoreBand {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

/// Search-result preview derived from the current metadata. Empty fields
/// fall back to fixed placeholders so the preview never renders blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewRecord {
    pub slug: String,
    pub display_title: String,
    pub display_description: String,
}
