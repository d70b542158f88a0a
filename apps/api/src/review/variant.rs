use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::review::prompts::{EVALUATION_PROMPT, MATCH_PROMPT, OPTIMIZATION_PROMPT};

/// The canned actions a user can trigger. Each one pairs a fixed
/// instruction with the résumé and job description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptVariant {
    DetailedReview,
    MatchScore,
    OptimizationTips,
}

impl PromptVariant {
    pub const ALL: [PromptVariant; 3] = [
        PromptVariant::DetailedReview,
        PromptVariant::MatchScore,
        PromptVariant::OptimizationTips,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            PromptVariant::DetailedReview => "detailed_review",
            PromptVariant::MatchScore => "match_score",
            PromptVariant::OptimizationTips => "optimization_tips",
        }
    }

    pub fn instruction(self) -> &'static str {
        match self {
            PromptVariant::DetailedReview => EVALUATION_PROMPT,
            PromptVariant::MatchScore => MATCH_PROMPT,
            PromptVariant::OptimizationTips => OPTIMIZATION_PROMPT,
        }
    }

    /// Button text on the upload page.
    pub fn label(self) -> &'static str {
        match self {
            PromptVariant::DetailedReview => "Review Resume",
            PromptVariant::MatchScore => "Match Percentage",
            PromptVariant::OptimizationTips => "Optimization Tips",
        }
    }

    /// Heading shown above the generated text.
    pub fn heading(self) -> &'static str {
        match self {
            PromptVariant::DetailedReview => "Evaluation Result",
            PromptVariant::MatchScore => "Match Analysis",
            PromptVariant::OptimizationTips => "Optimization Tips",
        }
    }
}

impl fmt::Display for PromptVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for PromptVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PromptVariant::ALL
            .into_iter()
            .find(|v| v.slug() == s)
            .ok_or_else(|| format!("Unknown review variant '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_round_trips_through_from_str() {
        for variant in PromptVariant::ALL {
            assert_eq!(variant.slug().parse::<PromptVariant>().unwrap(), variant);
        }
    }

    #[test]
    fn test_unknown_slug_is_rejected() {
        let err = "cover_letter".parse::<PromptVariant>().unwrap_err();
        assert!(err.contains("cover_letter"));
    }

    #[test]
    fn test_serde_uses_slug() {
        let json = serde_json::to_string(&PromptVariant::MatchScore).unwrap();
        assert_eq!(json, r#""match_score""#);
    }

    #[test]
    fn test_match_instruction_asks_for_all_three_sections() {
        let prompt = PromptVariant::MatchScore.instruction();
        assert!(prompt.contains("1. Percentage Match"));
        assert!(prompt.contains("2. Missing Keywords"));
        assert!(prompt.contains("3. Final Thoughts"));
    }

    #[test]
    fn test_instructions_are_distinct() {
        let a = PromptVariant::DetailedReview.instruction();
        let b = PromptVariant::MatchScore.instruction();
        let c = PromptVariant::OptimizationTips.instruction();
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }
}
