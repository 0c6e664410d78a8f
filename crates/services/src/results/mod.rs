mod report;
mod scoring;

pub use report::{
    ChartPoint, FeedbackStyle, GROWTH_PLAN, GrowthOpportunity, GrowthPhase,
    MAX_GROWTH_OPPORTUNITIES, ResultsReport, STRENGTH_THRESHOLD, Strength, Tier,
};
pub use scoring::{
    MAX_SCORE, ParseScoringModeError, PlaceholderScorer, Scorer, Scores, ScoringConfig,
    ScoringMode, WeightedScorer, normalized_value,
};
