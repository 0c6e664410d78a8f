use assess_core::model::CoachDimension;

use super::scoring::{MAX_SCORE, Scores};

/// Scores at or above this count as strengths; below it, growth areas.
pub const STRENGTH_THRESHOLD: u32 = 75;
/// At most this many growth opportunities are listed.
pub const MAX_GROWTH_OPPORTUNITIES: usize = 2;

//
// ─── TIER / STYLE ──────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    ConfidentFeedbackGiver,
    InProgress,
    FeedbackGrowthZone,
}

impl Tier {
    #[must_use]
    pub fn from_score(score: u32) -> Self {
        match score {
            85.. => Tier::ConfidentFeedbackGiver,
            65..=84 => Tier::InProgress,
            _ => Tier::FeedbackGrowthZone,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Tier::ConfidentFeedbackGiver => "Confident Feedback Giver",
            Tier::InProgress => "In Progress",
            Tier::FeedbackGrowthZone => "Feedback Growth Zone",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackStyle {
    EmpathicLeader,
    SupportiveChallenger,
    DiplomaticClarifier,
    DevelopingCommunicator,
}

impl FeedbackStyle {
    #[must_use]
    pub fn from_score(score: u32) -> Self {
        match score {
            85.. => FeedbackStyle::EmpathicLeader,
            70..=84 => FeedbackStyle::SupportiveChallenger,
            55..=69 => FeedbackStyle::DiplomaticClarifier,
            _ => FeedbackStyle::DevelopingCommunicator,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            FeedbackStyle::EmpathicLeader => "Empathic Leader",
            FeedbackStyle::SupportiveChallenger => "Supportive Challenger",
            FeedbackStyle::DiplomaticClarifier => "Diplomatic Clarifier",
            FeedbackStyle::DevelopingCommunicator => "Developing Communicator",
        }
    }
}

//
// ─── STRENGTHS / GROWTH ────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strength {
    pub dimension: CoachDimension,
    pub title: &'static str,
    pub description: &'static str,
}

/// Dimensions that can be called out as strengths, in display order.
const STRENGTHS: [Strength; 3] = [
    Strength {
        dimension: CoachDimension::Clarity,
        title: "Clear Communication",
        description: "You excel at delivering feedback in clear, understandable terms",
    },
    Strength {
        dimension: CoachDimension::Alignment,
        title: "Empathic Approach",
        description: "You consider others' feelings and perspectives when giving feedback",
    },
    Strength {
        dimension: CoachDimension::Harmony,
        title: "Strong Follow-through",
        description: "You consistently follow up to ensure feedback leads to improvement",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrowthOpportunity {
    pub dimension: CoachDimension,
    pub label: &'static str,
    pub score: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrowthPhase {
    pub weeks: &'static str,
    pub focus: &'static str,
    pub description: &'static str,
}

/// The fixed six-week plan shown to everyone.
pub const GROWTH_PLAN: [GrowthPhase; 3] = [
    GrowthPhase {
        weeks: "Week 1-2",
        focus: "SBI Framework Practice",
        description: "Master the Situation-Behavior-Impact structure for clear feedback delivery",
    },
    GrowthPhase {
        weeks: "Week 3-4",
        focus: "Tone Calibration",
        description: "Practice digital feedback and develop tone awareness techniques",
    },
    GrowthPhase {
        weeks: "Week 5-6",
        focus: "Conflict Navigation",
        description: "Learn to handle defensive reactions and build psychological safety",
    },
];

//
// ─── CHARTS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartPoint {
    pub label: &'static str,
    pub score: u32,
    pub full_mark: u32,
}

//
// ─── REPORT ────────────────────────────────────────────────────────────────────
//

/// Everything the results screen shows, derived from a set of scores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsReport {
    pub scores: Scores,
    pub tier: Tier,
    pub style: FeedbackStyle,
    pub strengths: Vec<Strength>,
    pub growth_opportunities: Vec<GrowthOpportunity>,
    pub answered: usize,
    pub total_questions: usize,
}

impl ResultsReport {
    #[must_use]
    pub fn from_scores(scores: Scores, answered: usize, total_questions: usize) -> Self {
        let strengths = STRENGTHS
            .iter()
            .filter(|s| scores.get(s.dimension) >= STRENGTH_THRESHOLD)
            .copied()
            .collect();

        let growth_opportunities = scores
            .iter()
            .filter(|(_, score)| *score < STRENGTH_THRESHOLD)
            .take(MAX_GROWTH_OPPORTUNITIES)
            .map(|(dimension, score)| GrowthOpportunity {
                dimension,
                label: dimension.skill_label(),
                score,
            })
            .collect();

        Self {
            tier: Tier::from_score(scores.overall()),
            style: FeedbackStyle::from_score(scores.overall()),
            scores,
            strengths,
            growth_opportunities,
            answered,
            total_questions,
        }
    }

    #[must_use]
    pub fn overall(&self) -> u32 {
        self.scores.overall()
    }

    #[must_use]
    pub fn growth_plan(&self) -> &'static [GrowthPhase] {
        &GROWTH_PLAN
    }

    /// COACH radar series, full mark 100.
    #[must_use]
    pub fn radar_series(&self) -> Vec<ChartPoint> {
        self.scores
            .iter()
            .map(|(dimension, score)| ChartPoint {
                label: dimension.radar_label(),
                score,
                full_mark: MAX_SCORE,
            })
            .collect()
    }

    /// Sub-score bar chart series.
    #[must_use]
    pub fn bar_series(&self) -> Vec<ChartPoint> {
        self.scores
            .iter()
            .map(|(dimension, score)| ChartPoint {
                label: dimension.bar_label(),
                score,
                full_mark: MAX_SCORE,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries() {
        assert_eq!(Tier::from_score(100), Tier::ConfidentFeedbackGiver);
        assert_eq!(Tier::from_score(85), Tier::ConfidentFeedbackGiver);
        assert_eq!(Tier::from_score(84), Tier::InProgress);
        assert_eq!(Tier::from_score(65), Tier::InProgress);
        assert_eq!(Tier::from_score(64), Tier::FeedbackGrowthZone);
        assert_eq!(Tier::from_score(0).label(), "Feedback Growth Zone");
    }

    #[test]
    fn style_boundaries() {
        let cases = [
            (85, FeedbackStyle::EmpathicLeader),
            (84, FeedbackStyle::SupportiveChallenger),
            (70, FeedbackStyle::SupportiveChallenger),
            (69, FeedbackStyle::DiplomaticClarifier),
            (55, FeedbackStyle::DiplomaticClarifier),
            (54, FeedbackStyle::DevelopingCommunicator),
        ];
        for (score, style) in cases {
            assert_eq!(FeedbackStyle::from_score(score), style, "score {score}");
        }
    }

    #[test]
    fn strengths_need_threshold() {
        // clarity, openness, alignment, conflict, harmony
        let report = ResultsReport::from_scores(Scores::new(80, [75, 90, 74, 60, 99]), 19, 19);
        let titles: Vec<_> = report.strengths.iter().map(|s| s.title).collect();
        assert_eq!(titles, vec!["Clear Communication", "Strong Follow-through"]);
    }

    #[test]
    fn growth_opportunities_capped_at_two_in_coach_order() {
        let report = ResultsReport::from_scores(Scores::new(50, [40, 80, 30, 20, 10]), 5, 19);
        let growth = &report.growth_opportunities;
        let labels: Vec<_> = growth.iter().map(|g| g.label).collect();
        assert_eq!(labels, vec!["Clarity", "Empathy"]);
        assert_eq!(report.growth_opportunities[1].score, 30);
        assert_eq!(report.tier, Tier::FeedbackGrowthZone);
        assert_eq!(report.style, FeedbackStyle::DevelopingCommunicator);
    }

    #[test]
    fn high_scores_have_no_growth_opportunities() {
        let report = ResultsReport::from_scores(Scores::new(95, [95; 5]), 19, 19);
        assert!(report.growth_opportunities.is_empty());
        assert_eq!(report.strengths.len(), 3);
    }

    #[test]
    fn chart_series_labels() {
        let report = ResultsReport::from_scores(Scores::new(70, [1, 2, 3, 4, 5]), 19, 19);
        let radar = report.radar_series();
        let radar: Vec<_> = radar.iter().map(|p| (p.label, p.score)).collect();
        assert_eq!(
            radar,
            vec![
                ("Clarity", 1),
                ("Openness", 2),
                ("Alignment", 3),
                ("Conflict Nav", 4),
                ("Harmony", 5),
            ]
        );
        let bars: Vec<_> = report.bar_series().iter().map(|p| p.label).collect();
        assert_eq!(
            bars,
            vec!["Clarity", "Tone", "Empathy", "Conflict", "Follow-up"]
        );
        assert_eq!(report.growth_plan().len(), 3);
    }
}
