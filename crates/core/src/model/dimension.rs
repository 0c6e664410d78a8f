use serde::{Deserialize, Serialize};

/// The five COACH dimensions used to label result scores.
///
/// Order matters: charts, strengths and growth opportunities all walk
/// dimensions in `CoachDimension::ALL` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CoachDimension {
    Clarity,
    Openness,
    Alignment,
    ConflictNavigation,
    Harmony,
}

impl CoachDimension {
    pub const ALL: [CoachDimension; 5] = [
        CoachDimension::Clarity,
        CoachDimension::Openness,
        CoachDimension::Alignment,
        CoachDimension::ConflictNavigation,
        CoachDimension::Harmony,
    ];

    /// Position of this dimension in `ALL`.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Axis label on the COACH radar chart.
    #[must_use]
    pub fn radar_label(self) -> &'static str {
        match self {
            CoachDimension::Clarity => "Clarity",
            CoachDimension::Openness => "Openness",
            CoachDimension::Alignment => "Alignment",
            CoachDimension::ConflictNavigation => "Conflict Nav",
            CoachDimension::Harmony => "Harmony",
        }
    }

    /// Short label on the sub-score bar chart.
    #[must_use]
    pub fn bar_label(self) -> &'static str {
        match self {
            CoachDimension::Clarity => "Clarity",
            CoachDimension::Openness => "Tone",
            CoachDimension::Alignment => "Empathy",
            CoachDimension::ConflictNavigation => "Conflict",
            CoachDimension::Harmony => "Follow-up",
        }
    }

    /// Skill name shown in the growth opportunities list.
    #[must_use]
    pub fn skill_label(self) -> &'static str {
        match self {
            CoachDimension::Clarity => "Clarity",
            CoachDimension::Openness => "Tone Awareness",
            CoachDimension::Alignment => "Empathy",
            CoachDimension::ConflictNavigation => "Conflict Navigation",
            CoachDimension::Harmony => "Follow Through",
        }
    }
}
