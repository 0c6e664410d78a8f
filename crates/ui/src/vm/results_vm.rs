use services::results::{ChartPoint, ResultsReport};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartBarVm {
    pub label: &'static str,
    pub score: u32,
    /// Inline style for the bar width, relative to the full mark.
    pub width_style: String,
}

impl From<&ChartPoint> for ChartBarVm {
    fn from(point: &ChartPoint) -> Self {
        let width = if point.full_mark == 0 {
            0
        } else {
            point.score.saturating_mul(100) / point.full_mark
        };
        Self {
            label: point.label,
            score: point.score,
            width_style: format!("width: {width}%"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StrengthVm {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrowthAreaVm {
    pub label: &'static str,
    pub score_label: String,
    pub width_style: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlanPhaseVm {
    pub weeks: &'static str,
    pub focus: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub overall: u32,
    pub tier_label: &'static str,
    pub style_label: &'static str,
    pub coach: Vec<ChartBarVm>,
    pub breakdown: Vec<ChartBarVm>,
    pub strengths: Vec<StrengthVm>,
    pub growth_areas: Vec<GrowthAreaVm>,
    pub plan: Vec<PlanPhaseVm>,
}

fn chart_bars(points: &[ChartPoint]) -> Vec<ChartBarVm> {
    points.iter().map(ChartBarVm::from).collect()
}

#[must_use]
pub fn map_results(report: &ResultsReport) -> ResultsVm {
    ResultsVm {
        overall: report.overall(),
        tier_label: report.tier.label(),
        style_label: report.style.label(),
        coach: chart_bars(&report.radar_series()),
        breakdown: chart_bars(&report.bar_series()),
        strengths: report
            .strengths
            .iter()
            .map(|strength| StrengthVm {
                title: strength.title,
                description: strength.description,
            })
            .collect(),
        growth_areas: report
            .growth_opportunities
            .iter()
            .map(|area| GrowthAreaVm {
                label: area.label,
                score_label: format!("{}/100", area.score),
                width_style: format!("width: {}%", area.score),
            })
            .collect(),
        plan: report
            .growth_plan()
            .iter()
            .map(|phase| PlanPhaseVm {
                weeks: phase.weeks,
                focus: phase.focus,
                description: phase.description,
            })
            .collect(),
    }
}
