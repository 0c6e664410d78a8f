use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use tracing::debug;

use assess_core::model::{AnswerSet, AnswerValue, Catalog, CoachDimension, Question};

pub const MAX_SCORE: u32 = 100;

//
// ─── SCORES ────────────────────────────────────────────────────────────────────
//

/// Overall score plus one score per COACH dimension, each in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scores {
    overall: u32,
    dimensions: [u32; 5],
}

impl Scores {
    /// Build scores, clamping every value to `MAX_SCORE`.
    #[must_use]
    pub fn new(overall: u32, dimensions: [u32; 5]) -> Self {
        Self {
            overall: overall.min(MAX_SCORE),
            dimensions: dimensions.map(|score| score.min(MAX_SCORE)),
        }
    }

    #[must_use]
    pub fn overall(&self) -> u32 {
        self.overall
    }

    #[must_use]
    pub fn get(&self, dimension: CoachDimension) -> u32 {
        self.dimensions[dimension.index()]
    }

    /// Dimension scores in COACH order.
    pub fn iter(&self) -> impl Iterator<Item = (CoachDimension, u32)> + '_ {
        CoachDimension::ALL
            .into_iter()
            .map(|dimension| (dimension, self.get(dimension)))
    }
}

//
// ─── MODE / CONFIG ─────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown scoring mode: {0} (expected `placeholder` or `weighted`)")]
pub struct ParseScoringModeError(String);

/// How result scores are produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScoringMode {
    /// Illustrative scores: answer count plus randomness. Not derived from answer values.
    #[default]
    Placeholder,
    /// Mean of normalized answer values per dimension.
    Weighted,
}

impl FromStr for ScoringMode {
    type Err = ParseScoringModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "placeholder" => Ok(Self::Placeholder),
            "weighted" => Ok(Self::Weighted),
            _ => Err(ParseScoringModeError(s.to_string())),
        }
    }
}

impl fmt::Display for ScoringMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoringMode::Placeholder => f.write_str("placeholder"),
            ScoringMode::Weighted => f.write_str("weighted"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoringConfig {
    pub mode: ScoringMode,
    /// Fixed RNG seed for the placeholder scorer; entropy when `None`.
    pub seed: Option<u64>,
}

impl ScoringConfig {
    #[must_use]
    pub fn scorer(&self) -> Box<dyn Scorer + Send> {
        match (self.mode, self.seed) {
            (ScoringMode::Placeholder, Some(seed)) => Box::new(PlaceholderScorer::seeded(seed)),
            (ScoringMode::Placeholder, None) => Box::new(PlaceholderScorer::from_os_rng()),
            (ScoringMode::Weighted, _) => Box::new(WeightedScorer),
        }
    }
}

//
// ─── SCORERS ───────────────────────────────────────────────────────────────────
//

pub trait Scorer {
    fn score(&mut self, catalog: &Catalog, answers: &AnswerSet) -> Scores;
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_score(raw: f64) -> u32 {
    raw.round().clamp(0.0, f64::from(MAX_SCORE)) as u32
}

/// Illustrative demo scoring that ignores answer values.
///
/// `base = min(100, answered / total * 85 + U[0, 15))`; each dimension is
/// `base + U[-5, 5)`.
///
/// `total` is the catalog's own question count rather than a fixed 20, so a
/// fully answered run always lands at `base >= 85` whatever the catalog size.
#[derive(Debug, Clone)]
pub struct PlaceholderScorer {
    rng: StdRng,
}

impl PlaceholderScorer {
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Scorer for PlaceholderScorer {
    #[allow(clippy::cast_precision_loss)]
    fn score(&mut self, catalog: &Catalog, answers: &AnswerSet) -> Scores {
        let total = catalog.total_questions().max(1) as f64;
        let answered = answers.len() as f64;
        let raw = answered / total * 85.0 + self.rng.random::<f64>() * 15.0;
        let base = raw.min(f64::from(MAX_SCORE));

        let dimensions = [(); 5].map(|()| {
            let spread = self.rng.random::<f64>() * 10.0 - 5.0;
            to_score(base + spread)
        });
        let scores = Scores::new(to_score(base), dimensions);
        debug!(overall = scores.overall(), "placeholder scores drawn");
        scores
    }
}

/// Scores each dimension by the mean of its answered questions' normalized values.
///
/// Dimensions with no answered question fall back to the overall score.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedScorer;

/// Answer value mapped to `0.0..=1.0`; `None` if it does not fit the question.
#[must_use]
pub fn normalized_value(question: &Question, value: &AnswerValue) -> Option<f64> {
    match value {
        AnswerValue::Scale(v) => {
            let scale = question.scale()?;
            if !scale.contains(*v) {
                return None;
            }
            if scale.max() == scale.min() {
                return Some(1.0);
            }
            let span = f64::from(scale.max() - scale.min());
            Some(f64::from(v - scale.min()) / span)
        }
        AnswerValue::Choice(option_id) => {
            let chosen = question.option(option_id)?.value;
            let best = question.options().iter().map(|o| o.value).max()?;
            if best <= 0 {
                return Some(0.0);
            }
            Some((f64::from(chosen) / f64::from(best)).clamp(0.0, 1.0))
        }
    }
}

impl Scorer for WeightedScorer {
    #[allow(clippy::cast_precision_loss)]
    fn score(&mut self, catalog: &Catalog, answers: &AnswerSet) -> Scores {
        let mut sums = [0.0_f64; 5];
        let mut counts = [0_usize; 5];
        let mut overall_sum = 0.0;
        let mut overall_count = 0_usize;

        for question in catalog.questions() {
            let Some(value) = answers.get(question.id()) else {
                continue;
            };
            let Some(normalized) = normalized_value(question, value) else {
                continue;
            };
            overall_sum += normalized;
            overall_count += 1;
            if let Some(dimension) = question.dimension() {
                sums[dimension.index()] += normalized;
                counts[dimension.index()] += 1;
            }
        }

        let overall = if overall_count == 0 {
            0
        } else {
            to_score(overall_sum / overall_count as f64 * 100.0)
        };
        let mut dimensions = [overall; 5];
        for (idx, slot) in dimensions.iter_mut().enumerate() {
            if counts[idx] > 0 {
                *slot = to_score(sums[idx] / counts[idx] as f64 * 100.0);
            }
        }
        Scores::new(overall, dimensions)
    }
}
