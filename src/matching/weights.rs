//! Composite score weights.
//!
//! The composite score is `round(subject*w_s + level*w_l + availability*w_a)`
//! with exact decimal arithmetic, so midpoints such as `4.5` round up
//! deterministically.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Default subject weight, in percent.
pub const DEFAULT_SUBJECT_WEIGHT_PCT: i64 = 30;
/// Default level weight, in percent.
pub const DEFAULT_LEVEL_WEIGHT_PCT: i64 = 30;
/// Default availability weight, in percent.
pub const DEFAULT_AVAILABILITY_WEIGHT_PCT: i64 = 40;

/// Weights applied to the three sub-scores.
///
/// Each weight lies in `[0, 1]` and the three sum to exactly 1, which keeps
/// the composite in `0..=100`. Deserialization enforces the same rules.
///
/// # Examples
///
/// ```
/// use tutor_match::matching::ScoreWeights;
///
/// let weights = ScoreWeights::default();
/// assert_eq!(weights.composite(100, 100, 0), 60);
/// assert_eq!(weights.composite(50, 0, 100), 55);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawScoreWeights")]
pub struct ScoreWeights {
    subject: Decimal,
    level: Decimal,
    availability: Decimal,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawScoreWeights {
    #[serde(default = "default_subject_weight")]
    subject: Decimal,
    #[serde(default = "default_level_weight")]
    level: Decimal,
    #[serde(default = "default_availability_weight")]
    availability: Decimal,
}

fn default_subject_weight() -> Decimal {
    Decimal::new(DEFAULT_SUBJECT_WEIGHT_PCT, 2)
}

fn default_level_weight() -> Decimal {
    Decimal::new(DEFAULT_LEVEL_WEIGHT_PCT, 2)
}

fn default_availability_weight() -> Decimal {
    Decimal::new(DEFAULT_AVAILABILITY_WEIGHT_PCT, 2)
}

impl TryFrom<RawScoreWeights> for ScoreWeights {
    type Error = EngineError;

    fn try_from(raw: RawScoreWeights) -> EngineResult<Self> {
        Self::new(raw.subject, raw.level, raw.availability)
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            subject: default_subject_weight(),
            level: default_level_weight(),
            availability: default_availability_weight(),
        }
    }
}

impl ScoreWeights {
    /// Creates a weight set.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidWeights`] if a weight is outside
    /// `[0, 1]` or the weights do not sum to 1.
    pub fn new(subject: Decimal, level: Decimal, availability: Decimal) -> EngineResult<Self> {
        for (name, weight) in [
            ("subject", subject),
            ("level", level),
            ("availability", availability),
        ] {
            if weight < Decimal::ZERO || weight > Decimal::ONE {
                return Err(EngineError::InvalidWeights {
                    message: format!("{} weight {} is outside [0, 1]", name, weight),
                });
            }
        }

        let total = subject + level + availability;
        if total != Decimal::ONE {
            return Err(EngineError::InvalidWeights {
                message: format!("weights sum to {}, expected 1", total.normalize()),
            });
        }

        Ok(Self {
            subject,
            level,
            availability,
        })
    }

    /// Returns the subject weight.
    pub fn subject(&self) -> Decimal {
        self.subject
    }

    /// Returns the level weight.
    pub fn level(&self) -> Decimal {
        self.level
    }

    /// Returns the availability weight.
    pub fn availability(&self) -> Decimal {
        self.availability
    }

    /// Returns the weighted composite of three sub-scores, rounded half up.
    pub fn composite(&self, subject_score: u8, level_score: u8, availability_score: u8) -> u8 {
        let weighted = self.subject * Decimal::from(subject_score)
            + self.level * Decimal::from(level_score)
            + self.availability * Decimal::from(availability_score);

        weighted
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_u8()
            .unwrap_or(0)
            .min(100)
    }
}
