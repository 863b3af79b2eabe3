//! Published load/repetition estimators behind one interface.
//!
//! Each variant models a different empirical decay curve of strength vs.
//! fatigue. Exposing them as one enum lets callers select and compare
//! estimators interchangeably without branching on type.
//!
//! The three operations are mutually inverse for a given variant:
//! `max(r, load(r, m))` recovers `m`, and `load(reps(i), m) / m` recovers
//! `i` inside the variant's domain.
//!
//! Formulas are permissive by design: inputs are not validated, and
//! out-of-domain arguments yield whatever IEEE arithmetic produces (inf or
//! NaN) rather than an error. Callers wanting strict validation can wrap
//! these methods using the domain notes on each variant.

use crate::{Error, Intensity, Load, PartialQuantity, Quantity};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A strength-estimation formula variant.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Formula {
    /// Singular at reps = 37; linear in reps.
    Brzycki,
    /// Singular at reps = -30; exact at reps = 1.
    Epley,
    /// Singular at reps ≈ 37.922; linear in reps.
    McGlothin,
    /// Power curve; exact at reps = 1, infinite load estimate at reps = 0.
    Lombardi,
    /// Exponential decay; `reps` defined only for intensity > 261/500.
    Mayhew,
    /// Singular at reps = -40; exact at reps = 1.
    OConner,
    /// Exponential decay; `reps` defined only for intensity > 244/500.
    Wathan,
}

impl Formula {
    /// All variants, in publication-table order
    pub const ALL: [Formula; 7] = [
        Formula::Brzycki,
        Formula::Epley,
        Formula::McGlothin,
        Formula::Lombardi,
        Formula::Mayhew,
        Formula::OConner,
        Formula::Wathan,
    ];

    /// Load expected to be liftable for `reps` repetitions given a known
    /// one-rep max.
    pub fn load(self, reps: Quantity, max: Load) -> Load {
        match self {
            Formula::Brzycki => max * (37.0 - reps) / 36.0,
            Formula::Epley => max / (1.0 + reps / 30.0),
            Formula::McGlothin => max * (101.3 - 2.67123 * reps) / 100.0,
            Formula::Lombardi => max / reps.powf(0.1),
            Formula::Mayhew => max * (52.2 + 41.9 * (-0.055 * reps).exp()) / 100.0,
            Formula::OConner => max / (1.0 + reps / 40.0),
            Formula::Wathan => max * (48.8 + 53.8 * (-0.075 * reps).exp()) / 100.0,
        }
    }

    /// Estimated one-rep max given `reps` repetitions observed at `load`.
    ///
    /// Algebraic inverse of [`Formula::load`] with respect to the max.
    pub fn max(self, reps: Quantity, load: Load) -> Load {
        match self {
            Formula::Brzycki => load * 36.0 / (37.0 - reps),
            Formula::Epley => load * (1.0 + reps / 30.0),
            Formula::McGlothin => 100.0 * load / (101.3 - 2.67123 * reps),
            Formula::Lombardi => reps.powf(0.1) * load,
            Formula::Mayhew => 100.0 * load / (52.2 + 41.9 * (-0.055 * reps).exp()),
            Formula::OConner => load * (1.0 + reps / 40.0),
            Formula::Wathan => 100.0 * load / (48.8 + 53.8 * (-0.075 * reps).exp()),
        }
    }

    /// Estimated repetitions achievable at `intensity` (fraction of 1RM).
    pub fn reps(self, intensity: Intensity) -> PartialQuantity {
        match self {
            Formula::Brzycki => 37.0 - intensity * 36.0,
            Formula::Epley => 30.0 * (1.0 / intensity - 1.0),
            Formula::McGlothin => (101.3 - 100.0 * intensity) / 2.67123,
            Formula::Lombardi => intensity.powf(-10.0),
            Formula::Mayhew => {
                200.0 / 11.0 * (419.0 / (2.0 * (500.0 * intensity - 261.0))).ln()
            }
            Formula::OConner => 40.0 * (1.0 / intensity - 1.0),
            Formula::Wathan => 40.0 / 3.0 * (269.0 / (500.0 * intensity - 244.0)).ln(),
        }
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Formula::Brzycki => "brzycki",
            Formula::Epley => "epley",
            Formula::McGlothin => "mcglothin",
            Formula::Lombardi => "lombardi",
            Formula::Mayhew => "mayhew",
            Formula::OConner => "oconner",
            Formula::Wathan => "wathan",
        };
        f.write_str(name)
    }
}

impl FromStr for Formula {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "brzycki" => Ok(Formula::Brzycki),
            "epley" => Ok(Formula::Epley),
            "mcglothin" => Ok(Formula::McGlothin),
            "lombardi" => Ok(Formula::Lombardi),
            "mayhew" => Ok(Formula::Mayhew),
            "oconner" | "o_conner" | "o'conner" => Ok(Formula::OConner),
            "wathan" => Ok(Formula::Wathan),
            _ => Err(Error::UnknownFormula(s.to_string())),
        }
    }
}
