//! Core domain types for the performance utilities.
//!
//! This module defines the fundamental types used throughout the system:
//! - Scalar quantities for strength estimation (reps, loads, intensities)
//! - The nested training-log tree (items, contents, traces)

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ============================================================================
// Strength Estimation Scalars
// ============================================================================

/// A number of repetitions performed. Whole numbers in practice for actual
/// sets; may be fractional when derived analytically.
pub type Quantity = f64;

/// Resistance (weight) used or estimated, in caller-defined units. The
/// system is unit-agnostic; consistency is the caller's responsibility.
pub type Load = f64;

/// Load expressed as a fraction of one-rep max, in (0, 1].
pub type Intensity = f64;

/// An analytic estimate of repetitions achievable at a given intensity.
/// Unlike [`Quantity`] this is not necessarily a realizable integer rep
/// count, and may be NaN for out-of-domain intensity.
pub type PartialQuantity = f64;

// ============================================================================
// Training Log Tree
// ============================================================================

/// A single training-log record.
///
/// Records are open-ended mappings of string keys to JSON values; the
/// recognized fields (`time`, `item_id`) are looked up dynamically rather
/// than enforced by the type. Nested child records live in the optional
/// `contents` sequence, to arbitrary depth.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LogItem {
    /// Ordered child records. When present this is always a sequence;
    /// absence simply means the item has no children.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contents: Option<Vec<LogItem>>,

    /// All remaining fields of the record, in document form.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl LogItem {
    /// Look up an arbitrary field of the record
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// The identifying numeric field, if present and integral
    pub fn item_id(&self) -> Option<i64> {
        self.field("item_id").and_then(Value::as_i64)
    }
}

/// The root ordered sequence of log records.
///
/// The tree is assumed acyclic by contract; the owned representation cannot
/// express a cycle.
pub type Log = Vec<LogItem>;

/// A path locating an item within a nested log.
///
/// The first element indexes into the root sequence; each subsequent element
/// indexes into the previous item's `contents` sequence.
pub type Trace = Vec<usize>;
