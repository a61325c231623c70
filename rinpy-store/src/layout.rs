//! Panel layout persistence
//!
//! Two resizable splits remember their sizes across sessions: the vertical
//! code/output split under `ver_sizes` and the horizontal explorer/editor
//! split under `hor_sizes`. Each value is a JSON array of two numbers.
//! Anything absent or unreadable falls back to the defaults; loading never
//! fails.

use rinpy_config::Direction;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::fmt;
use tracing::{debug, warn};

use crate::error::{StoreError, StoreResult};
use crate::KeyValueStore;

const TARGET: &str = "rinpy::layout";

/// Sizes of the two panels of one split, in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct PanelSizes([f64; 2]);

impl PanelSizes {
    /// Both values must be finite and non-negative
    pub fn new(first: f64, second: f64) -> Option<Self> {
        let valid = |v: f64| v.is_finite() && v >= 0.0;
        (valid(first) && valid(second)).then_some(Self([first, second]))
    }

    /// Defaults of a split direction
    pub fn default_for(direction: Direction) -> Self {
        Self(direction.default_sizes())
    }

    pub fn first(&self) -> f64 {
        self.0[0]
    }

    pub fn second(&self) -> f64 {
        self.0[1]
    }

    pub fn as_array(&self) -> [f64; 2] {
        self.0
    }

    /// Parse a stored value
    pub fn from_json(value: &str) -> Result<Self, String> {
        serde_json::from_str(value).map_err(|e| e.to_string())
    }

    /// Encode for storage; whole numbers are written without a fraction
    pub fn to_json(&self) -> String {
        let numbers: Vec<Value> = self.0.iter().map(|&v| number(v)).collect();
        Value::Array(numbers).to_string()
    }
}

fn number(v: f64) -> Value {
    if v.fract() == 0.0 && v.abs() < i64::MAX as f64 {
        Value::Number(Number::from(v as i64))
    } else {
        Number::from_f64(v).map_or(Value::Null, Value::Number)
    }
}

impl TryFrom<Vec<f64>> for PanelSizes {
    type Error = String;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        match values.as_slice() {
            [first, second] => PanelSizes::new(*first, *second)
                .ok_or_else(|| format!("sizes must be finite and non-negative, got {values:?}")),
            _ => Err(format!("expected 2 sizes, got {}", values.len())),
        }
    }
}

impl From<PanelSizes> for Vec<f64> {
    fn from(sizes: PanelSizes) -> Self {
        sizes.0.to_vec()
    }
}

impl fmt::Display for PanelSizes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.0[0], self.0[1])
    }
}

/// Effective sizes of both splits
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub vertical: PanelSizes,
    pub horizontal: PanelSizes,
}

impl Layout {
    pub fn sizes(&self, direction: Direction) -> PanelSizes {
        match direction {
            Direction::Vertical => self.vertical,
            Direction::Horizontal => self.horizontal,
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            vertical: PanelSizes::default_for(Direction::Vertical),
            horizontal: PanelSizes::default_for(Direction::Horizontal),
        }
    }
}

/// Load one split's sizes, falling back to its defaults
pub fn load_sizes(store: &dyn KeyValueStore, direction: Direction) -> PanelSizes {
    let key = direction.storage_key();
    let fallback = PanelSizes::default_for(direction);

    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!(target: TARGET, key, "No saved sizes, using defaults");
            return fallback;
        }
        Err(e) => {
            warn!(target: TARGET, key, error = %e, "Layout store unreadable, using defaults");
            return fallback;
        }
    };

    match PanelSizes::from_json(&raw) {
        Ok(sizes) => {
            debug!(target: TARGET, key, %sizes, "Loaded sizes");
            sizes
        }
        Err(reason) => {
            warn!(
                target: TARGET,
                key,
                value = %raw,
                reason = %reason,
                "Corrupt saved sizes, using defaults"
            );
            fallback
        }
    }
}

/// Load both splits
pub fn load_layout(store: &dyn KeyValueStore) -> Layout {
    Layout {
        vertical: load_sizes(store, Direction::Vertical),
        horizontal: load_sizes(store, Direction::Horizontal),
    }
}

/// Persist one split's sizes
pub fn save_sizes(
    store: &dyn KeyValueStore,
    direction: Direction,
    sizes: PanelSizes,
) -> StoreResult<()> {
    let key = direction.storage_key();
    store.set(key, &sizes.to_json())?;
    debug!(target: TARGET, key, %sizes, "Saved sizes");
    Ok(())
}

/// Drag-end handler: validate the reported sizes and persist them
pub fn on_drag_end(
    store: &dyn KeyValueStore,
    direction: Direction,
    sizes: &[f64],
) -> StoreResult<PanelSizes> {
    let sizes = PanelSizes::try_from(sizes.to_vec())
        .map_err(|_| StoreError::InvalidSizes(sizes.to_vec()))?;
    save_sizes(store, direction, sizes)?;
    Ok(sizes)
}

/// Forget saved sizes; the next load yields the defaults
pub fn reset_layout(store: &dyn KeyValueStore, direction: Option<Direction>) -> StoreResult<()> {
    let directions = match direction {
        Some(direction) => vec![direction],
        None => vec![Direction::Vertical, Direction::Horizontal],
    };
    for direction in directions {
        store.remove(direction.storage_key())?;
        debug!(target: TARGET, key = direction.storage_key(), "Reset sizes");
    }
    Ok(())
}
