// 📊 List Sorter - ascending/descending over a homogeneous list
// Static callers go through the generic `sort_list`; dynamic input (a line of
// text or a JSON value) is resolved to one concrete element type first.

use crate::error::{LabError, LabResult};
use serde_json::Value;
use std::cmp::Ordering;
use std::fmt;
use tracing::debug;

// ============================================================================
// ORDERING
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}

/// Total order over an element type.
///
/// `Ord` types use `cmp`; floats use `total_cmp` so NaN and signed zeros
/// still have a place in the result.
pub trait TotalOrd {
    fn total_order(&self, other: &Self) -> Ordering;
}

macro_rules! total_ord_via_ord {
    ($($t:ty),* $(,)?) => {
        $(impl TotalOrd for $t {
            fn total_order(&self, other: &Self) -> Ordering {
                self.cmp(other)
            }
        })*
    };
}

total_ord_via_ord!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char, bool, String, &str);

impl TotalOrd for f64 {
    fn total_order(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl TotalOrd for f32 {
    fn total_order(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

/// Return a sorted copy of `items`. Stable in both directions.
pub fn sort_list<T: TotalOrd + Clone>(items: &[T], order: SortOrder) -> Vec<T> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| order.apply(a.total_order(b)));
    sorted
}

// ============================================================================
// LINE INPUT
// ============================================================================

/// A whitespace-separated line resolved to a single element type.
///
/// All tokens must parse as integers to get `Integers`, else all as floats to
/// get `Floats`; anything else is kept as `Words`.
#[derive(Debug, Clone, PartialEq)]
pub enum ListInput {
    Integers(Vec<i64>),
    Floats(Vec<f64>),
    Words(Vec<String>),
}

impl ListInput {
    /// `None` when the line holds no tokens
    pub fn parse(line: &str) -> Option<Self> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            return None;
        }

        if let Ok(ints) = tokens.iter().map(|t| t.parse::<i64>()).collect::<Result<Vec<_>, _>>() {
            return Some(ListInput::Integers(ints));
        }
        if let Ok(floats) = tokens.iter().map(|t| t.parse::<f64>()).collect::<Result<Vec<_>, _>>() {
            return Some(ListInput::Floats(floats));
        }

        Some(ListInput::Words(tokens.into_iter().map(String::from).collect()))
    }

    pub fn sorted(&self, order: SortOrder) -> Self {
        match self {
            ListInput::Integers(v) => ListInput::Integers(sort_list(v, order)),
            ListInput::Floats(v) => ListInput::Floats(sort_list(v, order)),
            ListInput::Words(v) => ListInput::Words(sort_list(v, order)),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ListInput::Integers(v) => v.len(),
            ListInput::Floats(v) => v.len(),
            ListInput::Words(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn element_type(&self) -> &'static str {
        match self {
            ListInput::Integers(_) => "integer",
            ListInput::Floats(_) => "float",
            ListInput::Words(_) => "string",
        }
    }
}

impl fmt::Display for ListInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let items: Vec<String> = match self {
            ListInput::Integers(v) => v.iter().map(|i| i.to_string()).collect(),
            ListInput::Floats(v) => v.iter().map(|x| format!("{:?}", x)).collect(),
            ListInput::Words(v) => v.iter().map(|s| format!("'{}'", s)).collect(),
        };
        write!(f, "[{}]", items.join(", "))
    }
}

// ============================================================================
// JSON INPUT
// ============================================================================

/// Sort a JSON array of numbers or of strings.
///
/// Anything other than an array, or an array mixing element types, is an
/// `InvalidType` error.
pub fn sort_json(value: &Value, order: SortOrder) -> LabResult<Value> {
    let items = value
        .as_array()
        .ok_or_else(|| LabError::InvalidType("Input must be a list".to_string()))?;

    if items.iter().all(Value::is_number) {
        let mut sorted = items.clone();
        sorted.sort_by(|a, b| order.apply(json_number_order(a, b)));
        debug!(len = sorted.len(), "sorted numeric JSON list");
        return Ok(Value::Array(sorted));
    }

    if items.iter().all(Value::is_string) {
        let mut sorted = items.clone();
        sorted.sort_by(|a, b| order.apply(a.as_str().cmp(&b.as_str())));
        debug!(len = sorted.len(), "sorted string JSON list");
        return Ok(Value::Array(sorted));
    }

    Err(LabError::InvalidType(
        "List elements must be all numbers or all strings".to_string(),
    ))
}

// Integers compare exactly (f64 drops precision past 2^53); anything with a
// fractional part falls back to total_cmp.
fn json_number_order(a: &Value, b: &Value) -> Ordering {
    let exact = |v: &Value| v.as_i64().map(i128::from).or_else(|| v.as_u64().map(i128::from));

    match (exact(a), exact(b)) {
        (Some(a), Some(b)) => a.cmp(&b),
        _ => {
            let a = a.as_f64().unwrap_or(f64::NAN);
            let b = b.as_f64().unwrap_or(f64::NAN);
            a.total_cmp(&b)
        }
    }
}

fn words(items: &[&str]) -> ListInput {
    ListInput::Words(items.iter().map(|s| s.to_string()).collect())
}

/// Demo lists shown before the interactive part of the sort session
pub fn demo_numbers() -> ListInput {
    ListInput::Integers(vec![64, 34, 25, 12, 22, 11, 90])
}

pub fn demo_words() -> ListInput {
    words(&["banana", "apple", "cherry", "date", "blueberry"])
}

pub fn demo_mixed() -> ListInput {
    words(&["zebra", "123", "apple", "45", "cat"])
}
