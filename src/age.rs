// 🎂 Age Classifier - four buckets plus an invalid marker

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeGroup {
    /// Negative age
    Invalid,
    /// 0..=12
    Child,
    /// 13..=19
    Teen,
    /// 20..=59
    Adult,
    /// 60 and over
    Senior,
}

impl AgeGroup {
    pub fn label(&self) -> &'static str {
        match self {
            AgeGroup::Invalid => "Invalid age",
            AgeGroup::Child => "Child",
            AgeGroup::Teen => "Teen",
            AgeGroup::Adult => "Adult",
            AgeGroup::Senior => "Senior",
        }
    }

    pub fn is_valid(&self) -> bool {
        *self != AgeGroup::Invalid
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn classify_age(age: i64) -> AgeGroup {
    match age {
        i64::MIN..=-1 => AgeGroup::Invalid,
        0..=12 => AgeGroup::Child,
        13..=19 => AgeGroup::Teen,
        20..=59 => AgeGroup::Adult,
        _ => AgeGroup::Senior,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(classify_age(-1).to_string(), "Invalid age");
        assert_eq!(classify_age(0), AgeGroup::Child);
        assert_eq!(classify_age(12).to_string(), "Child");
        assert_eq!(classify_age(13).to_string(), "Teen");
        assert_eq!(classify_age(19), AgeGroup::Teen);
        assert_eq!(classify_age(20), AgeGroup::Adult);
        assert_eq!(classify_age(59), AgeGroup::Adult);
        assert_eq!(classify_age(60).to_string(), "Senior");
        assert_eq!(classify_age(i64::MAX), AgeGroup::Senior);
    }

    #[test]
    fn test_validity() {
        assert!(!classify_age(i64::MIN).is_valid());
        assert!(classify_age(30).is_valid());
    }
}
