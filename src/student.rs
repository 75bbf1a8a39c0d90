// 🎓 Student Record - plain data holder with a labeled display

use crate::error::{LabError, LabResult};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    name: String,
    roll_no: String,
    marks: f64,
}

impl Student {
    pub fn new(name: impl Into<String>, roll_no: impl Into<String>, marks: f64) -> Self {
        Student {
            name: name.into(),
            roll_no: roll_no.into(),
            marks,
        }
    }

    /// Build from raw text fields; marks must parse as a float
    pub fn parse(name: &str, roll_no: &str, marks: &str) -> LabResult<Self> {
        let marks = marks
            .trim()
            .parse::<f64>()
            .map_err(|_| LabError::not_a_number(marks.trim()))?;
        Ok(Student::new(name.trim(), roll_no.trim(), marks))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn roll_no(&self) -> &str {
        &self.roll_no
    }

    pub fn marks(&self) -> f64 {
        self.marks
    }

    /// Labeled, one field per line
    pub fn display(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Details of the student:")?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Roll No: {}", self.roll_no)?;
        write!(f, "Marks: {:?}", self.marks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let student = Student::new("Asha", "CS-042", 87.5);
        assert_eq!(
            student.display(),
            "Details of the student:\nName: Asha\nRoll No: CS-042\nMarks: 87.5"
        );
    }

    #[test]
    fn test_whole_marks_keep_decimal() {
        let student = Student::new("Ravi", "7", 90.0);
        assert!(student.display().ends_with("Marks: 90.0"));
    }

    #[test]
    fn test_parse() {
        let student = Student::parse(" Asha ", "CS-042", " 87.5 ").unwrap();
        assert_eq!(student.name(), "Asha");
        assert_eq!(student.roll_no(), "CS-042");
        assert_eq!(student.marks(), 87.5);
    }

    #[test]
    fn test_parse_rejects_non_numeric_marks() {
        let err = Student::parse("Asha", "CS-042", "eighty").unwrap_err();
        assert_eq!(err, LabError::not_a_number("eighty"));
    }
}
