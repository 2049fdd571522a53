use crate::Record;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeSet;

/// Tag set fed by [`Employee::skills`].
pub const SKILLS: &str = "skills";

/// One employee, grouped by department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Employee id
    pub id: u32,
    /// Full name
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Department the employee is assigned to
    pub department: String,
    /// Skills held by the employee
    pub skills: BTreeSet<String>,
}

impl Employee {
    /// Build an employee from borrowed parts.
    pub fn new<I, S>(id: u32, name: &str, age: u32, department: &str, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id,
            name: name.to_string(),
            age,
            department: department.to_string(),
            skills: crate::tag_set(skills),
        }
    }
}

impl Record for Employee {
    type Key = u32;

    const KIND: &'static str = "employee";

    fn key(&self) -> &u32 {
        &self.id
    }

    fn label(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.name.as_str())
    }

    fn group(&self) -> Option<&str> {
        Some(self.department.as_str())
    }

    fn tags(&self) -> Vec<(&'static str, &str)> {
        self.skills.iter().map(|skill| (SKILLS, skill.as_str())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_contributes_every_skill() {
        let employee = Employee::new(1, "Alice", 30, "HR", ["Training", "Recruitment"]);

        assert_eq!(employee.group(), Some("HR"));
        assert_eq!(employee.label(), "Alice");
        assert_eq!(
            employee.tags(),
            vec![(SKILLS, "Recruitment"), (SKILLS, "Training")]
        );
    }

    #[test]
    fn test_employee_json_shape() {
        let employee = Employee::new(2, "Bob", 25, "IT", ["Python"]);
        let json = serde_json::to_value(&employee).unwrap();

        assert_eq!(json["department"], "IT");
        assert_eq!(json["skills"][0], "Python");
    }
}
