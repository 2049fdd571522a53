//! Employee management
//!
//! Employees are the one entity kind that keeps a real group index: the
//! department list owns a bucket per department, and a bucket can exist with
//! nobody in it (Marketing in the seed data).

use crate::catalog::{EntityCatalog, reverse_of};
use crate::error::{CatalogError, CatalogResult};
use roster_types::Employee;
use roster_types::employee::SKILLS;
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::{info, warn};

/// Skills every team already covers; excluded by [`EmployeeManagement::find_unique_skills`]
pub const BASELINE_SKILLS: [&str; 2] = ["Python", "Java"];

fn seed_employees() -> Vec<Employee> {
    vec![
        Employee::new(1, "Alice", 30, "HR", ["Recruitment", "Training"]),
        Employee::new(2, "Bob", 25, "IT", ["Python", "Networking"]),
        Employee::new(3, "Charlie", 28, "Finance", ["Accounting", "Excel"]),
        Employee::new(4, "Diana", 35, "IT", ["Java", "Security"]),
        Employee::new(5, "Eve", 40, "HR", ["Recruitment", "Employee Relations"]),
    ]
}

fn seed_departments() -> Vec<String> {
    ["HR", "IT", "Finance", "Marketing"].into_iter().map(String::from).collect()
}

/// Employees, their departments and the company skill list
#[derive(Debug, Clone, Serialize)]
pub struct EmployeeManagement {
    employees: EntityCatalog<Employee>,
    departments: Vec<String>,
}

impl Default for EmployeeManagement {
    fn default() -> Self {
        Self::new()
    }
}

impl EmployeeManagement {
    /// Seeded with five employees across HR, IT and Finance
    pub fn new() -> Self {
        let departments = seed_departments();
        Self::with_records(departments, seed_employees())
    }

    /// Start from an arbitrary department list and employee set
    pub fn with_records(departments: Vec<String>, employees: Vec<Employee>) -> Self {
        let employees = EntityCatalog::with_groups(departments.iter().cloned(), employees);
        Self { employees, departments }
    }

    pub fn catalog(&self) -> &EntityCatalog<Employee> {
        &self.employees
    }

    pub fn departments(&self) -> &[String] {
        &self.departments
    }

    pub fn find_employee_index(&self, id: u32) -> Option<usize> {
        self.employees.find_index(&id)
    }

    pub fn sort_employees_by_age(&self) -> Vec<Employee> {
        self.employees.sorted_by_key(|e| e.age)
    }

    pub fn reverse_departments(&self) -> Vec<String> {
        reverse_of(&self.departments)
    }

    /// Add a department with an empty assignment bucket
    pub fn append_department(&mut self, department: &str) -> CatalogResult<()> {
        if self.departments.iter().any(|d| d == department) {
            warn!(department, "department already exists");
            return Err(CatalogError::already_exists("department", department));
        }
        self.departments.push(department.to_string());
        self.employees.register_group(department);
        info!(department, "department added");
        Ok(())
    }

    /// Drop a department and its assignment bucket.
    ///
    /// Employees assigned to it keep their department field.
    pub fn remove_department(&mut self, department: &str) -> CatalogResult<()> {
        let Some(pos) = self.departments.iter().position(|d| d == department) else {
            warn!(department, "department not found");
            return Err(CatalogError::not_found("department", department));
        };
        self.departments.remove(pos);
        self.employees.remove_group(department);
        info!(department, "department removed");
        Ok(())
    }

    /// `(max, min)` employee age
    pub fn find_max_min_age(&self) -> CatalogResult<(u32, u32)> {
        self.employees.min_max_by(|e| e.age)
    }

    pub fn add_skill(&mut self, skill: &str) {
        self.employees.add_tag(SKILLS, skill);
        info!(skill, "skill added");
    }

    pub fn remove_skill(&mut self, skill: &str) {
        self.employees.remove_tag(SKILLS, skill);
        info!(skill, "skill removed");
    }

    pub fn list_all_skills(&self) -> Vec<&str> {
        self.employees.list_tags(SKILLS)
    }

    /// Employees currently holding `skill`, whatever the skill list says
    pub fn count_skill_occurrences(&self, skill: &str) -> usize {
        self.employees.count_tagged(SKILLS, skill)
    }

    pub fn find_common_skills<I, S>(&self, other: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.employees.intersect_tags(SKILLS, other)
    }

    pub fn find_unique_skills(&self) -> BTreeSet<String> {
        self.employees.difference_tags(SKILLS, BASELINE_SKILLS)
    }

    /// Empty the skill list; employee records keep their skills
    pub fn clear_skills(&mut self) {
        self.employees.clear_tags(SKILLS);
        info!("all skills cleared");
    }

    pub fn add_employee<I, S>(
        &mut self,
        id: u32,
        name: &str,
        age: u32,
        department: &str,
        skills: I,
    ) -> CatalogResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let employee = Employee::new(id, name, age, department, skills);
        match self.employees.add(employee) {
            Ok(()) => {
                info!(id, name, "employee added");
                Ok(())
            }
            Err(err) => {
                warn!(id, "{err}");
                Err(err)
            }
        }
    }

    pub fn remove_employee(&mut self, id: u32) -> CatalogResult<Employee> {
        let removed = self.employees.remove(&id).inspect_err(|err| warn!(id, "{err}"))?;
        info!(id, name = %removed.name, "employee removed");
        Ok(removed)
    }

    pub fn get_employee_details(&self, id: u32) -> Option<&Employee> {
        self.employees.get(&id)
    }

    pub fn list_employees_by_department(&self, department: &str) -> Vec<u32> {
        self.employees.list_by_group(department)
    }

    pub fn count_employees_by_department(&self, department: &str) -> usize {
        self.employees.count_by_group(department)
    }

    /// Replace an employee's details, moving them between departments if needed
    pub fn update_employee_details(&mut self, id: u32, details: Employee) -> CatalogResult<()> {
        self.employees.update(&id, details).inspect_err(|err| warn!(id, "{err}"))?;
        info!(id, "employee details updated");
        Ok(())
    }

    /// Merge another set of employees; ids already on file are kept as they are
    pub fn merge_employee_catalogs(&mut self, other: impl IntoIterator<Item = Employee>) -> usize {
        let inserted = self.employees.merge(other);
        info!(inserted, "employee catalogs merged");
        inserted
    }

    pub fn get_all_employee_ids(&self) -> Vec<u32> {
        self.employees.keys()
    }

    /// Remove every employee; departments and skills stay
    pub fn clear_employee_catalog(&mut self) {
        self.employees.clear();
        info!("employee catalog cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frank_joins_marketing() {
        let mut mgmt = EmployeeManagement::new();

        assert_eq!(mgmt.count_employees_by_department("Marketing"), 0);
        mgmt.add_employee(6, "Frank", 29, "Marketing", ["SEO", "Content Writing"]).unwrap();

        assert_eq!(mgmt.count_employees_by_department("Marketing"), 1);
        assert_eq!(mgmt.list_employees_by_department("Marketing"), vec![6]);
        assert!(mgmt.list_all_skills().contains(&"SEO"));
    }

    #[test]
    fn test_remove_employee_then_lookup_misses() {
        let mut mgmt = EmployeeManagement::new();

        let removed = mgmt.remove_employee(3).unwrap();
        assert_eq!(removed.name, "Charlie");
        assert!(mgmt.get_employee_details(3).is_none());
        assert_eq!(mgmt.count_employees_by_department("Finance"), 0);
        assert_eq!(mgmt.find_employee_index(3), None);
    }

    #[test]
    fn test_department_lifecycle() {
        let mut mgmt = EmployeeManagement::new();

        mgmt.append_department("Legal").unwrap();
        assert_eq!(
            mgmt.append_department("Legal"),
            Err(CatalogError::already_exists("department", "Legal"))
        );
        assert_eq!(mgmt.reverse_departments()[0], "Legal");

        mgmt.remove_department("Marketing").unwrap();
        assert!(mgmt.remove_department("Marketing").is_err());
        assert!(!mgmt.departments().iter().any(|d| d == "Marketing"));
    }

    #[test]
    fn test_clearing_skills_leaves_records_alone() {
        let mut mgmt = EmployeeManagement::new();

        mgmt.clear_skills();

        assert!(mgmt.list_all_skills().is_empty());
        assert_eq!(mgmt.count_skill_occurrences("Python"), 1);
    }
}
