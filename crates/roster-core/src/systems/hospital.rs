//! Hospital management: patients, doctors and appointments

use crate::catalog::EntityCatalog;
use crate::error::CatalogResult;
use anyhow::Context;
use chrono::NaiveDate;
use roster_types::hospital::{DEPARTMENTS, SPECIALTIES};
use roster_types::{Appointment, Doctor, Patient, Record};
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::{info, warn};

/// Specialties the hospital was founded with
pub const BASELINE_SPECIALTIES: [&str; 5] =
    ["Cardiology", "Neurology", "Orthopedics", "Pediatrics", "General Medicine"];

fn seed_patients() -> Vec<Patient> {
    vec![
        Patient::new(1, "Alice", 30, "Female", ["Diabetes", "Hypertension"]),
        Patient::new(2, "Bob", 45, "Male", ["Asthma"]),
        Patient::new(3, "Charlie", 25, "Male", ["Allergy"]),
        Patient::new(4, "Diana", 35, "Female", ["Thyroid"]),
        Patient::new(5, "Eve", 50, "Female", ["Arthritis"]),
    ]
}

fn seed_doctors() -> Vec<Doctor> {
    vec![
        Doctor::new(101, "Dr. Smith", 50, "Cardiology", "Cardiology"),
        Doctor::new(102, "Dr. Johnson", 40, "Neurology", "Neurology"),
        Doctor::new(103, "Dr. Brown", 45, "Orthopedics", "Orthopedics"),
        Doctor::new(104, "Dr. White", 35, "Pediatrics", "Pediatrics"),
        Doctor::new(105, "Dr. Green", 55, "General Medicine", "General Medicine"),
    ]
}

fn seed_appointments() -> anyhow::Result<Vec<Appointment>> {
    [
        (201, 1, 101, "2023-10-01", "10:00 AM"),
        (202, 2, 102, "2023-10-02", "11:00 AM"),
        (203, 3, 103, "2023-10-03", "12:00 PM"),
        (204, 4, 104, "2023-10-04", "01:00 PM"),
        (205, 5, 105, "2023-10-05", "02:00 PM"),
    ]
    .into_iter()
    .map(|(id, patient, doctor, date, time)| {
        Appointment::parse(id, patient, doctor, date, time)
            .with_context(|| format!("invalid seed appointment {id}"))
    })
    .collect()
}

/// Log the outcome of a mutation the way every hospital operation reports it
fn report<T, R: Record>(result: CatalogResult<T>, key: &R::Key, action: &str) -> CatalogResult<T> {
    match &result {
        Ok(_) => info!(kind = R::KIND, key = %key, "{} {action}", R::KIND),
        Err(err) => warn!(kind = R::KIND, category = err.category(), "{err}"),
    }
    result
}

/// Patients, doctors and the appointment schedule
#[derive(Debug, Clone, Serialize)]
pub struct HospitalManagement {
    patients: EntityCatalog<Patient>,
    doctors: EntityCatalog<Doctor>,
    appointments: EntityCatalog<Appointment>,
}

impl HospitalManagement {
    /// Seeded with five patients, five doctors and one appointment per pair
    ///
    /// # Errors
    ///
    /// Fails only if the built-in appointment dates stop parsing.
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self::with_records(seed_patients(), seed_doctors(), seed_appointments()?))
    }

    pub fn with_records(
        patients: Vec<Patient>,
        doctors: Vec<Doctor>,
        appointments: Vec<Appointment>,
    ) -> Self {
        Self {
            patients: EntityCatalog::new(patients),
            doctors: EntityCatalog::new(doctors),
            appointments: EntityCatalog::new(appointments),
        }
    }

    pub fn patients(&self) -> &EntityCatalog<Patient> {
        &self.patients
    }

    pub fn doctors(&self) -> &EntityCatalog<Doctor> {
        &self.doctors
    }

    pub fn appointments(&self) -> &EntityCatalog<Appointment> {
        &self.appointments
    }

    pub fn find_patient_index(&self, id: u32) -> Option<usize> {
        self.patients.find_index(&id)
    }

    pub fn find_doctor_index(&self, id: u32) -> Option<usize> {
        self.doctors.find_index(&id)
    }

    pub fn sort_patients_by_age(&self) -> Vec<Patient> {
        self.patients.sorted_by_key(|p| p.age)
    }

    pub fn sort_doctors_by_age(&self) -> Vec<Doctor> {
        self.doctors.sorted_by_key(|d| d.age)
    }

    pub fn reverse_appointments(&self) -> Vec<Appointment> {
        self.appointments.reversed()
    }

    pub fn append_appointment(&mut self, appointment: Appointment) -> CatalogResult<()> {
        let id = appointment.id;
        report::<_, Appointment>(self.appointments.add(appointment), &id, "added")
    }

    pub fn remove_appointment(&mut self, id: u32) -> CatalogResult<Appointment> {
        report::<_, Appointment>(self.appointments.remove(&id), &id, "removed")
    }

    /// Appointments scheduled on `date`, in booking order
    pub fn appointments_on(&self, date: NaiveDate) -> Vec<&Appointment> {
        self.appointments.iter().filter(|a| a.date == date).collect()
    }

    pub fn find_max_min_age_patients(&self) -> CatalogResult<(u32, u32)> {
        self.patients.min_max_by(|p| p.age)
    }

    pub fn find_max_min_age_doctors(&self) -> CatalogResult<(u32, u32)> {
        self.doctors.min_max_by(|d| d.age)
    }

    pub fn count_medical_history_occurrences(&self, condition: &str) -> usize {
        self.patients.count_where(|p| p.medical_history.contains(condition))
    }

    pub fn add_specialty(&mut self, specialty: &str) {
        self.doctors.add_tag(SPECIALTIES, specialty);
        info!(specialty, "specialty added");
    }

    pub fn remove_specialty(&mut self, specialty: &str) {
        self.doctors.remove_tag(SPECIALTIES, specialty);
        info!(specialty, "specialty removed");
    }

    pub fn list_all_specialties(&self) -> Vec<&str> {
        self.doctors.list_tags(SPECIALTIES)
    }

    pub fn add_department(&mut self, department: &str) {
        self.doctors.add_tag(DEPARTMENTS, department);
        info!(department, "department added");
    }

    pub fn remove_department(&mut self, department: &str) {
        self.doctors.remove_tag(DEPARTMENTS, department);
        info!(department, "department removed");
    }

    pub fn list_all_departments(&self) -> Vec<&str> {
        self.doctors.list_tags(DEPARTMENTS)
    }

    pub fn find_common_specialties<I, S>(&self, other: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.doctors.intersect_tags(SPECIALTIES, other)
    }

    pub fn find_unique_specialties(&self) -> BTreeSet<String> {
        self.doctors.difference_tags(SPECIALTIES, BASELINE_SPECIALTIES)
    }

    pub fn clear_specialties(&mut self) {
        self.doctors.clear_tags(SPECIALTIES);
        info!("all specialties cleared");
    }

    pub fn add_patient(&mut self, patient: Patient) -> CatalogResult<()> {
        let id = patient.id;
        report::<_, Patient>(self.patients.add(patient), &id, "added")
    }

    pub fn remove_patient(&mut self, id: u32) -> CatalogResult<Patient> {
        report::<_, Patient>(self.patients.remove(&id), &id, "removed")
    }

    pub fn get_patient_details(&self, id: u32) -> Option<&Patient> {
        self.patients.get(&id)
    }

    pub fn list_patients_by_gender(&self, gender: &str) -> Vec<&Patient> {
        self.patients.records_by_group(gender)
    }

    pub fn count_patients_by_gender(&self, gender: &str) -> usize {
        self.patients.count_by_group(gender)
    }

    pub fn add_doctor(&mut self, doctor: Doctor) -> CatalogResult<()> {
        let id = doctor.id;
        report::<_, Doctor>(self.doctors.add(doctor), &id, "added")
    }

    pub fn remove_doctor(&mut self, id: u32) -> CatalogResult<Doctor> {
        report::<_, Doctor>(self.doctors.remove(&id), &id, "removed")
    }

    pub fn get_doctor_details(&self, id: u32) -> Option<&Doctor> {
        self.doctors.get(&id)
    }

    pub fn list_doctors_by_department(&self, department: &str) -> Vec<&Doctor> {
        self.doctors.records_by_group(department)
    }

    pub fn count_doctors_by_department(&self, department: &str) -> usize {
        self.doctors.count_by_group(department)
    }

    pub fn update_patient_details(&mut self, id: u32, details: Patient) -> CatalogResult<Patient> {
        report::<_, Patient>(self.patients.update(&id, details), &id, "updated")
    }

    pub fn update_doctor_details(&mut self, id: u32, details: Doctor) -> CatalogResult<Doctor> {
        report::<_, Doctor>(self.doctors.update(&id, details), &id, "updated")
    }

    pub fn merge_patient_catalogs(&mut self, other: impl IntoIterator<Item = Patient>) -> usize {
        let inserted = self.patients.merge(other);
        info!(inserted, "patient catalogs merged");
        inserted
    }

    pub fn merge_doctor_catalogs(&mut self, other: impl IntoIterator<Item = Doctor>) -> usize {
        let inserted = self.doctors.merge(other);
        info!(inserted, "doctor catalogs merged");
        inserted
    }

    pub fn get_all_patient_ids(&self) -> Vec<u32> {
        self.patients.keys()
    }

    pub fn get_all_doctor_ids(&self) -> Vec<u32> {
        self.doctors.keys()
    }

    pub fn clear_patient_catalog(&mut self) {
        self.patients.clear();
        info!("patient catalog cleared");
    }

    pub fn clear_doctor_catalog(&mut self) {
        self.doctors.clear();
        info!("doctor catalog cleared");
    }
}
