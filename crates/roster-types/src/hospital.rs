use crate::Record;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeSet;

/// Tag set fed by [`Doctor::specialty`].
pub const SPECIALTIES: &str = "specialties";
/// Tag set fed by [`Doctor::department`].
pub const DEPARTMENTS: &str = "departments";

/// Date format accepted by [`Appointment::parse`].
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Twelve-hour clock format accepted by [`Appointment::parse`].
pub const TIME_FORMAT: &str = "%I:%M %p";

/// A patient, grouped by gender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    /// Patient id
    pub id: u32,
    /// Full name
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Recorded gender
    pub gender: String,
    /// Known conditions
    pub medical_history: BTreeSet<String>,
}

impl Patient {
    /// Build a patient from borrowed parts.
    pub fn new<I, S>(id: u32, name: &str, age: u32, gender: &str, medical_history: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id,
            name: name.to_string(),
            age,
            gender: gender.to_string(),
            medical_history: crate::tag_set(medical_history),
        }
    }
}

impl Record for Patient {
    type Key = u32;

    const KIND: &'static str = "patient";

    fn key(&self) -> &u32 {
        &self.id
    }

    fn label(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.name.as_str())
    }

    fn group(&self) -> Option<&str> {
        Some(self.gender.as_str())
    }
}

/// A doctor, grouped by department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    /// Doctor id
    pub id: u32,
    /// Full name
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Medical specialty
    pub specialty: String,
    /// Hospital department
    pub department: String,
}

impl Doctor {
    /// Build a doctor from borrowed parts.
    #[must_use]
    pub fn new(id: u32, name: &str, age: u32, specialty: &str, department: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            age,
            specialty: specialty.to_string(),
            department: department.to_string(),
        }
    }
}

impl Record for Doctor {
    type Key = u32;

    const KIND: &'static str = "doctor";

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
        vec![(SPECIALTIES, self.specialty.as_str()), (DEPARTMENTS, self.department.as_str())]
    }
}

/// A scheduled appointment between a patient and a doctor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    /// Appointment id
    pub id: u32,
    /// Patient attending
    pub patient_id: u32,
    /// Doctor seeing the patient
    pub doctor_id: u32,
    /// Calendar day
    pub date: NaiveDate,
    /// Start time
    pub time: NaiveTime,
}

impl Appointment {
    /// Build an appointment from `YYYY-MM-DD` and `HH:MM AM` strings.
    ///
    /// # Errors
    ///
    /// Returns a `chrono::ParseError` if either the date or the time is malformed.
    pub fn parse(
        id: u32,
        patient_id: u32,
        doctor_id: u32,
        date: &str,
        time: &str,
    ) -> Result<Self, chrono::ParseError> {
        Ok(Self {
            id,
            patient_id,
            doctor_id,
            date: NaiveDate::parse_from_str(date, DATE_FORMAT)?,
            time: NaiveTime::parse_from_str(time, TIME_FORMAT)?,
        })
    }
}

impl Record for Appointment {
    type Key = u32;

    const KIND: &'static str = "appointment";

    fn key(&self) -> &u32 {
        &self.id
    }

    fn label(&self) -> Cow<'_, str> {
        Cow::Owned(format!(
            "{} {}",
            self.date.format(DATE_FORMAT),
            self.time.format(TIME_FORMAT)
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appointment_parses_twelve_hour_clock() {
        let appointment = Appointment::parse(204, 4, 104, "2023-10-04", "01:00 PM").unwrap();

        assert_eq!(appointment.time, NaiveTime::from_hms_opt(13, 0, 0).unwrap());
        assert_eq!(appointment.date, NaiveDate::from_ymd_opt(2023, 10, 4).unwrap());
        assert_eq!(appointment.label(), "2023-10-04 01:00 PM");
    }

    #[test]
    fn test_appointment_rejects_malformed_date() {
        assert!(Appointment::parse(1, 1, 1, "2023/10/04", "01:00 PM").is_err());
    }

    #[test]
    fn test_doctor_feeds_two_tag_sets() {
        let doctor = Doctor::new(101, "Dr. Smith", 50, "Cardiology", "Cardiology");

        assert_eq!(
            doctor.tags(),
            vec![(SPECIALTIES, "Cardiology"), (DEPARTMENTS, "Cardiology")]
        );
    }
}
