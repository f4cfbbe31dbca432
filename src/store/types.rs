//! Core record types for the hospital record store
//!
//! This module defines the flat records held by the store:
//! - `Patient`, `Doctor`, `Appointment`, `Bill`, `Report`: one per collection
//! - `StatsSnapshot`: headline numbers shown on the dashboard
//! - `CollectionName`: the closed set of collection identifiers
//! - Status enums, whose lowercase form doubles as the display badge class

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::store::error::StoreError;

/// Record identifier, unique within its collection
pub type RecordId = u64;

/// The five named collections held by the store
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CollectionName {
    Patients,
    Doctors,
    Appointments,
    Bills,
    Reports,
}

impl CollectionName {
    /// Get all collections for iteration
    pub fn all() -> &'static [CollectionName] {
        &[
            CollectionName::Patients,
            CollectionName::Doctors,
            CollectionName::Appointments,
            CollectionName::Bills,
            CollectionName::Reports,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionName::Patients => "patients",
            CollectionName::Doctors => "doctors",
            CollectionName::Appointments => "appointments",
            CollectionName::Bills => "bills",
            CollectionName::Reports => "reports",
        }
    }

    /// Singular label used in form titles and buttons ("Add Patient")
    pub fn singular(&self) -> &'static str {
        match self {
            CollectionName::Patients => "Patient",
            CollectionName::Doctors => "Doctor",
            CollectionName::Appointments => "Appointment",
            CollectionName::Bills => "Bill",
            CollectionName::Reports => "Report",
        }
    }

    /// Form fields that must be present to create a record, in display order
    pub fn required_fields(&self) -> &'static [&'static str] {
        match self {
            CollectionName::Patients => {
                &["name", "age", "gender", "diagnosis", "admitted", "status"]
            }
            CollectionName::Doctors => &["name", "specialty", "phone", "email", "patients"],
            CollectionName::Appointments => &["patient", "doctor", "date", "time", "status"],
            CollectionName::Bills => &["patient", "amount", "status", "date"],
            CollectionName::Reports => &["title", "date", "summary", "type"],
        }
    }
}

impl std::fmt::Display for CollectionName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CollectionName {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "patients" => Ok(CollectionName::Patients),
            "doctors" => Ok(CollectionName::Doctors),
            "appointments" => Ok(CollectionName::Appointments),
            "bills" => Ok(CollectionName::Bills),
            "reports" => Ok(CollectionName::Reports),
            other => Err(StoreError::InvalidArgument(other.to_string())),
        }
    }
}

/// Declares a status enum whose variants display capitalised and whose
/// badge class is the lowercase variant name.
macro_rules! status_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn all() -> &'static [$name] {
                &[$($name::$variant),+]
            }

            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            /// Display-only styling class
            pub fn badge_class(&self) -> String {
                self.label().to_lowercase()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                $name::all()
                    .iter()
                    .copied()
                    .find(|v| v.label().eq_ignore_ascii_case(trimmed))
                    .ok_or_else(|| {
                        let options: Vec<&str> = $name::all().iter().map(|v| v.label()).collect();
                        format!("expected one of {}", options.join(", "))
                    })
            }
        }
    };
}

status_enum!(
    /// Admission status of a patient
    PatientStatus {
        Active => "Active",
        Discharged => "Discharged",
    }
);

status_enum!(
    /// Lifecycle of an appointment
    AppointmentStatus {
        Scheduled => "Scheduled",
        Completed => "Completed",
        Cancelled => "Cancelled",
    }
);

status_enum!(
    /// Payment status of a bill
    BillStatus {
        Paid => "Paid",
        Unpaid => "Unpaid",
    }
);

/// Which reports tab a report belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    Monthly,
    Revenue,
}

impl ReportType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportType::Monthly => "monthly",
            ReportType::Revenue => "revenue",
        }
    }
}

impl FromStr for ReportType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monthly" => Ok(ReportType::Monthly),
            "revenue" => Ok(ReportType::Revenue),
            _ => Err("expected monthly or revenue".to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    pub id: RecordId,
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub diagnosis: String,
    pub admitted: NaiveDate,
    pub status: PatientStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Doctor {
    pub id: RecordId,
    pub name: String,
    pub specialty: String,
    pub phone: String,
    pub email: String,
    /// Denormalized count, not a relation
    pub patients: u32,
}

/// An appointment; `patient` and `doctor` are free-text labels
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    pub id: RecordId,
    pub patient: String,
    pub doctor: String,
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub time: NaiveTime,
    pub status: AppointmentStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Bill {
    pub id: RecordId,
    pub patient: String,
    /// Whole currency units
    pub amount: u64,
    pub status: BillStatus,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Report {
    pub id: RecordId,
    pub title: String,
    pub date: NaiveDate,
    pub summary: String,
    #[serde(rename = "type")]
    pub report_type: ReportType,
}

/// Headline numbers for the dashboard
///
/// Fixed when the store is created. It is not derived from the collections
/// and may drift from them as records are appended.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatsSnapshot {
    pub total_patients: u64,
    pub active_patients: u64,
    pub total_doctors: u64,
    pub total_revenue: u64,
    /// Percentage
    pub monthly_growth: f64,
}

/// The contents of one collection, as returned by `get_collection`
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum Collection {
    Patients(Vec<Patient>),
    Doctors(Vec<Doctor>),
    Appointments(Vec<Appointment>),
    Bills(Vec<Bill>),
    Reports(Vec<Report>),
}

impl Collection {
    pub fn name(&self) -> CollectionName {
        match self {
            Collection::Patients(_) => CollectionName::Patients,
            Collection::Doctors(_) => CollectionName::Doctors,
            Collection::Appointments(_) => CollectionName::Appointments,
            Collection::Bills(_) => CollectionName::Bills,
            Collection::Reports(_) => CollectionName::Reports,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Collection::Patients(v) => v.len(),
            Collection::Doctors(v) => v.len(),
            Collection::Appointments(v) => v.len(),
            Collection::Bills(v) => v.len(),
            Collection::Reports(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Record ids in collection order
    pub fn ids(&self) -> Vec<RecordId> {
        match self {
            Collection::Patients(v) => v.iter().map(|r| r.id).collect(),
            Collection::Doctors(v) => v.iter().map(|r| r.id).collect(),
            Collection::Appointments(v) => v.iter().map(|r| r.id).collect(),
            Collection::Bills(v) => v.iter().map(|r| r.id).collect(),
            Collection::Reports(v) => v.iter().map(|r| r.id).collect(),
        }
    }
}

/// A single record of any collection, as returned by `append`
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum Record {
    Patient(Patient),
    Doctor(Doctor),
    Appointment(Appointment),
    Bill(Bill),
    Report(Report),
}

impl Record {
    pub fn id(&self) -> RecordId {
        match self {
            Record::Patient(r) => r.id,
            Record::Doctor(r) => r.id,
            Record::Appointment(r) => r.id,
            Record::Bill(r) => r.id,
            Record::Report(r) => r.id,
        }
    }

    pub fn collection(&self) -> CollectionName {
        match self {
            Record::Patient(_) => CollectionName::Patients,
            Record::Doctor(_) => CollectionName::Doctors,
            Record::Appointment(_) => CollectionName::Appointments,
            Record::Bill(_) => CollectionName::Bills,
            Record::Report(_) => CollectionName::Reports,
        }
    }
}

/// Serialize appointment times as `HH:MM`
pub(crate) mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(d)?;
        NaiveTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_name_parse() {
        assert_eq!(
            "patients".parse::<CollectionName>(),
            Ok(CollectionName::Patients)
        );
        assert_eq!("bills".parse::<CollectionName>(), Ok(CollectionName::Bills));
        assert_eq!(
            "billing".parse::<CollectionName>(),
            Err(StoreError::InvalidArgument("billing".to_string()))
        );
    }

    #[test]
    fn test_status_badge_class() {
        assert_eq!(PatientStatus::Discharged.badge_class(), "discharged");
        assert_eq!(AppointmentStatus::Cancelled.badge_class(), "cancelled");
        assert_eq!(BillStatus::Unpaid.badge_class(), "unpaid");
    }

    #[test]
    fn test_status_parse_is_case_insensitive() {
        assert_eq!("active".parse::<PatientStatus>(), Ok(PatientStatus::Active));
        assert_eq!(
            " Completed ".parse::<AppointmentStatus>(),
            Ok(AppointmentStatus::Completed)
        );
        let err = "overdue".parse::<BillStatus>().unwrap_err();
        assert_eq!(err, "expected one of Paid, Unpaid");
    }

    #[test]
    fn test_appointment_time_serializes_as_hhmm() {
        let appt = Appointment {
            id: 7,
            patient: "Alice Smith".to_string(),
            doctor: "Dr. John Doe".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
            time: NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
            status: AppointmentStatus::Scheduled,
        };

        let json = serde_json::to_value(&appt).unwrap();
        assert_eq!(json["time"], "09:30");
        assert_eq!(json["date"], "2024-06-10");
        assert_eq!(json["status"], "Scheduled");
    }

    #[test]
    fn test_report_type_field_name() {
        let report = Report {
            id: 1,
            title: "Monthly Admissions".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            summary: "20 new admissions in June.".to_string(),
            report_type: ReportType::Monthly,
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["type"], "monthly");
    }

    #[test]
    fn test_stats_snapshot_camel_case() {
        let stats = StatsSnapshot {
            total_patients: 1,
            active_patients: 2,
            total_doctors: 3,
            total_revenue: 4,
            monthly_growth: 5.5,
        };
        let json = serde_json::to_value(stats).unwrap();
        assert_eq!(json["totalPatients"], 1);
        assert_eq!(json["monthlyGrowth"], 5.5);
    }
}
