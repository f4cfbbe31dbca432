//! Form field coercion
//!
//! Turns a submitted `field name -> string value` map into a typed record.
//! Every required field is checked for presence first, in the collection's
//! declared order, so a request missing several fields always reports the
//! first one. Only then are values coerced to their types.
//!
//! Free-text fields are stored exactly as submitted. Surrounding whitespace
//! is ignored only when checking presence and when parsing typed values.

use chrono::{NaiveDate, NaiveTime};
use std::collections::HashMap;
use std::str::FromStr;

use crate::store::error::{StoreError, StoreResult};
use crate::store::types::*;

/// Submitted form values, keyed by field name
pub type FieldMap = HashMap<String, String>;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Build a record from submitted fields. The returned record has id 0;
/// the store assigns the real id on append.
pub fn build_record(collection: CollectionName, fields: &FieldMap) -> StoreResult<Record> {
    let reader = FieldReader::new(collection, fields)?;

    let record = match collection {
        CollectionName::Patients => Record::Patient(Patient {
            id: 0,
            name: reader.text("name"),
            age: reader.number("age")?,
            gender: reader.text("gender"),
            diagnosis: reader.text("diagnosis"),
            admitted: reader.date("admitted")?,
            status: reader.choice("status")?,
        }),
        CollectionName::Doctors => Record::Doctor(Doctor {
            id: 0,
            name: reader.text("name"),
            specialty: reader.text("specialty"),
            phone: reader.text("phone"),
            email: reader.text("email"),
            patients: reader.number("patients")?,
        }),
        CollectionName::Appointments => Record::Appointment(Appointment {
            id: 0,
            patient: reader.text("patient"),
            doctor: reader.text("doctor"),
            date: reader.date("date")?,
            time: reader.time("time")?,
            status: reader.choice("status")?,
        }),
        CollectionName::Bills => Record::Bill(Bill {
            id: 0,
            patient: reader.text("patient"),
            amount: reader.number("amount")?,
            status: reader.choice("status")?,
            date: reader.date("date")?,
        }),
        CollectionName::Reports => Record::Report(Report {
            id: 0,
            title: reader.text("title"),
            date: reader.date("date")?,
            summary: reader.text("summary"),
            report_type: reader.choice("type")?,
        }),
    };

    Ok(record)
}

/// Read access to a field map whose required fields are known to be present
struct FieldReader<'a> {
    fields: &'a FieldMap,
}

impl<'a> FieldReader<'a> {
    fn new(collection: CollectionName, fields: &'a FieldMap) -> StoreResult<Self> {
        for &field in collection.required_fields() {
            let present = fields
                .get(field)
                .map(|v| !v.trim().is_empty())
                .unwrap_or(false);
            if !present {
                return Err(StoreError::MissingField {
                    collection: collection.as_str(),
                    field,
                });
            }
        }
        Ok(Self { fields })
    }

    /// Trimmed value, for parsing
    fn raw(&self, field: &str) -> &str {
        self.fields.get(field).map(|v| v.trim()).unwrap_or_default()
    }

    fn text(&self, field: &'static str) -> String {
        self.fields.get(field).cloned().unwrap_or_default()
    }

    fn invalid(&self, field: &'static str, reason: impl Into<String>) -> StoreError {
        StoreError::InvalidField {
            field,
            value: self.raw(field).to_string(),
            reason: reason.into(),
        }
    }

    fn number<T: FromStr>(&self, field: &'static str) -> StoreResult<T> {
        self.raw(field)
            .parse()
            .map_err(|_| self.invalid(field, "expected a whole number"))
    }

    fn date(&self, field: &'static str) -> StoreResult<NaiveDate> {
        NaiveDate::parse_from_str(self.raw(field), DATE_FORMAT)
            .map_err(|_| self.invalid(field, "expected a date as YYYY-MM-DD"))
    }

    fn time(&self, field: &'static str) -> StoreResult<NaiveTime> {
        let raw = self.raw(field);
        NaiveTime::parse_from_str(raw, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
            .map_err(|_| self.invalid(field, "expected a time as HH:MM"))
    }

    fn choice<T: FromStr<Err = String>>(&self, field: &'static str) -> StoreResult<T> {
        self.raw(field)
            .parse()
            .map_err(|reason: String| self.invalid(field, reason))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> FieldMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_build_patient() {
        let input = fields(&[
            ("name", "Frank Green"),
            ("age", "61"),
            ("gender", "Male"),
            ("diagnosis", "Arrhythmia"),
            ("admitted", "2024-06-07"),
            ("status", "Active"),
        ]);

        let record = build_record(CollectionName::Patients, &input).unwrap();
        let Record::Patient(p) = record else {
            panic!("expected a patient");
        };
        assert_eq!(p.id, 0);
        assert_eq!(p.name, "Frank Green");
        assert_eq!(p.age, 61);
        assert_eq!(p.admitted, NaiveDate::from_ymd_opt(2024, 6, 7).unwrap());
        assert_eq!(p.status, PatientStatus::Active);
    }

    #[test]
    fn test_missing_field_named() {
        let input = fields(&[("patient", "Alice Smith"), ("status", "Paid"), ("date", "2024-06-08")]);
        let err = build_record(CollectionName::Bills, &input).unwrap_err();
        assert_eq!(
            err,
            StoreError::MissingField {
                collection: "bills",
                field: "amount"
            }
        );
    }

    #[test]
    fn test_blank_counts_as_missing() {
        let input = fields(&[
            ("title", "Quarterly"),
            ("date", "2024-07-01"),
            ("summary", "   "),
            ("type", "revenue"),
        ]);
        let err = build_record(CollectionName::Reports, &input).unwrap_err();
        assert_eq!(err.field(), Some("summary"));
    }

    #[test]
    fn test_first_missing_field_in_declared_order() {
        let err = build_record(CollectionName::Appointments, &FieldMap::new()).unwrap_err();
        assert_eq!(err.field(), Some("patient"));
    }

    #[test]
    fn test_presence_checked_before_coercion() {
        // age is malformed but gender is missing: presence wins
        let input = fields(&[("name", "X"), ("age", "old")]);
        let err = build_record(CollectionName::Patients, &input).unwrap_err();
        assert!(matches!(err, StoreError::MissingField { field: "gender", .. }));
    }

    #[test]
    fn test_invalid_values() {
        let input = fields(&[
            ("patient", "Bob Johnson"),
            ("amount", "three hundred"),
            ("status", "Unpaid"),
            ("date", "2024-06-09"),
        ]);
        let err = build_record(CollectionName::Bills, &input).unwrap_err();
        assert!(matches!(err, StoreError::InvalidField { field: "amount", .. }));

        let input = fields(&[
            ("patient", "Bob Johnson"),
            ("doctor", "Dr. Jane Smith"),
            ("date", "2024-06-09"),
            ("time", "14:00"),
            ("status", "Pending"),
        ]);
        let err = build_record(CollectionName::Appointments, &input).unwrap_err();
        assert!(matches!(err, StoreError::InvalidField { field: "status", .. }));
    }

    #[test]
    fn test_time_accepts_seconds() {
        let input = fields(&[
            ("patient", "Bob Johnson"),
            ("doctor", "Dr. Jane Smith"),
            ("date", "2024-06-09"),
            ("time", "14:00:00"),
            ("status", "scheduled"),
        ]);
        let Record::Appointment(a) = build_record(CollectionName::Appointments, &input).unwrap()
        else {
            panic!("expected an appointment");
        };
        assert_eq!(a.time, NaiveTime::from_hms_opt(14, 0, 0).unwrap());
        assert_eq!(a.status, AppointmentStatus::Scheduled);
    }

    #[test]
    fn test_text_kept_verbatim_typed_values_trimmed() {
        let input = fields(&[
            ("patient", " Alice Smith "),
            ("amount", " 75 "),
            ("status", " unpaid"),
            ("date", "2024-06-09 "),
        ]);
        let Record::Bill(b) = build_record(CollectionName::Bills, &input).unwrap() else {
            panic!("expected a bill");
        };
        assert_eq!(b.patient, " Alice Smith ");
        assert_eq!(b.amount, 75);
        assert_eq!(b.status, BillStatus::Unpaid);
        assert_eq!(b.date, NaiveDate::from_ymd_opt(2024, 6, 9).unwrap());
    }

    #[test]
    fn test_extra_fields_ignored() {
        let input = fields(&[
            ("name", "Dr. Ada Byron"),
            ("specialty", "Oncology"),
            ("phone", "555-0000"),
            ("email", "ada@hospital.com"),
            ("patients", "3"),
            ("csrf", "ignored"),
        ]);
        assert!(build_record(CollectionName::Doctors, &input).is_ok());
    }
}
