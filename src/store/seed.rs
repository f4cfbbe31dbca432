//! Sample data loaded into every new store

use chrono::{NaiveDate, NaiveTime};

use crate::store::types::*;

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("seed dates are valid calendar dates")
}

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("seed times are valid clock times")
}

fn patient(
    id: RecordId,
    name: &str,
    age: u32,
    gender: &str,
    diagnosis: &str,
    admitted: NaiveDate,
    status: PatientStatus,
) -> Patient {
    Patient {
        id,
        name: name.to_string(),
        age,
        gender: gender.to_string(),
        diagnosis: diagnosis.to_string(),
        admitted,
        status,
    }
}

fn doctor(id: RecordId, name: &str, specialty: &str, phone: &str, email: &str, patients: u32) -> Doctor {
    Doctor {
        id,
        name: name.to_string(),
        specialty: specialty.to_string(),
        phone: phone.to_string(),
        email: email.to_string(),
        patients,
    }
}

fn appointment(
    id: RecordId,
    patient: &str,
    doctor: &str,
    date: NaiveDate,
    time: NaiveTime,
    status: AppointmentStatus,
) -> Appointment {
    Appointment {
        id,
        patient: patient.to_string(),
        doctor: doctor.to_string(),
        date,
        time,
        status,
    }
}

fn bill(id: RecordId, patient: &str, amount: u64, status: BillStatus, date: NaiveDate) -> Bill {
    Bill {
        id,
        patient: patient.to_string(),
        amount,
        status,
        date,
    }
}

fn report(id: RecordId, title: &str, date: NaiveDate, summary: &str, report_type: ReportType) -> Report {
    Report {
        id,
        title: title.to_string(),
        date,
        summary: summary.to_string(),
        report_type,
    }
}

pub fn patients() -> Vec<Patient> {
    use PatientStatus::*;
    vec![
        patient(1, "Alice Smith", 29, "Female", "Flu", ymd(2024, 6, 1), Active),
        patient(2, "Bob Johnson", 45, "Male", "Diabetes", ymd(2024, 5, 28), Active),
        patient(3, "Carol White", 34, "Female", "Asthma", ymd(2024, 6, 2), Discharged),
        patient(4, "David Brown", 52, "Male", "Hypertension", ymd(2024, 6, 3), Active),
        patient(5, "Emma Davis", 38, "Female", "Migraine", ymd(2024, 6, 4), Active),
    ]
}

pub fn doctors() -> Vec<Doctor> {
    vec![
        doctor(1, "Dr. John Doe", "Cardiology", "555-1234", "john@hospital.com", 12),
        doctor(2, "Dr. Jane Smith", "Neurology", "555-5678", "jane@hospital.com", 8),
        doctor(3, "Dr. Mike Wilson", "Orthopedics", "555-9012", "mike@hospital.com", 15),
        doctor(4, "Dr. Sarah Johnson", "Pediatrics", "555-3456", "sarah@hospital.com", 20),
    ]
}

pub fn appointments() -> Vec<Appointment> {
    use AppointmentStatus::*;
    vec![
        appointment(1, "Alice Smith", "Dr. John Doe", ymd(2024, 6, 10), hm(10, 0), Scheduled),
        appointment(2, "Bob Johnson", "Dr. Jane Smith", ymd(2024, 6, 11), hm(14, 0), Completed),
        appointment(3, "Carol White", "Dr. Mike Wilson", ymd(2024, 6, 12), hm(9, 30), Scheduled),
        appointment(4, "David Brown", "Dr. Sarah Johnson", ymd(2024, 6, 13), hm(16, 0), Cancelled),
    ]
}

pub fn bills() -> Vec<Bill> {
    use BillStatus::*;
    vec![
        bill(1, "Alice Smith", 200, Paid, ymd(2024, 6, 3)),
        bill(2, "Bob Johnson", 350, Unpaid, ymd(2024, 6, 4)),
        bill(3, "Carol White", 180, Paid, ymd(2024, 6, 5)),
        bill(4, "David Brown", 420, Unpaid, ymd(2024, 6, 6)),
    ]
}

pub fn reports() -> Vec<Report> {
    use ReportType::*;
    let june = ymd(2024, 6, 1);
    vec![
        report(1, "Monthly Admissions", june, "20 new admissions in June.", Monthly),
        report(2, "Revenue Report", june, "Total revenue: $15,000.", Revenue),
        report(3, "Patient Satisfaction", june, "95% satisfaction rate.", Monthly),
        report(4, "Department Performance", june, "All departments meeting targets.", Revenue),
    ]
}

pub fn stats() -> StatsSnapshot {
    StatsSnapshot {
        total_patients: 156,
        active_patients: 89,
        total_doctors: 24,
        total_revenue: 125_000,
        monthly_growth: 12.5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_sizes() {
        assert_eq!(patients().len(), 5);
        assert_eq!(doctors().len(), 4);
        assert_eq!(appointments().len(), 4);
        assert_eq!(bills().len(), 4);
        assert_eq!(reports().len(), 4);
    }

    #[test]
    fn test_seed_ids_unique_per_collection() {
        let ids: HashSet<_> = patients().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), 5);
        let ids: HashSet<_> = reports().iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn test_seed_values() {
        let carol = &patients()[2];
        assert_eq!(carol.name, "Carol White");
        assert_eq!(carol.status, PatientStatus::Discharged);
        assert_eq!(appointments()[2].time, hm(9, 30));
        assert_eq!(bills()[3].amount, 420);
        assert_eq!(stats().monthly_growth, 12.5);
    }
}
