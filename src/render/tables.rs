//! Record table sections: patients, appointments, doctors, billing
//!
//! Every record is listed in store order, one row each. No pagination,
//! filtering or sorting.

use crate::render::node::{el, icon, Element, Node};
use crate::render::section::Section;
use crate::store::{CollectionName, RecordId, RecordStore};

pub fn render_patients(store: &RecordStore) -> Node {
    let rows = store.patients().into_iter().map(|p| {
        row(CollectionName::Patients, p.id)
            .child(cell("Name", &p.name))
            .child(cell("Age", p.age))
            .child(cell("Gender", &p.gender))
            .child(cell("Diagnosis", &p.diagnosis))
            .child(badge_cell(p.status.label(), &p.status.badge_class()))
            .child(cell("Admitted", p.admitted))
            .child(actions_cell(CollectionName::Patients, p.id))
    });

    table_section(
        Section::Patients,
        "Patient Records",
        CollectionName::Patients,
        &["Name", "Age", "Gender", "Diagnosis", "Status", "Admitted", "Actions"],
        rows,
    )
}

pub fn render_appointments(store: &RecordStore) -> Node {
    let rows = store.appointments().into_iter().map(|a| {
        row(CollectionName::Appointments, a.id)
            .child(cell("Patient", &a.patient))
            .child(cell("Doctor", &a.doctor))
            .child(cell("Date", a.date))
            .child(cell("Time", a.time.format("%H:%M")))
            .child(badge_cell(a.status.label(), &a.status.badge_class()))
            .child(actions_cell(CollectionName::Appointments, a.id))
    });

    table_section(
        Section::Appointments,
        "Appointment Scheduling",
        CollectionName::Appointments,
        &["Patient", "Doctor", "Date", "Time", "Status", "Actions"],
        rows,
    )
}

pub fn render_doctors(store: &RecordStore) -> Node {
    let rows = store.doctors().into_iter().map(|d| {
        row(CollectionName::Doctors, d.id)
            .child(cell("Name", &d.name))
            .child(cell("Specialty", &d.specialty))
            .child(cell("Phone", &d.phone))
            .child(cell("Email", &d.email))
            .child(cell("Patients", d.patients))
            .child(actions_cell(CollectionName::Doctors, d.id))
    });

    table_section(
        Section::Doctors,
        "Doctor Management",
        CollectionName::Doctors,
        &["Name", "Specialty", "Phone", "Email", "Patients", "Actions"],
        rows,
    )
}

pub fn render_billing(store: &RecordStore) -> Node {
    let rows = store.bills().into_iter().map(|b| {
        row(CollectionName::Bills, b.id)
            .child(cell("Patient", &b.patient))
            .child(cell("Amount", format!("${}", b.amount)))
            .child(badge_cell(b.status.label(), &b.status.badge_class()))
            .child(cell("Date", b.date))
            .child(actions_cell(CollectionName::Bills, b.id))
    });

    table_section(
        Section::Billing,
        "Billing",
        CollectionName::Bills,
        &["Patient", "Amount", "Status", "Date", "Actions"],
        rows,
    )
}

/// Link that opens the add-record modal on top of `section`
pub fn add_record_href(section: Section, collection: CollectionName) -> String {
    format!("/?section={}&modal={}", section, collection)
}

fn table_section<I>(
    section: Section,
    title: &str,
    collection: CollectionName,
    headers: &[&str],
    rows: I,
) -> Node
where
    I: Iterator<Item = Element>,
{
    let header = el("div")
        .class("section-header")
        .child(el("h2").child(icon(section.icon())).text(format!(" {}", title)))
        .child(
            el("a")
                .class("btn")
                .attr("href", add_record_href(section, collection))
                .attr("data-form", collection)
                .child(icon("fa-plus"))
                .text(format!(" Add {}", collection.singular())),
        );

    let table = el("table")
        .class("data-table")
        .child(
            el("thead").child(
                el("tr").children(headers.iter().map(|h| el("th").text(h))),
            ),
        )
        .child(el("tbody").children(rows));

    el("div")
        .class("section")
        .attr("data-section", section)
        .child(header)
        .child(el("div").class("table-responsive").child(table))
        .into()
}

fn row(collection: CollectionName, id: RecordId) -> Element {
    el("tr")
        .class("table-row")
        .attr("data-collection", collection)
        .attr("data-id", id)
}

fn cell(label: &str, value: impl ToString) -> Element {
    el("td").attr("data-label", label).text(value)
}

fn badge_cell(status: &str, badge_class: &str) -> Element {
    el("td").attr("data-label", "Status").child(
        el("span")
            .class("status-badge")
            .class(badge_class)
            .text(status),
    )
}

// Edit buttons are inert: there is no update path for any record.
fn actions_cell(collection: CollectionName, id: RecordId) -> Element {
    el("td").attr("data-label", "Actions").child(
        el("button")
            .class("btn")
            .class("btn-sm")
            .attr("type", "button")
            .attr("data-action", "edit")
            .attr("data-collection", collection)
            .attr("data-id", id)
            .attr("disabled", "")
            .child(icon("fa-edit")),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::FieldMap;

    fn rows(node: &Node) -> Vec<&Element> {
        node.find_by_class("table-row")
    }

    fn cells(row: &Element) -> Vec<String> {
        row.children
            .iter()
            .filter_map(Node::as_element)
            .map(Element::text_content)
            .collect()
    }

    #[test]
    fn test_patients_rows_in_store_order() {
        let node = render_patients(&RecordStore::seeded());
        let rows = rows(&node);
        assert_eq!(rows.len(), 5);

        assert_eq!(
            cells(rows[0]),
            vec!["Alice Smith", "29", "Female", "Flu", "Active", "2024-06-01", ""]
        );
        assert_eq!(rows[4].get_attr("data-id"), Some("5"));
    }

    #[test]
    fn test_badge_class_is_lowercase_status() {
        let node = render_patients(&RecordStore::seeded());
        let badges = node.find_by_class("status-badge");
        assert_eq!(badges.len(), 5);
        assert!(badges[2].has_class("discharged"));
        assert_eq!(badges[2].text_content(), "Discharged");

        let node = render_appointments(&RecordStore::seeded());
        let classes: Vec<_> = node
            .find_by_class("status-badge")
            .iter()
            .map(|b| b.get_attr("class").unwrap().to_string())
            .collect();
        assert_eq!(
            classes,
            vec![
                "status-badge scheduled",
                "status-badge completed",
                "status-badge scheduled",
                "status-badge cancelled"
            ]
        );
    }

    #[test]
    fn test_appointment_time_format() {
        let node = render_appointments(&RecordStore::seeded());
        let rows = rows(&node);
        assert_eq!(cells(rows[2])[3], "09:30");
    }

    #[test]
    fn test_doctors_all_fields() {
        let node = render_doctors(&RecordStore::seeded());
        let rows = rows(&node);
        assert_eq!(rows.len(), 4);
        assert_eq!(
            cells(rows[3]),
            vec![
                "Dr. Sarah Johnson",
                "Pediatrics",
                "555-3456",
                "sarah@hospital.com",
                "20",
                ""
            ]
        );
    }

    #[test]
    fn test_billing_amount_display() {
        let node = render_billing(&RecordStore::seeded());
        let rows = rows(&node);
        assert_eq!(cells(rows[1]), vec!["Bob Johnson", "$350", "Unpaid", "2024-06-04", ""]);
        assert!(node.find_by_class("unpaid").len() == 2);
    }

    #[test]
    fn test_appended_record_rendered_last() {
        let store = RecordStore::seeded();
        let mut fields = FieldMap::new();
        fields.insert("patient".into(), "Emma Davis".into());
        fields.insert("amount".into(), "90".into());
        fields.insert("status".into(), "Paid".into());
        fields.insert("date".into(), "2024-06-07".into());
        let created = store.append("bills", &fields).unwrap();

        let node = render_billing(&store);
        let rows = rows(&node);
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[4].get_attr("data-id"), Some(created.id().to_string().as_str()));
        assert_eq!(cells(rows[4])[1], "$90");
    }

    #[test]
    fn test_edit_buttons_are_inert() {
        let node = render_doctors(&RecordStore::seeded());
        let buttons = node.find_all(|e| e.get_attr("data-action") == Some("edit"));
        assert_eq!(buttons.len(), 4);
        for button in buttons {
            assert_eq!(button.get_attr("disabled"), Some(""));
            assert_eq!(button.get_attr("data-collection"), Some("doctors"));
        }
    }

    #[test]
    fn test_add_button_opens_modal() {
        let node = render_billing(&RecordStore::seeded());
        let add = node.find_all(|e| e.get_attr("data-form").is_some());
        assert_eq!(add.len(), 1);
        assert_eq!(add[0].get_attr("href"), Some("/?section=billing&modal=bills"));
        assert_eq!(add[0].text_content(), " Add Bill");
    }
}
