//! Add-record forms
//!
//! One modal form per collection. Every required field gets one required
//! input; the form posts its values to `/forms/{collection}`. A rejected
//! submission is re-rendered with the submitted values and the error shown.

use crate::render::node::{el, icon, Element, Node};
use crate::store::{
    AppointmentStatus, BillStatus, CollectionName, FieldMap, PatientStatus,
};

enum Input {
    Text,
    Number,
    Date,
    Time,
    Email,
    Tel,
    Select(Vec<&'static str>),
}

struct FieldSpec {
    name: &'static str,
    placeholder: &'static str,
    input: Input,
}

fn spec(name: &'static str, placeholder: &'static str, input: Input) -> FieldSpec {
    FieldSpec {
        name,
        placeholder,
        input,
    }
}

fn labels<T: Copy>(all: &[T], label: impl Fn(T) -> &'static str) -> Vec<&'static str> {
    all.iter().copied().map(label).collect()
}

fn field_specs(collection: CollectionName) -> Vec<FieldSpec> {
    match collection {
        CollectionName::Patients => vec![
            spec("name", "Full Name", Input::Text),
            spec("age", "Age", Input::Number),
            spec("gender", "Select Gender", Input::Select(vec!["Male", "Female"])),
            spec("diagnosis", "Diagnosis", Input::Text),
            spec("admitted", "Admitted", Input::Date),
            spec(
                "status",
                "Select Status",
                Input::Select(labels(PatientStatus::all(), |s| s.label())),
            ),
        ],
        CollectionName::Doctors => vec![
            spec("name", "Full Name", Input::Text),
            spec("specialty", "Specialty", Input::Text),
            spec("phone", "Phone", Input::Tel),
            spec("email", "Email", Input::Email),
            spec("patients", "Patients", Input::Number),
        ],
        CollectionName::Appointments => vec![
            spec("patient", "Patient Name", Input::Text),
            spec("doctor", "Doctor Name", Input::Text),
            spec("date", "Date", Input::Date),
            spec("time", "Time", Input::Time),
            spec(
                "status",
                "Select Status",
                Input::Select(labels(AppointmentStatus::all(), |s| s.label())),
            ),
        ],
        CollectionName::Bills => vec![
            spec("patient", "Patient Name", Input::Text),
            spec("amount", "Amount", Input::Number),
            spec(
                "status",
                "Select Status",
                Input::Select(labels(BillStatus::all(), |s| s.label())),
            ),
            spec("date", "Date", Input::Date),
        ],
        CollectionName::Reports => vec![
            spec("title", "Title", Input::Text),
            spec("date", "Date", Input::Date),
            spec("summary", "Summary", Input::Text),
            spec("type", "Select Type", Input::Select(vec!["monthly", "revenue"])),
        ],
    }
}

/// Element id of the form ("patientForm", "billForm", …)
pub fn form_id(collection: CollectionName) -> String {
    format!("{}Form", collection.singular().to_lowercase())
}

/// An empty add form
pub fn render(collection: CollectionName) -> Node {
    render_with(collection, &FieldMap::new(), None)
}

/// An add form prefilled with `values`, optionally showing `error`
pub fn render_with(collection: CollectionName, values: &FieldMap, error: Option<&str>) -> Node {
    let mut form = el("form")
        .id(&form_id(collection))
        .attr("method", "post")
        .attr("action", format!("/forms/{}", collection));

    if let Some(message) = error {
        form = form.child(el("p").class("form-error").attr("role", "alert").text(message));
    }

    let form = form
        .children(
            field_specs(collection)
                .iter()
                .map(|f| input(f, values.get(f.name).map(String::as_str))),
        )
        .child(
            el("button")
                .attr("type", "submit")
                .class("btn")
                .child(icon("fa-save"))
                .text(format!(" Save {}", collection.singular())),
        );

    el("div")
        .class("modal-form")
        .attr("data-collection", collection)
        .child(
            el("h3")
                .child(icon("fa-plus-circle"))
                .text(format!(" Add {}", collection.singular())),
        )
        .child(form)
        .into()
}

fn input(field: &FieldSpec, value: Option<&str>) -> Element {
    let kind = match &field.input {
        Input::Select(options) => return select(field, options, value),
        Input::Text => "text",
        Input::Number => "number",
        Input::Date => "date",
        Input::Time => "time",
        Input::Email => "email",
        Input::Tel => "tel",
    };

    let control = el("input")
        .attr("type", kind)
        .attr("name", field.name)
        .attr("placeholder", field.placeholder)
        .attr("required", "");
    match value {
        Some(v) => control.attr("value", v),
        None => control,
    }
}

fn select(field: &FieldSpec, options: &[&'static str], value: Option<&str>) -> Element {
    el("select")
        .attr("name", field.name)
        .attr("required", "")
        .child(el("option").attr("value", "").text(field.placeholder))
        .children(options.iter().map(|&option| {
            let e = el("option").attr("value", option).text(option);
            if value == Some(option) {
                e.attr("selected", "")
            } else {
                e
            }
        }))
}
