//! Navigable sections and report tabs

use serde::{Deserialize, Serialize};

use crate::store::{CollectionName, ReportType};

/// One of the seven fixed views of the dashboard
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Dashboard,
    Patients,
    Appointments,
    Doctors,
    Billing,
    Reports,
    Settings,
}

impl Section {
    /// Sidebar order
    pub fn all() -> &'static [Section] {
        &[
            Section::Dashboard,
            Section::Patients,
            Section::Appointments,
            Section::Doctors,
            Section::Billing,
            Section::Reports,
            Section::Settings,
        ]
    }

    /// Parse a section id, falling back to the dashboard for anything unknown
    pub fn parse_or_default(id: &str) -> Self {
        Self::parse(id).unwrap_or_default()
    }

    pub fn parse(id: &str) -> Option<Self> {
        Section::all().iter().copied().find(|s| s.as_str() == id)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Patients => "patients",
            Section::Appointments => "appointments",
            Section::Doctors => "doctors",
            Section::Billing => "billing",
            Section::Reports => "reports",
            Section::Settings => "settings",
        }
    }

    /// Sidebar label
    pub fn label(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Patients => "Patients",
            Section::Appointments => "Appointments",
            Section::Doctors => "Doctors",
            Section::Billing => "Billing",
            Section::Reports => "Reports",
            Section::Settings => "Settings",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Section::Dashboard => "fa-chart-line",
            Section::Patients => "fa-user-injured",
            Section::Appointments => "fa-calendar-check",
            Section::Doctors => "fa-user-md",
            Section::Billing => "fa-file-invoice-dollar",
            Section::Reports => "fa-file-medical-alt",
            Section::Settings => "fa-cog",
        }
    }

    /// Section that lists a collection
    pub fn for_collection(name: CollectionName) -> Self {
        match name {
            CollectionName::Patients => Section::Patients,
            CollectionName::Doctors => Section::Doctors,
            CollectionName::Appointments => Section::Appointments,
            CollectionName::Bills => Section::Billing,
            CollectionName::Reports => Section::Reports,
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sub-tabs of the reports section
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportTab {
    #[default]
    Monthly,
    Revenue,
    Analytics,
}

impl ReportTab {
    pub fn all() -> &'static [ReportTab] {
        &[ReportTab::Monthly, ReportTab::Revenue, ReportTab::Analytics]
    }

    /// Parse a tab id; unknown or absent ids select the default tab
    pub fn parse_or_default(id: Option<&str>) -> Self {
        id.and_then(|id| ReportTab::all().iter().copied().find(|t| t.as_str() == id))
            .unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportTab::Monthly => "monthly",
            ReportTab::Revenue => "revenue",
            ReportTab::Analytics => "analytics",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportTab::Monthly => "Monthly Reports",
            ReportTab::Revenue => "Revenue Reports",
            ReportTab::Analytics => "Analytics",
        }
    }

    /// Report type listed under this tab; analytics lists none
    pub fn report_type(&self) -> Option<ReportType> {
        match self {
            ReportTab::Monthly => Some(ReportType::Monthly),
            ReportTab::Revenue => Some(ReportType::Revenue),
            ReportTab::Analytics => None,
        }
    }
}
