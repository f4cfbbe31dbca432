//! Reports section
//!
//! Two levels: the tab strip, then the content of the active tab. The
//! monthly and revenue tabs list reports of that type in collection order;
//! analytics is a static placeholder.

use crate::render::node::{el, icon, Element, Node};
use crate::render::section::{ReportTab, Section};
use crate::store::{RecordStore, Report};

/// Full reports section with `active` selected
pub fn render(store: &RecordStore, active: ReportTab) -> Node {
    el("div")
        .class("section")
        .attr("data-section", Section::Reports)
        .child(el("h2").child(icon(Section::Reports.icon())).text(" Reports"))
        .child(tabs(active))
        .child(
            el("div")
                .class("tab-content")
                .id("reportTabContent")
                .attr("data-tab", active.as_str())
                .child(render_tab(store, active)),
        )
        .into()
}

/// Content of a single tab
pub fn render_tab(store: &RecordStore, tab: ReportTab) -> Node {
    match tab.report_type() {
        Some(report_type) => {
            let reports: Vec<Report> = store
                .reports()
                .into_iter()
                .filter(|r| r.report_type == report_type)
                .collect();
            report_grid(&reports).into()
        }
        None => analytics_placeholder().into(),
    }
}

fn tabs(active: ReportTab) -> Element {
    el("div").class("tabs").children(ReportTab::all().iter().map(|tab| {
        el("a")
            .class("tab")
            .class_if("active", *tab == active)
            .attr("data-tab", tab.as_str())
            .attr(
                "href",
                format!("/?section={}&tab={}", Section::Reports, tab.as_str()),
            )
            .text(tab.label())
    }))
}

fn report_grid(reports: &[Report]) -> Element {
    el("div").class("report-grid").children(reports.iter().map(|r| {
        el("div")
            .class("report-card")
            .attr("data-id", r.id)
            .child(el("h4").text(&r.title))
            .child(el("p").text(&r.summary))
            .child(el("small").text(r.date))
    }))
}

fn analytics_placeholder() -> Element {
    el("div").class("analytics-dashboard").child(
        el("div")
            .class("chart-container")
            .child(el("h3").text("Patient Growth"))
            .child(
                el("div")
                    .class("chart-placeholder")
                    .child(icon("fa-chart-line"))
                    .child(el("p").text("Interactive charts would be displayed here")),
            ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::FieldMap;

    fn card_ids(node: &Node) -> Vec<String> {
        node.find_by_class("report-card")
            .iter()
            .filter_map(|c| c.get_attr("data-id"))
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_default_tab_is_monthly() {
        let node = render(&RecordStore::seeded(), ReportTab::default());
        let active: Vec<_> = node
            .find_by_class("tab")
            .into_iter()
            .filter(|t| t.has_class("active"))
            .collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].get_attr("data-tab"), Some("monthly"));
        assert_eq!(node.find_by_class("tab").len(), 3);
    }

    #[test]
    fn test_monthly_tab_lists_reports_one_and_three() {
        let node = render_tab(&RecordStore::seeded(), ReportTab::Monthly);
        assert_eq!(card_ids(&node), vec!["1", "3"]);
    }

    #[test]
    fn test_revenue_tab() {
        let node = render_tab(&RecordStore::seeded(), ReportTab::Revenue);
        assert_eq!(card_ids(&node), vec!["2", "4"]);
        let titles: Vec<_> = node.find_by_tag("h4").iter().map(|h| h.text_content()).collect();
        assert_eq!(titles, vec!["Revenue Report", "Department Performance"]);
    }

    #[test]
    fn test_analytics_is_placeholder() {
        let node = render_tab(&RecordStore::seeded(), ReportTab::Analytics);
        assert!(node.find_by_class("report-card").is_empty());
        assert_eq!(node.find_by_class("chart-placeholder").len(), 1);
    }

    #[test]
    fn test_tab_reflects_appended_report() {
        let store = RecordStore::seeded();
        let mut fields = FieldMap::new();
        fields.insert("title".into(), "Q2 Revenue".into());
        fields.insert("date".into(), "2024-07-01".into());
        fields.insert("summary".into(), "Up 4%.".into());
        fields.insert("type".into(), "revenue".into());
        let created = store.append("reports", &fields).unwrap();

        let node = render(&store, ReportTab::Revenue);
        assert_eq!(
            card_ids(&node),
            vec!["2".to_string(), "4".to_string(), created.id().to_string()]
        );
    }
}
