//! Settings section
//!
//! Three static panels. Reads nothing from the store.

use crate::render::node::{el, icon, Element, Node};
use crate::render::section::Section;

pub fn render() -> Node {
    el("div")
        .class("section")
        .attr("data-section", Section::Settings)
        .child(el("h2").child(icon(Section::Settings.icon())).text(" Settings"))
        .child(
            el("div")
                .class("settings-grid")
                .child(appearance())
                .child(notifications())
                .child(profile()),
        )
        .into()
}

fn panel(icon_name: &str, title: &str, item: Element) -> Element {
    el("div")
        .class("settings-card")
        .child(el("h3").child(icon(icon_name)).text(format!(" {}", title)))
        .child(el("div").class("setting-item").child(item))
}

fn appearance() -> Element {
    panel(
        "fa-palette",
        "Appearance",
        el("div").child(el("label").text("Theme:")).child(
            el("button")
                .class("btn")
                .id("settingsThemeToggle")
                .attr("type", "button")
                .attr("data-action", "toggle-theme")
                .child(icon("fa-moon"))
                .text(" Toggle Light/Dark"),
        ),
    )
}

fn notifications() -> Element {
    panel(
        "fa-bell",
        "Notifications",
        el("label")
            .child(
                el("input")
                    .attr("type", "checkbox")
                    .attr("name", "notifications")
                    .attr("checked", ""),
            )
            .text(" Enable notifications"),
    )
}

fn profile() -> Element {
    panel(
        "fa-user",
        "Profile",
        el("button")
            .class("btn")
            .attr("type", "button")
            .child(icon("fa-user"))
            .text(" Edit Profile"),
    )
}
