//! Page Layout
//!
//! The page chrome around the content panel: sidebar navigation, header with
//! the theme toggle, loader, and the modal that hosts add-record forms.

use serde::{Deserialize, Serialize};

use crate::render::node::{el, icon, Element, Node};
use crate::render::section::Section;

/// Colour scheme applied as the `<body>` class
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn parse_or_default(id: Option<&str>) -> Self {
        match id {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Header toggle shows the icon of the theme it switches to
    fn toggle_icon(&self) -> &'static str {
        match self {
            Theme::Light => "fa-moon",
            Theme::Dark => "fa-sun",
        }
    }
}

/// Everything the page shell needs besides the rendered section
#[derive(Debug, Clone, Default)]
pub struct PageOptions {
    pub active: Section,
    pub theme: Theme,
    /// Rendered form shown in the open modal
    pub modal: Option<Node>,
}

const STYLE: &str = "\
.hidden{display:none}\
.status-badge{padding:.3rem .8rem;border-radius:1rem;font-size:.8rem;font-weight:600;text-transform:uppercase}\
.status-badge.active,.status-badge.completed,.status-badge.paid{background:rgba(72,187,120,.2);color:#48bb78}\
.status-badge.discharged{background:rgba(66,153,225,.2);color:#4299e1}\
.status-badge.scheduled{background:rgba(237,137,54,.2);color:#ed8936}\
.status-badge.cancelled,.status-badge.unpaid{background:rgba(245,101,101,.2);color:#f56565}\
.dashboard-cards,.report-grid,.settings-grid{display:grid;grid-template-columns:repeat(auto-fit,minmax(220px,1fr));gap:1.5rem}\
.tab.active{font-weight:700;border-bottom:2px solid currentColor}\
.form-error{color:#f56565}\
body.dark{background:#1a202c;color:#e2e8f0}";

const SCRIPT: &str = "\
document.querySelectorAll('[data-action=\"toggle-theme\"]').forEach(function(b){\
b.addEventListener('click',function(e){e.preventDefault();document.body.classList.toggle('dark');});});\
document.querySelectorAll('.card[data-count]').forEach(function(card){\
var target=parseInt(card.dataset.count,10),step=target/50,current=0,counter=card.querySelector('.counter');\
var timer=setInterval(function(){current+=step;if(current>=target){current=target;clearInterval(timer);}\
counter.textContent=Math.floor(current).toLocaleString();},30);});";

/// Full HTML document for `content`
pub fn page(content: Node, options: &PageOptions) -> Node {
    let head = el("head")
        .child(el("meta").attr("charset", "utf-8"))
        .child(
            el("meta")
                .attr("name", "viewport")
                .attr("content", "width=device-width, initial-scale=1"),
        )
        .child(el("title").text("Hospital Admin Dashboard"))
        .child(
            el("link")
                .attr("rel", "stylesheet")
                .attr(
                    "href",
                    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.0/css/all.min.css",
                ),
        )
        .child(el("style").text(STYLE));

    let body = el("body")
        .class_if("dark", options.theme == Theme::Dark)
        .child(sidebar(options.active))
        .child(
            el("div")
                .class("main")
                .child(header(options))
                .child(el("div").id("loader").class("loader").class("hidden"))
                .child(el("main").id("content").child(content)),
        )
        .child(modal(options))
        .child(el("script").text(SCRIPT));

    el("html").attr("lang", "en").child(head).child(body).into()
}

/// Serialize a page tree with its doctype
pub fn document(page: &Node) -> String {
    format!("<!DOCTYPE html>{}", page)
}

/// Link to a section
pub fn section_href(section: Section) -> String {
    format!("/?section={}", section)
}

fn sidebar(active: Section) -> Element {
    el("aside")
        .id("sidebar")
        .class("sidebar")
        .child(
            el("div")
                .class("sidebar-header")
                .child(el("span").class("logo").child(icon("fa-hospital")).text(" MedBoard"))
                .child(
                    el("button")
                        .id("sidebarToggle")
                        .attr("type", "button")
                        .child(icon("fa-bars")),
                ),
        )
        .child(el("ul").class("sidebar-nav").children(Section::all().iter().map(|s| {
            el("li")
                .class_if("active", *s == active)
                .attr("data-section", s)
                .child(
                    el("a")
                        .attr("href", section_href(*s))
                        .child(icon(s.icon()))
                        .text(format!(" {}", s.label())),
                )
        })))
}

fn header(options: &PageOptions) -> Element {
    el("header")
        .class("topbar")
        .child(
            el("button")
                .id("mobileSidebarToggle")
                .attr("type", "button")
                .child(icon("fa-bars")),
        )
        .child(el("h1").text(options.active.label()))
        .child(
            el("button")
                .id("themeToggle")
                .attr("type", "button")
                .attr("data-action", "toggle-theme")
                .attr("data-next-theme", options.theme.toggled().as_str())
                .child(icon(options.theme.toggle_icon())),
        )
}

fn modal(options: &PageOptions) -> Element {
    let body = el("div").id("modalBody");
    let body = match &options.modal {
        Some(form) => body.child(form.clone()),
        None => body,
    };

    el("div")
        .id("modal")
        .class("modal")
        .class_if("hidden", options.modal.is_none())
        .child(
            el("div")
                .class("modal-content")
                .child(
                    el("a")
                        .id("closeModal")
                        .class("close")
                        .attr("href", section_href(options.active))
                        .text("×"),
                )
                .child(body),
        )
}
