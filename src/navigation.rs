//! Navigation Controller
//!
//! Holds the view currently shown in the content panel and schedules the
//! render that follows a navigation click. The loader delay before a render
//! is cosmetic; what matters is ordering: every navigation supersedes the
//! previous one, so a render scheduled for an older click is cancelled and
//! can never land on top of a newer view.

use serde::Serialize;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use crate::render::{self, Node, ReportTab, Section};
use crate::store::RecordStore;

/// Timing of the simulated loading transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationConfig {
    /// How long the loader shows before the section is swapped in
    pub loader_delay: Duration,
    /// Exit transition of the old content
    pub transition: Duration,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            loader_delay: Duration::from_millis(800),
            transition: Duration::from_millis(300),
        }
    }
}

impl NavigationConfig {
    /// Total time between a click and the new content appearing
    pub fn render_delay(&self) -> Duration {
        self.loader_delay + self.transition
    }
}

/// Snapshot of the content panel
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct View {
    /// Incremented on every navigation
    pub generation: u64,
    pub section: Section,
    pub tab: ReportTab,
    /// True between a navigation and its render
    pub loading: bool,
    /// Rendered content of the last committed navigation
    pub content: Node,
}

pub struct NavigationController {
    store: Arc<RecordStore>,
    config: NavigationConfig,
    view: Arc<RwLock<View>>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl NavigationController {
    /// Create a controller showing the dashboard
    pub fn new(store: Arc<RecordStore>, config: NavigationConfig) -> Self {
        let content = render::render(&store, Section::Dashboard, ReportTab::default());
        let view = View {
            generation: 0,
            section: Section::Dashboard,
            tab: ReportTab::default(),
            loading: false,
            content,
        };

        Self {
            store,
            config,
            view: Arc::new(RwLock::new(view)),
            pending: Mutex::new(None),
        }
    }

    pub fn config(&self) -> NavigationConfig {
        self.config
    }

    /// Navigate to a section by id; returns the navigation's generation
    ///
    /// Unknown section ids navigate to the dashboard. Any render still
    /// pending from an earlier navigation is cancelled.
    pub async fn navigate(&self, section_id: &str, tab: Option<&str>) -> u64 {
        let section = Section::parse_or_default(section_id);
        let tab = ReportTab::parse_or_default(tab);

        // The view write guard orders concurrent navigations: the generation
        // bump and the pending swap happen while it is held, so the task
        // replaced here always belongs to an older generation.
        let mut view = self.view.write().await;
        let generation = view.generation + 1;
        view.generation = generation;
        view.section = section;
        view.tab = tab;
        view.loading = true;

        let store = Arc::clone(&self.store);
        let shared = Arc::clone(&self.view);
        let delay = self.config.render_delay();

        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let content = render::render(&store, section, tab);
            let mut view = shared.write().await;
            if view.generation != generation {
                tracing::debug!(generation, current = view.generation, "Dropping stale render");
                return;
            }
            view.content = content;
            view.loading = false;
            tracing::debug!(generation, section = %section, "Committed render");
        });

        let previous = self
            .pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(task);
        if let Some(previous) = previous {
            previous.abort();
        }
        drop(view);

        tracing::info!(generation, section = %section, tab = tab.as_str(), "Navigation scheduled");
        generation
    }

    /// Current state of the content panel
    pub async fn current(&self) -> View {
        self.view.read().await.clone()
    }

    /// Abort any pending render
    pub fn cancel_pending(&self) {
        if let Some(task) = self
            .pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        {
            task.abort();
        }
    }
}

impl Drop for NavigationController {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> NavigationController {
        NavigationController::new(Arc::new(RecordStore::seeded()), NavigationConfig::default())
    }

    #[tokio::test]
    async fn test_initial_view_is_dashboard() {
        let nav = controller();
        let view = nav.current().await;
        assert_eq!(view.generation, 0);
        assert_eq!(view.section, Section::Dashboard);
        assert!(!view.loading);
        assert_eq!(view.content.find_by_class("card").len(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_navigation_renders_after_delay() {
        let nav = controller();
        let generation = nav.navigate("patients", None).await;
        assert_eq!(generation, 1);

        let view = nav.current().await;
        assert!(view.loading);
        assert_eq!(view.section, Section::Patients);
        // still showing the old content
        assert!(view.content.find_by_class("table-row").is_empty());

        tokio::time::sleep(nav.config().render_delay() + Duration::from_millis(1)).await;

        let view = nav.current().await;
        assert!(!view.loading);
        assert_eq!(view.content.find_by_class("table-row").len(), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_second_navigation_wins() {
        let nav = controller();
        nav.navigate("doctors", None).await;
        tokio::time::sleep(Duration::from_millis(200)).await;
        let second = nav.navigate("reports", Some("revenue")).await;

        // Past the first render's deadline but before the second's
        tokio::time::sleep(nav.config().render_delay() - Duration::from_millis(100)).await;
        let view = nav.current().await;
        assert_eq!(view.generation, second);
        assert!(view.loading);
        assert!(view.content.find_by_class("table-row").is_empty());

        tokio::time::sleep(Duration::from_millis(200)).await;
        let view = nav.current().await;
        assert!(!view.loading);
        assert_eq!(view.section, Section::Reports);
        assert_eq!(view.tab, ReportTab::Revenue);
        assert_eq!(view.content.find_by_class("report-card").len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unknown_section_navigates_to_dashboard() {
        let nav = controller();
        nav.navigate("foo", None).await;
        tokio::time::sleep(nav.config().render_delay() * 2).await;

        let view = nav.current().await;
        assert_eq!(view.section, Section::Dashboard);
        assert!(!view.loading);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_navigations_never_stall() {
        let config = NavigationConfig {
            loader_delay: Duration::ZERO,
            transition: Duration::ZERO,
        };

        for _ in 0..500 {
            let nav = Arc::new(NavigationController::new(
                Arc::new(RecordStore::seeded()),
                config,
            ));

            let a = tokio::spawn({
                let nav = Arc::clone(&nav);
                async move { nav.navigate("patients", None).await }
            });
            let b = tokio::spawn({
                let nav = Arc::clone(&nav);
                async move { nav.navigate("doctors", None).await }
            });
            let (a, b) = (a.await.unwrap(), b.await.unwrap());
            let latest = a.max(b);
            assert_eq!(latest, 2);

            let view = tokio::time::timeout(Duration::from_secs(5), async {
                loop {
                    let view = nav.current().await;
                    if !view.loading {
                        return view;
                    }
                    tokio::time::sleep(Duration::from_millis(1)).await;
                }
            })
            .await
            .expect("render never committed");

            assert_eq!(view.generation, latest);
            let (expected, rows) = if a == latest {
                (Section::Patients, 5)
            } else {
                (Section::Doctors, 4)
            };
            assert_eq!(view.section, expected);
            assert_eq!(view.content.find_by_class("table-row").len(), rows);
        }
    }

    #[test]
    fn test_render_delay() {
        let config = NavigationConfig::default();
        assert_eq!(config.render_delay(), Duration::from_millis(1100));
    }
}
