use facility::SearchCategory;

use crate::notify::{Notifier, Toast};

/// One piece of feedback, recorded for traceability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Status(String),
    ClearStatus,
    Alert(String),
    Success(Toast),
    Highlight(SearchCategory),
}

/// Notifier that only records what it was asked to show.
///
/// Tests assert on it directly; the command line driver prints from it.
#[derive(Debug, Default)]
pub struct NoticeBus {
    notices: Vec<Notice>,
}

impl NoticeBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn drain(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub fn alerts(&self) -> impl Iterator<Item = &str> + '_ {
        self.notices.iter().filter_map(|n| match n {
            Notice::Alert(text) => Some(text.as_str()),
            _ => None,
        })
    }

    /// Text the status line would show now.
    pub fn current_status(&self) -> Option<&str> {
        self.notices.iter().rev().find_map(|n| match n {
            Notice::Status(text) => Some(Some(text.as_str())),
            Notice::ClearStatus => Some(None),
            _ => None,
        })?
    }

    pub fn succeeded(&self) -> bool {
        self.notices.iter().any(|n| matches!(n, Notice::Success(_)))
    }
}

impl Notifier for NoticeBus {
    fn status(&mut self, text: &str) {
        self.notices.push(Notice::Status(text.to_string()));
    }

    fn clear_status(&mut self) {
        self.notices.push(Notice::ClearStatus);
    }

    fn alert(&mut self, text: &str) {
        self.notices.push(Notice::Alert(text.to_string()));
    }

    fn success(&mut self, toast: &Toast) {
        self.notices.push(Notice::Success(toast.clone()));
    }

    fn highlight_category(&mut self, category: SearchCategory) {
        self.notices.push(Notice::Highlight(category));
    }
}

#[cfg(test)]
mod tests {
    use super::{Notice, NoticeBus};
    use crate::notify::{Notifier, Toast};

    #[test]
    fn current_status_follows_last_update() {
        let mut bus = NoticeBus::new();
        assert_eq!(bus.current_status(), None);
        bus.status("🏥 병원 조회 중...");
        assert_eq!(bus.current_status(), Some("🏥 병원 조회 중..."));
        bus.alert("x");
        assert_eq!(bus.current_status(), Some("🏥 병원 조회 중..."));
        bus.clear_status();
        assert_eq!(bus.current_status(), None);
    }

    #[test]
    fn drain_clears_notices() {
        let mut bus = NoticeBus::new();
        bus.success(&Toast::search_complete(1700));
        assert!(bus.succeeded());
        let drained = bus.drain();
        assert_eq!(drained, vec![Notice::Success(Toast::search_complete(1700))]);
        assert!(bus.notices().is_empty());
    }
}
