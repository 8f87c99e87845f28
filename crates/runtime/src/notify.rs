use facility::SearchCategory;

pub const SUCCESS_TITLE: &str = "검색 완료!";
pub const SUCCESS_TEXT: &str = "주변 의료기관을 모두 찾았습니다.";

/// Transient success confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: &'static str,
    pub text: &'static str,
    /// Auto-dismiss delay.
    pub timer_ms: u32,
}

impl Toast {
    pub fn search_complete(timer_ms: u32) -> Self {
        Self {
            title: SUCCESS_TITLE,
            text: SUCCESS_TEXT,
            timer_ms,
        }
    }
}

/// User-facing feedback outside the two result surfaces: the status line,
/// blocking alerts, the success toast and the category buttons.
pub trait Notifier {
    fn status(&mut self, text: &str);
    fn clear_status(&mut self);
    fn alert(&mut self, text: &str);
    fn success(&mut self, toast: &Toast);
    /// Marks `category`'s trigger control active and the others inactive.
    fn highlight_category(&mut self, category: SearchCategory);
}
