use facility::SearchCategory;
use js_sys::{Object, Reflect};
use runtime::{Notifier, Toast};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

use crate::kakao::swal_fire;

pub const STATUS_ID: &str = "status";

fn button_id(category: SearchCategory) -> String {
    format!("btn-{}", category.as_str())
}

/// Status line, window alerts, SweetAlert toast and the category buttons.
pub struct PageNotifier {
    window: Window,
    document: Document,
}

impl PageNotifier {
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }

    fn set_status_text(&self, text: &str) {
        if let Some(el) = self.document.get_element_by_id(STATUS_ID) {
            el.set_text_content(Some(text));
        }
    }

    fn toast_options(toast: &Toast) -> Result<Object, JsValue> {
        let options = Object::new();
        Reflect::set(&options, &"icon".into(), &"success".into())?;
        Reflect::set(&options, &"title".into(), &toast.title.into())?;
        Reflect::set(&options, &"text".into(), &toast.text.into())?;
        Reflect::set(&options, &"timer".into(), &toast.timer_ms.into())?;
        Reflect::set(&options, &"showConfirmButton".into(), &JsValue::FALSE)?;
        Ok(options)
    }
}

impl Notifier for PageNotifier {
    fn status(&mut self, text: &str) {
        self.set_status_text(text);
    }

    fn clear_status(&mut self) {
        self.set_status_text("");
    }

    fn alert(&mut self, text: &str) {
        if let Err(err) = self.window.alert_with_message(text) {
            crate::log_error("alert", &err);
        }
    }

    fn success(&mut self, toast: &Toast) {
        match Self::toast_options(toast) {
            Ok(options) => swal_fire(&options),
            Err(err) => crate::log_error("toast", &err),
        }
    }

    fn highlight_category(&mut self, category: SearchCategory) {
        for each in SearchCategory::ALL {
            let Some(button) = self.document.get_element_by_id(&button_id(each)) else {
                continue;
            };
            if let Err(err) = button.class_list().toggle_with_force("active", each == category) {
                crate::log_error("highlight", &err);
            }
        }
    }
}
