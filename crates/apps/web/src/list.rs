use scene::{ListEntry, ListSurface};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

type ClickHandler = Closure<dyn FnMut(Event)>;

/// One rendered list item and the handlers attached to it.
pub struct PageItem {
    element: Option<Element>,
    _handlers: Vec<ClickHandler>,
}

/// [`ListSurface`] rendering into a container element.
pub struct DomListSurface {
    document: Document,
    container: Element,
}

impl DomListSurface {
    pub fn new(document: Document, container: Element) -> Self {
        Self {
            document,
            container,
        }
    }

    fn child(&self, parent: &Element, tag: &str, class: &str, text: &str) -> Result<Element, JsValue> {
        let el = self.document.create_element(tag)?;
        if !class.is_empty() {
            el.set_class_name(class);
        }
        el.set_text_content(Some(text));
        parent.append_child(&el)?;
        Ok(el)
    }

    fn build(&self, entry: &ListEntry) -> Result<PageItem, JsValue> {
        let item = self.document.create_element("div")?;
        item.set_class_name("hospital-item");
        item.set_id(&entry.dom_id);

        self.child(&item, "h4", "name", &format!("{} {}", entry.icon, entry.name))?;
        self.child(&item, "p", "address", &entry.address)?;
        self.child(&item, "p", "phone", &format!("📞 {}", entry.phone))?;
        self.child(&item, "p", "distance", &format!("📍 {}", entry.distance_label))?;
        if let Some(badge) = &entry.availability {
            let el = self.child(&item, "p", "availability", &badge.label)?;
            el.set_attribute("style", &format!("color: {}; font-weight: bold;", badge.color))?;
        }
        if let Some(status) = &entry.open_status {
            self.child(&item, "span", "open-status", status)?;
        }
        if let Some(hours) = &entry.hours {
            self.child(&item, "p", "hours", hours)?;
        }

        let mut handlers = Vec::with_capacity(entry.actions.len() + 1);
        let key = entry.key;
        for action in &entry.actions {
            let control = self.child(&item, "button", "action", action.label())?;
            let kind = action.kind();
            let handler = ClickHandler::new(move |event: Event| {
                event.stop_propagation();
                crate::activate_action(key, kind);
            });
            control.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
            handlers.push(handler);
        }

        let body = ClickHandler::new(move |_event: Event| crate::select_entry(key));
        item.add_event_listener_with_callback("click", body.as_ref().unchecked_ref())?;
        handlers.push(body);

        self.container.append_child(&item)?;
        Ok(PageItem {
            element: Some(item),
            _handlers: handlers,
        })
    }
}

impl ListSurface for DomListSurface {
    type Item = PageItem;

    fn clear(&mut self) {
        self.container.set_inner_html("");
    }

    fn append(&mut self, entry: &ListEntry) -> PageItem {
        self.build(entry).unwrap_or_else(|err| {
            crate::log_error("list item", &err);
            PageItem {
                element: None,
                _handlers: Vec::new(),
            }
        })
    }

    fn set_active(&mut self, item: &PageItem, active: bool) {
        if let Some(el) = &item.element {
            if let Err(err) = el.class_list().toggle_with_force("active", active) {
                crate::log_error("toggle active", &err);
            }
        }
    }

    fn scroll_into_view(&mut self, item: &PageItem) {
        if let Some(el) = &item.element {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Center);
            el.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}

