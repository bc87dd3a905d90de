use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

use super::PageController;
use super::events::{listen, log_err, query_all};
use crate::config::PageConfig;
use crate::state::nav::{NavLink, Section, active_flags, current_section, fragment_target};

impl PageController {
    /// Smooth-scroll for every `href="#..."` anchor.
    pub(super) fn wire_fragment_links(&self) {
        for link in query_all(&self.document, &self.config.selectors.fragment_links) {
            let document = self.document.clone();
            let config = Rc::clone(&self.config);
            let anchor = link.clone();
            listen(&link, "click", move |event| {
                on_fragment_click(&document, &config, &anchor, &event);
            });
        }
    }

    /// Keep the nav indicator in sync with the scroll position.
    pub(super) fn wire_scroll_tracker(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let sections: Vec<HtmlElement> = query_all(&self.document, &self.config.selectors.sections)
            .into_iter()
            .filter(|el| el.is_instance_of::<HtmlElement>())
            .map(JsCast::unchecked_into::<HtmlElement>)
            .collect();
        let icons = query_all(&self.document, &self.config.selectors.nav_icons);
        if sections.is_empty() || icons.is_empty() {
            log::debug!("nav: {} section(s), {} icon(s); scroll tracking idle", sections.len(), icons.len());
        }
        let config = Rc::clone(&self.config);
        let win = window.clone();
        listen(&window, "scroll", move |_| {
            update_active(&win, &sections, &icons, &config);
        });
    }
}

fn on_fragment_click(document: &Document, config: &PageConfig, anchor: &Element, event: &Event) {
    let href = anchor.get_attribute("href").unwrap_or_default();
    let Some(id) = fragment_target(&href) else {
        return;
    };
    event.prevent_default();
    let Some(target) = document.get_element_by_id(id) else {
        log::debug!("nav: no element for {href}");
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);

    let active = &config.selectors.active_class;
    for icon in query_all(document, &config.selectors.nav_icons) {
        log_err(icon.class_list().remove_1(active), "nav: clear active");
    }
    log_err(anchor.class_list().add_1(active), "nav: mark active");
}

fn update_active(window: &Window, sections: &[HtmlElement], icons: &[Element], config: &PageConfig) {
    let scroll_y = match window.scroll_y() {
        Ok(y) => y,
        Err(err) => {
            log::warn!("nav: reading scroll position failed: {err:?}");
            return;
        }
    };
    let tracked: Vec<Section> = sections
        .iter()
        .map(|el| Section::new(el.id(), f64::from(el.offset_top()), f64::from(el.client_height())))
        .collect();
    let current = current_section(scroll_y, config.scroll_lookahead, &tracked);

    let links: Vec<NavLink> = icons
        .iter()
        .map(|icon| NavLink::new(icon.get_attribute("href").unwrap_or_default()))
        .collect();
    let active = &config.selectors.active_class;
    for (icon, on) in icons.iter().zip(active_flags(&links, current)) {
        log_err(icon.class_list().toggle_with_force(active, on), "nav: update active");
    }
}
