//! Loading screen and menu intro, driven from [`radio_core::LoadingTimeline`].

use crate::dom;
use instant::Instant;
use radio_core::{intro_item_at, LoadingState, LoadingTimeline};
use web_sys as web;

pub struct LoadingOverlay {
    bar: Option<web::HtmlElement>,
    screen: Option<web::HtmlElement>,
    menu_items: Vec<web::HtmlElement>,
    timeline: LoadingTimeline,
    started: Instant,
    last: Option<LoadingState>,
}

fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}

impl LoadingOverlay {
    pub fn from_document(document: &web::Document) -> Self {
        let bar = dom::query::<web::HtmlElement>(document, ".bar")
            .map_err(|e| log::warn!("[ui] {e}"))
            .ok();
        let screen = dom::query::<web::HtmlElement>(document, "#loading-screen")
            .map_err(|e| log::warn!("[ui] {e}"))
            .ok();
        let menu_items = dom::query_all::<web::HtmlElement>(document, ".menu li");
        // Hidden until the intro reaches them.
        for item in &menu_items {
            let (x, opacity) = intro_item_at(0, 0.0);
            set_style(item, "transform", &format!("translateX({x}px)"));
            set_style(item, "opacity", &opacity.to_string());
        }
        Self {
            bar,
            screen,
            menu_items,
            timeline: LoadingTimeline,
            started: Instant::now(),
            last: None,
        }
    }

    /// Apply the timeline at the current time. Returns `false` once done.
    pub fn step(&mut self) -> bool {
        let elapsed = self.started.elapsed().as_secs_f32();
        let state = self.timeline.state_at(elapsed);
        let prev = self.last.replace(state);

        if prev.map(|p| p.bar_percent) != Some(state.bar_percent) {
            if let Some(bar) = &self.bar {
                set_style(bar, "width", &format!("{}%", state.bar_percent));
            }
        }
        if prev.map(|p| p.overlay_opacity) != Some(state.overlay_opacity) {
            if let Some(screen) = &self.screen {
                set_style(screen, "opacity", &state.overlay_opacity.to_string());
            }
        }
        if state.overlay_removed {
            if let Some(screen) = self.screen.take() {
                screen.remove();
                log::info!("[ui] loading screen removed");
            }
        }
        if let Some(t) = state.intro_elapsed {
            for (i, item) in self.menu_items.iter().enumerate() {
                let (x, opacity) = intro_item_at(i, t);
                set_style(item, "transform", &format!("translateX({x}px)"));
                set_style(item, "opacity", &opacity.to_string());
            }
        }

        !self.timeline.is_complete(elapsed, self.menu_items.len())
    }
}
