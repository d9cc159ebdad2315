use crate::tween::Ease;

// Loading screen schedule, seconds after the page `load` event.
pub const LOADING_HALF_AT: f32 = 0.5;
pub const LOADING_FULL_AT: f32 = 1.5;
pub const LOADING_FADE_AT: f32 = 2.0;
pub const LOADING_FADE_SEC: f32 = 1.0;

// Menu intro
pub const INTRO_OFFSET_PX: f32 = -100.0;
pub const INTRO_DURATION_SEC: f32 = 1.0;
pub const INTRO_STAGGER_SEC: f32 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoadingState {
    /// Progress bar width in percent.
    pub bar_percent: f32,
    /// Target opacity of the loading overlay (the CSS transition fades it).
    pub overlay_opacity: f32,
    pub overlay_removed: bool,
    /// Seconds since the menu intro began, if it has.
    pub intro_elapsed: Option<f32>,
}

/// Simulated loading sequence followed by the menu intro.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoadingTimeline;

impl LoadingTimeline {
    pub fn state_at(&self, elapsed: f32) -> LoadingState {
        let bar_percent = if elapsed >= LOADING_FULL_AT {
            100.0
        } else if elapsed >= LOADING_HALF_AT {
            50.0
        } else {
            0.0
        };
        let fading = elapsed >= LOADING_FADE_AT;
        LoadingState {
            bar_percent,
            overlay_opacity: if fading { 0.0 } else { 1.0 },
            overlay_removed: elapsed >= LOADING_FADE_AT + LOADING_FADE_SEC,
            intro_elapsed: fading.then_some(elapsed - LOADING_FADE_AT),
        }
    }

    /// True once nothing further will change.
    pub fn is_complete(&self, elapsed: f32, menu_items: usize) -> bool {
        let state = self.state_at(elapsed);
        state.overlay_removed
            && state
                .intro_elapsed
                .is_some_and(|t| intro_item_at(menu_items.saturating_sub(1), t).1 >= 1.0)
    }
}

/// (x offset in px, opacity) of menu item `index` `t` seconds into the intro.
pub fn intro_item_at(index: usize, t: f32) -> (f32, f32) {
    let local = (t - index as f32 * INTRO_STAGGER_SEC) / INTRO_DURATION_SEC;
    let eased = Ease::Power2Out.apply(local);
    (INTRO_OFFSET_PX * (1.0 - eased), eased)
}
