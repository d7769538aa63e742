//! Confetti Component
//!
//! Full-screen falling pieces while a completion celebration is active,
//! plus the "shopping complete" banner.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

const COLORS: &[&str] = &["#f44336", "#2196f3", "#ffeb3b", "#4caf50", "#9c27b0", "#ff9800"];

const KEYFRAMES: &str = "@keyframes confetti-fall { \
    0% { transform: translateY(-10vh) rotate(0deg); opacity: 1; } \
    100% { transform: translateY(110vh) rotate(720deg); opacity: 0.6; } }";

/// Placement of one piece; spread evenly without a random source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceLayout {
    pub left_pct: u32,
    pub delay_ms: u32,
    pub fall_ms: u32,
    pub size_px: u32,
    pub color: &'static str,
}

impl PieceLayout {
    pub fn for_index(index: u32) -> Self {
        Self {
            left_pct: index.wrapping_mul(37) % 100,
            delay_ms: index.wrapping_mul(53) % 1500,
            fall_ms: 1800 + index.wrapping_mul(29) % 1200,
            size_px: 6 + index % 5,
            color: COLORS[index as usize % COLORS.len()],
        }
    }

    pub fn style(&self) -> String {
        format!(
            "position: absolute; top: 0; left: {}%; width: {}px; height: {}px; background: {}; \
             animation: confetti-fall {}ms linear {}ms infinite;",
            self.left_pct,
            self.size_px,
            self.size_px * 2,
            self.color,
            self.fall_ms,
            self.delay_ms,
        )
    }
}

#[component]
pub fn Confetti() -> impl IntoView {
    let ctx = use_app_context();
    let pieces = ctx.config().confetti_pieces;

    view! {
        <Show when=move || ctx.store.celebrating().get()>
            <div
                class="confetti-overlay"
                style="position: fixed; inset: 0; pointer-events: none; overflow: hidden; z-index: 1000;"
            >
                <style>{KEYFRAMES}</style>
                {(0..pieces).map(|i| {
                    let layout = PieceLayout::for_index(i);
                    view! { <span class="confetti-piece" style=layout.style()></span> }
                }).collect_view()}
            </div>
        </Show>
    }
}

/// Non-blocking notice shown for the same window as the confetti
#[component]
pub fn CompletionBanner() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <Show when=move || ctx.store.celebrating().get()>
            <div class="completion-banner" role="status">"Shopping complete!"</div>
        </Show>
    }
}
