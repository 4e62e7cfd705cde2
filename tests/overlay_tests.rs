// Host-side tests for HUD text formatting.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod overlay {
    include!("../src/overlay.rs");
}

use configurator_core::Phase;
use overlay::*;

#[test]
fn status_summary_prefers_failures() {
    let mut st = LoadStatus::default();
    assert_eq!(st.summary(), "Assets ready");
    st.pending = 2;
    assert_eq!(st.summary(), "Loading 2 assets…");
    st.pending = 1;
    assert_eq!(st.summary(), "Loading 1 asset…");
    st.failed.push("env.glb".to_string());
    assert_eq!(st.summary(), "Unavailable: env.glb");
}

#[test]
fn hud_shows_percentage_and_phase() {
    let st = LoadStatus::default();
    assert_eq!(
        hud_text(0.5, Phase::Animating, false, &st),
        "Height: 50% (moving) • Assets ready"
    );
    assert_eq!(
        hud_text(1.0, Phase::Idle, true, &st),
        "Height: 100% (resting) • click to toggle • Assets ready"
    );
}

#[test]
fn hud_clamps_out_of_range_height() {
    let st = LoadStatus::default();
    assert!(hud_text(1.7, Phase::Idle, false, &st).starts_with("Height: 100%"));
    assert!(hud_text(-0.3, Phase::Idle, false, &st).starts_with("Height: 0%"));
}
