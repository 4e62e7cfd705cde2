use configurator_core::Phase;
use web_sys as web;

/// Asset loading progress shown in the HUD.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoadStatus {
    pub pending: usize,
    pub failed: Vec<String>,
}

impl LoadStatus {
    pub fn summary(&self) -> String {
        if !self.failed.is_empty() {
            format!("Unavailable: {}", self.failed.join(", "))
        } else if self.pending > 0 {
            format!("Loading {} asset{}…", self.pending, if self.pending == 1 { "" } else { "s" })
        } else {
            "Assets ready".to_string()
        }
    }
}

pub fn hud_text(height: f32, phase: Phase, hovering: bool, status: &LoadStatus) -> String {
    let motion = match phase {
        Phase::Idle => "resting",
        Phase::Animating => "moving",
    };
    let hint = if hovering { " • click to toggle" } else { "" };
    format!(
        "Height: {:.0}% ({}){} • {}",
        height.clamp(0.0, 1.0) * 100.0,
        motion,
        hint,
        status.summary()
    )
}

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(crate::constants::HUD_ID) {
        _ = el.class_list().remove_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(crate::constants::HUD_ID) {
        _ = el.class_list().add_1("hidden");
        _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    if let Some(el) = document.get_element_by_id(crate::constants::HUD_ID) {
        if el.class_list().contains("hidden") {
            return true;
        }
        return el
            .get_attribute("style")
            .map(|s| s.contains("display:none"))
            .unwrap_or(false);
    }
    false
}

#[inline]
pub fn toggle(document: &web::Document) {
    if is_hidden(document) {
        show(document);
    } else {
        hide(document);
    }
}

/// Replace the HUD text if it changed.
pub fn update_hud(document: &web::Document, text: &str) {
    if let Some(el) = document.get_element_by_id(crate::constants::HUD_ID) {
        if el.text_content().as_deref() != Some(text) {
            el.set_text_content(Some(text));
        }
    }
}
