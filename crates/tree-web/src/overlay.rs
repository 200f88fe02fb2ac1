use crate::dom;
use tree_core::{MorphState, SUBTITLE, TITLE_LINES};
use web_sys as web;

pub const STATUS_ID: &str = "status";
pub const CAPTION_ID: &str = "caption";
pub const TOGGLE_ID: &str = "toggle-btn";

/// Fill the static title block once at startup.
pub fn init(document: &web::Document) {
    dom::set_text(document, "title-top", TITLE_LINES[0]);
    dom::set_text(document, "title-bottom", TITLE_LINES[1]);
    dom::set_text(document, "subtitle", SUBTITLE);
}

/// Bring the status line, caption and button label in line with `state`.
pub fn sync(document: &web::Document, state: MorphState) {
    dom::set_text(document, STATUS_ID, state.status_label());
    dom::set_text(document, CAPTION_ID, state.caption());
    dom::set_text(document, TOGGLE_ID, state.action_label());
    if let Some(body) = document.body() {
        let value = if state.is_assembled() {
            "assembled"
        } else {
            "scattered"
        };
        let _ = body.set_attribute("data-state", value);
    }
}
