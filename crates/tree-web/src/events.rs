use crate::dom;
use crate::input;
use crate::overlay;
use std::cell::RefCell;
use std::rc::Rc;
use tree_core::Scene;
use wasm_bindgen::JsCast;
use web_sys as web;

fn toggle(scene: &Rc<RefCell<Scene>>, document: &web::Document) {
    let state = scene.borrow_mut().toggle();
    overlay::sync(document, state);
}

/// Hook the toggle button and the Space/Enter shortcut up to the scene.
pub fn wire_toggle(document: &web::Document, scene: Rc<RefCell<Scene>>) {
    {
        let scene = scene.clone();
        let doc = document.clone();
        dom::add_click_listener(document, overlay::TOGGLE_ID, move || toggle(&scene, &doc));
    }
    let doc = document.clone();
    dom::add_keydown_listener(document, move |ev| {
        let on_button = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .map(|el| el.id() == overlay::TOGGLE_ID)
            .unwrap_or(false);
        if input::should_handle_keydown(&ev.key(), ev.repeat(), on_button) {
            ev.prevent_default();
            toggle(&scene, &doc);
        }
    });
}
