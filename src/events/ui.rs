use crate::constants::{
    CONFIRM_DISMISS_MS, LISTEN_DURATION_MS, LISTEN_LABEL_ACTIVE, LISTEN_LABEL_REPLAY,
    TYPEWRITER_DELAY_MS,
};
use crate::voiceover::{ListenState, Typewriter, VOICEOVER_SCRIPT};
use crate::{api, dom, modal};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Listen button: flips the simulated-playback flag, swaps the label, and
/// runs the typewriter reveal. Re-activation while playing is a no-op; the
/// reset timer and typewriter chain from an earlier activation are cancelled
/// via the state's generation counter before a new one starts.
pub fn wire_listen_button(document: &web::Document) -> anyhow::Result<()> {
    let listen_btn = dom::require_element(document, "listen-btn")?;
    let voiceover_el = dom::require_element(document, "voiceover-text")?;

    let state = Rc::new(RefCell::new(ListenState::new()));
    let reset_handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

    let btn = listen_btn.clone();
    dom::add_click_listener(&listen_btn, move |_| {
        let Some(generation) = state.borrow_mut().press() else {
            return; // already playing
        };
        btn.set_text_content(Some(LISTEN_LABEL_ACTIVE));
        let _ = btn.class_list().add_1("active");

        // Replace any stale reset timer before scheduling the new one.
        if let Some(handle) = reset_handle.take() {
            dom::clear_timeout(handle);
        }

        start_typewriter(voiceover_el.clone(), state.clone(), generation);

        let state_done = state.clone();
        let btn_done = btn.clone();
        let handle_cell = reset_handle.clone();
        let handle = dom::set_timeout(
            move || {
                handle_cell.set(None);
                if state_done.borrow_mut().finish(generation) {
                    btn_done.set_text_content(Some(LISTEN_LABEL_REPLAY));
                    let _ = btn_done.class_list().remove_1("active");
                }
            },
            LISTEN_DURATION_MS,
        );
        reset_handle.set(handle);
    });
    Ok(())
}

fn start_typewriter(el: web::Element, state: Rc<RefCell<ListenState>>, generation: u64) {
    el.set_text_content(Some(""));
    let typewriter = Rc::new(RefCell::new(Typewriter::new(VOICEOVER_SCRIPT)));
    schedule_next_char(el, state, generation, typewriter);
}

fn schedule_next_char(
    el: web::Element,
    state: Rc<RefCell<ListenState>>,
    generation: u64,
    typewriter: Rc<RefCell<Typewriter>>,
) {
    let _ = dom::set_timeout(
        move || {
            if state.borrow().generation() != generation {
                return; // superseded by a newer activation
            }
            if let Some(c) = typewriter.borrow_mut().advance() {
                let mut text = el.text_content().unwrap_or_default();
                text.push(c);
                el.set_text_content(Some(&text));
                schedule_next_char(el, state, generation, typewriter);
            }
        },
        TYPEWRITER_DELAY_MS,
    );
}

/// Join button opens the modal; the close control or a click that lands on
/// the backdrop (the modal element itself, not its content) closes it.
pub fn wire_modal(document: &web::Document) -> anyhow::Result<()> {
    let join_btn = dom::require_element(document, "join-btn")?;
    let modal_el = dom::require_element(document, modal::MODAL_ID)?;
    let close_btn = document
        .query_selector(".close-modal")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("missing .close-modal"))?;

    let doc = document.clone();
    dom::add_click_listener(&join_btn, move |_| modal::open(&doc));

    let doc = document.clone();
    dom::add_click_listener(&close_btn, move |_| modal::close(&doc));

    let doc = document.clone();
    let backdrop = modal_el.clone();
    dom::add_click_listener(&modal_el, move |ev| {
        if hit_backdrop(&ev, &backdrop) {
            modal::close(&doc);
        }
    });
    Ok(())
}

fn hit_backdrop(ev: &web::Event, modal_el: &web::Element) -> bool {
    match ev.target() {
        Some(target) => JsValue::from(target) == *AsRef::<JsValue>::as_ref(modal_el),
        None => false,
    }
}

/// Email form: prevent navigation, POST the address, and show the same
/// confirmation whether the request was accepted or failed (the failure is
/// only logged). The modal dismisses itself shortly after.
pub fn wire_email_form(document: &web::Document) -> anyhow::Result<()> {
    let form = dom::require_element(document, "email-form")?;
    let input: web::HtmlInputElement = dom::require_element(document, "email-input")?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let doc = document.clone();
    let form_el = form.clone();
    dom::add_event_listener(&form, "submit", move |ev| {
        ev.prevent_default();
        let email = input.value();
        let doc = doc.clone();
        let form_el = form_el.clone();
        spawn_local(async move {
            let outcome = api::submit_email(&email).await;
            if let api::JoinOutcome::Failed(reason) = &outcome {
                log::warn!("join submission failed, showing confirmation anyway: {reason}");
            }
            show_confirmation(&form_el, outcome.confirmation_text());
            let _ = dom::set_timeout(move || modal::close(&doc), CONFIRM_DISMISS_MS);
        });
    });
    Ok(())
}

fn show_confirmation(form: &web::Element, text: &str) {
    form.set_inner_html(&format!(
        "<p style=\"color: var(--accent-life); text-align: center;\">{text}</p>"
    ));
}
