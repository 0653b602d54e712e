use crate::constants::{PARALLAX_FACTOR, REVEAL_ROOT_MARGIN, REVEAL_STAGGER_MS, REVEAL_THRESHOLD};
use crate::dom;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys as web;

const SECTION_SELECTOR: &str = ".content-section";
const REVEAL_CHILD_SELECTOR: &str = "p, h2, h3, .pillar";

/// Scroll-triggered section reveals (IntersectionObserver, not scroll
/// polling) plus the hero parallax offset.
pub fn wire_scroll_effects(document: &web::Document) -> anyhow::Result<()> {
    let sections = document
        .query_selector_all(SECTION_SELECTOR)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    for i in 0..sections.length() {
        if let Some(section) = element_at(&sections, i) {
            prepare_section(&section);
        }
    }

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    let _ = target.class_list().add_1("visible");
                    reveal_children(&target);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    callback.forget();

    for i in 0..sections.length() {
        if let Some(section) = element_at(&sections, i) {
            observer.observe(&section);
        }
    }

    wire_hero_parallax(document);
    Ok(())
}

fn element_at(list: &web::NodeList, index: u32) -> Option<web::Element> {
    list.item(index).and_then(|n| n.dyn_into().ok())
}

fn style_of(el: &web::Element) -> Option<web::CssStyleDeclaration> {
    el.dyn_ref::<web::HtmlElement>().map(|h| h.style())
}

/// Seed the hidden state the reveal animates away from.
fn prepare_section(section: &web::Element) {
    let Ok(children) = section.query_selector_all(REVEAL_CHILD_SELECTOR) else {
        return;
    };
    for i in 0..children.length() {
        let Some(el) = element_at(&children, i) else {
            continue;
        };
        if let Some(style) = style_of(&el) {
            let _ = style.set_property("opacity", "0");
            let _ = style.set_property("transform", "translateY(20px)");
            let _ = style.set_property("transition", "all 0.6s ease-out");
        }
    }
}

fn reveal_children(section: &web::Element) {
    let Ok(children) = section.query_selector_all(REVEAL_CHILD_SELECTOR) else {
        return;
    };
    for i in 0..children.length() {
        let Some(el) = element_at(&children, i) else {
            continue;
        };
        let _ = dom::set_timeout(
            move || {
                if let Some(style) = style_of(&el) {
                    let _ = style.set_property("opacity", "1");
                    let _ = style.set_property("transform", "translateY(0)");
                }
            },
            REVEAL_STAGGER_MS * i as i32,
        );
    }
}

fn wire_hero_parallax(document: &web::Document) {
    let Some(hero) = document.get_element_by_id("hero") else {
        return;
    };
    dom::add_window_listener("scroll", move |_| {
        let Some(window) = web::window() else {
            return;
        };
        let scrolled = window.scroll_y().unwrap_or(0.0);
        if let Some(style) = style_of(&hero) {
            let _ = style.set_property(
                "transform",
                &format!("translateY({}px)", scrolled * PARALLAX_FACTOR),
            );
        }
    });
}
