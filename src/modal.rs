use web_sys as web;

pub const MODAL_ID: &str = "email-modal";

#[inline]
pub fn open(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(MODAL_ID) {
        let _ = el.class_list().add_1("active");
        let _ = el.set_attribute("aria-hidden", "false");
    }
}

#[inline]
pub fn close(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(MODAL_ID) {
        let _ = el.class_list().remove_1("active");
        let _ = el.set_attribute("aria-hidden", "true");
    }
}
