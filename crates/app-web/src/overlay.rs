use web_sys as web;

const LOADING_ID: &str = "loading";

#[inline]
pub fn hide_loading(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(LOADING_ID) {
        let _ = el.class_list().add_1("hidden");
    }
}

#[inline]
pub fn show_loading_message(document: &web::Document, message: &str) {
    if let Some(el) = document.get_element_by_id(LOADING_ID) {
        let _ = el.class_list().remove_1("hidden");
        el.set_text_content(Some(message));
    }
}
