//! Small DOM helpers for the file-picker controls (WASM only)

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

/// First file currently held by the `<input type="file">` with the given id
#[cfg(target_arch = "wasm32")]
pub fn picked_file_from_input(input_id: &str) -> Option<web_sys::File> {
    let input = web_sys::window()?
        .document()?
        .get_element_by_id(input_id)?
        .dyn_into::<web_sys::HtmlInputElement>()
        .ok()?;
    input.files()?.get(0)
}

/// Reset a file-picker control so the same file can be re-selected later
#[cfg(target_arch = "wasm32")]
pub fn reset_file_input(input_id: &str) {
    let input = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(input_id))
        .and_then(|e| e.dyn_into::<web_sys::HtmlInputElement>().ok());
    if let Some(input) = input {
        input.set_value("");
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn picked_file_from_input(_input_id: &str) -> Option<()> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
pub fn reset_file_input(_input_id: &str) {}
