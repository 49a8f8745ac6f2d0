//! Browser interop for the upload widget
//!
//! File extraction from DOM events and the synchronous confirmation
//! dialog. Everything here is best-effort: a missing window, data
//! transfer or file list simply yields `None`.

use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Event, File, HtmlInputElement};

/// First file of a drop event, if the drag carried one.
pub fn dropped_file(ev: &DragEvent) -> Option<File> {
    ev.data_transfer()?.files()?.get(0)
}

/// First file of a file-input `change` event.
pub fn changed_file(ev: &Event) -> Option<File> {
    let input = ev.target()?.dyn_into::<HtmlInputElement>().ok()?;
    input.files()?.get(0)
}

/// Show the synchronous "editing started" dialog.
pub fn show_confirmation(file_name: &str, prompt: &str) {
    let Some(window) = web_sys::window() else {
        log::warn!("no window available, cannot show confirmation");
        return;
    };
    window
        .alert_with_message(&confirmation_message(file_name, prompt))
        .ok();
}

/// Dialog text naming the chosen file and prompt.
pub fn confirmation_message(file_name: &str, prompt: &str) -> String {
    format!(
        "Bildbearbeitung gestartet!\nDatei: {}\nPrompt: {}",
        file_name, prompt
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirmation_message() {
        assert_eq!(
            confirmation_message("beach.jpg", "remove background"),
            "Bildbearbeitung gestartet!\nDatei: beach.jpg\nPrompt: remove background"
        );
    }

    #[test]
    fn test_confirmation_message_keeps_prompt_verbatim() {
        let msg = confirmation_message("urlaub.png", "  Himmel blauer machen  ");
        assert!(msg.ends_with("Prompt:   Himmel blauer machen  "));
    }
}
