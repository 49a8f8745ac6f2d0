//! Upload form state management

use leptos::prelude::*;

/// Metadata of the image the visitor picked, captured from the DOM
/// `File` at selection time. Only the most recent pick is kept.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedImage {
    pub name: String,
    /// Size in bytes as reported by the browser.
    pub size: u64,
    pub mime: String,
}

impl SelectedImage {
    pub fn new(name: impl Into<String>, size: u64, mime: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime: mime.into(),
        }
    }

    pub fn from_file(file: &web_sys::File) -> Self {
        Self::new(file.name(), file.size() as u64, file.type_())
    }
}

/// Global upload form context
#[derive(Clone, Copy)]
pub struct UploadContext {
    pub file: RwSignal<Option<SelectedImage>>,
    pub prompt: RwSignal<String>,
    pub drag_active: RwSignal<bool>,
}

impl UploadContext {
    pub fn new() -> Self {
        Self {
            file: RwSignal::new(None),
            prompt: RwSignal::new(String::new()),
            drag_active: RwSignal::new(false),
        }
    }

    pub fn has_file(&self) -> bool {
        self.file.with(Option::is_some)
    }

    pub fn file_name(&self) -> Option<String> {
        self.file.with(|f| f.as_ref().map(|img| img.name.clone()))
    }

    /// Replace the current selection wholesale.
    pub fn select(&self, image: SelectedImage) {
        self.file.set(Some(image));
    }

    pub fn set_prompt(&self, text: String) {
        self.prompt.set(text);
    }

    pub fn set_drag_active(&self, active: bool) {
        self.drag_active.set(active);
    }

    pub fn is_drag_active(&self) -> bool {
        self.drag_active.get()
    }

    /// Submit is allowed only with a file and a non-empty prompt.
    /// Emptiness is byte emptiness, whitespace counts as content.
    pub fn can_submit(&self) -> bool {
        self.has_file() && self.prompt.with(|p| !p.is_empty())
    }
}

impl Default for UploadContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_upload_context() -> UploadContext {
    let context = UploadContext::new();
    provide_context(context);
    context
}

pub fn use_upload_context() -> UploadContext {
    expect_context::<UploadContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(name: &str) -> SelectedImage {
        SelectedImage::new(name, 1024, "image/jpeg")
    }

    #[test]
    fn test_submit_requires_file_and_prompt() {
        let ctx = UploadContext::new();
        assert!(!ctx.can_submit());

        ctx.select(image("beach.jpg"));
        assert!(!ctx.can_submit());

        ctx.set_prompt("remove background".to_string());
        assert!(ctx.can_submit());
    }

    #[test]
    fn test_submit_requires_file_even_with_prompt() {
        let ctx = UploadContext::new();
        ctx.set_prompt("remove background".to_string());
        assert!(!ctx.can_submit());
    }

    #[test]
    fn test_clearing_prompt_disables_submit() {
        let ctx = UploadContext::new();
        ctx.select(image("beach.jpg"));
        ctx.set_prompt("heller machen".to_string());
        assert!(ctx.can_submit());

        ctx.set_prompt(String::new());
        assert!(!ctx.can_submit());
    }

    #[test]
    fn test_whitespace_prompt_counts_as_content() {
        let ctx = UploadContext::new();
        ctx.select(image("beach.jpg"));
        ctx.set_prompt(" ".to_string());
        assert!(ctx.can_submit());
    }

    #[test]
    fn test_new_selection_replaces_previous() {
        let ctx = UploadContext::new();
        ctx.select(image("first.png"));
        ctx.select(image("second.png"));
        assert_eq!(ctx.file_name().as_deref(), Some("second.png"));
    }

    #[test]
    fn test_drag_flag_toggles() {
        let ctx = UploadContext::new();
        assert!(!ctx.is_drag_active());

        ctx.set_drag_active(true);
        assert!(ctx.is_drag_active());

        ctx.set_drag_active(false);
        assert!(!ctx.is_drag_active());
    }
}
