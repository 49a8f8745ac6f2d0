//! Upload widget - drop zone, prompt field and submit action
//!
//! A file arrives either through the hidden file input (opened
//! programmatically) or via drag-and-drop onto the zone. Only the
//! most recent choice is kept. Submission shows the confirmation
//! dialog and nothing else.

use leptos::html;
use leptos::prelude::*;
use web_sys::{DragEvent, Event, MouseEvent};

use crate::services::browser;
use crate::state::upload::{use_upload_context, SelectedImage};
use crate::utils::format::format_file_size;

#[component]
pub fn UploadWidget() -> impl IntoView {
    let ctx = use_upload_context();
    let input_ref: NodeRef<html::Input> = NodeRef::new();

    // dragenter and dragover both mark the zone active; leave clears it.
    let on_drag_enter = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        ctx.set_drag_active(true);
    };
    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        ctx.set_drag_active(true);
    };
    let on_drag_leave = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        ctx.set_drag_active(false);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        ctx.set_drag_active(false);

        if let Some(file) = browser::dropped_file(&ev) {
            log::info!("file dropped: {}", file.name());
            ctx.select(SelectedImage::from_file(&file));
        }
    };

    let on_change = move |ev: Event| {
        if let Some(file) = browser::changed_file(&ev) {
            log::info!("file picked: {}", file.name());
            ctx.select(SelectedImage::from_file(&file));
        }
    };

    let open_picker = move |_: MouseEvent| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let on_submit = move |_: MouseEvent| {
        if !ctx.can_submit() {
            return;
        }
        let name = ctx.file_name().unwrap_or_default();
        let prompt = ctx.prompt.get();
        log::info!("submit: file={} prompt_len={}", name, prompt.len());
        browser::show_confirmation(&name, &prompt);
    };

    let file_label = move || {
        ctx.file.with(|file| {
            file.as_ref().map(|img| {
                format!("{} · {}", img.name, format_file_size(img.size))
            })
        })
    };

    view! {
        <div class="upload-container">
            <div
                class="drop-zone"
                class=("drag-active", move || ctx.is_drag_active())
                class=("has-file", move || ctx.has_file())
                on:dragenter=on_drag_enter
                on:dragover=on_drag_over
                on:dragleave=on_drag_leave
                on:drop=on_drop
            >
                <input
                    node_ref=input_ref
                    type="file"
                    accept="image/*"
                    class="file-input"
                    on:change=on_change
                />

                <Show
                    when=move || ctx.has_file()
                    fallback=move || view! {
                        <div class="upload-icon">"📁"</div>
                        <p class="upload-text">
                            "Bild hierher ziehen oder klicken zum Auswählen"
                        </p>
                        <button class="upload-button" on:click=open_picker>
                            "Bild hochladen"
                        </button>
                    }
                >
                    <div class="file-info">
                        <div class="file-icon">"📷"</div>
                        <p class="file-name">{file_label}</p>
                        <button class="change-file-button" on:click=open_picker>
                            "Anderes Bild wählen"
                        </button>
                    </div>
                </Show>
            </div>

            <div class="prompt-container">
                <label class="prompt-label">
                    "Was möchten Sie mit Ihrem Bild machen?"
                </label>
                <textarea
                    class="prompt-input"
                    rows=4
                    placeholder="z.B. \"Füge einen Sonnenuntergang hinzu\", \"Entferne den Hintergrund\", \"Mache das Bild heller und kontrastreicher\""
                    prop:value=move || ctx.prompt.get()
                    on:input=move |ev| ctx.set_prompt(event_target_value(&ev))
                ></textarea>
                <button
                    class="submit-button"
                    class=("disabled", move || !ctx.can_submit())
                    disabled=move || !ctx.can_submit()
                    on:click=on_submit
                >
                    "Bearbeitung starten"
                </button>
            </div>
        </div>
    }
}
