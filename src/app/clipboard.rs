use leptos::prelude::*;
use leptos_use::{use_clipboard, UseClipboardReturn};

/// Copies `value` and shows a short toast. The toast lasts as long as
/// `use_clipboard` reports the value as copied (1.5s by default).
#[component]
pub fn CopyButton(
    #[prop(into)] value: String,
    #[prop(into, default = "Copy".to_string())] label: String,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let UseClipboardReturn {
        is_supported,
        copied,
        copy,
        ..
    } = use_clipboard();
    let toast = format!("{label} copied to clipboard!");

    view! {
        <button
            type="button"
            class="flex items-center cursor-pointer hover:text-foreground"
            title="Copy to clipboard"
            on:click=move |_| {
                if !is_supported.get_untracked() {
                    log::warn!("clipboard is not available, can't copy {label}");
                    return;
                }
                copy(&value);
            }
        >
            {children.map(|c| c())}
            <span class="sr-only">"Copy"</span>
        </button>
        <Show when=move || copied.get()>
            <div
                role="status"
                class="fixed bottom-8 right-8 z-[9999] rounded-lg bg-[#222] px-5 py-3 text-base text-white shadow-lg"
            >
                {toast.clone()}
            </div>
        </Show>
    }
}
