use crate::pages::dashboard::utils::{DocumentKind, FilePreview, PDF_ICON_URL};
use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

const ACCEPTED_TYPES: &str = ".pdf,.png,.jpeg,.jpg";

#[component]
pub fn DocumentPanel(
    kind: DocumentKind,
    preview: Signal<Option<FilePreview>>,
    on_pick: Callback<web_sys::File>,
) -> impl IntoView {
    let input_ref = create_node_ref::<html::Input>();
    let open_picker = move |_| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    view! {
        <div class="flex-1 space-y-2">
            <p class="font-semibold">{kind.label()}":"</p>
            <div class="w-full h-48 border border-dashed border-border rounded overflow-hidden flex items-center justify-center">
                {move || match preview.get() {
                    Some(file) if file.is_pdf => view! {
                        <img src=PDF_ICON_URL alt="PDF Icon" class="w-4/5 h-4/5 object-contain" />
                    }.into_view(),
                    Some(file) => view! {
                        <img src=file.url alt=kind.alt_text() class="w-full h-full object-cover" />
                    }.into_view(),
                    None => view! { <span class="text-fg-muted">"Missing"</span> }.into_view(),
                }}
            </div>
            {move || match preview.get() {
                Some(file) => view! {
                    <a
                        href=file.url
                        download=file.name
                        target="_blank"
                        rel="noreferrer"
                        class="block w-full text-center rounded-md border border-action-primary-bg px-3 py-1 text-sm"
                    >
                        "Download"
                    </a>
                }.into_view(),
                None => view! {
                    <a
                        href="#"
                        aria-disabled="true"
                        class="block w-full text-center rounded-md border border-border px-3 py-1 text-sm pointer-events-none opacity-60"
                    >
                        "Download"
                    </a>
                }.into_view(),
            }}
            <input
                node_ref=input_ref
                id=kind.input_id()
                type="file"
                class="hidden"
                accept=ACCEPTED_TYPES
                on:change=move |ev| {
                    let picked = ev
                        .target()
                        .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
                        .and_then(|input| input.files())
                        .and_then(|files| files.get(0));
                    if let Some(file) = picked {
                        on_pick.call(file);
                    }
                }
            />
            <button
                type="button"
                class="w-full rounded-md border border-border px-3 py-1 text-sm hover:bg-action-ghost-bg-hover"
                on:click=open_picker
            >
                "Upload"
            </button>
        </div>
    }
}
