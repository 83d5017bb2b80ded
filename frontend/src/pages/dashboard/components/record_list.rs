use crate::api::UserRecord;
use leptos::*;
use web_sys::HtmlInputElement;

#[component]
pub fn SearchBox(value: Signal<String>, on_input: Callback<String>) -> impl IntoView {
    view! {
        <div class="relative mb-3">
            <i class="fas fa-search absolute left-3 top-1/2 -translate-y-1/2 text-fg-muted"></i>
            <input
                id="search-bar"
                type="text"
                class="w-full rounded-md border border-form-control-border bg-form-control-bg text-fg pl-9 pr-3 py-2 text-sm"
                placeholder="Search by Reference or Name"
                prop:value=move || value.get()
                on:input=move |ev| {
                    let target = event_target::<HtmlInputElement>(&ev);
                    on_input.call(target.value());
                }
            />
        </div>
    }
}

#[component]
pub fn RecordList(
    records: Signal<Vec<UserRecord>>,
    selected: Signal<Option<String>>,
    on_select: Callback<UserRecord>,
) -> impl IntoView {
    view! {
        <ul class="flex flex-col gap-1 text-xs">
            <For
                each=move || records.get()
                key=|record| record.reference_number.clone()
                children=move |record| {
                    let reference = record.reference_number.clone();
                    let is_active = move || selected.get().as_deref() == Some(reference.as_str());
                    let label = format!("{} - {}", record.reference_number, record.display_name());
                    let pill = format!("inline-block h-2.5 w-2.5 rounded-full {}", record.status.pill_class());
                    let status = record.status.to_string();
                    view! {
                        <li>
                            <button
                                type="button"
                                class=move || {
                                    if is_active() {
                                        "w-full flex justify-between items-center gap-2 rounded px-2 py-2 text-left bg-action-primary-bg text-action-primary-text"
                                    } else {
                                        "w-full flex justify-between items-center gap-2 rounded px-2 py-2 text-left hover:bg-action-ghost-bg-hover"
                                    }
                                }
                                on:click=move |_| on_select.call(record.clone())
                            >
                                <span>{label}</span>
                                <span class=pill title=status.clone() aria-label=status></span>
                            </button>
                        </li>
                    }
                }
            />
        </ul>
    }
}
