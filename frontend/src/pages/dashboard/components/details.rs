use crate::api::{DetailsForm, RecordStatus, UserRecord};
use crate::pages::dashboard::{
    components::documents::DocumentPanel,
    utils::{DocumentKind, FilePreview},
};
use leptos::{ev::SubmitEvent, *};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};

const INPUT_CLASS: &str =
    "w-full rounded-md border border-form-control-border bg-form-control-bg text-fg px-3 py-2 text-sm";

#[derive(Clone, Copy)]
struct EditableField {
    name: &'static str,
    label: &'static str,
    input_type: &'static str,
}

const EDITABLE_FIELDS: [EditableField; 5] = [
    EditableField { name: "patientName", label: "Patient Name", input_type: "text" },
    EditableField { name: "phoneNumber", label: "Phone Number", input_type: "text" },
    EditableField { name: "primaryDoctor", label: "Primary Doctor", input_type: "text" },
    EditableField { name: "emailAddress", label: "E-mail Address", input_type: "email" },
    EditableField { name: "country", label: "Country", input_type: "text" },
];

fn field_value(form: &DetailsForm, name: &str) -> String {
    form.fields()
        .iter()
        .find(|(field, _)| *field == name)
        .map(|(_, value)| value.to_string())
        .unwrap_or_default()
}

fn action_button_class(status: RecordStatus) -> &'static str {
    match status {
        RecordStatus::Approved => "rounded px-3 py-1 text-sm bg-status-success-bg text-status-success-text",
        RecordStatus::Rejected => "rounded px-3 py-1 text-sm bg-action-danger-bg text-action-danger-text",
        _ => "rounded px-3 py-1 text-sm bg-status-warning-bg text-status-warning-text",
    }
}

#[component]
fn ReadOnlyField(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm font-semibold mb-1">{label}":"</label>
            <input type="text" class=INPUT_CLASS value=value readonly />
        </div>
    }
}

#[component]
pub fn DetailsPanel(
    record: UserRecord,
    form: RwSignal<DetailsForm>,
    auth_preview: Signal<Option<FilePreview>>,
    medical_preview: Signal<Option<FilePreview>>,
    busy: Signal<bool>,
    on_pick: Callback<(DocumentKind, web_sys::File)>,
    on_save: Callback<()>,
    on_cancel: Callback<()>,
    on_status: Callback<RecordStatus>,
) -> impl IntoView {
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_save.call(());
    };

    let editable = EDITABLE_FIELDS
        .iter()
        .map(|field| {
            let field = *field;
            view! {
                <div>
                    <label class="block text-sm font-semibold mb-1" for=field.name>{field.label}":"</label>
                    <input
                        id=field.name
                        name=field.name
                        type=field.input_type
                        class=INPUT_CLASS
                        prop:value=move || form.with(|form| field_value(form, field.name))
                        on:input=move |ev| {
                            let value = event_target::<HtmlInputElement>(&ev).value();
                            form.update(|form| {
                                form.set(field.name, value);
                            });
                        }
                    />
                </div>
            }
        })
        .collect_view();

    let document_pick = move |kind: DocumentKind| {
        Callback::new(move |file: web_sys::File| on_pick.call((kind, file)))
    };

    view! {
        <div class="w-full my-6 p-2">
            <div class="rounded-lg shadow-sm border border-border bg-surface-elevated">
                <div class="px-4 py-3 rounded-t-lg bg-status-success-bg text-status-success-text">
                    <h3 class="text-xl font-semibold">"Edit User Details"</h3>
                </div>
                <form id="userDetailsForm" class="p-4 space-y-4" on:submit=on_submit>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        <ReadOnlyField label="Reference Number" value=record.reference_number.clone() />
                        <ReadOnlyField label="Status" value=record.status.to_string() />
                        <ReadOnlyField label="ID Number" value=record.passport_no.clone().unwrap_or_default() />
                        {editable}
                        <div class="md:col-span-2">
                            <label class="block text-sm font-semibold mb-1" for="rejectReason">"Reject Reason:"</label>
                            <textarea
                                id="rejectReason"
                                name="rejectReason"
                                rows="2"
                                class=INPUT_CLASS
                                prop:value=move || form.with(|form| form.reject_reason.clone())
                                on:input=move |ev| {
                                    let value = event_target::<HtmlTextAreaElement>(&ev).value();
                                    form.update(|form| form.reject_reason = value);
                                }
                            ></textarea>
                        </div>
                    </div>
                    <hr class="border-border" />
                    <div class="flex flex-col md:flex-row gap-3">
                        <DocumentPanel
                            kind=DocumentKind::AuthorizationLetter
                            preview=auth_preview
                            on_pick=document_pick(DocumentKind::AuthorizationLetter)
                        />
                        <DocumentPanel
                            kind=DocumentKind::MedicalDoc
                            preview=medical_preview
                            on_pick=document_pick(DocumentKind::MedicalDoc)
                        />
                    </div>
                    <div class="flex justify-end gap-2 mt-4">
                        <button
                            type="submit"
                            class="rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text disabled:opacity-50"
                            disabled=move || busy.get()
                        >
                            "Save Changes"
                        </button>
                        <button
                            type="button"
                            class="rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg"
                            on:click=move |_| on_cancel.call(())
                        >
                            "Cancel"
                        </button>
                    </div>
                </form>
            </div>
            <div class="flex gap-2 mt-3">
                {RecordStatus::ACTIONABLE
                    .into_iter()
                    .map(|status| view! {
                        <button
                            type="button"
                            class=action_button_class(status)
                            disabled=move || busy.get()
                            on:click=move |_| on_status.call(status)
                        >
                            {status.label()}
                        </button>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
