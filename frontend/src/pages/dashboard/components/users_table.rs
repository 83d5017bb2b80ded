use crate::api::UserRecord;
use leptos::*;

#[component]
pub fn UsersTable(records: Signal<Vec<UserRecord>>) -> impl IntoView {
    view! {
        <div class="w-full my-6 p-2 rounded-lg">
            <h3 class="text-2xl mb-5">"Users List"</h3>
            <div class="overflow-x-auto">
                <table class="min-w-full divide-y divide-border shadow">
                    <thead class="bg-action-primary-bg text-action-primary-text">
                        <tr>
                            <th class="px-3 py-3 text-left font-bold">"Reference Number"</th>
                            <th class="px-3 py-3 text-left font-bold">"Patient Name"</th>
                            <th class="px-3 py-3 text-left font-bold">"Status"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-border">
                        <Show
                            when=move || !records.get().is_empty()
                            fallback=|| view! {
                                <tr>
                                    <td colspan="3" class="px-3 py-3 text-center text-fg-muted">"No records"</td>
                                </tr>
                            }
                        >
                            <For
                                each=move || records.get()
                                key=|record| record.reference_number.clone()
                                children=|record| view! {
                                    <tr class="odd:bg-surface-muted">
                                        <td class="px-3 py-3">{record.reference_number.clone()}</td>
                                        <td class="px-3 py-3">{record.patient_name.clone().unwrap_or_default()}</td>
                                        <td class="px-3 py-3">{record.status.to_string()}</td>
                                    </tr>
                                }
                            />
                        </Show>
                    </tbody>
                </table>
            </div>
        </div>
    }
}
