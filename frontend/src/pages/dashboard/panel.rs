use crate::{
    api::{RecordStatus, UserRecord},
    components::{
        layout::{ErrorMessage, LoadingSpinner, SuccessMessage},
        theme::ThemeToggle,
        typewriter::Typewriter,
    },
    pages::dashboard::{
        components::{
            DetailsPanel, RecordList, RejectReasonDialog, SearchBox, SessionExpiredDialog,
            UsersTable,
        },
        utils::{DocumentKind, WELCOME_TEXT},
        view_model::use_dashboard_view_model,
    },
    state::auth::use_logout,
};
use leptos::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let vm = use_dashboard_view_model();
    let logout = use_logout();

    let records = Signal::derive(move || vm.visible.get());
    let filter = Signal::derive(move || vm.sync.with(|sync| sync.filter().to_string()));
    let selected = create_memo(move |_| {
        vm.sync
            .with(|sync| sync.selection().map(|selection| selection.record.clone()))
    });
    let selected_reference =
        Signal::derive(move || selected.with(|record| record.as_ref().map(|r| r.reference_number.clone())));
    let load_error = Signal::derive(move || {
        vm.sync
            .with(|sync| sync.load_error().map(|err| err.error.clone()))
    });
    let busy = Signal::derive(move || vm.is_busy());
    let is_loading = vm.load_action.pending();

    view! {
        <div class="min-h-screen flex flex-col md:flex-row bg-surface text-fg">
            <aside class="md:w-64 md:fixed md:inset-y-0 md:left-0 bg-surface-elevated border-r border-border p-3 flex flex-col">
                <button
                    type="button"
                    class="text-xl font-semibold mb-4 text-left"
                    on:click=move |_| vm.reset()
                >
                    "Dashboard"
                </button>
                <SearchBox
                    value=filter
                    on_input=Callback::new(move |text: String| vm.set_filter(text))
                />
                <div class="flex-1 overflow-y-auto">
                    <RecordList
                        records=records
                        selected=selected_reference
                        on_select=Callback::new(move |record: UserRecord| vm.select(record))
                    />
                </div>
                <div class="flex items-center justify-between gap-2 mt-3">
                    <span class="text-sm">"Toggle Theme"</span>
                    <ThemeToggle />
                </div>
                <button
                    id="logoutButton"
                    type="button"
                    class="mt-2 w-full rounded-md px-3 py-2 text-sm font-semibold bg-action-danger-bg text-action-danger-text"
                    on:click=move |_| logout.call(())
                >
                    <i class="fas fa-sign-out-alt mr-2"></i>
                    "Logout"
                </button>
            </aside>
            <main class="flex-1 md:ml-64 p-4 flex flex-col items-center min-h-screen">
                <div class="w-full max-w-5xl flex flex-col items-center">
                    <h3 class="text-center text-2xl mb-4">
                        <Typewriter text=WELCOME_TEXT />
                    </h3>
                    {move || vm.messages.get().success.map(|message| view! { <SuccessMessage message=message /> })}
                    {move || vm.messages.get().error.map(|message| view! { <ErrorMessage message=message /> })}
                    {move || load_error.get().map(|message| view! { <ErrorMessage message=message /> })}
                    <Show when=move || is_loading.get()>
                        <LoadingSpinner />
                    </Show>
                    {move || match selected.get() {
                        Some(record) => view! {
                            <DetailsPanel
                                record=record
                                form=vm.details_form
                                auth_preview=Signal::derive(move || vm.preview(DocumentKind::AuthorizationLetter))
                                medical_preview=Signal::derive(move || vm.preview(DocumentKind::MedicalDoc))
                                busy=busy
                                on_pick=Callback::new(move |(kind, file): (DocumentKind, web_sys::File)| {
                                    vm.pick_file(kind, file)
                                })
                                on_save=Callback::new(move |_| vm.save())
                                on_cancel=Callback::new(move |_| vm.reset())
                                on_status=Callback::new(move |status: RecordStatus| vm.request_status(status))
                            />
                        }.into_view(),
                        None => view! { <UsersTable records=records /> }.into_view(),
                    }}
                </div>
            </main>
            <RejectReasonDialog
                is_open=Signal::derive(move || vm.reject_target.with(Option::is_some))
                reason=vm.reject_reason
                on_confirm=Callback::new(move |_| vm.confirm_reject())
                on_cancel=Callback::new(move |_| vm.cancel_reject())
            />
            <SessionExpiredDialog
                is_open=vm.session_expired.into()
                on_leave=Callback::new(move |_| vm.leave_expired_session())
            />
        </div>
    }
}
