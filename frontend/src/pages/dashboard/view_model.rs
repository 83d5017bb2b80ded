use super::{
    repository::{DashboardRepository, DetailsSubmission, LoadOutcome, MutationOutcome},
    utils::{DocumentKind, FilePreview, MessageState, Mutation, RecordSynchronizer},
};
use crate::{
    api::{ApiClient, ApiError, DetailsForm, FileUpload, RecordStatus, UserRecord},
    state::auth::{end_session, use_api_client, use_auth, AuthState},
    utils::{files, storage},
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone)]
pub struct PickedFile {
    pub file: web_sys::File,
    pub preview: FilePreview,
}

/// Replacement documents chosen in the detail form, not yet uploaded.
#[derive(Clone, Default)]
pub struct PickedFiles {
    authorization_letter: Option<PickedFile>,
    medical_doc: Option<PickedFile>,
}

impl PickedFiles {
    pub fn get(&self, kind: DocumentKind) -> Option<&PickedFile> {
        match kind {
            DocumentKind::AuthorizationLetter => self.authorization_letter.as_ref(),
            DocumentKind::MedicalDoc => self.medical_doc.as_ref(),
        }
    }

    pub fn set(&mut self, kind: DocumentKind, picked: PickedFile) {
        let slot = match kind {
            DocumentKind::AuthorizationLetter => &mut self.authorization_letter,
            DocumentKind::MedicalDoc => &mut self.medical_doc,
        };
        if let Some(previous) = slot.replace(picked) {
            files::revoke_object_url(&previous.preview.url);
        }
    }

    pub fn clear(&mut self) {
        for picked in [self.authorization_letter.take(), self.medical_doc.take()]
            .into_iter()
            .flatten()
        {
            files::revoke_object_url(&picked.preview.url);
        }
    }

    fn file(&self, kind: DocumentKind) -> Option<web_sys::File> {
        self.get(kind).map(|picked| picked.file.clone())
    }
}

#[derive(Clone)]
pub struct StatusCommand {
    pub reference_number: String,
    pub status: RecordStatus,
    pub reason: Option<String>,
}

#[derive(Clone)]
pub struct SaveCommand {
    pub reference_number: String,
    pub form: DetailsForm,
    pub authorization_letter: Option<web_sys::File>,
    pub medical_doc: Option<web_sys::File>,
}

pub type MutationReport = (Mutation, MutationOutcome);

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub sync: RwSignal<RecordSynchronizer>,
    pub visible: Memo<Vec<UserRecord>>,
    pub details_form: RwSignal<DetailsForm>,
    pub picked_files: RwSignal<PickedFiles>,
    pub messages: RwSignal<MessageState>,
    pub session_expired: RwSignal<bool>,
    pub reject_target: RwSignal<Option<UserRecord>>,
    pub reject_reason: RwSignal<String>,
    pub load_action: Action<(), LoadOutcome>,
    pub status_action: Action<StatusCommand, MutationReport>,
    pub save_action: Action<SaveCommand, MutationReport>,
    client: StoredValue<ApiClient>,
    set_auth: WriteSignal<AuthState>,
}

impl DashboardViewModel {
    pub fn is_busy(&self) -> bool {
        self.load_action.pending().get()
            || self.status_action.pending().get()
            || self.save_action.pending().get()
    }

    pub fn reload(&self) {
        self.load_action.dispatch(());
    }

    pub fn set_filter(&self, text: String) {
        self.sync.update(|sync| {
            sync.set_filter(text);
        });
    }

    pub fn select(&self, record: UserRecord) {
        self.details_form.set(DetailsForm::from_record(&record));
        self.picked_files.update(PickedFiles::clear);
        self.sync.update(|sync| {
            sync.select(Some(record));
        });
    }

    /// Cancel button and title click: back to the unfiltered list.
    pub fn reset(&self) {
        self.picked_files.update(PickedFiles::clear);
        self.sync.update(RecordSynchronizer::reset);
    }

    pub fn preview(&self, kind: DocumentKind) -> Option<FilePreview> {
        if let Some(picked) = self.picked_files.with(|files| files.get(kind).cloned()) {
            return Some(picked.preview);
        }
        self.sync.with(|sync| {
            sync.selection()
                .and_then(|selection| selection.preview(kind))
                .cloned()
        })
    }

    pub fn pick_file(&self, kind: DocumentKind, file: web_sys::File) {
        let url = files::object_url(&file).unwrap_or_default();
        let preview = FilePreview::from_upload(url, &file.name());
        self.picked_files
            .update(|files| files.set(kind, PickedFile { file, preview }));
    }

    /// Approve and Pending go straight out; Reject asks for a reason first.
    pub fn request_status(&self, status: RecordStatus) {
        let Some(record) = self.selected_record() else {
            return;
        };
        if status.requires_reason() {
            self.reject_reason.set(String::new());
            self.reject_target.set(Some(record));
            return;
        }
        self.status_action.dispatch(StatusCommand {
            reference_number: record.reference_number,
            status,
            reason: None,
        });
    }

    /// An empty reason cancels the rejection.
    pub fn confirm_reject(&self) {
        let Some(record) = self.reject_target.get_untracked() else {
            return;
        };
        self.reject_target.set(None);
        let reason = self.reject_reason.get_untracked();
        if reason.trim().is_empty() {
            return;
        }
        self.status_action.dispatch(StatusCommand {
            reference_number: record.reference_number,
            status: RecordStatus::Rejected,
            reason: Some(reason),
        });
    }

    pub fn cancel_reject(&self) {
        self.reject_target.set(None);
    }

    pub fn save(&self) {
        let Some(record) = self.selected_record() else {
            return;
        };
        let (authorization_letter, medical_doc) = self.picked_files.with_untracked(|files| {
            (
                files.file(DocumentKind::AuthorizationLetter),
                files.file(DocumentKind::MedicalDoc),
            )
        });
        self.save_action.dispatch(SaveCommand {
            reference_number: record.reference_number,
            form: self.details_form.get_untracked(),
            authorization_letter,
            medical_doc,
        });
    }

    /// Session-expired prompt: drop the session and go to the login page.
    pub fn leave_expired_session(&self) {
        self.session_expired.set(false);
        self.client
            .with_value(|client| end_session(client, self.set_auth));
        storage::redirect_to("/login");
    }

    fn selected_record(&self) -> Option<UserRecord> {
        self.sync
            .with_untracked(|sync| sync.selection().map(|selection| selection.record.clone()))
    }

    fn settle(&self, report: MutationReport) {
        let (mutation, outcome) = report;
        if let Some(load) = outcome.reload() {
            self.picked_files.update(PickedFiles::clear);
            self.sync.update(|sync| sync.apply_load(load.clone()));
        }
        let auth_failed = self.session_expired.get_untracked()
            || self
                .client
                .with_value(|client| client.auth_failure().is_triggered());
        self.messages
            .update(|messages| messages.record_mutation(mutation, &outcome, auth_failed));
    }
}

async fn read_picked(file: Option<web_sys::File>) -> Result<Option<FileUpload>, ApiError> {
    match file {
        Some(file) => files::read_upload(&file)
            .await
            .map(Some)
            .map_err(ApiError::validation),
        None => Ok(None),
    }
}

async fn submit_details(repo: &DashboardRepository, command: SaveCommand) -> MutationOutcome {
    let uploads = async {
        Ok::<_, ApiError>((
            read_picked(command.authorization_letter).await?,
            read_picked(command.medical_doc).await?,
        ))
    };
    match uploads.await {
        Ok((authorization_letter, medical_doc)) => {
            let submission = DetailsSubmission {
                form: command.form,
                authorization_letter,
                medical_doc,
            };
            repo.save_details(&command.reference_number, submission).await
        }
        Err(err) => {
            log::error!("Update error: {}", err);
            MutationOutcome::Failed(err)
        }
    }
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    let client = use_api_client();
    let (_auth, set_auth) = use_auth();
    let repository = DashboardRepository::new_with_client(Rc::new(client.clone()));

    let sync = create_rw_signal(RecordSynchronizer::default());
    let visible = create_memo(move |_| sync.with(RecordSynchronizer::visible));
    let details_form = create_rw_signal(DetailsForm::default());
    let picked_files = create_rw_signal(PickedFiles::default());
    let messages = create_rw_signal(MessageState::default());
    let session_expired = create_rw_signal(false);
    let reject_target = create_rw_signal(None::<UserRecord>);
    let reject_reason = create_rw_signal(String::new());

    let repo_for_load = repository.clone();
    let load_action = create_action(move |_: &()| {
        let repo = repo_for_load.clone();
        async move { repo.load_all().await }
    });

    let repo_for_status = repository.clone();
    let status_action = create_action(move |command: &StatusCommand| {
        let repo = repo_for_status.clone();
        let command = command.clone();
        async move {
            let outcome = repo
                .set_status(
                    &command.reference_number,
                    command.status,
                    command.reason.as_deref(),
                )
                .await;
            (Mutation::Status(command.status), outcome)
        }
    });

    let repo_for_save = repository;
    let save_action = create_action(move |command: &SaveCommand| {
        let repo = repo_for_save.clone();
        let command = command.clone();
        async move { (Mutation::Details, submit_details(&repo, command).await) }
    });

    let guard = client.auth_failure().clone();
    guard.on_failure(move |status| {
        log::warn!("opening session-expired prompt after {}", status);
        session_expired.set(true);
    });
    on_cleanup(move || guard.clear_handler());

    let vm = DashboardViewModel {
        sync,
        visible,
        details_form,
        picked_files,
        messages,
        session_expired,
        reject_target,
        reject_reason,
        load_action,
        status_action,
        save_action,
        client: store_value(client),
        set_auth,
    };

    // Effects
    create_effect(move |loaded: Option<()>| {
        if loaded.is_none() {
            vm.reload();
        }
    });

    create_effect(move |_| {
        if let Some(outcome) = load_action.value().get() {
            sync.update(|sync| sync.apply_load(outcome));
        }
    });

    create_effect(move |_| {
        if let Some(report) = status_action.value().get() {
            vm.settle(report);
        }
    });

    create_effect(move |_| {
        if let Some(report) = save_action.value().get() {
            vm.settle(report);
        }
    });

    on_cleanup(move || picked_files.update(PickedFiles::clear));

    vm
}
