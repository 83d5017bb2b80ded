#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{ApiClient, RecordStatus, UserRecord};
    use crate::state::auth::AuthState;
    use crate::state::session::MemorySessionStore;
    use leptos::*;
    use std::rc::Rc;

    pub fn record(reference: &str, name: &str, status: RecordStatus) -> UserRecord {
        let mut record = UserRecord::new(reference, status);
        record.patient_name = Some(name.to_string());
        record.passport_no = Some(format!("P-{}", reference));
        record
    }

    pub fn sample_records() -> Vec<UserRecord> {
        let mut with_docs = record("REF-001", "Amina Yusuf", RecordStatus::Pending);
        with_docs.authorization_letter =
            Some("uploaded: https://files.example.test/letters/auth 1.pdf".into());
        with_docs.medical_doc = Some("https://files.example.test/scans/xray.png".into());
        vec![
            with_docs,
            record("REF-002", "Omar Haddad", RecordStatus::Approved),
            record("MOH-103", "Layla Nasser", RecordStatus::Rejected),
        ]
    }

    pub fn signed_in_client(base_url: &str) -> ApiClient {
        ApiClient::new_with_base_url(base_url)
            .with_session(Rc::new(MemorySessionStore::with_token("opaque-token")))
    }

    pub fn provide_auth(is_authenticated: bool) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let (auth, set_auth) = create_signal(AuthState {
            is_authenticated,
            loading: false,
        });
        provide_context((auth, set_auth));
        (auth, set_auth)
    }
}
