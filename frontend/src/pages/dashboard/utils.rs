use crate::api::{ApiError, RecordStatus, UserRecord};
use crate::pages::dashboard::repository::{LoadOutcome, MutationOutcome};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

pub const PDF_ICON_URL: &str = "https://icon-library.com/images/doc-icon/doc-icon-4.jpg";
pub const WELCOME_TEXT: &str = "What can I help with?";

/// Characters `encodeURI` leaves untouched.
const URI_UNESCAPED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b';')
    .remove(b',')
    .remove(b'/')
    .remove(b'?')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'#');

/// Pulls the first `http(s)://` URL out of a free-form document field and
/// encodes it for use in `src`/`href`. `None` means there is nothing to
/// preview.
pub fn clean_file_url(raw: Option<&str>) -> Option<String> {
    let raw = raw?;
    let mut from = 0;
    while let Some(offset) = raw[from..].find("http") {
        let start = from + offset;
        let after_http = &raw[start + 4..];
        let scheme_len = if after_http.starts_with("s://") {
            4
        } else if after_http.starts_with("://") {
            3
        } else {
            0
        };
        if scheme_len > 0 {
            let body_start = start + 4 + scheme_len;
            let body_len = raw[body_start..]
                .find(char::is_whitespace)
                .unwrap_or(raw.len() - body_start);
            if body_len > 0 {
                let url = &raw[start..body_start + body_len];
                return Some(utf8_percent_encode(url, URI_UNESCAPED).to_string());
            }
        }
        from = start + 4;
    }
    None
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    AuthorizationLetter,
    MedicalDoc,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 2] = [DocumentKind::AuthorizationLetter, DocumentKind::MedicalDoc];

    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::AuthorizationLetter => "Authorization Letter",
            DocumentKind::MedicalDoc => "Medical Document",
        }
    }

    pub fn alt_text(&self) -> &'static str {
        match self {
            DocumentKind::AuthorizationLetter => "Authorization",
            DocumentKind::MedicalDoc => "Medical",
        }
    }

    pub fn input_id(&self) -> &'static str {
        match self {
            DocumentKind::AuthorizationLetter => "authorization-letter-upload",
            DocumentKind::MedicalDoc => "medical-doc-upload",
        }
    }

    fn raw_field<'a>(&self, record: &'a UserRecord) -> Option<&'a str> {
        match self {
            DocumentKind::AuthorizationLetter => record.authorization_letter.as_deref(),
            DocumentKind::MedicalDoc => record.medical_doc.as_deref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePreview {
    pub url: String,
    pub name: String,
    pub is_pdf: bool,
}

impl FilePreview {
    pub fn from_url(url: String) -> Self {
        let name = url.rsplit('/').next().unwrap_or_default().to_string();
        let is_pdf = url.to_lowercase().ends_with(".pdf");
        Self { url, name, is_pdf }
    }

    /// Preview for a file picked locally; `url` is an object URL, so the
    /// type comes from the file name.
    pub fn from_upload(url: String, file_name: &str) -> Self {
        Self {
            url,
            name: file_name.to_string(),
            is_pdf: file_name.to_lowercase().ends_with(".pdf"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub record: UserRecord,
    pub auth_preview: Option<FilePreview>,
    pub medical_preview: Option<FilePreview>,
}

impl Selection {
    pub fn new(record: UserRecord) -> Self {
        let preview =
            |kind: DocumentKind| clean_file_url(kind.raw_field(&record)).map(FilePreview::from_url);
        let auth_preview = preview(DocumentKind::AuthorizationLetter);
        let medical_preview = preview(DocumentKind::MedicalDoc);
        Self {
            record,
            auth_preview,
            medical_preview,
        }
    }

    pub fn preview(&self, kind: DocumentKind) -> Option<&FilePreview> {
        match kind {
            DocumentKind::AuthorizationLetter => self.auth_preview.as_ref(),
            DocumentKind::MedicalDoc => self.medical_preview.as_ref(),
        }
    }
}

/// Records whose reference number or patient name contains `query`,
/// ignoring case and surrounding whitespace. A blank query keeps everything.
pub fn filter_records(records: &[UserRecord], query: &str) -> Vec<UserRecord> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|record| record.matches(&needle))
        .cloned()
        .collect()
}

/// In-memory view of the record list: the last loaded snapshot, the search
/// text, and the record open for editing. Filtering never re-fetches.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordSynchronizer {
    records: Vec<UserRecord>,
    filter: String,
    selection: Option<Selection>,
    load_error: Option<ApiError>,
}

impl RecordSynchronizer {
    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn load_error(&self) -> Option<&ApiError> {
        self.load_error.as_ref()
    }

    /// Replaces the snapshot after a reload. The selection is dropped so the
    /// form never edits a stale copy.
    pub fn apply_load(&mut self, outcome: LoadOutcome) {
        self.records = outcome.records;
        self.load_error = outcome.error;
        self.selection = None;
    }

    pub fn set_filter(&mut self, text: impl Into<String>) -> Vec<UserRecord> {
        self.filter = text.into();
        self.visible()
    }

    pub fn visible(&self) -> Vec<UserRecord> {
        filter_records(&self.records, &self.filter)
    }

    pub fn select(&mut self, record: Option<UserRecord>) -> Option<&Selection> {
        self.selection = record.map(Selection::new);
        self.selection.as_ref()
    }

    /// Clears both the selection and the search text.
    pub fn reset(&mut self) {
        self.filter.clear();
        self.selection = None;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Status(RecordStatus),
    Details,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageState {
    pub success: Option<String>,
    pub error: Option<String>,
}

impl MessageState {
    pub fn clear(&mut self) {
        self.success = None;
        self.error = None;
    }

    pub fn set_success(&mut self, message: impl Into<String>) {
        self.success = Some(message.into());
        self.error = None;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.success = None;
    }

    /// Notification for a finished mutation. Auth failures stay silent here
    /// because the session-expired prompt already covers them.
    pub fn record_mutation(&mut self, mutation: Mutation, outcome: &MutationOutcome, auth_failed: bool) {
        match (mutation, outcome) {
            (Mutation::Status(status), MutationOutcome::Applied(_)) => {
                self.set_success(format!("Status updated to {}!", status));
            }
            (Mutation::Details, MutationOutcome::Applied(_)) => self.set_success("Data updated!"),
            (_, MutationOutcome::Rejected { .. }) => self.set_error("Update failed."),
            (_, MutationOutcome::Failed(err)) => {
                if auth_failed || err.is_auth_failure() {
                    self.clear();
                } else {
                    self.set_error("An error occurred.");
                }
            }
        }
    }
}
