use crate::api::{
    ApiClient, ApiError, DetailsForm, FetchResponse, FileUpload, RecordStatus, StatusUpdateRequest,
    UserRecord,
};
use std::rc::Rc;

/// Result of a list reload. Failures become an empty list plus the error,
/// so callers never have to branch on a `Result`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadOutcome {
    pub records: Vec<UserRecord>,
    pub error: Option<ApiError>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MutationOutcome {
    /// Server accepted the change; carries the reload that followed it.
    Applied(LoadOutcome),
    /// Server answered with a non-success status.
    Rejected { status: u16 },
    Failed(ApiError),
}

impl MutationOutcome {
    pub fn reload(&self) -> Option<&LoadOutcome> {
        match self {
            MutationOutcome::Applied(load) => Some(load),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailsSubmission {
    pub form: DetailsForm,
    pub authorization_letter: Option<FileUpload>,
    pub medical_doc: Option<FileUpload>,
}

#[derive(Clone)]
pub struct DashboardRepository {
    client: Rc<ApiClient>,
}

impl Default for DashboardRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardRepository {
    pub fn new() -> Self {
        Self::new_with_client(Rc::new(ApiClient::new()))
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub async fn load_all(&self) -> LoadOutcome {
        match self.client.get_all_users().await {
            Ok(records) => {
                log::debug!("loaded {} record(s)", records.len());
                LoadOutcome {
                    records,
                    error: None,
                }
            }
            Err(err) => {
                log::error!("Failed to fetch users: {}", err);
                LoadOutcome {
                    records: Vec::new(),
                    error: Some(err),
                }
            }
        }
    }

    /// Requests a status change. The reason is only sent when non-blank;
    /// `Unknown` is refused without contacting the server.
    pub async fn set_status(
        &self,
        reference_number: &str,
        status: RecordStatus,
        reason: Option<&str>,
    ) -> MutationOutcome {
        if status == RecordStatus::Unknown {
            log::warn!("refusing to send unknown status for {}", reference_number);
            return MutationOutcome::Failed(ApiError::validation(
                "Status must be approved, pending or rejected",
            ));
        }
        let payload = StatusUpdateRequest::new(status, reason);
        let response = self.client.update_status(reference_number, &payload).await;
        self.reload_after("Status update", response).await
    }

    pub async fn save_details(
        &self,
        reference_number: &str,
        submission: DetailsSubmission,
    ) -> MutationOutcome {
        let DetailsSubmission {
            form,
            authorization_letter,
            medical_doc,
        } = submission;
        let response = self
            .client
            .update_details(reference_number, &form, authorization_letter, medical_doc)
            .await;
        self.reload_after("Update", response).await
    }

    async fn reload_after(
        &self,
        context: &str,
        response: Result<FetchResponse, ApiError>,
    ) -> MutationOutcome {
        match response {
            Ok(response) if response.ok => MutationOutcome::Applied(self.load_all().await),
            Ok(response) => {
                log::warn!("{} rejected with status {}", context, response.status);
                MutationOutcome::Rejected {
                    status: response.status,
                }
            }
            Err(err) => {
                log::error!("{} error: {}", context, err);
                MutationOutcome::Failed(err)
            }
        }
    }
}
