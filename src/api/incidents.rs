//! Equipment incident endpoints.

use chrono::Utc;

use super::ApiClient;
use crate::errors::ApiError;
use crate::models::{Incident, IncidentStatus, NewIncident};

/// Form limits mirroring the submission screen.
const MAX_TITLE_LEN: usize = 40;
const MAX_DESCRIPTION_LEN: usize = 250;

/// User input for filing an incident.
#[derive(Debug, Clone, Default)]
pub struct IncidentForm {
    pub equipment_number: String,
    pub title: String,
    pub description: String,
}

impl IncidentForm {
    /// Validate the form. Runs before any network call.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.equipment_number.trim().is_empty()
            || self.title.trim().is_empty()
            || self.description.trim().is_empty()
        {
            return Err(ApiError::Validation(
                "All incident fields are required".to_string(),
            ));
        }
        if self.title.chars().count() > MAX_TITLE_LEN {
            return Err(ApiError::Validation(format!(
                "Title exceeds {} characters",
                MAX_TITLE_LEN
            )));
        }
        if self.description.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(ApiError::Validation(format!(
                "Description exceeds {} characters",
                MAX_DESCRIPTION_LEN
            )));
        }
        Ok(())
    }
}

impl ApiClient {
    /// GET /incidencias - List all incidents.
    pub async fn list_incidents(&self) -> Result<Vec<Incident>, ApiError> {
        self.get_json("/incidencias").await
    }

    /// POST /incidencias/post - File a new incident.
    ///
    /// New incidents always start as Pendiente with a client-stamped
    /// submission time.
    pub async fn submit_incident(&self, form: &IncidentForm) -> Result<Incident, ApiError> {
        form.validate()?;

        let new_incident = NewIncident {
            equipment_number: form.equipment_number.trim().to_string(),
            title: form.title.trim().to_string(),
            description: form.description.trim().to_string(),
            status: IncidentStatus::Pending,
            created_at: Utc::now().to_rfc3339(),
        };

        self.post_json("/incidencias/post", &new_incident).await
    }
}
