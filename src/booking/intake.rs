use gloo_net::http::Request;
use log::{info, warn};
use thiserror::Error;
use web_sys::FormData;

use super::fields::IntakePayload;
use crate::config;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The intake service answered with a non-2xx status.
    #[error("Submission failed, please check your details and try again.")]
    Rejected { status: u16 },
    /// No response at all.
    #[error("Network error, please try again.")]
    Network(String),
}

/// Where a finished lead is sent.
#[allow(async_fn_in_trait)]
pub trait IntakeClient {
    async fn send(&self, payload: &IntakePayload) -> Result<(), SubmitError>;
}

/// Maps the intake service's answer onto a submission outcome. The body is
/// never read.
pub fn outcome_for_status(status: u16) -> Result<(), SubmitError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(SubmitError::Rejected { status })
    }
}

/// Posts leads as multipart form data to a hosted form processor.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpIntake {
    endpoint: String,
}

impl HttpIntake {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config() -> Self {
        Self::new(config::intake_endpoint())
    }

    fn form_data(payload: &IntakePayload) -> Result<FormData, SubmitError> {
        let form = FormData::new().map_err(|e| SubmitError::Network(format!("{:?}", e)))?;
        for (name, value) in payload.iter() {
            form.append_with_str(name, value)
                .map_err(|e| SubmitError::Network(format!("{:?}", e)))?;
        }
        Ok(form)
    }
}

impl IntakeClient for HttpIntake {
    async fn send(&self, payload: &IntakePayload) -> Result<(), SubmitError> {
        let body = Self::form_data(payload)?;
        match Request::post(&self.endpoint)
            .header("Accept", "application/json")
            .body(body)
            .send()
            .await
        {
            Ok(response) => {
                let outcome = outcome_for_status(response.status());
                match &outcome {
                    Ok(()) => info!("Booking enquiry accepted by intake service"),
                    Err(_) => warn!("Intake service rejected booking with status {}", response.status()),
                }
                outcome
            }
            Err(e) => {
                warn!("Booking enquiry failed to send: {}", e);
                Err(SubmitError::Network(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_2xx_counts_as_success() {
        assert_eq!(outcome_for_status(200), Ok(()));
        assert_eq!(outcome_for_status(204), Ok(()));
        assert_eq!(outcome_for_status(302), Err(SubmitError::Rejected { status: 302 }));
        assert_eq!(outcome_for_status(500), Err(SubmitError::Rejected { status: 500 }));
    }

    #[test]
    fn rejection_and_network_errors_word_differently() {
        let rejected = SubmitError::Rejected { status: 422 }.to_string();
        let network = SubmitError::Network("offline".into()).to_string();
        assert!(rejected.contains("check your details"));
        assert!(network.contains("Network error"));
        assert_ne!(rejected, network);
    }
}
