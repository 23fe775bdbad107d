//! Validation of alert submissions before they are handed to dispatch.

use serde::{Deserialize, Serialize};

use crate::alert::draft::{AlertDraft, AlertSeverity};
use crate::model::AlertError;

/// Lifecycle state of a submitted alert. New requests always start `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AlertStatus {
    Pending,
    Sent,
    Failed,
}

/// A validated alert ready to be stored and queued.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertRequest {
    pub title: String,
    pub message: String,
    pub severity: AlertSeverity,
    /// Recipients joined with ", " for the stored record.
    pub recipient: String,
    pub recipients: Vec<String>,
    pub region: Option<String>,
    pub status: AlertStatus,
}

impl AlertRequest {
    /// Validates raw form fields.
    ///
    /// Title, message, and severity must be non-blank and at least one
    /// recipient must be non-blank; otherwise `AlertError::MissingFields`.
    /// Blank recipient entries are dropped.
    pub fn new(
        title: &str,
        message: &str,
        severity: &str,
        recipients: &[&str],
        region: Option<&str>,
    ) -> Result<Self, AlertError> {
        let recipients: Vec<String> = recipients
            .iter()
            .map(|r| r.trim())
            .filter(|r| !r.is_empty())
            .map(String::from)
            .collect();

        if title.trim().is_empty() || message.trim().is_empty() || recipients.is_empty() {
            return Err(AlertError::MissingFields);
        }
        let severity: AlertSeverity = severity.parse()?;

        Ok(Self {
            title: title.to_string(),
            message: message.to_string(),
            severity,
            recipient: recipients.join(", "),
            recipients,
            region: region.filter(|r| !r.is_empty()).map(String::from),
            status: AlertStatus::Pending,
        })
    }

    /// Builds a request from a draft and the chosen recipients.
    pub fn from_draft(draft: &AlertDraft, recipients: &[&str]) -> Result<Self, AlertError> {
        Self::new(
            &draft.title,
            &draft.message,
            &draft.severity.to_string(),
            recipients,
            Some(&draft.region),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::draft::TARGET_DEPARTMENTS;

    #[test]
    fn test_valid_request_joins_recipients() {
        let req = AlertRequest::new(
            "Severe Pollution Alert: Rohini, Delhi",
            "Very Poor air quality detected in Rohini, Delhi.",
            "CRITICAL",
            &["Health Dept", "Traffic Police"],
            Some("6.0"),
        )
        .expect("complete request should validate");
        assert_eq!(req.recipient, "Health Dept, Traffic Police");
        assert_eq!(req.recipients.len(), 2);
        assert_eq!(req.severity, AlertSeverity::Critical);
        assert_eq!(req.region.as_deref(), Some("6.0"));
        assert_eq!(req.status, AlertStatus::Pending);
    }

    #[test]
    fn test_missing_title_is_rejected() {
        let result = AlertRequest::new("  ", "body", "HIGH", &["Health Dept"], None);
        assert_eq!(result, Err(AlertError::MissingFields));
    }

    #[test]
    fn test_missing_message_is_rejected() {
        let result = AlertRequest::new("title", "", "HIGH", &["Health Dept"], None);
        assert_eq!(result, Err(AlertError::MissingFields));
    }

    #[test]
    fn test_missing_severity_is_rejected() {
        let result = AlertRequest::new("title", "body", "", &["Health Dept"], None);
        assert_eq!(result, Err(AlertError::MissingFields));
    }

    #[test]
    fn test_blank_recipients_are_rejected() {
        let result = AlertRequest::new("title", "body", "HIGH", &["", "  "], None);
        assert_eq!(result, Err(AlertError::MissingFields));
    }

    #[test]
    fn test_unknown_severity_is_rejected() {
        let result = AlertRequest::new("title", "body", "MEDIUM", &["Health Dept"], None);
        assert_eq!(
            result,
            Err(AlertError::InvalidSeverity("MEDIUM".to_string()))
        );
    }

    #[test]
    fn test_from_draft_with_all_departments() {
        let draft = AlertDraft {
            title: "High Pollution Alert: Narela".to_string(),
            message: "Poor air quality detected in Narela.".to_string(),
            severity: AlertSeverity::High,
            region: "4.0".to_string(),
        };
        let req = AlertRequest::from_draft(&draft, TARGET_DEPARTMENTS).unwrap();
        assert_eq!(
            req.recipient,
            "Health Dept, Traffic Police, Education Board, Industrial Control"
        );
        assert_eq!(req.severity, AlertSeverity::High);
        assert_eq!(req.region.as_deref(), Some("4.0"));
    }
}
