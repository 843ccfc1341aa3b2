use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which wizard produced the lead.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Calculator {
    Btu,
    Extension,
}

/// Lead captured when a visitor downloads their estimate.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLeadRequest {
    pub email: String,
    pub calculator: Calculator,
    #[serde(default)]
    pub form_data: serde_json::Value,
    #[serde(default)]
    pub calculation_result: serde_json::Value,
}

impl CreateLeadRequest {
    /// Loose sanity check; the CRM does real address verification.
    pub fn has_plausible_email(&self) -> bool {
        let email = self.email.trim();
        match email.split_once('@') {
            Some((local, domain)) => !local.is_empty() && !domain.is_empty(),
            None => false,
        }
    }
}

/// Payload forwarded to the lead capture endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadPayload {
    pub id: Uuid,
    pub email: String,
    pub calculator: Calculator,
    pub form_data: serde_json::Value,
    pub calculation_result: serde_json::Value,
    pub submitted_at: DateTime<Utc>,
}

impl From<CreateLeadRequest> for LeadPayload {
    fn from(req: CreateLeadRequest) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: req.email.trim().to_string(),
            calculator: req.calculator,
            form_data: req.form_data,
            calculation_result: req.calculation_result,
            submitted_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(email: &str) -> CreateLeadRequest {
        CreateLeadRequest {
            email: email.to_string(),
            calculator: Calculator::Btu,
            form_data: serde_json::json!({}),
            calculation_result: serde_json::json!({}),
        }
    }

    #[test]
    fn email_plausibility() {
        assert!(request("jo@example.com").has_plausible_email());
        assert!(request("  jo@example.com ").has_plausible_email());
        assert!(!request("").has_plausible_email());
        assert!(!request("jo.example.com").has_plausible_email());
        assert!(!request("@example.com").has_plausible_email());
        assert!(!request("jo@").has_plausible_email());
    }

    #[test]
    fn payload_trims_email_and_keeps_calculator() {
        let payload = LeadPayload::from(request(" jo@example.com "));
        assert_eq!(payload.email, "jo@example.com");
        assert_eq!(payload.calculator, Calculator::Btu);

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["calculator"], "btu");
        assert!(json.get("submittedAt").is_some());
    }
}
