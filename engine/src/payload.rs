//! Submission payload: the immutable snapshot built at successful submit.

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use udyam_types::{FormValues, fields};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AadhaarSection {
    pub aadhaar_name: String,
    pub aadhaar_number: String,
    pub mobile: String,
    pub pincode: String,
    pub state: String,
    pub city: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanSection {
    pub pan_holder: String,
    pub pan_number: String,
}

/// Snapshot of a completed registration.
///
/// Only constructed by the state machine once every governed field passes
/// validation and the OTP round is verified; there is no public
/// constructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub step1: AadhaarSection,
    pub step2: PanSection,
    pub consent: bool,
    pub submitted_at: String,
}

impl SubmissionPayload {
    pub(crate) fn build(values: &FormValues) -> Self {
        Self {
            step1: AadhaarSection {
                aadhaar_name: values.get(fields::AADHAAR_NAME).to_string(),
                aadhaar_number: values.get(fields::AADHAAR_NUMBER).to_string(),
                mobile: values.get(fields::MOBILE).to_string(),
                pincode: values.get(fields::PINCODE).to_string(),
                state: values.get(fields::STATE).to_string(),
                city: values.get(fields::CITY).to_string(),
            },
            step2: PanSection {
                pan_holder: values.get(fields::PAN_HOLDER).to_string(),
                pan_number: values.get(fields::PAN_NUMBER).to_string(),
            },
            consent: true,
            submitted_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// Pretty JSON for the terminal payload view.
    #[must_use]
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
