//! Declarative field and step schema.
//!
//! The wizard is data-driven: each step is an ordered list of [`FieldSpec`]
//! records, and a single generic renderer walks them. Nothing outside this
//! module hardcodes field order or labels.

/// Widget discriminator for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Tel,
    Select,
}

/// Immutable description of one form field.
///
/// Specs are `'static` data defined below; the engine and renderer only
/// ever borrow them.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub placeholder: &'static str,
    pub required: bool,
    /// Format pattern, for renderer hints. Enforcement lives in `validate`.
    pub pattern: Option<&'static str>,
    pub max_length: Option<usize>,
    /// Derived fields (`state`, `city`) are written by the PIN lookup only.
    pub read_only: bool,
}

/// One wizard screen: a keyed, titled, ordered group of fields.
#[derive(Debug, Clone, Copy)]
pub struct StepSpec {
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub fields: &'static [FieldSpec],
}

/// Well-known field names, to keep call sites typo-proof.
pub mod fields {
    pub const AADHAAR_NAME: &str = "aadhaarName";
    pub const AADHAAR_NUMBER: &str = "aadhaarNumber";
    pub const MOBILE: &str = "mobile";
    pub const PINCODE: &str = "pincode";
    pub const STATE: &str = "state";
    pub const CITY: &str = "city";
    pub const PAN_HOLDER: &str = "panHolder";
    pub const PAN_NUMBER: &str = "panNumber";
}

const AADHAAR_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: fields::AADHAAR_NAME,
        label: "Name (as per Aadhaar)",
        kind: FieldKind::Text,
        placeholder: "Full name",
        required: true,
        pattern: None,
        max_length: Some(60),
        read_only: false,
    },
    FieldSpec {
        name: fields::AADHAAR_NUMBER,
        label: "Aadhaar Number",
        kind: FieldKind::Text,
        placeholder: "12-digit Aadhaar",
        required: true,
        pattern: Some(r"^\d{12}$"),
        max_length: Some(12),
        read_only: false,
    },
    FieldSpec {
        name: fields::MOBILE,
        label: "Mobile (linked to Aadhaar)",
        kind: FieldKind::Tel,
        placeholder: "10-digit mobile",
        required: true,
        pattern: Some(r"^[6-9]\d{9}$"),
        max_length: Some(10),
        read_only: false,
    },
    FieldSpec {
        name: fields::PINCODE,
        label: "PIN Code",
        kind: FieldKind::Text,
        placeholder: "e.g., 560001",
        required: true,
        pattern: Some(r"^\d{6}$"),
        max_length: Some(6),
        read_only: false,
    },
    FieldSpec {
        name: fields::STATE,
        label: "State",
        kind: FieldKind::Text,
        placeholder: "Auto-filled from PIN",
        required: true,
        pattern: None,
        max_length: None,
        read_only: true,
    },
    FieldSpec {
        name: fields::CITY,
        label: "City/District",
        kind: FieldKind::Text,
        placeholder: "Auto-filled from PIN",
        required: true,
        pattern: None,
        max_length: None,
        read_only: true,
    },
];

const PAN_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: fields::PAN_HOLDER,
        label: "Name (as per PAN)",
        kind: FieldKind::Text,
        placeholder: "Full name",
        required: true,
        pattern: None,
        max_length: Some(60),
        read_only: false,
    },
    FieldSpec {
        name: fields::PAN_NUMBER,
        label: "PAN Number",
        kind: FieldKind::Text,
        placeholder: "ABCDE1234F",
        required: true,
        pattern: Some(r"^[A-Z]{5}[0-9]{4}[A-Z]$"),
        max_length: Some(10),
        read_only: false,
    },
];

const STEPS: &[StepSpec] = &[
    StepSpec {
        key: "aadhaar",
        title: "Step 1 — Aadhaar & OTP Verification",
        description: "Enter Aadhaar details to receive and verify OTP (simulated).",
        fields: AADHAAR_FIELDS,
    },
    StepSpec {
        key: "pan",
        title: "Step 2 — PAN Validation",
        description: "Provide PAN to proceed. Client-side format check applies.",
        fields: PAN_FIELDS,
    },
];

/// The ordered sequence of wizard steps. Immutable for the process lifetime.
#[must_use]
pub fn steps() -> &'static [StepSpec] {
    STEPS
}

/// Look up a field spec by name across all steps.
#[must_use]
pub fn field_spec(name: &str) -> Option<&'static FieldSpec> {
    STEPS
        .iter()
        .flat_map(|step| step.fields.iter())
        .find(|field| field.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_steps_in_order() {
        let steps = steps();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].key, "aadhaar");
        assert_eq!(steps[1].key, "pan");
    }

    #[test]
    fn derived_fields_are_read_only() {
        assert!(field_spec(fields::STATE).is_some_and(|f| f.read_only));
        assert!(field_spec(fields::CITY).is_some_and(|f| f.read_only));
        assert!(field_spec(fields::PINCODE).is_some_and(|f| !f.read_only));
    }

    #[test]
    fn field_names_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for step in steps() {
            for field in step.fields {
                assert!(seen.insert(field.name), "duplicate field {}", field.name);
            }
        }
        assert_eq!(seen.len(), 8);
    }

    #[test]
    fn unknown_field_has_no_spec() {
        assert!(field_spec("gstin").is_none());
    }
}
