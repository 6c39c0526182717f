//! Field-level validation rules for submission input.
//!
//! # Responsibility
//! - Evaluate one field value against its declared constraints.
//! - Keep rule evaluation pure; surfacing failure belongs to callers.
//!
//! # Invariants
//! - Rules combine with logical AND; one failing rule fails the field.
//! - An unset rule is automatically satisfied.
//! - A present `min_length` of zero is still evaluated; present-but-zero
//!   must never be mistaken for absent.

/// One field value as gathered from the submission boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Free-text field content.
    Text(String),
    /// Numeric field content, already converted from its raw form.
    Number(f64),
}

impl FieldValue {
    /// Renders the value as text for the `required` rule.
    ///
    /// Numbers always render non-empty, so `required` cannot fail them;
    /// this mirrors the reference behavior of checking emptiness through a
    /// string conversion regardless of declared type.
    fn as_text(&self) -> String {
        match self {
            Self::Text(value) => value.clone(),
            Self::Number(value) => value.to_string(),
        }
    }
}

/// A value plus the optional rules it must satisfy.
///
/// Constructed transiently per validation call and never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldConstraint {
    /// The value under validation.
    pub value: FieldValue,
    /// Trimmed textual rendering must be non-empty.
    pub required: bool,
    /// Text only: trimmed char length must be >= bound. Inclusive.
    pub min_length: Option<usize>,
    /// Text only: trimmed char length must be <= bound. Inclusive.
    pub max_length: Option<usize>,
    /// Numbers only: value must be >= bound. Inclusive.
    pub min: Option<f64>,
    /// Numbers only: value must be <= bound. Inclusive.
    pub max: Option<f64>,
}

impl FieldConstraint {
    /// Starts a constraint over a text value with every rule unset.
    pub fn text(value: impl Into<String>) -> Self {
        Self::new(FieldValue::Text(value.into()))
    }

    /// Starts a constraint over a numeric value with every rule unset.
    pub fn number(value: f64) -> Self {
        Self::new(FieldValue::Number(value))
    }

    fn new(value: FieldValue) -> Self {
        Self {
            value,
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    /// Requires a non-empty trimmed textual rendering.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the inclusive minimum trimmed length for text values.
    pub fn min_length(mut self, bound: usize) -> Self {
        self.min_length = Some(bound);
        self
    }

    /// Sets the inclusive maximum trimmed length for text values.
    pub fn max_length(mut self, bound: usize) -> Self {
        self.max_length = Some(bound);
        self
    }

    /// Sets the inclusive lower bound for numeric values.
    pub fn min(mut self, bound: f64) -> Self {
        self.min = Some(bound);
        self
    }

    /// Sets the inclusive upper bound for numeric values.
    pub fn max(mut self, bound: f64) -> Self {
        self.max = Some(bound);
        self
    }
}

/// Evaluates a field constraint.
///
/// # Contract
/// - Returns `true` only when every declared rule passes.
/// - Produces no message; the caller decides how to surface failure.
pub fn validate(constraint: &FieldConstraint) -> bool {
    let mut valid = true;

    if constraint.required {
        valid = valid && !constraint.value.as_text().trim().is_empty();
    }

    if let FieldValue::Text(text) = &constraint.value {
        let length = text.trim().chars().count();
        if let Some(bound) = constraint.min_length {
            valid = valid && length >= bound;
        }
        if let Some(bound) = constraint.max_length {
            valid = valid && length <= bound;
        }
    }

    if let FieldValue::Number(number) = constraint.value {
        if let Some(bound) = constraint.min {
            valid = valid && number >= bound;
        }
        if let Some(bound) = constraint.max {
            valid = valid && number <= bound;
        }
    }

    valid
}
