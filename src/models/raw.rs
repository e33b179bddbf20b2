//! Raw incident rows as exported from the source spreadsheet.
//!
//! Column headers are the literal questions of the reporting form. Cells may
//! arrive as numbers or text regardless of what the question asks for, so
//! every field is kept as an optional [`RawValue`] and interpreted later.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Literal affirmative token used by the yes/no questions
pub const AFFIRMATIVE: &str = "Yes";

/// A single spreadsheet cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// Boolean cell
    Bool(bool),
    /// Numeric cell (serial dates, scores, identifiers)
    Number(f64),
    /// Text cell
    Text(String),
}

impl RawValue {
    /// Whether the cell holds an empty string
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Text(text) if text.trim().is_empty())
    }

    /// Coerce the cell to a number, if it has a numeric reading
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(text) => text.trim().parse::<f64>().ok(),
            Self::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        }
    }

    /// Render the cell as text; whole numbers print without a decimal point
    #[must_use]
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Self::Text(text) => Cow::Borrowed(text.as_str()),
            Self::Number(n) => Cow::Owned(format_number(*n)),
            Self::Bool(b) => Cow::Owned(b.to_string()),
        }
    }

    /// Whether the cell is the literal affirmative token
    #[must_use]
    pub fn is_affirmative(&self) -> bool {
        matches!(self, Self::Text(text) if text == AFFIRMATIVE)
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        #[allow(clippy::cast_precision_loss)]
        let number = value as f64;
        Self::Number(number)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        #[allow(clippy::cast_possible_truncation)]
        let whole = n as i64;
        whole.to_string()
    } else {
        n.to_string()
    }
}

/// A cell that is present and not an empty string
fn present(value: Option<&RawValue>) -> Option<&RawValue> {
    value.filter(|v| !v.is_empty())
}

/// One incident report row, exactly as exported
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "Date of the incident?", default)]
    pub incident_date: Option<RawValue>,

    #[serde(rename = "Team reporter?", default)]
    pub team: Option<RawValue>,

    #[serde(rename = "client number", default)]
    pub client_number: Option<RawValue>,

    #[serde(rename = "date of birth", default)]
    pub date_of_birth: Option<RawValue>,

    /// Product or form of care the notification concerns
    #[serde(rename = "Notification is about:", default)]
    pub notification_about: Option<RawValue>,

    #[serde(rename = "Would you like to report a customer fall?", default)]
    pub fall: Option<RawValue>,

    #[serde(
        rename = "Would you like to report an incident involving MEDICATION?",
        default
    )]
    pub medication: Option<RawValue>,

    #[serde(rename = "Would you like to report a security incident?", default)]
    pub security: Option<RawValue>,

    #[serde(rename = "Suicide report / thoughts about suicide?", default)]
    pub suicide: Option<RawValue>,

    #[serde(
        rename = "Would you like to report an aggression or inappropriate behavior incident? Verbal or physical?",
        default
    )]
    pub aggression: Option<RawValue>,

    #[serde(
        rename = "Is the aggression or transgressive behavior verbal, physical or both?",
        default
    )]
    pub aggression_type: Option<RawValue>,

    #[serde(
        rename = "Would you like to complete an incident reporting - Other -?",
        default
    )]
    pub other: Option<RawValue>,

    #[serde(rename = "consequence(s) for the victim(s)?", default)]
    pub victim_consequences: Option<RawValue>,

    #[serde(
        rename = "What was the impact of the incident on YOU as a SUPPORTER? (0-10)",
        default
    )]
    pub supporter_impact: Option<RawValue>,

    #[serde(
        rename = "What do you think was the impact on the CLIENT whose file you are currently working on? (0-10)",
        default
    )]
    pub client_impact: Option<RawValue>,

    #[serde(rename = "Description of the incident.", default)]
    pub description: Option<RawValue>,
}

/// The six report-type flags of a row
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IncidentFlags {
    pub fall: bool,
    pub medication: bool,
    pub security: bool,
    pub suicide: bool,
    pub aggression: bool,
    pub other: bool,
}

impl RawRecord {
    /// Text of a cell, or `None` when it is absent or empty
    ///
    /// A whitespace-only cell counts as empty, so it gets the field's
    /// sentinel rather than being carried through as blank text.
    #[must_use]
    pub fn text_of(value: Option<&RawValue>) -> Option<Cow<'_, str>> {
        present(value).map(RawValue::as_text)
    }

    /// Read the report-type flags; only the literal affirmative token counts
    #[must_use]
    pub fn flags(&self) -> IncidentFlags {
        let yes = |value: &Option<RawValue>| value.as_ref().is_some_and(RawValue::is_affirmative);
        IncidentFlags {
            fall: yes(&self.fall),
            medication: yes(&self.medication),
            security: yes(&self.security),
            suicide: yes(&self.suicide),
            aggression: yes(&self.aggression),
            other: yes(&self.other),
        }
    }
}
