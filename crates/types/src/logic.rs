//! Conditional logic rule sets attached to fields and PDF configurations.

use crate::ids::FieldId;
use serde::{Deserialize, Serialize};

/// Whether matching rules show or hide the subject.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogicAction {
    Show,
    Hide,
}

/// How individual rule outcomes combine.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogicMode {
    All,
    Any,
}

/// Comparison operator of a single rule.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum RuleOperator {
    #[serde(rename = "is")]
    Is,
    #[serde(rename = "isnot")]
    IsNot,
    #[serde(rename = ">")]
    GreaterThan,
    #[serde(rename = "<")]
    LessThan,
    #[serde(rename = "contains")]
    Contains,
    #[serde(rename = "starts_with")]
    StartsWith,
    #[serde(rename = "ends_with")]
    EndsWith,
}

/// One field/operator/value triple.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogicRule {
    pub field_id: FieldId,
    pub operator: RuleOperator,
    pub value: String,
}

/// A complete conditional-logic rule set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionalLogic {
    #[serde(default = "default_action")]
    pub action_type: LogicAction,
    #[serde(default = "default_mode")]
    pub logic_type: LogicMode,
    pub rules: Vec<LogicRule>,
}

fn default_action() -> LogicAction {
    LogicAction::Show
}

fn default_mode() -> LogicMode {
    LogicMode::All
}
