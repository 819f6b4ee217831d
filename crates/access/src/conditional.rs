//! Conditional-logic evaluation against a submitted entry.

use formpdf_types::{ConditionalLogic, Entry, LogicAction, LogicMode, LogicRule, RuleOperator};

/// Whether `logic` enables its subject for this entry.
///
/// Each rule is matched against the submitted value of its field; outcomes
/// combine per the logic mode, and the action decides whether a match means
/// shown or hidden.
pub fn rules_met(logic: &ConditionalLogic, entry: &Entry) -> bool {
    let matched = match logic.logic_type {
        LogicMode::All => logic.rules.iter().all(|r| rule_matches(r, entry)),
        LogicMode::Any => logic.rules.iter().any(|r| rule_matches(r, entry)),
    };
    match logic.action_type {
        LogicAction::Show => matched,
        LogicAction::Hide => !matched,
    }
}

fn rule_matches(rule: &LogicRule, entry: &Entry) -> bool {
    let mut values = entry.field_values(rule.field_id).peekable();
    if values.peek().is_none() {
        return compare("", rule);
    }
    // Choice fields store the submitted value; rules are written against it,
    // not the display label. Positive operators match if any sub-input
    // satisfies them; a negated one must hold for every sub-input, otherwise
    // a single ticked forbidden value would still pass.
    match rule.operator {
        RuleOperator::IsNot => values.all(|(_, v)| compare(v, rule)),
        _ => values.any(|(_, v)| compare(v, rule)),
    }
}

fn compare(value: &str, rule: &LogicRule) -> bool {
    let target = rule.value.as_str();
    match rule.operator {
        RuleOperator::Is => value == target,
        RuleOperator::IsNot => value != target,
        RuleOperator::GreaterThan => numeric(value, target).is_some_and(|(a, b)| a > b),
        RuleOperator::LessThan => numeric(value, target).is_some_and(|(a, b)| a < b),
        RuleOperator::Contains => value.contains(target),
        RuleOperator::StartsWith => value.starts_with(target),
        RuleOperator::EndsWith => value.ends_with(target),
    }
}

fn numeric(a: &str, b: &str) -> Option<(f64, f64)> {
    Some((a.trim().parse().ok()?, b.trim().parse().ok()?))
}
