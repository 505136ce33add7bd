//! Transition table reports.
//!
//! Flattens a kind's table into rows that can be logged, serialized or printed. Rows are
//! produced by walking every `(status, transition)` pair, so a report always reflects the
//! compiled-in table exactly.

use super::machine::{StatusMachine, Tag};
use serde::Serialize;
use std::fmt::Write as _;

/// One defined transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransitionRow {
    /// Status the transition starts from
    pub status: &'static str,
    /// The transition
    pub transition: &'static str,
    /// Status it leads to
    pub result: &'static str,
    /// Display label of `status`
    pub status_label: &'static str,
    /// Display label of `transition`
    pub transition_label: &'static str,
}

/// Every defined transition of one entity kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransitionTable {
    /// Kind name, e.g. `lesson`
    pub kind: &'static str,
    /// Human-readable kind name, e.g. `Lesson`
    pub label: &'static str,
    /// Status assigned at creation
    pub initial: &'static str,
    /// Statuses with no outgoing transitions
    pub terminal: Vec<&'static str>,
    /// Defined transitions, grouped by starting status in declaration order
    pub rows: Vec<TransitionRow>,
}

/// Builds the report for entity kind `M`.
#[must_use]
pub fn table_for<M: StatusMachine>() -> TransitionTable {
    let mut rows = Vec::new();
    for &status in M::Status::ALL {
        for &transition in M::Transition::ALL {
            if let Some(result) = M::resulting_status(status, transition) {
                rows.push(TransitionRow {
                    status: status.as_str(),
                    transition: transition.as_str(),
                    result: result.as_str(),
                    status_label: status.label(),
                    transition_label: transition.label(),
                });
            }
        }
    }

    let terminal = M::Status::ALL
        .iter()
        .copied()
        .filter(|&status| M::is_terminal(status))
        .map(Tag::as_str)
        .collect();

    TransitionTable {
        kind: M::NAME,
        label: M::LABEL,
        initial: M::initial_status().as_str(),
        terminal,
        rows,
    }
}

/// Renders a table as aligned plain text.
#[must_use]
pub fn render(table: &TransitionTable) -> String {
    let status_width = column_width(table.rows.iter().map(|r| r.status), "STATUS");
    let transition_width = column_width(table.rows.iter().map(|r| r.transition), "TRANSITION");

    let mut out = String::new();
    let _ = writeln!(out, "{} ({}, initial: {})", table.label, table.kind, table.initial);
    let _ = writeln!(
        out,
        "  {:<status_width$}  {:<transition_width$}  RESULT",
        "STATUS", "TRANSITION"
    );
    for row in &table.rows {
        let _ = writeln!(
            out,
            "  {:<status_width$}  {:<transition_width$}  {}",
            row.status, row.transition, row.result
        );
    }
    if table.terminal.is_empty() {
        let _ = writeln!(out, "  terminal: none");
    } else {
        let _ = writeln!(out, "  terminal: {}", table.terminal.join(", "));
    }
    out
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>, header: &str) -> usize {
    values.map(str::len).chain([header.len()]).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{hourly_rate::HourlyRateLifecycle, kind::EntityKind, lesson::LessonLifecycle};

    #[test]
    fn test_lesson_table_report() {
        let table = table_for::<LessonLifecycle>();
        assert_eq!(table.kind, "lesson");
        assert_eq!(table.label, "Lesson");
        assert_eq!(table.initial, "REQUESTED");
        assert_eq!(table.terminal, vec!["VOIDED"]);
        assert_eq!(table.rows.len(), 6);
        assert_eq!(
            table.rows[0],
            TransitionRow {
                status: "REQUESTED",
                transition: "ACCEPT",
                result: "ACCEPTED",
                status_label: "Requested",
                transition_label: "Accept",
            }
        );
    }

    #[test]
    fn test_kind_table_matches_typed_table() {
        assert_eq!(EntityKind::Lesson.table(), table_for::<LessonLifecycle>());
        for kind in EntityKind::ALL {
            assert_eq!(kind.table().kind, kind.as_str());
        }
    }

    #[test]
    fn test_render_hourly_rate() {
        let text = render(&table_for::<HourlyRateLifecycle>());
        let expected = "\
Teacher Lesson Hourly Rate (teacher_lesson_hourly_rate, initial: ACTIVE)
  STATUS    TRANSITION  RESULT
  ACTIVE    DEACTIVATE  INACTIVE
  INACTIVE  ACTIVATE    ACTIVE
  terminal: none
";
        assert_eq!(text, expected);
    }
}
