//! # Text Rendering
//!
//! Plain-text layout of the two views. One section per file or criterion,
//! with the header counts in parentheses, then numbered tables.

use std::io::{self, Write};

use ecrit_core::RuleId;
use ecrit_registry::view::{BoundaryView, CriterionView, FileView};

/// Shown for a file with no periods.
pub const NO_RULES: &str = "No rules defined";

fn join_rules(rules: &[RuleId]) -> String {
    rules
        .iter()
        .map(RuleId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

fn boundary(b: &BoundaryView) -> String {
    if b.constant == b.value {
        b.constant.clone()
    } else {
        format!("{} [{}]", b.constant, b.value)
    }
}

/// Write the file view.
pub fn write_file_views<W: Write>(out: &mut W, views: &[FileView]) -> io::Result<()> {
    for view in views {
        let s = &view.summary;
        writeln!(
            out,
            "{} ({} periods, {} current rules)",
            s.file, s.period_count, s.current_rule_count
        )?;
        if view.periods.is_empty() {
            writeln!(out, "  {NO_RULES}")?;
        }
        for period in &view.periods {
            let marker = if period.current { " *" } else { "" };
            writeln!(
                out,
                "  Period {} ({} rules){marker}: {} -> {}",
                period.number,
                period.rule_count,
                boundary(&period.start),
                boundary(&period.end)
            )?;
            for row in &period.rows {
                writeln!(
                    out,
                    "    {:>3}  {}  {}",
                    row.number,
                    row.criterion,
                    join_rules(&row.rules)
                )?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Write the criterion view.
pub fn write_criterion_views<W: Write>(out: &mut W, views: &[CriterionView]) -> io::Result<()> {
    for view in views {
        let s = &view.summary;
        writeln!(
            out,
            "{} ({} files, {} current rules)",
            s.criterion, s.file_count, s.current_rule_total
        )?;
        if view.rows.is_empty() {
            writeln!(out, "  {NO_RULES}")?;
        }
        for row in &view.rows {
            writeln!(
                out,
                "  {:>3}  {}  {}",
                row.number,
                row.file,
                join_rules(&row.rules)
            )?;
        }
        writeln!(out)?;
    }
    Ok(())
}
