//! Report rendering: pretty JSON or a localized text summary.

use std::collections::HashMap;
use std::io::{self, Write};

use rust_decimal::Decimal;
use serde::Serialize;

use culinaria_core::budget::{EventBudgetReport, VarianceStatus};
use culinaria_core::expense::{CachedReport, ExpenseReport, ExpenseSnapshot, IntegrityIssue};
use culinaria_shared::types::{Currency, Money};

/// Everything a rendered report is built from.
pub struct ReportView<'a> {
    pub snapshot: &'a ExpenseSnapshot,
    pub cached: &'a CachedReport,
    pub events: &'a EventBudgetReport,
    pub issues: &'a [IntegrityIssue],
}

#[derive(Serialize)]
struct JsonDocument<'a> {
    fingerprint: &'a str,
    expenses: &'a ExpenseReport,
    events: &'a EventBudgetReport,
    issues: &'a [IntegrityIssue],
}

/// Writes the reports as one pretty-printed JSON document.
pub fn write_json<W: Write>(out: &mut W, view: &ReportView<'_>) -> io::Result<()> {
    let document = JsonDocument {
        fingerprint: &view.cached.fingerprint,
        expenses: &view.cached.report,
        events: view.events,
        issues: view.issues,
    };
    serde_json::to_writer_pretty(&mut *out, &document)?;
    writeln!(out)
}

/// Writes a human-readable summary with amounts in `currency`.
pub fn write_text<W: Write>(
    out: &mut W,
    view: &ReportView<'_>,
    currency: Currency,
) -> io::Result<()> {
    let report = &view.cached.report;
    let money = |amount: Decimal| Money::new(amount, currency).format_localized();
    let names = Names::from_snapshot(view.snapshot);

    writeln!(out, "Expense report")?;
    writeln!(out, "  Total expense:    {}", money(report.total_expense))?;
    writeln!(out, "  Total revenue:    {}", money(report.total_revenue))?;
    writeln!(out, "  Balance:          {}", money(report.balance))?;
    writeln!(out, "  Avg per teacher:  {}", money(report.avg_expense_per_teacher))?;
    if !report.unattributed_expense().is_zero() {
        writeln!(
            out,
            "  Not attributed:   {}",
            money(report.unattributed_expense())
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Top teachers")?;
    for (rank, row) in report.top_teachers.iter().enumerate() {
        writeln!(
            out,
            "  {}. {}  {} ({} orders)",
            rank + 1,
            row.name,
            money(row.expense),
            row.order_count
        )?;
    }

    section(out, "By cycle", &report.expense_by_cycle, &names.cycles, money)?;
    section(out, "By module", &report.expense_by_module, &names.modules, money)?;
    section(out, "By group", &report.expense_by_group, &names.groups, money)?;
    section(
        out,
        "By supplier",
        &report.expense_by_supplier,
        &names.suppliers,
        money,
    )?;

    if !view.events.lines.is_empty() {
        writeln!(out)?;
        writeln!(out, "Events")?;
        for line in &view.events.lines {
            writeln!(
                out,
                "  {}  {} of {} ({}%) {}",
                line.event_name,
                money(line.actual),
                money(line.budgeted),
                line.utilization_percent,
                status_label(line.status)
            )?;
        }
        writeln!(
            out,
            "  Not linked to an event: {}",
            money(view.events.unlinked_expense)
        )?;
    }

    let warnings = view
        .issues
        .iter()
        .filter(|issue| issue.severity() == culinaria_core::expense::Severity::Warning)
        .count();
    if warnings > 0 {
        writeln!(out)?;
        writeln!(out, "{warnings} integrity warning(s); see log for details")?;
    }

    Ok(())
}

fn section<W, K, F>(
    out: &mut W,
    title: &str,
    amounts: &std::collections::BTreeMap<K, Decimal>,
    names: &HashMap<K, &str>,
    money: F,
) -> io::Result<()>
where
    W: Write,
    K: std::hash::Hash + Eq + std::fmt::Display,
    F: Fn(Decimal) -> String,
{
    if amounts.is_empty() {
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "{title}")?;
    for (id, amount) in amounts {
        let label = names.get(id).map_or_else(|| id.to_string(), |name| (*name).to_string());
        writeln!(out, "  {label}  {}", money(*amount))?;
    }
    Ok(())
}

const fn status_label(status: VarianceStatus) -> &'static str {
    match status {
        VarianceStatus::Favorable => "under budget",
        VarianceStatus::Unfavorable => "OVER BUDGET",
        VarianceStatus::OnBudget => "on budget",
    }
}

/// Display names for the ids used as report keys.
struct Names<'a> {
    cycles: HashMap<culinaria_shared::types::CycleId, &'a str>,
    modules: HashMap<culinaria_shared::types::ModuleId, &'a str>,
    groups: HashMap<culinaria_shared::types::GroupId, &'a str>,
    suppliers: HashMap<culinaria_shared::types::SupplierId, &'a str>,
}

impl<'a> Names<'a> {
    fn from_snapshot(snapshot: &'a ExpenseSnapshot) -> Self {
        Self {
            cycles: snapshot
                .cycles
                .iter()
                .map(|c| (c.id, c.name.as_str()))
                .collect(),
            modules: snapshot
                .modules
                .iter()
                .map(|m| (m.id, m.name.as_str()))
                .collect(),
            groups: snapshot
                .groups
                .iter()
                .map(|g| (g.id, g.name.as_str()))
                .collect(),
            suppliers: snapshot
                .suppliers
                .iter()
                .map(|s| (s.id, s.name.as_str()))
                .collect(),
        }
    }
}
