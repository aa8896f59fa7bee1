use crate::aggregation::{
    BudgetTotals, BudgetUtilization, CategoryShare, CategoryTotal, Insight, MonthlySeriesPoint, SummaryMetrics,
    format_currency, round_cents,
};

/// Joins rendered rows, ending every row with a newline.
fn join_lines(lines: Vec<String>) -> String {
    lines.into_iter().map(|line| line + "\n").collect()
}

pub fn render_summary(summary: &SummaryMetrics, window_days: i64) -> String {
    let top = match &summary.top_category {
        Some(top) => format!("Top Category     {}  ({} total spent)", top.name, format_currency(top.amount)),
        None => "Top Category     None".to_string(),
    };
    let latest = match &summary.most_recent {
        Some(tx) => format!(
            "Latest           {}  ({} on {})",
            tx.description,
            format_currency(tx.amount),
            tx.date.format("%d.%m.%Y")
        ),
        None => "Latest           No transactions yet".to_string(),
    };

    join_lines(vec![
        format!("Total Expenses   {:>12}  (lifetime)", format_currency(summary.total_expenses)),
        format!(
            "Recent Spending  {:>12}  (last {} days)",
            format_currency(summary.recent_total),
            window_days
        ),
        top,
        latest,
    ])
}

pub fn render_monthly(series: &[MonthlySeriesPoint]) -> String {
    if series.is_empty() {
        return "No expenses recorded\n".to_string();
    }
    let mut lines = vec![format!("{:<10}{:>12}", "Month", "Amount")];
    lines.extend(
        series
            .iter()
            .map(|point| format!("{:<10}{:>12}", point.label(), format_currency(point.total))),
    );
    join_lines(lines)
}

pub fn render_categories(totals: &[CategoryTotal], shares: &[CategoryShare]) -> String {
    if totals.is_empty() {
        return "No expenses recorded\n".to_string();
    }

    let mut sorted: Vec<&CategoryTotal> = totals.iter().collect();
    sorted.sort_by(|a, b| b.total.cmp(&a.total));

    let mut lines = vec![format!("{:<15}  {:>12}  {:>5}", "Category", "Amount", "Share")];
    for total in sorted {
        let share = shares
            .iter()
            .find(|s| s.category == total.category)
            .map(|s| format!("{}%", s.percent))
            .unwrap_or_default();
        lines.push(format!(
            "{:<15}  {:>12}  {:>5}",
            total.category,
            format_currency(total.total),
            share
        ));
    }
    join_lines(lines)
}

pub fn render_budgets(utilization: &[BudgetUtilization], totals: &BudgetTotals) -> String {
    if utilization.is_empty() {
        return "No budgets set\n".to_string();
    }

    let mut lines = vec![format!(
        "{:<15}  {:>10}  {:>10}  {:>10}  {:>7}",
        "Category", "Budget", "Spent", "Remaining", "% Used"
    )];
    for entry in utilization {
        lines.push(format!(
            "{:<15}  {:>10}  {:>10}  {:>10}  {:>6}%",
            entry.category,
            format_currency(entry.budget),
            format_currency(entry.actual),
            format_currency(entry.remaining),
            round_cents(entry.percent_used).normalize()
        ));
    }
    lines.push(format!(
        "{:<15}  {:>10}  {:>10}  {:>10}",
        "Total",
        format_currency(totals.budget),
        format_currency(totals.actual),
        format_currency(totals.remaining)
    ));
    join_lines(lines)
}

pub fn render_insights(insights: &[Insight]) -> String {
    insights.iter().map(|insight| format!("- {}\n", insight)).collect()
}
