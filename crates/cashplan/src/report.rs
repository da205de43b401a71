//! CSV report writing
//!
//! Flattens a plan's export projection into one row per item per year. The
//! export shape carries items only; account balances are not part of it.

use std::io::Write;

use color_eyre::eyre::Result;
use serde::Serialize;

use cashplan_core::Plan;

/// One flattened report row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    pub year: u32,
    pub name: String,
    pub amount: f64,
    pub rate_of_increase: f64,
    pub duration: String,
}

/// Flatten the plan's export projection into rows, ordered by year.
pub fn rows(plan: &Plan) -> Vec<Row> {
    plan.export()
        .into_iter()
        .flat_map(|(year, snapshot)| {
            snapshot.items.into_iter().map(move |item| Row {
                year,
                name: item.name,
                amount: item.amount,
                rate_of_increase: item.rate_of_increase,
                duration: item.duration.to_string(),
            })
        })
        .collect()
}

/// Write the plan as CSV, header row included.
pub fn write_csv<W: Write>(plan: &Plan, writer: W) -> Result<()> {
    let rows = rows(plan);
    tracing::info!(rows = rows.len(), "writing report");

    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}
