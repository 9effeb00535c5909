use super::snapshot::StateSnapshot;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn status(snapshot: &StateSnapshot) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["FATIGUE", "REST STREAK", "PERCENT", "AT LIMIT", "MONITORING", "UPDATED"]);
        table.add_row(row![
            format!("{} min", snapshot.fatigue),
            format!("{} min", snapshot.rest_streak),
            // Display clamp only; internal fatigue may exceed the limit
            format!("{}%", snapshot.fatigue_percent.round().min(100.0)),
            if snapshot.at_limit { "yes" } else { "no" },
            if snapshot.monitoring { "yes" } else { "no" },
            snapshot.updated_at.format("%Y-%m-%d %H:%M:%S")
        ]);
        table.printstd();

        Ok(())
    }
}
