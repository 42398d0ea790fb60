//! Suspect report command.

use crate::error::Result;
use crate::output::Formatter;
use quest_engine::Expedition;

/// Execute the suspects command: the ledger plus the most likely suspect.
pub fn execute_suspects(expedition: &Expedition, formatter: &Formatter) -> Result<String> {
    let report = expedition.investigation().suspects_report();
    tracing::debug!(
        suspects = expedition.investigation().suspects().len(),
        leader = report.leader.map(|s| s.name()).unwrap_or("none"),
        "Suspect report"
    );
    formatter.format_suspects(&report)
}
