//! Map command.

use crate::error::Result;
use crate::output::Formatter;
use quest_engine::Expedition;

/// Execute the map command, marking the room under the cursor.
pub fn execute_map(expedition: &Expedition, formatter: &Formatter) -> Result<String> {
    formatter.format_map(expedition.graph(), Some(expedition.current_id()))
}
