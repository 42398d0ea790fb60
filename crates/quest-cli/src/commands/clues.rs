//! Clue listing command.

use crate::error::Result;
use crate::output::Formatter;
use quest_engine::Expedition;

/// Execute the clues command: every collected clue in ascending order.
pub fn execute_clues(expedition: &Expedition, formatter: &Formatter) -> Result<String> {
    formatter.format_clues(expedition.investigation().clues_report())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use quest_domain::Direction;
    use quest_engine::{SearchPolicy, WorldConfig};

    #[test]
    fn test_clues_sorted_after_exploring() {
        let world = WorldConfig::mansion().build().unwrap();
        let mut expedition = Expedition::with_policy(world, SearchPolicy::OnArrival);
        expedition.go(Direction::Left);
        expedition.go(Direction::Left);

        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = execute_clues(&expedition, &formatter).unwrap();
        assert_eq!(
            output,
            "Foto antiga do dono com o jardineiro\nLivro rasgado com nome do mordomo"
        );
    }
}
