//! Movement and room description commands.

use crate::output::Formatter;
use quest_domain::Direction;
use quest_engine::{Expedition, Move};

/// Execute a move towards `direction`.
///
/// A missing room is reported, not treated as an error; the cursor stays put.
pub fn execute_move(
    direction: Direction,
    expedition: &mut Expedition,
    formatter: &Formatter,
) -> String {
    match expedition.go(direction) {
        Move::Entered { evidence, .. } => {
            let mut output = formatter.room(expedition.current(), &expedition.exits());
            if evidence > 0 {
                output.push('\n');
                let found = format!("Found {} piece(s) of evidence", evidence);
                output.push_str(&formatter.success(&found));
            }
            output
        }
        Move::Blocked => formatter.blocked(direction),
    }
}

/// Describe the current room and how the player got there.
pub fn execute_where(expedition: &Expedition, formatter: &Formatter) -> String {
    let trail: Vec<&str> = expedition.path().map(|location| location.name()).collect();
    format!(
        "{}\nPath: {}",
        formatter.room(expedition.current(), &expedition.exits()),
        trail.join(" -> ")
    )
}
