//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use quest_domain::{Direction, Location, LocationGraph, LocationId, SuspectEntry};
use quest_engine::SuspectsReport;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format collected clues, already in sorted order.
    pub fn format_clues<'a>(&self, clues: impl IntoIterator<Item = &'a str>) -> Result<String> {
        let clues: Vec<&str> = clues.into_iter().collect();
        match self.format {
            OutputFormat::Json => {
                Ok(serde_json::to_string_pretty(&serde_json::json!({ "clues": clues }))?)
            }
            OutputFormat::Table => Ok(self.format_clues_table(&clues)),
            OutputFormat::Quiet => Ok(clues.join("\n")),
        }
    }

    fn format_clues_table(&self, clues: &[&str]) -> String {
        if clues.is_empty() {
            return self.colorize("No clues collected yet.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["#", "Clue"]);
        for (idx, clue) in clues.iter().enumerate() {
            builder.push_record([(idx + 1).to_string(), clue.to_string()]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        format!("{}\n{}", self.colorize("Clues in alphabetical order", "cyan"), table)
    }

    /// Format every suspect with their clues, plus the leader.
    pub fn format_suspects(&self, report: &SuspectsReport<'_>) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_suspects_json(report),
            OutputFormat::Table => Ok(self.format_suspects_table(report)),
            OutputFormat::Quiet => Ok(self.format_suspects_quiet(report)),
        }
    }

    fn format_suspects_quiet(&self, report: &SuspectsReport<'_>) -> String {
        if report.is_empty() {
            return self.colorize("No suspects recorded yet.", "yellow");
        }

        let mut lines: Vec<String> = report
            .entries()
            .map(|s| format!("{} {}", s.name(), s.count()))
            .collect();
        lines.push(self.leader_line(report.leader));
        lines.join("\n")
    }

    fn format_suspects_json(&self, report: &SuspectsReport<'_>) -> Result<String> {
        let suspects: Vec<serde_json::Value> = report
            .entries()
            .map(|s| {
                serde_json::json!({
                    "name": s.name(),
                    "count": s.count(),
                    "clues": s.clues().collect::<Vec<_>>(),
                })
            })
            .collect();

        let leader = report.leader.map(|s| {
            serde_json::json!({
                "name": s.name(),
                "count": s.count(),
            })
        });

        Ok(serde_json::to_string_pretty(&serde_json::json!({
            "suspects": suspects,
            "leader": leader,
        }))?)
    }

    fn format_suspects_table(&self, report: &SuspectsReport<'_>) -> String {
        if report.is_empty() {
            return self.colorize("No suspects recorded yet.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Suspect", "Clues", "Evidence"]);
        for suspect in report.entries() {
            builder.push_record([
                suspect.name().to_string(),
                suspect.count().to_string(),
                suspect.clues().collect::<Vec<_>>().join("\n"),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        format!("{}\n{}", table, self.leader_line(report.leader))
    }

    /// Line naming the most likely suspect.
    pub fn leader_line(&self, leader: Option<&SuspectEntry>) -> String {
        match leader {
            Some(s) => self.colorize(
                &format!("Most likely suspect so far: {} (clues: {})", s.name(), s.count()),
                "magenta",
            ),
            None => self.colorize("No suspects recorded yet.", "yellow"),
        }
    }

    /// Format the location tree, marking the current room if given.
    pub fn format_map(&self, graph: &LocationGraph, current: Option<LocationId>) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let rooms: Vec<serde_json::Value> = graph
                    .walk()
                    .map(|visit| {
                        let node = visit.location;
                        serde_json::json!({
                            "name": node.name(),
                            "depth": visit.depth,
                            "left": node.left().map(|l| graph.get(l).name()),
                            "right": node.right().map(|r| graph.get(r).name()),
                            "current": current == Some(visit.id),
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&serde_json::json!({ "rooms": rooms }))?)
            }
            OutputFormat::Table => Ok(self.format_map_tree(graph, current)),
            OutputFormat::Quiet => Ok(graph
                .iter()
                .map(|node| node.name())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    fn format_map_tree(&self, graph: &LocationGraph, current: Option<LocationId>) -> String {
        // Whether each ancestor on the current branch was the last child
        let mut finished: Vec<bool> = Vec::new();
        let mut lines = Vec::with_capacity(graph.len());

        for visit in graph.walk() {
            finished.truncate(visit.depth);

            let mut line = String::new();
            if let Some(side) = visit.side {
                for last in finished.iter().skip(1) {
                    line.push_str(if *last { "   " } else { "│  " });
                }
                line.push_str(if visit.last { "└─ " } else { "├─ " });
                line.push_str(&format!("({}) ", side));
            }
            finished.push(visit.last);

            let name = visit.location.name();
            if current == Some(visit.id) {
                line.push_str(&format!("{} *", self.colorize(name, "green")));
            } else {
                line.push_str(name);
            }
            lines.push(line);
        }

        lines.join("\n")
    }

    /// Describe the room the player is standing in.
    pub fn room(&self, location: &Location, exits: &[Direction]) -> String {
        let exits = if exits.is_empty() {
            "Dead end.".to_string()
        } else {
            let names: Vec<&str> = exits.iter().map(Direction::as_str).collect();
            format!("Exits: {}", names.join(", "))
        };
        format!(
            "{}\n{}",
            self.colorize(&format!("You are in: {}", location.name()), "cyan"),
            exits
        )
    }

    /// Message for a move towards a missing room.
    pub fn blocked(&self, direction: Direction) -> String {
        self.warning(&format!("No room to the {}.", direction))
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            "magenta" => text.magenta().to_string(),
            _ => text.to_string(),
        }
    }
}
