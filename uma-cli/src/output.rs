//! Output formatting for fetched records

use crate::error::CliError;
use std::fmt::Write;
use uma_http_client::{Champion, Node, War};

/// How records are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable summary
    #[default]
    Full,
    /// Only the record's name
    Quiet,
    /// Pretty-printed JSON, keys as the API sends them
    Json,
}

/// A record returned by one of the fetch commands
#[derive(Debug)]
pub enum Fetched {
    Champion(Champion),
    Node(Node),
    War(War),
}

/// Output formatter for fetched records
pub struct OutputFormatter {
    mode: OutputMode,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }

    /// Format and print a record to stdout
    pub fn print(&self, record: &Fetched) -> Result<(), CliError> {
        println!("{}", self.render(record)?);
        Ok(())
    }

    /// Render a record according to the output mode
    pub fn render(&self, record: &Fetched) -> Result<String, CliError> {
        match self.mode {
            OutputMode::Json => render_json(record),
            OutputMode::Quiet => Ok(render_quiet(record)),
            OutputMode::Full => Ok(match record {
                Fetched::Champion(champ) => render_champion(champ),
                Fetched::Node(node) => render_node(node),
                Fetched::War(war) => render_war(war),
            }),
        }
    }
}

fn render_json(record: &Fetched) -> Result<String, CliError> {
    let json = match record {
        Fetched::Champion(champ) => serde_json::to_string_pretty(champ)?,
        Fetched::Node(node) => serde_json::to_string_pretty(node)?,
        Fetched::War(war) => serde_json::to_string_pretty(war)?,
    };
    Ok(json)
}

fn render_quiet(record: &Fetched) -> String {
    match record {
        Fetched::Champion(champ) => champ.name.clone(),
        Fetched::Node(node) => node.node_name.clone(),
        Fetched::War(war) => format!("Tier {}", war.tier),
    }
}

// Writing to a String cannot fail

fn render_champion(champ: &Champion) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} ({}) - {}★ rank {}",
        champ.name, champ.class_tag, champ.tier, champ.rank
    );
    let _ = writeln!(out, "  Released:          {}", champ.released);
    let _ = writeln!(out, "  Prestige:          {}", champ.prestige);
    let _ = writeln!(out, "  Challenger rating: {}", champ.challenger_rating);
    let _ = writeln!(out, "  Health:            {}", champ.hp);
    let _ = writeln!(out, "  Attack:            {}", champ.attack);
    let _ = writeln!(
        out,
        "  Crit rate/damage:  {} / {}",
        champ.crit_rate, champ.crit_dmge
    );
    let _ = writeln!(out, "  Armor:             {}", champ.armor);
    let _ = writeln!(out, "  Block proficiency: {}", champ.block_prof);
    let _ = writeln!(
        out,
        "  Resistances:       energy {}, physical {}, crit {}",
        champ.energy_resist, champ.physical_resist, champ.crit_resist
    );

    if !champ.tags.is_empty() {
        let _ = writeln!(out, "  Tags: {}", champ.tags.join(" "));
    }
    if !champ.sig_info.is_empty() {
        let _ = writeln!(out, "  Signature:");
        for line in &champ.sig_info {
            let _ = writeln!(out, "    - {}", line);
        }
    }
    if !champ.abilities.is_empty() {
        let _ = writeln!(out, "  Abilities:");
        for (name, detail) in &champ.abilities {
            match detail.as_str() {
                Some(text) => {
                    let _ = writeln!(out, "    {}: {}", name, text);
                }
                None => {
                    let _ = writeln!(out, "    {}: {}", name, detail);
                }
            }
        }
    }
    let _ = write!(out, "  More: {}", champ.url_page);
    out
}

fn render_node(node: &Node) -> String {
    format!("#{} {}\n  {}", node.node_id, node.node_name, node.node_info)
}

fn render_war(war: &War) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Tier {} - {} ({}, multiplier {})",
        war.tier, war.tier_rank, war.difficulty, war.tier_multiplier
    );
    for (group, nodes) in &war.nodes {
        let _ = writeln!(out, "  {}: {}", group, nodes.join(", "));
    }
    out.trim_end().to_string()
}
