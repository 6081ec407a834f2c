use crate::error::ApiError;
use serde::Deserialize;
use std::fmt;

pub const TITLE_WIDTH: usize = 20;

const MISSING: &str = "-";

/// A ticket as returned by the service. Fields are display-only.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Ticket {
    #[serde(default)]
    pub id: Option<Field>,
    #[serde(default)]
    pub title: Option<Field>,
    #[serde(default)]
    pub status: Option<Field>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Field {
    Text(String),
    Number(serde_json::Number),
    Flag(bool),
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Text(value) => f.write_str(value),
            Field::Number(value) => write!(f, "{value}"),
            Field::Flag(value) => write!(f, "{value}"),
        }
    }
}

/// Control characters become spaces so every ticket stays on one line.
fn display(field: &Option<Field>) -> String {
    field
        .as_ref()
        .map(|v| {
            v.to_string()
                .chars()
                .map(|c| if c.is_control() { ' ' } else { c })
                .collect()
        })
        .unwrap_or_else(|| MISSING.to_string())
}

pub fn decode_tickets(body: &str) -> Result<Vec<Ticket>, ApiError> {
    serde_json::from_str(body).map_err(Into::into)
}

/// Cuts `text` to at most `width` characters.
pub fn truncate(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}

/// One header line, one rule line, then exactly one line per ticket.
pub fn render_table(tickets: &[Ticket]) -> String {
    let mut lines = Vec::with_capacity(tickets.len() + 2);
    lines.push(format!(
        "{:<10} {:<width$} {}",
        "ID",
        "TITLE",
        "STATUS",
        width = TITLE_WIDTH
    ));
    lines.push("-".repeat(10 + 1 + TITLE_WIDTH + 1 + 12));

    lines.extend(tickets.iter().map(|ticket| {
        format!(
            "{:<10} {:<width$} {}",
            display(&ticket.id),
            truncate(&display(&ticket.title), TITLE_WIDTH),
            display(&ticket.status),
            width = TITLE_WIDTH
        )
    }));

    lines.join("\n")
}
