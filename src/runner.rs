use crate::api_client::{ApiResponse, Fetch};
use crate::error::ApiError;
use crate::ticket::{decode_tickets, render_table};
use colored::Colorize;
use std::{io::Write, thread, time::Duration};

pub const TICKETS_PATH: &str = "api/tickets";
pub const FALLBACK_PATH: &str = "api/mine";
pub const RATE_LIMIT_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOutcome {
    /// The primary endpoint answered and its tickets were printed as a table.
    Listed { count: usize },
    /// The fallback endpoint answered and its raw JSON was printed.
    Fallback,
}

pub struct Runner<F, W> {
    client: F,
    out: W,
    rate_limit_delay: Duration,
}

impl<F: Fetch, W: Write> Runner<F, W> {
    pub fn new(client: F, out: W) -> Self {
        Self {
            client,
            out,
            rate_limit_delay: RATE_LIMIT_DELAY,
        }
    }

    pub fn with_rate_limit_delay(mut self, delay: Duration) -> Self {
        self.rate_limit_delay = delay;
        self
    }

    /// Tries the ticket list, then the fallback endpoint once if the list
    /// did not answer 200. Transport failures end the run immediately.
    pub fn list_tickets(&mut self) -> anyhow::Result<ListOutcome> {
        writeln!(
            self.out,
            "Connecting to: {}...",
            self.client.url(TICKETS_PATH)
        )?;

        let response = self.client.get(TICKETS_PATH)?;
        if response.is_ok() {
            let tickets = decode_tickets(&response.body)?;
            writeln!(self.out, "{} Found {} tickets.", "✅".green(), tickets.len())?;
            writeln!(self.out, "{}", render_table(&tickets))?;
            return Ok(ListOutcome::Listed {
                count: tickets.len(),
            });
        }

        self.explain_status(&response)?;
        self.fallback()
    }

    fn explain_status(&mut self, response: &ApiResponse) -> anyhow::Result<()> {
        log::debug!("Primary endpoint answered {}", response.status);

        match response.status {
            429 => {
                writeln!(
                    self.out,
                    "{} Rate limited (429), waiting {}s...",
                    "⏳".yellow(),
                    self.rate_limit_delay.as_secs_f32()
                )?;
                self.out.flush()?;
                thread::sleep(self.rate_limit_delay);
            }
            401 => writeln!(
                self.out,
                "{} Unauthorized (401): the stored token was rejected. Run 'setup' again.",
                "❌".red()
            )?,
            404 => writeln!(
                self.out,
                "{} Not found (404): the endpoint may be blocked by bot protection.",
                "❌".red()
            )?,
            status => writeln!(self.out, "Primary endpoint answered {status}.")?,
        }

        Ok(())
    }

    fn fallback(&mut self) -> anyhow::Result<ListOutcome> {
        writeln!(self.out, "Attempting alternative path...")?;

        let response = self.client.get(FALLBACK_PATH)?;
        if !response.is_ok() {
            return Err(ApiError::Status {
                url: self.client.url(FALLBACK_PATH),
                status: response.status,
            }
            .into());
        }

        writeln!(self.out, "{} Success on alternative path!", "✅".green())?;
        let pretty = serde_json::from_str::<serde_json::Value>(&response.body)
            .and_then(|value| serde_json::to_string_pretty(&value))
            .unwrap_or(response.body);
        writeln!(self.out, "{pretty}")?;

        Ok(ListOutcome::Fallback)
    }
}
