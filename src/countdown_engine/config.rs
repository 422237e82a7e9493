use anyhow::{anyhow, Result};
use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;

lazy_static! {
    // `YYYY-MM-DDTHH:MM:SS` (espace accepté à la place du `T`)
    static ref TARGET_RE: Regex =
        Regex::new(r"^(\d{4})-(\d{2})-(\d{2})[T ](\d{2}):(\d{2}):(\d{2})$").unwrap();
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CountdownConfig {
    /// Instant cible, `YYYY-MM-DDTHH:MM:SS`, interprété en UTC.
    pub target: String,
    pub tick_period_ms: u64,
    pub poll_period_ms: u64,
}

impl Default for CountdownConfig {
    fn default() -> Self {
        Self {
            target: "2027-01-01T00:00:00".to_string(),
            tick_period_ms: 1_000,
            poll_period_ms: 500,
        }
    }
}

impl CountdownConfig {
    pub fn from_file(path: &str) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    /// Cible résolue en millisecondes epoch.
    pub fn target_epoch_ms(&self) -> Result<i64> {
        parse_target(&self.target)
    }
}

/// Parse une date-heure `YYYY-MM-DDTHH:MM:SS` en millisecondes epoch (UTC).
pub fn parse_target(text: &str) -> Result<i64> {
    let caps = TARGET_RE
        .captures(text.trim())
        .ok_or_else(|| anyhow!("invalid target datetime '{}'", text))?;

    // Le regex garantit des entiers, les bornes restent à valider.
    let field = |i: usize| -> i64 { caps[i].parse().unwrap_or(0) };
    let (year, month, day) = (field(1), field(2), field(3));
    let (hour, minute, second) = (field(4), field(5), field(6));

    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return Err(anyhow!("invalid calendar date in '{}'", text));
    }
    if hour >= 24 || minute >= 60 || second >= 60 {
        return Err(anyhow!("invalid time of day in '{}'", text));
    }

    let days = days_from_civil(year, month, day);
    Ok((days * 86_400 + hour * 3_600 + minute * 60 + second) * 1_000)
}

// Conversion calendrier grégorien -> jours depuis l'epoch (algorithme
// "days_from_civil" de Howard Hinnant).
fn days_from_civil(year: i64, month: i64, day: i64) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400;
    let mp = if month > 2 { month - 3 } else { month + 9 };
    let doy = (153 * mp + 2) / 5 + day - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}
