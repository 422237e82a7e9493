use std::fmt;

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Décomposition du temps restant en jours/heures/minutes/secondes.
///
/// Troncature entière uniquement, jamais d'arrondi :
/// `days*86400 + hours*3600 + minutes*60 + seconds == diff_ms / 1000`
/// pour tout écart positif.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeLeft {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl TimeLeft {
    /// Breakdown of a millisecond difference. Any past or zero difference
    /// collapses to all-zero fields.
    pub fn from_millis(diff_ms: i64) -> Self {
        if diff_ms <= 0 {
            return Self::default();
        }
        Self {
            days: (diff_ms / MS_PER_DAY) as u64,
            hours: (diff_ms / MS_PER_HOUR % 24) as u64,
            minutes: (diff_ms / MS_PER_MINUTE % 60) as u64,
            seconds: (diff_ms / MS_PER_SECOND % 60) as u64,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

impl fmt::Display for TimeLeft {
    /// `D:HH:MM:SS` — jours sans padding, le reste sur deux chiffres.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{:02}:{:02}:{:02}",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_millis_truncates() {
        // 1 day, 2 hours, 3 minutes, 4 seconds and change
        let diff = MS_PER_DAY + 2 * MS_PER_HOUR + 3 * MS_PER_MINUTE + 4 * MS_PER_SECOND + 999;
        let tl = TimeLeft::from_millis(diff);
        assert_eq!(
            tl,
            TimeLeft {
                days: 1,
                hours: 2,
                minutes: 3,
                seconds: 4
            }
        );
    }

    #[test]
    fn test_from_millis_past_is_zero() {
        assert!(TimeLeft::from_millis(0).is_zero());
        assert!(TimeLeft::from_millis(-42).is_zero());
    }

    #[test]
    fn test_display_padding() {
        let tl = TimeLeft {
            days: 1,
            hours: 2,
            minutes: 3,
            seconds: 4,
        };
        assert_eq!(tl.to_string(), "1:02:03:04");
        assert_eq!(TimeLeft::default().to_string(), "0:00:00:00");
    }
}
