pub mod shutdown;

use std::fmt::Display;

use chrono::TimeDelta;

pub fn format_uptime(td: TimeDelta) -> FormattedUptime {
    FormattedUptime(td)
}

#[derive(Debug)]
pub struct FormattedUptime(TimeDelta);

impl Display for FormattedUptime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let days = self.0.num_days();
        let hours = self.0.num_hours() % 24;
        let minutes = self.0.num_minutes() % 60;
        let seconds = self.0.num_seconds() % 60;
        if days > 0 {
            write!(f, "{days} days ")?;
        }
        write!(f, "{hours}h {minutes}m {seconds}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_formats_short_uptimes() {
        let td = TimeDelta::seconds(3 * 3600 + 25 * 60 + 7);
        assert_eq!(format_uptime(td).to_string(), "3h 25m 7s");
    }

    #[test]
    fn it_prefixes_days() {
        let td = TimeDelta::seconds(2 * 86400 + 61);
        assert_eq!(format_uptime(td).to_string(), "2 days 0h 1m 1s");
    }
}
