use chrono::{DateTime, TimeZone};

pub fn timestamped_filename<Tz: TimeZone>(
    prefix: &str,
    extension: &str,
    at: &DateTime<Tz>,
) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("{}_{}.{}", prefix, at.format("%Y%m%d_%H%M%S"), extension)
}
