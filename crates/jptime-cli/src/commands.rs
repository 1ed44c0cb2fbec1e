use anyhow::{Context, Result};
use chrono::Utc;
use jptime::{holidays_in_year, JpLayout, JpTime};
use tracing::{debug, info};

use crate::cli::{FormatArgs, HolidaysArgs, ShowArgs};

/// Resolve the positional DATETIME argument, defaulting to the current instant.
fn resolve_datetime(datetime: Option<&str>) -> Result<JpTime> {
    match datetime {
        Some(s) => JpTime::parse(s).with_context(|| format!("parsing datetime '{s}'")),
        None => Ok(JpTime::new(Utc::now())),
    }
}

pub fn show(args: ShowArgs) -> Result<()> {
    let t = resolve_datetime(args.datetime.as_deref())?;
    debug!(datetime = %t, "building calendar snapshot");

    let calendar = t.calendar();
    let json = if args.compact {
        serde_json::to_string(&calendar)
    } else {
        serde_json::to_string_pretty(&calendar)
    }
    .context("serializing calendar")?;
    println!("{json}");
    Ok(())
}

pub fn format(args: FormatArgs) -> Result<()> {
    let t = resolve_datetime(args.datetime.as_deref())?;

    let layout = match (&args.layout, &args.strftime) {
        (Some(layout), _) => *layout,
        (None, Some(pattern)) => JpLayout::Strftime(pattern),
        (None, None) => JpLayout::Iso8601,
    };
    debug!(datetime = %t, layout = layout.name(), "formatting");

    let rendered = t.jp_format(layout);
    if rendered.is_empty() {
        info!(layout = layout.name(), "layout produced no output for this instant");
    }
    println!("{rendered}");
    Ok(())
}

pub fn holidays(args: HolidaysArgs) -> Result<()> {
    let holidays = holidays_in_year(args.year)?;
    info!(year = args.year, count = holidays.len(), "listed holidays");

    if args.json {
        let json = serde_json::to_string_pretty(&holidays).context("serializing holidays")?;
        println!("{json}");
        return Ok(());
    }

    for h in &holidays {
        let weekday = JpTime::from_date(h.date)?.jp_weekday();
        println!("{} ({}) {}", h.date, weekday.glyph(), h.name);
    }
    Ok(())
}

pub fn layouts() -> Result<()> {
    let width = JpLayout::ALL
        .iter()
        .map(|layout| layout.name().len())
        .max()
        .unwrap_or(0);
    for layout in JpLayout::ALL {
        println!("{:<width$}  {}", layout.name(), layout.as_str());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_datetime() {
        let t = resolve_datetime(Some("2006-01-02T15:04:05")).unwrap();
        assert_eq!(t.to_string(), "2006-01-02T15:04:05+09:00");

        let err = resolve_datetime(Some("yesterday")).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("parsing datetime 'yesterday'"));
        assert!(msg.contains("Invalid datetime"));

        assert!(resolve_datetime(None).is_ok());
    }
}
