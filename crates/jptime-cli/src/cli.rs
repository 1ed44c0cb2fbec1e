use clap::{Args, Parser, Subcommand};
use jptime::JpLayout;

/// Japanese calendar inspector.
#[derive(Parser)]
#[command(
    name = "jptime",
    version,
    about = "Render Japanese calendar metadata: wareki, holidays, solar terms, kanji dates"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print every calendar attribute of an instant as JSON.
    Show(ShowArgs),
    /// Render an instant in a Japanese layout or a strftime pattern.
    Format(FormatArgs),
    /// List the holidays of a calendar year.
    Holidays(HolidaysArgs),
    /// List the named layouts accepted by `format --layout`.
    Layouts,
}

/// Arguments for the `show` subcommand.
#[derive(Args)]
pub struct ShowArgs {
    /// RFC 3339 timestamp, or a Japan wall-clock `YYYY-MM-DD[THH:MM:SS]`.
    /// Defaults to now.
    pub datetime: Option<String>,

    /// Emit compact single-line JSON.
    #[arg(long)]
    pub compact: bool,
}

/// Arguments for the `format` subcommand.
#[derive(Args)]
pub struct FormatArgs {
    /// RFC 3339 timestamp, or a Japan wall-clock `YYYY-MM-DD[THH:MM:SS]`.
    /// Defaults to now.
    pub datetime: Option<String>,

    /// Named layout (see `jptime layouts`).
    #[arg(short, long, value_parser = parse_layout, conflicts_with = "strftime")]
    pub layout: Option<JpLayout<'static>>,

    /// chrono strftime pattern, e.g. "%Y/%m/%d".
    #[arg(short, long)]
    pub strftime: Option<String>,
}

/// Arguments for the `holidays` subcommand.
#[derive(Args)]
pub struct HolidaysArgs {
    /// Calendar year.
    #[arg(allow_negative_numbers = true)]
    pub year: i32,

    /// Emit JSON instead of one line per holiday.
    #[arg(long)]
    pub json: bool,
}

fn parse_layout(s: &str) -> Result<JpLayout<'static>, String> {
    JpLayout::ALL
        .into_iter()
        .find(|layout| layout.name() == s)
        .ok_or_else(|| {
            let names: Vec<&str> = JpLayout::ALL.iter().map(JpLayout::name).collect();
            format!("unknown layout '{s}' (expected one of: {})", names.join(", "))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_layout() {
        assert_eq!(parse_layout("wareki-date"), Ok(JpLayout::WarekiDate));
        assert_eq!(parse_layout("jisx0301-jp"), Ok(JpLayout::JisX0301Jp));
        let err = parse_layout("nope").unwrap_err();
        assert!(err.contains("kanji-date"));
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
