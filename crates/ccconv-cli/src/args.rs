use crate::types::{LogLevel, RawFormat};
use clap::{Args, Parser, Subcommand};
use std::ffi::OsString;

const EXAMPLES: &str = "\
Examples:
  ccconv                                        List log files updated today
  ccconv raws --since=2024-08-20 --column=timestamp,message.usage --type=assistant
  ccconv raws --since=all --column=sessionId,cwd --type=user
  ccconv raws --column='message.content[].text' --format=plain
  ccconv raws --type=userandtools --format=talk --project=my-app
  ccconv projects --since=2024-08-20 --sort=tokens
  ccconv projects --one-line --sort=messages
  ccconv tokens";

#[derive(Parser)]
#[command(name = "ccconv")]
#[command(about = "Filter, project and summarize Claude Code session logs", long_about = None)]
#[command(version)]
#[command(after_help = EXAMPLES)]
pub struct Cli {
    #[arg(long, global = true, help = "Directory holding config.toml")]
    pub data_dir: Option<String>,

    #[arg(
        long,
        global = true,
        help = "Projects directory to read (default: ~/.claude/projects)"
    )]
    pub log_root: Option<String>,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print records as JSON, a transcript, or key/value lines
    Raws(RawsArgs),

    /// Summarize each project directory
    Projects(ProjectsArgs),

    /// Sum token usage over the last few hours
    Tokens(TokensArgs),
}

#[derive(Debug, Clone, Default, Args)]
pub struct RawsArgs {
    #[arg(long, help = "Start date (YYYY-MM-DD or RFC 3339), or 'all' (default: today)")]
    pub since: Option<String>,

    #[arg(
        long,
        help = "Comma-separated field paths, e.g. timestamp,message.content[].text"
    )]
    pub column: Option<String>,

    #[arg(
        long = "type",
        value_name = "TYPE",
        help = "user | userandtools | assistant | any other record type"
    )]
    pub type_filter: Option<String>,

    #[arg(long, help = "Only projects whose directory name contains this text")]
    pub project: Option<String>,

    #[arg(long, default_value = "json")]
    pub format: RawFormat,
}

#[derive(Debug, Clone, Default, Args)]
pub struct ProjectsArgs {
    #[arg(long, help = "Start date (YYYY-MM-DD or RFC 3339), or 'all' (default: today)")]
    pub since: Option<String>,

    #[arg(long, help = "Only projects whose directory name contains this text")]
    pub project: Option<String>,

    #[arg(long, help = "Print the summaries as JSON")]
    pub json: bool,

    #[arg(long, help = "One line per project")]
    pub one_line: bool,

    #[arg(long, help = "tokens | messages | update (default: name)")]
    pub sort: Option<String>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct TokensArgs {
    #[arg(long, help = "Only projects whose directory name contains this text")]
    pub project: Option<String>,

    #[arg(long, help = "Look-back window in hours (default: 4, or token_window_hours)")]
    pub hours: Option<u32>,
}

/// Bare options accepted without the leading `--`.
const BARE_OPTIONS: [&str; 2] = ["column=", "type="];

/// Rewrites bare `column=...` and `type=...` arguments to their `--` form.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(|arg| {
            let arg = arg.into();
            match arg.to_str() {
                Some(text) if BARE_OPTIONS.iter().any(|bare| text.starts_with(bare)) => {
                    OsString::from(format!("--{text}"))
                }
                _ => arg,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_raws_flags() {
        let cli = Cli::try_parse_from([
            "ccconv",
            "raws",
            "--since=all",
            "--column=timestamp,message.content[].text",
            "--type=assistant",
            "--project=app",
            "--format=talk",
        ])
        .unwrap();

        let Some(Commands::Raws(args)) = cli.command else {
            panic!("expected raws");
        };
        assert_eq!(args.since.as_deref(), Some("all"));
        assert_eq!(args.column.as_deref(), Some("timestamp,message.content[].text"));
        assert_eq!(args.type_filter.as_deref(), Some("assistant"));
        assert_eq!(args.project.as_deref(), Some("app"));
        assert_eq!(args.format, RawFormat::Talk);
    }

    #[test]
    fn test_parse_projects_flags() {
        let cli = Cli::try_parse_from([
            "ccconv",
            "--log-root",
            "/tmp/logs",
            "projects",
            "--json",
            "--one-line",
            "--sort=tokens",
        ])
        .unwrap();

        assert_eq!(cli.log_root.as_deref(), Some("/tmp/logs"));
        let Some(Commands::Projects(args)) = cli.command else {
            panic!("expected projects");
        };
        assert!(args.json);
        assert!(args.one_line);
        assert_eq!(args.sort.as_deref(), Some("tokens"));
    }

    #[test]
    fn test_bare_column_and_type_are_accepted() {
        let cli = Cli::try_parse_from(normalize_args([
            "ccconv",
            "raws",
            "column=timestamp,type",
            "type=user",
            "--since=all",
        ]))
        .unwrap();

        let Some(Commands::Raws(args)) = cli.command else {
            panic!("expected raws");
        };
        assert_eq!(args.column.as_deref(), Some("timestamp,type"));
        assert_eq!(args.type_filter.as_deref(), Some("user"));
        assert_eq!(args.since.as_deref(), Some("all"));
    }

    #[test]
    fn test_normalize_leaves_other_arguments() {
        let args = normalize_args(["ccconv", "raws", "--column=type", "since=all", "columns"]);
        assert_eq!(args, ["ccconv", "raws", "--column=type", "since=all", "columns"]);
    }

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::try_parse_from(["ccconv"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.log_level, LogLevel::Warn);
    }
}
