//! CLI argument definitions using clap

use autocomplete_cli::{Source, SuggestOptions};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "autocomplete")]
#[command(
    about = "Query autocomplete suggestions from Google, YouTube, Bing, Amazon, and DuckDuckGo"
)]
#[command(version, arg_required_else_help = true)]
pub struct Cli {
    /// Path to a settings.yml file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Get Google autocomplete suggestions
    Google(LocalizedArgs),

    /// Get YouTube autocomplete suggestions
    Youtube(LocalizedArgs),

    /// Get Bing autocomplete suggestions
    Bing(LocalizedArgs),

    /// Get Amazon autocomplete suggestions
    Amazon(QueryArgs),

    /// Get DuckDuckGo autocomplete suggestions
    #[command(name = "duckduckgo", visible_alias = "ddg")]
    DuckDuckGo(QueryArgs),
}

/// Arguments shared by every source
#[derive(Args, Debug)]
pub struct QueryArgs {
    /// Search query
    #[arg(value_name = "query")]
    pub query: String,

    /// Delay between API calls in milliseconds
    #[arg(short, long, value_name = "ms", default_value_t = autocomplete_cli::autocomplete::DEFAULT_DELAY_MS)]
    pub delay: u64,
}

/// Arguments for sources that honor language and country
#[derive(Args, Debug)]
pub struct LocalizedArgs {
    #[command(flatten)]
    pub base: QueryArgs,

    /// Language code (e.g., en, de, es)
    #[arg(short, long, value_name = "code")]
    pub lang: Option<String>,

    /// Country code (e.g., us, uk, in)
    #[arg(short, long, value_name = "code")]
    pub country: Option<String>,
}

impl Commands {
    /// Split into source, query and request options
    pub fn into_request(self) -> (Source, String, SuggestOptions) {
        match self {
            Commands::Google(args) => localized(Source::Google, args),
            Commands::Youtube(args) => localized(Source::YouTube, args),
            Commands::Bing(args) => localized(Source::Bing, args),
            Commands::Amazon(args) => plain(Source::Amazon, args),
            Commands::DuckDuckGo(args) => plain(Source::DuckDuckGo, args),
        }
    }
}

fn plain(source: Source, args: QueryArgs) -> (Source, String, SuggestOptions) {
    (source, args.query, SuggestOptions::new().delay(args.delay))
}

fn localized(source: Source, args: LocalizedArgs) -> (Source, String, SuggestOptions) {
    let (source, query, mut options) = plain(source, args.base);
    options.lang = args.lang;
    options.country = args.country;
    (source, query, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("autocomplete").chain(args.iter().copied()))
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_google_with_options() {
        let cli = parse(&["google", "rust", "-l", "de", "--country", "at", "-d", "0"]).unwrap();
        let (source, query, options) = cli.command.into_request();

        assert_eq!(source, Source::Google);
        assert_eq!(query, "rust");
        assert_eq!(options, SuggestOptions::new().lang("de").country("at").delay(0));
    }

    #[test]
    fn test_default_delay() {
        let cli = parse(&["amazon", "usb"]).unwrap();
        let (_, _, options) = cli.command.into_request();
        assert_eq!(options.delay, Some(100));
    }

    #[test]
    fn test_ddg_alias() {
        let cli = parse(&["ddg", "privacy"]).unwrap();
        let (source, _, _) = cli.command.into_request();
        assert_eq!(source, Source::DuckDuckGo);
    }

    #[test]
    fn test_locale_rejected_for_amazon() {
        assert!(parse(&["amazon", "usb", "--lang", "de"]).is_err());
        assert!(parse(&["duckduckgo", "q", "-c", "us"]).is_err());
    }

    #[test]
    fn test_missing_query_mentions_query() {
        let err = parse(&["youtube"]).unwrap_err();
        assert!(err.to_string().contains("query"));
    }

    #[test]
    fn test_non_numeric_delay_rejected() {
        assert!(parse(&["bing", "q", "--delay", "soon"]).is_err());
    }
}
