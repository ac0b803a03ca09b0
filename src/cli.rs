//! Command-line interface definitions for speculatores.
//!
//! Every option can be provided via a command-line flag or an environment
//! variable, so a shell alias or a pacman wrapper can pin the viewer and the
//! site once.

use clap::Parser;
use url::Url;

/// Site scouted when no base URL is given.
pub const DEFAULT_BASE_URL: &str = "https://www.archlinux.org";

/// Text-mode browser used when no viewer is given.
pub const DEFAULT_VIEWER: &str = "w3m";

/// Command-line arguments for speculatores.
///
/// # Examples
///
/// ```sh
/// # Scout archlinux.org/news and open a pick in w3m
/// speculatores
///
/// # Use lynx, and a mirror of the news page
/// speculatores --viewer lynx --base-url https://archlinux.example.org
///
/// # Non-interactive
/// speculatores --no-prompt
/// speculatores --json
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Base URL of the site; the listing is read from `{base}/news`
    #[arg(
        short,
        long,
        env = "SPECULATORES_BASE_URL",
        default_value = DEFAULT_BASE_URL,
        value_parser = parse_base_url
    )]
    pub base_url: String,

    /// External viewer invoked with the absolute URL of the selected entry
    #[arg(short, long, env = "SPECULATORES_VIEWER", default_value = DEFAULT_VIEWER)]
    pub viewer: String,

    /// Print the listing and exit without prompting
    #[arg(short, long)]
    pub no_prompt: bool,

    /// Print the entries as JSON and exit without prompting
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Whether the run stops after presenting the listing.
    pub fn is_interactive(&self) -> bool {
        !(self.no_prompt || self.json)
    }
}

/// Validate a base URL and drop any trailing slash, so that both `{base}/news`
/// and `{base}{relative_link}` concatenate cleanly.
fn parse_base_url(raw: &str) -> Result<String, String> {
    let parsed = Url::parse(raw).map_err(|e| format!("invalid base URL `{raw}`: {e}"))?;
    if parsed.cannot_be_a_base() {
        return Err(format!("`{raw}` cannot be used as a base URL"));
    }
    Ok(raw.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["speculatores"]);

        assert_eq!(cli.base_url, DEFAULT_BASE_URL);
        assert_eq!(cli.viewer, DEFAULT_VIEWER);
        assert!(cli.is_interactive());
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from([
            "speculatores",
            "-b",
            "https://mirror.example.org/",
            "-v",
            "lynx",
            "-n",
        ]);

        assert_eq!(cli.base_url, "https://mirror.example.org");
        assert_eq!(cli.viewer, "lynx");
        assert!(!cli.is_interactive());
    }

    #[test]
    fn test_cli_json_is_not_interactive() {
        let cli = Cli::parse_from(["speculatores", "--json"]);
        assert!(cli.json);
        assert!(!cli.is_interactive());
    }

    #[test]
    fn test_cli_rejects_relative_base() {
        let res = Cli::try_parse_from(["speculatores", "--base-url", "archlinux.org"]);
        assert!(res.is_err());
    }

    #[test]
    fn test_parse_base_url_strips_trailing_slashes() {
        assert_eq!(
            parse_base_url("https://www.archlinux.org//").unwrap(),
            "https://www.archlinux.org"
        );
        assert!(parse_base_url("mailto:someone@example.org").is_err());
    }
}
