//! Application configuration from CLI arguments

use std::env;
use std::path::PathBuf;

use super::config_file::ConfigFile;
use super::exit_code;

/// Application configuration from CLI args and config file
pub struct Config {
    /// Root directory terms resolve against
    pub root: PathBuf,
    /// Term loaded at startup and bound to the home key
    pub home: String,
    /// Dump mode: resolve one term, print the page, exit
    pub dump: Option<String>,
    /// Show hidden files (from config file, CLI can override)
    pub show_hidden: bool,
    /// Enable mouse support (from config file, CLI can override)
    pub mouse_enabled: bool,
    /// Maximum suggestion rows (from config file)
    pub max_results: usize,
    /// Maximum retained history entries (from config file)
    pub history_size: usize,
}

impl Config {
    pub fn from_args() -> anyhow::Result<Self> {
        // Load config file first (provides defaults)
        let config_file = ConfigFile::load();

        let mut args = env::args().skip(1);
        let mut root = env::current_dir()?;
        let mut home: Option<String> = None;
        let mut dump: Option<String> = None;
        let mut show_hidden: Option<bool> = None;
        let mut mouse_enabled: Option<bool> = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--dump" | "-d" => {
                    if let Some(term) = args.next() {
                        dump = Some(term);
                    } else {
                        anyhow::bail!("--dump requires a term");
                    }
                }
                "--home" => {
                    if let Some(term) = args.next() {
                        home = Some(term);
                    } else {
                        anyhow::bail!("--home requires a term");
                    }
                }
                "--hidden" | "-a" => show_hidden = Some(true),
                "--no-hidden" => show_hidden = Some(false),
                "--no-mouse" => mouse_enabled = Some(false),
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(exit_code::SUCCESS);
                }
                "--version" | "-V" => {
                    println!("pgv {}", env!("CARGO_PKG_VERSION"));
                    std::process::exit(exit_code::SUCCESS);
                }
                path if !path.starts_with('-') => {
                    let p = PathBuf::from(path);
                    if p.is_dir() {
                        root = p.canonicalize()?;
                    } else {
                        anyhow::bail!("Root is not a directory: {}", path);
                    }
                }
                unknown => {
                    anyhow::bail!(
                        "Unknown option: {}. Use --help for usage information.",
                        unknown
                    );
                }
            }
        }

        // CLI arguments take precedence over config file
        Ok(Self {
            root,
            home: home.unwrap_or(config_file.general.homepage),
            dump,
            show_hidden: show_hidden.unwrap_or(config_file.general.show_hidden),
            mouse_enabled: mouse_enabled.unwrap_or(config_file.general.mouse_enabled),
            max_results: config_file.suggestions.max_results,
            history_size: config_file.suggestions.history_size,
        })
    }
}

fn print_help() {
    println!(
        r#"pgv - pageview: a terminal page browser

USAGE:
    pgv [OPTIONS] [ROOT]

Terms entered in the address bar resolve against ROOT (default: the
current directory). A directory loads as a listing page, a file as a
text page, and anything else as a fuzzy search-results page.

OPTIONS:
    -d, --dump TERM     Resolve TERM, print the page to stdout, exit
    --home TERM         Homepage term (default from config file, else ".")
    -a, --hidden        Show hidden files
    --no-hidden         Hide hidden files
    --no-mouse          Disable mouse support
    -h, --help          Show this help message
    -V, --version       Show version

CONFIG FILES:
    ~/.config/pageview/config.toml     Main configuration
    ~/.config/pageview/theme.toml      Color theme
    ~/.config/pageview/history.json    Browsing history

KEYBINDINGS:
    /           Enter a path or search term
    e           Edit the current address
    Enter       Go (in the address bar)
    Tab         Accept the highlighted suggestion
    f           Find in page
    Enter/↓ ↑   Next / previous match (find bar)
    ←/Backspace Back
    →           Forward
    r/F5        Reload
    x           Stop
    j/k Space b Scroll
    g/G         Top / bottom
    c           Copy address to clipboard
    H           Go home
    m/?         Menu
    q           Quit

EXIT CODES:
    0           Success
    1           Error
    2           Invalid arguments
"#
    );
}
