//! CLI definitions
//!
//! Runtime configuration comes in through flags or environment variables;
//! there are no config files.

use clap::Parser;

/// bookstack server CLI
#[derive(Parser, Debug)]
#[command(name = "bookstack")]
#[command(about = "Book catalog API with fuzzy title/author/genre search", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1", env = "BOOKSTACK_HOST")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 3000, env = "BOOKSTACK_PORT")]
    pub port: u16,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["bookstack"]);
        assert_eq!(cli.host, "127.0.0.1");
        assert_eq!(cli.port, 3000);
        assert!(!cli.verbose);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_flag_overrides() {
        let cli = Cli::parse_from(["bookstack", "--host", "0.0.0.0", "-p", "8080", "-v"]);
        assert_eq!(cli.host, "0.0.0.0");
        assert_eq!(cli.port, 8080);
        assert!(cli.verbose);
    }
}
