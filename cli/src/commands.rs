use clap::{ArgAction, Parser};
use roster_common::config::Config;

#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(about = "An interactive, in-memory employee roster.")]
pub struct CommandLine {
    /// Print every message without colours
    #[arg(long)]
    pub no_color: bool,
    /// Show diagnostics on stderr (repeat for more detail)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Colour is only used when asked for and stdout can show it.
    pub fn to_config(&self, colors_supported: bool) -> Config {
        Config {
            color: !self.no_color && colors_supported,
            verbose: self.verbose,
        }
    }
}
