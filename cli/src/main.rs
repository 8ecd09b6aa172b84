mod commands;
mod terminal;

use commands::CommandLine;
use roster_common::config::Config;
use roster_core::console::TextConsole;
use roster_core::service::RosterService;
use roster_core::session::Session;
use tokio::io::{self, BufReader};
use tracing::debug;

use crate::terminal::logging;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg: Config = commands.to_config(console::colors_enabled());

    logging::init_logging(cfg.verbose);
    debug!(?cfg, "starting roster session");

    let console = TextConsole::new(BufReader::new(io::stdin()), io::stdout(), cfg);
    let mut session = Session::new(RosterService::seeded(), console);
    session.run().await
}
