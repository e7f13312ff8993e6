mod commands;
mod terminal;

use commands::{CommandLine, scan};
use terminal::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging();

    let report = scan::scan(&commands.session_config(), &commands.config()).await?;
    println!("{report}");
    Ok(())
}
