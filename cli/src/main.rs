mod commands;
mod terminal;

use commands::{CommandLine, Commands, add, prompt};
use recordr_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init(commands.verbose);

    let cfg: Config = commands.config();
    print::banner(cfg.no_banner, cfg.quiet);

    match commands.command.unwrap_or(Commands::Prompt) {
        Commands::Prompt => {
            print::header("record intake", cfg.quiet);
            prompt::prompt(&cfg)
        }
        Commands::Add { fields } => add::add(&fields, &cfg),
    }
}
