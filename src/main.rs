use clap::Parser;

use termglyph::cli::{self, Args, Command, CommandError};
use termglyph::config::Config;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CommandError> {
    let config = Config::load(args.config.as_deref())?;

    match args.command {
        Command::Config { action } => {
            cli::handle_config_action(action, &config, args.config.as_deref())
        }
        command => {
            // Merge settings: CLI flags > config file > built-in defaults
            let table = config
                .render
                .glyph_table(args.ramp.map(Into::into), args.invert)?;
            cli::run_command(command, &config, &table)
        }
    }
}
