use std::io::stdin;

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};

use scorekeeper::cli::Args;
use scorekeeper::command::HELP;
use scorekeeper::logging::init_tracing;
use scorekeeper::posts::Post;
use scorekeeper::scorebook::Scorebook;
use scorekeeper::session::{Session, Settings};

fn main() {
    init_tracing();
    let args = Args::parse();
    if let Err(e) = main0(args) {
        eprintln!("Error while keeping score: {e:#}");
        std::process::exit(1);
    }
}

fn main0(args: Args) -> Result<()> {
    let config = args.load_config()?;
    let timezone = config.timezone()?;

    // a missing roster only costs the team and player names
    let roster = args.roster_source(&config).and_then(|source| match source.load() {
        Ok(roster) => Some(roster),
        Err(e) => {
            warn!(error = %e, "Could not load roster");
            eprintln!("Continuing without a roster: {e}");
            None
        }
    });

    let matchup = args.matchup(&config, roster.as_ref())?;
    info!(home = matchup.home(), away = matchup.away(), %timezone, "Keeping score");

    let settings = Settings {
        copy: config.defaults.copy_to_clipboard && !args.no_copy,
        quiet: args.quiet,
    };
    let mut session = Session::new(Scorebook::new(matchup, timezone), roster, args.home_id(), args.away_id(), settings);

    Post::Help(HELP).send_with_settings(true, false)?;
    session.scoreboard().send_with_settings(true, false)?;
    session.run(stdin().lock())
}
