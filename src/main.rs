mod commands;
mod logging;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser};

const EXAMPLES: &str = "\
Examples:
  add-meetup \"My crazy topic\" \"Alex Hart\"
  add-meetup \"My crazy topic\" \"Alex Hart\" \"Michael Go\"
  add-meetup --date 2026-05-01 --time 7:00pm \"My crazy topic\" \"Alex Hart\"";

#[derive(Parser)]
#[command(name = "add-meetup")]
#[command(about = "Add a new meetup entry to the year's JSON and MD files")]
#[command(after_help = EXAMPLES)]
struct Cli {
    /// Date of the meetup (default: next first Friday of the month)
    #[arg(long, value_name = "yyyy-mm-dd")]
    date: Option<String>,

    /// Time of the meetup (default: default_time from config, or 6:30pm)
    #[arg(long, value_name = "hh:mmam/pm")]
    time: Option<String>,

    /// Directory holding the "MeetUps <year>" folders (default: meetups_dir from config)
    #[arg(long, value_name = "path")]
    dir: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Topic of the meetup
    topic: String,

    /// Presenter name(s)
    #[arg(required = true)]
    presenters: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.verbose);

    commands::add::run(commands::add::AddArgs {
        date: cli.date,
        time: cli.time,
        dir: cli.dir,
        topic: cli.topic,
        presenters: cli.presenters,
    })
}
