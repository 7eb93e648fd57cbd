use std::io;
use std::process;

use clap::{App, Arg};
use tracing::Level;

use codonmut::data;
use codonmut::{Report, Scorer};

fn main() {
    let matches = App::new("codonmut")
        .version(clap::crate_version!())
        .about("Score point mutations between the codons of two amino acids")
        .arg(Arg::with_name("verbose")
            .short("v")
            .long("verbose")
            .multiple(true)
            .help("Increase logging verbosity (repeat for more)"))
        .get_matches();

    init_logging(matches.occurrences_of("verbose"));

    if let Err(why) = run() {
        eprintln!("codonmut: {}", why);
        process::exit(1);
    }
}

/// Log to stderr so that the report on stdout is unaffected.
fn init_logging(verbosity: u64) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .with_target(false)
        .with_ansi(false)
        .init();
}

fn run() -> codonmut::Result<()> {
    let usage = data::rsv_a_f_usage()?;
    let groups = data::default_groups()?;

    let source = groups.get(data::SOURCE_LABEL)?;
    let target = groups.get(data::TARGET_LABEL)?;

    let scorer = Scorer::new(&usage);
    let report = Report::new(source, target, &scorer);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report.write_to(&mut out)
}
