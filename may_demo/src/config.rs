use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "may_demo")]
#[command(about = "Evaluates a table of potential-value computations over two inputs", long_about = None)]
#[command(version)]
#[command(allow_negative_numbers = true)]
pub struct Cli {
    /// First input
    #[arg(default_value = "")]
    pub a: String,

    /// Second input
    #[arg(default_value = "")]
    pub b: String,

    /// Keep reading "A B" lines from stdin and re-evaluate every row
    #[arg(short, long)]
    pub interactive: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Raise the log level (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Settings the demo runs with, resolved from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub a: String,
    pub b: String,
    pub interactive: bool,
    pub color: bool,
    pub log_level: LevelFilter,
}

impl From<Cli> for DemoConfig {
    fn from(cli: Cli) -> Self {
        DemoConfig {
            a: cli.a,
            b: cli.b,
            interactive: cli.interactive,
            color: !cli.no_color,
            log_level: level_for(cli.verbose),
        }
    }
}

fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
