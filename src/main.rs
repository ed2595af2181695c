use std::{fs::File, io::Write, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sat_equation::{
    catalog, io,
    report::{Layout, Report},
};

#[derive(Parser)]
#[command(name = "sat-equation")]
#[command(version, about = "Encode CNF formulas as a single integer and bisect for its witness", long_about = None)]
struct Cli {
    /// DIMACS CNF files; the built-in examples run when none are given
    inputs: Vec<PathBuf>,

    /// Run only the named built-in example
    #[arg(short, long, conflicts_with = "inputs")]
    example: Option<String>,

    /// Reproduce the original report layout
    #[arg(long)]
    legacy: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn run(cli: &Cli, output: &mut impl Write) -> anyhow::Result<()> {
    let layout = if cli.legacy {
        Layout::Legacy
    } else {
        Layout::Standard
    };

    if !cli.inputs.is_empty() {
        for path in &cli.inputs {
            let mut input =
                File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
            let cnf = io::read_problem(&mut input)
                .with_context(|| format!("cannot read {}", path.display()))?;
            let report = Report::new(&path.display().to_string(), &cnf, layout)?;
            io::write_report(output, &report)?;
        }
        return Ok(());
    }

    let examples = match &cli.example {
        Some(name) => vec![catalog::find(name)?],
        None => catalog::EXAMPLES.iter().collect(),
    };
    for example in examples {
        let report = Report::new(example.formula, &example.cnf()?, layout)?;
        io::write_report(output, &report)?;
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    run(&cli, &mut std::io::stdout())
}
