#![allow(missing_docs)]

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use palc::{compile, Format};
use palc_bitstream::{Device, Diagram, Tt06Pal};
use palc_equations::TruthTable;

/// Compiles Boolean equations into a PAL configuration bitstream.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Equation source, one `name = expression` per line.
    input: PathBuf,

    /// 0: info, 1: debug and diagram, 2: trace, 3: trace and truth tables.
    #[clap(short = 'd', long, default_value = "0", value_parser = clap::value_parser!(u8).range(0..=3))]
    debug: u8,

    /// Encoding printed to stdout.
    #[clap(short = 'f', long, value_enum, default_value_t = Format::All)]
    format: Format,

    /// Print the fuse diagram.
    #[clap(long)]
    diagram: bool,
}

fn main() -> color_eyre::Result<()> {
    let args = Args::parse();

    color_eyre::install()?;
    match args.debug {
        0 => palc_logger::setup(),
        level => palc_logger::setup_with_default(palc_logger::filter_for_debug_level(level)),
    }

    let source = std::fs::read_to_string(&args.input)
        .wrap_err_with(|| format!("failed to read {}", args.input.display()))?;

    log::info!("compiling {} for {}", args.input.display(), Tt06Pal::NAME);

    let compilation = compile::<Tt06Pal>(&source)?;

    if args.debug >= 1 {
        for output in &compilation.outputs {
            println!("{} = {}", output.name, output.dnf);
        }
        println!();
    }

    if args.debug >= 3 {
        for output in &compilation.outputs {
            println!("{}", TruthTable::new(&output.name, &output.expr));
        }
    }

    if args.debug >= 1 || args.diagram {
        println!("{}", Diagram(&compilation.bitstream));
    }

    println!("{}", args.format.render(&compilation.bitstream));

    Ok(())
}
