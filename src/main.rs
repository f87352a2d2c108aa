mod cli;
mod common;

use {clap::Parser, std::io::BufWriter};

fn main() -> anyhow::Result<()> {
    let mut stdout = BufWriter::new(std::io::stdout().lock());
    cli::run(cli::Cli::parse(), &mut stdout)
}
