// src/bin/cli.rs
use color_eyre::eyre::eyre;
use doms_access::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = cli::parse_args(std::env::args().skip(1)).map_err(|e| eyre!(e))?;
    cli::run(args).map_err(|e| eyre!(e))
}
