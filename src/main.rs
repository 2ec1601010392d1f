use std::io::{self, Write};

use fivecard::cli::{self, Command};

fn main() -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli::parse(std::env::args_os()) {
        Command::Simulate(args) => {
            cli::log(args.verbose)?;
            cli::execute(&args, &mut out)?;
        }
        Command::Print(text) => write!(out, "{text}")?,
    }
    out.flush()?;
    Ok(())
}
