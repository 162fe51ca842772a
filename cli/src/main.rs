mod args;
mod run;

use args::Args;
use std::process;

fn main() {
    env_logger::init();
    let args = Args::parse().unwrap_or_else(|e| e.exit());
    if let Err(e) = run::run(args) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
