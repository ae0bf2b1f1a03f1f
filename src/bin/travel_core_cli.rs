use std::{env, process};

use travel_core::{cli::run_cli, init};

fn main() {
    init();

    if let Err(err) = run_cli(env::args().skip(1)) {
        travel_core::cli::output::error(&err);
        process::exit(1);
    }
}
