use std::error::Error;
use std::io;

use chess_rules::protocol::{logger, options::SessionOptions, run_loop};

fn main() -> Result<(), Box<dyn Error + Send + Sync + 'static>> {
    let level = logger::init()?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_loop(stdin.lock(), &mut stdout, SessionOptions::new(level))?;
    Ok(())
}
