use anyhow::Result;
use tracing::info;

use kibitz_term::Shell;

fn main() -> Result<()> {
    // stdout carries the board; logs go to stderr.
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    info!("kibitz starting");
    Shell::new().run()?;
    Ok(())
}
