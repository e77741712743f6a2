//! shodanhq - Shodan host search from the command line.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    shodanhq_cli::run().await
}
