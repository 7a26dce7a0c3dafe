use clap::Parser;

/// Carelink Gateway
#[derive(Debug, Parser)]
#[command(name = "carelink", about = "HTTP relay gateway for the Carelink voice companion")]
pub struct Args {
    /// Override the listen address
    #[arg(long, env = "CARELINK_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,

    /// Log filter directive
    #[arg(long, default_value = "info", env = "CARELINK_LOG")]
    pub log: String,
}
