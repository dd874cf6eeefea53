//! Command-line arguments for `bv` and `bv-serve`.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use clap::Parser;

/// Binary file viewer
#[derive(Parser, Debug)]
#[command(name = "bv")]
#[command(author, version, about, long_about = None)]
pub struct ViewArgs {
    /// File to view
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Directory for log files (default: <tmp>/bv)
    #[arg(long, value_name = "DIR", env = "BV_LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

impl ViewArgs {
    pub fn log_dir(&self) -> PathBuf {
        self.log_dir
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("bv"))
    }
}

/// Serve byte ranges of a file over HTTP
#[derive(Parser, Debug)]
#[command(name = "bv-serve")]
#[command(author, version, about, long_about = None)]
pub struct ServeArgs {
    /// File to expose
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Address to bind
    #[arg(long, env = "BV_HOST", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    /// Port to bind (0 picks a free port)
    #[arg(short, long, env = "BV_PORT", default_value_t = 0)]
    pub port: u16,
}

impl ServeArgs {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
