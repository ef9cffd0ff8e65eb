//! Server configuration from command-line flags and environment.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Announcements server: serves company announcements and the web UI
#[derive(Debug, Parser)]
#[command(name = "announcements-server")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "ANNOUNCEMENTS_ADDR", default_value = "0.0.0.0:5970")]
    pub addr: SocketAddr,

    /// JSON seed file mapping company handle to announcements (default: bundled sample)
    #[arg(long, env = "ANNOUNCEMENTS_SEED")]
    pub seed: Option<PathBuf>,

    /// Directory containing the built frontend
    #[arg(long, env = "ANNOUNCEMENTS_STATIC_DIR", default_value = "crates/frontend/dist")]
    pub static_dir: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["announcements-server"]).unwrap();

        assert_eq!(config.addr, "0.0.0.0:5970".parse().unwrap());
        assert!(config.seed.is_none());
        assert_eq!(config.static_dir, PathBuf::from("crates/frontend/dist"));
    }

    #[test]
    fn test_flags() {
        let config = Config::try_parse_from([
            "announcements-server",
            "--addr",
            "127.0.0.1:8080",
            "--seed",
            "data/seed.json",
        ])
        .unwrap();

        assert_eq!(config.addr.port(), 8080);
        assert_eq!(config.seed, Some(PathBuf::from("data/seed.json")));
    }

    #[test]
    fn test_invalid_addr_rejected() {
        assert!(Config::try_parse_from(["announcements-server", "--addr", "nope"]).is_err());
    }
}
