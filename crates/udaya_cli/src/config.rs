//! Process-level configuration. Fixed at startup; requests never change it.

use std::path::PathBuf;

use clap::Parser;
use udaya_engine::EngineConfig;
use udaya_vedic::AyanamshaSystem;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "udaya",
    version,
    about = "Sidereal ascendant windows",
    long_about = "Reads one JSON request on stdin and writes one JSON response on stdout."
)]
pub struct Cli {
    /// SPK kernel(s), e.g. de440s.bsp
    #[arg(long = "bsp", env = "UDAYA_BSP", required = true, value_delimiter = ',')]
    pub bsp: Vec<PathBuf>,

    /// Leap-second kernel, e.g. naif0012.tls
    #[arg(long, env = "UDAYA_LSK")]
    pub lsk: PathBuf,

    /// Sidereal mode
    #[arg(long, env = "UDAYA_AYANAMSHA", default_value = "lahiri")]
    pub ayanamsha: AyanamshaSystem,

    /// Pretty-print the response
    #[arg(long)]
    pub pretty: bool,
}

impl Cli {
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            spk_paths: self.bsp.clone(),
            lsk_path: self.lsk.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_lahiri() {
        let cli = Cli::try_parse_from(["udaya", "--bsp", "de440s.bsp", "--lsk", "naif0012.tls"])
            .unwrap();
        assert_eq!(cli.ayanamsha, AyanamshaSystem::Lahiri);
        assert!(!cli.pretty);
        let config = cli.engine_config();
        assert_eq!(config.spk_paths, [PathBuf::from("de440s.bsp")]);
        assert_eq!(config.lsk_path, PathBuf::from("naif0012.tls"));
    }

    #[test]
    fn several_kernels() {
        let cli = Cli::try_parse_from([
            "udaya", "--bsp", "a.bsp,b.bsp", "--bsp", "c.bsp", "--lsk", "x.tls",
        ])
        .unwrap();
        assert_eq!(cli.bsp.len(), 3);
        assert_eq!(cli.bsp[2], PathBuf::from("c.bsp"));
    }

    #[test]
    fn ayanamsha_by_name() {
        let cli = Cli::try_parse_from([
            "udaya",
            "--bsp",
            "a.bsp",
            "--lsk",
            "x.tls",
            "--ayanamsha",
            "Fagan_Bradley",
            "--pretty",
        ])
        .unwrap();
        assert_eq!(cli.ayanamsha, AyanamshaSystem::FaganBradley);
        assert!(cli.pretty);

        let err = Cli::try_parse_from([
            "udaya",
            "--bsp",
            "a.bsp",
            "--lsk",
            "x.tls",
            "--ayanamsha",
            "galactic",
        ]);
        assert!(err.is_err());
    }
}
