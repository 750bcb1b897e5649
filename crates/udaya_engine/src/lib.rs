//! Ephemeris query engine.
//!
//! [`Engine`] owns the loaded SPK and LSK kernels and answers state-vector
//! queries by walking each body's segment chain down to the solar system
//! barycenter, across every loaded kernel, and differencing target and
//! observer.

use std::fmt::{Debug, Formatter};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;
use udaya_kernel::{KernelError, SpkEvaluation, SpkKernel, resolve_to_ssb_across};
use udaya_time::{LeapSecondKernel, TimeError, jd_to_tdb_seconds};

/// Kernel file locations, fixed at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub spk_paths: Vec<PathBuf>,
    pub lsk_path: PathBuf,
}

impl EngineConfig {
    pub fn with_single_spk(spk_path: PathBuf, lsk_path: PathBuf) -> Self {
        Self {
            spk_paths: vec![spk_path],
            lsk_path,
        }
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.spk_paths.is_empty() {
            return Err(EngineError::InvalidConfig("spk_paths must not be empty"));
        }
        if self.spk_paths.iter().any(|p| p.as_os_str().is_empty()) {
            return Err(EngineError::InvalidConfig(
                "spk_paths must not contain empty paths",
            ));
        }
        if self.lsk_path.as_os_str().is_empty() {
            return Err(EngineError::InvalidConfig("lsk_path must not be empty"));
        }
        Ok(())
    }
}

/// Physical bodies with SPK segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl Body {
    /// NAIF body code.
    pub const fn code(self) -> i32 {
        match self {
            Self::Sun => 10,
            Self::Moon => 301,
            Self::Mercury => 199,
            Self::Venus => 299,
            Self::Earth => 399,
            Self::Mars => 499,
            Self::Jupiter => 599,
            Self::Saturn => 699,
            Self::Uranus => 799,
            Self::Neptune => 899,
            Self::Pluto => 999,
        }
    }

    pub const fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            10 => Self::Sun,
            301 => Self::Moon,
            199 => Self::Mercury,
            299 => Self::Venus,
            399 => Self::Earth,
            499 => Self::Mars,
            599 => Self::Jupiter,
            699 => Self::Saturn,
            799 => Self::Uranus,
            899 => Self::Neptune,
            999 => Self::Pluto,
            _ => return None,
        })
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Earth => "Earth",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
        }
    }
}

/// Origin of a query's state vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Observer {
    SolarSystemBarycenter,
    Body(Body),
}

/// Output reference frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frame {
    IcrfJ2000,
    EclipticJ2000,
}

/// A single state-vector request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Query {
    pub target: Body,
    pub observer: Observer,
    pub frame: Frame,
    pub epoch_tdb_jd: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateVector {
    pub position_km: [f64; 3],
    pub velocity_km_s: [f64; 3],
}

#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EngineError {
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
    #[error("invalid query: {0}")]
    InvalidQuery(&'static str),
    #[error("cannot load SPK kernel {}: {source}", .path.display())]
    SpkLoad { path: PathBuf, source: KernelError },
    #[error("cannot load leap-second kernel {}: {source}", .path.display())]
    LskLoad { path: PathBuf, source: TimeError },
    #[error("ephemeris evaluation failed: {0}")]
    Kernel(#[from] KernelError),
}

/// The query engine. `Send + Sync`; queries borrow it immutably.
pub struct Engine {
    spk_kernels: Vec<SpkKernel>,
    lsk: LeapSecondKernel,
}

impl Debug for Engine {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let segments: usize = self.spk_kernels.iter().map(|k| k.segments().len()).sum();
        f.debug_struct("Engine")
            .field("spk_kernels", &self.spk_kernels.len())
            .field("segments", &segments)
            .finish()
    }
}

impl Engine {
    /// Load every kernel named in `config`.
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        let mut spk_kernels = Vec::with_capacity(config.spk_paths.len());
        for path in &config.spk_paths {
            let spk = SpkKernel::load(path).map_err(|source| EngineError::SpkLoad {
                path: path.clone(),
                source,
            })?;
            debug!(
                path = %path.display(),
                bytes = spk.len_bytes(),
                segments = spk.segments().len(),
                "loaded SPK kernel"
            );
            spk_kernels.push(spk);
        }
        let lsk = load_lsk(&config.lsk_path)?;
        Ok(Self { spk_kernels, lsk })
    }

    /// Build an engine from kernels already in memory.
    pub fn from_kernels(
        spk_kernels: Vec<SpkKernel>,
        lsk: LeapSecondKernel,
    ) -> Result<Self, EngineError> {
        if spk_kernels.is_empty() {
            return Err(EngineError::InvalidConfig("at least one SPK kernel is required"));
        }
        Ok(Self { spk_kernels, lsk })
    }

    pub fn spk_kernels(&self) -> &[SpkKernel] {
        &self.spk_kernels
    }

    pub fn lsk(&self) -> &LeapSecondKernel {
        &self.lsk
    }

    pub fn utc_jd_to_tdb_jd(&self, jd_utc: f64) -> f64 {
        self.lsk.utc_jd_to_tdb_jd(jd_utc)
    }

    pub fn tdb_jd_to_utc_jd(&self, jd_tdb: f64) -> f64 {
        self.lsk.tdb_jd_to_utc_jd(jd_tdb)
    }

    /// Evaluate a query.
    pub fn query(&self, query: Query) -> Result<StateVector, EngineError> {
        if !query.epoch_tdb_jd.is_finite() {
            return Err(EngineError::InvalidQuery("epoch_tdb_jd must be finite"));
        }
        if query.observer == Observer::Body(query.target) {
            return Err(EngineError::InvalidQuery(
                "target and observer must differ",
            ));
        }

        let epoch_tdb_s = jd_to_tdb_seconds(query.epoch_tdb_jd);
        let target = resolve_to_ssb_across(&self.spk_kernels, query.target.code(), epoch_tdb_s)?;
        let observer = match query.observer {
            Observer::SolarSystemBarycenter => SpkEvaluation::default(),
            Observer::Body(body) => {
                resolve_to_ssb_across(&self.spk_kernels, body.code(), epoch_tdb_s)?
            }
        };

        let mut position_km = [0.0; 3];
        let mut velocity_km_s = [0.0; 3];
        for i in 0..3 {
            position_km[i] = target.position_km[i] - observer.position_km[i];
            velocity_km_s[i] = target.velocity_km_s[i] - observer.velocity_km_s[i];
        }

        if query.frame == Frame::EclipticJ2000 {
            position_km = udaya_frames::icrf_to_ecliptic(&position_km);
            velocity_km_s = udaya_frames::icrf_to_ecliptic(&velocity_km_s);
        }

        Ok(StateVector {
            position_km,
            velocity_km_s,
        })
    }
}

fn load_lsk(path: &Path) -> Result<LeapSecondKernel, EngineError> {
    let lsk = LeapSecondKernel::load(path).map_err(|source| EngineError::LskLoad {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        path = %path.display(),
        leap_seconds = lsk.data().leap_seconds.len(),
        "loaded leap-second kernel"
    );
    Ok(lsk)
}
