use crate::foundation::core::Fps;
use crate::foundation::error::{CadenceError, CadenceResult};

/// Physical parameters of a damped spring driving progress from 0 to 1.
///
/// `damping` is the viscous coefficient `c`, `stiffness` the spring constant `k` and `mass`
/// the inertia `m` in `m x'' + c x' + k (x - 1) = 0`. All three are finite and strictly
/// positive; [`SpringConfig::new`] and deserialization both enforce this.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "SpringConfigDef")]
pub struct SpringConfig {
    damping: f64,
    stiffness: f64,
    mass: f64,
}

impl SpringConfig {
    /// Critically damped, settles in a bit under a second.
    pub const DEFAULT: Self = Self {
        damping: 20.0,
        stiffness: 100.0,
        mass: 1.0,
    };
    /// Light and stiff; used for scale-ins.
    pub const FAST: Self = Self {
        damping: 25.0,
        stiffness: 200.0,
        mass: 0.5,
    };
    /// Heavy with a soft overshoot.
    pub const SLOW: Self = Self {
        damping: 15.0,
        stiffness: 60.0,
        mass: 1.5,
    };
    /// Visible bounce.
    pub const BOUNCY: Self = Self {
        damping: 10.0,
        stiffness: 150.0,
        mass: 0.5,
    };
    /// Slight overshoot; used for highlights and calls to action.
    pub const SNAPPY: Self = Self {
        damping: 15.0,
        stiffness: 120.0,
        mass: 1.0,
    };

    /// Build a validated config.
    pub fn new(damping: f64, stiffness: f64, mass: f64) -> CadenceResult<Self> {
        for (name, v) in [
            ("damping", damping),
            ("stiffness", stiffness),
            ("mass", mass),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(CadenceError::invalid_config(format!(
                    "spring {name} must be finite and > 0, got {v}"
                )));
            }
        }
        Ok(Self {
            damping,
            stiffness,
            mass,
        })
    }

    /// Look up a named preset (`default`, `fast`, `slow`, `bouncy`, `snappy`).
    pub fn preset(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "default" => Some(Self::DEFAULT),
            "fast" => Some(Self::FAST),
            "slow" => Some(Self::SLOW),
            "bouncy" => Some(Self::BOUNCY),
            "snappy" => Some(Self::SNAPPY),
            _ => None,
        }
    }

    /// Viscous damping coefficient.
    pub fn damping(self) -> f64 {
        self.damping
    }

    /// Spring constant.
    pub fn stiffness(self) -> f64 {
        self.stiffness
    }

    /// Inertia.
    pub fn mass(self) -> f64 {
        self.mass
    }

    /// Undamped angular frequency `sqrt(k / m)`, in rad/s.
    pub fn natural_frequency(self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    /// Damping ratio `c / (2 sqrt(k m))`. Below 1 the spring overshoots.
    pub fn damping_ratio(self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// First relative frame from which the response is guaranteed to stay within `tolerance`
    /// of its rest value.
    ///
    /// Capped at ten minutes worth of frames. A non-positive tolerance returns the cap.
    pub fn settle_frames(self, fps: Fps, tolerance: f64) -> u64 {
        let cap = fps.secs_to_frames_floor(SETTLE_CAP_SECS);
        if tolerance.is_nan() || tolerance <= 0.0 {
            return cap;
        }
        (0..cap)
            .find(|&f| residual_bound(fps.frames_to_secs(f as i64), self) <= tolerance)
            .unwrap_or(cap)
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

const SETTLE_CAP_SECS: f64 = 600.0;
const CRITICAL_EPS: f64 = 1e-6;

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum SpringConfigDef {
    Preset(String),
    Params {
        damping: f64,
        stiffness: f64,
        #[serde(default = "default_mass")]
        mass: f64,
    },
}

fn default_mass() -> f64 {
    1.0
}

impl TryFrom<SpringConfigDef> for SpringConfig {
    type Error = CadenceError;

    fn try_from(def: SpringConfigDef) -> CadenceResult<Self> {
        match def {
            SpringConfigDef::Preset(name) => Self::preset(&name).ok_or_else(|| {
                CadenceError::invalid_config(format!("unknown spring preset '{name}'"))
            }),
            SpringConfigDef::Params {
                damping,
                stiffness,
                mass,
            } => Self::new(damping, stiffness, mass),
        }
    }
}

/// Spring progress at `relative_frame` frames after the element starts.
///
/// Returns exactly 0 for `relative_frame <= 0` and converges to 1.
pub fn spring(relative_frame: i64, fps: Fps, config: SpringConfig) -> f64 {
    if relative_frame <= 0 {
        return 0.0;
    }
    step_response(fps.frames_to_secs(relative_frame), config)
}

/// [`spring`] remapped from `[0, 1]` to `[from, to]`. Overshoot carries through.
pub fn spring_between(
    relative_frame: i64,
    fps: Fps,
    config: SpringConfig,
    from: f64,
    to: f64,
) -> f64 {
    from + (to - from) * spring(relative_frame, fps, config)
}

// Unit step response with x(0) = 0, x'(0) = 0.
fn step_response(t: f64, cfg: SpringConfig) -> f64 {
    let w0 = cfg.natural_frequency();
    let zeta = cfg.damping_ratio();

    if (zeta - 1.0).abs() < CRITICAL_EPS {
        let e = (-w0 * t).exp();
        1.0 - e * (1.0 + w0 * t)
    } else if zeta < 1.0 {
        let root = (1.0 - zeta * zeta).sqrt();
        let wd = w0 * root;
        let e = (-zeta * w0 * t).exp();
        1.0 - e * ((wd * t).cos() + (zeta / root) * (wd * t).sin())
    } else {
        let z2 = (zeta * zeta - 1.0).sqrt();
        let r1 = -w0 * (zeta - z2);
        let r2 = -w0 * (zeta + z2);
        let c1 = (zeta + z2) / (2.0 * z2);
        let c2 = (zeta - z2) / (2.0 * z2);
        1.0 - (c1 * (r1 * t).exp() - c2 * (r2 * t).exp())
    }
}

// Upper bound on |1 - x(s)| for every s >= t.
fn residual_bound(t: f64, cfg: SpringConfig) -> f64 {
    let zeta = cfg.damping_ratio();
    if zeta < 1.0 - CRITICAL_EPS {
        let w0 = cfg.natural_frequency();
        (-zeta * w0 * t).exp() / (1.0 - zeta * zeta).sqrt()
    } else {
        // No overshoot: the residual itself is monotone decreasing.
        (1.0 - step_response(t, cfg)).abs()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
