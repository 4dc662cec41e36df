use crate::sampling::TimeGrid;

/// A named pure function of time. The gallery's catalog is fixed at the
/// five entries returned by [`catalog`], in display order.
#[derive(Clone, Copy)]
pub struct Signal {
    pub name: &'static str,
    f: fn(f64) -> f64,
}

impl Signal {
    pub fn eval(&self, t: f64) -> f64 {
        (self.f)(t)
    }

    /// Evaluate the signal pointwise over the whole grid.
    pub fn sample(&self, grid: &TimeGrid) -> Vec<f64> {
        grid.iter().map(self.f).collect()
    }
}

/// 1 on the open interval (-0.5, 0.5), 0 everywhere else. The boundaries
/// themselves map to 0.
pub fn top_hat(t: f64) -> f64 {
    if t > -0.5 && t < 0.5 {
        1.0
    } else {
        0.0
    }
}

pub fn gaussian(t: f64) -> f64 {
    (-t * t).exp()
}

/// sin(t)/t, with the removable singularity at t = 0 taking its analytic
/// limit 1 rather than the NaN a literal division would produce.
pub fn sinc(t: f64) -> f64 {
    if t == 0.0 {
        1.0
    } else {
        t.sin() / t
    }
}

/// exp(-t)·cos(t) for t > 0, zero otherwise. The inequality is strict, so
/// t = 0 maps to 0.
pub fn damped_cosine(t: f64) -> f64 {
    if t > 0.0 {
        (-t).exp() * t.cos()
    } else {
        0.0
    }
}

pub fn cosine(t: f64) -> f64 {
    t.cos()
}

/// The fixed ordered signal catalog.
pub fn catalog() -> [Signal; 5] {
    [
        Signal {
            name: "top_hat",
            f: top_hat,
        },
        Signal {
            name: "gaussian",
            f: gaussian,
        },
        Signal {
            name: "sinc",
            f: sinc,
        },
        Signal {
            name: "damped_cosine",
            f: damped_cosine,
        },
        Signal {
            name: "cosine",
            f: cosine,
        },
    ]
}
