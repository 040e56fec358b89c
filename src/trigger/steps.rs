//! Step-function parameter tables
//!
//! Most trigger parameters are a banded lookup over one measured quantity.
//! Each table is an ordered list of `(bound, value, description)` steps
//! evaluated top-down; the first step whose bound admits the input wins, and
//! `otherwise` covers everything past the last band.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Band condition on the measured quantity
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    /// `x < limit`
    Below(f32),
    /// `x <= limit`
    AtMost(f32),
    /// `x > limit`
    Above(f32),
    /// Every input
    Any,
}

impl Bound {
    /// Whether `x` falls inside this band
    pub fn admits(&self, x: f32) -> bool {
        match *self {
            Bound::Below(limit) => x < limit,
            Bound::AtMost(limit) => x <= limit,
            Bound::Above(limit) => x > limit,
            Bound::Any => true,
        }
    }
}

/// One band of a table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step<T: 'static> {
    pub bound: Bound,
    pub value: T,
    pub description: &'static str,
}

/// Ordered band table with an explicit fallback
#[derive(Debug, Clone, Copy)]
pub struct StepTable<T: 'static> {
    pub steps: &'static [Step<T>],
    pub otherwise: Step<T>,
}

impl<T> StepTable<T> {
    /// First step admitting `x`, or the fallback
    pub fn select(&self, x: f32) -> &Step<T> {
        self.steps
            .iter()
            .find(|step| step.bound.admits(x))
            .unwrap_or(&self.otherwise)
    }
}

const fn step<T>(bound: Bound, value: T, description: &'static str) -> Step<T> {
    Step {
        bound,
        value,
        description,
    }
}

/// Velocity response curve of the trigger input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Curve {
    Linear,
    Log1,
    Log2,
    Log3,
}

impl Curve {
    pub const ALL: [Curve; 4] = [Curve::Linear, Curve::Log1, Curve::Log2, Curve::Log3];

    /// Name as shown on the module
    pub fn name(&self) -> &'static str {
        match self {
            Curve::Linear => "Linear",
            Curve::Log1 => "Log1",
            Curve::Log2 => "Log2",
            Curve::Log3 => "Log3",
        }
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Gain 0-8 over peak amplitude: weaker signal, more gain
pub const GAIN: StepTable<u32> = StepTable {
    steps: &[
        step(Bound::Below(0.1), 8, "Maximum gain for weak signals"),
        step(Bound::Below(0.25), 6, "High gain for moderate signals"),
        step(Bound::Below(0.5), 4, "Medium gain for good signals"),
        step(Bound::Below(0.75), 2, "Low gain for strong signals"),
    ],
    otherwise: step(Bound::Any, 0, "No gain for very strong signals"),
};

/// MinScan over attack time in milliseconds
pub const MIN_SCAN: StepTable<u32> = StepTable {
    steps: &[
        step(Bound::Below(1.0), 10, "1ms - Fast attack (cymbals)"),
        step(Bound::Below(3.0), 20, "2ms - Medium attack (snare, toms)"),
        step(Bound::Below(6.0), 30, "3ms - Slower attack"),
    ],
    otherwise: step(Bound::Any, 50, "5ms - Slow attack (kick, mesh)"),
};

/// Retrigger in milliseconds over the number of detected peaks
pub const RETRIGGER: StepTable<u32> = StepTable {
    steps: &[
        step(Bound::AtMost(1.0), 4, "4ms - Fast response"),
        step(Bound::AtMost(3.0), 8, "8ms - Standard retrigger"),
        step(Bound::AtMost(5.0), 12, "12ms - Slower retrigger"),
    ],
    otherwise: step(Bound::Any, 20, "20ms - Prevent false triggers"),
};

/// DynLevel 0-15 over signal-to-noise: noisier, more suppression
pub const DYN_LEVEL: StepTable<u32> = StepTable {
    steps: &[
        step(Bound::Above(15.0), 5, "Low suppression for clean signals"),
        step(Bound::Above(10.0), 8, "Medium suppression"),
        step(Bound::Above(5.0), 12, "High suppression"),
    ],
    otherwise: step(Bound::Any, 15, "Maximum suppression for noisy signals"),
};

/// DynTime in milliseconds over decay time in milliseconds
pub const DYN_TIME: StepTable<u32> = StepTable {
    steps: &[
        step(Bound::Below(10.0), 8, "8ms - Fast decay (rubber pads)"),
        step(Bound::Below(20.0), 15, "15ms - Medium decay"),
        step(Bound::Below(40.0), 25, "25ms - Slow decay"),
    ],
    otherwise: step(Bound::Any, 40, "40ms - Very slow decay (mesh pads)"),
};

/// Xtalk 0-7 over signal-to-noise
pub const XTALK: StepTable<u32> = StepTable {
    steps: &[
        step(Bound::Above(15.0), 0, "No crosstalk suppression"),
        step(Bound::Above(10.0), 2, "Low crosstalk suppression"),
        step(Bound::Above(5.0), 4, "Medium crosstalk suppression"),
    ],
    otherwise: step(Bound::Any, 6, "High crosstalk suppression"),
};

/// Curve over dynamic range: wider range, more logarithmic
pub const CURVE: StepTable<Curve> = StepTable {
    steps: &[
        step(Bound::Below(0.3), Curve::Linear, "Velocity response curve"),
        step(Bound::Below(0.5), Curve::Log1, "Velocity response curve"),
        step(Bound::Below(0.7), Curve::Log2, "Velocity response curve"),
    ],
    otherwise: step(Bound::Any, Curve::Log3, "Velocity response curve"),
};

/// ComprLvl 0-7 over peak amplitude
pub const COMPR_LVL: StepTable<u32> = StepTable {
    steps: &[
        step(Bound::Below(0.4), 0, "No compression"),
        step(Bound::Below(0.6), 2, "Light compression"),
        step(Bound::Below(0.8), 4, "Medium compression"),
    ],
    otherwise: step(Bound::Any, 6, "Heavy compression"),
};
