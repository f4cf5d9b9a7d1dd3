use std::f64::consts::{PI, TAU};

use serde::Deserialize;

use crate::error::{MeshError, Result};
use crate::math::surface::{SurfaceFunction, SurfaceSampleParams};

pub struct SurfaceExample {
    pub name: &'static str,
    pub description: &'static str,
    pub preset: SurfacePreset,
    pub m: u32,
    pub n: u32,
    pub u_range: (f64, f64),
    pub v_range: (f64, f64),
    pub coefficients: (f64, f64, f64),
    pub scale: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfacePreset {
    WaveTorus,
    TurnedEightTorus,
    Crescent,
    Custom,
    Plane,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FillStyle {
    #[default]
    Wireframe,
    Fill,
    FillWireframe,
}

impl FillStyle {
    pub fn needs_triangles(self) -> bool {
        !matches!(self, FillStyle::Wireframe)
    }
}

impl SurfacePreset {
    pub fn from_name(name: &str) -> Result<Self> {
        SURFACE_EXAMPLES
            .iter()
            .find(|example| example.name == name)
            .map(|example| example.preset)
            .ok_or_else(|| MeshError::UnknownPreset(name.to_string()))
    }

    pub fn example(self) -> &'static SurfaceExample {
        match self {
            SurfacePreset::WaveTorus => &SURFACE_EXAMPLES[0],
            SurfacePreset::TurnedEightTorus => &SURFACE_EXAMPLES[1],
            SurfacePreset::Crescent => &SURFACE_EXAMPLES[2],
            SurfacePreset::Custom => &SURFACE_EXAMPLES[3],
            SurfacePreset::Plane => &SURFACE_EXAMPLES[4],
        }
    }

    pub fn name(self) -> &'static str {
        self.example().name
    }

    pub fn function(self) -> SurfaceFunction {
        match self {
            SurfacePreset::WaveTorus => WAVE_TORUS,
            SurfacePreset::TurnedEightTorus => TURNED_EIGHT_TORUS,
            SurfacePreset::Crescent => CRESCENT,
            SurfacePreset::Custom => CUSTOM,
            SurfacePreset::Plane => PLANE,
        }
    }

    pub fn params(self, fill: bool) -> SurfaceSampleParams {
        let example = self.example();
        let (a, b, c) = example.coefficients;
        SurfaceSampleParams {
            m: example.m,
            n: example.n,
            u_min: example.u_range.0,
            u_max: example.u_range.1,
            v_min: example.v_range.0,
            v_max: example.v_range.1,
            a,
            b,
            c,
            scale: example.scale,
            fill,
            surface: self.function(),
        }
    }
}

// a = ring radius, b = tube radius, c = wave amplitude
pub const WAVE_TORUS: SurfaceFunction = SurfaceFunction {
    x: |a, b, c, u, v| (a + (b + c * (5.0 * u).sin()) * v.cos()) * u.cos(),
    y: |a, b, c, u, v| (a + (b + c * (5.0 * u).sin()) * v.cos()) * u.sin(),
    z: |_, b, c, u, v| -(b + c * (5.0 * u).sin()) * v.sin(),
};

// Figure-eight cross section turning once around the ring.
pub const TURNED_EIGHT_TORUS: SurfaceFunction = SurfaceFunction {
    x: |a, b, _, u, v| {
        (a + b * ((u / 2.0).cos() * v.sin() - (u / 2.0).sin() * (2.0 * v).sin())) * u.cos()
    },
    y: |a, b, _, u, v| {
        (a + b * ((u / 2.0).cos() * v.sin() - (u / 2.0).sin() * (2.0 * v).sin())) * u.sin()
    },
    z: |_, b, _, u, v| b * ((u / 2.0).sin() * v.sin() + (u / 2.0).cos() * (2.0 * v).sin()),
};

pub const CRESCENT: SurfaceFunction = SurfaceFunction {
    x: |a, b, c, u, v| (a + (b * PI * u).sin() * (b * PI * v).sin()) * (c * PI * v).sin(),
    y: |a, b, c, u, v| (a + (b * PI * u).sin() * (b * PI * v).sin()) * (c * PI * v).cos(),
    z: |_, b, _, u, v| (b * PI * u).cos() * (b * PI * v).sin() + 4.0 * v - 2.0,
};

// Wave torus with a doubled, inverted y sweep.
pub const CUSTOM: SurfaceFunction = SurfaceFunction {
    x: |a, b, c, u, v| (a + (b + c * (5.0 * u).sin()) * v.cos()) * u.cos(),
    y: |a, b, c, u, v| (a + (-b + c * (5.0 * u).sin()) * v.cos()) * (2.0 * u).sin(),
    z: |_, b, c, u, v| (b + c * (5.0 * u).sin()) * v.sin(),
};

pub const PLANE: SurfaceFunction = SurfaceFunction {
    x: |_, _, _, u, _| u,
    y: |_, _, _, _, v| v,
    z: |_, _, _, _, _| 0.0,
};

pub const SURFACE_EXAMPLES: &[SurfaceExample] = &[
    SurfaceExample {
        name: "wave-torus",
        description: "Torus whose tube radius ripples five times around the ring",
        preset: SurfacePreset::WaveTorus,
        m: 35,
        n: 100,
        u_range: (0.0, TAU),
        v_range: (0.0, TAU),
        coefficients: (25.0, 4.0, 3.0),
        scale: 0.03,
    },
    SurfaceExample {
        name: "turned-eight-torus",
        description: "Figure-eight tube twisting half a turn per revolution",
        preset: SurfacePreset::TurnedEightTorus,
        m: 80,
        n: 50,
        u_range: (0.0, TAU),
        v_range: (0.0, TAU),
        coefficients: (2.0, 1.5, 1.5),
        scale: 0.25,
    },
    SurfaceExample {
        name: "crescent",
        description: "Crescent sweeping upward along v",
        preset: SurfacePreset::Crescent,
        m: 80,
        n: 60,
        u_range: (0.0, 1.0),
        v_range: (0.0, 1.0),
        coefficients: (2.0, 3.0, 2.0),
        scale: 0.3,
    },
    SurfaceExample {
        name: "custom",
        description: "Wave torus folded into a double loop",
        preset: SurfacePreset::Custom,
        m: 20,
        n: 80,
        u_range: (0.0, TAU),
        v_range: (0.0, TAU),
        coefficients: (25.0, 4.0, 3.0),
        scale: 0.03,
    },
    SurfaceExample {
        name: "plane",
        description: "Flat unit square, x = u, y = v",
        preset: SurfacePreset::Plane,
        m: 10,
        n: 10,
        u_range: (0.0, 1.0),
        v_range: (0.0, 1.0),
        coefficients: (0.0, 0.0, 0.0),
        scale: 1.0,
    },
];
