//! Particle color lookup.
//!
//! Every visual type maps to one row of [`PALETTE`]; the per-tick color is the
//! row's base color scaled by `gain + sin(t * freq + id) * pulse`. Heart mode,
//! the construction edge and burst colors live here too so the morph engine
//! only decides *which* color rule applies.

use crate::constants::*;
use glam::Vec3;

pub const GOLD_HEX: u32 = 0xffd700;
pub const BURST_COLORS_HEX: [u32; 3] = [0xff0033, 0x00ff44, GOLD_HEX];

/// Shading variant for foliage, picked from the particle id so neighbours vary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FoliageShade {
    Emerald,
    Forest,
    Deep,
}

impl FoliageShade {
    pub fn for_id(id: usize) -> Self {
        let g = (id % 10) as f32 / 10.0;
        if g > 0.7 {
            FoliageShade::Emerald
        } else if g > 0.3 {
            FoliageShade::Forest
        } else {
            FoliageShade::Deep
        }
    }
}

/// Visual classification assigned once at generation time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VisualType {
    Foliage(FoliageShade),
    Berry,
    OrnamentGold,
    OrnamentWhite,
}

impl VisualType {
    /// Map a uniform draw in [0, 1) to a type. Foliage shading comes from `id`.
    pub fn from_draw(r: f32, id: usize) -> Self {
        if r > WHITE_CUTOFF {
            VisualType::OrnamentWhite
        } else if r > GOLD_CUTOFF {
            VisualType::OrnamentGold
        } else if r > BERRY_CUTOFF {
            VisualType::Berry
        } else {
            VisualType::Foliage(FoliageShade::for_id(id))
        }
    }

    #[inline]
    fn palette_index(self) -> usize {
        match self {
            VisualType::Foliage(FoliageShade::Emerald) => 0,
            VisualType::Foliage(FoliageShade::Forest) => 1,
            VisualType::Foliage(FoliageShade::Deep) => 2,
            VisualType::Berry => 3,
            VisualType::OrnamentGold => 4,
            VisualType::OrnamentWhite => 5,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct PaletteEntry {
    hex: u32,
    gain: f32,
    pulse: f32,
    freq: f32,
}

const PALETTE: [PaletteEntry; 6] = [
    PaletteEntry { hex: 0x50c878, gain: 0.8, pulse: 0.0, freq: 0.0 },
    PaletteEntry { hex: 0x228b22, gain: 0.8, pulse: 0.0, freq: 0.0 },
    PaletteEntry { hex: 0x006400, gain: 0.8, pulse: 0.0, freq: 0.0 },
    PaletteEntry { hex: 0xdc143c, gain: 2.0, pulse: 0.2, freq: 4.0 },
    PaletteEntry { hex: GOLD_HEX, gain: 1.5, pulse: 0.5, freq: 3.0 },
    PaletteEntry { hex: 0xffffff, gain: 2.0, pulse: 1.0, freq: 5.0 },
];

#[inline]
pub fn rgb_from_hex(hex: u32) -> Vec3 {
    Vec3::new(
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    )
}

/// HSL to RGB with hue wrapped into [0, 1) and s/l clamped.
pub fn rgb_from_hsl(h: f32, s: f32, l: f32) -> Vec3 {
    let h = h.rem_euclid(1.0);
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);
    if s == 0.0 {
        return Vec3::splat(l);
    }
    let q = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    Vec3::new(
        hue_to_channel(p, q, h + 1.0 / 3.0),
        hue_to_channel(p, q, h),
        hue_to_channel(p, q, h - 1.0 / 3.0),
    )
}

fn hue_to_channel(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * 6.0 * (2.0 / 3.0 - t)
    } else {
        p
    }
}

/// Base color of a type before any time pulse (used to seed the color buffer).
pub fn base_color(kind: VisualType) -> Vec3 {
    let e = PALETTE[kind.palette_index()];
    rgb_from_hex(e.hex) * e.gain
}

/// Tree-mode color for a particle at time `t`.
pub fn pulse_color(kind: VisualType, t: f32, id: usize) -> Vec3 {
    let e = PALETTE[kind.palette_index()];
    let intensity = e.gain + (t * e.freq + id as f32).sin() * e.pulse;
    rgb_from_hex(e.hex) * intensity
}

/// Heart-mode color: a pink/ruby hue mapped from height with a lightness pulse.
pub fn heart_color(y: f32, t: f32, id: usize) -> Vec3 {
    let height = (y + HEART_HEIGHT_OFFSET) / (2.0 * HEART_HEIGHT_OFFSET);
    let hue = HEART_HUE_BASE + height * HEART_HUE_SPAN;
    let lightness =
        HEART_LIGHTNESS + (t * HEART_LIGHTNESS_FREQ + id as f32).sin() * HEART_LIGHTNESS_PULSE;
    rgb_from_hsl(hue, 1.0, lightness) * HEART_GLOW
}

/// Gold highlight for particles just behind the formation front.
/// `intensity` is 1 at the front and 0 at the trailing edge.
#[inline]
pub fn construction_color(intensity: f32) -> Vec3 {
    rgb_from_hex(GOLD_HEX) * (CONSTRUCTION_EDGE_GAIN * intensity + 1.0)
}
