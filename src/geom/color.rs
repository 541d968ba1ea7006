use serde::Serialize;

use crate::foundation::math::{clamp01, lerp};

/// Straight-alpha color: channels in `0..=255`, alpha in `0..=1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            r: r.clamp(0.0, 255.0),
            g: g.clamp(0.0, 255.0),
            b: b.clamp(0.0, 255.0),
            a: clamp01(a),
        }
    }

    /// Parse a paint string. `None`, `none`, `transparent` and unsupported syntax
    /// (gradients, `currentColor`, ...) resolve to no color.
    pub fn parse(input: &str) -> Option<Self> {
        let s = input.trim().to_ascii_lowercase();
        if s.is_empty() || s == "none" || s == "transparent" {
            return None;
        }
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex);
        }
        if let Some(body) = function_body(&s, &["rgba", "rgb"]) {
            return parse_rgb_body(body);
        }
        if let Some(body) = function_body(&s, &["hsla", "hsl"]) {
            return parse_hsl_body(body);
        }
        named(&s)
    }

    /// Channel-wise blend toward `other`.
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        Self::new(
            lerp(self.r, other.r, t),
            lerp(self.g, other.g, t),
            lerp(self.b, other.b, t),
            lerp(self.a, other.a, t),
        )
    }

    /// CSS `rgba(...)` text with rounded channels.
    pub fn to_css(&self) -> String {
        let a = (clamp01(self.a) * 1e4).round() / 1e4;
        format!(
            "rgba({}, {}, {}, {})",
            self.r.round() as u8,
            self.g.round() as u8,
            self.b.round() as u8,
            a
        )
    }
}

pub fn parse_color(input: Option<&str>) -> Option<Rgba> {
    input.and_then(Rgba::parse)
}

/// Euclidean RGBA distance normalized to `[0, 1]`; alpha is scaled to the channel range.
///
/// Two absent colors are identical; one absent color is maximally distant.
pub fn color_distance(a: Option<&Rgba>, b: Option<&Rgba>) -> f64 {
    match (a, b) {
        (None, None) => 0.0,
        (Some(_), None) | (None, Some(_)) => 1.0,
        (Some(a), Some(b)) => {
            let dr = a.r - b.r;
            let dg = a.g - b.g;
            let db = a.b - b.b;
            let da = (a.a - b.a) * 255.0;
            let dist = (dr * dr + dg * dg + db * db + da * da).sqrt();
            let max = (4.0f64 * 255.0 * 255.0).sqrt();
            clamp01(dist / max)
        }
    }
}

fn function_body<'a>(s: &'a str, names: &[&str]) -> Option<&'a str> {
    for name in names {
        if let Some(rest) = s.strip_prefix(name) {
            let rest = rest.trim_start();
            if let Some(inner) = rest.strip_prefix('(').and_then(|r| r.strip_suffix(')')) {
                return Some(inner.trim());
            }
        }
    }
    None
}

fn split_args(body: &str) -> Vec<&str> {
    body.split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|p| !p.is_empty())
        .collect()
}

fn parse_alpha(raw: Option<&&str>) -> Option<f64> {
    match raw {
        None => Some(1.0),
        Some(p) => {
            let v = match p.strip_suffix('%') {
                Some(pct) => pct.parse::<f64>().ok()? / 100.0,
                None => p.parse::<f64>().ok()?,
            };
            v.is_finite().then(|| clamp01(v))
        }
    }
}

fn parse_hex(hex: &str) -> Option<Rgba> {
    fn nibble(c: u8) -> Option<f64> {
        (c as char).to_digit(16).map(|d| f64::from(d * 17))
    }
    fn byte(pair: &str) -> Option<f64> {
        u8::from_str_radix(pair, 16).ok().map(f64::from)
    }

    if !hex.is_ascii() {
        return None;
    }
    let bytes = hex.as_bytes();
    match hex.len() {
        3 | 4 => {
            let r = nibble(bytes[0])?;
            let g = nibble(bytes[1])?;
            let b = nibble(bytes[2])?;
            let a = if hex.len() == 4 {
                nibble(bytes[3])? / 255.0
            } else {
                1.0
            };
            Some(Rgba::new(r, g, b, a))
        }
        6 | 8 => {
            let r = byte(&hex[0..2])?;
            let g = byte(&hex[2..4])?;
            let b = byte(&hex[4..6])?;
            let a = if hex.len() == 8 {
                byte(&hex[6..8])? / 255.0
            } else {
                1.0
            };
            Some(Rgba::new(r, g, b, a))
        }
        _ => None,
    }
}

fn parse_rgb_body(body: &str) -> Option<Rgba> {
    let parts = split_args(body);
    if parts.len() < 3 {
        return None;
    }
    let mut rgb = [0.0; 3];
    for (slot, raw) in rgb.iter_mut().zip(&parts) {
        let v = match raw.strip_suffix('%') {
            Some(pct) => pct.parse::<f64>().ok()? * 2.55,
            None => raw.parse::<f64>().ok()?,
        };
        if !v.is_finite() {
            return None;
        }
        *slot = v;
    }
    let a = parse_alpha(parts.get(3))?;
    Some(Rgba::new(rgb[0], rgb[1], rgb[2], a))
}

fn parse_hsl_body(body: &str) -> Option<Rgba> {
    let parts = split_args(body);
    if parts.len() < 3 {
        return None;
    }
    let h = parts[0].trim_end_matches("deg").parse::<f64>().ok()?;
    let s = parts[1].trim_end_matches('%').parse::<f64>().ok()? / 100.0;
    let l = parts[2].trim_end_matches('%').parse::<f64>().ok()? / 100.0;
    if ![h, s, l].iter().all(|v| v.is_finite()) {
        return None;
    }
    let a = parse_alpha(parts.get(3))?;
    Some(hsla_to_rgba(h, s, l, a))
}

fn hsla_to_rgba(h: f64, s: f64, l: f64, a: f64) -> Rgba {
    let h = (h % 360.0 + 360.0) % 360.0 / 360.0;
    let s = clamp01(s);
    let l = clamp01(l);

    if s == 0.0 {
        return Rgba::new(l * 255.0, l * 255.0, l * 255.0, a);
    }

    fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }
        if t < 1.0 / 6.0 {
            return p + (q - p) * 6.0 * t;
        }
        if t < 1.0 / 2.0 {
            return q;
        }
        if t < 2.0 / 3.0 {
            return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
        }
        p
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

    Rgba::new(
        hue_to_rgb(p, q, h + 1.0 / 3.0) * 255.0,
        hue_to_rgb(p, q, h) * 255.0,
        hue_to_rgb(p, q, h - 1.0 / 3.0) * 255.0,
        a,
    )
}

fn named(s: &str) -> Option<Rgba> {
    let (r, g, b) = match s {
        "black" => (0, 0, 0),
        "white" => (255, 255, 255),
        "red" => (255, 0, 0),
        "lime" => (0, 255, 0),
        "green" => (0, 128, 0),
        "blue" => (0, 0, 255),
        "yellow" => (255, 255, 0),
        "cyan" | "aqua" => (0, 255, 255),
        "magenta" | "fuchsia" => (255, 0, 255),
        "gray" | "grey" => (128, 128, 128),
        "silver" => (192, 192, 192),
        "orange" => (255, 165, 0),
        "purple" => (128, 0, 128),
        "navy" => (0, 0, 128),
        "teal" => (0, 128, 128),
        "maroon" => (128, 0, 0),
        "olive" => (128, 128, 0),
        _ => return None,
    };
    Some(Rgba::new(f64::from(r), f64::from(g), f64::from(b), 1.0))
}

#[cfg(test)]
#[path = "../../tests/unit/geom/color.rs"]
mod tests;
