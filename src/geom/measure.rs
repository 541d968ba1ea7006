use kurbo::{BezPath, ParamCurve, ParamCurveArclen, PathSeg, Point};

const ARCLEN_ACCURACY: f64 = 1e-3;

/// Cumulative arc-length table over a path's segments for uniform-by-length sampling.
#[derive(Clone, Debug)]
pub struct ArcTable {
    segs: Vec<PathSeg>,
    /// `cumulative[i]` is the length of segments `0..i`; one entry longer than `segs`.
    cumulative: Vec<f64>,
    start: Point,
}

impl ArcTable {
    pub fn new(path: &BezPath) -> Self {
        let segs: Vec<PathSeg> = path.segments().collect();
        let mut cumulative = Vec::with_capacity(segs.len() + 1);
        let mut acc = 0.0;
        cumulative.push(acc);
        for seg in &segs {
            let len = seg.arclen(ARCLEN_ACCURACY);
            acc += if len.is_finite() { len } else { 0.0 };
            cumulative.push(acc);
        }
        let start = match path.elements().first() {
            Some(kurbo::PathEl::MoveTo(p)) => *p,
            _ => Point::ORIGIN,
        };
        Self {
            segs,
            cumulative,
            start,
        }
    }

    pub fn from_outline(d: &str) -> Option<Self> {
        BezPath::from_svg(d.trim()).ok().map(|p| Self::new(&p))
    }

    pub fn total_length(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    pub fn point_at_length(&self, len: f64) -> Point {
        if self.segs.is_empty() {
            return self.start;
        }
        let total = self.total_length();
        if total <= 0.0 {
            return self.segs[0].eval(0.0);
        }
        let len = len.clamp(0.0, total);
        // Segment whose [cumulative[i], cumulative[i+1]] bracket contains `len`.
        let idx = self
            .cumulative
            .partition_point(|&c| c <= len)
            .saturating_sub(1)
            .min(self.segs.len() - 1);
        let seg = &self.segs[idx];
        let seg_len = self.cumulative[idx + 1] - self.cumulative[idx];
        if seg_len <= 0.0 {
            return seg.eval(0.0);
        }
        let local = (len - self.cumulative[idx]).min(seg_len);
        let t = seg.inv_arclen(local, ARCLEN_ACCURACY).clamp(0.0, 1.0);
        seg.eval(t)
    }

    pub fn point_at_fraction(&self, f: f64) -> Point {
        self.point_at_length(self.total_length() * f)
    }

    /// `n` points spaced evenly by arc length. Closed rings omit the duplicate end point.
    pub fn sample_uniform(&self, n: usize, closed: bool) -> Vec<Point> {
        let n = n.max(1);
        let denom = if closed || n == 1 { n } else { n - 1 } as f64;
        (0..n)
            .map(|i| self.point_at_fraction(i as f64 / denom))
            .collect()
    }
}
