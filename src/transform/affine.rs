//! Per-track affine transform state.

use crate::foundation::core::{Affine, Point, Rect, Vec2};

#[inline]
/// Compose `next` onto `current`, so `next` applies after everything already in `current`.
pub fn compose(current: Affine, next: Affine) -> Affine {
    next * current
}

#[inline]
/// Identity transform.
pub fn identity() -> Affine {
    Affine::IDENTITY
}

/// Rotation by `degrees` about the origin.
///
/// Quarter turns use exact sine/cosine so that axis-aligned bounds stay integral.
pub fn rotation(degrees: f64) -> Affine {
    let turn = degrees.rem_euclid(360.0);
    let (sin, cos) = if turn == 0.0 {
        (0.0, 1.0)
    } else if turn == 90.0 {
        (1.0, 0.0)
    } else if turn == 180.0 {
        (0.0, -1.0)
    } else if turn == 270.0 {
        (-1.0, 0.0)
    } else {
        degrees.to_radians().sin_cos()
    };
    Affine::new([cos, sin, -sin, cos, 0.0, 0.0])
}

/// Axis-aligned bounding box of `rect`'s four corners mapped through `m`.
///
/// The result is always normalized (`x0 <= x1`, `y0 <= y1`). Orientation is tracked by
/// [`TrackTransform`], since a half turn and a reflection share the same matrix.
pub fn map_bounds(m: Affine, rect: Rect) -> Rect {
    let corners = [
        m * Point::new(rect.x0, rect.y0),
        m * Point::new(rect.x1, rect.y0),
        m * Point::new(rect.x1, rect.y1),
        m * Point::new(rect.x0, rect.y1),
    ];
    let mut out = Rect::new(corners[0].x, corners[0].y, corners[0].x, corners[0].y);
    for p in &corners[1..] {
        out.x0 = out.x0.min(p.x);
        out.y0 = out.y0.min(p.y);
        out.x1 = out.x1.max(p.x);
        out.y1 = out.y1.max(p.y);
    }
    out
}

/// Transform state of one spatial track.
///
/// `baseline` is the track's bounds when the transform was first touched. Live bounds
/// are always `baseline` mapped through `matrix`, never accumulated incrementally.
///
/// `flip_x`/`flip_y` record an odd number of negative scale factors per axis. Only
/// reflections invert the written bounds; rotations never do.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TrackTransform {
    matrix: Affine,
    baseline: Rect,
    flip_x: bool,
    flip_y: bool,
}

impl TrackTransform {
    /// Start at identity over `baseline`.
    pub fn new(baseline: Rect) -> Self {
        Self {
            matrix: identity(),
            baseline,
            flip_x: false,
            flip_y: false,
        }
    }

    /// Current composed matrix.
    pub fn matrix(&self) -> Affine {
        self.matrix
    }

    /// Bounds captured before any transform was applied.
    pub fn baseline(&self) -> Rect {
        self.baseline
    }

    /// Baseline mapped through the current matrix, inverted on reflected axes.
    pub fn bounds(&self) -> Rect {
        let mut out = map_bounds(self.matrix, self.baseline);
        if self.flip_x != (self.baseline.x1 < self.baseline.x0) {
            std::mem::swap(&mut out.x0, &mut out.x1);
        }
        if self.flip_y != (self.baseline.y1 < self.baseline.y0) {
            std::mem::swap(&mut out.y0, &mut out.y1);
        }
        out
    }

    /// Scale about the top-left corner of the current bounds. Returns the new bounds.
    pub fn scale(&mut self, sx: f64, sy: f64) -> Rect {
        let current = self.bounds();
        let origin = Vec2::new(current.x0, current.y0);
        let step = Affine::translate(origin)
            * Affine::scale_non_uniform(sx, sy)
            * Affine::translate(-origin);
        self.flip_x ^= sx < 0.0;
        self.flip_y ^= sy < 0.0;
        self.apply(step)
    }

    /// Translate by `(dx, dy)`. Returns the new bounds.
    pub fn translate(&mut self, dx: f64, dy: f64) -> Rect {
        self.apply(Affine::translate(Vec2::new(dx, dy)))
    }

    /// Rotate about the center of the current bounds. Returns the new bounds.
    pub fn rotate(&mut self, degrees: f64) -> Rect {
        let pivot = self.bounds().center().to_vec2();
        let step = Affine::translate(pivot) * rotation(degrees) * Affine::translate(-pivot);
        self.apply(step)
    }

    /// Return to identity. Returns the baseline bounds.
    pub fn reset(&mut self) -> Rect {
        self.matrix = identity();
        self.flip_x = false;
        self.flip_y = false;
        self.baseline
    }

    fn apply(&mut self, step: Affine) -> Rect {
        self.matrix = compose(self.matrix, step);
        tracing::debug!(matrix = ?self.matrix.as_coeffs(), "composed track transform");
        self.bounds()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/affine.rs"]
mod tests;
