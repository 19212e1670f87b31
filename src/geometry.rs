/// Shared 2-D helpers for arrow anchoring and label placement.

/// Point where the ray from the ellipse's center through `point` crosses the
/// ellipse boundary. `width`/`height` are the full axis lengths. Degenerates
/// to the center when `point` coincides with it or when the normalized
/// direction collapses to zero.
pub fn ellipse_edge_point(
    point: (f32, f32),
    center: (f32, f32),
    width: f32,
    height: f32,
) -> (f32, f32) {
    let dx = point.0 - center.0;
    let dy = point.1 - center.1;
    if dx == 0.0 && dy == 0.0 {
        return center;
    }
    let a = (width / 2.0).abs();
    let b = (height / 2.0).abs();
    if a == 0.0 || b == 0.0 {
        return center;
    }
    // Parametric solution of (t*dx/a)^2 + (t*dy/b)^2 = 1 along the ray.
    let norm = (dx / a) * (dx / a) + (dy / b) * (dy / b);
    if norm <= 0.0 {
        return center;
    }
    let t = 1.0 / norm.sqrt();
    (center.0 + dx * t, center.1 + dy * t)
}

/// A horizontal sub-span of `fraction` of `width`, centered inside
/// `[x, x + width]`. Returns `(region_x, region_width)`.
pub fn centered_region(x: f32, width: f32, fraction: f32) -> (f32, f32) {
    let region_width = width * fraction;
    (x + (width - region_width) / 2.0, region_width)
}

pub fn midpoint(a: (f32, f32), b: (f32, f32)) -> (f32, f32) {
    ((a.0 + b.0) / 2.0, (a.1 + b.1) / 2.0)
}
