use nalgebra::Vector3;

const EPS: f32 = 1e-6;

/// Per-edge geometry cached for pairwise scoring.
#[derive(Clone, Copy, Debug)]
pub struct EdgeGeom {
    pub source: Vector3<f32>,
    pub target: Vector3<f32>,
    pub vector: Vector3<f32>,
    pub length: f32,
    pub midpoint: Vector3<f32>,
}

impl EdgeGeom {
    pub fn new(source: Vector3<f32>, target: Vector3<f32>) -> Self {
        let vector = target - source;
        Self {
            source,
            target,
            vector,
            length: vector.norm(),
            midpoint: 0.5 * (source + target),
        }
    }
}

/// Direction similarity: |cos| of the angle between the two edges, in [0, 1].
pub fn angle_compatibility(p: &EdgeGeom, q: &EdgeGeom) -> f32 {
    (p.vector.dot(&q.vector).abs() / (p.length * q.length)).min(1.0)
}

/// Length similarity: 1 for equal lengths, decaying as the ratio diverges.
pub fn scale_compatibility(p: &EdgeGeom, q: &EdgeGeom) -> f32 {
    let l_avg = 0.5 * (p.length + q.length);
    let l_min = p.length.min(q.length);
    let l_max = p.length.max(q.length);
    2.0 / (l_avg / l_min + l_max / l_avg)
}

/// Midpoint proximity relative to the average edge length.
pub fn position_compatibility(p: &EdgeGeom, q: &EdgeGeom) -> f32 {
    let l_avg = 0.5 * (p.length + q.length);
    l_avg / (l_avg + (p.midpoint - q.midpoint).norm())
}

/// Mutual visibility: how centrally each edge's projection sits on the other.
pub fn visibility_compatibility(p: &EdgeGeom, q: &EdgeGeom) -> f32 {
    visibility(p, q).min(visibility(q, p))
}

fn visibility(p: &EdgeGeom, q: &EdgeGeom) -> f32 {
    let i0 = project_onto_line(&q.source, p);
    let i1 = project_onto_line(&q.target, p);
    let span = (i0 - i1).norm();
    if span <= EPS {
        return 0.0;
    }
    let i_mid = 0.5 * (i0 + i1);
    (1.0 - 2.0 * (p.midpoint - i_mid).norm() / span).max(0.0)
}

fn project_onto_line(point: &Vector3<f32>, edge: &EdgeGeom) -> Vector3<f32> {
    let t = (point - edge.source).dot(&edge.vector) / (edge.length * edge.length);
    edge.source + t * edge.vector
}

/// Combined score: product of the four measures, in [0, 1]. Degenerate edges
/// carry no direction and score 0 against everything.
pub fn compatibility_score(p: &EdgeGeom, q: &EdgeGeom) -> f32 {
    if p.length <= EPS || q.length <= EPS {
        return 0.0;
    }
    angle_compatibility(p, q)
        * scale_compatibility(p, q)
        * position_compatibility(p, q)
        * visibility_compatibility(p, q)
}
