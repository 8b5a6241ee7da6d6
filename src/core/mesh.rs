// Torus wireframe geometry.
//
// The base mesh is shared by every instance; only the per-instance transform
// differs. It is generated once at GPU init and never rebuilt.

/// Line-list wireframe: `indices` holds pairs of vertex indices.
#[derive(Clone, Debug)]
pub struct Wireframe {
    pub vertices: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

impl Wireframe {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn line_count(&self) -> usize {
        self.indices.len() / 2
    }
}

/// Build a torus with its ring lying in the XZ plane (Y is the ring normal).
///
/// `radial_segments` subdivides the tube cross-section, `tubular_segments`
/// the ring itself. Each grid vertex connects to its tubular and radial
/// neighbors, wrapping around in both directions.
pub fn torus_wireframe(
    major_radius: f32,
    tube_radius: f32,
    radial_segments: usize,
    tubular_segments: usize,
) -> Wireframe {
    let mut vertices = Vec::with_capacity(radial_segments * tubular_segments);
    for j in 0..radial_segments {
        let v = j as f32 / radial_segments as f32 * std::f32::consts::TAU;
        let (sin_v, cos_v) = v.sin_cos();
        let ring = major_radius + tube_radius * cos_v;
        let y = tube_radius * sin_v;
        for i in 0..tubular_segments {
            let u = i as f32 / tubular_segments as f32 * std::f32::consts::TAU;
            let (sin_u, cos_u) = u.sin_cos();
            vertices.push([ring * cos_u, y, ring * sin_u]);
        }
    }

    let at = |j: usize, i: usize| (j * tubular_segments + i) as u32;
    let mut indices = Vec::with_capacity(radial_segments * tubular_segments * 4);
    for j in 0..radial_segments {
        for i in 0..tubular_segments {
            // Along the ring.
            indices.push(at(j, i));
            indices.push(at(j, (i + 1) % tubular_segments));
            // Around the tube.
            indices.push(at(j, i));
            indices.push(at((j + 1) % radial_segments, i));
        }
    }

    Wireframe { vertices, indices }
}
