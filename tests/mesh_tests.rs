// Host-side tests for the torus wireframe geometry.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod mesh {
    include!("../src/core/mesh.rs");
}

use mesh::*;

const MAJOR: f32 = 5.0;
const TUBE: f32 = 0.1;
const RADIAL: usize = 8;
const TUBULAR: usize = 90;

#[test]
fn grid_has_one_vertex_per_segment_pair() {
    let wf = torus_wireframe(MAJOR, TUBE, RADIAL, TUBULAR);
    assert_eq!(wf.vertex_count(), RADIAL * TUBULAR);
}

#[test]
fn every_grid_cell_contributes_two_lines() {
    let wf = torus_wireframe(MAJOR, TUBE, RADIAL, TUBULAR);
    assert_eq!(wf.indices.len(), RADIAL * TUBULAR * 4);
    assert_eq!(wf.line_count(), RADIAL * TUBULAR * 2);
}

#[test]
fn all_indices_reference_real_vertices() {
    let wf = torus_wireframe(MAJOR, TUBE, RADIAL, TUBULAR);
    let n = wf.vertex_count() as u32;
    assert!(wf.indices.iter().all(|&i| i < n));
}

#[test]
fn no_line_is_degenerate() {
    let wf = torus_wireframe(MAJOR, TUBE, RADIAL, TUBULAR);
    for pair in wf.indices.chunks(2) {
        assert_ne!(pair[0], pair[1]);
    }
}

#[test]
fn vertices_lie_on_the_torus_surface() {
    let wf = torus_wireframe(MAJOR, TUBE, RADIAL, TUBULAR);
    for [x, y, z] in &wf.vertices {
        // Ring in the XZ plane: the radial distance stays within one tube
        // radius of the major radius, and height within the tube radius.
        let radial = (x * x + z * z).sqrt();
        assert!(
            (radial - MAJOR).abs() <= TUBE + 1e-4,
            "radial distance {radial} escapes the tube"
        );
        assert!(y.abs() <= TUBE + 1e-4, "height {y} escapes the tube");

        // Exactly on the surface: distance from the tube's center circle.
        let d_ring = radial - MAJOR;
        let dist = (d_ring * d_ring + y * y).sqrt();
        assert!((dist - TUBE).abs() < 1e-4);
    }
}

#[test]
fn ring_normal_is_the_y_axis() {
    // With a single radial segment the cross-section collapses to the
    // outermost circle, which must be flat in Y.
    let wf = torus_wireframe(MAJOR, TUBE, 1, TUBULAR);
    for [_, y, _] in &wf.vertices {
        assert!(y.abs() < 1e-6);
    }
}
