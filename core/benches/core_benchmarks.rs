use criterion::{Criterion, black_box, criterion_group, criterion_main};

use scanforge_core::export::{ExportFormat, build_scan_asset, encode_asset};
use scanforge_core::math::{Vec3, mat4_from_translation};
use scanforge_core::mesh::{
    MeshFragment, VertexAttribute, VertexAttributeFormat, VertexAttributeSemantic, VertexLayout,
};

/// A synthetic scan fragment: a `side x side` vertex grid of triangles.
fn grid_fragment(side: u32) -> MeshFragment {
    let mut positions = Vec::with_capacity((side * side) as usize);
    for y in 0..side {
        for x in 0..side {
            positions.push([x as f32 * 0.01, y as f32 * 0.01, 0.0]);
        }
    }

    let mut indices = Vec::new();
    for y in 0..side - 1 {
        for x in 0..side - 1 {
            let i = y * side + x;
            indices.extend_from_slice(&[i, i + 1, i + side, i + side, i + 1, i + side + 1]);
        }
    }

    MeshFragment::new(VertexLayout::position_only())
        .with_positions(&positions)
        .with_indices(&indices)
        .with_transform(mat4_from_translation(Vec3::new(1.0, 2.0, 3.0)))
}

// ---------------------------------------------------------------------------
// Asset building (transform + aggregate)
// ---------------------------------------------------------------------------

fn bench_build_asset_small(c: &mut Criterion) {
    c.bench_function("build_scan_asset_32x32", |b| {
        b.iter(|| build_scan_asset(black_box(vec![grid_fragment(32)])));
    });
}

fn bench_build_asset_large(c: &mut Criterion) {
    c.bench_function("build_scan_asset_256x256", |b| {
        b.iter(|| build_scan_asset(black_box(vec![grid_fragment(256)])));
    });
}

fn bench_build_asset_many_fragments(c: &mut Criterion) {
    let fragments: Vec<_> = (0..64).map(|_| grid_fragment(16)).collect();
    c.bench_function("build_scan_asset_64_fragments", |b| {
        b.iter(|| build_scan_asset(black_box(fragments.clone())));
    });
}

// ---------------------------------------------------------------------------
// OBJ encoding
// ---------------------------------------------------------------------------

fn bench_encode_obj(c: &mut Criterion) {
    let asset = build_scan_asset(vec![grid_fragment(128)]).unwrap();
    c.bench_function("encode_obj_128x128", |b| {
        b.iter(|| encode_asset(black_box(&asset), ExportFormat::Obj));
    });
}

// ---------------------------------------------------------------------------
// Vertex layout construction
// ---------------------------------------------------------------------------

fn bench_vertex_layout_prebuilt(c: &mut Criterion) {
    c.bench_function("vertex_layout_position_only", |b| {
        b.iter(|| black_box(VertexLayout::position_only()));
    });
}

fn bench_vertex_layout_custom(c: &mut Criterion) {
    c.bench_function("vertex_layout_custom_build", |b| {
        b.iter(|| {
            black_box(
                VertexLayout::new(24)
                    .with_attribute(VertexAttribute::new(
                        VertexAttributeSemantic::Position,
                        VertexAttributeFormat::Float3,
                        0,
                    ))
                    .with_attribute(VertexAttribute::new(
                        VertexAttributeSemantic::Normal,
                        VertexAttributeFormat::Float3,
                        12,
                    )),
            )
        });
    });
}

fn bench_vertex_layout_get_attribute(c: &mut Criterion) {
    let layout = VertexLayout::position_normal();
    c.bench_function("vertex_layout_get_attribute", |b| {
        b.iter(|| {
            black_box(layout.attribute(black_box(VertexAttributeSemantic::Normal)));
        });
    });
}

criterion_group!(
    benches,
    bench_build_asset_small,
    bench_build_asset_large,
    bench_build_asset_many_fragments,
    bench_encode_obj,
    bench_vertex_layout_prebuilt,
    bench_vertex_layout_custom,
    bench_vertex_layout_get_attribute,
);
criterion_main!(benches);
