use crate::math::Mat4;
use crate::mesh::{MeshFragment, VertexLayout};


/// A unit quad in the XY plane: 4 vertices, 2 triangles.
fn quad_fragment() -> MeshFragment {
    MeshFragment::new(VertexLayout::position_only())
        .with_positions(&[
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [1.0, 1.0, 0.0],
            [0.0, 1.0, 0.0],
        ])
        .with_indices(&[0, 1, 2, 2, 3, 0])
}

/// A single vertex at the origin with a degenerate triangle, carrying the
/// given transform. Useful for checking translation of a known point.
fn point_fragment(transform: Mat4) -> MeshFragment {
    MeshFragment::new(VertexLayout::position_only())
        .with_positions(&[[0.0, 0.0, 0.0]])
        .with_indices(&[0, 0, 0])
        .with_transform(transform)
}

/// Geometry read back from an OBJ file.
struct ParsedObj {
    positions: Vec<[f32; 3]>,
    /// 0-based triangle indices into `positions`.
    triangles: Vec<[u32; 3]>,
    object_names: Vec<String>,
}

/// Minimal OBJ reader covering the subset the writer emits: `o`, `v` and
/// triangular `f` statements. Comments and `usemtl` lines are skipped.
fn parse_obj(text: &str) -> ParsedObj {
    let mut positions = Vec::new();
    let mut triangles = Vec::new();
    let mut object_names = Vec::new();

    for line in text.lines() {
        let mut parts = line.split_whitespace();
        match parts.next() {
            Some("o") => {
                object_names.push(parts.collect::<Vec<_>>().join(" "));
            }
            Some("v") => {
                let mut coords = [0.0f32; 3];
                for c in &mut coords {
                    *c = parts
                        .next()
                        .expect("v statement missing coordinate")
                        .parse()
                        .expect("bad vertex coordinate");
                }
                positions.push(coords);
            }
            Some("f") => {
                let mut indices = [0u32; 3];
                for i in &mut indices {
                    let raw: u32 = parts
                        .next()
                        .expect("f statement missing index")
                        .parse()
                        .expect("bad face index");
                    assert!(raw >= 1, "OBJ indices are 1-based");
                    *i = raw - 1;
                }
                assert!(parts.next().is_none(), "expected triangular faces only");
                triangles.push(indices);
            }
            _ => {}
        }
    }

    ParsedObj {
        positions,
        triangles,
        object_names,
    }
}
