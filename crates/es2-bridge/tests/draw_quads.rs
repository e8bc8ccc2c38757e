mod common;

use common::{executor, take_calls};
use es2_bridge::{gl, GlCall};
use pretty_assertions::assert_eq;

// 3 position floats + two 2-float texcoord pairs, as bytes.
const STRIDE: i32 = 3 * 4 + 2 * (2 * 4);

fn quad_vertices(count: u32) -> (Vec<f32>, Vec<u8>) {
    let floats = vec![0.0f32; count as usize * 7];
    let colors = vec![0xffu8; count as usize * 4];
    (floats, colors)
}

#[test]
fn four_vertices_draw_six_indices() {
    let mut exec = executor();
    let (floats, colors) = quad_vertices(4);
    exec.draw_indexed_quads(4, &floats, &colors).unwrap();

    let calls = take_calls(&mut exec);
    let draw = calls
        .iter()
        .find_map(|c| match c {
            GlCall::DrawElements { mode, count, ty, offset } => Some((*mode, *count, *ty, *offset)),
            _ => None,
        })
        .expect("no draw call issued");
    assert_eq!(draw, (gl::TRIANGLES, 6, gl::UNSIGNED_SHORT, 0));
}

#[test]
fn twelve_vertices_draw_eighteen_indices() {
    let mut exec = executor();
    let (floats, colors) = quad_vertices(12);
    exec.draw_indexed_quads(12, &floats, &colors).unwrap();

    let calls = take_calls(&mut exec);
    assert!(calls.iter().any(|c| matches!(
        c,
        GlCall::DrawElements { count: 18, ty: gl::UNSIGNED_SHORT, .. }
    )));
}

#[test]
fn attribute_layout_matches_the_interleaved_vertex_format() {
    let mut exec = executor();
    let (floats, colors) = quad_vertices(4);
    exec.draw_indexed_quads(4, &floats, &colors).unwrap();

    let calls = take_calls(&mut exec);
    let pointers: Vec<_> = calls
        .iter()
        .filter_map(|c| match c {
            GlCall::VertexAttribPointer { index, size, ty, normalized, stride, offset } => {
                Some((*index, *size, *ty, *normalized, *stride, *offset))
            }
            _ => None,
        })
        .collect();

    assert_eq!(
        pointers,
        vec![
            (0, 3, gl::FLOAT, false, STRIDE, 0),
            (2, 2, gl::FLOAT, false, STRIDE, 12),
            (3, 2, gl::FLOAT, false, STRIDE, 20),
            (1, 4, gl::UNSIGNED_BYTE, true, 4, 0),
        ]
    );
}

#[test]
fn both_payloads_upload_as_static_array_buffers() {
    let mut exec = executor();
    let (floats, colors) = quad_vertices(4);
    exec.draw_indexed_quads(4, &floats, &colors).unwrap();

    let calls = take_calls(&mut exec);
    let uploads: Vec<_> = calls
        .iter()
        .filter_map(|c| match c {
            GlCall::BufferData { target, data, usage } => Some((*target, data.len(), *usage)),
            _ => None,
        })
        .collect();
    assert_eq!(
        uploads,
        vec![
            (gl::ARRAY_BUFFER, 4 * 7 * 4, gl::STATIC_DRAW),
            (gl::ARRAY_BUFFER, 4 * 4, gl::STATIC_DRAW),
        ]
    );
}

#[test]
fn draw_does_not_enable_attribute_arrays_itself() {
    let mut exec = executor();
    let (floats, colors) = quad_vertices(4);
    exec.draw_indexed_quads(4, &floats, &colors).unwrap();

    let calls = take_calls(&mut exec);
    assert!(!calls
        .iter()
        .any(|c| matches!(c, GlCall::EnableVertexAttribArray { .. })));
}

#[test]
fn enable_and_disable_toggle_all_four_attribute_slots() {
    let mut exec = executor();
    exec.enable_vertex_attributes().unwrap();
    exec.disable_vertex_attributes().unwrap();

    let calls = take_calls(&mut exec);
    assert_eq!(
        calls,
        vec![
            GlCall::EnableVertexAttribArray { index: 0 },
            GlCall::EnableVertexAttribArray { index: 1 },
            GlCall::EnableVertexAttribArray { index: 2 },
            GlCall::EnableVertexAttribArray { index: 3 },
            GlCall::DisableVertexAttribArray { index: 0 },
            GlCall::DisableVertexAttribArray { index: 1 },
            GlCall::DisableVertexAttribArray { index: 2 },
            GlCall::DisableVertexAttribArray { index: 3 },
        ]
    );
}

#[test]
fn index_buffer_uploads_as_16_bit_elements() {
    let mut exec = executor();
    let indices: Vec<u16> = vec![0, 1, 2, 2, 3, 0];
    let handle = exec.create_index_buffer16(&indices, indices.len()).unwrap();
    assert_eq!(handle, 1);

    let calls = take_calls(&mut exec);
    let upload = calls
        .iter()
        .find_map(|c| match c {
            GlCall::BufferData { target, data, usage } => Some((*target, data.clone(), *usage)),
            _ => None,
        })
        .expect("no index upload");
    assert_eq!(upload.0, gl::ELEMENT_ARRAY_BUFFER);
    assert_eq!(upload.1.len(), indices.len() * 2);
    assert_eq!(upload.2, gl::STATIC_DRAW);

    // Re-binding the created buffer goes through the registry.
    exec.set_index_buffer(handle).unwrap();
    let calls = take_calls(&mut exec);
    assert!(matches!(
        calls[..],
        [GlCall::BindBuffer { target: gl::ELEMENT_ARRAY_BUFFER, buffer: Some(_) }]
    ));
}
