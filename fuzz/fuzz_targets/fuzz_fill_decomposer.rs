#![no_main]

use glam::Vec2;
use libfuzzer_sys::fuzz_target;
use path_shape_editor::decompose;

fuzz_target!(|data: &[u8]| {
    // Je vier Bytes ein Punkt: x und y als i16
    let points: Vec<Vec2> = data
        .chunks_exact(4)
        .take(512)
        .map(|c| {
            Vec2::new(
                f32::from(i16::from_le_bytes([c[0], c[1]])),
                f32::from(i16::from_le_bytes([c[2], c[3]])),
            )
        })
        .collect();

    let quads = decompose(&points);
    for quad in &quads {
        for corner in quad {
            assert!(corner.is_finite());
        }
    }
});
