//! Byte-level access to vertex lists.
//!
//! Use [`as_bytes`] for buffer uploads (`create_buffer_init`, `write_buffer`),
//! [`view_vertices`] to reinterpret a mapped buffer in place, and
//! [`decode_vertices`] when the bytes came from somewhere with no alignment
//! guarantee (files, network, sub-slices).

use bytemuck::PodCastError;

use crate::error::ContractError;
use crate::vertex::ShaderVertex;

/// Raw bytes of a vertex list, in GPU upload order.
#[inline]
pub fn as_bytes<V: ShaderVertex>(vertices: &[V]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// Reinterprets `bytes` as vertex records without copying.
pub fn view_vertices<V: ShaderVertex>(bytes: &[u8]) -> Result<&[V], ContractError> {
    check_length::<V>(bytes)?;
    if bytes.is_empty() {
        // A dangling empty slice may not satisfy `V`'s alignment.
        return Ok(&[]);
    }
    bytemuck::try_cast_slice(bytes).map_err(|e| match e {
        PodCastError::TargetAlignmentGreaterAndInputNotAligned => ContractError::Misaligned {
            vertex: V::NAME,
            align: align_of::<V>(),
        },
        _ => length_error::<V>(bytes.len()),
    })
}

/// Copies `bytes` into owned vertex records. Any alignment is accepted.
pub fn decode_vertices<V: ShaderVertex>(bytes: &[u8]) -> Result<Vec<V>, ContractError> {
    check_length::<V>(bytes)?;
    let vertices: Vec<V> = bytes
        .chunks_exact(size_of::<V>())
        .map(bytemuck::pod_read_unaligned)
        .collect();
    log::trace!("decoded {} {} records", vertices.len(), V::NAME);
    Ok(vertices)
}

fn check_length<V: ShaderVertex>(bytes: &[u8]) -> Result<(), ContractError> {
    if bytes.len() % size_of::<V>() != 0 {
        return Err(length_error::<V>(bytes.len()));
    }
    Ok(())
}

fn length_error<V: ShaderVertex>(len: usize) -> ContractError {
    ContractError::ByteLength {
        vertex: V::NAME,
        len,
        stride: size_of::<V>(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{ColorRgba, Vec2};
    use crate::vertex::{SimpleVertex, TexVertex};

    fn sample_simple() -> Vec<SimpleVertex> {
        vec![
            SimpleVertex::new(Vec2::new(250.0, -250.0), ColorRgba::RED),
            SimpleVertex::new(Vec2::new(-250.0, -250.0), ColorRgba::new(0.0, 0.5, 0.25, 0.75)),
            SimpleVertex::new(Vec2::new(0.0, 250.0), ColorRgba::BLUE),
        ]
    }

    #[test]
    fn byte_length_is_count_times_stride() {
        let v = sample_simple();
        assert_eq!(as_bytes(&v).len(), 3 * 24);
    }

    #[test]
    fn simple_vertices_survive_bytes() {
        let v = sample_simple();
        let decoded: Vec<SimpleVertex> = decode_vertices(as_bytes(&v)).unwrap();
        assert_eq!(decoded, v);
        let viewed: &[SimpleVertex] = view_vertices(as_bytes(&v)).unwrap();
        assert_eq!(viewed, v.as_slice());
    }

    #[test]
    fn tex_vertices_survive_bytes() {
        let v = vec![
            TexVertex::new(Vec2::new(1.5, 2.5), Vec2::new(0.0, 1.0)),
            TexVertex::new(Vec2::new(-3.0, 4.0), Vec2::new(1.0, 0.0)),
        ];
        let decoded: Vec<TexVertex> = decode_vertices(as_bytes(&v)).unwrap();
        assert_eq!(decoded, v);
    }

    #[test]
    fn decode_accepts_unaligned_input() {
        let v = sample_simple();
        let mut shifted = vec![0u8];
        shifted.extend_from_slice(as_bytes(&v));
        let decoded: Vec<SimpleVertex> = decode_vertices(&shifted[1..]).unwrap();
        assert_eq!(decoded, v);
    }

    #[test]
    fn view_rejects_unaligned_input() {
        let v = sample_simple();
        // `u32` backing storage guarantees a 4-aligned base, so +1 is misaligned.
        let mut words = vec![0u32; v.len() * 6 + 1];
        let storage: &mut [u8] = bytemuck::cast_slice_mut(&mut words);
        storage[1..1 + 72].copy_from_slice(as_bytes(&v));
        let err = view_vertices::<SimpleVertex>(&storage[1..1 + 72]).unwrap_err();
        assert_eq!(err, ContractError::Misaligned { vertex: "SimpleVertex", align: 4 });
    }

    #[test]
    fn partial_record_is_rejected() {
        let v = sample_simple();
        let bytes = &as_bytes(&v)[..30];
        let err = decode_vertices::<SimpleVertex>(bytes).unwrap_err();
        assert_eq!(err, ContractError::ByteLength { vertex: "SimpleVertex", len: 30, stride: 24 });
        assert!(view_vertices::<SimpleVertex>(bytes).is_err());
    }

    #[test]
    fn empty_input_is_empty_list() {
        assert!(decode_vertices::<TexVertex>(&[]).unwrap().is_empty());
        assert!(view_vertices::<TexVertex>(&[]).unwrap().is_empty());
    }
}
