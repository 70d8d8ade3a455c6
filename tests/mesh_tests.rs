use diorama_gallery::mesh::Primitive;

#[cfg(test)]
mod mesh_tests {
    use super::*;

    #[test]
    fn test_indices_are_in_range() {
        for primitive in Primitive::ALL {
            let mesh = primitive.mesh();
            assert!(!mesh.indices.is_empty(), "{primitive:?}");
            assert_eq!(mesh.indices.len() % 3, 0, "{primitive:?}");
            let count = mesh.vertices.len() as u32;
            assert!(mesh.indices.iter().all(|&i| i < count), "{primitive:?}");
        }
    }

    #[test]
    fn test_normals_are_unit_length() {
        for primitive in Primitive::ALL {
            for vertex in primitive.mesh().vertices {
                let n = glam::Vec3::from_array(vertex.normal);
                assert!((n.length() - 1.0).abs() < 1e-4, "{primitive:?}: {n:?}");
            }
        }
    }

    #[test]
    fn test_meshes_fit_the_unit_box() {
        // torus reaches major + minor radius
        for primitive in Primitive::ALL {
            for vertex in primitive.mesh().vertices {
                assert!(vertex.position.iter().all(|c| c.abs() <= 0.65 + 1e-4), "{primitive:?}");
            }
        }
    }
}
