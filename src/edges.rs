//! Derivation of a unique undirected edge list from faces, for the
//! wireframe rendering path.

use std::collections::HashSet;

use crate::scene::{Edge, Face};

/// Drop duplicate edges, preserving the order of first occurrence.
pub fn dedup_edges(edges: &[Edge]) -> Vec<Edge> {
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    for &edge in edges {
        if seen.insert(edge) {
            unique.push(edge);
        }
    }
    unique
}

/// Collect every face's boundary edges, canonicalized and deduplicated.
///
/// Each consecutive vertex pair contributes an edge, including the
/// wrap-around pair from the last vertex back to the first.
pub fn edge_list(faces: &[Face]) -> Vec<Edge> {
    let mut edges = Vec::new();
    for face in faces {
        let indices = face.indices();
        for i in 0..indices.len() {
            edges.push(Edge::new(indices[i], indices[(i + 1) % indices.len()]));
        }
    }
    dedup_edges(&edges)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_edge_appears_once() {
        // Two triangles sharing the 2-3 edge.
        let faces = vec![Face::new(vec![1, 2, 3]), Face::new(vec![2, 4, 3])];
        let edges = edge_list(&faces);
        assert_eq!(edges.len(), 5);
        assert_eq!(
            edges.iter().filter(|e| **e == Edge::new(2, 3)).count(),
            1
        );
    }

    #[test]
    fn test_wraparound_edge_is_included() {
        let faces = vec![Face::new(vec![1, 2, 3])];
        let edges = edge_list(&faces);
        assert!(edges.contains(&Edge::new(3, 1)));
    }

    #[test]
    fn test_first_occurrence_order_is_kept() {
        let faces = vec![Face::new(vec![3, 1, 2])];
        let edges = edge_list(&faces);
        assert_eq!(
            edges,
            vec![Edge::new(1, 3), Edge::new(1, 2), Edge::new(2, 3)]
        );
    }

    #[test]
    fn test_dedup_is_idempotent() {
        let raw = vec![
            Edge::new(1, 2),
            Edge::new(2, 1),
            Edge::new(2, 3),
            Edge::new(1, 2),
        ];
        let once = dedup_edges(&raw);
        let twice = dedup_edges(&once);
        assert_eq!(once, twice);
        assert_eq!(once, vec![Edge::new(1, 2), Edge::new(2, 3)]);
    }
}
