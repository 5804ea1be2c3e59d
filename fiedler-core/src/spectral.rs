//! Laplacian construction and algebraic connectivity.
//!
//! The algebraic connectivity (Fiedler value) is the second-smallest
//! eigenvalue of the graph Laplacian `L = D - A`. It is zero exactly when the
//! graph is disconnected and grows as the graph becomes harder to cut.

use std::collections::BTreeMap;

use nalgebra::DMatrix;

use crate::graph::{Graph, NodeId};

/// Builds the Laplacian matrix of `graph`.
///
/// Rows and columns follow ascending node-id order, so node ids need not be
/// contiguous.
///
/// # Examples
/// ```
/// use fiedler_core::{Graph, laplacian_matrix};
///
/// let graph = Graph::try_from_parts(0..3, [(0, 1), (1, 2)]).expect("valid graph");
/// let laplacian = laplacian_matrix(&graph);
/// assert_eq!(laplacian[(1, 1)], 2.0);
/// assert_eq!(laplacian[(0, 1)], -1.0);
/// assert_eq!(laplacian[(0, 2)], 0.0);
/// ```
#[must_use]
pub fn laplacian_matrix(graph: &Graph) -> DMatrix<f64> {
    let position: BTreeMap<NodeId, usize> = graph
        .nodes()
        .enumerate()
        .map(|(index, node)| (node, index))
        .collect();
    let order = position.len();
    let mut laplacian = DMatrix::<f64>::zeros(order, order);

    for edge in graph.edges() {
        let (Some(&row), Some(&col)) = (position.get(&edge.source()), position.get(&edge.target()))
        else {
            continue;
        };
        laplacian[(row, col)] -= 1.0;
        laplacian[(col, row)] -= 1.0;
        laplacian[(row, row)] += 1.0;
        laplacian[(col, col)] += 1.0;
    }
    laplacian
}

/// Returns the algebraic connectivity of `graph`.
///
/// Graphs with fewer than two nodes have connectivity `0`. Eigenvalues come
/// from a symmetric QR decomposition; tiny negative values produced by
/// round-off are clamped to zero.
///
/// # Examples
/// ```
/// use fiedler_core::{Graph, algebraic_connectivity};
///
/// // The complete graph on n nodes has algebraic connectivity n.
/// let k4 = Graph::try_from_parts(0..4, [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)])
///     .expect("valid graph");
/// assert!((algebraic_connectivity(&k4) - 4.0).abs() < 1e-9);
/// assert_eq!(algebraic_connectivity(&Graph::with_nodes(1)), 0.0);
/// ```
#[must_use]
pub fn algebraic_connectivity(graph: &Graph) -> f64 {
    if graph.node_count() < 2 {
        return 0.0;
    }
    let mut eigenvalues: Vec<f64> = laplacian_matrix(graph)
        .symmetric_eigenvalues()
        .iter()
        .copied()
        .collect();
    eigenvalues.sort_by(f64::total_cmp);
    eigenvalues.get(1).map_or(0.0, |value| value.max(0.0))
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use rstest::rstest;

    use super::*;
    use crate::test_utils::{complete_graph, cycle_graph, path_graph, star_graph};

    const TOLERANCE: f64 = 1e-6;

    fn assert_close(actual: f64, expected: f64) {
        let scale = expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() <= TOLERANCE * scale,
            "expected {expected}, got {actual}"
        );
    }

    #[rstest]
    #[case::empty(Graph::new())]
    #[case::single(Graph::with_nodes(1))]
    fn trivial_graphs_have_zero_connectivity(#[case] graph: Graph) {
        assert_eq!(algebraic_connectivity(&graph), 0.0);
    }

    #[rstest]
    #[case(2)]
    #[case(5)]
    #[case(12)]
    fn path_matches_closed_form(#[case] n: usize) {
        let expected = 2.0 * (1.0 - (PI / n as f64).cos());
        assert_close(algebraic_connectivity(&path_graph(n)), expected);
    }

    #[rstest]
    #[case(3)]
    #[case(8)]
    fn cycle_matches_closed_form(#[case] n: usize) {
        let expected = 2.0 * (1.0 - (2.0 * PI / n as f64).cos());
        assert_close(algebraic_connectivity(&cycle_graph(n)), expected);
    }

    #[rstest]
    #[case(2)]
    #[case(6)]
    #[case(15)]
    fn complete_graph_equals_node_count(#[case] n: usize) {
        assert_close(algebraic_connectivity(&complete_graph(n)), n as f64);
    }

    #[rstest]
    #[case(4)]
    #[case(10)]
    fn star_graph_is_one(#[case] n: usize) {
        assert_close(algebraic_connectivity(&star_graph(n)), 1.0);
    }

    #[test]
    fn disconnected_graph_has_zero_connectivity() {
        let graph = Graph::try_from_parts(0..4, [(0, 1), (2, 3)]).expect("valid graph");
        assert_close(algebraic_connectivity(&graph), 0.0);
        assert!(algebraic_connectivity(&graph) >= 0.0);
    }

    #[test]
    fn non_contiguous_ids_do_not_change_the_spectrum() {
        let relabelled =
            Graph::try_from_parts([3, 10, 42], [(3, 10), (10, 42)]).expect("valid graph");
        assert_close(
            algebraic_connectivity(&relabelled),
            algebraic_connectivity(&path_graph(3)),
        );
    }

    #[test]
    fn laplacian_rows_sum_to_zero() {
        let laplacian = laplacian_matrix(&star_graph(5));
        for row in laplacian.row_iter() {
            assert_eq!(row.sum(), 0.0);
        }
        assert_eq!(laplacian, laplacian.transpose());
    }
}
