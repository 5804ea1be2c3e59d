use fiedler_core::{EngineBuilder, Graph, GraphEngine, NodeId};

#[must_use]
pub fn graph(nodes: impl IntoIterator<Item = NodeId>, edges: &[(NodeId, NodeId)]) -> Graph {
    match Graph::try_from_parts(nodes, edges.iter().copied()) {
        Ok(graph) => graph,
        Err(err) => panic!("fixture graph must be valid: {err}"),
    }
}

#[must_use]
pub fn engine(start: Graph) -> GraphEngine {
    EngineBuilder::new().with_seed(17).with_graph(start).build()
}

#[must_use]
pub fn edge_list(engine: &GraphEngine) -> Vec<(NodeId, NodeId)> {
    engine.snapshot().edges.into_iter().collect()
}
