use fxhash::FxHashMap;
use vesper_syntax::NodeId;

/// Receives the scope depth of every resolved reference.
///
/// Implemented by whatever later walks runtime environments by depth.
pub trait DepthRecorder {
    fn record(&mut self, node: NodeId, depth: usize);
}

/// Side table from reference node to the number of scopes between the
/// reference and the scope that declared the binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepthTable {
    depths: FxHashMap<NodeId, usize>,
}

impl DepthTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn depth_of(&self, node: NodeId) -> Option<usize> {
        self.depths.get(&node).copied()
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.depths.contains_key(&node)
    }

    pub fn len(&self) -> usize {
        self.depths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.depths.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, usize)> + '_ {
        self.depths.iter().map(|(node, depth)| (*node, *depth))
    }

    /// Entries ordered by node id.
    pub fn sorted(&self) -> Vec<(NodeId, usize)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable();
        entries
    }
}

impl DepthRecorder for DepthTable {
    fn record(&mut self, node: NodeId, depth: usize) {
        self.depths.insert(node, depth);
    }
}
