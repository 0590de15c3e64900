//! Data node types and structures.

use super::layout::ElementLayout;

/// Type of node in the HDF5 hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeType {
    /// Root node (file level).
    Root,
    /// Group node.
    Group,
    /// Dataset node.
    Dataset,
}

/// A node in the HDF5 object tree.
#[derive(Debug, Clone)]
pub struct DataNode {
    /// Node name.
    pub name: String,
    /// Full path to this node.
    pub path: String,
    /// Type of node.
    pub node_type: NodeType,
    /// Child nodes, sorted by name.
    pub children: Vec<DataNode>,
    /// Shape for dataset nodes.
    pub shape: Option<Vec<usize>>,
    /// Element layout for numeric dataset nodes.
    pub layout: Option<ElementLayout>,
}

impl DataNode {
    /// Create a new data node.
    pub fn new(name: String, path: String, node_type: NodeType) -> Self {
        Self {
            name,
            path,
            node_type,
            children: Vec::new(),
            shape: None,
            layout: None,
        }
    }

    /// Check if this node is a dataset.
    pub fn is_dataset(&self) -> bool {
        self.node_type == NodeType::Dataset
    }

    /// Check if this node is a group (or root).
    pub fn is_group(&self) -> bool {
        matches!(self.node_type, NodeType::Group | NodeType::Root)
    }

    /// Add a child node.
    pub fn add_child(&mut self, child: DataNode) {
        self.children.push(child);
    }

    /// Find a node by its full path, e.g. `/grp/data`.
    pub fn find(&self, path: &str) -> Option<&DataNode> {
        let target = format!("/{}", crate::util::path::split_segments(path).join("/"));
        self.find_normalized(&target)
    }

    fn find_normalized(&self, target: &str) -> Option<&DataNode> {
        if self.path == target {
            return Some(self);
        }
        self.children
            .iter()
            .filter(|child| child.path == target || target.starts_with(&format!("{}/", child.path)))
            .find_map(|child| child.find_normalized(target))
    }

    /// Paths of every dataset below this node, depth first.
    pub fn dataset_paths(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.collect_datasets(&mut out);
        out
    }

    fn collect_datasets(&self, out: &mut Vec<String>) {
        if self.is_dataset() {
            out.push(self.path.clone());
        }
        for child in &self.children {
            child.collect_datasets(out);
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> DataNode {
        let mut root = DataNode::new("f.h5".into(), "/".into(), NodeType::Root);
        let mut grp = DataNode::new("grp".into(), "/grp".into(), NodeType::Group);
        grp.add_child(DataNode::new("x".into(), "/grp/x".into(), NodeType::Dataset));
        let mut near = DataNode::new("grp2".into(), "/grp2".into(), NodeType::Group);
        near.add_child(DataNode::new("x".into(), "/grp2/x".into(), NodeType::Dataset));
        root.add_child(grp);
        root.add_child(near);
        root.add_child(DataNode::new("top".into(), "/top".into(), NodeType::Dataset));
        root
    }

    #[test]
    fn find_walks_only_matching_prefixes() {
        let root = sample_tree();
        assert_eq!(root.find("grp2/x").map(|n| n.path.as_str()), Some("/grp2/x"));
        assert_eq!(root.find("/grp/x").map(|n| n.path.as_str()), Some("/grp/x"));
        assert!(root.find("/grp/y").is_none());
        assert!(root.find("/").is_some_and(|n| n.node_type == NodeType::Root));
    }

    #[test]
    fn dataset_paths_depth_first() {
        let root = sample_tree();
        assert_eq!(root.dataset_paths(), vec!["/grp/x", "/grp2/x", "/top"]);
    }
}
