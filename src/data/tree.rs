//! HDF5 object tree reader.

use super::layout::ElementLayout;
use super::{DataNode, NodeType};
use crate::error::Result;
use std::path::Path;
use tracing::debug;

/// Read the group and dataset hierarchy of an HDF5 file.
///
/// Dataset values are never read; numeric datasets carry their shape and
/// element layout, other datasets only their shape.
pub fn read_tree(path: &Path) -> Result<DataNode> {
    let file = hdf5::File::open(path)?;

    let mut root_node = DataNode::new(
        path.file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string()),
        "/".to_string(),
        NodeType::Root,
    );
    read_members(&file, "", &mut root_node)?;

    debug!(
        file = %path.display(),
        datasets = root_node.dataset_paths().len(),
        "tree read"
    );
    Ok(root_node)
}

fn read_members(group: &hdf5::Group, parent_path: &str, node: &mut DataNode) -> Result<()> {
    let mut children = Vec::new();

    for child_group in group.groups()? {
        let name = leaf_name(&child_group.name());
        let group_path = format!("{}/{}", parent_path, name);
        let mut group_node = DataNode::new(name, group_path.clone(), NodeType::Group);
        read_members(&child_group, &group_path, &mut group_node)?;
        children.push(group_node);
    }

    for ds in group.datasets()? {
        let name = leaf_name(&ds.name());
        let ds_path = format!("{}/{}", parent_path, name);
        let mut ds_node = DataNode::new(name, ds_path.clone(), NodeType::Dataset);
        ds_node.shape = Some(ds.shape());
        ds_node.layout = ds
            .dtype()
            .ok()
            .and_then(|dtype| ElementLayout::from_datatype(&dtype, &ds_path).ok());
        children.push(ds_node);
    }

    children.sort_by(|a, b| a.name.cmp(&b.name));
    for child in children {
        node.add_child(child);
    }
    Ok(())
}

fn leaf_name(full: &str) -> String {
    full.rsplit('/').next().unwrap_or(full).to_string()
}
