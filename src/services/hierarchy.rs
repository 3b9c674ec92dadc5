//! Parent/child group forest
//!
//! Groups form a forest through `parent_group_id`. Nothing stops a snapshot
//! from containing a cycle, so every walk here carries a visited set.

use std::collections::{HashMap, HashSet};
use crate::models::{Group, GroupId};

/// A group positioned in the rendered tree
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeNode<'a> {
    pub group: &'a Group,
    /// 0 for roots
    pub level: usize,
}

/// Groups whose parent is `parent_id` (`None` selects the roots), in input order
pub fn group_children<'a>(groups: &'a [Group], parent_id: Option<&GroupId>) -> Vec<&'a Group> {
    groups
        .iter()
        .filter(|group| group.parent_group_id.as_ref() == parent_id)
        .collect()
}

/// Pre-order walk of the forest, at most `max_depth` levels deep.
///
/// Siblings keep input order and no group is emitted twice. Groups that
/// cannot be reached from a root are left out.
pub fn group_tree(groups: &[Group], max_depth: usize) -> Vec<TreeNode<'_>> {
    let mut nodes = Vec::new();
    if max_depth == 0 {
        return nodes;
    }

    let mut visited: HashSet<&GroupId> = HashSet::new();
    let mut stack: Vec<TreeNode<'_>> = group_children(groups, None)
        .into_iter()
        .rev()
        .map(|group| TreeNode { group, level: 0 })
        .collect();

    while let Some(node) = stack.pop() {
        if !visited.insert(&node.group.id) {
            continue;
        }
        nodes.push(node);

        let child_level = node.level + 1;
        if child_level >= max_depth {
            continue;
        }
        for child in group_children(groups, Some(&node.group.id)).into_iter().rev() {
            if !visited.contains(&child.id) {
                stack.push(TreeNode { group: child, level: child_level });
            }
        }
    }

    nodes
}

/// Whether following parent links from `group` leads back to it
pub fn is_own_ancestor(groups: &[Group], group: &Group) -> bool {
    let by_id: HashMap<&GroupId, &Group> = groups.iter().map(|g| (&g.id, g)).collect();
    let mut seen: HashSet<&GroupId> = HashSet::new();
    let mut current = group.parent_group_id.as_ref();

    while let Some(parent_id) = current {
        if parent_id == &group.id {
            return true;
        }
        if !seen.insert(parent_id) {
            // A cycle further up that does not include `group`
            return false;
        }
        current = by_id.get(parent_id).and_then(|parent| parent.parent_group_id.as_ref());
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(id: &str, parent: Option<&str>) -> Group {
        Group {
            id: GroupId::new(id),
            name: id.to_string(),
            description: String::new(),
            parent_group_id: parent.map(GroupId::new),
            members: vec![],
            admins: vec![],
            can_members_post: true,
        }
    }

    fn ids(nodes: &[TreeNode<'_>]) -> Vec<(String, usize)> {
        nodes.iter().map(|n| (n.group.id.to_string(), n.level)).collect()
    }

    #[test]
    fn test_group_children_roots_in_input_order() {
        let groups = vec![group("g1", None), group("g3", Some("g1")), group("g2", None)];
        let roots: Vec<&str> =
            group_children(&groups, None).iter().map(|g| g.id.as_str()).collect();
        assert_eq!(roots, vec!["g1", "g2"]);
    }

    #[test]
    fn test_group_children_unknown_parent_is_empty() {
        let groups = vec![group("g1", None)];
        assert!(group_children(&groups, Some(&GroupId::new("nope"))).is_empty());
    }

    #[test]
    fn test_group_tree_pre_order() {
        let groups = vec![
            group("g1", None),
            group("g2", None),
            group("g3", Some("g1")),
            group("g6", Some("g3")),
            group("g4", Some("g1")),
        ];
        assert_eq!(
            ids(&group_tree(&groups, 16)),
            vec![
                ("g1".to_string(), 0),
                ("g3".to_string(), 1),
                ("g6".to_string(), 2),
                ("g4".to_string(), 1),
                ("g2".to_string(), 0),
            ]
        );
    }

    #[test]
    fn test_group_tree_depth_limit() {
        let groups = vec![group("a", None), group("b", Some("a")), group("c", Some("b"))];
        assert_eq!(ids(&group_tree(&groups, 2)), vec![("a".to_string(), 0), ("b".to_string(), 1)]);
        assert!(group_tree(&groups, 0).is_empty());
    }

    #[test]
    fn test_group_tree_skips_cycles_and_duplicates() {
        let groups = vec![
            group("root", None),
            group("x", Some("y")),
            group("y", Some("x")),
            group("self", Some("self")),
            group("child", Some("root")),
            group("child", Some("root")),
        ];
        assert_eq!(
            ids(&group_tree(&groups, 16)),
            vec![("root".to_string(), 0), ("child".to_string(), 1)]
        );
    }

    #[test]
    fn test_is_own_ancestor() {
        let groups = vec![
            group("g1", None),
            group("g3", Some("g1")),
            group("self", Some("self")),
            group("x", Some("y")),
            group("y", Some("x")),
            group("tail", Some("x")),
        ];
        assert!(!is_own_ancestor(&groups, &groups[1]));
        assert!(is_own_ancestor(&groups, &groups[2]));
        assert!(is_own_ancestor(&groups, &groups[3]));
        assert!(!is_own_ancestor(&groups, &groups[5]));
    }
}
