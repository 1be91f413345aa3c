//! Category hierarchy queries
//!
//! Pure, side-effect-free functions over a snapshot of the category
//! collection. Walks tolerate bad data: a dangling parent reference ends
//! the chain (logged as a data-integrity warning), and a visited set guards
//! against pre-existing cycles, so every walk terminates.

use std::collections::{HashMap, HashSet, VecDeque};

use shared::models::Category;

/// Separator used in display path labels ("Chocolate Cakes › Truffle Cakes").
pub const PATH_SEPARATOR: &str = " › ";

/// Ancestors from the immediate parent up to the root.
///
/// Empty for roots, for unknown ids, and when the parent reference dangles.
pub fn ancestors_of<'a>(cats: &'a HashMap<String, Category>, id: &str) -> Vec<&'a Category> {
    let mut out = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    seen.insert(id);

    let mut current = cats.get(id).and_then(|c| c.parent_id.as_deref());
    while let Some(parent_id) = current {
        if !seen.insert(parent_id) {
            tracing::warn!(category = id, "cycle in ancestor chain, stopping walk");
            break;
        }
        match cats.get(parent_id) {
            Some(parent) => {
                out.push(parent);
                current = parent.parent_id.as_deref();
            }
            None => {
                tracing::warn!(category = id, parent = parent_id, "dangling parent reference");
                break;
            }
        }
    }
    out
}

/// Number of ancestors; roots have depth 0.
pub fn depth_of(cats: &HashMap<String, Category>, id: &str) -> usize {
    ancestors_of(cats, id).len()
}

/// Whether `candidate_ancestor_id` appears in `node_id`'s ancestor chain.
///
/// Used to block cycle-introducing reparenting. A node is never its own
/// descendant.
pub fn is_descendant(
    cats: &HashMap<String, Category>,
    candidate_ancestor_id: &str,
    node_id: &str,
) -> bool {
    ancestors_of(cats, node_id)
        .iter()
        .any(|c| c.id == candidate_ancestor_id)
}

/// Top of the ancestor chain; the category itself when it is a root.
pub fn root_of<'a>(cats: &'a HashMap<String, Category>, id: &str) -> Option<&'a Category> {
    let node = cats.get(id)?;
    Some(ancestors_of(cats, id).into_iter().last().unwrap_or(node))
}

/// All transitive descendants, breadth-first. Order within a level is not
/// significant.
pub fn descendants_of<'a>(cats: &'a HashMap<String, Category>, id: &str) -> Vec<&'a Category> {
    let mut out = Vec::new();
    let mut queue: VecDeque<&str> = VecDeque::new();
    queue.push_back(id);

    while let Some(current) = queue.pop_front() {
        for child in cats
            .values()
            .filter(|c| c.parent_id.as_deref() == Some(current))
        {
            out.push(child);
            queue.push_back(&child.id);
        }
    }
    out
}

/// Ancestor titles down to the category itself, joined with
/// [`PATH_SEPARATOR`]. Display-only (secondary sort key), never persisted.
pub fn path_label(cats: &HashMap<String, Category>, id: &str) -> String {
    let Some(node) = cats.get(id) else {
        return String::new();
    };
    let mut titles: Vec<&str> = ancestors_of(cats, id)
        .iter()
        .rev()
        .map(|c| c.title.as_str())
        .collect();
    titles.push(node.title.as_str());
    titles.join(PATH_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::ProductType;

    fn cat(id: &str, title: &str, parent: Option<&str>) -> Category {
        Category {
            id: id.to_string(),
            title: title.to_string(),
            slug: id.to_string(),
            icon_url: None,
            parent_id: parent.map(str::to_string),
            sort_order: 0,
            is_active: true,
            product_type: ProductType::Cake,
        }
    }

    fn three_level_tree() -> HashMap<String, Category> {
        // cakes -> chocolate -> truffle, plus a sibling root
        [
            cat("cakes", "Cakes", None),
            cat("chocolate", "Chocolate Cakes", Some("cakes")),
            cat("truffle", "Truffle Cakes", Some("chocolate")),
            cat("flowers", "Flowers", None),
        ]
        .into_iter()
        .map(|c| (c.id.clone(), c))
        .collect()
    }

    #[test]
    fn test_ancestors_walk_to_root() {
        let cats = three_level_tree();
        let chain: Vec<&str> = ancestors_of(&cats, "truffle")
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(chain, vec!["chocolate", "cakes"]);
        assert!(ancestors_of(&cats, "cakes").is_empty());
    }

    #[test]
    fn test_ancestors_of_dangling_parent_is_empty() {
        let mut cats = three_level_tree();
        cats.insert("orphan".into(), cat("orphan", "Orphan", Some("missing")));
        assert!(ancestors_of(&cats, "orphan").is_empty());
    }

    #[test]
    fn test_ancestors_terminate_on_corrupted_cycle() {
        // a <-> b, corruption that must never loop forever
        let cats: HashMap<String, Category> = [
            cat("a", "A", Some("b")),
            cat("b", "B", Some("a")),
        ]
        .into_iter()
        .map(|c| (c.id.clone(), c))
        .collect();

        // walk reaches "b", then refuses to revisit "a"
        let chain = ancestors_of(&cats, "a");
        assert_eq!(chain.len(), 1);
        assert_eq!(chain[0].id, "b");
    }

    #[test]
    fn test_depth() {
        let cats = three_level_tree();
        assert_eq!(depth_of(&cats, "cakes"), 0);
        assert_eq!(depth_of(&cats, "chocolate"), 1);
        assert_eq!(depth_of(&cats, "truffle"), 2);
    }

    #[test]
    fn test_is_descendant() {
        let cats = three_level_tree();
        assert!(is_descendant(&cats, "cakes", "truffle"));
        assert!(is_descendant(&cats, "chocolate", "truffle"));
        assert!(!is_descendant(&cats, "truffle", "cakes"));
        assert!(!is_descendant(&cats, "flowers", "truffle"));
        // a category is never its own descendant
        for id in ["cakes", "chocolate", "truffle", "flowers"] {
            assert!(!is_descendant(&cats, id, id));
        }
    }

    #[test]
    fn test_root_of() {
        let cats = three_level_tree();
        assert_eq!(root_of(&cats, "truffle").unwrap().id, "cakes");
        assert_eq!(root_of(&cats, "cakes").unwrap().id, "cakes");
        assert!(root_of(&cats, "unknown").is_none());
    }

    #[test]
    fn test_descendants() {
        let cats = three_level_tree();
        let mut ids: Vec<&str> = descendants_of(&cats, "cakes")
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        ids.sort_unstable();
        assert_eq!(ids, vec!["chocolate", "truffle"]);
        assert!(descendants_of(&cats, "truffle").is_empty());
    }

    #[test]
    fn test_path_label() {
        let cats = three_level_tree();
        assert_eq!(
            path_label(&cats, "truffle"),
            "Cakes › Chocolate Cakes › Truffle Cakes"
        );
        assert_eq!(path_label(&cats, "cakes"), "Cakes");
        assert_eq!(path_label(&cats, "unknown"), "");
    }
}
