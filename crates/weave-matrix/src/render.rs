//! Rendering utilities turning selections into tuples, path strings, and
//! short descriptions.

use std::collections::BTreeSet;

use weave_core::{Item, Selection};

/// Flattens a selection into the set of ordered root-to-leaf item paths.
///
/// A union distributes its alternatives, a tagged pair prefixes its tag to
/// every child path, and a leaf yields one singleton path.
pub fn flatten<T: Item>(selection: &Selection<T>) -> BTreeSet<Vec<T>> {
    match selection {
        Selection::Leaf(item) => {
            let mut out = BTreeSet::new();
            out.insert(vec![item.clone()]);
            out
        }
        Selection::Tagged(tag, child) => flatten(child)
            .into_iter()
            .map(|mut path| {
                let mut full = Vec::with_capacity(path.len() + 1);
                full.push(tag.clone());
                full.append(&mut path);
                full
            })
            .collect(),
        Selection::Union(members) => members.iter().flat_map(|member| flatten(member)).collect(),
    }
}

/// Renders every flattened path as a joined string starting from `root`,
/// returning the results sorted.
pub fn paths<T, F>(selection: &Selection<T>, root: &str, join: F) -> Vec<String>
where
    T: Item,
    F: Fn(&str, &str) -> String,
{
    let mut out: Vec<String> = flatten(selection)
        .into_iter()
        .map(|path| {
            path.into_iter()
                .fold(root.to_string(), |acc, item| join(&acc, &item.to_string()))
        })
        .collect();
    out.sort();
    out
}

/// Renders a selection as a short description.
///
/// A union of two or more alternatives renders as a brace-delimited, sorted,
/// space-joined list; a union of one renders as that single description; a
/// tagged pair joins the tag with the child description via `join`.
pub fn describe<T, F>(selection: &Selection<T>, join: F) -> String
where
    T: Item,
    F: Fn(&str, &str) -> String,
{
    describe_with(selection, &join)
}

fn describe_with<T, F>(selection: &Selection<T>, join: &F) -> String
where
    T: Item,
    F: Fn(&str, &str) -> String,
{
    match selection {
        Selection::Leaf(item) => item.to_string(),
        Selection::Tagged(tag, child) => join(&tag.to_string(), &describe_with(child, join)),
        Selection::Union(members) => {
            let mut parts: Vec<String> = members
                .iter()
                .map(|member| describe_with(member, join))
                .collect();
            parts.sort();
            if parts.len() == 1 {
                parts.remove(0)
            } else {
                format!("{{{}}}", parts.join(" "))
            }
        }
    }
}
