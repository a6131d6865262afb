//! Exact-text lookups over a [`FormTree`].
//!
//! All functions here are pure reads and re-scan the tree on every call.
//! Text comparison is exact and case-sensitive after trimming the outer
//! whitespace of the compared text; no other normalization happens, so a
//! renamed label in the host UI shows up as a miss rather than a wrong
//! match.

use crate::tree::{ControlKind, ControlQuery, FormTree};

/// Nodes below `node` in document order, `node` itself excluded.
pub fn descendants<T: FormTree + ?Sized>(tree: &T, node: T::Node) -> Vec<T::Node> {
    let mut out = Vec::new();
    let mut stack: Vec<T::Node> = tree.children(node).into_iter().rev().collect();
    while let Some(current) = stack.pop() {
        out.push(current);
        stack.extend(tree.children(current).into_iter().rev());
    }
    out
}

/// Concatenated text of the direct text children of `node`, trimmed.
///
/// Text nested in child elements is not included, so a container never
/// matches the label of an element it wraps.
pub fn own_text<T: FormTree + ?Sized>(tree: &T, node: T::Node) -> String {
    tree.children(node)
        .into_iter()
        .filter_map(|child| tree.text(child))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Concatenated text of every text node under `node`, trimmed.
pub fn full_text<T: FormTree + ?Sized>(tree: &T, node: T::Node) -> String {
    if let Some(text) = tree.text(node) {
        return text.trim().to_string();
    }
    descendants(tree, node)
        .into_iter()
        .filter_map(|child| tree.text(child))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Next sibling of `node` that is an element.
pub fn next_element_sibling<T: FormTree + ?Sized>(tree: &T, node: T::Node) -> Option<T::Node> {
    let parent = tree.parent(node)?;
    tree.children(parent)
        .into_iter()
        .skip_while(|sibling| *sibling != node)
        .skip(1)
        .find(|sibling| tree.is_element(*sibling))
}

/// Returns `true` when `node` or anything below it is a control.
pub fn contains_control<T: FormTree + ?Sized>(tree: &T, node: T::Node) -> bool {
    tree.control_kind(node).is_some()
        || descendants(tree, node)
            .into_iter()
            .any(|child| tree.control_kind(child).is_some())
}

/// Finds the region that follows the heading `title`.
///
/// Scans elements in document order for one whose full text equals
/// `title`, and returns its next element sibling when that sibling holds
/// at least one control. Headings followed by a control-free sibling are
/// passed over, so a decorative heading with the same text does not hide
/// the real one.
pub fn find_section<T: FormTree + ?Sized>(tree: &T, title: &str) -> Option<T::Node> {
    let root = tree.root();
    std::iter::once(root)
        .chain(descendants(tree, root))
        .filter(|node| tree.is_element(*node))
        .filter(|node| full_text(tree, *node) == title)
        .find_map(|heading| {
            next_element_sibling(tree, heading).filter(|region| contains_control(tree, *region))
        })
}

/// Finds the first element inside `region` whose own text equals `text`.
pub fn locate_control_by_text<T: FormTree + ?Sized>(
    tree: &T,
    region: T::Node,
    text: &str,
) -> Option<T::Node> {
    descendants(tree, region)
        .into_iter()
        .filter(|node| tree.is_element(*node))
        .find(|node| own_text(tree, *node) == text)
}

/// Resolves the control a label node refers to.
///
/// Searches the label's own subtree first, then the subtree of each
/// ancestor, up to `climb` levels and never above `region`. The search
/// stops at the first scope holding any control of the queried kind: when
/// that scope has no control satisfying the query (for example a radio
/// group without the requested option), the lookup fails instead of
/// reaching into a neighbouring field.
pub fn find_control<T: FormTree + ?Sized>(
    tree: &T,
    region: T::Node,
    label: T::Node,
    query: ControlQuery<'_>,
    climb: usize,
) -> Option<T::Node> {
    let mut scope = label;
    for _ in 0..=climb {
        let candidates = controls_of_kind(tree, scope, query.kind());
        if !candidates.is_empty() {
            return candidates
                .into_iter()
                .find(|node| query.matches(tree, *node));
        }
        if scope == region {
            break;
        }
        scope = tree.parent(scope)?;
    }
    None
}

/// Controls of `kind` at or below `node`, in document order.
pub fn controls_of_kind<T: FormTree + ?Sized>(
    tree: &T,
    node: T::Node,
    kind: ControlKind,
) -> Vec<T::Node> {
    std::iter::once(node)
        .chain(descendants(tree, node))
        .filter(|candidate| tree.control_kind(*candidate) == Some(kind))
        .collect()
}

/// Options currently rendered anywhere in the tree.
///
/// Disclosed option lists are commonly rendered in a detached popup
/// rather than next to their trigger, so the whole document is scanned.
pub fn rendered_options<T: FormTree + ?Sized>(tree: &T) -> Vec<T::Node> {
    descendants(tree, tree.root())
        .into_iter()
        .filter(|node| tree.is_option(*node))
        .collect()
}

/// Compares an option's own text, or its full subtree text, with `text`.
pub fn option_matches<T: FormTree + ?Sized>(
    tree: &T,
    option: T::Node,
    text: &str,
    match_full_subtree: bool,
) -> bool {
    if match_full_subtree {
        full_text(tree, option) == text
    } else {
        own_text(tree, option) == text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{FormDocument, NodeSpec};

    fn sample() -> FormDocument {
        FormDocument::from_spec(&NodeSpec::element(
            "body",
            vec![
                NodeSpec::element("h2", vec![NodeSpec::text("Ability")]),
                NodeSpec::element("p", vec![NodeSpec::text("no controls here")]),
                NodeSpec::element("h2", vec![NodeSpec::text("Player Info")]),
                NodeSpec::element(
                    "section",
                    vec![
                        NodeSpec::element(
                            "label",
                            vec![NodeSpec::text(" Age "), NodeSpec::text_input("")],
                        ),
                        NodeSpec::element(
                            "div",
                            vec![
                                NodeSpec::element("span", vec![NodeSpec::text("Stronger Foot")]),
                                NodeSpec::radio("foot", "Right"),
                                NodeSpec::radio("foot", "Left"),
                            ],
                        ),
                    ],
                ),
                NodeSpec::element(
                    "h2",
                    vec![NodeSpec::element("span", vec![NodeSpec::text("Ability")])],
                ),
                NodeSpec::element(
                    "section",
                    vec![NodeSpec::element(
                        "label",
                        vec![NodeSpec::text("Speed"), NodeSpec::text_input("70")],
                    )],
                ),
            ],
        ))
    }

    #[test]
    fn test_find_section_returns_region_after_heading() {
        let doc = sample();
        let region = find_section(&doc, "Player Info").unwrap();
        assert!(locate_control_by_text(&doc, region, "Age").is_some());
    }

    #[test]
    fn test_find_section_skips_heading_without_controls() {
        let doc = sample();
        let region = find_section(&doc, "Ability").unwrap();
        assert!(locate_control_by_text(&doc, region, "Speed").is_some());
    }

    #[test]
    fn test_find_section_missing_title() {
        let doc = sample();
        assert!(find_section(&doc, "Player Skills").is_none());
        assert!(find_section(&doc, "player info").is_none());
    }

    #[test]
    fn test_locate_uses_own_text_not_subtree() {
        let doc = sample();
        let region = find_section(&doc, "Player Info").unwrap();
        let node = locate_control_by_text(&doc, region, "Stronger Foot").unwrap();
        assert_eq!(own_text(&doc, node), "Stronger Foot");
        assert!(doc.children(node).iter().all(|child| doc.text(*child).is_some()));
    }

    #[test]
    fn test_locate_is_case_sensitive() {
        let doc = sample();
        let region = find_section(&doc, "Player Info").unwrap();
        assert!(locate_control_by_text(&doc, region, "age").is_none());
    }

    #[test]
    fn test_find_control_in_label_subtree() {
        let doc = sample();
        let region = find_section(&doc, "Player Info").unwrap();
        let label = locate_control_by_text(&doc, region, "Age").unwrap();
        let input = find_control(&doc, region, label, ControlQuery::Text, 2).unwrap();
        assert_eq!(doc.control_kind(input), Some(ControlKind::Text));
    }

    #[test]
    fn test_find_control_climbs_to_radio_group() {
        let doc = sample();
        let region = find_section(&doc, "Player Info").unwrap();
        let label = locate_control_by_text(&doc, region, "Stronger Foot").unwrap();
        let left = find_control(&doc, region, label, ControlQuery::Radio("Left"), 2).unwrap();
        assert_eq!(doc.option_value(left), Some("Left"));
    }

    #[test]
    fn test_find_control_stops_at_nearest_group() {
        let doc = sample();
        let region = find_section(&doc, "Player Info").unwrap();
        let label = locate_control_by_text(&doc, region, "Stronger Foot").unwrap();
        assert!(find_control(&doc, region, label, ControlQuery::Radio("Both"), 2).is_none());
    }

    #[test]
    fn test_find_control_respects_climb_depth() {
        let doc = sample();
        let region = find_section(&doc, "Player Info").unwrap();
        let label = locate_control_by_text(&doc, region, "Stronger Foot").unwrap();
        assert!(find_control(&doc, region, label, ControlQuery::Radio("Left"), 0).is_none());
    }

    #[test]
    fn test_full_text_joins_nested_text() {
        let doc = sample();
        let heading = descendants(&doc, doc.root())
            .into_iter()
            .filter(|node| doc.is_element(*node))
            .find(|node| full_text(&doc, *node) == "Ability" && own_text(&doc, *node).is_empty());
        assert!(heading.is_some());
    }
}
