//! Bounded edit-distance search over a [`PrefixTree`].
//!
//! The Levenshtein table against the target is built one row per tree depth
//! while walking down the tree, so words sharing a prefix share the rows for
//! that prefix. A subtree is skipped as soon as every cell of the current row
//! exceeds the bound: appending characters can never bring the distance back
//! under the row minimum.

use crate::trie::{NodeId, PrefixTree};

/// Every stored word within `max_distance` edits of `target`.
///
/// Results come out in tree order, but callers should treat them as a set.
/// A bound of zero is an exact membership test.
pub fn search(tree: &PrefixTree, target: &str, max_distance: usize) -> Vec<String> {
    if max_distance == 0 {
        return if tree.contains(target) {
            vec![target.to_string()]
        } else {
            Vec::new()
        };
    }

    let target: Vec<char> = target.chars().collect();
    let n = target.len();
    let root_row: Vec<usize> = (0..=n).collect();

    // each entry owns the row of its node, so no state is shared between branches
    let mut stack: Vec<(NodeId, Vec<usize>)> = vec![(tree.root(), root_row)];
    let mut matches = Vec::new();

    while let Some((node, row)) = stack.pop() {
        if row[n] <= max_distance && tree.is_terminal(node) {
            matches.push(tree.word_at(node));
        }

        let closest = row.iter().copied().min().unwrap_or(usize::MAX);
        if closest > max_distance {
            continue;
        }

        // reversed so children pop in character order
        let children: Vec<(char, NodeId)> = tree.children(node).collect();
        for &(ch, child) in children.iter().rev() {
            stack.push((child, next_row(&target, ch, &row)));
        }
    }
    matches
}

/// The row for a node reached over edge `ch`, computed from its parent's row.
fn next_row(target: &[char], ch: char, above: &[usize]) -> Vec<usize> {
    let mut row = Vec::with_capacity(above.len());
    row.push(above[0] + 1);
    for j in 1..=target.len() {
        let value = if target[j - 1] == ch {
            above[j - 1]
        } else {
            1 + above[j - 1].min(above[j]).min(row[j - 1])
        };
        row.push(value);
    }
    row
}
