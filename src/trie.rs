//! Append-only prefix tree holding the vocabulary.
//!
//! Nodes live in a single arena and are addressed by [`NodeId`]. Each node owns
//! its outgoing edges (kept sorted by character so enumeration order is
//! reproducible) and keeps a non-owning index back to its parent.

use std::collections::BTreeMap;
use std::collections::btree_map;

/// Handle to a node of a [`PrefixTree`]. Only meaningful for the tree that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

const ROOT: NodeId = NodeId(0);

#[derive(Debug, Clone, Default)]
struct Node {
    children: BTreeMap<char, NodeId>,
    parent: Option<NodeId>,
    label: Option<char>,
    terminal: bool,
}

#[derive(Debug, Clone)]
pub struct PrefixTree {
    nodes: Vec<Node>,
    size: usize,
}

impl Default for PrefixTree {
    fn default() -> Self {
        Self::new()
    }
}

impl PrefixTree {
    pub fn new() -> Self {
        PrefixTree {
            nodes: vec![Node::default()],
            size: 0,
        }
    }

    pub fn root(&self) -> NodeId {
        ROOT
    }

    /// Number of distinct words stored.
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Adds `word`, creating any missing edges. Returns `true` only the first
    /// time a word becomes terminal. The empty string is never stored.
    pub fn insert(&mut self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }

        let mut node = ROOT;
        for ch in word.chars() {
            node = match self.nodes[node.0].children.get(&ch) {
                Some(&next) => next,
                None => {
                    let next = NodeId(self.nodes.len());
                    self.nodes.push(Node {
                        children: BTreeMap::new(),
                        parent: Some(node),
                        label: Some(ch),
                        terminal: false,
                    });
                    self.nodes[node.0].children.insert(ch, next);
                    next
                }
            };
        }

        let last = &mut self.nodes[node.0];
        if last.terminal {
            false
        } else {
            last.terminal = true;
            self.size += 1;
            true
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.lookup(word).is_some_and(|node| self.is_terminal(node))
    }

    /// True if some stored word starts with `prefix` (terminal or not).
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.lookup(prefix).is_some()
    }

    /// Follows `path` from the root; `None` as soon as the path leaves the tree.
    pub fn lookup(&self, path: &str) -> Option<NodeId> {
        path.chars().try_fold(ROOT, |node, ch| self.child(node, ch))
    }

    pub fn child(&self, node: NodeId, ch: char) -> Option<NodeId> {
        self.nodes[node.0].children.get(&ch).copied()
    }

    /// Outgoing edges of `node`, in ascending character order.
    pub fn children(&self, node: NodeId) -> impl Iterator<Item = (char, NodeId)> + '_ {
        self.nodes[node.0]
            .children
            .iter()
            .map(|(&ch, &child)| (ch, child))
    }

    pub fn is_terminal(&self, node: NodeId) -> bool {
        self.nodes[node.0].terminal
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent
    }

    /// Rebuilds the string spelled by the edges from the root down to `node`.
    pub fn word_at(&self, node: NodeId) -> String {
        let mut labels = Vec::new();
        let mut current = Some(node);
        while let Some(id) = current {
            let node = &self.nodes[id.0];
            if let Some(label) = node.label {
                labels.push(label);
            }
            current = node.parent;
        }
        labels.iter().rev().collect()
    }

    /// Lazily walks every word at or below `node`, depth first, edges in
    /// character order. `prefix` is the string spelled by `node` and is
    /// prepended to every yielded word.
    pub fn enumerate(&self, node: NodeId, prefix: &str) -> Words<'_> {
        let start = &self.nodes[node.0];
        Words {
            tree: self,
            stack: vec![start.children.iter()],
            buf: prefix.to_string(),
            pending: start.terminal.then(|| prefix.to_string()),
        }
    }

    /// Every stored word in sorted order.
    pub fn iter(&self) -> Words<'_> {
        self.enumerate(ROOT, "")
    }

    // The vocabulary is append-only. The removal family exists so callers
    // coming from a general collection API get an explicit "nothing removed".

    /// Always `false`; words are never removed.
    pub fn remove(&mut self, _word: &str) -> bool {
        false
    }

    /// Always `false`; words are never removed.
    pub fn remove_all<I, S>(&mut self, _words: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        false
    }

    /// Always `false`; words are never removed.
    pub fn retain_all<I, S>(&mut self, _words: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        false
    }

    /// Does nothing; words are never removed.
    pub fn clear(&mut self) {}
}

impl<S: AsRef<str>> Extend<S> for PrefixTree {
    fn extend<I: IntoIterator<Item = S>>(&mut self, words: I) {
        for word in words {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for PrefixTree {
    fn from_iter<I: IntoIterator<Item = S>>(words: I) -> Self {
        let mut tree = PrefixTree::new();
        tree.extend(words);
        tree
    }
}

impl<'a> IntoIterator for &'a PrefixTree {
    type Item = String;
    type IntoIter = Words<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Depth-first iterator over the words below one node. See [`PrefixTree::enumerate`].
#[derive(Debug, Clone)]
pub struct Words<'a> {
    tree: &'a PrefixTree,
    stack: Vec<btree_map::Iter<'a, char, NodeId>>,
    buf: String,
    pending: Option<String>,
}

impl Iterator for Words<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if let Some(word) = self.pending.take() {
            return Some(word);
        }

        loop {
            let edge = match self.stack.last_mut() {
                Some(edges) => edges.next(),
                None => return None,
            };

            match edge {
                Some((&ch, &child)) => {
                    let node = &self.tree.nodes[child.0];
                    self.buf.push(ch);
                    self.stack.push(node.children.iter());
                    if node.terminal {
                        return Some(self.buf.clone());
                    }
                }
                None => {
                    self.stack.pop();
                    // the starting frame has no edge char of its own in `buf`
                    if !self.stack.is_empty() {
                        self.buf.pop();
                    }
                }
            }
        }
    }
}
