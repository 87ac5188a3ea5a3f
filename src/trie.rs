//! Prefix index over location names.
//!
//! Names are keyed by their cleaned form: every character that is not an
//! ASCII letter or a space is dropped, the rest lowercased. Several
//! original names may share one cleaned key; all of them are kept.

use crate::graph::VertexId;
use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;

/// Cleaned trie key for a name.
///
/// # Examples
///
/// ```
/// use rastermap::trie::clean_name;
///
/// assert_eq!(clean_name("Soda Hall"), "soda hall");
/// assert_eq!(clean_name("Peet's Coffee & Tea"), "peets coffee  tea");
/// assert_eq!(clean_name("7-Eleven"), "eleven");
/// ```
pub fn clean_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphabetic() || *c == ' ')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[derive(Debug, Default)]
pub struct TrieNode {
    terminal: bool,
    children: FxHashMap<char, TrieNode>,
    /// Original names ending here, duplicates kept
    names: SmallVec<[String; 1]>,
    ids: FxHashSet<VertexId>,
}

impl TrieNode {
    /// True when at least one complete cleaned name ends at this node.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.ids.iter().copied()
    }

    fn child(&self, c: char) -> Option<&TrieNode> {
        self.children
            .get(&c)
            .or_else(|| self.children.get(&c.to_ascii_uppercase()))
    }

    /// Lazily yields every original name stored at or below this node.
    pub fn descendant_names(&self) -> NameIter<'_> {
        NameIter {
            stack: vec![self],
            current: [].iter(),
        }
    }
}

impl Drop for TrieNode {
    // Flatten the subtree so dropping a long key does not recurse per level.
    fn drop(&mut self) {
        let mut stack: Vec<TrieNode> = self.children.drain().map(|(_, node)| node).collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.drain().map(|(_, child)| child));
        }
    }
}

/// Depth-first walk over the names below a trie node.
///
/// Uses an explicit stack, so name length does not bound recursion depth.
pub struct NameIter<'a> {
    stack: Vec<&'a TrieNode>,
    current: std::slice::Iter<'a, String>,
}

impl<'a> Iterator for NameIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(name) = self.current.next() {
                return Some(name.as_str());
            }
            let node = self.stack.pop()?;
            self.stack.extend(node.children.values());
            if node.terminal {
                self.current = node.names.iter();
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct PrefixIndex {
    root: TrieNode,
    len: usize,
}

impl PrefixIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index `name` for vertex `id`.
    ///
    /// Names that clean to the empty string are stored on the root node.
    pub fn insert(&mut self, name: &str, id: VertexId) {
        let mut node = &mut self.root;
        for c in clean_name(name).chars() {
            node = node.children.entry(c).or_default();
        }
        node.terminal = true;
        node.names.push(name.to_string());
        node.ids.insert(id);
        self.len += 1;
    }

    /// Distinct original names whose cleaned form starts with the cleaned
    /// `prefix`, sorted. Empty when nothing matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use rastermap::trie::PrefixIndex;
    ///
    /// let mut index = PrefixIndex::new();
    /// index.insert("Top Dog", 1);
    /// index.insert("Tops", 2);
    /// index.insert("Cafe Strada", 3);
    ///
    /// assert_eq!(index.find_by_prefix("TOP"), vec!["Top Dog", "Tops"]);
    /// assert!(index.find_by_prefix("pizza").is_empty());
    /// ```
    pub fn find_by_prefix(&self, prefix: &str) -> Vec<String> {
        let Some(node) = self.walk(&clean_name(prefix)) else {
            return Vec::new();
        };

        let mut seen = FxHashSet::default();
        let mut names: Vec<String> = node
            .descendant_names()
            .filter(|name| seen.insert(*name))
            .map(str::to_string)
            .collect();
        names.sort_unstable();
        names
    }

    /// Node reached by an already cleaned key, if that path exists.
    pub fn find_exact(&self, cleaned: &str) -> Option<&TrieNode> {
        self.walk(cleaned)
    }

    /// Vertex ids stored under the exact cleaned form of `name`.
    pub fn ids_for(&self, name: &str) -> Vec<VertexId> {
        self.find_exact(&clean_name(name))
            .filter(|node| node.is_terminal())
            .map(|node| node.ids().collect())
            .unwrap_or_default()
    }

    fn walk(&self, key: &str) -> Option<&TrieNode> {
        key.chars().try_fold(&self.root, |node, c| node.child(c))
    }

    /// Number of `insert` calls.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
