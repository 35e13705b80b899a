// src/ordering/rules.rs

use std::collections::{BTreeMap, BTreeSet, HashSet};

use petgraph::graphmap::DiGraphMap;

/// Static precedence rules: `(a, b)` means `a` must come before `b` whenever
/// both appear in the same update.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    successors: BTreeMap<u32, BTreeSet<u32>>,
    len: usize,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the rule `before|after`. Duplicate rules are ignored.
    pub fn add(&mut self, before: u32, after: u32) {
        if self.successors.entry(before).or_default().insert(after) {
            self.len += 1;
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether `before|after` is one of the rules.
    pub fn requires(&self, before: u32, after: u32) -> bool {
        self.successors
            .get(&before)
            .is_some_and(|succ| succ.contains(&after))
    }

    /// Pages that must come after `page`, in ascending order.
    pub fn successors_of(&self, page: u32) -> impl Iterator<Item = u32> + '_ {
        self.successors
            .get(&page)
            .into_iter()
            .flat_map(|succ| succ.iter().copied())
    }

    /// Subgraph of rules whose both endpoints appear in `pages`.
    ///
    /// Edge direction: `before -> after`. Nodes are added in `pages` order so
    /// neighbour iteration is deterministic.
    pub fn induced(&self, pages: &[u32]) -> DiGraphMap<u32, ()> {
        let present: HashSet<u32> = pages.iter().copied().collect();
        let mut graph = DiGraphMap::new();

        for &page in pages {
            graph.add_node(page);
        }

        for &page in pages {
            for succ in self.successors_of(page).filter(|s| present.contains(s)) {
                graph.add_edge(page, succ, ());
            }
        }

        graph
    }
}

impl FromIterator<(u32, u32)> for RuleSet {
    fn from_iter<T: IntoIterator<Item = (u32, u32)>>(iter: T) -> Self {
        let mut rules = RuleSet::new();
        for (before, after) in iter {
            rules.add(before, after);
        }
        rules
    }
}

/// An ordered list of pages, each appearing at most once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Update {
    pages: Vec<u32>,
}

impl Update {
    /// Build an update, rejecting empty lists and repeated pages.
    pub fn new(pages: Vec<u32>) -> Result<Self, String> {
        if pages.is_empty() {
            return Err("update must contain at least one page".to_string());
        }

        let mut seen = HashSet::with_capacity(pages.len());
        if let Some(dup) = pages.iter().find(|p| !seen.insert(**p)) {
            return Err(format!("page {dup} appears more than once in update"));
        }

        Ok(Self { pages })
    }

    pub fn pages(&self) -> &[u32] {
        &self.pages
    }

    /// Element at index `len / 2`.
    pub fn middle(&self) -> u32 {
        middle_of(&self.pages)
    }
}

pub(crate) fn middle_of(pages: &[u32]) -> u32 {
    pages[pages.len() / 2]
}
