use fuzzy_matcher::{skim::SkimMatcherV2, FuzzyMatcher};

use super::{IndexItem, Indexable};

// The maximum number of results returned by a search.
pub const SEARCH_LIMIT: usize = 25;

// The switcher index, plus the scratch buffers reused across searches.
pub struct Index {
    // The indexed items. `None` until the first build is applied.
    items: Option<Vec<IndexItem>>,
    // The positions in `items` of the last search results.
    hits: Vec<usize>,
    // The fuzzy match scores of the last search, paired with positions.
    scored: Vec<(i64, usize)>,
    matcher: SkimMatcherV2,
}

impl Default for Index {
    fn default() -> Self {
        Self::new()
    }
}

impl Index {
    pub fn new() -> Self {
        Self {
            items: None,
            hits: Vec::with_capacity(SEARCH_LIMIT),
            scored: Vec::new(),
            matcher: SkimMatcherV2::default().ignore_case(),
        }
    }

    pub fn is_built(&self) -> bool {
        self.items.is_some()
    }

    pub fn items(&self) -> &[IndexItem] {
        self.items.as_deref().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    // Swaps in a freshly built set of items.
    pub fn replace(&mut self, items: Vec<IndexItem>) {
        self.hits.clear();
        self.items = Some(items);
    }

    // Fuzzy matches `query` against every item, best matches first. Items with
    // equal scores keep their index order.
    pub fn search(&mut self, query: &str) -> Matches<'_> {
        self.hits.clear();

        let items = match &self.items {
            Some(items) if !query.is_empty() => items,
            _ => return Matches::empty(),
        };

        self.scored.clear();
        for (i, item) in items.iter().enumerate() {
            if let Some(score) = self.matcher.fuzzy_match(item.search_str(), query) {
                self.scored.push((score, i));
            }
        }

        self.scored.sort_by(|a, b| b.0.cmp(&a.0));
        self.hits
            .extend(self.scored.iter().take(SEARCH_LIMIT).map(|&(_, i)| i));

        Matches {
            items,
            hits: &self.hits,
        }
    }
}

// The results of a search. Borrows the index, so it must be dropped before the
// next search.
#[derive(Clone, Copy)]
pub struct Matches<'a> {
    items: &'a [IndexItem],
    hits: &'a [usize],
}

impl<'a> Matches<'a> {
    fn empty() -> Self {
        Self {
            items: &[],
            hits: &[],
        }
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn get(&self, n: usize) -> Option<&'a IndexItem> {
        let items = self.items;
        self.hits.get(n).map(|&i| &items[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a IndexItem> + 'a {
        let (items, hits) = (self.items, self.hits);
        hits.iter().map(move |&i| &items[i])
    }
}

impl<'a> IntoIterator for Matches<'a> {
    type Item = &'a IndexItem;
    type IntoIter = Box<dyn Iterator<Item = &'a IndexItem> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
