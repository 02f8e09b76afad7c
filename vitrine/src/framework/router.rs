/// An immutable table mapping URL paths to views.
///
/// Resolution is first-match-wins over the declared entries; any path with
/// no entry resolves to the designated fallback. Unmatched paths are not
/// errors.
#[derive(Clone, Debug)]
pub struct RouteTable<V> {
    entries: Vec<(String, V)>,
    fallback: V,
}

#[derive(Clone, Debug)]
pub struct RouteTableBuilder<V> {
    entries: Vec<(String, V)>,
}

impl<V> Default for RouteTableBuilder<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<V> RouteTableBuilder<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a path. Paths are static data wired once at startup, so a
    /// duplicate is a programming error and panics.
    pub fn route(mut self, path: &str, view: V) -> Self {
        let path = normalize(path).to_string();
        if self.entries.iter().any(|(declared, _)| *declared == path) {
            panic!("duplicate route path: {path}");
        }
        self.entries.push((path, view));
        self
    }

    /// Supplying the fallback view finishes the table.
    pub fn fallback(self, view: V) -> RouteTable<V> {
        RouteTable {
            entries: self.entries,
            fallback: view,
        }
    }
}

impl<V> RouteTable<V> {
    pub fn resolve(&self, path: &str) -> &V {
        let path = normalize(path);
        self.entries
            .iter()
            .find(|(declared, _)| declared == path)
            .map(|(_, view)| view)
            .unwrap_or(&self.fallback)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(path, view)| (path.as_str(), view))
    }

    pub fn fallback_view(&self) -> &V {
        &self.fallback
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// A single trailing slash is insignificant, except on the root path.
fn normalize(path: &str) -> &str {
    if path.len() > 1 {
        path.strip_suffix('/').unwrap_or(path)
    } else {
        path
    }
}
