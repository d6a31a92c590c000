//! Route tree resolution.
//!
//! DESIGN
//! ======
//! The tree is flattened once into leaf entries, each carrying its full
//! pattern, the chain of views from the root layout down, and its effective
//! access class (inherited from the nearest ancestor that sets one).
//!
//! SPECIFICITY
//! ===========
//! Candidates without a catch-all beat those with one. Among the rest,
//! patterns compare segment by segment: static (3) beats `:param` (2). A
//! catch-all `*` matches the remaining segments, including none.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use std::collections::BTreeMap;

use super::routes::ViewId;

/// Who may enter a route.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Access {
    /// Requires a signed-in user.
    #[default]
    Protected,
    /// Only for visitors without a session.
    GuestOnly,
}

/// One node of the route tree.
#[derive(Clone, Debug)]
pub struct RouteDef {
    pub path: String,
    pub view: ViewId,
    pub access: Option<Access>,
    pub children: Vec<RouteDef>,
}

impl RouteDef {
    pub fn new(path: &str, view: ViewId) -> Self {
        Self { path: path.to_owned(), view, access: None, children: Vec::new() }
    }

    #[must_use]
    pub fn protected(mut self) -> Self {
        self.access = Some(Access::Protected);
        self
    }

    #[must_use]
    pub fn guest_only(mut self) -> Self {
        self.access = Some(Access::GuestOnly);
        self
    }

    #[must_use]
    pub fn children(mut self, children: Vec<RouteDef>) -> Self {
        self.children = children;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
    CatchAll,
}

impl Segment {
    fn score(&self) -> u8 {
        match self {
            Self::Static(_) => 3,
            Self::Param(_) => 2,
            Self::CatchAll => 1,
        }
    }
}

fn parse_pattern(pattern: &str) -> Vec<Segment> {
    split_path(pattern)
        .map(|seg| {
            if seg == "*" {
                Segment::CatchAll
            } else if let Some(name) = seg.strip_prefix(':') {
                Segment::Param(name.to_owned())
            } else {
                Segment::Static(seg.to_owned())
            }
        })
        .collect()
}

fn split_path(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Strip query and fragment, collapse duplicate slashes, drop a trailing slash.
pub fn normalize_path(path: &str) -> String {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let joined = split_path(&path[..end]).collect::<Vec<_>>().join("/");
    format!("/{joined}")
}

#[derive(Clone, Debug)]
struct Leaf {
    pattern: String,
    segments: Vec<Segment>,
    chain: Vec<ViewId>,
    access: Access,
}

impl Leaf {
    fn has_catch_all(&self) -> bool {
        self.segments.contains(&Segment::CatchAll)
    }

    fn matches(&self, parts: &[&str]) -> Option<BTreeMap<String, String>> {
        let mut params = BTreeMap::new();
        for (idx, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::CatchAll => return Some(params),
                Segment::Static(s) => {
                    if parts.get(idx) != Some(&s.as_str()) {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    let value = parts.get(idx)?;
                    params.insert(name.clone(), (*value).to_owned());
                }
            }
        }
        (parts.len() == self.segments.len()).then_some(params)
    }

    fn specificity(&self) -> (bool, Vec<u8>) {
        (!self.has_catch_all(), self.segments.iter().map(Segment::score).collect())
    }
}

/// Result of resolving a path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteMatch {
    /// The requested path, query included.
    pub path: String,
    pub pattern: String,
    /// Views from the outermost layout to the leaf.
    pub chain: Vec<ViewId>,
    pub params: BTreeMap<String, String>,
    pub access: Access,
}

impl RouteMatch {
    pub fn leaf(&self) -> ViewId {
        self.chain.last().copied().unwrap_or(ViewId::NotFound)
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// Flattened, resolvable route tree.
#[derive(Clone, Debug)]
pub struct RouteTable {
    leaves: Vec<Leaf>,
}

impl RouteTable {
    pub fn new(routes: Vec<RouteDef>) -> Self {
        let mut leaves = Vec::new();
        for route in &routes {
            flatten(route, "", &[], Access::default(), &mut leaves);
        }
        Self { leaves }
    }

    /// Most specific route for `path`, or `None` if nothing matches.
    pub fn resolve(&self, path: &str) -> Option<RouteMatch> {
        let normalized = normalize_path(path);
        let parts: Vec<&str> = split_path(&normalized).collect();
        self.leaves
            .iter()
            .filter_map(|leaf| leaf.matches(&parts).map(|params| (leaf, params)))
            .max_by(|(a, _), (b, _)| a.specificity().cmp(&b.specificity()))
            .map(|(leaf, params)| RouteMatch {
                path: path.to_owned(),
                pattern: leaf.pattern.clone(),
                chain: leaf.chain.clone(),
                params,
                access: leaf.access,
            })
    }
}

fn flatten(route: &RouteDef, prefix: &str, chain: &[ViewId], inherited: Access, out: &mut Vec<Leaf>) {
    let pattern = format!("{}/{}", prefix.trim_end_matches('/'), route.path.trim_start_matches('/'));
    let access = route.access.unwrap_or(inherited);
    let mut chain = chain.to_vec();
    chain.push(route.view);
    if route.children.is_empty() {
        let pattern = normalize_path(&pattern);
        out.push(Leaf { segments: parse_pattern(&pattern), pattern, chain, access });
    } else {
        for child in &route.children {
            flatten(child, &pattern, &chain, access, out);
        }
    }
}
