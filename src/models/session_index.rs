use std::collections::{BTreeMap, BTreeSet};

/// Session ids observed per project during one day, keyed by project path
///
/// Built once per run from `history.jsonl` and passed explicitly to the
/// collector. Iteration is ordered by project path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionIndex {
    sessions: BTreeMap<String, BTreeSet<String>>,
}

impl SessionIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a session for a project; duplicates collapse
    pub fn insert(&mut self, project: impl Into<String>, session_id: impl Into<String>) {
        self.sessions.entry(project.into()).or_default().insert(session_id.into());
    }

    /// Number of projects
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn sessions(&self, project: &str) -> Option<&BTreeSet<String>> {
        self.sessions.get(project)
    }

    pub fn projects(&self) -> impl Iterator<Item = &str> {
        self.sessions.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.sessions.iter().map(|(project, ids)| (project.as_str(), ids))
    }
}

impl<P, S> FromIterator<(P, S)> for SessionIndex
where
    P: Into<String>,
    S: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (P, S)>>(iter: I) -> Self {
        let mut index = SessionIndex::new();
        for (project, session_id) in iter {
            index.insert(project, session_id);
        }
        index
    }
}
