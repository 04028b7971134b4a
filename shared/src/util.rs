use std::collections::HashSet;

/// Generate a unique entity id with a readable prefix, e.g. `table-9f0c…`.
///
/// The suffix is a dash-free UUID so chair ids (`tableId-seatIndex`) can
/// always be split at their last dash.
pub fn generate_id(prefix: &str) -> String {
    format!("{}-{}", prefix, uuid::Uuid::new_v4().simple())
}

/// Tracks ids already handed out for one entity kind.
///
/// A candidate id is kept only when it is non-empty and not yet taken;
/// otherwise a fresh id is generated.
#[derive(Debug, Default, Clone)]
pub struct IdRegistry {
    used: HashSet<String>,
}

impl IdRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-seeded with ids that already exist
    pub fn with_existing<'a>(ids: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            used: ids.into_iter().map(str::to_string).collect(),
        }
    }

    /// Claim `candidate` if usable, otherwise a generated id with `prefix`
    pub fn claim(&mut self, candidate: Option<&str>, prefix: &str) -> String {
        if let Some(id) = candidate
            && !id.is_empty()
            && self.used.insert(id.to_string())
        {
            return id.to_string();
        }
        loop {
            let id = generate_id(prefix);
            if self.used.insert(id.clone()) {
                return id;
            }
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.used.contains(id)
    }
}
