//! Placeholder symbol table.
//!
//! Maps the `(name)` tokens of the post-URL setting to regular expression
//! fragments. The defaults are fixed; extensions override or add entries
//! through the `url_code` trigger hook, which receives a copy per pass.

/// Ordered placeholder name to regex fragment mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    entries: Vec<(String, String)>,
}

impl CodeTable {
    /// The default translation table of post-URL placeholders.
    pub fn defaults() -> Self {
        let entries = [
            ("year", "([0-9]{4})"),
            ("month", "([0-9]{1,2})"),
            ("day", "([0-9]{1,2})"),
            ("hour", "([0-9]{1,2})"),
            ("minute", "([0-9]{1,2})"),
            ("second", "([0-9]{1,2})"),
            ("id", "([0-9]+)"),
            ("author", "([^/]+)"),
            ("clean", "([^/]+)"),
            ("url", "([^/]+)"),
            ("feather", "([^/]+)"),
            ("feathers", "([^/]+)"),
        ];
        Self {
            entries: entries
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        }
    }

    /// Regex fragment for a placeholder name, if known.
    pub fn pattern(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Override an existing placeholder or add a new one.
    pub fn set(&mut self, name: impl Into<String>, fragment: impl Into<String>) {
        let name = name.into();
        let fragment = fragment.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some(entry) => entry.1 = fragment,
            None => self.entries.push((name, fragment)),
        }
    }

    /// Remove a placeholder.
    pub fn remove(&mut self, name: &str) {
        self.entries.retain(|(k, _)| k != name);
    }

    /// Substitute every `(name)` occurrence in `template` with its fragment.
    ///
    /// Unknown placeholders pass through literally, tolerating partial
    /// templates.
    pub fn expand(&self, template: &str) -> String {
        let mut expanded = template.to_string();
        for (name, fragment) in &self.entries {
            expanded = expanded.replace(&format!("({name})"), fragment);
        }
        expanded
    }
}
