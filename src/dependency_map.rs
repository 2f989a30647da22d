use serde::ser::{Serialize, SerializeMap, Serializer};

/// Result of a folder scan: maps each scanned file to the files of the same folder it depends on
///
/// Keys are unique and kept in insertion order, so that the serialized output follows the
/// order in which the files were scanned. Files without dependencies are never recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyMap {
    entries: Vec<(String, Vec<String>)>,
}

impl DependencyMap {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record the dependencies of a file
    ///
    /// An empty list is not recorded; inserting an already present name replaces its list in place
    pub fn insert(&mut self, name: &str, dependencies: Vec<String>) {
        if dependencies.is_empty() {
            return;
        }
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| n == name) {
            entry.1 = dependencies;
        } else {
            self.entries.push((name.to_owned(), dependencies));
        }
    }

    pub fn get(&self, name: &str) -> Option<&Vec<String>> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, deps)| deps)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(n, deps)| (n.as_str(), deps.as_slice()))
    }

    /// Names of the recorded files, in scan order
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(n, _)| n.as_str()).collect()
    }
}

// serialized as a plain object, keys in insertion order
impl Serialize for DependencyMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, deps) in &self.entries {
            map.serialize_entry(name, deps)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use crate::dependency_map::DependencyMap;

    fn names(v: &[&str]) -> Vec<String> {
        v.iter().map(|&s| s.to_owned()).collect()
    }

    #[test]
    fn empty_map() {
        let map = DependencyMap::new();
        assert!(map.is_empty());
        assert_eq!(map.len(), 0);
        assert!(!map.contains("a.dll"));
        assert!(map.get("a.dll").is_none());
        assert!(map.names().is_empty());
    }

    #[test]
    fn empty_lists_are_not_recorded() {
        let mut map = DependencyMap::new();
        map.insert("a.dll", Vec::new());
        assert!(map.is_empty());
        assert!(!map.contains("a.dll"));
    }

    #[test]
    fn keeps_insertion_order() {
        let mut map = DependencyMap::new();
        map.insert("zlib.dll", names(&["b.dll"]));
        map.insert("a.dll", names(&["c.dll", "b.dll"]));
        map.insert("m.dll", names(&["a.dll"]));
        assert_eq!(map.names(), vec!["zlib.dll", "a.dll", "m.dll"]);
        assert_eq!(map.get("a.dll").unwrap(), &names(&["c.dll", "b.dll"]));

        let collected: Vec<(&str, usize)> = map.iter().map(|(n, d)| (n, d.len())).collect();
        assert_eq!(collected, vec![("zlib.dll", 1), ("a.dll", 2), ("m.dll", 1)]);
    }

    #[test]
    fn reinsert_replaces_in_place() {
        let mut map = DependencyMap::new();
        map.insert("a.dll", names(&["b.dll"]));
        map.insert("c.dll", names(&["b.dll"]));
        map.insert("a.dll", names(&["c.dll"]));
        assert_eq!(map.len(), 2);
        assert_eq!(map.names(), vec!["a.dll", "c.dll"]);
        assert_eq!(map.get("a.dll").unwrap(), &names(&["c.dll"]));
    }

    #[test]
    fn serializes_as_object() -> Result<(), serde_json::Error> {
        let mut map = DependencyMap::new();
        map.insert("b.dll", names(&["a.dll"]));
        map.insert("a.dll", names(&["b.dll", "c.dll"]));
        assert_eq!(
            serde_json::to_string(&map)?,
            r#"{"b.dll":["a.dll"],"a.dll":["b.dll","c.dll"]}"#
        );
        Ok(())
    }
}
