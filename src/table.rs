//! String table: nested mapping of keys to UI strings.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One value in a string table: a leaf string or a nested table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Entry {
    Text(String),
    Table(StringTable),
}

/// A locale's full set of UI copy.
///
/// Keys are kept sorted, so serializing the same table always produces the same bytes.
/// Only strings and nested objects are accepted when deserializing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StringTable(BTreeMap<String, Entry>);

impl StringTable {
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Pretty-printed JSON with two-space indentation.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Entry)> {
        self.0.iter()
    }

    /// Number of leaf strings at any depth.
    pub fn leaf_count(&self) -> usize {
        self.0
            .values()
            .map(|entry| match entry {
                Entry::Text(_) => 1,
                Entry::Table(table) => table.leaf_count(),
            })
            .sum()
    }

    /// Leaves that are strings in both tables, matched key by key.
    ///
    /// Yields the display path, the string in `self` and the string in `other`.
    /// Keys missing from `other` or of a different kind are skipped; those are
    /// reported by [`StringTable::shape_differences`].
    pub fn paired_leaves<'a>(&'a self, other: &'a StringTable) -> Vec<(String, &'a str, &'a str)> {
        let mut out = Vec::new();
        self.pair_into(other, "", &mut out);
        out
    }

    fn pair_into<'a>(
        &'a self,
        other: &'a StringTable,
        prefix: &str,
        out: &mut Vec<(String, &'a str, &'a str)>,
    ) {
        for (key, entry) in &self.0 {
            let path = join_path(prefix, key);
            match (entry, other.0.get(key)) {
                (Entry::Text(mine), Some(Entry::Text(theirs))) => {
                    out.push((path, mine.as_str(), theirs.as_str()))
                }
                (Entry::Table(mine), Some(Entry::Table(theirs))) => {
                    mine.pair_into(theirs, &path, out)
                }
                _ => {}
            }
        }
    }

    /// Look up a leaf by its key segments, outermost first.
    pub fn leaf(&self, segments: &[&str]) -> Option<&str> {
        let (last, parents) = segments.split_last()?;
        let mut table = self;
        for segment in parents {
            match table.0.get(*segment)? {
                Entry::Table(inner) => table = inner,
                Entry::Text(_) => return None,
            }
        }
        match table.0.get(*last)? {
            Entry::Text(text) => Some(text),
            Entry::Table(_) => None,
        }
    }

    /// Whether `other` has exactly the same keys and nesting, ignoring leaf content.
    pub fn same_shape(&self, other: &StringTable) -> bool {
        self.shape_differences(other).is_empty()
    }

    /// Describe every structural difference between `self` (the reference) and `other`.
    ///
    /// Paths are dotted; a key that itself contains a dot is shown in brackets.
    /// An empty result means the shapes match.
    pub fn shape_differences(&self, other: &StringTable) -> Vec<String> {
        let mut diffs = Vec::new();
        self.diff_into(other, "", &mut diffs);
        diffs
    }

    fn diff_into(&self, other: &StringTable, prefix: &str, diffs: &mut Vec<String>) {
        for (key, entry) in &self.0 {
            let path = join_path(prefix, key);
            match (entry, other.0.get(key)) {
                (_, None) => diffs.push(format!("missing key '{}'", path)),
                (Entry::Text(_), Some(Entry::Text(_))) => {}
                (Entry::Table(expected), Some(Entry::Table(actual))) => {
                    expected.diff_into(actual, &path, diffs)
                }
                (Entry::Text(_), Some(Entry::Table(_))) => {
                    diffs.push(format!("key '{}' should be a string, found a table", path))
                }
                (Entry::Table(_), Some(Entry::Text(_))) => {
                    diffs.push(format!("key '{}' should be a table, found a string", path))
                }
            }
        }
        for key in other.0.keys().filter(|key| !self.0.contains_key(*key)) {
            diffs.push(format!("unexpected key '{}'", join_path(prefix, key)));
        }
    }
}

impl FromIterator<(String, Entry)> for StringTable {
    fn from_iter<I: IntoIterator<Item = (String, Entry)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

fn join_path(prefix: &str, key: &str) -> String {
    let segment = if key.contains('.') {
        format!("[{}]", key)
    } else {
        key.to_string()
    };
    if prefix.is_empty() {
        segment
    } else {
        format!("{}.{}", prefix, segment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn table(json: &str) -> StringTable {
        StringTable::from_json(json).expect("valid string table")
    }

    // ==================== Parsing Tests ====================

    #[test]
    fn test_parse_nested_table() {
        let t = table(r#"{"a": "Hello", "b": {"c": "World"}}"#);
        assert_eq!(t.len(), 2);
        assert_eq!(t.get("a"), Some(&Entry::Text("Hello".to_string())));
        assert_eq!(t.leaf(&["b", "c"]), Some("World"));
        assert_eq!(t.leaf_count(), 2);
    }

    #[test]
    fn test_parse_empty_object() {
        let t = table("{}");
        assert!(t.is_empty());
    }

    #[test]
    fn test_parse_rejects_numbers() {
        assert!(StringTable::from_json(r#"{"a": 1}"#).is_err());
    }

    #[test]
    fn test_parse_rejects_arrays() {
        assert!(StringTable::from_json(r#"{"a": ["x", "y"]}"#).is_err());
    }

    #[test]
    fn test_parse_rejects_null_and_bool() {
        assert!(StringTable::from_json(r#"{"a": null}"#).is_err());
        assert!(StringTable::from_json(r#"{"a": {"b": true}}"#).is_err());
    }

    #[test]
    fn test_parse_rejects_top_level_string() {
        assert!(StringTable::from_json(r#""just text""#).is_err());
    }

    // ==================== Serialization Tests ====================

    #[test]
    fn test_pretty_json_uses_two_space_indent() {
        let t = table(r#"{"b": {"c": "World"}, "a": "Hello"}"#);
        let pretty = t.to_pretty_json().expect("Should serialize");
        assert_eq!(
            pretty,
            "{\n  \"a\": \"Hello\",\n  \"b\": {\n    \"c\": \"World\"\n  }\n}"
        );
    }

    #[test]
    fn test_pretty_json_keeps_unicode() {
        let t = table(r#"{"greeting": "Grüß Gott"}"#);
        let pretty = t.to_pretty_json().expect("Should serialize");
        assert!(pretty.contains("Grüß Gott"));
    }

    // ==================== Leaf Tests ====================

    #[test]
    fn test_paired_leaves_walk_both_tables() {
        let source = table(r#"{"nav": {"home": "Home", "menu": {"open": "Open"}}, "title": "Site"}"#);
        let target = table(r#"{"nav": {"home": "Start", "menu": {"open": "Auf"}}, "title": "Seite"}"#);
        assert_eq!(
            source.paired_leaves(&target),
            vec![
                ("nav.home".to_string(), "Home", "Start"),
                ("nav.menu.open".to_string(), "Open", "Auf"),
                ("title".to_string(), "Site", "Seite"),
            ]
        );
    }

    #[test]
    fn test_paired_leaves_match_flat_dotted_keys() {
        let source = table(r#"{"cart.total": "{{amount}} total"}"#);
        let target = table(r#"{"cart.total": "Gesamt"}"#);
        assert_eq!(
            source.paired_leaves(&target),
            vec![("[cart.total]".to_string(), "{{amount}} total", "Gesamt")]
        );
    }

    #[test]
    fn test_paired_leaves_keep_flat_and_nested_apart() {
        let source = table(r#"{"a.b": "flat", "a": {"b": "nested"}}"#);
        let target = table(r#"{"a.b": "plat", "a": {"b": "imbrique"}}"#);
        let pairs = source.paired_leaves(&target);
        assert_eq!(pairs.len(), 2);
        assert!(pairs.contains(&("a.b".to_string(), "nested", "imbrique")));
        assert!(pairs.contains(&("[a.b]".to_string(), "flat", "plat")));
    }

    #[test]
    fn test_paired_leaves_skip_mismatched_kinds() {
        let source = table(r#"{"a": "Hello", "b": {"c": "World"}}"#);
        let target = table(r#"{"a": {"x": "Hola"}}"#);
        assert!(source.paired_leaves(&target).is_empty());
    }

    #[test]
    fn test_leaf_lookup_by_segments() {
        let t = table(r#"{"nav": {"home": "Home"}, "cart.total": "Total"}"#);
        assert_eq!(t.leaf(&["nav", "home"]), Some("Home"));
        assert_eq!(t.leaf(&["cart.total"]), Some("Total"));
        assert_eq!(t.leaf(&["cart", "total"]), None);
    }

    #[test]
    fn test_leaf_lookup_misses() {
        let t = table(r#"{"nav": {"home": "Home"}}"#);
        assert_eq!(t.leaf(&["nav"]), None);
        assert_eq!(t.leaf(&["nav", "home", "extra"]), None);
        assert_eq!(t.leaf(&["missing"]), None);
        assert_eq!(t.leaf(&[]), None);
    }

    // ==================== Shape Tests ====================

    #[test]
    fn test_same_shape_ignores_leaf_content() {
        let source = table(r#"{"a": "Hello", "b": {"c": "World"}}"#);
        let target = table(r#"{"a": "Bonjour", "b": {"c": "Monde"}}"#);
        assert!(source.same_shape(&target));
    }

    #[test]
    fn test_shape_reports_missing_key() {
        let source = table(r#"{"a": "Hello", "b": {"c": "World"}}"#);
        let target = table(r#"{"a": "Bonjour", "b": {}}"#);
        assert_eq!(source.shape_differences(&target), vec!["missing key 'b.c'"]);
    }

    #[test]
    fn test_shape_reports_unexpected_key() {
        let source = table(r#"{"a": "Hello"}"#);
        let target = table(r#"{"a": "Hola", "z": "extra"}"#);
        assert_eq!(source.shape_differences(&target), vec!["unexpected key 'z'"]);
    }

    #[test]
    fn test_shape_reports_kind_change() {
        let source = table(r#"{"a": "Hello", "b": {"c": "World"}}"#);
        let target = table(r#"{"a": {"x": "Hola"}, "b": "Mundo"}"#);
        let diffs = source.shape_differences(&target);
        assert_eq!(diffs.len(), 2);
        assert!(diffs[0].contains("'a' should be a string"));
        assert!(diffs[1].contains("'b' should be a table"));
    }

    #[test]
    fn test_shape_detects_translated_keys() {
        let source = table(r#"{"save": "Save"}"#);
        let target = table(r#"{"guardar": "Guardar"}"#);
        assert!(!source.same_shape(&target));
    }

    #[test]
    fn test_shape_distinguishes_flat_dotted_key_from_nesting() {
        let source = table(r#"{"a": {"b": "x"}}"#);
        let target = table(r#"{"a.b": "x"}"#);
        assert_eq!(
            source.shape_differences(&target),
            vec!["missing key 'a'", "unexpected key '[a.b]'"]
        );
    }

    // ==================== Property Tests ====================

    fn arb_table() -> impl Strategy<Value = StringTable> {
        let leaf = "[a-zA-Z ]{0,8}".prop_map(Entry::Text);
        let entry = leaf.prop_recursive(3, 24, 4, |inner| {
            prop::collection::btree_map("[a-z]{1,4}", inner, 0..4)
                .prop_map(|map| Entry::Table(StringTable(map)))
        });
        prop::collection::btree_map("[a-z]{1,4}", entry, 0..5).prop_map(StringTable)
    }

    fn relabel(table: &StringTable) -> StringTable {
        table
            .iter()
            .map(|(key, entry)| {
                let entry = match entry {
                    Entry::Text(text) => Entry::Text(format!("{}!", text.to_uppercase())),
                    Entry::Table(inner) => Entry::Table(relabel(inner)),
                };
                (key.clone(), entry)
            })
            .collect()
    }

    proptest! {
        #[test]
        fn prop_relabelled_leaves_keep_shape(t in arb_table()) {
            prop_assert!(t.same_shape(&relabel(&t)));
        }

        #[test]
        fn prop_pretty_json_parses_back(t in arb_table()) {
            let pretty = t.to_pretty_json().unwrap();
            prop_assert_eq!(StringTable::from_json(&pretty).unwrap(), t);
        }
    }
}
