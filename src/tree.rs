//! Ordered key-value trees used as command requests and responses.
//!
//! A `Tree` holds string keys mapping to scalar leaves or nested trees.
//! Key order is insertion order (`serde_json` with `preserve_order`), so a
//! raw dump always reproduces the order in which a command populated its
//! response.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::{CommandError, CommandResult};

/// Structured input parameters for one command invocation.
pub type Request = Tree;

/// Structured output produced by executing a command.
pub type Response = Tree;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tree(Map<String, Value>);

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a tree from raw JSON text (the `-j` request blob).
    ///
    /// The top level must be a JSON object; anything else cannot form a
    /// request and is reported as a build failure.
    pub fn from_json_text(text: &str) -> CommandResult<Self> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| CommandError::RequestBuild(format!("invalid request JSON: {}", e)))?;
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(CommandError::RequestBuild(format!(
                "request must be a JSON object, got: {}",
                other
            ))),
        }
    }

    /// Insert a scalar leaf (string, number, bool, ...).
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Insert a nested tree.
    pub fn put_tree(&mut self, key: impl Into<String>, subtree: Tree) {
        self.0.insert(key.into(), Value::Object(subtree.0));
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// String leaf at `key`, or `MissingField` if absent or not a string.
    pub fn get_str(&self, key: &str) -> CommandResult<&str> {
        self.get(key)
            .and_then(Value::as_str)
            .ok_or_else(|| CommandError::MissingField(key.to_string()))
    }

    /// Integer leaf at `key`, or `MissingField` if absent or not an integer.
    pub fn get_i64(&self, key: &str) -> CommandResult<i64> {
        self.get(key)
            .and_then(Value::as_i64)
            .ok_or_else(|| CommandError::MissingField(key.to_string()))
    }

    /// Nested tree at `key`, or `MissingField` if absent or not an object.
    pub fn get_tree(&self, key: &str) -> CommandResult<Tree> {
        self.get(key)
            .and_then(Value::as_object)
            .cloned()
            .map(Tree)
            .ok_or_else(|| CommandError::MissingField(key.to_string()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Compact JSON dump; this is the raw output form.
impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(&self.0).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_put_and_get_str() {
        let mut tree = Tree::new();
        tree.put("version", "chaincli 0.1");
        assert_eq!(tree.get_str("version").unwrap(), "chaincli 0.1");
    }

    #[test]
    fn test_get_str_missing_key_fails() {
        let tree = Tree::new();
        let err = tree.get_str("version").unwrap_err();
        assert!(matches!(err, CommandError::MissingField(k) if k == "version"));
    }

    #[test]
    fn test_get_str_wrong_type_fails() {
        let mut tree = Tree::new();
        tree.put("count", 3);
        assert!(tree.get_str("count").is_err());
        assert_eq!(tree.get_i64("count").unwrap(), 3);
    }

    #[test]
    fn test_nested_tree_round_trip() {
        let mut inner = Tree::new();
        inner.put("height", 42);
        let mut tree = Tree::new();
        tree.put("chain", "main");
        tree.put_tree("head", inner.clone());
        assert_eq!(tree.get_tree("head").unwrap(), inner);
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn test_dump_preserves_insertion_order() {
        let mut tree = Tree::new();
        tree.put("zebra", 1);
        tree.put("alpha", 2);
        assert_eq!(tree.to_string(), r#"{"zebra":1,"alpha":2}"#);
    }

    #[test]
    fn test_from_json_text_object() {
        let tree = Tree::from_json_text(r#"{"block_num_or_id": "5"}"#).unwrap();
        assert_eq!(tree.get_str("block_num_or_id").unwrap(), "5");
    }

    #[test]
    fn test_from_json_text_empty_object() {
        let tree = Tree::from_json_text("{}").unwrap();
        assert!(tree.is_empty());
    }

    #[rstest]
    #[case::not_json("not json")]
    #[case::array("[1, 2]")]
    #[case::scalar("42")]
    fn test_from_json_text_rejects_non_objects(#[case] text: &str) {
        let err = Tree::from_json_text(text).unwrap_err();
        assert!(matches!(err, CommandError::RequestBuild(_)));
    }
}
