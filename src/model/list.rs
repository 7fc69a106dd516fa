//! List nodes.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// An ordered, unordered, or checklist list of plain-text items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ListSpec", rename_all = "camelCase")]
pub struct List {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    class_name: Option<String>,

    items: Vec<String>,

    #[serde(rename = "type")]
    kind: ListKind,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    checked: Vec<bool>,
}

impl List {
    /// Create a list of the given kind.
    pub fn new<S: Into<String>>(items: impl IntoIterator<Item = S>, kind: ListKind) -> Self {
        Self {
            id: None,
            class_name: None,
            items: items.into_iter().map(Into::into).collect(),
            kind,
            checked: Vec::new(),
        }
    }

    /// Create an unordered list.
    pub fn unordered<S: Into<String>>(items: impl IntoIterator<Item = S>) -> Self {
        Self::new(items, ListKind::Unordered)
    }

    /// Create an ordered list.
    pub fn ordered<S: Into<String>>(items: impl IntoIterator<Item = S>) -> Self {
        Self::new(items, ListKind::Ordered)
    }

    /// Create a checklist.
    ///
    /// `checked` may be shorter than `items`; the remaining items are
    /// unchecked. More flags than items is rejected.
    pub fn checklist<S: Into<String>>(
        items: impl IntoIterator<Item = S>,
        checked: Vec<bool>,
    ) -> Result<Self> {
        Self::new(items, ListKind::Checklist).with_checked(checked)
    }

    /// Replace the checked flags.
    pub fn with_checked(mut self, checked: Vec<bool>) -> Result<Self> {
        if checked.len() > self.items.len() {
            return Err(Error::ChecklistMismatch {
                items: self.items.len(),
                checked: checked.len(),
            });
        }
        self.checked = checked;
        Ok(self)
    }

    /// Set the element id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set an extra CSS class.
    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn kind(&self) -> ListKind {
        self.kind
    }

    /// Whether the item at `index` is checked. Missing flags read as false.
    pub fn is_checked(&self, index: usize) -> bool {
        self.checked.get(index).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// List type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    Ordered,
    #[default]
    Unordered,
    Checklist,
}

impl ListKind {
    /// Lowercase name, used in CSS class names.
    pub fn as_str(self) -> &'static str {
        match self {
            ListKind::Ordered => "ordered",
            ListKind::Unordered => "unordered",
            ListKind::Checklist => "checklist",
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListSpec {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    class_name: Option<String>,
    items: Vec<String>,
    #[serde(default, rename = "type")]
    kind: ListKind,
    #[serde(default)]
    checked: Vec<bool>,
}

impl TryFrom<ListSpec> for List {
    type Error = Error;

    fn try_from(spec: ListSpec) -> Result<Self> {
        let mut list = List::new(spec.items, spec.kind).with_checked(spec.checked)?;
        list.id = spec.id;
        list.class_name = spec.class_name;
        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checklist() {
        let list = List::checklist(["Task 1", "Task 2"], vec![true, false]).unwrap();
        assert_eq!(list.kind(), ListKind::Checklist);
        assert_eq!(list.items(), ["Task 1", "Task 2"]);
        assert!(list.is_checked(0));
        assert!(!list.is_checked(1));
    }

    #[test]
    fn test_short_checked_flags_default_false() {
        let list = List::checklist(["a", "b", "c"], vec![true]).unwrap();
        assert!(list.is_checked(0));
        assert!(!list.is_checked(1));
        assert!(!list.is_checked(2));
    }

    #[test]
    fn test_excess_checked_flags_rejected() {
        let err = List::checklist(["a"], vec![true, true]).unwrap_err();
        assert!(matches!(
            err,
            Error::ChecklistMismatch {
                items: 1,
                checked: 2
            }
        ));
    }

    #[test]
    fn test_json_defaults_to_unordered() {
        let list: List = serde_json::from_str(r#"{"items":["x"]}"#).unwrap();
        assert_eq!(list.kind(), ListKind::Unordered);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_json_type_key() {
        let list = List::ordered(["one"]);
        let json = serde_json::to_string(&list).unwrap();
        assert!(json.contains(r#""type":"ordered""#));
        assert!(!json.contains("checked"));
    }
}
