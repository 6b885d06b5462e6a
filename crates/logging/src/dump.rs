//! crates/logging/src/dump.rs
//! Structured payload model for variable and result dumps.
//!
//! Dumping is defined over an explicit field-enumeration capability rather
//! than runtime introspection: anything that wants to appear in a dump
//! converts itself into a [`DumpValue`] tree via [`ToDump`]. Types expose
//! their public data fields as a [`DumpValue::Record`]; behaviour never
//! appears in a dump.

use std::collections::{BTreeMap, HashMap};
use std::fmt::Write as _;

/// A renderable snapshot of a value.
#[derive(Clone, Debug, PartialEq)]
pub enum DumpValue {
    /// A leaf value, already rendered to text.
    Scalar(String),
    /// An ordered, unkeyed sequence.
    List(Vec<DumpValue>),
    /// Named public data fields, in declaration order.
    Record(Vec<(String, DumpValue)>),
}

impl DumpValue {
    /// Creates a scalar leaf from anything displayable.
    #[must_use]
    pub fn scalar(value: impl ToString) -> Self {
        Self::Scalar(value.to_string())
    }

    /// Reports whether this value is a sequence of plain leaves.
    ///
    /// Such sequences render as a quoted, comma-joined list instead of a
    /// full nested dump - a readability optimisation, not a semantic
    /// difference.
    #[must_use]
    pub fn is_flat_list(&self) -> bool {
        match self {
            Self::List(items) => items.iter().all(|item| matches!(item, Self::Scalar(_))),
            Self::Scalar(_) | Self::Record(_) => false,
        }
    }

    /// Renders the value, flattening simple sequences.
    ///
    /// A list of plain leaves becomes `'a', 'b', 'c'`; everything else gets
    /// the full recursive structured rendering.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::{DumpValue, ToDump};
    ///
    /// assert_eq!(vec![1, 2, 3].to_dump().render(), "'1', '2', '3'");
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        if self.is_flat_list() {
            self.render_flat()
        } else {
            match self {
                Self::Scalar(text) => text.clone(),
                Self::List(_) | Self::Record(_) => self.render_nested(),
            }
        }
    }

    /// Renders the value as a quoted, comma-joined list of its leaves, in
    /// traversal order.
    #[must_use]
    pub fn render_flat(&self) -> String {
        let mut leaves = Vec::new();
        self.collect_leaves(&mut leaves);
        leaves
            .iter()
            .map(|leaf| format!("'{leaf}'"))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Renders the full recursive structured listing.
    #[must_use]
    pub fn render_nested(&self) -> String {
        let mut out = String::new();
        self.write_nested(&mut out, 0);
        out
    }

    fn collect_leaves<'a>(&'a self, leaves: &mut Vec<&'a str>) {
        match self {
            Self::Scalar(text) => leaves.push(text),
            Self::List(items) => {
                for item in items {
                    item.collect_leaves(leaves);
                }
            }
            Self::Record(fields) => {
                for (_, value) in fields {
                    value.collect_leaves(leaves);
                }
            }
        }
    }

    fn write_nested(&self, out: &mut String, level: usize) {
        match self {
            Self::Scalar(text) => out.push_str(text),
            Self::List(items) => {
                Self::write_block(out, level, items.iter().enumerate().map(|(index, value)| {
                    (index.to_string(), value)
                }));
            }
            Self::Record(fields) => {
                Self::write_block(
                    out,
                    level,
                    fields.iter().map(|(name, value)| (name.clone(), value)),
                );
            }
        }
    }

    fn write_block<'a>(
        out: &mut String,
        level: usize,
        entries: impl Iterator<Item = (String, &'a Self)>,
    ) {
        let pad = "    ".repeat(level);
        out.push_str("(\n");
        for (key, value) in entries {
            let _ = write!(out, "{pad}    [{key}] => ");
            value.write_nested(out, level + 1);
            out.push('\n');
        }
        let _ = write!(out, "{pad})");
    }
}

/// Conversion of a value into its [`DumpValue`] snapshot.
///
/// Implement this on application types by listing public data fields as a
/// [`DumpValue::Record`]; collection and scalar impls are provided.
pub trait ToDump {
    /// Converts the value into a renderable dump tree.
    fn to_dump(&self) -> DumpValue;
}

impl ToDump for DumpValue {
    fn to_dump(&self) -> DumpValue {
        self.clone()
    }
}

macro_rules! impl_scalar_to_dump {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl ToDump for $ty {
                fn to_dump(&self) -> DumpValue {
                    DumpValue::Scalar(self.to_string())
                }
            }
        )+
    };
}

impl_scalar_to_dump!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, bool, char, String,
);

impl ToDump for &str {
    fn to_dump(&self) -> DumpValue {
        DumpValue::Scalar((*self).to_owned())
    }
}

impl ToDump for () {
    fn to_dump(&self) -> DumpValue {
        DumpValue::Scalar(String::new())
    }
}

impl<T: ToDump> ToDump for Option<T> {
    fn to_dump(&self) -> DumpValue {
        match self {
            Some(value) => value.to_dump(),
            None => DumpValue::Scalar(String::new()),
        }
    }
}

impl<T: ToDump> ToDump for &T {
    fn to_dump(&self) -> DumpValue {
        (*self).to_dump()
    }
}

impl<T: ToDump> ToDump for [T] {
    fn to_dump(&self) -> DumpValue {
        DumpValue::List(self.iter().map(ToDump::to_dump).collect())
    }
}

impl<T: ToDump, const N: usize> ToDump for [T; N] {
    fn to_dump(&self) -> DumpValue {
        self.as_slice().to_dump()
    }
}

impl<T: ToDump> ToDump for Vec<T> {
    fn to_dump(&self) -> DumpValue {
        self.as_slice().to_dump()
    }
}

impl<V: ToDump> ToDump for BTreeMap<String, V> {
    fn to_dump(&self) -> DumpValue {
        DumpValue::Record(
            self.iter()
                .map(|(key, value)| (key.clone(), value.to_dump()))
                .collect(),
        )
    }
}

impl<V: ToDump> ToDump for HashMap<String, V> {
    fn to_dump(&self) -> DumpValue {
        // Sorted for deterministic rendering.
        let mut fields: Vec<(String, DumpValue)> = self
            .iter()
            .map(|(key, value)| (key.clone(), value.to_dump()))
            .collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));
        DumpValue::Record(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_sequence_flattens() {
        let dump = vec![1, 2, 3].to_dump();
        assert!(dump.is_flat_list());
        assert_eq!(dump.render(), "'1', '2', '3'");
    }

    #[test]
    fn nested_sequence_renders_recursively() {
        let dump = vec![vec![1, 2], vec![3]].to_dump();
        assert!(!dump.is_flat_list());
        let rendered = dump.render();
        assert_eq!(
            rendered,
            "(\n    [0] => (\n        [0] => 1\n        [1] => 2\n    )\n    [1] => (\n        [0] => 3\n    )\n)"
        );
    }

    #[test]
    fn record_renders_field_names() {
        let dump = DumpValue::Record(vec![
            ("id".to_owned(), DumpValue::scalar(7)),
            ("name".to_owned(), DumpValue::scalar("widget")),
        ]);
        assert_eq!(dump.render(), "(\n    [id] => 7\n    [name] => widget\n)");
    }

    #[test]
    fn scalar_renders_bare() {
        assert_eq!(42.to_dump().render(), "42");
        assert_eq!("ready".to_dump().render(), "ready");
    }

    #[test]
    fn flat_rendering_quotes_every_leaf() {
        let dump = vec!["a".to_owned(), "b".to_owned()].to_dump();
        assert_eq!(dump.render_flat(), "'a', 'b'");
    }

    #[test]
    fn flat_rendering_walks_nested_leaves_in_order() {
        let dump = vec![vec![1, 2], vec![3]].to_dump();
        assert_eq!(dump.render_flat(), "'1', '2', '3'");
    }

    #[test]
    fn option_none_renders_empty() {
        let value: Option<u32> = None;
        assert_eq!(value.to_dump(), DumpValue::Scalar(String::new()));
        assert_eq!(Some(5).to_dump(), DumpValue::Scalar("5".to_owned()));
    }

    #[test]
    fn hash_map_fields_are_sorted() {
        let mut map = HashMap::new();
        map.insert("b".to_owned(), 2);
        map.insert("a".to_owned(), 1);
        assert_eq!(map.to_dump().render(), "(\n    [a] => 1\n    [b] => 2\n)");
    }

    #[test]
    fn empty_list_is_flat_and_renders_empty() {
        let dump = Vec::<u32>::new().to_dump();
        assert!(dump.is_flat_list());
        assert_eq!(dump.render(), "");
    }
}
