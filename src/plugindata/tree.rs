use std::fmt;

/// Key of a table member: `["Name"]` or `[1]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Name(String),
    Index(usize),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Name(name) => write!(f, "[\"{}\"]", escape(name)),
            Key::Index(i) => write!(f, "[{i}]"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Str(String),
    Table(Table),
}

/// Ordered table members; printed in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    members: Vec<(Key, Value)>,
    bare_last: bool,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// A list: members keyed `[1]`, `[2]`, ... in iteration order.
    pub fn list<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        let members = values
            .into_iter()
            .enumerate()
            .map(|(i, v)| (Key::Index(i + 1), v))
            .collect();
        Self {
            members,
            bare_last: false,
        }
    }

    pub fn field(mut self, name: &str, value: Value) -> Self {
        self.members.push((Key::Name(name.to_string()), value));
        self
    }

    pub fn string(self, name: &str, value: &str) -> Self {
        self.field(name, Value::Str(value.to_string()))
    }

    /// Print the last member without a separating comma.
    pub fn bare_last(mut self) -> Self {
        self.bare_last = true;
        self
    }
}

/// Escape a string scalar. Backslashes go first so the quote escapes stay intact.
pub fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Print `root` as a `return { ... }` chunk, one tab of indent per depth.
pub fn to_chunk(root: &Table) -> String {
    let mut lines = vec!["return".to_string(), "{".to_string()];
    write_members(&mut lines, root, 1);
    lines.push("}".to_string());
    lines.join("\n")
}

fn write_members(lines: &mut Vec<String>, table: &Table, depth: usize) {
    let indent = "\t".repeat(depth);
    let last = table.members.len().saturating_sub(1);
    for (i, (key, value)) in table.members.iter().enumerate() {
        let comma = if table.bare_last && i == last { "" } else { "," };
        match value {
            Value::Str(s) => lines.push(format!("{indent}{key} = \"{}\"{comma}", escape(s))),
            Value::Table(inner) => {
                lines.push(format!("{indent}{key} ="));
                lines.push(format!("{indent}{{"));
                write_members(lines, inner, depth + 1);
                lines.push(format!("{indent}}}{comma}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_handles_quotes_and_backslashes() {
        assert_eq!(escape(r#"He said "hi""#), r#"He said \"hi\""#);
        assert_eq!(escape(r"C:\path"), r"C:\\path");
        // Backslash first: `\"` must become `\\\"`, not `\\\\"`.
        assert_eq!(escape(r#"\""#), r#"\\\""#);
    }

    #[test]
    fn escape_passes_newlines_through() {
        assert_eq!(escape("a\nb\tc"), "a\nb\tc");
    }

    #[test]
    fn keys_print_as_bracketed_names_or_indices() {
        assert_eq!(Key::Name("Songs".into()).to_string(), "[\"Songs\"]");
        assert_eq!(Key::Index(3).to_string(), "[3]");
    }

    #[test]
    fn list_numbers_from_one() {
        let t = Table::list(vec![Value::Str("a".into()), Value::Str("b".into())]);
        assert_eq!(
            to_chunk(&t),
            "return\n{\n\t[1] = \"a\",\n\t[2] = \"b\",\n}"
        );
    }

    #[test]
    fn nested_tables_indent_one_tab_per_depth() {
        let root = Table::new().field(
            "Outer",
            Value::Table(Table::new().field(
                "Inner",
                Value::Table(Table::new().string("Leaf", "x")),
            )),
        );
        let expected = "return\n{\n\
            \t[\"Outer\"] =\n\
            \t{\n\
            \t\t[\"Inner\"] =\n\
            \t\t{\n\
            \t\t\t[\"Leaf\"] = \"x\",\n\
            \t\t},\n\
            \t},\n\
            }";
        assert_eq!(to_chunk(&root), expected);
    }

    #[test]
    fn bare_last_drops_only_the_final_comma() {
        let root = Table::new().field(
            "Track",
            Value::Table(Table::new().string("Id", "1").string("Name", "x").bare_last()),
        );
        let expected = "return\n{\n\
            \t[\"Track\"] =\n\
            \t{\n\
            \t\t[\"Id\"] = \"1\",\n\
            \t\t[\"Name\"] = \"x\"\n\
            \t},\n\
            }";
        assert_eq!(to_chunk(&root), expected);
    }

    #[test]
    fn empty_table_prints_open_and_close() {
        let root = Table::new().field("Songs", Value::Table(Table::new()));
        assert_eq!(to_chunk(&root), "return\n{\n\t[\"Songs\"] =\n\t{\n\t},\n}");
    }
}
