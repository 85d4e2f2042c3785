// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Canonical SQL formatting.
//!
//! Every AST node knows how to write its canonical form into a
//! [`TrackedBuffer`]. The buffer is a plain byte sink that additionally
//! records the position of every bind-variable emission, so a caller can
//! later splice substituted values into the generated string, and it hosts
//! the `IN`-tuple rewriting mode (see [`TrackedBuffer::rewriting_tuples`]).

use std::collections::BTreeMap;

use crate::ast::{ValExpr, ValTuple};
use crate::keywords::is_keyword;

/// A node of the syntax tree: anything that can render itself as
/// canonical SQL.
pub trait SqlNode {
    fn format(&self, buf: &mut TrackedBuffer);
}

impl<T: SqlNode + ?Sized> SqlNode for &T {
    fn format(&self, buf: &mut TrackedBuffer) {
        (**self).format(buf)
    }
}

impl<T: SqlNode + ?Sized> SqlNode for Box<T> {
    fn format(&self, buf: &mut TrackedBuffer) {
        (**self).format(buf)
    }
}

/// Returns the canonical SQL bytes of a node. This is the exact surface:
/// literal payloads are echoed bit-for-bit.
pub fn sql_bytes<N: SqlNode + ?Sized>(node: &N) -> Vec<u8> {
    let mut buf = TrackedBuffer::new();
    node.format(&mut buf);
    buf.into_bytes()
}

/// Returns the canonical SQL of a node as a `String`. Bytes that are not
/// valid UTF-8 are replaced; use [`sql_bytes`] when they matter.
pub fn sql_string<N: SqlNode + ?Sized>(node: &N) -> String {
    String::from_utf8_lossy(&sql_bytes(node)).into_owned()
}

/// The position of one bind-variable emission in the output buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BindLocation {
    pub offset: usize,
    pub length: usize,
}

/// A byte sink for canonical SQL with bind-variable tracking.
pub struct TrackedBuffer {
    buf: Vec<u8>,
    bind_locations: Vec<BindLocation>,
    rewrite_tuples: bool,
    list_args: BTreeMap<String, ValTuple>,
    arg_count: usize,
}

impl TrackedBuffer {
    pub fn new() -> Self {
        TrackedBuffer {
            buf: Vec::new(),
            bind_locations: Vec::new(),
            rewrite_tuples: false,
            list_args: BTreeMap::new(),
            arg_count: 0,
        }
    }

    /// Create a buffer that rewrites every tuple made up entirely of bind
    /// variables into a fresh `::argN` list argument, recording the
    /// original tuple in [`TrackedBuffer::list_args`]. Used to execute one
    /// query shape against `IN` lists of varying cardinality.
    pub fn rewriting_tuples() -> Self {
        TrackedBuffer {
            rewrite_tuples: true,
            ..TrackedBuffer::new()
        }
    }

    /// Append the canonical form of a node.
    pub fn write_node<N: SqlNode + ?Sized>(&mut self, node: &N) -> &mut Self {
        node.format(self);
        self
    }

    pub fn push_str(&mut self, s: &str) -> &mut Self {
        self.buf.extend_from_slice(s.as_bytes());
        self
    }

    pub fn push_bytes(&mut self, b: &[u8]) -> &mut Self {
        self.buf.extend_from_slice(b);
        self
    }

    pub fn push_byte(&mut self, b: u8) -> &mut Self {
        self.buf.push(b);
        self
    }

    /// Append the items' canonical forms separated by `", "`.
    pub fn write_comma_separated<N: SqlNode>(&mut self, items: &[N]) -> &mut Self {
        let mut delim = "";
        for item in items {
            self.push_str(delim);
            item.format(self);
            delim = ", ";
        }
        self
    }

    /// Append a bind variable verbatim and record its position.
    pub fn write_arg(&mut self, arg: &[u8]) -> &mut Self {
        self.bind_locations.push(BindLocation {
            offset: self.buf.len(),
            length: arg.len(),
        });
        self.push_bytes(arg)
    }

    /// Append an identifier, backtick-escaped iff it would not read back
    /// as a bare identifier (it collides with a reserved word, or it
    /// carries characters a bare identifier cannot).
    pub fn write_escaped_id(&mut self, id: &[u8]) -> &mut Self {
        if is_keyword(id) || !is_bare_identifier(id) {
            self.push_byte(b'`');
            self.push_bytes(id);
            self.push_byte(b'`')
        } else {
            self.push_bytes(id)
        }
    }

    /// Append a string value re-encoded as a quoted SQL literal.
    pub fn write_string_literal(&mut self, s: &[u8]) -> &mut Self {
        self.push_byte(b'\'');
        for &b in s {
            match b {
                b'\'' => self.push_str("''"),
                0 => self.push_str("\\0"),
                8 => self.push_str("\\b"),
                b'\n' => self.push_str("\\n"),
                b'\r' => self.push_str("\\r"),
                b'\t' => self.push_str("\\t"),
                26 => self.push_str("\\Z"),
                b'\\' => self.push_str("\\\\"),
                _ => self.push_byte(b),
            };
        }
        self.push_byte(b'\'')
    }

    /// Emit a list argument in place of `tuple` if this buffer is in
    /// rewrite mode and the tuple consists solely of bind variables.
    /// Returns false if the tuple must be formatted as-is.
    pub(crate) fn try_rewrite_tuple(&mut self, tuple: &ValTuple) -> bool {
        if !self.rewrite_tuples
            || tuple.0.is_empty()
            || !tuple.0.iter().all(|v| matches!(v, ValExpr::ValArg(_)))
        {
            return false;
        }
        self.arg_count += 1;
        let name = format!("arg{}", self.arg_count);
        let mut arg = Vec::with_capacity(name.len() + 2);
        arg.extend_from_slice(b"::");
        arg.extend_from_slice(name.as_bytes());
        self.write_arg(&arg);
        self.list_args.insert(name, tuple.clone());
        true
    }

    /// Positions of the bind variables emitted so far.
    pub fn bind_locations(&self) -> &[BindLocation] {
        &self.bind_locations
    }

    /// The tuples replaced by list arguments, keyed by the generated
    /// placeholder name (without the leading colons).
    pub fn list_args(&self) -> &BTreeMap<String, ValTuple> {
        &self.list_args
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }
}

impl Default for TrackedBuffer {
    fn default() -> Self {
        TrackedBuffer::new()
    }
}

fn is_bare_identifier(id: &[u8]) -> bool {
    match id.split_first() {
        Some((&first, rest)) => {
            (first.is_ascii_alphabetic() || first == b'_')
                && rest
                    .iter()
                    .all(|&b| b.is_ascii_alphanumeric() || b == b'_')
        }
        None => false,
    }
}

/// Implements `Display` for AST nodes as sugar over a throwaway buffer.
macro_rules! impl_display {
    ($($name:ty),+ $(,)?) => {
        $(
            impl ::std::fmt::Display for $name {
                fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                    f.write_str(&$crate::tracked_buffer::sql_string(self))
                }
            }
        )+
    };
}
pub(crate) use impl_display;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::ColName;

    #[test]
    fn escapes_keyword_identifiers() {
        let mut buf = TrackedBuffer::new();
        buf.write_escaped_id(b"key").push_byte(b'.').write_escaped_id(b"id");
        assert_eq!(buf.as_bytes(), b"`key`.id");
    }

    #[test]
    fn escapes_non_bare_identifiers() {
        let mut buf = TrackedBuffer::new();
        buf.write_escaped_id(b"a b");
        buf.push_byte(b' ');
        buf.write_escaped_id(b"1a");
        assert_eq!(buf.as_bytes(), b"`a b` `1a`");
    }

    #[test]
    fn encodes_string_literals() {
        let mut buf = TrackedBuffer::new();
        buf.write_string_literal(b"it's\na \\ {\x1a}");
        assert_eq!(buf.as_bytes(), b"'it''s\\na \\\\ {\\Z}'" as &[u8]);
    }

    #[test]
    fn records_bind_locations() {
        let mut buf = TrackedBuffer::new();
        buf.push_str("select * from t where id = ");
        buf.write_arg(b":id");
        assert_eq!(
            buf.bind_locations(),
            &[BindLocation {
                offset: 28,
                length: 3
            }]
        );
        let loc = buf.bind_locations()[0];
        assert_eq!(&buf.as_bytes()[loc.offset..loc.offset + loc.length], b":id");
    }

    #[test]
    fn rewrites_all_bind_tuples_only() {
        let all_binds = ValTuple(vec![
            ValExpr::ValArg(b":a".to_vec()),
            ValExpr::ValArg(b":b".to_vec()),
        ]);
        let mixed = ValTuple(vec![
            ValExpr::ValArg(b":a".to_vec()),
            ValExpr::ColName(ColName {
                name: b"c".to_vec(),
                qualifier: None,
            }),
        ]);

        let mut buf = TrackedBuffer::new();
        assert!(!buf.try_rewrite_tuple(&all_binds));

        let mut buf = TrackedBuffer::rewriting_tuples();
        assert!(!buf.try_rewrite_tuple(&mixed));
        assert!(buf.try_rewrite_tuple(&all_binds));
        assert_eq!(buf.as_bytes(), b"::arg1");
        assert_eq!(buf.list_args().get("arg1"), Some(&all_binds));
        assert_eq!(buf.bind_locations().len(), 1);
    }
}
