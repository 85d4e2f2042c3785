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

//! SQL lexer and parser for a MySQL-flavored dialect.
//!
//! [`parse`] turns one SQL statement into a typed AST ([`Statement`]);
//! [`sql_string`]/[`sql_bytes`] turn any AST subtree back into its
//! canonical SQL form. The formatter tracks bind-variable positions and
//! can rewrite `IN` tuples of bind variables into list arguments (see
//! [`TrackedBuffer`]).
//!
//! Example:
//!
//! ```
//! use mysqlparser::{parse, sql_string};
//!
//! let ast = parse("SELECT a, b FROM t WHERE id = :id").unwrap();
//! assert_eq!(sql_string(&ast), "select a, b from t where id = :id");
//! ```
//!
//! The parser is synchronous and stateless across invocations; parsers
//! and ASTs produced by distinct calls share no mutable state and may be
//! used concurrently without coordination.

pub mod ast;
pub mod keywords;
pub mod parser;
pub mod test_utils;
pub mod tokenizer;
pub mod tracked_buffer;

pub use crate::ast::Statement;
pub use crate::parser::{Parser, ParserError};
pub use crate::tracked_buffer::{sql_bytes, sql_string, BindLocation, SqlNode, TrackedBuffer};

/// Parses the SQL and returns a [`Statement`], the AST representation of
/// the query. One statement per call.
pub fn parse(sql: &str) -> Result<Statement, ParserError> {
    Parser::parse_sql(sql)
}

/// Like [`parse`] for input that is not valid UTF-8; literal payloads are
/// carried through bit-exactly.
pub fn parse_bytes(sql: &[u8]) -> Result<Statement, ParserError> {
    Parser::parse_sql_bytes(sql)
}
