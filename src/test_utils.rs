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

//! Utilities used by the crate's unit and integration tests. Not part of
//! the stable API.

use crate::ast::{Expr, Select, SelectExpr, Statement};
use crate::parser::Parser;
use crate::tracked_buffer::sql_string;

/// Ensures that `sql` parses as a single statement, optionally checking
/// that converting the AST back to a string equals `canonical` (unless an
/// empty canonical string is provided).
pub fn one_statement_parses_to(sql: &str, canonical: &str) -> Statement {
    let statement = Parser::parse_sql(sql).unwrap();
    if !canonical.is_empty() {
        assert_eq!(canonical, sql_string(&statement));
        // the canonical form is a fixed point
        let reparsed = Parser::parse_sql(canonical).unwrap();
        assert_eq!(statement, reparsed);
        assert_eq!(canonical, sql_string(&reparsed));
    }
    statement
}

/// Ensures that `sql` parses as a single statement and is not modified
/// after a serialization round-trip.
pub fn verified_stmt(sql: &str) -> Statement {
    one_statement_parses_to(sql, sql)
}

/// Ensures that `sql` parses as a single [`Select`] and is not modified
/// after a serialization round-trip.
pub fn verified_only_select(sql: &str) -> Select {
    match verified_stmt(sql) {
        Statement::Select(select) => *select,
        other => panic!("expected a select, got: {:?}", other),
    }
}

/// Ensures that `sql` parses as an expression and is not modified after a
/// serialization round-trip.
pub fn verified_expr(sql: &str) -> Expr {
    let mut parser = Parser::try_with_sql(sql).unwrap();
    let expr = parser.parse_expression().unwrap();
    assert_eq!(sql, sql_string(&expr), "round-tripping without changes");
    expr
}

pub fn only<T>(v: &[T]) -> &T {
    assert_eq!(1, v.len());
    v.first().unwrap()
}

pub fn expr_from_projection(item: &SelectExpr) -> &Expr {
    match item {
        SelectExpr::NonStar(expr) => &expr.expr,
        _ => panic!("expected a non-star select expression"),
    }
}
