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

//! Statement-level parser tests: round-trips and AST shapes.

use matches::assert_matches;
use pretty_assertions::assert_eq;

use mysqlparser::ast::*;
use mysqlparser::parser::ParserError;
use mysqlparser::test_utils::*;
use mysqlparser::{parse, parse_bytes, sql_string};

fn col(name: &str) -> ValExpr {
    ValExpr::ColName(ColName {
        name: name.as_bytes().to_vec(),
        qualifier: None,
    })
}

fn qual_col(qualifier: &str, name: &str) -> ValExpr {
    ValExpr::ColName(ColName {
        name: name.as_bytes().to_vec(),
        qualifier: Some(qualifier.as_bytes().to_vec()),
    })
}

fn num(text: &str) -> ValExpr {
    ValExpr::NumVal(text.as_bytes().to_vec())
}

fn comparison(op: ComparisonOp, left: ValExpr, right: ValExpr) -> BoolExpr {
    BoolExpr::Comparison {
        op,
        left: Box::new(left),
        right: Box::new(right),
    }
}

#[test]
fn parse_simple_select() {
    let select = verified_only_select("select a, b from t where a = 1 and b != 2");

    assert_eq!(select.select_exprs.len(), 2);
    for expr in &select.select_exprs {
        assert_matches!(expr, SelectExpr::NonStar(_));
    }
    assert_eq!(
        select.from,
        vec![TableExpr::Aliased(AliasedTableExpr {
            expr: SimpleTableExpr::TableName(TableName {
                name: b"t".to_vec(),
                qualifier: None,
            }),
            alias: None,
            hints: None,
        })]
    );
    assert_eq!(
        select.where_clause,
        Where::new(
            WhereKind::Where,
            Some(BoolExpr::And {
                left: Box::new(comparison(ComparisonOp::Eq, col("a"), num("1"))),
                right: Box::new(comparison(ComparisonOp::Neq, col("b"), num("2"))),
            })
        )
    );
}

#[test]
fn whitespace_and_case_canonicalization() {
    one_statement_parses_to(
        "SELECT   a,\n\tb FROM t\nWHERE a = 1",
        "select a, b from t where a = 1",
    );
}

#[test]
fn parse_select_star() {
    let select = verified_only_select("select * from t");
    assert_eq!(
        select.select_exprs,
        vec![SelectExpr::Star(StarExpr { table_name: None })]
    );

    let select = verified_only_select("select t.* from t");
    assert_eq!(
        select.select_exprs,
        vec![SelectExpr::Star(StarExpr {
            table_name: Some(b"t".to_vec()),
        })]
    );
}

#[test]
fn parse_left_join() {
    let select = verified_only_select("select * from t1 left join t2 on t1.id = t2.id");
    assert_eq!(
        select.from,
        vec![TableExpr::Join(Box::new(JoinTableExpr {
            left: TableExpr::Aliased(AliasedTableExpr {
                expr: SimpleTableExpr::TableName(TableName {
                    name: b"t1".to_vec(),
                    qualifier: None,
                }),
                alias: None,
                hints: None,
            }),
            join: JoinKind::LeftJoin,
            right: TableExpr::Aliased(AliasedTableExpr {
                expr: SimpleTableExpr::TableName(TableName {
                    name: b"t2".to_vec(),
                    qualifier: None,
                }),
                alias: None,
                hints: None,
            }),
            on: Some(comparison(
                ComparisonOp::Eq,
                qual_col("t1", "id"),
                qual_col("t2", "id"),
            )),
        }))]
    );

    // keywords are lowercased and OUTER is dropped
    one_statement_parses_to(
        "SELECT * FROM t1 LEFT OUTER JOIN t2 ON t1.id = t2.id",
        "select * from t1 left join t2 on t1.id = t2.id",
    );
}

#[test]
fn parse_join_kinds() {
    verified_stmt("select * from a join b on a.id = b.id");
    verified_stmt("select * from a straight_join b on a.id = b.id");
    verified_stmt("select * from a right join b on a.id = b.id");
    verified_stmt("select * from a cross join b");
    verified_stmt("select * from a natural join b");
    verified_stmt("select * from a join b on a.id = b.id join c on b.id = c.id");
    one_statement_parses_to(
        "select * from a inner join b on a.id = b.id",
        "select * from a join b on a.id = b.id",
    );
}

#[test]
fn parse_from_variants() {
    verified_stmt("select * from t as x");
    one_statement_parses_to("select * from t x", "select * from t as x");
    verified_stmt("select * from t1, t2");
    verified_stmt("select * from (t1 join t2 on a = b)");
    verified_stmt("select * from (select a from t) as x");
    verified_stmt("select * from t as x use index (a, b)");
    verified_stmt("select * from t as x ignore index (a)");
    verified_stmt("select * from t as x force index (a)");
}

#[test]
fn parse_select_options() {
    verified_stmt("select distinct a from t");
    verified_stmt("select a from t group by a");
    verified_stmt("select a, count(*) from t group by a having count(*) > 1");
    verified_stmt("select a from t order by a asc");
    verified_stmt("select a from t order by a asc, b desc");
    one_statement_parses_to("select a from t order by a", "select a from t order by a asc");
    verified_stmt("select a from t limit 10");
    verified_stmt("select a from t limit 5, 10");
    verified_stmt("select a from t for update");
    verified_stmt("select a from t lock in share mode");
    verified_stmt(
        "select a from t where a = 1 group by a having a < 5 order by a desc limit 2, 3 for update",
    );
}

#[test]
fn parse_timerange() {
    let select = verified_only_select("select a from t timerange '2015-01-01', '2015-02-01'");
    assert_eq!(
        select.time_range,
        Some(TimeRange {
            from: b"2015-01-01".to_vec(),
            to: Some(b"2015-02-01".to_vec()),
        })
    );
    verified_stmt("select a from t timerange '2015-01-01'");
    verified_stmt("select a from t where a = 1 timerange '2015-01-01' group by a");
}

#[test]
fn parse_union() {
    let statement = verified_stmt("select a from t union select b from u");
    match statement {
        Statement::Union(u) => {
            assert_eq!(u.op, UnionOp::Union);
            assert_matches!(u.left, SelectStatement::Select(_));
            assert_matches!(u.right, SelectStatement::Select(_));
        }
        other => panic!("expected a union, got: {:?}", other),
    }

    verified_stmt("select a from t union all select b from u");
    verified_stmt("select a from t minus select b from u");
    verified_stmt("select a from t except select b from u");
    verified_stmt("select a from t intersect select b from u");

    // chains nest left-associatively
    let statement = verified_stmt("select a from t union select b from u union all select c from v");
    match statement {
        Statement::Union(u) => {
            assert_eq!(u.op, UnionOp::UnionAll);
            assert_matches!(u.left, SelectStatement::Union(_));
        }
        other => panic!("expected a union, got: {:?}", other),
    }
}

#[test]
fn parse_subqueries() {
    verified_stmt("select a from t where id in (select id from u)");
    verified_stmt("select a from t where exists (select id from u where u.id = t.id)");
    verified_stmt("select (select a from u) from t");
    verified_stmt("select a from t where (select count(*) from u) > 3");
    verified_stmt("select a from (select a from t union select b from u) as x");
}

#[test]
fn parse_comparisons() {
    verified_expr("a = 1");
    verified_expr("a < 1");
    verified_expr("a > 1");
    verified_expr("a <= 1");
    verified_expr("a >= 1");
    verified_expr("a != 1");
    verified_expr("a <=> 1");
    verified_expr("a like 'x%'");
    verified_expr("a not like 'x%'");
    verified_expr("a in (1, 2)");
    verified_expr("a not in (1, 2)");
    verified_expr("a in ::ids");
    one_statement_parses_to(
        "select * from t where a <> 1",
        "select * from t where a != 1",
    );
}

#[test]
fn parse_range_and_null_checks() {
    let select = verified_only_select("select * from t where a between 1 and 2");
    assert_eq!(
        select.where_clause,
        Where::new(
            WhereKind::Where,
            Some(BoolExpr::Range {
                op: RangeOp::Between,
                left: Box::new(col("a")),
                from: Box::new(num("1")),
                to: Box::new(num("2")),
            })
        )
    );
    verified_stmt("select * from t where a not between 1 and 2");
    verified_stmt("select * from t where a is null");
    verified_stmt("select * from t where a is not null");
}

#[test]
fn parse_boolean_operators() {
    verified_stmt("select * from t where a = 1 and b = 2 or c = 3");
    verified_stmt("select * from t where not a = 1");
    verified_stmt("select * from t where (a = 1 or b = 2) and c = 3");
    // `||` is boolean OR in this dialect
    one_statement_parses_to(
        "select * from t where a = 1 || b = 2",
        "select * from t where a = 1 or b = 2",
    );
}

#[test]
fn boolean_operator_precedence() {
    // AND binds tighter than OR; NOT tighter than AND
    let select = verified_only_select("select * from t where a = 1 or b = 2 and c = 3");
    match &select.where_clause.as_ref().unwrap().expr {
        BoolExpr::Or { right, .. } => assert_matches!(**right, BoolExpr::And { .. }),
        other => panic!("expected an or, got: {:?}", other),
    }
    let select = verified_only_select("select * from t where not a = 1 and b = 2");
    match &select.where_clause.as_ref().unwrap().expr {
        BoolExpr::And { left, .. } => assert_matches!(**left, BoolExpr::Not(_)),
        other => panic!("expected an and, got: {:?}", other),
    }
}

#[test]
fn comparisons_are_non_associative() {
    assert_matches!(
        parse("select * from t where a = b = c"),
        Err(ParserError::ParserError(_))
    );
    assert_matches!(
        parse("select * from t where a between 1 and 2 between 3 and 4"),
        Err(ParserError::ParserError(_))
    );
}

#[test]
fn parse_arithmetic() {
    one_statement_parses_to("select a + 1 from t", "select a+1 from t");
    verified_expr("a+b");
    verified_expr("a-b");
    verified_expr("a*b");
    verified_expr("a/b");
    verified_expr("a%b");
    verified_expr("a&b");
    verified_expr("a|b");
    verified_expr("a^b");
    verified_expr("a<<2");
    verified_expr("a>>2");
    verified_expr("~a");
    verified_expr("-a");

    // `*` binds tighter than `+`
    let expr = verified_expr("1+2*3");
    match expr {
        Expr::Val(ValExpr::Binary(b)) => {
            assert_eq!(b.op, BinaryOp::Plus);
            assert_eq!(b.left, num("1"));
            assert_matches!(b.right, ValExpr::Binary(_));
        }
        other => panic!("expected a binary expr, got: {:?}", other),
    }

    // a parenthesized value expression is a one-element tuple
    let expr = verified_expr("(a+1)*2");
    match expr {
        Expr::Val(ValExpr::Binary(b)) => {
            assert_eq!(b.op, BinaryOp::Mult);
            assert_matches!(b.left, ValExpr::Tuple(_));
        }
        other => panic!("expected a binary expr, got: {:?}", other),
    }
}

#[test]
fn unary_minus_folds_into_number() {
    let expr = verified_expr("-1");
    assert_eq!(expr, Expr::Val(num("-1")));
    one_statement_parses_to("select - 1 from t", "select -1 from t");
    // a non-literal operand stays a unary expression
    let expr = verified_expr("-a");
    assert_matches!(expr, Expr::Val(ValExpr::Unary(_)));
}

#[test]
fn parse_literals() {
    verified_stmt("select 1, 1.5, .5, 2e10, 0xff from t");
    verified_stmt("select 'abc' from t");
    verified_stmt("select 'it''s' from t");
    verified_stmt("select null from t");
    one_statement_parses_to("select \"dq\" from t", "select 'dq' from t");
    // escapes are decoded and minimally re-encoded
    one_statement_parses_to(r"select 'a\%b' from t", "select 'a%b' from t");
    verified_stmt(r"select 'a\nb' from t");
    verified_stmt(r"select 'a\\b' from t");
}

#[test]
fn string_literals_round_trip_raw_bytes() {
    let statement = parse_bytes(b"select '\xff\x00\xfe' from t").unwrap();
    let sql = mysqlparser::sql_bytes(&statement);
    assert_eq!(sql, b"select '\xff\\0\xfe' from t".to_vec());
    // a second round-trip is a fixed point
    assert_eq!(parse_bytes(&sql).unwrap(), statement);
}

#[test]
fn keyword_identifiers_are_escaped() {
    verified_stmt("select `key` from t");
    verified_stmt("select `order` from `select`");
    one_statement_parses_to("select `a` from t", "select a from t");
    let select = verified_only_select("select `key` from t");
    assert_eq!(*expr_from_projection(only(&select.select_exprs)), Expr::Val(col("key")));
}

#[test]
fn parse_aliases() {
    verified_stmt("select a as x from t");
    one_statement_parses_to("select a x from t", "select a as x from t");
    verified_stmt("select a as `group` from t");
}

#[test]
fn parse_functions() {
    verified_stmt("select count(*) from t");
    verified_stmt("select now() from t");
    verified_stmt("select concat(a, 'x', b) from t");
    verified_stmt("select sum(a+b) from t");
}

#[test]
fn parse_count_distinct() {
    let select = verified_only_select("select count(distinct x) from t");
    match expr_from_projection(only(&select.select_exprs)) {
        Expr::Val(ValExpr::Func(func)) => {
            assert_eq!(func.name, b"count".to_vec());
            assert!(func.distinct);
            assert_eq!(
                func.exprs,
                vec![SelectExpr::NonStar(NonStarExpr {
                    expr: Expr::Val(col("x")),
                    alias: None,
                })]
            );
            assert!(func.is_aggregate());
        }
        other => panic!("expected a function, got: {:?}", other),
    }
}

#[test]
fn parse_case() {
    verified_stmt("select case when a = 1 then 'x' else 'y' end from t");
    verified_stmt("select case a when a = 1 then 'x' end from t");
    verified_stmt("select case when a = 1 then 1 when b = 2 then 2 end from t");
    // a WHEN condition must be boolean
    assert_matches!(
        parse("select case x when 1 then 2 end from t"),
        Err(ParserError::ParserError(_))
    );
}

#[test]
fn parse_comments_attached_to_statement() {
    let select = verified_only_select("select /* master */ a from t");
    assert_eq!(select.comments, Comments(vec![b"/* master */".to_vec()]));

    // comments ahead of the verb attach to the statement too
    one_statement_parses_to(
        "/* lead */ select a from t",
        "select /* lead */ a from t",
    );
    // single-line comments and comments elsewhere are plain whitespace
    one_statement_parses_to("select a -- trailing\nfrom t", "select a from t");
    one_statement_parses_to("# lead\nselect a from t", "select a from t");
    one_statement_parses_to("select a /* mid */ from t", "select a from t");

    verified_stmt("insert /* note */ into t(a) values (1)");
    verified_stmt("update /* note */ t set a = 1");
    verified_stmt("delete /* note */ from t where a = 1");
    verified_stmt("set /* note */ a = 1");
}

#[test]
fn parse_insert() {
    let statement = verified_stmt("insert into t(a, b) values (1, 2), (3, 4)");
    match statement {
        Statement::Insert(insert) => {
            assert_eq!(insert.table.name, b"t".to_vec());
            assert_eq!(insert.columns.as_ref().unwrap().as_select_exprs().len(), 2);
            assert_eq!(
                insert.rows,
                InsertRows::Values(vec![
                    RowTuple::ValTuple(ValTuple(vec![num("1"), num("2")])),
                    RowTuple::ValTuple(ValTuple(vec![num("3"), num("4")])),
                ])
            );
        }
        other => panic!("expected an insert, got: {:?}", other),
    }

    verified_stmt("insert into t values (1, 'x')");
    verified_stmt("insert into db.t values (1)");
    verified_stmt("insert into t select a from u");
    verified_stmt("insert into t(a) select a from u");
    one_statement_parses_to(
        "insert into t (select a from u)",
        "insert into t select a from u",
    );
    verified_stmt("insert into t values (select a from u)");
    verified_stmt("insert into t(a) values (1) on duplicate key update a = 2");
    verified_stmt("insert into t(`key`) values (:val)");
}

#[test]
fn parse_update() {
    verified_stmt("update t set a = 1, b = 'x' where id = 1");
    verified_stmt("update db.t set a = a+1");
    verified_stmt("update t set a = 1 order by a desc limit 2");
    verified_stmt("update t set t.a = 1");
}

#[test]
fn parse_delete() {
    verified_stmt("delete from t");
    verified_stmt("delete from t where id = 1");
    verified_stmt("delete from t where id = 1 order by id asc limit 1");
}

#[test]
fn parse_set() {
    verified_stmt("set a = 1");
    verified_stmt("set a = 1, b = 'x'");
    verified_stmt("set names = 'utf8'");
}

#[test]
fn parse_other_statements() {
    for sql in ["show tables", "describe t", "explain select a from t"] {
        let statement = parse(sql).unwrap();
        assert_eq!(statement, Statement::Other);
        assert_eq!(sql_string(&statement), "other");
    }
}

#[test]
fn parse_bind_variables() {
    verified_stmt("select a from t where id = :id");
    verified_stmt("select a from t where id in (:a, :b, :c)");
    verified_stmt("select a from t where id in ::ids");
    verified_stmt("select a from t limit :n");
    verified_stmt("update t set a = :val where id = :id");
}

#[test]
fn limit_extraction() {
    let select = verified_only_select("select a from t limit 5, 10");
    let (offset, rowcount) = select.limit.unwrap().limits().unwrap();
    assert_eq!(offset, Some(LimitValue::Number(5)));
    assert_eq!(rowcount, LimitValue::Number(10));

    let select = verified_only_select("select a from t limit 0x10");
    let (offset, rowcount) = select.limit.unwrap().limits().unwrap();
    assert_eq!(offset, None);
    assert_eq!(rowcount, LimitValue::Number(16));

    let select = verified_only_select("select a from t limit :n");
    let (_, rowcount) = select.limit.unwrap().limits().unwrap();
    assert_eq!(rowcount, LimitValue::BindVar(b":n".to_vec()));
}

#[test]
fn negative_limit_is_a_semantic_error() {
    // scenario: the parse succeeds, the extraction fails
    let select = verified_only_select("select * from t limit -1");
    let err = select.limit.unwrap().limits().unwrap_err();
    assert_eq!(err.message, "negative limit: -1");

    let select = verified_only_select("select * from t limit -2, 10");
    let err = select.limit.unwrap().limits().unwrap_err();
    assert_eq!(err.message, "negative offset: -2");
}

#[test]
fn non_numeric_limit_is_a_semantic_error() {
    let select = verified_only_select("select * from t limit 'abc'");
    let err = select.limit.unwrap().limits().unwrap_err();
    assert!(
        err.message.starts_with("unexpected node for rowcount"),
        "unexpected message: {}",
        err.message
    );

    let select = verified_only_select("select * from t limit 1.5");
    let err = select.limit.unwrap().limits().unwrap_err();
    assert!(err.message.starts_with("unexpected node for rowcount"));
}

#[test]
fn parse_errors() {
    assert_matches!(parse("select * from"), Err(ParserError::ParserError(_)));
    assert_matches!(
        parse("select * from t where a = 'unterminated"),
        Err(ParserError::TokenizerError(_))
    );
    assert_matches!(parse("select 1"), Err(ParserError::ParserError(_)));
    assert_matches!(parse("frobnicate t"), Err(ParserError::ParserError(_)));
    assert_matches!(
        parse("select * from t where 1 or 2"),
        Err(ParserError::ParserError(_))
    );
    assert_matches!(parse(""), Err(ParserError::ParserError(_)));
}

#[test]
fn parse_error_reports_position() {
    let err = parse("select a from t where").unwrap_err();
    match err {
        ParserError::ParserError(message) => {
            assert!(message.contains("EOF"), "unexpected message: {}", message)
        }
        other => panic!("expected a parse error, got: {:?}", other),
    }

    let err = parse("select a ^^ b from t").unwrap_err();
    match err {
        ParserError::ParserError(message) => {
            assert!(
                message.contains("Line: 1"),
                "unexpected message: {}",
                message
            )
        }
        other => panic!("expected a parse error, got: {:?}", other),
    }
}

#[test]
fn trailing_semicolon_is_accepted() {
    one_statement_parses_to("select a from t;", "select a from t");
    assert_matches!(
        parse("select a from t; select b from u"),
        Err(ParserError::ParserError(_))
    );
}

#[test]
fn format_is_idempotent() {
    for sql in [
        "select a, b from t where a = 1 and b != 2",
        "select * from t1 left join t2 on t1.id = t2.id",
        "insert into t(a, b) values (1, 2), (3, 4)",
        "select count(distinct x) from t",
        "select a from t union all select b from u order by b asc limit 3",
        "update t set a = a+1 where id in (select id from u)",
    ] {
        let first = parse(sql).unwrap();
        let formatted = sql_string(&first);
        let second = parse(&formatted).unwrap();
        assert_eq!(first, second);
        assert_eq!(formatted, sql_string(&second));
    }
}
