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

//! SQL Abstract Syntax Tree (AST) types
//!
//! Nodes are built by the parser and are immutable afterwards. Positions
//! that the grammar restricts to a subset of node kinds are typed as their
//! own enums (`SelectStatement`, `InsertRows`, `RowTuple`, …), so an
//! ill-formed tree cannot be constructed.
//!
//! Identifier and literal payloads are raw bytes (`Vec<u8>`); see the
//! tokenizer module.

mod ddl;
mod expr;

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::tracked_buffer::{impl_display, sql_string, SqlNode, TrackedBuffer};

pub use self::ddl::{ColumnDefinition, ColumnType, CreateTable, Ddl, DdlAction};
pub use self::expr::{
    BinaryExpr, BinaryOp, BoolExpr, CaseExpr, ColName, ColTuple, ComparisonOp, Expr, FuncExpr,
    NullCheckOp, RangeOp, RowTuple, Subquery, UnaryExpr, UnaryOp, ValExpr, ValTuple, When,
};

/// A parsed SQL statement, the root of every AST.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Statement {
    Select(Box<Select>),
    Union(Box<Union>),
    Insert(Box<Insert>),
    Update(Box<Update>),
    Delete(Box<Delete>),
    Set(Box<Set>),
    Ddl(Ddl),
    CreateTable(CreateTable),
    /// A `SHOW`, `DESCRIBE`, or `EXPLAIN` statement. Only an indicator:
    /// it carries no AST for the statement.
    Other,
}

impl SqlNode for Statement {
    fn format(&self, buf: &mut TrackedBuffer) {
        match self {
            Statement::Select(s) => s.format(buf),
            Statement::Union(u) => u.format(buf),
            Statement::Insert(i) => i.format(buf),
            Statement::Update(u) => u.format(buf),
            Statement::Delete(d) => d.format(buf),
            Statement::Set(s) => s.format(buf),
            Statement::Ddl(d) => d.format(buf),
            Statement::CreateTable(c) => c.format(buf),
            Statement::Other => {
                buf.push_str("other");
            }
        }
    }
}

/// Any SELECT statement: a plain `SELECT` or a set operation over two.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SelectStatement {
    Select(Box<Select>),
    Union(Box<Union>),
}

impl SqlNode for SelectStatement {
    fn format(&self, buf: &mut TrackedBuffer) {
        match self {
            SelectStatement::Select(s) => s.format(buf),
            SelectStatement::Union(u) => u.format(buf),
        }
    }
}

impl From<SelectStatement> for Statement {
    fn from(node: SelectStatement) -> Statement {
        match node {
            SelectStatement::Select(s) => Statement::Select(s),
            SelectStatement::Union(u) => Statement::Union(u),
        }
    }
}

/// A SELECT statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Select {
    pub comments: Comments,
    pub distinct: bool,
    pub select_exprs: Vec<SelectExpr>,
    pub from: Vec<TableExpr>,
    pub where_clause: Option<Where>,
    pub time_range: Option<TimeRange>,
    pub group_by: Vec<ValExpr>,
    pub having: Option<Where>,
    pub order_by: Vec<Order>,
    pub limit: Option<Limit>,
    pub lock: Option<LockMode>,
}

impl SqlNode for Select {
    fn format(&self, buf: &mut TrackedBuffer) {
        buf.push_str("select ").write_node(&self.comments);
        if self.distinct {
            buf.push_str("distinct ");
        }
        buf.write_comma_separated(&self.select_exprs);
        buf.push_str(" from ").write_comma_separated(&self.from);
        if let Some(w) = &self.where_clause {
            w.format(buf);
        }
        if let Some(t) = &self.time_range {
            t.format(buf);
        }
        if !self.group_by.is_empty() {
            buf.push_str(" group by ").write_comma_separated(&self.group_by);
        }
        if let Some(h) = &self.having {
            h.format(buf);
        }
        format_order_by(buf, &self.order_by);
        if let Some(l) = &self.limit {
            l.format(buf);
        }
        if let Some(lock) = &self.lock {
            buf.push_byte(b' ').push_str(lock.as_str());
        }
    }
}

/// A set operation over two SELECT statements. Nests recursively; the
/// grammar keeps chains left-associative.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Union {
    pub op: UnionOp,
    pub left: SelectStatement,
    pub right: SelectStatement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnionOp {
    Union,
    UnionAll,
    Minus,
    Except,
    Intersect,
}

impl UnionOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnionOp::Union => "union",
            UnionOp::UnionAll => "union all",
            UnionOp::Minus => "minus",
            UnionOp::Except => "except",
            UnionOp::Intersect => "intersect",
        }
    }
}

impl SqlNode for Union {
    fn format(&self, buf: &mut TrackedBuffer) {
        self.left.format(buf);
        buf.push_byte(b' ').push_str(self.op.as_str()).push_byte(b' ');
        self.right.format(buf);
    }
}

/// An INSERT statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Insert {
    pub comments: Comments,
    pub table: TableName,
    pub columns: Option<Columns>,
    pub rows: InsertRows,
    /// `ON DUPLICATE KEY UPDATE` assignments; empty when absent
    pub on_dup: Vec<UpdateExpr>,
}

impl SqlNode for Insert {
    fn format(&self, buf: &mut TrackedBuffer) {
        buf.push_str("insert ").write_node(&self.comments).push_str("into ");
        self.table.format(buf);
        if let Some(columns) = &self.columns {
            columns.format(buf);
        }
        buf.push_byte(b' ');
        self.rows.format(buf);
        if !self.on_dup.is_empty() {
            buf.push_str(" on duplicate key update ")
                .write_comma_separated(&self.on_dup);
        }
    }
}

/// The row source of an INSERT statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum InsertRows {
    Select(Box<Select>),
    Union(Box<Union>),
    Values(Vec<RowTuple>),
}

impl SqlNode for InsertRows {
    fn format(&self, buf: &mut TrackedBuffer) {
        match self {
            InsertRows::Select(s) => s.format(buf),
            InsertRows::Union(u) => u.format(buf),
            InsertRows::Values(rows) => {
                buf.push_str("values ").write_comma_separated(rows);
            }
        }
    }
}

/// An UPDATE statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Update {
    pub comments: Comments,
    pub table: TableName,
    pub exprs: Vec<UpdateExpr>,
    pub where_clause: Option<Where>,
    pub order_by: Vec<Order>,
    pub limit: Option<Limit>,
}

impl SqlNode for Update {
    fn format(&self, buf: &mut TrackedBuffer) {
        buf.push_str("update ").write_node(&self.comments);
        self.table.format(buf);
        buf.push_str(" set ").write_comma_separated(&self.exprs);
        if let Some(w) = &self.where_clause {
            w.format(buf);
        }
        format_order_by(buf, &self.order_by);
        if let Some(l) = &self.limit {
            l.format(buf);
        }
    }
}

/// A DELETE statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Delete {
    pub comments: Comments,
    pub table: TableName,
    pub where_clause: Option<Where>,
    pub order_by: Vec<Order>,
    pub limit: Option<Limit>,
}

impl SqlNode for Delete {
    fn format(&self, buf: &mut TrackedBuffer) {
        buf.push_str("delete ").write_node(&self.comments).push_str("from ");
        self.table.format(buf);
        if let Some(w) = &self.where_clause {
            w.format(buf);
        }
        format_order_by(buf, &self.order_by);
        if let Some(l) = &self.limit {
            l.format(buf);
        }
    }
}

/// A SET statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Set {
    pub comments: Comments,
    pub exprs: Vec<UpdateExpr>,
}

impl SqlNode for Set {
    fn format(&self, buf: &mut TrackedBuffer) {
        buf.push_str("set ").write_node(&self.comments).write_comma_separated(&self.exprs);
    }
}

/// The comments attached to a statement, raw bytes with delimiters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Comments(pub Vec<Vec<u8>>);

impl SqlNode for Comments {
    fn format(&self, buf: &mut TrackedBuffer) {
        for c in &self.0 {
            buf.push_bytes(c).push_byte(b' ');
        }
    }
}

/// A single SELECT expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SelectExpr {
    Star(StarExpr),
    NonStar(NonStarExpr),
}

impl SqlNode for SelectExpr {
    fn format(&self, buf: &mut TrackedBuffer) {
        match self {
            SelectExpr::Star(s) => s.format(buf),
            SelectExpr::NonStar(n) => n.format(buf),
        }
    }
}

/// A `*` or `table.*` expression. Valid only in a select list or as the
/// sole argument of `count(*)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StarExpr {
    pub table_name: Option<Vec<u8>>,
}

impl SqlNode for StarExpr {
    fn format(&self, buf: &mut TrackedBuffer) {
        if let Some(table) = &self.table_name {
            buf.push_bytes(table).push_byte(b'.');
        }
        buf.push_byte(b'*');
    }
}

/// Any non-`*` select expression, with an optional alias.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NonStarExpr {
    pub expr: Expr,
    pub alias: Option<Vec<u8>>,
}

impl SqlNode for NonStarExpr {
    fn format(&self, buf: &mut TrackedBuffer) {
        self.expr.format(buf);
        if let Some(alias) = &self.alias {
            buf.push_str(" as ").push_bytes(alias);
        }
    }
}

/// An insert column list. The syntax is a subset of the select-expression
/// list (bare column names only, by construction), so it converts to one
/// for analysis and formatting.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Columns(pub Vec<SelectExpr>);

impl Columns {
    pub fn as_select_exprs(&self) -> &[SelectExpr] {
        &self.0
    }
}

impl From<Columns> for Vec<SelectExpr> {
    fn from(columns: Columns) -> Vec<SelectExpr> {
        columns.0
    }
}

impl SqlNode for Columns {
    fn format(&self, buf: &mut TrackedBuffer) {
        buf.push_byte(b'(').write_comma_separated(&self.0).push_byte(b')');
    }
}

/// A table expression in a FROM clause.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TableExpr {
    Aliased(AliasedTableExpr),
    Paren(Box<TableExpr>),
    Join(Box<JoinTableExpr>),
}

impl SqlNode for TableExpr {
    fn format(&self, buf: &mut TrackedBuffer) {
        match self {
            TableExpr::Aliased(a) => a.format(buf),
            TableExpr::Paren(t) => {
                buf.push_byte(b'(').write_node(t).push_byte(b')');
            }
            TableExpr::Join(j) => j.format(buf),
        }
    }
}

/// A table expression coupled with an optional alias and index hints.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AliasedTableExpr {
    pub expr: SimpleTableExpr,
    pub alias: Option<Vec<u8>>,
    pub hints: Option<IndexHints>,
}

impl SqlNode for AliasedTableExpr {
    fn format(&self, buf: &mut TrackedBuffer) {
        self.expr.format(buf);
        if let Some(alias) = &self.alias {
            buf.push_str(" as ").push_bytes(alias);
        }
        if let Some(hints) = &self.hints {
            // the hint node provides the space padding
            hints.format(buf);
        }
    }
}

/// A simple table expression: a named table or a subquery.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SimpleTableExpr {
    TableName(TableName),
    Subquery(Box<Subquery>),
}

impl SqlNode for SimpleTableExpr {
    fn format(&self, buf: &mut TrackedBuffer) {
        match self {
            SimpleTableExpr::TableName(t) => t.format(buf),
            SimpleTableExpr::Subquery(s) => s.format(buf),
        }
    }
}

/// A table name, optionally qualified.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TableName {
    pub name: Vec<u8>,
    pub qualifier: Option<Vec<u8>>,
}

impl SqlNode for TableName {
    fn format(&self, buf: &mut TrackedBuffer) {
        if let Some(qualifier) = &self.qualifier {
            buf.write_escaped_id(qualifier).push_byte(b'.');
        }
        buf.write_escaped_id(&self.name);
    }
}

/// A JOIN between two table expressions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct JoinTableExpr {
    pub left: TableExpr,
    pub join: JoinKind,
    pub right: TableExpr,
    pub on: Option<BoolExpr>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum JoinKind {
    Join,
    StraightJoin,
    LeftJoin,
    RightJoin,
    CrossJoin,
    NaturalJoin,
}

impl JoinKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            JoinKind::Join => "join",
            JoinKind::StraightJoin => "straight_join",
            JoinKind::LeftJoin => "left join",
            JoinKind::RightJoin => "right join",
            JoinKind::CrossJoin => "cross join",
            JoinKind::NaturalJoin => "natural join",
        }
    }
}

impl SqlNode for JoinTableExpr {
    fn format(&self, buf: &mut TrackedBuffer) {
        self.left.format(buf);
        buf.push_byte(b' ').push_str(self.join.as_str()).push_byte(b' ');
        self.right.format(buf);
        if let Some(on) = &self.on {
            buf.push_str(" on ").write_node(on);
        }
    }
}

/// An index hint list attached to an aliased table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IndexHints {
    pub kind: IndexHintKind,
    pub indexes: Vec<Vec<u8>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IndexHintKind {
    Use,
    Ignore,
    Force,
}

impl IndexHintKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IndexHintKind::Use => "use",
            IndexHintKind::Ignore => "ignore",
            IndexHintKind::Force => "force",
        }
    }
}

impl SqlNode for IndexHints {
    fn format(&self, buf: &mut TrackedBuffer) {
        buf.push_byte(b' ').push_str(self.kind.as_str()).push_str(" index (");
        let mut delim = "";
        for index in &self.indexes {
            buf.push_str(delim).push_bytes(index);
            delim = ", ";
        }
        buf.push_byte(b')');
    }
}

/// A WHERE or HAVING clause. Never constructed around an absent
/// expression; use [`Where::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Where {
    pub kind: WhereKind,
    pub expr: BoolExpr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WhereKind {
    Where,
    Having,
}

impl WhereKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WhereKind::Where => "where",
            WhereKind::Having => "having",
        }
    }
}

impl Where {
    /// Builds a WHERE or HAVING clause out of an optional expression,
    /// returning `None` instead of an empty clause.
    pub fn new(kind: WhereKind, expr: Option<BoolExpr>) -> Option<Where> {
        expr.map(|expr| Where { kind, expr })
    }
}

impl SqlNode for Where {
    fn format(&self, buf: &mut TrackedBuffer) {
        buf.push_byte(b' ').push_str(self.kind.as_str()).push_byte(b' ');
        self.expr.format(buf);
    }
}

/// A TIMERANGE clause, a non-standard extension; consumers of vanilla SQL
/// can ignore this node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimeRange {
    pub from: Vec<u8>,
    pub to: Option<Vec<u8>>,
}

impl SqlNode for TimeRange {
    fn format(&self, buf: &mut TrackedBuffer) {
        buf.push_str(" timerange ").write_string_literal(&self.from);
        if let Some(to) = &self.to {
            buf.push_str(", ").write_string_literal(to);
        }
    }
}

/// An ordering expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Order {
    pub expr: ValExpr,
    pub direction: OrderDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OrderDirection {
    Asc,
    Desc,
}

impl OrderDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderDirection::Asc => "asc",
            OrderDirection::Desc => "desc",
        }
    }
}

impl SqlNode for Order {
    fn format(&self, buf: &mut TrackedBuffer) {
        self.expr.format(buf);
        buf.push_byte(b' ').push_str(self.direction.as_str());
    }
}

fn format_order_by(buf: &mut TrackedBuffer, order_by: &[Order]) {
    if !order_by.is_empty() {
        buf.push_str(" order by ").write_comma_separated(order_by);
    }
}

/// A LIMIT clause.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Limit {
    pub offset: Option<ValExpr>,
    pub rowcount: ValExpr,
}

impl SqlNode for Limit {
    fn format(&self, buf: &mut TrackedBuffer) {
        buf.push_str(" limit ");
        if let Some(offset) = &self.offset {
            offset.format(buf);
            buf.push_str(", ");
        }
        self.rowcount.format(buf);
    }
}

/// An extracted LIMIT value: an actual number, or the name of a bind
/// variable to resolve at execution time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LimitValue {
    Number(i64),
    BindVar(Vec<u8>),
}

impl Limit {
    /// Extracts the values of the LIMIT clause. Numeric values must be
    /// non-negative integers; bind variables are returned by name.
    /// Anything else is an error.
    pub fn limits(&self) -> Result<(Option<LimitValue>, LimitValue), SemanticError> {
        let offset = match &self.offset {
            Some(v) => Some(extract_limit_value(v, "offset", "offset")?),
            None => None,
        };
        let rowcount = extract_limit_value(&self.rowcount, "rowcount", "limit")?;
        Ok((offset, rowcount))
    }
}

fn extract_limit_value(
    expr: &ValExpr,
    what: &str,
    negative_what: &str,
) -> Result<LimitValue, SemanticError> {
    match expr {
        ValExpr::NumVal(text) => {
            let n = parse_int_literal(text).ok_or_else(|| {
                SemanticError::new(format!(
                    "unexpected node for {}: {}",
                    what,
                    String::from_utf8_lossy(text)
                ))
            })?;
            if n < 0 {
                return Err(SemanticError::new(format!(
                    "negative {}: {}",
                    negative_what, n
                )));
            }
            Ok(LimitValue::Number(n))
        }
        ValExpr::ValArg(name) => Ok(LimitValue::BindVar(name.clone())),
        other => Err(SemanticError::new(format!(
            "unexpected node for {}: {}",
            what,
            sql_string(other)
        ))),
    }
}

/// Parses a numeric literal as an i64: decimal, or 0x… hex. Returns None
/// for fractional or exponent forms.
fn parse_int_literal(text: &[u8]) -> Option<i64> {
    let s = std::str::from_utf8(text).ok()?;
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let value = if let Some(hex) = digits.strip_prefix("0x").or_else(|| digits.strip_prefix("0X")) {
        i64::from_str_radix(hex, 16).ok()?
    } else {
        digits.parse::<i64>().ok()?
    };
    Some(if negative { -value } else { value })
}

/// The lock mode trailing a SELECT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LockMode {
    ForUpdate,
    ShareMode,
}

impl LockMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            LockMode::ForUpdate => "for update",
            LockMode::ShareMode => "lock in share mode",
        }
    }
}

/// An update expression: `name = expr`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UpdateExpr {
    pub name: ColName,
    pub expr: ValExpr,
}

impl SqlNode for UpdateExpr {
    fn format(&self, buf: &mut TrackedBuffer) {
        self.name.format(buf);
        buf.push_str(" = ");
        self.expr.format(buf);
    }
}

/// An error from an extraction helper, for values the grammar accepts but
/// the consumer cannot use (e.g. a negative LIMIT).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticError {
    pub message: String,
}

impl SemanticError {
    pub fn new(message: impl Into<String>) -> Self {
        SemanticError {
            message: message.into(),
        }
    }
}

impl fmt::Display for SemanticError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for SemanticError {}

impl_display!(
    Statement,
    SelectStatement,
    Select,
    Union,
    Insert,
    Update,
    Delete,
    Set,
    SelectExpr,
    Columns,
    TableExpr,
    TableName,
    Where,
    Limit,
    Order,
    UpdateExpr,
);
