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

//! Expression nodes.
//!
//! The grammar distinguishes boolean positions (WHERE, HAVING, ON, WHEN)
//! from value positions (select list, arithmetic, comparisons' operands),
//! so expressions come in two kinds: [`BoolExpr`] and [`ValExpr`], with
//! [`Expr`] as the union the select list accepts.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ast::{SelectExpr, SelectStatement};
use crate::tracked_buffer::{impl_display, SqlNode, TrackedBuffer};

/// Any expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    Bool(BoolExpr),
    Val(ValExpr),
}

impl SqlNode for Expr {
    fn format(&self, buf: &mut TrackedBuffer) {
        match self {
            Expr::Bool(b) => b.format(buf),
            Expr::Val(v) => v.format(buf),
        }
    }
}

/// A boolean expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BoolExpr {
    And {
        left: Box<BoolExpr>,
        right: Box<BoolExpr>,
    },
    Or {
        left: Box<BoolExpr>,
        right: Box<BoolExpr>,
    },
    Not(Box<BoolExpr>),
    Paren(Box<BoolExpr>),
    Comparison {
        op: ComparisonOp,
        left: Box<ValExpr>,
        right: Box<ValExpr>,
    },
    /// A `BETWEEN` or `NOT BETWEEN` range condition
    Range {
        op: RangeOp,
        left: Box<ValExpr>,
        from: Box<ValExpr>,
        to: Box<ValExpr>,
    },
    /// An `IS NULL` or `IS NOT NULL` check
    NullCheck {
        op: NullCheckOp,
        expr: Box<ValExpr>,
    },
    Exists(Box<Subquery>),
}

impl SqlNode for BoolExpr {
    fn format(&self, buf: &mut TrackedBuffer) {
        match self {
            BoolExpr::And { left, right } => {
                left.format(buf);
                buf.push_str(" and ");
                right.format(buf);
            }
            BoolExpr::Or { left, right } => {
                left.format(buf);
                buf.push_str(" or ");
                right.format(buf);
            }
            BoolExpr::Not(expr) => {
                buf.push_str("not ");
                expr.format(buf);
            }
            BoolExpr::Paren(expr) => {
                buf.push_byte(b'(').write_node(expr).push_byte(b')');
            }
            BoolExpr::Comparison { op, left, right } => {
                left.format(buf);
                buf.push_byte(b' ').push_str(op.as_str()).push_byte(b' ');
                right.format(buf);
            }
            BoolExpr::Range { op, left, from, to } => {
                left.format(buf);
                buf.push_byte(b' ').push_str(op.as_str()).push_byte(b' ');
                from.format(buf);
                buf.push_str(" and ");
                to.format(buf);
            }
            BoolExpr::NullCheck { op, expr } => {
                expr.format(buf);
                buf.push_byte(b' ').push_str(op.as_str());
            }
            BoolExpr::Exists(subquery) => {
                buf.push_str("exists ");
                subquery.format(buf);
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ComparisonOp {
    Eq,
    Lt,
    Gt,
    LtEq,
    GtEq,
    Neq,
    NullSafeEq,
    In,
    NotIn,
    Like,
    NotLike,
}

impl ComparisonOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonOp::Eq => "=",
            ComparisonOp::Lt => "<",
            ComparisonOp::Gt => ">",
            ComparisonOp::LtEq => "<=",
            ComparisonOp::GtEq => ">=",
            ComparisonOp::Neq => "!=",
            ComparisonOp::NullSafeEq => "<=>",
            ComparisonOp::In => "in",
            ComparisonOp::NotIn => "not in",
            ComparisonOp::Like => "like",
            ComparisonOp::NotLike => "not like",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RangeOp {
    Between,
    NotBetween,
}

impl RangeOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            RangeOp::Between => "between",
            RangeOp::NotBetween => "not between",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NullCheckOp {
    IsNull,
    IsNotNull,
}

impl NullCheckOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            NullCheckOp::IsNull => "is null",
            NullCheckOp::IsNotNull => "is not null",
        }
    }
}

/// A value expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ValExpr {
    /// A string literal; raw decoded bytes, re-encoded on output
    StrVal(Vec<u8>),
    /// A numeric literal, textual and unparsed
    NumVal(Vec<u8>),
    /// A named bind variable, text beginning with `:`
    ValArg(Vec<u8>),
    /// A named list bind variable, text beginning with `::`
    ListArg(Vec<u8>),
    NullVal,
    ColName(ColName),
    Tuple(ValTuple),
    Subquery(Box<Subquery>),
    Binary(Box<BinaryExpr>),
    Unary(Box<UnaryExpr>),
    Func(Box<FuncExpr>),
    Case(Box<CaseExpr>),
}

impl SqlNode for ValExpr {
    fn format(&self, buf: &mut TrackedBuffer) {
        match self {
            ValExpr::StrVal(s) => {
                buf.write_string_literal(s);
            }
            ValExpr::NumVal(n) => {
                buf.push_bytes(n);
            }
            ValExpr::ValArg(v) => {
                buf.write_arg(v);
            }
            ValExpr::ListArg(l) => {
                buf.write_arg(l);
            }
            ValExpr::NullVal => {
                buf.push_str("null");
            }
            ValExpr::ColName(c) => c.format(buf),
            ValExpr::Tuple(t) => t.format(buf),
            ValExpr::Subquery(s) => s.format(buf),
            ValExpr::Binary(b) => b.format(buf),
            ValExpr::Unary(u) => u.format(buf),
            ValExpr::Func(f) => f.format(buf),
            ValExpr::Case(c) => c.format(buf),
        }
    }
}

/// A column name, optionally qualified.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ColName {
    pub name: Vec<u8>,
    pub qualifier: Option<Vec<u8>>,
}

impl SqlNode for ColName {
    fn format(&self, buf: &mut TrackedBuffer) {
        if let Some(qualifier) = &self.qualifier {
            buf.write_escaped_id(qualifier).push_byte(b'.');
        }
        buf.write_escaped_id(&self.name);
    }
}

/// A parenthesized list of value expressions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ValTuple(pub Vec<ValExpr>);

impl SqlNode for ValTuple {
    fn format(&self, buf: &mut TrackedBuffer) {
        if buf.try_rewrite_tuple(self) {
            return;
        }
        buf.push_byte(b'(').write_comma_separated(&self.0).push_byte(b')');
    }
}

/// A subquery: any SELECT statement in parentheses.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Subquery {
    pub select: SelectStatement,
}

impl SqlNode for Subquery {
    fn format(&self, buf: &mut TrackedBuffer) {
        buf.push_byte(b'(').write_node(&self.select).push_byte(b')');
    }
}

/// The shapes the grammar accepts on the right of `IN` / `NOT IN`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ColTuple {
    ValTuple(ValTuple),
    Subquery(Box<Subquery>),
    ListArg(Vec<u8>),
}

impl From<ColTuple> for ValExpr {
    fn from(tuple: ColTuple) -> ValExpr {
        match tuple {
            ColTuple::ValTuple(t) => ValExpr::Tuple(t),
            ColTuple::Subquery(s) => ValExpr::Subquery(s),
            ColTuple::ListArg(l) => ValExpr::ListArg(l),
        }
    }
}

/// A row of a VALUES clause.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RowTuple {
    ValTuple(ValTuple),
    Subquery(Box<Subquery>),
}

impl SqlNode for RowTuple {
    fn format(&self, buf: &mut TrackedBuffer) {
        match self {
            RowTuple::ValTuple(t) => t.format(buf),
            RowTuple::Subquery(s) => s.format(buf),
        }
    }
}

/// A binary arithmetic or bitwise expression. Canonical form carries no
/// spaces around the operator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BinaryExpr {
    pub op: BinaryOp,
    pub left: ValExpr,
    pub right: ValExpr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinaryOp {
    BitAnd,
    BitOr,
    BitXor,
    Plus,
    Minus,
    Mult,
    Div,
    Mod,
    ShiftLeft,
    ShiftRight,
}

impl BinaryOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOp::BitAnd => "&",
            BinaryOp::BitOr => "|",
            BinaryOp::BitXor => "^",
            BinaryOp::Plus => "+",
            BinaryOp::Minus => "-",
            BinaryOp::Mult => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
            BinaryOp::ShiftLeft => "<<",
            BinaryOp::ShiftRight => ">>",
        }
    }
}

impl SqlNode for BinaryExpr {
    fn format(&self, buf: &mut TrackedBuffer) {
        self.left.format(buf);
        buf.push_str(self.op.as_str());
        self.right.format(buf);
    }
}

/// A unary value expression, no space between operator and operand.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UnaryExpr {
    pub op: UnaryOp,
    pub expr: ValExpr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnaryOp {
    Plus,
    Minus,
    Tilde,
}

impl UnaryOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnaryOp::Plus => "+",
            UnaryOp::Minus => "-",
            UnaryOp::Tilde => "~",
        }
    }
}

impl SqlNode for UnaryExpr {
    fn format(&self, buf: &mut TrackedBuffer) {
        buf.push_str(self.op.as_str());
        self.expr.format(buf);
    }
}

/// All aggregate functions, sorted for binary search.
const AGGREGATES: &[&str] = &[
    "avg",
    "bit_and",
    "bit_or",
    "bit_xor",
    "count",
    "group_concat",
    "max",
    "min",
    "std",
    "stddev",
    "stddev_pop",
    "stddev_samp",
    "sum",
    "var_pop",
    "var_samp",
    "variance",
];

/// A function call. Arguments reuse the select-expression grammar so that
/// `count(*)` and `count(distinct x)` parse uniformly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FuncExpr {
    pub name: Vec<u8>,
    pub distinct: bool,
    pub exprs: Vec<SelectExpr>,
}

impl FuncExpr {
    /// Whether the called function is an aggregate. Name-based and
    /// case-insensitive.
    pub fn is_aggregate(&self) -> bool {
        let name = match std::str::from_utf8(&self.name) {
            Ok(n) => n.to_ascii_lowercase(),
            Err(_) => return false,
        };
        AGGREGATES.binary_search(&name.as_str()).is_ok()
    }
}

impl SqlNode for FuncExpr {
    fn format(&self, buf: &mut TrackedBuffer) {
        buf.push_bytes(&self.name).push_byte(b'(');
        if self.distinct {
            buf.push_str("distinct ");
        }
        buf.write_comma_separated(&self.exprs).push_byte(b')');
    }
}

/// A CASE expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CaseExpr {
    pub expr: Option<Box<ValExpr>>,
    pub whens: Vec<When>,
    pub else_expr: Option<Box<ValExpr>>,
}

impl SqlNode for CaseExpr {
    fn format(&self, buf: &mut TrackedBuffer) {
        buf.push_str("case ");
        if let Some(expr) = &self.expr {
            expr.format(buf);
            buf.push_byte(b' ');
        }
        for when in &self.whens {
            when.format(buf);
            buf.push_byte(b' ');
        }
        if let Some(else_expr) = &self.else_expr {
            buf.push_str("else ").write_node(else_expr).push_byte(b' ');
        }
        buf.push_str("end");
    }
}

/// A WHEN arm of a CASE expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct When {
    pub cond: BoolExpr,
    pub val: ValExpr,
}

impl SqlNode for When {
    fn format(&self, buf: &mut TrackedBuffer) {
        buf.push_str("when ").write_node(&self.cond).push_str(" then ");
        self.val.format(buf);
    }
}

impl_display!(
    Expr,
    BoolExpr,
    ValExpr,
    ColName,
    ValTuple,
    Subquery,
    RowTuple,
    BinaryExpr,
    UnaryExpr,
    FuncExpr,
    CaseExpr,
    When,
);
