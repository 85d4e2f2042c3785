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

//! SQL Parser
//!
//! Consumes the token stream produced by the tokenizer and builds the AST.
//! One statement per parse; the first syntactic error terminates the parse
//! with no recovery.

use std::fmt;

use log::debug;

use crate::ast::*;
use crate::keywords::Keyword;
use crate::tokenizer::{Token, TokenWithLocation, Tokenizer, TokenizerError, Whitespace};
use crate::tracked_buffer::sql_string;

use recursion::RecursionCounter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParserError {
    TokenizerError(String),
    ParserError(String),
    RecursionLimitExceeded,
}

// Use `Parser::expected` instead, if possible
macro_rules! parser_err {
    ($MSG:expr, $loc:expr) => {
        Err(ParserError::ParserError(format!("{}{}", $MSG, $loc)))
    };
}

/// Tracks remaining recursion depth; exceeding it fails the parse instead
/// of overflowing the stack on pathologically nested input.
mod recursion {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::ParserError;

    pub(crate) struct RecursionCounter {
        remaining_depth: Rc<Cell<usize>>,
    }

    impl RecursionCounter {
        pub fn new(remaining_depth: usize) -> Self {
            Self {
                remaining_depth: Rc::new(remaining_depth.into()),
            }
        }

        /// Decreases the remaining depth by 1, returning a guard that
        /// restores it on drop.
        pub fn try_decrease(&self) -> Result<DepthGuard, ParserError> {
            let old_value = self.remaining_depth.get();
            if old_value == 0 {
                Err(ParserError::RecursionLimitExceeded)
            } else {
                self.remaining_depth.set(old_value - 1);
                Ok(DepthGuard::new(Rc::clone(&self.remaining_depth)))
            }
        }
    }

    pub struct DepthGuard {
        remaining_depth: Rc<Cell<usize>>,
    }

    impl DepthGuard {
        fn new(remaining_depth: Rc<Cell<usize>>) -> Self {
            Self { remaining_depth }
        }
    }

    impl Drop for DepthGuard {
        fn drop(&mut self) {
            let old_value = self.remaining_depth.get();
            self.remaining_depth.set(old_value + 1);
        }
    }
}

impl From<TokenizerError> for ParserError {
    fn from(e: TokenizerError) -> Self {
        ParserError::TokenizerError(e.to_string())
    }
}

impl fmt::Display for ParserError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "sql parser error: {}",
            match self {
                ParserError::TokenizerError(s) => s,
                ParserError::ParserError(s) => s,
                ParserError::RecursionLimitExceeded => "recursion limit exceeded",
            }
        )
    }
}

impl std::error::Error for ParserError {}

// By default, allow expressions up to this deep before erroring
const DEFAULT_REMAINING_DEPTH: usize = 50;

// Value-operator precedence, from the loosest binding up. Boolean
// operators (OR, AND, NOT, comparisons) live above these as explicit
// descent levels.
const PREC_BIT_OR: u8 = 10;
const PREC_BIT_AND: u8 = 15;
const PREC_SHIFT: u8 = 20;
const PREC_ADDITIVE: u8 = 25;
const PREC_MULTIPLICATIVE: u8 = 30;
const PREC_BIT_XOR: u8 = 35;
const PREC_UNARY: u8 = 40;

/// SQL Parser
pub struct Parser {
    tokens: Vec<TokenWithLocation>,
    /// The index of the first unprocessed token in [`Parser::tokens`]
    index: usize,
    /// Ensure the stack does not overflow by limiting recursion depth
    recursion_counter: RecursionCounter,
}

impl Parser {
    /// Create a parser over a located token stream.
    pub fn new(tokens: Vec<TokenWithLocation>) -> Self {
        Parser {
            tokens,
            index: 0,
            recursion_counter: RecursionCounter::new(DEFAULT_REMAINING_DEPTH),
        }
    }

    /// Create a parser over bare tokens (dummy locations).
    pub fn with_tokens(tokens: Vec<Token>) -> Self {
        Parser::new(tokens.into_iter().map(TokenWithLocation::wrap).collect())
    }

    /// Tokenize the SQL string and create a parser over the result.
    pub fn try_with_sql(sql: &str) -> Result<Self, ParserError> {
        let tokens = Tokenizer::new(sql).tokenize_with_location()?;
        Ok(Parser::new(tokens))
    }

    /// Parse the SQL string and return its AST. This is the primary entry
    /// point: exactly one statement, optionally terminated by `;`.
    pub fn parse_sql(sql: &str) -> Result<Statement, ParserError> {
        debug!("parsing sql '{}'", sql);
        let mut parser = Parser::try_with_sql(sql)?;
        parser.parse_single_statement()
    }

    /// Like [`Parser::parse_sql`] for input that is not valid UTF-8.
    pub fn parse_sql_bytes(sql: &[u8]) -> Result<Statement, ParserError> {
        let tokens = Tokenizer::new_bytes(sql).tokenize_with_location()?;
        Parser::new(tokens).parse_single_statement()
    }

    fn parse_single_statement(&mut self) -> Result<Statement, ParserError> {
        let statement = self.parse_statement()?;
        self.consume_token(&Token::SemiColon);
        match self.peek_token() {
            t if t.token == Token::EOF => Ok(statement),
            t => self.expected("end of statement", t),
        }
    }

    /// Parse a single top-level statement, stopping before the statement
    /// separator, if any.
    pub fn parse_statement(&mut self) -> Result<Statement, ParserError> {
        let _guard = self.recursion_counter.try_decrease()?;

        let comments = self.parse_comments();
        let next_token = self.next_token();
        match &next_token.token {
            Token::Word(w) => match w.keyword {
                Keyword::SELECT => {
                    self.prev_token();
                    Ok(self.parse_select_statement(comments)?.into())
                }
                Keyword::INSERT => self.parse_insert(comments),
                Keyword::UPDATE => self.parse_update(comments),
                Keyword::DELETE => self.parse_delete(comments),
                Keyword::SET => self.parse_set(comments),
                Keyword::CREATE => self.parse_create(),
                Keyword::ALTER => self.parse_alter(),
                Keyword::DROP => self.parse_drop(),
                Keyword::RENAME => self.parse_rename(),
                Keyword::SHOW | Keyword::DESCRIBE | Keyword::EXPLAIN => {
                    // only an indicator; the statement is not parsed further
                    self.skip_to_eof();
                    Ok(Statement::Other)
                }
                _ => self.expected("a statement", next_token),
            },
            _ => self.expected("a statement", next_token),
        }
    }

    // ========================================================== SELECT

    /// Parse a SELECT statement, including any UNION/MINUS/EXCEPT/
    /// INTERSECT chain. Chains nest left-associatively.
    fn parse_select_statement(
        &mut self,
        leading_comments: Vec<Vec<u8>>,
    ) -> Result<SelectStatement, ParserError> {
        let mut statement =
            SelectStatement::Select(Box::new(self.parse_select(leading_comments)?));
        while let Some(op) = self.parse_union_op() {
            let right = SelectStatement::Select(Box::new(self.parse_select(Vec::new())?));
            statement = SelectStatement::Union(Box::new(Union {
                op,
                left: statement,
                right,
            }));
        }
        Ok(statement)
    }

    fn parse_union_op(&mut self) -> Option<UnionOp> {
        if self.parse_keyword(Keyword::UNION) {
            if self.parse_keyword(Keyword::ALL) {
                Some(UnionOp::UnionAll)
            } else {
                Some(UnionOp::Union)
            }
        } else if self.parse_keyword(Keyword::MINUS) {
            Some(UnionOp::Minus)
        } else if self.parse_keyword(Keyword::EXCEPT) {
            Some(UnionOp::Except)
        } else if self.parse_keyword(Keyword::INTERSECT) {
            Some(UnionOp::Intersect)
        } else {
            None
        }
    }

    fn parse_select(&mut self, mut comments: Vec<Vec<u8>>) -> Result<Select, ParserError> {
        let _guard = self.recursion_counter.try_decrease()?;

        self.expect_keyword(Keyword::SELECT)?;
        comments.extend(self.parse_comments());
        let distinct = self.parse_keyword(Keyword::DISTINCT);
        let select_exprs = self.parse_comma_separated(Parser::parse_select_expr)?;
        self.expect_keyword(Keyword::FROM)?;
        let from = self.parse_comma_separated(Parser::parse_table_expr)?;
        let where_clause = self.parse_opt_where(WhereKind::Where, Keyword::WHERE)?;
        let time_range = self.parse_opt_time_range()?;
        let group_by = if self.parse_keywords(&[Keyword::GROUP, Keyword::BY]) {
            self.parse_comma_separated(Parser::parse_value_expr)?
        } else {
            Vec::new()
        };
        let having = self.parse_opt_where(WhereKind::Having, Keyword::HAVING)?;
        let order_by = self.parse_opt_order_by()?;
        let limit = self.parse_opt_limit()?;
        let lock = self.parse_opt_lock();

        Ok(Select {
            comments: Comments(comments),
            distinct,
            select_exprs,
            from,
            where_clause,
            time_range,
            group_by,
            having,
            order_by,
            limit,
            lock,
        })
    }

    fn parse_select_expr(&mut self) -> Result<SelectExpr, ParserError> {
        if self.consume_token(&Token::Mult) {
            return Ok(SelectExpr::Star(StarExpr { table_name: None }));
        }
        // `table.*`
        if let Token::Word(w) = self.peek_token().token {
            if (w.quoted || w.keyword == Keyword::NoKeyword)
                && self.peek_nth_token(1).token == Token::Period
                && self.peek_nth_token(2).token == Token::Mult
            {
                self.next_token();
                self.next_token();
                self.next_token();
                return Ok(SelectExpr::Star(StarExpr {
                    table_name: Some(w.value),
                }));
            }
        }
        let expr = self.parse_expression()?;
        let alias = self.parse_opt_alias()?;
        Ok(SelectExpr::NonStar(NonStarExpr { expr, alias }))
    }

    /// `[AS] name`, or nothing.
    fn parse_opt_alias(&mut self) -> Result<Option<Vec<u8>>, ParserError> {
        if self.parse_keyword(Keyword::AS) {
            return Ok(Some(self.parse_identifier()?));
        }
        match self.peek_token().token {
            Token::Word(w) if w.quoted || w.keyword == Keyword::NoKeyword => {
                self.next_token();
                Ok(Some(w.value))
            }
            _ => Ok(None),
        }
    }

    // ============================================================ FROM

    fn parse_table_expr(&mut self) -> Result<TableExpr, ParserError> {
        let mut table = self.parse_table_factor()?;
        while let Some(join) = self.parse_join_kind()? {
            let right = self.parse_table_factor()?;
            let on = if self.parse_keyword(Keyword::ON) {
                Some(self.parse_boolean_expression()?)
            } else {
                None
            };
            table = TableExpr::Join(Box::new(JoinTableExpr {
                left: table,
                join,
                right,
                on,
            }));
        }
        Ok(table)
    }

    fn parse_join_kind(&mut self) -> Result<Option<JoinKind>, ParserError> {
        if self.parse_keyword(Keyword::JOIN) || self.parse_keywords(&[Keyword::INNER, Keyword::JOIN])
        {
            Ok(Some(JoinKind::Join))
        } else if self.parse_keyword(Keyword::STRAIGHT_JOIN) {
            Ok(Some(JoinKind::StraightJoin))
        } else if self.parse_keyword(Keyword::LEFT) {
            let _outer = self.parse_keyword(Keyword::OUTER);
            self.expect_keyword(Keyword::JOIN)?;
            Ok(Some(JoinKind::LeftJoin))
        } else if self.parse_keyword(Keyword::RIGHT) {
            let _outer = self.parse_keyword(Keyword::OUTER);
            self.expect_keyword(Keyword::JOIN)?;
            Ok(Some(JoinKind::RightJoin))
        } else if self.parse_keywords(&[Keyword::CROSS, Keyword::JOIN]) {
            Ok(Some(JoinKind::CrossJoin))
        } else if self.parse_keywords(&[Keyword::NATURAL, Keyword::JOIN]) {
            Ok(Some(JoinKind::NaturalJoin))
        } else {
            Ok(None)
        }
    }

    fn parse_table_factor(&mut self) -> Result<TableExpr, ParserError> {
        if self.consume_token(&Token::LParen) {
            if self.peek_keyword(Keyword::SELECT) {
                let select = self.parse_select_statement(Vec::new())?;
                self.expect_token(&Token::RParen)?;
                let alias = self.parse_opt_alias()?;
                return Ok(TableExpr::Aliased(AliasedTableExpr {
                    expr: SimpleTableExpr::Subquery(Box::new(Subquery { select })),
                    alias,
                    hints: None,
                }));
            }
            let inner = self.parse_table_expr()?;
            self.expect_token(&Token::RParen)?;
            return Ok(TableExpr::Paren(Box::new(inner)));
        }
        let name = self.parse_table_name()?;
        let alias = self.parse_opt_alias()?;
        let hints = self.parse_opt_index_hints()?;
        Ok(TableExpr::Aliased(AliasedTableExpr {
            expr: SimpleTableExpr::TableName(name),
            alias,
            hints,
        }))
    }

    fn parse_table_name(&mut self) -> Result<TableName, ParserError> {
        let first = self.parse_identifier()?;
        if self.consume_token(&Token::Period) {
            let name = self.parse_identifier()?;
            Ok(TableName {
                name,
                qualifier: Some(first),
            })
        } else {
            Ok(TableName {
                name: first,
                qualifier: None,
            })
        }
    }

    fn parse_opt_index_hints(&mut self) -> Result<Option<IndexHints>, ParserError> {
        let kind = if self.parse_keywords(&[Keyword::USE, Keyword::INDEX]) {
            IndexHintKind::Use
        } else if self.parse_keywords(&[Keyword::IGNORE, Keyword::INDEX]) {
            IndexHintKind::Ignore
        } else if self.parse_keywords(&[Keyword::FORCE, Keyword::INDEX]) {
            IndexHintKind::Force
        } else {
            return Ok(None);
        };
        self.expect_token(&Token::LParen)?;
        let indexes = self.parse_comma_separated(Parser::parse_identifier)?;
        self.expect_token(&Token::RParen)?;
        Ok(Some(IndexHints { kind, indexes }))
    }

    // ========================================================= CLAUSES

    fn parse_opt_where(
        &mut self,
        kind: WhereKind,
        keyword: Keyword,
    ) -> Result<Option<Where>, ParserError> {
        if self.parse_keyword(keyword) {
            let expr = self.parse_boolean_expression()?;
            Ok(Where::new(kind, Some(expr)))
        } else {
            Ok(None)
        }
    }

    fn parse_opt_time_range(&mut self) -> Result<Option<TimeRange>, ParserError> {
        if !self.parse_keyword(Keyword::TIMERANGE) {
            return Ok(None);
        }
        let from = self.parse_string_literal()?;
        let to = if self.consume_token(&Token::Comma) {
            Some(self.parse_string_literal()?)
        } else {
            None
        };
        Ok(Some(TimeRange { from, to }))
    }

    fn parse_string_literal(&mut self) -> Result<Vec<u8>, ParserError> {
        let token = self.next_token();
        match token.token {
            Token::StringLiteral(s) => Ok(s),
            _ => self.expected("string literal", token),
        }
    }

    fn parse_opt_order_by(&mut self) -> Result<Vec<Order>, ParserError> {
        if !self.parse_keywords(&[Keyword::ORDER, Keyword::BY]) {
            return Ok(Vec::new());
        }
        self.parse_comma_separated(|parser| {
            let expr = parser.parse_value_expr()?;
            let direction = if parser.parse_keyword(Keyword::DESC) {
                OrderDirection::Desc
            } else {
                // ASC is the default and may be spelled out
                let _ = parser.parse_keyword(Keyword::ASC);
                OrderDirection::Asc
            };
            Ok(Order { expr, direction })
        })
    }

    fn parse_opt_limit(&mut self) -> Result<Option<Limit>, ParserError> {
        if !self.parse_keyword(Keyword::LIMIT) {
            return Ok(None);
        }
        let first = self.parse_value_expr()?;
        if self.consume_token(&Token::Comma) {
            let rowcount = self.parse_value_expr()?;
            Ok(Some(Limit {
                offset: Some(first),
                rowcount,
            }))
        } else {
            Ok(Some(Limit {
                offset: None,
                rowcount: first,
            }))
        }
    }

    fn parse_opt_lock(&mut self) -> Option<LockMode> {
        if self.parse_keywords(&[Keyword::FOR, Keyword::UPDATE]) {
            Some(LockMode::ForUpdate)
        } else if self.parse_keywords(&[
            Keyword::LOCK,
            Keyword::IN,
            Keyword::SHARE,
            Keyword::MODE,
        ]) {
            Some(LockMode::ShareMode)
        } else {
            None
        }
    }

    // ====================================================== DML / SET

    fn parse_insert(&mut self, mut comments: Vec<Vec<u8>>) -> Result<Statement, ParserError> {
        comments.extend(self.parse_comments());
        self.expect_keyword(Keyword::INTO)?;
        let table = self.parse_table_name()?;

        let mut columns = None;
        let rows;
        if self.consume_token(&Token::LParen) {
            if self.peek_keyword(Keyword::SELECT) {
                // `insert into t (select …)`
                let select = self.parse_select_statement(Vec::new())?;
                self.expect_token(&Token::RParen)?;
                rows = insert_rows_from(select);
            } else {
                let column_names = self.parse_comma_separated(Parser::parse_identifier)?;
                self.expect_token(&Token::RParen)?;
                columns = Some(Columns(
                    column_names
                        .into_iter()
                        .map(|name| {
                            SelectExpr::NonStar(NonStarExpr {
                                expr: Expr::Val(ValExpr::ColName(ColName {
                                    name,
                                    qualifier: None,
                                })),
                                alias: None,
                            })
                        })
                        .collect(),
                ));
                rows = self.parse_insert_rows()?;
            }
        } else {
            rows = self.parse_insert_rows()?;
        }

        let on_dup = if self.parse_keywords(&[
            Keyword::ON,
            Keyword::DUPLICATE,
            Keyword::KEY,
            Keyword::UPDATE,
        ]) {
            self.parse_comma_separated(Parser::parse_update_expr)?
        } else {
            Vec::new()
        };

        Ok(Statement::Insert(Box::new(Insert {
            comments: Comments(comments),
            table,
            columns,
            rows,
            on_dup,
        })))
    }

    fn parse_insert_rows(&mut self) -> Result<InsertRows, ParserError> {
        let token = self.peek_token();
        match &token.token {
            Token::Word(w) if w.keyword == Keyword::VALUES => {
                self.next_token();
                let rows = self.parse_comma_separated(Parser::parse_row_tuple)?;
                Ok(InsertRows::Values(rows))
            }
            Token::Word(w) if w.keyword == Keyword::SELECT => {
                Ok(insert_rows_from(self.parse_select_statement(Vec::new())?))
            }
            Token::LParen => {
                self.next_token();
                let select = self.parse_select_statement(Vec::new())?;
                self.expect_token(&Token::RParen)?;
                Ok(insert_rows_from(select))
            }
            _ => self.expected("VALUES or a select statement", token),
        }
    }

    fn parse_row_tuple(&mut self) -> Result<RowTuple, ParserError> {
        if self.peek_token().token == Token::LParen && self.peek_nth_keyword(1, Keyword::SELECT) {
            return Ok(RowTuple::Subquery(Box::new(self.parse_subquery()?)));
        }
        self.expect_token(&Token::LParen)?;
        let exprs = self.parse_comma_separated(Parser::parse_value_expr)?;
        self.expect_token(&Token::RParen)?;
        Ok(RowTuple::ValTuple(ValTuple(exprs)))
    }

    fn parse_update(&mut self, mut comments: Vec<Vec<u8>>) -> Result<Statement, ParserError> {
        comments.extend(self.parse_comments());
        let table = self.parse_table_name()?;
        self.expect_keyword(Keyword::SET)?;
        let exprs = self.parse_comma_separated(Parser::parse_update_expr)?;
        let where_clause = self.parse_opt_where(WhereKind::Where, Keyword::WHERE)?;
        let order_by = self.parse_opt_order_by()?;
        let limit = self.parse_opt_limit()?;
        Ok(Statement::Update(Box::new(Update {
            comments: Comments(comments),
            table,
            exprs,
            where_clause,
            order_by,
            limit,
        })))
    }

    fn parse_delete(&mut self, mut comments: Vec<Vec<u8>>) -> Result<Statement, ParserError> {
        comments.extend(self.parse_comments());
        self.expect_keyword(Keyword::FROM)?;
        let table = self.parse_table_name()?;
        let where_clause = self.parse_opt_where(WhereKind::Where, Keyword::WHERE)?;
        let order_by = self.parse_opt_order_by()?;
        let limit = self.parse_opt_limit()?;
        Ok(Statement::Delete(Box::new(Delete {
            comments: Comments(comments),
            table,
            where_clause,
            order_by,
            limit,
        })))
    }

    fn parse_set(&mut self, mut comments: Vec<Vec<u8>>) -> Result<Statement, ParserError> {
        comments.extend(self.parse_comments());
        let exprs = self.parse_comma_separated(Parser::parse_update_expr)?;
        Ok(Statement::Set(Box::new(Set {
            comments: Comments(comments),
            exprs,
        })))
    }

    fn parse_update_expr(&mut self) -> Result<UpdateExpr, ParserError> {
        let name = self.parse_col_name()?;
        self.expect_token(&Token::Eq)?;
        let expr = self.parse_value_expr()?;
        Ok(UpdateExpr { name, expr })
    }

    fn parse_col_name(&mut self) -> Result<ColName, ParserError> {
        let first = self.parse_identifier()?;
        if self.consume_token(&Token::Period) {
            let name = self.parse_identifier()?;
            Ok(ColName {
                name,
                qualifier: Some(first),
            })
        } else {
            Ok(ColName {
                name: first,
                qualifier: None,
            })
        }
    }

    // ============================================================= DDL

    fn parse_create(&mut self) -> Result<Statement, ParserError> {
        if self.parse_keyword(Keyword::TABLE) {
            let _ = self.parse_keywords(&[Keyword::IF, Keyword::NOT, Keyword::EXISTS]);
            let name = self.parse_identifier()?;
            if self.peek_token().token == Token::LParen {
                let columns = self.parse_column_definitions()?;
                return Ok(Statement::CreateTable(CreateTable { name, columns }));
            }
            self.skip_to_eof();
            return Ok(Statement::Ddl(Ddl {
                action: DdlAction::Create,
                table: None,
                new_name: Some(name),
            }));
        }
        self.expect_keyword(Keyword::VIEW)?;
        let name = self.parse_identifier()?;
        self.skip_to_eof();
        Ok(Statement::Ddl(Ddl {
            action: DdlAction::Create,
            table: None,
            new_name: Some(name),
        }))
    }

    fn parse_alter(&mut self) -> Result<Statement, ParserError> {
        let _ = self.parse_keyword(Keyword::IGNORE);
        if !self.parse_keyword(Keyword::TABLE) {
            self.expect_keyword(Keyword::VIEW)?;
        }
        let name = self.parse_identifier()?;
        if self.parse_keyword(Keyword::RENAME) {
            let _ = self.parse_keyword(Keyword::TO);
            let new_name = self.parse_identifier()?;
            self.skip_to_eof();
            return Ok(Statement::Ddl(Ddl {
                action: DdlAction::Rename,
                table: Some(name),
                new_name: Some(new_name),
            }));
        }
        self.skip_to_eof();
        Ok(Statement::Ddl(Ddl {
            action: DdlAction::Alter,
            table: Some(name.clone()),
            new_name: Some(name),
        }))
    }

    fn parse_drop(&mut self) -> Result<Statement, ParserError> {
        if !self.parse_keyword(Keyword::TABLE) {
            self.expect_keyword(Keyword::VIEW)?;
        }
        let _ = self.parse_keywords(&[Keyword::IF, Keyword::EXISTS]);
        let name = self.parse_identifier()?;
        self.skip_to_eof();
        Ok(Statement::Ddl(Ddl {
            action: DdlAction::Drop,
            table: Some(name),
            new_name: None,
        }))
    }

    fn parse_rename(&mut self) -> Result<Statement, ParserError> {
        self.expect_keyword(Keyword::TABLE)?;
        let table = self.parse_identifier()?;
        let _ = self.parse_keyword(Keyword::TO);
        let new_name = self.parse_identifier()?;
        Ok(Statement::Ddl(Ddl {
            action: DdlAction::Rename,
            table: Some(table),
            new_name: Some(new_name),
        }))
    }

    fn parse_column_definitions(&mut self) -> Result<Vec<ColumnDefinition>, ParserError> {
        self.expect_token(&Token::LParen)?;
        let columns = self.parse_comma_separated(Parser::parse_column_definition)?;
        self.expect_token(&Token::RParen)?;
        Ok(columns)
    }

    fn parse_column_definition(&mut self) -> Result<ColumnDefinition, ParserError> {
        let name = self.parse_identifier()?;
        let col_type = self.parse_column_type()?;
        let mut attrs = Vec::new();
        loop {
            if self.parse_keywords(&[Keyword::NOT, Keyword::NULL]) {
                attrs.push("not null".to_owned());
            } else if self.parse_keyword(Keyword::AUTO_INCREMENT) {
                attrs.push("auto_increment".to_owned());
            } else if self.parse_keywords(&[Keyword::PRIMARY, Keyword::KEY]) {
                attrs.push("primary key".to_owned());
            } else if self.parse_keywords(&[Keyword::UNIQUE, Keyword::KEY]) {
                attrs.push("unique key".to_owned());
            } else if self.parse_keyword(Keyword::KEY) {
                attrs.push("key".to_owned());
            } else if self.parse_keyword(Keyword::UNSIGNED) {
                attrs.push("unsigned".to_owned());
            } else if self.parse_keyword(Keyword::ZEROFILL) {
                attrs.push("zerofill".to_owned());
            } else if self.parse_keyword(Keyword::DEFAULT) {
                attrs.push(format!("default {}", self.parse_default_value()?));
            } else {
                break;
            }
        }
        Ok(ColumnDefinition {
            name,
            col_type,
            attrs,
        })
    }

    fn parse_default_value(&mut self) -> Result<String, ParserError> {
        let token = self.next_token();
        let value = match token.token {
            Token::StringLiteral(s) => ValExpr::StrVal(s),
            Token::Number(n) => ValExpr::NumVal(n),
            Token::Word(ref w) if w.keyword == Keyword::NULL => ValExpr::NullVal,
            _ => return self.expected("default value", token),
        };
        Ok(sql_string(&value))
    }

    fn parse_column_type(&mut self) -> Result<ColumnType, ParserError> {
        let token = self.next_token();
        let col_type = match &token.token {
            Token::Word(w) => match w.keyword {
                Keyword::BIT => ColumnType::Bit,
                Keyword::TINYINT => ColumnType::TinyInt,
                Keyword::SMALLINT => ColumnType::SmallInt,
                Keyword::MEDIUMINT => ColumnType::MediumInt,
                Keyword::INT => ColumnType::Int,
                Keyword::INTEGER => ColumnType::Integer,
                Keyword::BIGINT => ColumnType::BigInt,
                Keyword::REAL => ColumnType::Real,
                Keyword::DOUBLE => ColumnType::Double,
                Keyword::FLOAT => ColumnType::Float,
                Keyword::DECIMAL => ColumnType::Decimal,
                Keyword::NUMERIC => ColumnType::Numeric,
                Keyword::CHAR => ColumnType::Char,
                Keyword::VARCHAR => ColumnType::VarChar,
                Keyword::TEXT => ColumnType::Text,
                Keyword::DATE => ColumnType::Date,
                Keyword::TIME => ColumnType::Time,
                Keyword::TIMESTAMP => ColumnType::Timestamp,
                Keyword::DATETIME => ColumnType::DateTime,
                Keyword::YEAR => ColumnType::Year,
                _ => return self.expected("column type", token),
            },
            _ => return self.expected("column type", token),
        };
        Ok(col_type)
    }

    // ===================================================== EXPRESSIONS

    /// Parse an expression: boolean or value, as the grammar position
    /// allows.
    pub fn parse_expression(&mut self) -> Result<Expr, ParserError> {
        let _guard = self.recursion_counter.try_decrease()?;
        self.parse_or_expr()
    }

    /// Parse an expression that must be boolean (WHERE, HAVING, ON, WHEN).
    pub fn parse_boolean_expression(&mut self) -> Result<BoolExpr, ParserError> {
        let expr = self.parse_expression()?;
        self.expr_into_bool(expr)
    }

    fn expr_into_bool(&self, expr: Expr) -> Result<BoolExpr, ParserError> {
        match expr {
            Expr::Bool(b) => Ok(b),
            Expr::Val(v) => Err(ParserError::ParserError(format!(
                "expected boolean expression near: {}",
                sql_string(&v)
            ))),
        }
    }

    fn parse_or_expr(&mut self) -> Result<Expr, ParserError> {
        let mut expr = self.parse_and_expr()?;
        loop {
            // `||` is boolean OR in this dialect
            if !self.parse_keyword(Keyword::OR) && !self.consume_token(&Token::DoublePipe) {
                return Ok(expr);
            }
            let left = self.expr_into_bool(expr)?;
            let right_expr = self.parse_and_expr()?;
            let right = self.expr_into_bool(right_expr)?;
            expr = Expr::Bool(BoolExpr::Or {
                left: Box::new(left),
                right: Box::new(right),
            });
        }
    }

    fn parse_and_expr(&mut self) -> Result<Expr, ParserError> {
        let mut expr = self.parse_not_expr()?;
        while self.parse_keyword(Keyword::AND) {
            let left = self.expr_into_bool(expr)?;
            let right_expr = self.parse_not_expr()?;
            let right = self.expr_into_bool(right_expr)?;
            expr = Expr::Bool(BoolExpr::And {
                left: Box::new(left),
                right: Box::new(right),
            });
        }
        Ok(expr)
    }

    fn parse_not_expr(&mut self) -> Result<Expr, ParserError> {
        if self.parse_keyword(Keyword::NOT) {
            let inner = self.parse_not_expr()?;
            let inner = self.expr_into_bool(inner)?;
            return Ok(Expr::Bool(BoolExpr::Not(Box::new(inner))));
        }
        self.parse_condition()
    }

    /// The comparison level. Non-associative: at most one comparison per
    /// descent, so `a = b = c` does not parse.
    fn parse_condition(&mut self) -> Result<Expr, ParserError> {
        if self.parse_keyword(Keyword::EXISTS) {
            let subquery = self.parse_subquery()?;
            return Ok(Expr::Bool(BoolExpr::Exists(Box::new(subquery))));
        }

        // Whether `(` opens a boolean group or a value tuple is only known
        // after parsing the first inner expression, so parse it once and
        // decide on its kind.
        let left = if self.peek_token().token == Token::LParen
            && !self.peek_nth_keyword(1, Keyword::SELECT)
        {
            self.next_token();
            match self.parse_expression()? {
                Expr::Bool(inner) => {
                    self.expect_token(&Token::RParen)?;
                    return Ok(Expr::Bool(BoolExpr::Paren(Box::new(inner))));
                }
                Expr::Val(first) => {
                    let mut exprs = vec![first];
                    while self.consume_token(&Token::Comma) {
                        exprs.push(self.parse_value_expr()?);
                    }
                    self.expect_token(&Token::RParen)?;
                    // value operators may still apply, e.g. `(a + 1) * 2`
                    self.parse_value_infix_loop(ValExpr::Tuple(ValTuple(exprs)), 0)?
                }
            }
        } else {
            self.parse_value_expr()?
        };

        if let Some(op) = self.parse_comparison_op() {
            let right = if matches!(op, ComparisonOp::In | ComparisonOp::NotIn) {
                self.parse_col_tuple()?.into()
            } else {
                self.parse_value_expr()?
            };
            return Ok(Expr::Bool(BoolExpr::Comparison {
                op,
                left: Box::new(left),
                right: Box::new(right),
            }));
        }

        if self.parse_keyword(Keyword::BETWEEN) {
            return self.parse_range(RangeOp::Between, left);
        }
        if self.parse_keywords(&[Keyword::NOT, Keyword::BETWEEN]) {
            return self.parse_range(RangeOp::NotBetween, left);
        }

        if self.parse_keyword(Keyword::IS) {
            let op = if self.parse_keyword(Keyword::NOT) {
                NullCheckOp::IsNotNull
            } else {
                NullCheckOp::IsNull
            };
            self.expect_keyword(Keyword::NULL)?;
            return Ok(Expr::Bool(BoolExpr::NullCheck {
                op,
                expr: Box::new(left),
            }));
        }

        Ok(Expr::Val(left))
    }

    fn parse_comparison_op(&mut self) -> Option<ComparisonOp> {
        let op = match self.peek_token().token {
            Token::Eq => Some(ComparisonOp::Eq),
            Token::Lt => Some(ComparisonOp::Lt),
            Token::Gt => Some(ComparisonOp::Gt),
            Token::LtEq => Some(ComparisonOp::LtEq),
            Token::GtEq => Some(ComparisonOp::GtEq),
            Token::Neq => Some(ComparisonOp::Neq),
            Token::NullSafeEq => Some(ComparisonOp::NullSafeEq),
            _ => None,
        };
        if op.is_some() {
            self.next_token();
            return op;
        }
        if self.parse_keyword(Keyword::IN) {
            Some(ComparisonOp::In)
        } else if self.parse_keyword(Keyword::LIKE) {
            Some(ComparisonOp::Like)
        } else if self.parse_keywords(&[Keyword::NOT, Keyword::IN]) {
            Some(ComparisonOp::NotIn)
        } else if self.parse_keywords(&[Keyword::NOT, Keyword::LIKE]) {
            Some(ComparisonOp::NotLike)
        } else {
            None
        }
    }

    fn parse_range(&mut self, op: RangeOp, left: ValExpr) -> Result<Expr, ParserError> {
        let from = self.parse_value_expr()?;
        self.expect_keyword(Keyword::AND)?;
        let to = self.parse_value_expr()?;
        Ok(Expr::Bool(BoolExpr::Range {
            op,
            left: Box::new(left),
            from: Box::new(from),
            to: Box::new(to),
        }))
    }

    /// The shapes accepted on the right of `IN` / `NOT IN`.
    fn parse_col_tuple(&mut self) -> Result<ColTuple, ParserError> {
        let token = self.peek_token();
        match &token.token {
            Token::ListArg(_) => {
                if let Token::ListArg(arg) = self.next_token().token {
                    Ok(ColTuple::ListArg(arg))
                } else {
                    unreachable!()
                }
            }
            Token::LParen if self.peek_nth_keyword(1, Keyword::SELECT) => {
                Ok(ColTuple::Subquery(Box::new(self.parse_subquery()?)))
            }
            Token::LParen => {
                self.next_token();
                let exprs = self.parse_comma_separated(Parser::parse_value_expr)?;
                self.expect_token(&Token::RParen)?;
                Ok(ColTuple::ValTuple(ValTuple(exprs)))
            }
            _ => self.expected("a tuple, subquery or list bind variable", token),
        }
    }

    fn parse_subquery(&mut self) -> Result<Subquery, ParserError> {
        self.expect_token(&Token::LParen)?;
        let select = self.parse_select_statement(Vec::new())?;
        self.expect_token(&Token::RParen)?;
        Ok(Subquery { select })
    }

    /// Parse a value expression (no boolean operators).
    pub fn parse_value_expr(&mut self) -> Result<ValExpr, ParserError> {
        self.parse_value_subexpr(0)
    }

    /// Precedence climbing over the value operators.
    fn parse_value_subexpr(&mut self, precedence: u8) -> Result<ValExpr, ParserError> {
        let _guard = self.recursion_counter.try_decrease()?;

        let prefix = self.parse_value_prefix()?;
        self.parse_value_infix_loop(prefix, precedence)
    }

    fn parse_value_infix_loop(
        &mut self,
        mut expr: ValExpr,
        precedence: u8,
    ) -> Result<ValExpr, ParserError> {
        loop {
            let next_precedence = self.get_next_value_precedence();
            if precedence >= next_precedence {
                return Ok(expr);
            }
            expr = self.parse_value_infix(expr, next_precedence)?;
        }
    }

    fn get_next_value_precedence(&self) -> u8 {
        match self.peek_token().token {
            Token::Pipe => PREC_BIT_OR,
            Token::Ampersand => PREC_BIT_AND,
            Token::ShiftLeft | Token::ShiftRight => PREC_SHIFT,
            Token::Plus | Token::Minus => PREC_ADDITIVE,
            Token::Mult | Token::Div | Token::Mod => PREC_MULTIPLICATIVE,
            Token::Caret => PREC_BIT_XOR,
            _ => 0,
        }
    }

    fn parse_value_infix(
        &mut self,
        left: ValExpr,
        precedence: u8,
    ) -> Result<ValExpr, ParserError> {
        let token = self.next_token();
        let op = match token.token {
            Token::Pipe => BinaryOp::BitOr,
            Token::Ampersand => BinaryOp::BitAnd,
            Token::ShiftLeft => BinaryOp::ShiftLeft,
            Token::ShiftRight => BinaryOp::ShiftRight,
            Token::Plus => BinaryOp::Plus,
            Token::Minus => BinaryOp::Minus,
            Token::Mult => BinaryOp::Mult,
            Token::Div => BinaryOp::Div,
            Token::Mod => BinaryOp::Mod,
            Token::Caret => BinaryOp::BitXor,
            _ => return self.expected("a value operator", token),
        };
        let right = self.parse_value_subexpr(precedence)?;
        Ok(ValExpr::Binary(Box::new(BinaryExpr { op, left, right })))
    }

    fn parse_value_prefix(&mut self) -> Result<ValExpr, ParserError> {
        let token = self.next_token();
        match token.token {
            Token::StringLiteral(s) => Ok(ValExpr::StrVal(s)),
            Token::Number(n) => Ok(ValExpr::NumVal(n)),
            Token::ValArg(v) => Ok(ValExpr::ValArg(v)),
            Token::ListArg(l) => Ok(ValExpr::ListArg(l)),
            Token::Plus => {
                // unary plus on a numeric literal is dropped
                let operand = self.parse_value_subexpr(PREC_UNARY)?;
                match operand {
                    num @ ValExpr::NumVal(_) => Ok(num),
                    operand => Ok(ValExpr::Unary(Box::new(UnaryExpr {
                        op: UnaryOp::Plus,
                        expr: operand,
                    }))),
                }
            }
            Token::Minus => {
                // unary minus folds into a numeric literal
                let operand = self.parse_value_subexpr(PREC_UNARY)?;
                match operand {
                    ValExpr::NumVal(n) if n.first() != Some(&b'-') => {
                        let mut v = Vec::with_capacity(n.len() + 1);
                        v.push(b'-');
                        v.extend_from_slice(&n);
                        Ok(ValExpr::NumVal(v))
                    }
                    operand => Ok(ValExpr::Unary(Box::new(UnaryExpr {
                        op: UnaryOp::Minus,
                        expr: operand,
                    }))),
                }
            }
            Token::Tilde => {
                let operand = self.parse_value_subexpr(PREC_UNARY)?;
                Ok(ValExpr::Unary(Box::new(UnaryExpr {
                    op: UnaryOp::Tilde,
                    expr: operand,
                })))
            }
            Token::LParen => {
                if self.peek_keyword(Keyword::SELECT) {
                    let select = self.parse_select_statement(Vec::new())?;
                    self.expect_token(&Token::RParen)?;
                    return Ok(ValExpr::Subquery(Box::new(Subquery { select })));
                }
                let exprs = self.parse_comma_separated(Parser::parse_value_expr)?;
                self.expect_token(&Token::RParen)?;
                Ok(ValExpr::Tuple(ValTuple(exprs)))
            }
            Token::Word(w) => match w.keyword {
                Keyword::NULL => Ok(ValExpr::NullVal),
                Keyword::CASE => self.parse_case_expr(),
                _ if w.quoted || w.keyword == Keyword::NoKeyword => {
                    if self.peek_token().token == Token::LParen {
                        return self.parse_function(w.value);
                    }
                    if self.consume_token(&Token::Period) {
                        let name = self.parse_identifier()?;
                        return Ok(ValExpr::ColName(ColName {
                            name,
                            qualifier: Some(w.value),
                        }));
                    }
                    Ok(ValExpr::ColName(ColName {
                        name: w.value,
                        qualifier: None,
                    }))
                }
                _ => self.expected("a value expression", TokenWithLocation {
                    token: Token::Word(w),
                    location: token.location,
                }),
            },
            _ => self.expected("a value expression", token),
        }
    }

    /// Function call arguments reuse the select-expression grammar so that
    /// `count(*)` and `count(distinct x)` parse uniformly.
    fn parse_function(&mut self, name: Vec<u8>) -> Result<ValExpr, ParserError> {
        self.expect_token(&Token::LParen)?;
        let distinct = self.parse_keyword(Keyword::DISTINCT);
        let exprs = if self.peek_token().token == Token::RParen {
            Vec::new()
        } else {
            self.parse_comma_separated(Parser::parse_select_expr)?
        };
        self.expect_token(&Token::RParen)?;
        Ok(ValExpr::Func(Box::new(FuncExpr {
            name,
            distinct,
            exprs,
        })))
    }

    fn parse_case_expr(&mut self) -> Result<ValExpr, ParserError> {
        let expr = if self.peek_keyword(Keyword::WHEN) {
            None
        } else {
            Some(Box::new(self.parse_value_expr()?))
        };
        let mut whens = Vec::new();
        while self.parse_keyword(Keyword::WHEN) {
            let cond = self.parse_boolean_expression()?;
            self.expect_keyword(Keyword::THEN)?;
            let val = self.parse_value_expr()?;
            whens.push(When { cond, val });
        }
        if whens.is_empty() {
            let token = self.peek_token();
            return self.expected("WHEN", token);
        }
        let else_expr = if self.parse_keyword(Keyword::ELSE) {
            Some(Box::new(self.parse_value_expr()?))
        } else {
            None
        };
        self.expect_keyword(Keyword::END)?;
        Ok(ValExpr::Case(Box::new(CaseExpr {
            expr,
            whens,
            else_expr,
        })))
    }

    // ==================================================== TOKEN ACCESS

    /// Collect the comments at the current position, skipping plain
    /// whitespace. Raw bytes, delimiters included. Only `/* … */` comments
    /// are kept: a single-line comment would swallow the rest of the
    /// statement when re-emitted on the canonical single line.
    fn parse_comments(&mut self) -> Vec<Vec<u8>> {
        let mut comments = Vec::new();
        while let Some(TokenWithLocation {
            token: Token::Whitespace(ws),
            ..
        }) = self.tokens.get(self.index)
        {
            if matches!(ws, Whitespace::MultiLineComment(_)) {
                if let Some(comment) = ws.as_comment() {
                    comments.push(comment);
                }
            }
            self.index += 1;
        }
        comments
    }

    /// Consume every remaining token. Used for the opaque statement tails
    /// (SHOW/DESCRIBE/EXPLAIN, DDL suffixes) whose content is not retained.
    fn skip_to_eof(&mut self) {
        self.index = self.tokens.len();
    }

    /// Return the first non-whitespace token that has not yet been
    /// processed (EOF if none).
    pub fn peek_token(&self) -> TokenWithLocation {
        self.peek_nth_token(0)
    }

    /// Return the nth non-whitespace token that has not yet been processed.
    pub fn peek_nth_token(&self, mut n: usize) -> TokenWithLocation {
        let mut index = self.index;
        loop {
            index += 1;
            match self.tokens.get(index - 1) {
                Some(TokenWithLocation {
                    token: Token::Whitespace(_),
                    ..
                }) => continue,
                non_whitespace => {
                    if n == 0 {
                        return non_whitespace
                            .cloned()
                            .unwrap_or_else(|| TokenWithLocation::wrap(Token::EOF));
                    }
                    n -= 1;
                }
            }
        }
    }

    fn peek_keyword(&self, expected: Keyword) -> bool {
        self.peek_nth_keyword(0, expected)
    }

    fn peek_nth_keyword(&self, n: usize, expected: Keyword) -> bool {
        matches!(self.peek_nth_token(n).token, Token::Word(w) if w.keyword == expected)
    }

    /// Return the first non-whitespace token that has not yet been
    /// processed and mark it as processed. OK to call repeatedly after
    /// reaching EOF.
    pub fn next_token(&mut self) -> TokenWithLocation {
        loop {
            self.index += 1;
            match self.tokens.get(self.index - 1) {
                Some(TokenWithLocation {
                    token: Token::Whitespace(_),
                    ..
                }) => continue,
                token => {
                    return token
                        .cloned()
                        .unwrap_or_else(|| TokenWithLocation::wrap(Token::EOF))
                }
            }
        }
    }

    /// Push back the last consumed non-whitespace token. Must be called
    /// after `next_token()`, otherwise might panic.
    pub fn prev_token(&mut self) {
        loop {
            assert!(self.index > 0);
            self.index -= 1;
            if let Some(TokenWithLocation {
                token: Token::Whitespace(_),
                ..
            }) = self.tokens.get(self.index)
            {
                continue;
            }
            return;
        }
    }

    /// Report that `found` was encountered instead of `expected`
    pub fn expected<T>(
        &self,
        expected: &str,
        found: TokenWithLocation,
    ) -> Result<T, ParserError> {
        parser_err!(
            format!("expected {}, found: {}", expected, found),
            found.location
        )
    }

    /// If the current token is the `expected` keyword, consume it and
    /// return true. Otherwise no tokens are consumed and return false.
    #[must_use]
    pub fn parse_keyword(&mut self, expected: Keyword) -> bool {
        match self.peek_token().token {
            Token::Word(w) if expected == w.keyword => {
                self.next_token();
                true
            }
            _ => false,
        }
    }

    /// If the current and subsequent tokens exactly match the `keywords`
    /// sequence, consume them and return true. Otherwise no tokens are
    /// consumed and return false.
    #[must_use]
    pub fn parse_keywords(&mut self, keywords: &[Keyword]) -> bool {
        let index = self.index;
        for &keyword in keywords {
            if !self.parse_keyword(keyword) {
                self.index = index;
                return false;
            }
        }
        true
    }

    /// If the current token is one of the given `keywords`, consume it and
    /// return the matching keyword.
    #[must_use]
    pub fn parse_one_of_keywords(&mut self, keywords: &[Keyword]) -> Option<Keyword> {
        match self.peek_token().token {
            Token::Word(w) => keywords
                .iter()
                .find(|keyword| **keyword == w.keyword)
                .map(|keyword| {
                    self.next_token();
                    *keyword
                }),
            _ => None,
        }
    }

    /// If the current token is the `expected` keyword, consume the token.
    /// Otherwise, return an error.
    pub fn expect_keyword(&mut self, expected: Keyword) -> Result<(), ParserError> {
        if self.parse_keyword(expected) {
            Ok(())
        } else {
            let token = self.peek_token();
            self.expected(&format!("{:?}", expected), token)
        }
    }

    /// Consume the next token if it matches the expected token, otherwise
    /// return false
    #[must_use]
    pub fn consume_token(&mut self, expected: &Token) -> bool {
        if self.peek_token() == *expected {
            self.next_token();
            true
        } else {
            false
        }
    }

    /// Bail out if the current token is not the expected token, or consume
    /// it if it is
    pub fn expect_token(&mut self, expected: &Token) -> Result<(), ParserError> {
        if self.consume_token(expected) {
            Ok(())
        } else {
            let token = self.peek_token();
            self.expected(&expected.to_string(), token)
        }
    }

    /// Run a parser method, reverting back to the current position if
    /// unsuccessful.
    pub fn maybe_parse<T, F>(&mut self, mut f: F) -> Option<T>
    where
        F: FnMut(&mut Parser) -> Result<T, ParserError>,
    {
        let index = self.index;
        if let Ok(t) = f(self) {
            return Some(t);
        }
        self.index = index;
        None
    }

    /// Parse a comma-separated list of 1+ items accepted by `F`
    pub fn parse_comma_separated<T, F>(&mut self, mut f: F) -> Result<Vec<T>, ParserError>
    where
        F: FnMut(&mut Parser) -> Result<T, ParserError>,
    {
        let mut values = vec![];
        loop {
            values.push(f(self)?);
            if !self.consume_token(&Token::Comma) {
                break;
            }
        }
        Ok(values)
    }

    /// Parse a bare or backtick-quoted identifier; reserved words are
    /// rejected unless quoted.
    pub fn parse_identifier(&mut self) -> Result<Vec<u8>, ParserError> {
        let token = self.next_token();
        match token.token {
            Token::Word(ref w) if w.quoted || w.keyword == Keyword::NoKeyword => {
                Ok(w.value.clone())
            }
            _ => self.expected("identifier", token),
        }
    }
}

fn insert_rows_from(statement: SelectStatement) -> InsertRows {
    match statement {
        SelectStatement::Select(s) => InsertRows::Select(s),
        SelectStatement::Union(u) => InsertRows::Union(u),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keyword_does_not_consume_on_mismatch() {
        let mut parser = Parser::try_with_sql("select 1").unwrap();
        assert!(!parser.parse_keyword(Keyword::FROM));
        assert!(parser.parse_keyword(Keyword::SELECT));
    }

    #[test]
    fn parse_keywords_resets_on_partial_match() {
        let mut parser = Parser::try_with_sql("not null").unwrap();
        assert!(!parser.parse_keywords(&[Keyword::NOT, Keyword::BETWEEN]));
        assert!(parser.parse_keywords(&[Keyword::NOT, Keyword::NULL]));
    }

    #[test]
    fn deeply_nested_expression_exceeds_recursion_limit() {
        let mut sql = String::from("select ");
        for _ in 0..200 {
            sql.push_str("(1 + ");
        }
        sql.push('1');
        for _ in 0..200 {
            sql.push(')');
        }
        sql.push_str(" from t");
        assert_eq!(
            Parser::parse_sql(&sql),
            Err(ParserError::RecursionLimitExceeded)
        );
    }

    #[test]
    fn trailing_input_is_rejected() {
        let res = Parser::parse_sql("select a from t; select b from t");
        assert!(matches!(res, Err(ParserError::ParserError(_))));
    }
}
