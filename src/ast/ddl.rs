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

//! DDL nodes.
//!
//! DDL parsing is deliberately shallow: only the action and the table
//! names involved are retained. The one exception is `CREATE TABLE` with a
//! column list, which is promoted to the richer [`CreateTable`] node.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::tracked_buffer::{impl_display, SqlNode, TrackedBuffer};

/// A shallow CREATE, ALTER, DROP or RENAME statement.
///
/// `table` is set for alter, drop and rename; `new_name` is set for
/// create, alter (same as `table`) and rename.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ddl {
    pub action: DdlAction,
    pub table: Option<Vec<u8>>,
    pub new_name: Option<Vec<u8>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DdlAction {
    Create,
    Alter,
    Drop,
    Rename,
}

impl DdlAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            DdlAction::Create => "create",
            DdlAction::Alter => "alter",
            DdlAction::Drop => "drop",
            DdlAction::Rename => "rename",
        }
    }
}

impl SqlNode for Ddl {
    fn format(&self, buf: &mut TrackedBuffer) {
        match self.action {
            DdlAction::Create => {
                buf.push_str("create table ");
                if let Some(new_name) = &self.new_name {
                    buf.write_escaped_id(new_name);
                }
            }
            DdlAction::Rename => {
                buf.push_str("rename table ");
                if let Some(table) = &self.table {
                    buf.write_escaped_id(table);
                }
                buf.push_str(" to ");
                if let Some(new_name) = &self.new_name {
                    buf.write_escaped_id(new_name);
                }
            }
            _ => {
                buf.push_str(self.action.as_str()).push_str(" table ");
                if let Some(table) = &self.table {
                    buf.write_escaped_id(table);
                }
            }
        }
    }
}

/// A CREATE TABLE statement with its column list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CreateTable {
    pub name: Vec<u8>,
    pub columns: Vec<ColumnDefinition>,
}

impl SqlNode for CreateTable {
    fn format(&self, buf: &mut TrackedBuffer) {
        buf.push_str("create table ").write_escaped_id(&self.name).push_str(" (\n");
        let mut delim = "";
        for column in &self.columns {
            buf.push_str(delim).push_byte(b'\t');
            column.format(buf);
            delim = ",\n";
        }
        buf.push_str("\n)");
    }
}

/// One column of a CREATE TABLE statement: name, type keyword, and the
/// attribute strings in the order written.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ColumnDefinition {
    pub name: Vec<u8>,
    pub col_type: ColumnType,
    pub attrs: Vec<String>,
}

impl SqlNode for ColumnDefinition {
    fn format(&self, buf: &mut TrackedBuffer) {
        buf.write_escaped_id(&self.name).push_byte(b' ').push_str(self.col_type.as_str());
        for attr in &self.attrs {
            buf.push_byte(b' ').push_str(attr);
        }
    }
}

/// The column types the restricted DDL grammar accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ColumnType {
    Bit,
    TinyInt,
    SmallInt,
    MediumInt,
    Int,
    Integer,
    BigInt,
    Real,
    Double,
    Float,
    Decimal,
    Numeric,
    Char,
    VarChar,
    Text,
    Date,
    Time,
    Timestamp,
    DateTime,
    Year,
}

impl ColumnType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Bit => "bit",
            ColumnType::TinyInt => "tinyint",
            ColumnType::SmallInt => "smallint",
            ColumnType::MediumInt => "mediumint",
            ColumnType::Int => "int",
            ColumnType::Integer => "integer",
            ColumnType::BigInt => "bigint",
            ColumnType::Real => "real",
            ColumnType::Double => "double",
            ColumnType::Float => "float",
            ColumnType::Decimal => "decimal",
            ColumnType::Numeric => "numeric",
            ColumnType::Char => "char",
            ColumnType::VarChar => "varchar",
            ColumnType::Text => "text",
            ColumnType::Date => "date",
            ColumnType::Time => "time",
            ColumnType::Timestamp => "timestamp",
            ColumnType::DateTime => "datetime",
            ColumnType::Year => "year",
        }
    }
}

impl_display!(Ddl, CreateTable, ColumnDefinition);
