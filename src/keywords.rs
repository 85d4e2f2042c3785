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

//! Reserved words of the dialect.
//!
//! The single source of truth is the `define_keywords!` invocation below,
//! which expands into the [`Keyword`] enum and two parallel tables:
//! `ALL_KEYWORDS` (the uppercase spellings, sorted so they can be binary
//! searched) and `ALL_KEYWORDS_INDEX` (the enum value at the same position).
//!
//! The table is shared by the tokenizer, which classifies identifiers, and
//! by the formatter, which backtick-escapes any identifier that would
//! otherwise read back as a reserved word.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Defines a string constant for a single keyword: `kw_def!(SELECT);`
/// expands to `pub const SELECT = "SELECT";`
macro_rules! kw_def {
    ($ident:ident = $string_keyword:expr) => {
        pub const $ident: &'static str = $string_keyword;
    };
    ($ident:ident) => {
        kw_def!($ident = stringify!($ident));
    };
}

/// Expands to the [`Keyword`] enum and the `ALL_KEYWORDS` /
/// `ALL_KEYWORDS_INDEX` lookup tables.
macro_rules! define_keywords {
    ($(
        $ident:ident $(= $string_keyword:expr)?
    ),*) => {
        #[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[allow(non_camel_case_types)]
        pub enum Keyword {
            NoKeyword,
            $($ident),*
        }

        pub const ALL_KEYWORDS_INDEX: &[Keyword] = &[
            $(Keyword::$ident),*
        ];

        $(kw_def!($ident $(= $string_keyword)?);)*

        /// All keyword spellings, sorted for binary search.
        pub const ALL_KEYWORDS: &[&str] = &[
            $($ident),*
        ];
    };
}

// NOTE: this list must be kept sorted.
define_keywords!(
    ALL,
    ALTER,
    AND,
    AS,
    ASC,
    AUTO_INCREMENT,
    BETWEEN,
    BIGINT,
    BIT,
    BY,
    CASE,
    CHAR,
    CREATE,
    CROSS,
    DATE,
    DATETIME,
    DECIMAL,
    DEFAULT,
    DELETE,
    DESC,
    DESCRIBE,
    DISTINCT,
    DOUBLE,
    DROP,
    DUPLICATE,
    ELSE,
    END,
    EXCEPT,
    EXISTS,
    EXPLAIN,
    FLOAT,
    FOR,
    FORCE,
    FROM,
    GROUP,
    HAVING,
    IF,
    IGNORE,
    IN,
    INDEX,
    INNER,
    INSERT,
    INT,
    INTEGER,
    INTERSECT,
    INTO,
    IS,
    JOIN,
    KEY,
    LEFT,
    LIKE,
    LIMIT,
    LOCK,
    MEDIUMINT,
    MINUS,
    MODE,
    NATURAL,
    NOT,
    NULL,
    NUMERIC,
    ON,
    OR,
    ORDER,
    OUTER,
    PRIMARY,
    REAL,
    RENAME,
    RIGHT,
    SELECT,
    SET,
    SHARE,
    SHOW,
    SMALLINT,
    STRAIGHT_JOIN,
    TABLE,
    TEXT,
    THEN,
    TIME,
    TIMERANGE,
    TIMESTAMP,
    TINYINT,
    TO,
    UNION,
    UNIQUE,
    UNSIGNED,
    UPDATE,
    USE,
    VALUES,
    VARCHAR,
    VIEW,
    WHEN,
    WHERE,
    YEAR,
    ZEROFILL
);

/// Looks up an identifier in the keyword table. Case-insensitive; bytes
/// outside ASCII never match.
pub fn keyword_for(ident: &[u8]) -> Keyword {
    let upper = match std::str::from_utf8(ident) {
        Ok(s) if s.is_ascii() => s.to_ascii_uppercase(),
        _ => return Keyword::NoKeyword,
    };
    match ALL_KEYWORDS.binary_search(&upper.as_str()) {
        Ok(x) => ALL_KEYWORDS_INDEX[x],
        Err(_) => Keyword::NoKeyword,
    }
}

/// Returns true if `ident` collides with a reserved word. This is the
/// formatter's escape predicate: such identifiers must be emitted inside
/// backticks to survive a round-trip.
pub fn is_keyword(ident: &[u8]) -> bool {
    keyword_for(ident) != Keyword::NoKeyword
}
