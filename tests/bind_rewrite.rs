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

//! Bind-variable tracking and `IN`-tuple rewriting tests.

use pretty_assertions::assert_eq;

use mysqlparser::ast::{ValExpr, ValTuple};
use mysqlparser::{parse, TrackedBuffer};

fn format_with(buf: &mut TrackedBuffer, sql: &str) -> String {
    let statement = parse(sql).unwrap();
    buf.write_node(&statement);
    String::from_utf8(buf.as_bytes().to_vec()).unwrap()
}

#[test]
fn bind_locations_cover_every_emission() {
    let mut buf = TrackedBuffer::new();
    let out = format_with(&mut buf, "select a from t where id = :id and x in ::xs");
    assert_eq!(out, "select a from t where id = :id and x in ::xs");

    let spans: Vec<&str> = buf
        .bind_locations()
        .iter()
        .map(|loc| &out[loc.offset..loc.offset + loc.length])
        .collect();
    assert_eq!(spans, vec![":id", "::xs"]);
}

#[test]
fn rewrites_all_bind_tuples_into_list_args() {
    let mut buf = TrackedBuffer::rewriting_tuples();
    let out = format_with(&mut buf, "select * from t where id in (:a, :b, :c)");
    assert_eq!(out, "select * from t where id in ::arg1");

    assert_eq!(
        buf.list_args().get("arg1"),
        Some(&ValTuple(vec![
            ValExpr::ValArg(b":a".to_vec()),
            ValExpr::ValArg(b":b".to_vec()),
            ValExpr::ValArg(b":c".to_vec()),
        ]))
    );
    // the placeholder is itself a tracked bind emission
    let loc = buf.bind_locations()[0];
    assert_eq!(&out[loc.offset..loc.offset + loc.length], "::arg1");
}

#[test]
fn placeholder_names_count_per_buffer() {
    let mut buf = TrackedBuffer::rewriting_tuples();
    let out = format_with(
        &mut buf,
        "select * from t where a in (:a, :b) and b in (:c)",
    );
    assert_eq!(
        out,
        "select * from t where a in ::arg1 and b in ::arg2"
    );
    assert_eq!(buf.list_args().len(), 2);
    assert_eq!(
        buf.list_args().get("arg2"),
        Some(&ValTuple(vec![ValExpr::ValArg(b":c".to_vec())]))
    );

    // a fresh buffer starts counting again
    let mut buf = TrackedBuffer::rewriting_tuples();
    let out = format_with(&mut buf, "select * from t where a in (:z)");
    assert_eq!(out, "select * from t where a in ::arg1");
}

#[test]
fn mixed_and_literal_tuples_are_never_rewritten() {
    let mut buf = TrackedBuffer::rewriting_tuples();
    let out = format_with(&mut buf, "select * from t where a in (:a, 1) and b in (2, 3)");
    assert_eq!(out, "select * from t where a in (:a, 1) and b in (2, 3)");
    assert!(buf.list_args().is_empty());
    // the scalar bind inside the unrewritten tuple is still tracked
    assert_eq!(buf.bind_locations().len(), 1);
}

#[test]
fn rewrite_mode_is_opt_in() {
    let mut buf = TrackedBuffer::new();
    let out = format_with(&mut buf, "select * from t where id in (:a, :b)");
    assert_eq!(out, "select * from t where id in (:a, :b)");
    assert!(buf.list_args().is_empty());
    assert_eq!(buf.bind_locations().len(), 2);
}

#[test]
fn values_tuples_are_rewritten_too() {
    // the transformation is purely syntactic: any all-bind tuple position
    let mut buf = TrackedBuffer::rewriting_tuples();
    let out = format_with(&mut buf, "insert into t(a, b) values (:a, :b)");
    assert_eq!(out, "insert into t(a, b) values ::arg1");
    assert_eq!(buf.list_args().len(), 1);
}
