//! Guard contract tests.
//!
//! Exercises the full set of guard properties with literal candidate
//! strings; model output is never involved here since generation is not
//! reproducible.

use deptsql::error::DeptSqlError;
use deptsql::guard::{guard, manager_shortcut};

#[test]
fn blacklisted_keywords_always_rejected() {
    let candidates = [
        "DROP TABLE Departments",
        "drop table Departments;",
        "```sql\nDELETE FROM Departments\n```",
        "SELECT * FROM Departments WHERE Name = 'x'; DROP TABLE Departments",
        "Select * from Departments where Manager like '%update%'",
        "insert into Departments values ('a','b')",
        "ALTER TABLE Departments RENAME TO x",
        "SELECT * FROM Departments -- trailing comment",
        "SELECT * FROM Departments /* block */",
    ];

    for candidate in candidates {
        match guard(candidate) {
            Err(DeptSqlError::Unsafe(msg)) => assert_eq!(msg, "forbidden operation"),
            other => panic!("expected Unsafe for {candidate:?}, got {other:?}"),
        }
    }
}

#[test]
fn non_select_candidates_get_wrapped() {
    let candidates = ["Name = 'Sales'", "Manager = 'Jane Doe'", "1 = 1"];
    for candidate in candidates {
        let guarded = guard(candidate).unwrap();
        assert!(
            guarded.as_str().starts_with("SELECT * FROM Departments WHERE"),
            "unexpected shape for {candidate:?}: {guarded}"
        );
    }
}

#[test]
fn join_candidates_collapse_to_fallback() {
    let candidates = [
        "SELECT * FROM Departments JOIN Employees ON 1=1",
        "SELECT d.Name FROM Departments d join d2 on d.Name = d2.Name",
        "SELECT * FROM Departments INNER JOIN Other",
    ];
    for candidate in candidates {
        let guarded = guard(candidate).unwrap();
        assert_eq!(
            guarded.as_str(),
            "SELECT * FROM Departments WHERE Name = 'Sales';"
        );
    }
}

#[test]
fn guard_is_idempotent_on_its_own_output() {
    let candidates = [
        "SELECT * FROM Departments",
        "Name = 'HR'",
        "```sql\nSELECT Name FROM Departments;\n```",
        "SELECT * FROM Departments JOIN x",
    ];
    for candidate in candidates {
        let once = guard(candidate).unwrap();
        let twice = guard(once.as_str()).unwrap();
        assert_eq!(once, twice, "guard not idempotent for {candidate:?}");
    }
}

#[test]
fn shortcut_matches_regardless_of_synthesizer() {
    let guarded = manager_shortcut("Who is the manager of Marketing?").unwrap();
    assert_eq!(
        guarded.as_str(),
        "SELECT Manager FROM Departments WHERE Name = 'Marketing';"
    );
}
