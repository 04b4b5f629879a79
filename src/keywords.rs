//! Default Oracle word lists. Pure data: every entry is uppercase.

use phf::{phf_set, Set};

/// System package prefixes (`DBMS_OUTPUT`, `UTL_FILE`, ...).
pub static PACKAGE_PREFIXES: &[&str] = &[
    "DBMS_", // core
    "UTL_",  // utilities
    "CTX_",  // Oracle Text
    "APEX_", // Application Express
    "OWA_",  // web toolkit
];

/// Data dictionary and dynamic performance view prefixes.
pub static OBJECT_PREFIXES: &[&str] = &["DBA_", "ALL_", "USER_", "CDB_", "V$", "GV$"];

/// DDL, DML, DCL statements, clauses, predicates and joins.
pub static CONTROL: Set<&'static str> = phf_set! {
    // statements
    "SELECT", "INSERT", "UPDATE", "DELETE", "MERGE", "FROM", "WHERE", "SET",
    "CREATE", "ALTER", "DROP", "TRUNCATE", "RENAME", "GRANT", "REVOKE",
    "COMMIT", "ROLLBACK", "SAVEPOINT", "LOCK", "EXPLAIN", "CONNECT", "START",
    "VIEW", "SESSION", "SYSTEM", "PROCEDURE", "FUNCTION", "PACKAGE", "TRIGGER",
    "INDEX", "SEQUENCE", "TABLESPACE",
    // predicates and logical operators
    "AND", "OR", "NOT", "IN", "LIKE", "IS", "NULL", "BETWEEN", "EXISTS", "ALL",
    "ANY", "SOME",
    // grouping and ordering
    "GROUP", "HAVING", "ORDER", "BY", "WITH", "FOR", "UNION", "INTERSECT",
    "MINUS", "DISTINCT", "UNIQUE",
    // joins
    "JOIN", "INNER", "LEFT", "RIGHT", "FULL", "OUTER", "ON", "USING", "NATURAL",
    "CROSS",
    // misc
    "AS", "TO", "INTO", "CASCADE", "FORCE", "SHARE", "EXCLUSIVE", "VALIDATE",
};

/// PL/SQL block structure and declarations.
pub static DECLARATION: Set<&'static str> = phf_set! {
    "BEGIN", "END", "DECLARE", "EXCEPTION", "WHEN", "OTHERS", "THEN", "ELSIF",
    "ELSE", "IF", "LOOP", "WHILE", "FOR", "EXIT", "CONTINUE", "GOTO", "PRAGMA",
    "AUTONOMOUS_TRANSACTION", "BODY", "IS", "AS", "RETURN", "CONSTANT", "ACCESS",
    "ROW", "MEMBER", "SELF", "PIPELINED", "RESULT_CACHE", "DETERMINISTIC",
    "RAISE", "CURSOR", "OPEN", "FETCH", "CLOSE", "BULK", "COLLECT", "FORALL",
    "EXECUTE", "IMMEDIATE", "REPLACE",
};

/// Literals and clause modifiers.
pub static CONSTANT: Set<&'static str> = phf_set! {
    "TRUE", "FALSE", "ASC", "DESC", "NULLS", "FIRST", "LAST", "ONLY", "ROWS",
    "NOWAIT", "SKIP", "LOCKED", "NEXT", "OFFSET", "PRIOR", "NOCYCLE",
    "SIBLINGS", "FOUND", "NOTFOUND", "ROWCOUNT", "ISOPEN",
};

/// Data types and type declarations.
pub static TYPE: Set<&'static str> = phf_set! {
    // core
    "VARCHAR2", "NVARCHAR2", "VARCHAR", "CHAR", "NCHAR", "NUMBER", "INTEGER",
    "LONG", "DATE", "TIMESTAMP", "INTERVAL", "CLOB", "NCLOB", "BLOB", "BFILE",
    "RAW", "ROWID", "UROWID", "BOOLEAN",
    // PL/SQL
    "PLS_INTEGER", "BINARY_INTEGER", "BINARY_FLOAT", "BINARY_DOUBLE",
    "SIMPLE_INTEGER",
    // declarations
    "TYPE", "SUBTYPE", "REF", "TABLE", "VARRAY", "RECORD", "OF", "OUT", "IN",
    "DEFAULT", "NOCOPY", "ROWTYPE",
    "XMLTYPE",
};

/// Builtin functions and pseudo-columns.
pub static BUILTIN: Set<&'static str> = phf_set! {
    // aggregate and analytic
    "COUNT", "SUM", "AVG", "MIN", "MAX", "STDDEV", "VARIANCE", "LISTAGG",
    "RANK", "DENSE_RANK", "ROW_NUMBER", "CUME_DIST", "LAG", "LEAD", "OVER",
    "PARTITION", "KEEP",
    // conversion and conditional
    "TO_CHAR", "TO_DATE", "TO_NUMBER", "TO_TIMESTAMP", "NVL", "NVL2", "DECODE",
    "COALESCE", "NULLIF", "CAST", "CONVERT", "CASE",
    // strings
    "SUBSTR", "INSTR", "LENGTH", "TRIM", "LTRIM", "RTRIM", "UPPER", "LOWER",
    "INITCAP", "LPAD", "RPAD", "CONCAT", "TRANSLATE", "REGEXP_LIKE",
    "REGEXP_SUBSTR", "REGEXP_REPLACE", "REGEXP_INSTR",
    // date and time
    "SYSDATE", "SYSTIMESTAMP", "CURRENT_DATE", "CURRENT_TIMESTAMP",
    "SESSIONTIMEZONE", "DBTIMEZONE", "ROUND", "TRUNC", "ADD_MONTHS",
    "MONTHS_BETWEEN", "NEXT_DAY", "LAST_DAY", "EXTRACT",
    // pseudo-columns and environment
    "ROWNUM", "LEVEL", "USER", "UID", "SYS_GUID", "SYS_CONTEXT", "SQLCODE",
    "SQLERRM", "NEXTVAL", "CURRVAL", "SESSION_USER",
};
