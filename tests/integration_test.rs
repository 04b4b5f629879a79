use oraclesql::lexer::lex;
use oraclesql::mode::TableConfig;
use oraclesql::{default_tables, highlight, refine, Tables, Token, TokenType};
use pretty_assertions::assert_eq;

fn refined(source: &str) -> Vec<(TokenType, String)> {
    highlight(source, default_tables())
        .map(|t| (t.token_type, t.text.to_string()))
        .collect()
}

fn significant(source: &str) -> Vec<(TokenType, String)> {
    refined(source)
        .into_iter()
        .filter(|(token_type, _)| *token_type != TokenType::Whitespace)
        .collect()
}

fn pair(token_type: TokenType, text: &str) -> (TokenType, String) {
    (token_type, text.to_string())
}

#[test]
fn test_anonymous_block() {
    let source = "DECLARE\n  v_count PLS_INTEGER := 0;\nBEGIN\n  SELECT COUNT(*) INTO v_count FROM emp;\n  DBMS_OUTPUT.PUT_LINE(v_count);\nEND;\n";
    assert_eq!(
        significant(source),
        vec![
            pair(TokenType::KeywordDeclaration, "DECLARE"),
            pair(TokenType::Name, "v_count"),
            pair(TokenType::KeywordType, "PLS_INTEGER"),
            pair(TokenType::Operator, ":="),
            pair(TokenType::Number, "0"),
            pair(TokenType::Punctuation, ";"),
            pair(TokenType::KeywordDeclaration, "BEGIN"),
            pair(TokenType::KeywordControl, "SELECT"),
            pair(TokenType::Builtin, "COUNT"),
            pair(TokenType::Punctuation, "("),
            pair(TokenType::Operator, "*"),
            pair(TokenType::Punctuation, ")"),
            pair(TokenType::KeywordControl, "INTO"),
            pair(TokenType::Name, "v_count"),
            pair(TokenType::KeywordControl, "FROM"),
            pair(TokenType::Name, "emp"),
            pair(TokenType::Punctuation, ";"),
            pair(TokenType::NamespacedCall, "DBMS_OUTPUT.PUT_LINE"),
            pair(TokenType::Punctuation, "("),
            pair(TokenType::Name, "v_count"),
            pair(TokenType::Punctuation, ")"),
            pair(TokenType::Punctuation, ";"),
            pair(TokenType::KeywordDeclaration, "END"),
            pair(TokenType::Punctuation, ";"),
        ]
    );
}

#[test]
fn test_case_insensitivity() {
    for source in ["SELECT", "select", "SeLeCt"] {
        assert_eq!(refined(source), vec![pair(TokenType::KeywordControl, source)]);
    }
}

#[test]
fn test_unknown_identifier_is_plain_name() {
    assert_eq!(
        refined("MY_CUSTOM_TABLE"),
        vec![pair(TokenType::Name, "MY_CUSTOM_TABLE")]
    );
}

#[test]
fn test_chain_with_spaces_is_merged() {
    assert_eq!(
        refined("utl_file . fopen"),
        vec![pair(TokenType::NamespacedCall, "utl_file . fopen")]
    );
}

#[test]
fn test_chain_interruption() {
    assert_eq!(
        refined("DBMS_OUTPUT ="),
        vec![
            pair(TokenType::Namespace, "DBMS_OUTPUT"),
            pair(TokenType::Whitespace, " "),
            pair(TokenType::Operator, "="),
        ]
    );
}

#[test]
fn test_end_of_stream_flush() {
    assert_eq!(
        refined("x := apex_util"),
        vec![
            pair(TokenType::Name, "x"),
            pair(TokenType::Whitespace, " "),
            pair(TokenType::Operator, ":="),
            pair(TokenType::Whitespace, " "),
            pair(TokenType::Namespace, "apex_util"),
        ]
    );
}

#[test]
fn test_table_column_reference_untouched() {
    assert_eq!(
        significant("e.ename"),
        vec![
            pair(TokenType::Name, "e"),
            pair(TokenType::Punctuation, "."),
            pair(TokenType::Name, "ename"),
        ]
    );
}

#[test]
fn test_system_objects() {
    assert_eq!(
        significant("select sid from v$session join dba_users on 1=1"),
        vec![
            pair(TokenType::KeywordControl, "select"),
            pair(TokenType::Name, "sid"),
            pair(TokenType::KeywordControl, "from"),
            pair(TokenType::SystemObject, "v$session"),
            pair(TokenType::KeywordControl, "join"),
            pair(TokenType::SystemObject, "dba_users"),
            pair(TokenType::KeywordControl, "on"),
            pair(TokenType::Number, "1"),
            pair(TokenType::Operator, "="),
            pair(TokenType::Number, "1"),
        ]
    );
}

#[test]
fn test_strings_and_comments_never_reclassified() {
    assert_eq!(
        significant("'dbms_output.put_line' -- select\n/* begin */ \"END\""),
        vec![
            pair(TokenType::String, "'dbms_output.put_line'"),
            pair(TokenType::Comment, "-- select"),
            pair(TokenType::Comment, "/* begin */"),
            pair(TokenType::QuotedName, "\"END\""),
        ]
    );
}

#[test]
fn test_prefix_priority_over_builtin() {
    let config = TableConfig {
        builtin: vec!["DBMS_RANDOM".to_string()],
        ..TableConfig::default()
    };
    let tables = Tables::with_config(&config);
    let tokens: Vec<Token> = highlight("dbms_random", &tables).collect();
    assert_eq!(tokens, vec![Token::new(TokenType::Namespace, "dbms_random", 0)]);
}

#[test]
fn test_refine_accepts_any_token_stream() {
    let input = vec![
        Token::new(TokenType::Name, "DBMS_OUTPUT", 0),
        Token::new(TokenType::Punctuation, ".", 11),
        Token::new(TokenType::Name, "PUT_LINE", 12),
    ];
    let out: Vec<Token> = refine(input, default_tables()).collect();
    assert_eq!(
        out,
        vec![Token::new(TokenType::NamespacedCall, "DBMS_OUTPUT.PUT_LINE", 0)]
    );
}

#[test]
fn test_lossless_and_monotonic_over_samples() {
    let samples = [
        "",
        "select * from dual",
        "CREATE OR REPLACE PACKAGE BODY pkg AS\n  PROCEDURE p IS BEGIN dbms_lock.sleep(1); END;\nEND pkg;\n/",
        "dbms_output.",
        "dbms_output . -- trailing\n",
        "q'[it's]' || N'x' || nq'{y}'",
        "for i in 1..10 loop null; end loop;",
        "größe := 'ünïcödé' ?? `",
        "/* never closed dbms_output.put_line",
        "DBMS_A DBMS_B.x DBMS_C..y",
    ];
    for source in samples {
        let tokens: Vec<Token> = highlight(source, default_tables()).collect();
        let joined: String = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(joined, source);
        assert!(tokens.windows(2).all(|w| w[0].spos <= w[1].spos));
        assert!(tokens.windows(2).all(|w| w[0].epos() == w[1].spos));
        assert!(tokens.len() <= lex(source).count());
    }
}

#[test]
fn test_early_termination() {
    let source = "begin dbms_output.put_line('x'); end;";
    let first: Vec<Token> = highlight(source, default_tables()).take(3).collect();
    assert_eq!(first.len(), 3);
    assert_eq!(first[2].token_type, TokenType::NamespacedCall);
}

#[test]
fn test_parallel_refinements_are_independent() {
    let sources = [
        "begin dbms_output.put_line(1); end;",
        "select utl_raw.cast_to_raw(x) from dual",
        "dbms_lob",
        "declare v varchar2(10); begin null; end;",
    ];
    let expected: Vec<Vec<Token>> = sources
        .iter()
        .map(|s| highlight(s, default_tables()).collect())
        .collect();

    let actual: Vec<Vec<Token>> = std::thread::scope(|scope| {
        let handles: Vec<_> = sources
            .iter()
            .map(|s| scope.spawn(move || highlight(s, default_tables()).collect::<Vec<Token>>()))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("refinement thread panicked"))
            .collect()
    });

    assert_eq!(actual, expected);
}

#[test]
fn test_only_name_like_tokens_are_reclassified() {
    let source = "create or replace procedure p is begin dbms_output.put_line(sysdate); \
                  select * from v$session where x is not null; end;";
    let coarse: Vec<Token> = lex(source).collect();
    assert!(coarse.iter().all(|t| !t.token_type.is_refined()));

    let refined: Vec<Token> = highlight(source, default_tables()).collect();
    for token in &refined {
        if let Some(original) = coarse.iter().find(|c| c.spos == token.spos && c.text == token.text) {
            if original.token_type != token.token_type {
                assert!(original.token_type.is_name_like(), "{:?} was retagged", original);
                assert!(token.token_type.is_refined() || token.token_type == TokenType::Builtin);
            }
        }
    }
    assert!(refined
        .iter()
        .filter(|t| t.token_type.is_trivia())
        .all(|t| t.text.trim().is_empty() || t.token_type == TokenType::Comment));
}
