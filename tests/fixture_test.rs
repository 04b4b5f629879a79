use oraclesql::{default_tables, highlight, Token};
use std::fs;
use std::path::{Path, PathBuf};

const EXPECT_MARKER: &str = "-- expect:";

/// One `-- expect: <text> <category>` annotation. The category is the last
/// whitespace-separated word, so the expected text may contain spaces.
#[derive(Debug)]
struct Expectation {
    text: String,
    category: String,
}

fn read_expectations(source: &str) -> Vec<Expectation> {
    source
        .lines()
        .filter_map(|line| line.trim().strip_prefix(EXPECT_MARKER))
        .map(|rest| {
            let (text, category) = rest
                .trim()
                .rsplit_once(' ')
                .unwrap_or_else(|| panic!("malformed annotation: {}", rest));
            Expectation {
                text: text.trim_end().to_string(),
                category: category.to_string(),
            }
        })
        .collect()
}

fn data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data")
}

fn run_fixture(name: &str) {
    let path = data_dir().join(name);
    let source = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read test file {}: {}", path.display(), e));

    let tokens: Vec<Token> = highlight(&source, default_tables()).collect();

    let joined: String = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(joined, source, "{}: output is not lossless", name);
    assert!(
        tokens.windows(2).all(|w| w[0].epos() == w[1].spos),
        "{}: offsets are not contiguous",
        name
    );

    let expectations = read_expectations(&source);
    assert!(!expectations.is_empty(), "{}: no annotations", name);
    for expected in &expectations {
        let found = tokens
            .iter()
            .any(|t| t.text.as_str() == expected.text && t.token_type.as_str() == expected.category);
        assert!(
            found,
            "{}: no {} token with text {:?}; got {:?}",
            name,
            expected.category,
            expected.text,
            tokens
                .iter()
                .filter(|t| t.text.eq_ignore_ascii_case(&expected.text))
                .map(|t| t.token_type.as_str())
                .collect::<Vec<_>>()
        );
    }
}

#[test]
fn test_read_expectations() {
    let parsed = read_expectations("-- expect: a . b Name.Function\nselect 1;\n  -- expect: x Name\n");
    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed[0].text, "a . b");
    assert_eq!(parsed[0].category, "Name.Function");
    assert_eq!(parsed[1].text, "x");
}

#[test]
fn test_100_anonymous_block() {
    run_fixture("100_anonymous_block.sql");
}

#[test]
fn test_101_package_body() {
    run_fixture("101_package_body.sql");
}

#[test]
fn test_102_chain_trivia() {
    run_fixture("102_chain_trivia.sql");
}

#[test]
fn test_103_dictionary_views() {
    run_fixture("103_dictionary_views.sql");
}

#[test]
fn test_104_strings_and_quoting() {
    run_fixture("104_strings_and_quoting.sql");
}

#[test]
fn test_every_fixture_is_lossless() {
    let mut count = 0;
    for entry in fs::read_dir(data_dir()).unwrap() {
        let path = entry.unwrap().path();
        if path.extension().is_some_and(|ext| ext == "sql") {
            let source = fs::read_to_string(&path).unwrap();
            let joined: String = highlight(&source, default_tables())
                .map(|t| t.text.to_string())
                .collect();
            assert_eq!(joined, source, "{}", path.display());
            count += 1;
        }
    }
    assert!(count >= 5);
}
