use pretty_assertions::assert_eq;

use wordtree::words::{Config, Token, WordIndex};
use wordtree::{Error, Tree};

const TEXT: &str = "the cat sat on the mat the cat";

fn build(text: &str, config: Config) -> WordIndex {
    let _ = pretty_env_logger::try_init();
    WordIndex::build(config, text.as_bytes()).unwrap()
}

fn words(tree: &Tree<Token>) -> Vec<&str> {
    tree.in_order().map(Token::word).collect()
}

fn more_than_once() -> Config {
    Config {
        frequency_threshold: 1,
        ..Config::default()
    }
}

#[test]
fn frequent_words_come_first() {
    let index = build(TEXT, more_than_once());

    assert_eq!(words(index.by_frequency()), vec!["cat"]);
    assert_eq!(
        index.by_frequency().minimum().map(Token::count),
        Ok(2)
    );

    // With every word allowed in, "cat" still leads the count-1 words.
    let index = build(
        TEXT,
        Config {
            frequency_threshold: 0,
            ..Config::default()
        },
    );
    assert_eq!(words(index.by_frequency()), vec!["cat", "mat", "sat"]);
}

#[test]
fn stop_words_are_gone_from_every_tree() {
    let index = build(TEXT, more_than_once());

    for tree in [index.alphabetical(), index.by_frequency(), index.by_length()] {
        assert!(!tree.contains(&Token::new("the")));
        assert!(!tree.contains(&Token::new("on")));
    }
    assert_eq!(words(index.alphabetical()), vec!["cat", "mat", "sat"]);
    assert_eq!(index.stop_words_removed(), 4);
    assert_eq!(index.total_words(), 8);
}

#[test]
fn report_layout() {
    let index = build(TEXT, more_than_once());

    let expected = "\
Total Words: 8
Unique Words: 3
Stop Words: 4

10 Most Frequent
cat:2:3

10 Longest
cat:2:3
mat:1:3
sat:1:3

The longest word is cat
The average word length is 3

All
cat:2:3
mat:1:3
sat:1:3

Alphabetic Tree: (Optimum Height: 1) (Actual Height: 2)
Frequency Tree: (Optimum Height: 0) (Actual Height: 0)
Length Tree: (Optimum Height: 1) (Actual Height: 2)
";
    assert_eq!(index.report().to_string(), expected);
}

#[test]
fn empty_input_reports_no_data() {
    let index = build("", Config::default());

    assert_eq!(index.by_length().minimum().err(), Some(Error::EmptyTree));

    let expected = "\
Total Words: 0
Unique Words: 0
Stop Words: 0

10 Most Frequent

10 Longest

No data for the longest word: the tree is empty
The average word length is 0

All

Alphabetic Tree: (Optimum Height: -1) (Actual Height: -1)
Frequency Tree: (Optimum Height: -1) (Actual Height: -1)
Length Tree: (Optimum Height: -1) (Actual Height: -1)
";
    assert_eq!(index.report().to_string(), expected);
}

#[test]
fn only_stop_words_leave_nothing() {
    let index = build("The and THE, of; a", Config::default());

    assert_eq!(index.total_words(), 5);
    assert_eq!(index.stop_words_removed(), 5);
    assert!(index.alphabetical().is_empty());
    assert!(index.by_length().is_empty());
}

#[test]
fn longest_words_lead_the_length_tree() {
    let config = Config {
        top: 2,
        ..Config::default()
    };
    let index = build(
        "Extraordinary claims require extraordinary evidence, said nobody in particular.",
        config,
    );

    assert_eq!(
        words(index.by_length()),
        vec![
            "extraordinary",
            "particular",
            "evidence",
            "require",
            "claims",
            "nobody"
        ]
    );
    assert_eq!(index.by_length().minimum().map(Token::word), Ok("extraordinary"));

    let report = index.report().to_string();
    assert!(report.contains("2 Longest\nextraordinary:2:13\nparticular:1:10\n\n"));
}
