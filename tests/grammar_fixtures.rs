// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Railyard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Railyard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use railyard::diagram::MAX_EXPANSION_DEPTH;
use railyard::format::wsn::{LexError, Position, MAX_NESTING};
use railyard::{Diagram, DiagramIr, DiagramNode, Grammar, GrammarParseError, PathKey};
use rstest::rstest;

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join("wsn")
}

fn read_fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    fs::read_to_string(&path).unwrap_or_else(|err| panic!("failed to read {path:?}: {err}"))
}

fn load(name: &str) -> Grammar {
    read_fixture(name)
        .parse()
        .unwrap_or_else(|err| panic!("expected {name} to parse, got error: {err}"))
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[rstest]
#[case("json.wsn", 4)]
#[case("path.wsn", 3)]
#[case("wsn.wsn", 7)]
#[case("arithmetic.wsn", 3)]
#[case("typographic.wsn", 1)]
fn valid_fixtures_round_trip_through_canonical_text(#[case] name: &str, #[case] count: usize) {
    let grammar = load(name);
    assert_eq!(grammar.productions().len(), count);

    let canonical = grammar.to_string();
    let reparsed: Grammar = canonical
        .parse()
        .unwrap_or_else(|err| panic!("canonical form of {name} must parse: {err}"));
    assert!(grammar.syntax().same_structure(reparsed.syntax()), "{name} changed shape");
    assert_eq!(reparsed.to_string(), canonical);
}

#[rstest]
#[case("json.wsn")]
#[case("path.wsn")]
#[case("wsn.wsn")]
#[case("arithmetic.wsn")]
fn every_start_symbol_expands_fully_within_the_depth_cap(#[case] name: &str) {
    init_logging();
    let grammar = load(name);
    for start in grammar.start_symbols() {
        let diagram = Diagram::from_grammar(&grammar, Some(start));
        let paths = diagram.all_expandable_paths().expect("paths");
        assert!(paths.iter().all(|path| path.depth() < MAX_EXPANSION_DEPTH));

        let first = diagram.generate_diagram(&paths).expect("expanded diagram");
        let second = diagram.generate_diagram(&paths).expect("expanded diagram again");
        assert_eq!(first, second, "{name}/{start} is not deterministic");
        assert_eq!(first.start_symbol, start);

        let mut group_paths = BTreeSet::new();
        first.root.walk(&mut |node| {
            if let DiagramNode::Group { path, .. } = node {
                group_paths.insert(path.clone());
            }
        });
        assert_eq!(group_paths, paths, "{name}/{start}: expanded groups differ from paths");
    }
}

#[test]
fn json_value_is_a_weighted_choice() {
    let grammar = load("json.wsn");
    let ir = Diagram::from_grammar(&grammar, None).generate_diagram_default().expect("diagram");
    assert_eq!(
        ir.root.to_string(),
        "Sequence(Choice(3; NonTerminal(Object), NonTerminal(Array), Terminal(\"string\"), \
         Terminal(\"number\"), Terminal(\"true\"), Terminal(\"false\"), Terminal(\"null\")))"
    );
}

#[test]
fn json_members_loop_over_the_comma() {
    let grammar = load("json.wsn");
    let ir = Diagram::from_grammar(&grammar, Some("Object"))
        .generate_diagram_default()
        .expect("diagram");
    assert_eq!(
        ir.root.to_string(),
        "Sequence(Sequence(Terminal(\"{\"), \
         Optional(OneOrMore(NonTerminal(Member); Terminal(\",\"))), Terminal(\"}\")))"
    );
}

#[test]
fn expanded_diagram_survives_a_json_round_trip() {
    let grammar = load("arithmetic.wsn");
    let diagram = Diagram::from_grammar(&grammar, None);
    let paths = diagram.all_expandable_paths().expect("paths");
    let ir = diagram.generate_diagram(&paths).expect("diagram");

    let json = serde_json::to_string(&ir).expect("serialize");
    let back: DiagramIr = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, ir);

    let keys: Vec<PathKey> = paths
        .iter()
        .map(|path| path.as_str().parse().expect("path key"))
        .collect();
    assert_eq!(keys.into_iter().collect::<BTreeSet<_>>(), paths);
}

#[test]
fn typographic_quotes_export_as_straight_quotes() {
    let grammar = load("typographic.wsn");
    assert_eq!(grammar.to_string(), "Greeting = \"hello\u{2423}world\" [\"!\"] .");
}

#[test]
fn unterminated_literal_reports_line_and_column() {
    let err = read_fixture("unterminated.wsn").parse::<Grammar>().expect_err("must fail");
    assert_eq!(
        err,
        GrammarParseError::Lex(LexError::UnterminatedLiteral { position: Position::new(2, 5) })
    );
    assert_eq!(err.to_string(), "scan error: unterminated literal starting at 2:5");
}

#[test]
fn unknown_character_reports_line_and_column() {
    let err = read_fixture("bad_char.wsn").parse::<Grammar>().expect_err("must fail");
    assert_eq!(err.position(), Position::new(2, 7));
    assert!(matches!(err, GrammarParseError::Lex(LexError::UnexpectedChar { ch: ';', .. })));
}

#[test]
fn deepest_allowed_nesting_survives_every_pass() {
    let source = format!("A = {}B{} .\nB = b .", "[".repeat(MAX_NESTING), "]".repeat(MAX_NESTING));
    let grammar: Grammar = source.parse().expect("grammar at the nesting limit");
    let canonical = grammar.to_string();
    assert!(canonical.starts_with("A = [["));

    let mut nodes = 0usize;
    grammar.syntax().walk(&mut |_| nodes += 1);
    assert!(nodes > MAX_NESTING * 3);

    let diagram = Diagram::from_grammar(&grammar, None);
    let paths = diagram.all_expandable_paths().expect("paths");
    assert!(paths.is_empty(), "the only reference sits deeper than the expansion cap");
    let ir = diagram.generate_diagram(&paths).expect("diagram");
    assert!(ir.root.outline().lines().count() > MAX_NESTING);
    assert!(serde_json::to_string(&ir).is_ok());
}

#[test]
fn nesting_past_the_limit_fails_cleanly() {
    let source = format!("A = {}a{} .", "(".repeat(1_000), ")".repeat(1_000));
    let err = source.parse::<Grammar>().expect_err("too deep");
    assert!(matches!(err, GrammarParseError::Syntax(_)));
    assert_eq!(err.position(), Position::new(1, 5 + MAX_NESTING));
}
