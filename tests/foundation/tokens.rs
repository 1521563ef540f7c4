//! Integration tests for the token tree.

use quire::foundation::{BlockKind, Token, flatten, max_depth};

#[test]
fn block_kinds_cover_the_marker_set() {
    assert_eq!(BlockKind::from_marker('W'), Some(BlockKind::While));
    assert_eq!(BlockKind::from_marker('R'), Some(BlockKind::Repeat));
    assert_eq!(BlockKind::from_marker('M'), Some(BlockKind::Map));
    assert_eq!(BlockKind::from_marker('?'), Some(BlockKind::Decision));
    assert_eq!(BlockKind::from_marker('['), Some(BlockKind::Literal));
    assert_eq!(BlockKind::from_marker('}'), None);
}

#[test]
fn kind_names() {
    assert_eq!(BlockKind::While.name(), "while");
    assert_eq!(BlockKind::Literal.name(), "literal");
}

#[test]
fn depth_introspection() {
    let flat = vec![Token::Number(1.0), Token::Symbol('+')];
    assert_eq!(max_depth(&flat), 0);

    let nested = vec![Token::Block(
        BlockKind::While,
        vec![Token::Block(
            BlockKind::Map,
            vec![Token::Block(BlockKind::Decision, vec![])],
        )],
    )];
    assert_eq!(max_depth(&nested), 3);
}

#[test]
fn flatten_round_trip() {
    let flat = vec![
        Token::Number(1.0),
        Token::Symbol('M'),
        Token::String("s".into()),
        Token::Symbol('}'),
        Token::Symbol('+'),
    ];
    let tree = vec![
        Token::Number(1.0),
        Token::Block(BlockKind::Map, vec![Token::String("s".into())]),
        Token::Symbol('+'),
    ];
    assert_eq!(flatten(&tree), flat);
}
