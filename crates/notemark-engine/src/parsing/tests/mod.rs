//! Fixture tests for the parsing module.
//!
//! Fixtures (.md) and their outline snapshots (.snap) are co-located in `fixtures/`.

use pretty_assertions::assert_eq;

use crate::parsing::{
    ParseOptions,
    blocks::{Block, ListKind},
    parse_document, snapshot,
};

const CHAPTERS: ParseOptions = ParseOptions {
    chapter_numbering: true,
};

#[test]
fn fixture_headings_chapters() {
    assert_fixture("headings_chapters", CHAPTERS);
}

#[test]
fn fixture_lists_numbering() {
    assert_fixture("lists_numbering", ParseOptions::default());
}

#[test]
fn fixture_blocks_mixed() {
    assert_fixture("blocks_mixed", ParseOptions::default());
}

#[test]
fn fixture_unterminated_fence() {
    assert_fixture("unterminated_fence", ParseOptions::default());
}

fn assert_fixture(name: &str, opts: ParseOptions) {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();

    let doc = parse_document(&md, &opts);
    snapshot::invariants(&doc);

    let outline = snapshot::outline(&doc);
    insta::with_settings!({
        snapshot_path => fixtures_dir.as_str(),
        prepend_module_to_snapshot => false,
    }, {
        insta::assert_snapshot!(name, outline);
    });
}

#[test]
fn block_shapes() {
    let doc = parse_document("## Title\n|a|b|\n|1|2|\n", &ParseOptions::default());
    insta::assert_yaml_snapshot!(snapshot::shapes(&doc), @r"
    - kind: Heading
      start: 0
      end: 1
    - kind: Table
      start: 1
      end: 3
    ");
}

#[test]
fn empty_document_has_no_blocks() {
    let doc = parse_document("", &ParseOptions::default());
    assert!(doc.blocks.is_empty());
    assert_eq!(doc.line_count, 0);
}

#[test]
fn chapter_labels_off_by_default() {
    let doc = parse_document("## B\n### C", &ParseOptions::default());
    for b in &doc.blocks {
        assert!(matches!(
            b.block,
            Block::Heading {
                counter_label: None,
                ..
            }
        ));
    }
}

#[test]
fn nested_child_restarts_outer_numbering() {
    let doc = parse_document("1. a\n1. b\n  - child\n1. c", &ParseOptions::default());
    let numbers: Vec<u32> = doc
        .blocks
        .iter()
        .filter_map(|b| match b.block {
            Block::ListItem {
                kind: ListKind::Ordered { number },
                ..
            } => Some(number),
            _ => None,
        })
        .collect();
    assert_eq!(numbers, vec![1, 2, 1]);
}

#[test]
fn table_run_ends_at_non_table_line() {
    let doc = parse_document("|a|\n|b|\ntext\n|c|", &ParseOptions::default());
    let kinds: Vec<&str> = doc
        .blocks
        .iter()
        .map(|b| snapshot::normalize::kind_name(&b.block))
        .collect();
    assert_eq!(kinds, vec!["Table", "Paragraph", "Table"]);
    snapshot::invariants(&doc);
}

#[test]
fn table_continuation_without_closing_pipe() {
    let doc = parse_document("|A|B|\n|1|2", &ParseOptions::default());
    assert_eq!(doc.blocks.len(), 1);
    match &doc.blocks[0].block {
        Block::Table { rows } => assert_eq!(rows.len(), 2),
        other => panic!("expected table, got {other:?}"),
    }
}

#[test]
fn crlf_lines_parse_like_lf() {
    let lf = parse_document("# T\n- [ ] x\n", &ParseOptions::default());
    let crlf = parse_document("# T\r\n- [ ] x\r\n", &ParseOptions::default());
    assert_eq!(lf, crlf);
}
