//! Integration tests for Markdown conversion of document JSON.

use serde_json::{json, Value};
use ungdoc::{convert, convert_with_options, CleanupPreset, Document, RenderOptions};

fn parse(value: Value) -> Document {
    ungdoc::parse_str(&value.to_string()).unwrap()
}

fn text(content: &str) -> Value {
    json!({ "paragraph": { "elements": [ { "textRun": { "content": content } } ] } })
}

fn styled(content: &str, style: &str) -> Value {
    json!({ "paragraph": {
        "paragraphStyle": { "namedStyleType": style },
        "elements": [ { "textRun": { "content": content } } ]
    } })
}

fn list_item(content: &str, list_id: &str, nesting: u32) -> Value {
    json!({ "paragraph": {
        "bullet": { "listId": list_id, "nestingLevel": nesting },
        "elements": [ { "textRun": { "content": content } } ]
    } })
}

fn footnote_ref(id: &str) -> Value {
    json!({ "paragraph": { "elements": [ { "footnoteReference": { "footnoteId": id } } ] } })
}

fn footnote_body(content: &str) -> Value {
    json!({ "content": [ text(content) ] })
}

fn table(rows: &[&[&str]]) -> Value {
    let rows: Vec<Value> = rows
        .iter()
        .map(|row| {
            let cells: Vec<Value> = row
                .iter()
                .map(|cell| json!({ "content": [ text(cell) ] }))
                .collect();
            json!({ "tableCells": cells })
        })
        .collect();
    json!({ "table": { "tableRows": rows } })
}

fn body(content: Vec<Value>) -> Document {
    parse(json!({ "title": "Doc", "body": { "content": content } }))
}

// ==================== End to End ====================

#[test]
fn test_end_to_end() {
    let doc = parse(json!({
        "title": "Doc",
        "body": { "content": [
            styled("Title\n", "HEADING_1"),
            text("Hello\n"),
            table(&[&["x"]]),
            footnote_ref("f1")
        ] },
        "footnotes": { "f1": footnote_body("note text\n") }
    }));

    let converted = convert(&doc);
    assert_eq!(converted.title, "Doc");
    assert_eq!(
        converted.content,
        "# Title\n\nHello\n\n| x |\n| --- |\n\n[^1]\n\n## Footnotes\n\n[^1]: note text"
    );
}

#[test]
fn test_idempotent() {
    let doc = parse(json!({
        "title": "Doc",
        "body": { "content": [
            list_item("one\n", "L1", 0),
            footnote_ref("f1"),
            list_item("two\n", "L1", 0)
        ] },
        "lists": { "L1": { "listProperties": { "nestingLevels": [ { "glyphType": "DECIMAL" } ] } } },
        "footnotes": { "f1": footnote_body("note") }
    }));

    let first = convert(&doc);
    let second = convert(&doc);
    assert_eq!(first, second);
    assert!(second.content.starts_with("1. one\n\n[^1]\n\n2. two"));
}

#[test]
fn test_order_preserved() {
    let doc = body(vec![
        text("first\n"),
        json!({ "horizontalRule": {} }),
        text("second\n"),
        json!({ "tableOfContents": {} }),
        text("third\n"),
    ]);

    assert_eq!(
        convert(&doc).content,
        "first\n\n---\n\nsecond\n\n<!-- Table of Contents -->\n\nthird"
    );
}

#[test]
fn test_empty_document() {
    let doc = parse(json!({}));
    let converted = convert(&doc);
    assert_eq!(converted.title, "");
    assert_eq!(converted.content, "");
}

#[test]
fn test_unknown_elements_skipped() {
    let doc = body(vec![
        json!({ "sectionBreak": { "sectionStyle": {} } }),
        text("kept\n"),
        json!({ "somethingNew": 1 }),
        json!({ "paragraph": { "elements": [
            { "pageBreak": {} },
            { "textRun": { "content": "after break" } }
        ] } }),
    ]);

    assert_eq!(convert(&doc).content, "kept\n\nafter break");
}

// ==================== Footnotes ====================

#[test]
fn test_footnote_numbering_first_encounter() {
    let doc = parse(json!({
        "title": "Doc",
        "body": { "content": [
            footnote_ref("f2"),
            footnote_ref("f1"),
            footnote_ref("f2"),
            footnote_ref("f3")
        ] },
        "footnotes": {
            "f1": footnote_body("one"),
            "f2": footnote_body("two"),
            "f3": footnote_body("three")
        }
    }));

    assert_eq!(
        convert(&doc).content,
        "[^1]\n\n[^2]\n\n[^1]\n\n[^3]\n\n## Footnotes\n\n[^1]: two\n\n[^2]: one\n\n[^3]: three"
    );
}

#[test]
fn test_footnote_inline_with_text() {
    let doc = parse(json!({
        "title": "Doc",
        "body": { "content": [
            { "paragraph": { "elements": [
                { "textRun": { "content": "Claim" } },
                { "footnoteReference": { "footnoteId": "f1" } },
                { "textRun": { "content": " stands.\n" } }
            ] } }
        ] },
        "footnotes": { "f1": footnote_body(" Source.\n") }
    }));

    assert_eq!(
        convert(&doc).content,
        "Claim[^1] stands.\n\n## Footnotes\n\n[^1]: Source."
    );
}

#[test]
fn test_top_level_footnote_reference() {
    let doc = parse(json!({
        "title": "Doc",
        "body": { "content": [
            text("before\n"),
            { "footnoteReference": { "footnoteId": "f1" } }
        ] },
        "footnotes": { "f1": footnote_body("body") }
    }));

    assert_eq!(
        convert(&doc).content,
        "before\n\n[^1]\n\n## Footnotes\n\n[^1]: body"
    );
}

#[test]
fn test_unknown_footnote_renders_empty_body() {
    let doc = body(vec![footnote_ref("missing")]);
    assert_eq!(convert(&doc).content, "[^1]\n\n## Footnotes\n\n[^1]:");
}

#[test]
fn test_no_footnotes_section_without_references() {
    let doc = parse(json!({
        "title": "Doc",
        "body": { "content": [ text("plain\n") ] },
        "footnotes": { "f1": footnote_body("unused") }
    }));

    assert_eq!(convert(&doc).content, "plain");
}

// ==================== Lists ====================

#[test]
fn test_list_numbering_with_interleaved_paragraph() {
    let doc = parse(json!({
        "title": "Doc",
        "body": { "content": [
            list_item("a\n", "L1", 0),
            list_item("b\n", "L1", 0),
            text("aside\n"),
            list_item("c\n", "L1", 0)
        ] },
        "lists": { "L1": { "listProperties": { "nestingLevels": [ { "glyphType": "DECIMAL" } ] } } }
    }));

    assert_eq!(convert(&doc).content, "1. a\n\n2. b\n\naside\n\n3. c");
}

#[test]
fn test_independent_list_counters() {
    let doc = parse(json!({
        "title": "Doc",
        "body": { "content": [
            list_item("a\n", "L1", 0),
            list_item("x\n", "L2", 0),
            list_item("b\n", "L1", 0),
            list_item("y\n", "L2", 0)
        ] },
        "lists": {
            "L1": { "listProperties": { "nestingLevels": [ { "glyphType": "DECIMAL" } ] } },
            "L2": { "listProperties": { "nestingLevels": [ { "glyphType": "DECIMAL" } ] } }
        }
    }));

    assert_eq!(convert(&doc).content, "1. a\n\n1. x\n\n2. b\n\n2. y");
}

#[test]
fn test_nested_list_indentation() {
    let doc = parse(json!({
        "title": "Doc",
        "body": { "content": [
            list_item("top\n", "L1", 0),
            list_item("child\n", "L1", 1),
            list_item("grandchild\n", "L1", 2),
            list_item("next\n", "L1", 0)
        ] },
        "lists": { "L1": { "listProperties": { "nestingLevels": [
            { "glyphType": "DECIMAL" },
            { "glyphSymbol": "○" },
            { "glyphType": "DECIMAL" }
        ] } } }
    }));

    assert_eq!(
        convert(&doc).content,
        "1. top\n\n  - child\n\n    2. grandchild\n\n3. next"
    );
}

#[test]
fn test_bulleted_and_unknown_lists() {
    let doc = parse(json!({
        "title": "Doc",
        "body": { "content": [
            list_item("dot\n", "B", 0),
            list_item("orphan\n", "missing", 0),
            list_item("deep\n", "B", 5)
        ] },
        "lists": { "B": { "listProperties": { "nestingLevels": [ { "glyphSymbol": "●" } ] } } }
    }));

    assert_eq!(
        convert(&doc).content,
        "- dot\n\n- orphan\n\n          - deep"
    );
}

#[test]
fn test_empty_list_item_consumes_ordinal() {
    let doc = parse(json!({
        "title": "Doc",
        "body": { "content": [
            list_item("a\n", "L1", 0),
            list_item("\n", "L1", 0),
            list_item("c\n", "L1", 0)
        ] },
        "lists": { "L1": { "listProperties": { "nestingLevels": [ { "glyphType": "DECIMAL" } ] } } }
    }));

    assert_eq!(convert(&doc).content, "1. a\n\n3. c");
}

// ==================== Headings ====================

#[test]
fn test_heading_mapping() {
    let doc = body(vec![
        styled("Intro\n", "HEADING_2"),
        styled("Intro\n", "NORMAL_TEXT"),
        styled("Deep\n", "HEADING_6"),
        styled("Big\n", "TITLE"),
        styled("Odd\n", "HEADING_10"),
    ]);

    assert_eq!(
        convert(&doc).content,
        "## Intro\n\nIntro\n\n###### Deep\n\nBig\n\nOdd"
    );
}

#[test]
fn test_heading_wins_over_list_prefix() {
    let doc = parse(json!({
        "title": "Doc",
        "body": { "content": [
            { "paragraph": {
                "paragraphStyle": { "namedStyleType": "HEADING_3" },
                "bullet": { "listId": "L1" },
                "elements": [ { "textRun": { "content": "Section\n" } } ]
            } },
            list_item("item\n", "L1", 0)
        ] },
        "lists": { "L1": { "listProperties": { "nestingLevels": [ { "glyphType": "DECIMAL" } ] } } }
    }));

    assert_eq!(convert(&doc).content, "### Section\n\n2. item");
}

#[test]
fn test_empty_heading_dropped() {
    let doc = body(vec![styled("   \n", "HEADING_1"), text("body\n")]);
    assert_eq!(convert(&doc).content, "body");
}

// ==================== Tables ====================

#[test]
fn test_table_rendering() {
    let doc = body(vec![table(&[&["a", "b"], &["c", "d"]])]);
    assert_eq!(convert(&doc).content, "| a | b |\n| --- | --- |\n| c | d |");
}

#[test]
fn test_ragged_table() {
    let doc = body(vec![table(&[&["a", "b", "c"], &["d"], &["e", "f"]])]);
    assert_eq!(
        convert(&doc).content,
        "| a | b | c |\n| --- | --- | --- |\n| d |\n| e | f |"
    );
}

#[test]
fn test_empty_table_dropped() {
    let doc = body(vec![text("before\n"), json!({ "table": {} }), text("after\n")]);
    assert_eq!(convert(&doc).content, "before\n\nafter");
}

#[test]
fn test_table_cell_multiple_paragraphs() {
    let doc = body(vec![json!({ "table": { "tableRows": [ { "tableCells": [
        { "content": [ text(" left \n"), text("right\n") ] },
        { "content": [] }
    ] } ] } })]);

    assert_eq!(convert(&doc).content, "| leftright |  |\n| --- | --- |");
}

// ==================== Images and Equations ====================

#[test]
fn test_image_resolution() {
    let doc = parse(json!({
        "title": "Doc",
        "body": { "content": [
            text("before\n"),
            { "paragraph": { "elements": [ { "inlineObjectElement": { "inlineObjectId": "img1" } } ] } },
            { "paragraph": { "elements": [ { "inlineObjectElement": { "inlineObjectId": "nope" } } ] } },
            text("after\n")
        ] },
        "inlineObjects": { "img1": { "inlineObjectProperties": { "embeddedObject": {
            "imageProperties": { "contentUri": "https://x/y.png" }
        } } } }
    }));

    assert_eq!(
        convert(&doc).content,
        "before\n\n![](https://x/y.png)\n\nafter"
    );
}

#[test]
fn test_inline_image_becomes_block() {
    let doc = parse(json!({
        "title": "Doc",
        "body": { "content": [
            { "paragraph": { "elements": [
                { "textRun": { "content": "See" } },
                { "inlineObjectElement": { "inlineObjectId": "img1" } },
                { "textRun": { "content": "here\n" } }
            ] } }
        ] },
        "inlineObjects": { "img1": { "imageProperties": { "contentUri": "https://x/z.png" } } }
    }));

    assert_eq!(convert(&doc).content, "See\n\n![](https://x/z.png)\n\nhere");
}

#[test]
fn test_equation_paragraph() {
    let doc = body(vec![
        text("before\n"),
        json!({ "paragraph": { "elements": [
            { "textRun": { "content": "ignored" } },
            { "equation": { "equation": "x^2" } }
        ] } }),
        text("after\n"),
    ]);

    assert_eq!(convert(&doc).content, "before\n\n$x^2$\n\nafter");
}

// ==================== Options ====================

#[test]
fn test_frontmatter_and_toc_placeholder() {
    let doc = parse(json!({
        "title": "Plan",
        "documentId": "doc-7",
        "body": { "content": [ { "tableOfContents": {} }, text("text\n") ] }
    }));

    let options = RenderOptions::new()
        .with_frontmatter(true)
        .with_toc_placeholder("[TOC]");

    assert_eq!(
        convert_with_options(&doc, &options).content,
        "---\ntitle: \"Plan\"\ndocument_id: \"doc-7\"\n---\n\n[TOC]\n\ntext"
    );
}

#[test]
fn test_cleanup_soft_breaks() {
    let doc = body(vec![text("line one\u{000B}line two\u{FFFD}\n")]);
    let options = RenderOptions::new().with_cleanup_preset(CleanupPreset::Standard);

    assert_eq!(
        convert_with_options(&doc, &options).content,
        "line one\nline two"
    );
}

// ==================== Concurrency ====================

#[test]
fn test_parallel_conversions_match() {
    let doc = parse(json!({
        "title": "Doc",
        "body": { "content": [
            list_item("a\n", "L1", 0),
            footnote_ref("f1"),
            list_item("b\n", "L1", 0)
        ] },
        "lists": { "L1": { "listProperties": { "nestingLevels": [ { "glyphType": "DECIMAL" } ] } } },
        "footnotes": { "f1": footnote_body("n") }
    }));

    let expected = convert(&doc);
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4).map(|_| scope.spawn(|| convert(&doc))).collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
