use cognita_export::docx::generate_docx;
use cognita_export::styles::DocumentStyles;

/// The generated package read back into docx-rs's JSON model.
fn document_json(rendered: &str) -> String {
    let bytes = generate_docx(rendered, &DocumentStyles::default()).unwrap();
    assert_eq!(&bytes[..2], b"PK");
    docx_rs::read_docx(&bytes).unwrap().json()
}

#[test]
fn headings_and_body_text_survive() {
    let json = document_json("# Title\n\nBody with **bold** text");
    assert!(json.contains("Title"));
    assert!(json.contains("Body with "));
    assert!(json.contains("bold"));
    assert!(!json.contains("**"));
}

#[test]
fn table_rows_become_a_word_table() {
    let json = document_json(
        "\
## Indices

| Index | Composite |
|---|---|
| ICV | 101 |
| QIT | -- |

After the table.",
    );

    assert_eq!(json.matches(r#""type":"table""#).count(), 1);
    assert!(json.contains("ICV"));
    assert!(json.contains("101"));
    assert!(json.contains("After the table."));
    assert!(!json.contains("|---|"));
    assert!(!json.contains("| ICV"));
}

#[test]
fn table_at_end_of_input_is_kept() {
    let json = document_json("| a | b |\n| 1 | 2 |");
    assert_eq!(json.matches(r#""type":"table""#).count(), 1);
}

#[test]
fn plain_paragraphs_make_no_table() {
    let json = document_json("- a bullet\n---\nnext page");
    assert_eq!(json.matches(r#""type":"table""#).count(), 0);
    assert!(json.contains("a bullet"));
}
