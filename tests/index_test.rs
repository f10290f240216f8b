//! End-to-end tests over real PDF files generated on the fly.

mod common;

use std::fs;

use chrono::Datelike;
use pdfindex::visitor::RecordingVisitor;
use pdfindex::{
    build_index, read_metadata, Error, IndexFormat, IndexOptions, LopdfBackend, PdfBackend,
    PdfInspector,
};

#[test]
fn test_read_metadata_from_generated_pdf() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a.pdf");
    common::write_pdf(&path, Some("Paper A"), &["Intro"]);

    let metadata = read_metadata(&path).unwrap();
    assert_eq!(metadata.title.as_deref(), Some("Paper A"));
    assert_eq!(metadata.author.as_deref(), Some("Jane Doe"));
    assert_eq!(metadata.page_count, 1);
    assert_eq!(metadata.pdf_version, "1.5");
    assert_eq!(metadata.created.map(|d| d.year()), Some(2019));
}

#[test]
fn test_pdf_without_info_has_empty_metadata() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plain.pdf");
    common::write_pdf(&path, None, &["Body"]);

    let metadata = read_metadata(&path).unwrap();
    assert!(metadata.title.is_none());
    assert!(metadata.fields().is_empty());
    assert_eq!(metadata.page_count, 1);
}

#[test]
fn test_inspector_tolerates_broken_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.pdf");
    common::write_garbage(&path);

    let inspector = PdfInspector::new(LopdfBackend::new());
    assert!(inspector.inspect_metadata(&path).is_none());
    assert_eq!(inspector.extract_preview(&path), "");
}

#[test]
fn test_preview_stops_at_double_blank_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a.pdf");
    common::write_pdf(&path, Some("Paper A"), &["Intro", " ", " ", "Body"]);

    let inspector = PdfInspector::new(LopdfBackend::new());
    assert_eq!(inspector.extract_preview(&path), "Intro ");
}

#[test]
fn test_preview_keeps_first_twenty_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("long.pdf");
    let lines: Vec<String> = (0..30).map(|i| format!("L{}", i)).collect();
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    common::write_pdf(&path, Some("Long"), &refs);

    let inspector = PdfInspector::new(LopdfBackend::new());
    let expected: String = lines[..20].concat();
    assert_eq!(inspector.extract_preview(&path), expected);
}

#[test]
fn test_page_text_keeps_line_breaks() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a.pdf");
    common::write_pdf(&path, None, &["first", "second"]);

    let text = LopdfBackend::new().page_text(&path, 0).unwrap();
    assert_eq!(text, "first\nsecond\n");
    assert!(matches!(
        LopdfBackend::new().page_text(&path, 1),
        Err(Error::PageOutOfRange(1, 1))
    ));
}

#[test]
fn test_build_index_links_readable_files_only() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("_2019");
    fs::create_dir_all(src.join("posters")).unwrap();
    common::write_pdf(&src.join("a.pdf"), Some("Paper A"), &["Intro"]);
    common::write_pdf(&src.join("posters/b.pdf"), Some("Poster B"), &["Results"]);
    common::write_garbage(&src.join("notes.txt"));

    let html = dir.path().join("index.html");
    let org = dir.path().join("index.org");
    let json = dir.path().join("index.json");
    let options = IndexOptions::new()
        .with_title("DVCON")
        .with_directory(&src)
        .with_output(IndexFormat::Html, &html)
        .with_output(IndexFormat::Org, &org)
        .with_output(IndexFormat::Json, &json);

    let mut visitor = RecordingVisitor::default();
    let summary = build_index(LopdfBackend::new(), &options, &mut visitor).unwrap();

    assert_eq!(summary.directories, 1);
    assert_eq!(summary.files, 3);
    assert_eq!(summary.linked, 2);
    assert_eq!(summary.skipped, 1);
    assert_eq!(visitor.files.len(), 3);
    assert_eq!(summary.outputs, vec![html.clone(), org.clone(), json.clone()]);

    let a_url = src.join("a.pdf").display().to_string();
    let b_url = src.join("posters/b.pdf").display().to_string();

    let html_text = fs::read_to_string(&html).unwrap();
    assert!(html_text.starts_with("<html>\n<head>DVCON</head>\n<body>\n"));
    assert!(html_text.contains(&format!("<h1>{}</h1>", src.display())));
    assert!(html_text.contains(&format!("<p><a href=\"{}\">Paper A</a></p>", a_url)));
    assert!(html_text.contains(&format!("<p><a href=\"{}\">Poster B</a></p>", b_url)));
    assert!(!html_text.contains("notes.txt"));

    let org_text = fs::read_to_string(&org).unwrap();
    assert!(org_text.starts_with(&format!("DVCON\n\n* {}\n", src.display())));
    assert!(org_text.contains(&format!("[[file:{}][Paper A]]", a_url)));
    assert!(org_text.contains(&format!("[[file:{}][Poster B]]", b_url)));

    let json_value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json).unwrap()).unwrap();
    assert_eq!(json_value["sections"][0]["links"].as_array().unwrap().len(), 2);
}

#[test]
fn test_unwritable_output_aborts_run() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("_2019");
    fs::create_dir(&src).unwrap();
    common::write_pdf(&src.join("a.pdf"), Some("Paper A"), &["Intro"]);

    let bad = dir.path().join("no-such-dir").join("index.org");
    let options = IndexOptions::new()
        .with_directory(&src)
        .with_output(IndexFormat::Html, dir.path().join("index.html"))
        .with_output(IndexFormat::Org, &bad);

    let err = build_index(LopdfBackend::new(), &options, &mut RecordingVisitor::default())
        .unwrap_err();
    assert!(matches!(err, Error::WriteOutput { ref path, .. } if *path == bad));
    assert!(err.to_string().contains("index.org"));
    assert!(!bad.exists());
}
