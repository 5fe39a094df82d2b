//! End-to-end conversion tests.
//!
//! The fixtures in test-data/ are a small Mendeley library exported both as
//! CSL-JSON and as BibTeX.

use bibhtml_core::{Config, Error, TagIndex, convert, load_references, render_document};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn test_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test-data")
}

fn config_writing_to(dir: &Path) -> Config {
    Config {
        output_file: dir.join("output.html"),
        ..Config::default()
    }
}

fn reference_json(pmid: &str, year: i32, title: &str) -> String {
    format!(
        r#"{{
            "id": "{pmid}",
            "title": "{title}",
            "container-title": "Journal",
            "volume": "1",
            "page": "1-2",
            "DOI": "10.1000/{pmid}",
            "PMID": "{pmid}",
            "URL": "http://example.org/{pmid}",
            "author": [{{"family": "Doe", "given": "Jane"}}],
            "issued": {{"date-parts": [[{year}]]}}
        }}"#
    )
}

#[test]
fn test_convert_fixture_library() {
    let temp = TempDir::new().expect("Failed to create temp directory");
    let config = config_writing_to(temp.path());

    let written = convert(
        &test_data_dir().join("pubs.json"),
        &test_data_dir().join("pubs.bib"),
        &config,
    )
    .expect("conversion failed");

    assert_eq!(written, config.output_file);
    let html = fs::read_to_string(&written).expect("Failed to read output");
    let expected = fs::read_to_string(test_data_dir().join("pubs.expected.html"))
        .expect("Failed to read expected output");
    assert_eq!(html, expected);
}

#[test]
fn test_years_are_non_increasing() {
    let temp = TempDir::new().expect("Failed to create temp directory");
    let config = config_writing_to(temp.path());
    convert(
        &test_data_dir().join("pubs.json"),
        &test_data_dir().join("pubs.bib"),
        &config,
    )
    .expect("conversion failed");

    let html = fs::read_to_string(&config.output_file).unwrap();
    let years: Vec<i32> = html
        .match_indices("<span class=\"pubdate\">(")
        .map(|(at, marker)| {
            let start = at + marker.len();
            html[start..start + 4].parse().unwrap()
        })
        .collect();
    assert_eq!(years, vec![2016, 2016, 2015, 2014]);
    assert!(years.windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(html.matches("<h1 id=").count(), 3);
}

#[test]
fn test_conversion_is_deterministic() {
    let temp = TempDir::new().expect("Failed to create temp directory");
    let config = config_writing_to(temp.path());
    let json = test_data_dir().join("pubs.json");
    let bib = test_data_dir().join("pubs.bib");

    convert(&json, &bib, &config).unwrap();
    let first = fs::read(&config.output_file).unwrap();
    convert(&json, &bib, &config).unwrap();
    let second = fs::read(&config.output_file).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_same_year_keeps_input_order() {
    let json = format!(
        "[{}, {}, {}]",
        reference_json("1", 2015, "First"),
        reference_json("2", 2016, "Second"),
        reference_json("3", 2015, "Third")
    );
    let references = load_references(&json).unwrap();
    let html = render_document(&references, &TagIndex::default(), &Config::default()).unwrap();

    let second = html.find(">Second<").unwrap();
    let first = html.find(">First<").unwrap();
    let third = html.find(">Third<").unwrap();
    assert!(second < first && first < third);
}

#[test]
fn test_tagged_pmid_links_to_project_page() {
    let tags = TagIndex::parse("mendeley-tags: - id-TRD1\npmid: 12345\n");
    assert_eq!(tags.get("12345"), Some(&["TRD1".to_string()][..]));

    let json = format!("[{}]", reference_json("12345", 2017, "Tagged"));
    let references = load_references(&json).unwrap();
    let html = render_document(&references, &tags, &Config::default()).unwrap();
    assert!(html.contains(
        "<a href=\"http://mmbios.org/research/technology-research-and-development/molecular-modeling\" \
         class=trd_pub>TRD1</a> "
    ));
}

#[test]
fn test_custom_site_url() {
    let tags = TagIndex::parse("mendeley-tags = {id-DBP4},\npmid = {777},\n");
    let config = Config {
        site_url: "https://staging.example.org".to_string(),
        ..Config::default()
    };
    let json = format!("[{}]", reference_json("777", 2013, "Staged"));
    let html = render_document(&load_references(&json).unwrap(), &tags, &config).unwrap();
    assert!(html.contains(
        "href=\"https://staging.example.org/research/driving-biomedical-projects/t-cell-signaling\""
    ));
}

#[test]
fn test_missing_field_produces_no_output() {
    let temp = TempDir::new().expect("Failed to create temp directory");
    let config = config_writing_to(temp.path());
    let json_path = temp.path().join("broken.json");
    fs::write(
        &json_path,
        r#"[{"id": "nodoi", "title": "T", "container-title": "J", "volume": "1",
             "page": "1", "PMID": "9", "URL": "http://example.org",
             "author": [], "issued": {"date-parts": [[2012]]}}]"#,
    )
    .unwrap();

    let err = convert(&json_path, &test_data_dir().join("pubs.bib"), &config).unwrap_err();
    match err {
        Error::MissingRequiredField { id, field } => {
            assert_eq!(id, "nodoi");
            assert_eq!(field, "DOI");
        }
        other => panic!("expected missing field, got {:?}", other),
    }
    assert!(!config.output_file.exists());
}

#[test]
fn test_malformed_json_is_reported() {
    let temp = TempDir::new().expect("Failed to create temp directory");
    let config = config_writing_to(temp.path());
    let json_path = temp.path().join("broken.json");
    fs::write(&json_path, "[{\"id\": ").unwrap();

    let err = convert(&json_path, &test_data_dir().join("pubs.bib"), &config).unwrap_err();
    assert!(matches!(err, Error::JsonLoad(_)));
    assert!(err.to_string().starts_with("Cannot load JSON file:"));
    assert!(!config.output_file.exists());
}

#[test]
fn test_missing_bibtex_is_reported_before_json() {
    let temp = TempDir::new().expect("Failed to create temp directory");
    let config = config_writing_to(temp.path());

    let err = convert(
        &temp.path().join("missing.json"),
        &temp.path().join("missing.bib"),
        &config,
    )
    .unwrap_err();
    assert!(matches!(err, Error::BibtexLoad { .. }));
    assert!(!config.output_file.exists());
}

#[test]
fn test_missing_json_is_reported_without_output() {
    let temp = TempDir::new().expect("Failed to create temp directory");
    let config = config_writing_to(temp.path());

    let err = convert(
        &temp.path().join("missing.json"),
        &test_data_dir().join("pubs.bib"),
        &config,
    )
    .unwrap_err();
    match &err {
        Error::JsonRead { path, .. } => assert_eq!(path, &temp.path().join("missing.json")),
        other => panic!("expected JSON read error, got {:?}", other),
    }
    assert!(err.to_string().starts_with("Cannot load JSON file:"));
    assert!(!config.output_file.exists());
}

#[test]
fn test_existing_output_is_overwritten() {
    let temp = TempDir::new().expect("Failed to create temp directory");
    let config = config_writing_to(temp.path());
    fs::write(&config.output_file, "stale content that is much longer than nothing").unwrap();

    let json_path = temp.path().join("empty.json");
    fs::write(&json_path, "[]").unwrap();
    convert(&json_path, &test_data_dir().join("pubs.bib"), &config).unwrap();

    assert_eq!(
        fs::read_to_string(&config.output_file).unwrap(),
        "<meta charset=\"UTF-8\">\n"
    );
}
