use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        let ws = Self {
            dir: tempfile::tempdir().unwrap(),
        };
        ws.write("article.txt", "SEO basics for new sites\nPlain paragraph\nA short guide\n");
        ws.write("primary.txt", "SEO\n");
        ws.write("secondary.txt", "guide\n");
        ws
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, contents).unwrap();
        path
    }
}

#[test]
fn optimize_text_to_markdown_on_stdout() {
    let ws = Workspace::new();
    let mut cmd = cargo_bin_cmd!("seo-outline");
    cmd.arg("optimize")
        .arg(ws.path("article.txt"))
        .arg("--primary")
        .arg(ws.path("primary.txt"))
        .arg("--secondary")
        .arg(ws.path("secondary.txt"))
        .arg("--to")
        .arg("markdown");

    cmd.assert().success().stdout(
        "# SEO\n\nSEO basics for new sites\n\nPlain paragraph\n\n## guide\n\nA short guide\n",
    );
}

#[test]
fn optimize_writes_html_and_report_files() {
    let ws = Workspace::new();
    let output = ws.path("out.html");
    let report = ws.path("report.yaml");
    let mut cmd = cargo_bin_cmd!("seo-outline");
    cmd.arg("optimize")
        .arg(ws.path("article.txt"))
        .arg("--primary")
        .arg(ws.path("primary.txt"))
        .arg("--output")
        .arg(&output)
        .arg("--report")
        .arg(&report)
        .arg("--report-format")
        .arg("yaml");

    cmd.assert().success().stdout(predicate::str::is_empty());

    let html = fs::read_to_string(&output).unwrap();
    assert!(html.contains(r#"<h1 dir="rtl">SEO</h1>"#));
    assert!(html.contains(r#"<p dir="rtl">Plain paragraph</p>"#));

    let yaml = fs::read_to_string(&report).unwrap();
    assert!(yaml.contains("focus_keyword: SEO"));
    assert!(yaml.contains("readability:"));
}

#[test]
fn analyze_prints_json_report() {
    let ws = Workspace::new();
    let mut cmd = cargo_bin_cmd!("seo-outline");
    cmd.arg("analyze")
        .arg(ws.path("article.txt"))
        .arg("--primary")
        .arg(ws.path("primary.txt"))
        .arg("--secondary")
        .arg(ws.path("secondary.txt"));

    let output = predicate::str::contains(r#""heading_usage""#)
        .and(predicate::str::contains(r#""kind": "secondary""#))
        .and(predicate::str::contains(r#""meta_title": "SEO | comprehensive guide""#));
    cmd.assert().success().stdout(output);
}

#[test]
fn config_file_and_flags_are_layered() {
    let ws = Workspace::new();
    let config = ws.write(
        "seo.toml",
        "[analysis]\ncheck_semantic = false\n\n[export]\nlang = \"en\"\ndirection = \"ltr\"\n",
    );
    ws.write("article.md", "SEO one\n\nSEO two\n");
    let mut cmd = cargo_bin_cmd!("seo-outline");
    cmd.arg("optimize")
        .arg(ws.path("article.md"))
        .arg("--primary")
        .arg(ws.path("primary.txt"))
        .arg("--config")
        .arg(&config)
        .arg("--h2-max")
        .arg("0");

    let output = predicate::str::contains(r#"<html lang="en" dir="ltr">"#)
        .and(predicate::str::contains(r#"<h1 dir="ltr">SEO</h1>"#))
        .and(predicate::str::contains(r#"<h3 dir="ltr">SEO</h3>"#))
        .and(predicate::str::contains("<h2").not());
    cmd.assert().success().stdout(output);
}

#[test]
fn zero_h1_quota_is_rejected() {
    let ws = Workspace::new();
    let mut cmd = cargo_bin_cmd!("seo-outline");
    cmd.arg("optimize")
        .arg(ws.path("article.txt"))
        .arg("--primary")
        .arg(ws.path("primary.txt"))
        .arg("--h1-max")
        .arg("0");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error: Invalid configuration"));
}

#[test]
fn unknown_extension_needs_explicit_format() {
    let ws = Workspace::new();
    let input = ws.write("article.docx", "SEO text\n");
    let mut cmd = cargo_bin_cmd!("seo-outline");
    cmd.arg("analyze")
        .arg(&input)
        .arg("--primary")
        .arg(ws.path("primary.txt"));
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error: Format 'docx' not found"));

    let mut cmd = cargo_bin_cmd!("seo-outline");
    cmd.arg("analyze")
        .arg(&input)
        .arg("--from")
        .arg("text")
        .arg("--primary")
        .arg(ws.path("primary.txt"));
    cmd.assert().success();
}

#[test]
fn missing_keyword_file_fails() {
    let ws = Workspace::new();
    let mut cmd = cargo_bin_cmd!("seo-outline");
    cmd.arg("optimize")
        .arg(ws.path("article.txt"))
        .arg("--primary")
        .arg(ws.path("nope.txt"));
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error: IO error"));
}

#[test]
fn list_formats_shows_registry() {
    let mut cmd = cargo_bin_cmd!("seo-outline");
    cmd.arg("list-formats");
    let output = predicate::str::contains("html")
        .and(predicate::str::contains("json"))
        .and(predicate::str::contains("markdown"))
        .and(predicate::str::contains("text"));
    cmd.assert().success().stdout(output);
}
