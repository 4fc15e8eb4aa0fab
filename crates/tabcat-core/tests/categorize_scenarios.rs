//! End-to-end scenarios: raw JSON input through the built-in rules to the
//! output document.

use serde_json::{json, Value};
use tabcat_core::{categorize, Classifier};

fn run(input: &str) -> Value {
    let classifier = Classifier::builtin().expect("built-in rules compile");
    categorize(&classifier, input.as_bytes())
}

#[test]
fn youtube_watch_url_pretty_output() {
    let out = run(r#"[{"title":"My Video","url":"https://youtube.com/watch?v=123"}]"#);
    let expected = r#"{
  "YouTube Videos": [
    {
      "title": "My Video",
      "url": "https://youtube.com/watch?v=123"
    }
  ]
}"#;
    assert_eq!(serde_json::to_string_pretty(&out).unwrap(), expected);
}

#[test]
fn unmatched_tab_is_miscellaneous() {
    let out = run(r#"[{"title":"Random Page","url":"https://example.com"}]"#);
    assert_eq!(
        out,
        json!({ "Miscellaneous": [{ "title": "Random Page", "url": "https://example.com" }] })
    );
}

#[test]
fn invalid_json_is_error_object() {
    assert_eq!(run("not valid json"), json!({ "error": "Invalid JSON input" }));
}

#[test]
fn title_keyword_without_url_match() {
    let out = run(r#"[{"title":"My Todo List","url":"https://example.com/app"}]"#);
    assert_eq!(
        out,
        json!({ "Task Management Tools": [{ "title": "My Todo List", "url": "https://example.com/app" }] })
    );
}

#[test]
fn github_and_localhost_sorted_by_category_name() {
    let out = run(
        r#"[
            {"title":"rust-lang/rust","url":"https://github.com/rust-lang/rust"},
            {"title":"Local app","url":"http://localhost:3000/"}
        ]"#,
    );
    let obj = out.as_object().unwrap();
    let keys: Vec<&str> = obj.keys().map(String::as_str).collect();
    assert_eq!(keys, ["Development Tools", "GitHub Repositories"]);
    assert_eq!(obj["Development Tools"].as_array().unwrap().len(), 1);
    assert_eq!(obj["GitHub Repositories"].as_array().unwrap().len(), 1);
}

#[test]
fn tabs_reemitted_verbatim_with_extra_fields() {
    let input = r#"[{"id":12,"title":"Clip","pinned":false,"url":"https://youtu.be/x","favIconUrl":null}]"#;
    let out = run(input);
    let tab = &out["YouTube Videos"][0];
    assert_eq!(
        serde_json::to_string(tab).unwrap(),
        r#"{"id":12,"title":"Clip","pinned":false,"url":"https://youtu.be/x","favIconUrl":null}"#
    );
}

#[test]
fn numbers_reemitted_with_original_text() {
    let input = r#"[{"id":123456789012345678901234567890,"score":1e400,"ratio":0.10,"title":"Random Page","url":"https://example.com"}]"#;
    let out = run(input);
    let tab = &out["Miscellaneous"][0];
    assert_eq!(
        serde_json::to_string(tab).unwrap(),
        r#"{"id":123456789012345678901234567890,"score":1e400,"ratio":0.10,"title":"Random Page","url":"https://example.com"}"#
    );
}

#[test]
fn total_tab_count_is_conserved() {
    let input = r#"[
        {"title":"Clip","url":"https://youtu.be/x"},
        {"title":"Claude","url":"https://claude.ai/chats"},
        {"title":"Sprint board","url":"https://tracker.example.com/tasks/12"},
        {"title":"serde-rs/json","url":"https://github.com/serde-rs/json"},
        {"title":"MDN Web Docs","url":"https://developer.mozilla.org/en-US/"},
        {"title":"Translate","url":"https://deepl.com/translator"},
        {"title":"Router","url":"http://10.0.0.1/"},
        {"title":"Results","url":"https://duckduckgo.com/?q=tabs"},
        {"title":"Random Page","url":"https://example.com"},
        {},
        {"url":"chrome://newtab/"}
    ]"#;
    let out = run(input);
    let obj = out.as_object().unwrap();
    let total: usize = obj.values().map(|v| v.as_array().unwrap().len()).sum();
    assert_eq!(total, 11);

    let keys: Vec<&String> = obj.keys().collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
    assert_eq!(obj.len(), 9);
}

#[test]
fn top_level_object_is_rejected_whole() {
    let out = run(r#"{"title":"My Video","url":"https://youtube.com/watch?v=123"}"#);
    assert_eq!(out, json!({ "error": "Invalid JSON input" }));
}
