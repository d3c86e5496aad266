use std::{fs, path::Path};

use pretty_assertions::assert_eq;
use propexpr::{
    Context,
    config::load_properties,
    interpreter::value::object::PropertyMap,
    session::{PROMPT, SessionSummary, run_session},
};
use walkdir::WalkDir;

#[test]
fn session_transcripts_match() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/sessions").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "session"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let (input, expected) = split_transcript(&content);

        let output = run(path, &input);

        count += 1;
        assert_eq!(normalize(&output), expected, "transcript {path:?}");
    }

    assert!(count > 0, "No transcripts found in tests/sessions");
}

/// Separates typed lines from expected output lines.
fn split_transcript(content: &str) -> (String, Vec<String>) {
    let mut input = String::new();
    let mut expected = Vec::new();

    for line in content.lines() {
        if let Some(typed) = line.strip_prefix('>') {
            input.push_str(typed.trim_start());
            input.push('\n');
        } else if !line.is_empty() && !line.starts_with('#') {
            expected.push(line.to_string());
        }
    }

    (input, expected)
}

fn run(path: &Path, input: &str) -> String {
    let properties = path.with_extension("properties");
    let root = if properties.exists() {
        load_properties(&properties).unwrap_or_else(|e| panic!("{e}"))
    } else {
        PropertyMap::new()
    };
    let context = Context::with_defaults(root.into());

    let mut output = Vec::new();
    run_session(&context, input.as_bytes(), &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

/// Drops prompts and reduces error lines to `ERROR (Kind)`.
fn normalize(output: &str) -> Vec<String> {
    output.lines()
          .map(|line| line.trim_start_matches(PROMPT))
          .filter(|line| !line.is_empty())
          .map(|line| match line.rsplit_once(" (") {
              Some((_, kind)) if line.starts_with("ERROR: ") => format!("ERROR ({kind}"),
              _ => line.to_string(),
          })
          .collect()
}

#[test]
fn one_prompt_per_line_read() {
    let context = Context::with_defaults(PropertyMap::new().into());
    let mut output = Vec::new();

    let summary = run_session(&context, "1\n\n2".as_bytes(), &mut output).unwrap();

    assert_eq!(String::from_utf8(output).unwrap(),
               ">Result: 1\n>>Result: 2\n>");
    assert_eq!(summary,
               SessionSummary { evaluated: 2,
                                failed:    0, });
}

#[test]
fn errors_do_not_stop_the_session() {
    let context = Context::with_defaults(PropertyMap::new().into());
    let mut output = Vec::new();

    let summary = run_session(&context, "1 +\nnope()\n3 * 3\nExit\n4".as_bytes(), &mut output).unwrap();
    let output = String::from_utf8(output).unwrap();

    assert_eq!(summary,
               SessionSummary { evaluated: 3,
                                failed:    2, });
    assert!(output.contains(">Result: 9\n>"));
    assert!(!output.contains("Result: 4"));
}

#[test]
fn deeply_nested_line_is_reported_and_the_session_continues() {
    let context = Context::with_defaults(PropertyMap::new().into());
    let mut output = Vec::new();
    let input = format!("{}\n{}1\n1+1\n", "(".repeat(20_000), "-".repeat(20_000));

    let summary = run_session(&context, input.as_bytes(), &mut output).unwrap();
    let output = String::from_utf8(output).unwrap();

    assert_eq!(summary,
               SessionSummary { evaluated: 3,
                                failed:    2, });
    assert_eq!(output.matches("deeper than 128 levels. (ParseError)").count(), 2);
    assert!(output.ends_with(">Result: 2\n>"));
}
