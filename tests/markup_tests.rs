//! Integration tests for tags, section headers and key/value lines

use parse_utils::{
    KeyValue, SourceText, Tag, TagKind, parse_bracket_section, parse_line_key_value, parse_tag,
    skip_at_newline, skip_spaces,
};

type IniSection = (String, Vec<(String, String)>);

/// Minimal INI reader built from the section and key/value scanners
fn read_ini(input: &str) -> Vec<IniSection> {
    let text = SourceText::from(input);
    let src = text.source();
    let mut sections: Vec<IniSection> = Vec::new();
    let mut i = 0;

    while i < src.len() {
        i = skip_spaces(i, &src);
        if src.is_at(i, '[') {
            let (next, name) = parse_bracket_section(i, &src).unwrap();
            sections.push((name, Vec::new()));
            i = next;
            continue;
        }

        let (next, KeyValue { key, value }) = parse_line_key_value(i, &src).unwrap();
        if !key.is_empty() {
            if let Some((_, pairs)) = sections.last_mut() {
                pairs.push((key, value));
            }
        }
        i = skip_at_newline(next, &src);
    }
    sections
}

fn all_tags(input: &str) -> Vec<Tag> {
    let text = SourceText::from(input);
    let src = text.source();
    let mut tags = Vec::new();
    let mut i = 0;
    while i < src.len() {
        let (next, tag) = parse_tag(i, &src).unwrap();
        tags.push(tag);
        i = next;
    }
    tags
}

#[test]
fn test_ini_document() {
    let sections = read_ini(
        "; generated\n[server]\nhost = example.org\nport=8080\n\n# comment line\n[ client ]\nname = \"my app\"\n",
    );
    assert_eq!(sections.len(), 2);

    let (name, pairs) = &sections[0];
    assert_eq!(name, "server");
    assert_eq!(
        pairs,
        &vec![
            ("host".to_string(), "example.org".to_string()),
            ("port".to_string(), "8080".to_string()),
        ]
    );

    let (name, pairs) = &sections[1];
    assert_eq!(name, "client");
    assert_eq!(pairs, &vec![("name".to_string(), "my app".to_string())]);
}

#[test]
fn test_ini_with_crlf_line_endings() {
    let sections = read_ini("[a]\r\nx=1\r\ny = two\r\n");
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].1.len(), 2);
    assert_eq!(sections[0].1[1], ("y".to_string(), "two".to_string()));
}

#[test]
fn test_html_fragment() {
    let tags = all_tags(
        "<ul class=\"menu\">\n  <li><a href=\"/home\" title='Home page'>Home</a></li>\n  <li><img src=logo.png alt=\"\" /></li>\n</ul>",
    );
    let summary: Vec<(&str, TagKind, bool)> = tags
        .iter()
        .map(|t| (t.name.as_str(), t.kind, t.self_closing))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("ul", TagKind::Begin, false),
            ("li", TagKind::Begin, false),
            ("a", TagKind::Begin, false),
            ("a", TagKind::End, false),
            ("li", TagKind::End, false),
            ("li", TagKind::Begin, false),
            ("img", TagKind::Begin, true),
            ("li", TagKind::End, false),
            ("ul", TagKind::End, false),
        ]
    );

    assert_eq!(tags[0].attributes["class"], "menu");
    assert_eq!(tags[2].attributes["href"], "/home");
    assert_eq!(tags[2].attributes["title"], "Home page");
    assert_eq!(tags[6].attributes["src"], "logo.png");
    assert_eq!(tags[6].attributes["alt"], "");
}

#[test]
fn test_unicode_names() {
    let tags = all_tags("<título lang=es>");
    assert_eq!(tags[0].name, "título");
    assert_eq!(tags[0].attributes["lang"], "es");
}

#[test]
fn test_tag_serializes_to_json() {
    let tags = all_tags("<a href=/x>");
    let json = serde_json::to_value(&tags[0]).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "name": "a",
            "kind": "begin",
            "attributes": { "href": "/x" },
            "self_closing": false
        })
    );
}

#[test]
fn test_key_value_lines_in_sequence() {
    let text = SourceText::from("a=1\nb = 'two words'\nc\nd=4");
    let src = text.source();
    let mut pairs = Vec::new();
    let mut i = 0;
    while i < src.len() {
        let (next, pair) = parse_line_key_value(i, &src).unwrap();
        if !pair.is_empty() {
            pairs.push((pair.key, pair.value));
        }
        i = skip_at_newline(next, &src);
    }
    assert_eq!(
        pairs,
        vec![
            ("a".to_string(), "1".to_string()),
            ("b".to_string(), "two words".to_string()),
            ("d".to_string(), "4".to_string()),
        ]
    );
}
