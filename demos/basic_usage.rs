//! Basic usage of the scanner family
//!
//! Reads a small mixed-format document by chaining scanners through the
//! cursor they return.

use parse_utils::{
    ScanError, SourceText, parse_bracket_section, parse_csv_line, parse_line_key_value,
    parse_list, parse_map, parse_tag, skip_at_newline, skip_spaces,
};

fn main() -> Result<(), ScanError> {
    println!("Parse Utils - Basic Usage Examples");
    println!("==================================\n");

    key_values()?;
    literals()?;
    markup()?;
    records()?;

    Ok(())
}

fn key_values() -> Result<(), ScanError> {
    println!("1. Sections and key/value lines");

    let text = SourceText::from("[database]\nhost = db.local\nport = 5432\nuser = \"app user\"\n");
    let src = text.source();

    let (mut i, section) = parse_bracket_section(0, &src)?;
    println!("   section: {}", section);

    while i < src.len() {
        let (next, pair) = parse_line_key_value(skip_spaces(i, &src), &src)?;
        if !pair.is_empty() {
            println!("   {} => {:?}", pair.key, pair.value);
        }
        i = skip_at_newline(next, &src);
    }
    println!();
    Ok(())
}

fn literals() -> Result<(), ScanError> {
    println!("2. List and map literals");

    let text = SourceText::from(r#"[1, 2.5, "three", [4, 5]] {"name": "demo", "tags": ["a", "b"]}"#);
    let src = text.source();

    let (i, list) = parse_list(0, &src)?;
    println!("   list: {:?}", list);

    let (_, map) = parse_map(i, &src)?;
    for (key, value) in &map {
        println!("   {} = {:?}", key, value);
    }
    println!();
    Ok(())
}

fn markup() -> Result<(), ScanError> {
    println!("3. Tags");

    let text = SourceText::from("<p class=intro>Hello <br/> <a href='/next'>next</a></p>");
    let src = text.source();

    let mut i = 0;
    while i < src.len() {
        let (next, tag) = parse_tag(i, &src)?;
        println!(
            "   {:<5} {:<3} self_closing={} attributes={:?}",
            tag.kind.as_str(),
            tag.name,
            tag.self_closing,
            tag.attributes
        );
        i = next;
    }
    println!();
    Ok(())
}

fn records() -> Result<(), ScanError> {
    println!("4. CSV records");

    let text = SourceText::from("id,label,weight\n1,\"bolt, small\",0.25\n2,nut,\n");
    let src = text.source();

    let mut i = 0;
    while i < src.len() {
        let (next, fields) = parse_csv_line(i, &src, ',')?;
        println!("   {:?}", fields);
        i = next;
    }
    Ok(())
}
