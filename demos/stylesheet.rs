//! Parses a stylesheet and prints it as JSON
//!
//! Usage: cargo run --example stylesheet [path/to/file.css]

use parse_utils::{CssEntry, SourceText, parse_css_blocks};
use std::env;
use std::fs;

const SAMPLE: &str = r#"
/* layout */
body { margin: 0; font: 14px/1.4 sans-serif }
.header > h1 { font-size: 2em; }

@media print {
  .header { display: none }
}

@import url(theme.css);

broken { color red }
footer { color: #777 }
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let input = match env::args().nth(1) {
        Some(path) => fs::read_to_string(path)?,
        None => SAMPLE.to_string(),
    };

    let text = SourceText::from(input);
    let (_, sheet) = parse_css_blocks(0, &text.source())?;

    for (key, entry) in &sheet {
        match entry {
            CssEntry::Rule(declarations) => {
                println!("rule {:?}: {} declarations", key, declarations.len())
            }
            CssEntry::Media(rules) => println!("block {:?}: {} rules", key, rules.len()),
        }
    }

    println!("{}", serde_json::to_string_pretty(&sheet)?);
    Ok(())
}
