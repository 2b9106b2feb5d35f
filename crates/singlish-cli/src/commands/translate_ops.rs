use std::io::{self, Read};

use singlish_core::translator::explain;

use super::open_engine;

/// Translate TEXT, or all of stdin when TEXT is absent.
pub fn translate_cmd(text: Option<&str>, tables: Option<&str>, json: bool) {
    let engine = open_engine(tables);
    let input = match text {
        Some(t) => t.to_string(),
        None => {
            let mut buf = String::new();
            die!(io::stdin().read_to_string(&mut buf), "Failed to read stdin: {}");
            buf
        }
    };

    let result = engine.translate(&input);
    if json {
        println!(
            "{}",
            die!(serde_json::to_string_pretty(&result), "JSON serialization failed: {}")
        );
    } else if text.is_some() {
        println!("{}", result.output);
    } else {
        print!("{}", result.output);
    }
}

pub fn explain_cmd(text: &str, tables: Option<&str>, json: bool) {
    let engine = open_engine(tables);
    let result = explain::explain(&engine.tables(), text);
    if json {
        println!(
            "{}",
            die!(serde_json::to_string_pretty(&result), "JSON serialization failed: {}")
        );
    } else {
        print!("{}", explain::format_text(&result));
    }
}
