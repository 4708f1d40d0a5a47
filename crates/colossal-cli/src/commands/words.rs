//! Vocabulary listing for front ends.

use colossal_core::WordKind;
use colossal_core::vocab::all_words;

pub fn run(json: bool) -> Result<(), String> {
    let words = all_words();

    if json {
        let entries: Vec<serde_json::Value> = words
            .iter()
            .map(|(word, kind)| serde_json::json!({ "word": word, "kind": kind }))
            .collect();
        let text = serde_json::to_string_pretty(&entries)
            .map_err(|e| format!("JSON serialization error: {e}"))?;
        println!("{text}");
        return Ok(());
    }

    for (word, kind) in words {
        let kind = match kind {
            WordKind::Motion => "motion",
            WordKind::Object => "object",
            WordKind::Action => "action",
        };
        println!("{kind:<7} {word}");
    }
    Ok(())
}
