use lipi_core::Transliterator;
use unicode_width::UnicodeWidthStr;

/// Word shown next to each language in `langs`.
const SAMPLE_WORD: &str = "namaste";

/// One row per registered language: code, name, script, status, sample.
pub fn format_languages(t: &Transliterator) -> String {
    let registry = t.registry();
    let mut rows: Vec<[String; 5]> = vec![[
        "code".to_string(),
        "name".to_string(),
        "script".to_string(),
        "status".to_string(),
        SAMPLE_WORD.to_string(),
    ]];
    for code in registry.languages() {
        let Some(table) = registry.lookup(code) else {
            continue;
        };
        let script = table
            .script
            .map(|s| format!("{s:?}"))
            .unwrap_or_else(|| "-".to_string());
        let status = if table.is_supported() {
            "supported"
        } else {
            "passthrough"
        };
        rows.push([
            code.to_string(),
            table.name.clone(),
            script,
            status.to_string(),
            t.transliterate(SAMPLE_WORD, code),
        ]);
    }

    // Pad by display width; native glyphs are not one column per byte.
    let mut widths = [0usize; 5];
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.width());
        }
    }

    let mut out = String::new();
    for row in &rows {
        let mut line = String::new();
        for (i, cell) in row.iter().enumerate() {
            line.push_str(cell);
            if i + 1 < row.len() {
                let pad = widths[i] - cell.width() + 2;
                line.push_str(&" ".repeat(pad));
            }
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

pub fn langs_cmd(t: &Transliterator) {
    print!("{}", format_languages(t));
}
