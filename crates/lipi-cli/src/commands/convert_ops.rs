use std::fs;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

use lipi_core::Transliterator;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::die;

/// One line of `batch` output.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct BatchEntry {
    pub word: String,
    pub lang: String,
    pub native: String,
}

pub fn convert_cmd(t: &Transliterator, lang: &str, words: &[String], json: bool) {
    let words: Vec<String> = if words.is_empty() {
        let stdin = io::stdin();
        die!(
            read_words(stdin.lock()),
            "Error reading standard input: {}"
        )
    } else {
        words.to_vec()
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for word in &words {
        let native = t.transliterate(word, lang);
        let line = if json {
            let entry = BatchEntry {
                word: word.clone(),
                lang: lang.to_string(),
                native,
            };
            die!(serde_json::to_string(&entry), "Error encoding JSON: {}")
        } else {
            native
        };
        die!(writeln!(out, "{line}"), "Error writing output: {}");
    }
}

pub fn batch_cmd(t: &Transliterator, lang: &str, input_file: &str, output_file: &str) {
    let input = die!(
        fs::File::open(input_file),
        "Failed to open input file {input_file}: {}"
    );
    let words = die!(
        read_words(BufReader::new(input)),
        "Failed to read {input_file}: {}"
    );
    let output = die!(
        fs::File::create(output_file),
        "Failed to create output file {output_file}: {}"
    );
    let count = die!(
        write_batch(t, lang, &words, BufWriter::new(output)),
        "Failed to write {output_file}: {}"
    );
    eprintln!("Wrote {count} entries to {output_file}");
}

/// Non-empty, non-comment lines, trimmed.
pub fn read_words<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        words.push(line.to_string());
    }
    Ok(words)
}

/// Write one JSON object per word. Returns the number of lines written.
pub fn write_batch<W: Write>(
    t: &Transliterator,
    lang: &str,
    words: &[String],
    mut writer: W,
) -> io::Result<usize> {
    let natives = t.transliterate_batch(words, lang);
    for (word, native) in words.iter().zip(natives) {
        let entry = BatchEntry {
            word: word.clone(),
            lang: lang.to_string(),
            native,
        };
        serde_json::to_writer(&mut writer, &entry)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    debug!(count = words.len(), lang, "batch written");
    Ok(words.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_words_skips_comments_and_blanks() {
        let input = "# header\nnamaste\n\n  kaise \n#ignored\n";
        let words = read_words(input.as_bytes()).unwrap();
        assert_eq!(words, vec!["namaste", "kaise"]);
    }

    #[test]
    fn write_batch_emits_jsonl() {
        let t = Transliterator::builtin().unwrap();
        let words = vec!["namaste".to_string(), "ba/banni".to_string()];
        let mut buf = Vec::new();
        let n = write_batch(&t, "kn", &words, &mut buf).unwrap();
        assert_eq!(n, 2);

        let text = String::from_utf8(buf).unwrap();
        let entries: Vec<BatchEntry> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].word, "ba/banni");
        assert_eq!(entries[1].lang, "kn");
        assert_eq!(entries[1].native, "ಬ / ಬನ್ನಿ");
    }

    #[test]
    fn write_batch_unsupported_passthrough() {
        let t = Transliterator::builtin().unwrap();
        let words = vec!["hello".to_string()];
        let mut buf = Vec::new();
        write_batch(&t, "zz", &words, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let entry: BatchEntry = serde_json::from_str(text.trim_end()).unwrap();
        assert_eq!(entry.native, "hello");
    }
}
