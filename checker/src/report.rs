use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;
use simcore::SimilarityResult;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// One `name: xx.xx%` line per document
    Text,
    /// A single JSON object
    Json,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    reference: &'a str,
    vocabulary_size: usize,
    generated_at: String,
    results: Vec<JsonEntry<'a>>,
}

#[derive(Serialize)]
struct JsonEntry<'a> {
    id: &'a str,
    score: f64,
    percent: f64,
}

pub fn render<W: Write>(result: &SimilarityResult, format: Format, out: &mut W) -> Result<()> {
    match format {
        Format::Text => render_text(result, out),
        Format::Json => render_json(result, out),
    }
}

pub fn render_text<W: Write>(result: &SimilarityResult, out: &mut W) -> Result<()> {
    for entry in result {
        writeln!(out, "{}: {:.2}%", entry.id, entry.percent())?;
    }
    Ok(())
}

pub fn render_json<W: Write>(result: &SimilarityResult, out: &mut W) -> Result<()> {
    let report = JsonReport {
        reference: &result.reference,
        vocabulary_size: result.vocabulary_size,
        generated_at: time::OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Rfc3339)
            .unwrap_or_else(|_| "".into()),
        results: result
            .iter()
            .map(|e| JsonEntry { id: &e.id, score: e.score, percent: e.percent() })
            .collect(),
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use simcore::SimilarityEntry;

    fn sample() -> SimilarityResult {
        SimilarityResult {
            reference: "orig.txt".into(),
            vocabulary_size: 3,
            entries: vec![
                SimilarityEntry { id: "orig_0.8_add.txt".into(), score: 0.87654 },
                SimilarityEntry { id: "empty.txt".into(), score: 0.0 },
            ],
        }
    }

    #[test]
    fn text_lines() {
        let mut buf = Vec::new();
        render_text(&sample(), &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "orig_0.8_add.txt: 87.65%\nempty.txt: 0.00%\n");
    }

    #[test]
    fn json_object() {
        let mut buf = Vec::new();
        render_json(&sample(), &mut buf).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(json["reference"], "orig.txt");
        assert_eq!(json["results"][0]["id"], "orig_0.8_add.txt");
        assert_eq!(json["results"][1]["percent"], 0.0);
    }
}
