//! Line-level view of a QIF file.
//!
//! Only the fields needed for categorization are recognized; every other line
//! is carried through untouched.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// `T` line with the trimmed amount text.
    Amount(String),
    /// `P` line with the trimmed payee. Bare `P` lines are `Other`.
    Payee(String),
    /// `L` line with the trimmed category.
    Category(String),
    /// `^` record terminator.
    End,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// 1-based position in the file.
    pub number: usize,
    /// Raw text including the line terminator, if any.
    pub text: String,
    pub kind: LineKind,
}

impl Line {
    pub fn new(number: usize, text: &str) -> Self {
        Self {
            number,
            text: text.to_string(),
            kind: classify(text),
        }
    }

    /// `"\r\n"`, `"\n"` or `""` for an unterminated last line.
    pub fn terminator(&self) -> &str {
        if self.text.ends_with("\r\n") {
            "\r\n"
        } else if self.text.ends_with('\n') {
            "\n"
        } else {
            ""
        }
    }
}

pub fn classify(line: &str) -> LineKind {
    let mut chars = line.chars();
    let Some(marker) = chars.next() else {
        return LineKind::Other;
    };
    let rest = chars.as_str().trim();
    match marker {
        'T' => LineKind::Amount(rest.to_string()),
        'P' if !rest.is_empty() => LineKind::Payee(rest.to_string()),
        'L' => LineKind::Category(rest.to_string()),
        '^' => LineKind::End,
        _ => LineKind::Other,
    }
}

/// Lines up to and including a `^` terminator. The last record of a file may
/// be unterminated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    pub lines: Vec<Line>,
}

#[cfg(test)]
impl Record {
    pub fn is_terminated(&self) -> bool {
        self.lines
            .last()
            .is_some_and(|line| line.kind == LineKind::End)
    }

    pub fn payee(&self) -> Option<&str> {
        self.lines.iter().find_map(|line| match &line.kind {
            LineKind::Payee(payee) => Some(payee.as_str()),
            _ => None,
        })
    }

    pub fn category(&self) -> Option<&str> {
        self.lines.iter().find_map(|line| match &line.kind {
            LineKind::Category(category) => Some(category.as_str()),
            _ => None,
        })
    }
}

pub fn parse(content: &str) -> Vec<Record> {
    let mut records = Vec::new();
    let mut current = Record::default();
    for (idx, text) in content.split_inclusive('\n').enumerate() {
        let line = Line::new(idx + 1, text);
        let end = line.kind == LineKind::End;
        current.lines.push(line);
        if end {
            records.push(std::mem::take(&mut current));
        }
    }
    if !current.lines.is_empty() {
        records.push(current);
    }
    log::info!("Parsed {} QIF records", records.len());
    records
}

#[cfg(test)]
pub fn render(records: &[Record]) -> String {
    records
        .iter()
        .flat_map(|record| record.lines.iter())
        .map(|line| line.text.as_str())
        .collect()
}

/// Parse a QIF amount, ignoring thousands separators.
pub fn parse_amount(raw: &str) -> Option<f64> {
    raw.replace(',', "").trim().parse().ok()
}
