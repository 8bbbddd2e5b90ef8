use std::ops::Range;

/// Longest block shared by two strings. Offsets are in bytes; `start` and
/// `len` index into the second string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    #[cfg(test)]
    pub start_in_a: usize,
    pub start: usize,
    pub len: usize,
}

impl Span {
    pub fn range(&self) -> Range<usize> {
        self.start..self.start + self.len
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

fn same_char(x: char, y: char) -> bool {
    x == y || x.to_lowercase().eq(y.to_lowercase())
}

/// Find the longest case-insensitive substring common to `a` and `b`.
///
/// Ties go to the block starting earliest in `a`, then earliest in `b`.
/// Strings without any common character yield an empty span at 0.
pub fn longest_common_substring(a: &str, b: &str) -> Span {
    let a_chars: Vec<(usize, char)> = a.char_indices().collect();
    let b_chars: Vec<(usize, char)> = b.char_indices().collect();

    // run lengths of matching blocks ending at (i, j), one row at a time
    let mut prev = vec![0usize; b_chars.len() + 1];
    let mut cur = vec![0usize; b_chars.len() + 1];
    let mut best_len = 0usize;
    let mut best_end = (0usize, 0usize);

    for (i, &(_, ca)) in a_chars.iter().enumerate() {
        for (j, &(_, cb)) in b_chars.iter().enumerate() {
            cur[j + 1] = if same_char(ca, cb) { prev[j] + 1 } else { 0 };
            if cur[j + 1] > best_len {
                best_len = cur[j + 1];
                best_end = (i + 1, j + 1);
            }
        }
        std::mem::swap(&mut prev, &mut cur);
    }

    if best_len == 0 {
        return Span::default();
    }

    #[cfg(test)]
    let a_first = best_end.0 - best_len;
    let b_first = best_end.1 - best_len;
    let b_end = b_chars
        .get(best_end.1)
        .map(|&(offset, _)| offset)
        .unwrap_or(b.len());
    Span {
        #[cfg(test)]
        start_in_a: a_chars[a_first].0,
        start: b_chars[b_first].0,
        len: b_end - b_chars[b_first].0,
    }
}
