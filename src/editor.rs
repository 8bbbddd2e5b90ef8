use std::collections::BTreeMap;

use crate::cli::review::Reviewer;
use crate::error::{QifcatError, Result};
use crate::models::{Amount, Transaction};
use crate::qif::{self, LineKind, Record};
use crate::reviewer::apply_decision;
use crate::store::CategoryStore;
use crate::terminal::Console;

/// Rewritten file plus what happened during the session.
#[derive(Debug, Default)]
pub struct Outcome {
    pub output: String,
    pub transactions: usize,
    pub uncategorized: usize,
    /// Transactions per assigned category.
    pub by_category: BTreeMap<String, usize>,
}

impl Outcome {
    pub fn categorized(&self) -> usize {
        self.transactions - self.uncategorized
    }

    fn count(&mut self, category: Option<&str>) {
        self.transactions += 1;
        match category {
            Some(category) => *self.by_category.entry(category.to_string()).or_default() += 1,
            None => self.uncategorized += 1,
        }
    }
}

/// Review every transaction in `records`, learning into `store`, and
/// regenerate each transaction's `L` line.
///
/// Existing `L` lines are always dropped. Amounts are only parsed once a payee
/// line needs them, so `T` lines of account headers pass through as text.
pub fn categorize<C: Console>(
    records: &[Record],
    store: &mut CategoryStore,
    reviewer: &mut Reviewer<C>,
) -> Result<Outcome> {
    let mut outcome = Outcome::default();
    for record in records {
        rewrite_record(record, store, reviewer, &mut outcome)?;
    }
    Ok(outcome)
}

fn amount_at(line: usize, text: &str) -> Result<Amount> {
    let value = qif::parse_amount(text).ok_or_else(|| QifcatError::InvalidAmount {
        line,
        value: text.to_string(),
    })?;
    Ok(Amount {
        text: text.to_string(),
        value,
    })
}

fn rewrite_record<C: Console>(
    record: &Record,
    store: &mut CategoryStore,
    reviewer: &mut Reviewer<C>,
    outcome: &mut Outcome,
) -> Result<()> {
    let mut amount: Option<(usize, &str)> = None;
    let mut reviewed: Option<Option<String>> = None;

    for line in &record.lines {
        match &line.kind {
            LineKind::Amount(text) => {
                amount = Some((line.number, text.as_str()));
                outcome.output.push_str(&line.text);
            }
            LineKind::Payee(payee) => {
                let amount = amount
                    .map(|(number, text)| amount_at(number, text))
                    .transpose()?;
                outcome.output.push_str(&line.text);
                let terminator = match line.terminator() {
                    "" => {
                        outcome.output.push('\n');
                        "\n"
                    }
                    terminator => terminator,
                };
                let txn = Transaction {
                    amount,
                    payee: payee.clone(),
                };
                let decision = reviewer.review(store, &txn)?;
                apply_decision(store, &decision);
                let category = decision.chosen_category;
                outcome.count(category.as_deref());
                outcome.output.push('L');
                outcome.output.push_str(category.as_deref().unwrap_or_default());
                outcome.output.push_str(terminator);
                reviewed = Some(category);
            }
            LineKind::Category(_) => {}
            LineKind::End => {
                outcome.output.push_str(&line.text);
                if let Some(category) = &reviewed {
                    reviewer.summarize(category.as_deref())?;
                }
                reviewer.separator()?;
            }
            LineKind::Other => outcome.output.push_str(&line.text),
        }
    }
    Ok(())
}
