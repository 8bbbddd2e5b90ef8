use colored::Colorize;

use crate::categorizer::resolve;
use crate::error::Result;
use crate::fmt;
use crate::models::Transaction;
use crate::reviewer::Decision;
use crate::store::CategoryStore;
use crate::terminal::{CategoryCompleter, Console};

/// Walks the user through one transaction at a time.
pub struct Reviewer<C: Console> {
    console: C,
    audit: bool,
}

impl<C: Console> Reviewer<C> {
    pub fn new(console: C, audit: bool) -> Self {
        Self { console, audit }
    }

    #[cfg(test)]
    pub fn console(&self) -> &C {
        &self.console
    }

    #[cfg(test)]
    pub fn into_console(self) -> C {
        self.console
    }

    /// Show the transaction with its suggested category and collect the final
    /// category and match.
    ///
    /// Outside audit mode a known suggestion is accepted without asking.
    pub fn review(&mut self, store: &CategoryStore, txn: &Transaction) -> Result<Decision> {
        let (prev_cat, prev_match) = resolve(store, &txn.payee);

        let amount = match &txn.amount {
            Some(a) => fmt::amount(&a.text, a.value),
            None => fmt::none(),
        };
        self.console.print_line(&format!("Amount..: {amount}"))?;
        let payee = match prev_match {
            Some(keyword) => fmt::highlight(keyword, &txn.payee, false),
            None => txn.payee.clone(),
        };
        self.console.print_line(&format!("Payee...: {payee}"))?;
        self.console
            .print_line(&format!("Category: {}", fmt::or_none(prev_cat)))?;

        let edit = self.audit && self.console.confirm("Edit this transaction?")?;

        let mut category = prev_cat.map(str::to_string);
        if prev_cat.is_none() || edit {
            category = self.pick_category(prev_cat, store)?;
            self.console.overwrite_line(&format!(
                "Category: {}",
                fmt::or_none(category.as_deref())
            ))?;
        }

        let mut matched = prev_match.map(str::to_string);
        if prev_match.is_none() || (edit && category.is_some()) {
            matched = self.pick_match(prev_match, &txn.payee)?;
        }

        Ok(Decision {
            previous_category: prev_cat.map(str::to_string),
            previous_match: prev_match.map(str::to_string),
            chosen_category: category,
            chosen_match: matched,
        })
    }

    /// Prompt for a category with completion over the known ones. Clearing an
    /// existing category needs confirmation.
    fn pick_category(
        &mut self,
        previous: Option<&str>,
        store: &CategoryStore,
    ) -> Result<Option<String>> {
        let completer = CategoryCompleter::new(store.names());
        let category = self.console.input("Category", None, Some(&completer))?;
        let category = category.trim();
        if !category.is_empty() {
            return Ok(Some(category.to_string()));
        }
        if let Some(previous) = previous {
            if !self.console.confirm("Remove existing category?")? {
                return Ok(Some(previous.to_string()));
            }
        }
        Ok(None)
    }

    /// Prompt until the entered match occurs verbatim in the payee. An empty
    /// match is accepted and means no keyword.
    ///
    /// Feedback stays on a single line: each rejection replaces the previous
    /// one, and the final confirmation replaces the last rejection.
    fn pick_match(&mut self, previous: Option<&str>, payee: &str) -> Result<Option<String>> {
        let mut rejected = false;
        loop {
            let entered = self.console.input("Match", previous, None)?;
            let accepted = payee.contains(entered.as_str());
            let feedback = if accepted {
                let shown = if entered.is_empty() {
                    fmt::none()
                } else {
                    entered.clone()
                };
                format!("{} Match: {shown}", "\u{2714}".green())
            } else {
                format!(
                    "{} Match rejected...: {}",
                    "\u{2716}".red(),
                    fmt::highlight(payee, &entered, true)
                )
            };
            if rejected {
                self.console.overwrite_line(&feedback)?;
            } else {
                self.console.print_line(&feedback)?;
            }
            if accepted {
                return Ok(Some(entered).filter(|m| !m.is_empty()));
            }
            rejected = true;
        }
    }

    /// Replace the last feedback line with the final category (audit mode).
    pub fn summarize(&mut self, category: Option<&str>) -> Result<()> {
        if self.audit {
            self.console
                .overwrite_line(&format!("Category: {}", fmt::or_none(category)))?;
        }
        Ok(())
    }

    pub fn separator(&mut self) -> Result<()> {
        self.console.print_line("---")
    }
}
