use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::cli::review::Reviewer;
use crate::editor::{self, Outcome};
use crate::error::{QifcatError, Result};
use crate::qif;
use crate::settings::Settings;
use crate::store::CategoryStore;
use crate::terminal::DialoguerConsole;

pub fn run(settings: &Settings) -> Result<()> {
    let mut store = CategoryStore::load(&settings.store_path)?;
    let content =
        std::fs::read_to_string(&settings.source).map_err(|source| QifcatError::Source {
            path: settings.source.clone(),
            source,
        })?;
    let records = qif::parse(&content);

    let mut reviewer = Reviewer::new(DialoguerConsole::new(), settings.audit);
    let outcome = editor::categorize(&records, &mut store, &mut reviewer)?;

    std::fs::write(&settings.destination, &outcome.output)?;
    store.save(&settings.store_path)?;

    print_summary(settings, &store, &outcome);
    Ok(())
}

fn print_summary(settings: &Settings, store: &CategoryStore, outcome: &Outcome) {
    if outcome.transactions == 0 {
        println!("{}", "No transactions found.".yellow());
        return;
    }
    println!(
        "{}",
        format!(
            "Categorized {} of {} transactions",
            outcome.categorized(),
            outcome.transactions
        )
        .green()
    );
    if !outcome.by_category.is_empty() {
        let mut table = Table::new();
        table.set_header(vec!["Category", "Transactions", "Keywords"]);
        for (category, count) in &outcome.by_category {
            let keywords = store.keywords(category).map(<[String]>::len).unwrap_or(0);
            table.add_row(vec![Cell::new(category), Cell::new(count), Cell::new(keywords)]);
        }
        println!("{table}");
    }
    println!("Wrote {}", settings.destination.display());
    println!(
        "{} categories learned in {}",
        store.len(),
        settings.store_path.display()
    );
}
