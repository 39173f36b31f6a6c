use std::collections::BTreeMap;
use std::path::Path;

use clap::Parser;

use cyberquiz::bank;
use cyberquiz::cli::Cli;
use cyberquiz::collector::Collector;
use cyberquiz::model::Bank;
use cyberquiz::tui;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();

    let bank = bank::load_bank(Path::new(&cli.bank))?;

    if cli.check {
        print_check(&bank, &cli.bank);
        return Ok(());
    }

    if cli.count == 0 {
        return Err("--count must be at least 1".to_string());
    }
    if cli.seconds == 0 {
        return Err("--seconds must be at least 1".to_string());
    }

    let questions = bank::select_questions(&bank.questions, cli.count);

    let collector = match &cli.collector {
        Some(url) => Some(Collector::new(url)?),
        None => None,
    };

    let title = bank
        .title
        .clone()
        .unwrap_or_else(|| "Cyber Awareness Quiz".to_string());

    tui::run_tui(title, questions, collector, cli.seconds)
}

fn print_check(bank: &Bank, path: &str) {
    let mut by_category: BTreeMap<&str, usize> = BTreeMap::new();
    for q in &bank.questions {
        *by_category.entry(q.category.as_str()).or_insert(0) += 1;
    }

    println!("Bank: {}", path);
    if let Some(ref title) = bank.title {
        println!("Title: {}", title);
    }
    println!("Questions: {}", bank.questions.len());
    for (category, count) in by_category {
        println!("  {}: {}", category, count);
    }
}
