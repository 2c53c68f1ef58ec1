// Interactive menu: pick languages once, then analyze files or directories
// until the user exits.
//
// Input comes from any BufRead so the loop can be driven by a script or a
// test as well as by a terminal. End of input behaves like "Exit".

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use crate::languages::{self, Language};
use crate::output::terminal;
use crate::pipeline::batch::{process_directory, process_word_file, TopicOutcome};
use crate::pipeline::topic::TopicPipeline;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AnalyzeFile,
    AnalyzeDirectory,
    ChangeLanguages,
    Exit,
}

pub fn parse_choice(input: &str) -> Option<MenuChoice> {
    match input.trim() {
        "1" => Some(MenuChoice::AnalyzeFile),
        "2" => Some(MenuChoice::AnalyzeDirectory),
        "3" => Some(MenuChoice::ChangeLanguages),
        "4" => Some(MenuChoice::Exit),
        _ => None,
    }
}

/// Strip whitespace and the quotes terminals add when pasting a path.
pub fn clean_path(input: &str) -> String {
    input
        .trim()
        .trim_matches('"')
        .trim_matches('\'')
        .to_string()
}

fn prompt<R: BufRead>(input: &mut R, message: &str) -> Result<Option<String>> {
    print!("{message}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Ask until the user enters a valid selection. Returns `None` at end of input.
pub fn prompt_languages<R: BufRead>(input: &mut R) -> Result<Option<Vec<Language>>> {
    terminal::display_languages();

    loop {
        println!(
            "\nPlease enter {}-{} languages you want to compare.",
            languages::MIN_SELECTION,
            languages::MAX_SELECTION
        );
        println!("Separate them with commas (e.g., English, Spanish, Polish)");
        println!("Type 'list' to see available languages again");

        let Some(line) = prompt(input, "\nYour selection: ")? else {
            return Ok(None);
        };

        if line.eq_ignore_ascii_case("list") {
            terminal::display_languages();
            continue;
        }

        match languages::select(&line) {
            Ok(selected) => {
                let names: Vec<String> = selected.iter().map(Language::display_name).collect();
                println!(
                    "\n{} {}",
                    "Selected languages:".green(),
                    names.join(", ")
                );
                return Ok(Some(selected));
            }
            Err(e) => println!("{} {e}", "Error:".red()),
        }
    }
}

fn display_menu() {
    println!("\n{}", "=".repeat(60));
    println!("{}", "File Selection".bold());
    println!("{}", "=".repeat(60));
    println!("\nOptions:");
    println!("1. Analyze a single file");
    println!("2. Analyze all files in a directory");
    println!("3. Change language selection");
    println!("4. Exit");
}

/// Run the menu loop until the user exits or input ends.
pub async fn run<R: BufRead>(input: &mut R, pipeline: &TopicPipeline<'_>) -> Result<()> {
    let Some(mut selected) = prompt_languages(input)? else {
        return Ok(());
    };

    loop {
        display_menu();
        let Some(line) = prompt(input, "\nEnter your choice (1-4): ")? else {
            break;
        };

        match parse_choice(&line) {
            Some(MenuChoice::AnalyzeFile) => {
                let Some(path) = prompt(input, "\nEnter the path to your word file (.txt): ")?
                else {
                    break;
                };
                match process_word_file(pipeline, Path::new(&clean_path(&path)), &selected).await
                {
                    TopicOutcome::Completed(report) => {
                        terminal::display_topic_report(&report);
                        println!("\n{}", "File processed successfully!".green());
                    }
                    TopicOutcome::Failed { .. } => {
                        println!("\n{}", "Failed to process file.".red());
                    }
                }
            }
            Some(MenuChoice::AnalyzeDirectory) => {
                let Some(path) =
                    prompt(input, "\nEnter the directory path containing .txt files: ")?
                else {
                    break;
                };
                match process_directory(pipeline, Path::new(&clean_path(&path)), &selected).await {
                    Ok(summary) => terminal::display_batch_summary(&summary),
                    Err(e) => println!("{} {e:#}", "Error:".red()),
                }
            }
            Some(MenuChoice::ChangeLanguages) => {
                println!("\nChanging language selection...");
                match prompt_languages(input)? {
                    Some(langs) => selected = langs,
                    None => break,
                }
            }
            Some(MenuChoice::Exit) => break,
            None => println!("\n{}", "Invalid choice. Please enter 1, 2, 3, or 4.".yellow()),
        }
    }

    println!("\nExiting. Goodbye!");
    Ok(())
}
