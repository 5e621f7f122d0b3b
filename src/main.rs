use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use triedict::{bulk, Trie};

/// Dictionaries live in this directory, one binary file each.
const DICTIONARY_DIR: &str = "dictionaries";

enum Command {
    Add(String, String),
    Search(String),
    Delete(String),
    Count,
    Prefix(String, usize),
    Import(String),
    DeleteFile(String),
    Export(String),
    Exit { save: bool },
}

fn main() {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let mut trie = setup_trie(&mut input);

    loop {
        print_menu();
        let line = match read_line(&mut input) {
            Some(line) => line,
            None => break, // EOF: exit without saving
        };
        let command = match parse_command(&line) {
            Some(command) => command,
            None => {
                println!("Wrong input given\n");
                continue;
            }
        };

        match command {
            Command::Add(word, translation) => add(&mut trie, &word, &translation),
            Command::Search(word) => search(&trie, &word),
            Command::Delete(word) => delete(&mut trie, &word),
            Command::Count => println!("Totally {} entries in Trie\n", trie.get_entry_count()),
            Command::Prefix(prefix, limit) => prefix_query(&trie, &prefix, limit),
            Command::Import(file) => match bulk::import_pairs(&mut trie, &file) {
                Ok(report) => println!(
                    "Imported {} pairs from {} ({} lines skipped)\n",
                    report.applied, file, report.skipped
                ),
                Err(e) => println!("{e}\n"),
            },
            Command::DeleteFile(file) => match bulk::delete_pairs(&mut trie, &file) {
                Ok(report) => println!(
                    "Deleted {} words listed in {} ({} lines skipped)\n",
                    report.applied, file, report.skipped
                ),
                Err(e) => println!("{e}\n"),
            },
            Command::Export(file) => match bulk::export_pairs(&trie, &file) {
                Ok(written) => println!("Exported {written} pairs to {file}\n"),
                Err(e) => println!("{e}\n"),
            },
            Command::Exit { save } => {
                if save {
                    match trie.save_changes() {
                        Ok(()) => println!("Changes saved"),
                        Err(e) => {
                            eprintln!("ERROR: failed to save changes: {e}");
                            process::exit(1);
                        }
                    }
                }
                break;
            }
        }
    }
}

fn setup_trie(input: &mut impl BufRead) -> Trie<u8> {
    loop {
        let path = pick_dictionary(input);
        println!("\nBringing data in memory...");
        match Trie::open(&path) {
            Ok(trie) => {
                println!("Trie set up successfully: {} entries\n", trie.get_entry_count());
                return trie;
            }
            Err(e) => println!("{e}\n"),
        }
    }
}

fn pick_dictionary(input: &mut impl BufRead) -> PathBuf {
    if let Err(e) = fs::create_dir_all(DICTIONARY_DIR) {
        eprintln!("ERROR: cannot prepare {DICTIONARY_DIR}/: {e}");
        process::exit(1);
    }

    println!("Welcome, these are the available dictionaries:\n");
    match fs::read_dir(DICTIONARY_DIR) {
        Ok(entries) => {
            for entry in entries.flatten() {
                println!("{}", entry.file_name().to_string_lossy());
            }
        }
        Err(e) => {
            eprintln!("ERROR: cannot read {DICTIONARY_DIR}/: {e}");
            process::exit(1);
        }
    }

    loop {
        print!("\nPlease give a dictionary name to work with: ");
        let _ = io::stdout().flush();
        let name = match read_line(input) {
            Some(name) => name,
            None => process::exit(0),
        };
        let name = name.trim();
        if !name.is_empty() {
            return PathBuf::from(DICTIONARY_DIR).join(name);
        }
    }
}

fn add(trie: &mut Trie<u8>, word: &str, translation: &str) {
    let terminator = trie.terminator();
    let encoded = bulk::encode_text(word, terminator).zip(bulk::encode_text(translation, terminator));
    let Some((word_symbols, translation_symbols)) = encoded else {
        println!("Input does not fit the 1-byte alphabet\n");
        return;
    };
    match trie.add_word(&word_symbols, &translation_symbols) {
        Ok(()) => println!("Added word {word} with translation {translation} successfully in Trie\n"),
        Err(e) => println!("{e}\n"),
    }
}

fn search(trie: &Trie<u8>, word: &str) {
    let Some(word_symbols) = bulk::encode_text(word, trie.terminator()) else {
        println!("Input does not fit the 1-byte alphabet\n");
        return;
    };
    match trie.search_word(&word_symbols) {
        Some(translation) => println!("{word} -> {}\n", bulk::decode_text(translation)),
        None => println!("{word} doesn't exist in this dictionary\n"),
    }
}

fn delete(trie: &mut Trie<u8>, word: &str) {
    let Some(word_symbols) = bulk::encode_text(word, trie.terminator()) else {
        println!("Input does not fit the 1-byte alphabet\n");
        return;
    };
    match trie.delete_word(&word_symbols) {
        Some(translation) => println!(
            "Deleted word {word} with translation {} successfully from Trie\n",
            bulk::decode_text(&translation)
        ),
        None => println!("{word} doesn't exist in this dictionary\n"),
    }
}

fn prefix_query(trie: &Trie<u8>, prefix: &str, limit: usize) {
    let Some(prefix_symbols) = bulk::encode_text(prefix, trie.terminator()) else {
        println!("Input does not fit the 1-byte alphabet\n");
        return;
    };
    let words = trie.get_prefix_words(&prefix_symbols, limit);
    if words.is_empty() {
        println!("No stored words start with {prefix}\n");
        return;
    }
    for word in &words {
        println!("{}", bulk::decode_text(word));
    }
    println!();
}

fn print_menu() {
    println!("Main menu:");
    println!("\\a w -> t   ||| add word w with translation t in the dictionary");
    println!("\\s w        ||| search for the translation of word w");
    println!("\\d w        ||| delete word w and its translation");
    println!("\\c          ||| get total number of saved translations in Trie");
    println!("\\p w n      ||| list up to n stored words starting with w");
    println!("\\i filename ||| import csv file of format (word,translation)");
    println!("\\z filename ||| delete words listed in a csv file - translations are ignored");
    println!("\\x filename ||| export all entries to a csv file");
    println!("\\e 1        ||| exit and save changes");
    println!("\\e 0        ||| exit without saving changes");
}

fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    let (keyword, rest) = match line.split_once(' ') {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (line, ""),
    };

    match keyword {
        "\\a" => {
            let (word, translation) = rest.split_once(" -> ")?;
            let (word, translation) = (word.trim(), translation.trim());
            if word.is_empty() || translation.is_empty() {
                return None;
            }
            Some(Command::Add(word.to_string(), translation.to_string()))
        }
        "\\s" if !rest.is_empty() => Some(Command::Search(rest.to_string())),
        "\\d" if !rest.is_empty() => Some(Command::Delete(rest.to_string())),
        "\\c" if rest.is_empty() => Some(Command::Count),
        "\\p" => {
            let (prefix, limit) = rest.rsplit_once(' ')?;
            let (prefix, limit) = (prefix.trim(), limit.parse().ok()?);
            if prefix.is_empty() {
                return None;
            }
            Some(Command::Prefix(prefix.to_string(), limit))
        }
        "\\i" if !rest.is_empty() => Some(Command::Import(rest.to_string())),
        "\\z" if !rest.is_empty() => Some(Command::DeleteFile(rest.to_string())),
        "\\x" if !rest.is_empty() => Some(Command::Export(rest.to_string())),
        "\\e" => match rest {
            "1" => Some(Command::Exit { save: true }),
            "0" => Some(Command::Exit { save: false }),
            _ => None,
        },
        _ => None,
    }
}

fn read_line(input: &mut impl BufRead) -> Option<String> {
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
        Err(e) => {
            eprintln!("ERROR: failed to read input: {e}");
            process::exit(1);
        }
    }
}
