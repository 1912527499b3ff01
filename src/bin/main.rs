use features_core::FeatureEngine;
use std::io::{stdin, stdout, Write};

const DATASET_PATH: &str = "dataset.json";

fn main() {
    let mut engine = match FeatureEngine::from_file_or_new(DATASET_PATH) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("[ERROR] Could not load '{}': {}", DATASET_PATH, e);
            std::process::exit(1);
        }
    };

    println!("Intent feature extractor. Type 'exit' to save and quit.");
    println!("---------------------------------------------------------------");

    loop {
        print_ui(&engine);

        let mut input = String::new();
        stdin().read_line(&mut input).unwrap();
        let cmd = input.trim();

        match cmd {
            "exit" => break,
            "" => continue,
            s if s.starts_with("add ") => {
                // add <tag> <keyword> [keyword...]
                let mut parts = s.split_whitespace().skip(1);
                let Some(tag) = parts.next() else {
                    println!("usage: add <tag> <keyword> [keyword...]");
                    continue;
                };
                let keywords: Vec<String> = parts.map(str::to_string).collect();
                if keywords.is_empty() {
                    println!("usage: add <tag> <keyword> [keyword...]");
                    continue;
                }
                match engine.learn(tag, &keywords) {
                    Ok(()) => println!("\nLearned {} keyword(s) for '{}'", keywords.len(), tag),
                    Err(e) => eprintln!("[ERROR] Could not learn keywords: {}", e),
                }
            }
            text => {
                let tokens = engine.normalizer.normalize(text);
                let vector = engine.transform(text);
                println!("\nTokens: {:?}", tokens);
                println!("Vector: {:?}", vector);
            }
        }
    }

    println!("\nSaving dataset...");
    if let Err(e) = engine.save() {
        eprintln!("[ERROR] Could not save dataset: {}", e);
    } else {
        println!("Dataset saved to '{}'", DATASET_PATH);
    }
}

fn print_ui(engine: &FeatureEngine) {
    println!("---------------------------------------------------------------");
    println!(
        "Vocabulary: {} pattern(s) across {} tag(s)",
        engine.vocabulary.len(),
        engine.tags.len()
    );
    println!("Type text to vectorize, 'add <tag> <keywords...>' to learn,");
    println!("or 'exit' to save and quit.");
    print!("\n> ");
    stdout().flush().unwrap();
}
