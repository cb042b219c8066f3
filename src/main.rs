use seeded_wordle::cli::{CliInterface, parse_cli};
use seeded_wordle::game_state::{GameConfig, game_loop};
use seeded_wordle::logging::{default_log_path, init_logging};
use seeded_wordle::tui::TuiInterface;
use seeded_wordle::validator::{WordCache, WordValidator, default_cache_path};
use seeded_wordle::wordbank::{WordBank, load_wordbank_from_file, load_wordbank_from_str, EMBEDDED_CORPUS};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = parse_cli();

    if let Some(path) = cli.log_file.clone().or_else(default_log_path) {
        init_logging(&path);
    }

    let corpus = match &cli.wordbank_path {
        Some(path) => match load_wordbank_from_file(path) {
            Ok(words) => words,
            Err(e) => {
                eprintln!("Failed to load word bank from '{path}': {e}");
                return ExitCode::FAILURE;
            }
        },
        None => load_wordbank_from_str(EMBEDDED_CORPUS),
    };

    let mut validator = WordValidator::embedded();
    validator.extend(corpus.iter().cloned());
    if let Some(path) = cli.extra_words.clone().or_else(default_cache_path) {
        let cache = WordCache::load(&path);
        if !cache.is_empty() {
            validator = validator.with_dictionary(Box::new(cache));
        }
    }

    let bank = match WordBank::new(corpus) {
        Ok(bank) => bank,
        Err(e) => {
            log::error!("{e}");
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    log::info!("Loaded {} target words", bank.len());

    let config = match GameConfig::new(cli.max_guesses) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e}");
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    if cli.plain {
        let stdin = io::stdin();
        let mut interface = CliInterface::new(stdin.lock());
        game_loop(&bank, &validator, config, cli.seed, &mut interface);
        return ExitCode::SUCCESS;
    }

    match TuiInterface::new() {
        Ok(mut interface) => {
            game_loop(&bank, &validator, config, cli.seed, &mut interface);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Failed to start the terminal UI: {e}");
            eprintln!("Failed to start the terminal UI ({e}), try --plain");
            ExitCode::FAILURE
        }
    }
}
