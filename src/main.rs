use std::error::Error;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use word_grid_solver::cli::{parse_cli, resolve_dictionary_path, write_words};
use word_grid_solver::logging::init_logger;
use word_grid_solver::{load_dictionary_from_file, load_grid_from_file, search};

fn main() -> ExitCode {
    let cli = parse_cli();
    init_logger(cli.debug);

    if let Err(e) = try_main(&cli) {
        eprintln!("Error: {e}");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn try_main(cli: &word_grid_solver::cli::Cli) -> Result<(), Box<dyn Error>> {
    let grid = load_grid_from_file(&cli.grid_path).map_err(|e| {
        format!("failed to load grid from '{}': {e}", cli.grid_path.display())
    })?;
    log::info!("Loaded {}x{} grid", grid.rows(), grid.cols());

    let dictionary_path = resolve_dictionary_path(cli.dictionary_path.as_deref());
    let dictionary = load_dictionary_from_file(&dictionary_path).map_err(|e| {
        format!(
            "failed to load dictionary from '{}': {e}",
            dictionary_path.display()
        )
    })?;
    log::info!(
        "Loaded {} words from {}",
        dictionary.len(),
        dictionary_path.display()
    );

    let results = search(&grid, &dictionary, cli.max_length);
    let results: Box<dyn Iterator<Item = String> + '_> = match cli.limit {
        Some(limit) => Box::new(results.take(limit)),
        None => Box::new(results),
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let written = write_words(&mut out, results, cli.unique, cli.count)?;
    out.flush()?;

    log::info!("Found {written} words (max length {})", cli.max_length);
    Ok(())
}
