use lmstats::io_helper::{open_reader, ProfileLines};
use lmstats::{CollectionTermStatistics, Error, StatsConfig};
use std::env;
use std::io;
use std::path::Path;
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

use io::Write;

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let input = match env::args().nth(1) {
        Some(input) => input,
        None => {
            eprintln!("usage: lmstats <profiles.jsonl[.gz]> [config.json]");
            process::exit(2);
        }
    };
    let config = match env::args().nth(2) {
        Some(path) => StatsConfig::load(Path::new(&path))?,
        None => StatsConfig::default(),
    };

    let mut stats = CollectionTermStatistics::with_config(config);
    for profile in ProfileLines::new(open_reader(Path::new(&input))?) {
        let profile = profile.map_err(|e| e.with_context(input.clone()))?;
        stats.add_document(&profile)?;
    }
    info!(
        documents = stats.num_documents(),
        terms = stats.vocabulary_size(),
        "loaded {}",
        input
    );

    println!("documents: {}", stats.num_documents());
    println!("collection_length: {}", stats.collection_length());
    println!("vocabulary: {}", stats.vocabulary_size());
    match stats.average_document_length() {
        Ok(avg) => println!("average_length: {:.3}", avg),
        Err(Error::EmptyCollection) => println!("average_length: n/a (no documents)"),
        Err(e) => return Err(e),
    }

    loop {
        let mut line = String::new();
        print!("term> ");
        io::stdout().flush()?;
        let n = io::stdin().read_line(&mut line)?;
        if n == 0 {
            break;
        }
        let term = line.trim();
        if term.is_empty() {
            continue;
        }
        if stats.get(term).is_none() {
            println!("Not Found");
            continue;
        }
        let counts = stats.count_stats(term);
        println!(
            "df={} cf={} p(t|C)={:.6}",
            counts.document_frequency,
            counts.collection_frequency,
            counts.collection_probability()
        );
        let problems = counts.check();
        if !problems.is_empty() {
            println!("warning: {:?}", problems);
        }
    }

    Ok(())
}
