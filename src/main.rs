use std::error::Error;

use clap::Parser;
use localefind::{find, CollationOptions, CollatorSource, Sensitivity};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "localefind")]
#[command(version, about = "Locale-aware substring search")]
struct Cli {
    /// Text to search in
    haystack: String,

    /// Text to look for
    needle: String,

    /// BCP 47 locale tag (defaults to the root locale)
    locale: Option<String>,

    /// Comparison strength: base, accent, case or variant
    #[arg(default_value_t = Sensitivity::Variant)]
    sensitivity: Sensitivity,

    /// Disregard punctuation and whitespace
    #[arg(long)]
    ignore_punctuation: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let source = cli
        .locale
        .as_deref()
        .map_or(CollatorSource::DefaultLocale, CollatorSource::Locale);
    let options =
        CollationOptions::new(cli.sensitivity).with_ignore_punctuation(cli.ignore_punctuation);

    match find(&cli.haystack, &cli.needle, source, &options)? {
        Some(found) => {
            let (utf16_index, utf16_len) = found.utf16_span(&cli.haystack).unwrap_or_default();
            println!(
                "index {} len {} (utf-16 {}+{}): {:?}",
                found.index,
                found.len,
                utf16_index,
                utf16_len,
                found.as_str(&cli.haystack).unwrap_or_default()
            );
        }
        None => println!("no match"),
    }

    Ok(())
}
