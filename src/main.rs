// Command line front end: reads MRZ text from a file or stdin and prints the decoded record

use chrono::NaiveDate;
use clap::Parser;
use mrzread::{
    config::DEFAULT_SEARCH_LIMIT, processing::extract_mrz_lines, DecoderConfig, MrzDecoder,
    MrzRecord,
};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "mrzread")]
#[command(about = "Decode ICAO 9303 machine readable zones", long_about = None)]
struct Cli {
    /// File holding the MRZ lines (stdin when omitted)
    file: Option<PathBuf>,

    /// Disable OCR misread correction
    #[arg(long)]
    no_correction: bool,

    /// Date used to resolve two-digit years (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Maximum number of combinations tried by one correction search
    #[arg(long, default_value_t = DEFAULT_SEARCH_LIMIT)]
    search_limit: usize,

    /// Pick the MRZ lines out of noisy OCR text first
    #[arg(long)]
    scan: bool,

    /// Print the record as JSON
    #[arg(long)]
    json: bool,
}

// Function to print a human readable report
fn print_detailed_report(record: &MrzRecord) {
    println!("\n===============================================");
    println!("      MACHINE READABLE ZONE REPORT");
    println!("===============================================\n");

    println!("DOCUMENT:");
    println!("  Format: {:?}", record.format);
    println!("  Document Type: {}", record.document_type.identifier());
    println!(
        "  Document Subtype: {}",
        record
            .document_subtype
            .map_or("-".to_string(), |subtype| subtype.identifier().to_string())
    );
    println!("  Issuing Country: {}", record.issuing_country.identifier());
    println!("  Document Number: {}", record.document_number);
    println!(
        "  Date of Expiry: {}",
        record
            .expiry_date
            .map_or("-".to_string(), |date| date.to_string())
    );

    println!("\nHOLDER:");
    println!("  Surnames: {}", record.names.surnames);
    println!(
        "  Given Names: {}",
        record.names.given_names.as_deref().unwrap_or("-")
    );
    println!("  Nationality: {}", record.nationality_country_code);
    println!("  Date of Birth: {}", record.birthdate);
    println!("  Sex: {}", record.sex.identifier());

    if record.optional_data.is_some() || record.optional_data2.is_some() {
        println!("\nOPTIONAL DATA:");
        if let Some(optional_data) = &record.optional_data {
            println!("  1: {}", optional_data);
        }
        if let Some(optional_data) = &record.optional_data2 {
            println!("  2: {}", optional_data);
        }
    }

    println!("\nLookup key: {}", record.lookup_key);
}

fn read_input(file: Option<&PathBuf>) -> std::io::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::from(2)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let text = match read_input(cli.file.as_ref()) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("Error reading input: {}", err);
            return ExitCode::from(2);
        }
    };

    let mut config = DecoderConfig::default()
        .with_ocr_correction(!cli.no_correction)
        .with_search_limit(cli.search_limit);
    if let Some(today) = cli.today {
        config = config.with_current_date(today);
    }
    let decoder = MrzDecoder::new(config);

    let result = if cli.scan {
        decoder.decode(&extract_mrz_lines(&text))
    } else {
        decoder.decode_str(text.trim_start())
    };

    let record = match result {
        Ok(record) => record,
        Err(err) => {
            eprintln!("Error decoding MRZ: {}", err);
            return ExitCode::from(1);
        }
    };

    if cli.json {
        match serde_json::to_string_pretty(&record) {
            Ok(json) => println!("{}", json),
            Err(err) => {
                eprintln!("Error serializing record: {}", err);
                return ExitCode::from(2);
            }
        }
    } else {
        print_detailed_report(&record);
    }

    ExitCode::SUCCESS
}
