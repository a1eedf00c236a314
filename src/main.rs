use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use statsheet::data::export;
use statsheet::processing::binning::{self, FrequencyBin};
use statsheet::processing::statistics::SummaryStats;
use statsheet::sheet::{formulas, range};
use statsheet::state::session::{EmptyInputPolicy, Session};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum BinScheme {
    /// One bar per distinct value.
    Exact,
    /// Fixed-width buckets over the configured domain.
    Width,
}

/// Parse pasted numbers and show their descriptive statistics next to the
/// spreadsheet formulas that compute them.
#[derive(Debug, Parser)]
#[command(name = "statsheet", version)]
struct Args {
    /// File of newline-delimited numbers; stdin when omitted.
    input: Option<PathBuf>,

    /// Substitute the built-in sample dataset when the input parses empty.
    #[arg(long)]
    sample: bool,

    /// Also write the dataset as a CSV file.
    #[arg(long, value_name = "PATH")]
    export: Option<PathBuf>,

    /// Spreadsheet column holding the data.
    #[arg(long, default_value = "B")]
    column: char,

    /// Spreadsheet row of the first value.
    #[arg(long, default_value_t = 2)]
    start_row: u32,

    /// Frequency chart scheme.
    #[arg(long, value_enum, default_value_t = BinScheme::Exact)]
    bins: BinScheme,

    /// Bucket width for the fixed-width scheme.
    #[arg(long, default_value_t = 10)]
    bin_width: u32,

    /// Domain lower bound for the fixed-width scheme.
    #[arg(long, default_value_t = 0)]
    domain_start: i64,

    /// Domain upper bound for the fixed-width scheme.
    #[arg(long, default_value_t = 100)]
    domain_end: i64,

    /// Print the values in ascending order as well.
    #[arg(long)]
    sorted: bool,

    /// Emit the summary as JSON instead of tables.
    #[arg(long)]
    json: bool,

    /// Save the session to a JSON snapshot after parsing.
    #[arg(long, value_name = "PATH")]
    save_snapshot: Option<PathBuf>,

    /// Start from a saved session snapshot instead of parsing input.
    #[arg(long, value_name = "PATH")]
    load_snapshot: Option<PathBuf>,
}

fn main() -> Result<(), String> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let session = match &args.load_snapshot {
        Some(path) => Session::load_snapshot(path)?,
        None => {
            let policy = if args.sample {
                EmptyInputPolicy::SampleData
            } else {
                EmptyInputPolicy::LeaveEmpty
            };
            let mut session = Session::new(policy);
            session.replace_from_text(&read_input(args.input.as_deref())?);
            session
        }
    };

    if let Some(path) = &args.export {
        export::write_csv(&session.dataset, path)?;
    }
    if let Some(path) = &args.save_snapshot {
        session.save_snapshot(path)?;
    }

    let summary = match SummaryStats::compute(&session.dataset) {
        Some(summary) => summary,
        None => {
            println!("No data. Enter one number per line.");
            return Ok(());
        }
    };

    if args.json {
        let json = serde_json::to_string_pretty(&summary)
            .map_err(|e| format!("Failed to serialize summary: {e}"))?;
        println!("{json}");
        return Ok(());
    }

    println!("Data ({} values)", session.dataset.len());
    if args.sorted {
        let sorted: Vec<String> = session.dataset.sorted().iter().map(|v| format!("{v}")).collect();
        println!("Sorted: {}", sorted.join(", "));
    }

    println!("\nStatistics");
    for (name, value) in summary.table_rows() {
        println!("  {name:<22}{value}");
    }

    let cell_range = range::cell_range(args.column, args.start_row, session.dataset.len());
    println!("\nSpreadsheet formulas for {cell_range}");
    for entry in formulas::formula_reference(&cell_range) {
        println!("  {:<22}{:<32}{}", entry.name, entry.formula, entry.description);
    }

    let bins = match args.bins {
        BinScheme::Exact => binning::exact_value_bins(&session.dataset),
        BinScheme::Width => binning::fixed_width_bins(
            &session.dataset,
            args.domain_start,
            args.domain_end,
            args.bin_width,
        ),
    };
    println!("\nFrequency");
    print_chart(&bins);

    Ok(())
}

fn read_input(path: Option<&std::path::Path>) -> Result<String, String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).map_err(|e| format!("Cannot read input file: {e}"))
        }
        None => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .map_err(|e| format!("Cannot read stdin: {e}"))?;
            Ok(raw)
        }
    }
}

fn print_chart(bins: &[FrequencyBin]) {
    let width = bins.iter().map(|b| b.label.len()).max().unwrap_or(0);
    for bin in bins {
        println!("  {:>width$} | {}", bin.label, "#".repeat(bin.count));
    }
}
