use clap::{Args, Parser, Subcommand};
use log::error;
use ohlcv_sheet::{
    load_csv_file, load_sheet_with_custom_config, start_session, ChartView, DashboardSession,
    Error, SectorDirectory, SheetLoaderConfig, SymbolSelection, TabId, Table,
};
use std::fmt::Write;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ohlcv-sheet-cli")]
#[command(about = "Load OHLCV data from a published spreadsheet and chart one symbol", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the closing-price series of one symbol
    Show {
        #[command(flatten)]
        source: SourceArgs,

        /// Free-text symbol search (trimmed and uppercased)
        #[arg(short, long)]
        search: Option<String>,

        /// Symbol picked from the list, used verbatim
        #[arg(short, long)]
        pick: Option<String>,
    },

    /// List the distinct symbols of a sheet in first-seen order
    Symbols {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// List sectors, or the companies of one sector
    Sectors {
        /// Sector whose companies should be listed
        #[arg(long)]
        sector: Option<String>,

        /// `sector,symbol` CSV replacing the built-in directory
        #[arg(long)]
        directory: Option<PathBuf>,
    },
}

#[derive(Args)]
struct SourceArgs {
    /// Spreadsheet ID, as found in the sheet's URL
    #[arg(long, required_unless_present = "file", conflicts_with = "file")]
    sheet_id: Option<String>,

    /// Tab (GID) within the spreadsheet
    #[arg(long, default_value = "0")]
    tab_id: TabId,

    /// Local CSV export (`.csv` or `.csv.gz`) instead of a sheet
    #[arg(long)]
    file: Option<PathBuf>,

    /// Override the spreadsheet service base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,
}

impl SourceArgs {
    fn load(&self) -> Result<Table, Error> {
        if let Some(path) = &self.file {
            return load_csv_file(path);
        }

        let mut config = SheetLoaderConfig::default();
        if let Some(base_url) = &self.base_url {
            config = config.with_base_url(base_url.as_str());
        }
        if let Some(timeout_secs) = self.timeout_secs {
            config = config.with_timeout_secs(timeout_secs);
        }

        let sheet_id = self
            .sheet_id
            .as_deref()
            .ok_or_else(|| Error::Other("Either --sheet-id or --file is required".to_string()))?;

        load_sheet_with_custom_config(config, sheet_id, self.tab_id)
    }
}

fn main() {
    // Initialize the logger
    #[cfg(feature = "logger-support")]
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Error> {
    let output = match cli.command {
        Commands::Show {
            source,
            search,
            pick,
        } => {
            let session = start_session(&source.load()?)?;
            let selection = SymbolSelection {
                search_submitted: search.is_some(),
                search_text: search,
                dropdown_choice: pick,
            };

            format_chart_view(&session, &session.chart_view(&selection))
        }
        Commands::Symbols { source } => {
            let session = start_session(&source.load()?)?;
            format_lines(session.symbols())
        }
        Commands::Sectors { sector, directory } => {
            let directory = match directory {
                Some(path) => SectorDirectory::from_csv_str(&fs::read_to_string(path)?)?,
                None => SectorDirectory::default(),
            };

            format_sectors(&directory, sector.as_deref())?
        }
    };

    print!("{}", output);

    Ok(())
}

fn format_lines<T: std::fmt::Display>(values: &[T]) -> String {
    values.iter().map(|value| format!("{}\n", value)).collect()
}

/// Lists every sector, or the companies of `sector` when one is given.
fn format_sectors(directory: &SectorDirectory, sector: Option<&str>) -> Result<String, Error> {
    match sector {
        Some(sector) => directory
            .companies(sector)
            .map(format_lines)
            .ok_or_else(|| Error::Other(format!("Unknown sector: {}", sector))),
        None => Ok(format_lines(&directory.sectors())),
    }
}

fn format_chart_view(session: &DashboardSession, chart_view: &ChartView) -> String {
    let mut output = String::new();

    // Writing to a `String` cannot fail
    let _ = match session.fetched_at() {
        Some(fetched_at) => writeln!(
            output,
            "Data fetched at: {}",
            fetched_at.format("%Y-%m-%d %H:%M:%S UTC")
        ),
        None => writeln!(output, "Data source: local file"),
    };

    match chart_view {
        ChartView::AwaitingSelection => {
            let _ = writeln!(output, "Please choose a symbol.");
        }
        ChartView::NoDataForSymbol(symbol) => {
            let _ = writeln!(output, "No data for symbol {}.", symbol);
        }
        ChartView::Series(series) => {
            let _ = match series.latest_data_point() {
                Some(date) => writeln!(output, "Latest data point: {}", date),
                None => writeln!(output, "Latest data point: unknown"),
            };

            let _ = writeln!(output, "date,close");
            for (date, close) in series.points() {
                let _ = writeln!(
                    output,
                    "{},{}",
                    date.map(|d| d.to_string()).unwrap_or_default(),
                    close.map(|c| c.to_string()).unwrap_or_default()
                );
            }
        }
    }

    output
}
