use clap::{Parser, Subcommand};

use singlish_cli::commands::{accuracy, config_ops, snapshot, translate_ops};

#[derive(Parser)]
#[command(name = "singlishtool", about = "Singlish transliteration diagnostics")]
struct Cli {
    /// Write JSON trace events to this directory (needs the `trace` feature)
    #[arg(long, global = true)]
    trace_dir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transliterate TEXT (or stdin when omitted)
    Translate {
        /// Text to transliterate
        text: Option<String>,
        /// Directory with custom mapping/overrides/lexicon/settings TOML
        #[arg(long)]
        tables: Option<String>,
        /// Print the full result with span map as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show how each span was routed and how words were segmented
    Explain {
        /// Text to explain
        text: String,
        /// Directory with custom tables
        #[arg(long)]
        tables: Option<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Run transliteration accuracy tests from a structured TOML corpus
    Accuracy {
        /// Path to the accuracy corpus TOML file
        corpus_file: String,
        /// Directory with custom tables
        #[arg(long)]
        tables: Option<String>,
        /// Filter by tag (only run cases with this tag)
        #[arg(long)]
        tag: Option<String>,
        /// Filter by category (only run cases in this category)
        #[arg(long)]
        category: Option<String>,
        /// Show passing cases too (default: only failures and skips)
        #[arg(long)]
        verbose: bool,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Transliterate inputs from a file (one per line) and record them to JSONL
    Snapshot {
        /// Path to the input file
        input_file: String,
        /// Path to the output JSONL file
        output_file: String,
        /// Directory with custom tables
        #[arg(long)]
        tables: Option<String>,
    },
    /// Compare current output against a saved snapshot
    DiffSnapshot {
        /// Path to the input file
        input_file: String,
        /// Path to the baseline JSONL snapshot file
        baseline_file: String,
        /// Directory with custom tables
        #[arg(long)]
        tables: Option<String>,
    },
    /// Print the default phoneme mapping TOML
    MappingExport,
    /// Validate a phoneme mapping TOML file
    MappingValidate {
        /// TOML file to validate
        file: String,
    },
    /// Print the default override table TOML
    OverridesExport,
    /// Validate an override table TOML file
    OverridesValidate {
        /// TOML file to validate
        file: String,
    },
    /// Print the default foreign lexicon TOML
    LexiconExport,
    /// Validate a foreign lexicon TOML file
    LexiconValidate {
        /// TOML file to validate
        file: String,
    },
    /// Print the default settings TOML
    SettingsExport,
    /// Validate a settings TOML file
    SettingsValidate {
        /// TOML file to validate
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let _trace = cli.trace_dir.as_deref().map(|dir| {
        singlish_engine::init_tracing(std::path::Path::new(dir)).unwrap_or_else(|e| {
            eprintln!("Failed to start tracing in {dir}: {e}");
            std::process::exit(1);
        })
    });

    match cli.command {
        Command::Translate { text, tables, json } => {
            translate_ops::translate_cmd(text.as_deref(), tables.as_deref(), json);
        }
        Command::Explain { text, tables, json } => {
            translate_ops::explain_cmd(&text, tables.as_deref(), json);
        }
        Command::Accuracy {
            corpus_file,
            tables,
            tag,
            category,
            verbose,
            json,
        } => accuracy::accuracy_cmd(
            &corpus_file,
            tables.as_deref(),
            tag.as_deref(),
            category.as_deref(),
            verbose,
            json,
        ),
        Command::Snapshot {
            input_file,
            output_file,
            tables,
        } => snapshot::snapshot_cmd(&input_file, &output_file, tables.as_deref()),
        Command::DiffSnapshot {
            input_file,
            baseline_file,
            tables,
        } => snapshot::diff_snapshot_cmd(&input_file, &baseline_file, tables.as_deref()),
        Command::MappingExport => config_ops::mapping_export(),
        Command::MappingValidate { file } => config_ops::mapping_validate(&file),
        Command::OverridesExport => config_ops::overrides_export(),
        Command::OverridesValidate { file } => config_ops::overrides_validate(&file),
        Command::LexiconExport => config_ops::lexicon_export(),
        Command::LexiconValidate { file } => config_ops::lexicon_validate(&file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
