use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use lipi_cli::commands::accuracy_ops::{self, CaseFilter};
use lipi_cli::commands::{config_ops, convert_ops, lang_ops, load_settings, open_transliterator};

#[derive(Parser)]
#[command(name = "lipitool", about = "Lipi transliteration tool")]
struct Cli {
    /// Settings TOML (defaults to the embedded settings)
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Directory of extra `<code>.toml` tables, loaded after the settings'
    /// `tables.override_dir`
    #[arg(long, global = true)]
    tables: Option<String>,
    /// Log engine decisions to stderr (RUST_LOG overrides the level)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transliterate words (read from stdin when none are given)
    Convert {
        /// Target language code (defaults to engine.default_language)
        #[arg(short, long)]
        lang: Option<String>,
        /// Emit one JSON object per word
        #[arg(long)]
        json: bool,
        words: Vec<String>,
    },

    /// Transliterate a word list file to JSONL
    Batch {
        /// Target language code (defaults to engine.default_language)
        #[arg(short, long)]
        lang: Option<String>,
        /// Input file (one word per line, `#` comments allowed)
        input_file: String,
        /// Output JSONL file
        output_file: String,
    },

    /// Run transliteration accuracy tests from a TOML corpus
    Accuracy {
        /// Path to the accuracy corpus TOML file
        corpus_file: String,
        /// Only run cases with this tag
        #[arg(long)]
        tag: Option<String>,
        /// Only run cases for this language
        #[arg(long)]
        lang: Option<String>,
        /// Show passing cases too (default: only failures and skips)
        #[arg(long)]
        show_pass: bool,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List registered languages
    Langs,

    /// Symbol table utilities
    Table {
        #[command(subcommand)]
        action: TableAction,
    },

    /// Settings utilities
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand)]
enum TableAction {
    /// Print a built-in table as TOML
    Export { lang: String },
    /// Parse and validate a table file
    Validate { file: String },
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Print the embedded default settings
    Export,
    /// Parse and validate a settings file
    Validate { file: String },
}

fn init_logging(verbose: bool) {
    if !verbose {
        return;
    }
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("lipi_core=debug,lipi_cli=debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Table { action } => match action {
            TableAction::Export { lang } => config_ops::table_export(&lang),
            TableAction::Validate { file } => config_ops::table_validate(&file),
        },
        Command::Settings { action } => match action {
            SettingsAction::Export => config_ops::settings_export(),
            SettingsAction::Validate { file } => config_ops::settings_validate(&file),
        },
        command => {
            let settings = load_settings(cli.settings.as_deref());
            let t = open_transliterator(&settings, cli.tables.as_deref());
            let default_lang = settings.engine.default_language.as_str();

            match command {
                Command::Convert { lang, json, words } => {
                    let lang = lang.as_deref().unwrap_or(default_lang);
                    convert_ops::convert_cmd(&t, lang, &words, json);
                }
                Command::Batch {
                    lang,
                    input_file,
                    output_file,
                } => {
                    let lang = lang.as_deref().unwrap_or(default_lang);
                    convert_ops::batch_cmd(&t, lang, &input_file, &output_file);
                }
                Command::Accuracy {
                    corpus_file,
                    tag,
                    lang,
                    show_pass,
                    json,
                } => {
                    let filter = CaseFilter {
                        tag: tag.as_deref(),
                        lang: lang.as_deref(),
                    };
                    accuracy_ops::accuracy_cmd(&t, &corpus_file, &filter, show_pass, json);
                }
                Command::Langs => lang_ops::langs_cmd(&t),
                Command::Table { .. } | Command::Settings { .. } => unreachable!(),
            }
        }
    }
}
