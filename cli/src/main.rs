//! apadoc CLI - APA 7th edition document formatter

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use colored::Colorize;

use apadoc::{Apadoc, ApadocResult, JsonFormat, ReferenceOrder, TitleMetadata};

#[derive(Parser)]
#[command(name = "apadoc")]
#[command(version)]
#[command(about = "Format markdown-structured text as an APA 7th edition DOCX", long_about = None)]
struct Cli {
    /// Input text file ("-" for stdin)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output DOCX file
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(flatten)]
    title: TitleArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert text to an APA formatted DOCX file
    Convert {
        /// Input text file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output DOCX file (defaults to <input stem>.docx)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        title: TitleArgs,
    },

    /// Print the styled document as JSON
    Json {
        /// Input text file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        #[command(flatten)]
        title: TitleArgs,
    },

    /// Print a plain text preview of the document
    Text {
        /// Input text file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        title: TitleArgs,
    },

    /// Show document statistics
    Info {
        /// Input text file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

/// Title page metadata and formatting switches.
#[derive(Args, Clone, Default)]
struct TitleArgs {
    /// JSON file with title page metadata
    #[arg(long, value_name = "FILE")]
    meta: Option<PathBuf>,

    /// Paper title
    #[arg(long)]
    title: Option<String>,

    /// Author name
    #[arg(long, env = "APADOC_AUTHOR")]
    author: Option<String>,

    /// Institutional affiliation
    #[arg(long, env = "APADOC_INSTITUTION")]
    institution: Option<String>,

    /// Course number and name
    #[arg(long)]
    course: Option<String>,

    /// Instructor name
    #[arg(long)]
    instructor: Option<String>,

    /// Due date as printed on the title page
    #[arg(long, conflicts_with = "today")]
    date: Option<String>,

    /// Use today's date
    #[arg(long)]
    today: bool,

    /// Sort references alphabetically instead of keeping their order
    #[arg(long)]
    sort_references: bool,
}

impl TitleArgs {
    /// Flags win over the metadata file; the input file name is the last
    /// resort for the title.
    fn metadata(&self, input: &Path) -> Result<TitleMetadata, Box<dyn std::error::Error>> {
        let mut metadata = TitleMetadata::new(self.title.clone().unwrap_or_default());
        metadata.author = self.author.clone();
        metadata.institution = self.institution.clone();
        metadata.course = self.course.clone();
        metadata.instructor = self.instructor.clone();
        metadata.date = self.date.clone();

        if let Some(ref path) = self.meta {
            let json = fs::read_to_string(path)?;
            metadata = metadata.merge_missing(TitleMetadata::from_json_partial(&json)?);
        }

        if self.today {
            metadata = metadata.with_today();
        }

        if metadata.title.trim().is_empty() {
            let stem = input.file_stem().unwrap_or_default().to_string_lossy();
            if stem.is_empty() || stem == "-" {
                return Err("a title is required (use --title or --meta)".into());
            }
            log::info!("No title given, using file name '{}'", stem);
            metadata.title = stem.into_owned();
        }

        Ok(metadata)
    }

    fn formatter(&self) -> Apadoc {
        let order = if self.sort_references {
            ReferenceOrder::Alphabetical
        } else {
            ReferenceOrder::AsWritten
        };
        Apadoc::new().with_reference_order(order)
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert {
            input,
            output,
            title,
        }) => cmd_convert(&input, output.as_deref(), &title),
        Some(Commands::Json {
            input,
            output,
            compact,
            title,
        }) => cmd_json(&input, output.as_deref(), compact, &title),
        Some(Commands::Text {
            input,
            output,
            title,
        }) => cmd_text(&input, output.as_deref(), &title),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert if input is provided
            if let Some(input) = cli.input {
                cmd_convert(&input, cli.output.as_deref(), &cli.title)
            } else {
                println!("{}", "Usage: apadoc <FILE> [OUTPUT] --title <TITLE>".yellow());
                println!("       apadoc --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        let label = match e.downcast_ref::<apadoc::Error>() {
            Some(err) if err.is_environment() => "Environment error",
            _ => "Error",
        };
        eprintln!("{}: {}", label.red().bold(), e);
        std::process::exit(1);
    }
}

fn read_input(input: &Path) -> io::Result<String> {
    if input == Path::new("-") {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        fs::read_to_string(input)
    }
}

fn format(input: &Path, title: &TitleArgs) -> Result<ApadocResult, Box<dyn std::error::Error>> {
    let text = read_input(input)?;
    let metadata = title.metadata(input)?;
    Ok(title.formatter().format(&metadata, &text)?)
}

fn write_or_print(output: Option<&Path>, content: &str) -> io::Result<()> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_convert(
    input: &Path,
    output: Option<&Path>,
    title: &TitleArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = output.map(|p| p.to_path_buf()).unwrap_or_else(|| {
        let stem = input.file_stem().unwrap_or_default().to_string_lossy();
        let stem = if stem.is_empty() || stem == "-" {
            "paper".into()
        } else {
            stem
        };
        PathBuf::from(format!("{}.docx", stem))
    });

    let result = format(input, title)?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    result.save(&output)?;

    println!(
        "{} {}",
        "APA document created:".green().bold(),
        output.display()
    );
    println!(
        "  {} {} pages, {} paragraphs, {} references",
        "└─".dimmed(),
        result.document.page_count(),
        result.stats.paragraph_count,
        result.stats.reference_count
    );

    Ok(())
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    title: &TitleArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = format(input, title)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    write_or_print(output, &result.to_json(format)?)?;
    Ok(())
}

fn cmd_text(
    input: &Path,
    output: Option<&Path>,
    title: &TitleArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = format(input, title)?;
    write_or_print(output, &result.to_text())?;
    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(input)?;
    let parsed = apadoc::parse(&text);
    let stats = parsed.stats();

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Blocks".bold(), parsed.blocks.len());
    println!("{}: {}", "Headings".bold(), stats.heading_count);
    println!("{}: {}", "Run-in headings".bold(), stats.run_in_heading_count);
    println!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
    println!("{}: {}", "Formulas".bold(), stats.formula_count);
    println!("{}: {}", "References".bold(), stats.reference_count);
    println!("{}: {}", "Words".bold(), stats.word_count);

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "apadoc".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("APA 7th edition document formatter");
    println!();
    println!("License: MIT");
}
