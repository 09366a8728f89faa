//! CLI tool for extracting text from .pptx presentations.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use slidetext_core::{export, ExportFormat};
use slidetext_pptx::{PptxExtractor, Strategy};
use std::path::{Path, PathBuf};

/// Extract text from .pptx presentations and save it as text, Markdown, or HTML.
#[derive(Parser, Debug)]
#[command(name = "slidetext")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input presentation file(s) (.pptx)
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Output directory (default: same as input file)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = FormatArg::Txt)]
    format: FormatArg,

    /// Extraction strategy
    #[arg(short, long, value_enum, default_value_t = StrategyArg::Shapes)]
    strategy: StrategyArg,

    /// Print output to stdout instead of writing to file
    #[arg(short, long)]
    print: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum FormatArg {
    /// Plain text, byte-identical to the extracted buffer
    Txt,
    /// Markdown
    Md,
    /// HTML with the text in a <pre> envelope
    Html,
}

impl FormatArg {
    fn to_format(self) -> ExportFormat {
        match self {
            Self::Txt => ExportFormat::PlainText,
            Self::Md => ExportFormat::Markdown,
            Self::Html => ExportFormat::Html,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum StrategyArg {
    /// Text boxes, tables, one level of grouped shapes, and charts
    Shapes,
    /// Every text run, one fragment per slide
    Flat,
    /// Unlimited group nesting plus SmartArt nodes
    Fidelity,
}

impl StrategyArg {
    fn to_strategy(self) -> Strategy {
        match self {
            Self::Shapes => Strategy::Shapes,
            Self::Flat => Strategy::FlatText,
            Self::Fidelity => Strategy::Fidelity,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let extractor = PptxExtractor::with_strategy(args.strategy.to_strategy());

    for input_path in &args.input {
        if args.verbose {
            eprintln!("Processing: {}", input_path.display());
        }

        match process_file(input_path, &args, &extractor) {
            Ok(()) => {}
            Err(e) => {
                eprintln!("Error processing {}: {}", input_path.display(), e);
            }
        }
    }

    Ok(())
}

/// Extract one presentation and print or export the result.
fn process_file(input_path: &Path, args: &Args, extractor: &PptxExtractor) -> Result<()> {
    log::debug!(
        "extracting {} with {:?} strategy",
        input_path.display(),
        extractor.strategy()
    );

    let extracted = extractor
        .extract_path(input_path)
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    if args.verbose {
        eprintln!(
            "  Found {} slides, {} fragments",
            extracted.slide_count,
            extracted.fragment_count()
        );
    }

    let text = extracted.to_text();

    if args.print {
        print!("{}", text);
        if !text.is_empty() && !text.ends_with('\n') {
            println!();
        }
        return Ok(());
    }

    let format = args.format.to_format();
    let output_path = output_path_for(input_path, args.output.as_ref(), format)?;
    export::write_export(&output_path, format, &text).map_err(|e| anyhow::anyhow!("{}", e))?;

    if args.verbose {
        eprintln!("Written to: {}", output_path.display());
    }

    Ok(())
}

/// Determine the output path for a processed file.
fn output_path_for(
    input_path: &Path,
    output_dir: Option<&PathBuf>,
    format: ExportFormat,
) -> Result<PathBuf> {
    let stem = input_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");

    let output_filename = format!("{}.{}", stem, format.extension());

    let output_path = match output_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
            dir.join(output_filename)
        }
        None => {
            if let Some(parent) = input_path.parent() {
                parent.join(output_filename)
            } else {
                PathBuf::from(output_filename)
            }
        }
    };

    Ok(output_path)
}
