//! reportkit CLI - render JSON report descriptions to HTML and PDF

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

use reportkit::model::{Node, NodeKind};
use reportkit::render::is_dark;
use reportkit::theme::ThemeOverrides;
use reportkit::{
    DesignTokens, HtmlRenderer, JsonFormat, PageMargins, RenderOptions, Report, ThemeBuilder,
    ThemePreset,
};

#[derive(Parser)]
#[command(name = "reportkit")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Render declarative JSON reports to HTML and PDF", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Args)]
struct ThemeArgs {
    /// Built-in theme (overrides the report's own theme)
    #[arg(short, long, value_enum)]
    theme: Option<ThemeName>,

    /// JSON file with partial token overrides applied over the theme
    #[arg(long, value_name = "FILE")]
    theme_file: Option<PathBuf>,

    /// Extra CSS file appended after the generated styles
    #[arg(long, value_name = "FILE")]
    css: Option<PathBuf>,

    /// Value of the html `lang` attribute
    #[arg(long, default_value = "en")]
    lang: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a report to HTML
    #[command(alias = "html")]
    Render {
        /// Input JSON report
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Print margin for every side (CSS length, e.g. "2cm")
        #[arg(short, long, value_name = "LENGTH")]
        margin: Option<String>,

        #[command(flatten)]
        theme: ThemeArgs,
    },

    /// Render a report to PDF with headless Chrome
    #[cfg(feature = "chrome")]
    Pdf {
        /// Input JSON report
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output PDF file (defaults to the input name with .pdf)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// JSON file with PDF options (partial options merge over defaults)
        #[arg(long, value_name = "FILE")]
        options: Option<PathBuf>,

        /// Paper format (A3, A4, A5, Letter, Legal, Tabloid, Ledger)
        #[arg(short, long)]
        format: Option<reportkit::export::PaperFormat>,

        /// Landscape orientation
        #[arg(long)]
        landscape: bool,

        /// Chrome executable
        #[arg(long, value_name = "PATH", env = "CHROME")]
        chrome: Option<PathBuf>,

        #[command(flatten)]
        theme: ThemeArgs,
    },

    /// Check a report and show its structure
    Info {
        /// Input JSON report
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Re-emit a report as normalized JSON
    Json {
        /// Input JSON report
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// List built-in themes
    Themes,

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum ThemeName {
    Mono,
    Office,
    Vivid,
    Dark,
    Terminal,
}

impl From<ThemeName> for ThemePreset {
    fn from(name: ThemeName) -> Self {
        match name {
            ThemeName::Mono => ThemePreset::Mono,
            ThemeName::Office => ThemePreset::Office,
            ThemeName::Vivid => ThemePreset::Vivid,
            ThemeName::Dark => ThemePreset::Dark,
            ThemeName::Terminal => ThemePreset::Terminal,
        }
    }
}

type CliResult = Result<(), Box<dyn std::error::Error>>;

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Render {
            input,
            output,
            margin,
            theme,
        }) => cmd_render(&input, output.as_deref(), margin, &theme),
        #[cfg(feature = "chrome")]
        Some(Commands::Pdf {
            input,
            output,
            options,
            format,
            landscape,
            chrome,
            theme,
        }) => cmd_pdf(
            &input,
            output.as_deref(),
            options.as_deref(),
            format,
            landscape,
            chrome,
            &theme,
        ),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Json {
            input,
            output,
            compact,
        }) => cmd_json(&input, output.as_deref(), compact),
        Some(Commands::Themes) => {
            cmd_themes();
            Ok(())
        }
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            println!("{}", "Usage: reportkit render <FILE>".yellow());
            println!("       reportkit --help for more information");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn load_report(input: &Path) -> Result<Report, Box<dyn std::error::Error>> {
    let json = fs::read_to_string(input)?;
    let report = Report::from_json(&json)?;
    log::debug!("Loaded '{}' from {}", report.title(), input.display());
    for warning in report.validate() {
        eprintln!("{}: {}", "Warning".yellow().bold(), warning);
    }
    Ok(report)
}

/// Resolve tokens: CLI theme, else the report's theme, then file overrides.
fn resolve_tokens(
    report: &Report,
    args: &ThemeArgs,
) -> Result<DesignTokens, Box<dyn std::error::Error>> {
    let base = match args.theme {
        Some(name) => ThemePreset::from(name).tokens(),
        None => HtmlRenderer::for_report(report).tokens().clone(),
    };

    let tokens = match args.theme_file {
        Some(ref path) => {
            let overrides: ThemeOverrides = serde_json::from_str(&fs::read_to_string(path)?)?;
            ThemeBuilder::from(base).with_overrides(overrides).build()
        }
        None => base,
    };
    Ok(tokens)
}

fn renderer(report: &Report, args: &ThemeArgs) -> Result<HtmlRenderer, Box<dyn std::error::Error>> {
    let tokens = resolve_tokens(report, args)?;
    let mut options = RenderOptions::new().with_lang(&args.lang);
    if let Some(ref path) = args.css {
        options = options.with_custom_css(fs::read_to_string(path)?);
    }
    Ok(HtmlRenderer::with_options(tokens, options))
}

fn cmd_render(
    input: &Path,
    output: Option<&Path>,
    margin: Option<String>,
    args: &ThemeArgs,
) -> CliResult {
    let report = load_report(input)?;
    let margins = margin.map(PageMargins::all).unwrap_or_default();
    let html = renderer(&report, args)?.render(&report, &margins);

    if let Some(out_path) = output {
        fs::write(out_path, &html)?;
        eprintln!(
            "{} {} → {}",
            "✓".green(),
            input.display(),
            out_path.display()
        );
    } else {
        print!("{}", html);
    }

    Ok(())
}

#[cfg(feature = "chrome")]
fn cmd_pdf(
    input: &Path,
    output: Option<&Path>,
    options_file: Option<&Path>,
    format: Option<reportkit::export::PaperFormat>,
    landscape: bool,
    chrome: Option<PathBuf>,
    args: &ThemeArgs,
) -> CliResult {
    use indicatif::{ProgressBar, ProgressStyle};
    use reportkit::export::{ChromeConfig, ChromeLauncher, PdfOptions};
    use reportkit::PdfBuilder;
    use std::time::Duration;

    let report = load_report(input)?;

    let mut options = match options_file {
        Some(path) => serde_json::from_str::<PdfOptions>(&fs::read_to_string(path)?)?,
        None => PdfOptions::default(),
    };
    if let Some(format) = format {
        options = options.with_format(format);
    }
    if landscape {
        options = options.landscape();
    }

    let out_path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| input.with_extension("pdf"));

    let mut config = ChromeConfig::default();
    if let Some(path) = chrome {
        config = config.with_executable(path);
    }
    let builder = PdfBuilder::with_renderer(renderer(&report, args)?, ChromeLauncher::new(config));

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message("Printing PDF...");

    let result = builder.save_pdf(&report, &out_path, &options);
    builder.close()?;
    match result {
        Ok(()) => pb.finish_with_message(format!(
            "{} {} → {}",
            "✓".green(),
            input.display(),
            out_path.display()
        )),
        Err(e) => {
            pb.abandon();
            return Err(e.into());
        }
    }

    Ok(())
}

fn cmd_info(input: &Path) -> CliResult {
    let report = load_report(input)?;

    println!("{}", "Report Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Title".bold(), report.meta.title);
    if let Some(ref author) = report.meta.author {
        println!("{}: {}", "Author".bold(), author);
    }
    if let Some(ref date) = report.meta.date {
        println!("{}: {}", "Date".bold(), date);
    }
    println!(
        "{}: {}",
        "Theme".bold(),
        report.theme.as_deref().unwrap_or("mono")
    );
    println!(
        "{}: {}",
        "Cover".bold(),
        if report.cover.is_some() { "Yes" } else { "No" }
    );
    println!(
        "{}: {}",
        "Page numbers".bold(),
        if report.page_numbering() { "Yes" } else { "No" }
    );

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let mut counts = NodeCounts::default();
    counts.walk(&report.body);
    println!("{}: {}", "Sections".bold(), counts.sections);
    println!("{}: {}", "Paragraphs".bold(), counts.paragraphs);
    println!("{}: {}", "Tables".bold(), counts.tables);
    println!("{}: {}", "Lists".bold(), counts.lists);
    println!("{}: {}", "Code blocks".bold(), counts.code_blocks);
    println!("{}: {}", "Other".bold(), counts.other);
    if counts.unknown > 0 {
        println!("{}: {}", "Unknown".yellow().bold(), counts.unknown);
    }

    Ok(())
}

#[derive(Default)]
struct NodeCounts {
    sections: usize,
    paragraphs: usize,
    tables: usize,
    lists: usize,
    code_blocks: usize,
    other: usize,
    unknown: usize,
}

impl NodeCounts {
    fn walk(&mut self, nodes: &[Node]) {
        for node in nodes {
            match node.kind() {
                Some(NodeKind::Section) => self.sections += 1,
                Some(NodeKind::Paragraph) => self.paragraphs += 1,
                Some(NodeKind::Table) => self.tables += 1,
                Some(NodeKind::List) => self.lists += 1,
                Some(NodeKind::CodeBlock) => self.code_blocks += 1,
                Some(_) => self.other += 1,
                None => self.unknown += 1,
            }
            if let Node::Section(section) = node {
                self.walk(&section.content);
            }
        }
    }
}

fn cmd_json(input: &Path, output: Option<&Path>, compact: bool) -> CliResult {
    let report = load_report(input)?;
    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let json = report.to_json(format)?;

    if let Some(out_path) = output {
        fs::write(out_path, &json)?;
        eprintln!("{} {}", "✓".green(), out_path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_themes() {
    println!("{}", "Built-in Themes".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    for theme in ThemePreset::ALL {
        let tokens = theme.tokens();
        let marker = if theme == ThemePreset::default() {
            " (default)".dimmed().to_string()
        } else {
            String::new()
        };
        println!(
            "{:<10} background {}  primary {}  {}{}",
            theme.name().bold(),
            tokens.colors.background,
            tokens.colors.primary,
            if is_dark(&tokens.colors.background) {
                "dark"
            } else {
                "light"
            },
            marker
        );
    }
}

fn cmd_version() {
    println!("{} {}", "reportkit".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Declarative report rendering tool");
    println!();
    println!("Repository: {}", "https://github.com/iyulab/reportkit".dimmed());
    println!("License: MIT");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_report(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    fn theme_args() -> ThemeArgs {
        ThemeArgs {
            theme: None,
            theme_file: None,
            css: None,
            lang: "en".into(),
        }
    }

    #[test]
    fn test_node_counts_walk_sections() {
        let file = write_report(
            r#"{"meta":{"title":"T"},"body":[
                {"kind":"section","title":"S","content":[
                    {"kind":"paragraph","text":"a"},
                    {"kind":"table","headers":["A"],"rows":[]}
                ]},
                {"kind":"divider"},
                {"kind":"gauge"}
            ]}"#,
        );
        let report = load_report(file.path()).unwrap();

        let mut counts = NodeCounts::default();
        counts.walk(&report.body);
        assert_eq!(counts.sections, 1);
        assert_eq!(counts.paragraphs, 1);
        assert_eq!(counts.tables, 1);
        assert_eq!(counts.other, 1);
        assert_eq!(counts.unknown, 1);
    }

    #[test]
    fn test_cli_theme_overrides_report_theme() {
        let file = write_report(r#"{"meta":{"title":"T"},"theme":"office","body":[]}"#);
        let report = load_report(file.path()).unwrap();

        let tokens = resolve_tokens(&report, &theme_args()).unwrap();
        assert_eq!(tokens, ThemePreset::Office.tokens());

        let mut args = theme_args();
        args.theme = Some(ThemeName::Terminal);
        let tokens = resolve_tokens(&report, &args).unwrap();
        assert_eq!(tokens, ThemePreset::Terminal.tokens());
    }

    #[test]
    fn test_theme_file_applies_over_base() {
        let report = Report::builder(reportkit::ReportMeta::new("T")).build();
        let overrides = write_report(r##"{"colors":{"primary":"#abcdef"}}"##);

        let mut args = theme_args();
        args.theme_file = Some(overrides.path().to_path_buf());
        let tokens = resolve_tokens(&report, &args).unwrap();
        assert_eq!(tokens.colors.primary, "#abcdef");
        assert_eq!(tokens.colors.background, ThemePreset::Mono.tokens().colors.background);
    }

    #[test]
    fn test_load_report_rejects_invalid_table() {
        let file = write_report(
            r#"{"meta":{"title":"T"},"body":[{"kind":"table","headers":["A","A"]}]}"#,
        );
        assert!(load_report(file.path()).is_err());
    }
}
