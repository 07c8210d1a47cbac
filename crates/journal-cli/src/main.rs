use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use journal_layout::{
    AlignMode, Geometry, JournalOptions, PageSide, PaperSize, SpreadMode, build_document,
};
use journal_tex::{CompilePasses, TexError, compile_pdf, manual_command, render_document, write_tex};

#[derive(Parser)]
#[command(name = "journalgen", about = "Multi-year journal layout generator", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the journal markup and optionally compile it to PDF
    Generate {
        /// Options file (JSON); flags below override its values
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// First tracked year
        #[arg(long)]
        start_year: Option<i32>,

        /// Number of tracked years
        #[arg(long)]
        years: Option<u32>,

        /// Writing lines per day entry
        #[arg(long)]
        lines: Option<u32>,

        /// Paper size
        #[arg(long, value_enum)]
        paper: Option<PaperArg>,

        /// Days per physical page
        #[arg(long, value_enum)]
        spread: Option<SpreadArg>,

        /// Label alignment behavior
        #[arg(long, value_enum)]
        align: Option<AlignArg>,

        /// Side month summaries are forced onto
        #[arg(long, value_enum)]
        summary_side: Option<SideArg>,

        /// Inner (binding) margin in mm
        #[arg(long)]
        inner_margin: Option<f32>,

        /// Outer (fore edge) margin in mm
        #[arg(long)]
        outer_margin: Option<f32>,

        /// Top margin in mm
        #[arg(long)]
        top_margin: Option<f32>,

        /// Bottom margin in mm
        #[arg(long)]
        bottom_margin: Option<f32>,

        /// Render Sundays in plain gray instead of red
        #[arg(long)]
        plain_sundays: bool,

        /// Decorate special days with icons and colors
        #[arg(long)]
        whimsy: bool,

        /// Append localized day glyphs to weekday labels
        #[arg(long)]
        day_glyphs: bool,

        /// Leave parity filler pages blank instead of event lists
        #[arg(long)]
        no_event_lists: bool,

        /// Include a table of contents (needs a second compiler pass)
        #[arg(long)]
        toc: bool,

        /// Append this tool's source code to the document
        #[arg(long)]
        include_source: bool,

        /// Minimum number of lined extra pages
        #[arg(long)]
        extra_pages: Option<u32>,

        /// Reduced subset that preserves the pagination scheme
        #[arg(long)]
        test: bool,

        /// Stop after writing the markup file
        #[arg(long)]
        no_compile: bool,

        /// Show statistics only, don't write anything
        #[arg(long)]
        stats_only: bool,

        /// Output directory
        #[arg(short, long, default_value = "output")]
        output: PathBuf,
    },

    /// Load and validate a configuration file without generating
    CheckConfig {
        /// Options file (JSON)
        #[arg(short, long)]
        config: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    A4,
    JisB5,
    UsLetter,
}

#[derive(Clone, Copy, ValueEnum)]
enum SpreadArg {
    /// One day per page
    TwoUp,
    /// Two days per page
    FourUp,
}

#[derive(Clone, Copy, ValueEnum)]
enum AlignArg {
    Mirrored,
    Left,
}

#[derive(Clone, Copy, ValueEnum)]
enum SideArg {
    Recto,
    Verso,
}

impl From<PaperArg> for PaperSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::A4 => Self::A4,
            PaperArg::JisB5 => Self::JisB5,
            PaperArg::UsLetter => Self::UsLetter,
        }
    }
}

impl From<SpreadArg> for SpreadMode {
    fn from(arg: SpreadArg) -> Self {
        match arg {
            SpreadArg::TwoUp => Self::TwoUp,
            SpreadArg::FourUp => Self::FourUp,
        }
    }
}

impl From<AlignArg> for AlignMode {
    fn from(arg: AlignArg) -> Self {
        match arg {
            AlignArg::Mirrored => Self::Mirrored,
            AlignArg::Left => Self::Left,
        }
    }
}

impl From<SideArg> for PageSide {
    fn from(arg: SideArg) -> Self {
        match arg {
            SideArg::Recto => Self::Recto,
            SideArg::Verso => Self::Verso,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            config,
            start_year,
            years,
            lines,
            paper,
            spread,
            align,
            summary_side,
            inner_margin,
            outer_margin,
            top_margin,
            bottom_margin,
            plain_sundays,
            whimsy,
            day_glyphs,
            no_event_lists,
            toc,
            include_source,
            extra_pages,
            test,
            no_compile,
            stats_only,
            output,
        } => {
            let mut options = match config {
                Some(path) => JournalOptions::load(&path).await?,
                None => JournalOptions::default(),
            };

            if let Some(v) = start_year {
                options.start_year = v;
            }
            if let Some(v) = years {
                options.num_years = v;
            }
            if let Some(v) = lines {
                options.num_writing_lines = v;
            }
            if let Some(v) = paper {
                options.paper = v.into();
            }
            if let Some(v) = spread {
                options.spread = v.into();
            }
            if let Some(v) = align {
                options.align = v.into();
            }
            if let Some(v) = summary_side {
                options.month_summary_side = v.into();
            }
            if let Some(v) = extra_pages {
                options.min_extra_pages = v;
            }
            let mut margins = options.margins;
            if let Some(v) = inner_margin {
                margins.inner_mm = v;
            }
            if let Some(v) = outer_margin {
                margins.outer_mm = v;
            }
            if let Some(v) = top_margin {
                margins.top_mm = v;
            }
            if let Some(v) = bottom_margin {
                margins.bottom_mm = v;
            }
            options.margins = margins;
            if plain_sundays {
                options.sundays_red = false;
            }
            options.whimsy |= whimsy;
            options.day_glyphs |= day_glyphs;
            if no_event_lists {
                options.event_lists = false;
            }
            options.toc |= toc;
            options.include_source |= include_source;
            options.test_mode |= test;

            generate(options, output, no_compile, stats_only).await?;
        }

        Commands::CheckConfig { config } => {
            let options = JournalOptions::load(&config).await?;
            options.validate()?;
            println!("Configuration valid.");
            println!(
                "  Tracked years: {}-{}",
                options.start_year,
                options.end_year()
            );
            println!(
                "  Special days: {} annual, {} birthdays, {} anniversaries, {} other",
                options.special_days.annual.len(),
                options.special_days.birthdays.len(),
                options.special_days.anniversaries.len(),
                options.special_days.other.len()
            );
        }
    }

    Ok(())
}

async fn generate(
    options: JournalOptions,
    output: PathBuf,
    no_compile: bool,
    stats_only: bool,
) -> Result<()> {
    let geom = Geometry::derive(&options)?;
    let document = build_document(&options)?;

    let margins = options.margins;
    println!(
        "Configuration: Paper={} ({}x{}mm)",
        options.paper.name(),
        geom.page_width_mm,
        geom.page_height_mm
    );
    println!(
        "Margins: Inner={}mm, Outer={}mm, Top={}mm, Bottom={}mm",
        margins.inner_mm, margins.outer_mm, margins.top_mm, margins.bottom_mm
    );
    println!(
        "Layout: {} ({} days/page), Align: {}",
        options.spread.as_str(),
        options.spread.days_per_page(),
        options.align.as_str()
    );
    println!("Page Statistics:");
    println!("  Content pages: {}", document.stats.content_pages);
    println!("  Filler pages: {}", document.stats.filler_pages);
    println!("  Physical pages: {}", document.stats.physical_pages);
    println!("  Final logical page: {}", document.stats.final_logical_page);
    if document.stats.skipped_pages > 0 {
        println!("  Skipped pages: {}", document.stats.skipped_pages);
    }

    if stats_only {
        return Ok(());
    }

    // Self-listing appendix: this binary's own source
    let source_blob = options
        .include_source
        .then(|| include_str!("main.rs"));

    let tex = render_document(&document, &options, &geom, source_blob);
    let file_name = format!("{}.tex", options.output_base());
    let tex_path = write_tex(&output, &file_name, &tex).await?;
    println!("Generated: {}", tex_path.display());

    if no_compile {
        println!(
            "Skipping compilation. To compile manually: {}",
            manual_command(&tex_path, &output)
        );
        return Ok(());
    }

    let passes = if options.toc {
        CompilePasses::Double
    } else {
        CompilePasses::Single
    };
    match compile_pdf(&tex_path, &output, passes).await {
        Ok(()) => {
            println!(
                "Success! PDF generated at: {}",
                output.join(format!("{}.pdf", options.output_base())).display()
            );
            Ok(())
        }
        Err(TexError::CompilerNotFound { hint }) => {
            // The markup file is intact; missing TeX is not a failure
            // of generation
            println!();
            println!("[NOTICE] pdflatex not found in PATH.");
            println!("To generate the PDF, install a LaTeX distribution (e.g. TeX Live).");
            println!("Then run: {hint}");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
