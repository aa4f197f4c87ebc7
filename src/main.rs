use clap::{Parser, Subcommand};
use foliogen::{build, config, enrich, output};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "foliogen")]
#[command(about = "Static site generator for combined blog and portfolio sites")]
#[command(long_about = "\
Static site generator for combined blog and portfolio sites

Two JSON collection files are the data source. Blog entries reference
markdown document files; portfolio entries link to external project pages.

Project structure:

  my-site/
  ├── site.toml                  # Optional config (defaults apply)
  ├── articles.json              # Portfolio collection
  ├── data/
  │   ├── blog.json              # Blog collection
  │   └── blog/markdown/         # Document files (one per blog entry)
  ├── static/                    # Mirrored verbatim into the output
  └── dist/                      # Output tree
       ├── index.html            # Blog index
       ├── blog/<slug>.html
       ├── portfolio/index.html
       ├── tag/<tag>.html
       └── static/**

Portfolio entries without a cover image get one fetched from the linked
page's og:image / twitter:image tags; discovered covers are written back to
articles.json so later builds skip the network.")]
#[command(version)]
struct Cli {
    /// Project directory
    #[arg(long, default_value = ".", global = true)]
    project: PathBuf,

    /// Output directory (overrides site.toml, relative to the project)
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the full pipeline: load → enrich → render → write
    Build {
        /// Skip cover enrichment — no network, no collection write-back
        #[arg(long)]
        no_enrich: bool,
    },
    /// Load and validate the project without building
    Check,
    /// Fetch missing covers and update the portfolio collection, nothing else
    Enrich,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut project = config::Project::open(&cli.project)?;
    if let Some(out) = cli.output {
        project.config.paths.output = out;
    }

    match cli.command {
        Command::Build { no_enrich } => {
            let fetcher = http_fetcher(&project);
            let fetcher_ref = if no_enrich || !project.config.enrich.enabled {
                None
            } else {
                Some(&fetcher as &dyn enrich::CoverFetcher)
            };
            let report = build::build(&project, fetcher_ref)?;
            output::print_build_report(&report);
        }
        Command::Check => {
            let portfolio = foliogen::content::load_portfolio(&project)?;
            let (posts, warnings) = foliogen::content::load_blog(&project)?;
            println!(
                "Project OK: {} posts, {} portfolio entries",
                posts.len(),
                portfolio.len()
            );
            for line in output::format_diagnostics(&warnings, None) {
                eprintln!("{line}");
            }
        }
        Command::Enrich => {
            let mut portfolio = foliogen::content::load_portfolio(&project)?;
            let fetcher = http_fetcher(&project);
            let report = enrich::enrich_portfolio(&mut portfolio, &fetcher);
            if report.updated() > 0 {
                enrich::save_portfolio(&project.portfolio_file(), &portfolio)?;
            }
            println!(
                "Enrichment: {} attempted, {} found{}",
                report.attempts.len(),
                report.updated(),
                if report.updated() > 0 {
                    ", collection updated"
                } else {
                    ""
                }
            );
            for line in output::format_diagnostics(&[], Some(&report)) {
                eprintln!("{line}");
            }
        }
    }

    Ok(())
}

fn http_fetcher(project: &config::Project) -> enrich::HttpFetcher {
    enrich::HttpFetcher::new(
        Duration::from_secs(project.config.enrich.timeout_secs),
        &project.config.enrich.user_agent,
    )
}
