//! modtrack CLI - course progress at a glance.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use modtrack_core::{
    format_due_date, Catalog, Course, ModuleStatus, SortDirection, SortKey, StatusFilter, User,
};
use modtrack_progress::{
    completion_percentage, roster, scored_modules, upcoming, view, CourseTracker, Grade,
    RosterQuery, RosterSortKey, TrackerConfig,
};
use modtrack_storage::{load_catalog_file, CatalogSource, JsonCatalog, MemoryCatalog};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "modtrack")]
#[command(about = "Track course module progress, scores and deadlines", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Catalog directory or single catalog JSON file (bundled sample if omitted)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Tracker configuration JSON file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// User to act as
    #[arg(long, global = true, default_value = "user-1")]
    user: String,

    /// Course to open (defaults to the configured or first enrolled course)
    #[arg(long, global = true)]
    course: Option<String>,

    /// Reference date for deadlines, YYYY-MM-DD (defaults to today)
    #[arg(long, global = true)]
    today: Option<NaiveDate>,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the user's courses
    Courses,
    /// Show progress, scores and assessment for the course
    Summary,
    /// List modules with search, filter and sort
    Modules {
        /// Search title and description
        #[arg(long, default_value = "")]
        search: String,
        /// all, completed, in-progress, not-started or failed
        #[arg(long, default_value = "all")]
        status: StatusFilter,
        /// title, dueDate or status
        #[arg(long)]
        sort: Option<SortKey>,
        /// Descending order
        #[arg(long)]
        desc: bool,
    },
    /// List upcoming deadlines
    Upcoming {
        /// Days ahead to look (must be greater than 0)
        #[arg(long)]
        days: Option<u32>,
    },
    /// Export a JSON progress report
    Export {
        /// Output file or directory (stdout if omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Show the instructor roster for the course
    Roster {
        /// Search student name and email
        #[arg(long, default_value = "")]
        search: String,
        /// name, progress or score
        #[arg(long, default_value = "name")]
        sort: RosterSortKey,
        /// Descending order
        #[arg(long)]
        desc: bool,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // Logs go to stderr so exported JSON on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(cli.config.as_deref()).await?;
    let catalog = load_catalog(cli.catalog.as_deref()).await?;

    let user = catalog
        .user(&cli.user)
        .ok_or_else(|| anyhow!("Unknown user: {}", cli.user))?;
    let today = cli
        .today
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    debug!("Reference date {}", today);

    match cli.command {
        Commands::Courses => print_courses(&catalog, user),
        command => {
            let course = select_course(&catalog, user, cli.course.as_deref(), &config)?;
            info!("Opened course {} for {}", course.id, user.id);
            let tracker = CourseTracker::new(course.clone()).with_config(config);
            run_course_command(command, &catalog, tracker, today).await?;
        }
    }

    Ok(())
}

fn print_courses(catalog: &Catalog, user: &User) {
    let courses = catalog.courses_for(user);
    println!("Courses for {} ({})", user.name, courses.len());
    for course in courses {
        println!(
            "  {} | {:>3}% | {}",
            course.id,
            completion_percentage(&course.modules),
            course.title
        );
    }
}

async fn run_course_command(
    command: Commands,
    catalog: &Catalog,
    mut tracker: CourseTracker,
    today: NaiveDate,
) -> Result<()> {
    let course = tracker.course().clone();

    match command {
        // Listed before a course is selected.
        Commands::Courses => {}
        Commands::Summary => {
            let query = tracker.config().default_query();
            let snapshot = tracker.snapshot(today, &query);

            println!("{}", course.title);
            println!(
                "  Progress: {}% ({}/{} modules)",
                snapshot.progress, snapshot.completed, snapshot.total
            );
            println!(
                "  Average score: {}% (grade {})",
                snapshot.average_score,
                Grade::from_score(snapshot.average_score)
            );
            for status in ModuleStatus::ALL {
                println!("  {}: {}", status.label(), snapshot.status_counts.get(status));
            }
            println!("  Scored modules:");
            for module in scored_modules(tracker.modules()) {
                println!("    {} - {}%", module.title, module.score.unwrap_or_default());
            }
            println!("  Upcoming deadlines: {}", snapshot.upcoming.len());
            println!("  {}", snapshot.assessment);
        }
        Commands::Modules { search, status, sort, desc } => {
            let mut query = tracker.config().default_query().with_search(search).with_status(status);
            if let Some(key) = sort {
                query = query.sorted_by(key, SortDirection::Asc);
            }
            if desc {
                query.sort_direction = SortDirection::Desc;
            }

            let modules = view(tracker.modules(), &query);
            if modules.is_empty() {
                if tracker.modules().is_empty() {
                    println!("No modules available.");
                } else {
                    println!("No modules match your current filters.");
                }
                return Ok(());
            }

            println!("Modules ({})", modules.len());
            for module in modules {
                println!(
                    "  {} | {:<11} | {:<12} | {:>5} | {}",
                    module.id,
                    module.status.label(),
                    format_due_date(module.due_date.as_deref()),
                    module
                        .score
                        .map(|s| format!("{}%", s))
                        .unwrap_or_else(|| "-".to_string()),
                    module.title,
                );
            }
        }
        Commands::Upcoming { days } => {
            if let Some(days) = days {
                tracker.config_mut().reminders.set_days_before_due(days)?;
            }
            let reminders = &tracker.config().reminders;
            if !reminders.enabled {
                println!("Reminders are currently disabled.");
                return Ok(());
            }

            let due = upcoming(tracker.modules(), reminders.days_before_due, today);
            if due.is_empty() {
                println!(
                    "No upcoming deadlines in the next {} days.",
                    reminders.days_before_due
                );
                return Ok(());
            }

            println!("Upcoming deadlines ({})", due.len());
            for module in due {
                println!(
                    "  {} | Due: {} | {}",
                    module.id,
                    format_due_date(module.due_date.as_deref()),
                    module.title
                );
            }
        }
        Commands::Export { out } => {
            let report = tracker.report(chrono::Utc::now());
            let json = report.to_json_pretty()?;
            match out {
                None => println!("{}", json),
                Some(path) => {
                    let path = if path.is_dir() {
                        path.join(report.file_name())
                    } else {
                        path
                    };
                    tokio::fs::write(&path, json)
                        .await
                        .with_context(|| format!("writing {}", path.display()))?;
                    info!("Exported {} to {}", course.id, path.display());
                }
            }
        }
        Commands::Roster { search, sort, desc } => {
            let query = RosterQuery {
                search,
                sort,
                direction: if desc { SortDirection::Desc } else { SortDirection::Asc },
            };
            let entries = roster(&catalog.users, &course, &HashMap::new(), &query);

            println!("Students enrolled in {} ({})", course.title, entries.len());
            for entry in entries {
                println!(
                    "  {} | {} | {:>3}% | {:>3}% ({})",
                    entry.user.name,
                    entry.user.email,
                    entry.progress,
                    entry.average_score,
                    Grade::from_score(entry.average_score),
                );
            }
        }
    }

    Ok(())
}

async fn load_config(path: Option<&Path>) -> Result<TrackerConfig> {
    let Some(path) = path else {
        return Ok(TrackerConfig::default());
    };
    let json = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading config {}", path.display()))?;
    let config = TrackerConfig::from_json(&json)
        .with_context(|| format!("parsing config {}", path.display()))?;
    debug!("Loaded config from {}", path.display());
    Ok(config)
}

async fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    let source: Box<dyn CatalogSource> = match path {
        None => Box::new(MemoryCatalog::sample()),
        Some(p) if p.is_file() => Box::new(MemoryCatalog::new(load_catalog_file(p).await?)),
        Some(p) => Box::new(JsonCatalog::open(p).await?),
    };
    Ok(source.load_catalog().await?)
}

fn select_course<'a>(
    catalog: &'a Catalog,
    user: &User,
    requested: Option<&str>,
    config: &TrackerConfig,
) -> Result<&'a Course> {
    if let Some(id) = requested.or(config.course_id.as_ref().map(|c| c.as_str())) {
        return catalog
            .course(id)
            .ok_or_else(|| anyhow!("Unknown course: {}", id));
    }
    match catalog.default_course_for(user) {
        Some(course) => Ok(course),
        None => bail!("{} is not enrolled in any course", user.name),
    }
}
