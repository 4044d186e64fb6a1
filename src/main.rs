use anyhow::{Context, bail};
use clap::{Parser, Subcommand, ValueEnum};
use regex::Regex;
use serde_json::Value;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};
use treepath::tree::from_json;
use treepath::{Catalog, Node, PathIndex, Transform, check, project, project_all, render, resolve};

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "treepath")]
#[command(about = "Dotted-path lookup and projection over JSON trees", long_about = None)]
struct Cli {
    /// Verbosity: -d info, -dd debug, -ddd trace.
    #[arg(short = 'd', long = "debug", action = clap::ArgAction::Count, global = true)]
    debug: u8,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every dotted path that reaches a leaf.
    Paths {
        #[arg(long)]
        tree: String,

        /// Treat the file as a catalog and list this locale.
        #[arg(long)]
        locale: Option<String>,

        /// Only print paths matching this regex.
        #[arg(long)]
        matching: Option<String>,
    },

    /// Print the value at a dotted path.
    Get {
        #[arg(long)]
        tree: String,

        #[arg(long)]
        path: String,

        #[arg(long)]
        locale: Option<String>,

        /// Printed instead of failing when the path does not resolve.
        #[arg(long)]
        default: Option<String>,
    },

    /// Apply projections in order and print the resulting JSON.
    Project {
        #[arg(long)]
        tree: String,

        #[arg(long = "transform", value_enum, required = true)]
        transforms: Vec<TransformArg>,

        /// Trees merged by `flatten`, in order.
        #[arg(long = "part")]
        parts: Vec<String>,

        #[arg(short = 'o', long)]
        out: Option<String>,
    },

    /// Check an instance against a shape.
    Check {
        #[arg(long)]
        shape: String,

        #[arg(long)]
        instance: String,

        /// Mark the whole shape optional before checking.
        #[arg(long)]
        optional: bool,
    },

    /// Print a one-line-per-leaf outline of a tree.
    Outline {
        #[arg(long)]
        tree: String,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum TransformArg {
    StripNullish,
    MarkAllOptional,
    Flatten,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    match cli.cmd {
        Commands::Paths {
            tree,
            locale,
            matching,
        } => {
            let root = load_tree(&tree, locale.as_deref())?;
            let index = PathIndex::build(&root).with_context(|| format!("index {}", tree))?;
            match matching {
                Some(pattern) => {
                    let re = Regex::new(&pattern)
                        .with_context(|| format!("bad --matching pattern {:?}", pattern))?;
                    for p in index.matching(&re) {
                        println!("{}", p);
                    }
                }
                None => {
                    for p in index.iter() {
                        println!("{}", p);
                    }
                }
            }
        }

        Commands::Get {
            tree,
            path,
            locale,
            default,
        } => {
            let root = load_tree(&tree, locale.as_deref())?;
            match (resolve(&root, &path), default) {
                (Ok(value), _) => println!("{}", value),
                (Err(miss), Some(fallback)) => {
                    tracing::info!("{}; using default", miss);
                    println!("{}", fallback);
                }
                (Err(miss), None) => return Err(miss).with_context(|| format!("lookup in {}", tree)),
            }
        }

        Commands::Project {
            tree,
            transforms,
            parts,
            out,
        } => {
            let root = load_tree(&tree, None)?;
            let mut loaded = Vec::new();
            for part in &parts {
                loaded.push(load_tree(part, None)?);
            }
            if !parts.is_empty() && !transforms.contains(&TransformArg::Flatten) {
                bail!("--part is only used by --transform flatten");
            }

            let transforms: Vec<Transform> = transforms
                .into_iter()
                .map(|t| match t {
                    TransformArg::StripNullish => Transform::StripNullish,
                    TransformArg::MarkAllOptional => Transform::MarkAllOptional,
                    TransformArg::Flatten => Transform::Flatten(loaded.clone()),
                })
                .collect();

            let projected = project_all(&root, &transforms)
                .with_context(|| format!("project {}", tree))?;
            let json = render::render_json(&projected)?;
            match out {
                Some(out) => {
                    std::fs::write(&out, json).with_context(|| format!("write {}", out))?;
                    println!("Wrote {}", out);
                }
                None => println!("{}", json),
            }
        }

        Commands::Check {
            shape,
            instance,
            optional,
        } => {
            let mut shape_tree = load_tree(&shape, None)?;
            if optional {
                shape_tree = project(&shape_tree, &Transform::MarkAllOptional)?;
            }
            let instance_tree = load_tree(&instance, None)?;

            let report = check(&shape_tree, &instance_tree);
            println!("{}", serde_json::to_string_pretty(&report)?);
            if !report.is_ok() {
                bail!("{} does not conform to {}", instance, shape);
            }
        }

        Commands::Outline { tree } => {
            let root = load_tree(&tree, None)?;
            print!("{}", render::render_outline(&root));
        }
    }

    Ok(())
}

/// Read a JSON file as a tree. With `locale`, the file is a catalog keyed by
/// locale name and that locale's tree is returned.
fn load_tree(path: &str, locale: Option<&str>) -> Result<Node> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read {}", path))?;
    let value: Value = serde_json::from_str(&text).with_context(|| format!("parse {}", path))?;

    match locale {
        Some(locale) => {
            let catalog =
                Catalog::from_json(&value).with_context(|| format!("load catalog {}", path))?;
            let messages = catalog.messages(locale)?;
            Ok(messages.tree().clone())
        }
        None => from_json(&value).with_context(|| format!("load tree {}", path)),
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    // RUST_LOG, when set, refines the level chosen by -d.
    let env_filter = EnvFilter::builder()
        .with_default_directive(filter.into())
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(env_filter);

    tracing_subscriber::registry().with(fmt_layer).init();
}
