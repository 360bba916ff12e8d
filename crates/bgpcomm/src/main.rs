mod cli;

use std::io::Write;

use clap::Parser;
use eyre::{eyre, WrapErr};

use bgpcomm_core::labels::{export_jsonl, load_label_dir};
use bgpcomm_core::CommunityTree;

use cli::{Command, DumpFormat};

fn main() -> eyre::Result<()> {
    let args = cli::Cli::parse();

    // Logs go to stderr so stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .init();

    let tree = build_registry(&args)?;
    let mut stdout = std::io::stdout().lock();

    match args.command {
        Command::Lookup {
            communities,
            strict,
        } => {
            let unresolved = write_lookups(&tree, &communities, &mut stdout)
                .context("write lookup results")?;
            if strict && unresolved > 0 {
                return Err(eyre!(
                    "{unresolved} of {} communities could not be resolved",
                    communities.len()
                ));
            }
        }
        Command::Dump { format } => {
            write_dump(&tree, format, &mut stdout).context("write registry dump")?;
        }
    }

    Ok(())
}

/// Seed (unless disabled), then apply every label directory in argument
/// order so later directories override earlier ones.
fn build_registry(args: &cli::Cli) -> eyre::Result<CommunityTree> {
    let mut tree = if args.no_well_known {
        CommunityTree::new()
    } else {
        CommunityTree::well_known()
    };

    for dir in &args.labels_dir {
        let sets = load_label_dir(dir)
            .wrap_err_with(|| format!("load label directory {}", dir.display()))?;
        for set in &sets {
            set.apply_to(&mut tree);
        }
        tracing::info!(path = %dir.display(), files = sets.len(), "loaded label directory");
    }

    tracing::debug!(labels = tree.len(), "registry ready");
    Ok(tree)
}

/// Returns how many communities did not resolve.
fn write_lookups(
    tree: &CommunityTree,
    communities: &[String],
    out: &mut impl Write,
) -> std::io::Result<usize> {
    let mut unresolved = 0;
    for community in communities {
        match tree.lookup(community) {
            Ok(label) => writeln!(out, "{community}\t{label}")?,
            Err(err) => {
                tracing::debug!(%err, "no label");
                unresolved += 1;
                writeln!(out, "{community}\t-")?;
            }
        }
    }
    Ok(unresolved)
}

fn write_dump(
    tree: &CommunityTree,
    format: DumpFormat,
    out: &mut impl Write,
) -> eyre::Result<()> {
    match format {
        DumpFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, tree).context("serialize registry")?;
            writeln!(out)?;
        }
        DumpFormat::Jsonl => out.write_all(export_jsonl(&tree.flatten()).as_bytes())?,
    }
    Ok(())
}
