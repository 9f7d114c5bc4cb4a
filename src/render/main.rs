use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use arcboard::read_dataset;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding the dataset JSON files
    #[arg(short, long, default_value = "data")]
    data_dir: String,

    /// Dataset prefix, e.g. "arc-agi_training"
    #[arg(short, long)]
    prefix: String,

    /// Directory to write the PNG figures to
    #[arg(short, long, default_value = "plots")]
    out_dir: PathBuf,

    /// Include output panels for test pairs
    #[arg(long)]
    with_test_outputs: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let Some(riddles) = read_dataset(&args.data_dir, &args.prefix)? else {
        anyhow::bail!(
            "dataset {} not found under {}",
            args.prefix,
            args.data_dir
        );
    };
    println!("Loaded {} riddles from dataset: {}", riddles.len(), args.prefix);

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;

    for riddle in &riddles {
        let id = riddle.riddle_id.as_deref().unwrap_or("unnamed");
        let figure = riddle.render_plot(args.with_test_outputs);
        let path = args.out_dir.join(format!("{id}.png"));
        figure
            .image
            .save(&path)
            .with_context(|| format!("writing {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    println!("Rendered {} figures", riddles.len());
    Ok(())
}
