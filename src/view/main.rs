use anyhow::Result;
use clap::Parser;

use arcboard::palette::PAIR_GAP;
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

    /// Show only the riddle with this id
    #[arg(short, long)]
    riddle: Option<String>,

    /// Color each cell with the puzzle palette
    #[arg(long)]
    colored: bool,

    /// Hide test outputs
    #[arg(long)]
    hide_outputs: bool,
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

    for riddle in &riddles {
        let id = riddle.riddle_id.as_deref().unwrap_or("<unnamed>");
        if let Some(wanted) = &args.riddle {
            if id != wanted {
                continue;
            }
        }
        println!("\n=== {id} ===");
        println!("{}", riddle.render(args.colored, !args.hide_outputs));
        print!("{PAIR_GAP}");
    }

    Ok(())
}
