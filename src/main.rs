//! CLI driver for the input-output table generator.

use anyhow::{ensure, Context, Result};
use clap::Parser;
use env_logger::Env;
use indicatif::{ProgressBar, ProgressStyle};
use iotable_gen::config::Config;
use iotable_gen::generator::{IoTableGenerator, Stage};
use iotable_gen::writer::{table_path, write_table};
use log::info;
use rand::{rngs::SmallRng, SeedableRng};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::time::Instant;

fn stage_bar(visible: bool, total: usize) -> ProgressBar {
    let bar = if visible {
        ProgressBar::new(total as u64)
    } else {
        ProgressBar::hidden()
    };
    bar.set_style(
        ProgressStyle::with_template("| {wide_bar} | {human_pos} / {human_len} {percent} %")
            .unwrap()
            .progress_chars("=>-"),
    );
    bar
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let config = Config::parse();
    let options = config.generator_options.clone();
    ensure!(options.num_products >= 1, "NUM_PRODUCTS must be at least 1");
    ensure!(
        options.density >= 0.0,
        "--density must be a non-negative number"
    );

    let rng = match options.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    let generator = IoTableGenerator::new(options.clone(), rng);

    let start = Instant::now();
    let mut current: Option<(Stage, ProgressBar)> = None;
    let rows = generator.generate(|stage, index, total| {
        if current.as_ref().map(|(s, _)| *s) != Some(stage) {
            if let Some((_, bar)) = current.take() {
                bar.finish();
            }
            info!("loading {}...", stage.label());
            current = Some((stage, stage_bar(config.progress, total)));
        }
        current.as_ref().unwrap().1.set_position(index as u64 + 1);
    });
    if let Some((_, bar)) = current.take() {
        bar.finish();
    }

    let path = table_path(&config.output_dir, options.num_products);
    let file =
        File::create(&path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut sink = BufWriter::new(file);
    write_table(&rows, &mut sink)
        .and_then(|()| sink.flush())
        .with_context(|| format!("failed to write {}", path.display()))?;

    info!(
        "wrote {} rows to {} in {:.2?}",
        rows.len(),
        path.display(),
        start.elapsed()
    );
    Ok(())
}
