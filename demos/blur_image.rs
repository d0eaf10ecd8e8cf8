use anyhow::Context;
use blur1d::csv::write_csv_1d;
use blur1d::demo_args::*;
use blur1d::image::Image1D;

fn main() -> anyhow::Result<()> {
    let args = Args::cli_setup("blur_image")?;
    let (time_domain, signal) = args.initial_signal()?;
    let steps = args.steps()?;
    let solver = args.solver();

    // Spread the requested steps over the image lines
    let lines = args.lines.max(2);
    let steps_per_line = (steps / (lines - 1)).max(1);
    log::info!(
        "{} lines, {} steps per line, {:?}",
        lines,
        steps_per_line,
        solver
    );

    let history = solver.history(&signal, steps_per_line, lines)?;
    let output = solver.apply(&signal, steps)?;

    match (args.output_path("blur.png"), args.output_path("blur.csv")) {
        (Some(image_path), Some(csv_path)) => {
            Image1D::from_history(&history)
                .write(&image_path)
                .with_context(|| format!("writing {image_path:?}"))?;
            write_csv_1d(&csv_path, &time_domain, &signal, &output)
                .with_context(|| format!("writing {csv_path:?}"))?;
        }
        _ => log::warn!("No --output-dir, nothing written"),
    }

    args.finish();
    Ok(())
}
