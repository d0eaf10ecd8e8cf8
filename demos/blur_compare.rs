use blur1d::demo_args::*;
use blur1d::timing::*;

fn main() -> anyhow::Result<()> {
    let args = Args::cli_setup("blur_compare")?;

    let (_, signal) = args.initial_signal()?;
    let steps = args.steps()?;
    log::info!(
        "{} samples, {} steps, {} trials per variant",
        signal.len(),
        steps,
        args.trials
    );

    let reports = compare_variants(&signal, steps, args.trials, &args.all_solvers())?;
    println!("{}", format_report(&reports));

    let disagreeing: Vec<String> = reports
        .iter()
        .filter(|r| !r.agrees())
        .map(|r| format!("{} ({:e})", r.label(), r.max_relative_difference))
        .collect();

    args.finish();

    if !disagreeing.is_empty() {
        anyhow::bail!(
            "variants disagree with {}: {}",
            reports[0].label(),
            disagreeing.join(", ")
        );
    }
    Ok(())
}
