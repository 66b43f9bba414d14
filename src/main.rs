use std::{fs, time::Instant};

use log::info;

use walklist_core::{
    Locatable, PlannerOptions, Result, Route, format_distance, format_duration, io::input,
    logging, select_voters, sequence,
};

fn main() -> Result<()> {
    let now = Instant::now();
    let options = PlannerOptions::from_args()?;
    logging::init_logger(&options)?;

    info!("options: {options}");

    let voters = input::read_voters(&options)?;
    info!("input: voters={}", voters.len());

    let selected = match options.boundary_path() {
        Some(path) => {
            let boundary = input::read_boundary(path)?;
            select_voters(voters, &boundary, &options.filter())
        }
        None => {
            let filter = options.filter();
            voters.into_iter().filter(|v| filter.matches(v)).collect()
        }
    };

    let route = Route::new(sequence(selected, options.start));
    let metrics = route.metrics();

    let mut out = String::new();
    for (idx, voter) in route.stops.iter().enumerate() {
        let place = match voter.location().point() {
            Some(point) => point.to_string(),
            None => "unlocated".to_string(),
        };
        out.push_str(&format!(
            "{}\t{}\t{}\t{place}\n",
            idx + 1,
            voter.display_name(),
            voter.street_address()
        ));
    }

    match options.output_path() {
        Some(path) => fs::write(path, out)?,
        None => print!("{out}"),
    }

    info!(
        "output: stops={} walk={} est={} time={:.2}s",
        metrics.stops,
        format_distance(metrics.total_m),
        format_duration(metrics.estimated_minutes),
        now.elapsed().as_secs_f32()
    );

    Ok(())
}
