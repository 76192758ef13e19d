use std::process::ExitCode;

use orderstat::{deterministic_select, Quickselect, QuickselectConfig};

fn main() -> ExitCode {
    env_logger::init();

    let sample = [3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5];
    let k = 5;

    println!("Sample: {:?}", sample);
    println!("Finding the k-th smallest element for k = {}", k);

    let deterministic = match deterministic_select(&sample, k) {
        Ok(value) => value,
        Err(e) => {
            eprintln!("median of medians failed: {}", e);
            return ExitCode::FAILURE;
        }
    };
    println!("Median of medians: {}", deterministic);

    let mut quickselect = Quickselect::new(QuickselectConfig::default().with_seed(0x5e1ec7));
    let randomized = match quickselect.select(&sample, k) {
        Ok(Some(value)) => value,
        Ok(None) => {
            eprintln!("quickselect returned no result");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            eprintln!("quickselect failed: {}", e);
            return ExitCode::FAILURE;
        }
    };
    println!("Quickselect:       {}", randomized);

    let mut sorted = sample;
    sorted.sort_unstable();
    println!("Sorted reference:  {}", sorted[k]);

    if deterministic != sorted[k] || randomized != sorted[k] {
        eprintln!("selectors disagree with the sorted reference");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
