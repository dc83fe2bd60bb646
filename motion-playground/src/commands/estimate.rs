use anyhow::{Result, bail};
use motion_math::{SpringParameters, estimate_settling_duration};

use crate::{commands::format_duration, output};

pub fn execute(params: SpringParameters, displacement: f32, threshold: f32) -> Result<()> {
    if threshold <= 0.0 {
        bail!("threshold must be positive, got {threshold}");
    }
    params.validate()?;

    let estimate = estimate_settling_duration(params, displacement, threshold);
    output::status(
        "Estimated",
        format!("displacement {displacement}, threshold {threshold}"),
    );
    output::properties([
        ("Damping ratio", params.damping_ratio.to_string()),
        ("Stiffness", params.stiffness.to_string()),
        ("Settles after", format_duration(estimate)),
    ]);
    Ok(())
}
