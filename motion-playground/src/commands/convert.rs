use anyhow::Result;
use motion_math::{SpringParameters, numeric::round};

use crate::{commands::format_duration, output};

pub fn from_design(bounce: f32, duration: f32) -> Result<()> {
    let params = SpringParameters::from_design(bounce, duration)?;
    output::status("Converted", format!("bounce {bounce}, duration {duration}s"));
    print_parameters(params)
}

pub fn from_physics(params: SpringParameters) -> Result<()> {
    params.validate()?;
    output::status(
        "Converted",
        format!(
            "damping ratio {}, stiffness {}",
            params.damping_ratio, params.stiffness
        ),
    );
    print_parameters(params)
}

fn print_parameters(params: SpringParameters) -> Result<()> {
    let overshoot = params.response().maximum_overshoot()?;
    output::properties([
        ("Damping ratio", round(params.damping_ratio, 3).to_string()),
        ("Stiffness", round(params.stiffness, 3).to_string()),
        ("Bounce", round(params.bounce(), 3).to_string()),
        ("Duration", format!("{}s", round(params.duration()?, 3))),
        ("Max", format!("{:.1} %", round(overshoot * 100.0, 1))),
        ("Estimated duration", format_duration(params.estimated_duration())),
    ]);
    Ok(())
}
