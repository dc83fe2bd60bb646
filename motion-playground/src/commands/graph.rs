use anyhow::Result;
use motion_math::{SpringParameters, graph::ResponseGraph};

use crate::output;

const CURVE: char = '*';
const GUIDE: char = '.';
const TARGET: char = '-';
const OVERSHOOT: char = '~';

pub fn execute(params: SpringParameters, width: u16, height: u16) -> Result<()> {
    if let Err(err) = params.validate() {
        output::warn(format!("{err}; plotting anyway"));
    }
    let graph = ResponseGraph::new(f32::from(width), f32::from(height))?;
    let model = graph.sample(params)?;

    output::status(
        "Plotting",
        format!(
            "damping ratio {}, stiffness {} ({:.3}s per column)",
            params.damping_ratio,
            params.stiffness,
            graph.time_at(1.0),
        ),
    );

    let rows = usize::from(height) + 1;
    let columns = usize::from(width) + 1;
    let mut canvas = vec![vec![' '; columns]; rows];
    let row_of = |y: f32| -> Option<usize> {
        let row = y.round();
        (row >= 0.0 && row < rows as f32).then_some(row as usize)
    };

    for (y, mark) in [
        (model.start_guide, GUIDE),
        (model.ceiling_guide, GUIDE),
        (model.target_guide, TARGET),
        (model.overshoot_guide, OVERSHOOT),
    ] {
        if let Some(row) = row_of(y) {
            canvas[row].iter_mut().for_each(|cell| *cell = mark);
        }
    }
    for point in &model.curve {
        if let Some(row) = row_of(point.y) {
            canvas[row][point.x as usize] = CURVE;
        }
    }

    for line in canvas {
        println!("{}", line.into_iter().collect::<String>().trim_end());
    }
    println!("{}", model.label);
    Ok(())
}
