use std::num::NonZero;

use log::info;
use wirelight::builder::{Builder, SquarePuzzleBuilder};
use wirelight::Session;

fn main() {
    env_logger::init();

    let (width, height) = (NonZero::new(12).unwrap(), NonZero::new(8).unwrap());
    let mut puzzle = match SquarePuzzleBuilder::with_dims((width, height)).seed(13).build() {
        Ok(puzzle) => puzzle,
        Err(reasons) => {
            reasons.iter().for_each(|reason| eprintln!("{}", reason));
            std::process::exit(1);
        }
    };

    println!("{}", puzzle);
    info!("{} of {} tiles lit before solving", puzzle.lit_count(), width.get() * height.get());

    let mut session = Session::new();
    for location in puzzle.board().locations() {
        for _ in 0..puzzle.rotations_needed(location).unwrap_or_default() {
            puzzle.rotate(location);
            session.record_click();
        }
        session.tick(&puzzle);
    }

    println!("{}", puzzle);
    match session.summary(&puzzle) {
        Some(summary) => println!("solved in {} clicks over {} ticks", summary.clicks, summary.ticks),
        None => println!("not solved; {} tiles lit", puzzle.lit_count()),
    }
}
