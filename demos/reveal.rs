use grid_path_editor::{Coord, Editor, SolveOutcome, Tick};
use std::thread;

// In this example a path is found on a 6x8 grid with shape
//  ________
// |S       |
// |######  |
// |     #  |
// |  #  #  |
// |  #     |
// |  #    E|
//  ________
// where
// - # marks a wall
// - S marks the start
// - E marks the end
//
// and then revealed one cell per tick, the way a UI would animate it.

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut editor = Editor::new(6, 8)?;
    editor.paint_walls()?;
    let walls = (0..6)
        .map(|col| (1, col))
        .chain([(2, 5), (3, 5), (3, 2), (4, 2), (5, 2)]);
    for (row, col) in walls {
        editor.click(Coord::new(row, col))?;
    }
    println!("{}", editor.grid());

    match editor.solve()? {
        SolveOutcome::Found { path } => println!("Path of {} cells:", path.len()),
        outcome @ SolveOutcome::NoPath => {
            println!("{}", outcome.notice().unwrap_or_default());
            return Ok(());
        }
    }
    loop {
        thread::sleep(editor.reveal_delay());
        match editor.tick() {
            Tick::Step(step) => println!("{:?}\n{}", step, editor.grid()),
            Tick::Finished | Tick::Idle => break,
        }
    }
    println!("Done, back to {:?}", editor.mode());
    Ok(())
}
