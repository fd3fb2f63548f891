//! Basic example of using the SecureBox unlocker

use securebox_core::{BoxConfig, Lockable, SecureBox, Unlocker};

fn main() {
    // Build a reproducible box
    let config = BoxConfig::new(4, 5).with_seed(2024);
    let mut secure_box = SecureBox::new(&config).expect("non-empty box");

    println!("Locked box ({} cells set):", secure_box.locked_count());
    println!("{}", secure_box);

    // Plan first, without touching the box
    let mut unlocker = Unlocker::new();
    match unlocker.plan(&secure_box) {
        Ok((plan, solution)) => {
            println!("Rank {} of {}", solution.rank, config.rows * config.columns);
            println!("Planned toggles: {:?}\n", plan.toggles());
        }
        Err(err) => println!("No plan: {}", err),
    }

    // Unlock it
    match unlocker.unlock(&mut secure_box) {
        Ok(report) => {
            println!("Opened with {} toggles in {:?}", report.toggle_count(), report.elapsed);
        }
        Err(err) => println!("Still locked: {}", err),
    }
    println!("{}", secure_box);
    println!("Locked: {}", secure_box.is_locked());

    // Not every configuration can be opened
    println!("\n--- A 1x2 box with one set cell ---\n");
    let mut half = SecureBox::from_state(vec![vec![true, false]]).expect("valid state");
    if let Err(err) = unlocker.unlock(&mut half) {
        println!("{}", err);
    }
}
