//! PlanningPro main entrypoint.

use planningpro::run;
use planningpro::ui::messages::error;

fn main() {
    println!();
    if let Err(e) = run() {
        error(e);
        std::process::exit(1);
    }
}
