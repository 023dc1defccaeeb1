//! ExprimeTonCampus main entrypoint.

use exprimetoncampus::run;
use exprimetoncampus::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
