//! gymkeeper main entrypoint.

use gymkeeper::run;
use gymkeeper::ui::messages::report;

fn main() {
    println!();
    if let Err(e) = run() {
        report(&e);
        std::process::exit(1);
    }
}
