//! rTiffin main entrypoint.

use rtiffin::run;
use rtiffin::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
