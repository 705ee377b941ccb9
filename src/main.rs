//! rTradeoff main entrypoint.

use rtradeoff::run;
use rtradeoff::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
