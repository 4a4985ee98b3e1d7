// Wed Jan 21 2026 - Alex

use embedding_bounds_check::ui::{self, cli};

fn main() {
    if let Err(e) = cli::run() {
        ui::print_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}
