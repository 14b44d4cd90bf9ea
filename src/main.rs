//! punch main entrypoint.

use punch::run;
use punch::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(e);
        std::process::exit(1);
    }
}
