//! voxseg CLI entry point.

#![allow(clippy::print_stderr)]

fn main() {
    if let Err(e) = voxseg::run() {
        match &e {
            voxseg::Error::Usage { message } => eprintln!("{message}"),
            _ => eprintln!("error: {e}"),
        }
        std::process::exit(e.exit_code());
    }
}
