use ansi_term::Colour;
use std::fmt;

pub fn info<T: fmt::Display>(msg: T) {
    println!("{} {}", Colour::Blue.bold().paint("INFO:"), msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{} {}", Colour::Green.bold().paint("OK:"), msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{} {}", Colour::Yellow.bold().paint("WARNING:"), msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("\n{} {}\n", Colour::Red.bold().paint("ERROR:"), msg);
}

/// Event banner, e.g. `PUNCH IN AT 09:00, Jan 05, 2024`
pub fn event<T: fmt::Display>(msg: T) {
    println!("\n{}\n", Colour::Cyan.bold().paint(msg.to_string()));
}
