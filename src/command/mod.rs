pub mod publish;

pub trait Command {
    fn run(&mut self) -> crate::Result;
}

pub fn version() -> String {
    format!("ghpages {}", match option_env!("CFG_VERSION") {
        Some(s) => String::from(s),
        None => format!("{}.{}.{}{}",
                        env!("CARGO_PKG_VERSION_MAJOR"),
                        env!("CARGO_PKG_VERSION_MINOR"),
                        env!("CARGO_PKG_VERSION_PATCH"),
                        option_env!("CARGO_PKG_VERSION_PRE").unwrap_or(""))
    })
}
