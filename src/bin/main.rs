#[macro_use]
extern crate log;

use std::process;

use env_logger::Env;

use ghpages::command::Command;
use ghpages::command::publish::{self, Options, Publish};
use ghpages::{Configuration, Publishers, Site};

fn main() {
    let publishers = Publishers::new();

    let options: Options =
        publish::docopt(&publishers)
        .and_then(|d| d.deserialize())
        .unwrap_or_else(|e| e.exit());

    let level = if options.flag_verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    trace!("{:?}", options);

    if !options.cmd_publish {
        docopt::Error::WithProgramUsage(
            Box::new(docopt::Error::Help),
            publish::usage(&publishers)).exit();
    }

    let result =
        Configuration::load(&options.flag_sitepath)
        .and_then(|configuration| {
            let mut command = Publish::new(Site::new(configuration), publishers);

            if let Some(name) = options.flag_publisher {
                command = command.publisher(name);
            }

            command.run()
        });

    if let Err(e) = result {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
