use docopt::Docopt;
use serde::Deserialize;

use crate::command::{self, Command};
use crate::publisher::Publishers;
use crate::site::Site;

#[derive(Deserialize, Debug)]
pub struct Options {
    pub cmd_publish: bool,
    pub flag_sitepath: String,
    pub flag_publisher: Option<String>,
    pub flag_verbose: bool,
}

static USAGE: &'static str = "
Usage:
    ghpages publish [options]
    ghpages [options]

Options:
    -h, --help                  Print this message
    -V, --version               Print version info
    -s PATH, --sitepath PATH    Site root containing Site.toml [default: .]
    -p NAME, --publisher NAME   Publisher configuration to use
    -v, --verbose               Use verbose output

Publisher types:
";

/// The usage text, listing the registered publisher types.
pub fn usage(publishers: &Publishers) -> String {
    let mut usage = String::from(USAGE);

    for (name, description) in publishers.describe() {
        usage.push_str(&format!("    {:<12}{}\n", name, description));
    }

    usage
}

pub fn docopt(publishers: &Publishers) -> Result<Docopt, docopt::Error> {
    Docopt::new(usage(publishers))
        .map(|d| d.help(true).version(Some(command::version())))
}

pub struct Publish {
    site: Site,
    publishers: Publishers,
    publisher: Option<String>,
}

impl Publish {
    pub fn new(site: Site, publishers: Publishers) -> Publish {
        Publish {
            site: site,
            publishers: publishers,
            publisher: None,
        }
    }

    pub fn publisher<N>(mut self, name: N) -> Publish
    where N: Into<String> {
        self.publisher = Some(name.into());
        self
    }
}

impl Command for Publish {
    fn run(&mut self) -> crate::Result {
        let mut publisher = self.publishers.load(&self.site, self.publisher.as_deref())?;

        info!("publishing {:?}", self.site.configuration().deploy_root_path);

        publisher.publish(&self.site)
    }
}

#[cfg(test)]
mod test {
    use crate::command::Command;
    use crate::configuration::Configuration;
    use crate::error::Error;
    use crate::publisher::Publishers;
    use crate::publisher::test::Recorder;
    use crate::site::Site;
    use super::{docopt, usage, Options, Publish};

    fn site(config: &str) -> Site {
        let table: toml::Table = toml::from_str(config).unwrap();
        let mut configuration = Configuration::new();
        for (key, value) in table {
            configuration.toml_mut().insert(key, value);
        }
        Site::new(configuration)
    }

    fn parse(argv: &[&str]) -> Options {
        docopt(&Publishers::new()).unwrap()
            .argv(argv.iter().cloned())
            .deserialize()
            .unwrap()
    }

    #[test]
    fn parse_publish() {
        let options = parse(&["ghpages", "publish", "-s", "/tmp/site", "-p", "github", "-v"]);

        assert!(options.cmd_publish);
        assert_eq!(options.flag_sitepath, "/tmp/site");
        assert_eq!(options.flag_publisher.as_deref(), Some("github"));
        assert!(options.flag_verbose);
    }

    #[test]
    fn parse_defaults() {
        let options = parse(&["ghpages", "publish"]);

        assert!(options.cmd_publish);
        assert_eq!(options.flag_sitepath, ".");
        assert!(options.flag_publisher.is_none());
        assert!(!options.flag_verbose);

        assert!(!parse(&["ghpages"]).cmd_publish);
    }

    #[test]
    fn usage_lists_types() {
        assert!(usage(&Publishers::new()).ends_with("    ghpages     Publish to GitHub Pages\n"));
    }

    #[test]
    fn run_selected_publisher() {
        let site = site(r#"
[publisher.default]
type = "recorder"
label = "default"

[publisher.github]
type = "recorder"
label = "github"
"#);

        let publishers = Publishers::empty().plugin(Recorder::plugin());

        Publish::new(site, publishers).publisher("github").run().unwrap();

        assert_eq!(Recorder::events(), vec!["new", "initialize github", "publish"]);
    }

    #[test]
    fn run_without_publisher() {
        let publishers = Publishers::empty().plugin(Recorder::plugin());

        let error = Publish::new(site(""), publishers).run().unwrap_err();

        match error.downcast_ref::<Error>() {
            Some(&Error::NoPublisher(None)) => (),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
