//! Publishing to GitHub Pages.

use std::path::PathBuf;
use std::process;

use crate::site::Site;
use super::{Generic, Plugin, Publisher};

/// Run from the working directory, with no arguments.
pub static SCRIPT: &'static str = "./publishers/ghpages.sh";

/// Runs the base publisher, then hands off to the deploy script.
///
/// The script's exit status isn't acted upon; only a failure
/// to launch it is an error.
pub struct GhPages<B = Generic> {
    base: B,
    script: PathBuf,
}

impl GhPages<Generic> {
    pub fn new() -> GhPages<Generic> {
        GhPages::with_base(Generic)
    }

    pub fn plugin() -> Plugin {
        Plugin::new("ghpages", "Publish to GitHub Pages", Self::boxed)
    }

    fn boxed() -> Box<dyn Publisher> {
        Box::new(Self::new())
    }
}

impl<B> GhPages<B>
where B: Publisher {
    pub fn with_base(base: B) -> GhPages<B> {
        GhPages {
            base: base,
            script: PathBuf::from(SCRIPT),
        }
    }

    pub fn script<P>(mut self, script: P) -> GhPages<B>
    where P: Into<PathBuf> {
        self.script = script.into();
        self
    }
}

impl<B> Publisher for GhPages<B>
where B: Publisher {
    fn initialize(&mut self, _settings: &toml::Value) {}

    fn publish(&mut self, site: &Site) -> crate::Result {
        self.base.publish(site)?;

        // the script finds the deploy root on its own
        let configuration = site.configuration();
        let root = &configuration.deploy_root_path;

        trace!("publishing {:?} with {:?}", root, self.script);

        let status = process::Command::new(&self.script).status()?;

        debug!("{:?} exited with {}", self.script, status);

        Ok(())
    }
}
