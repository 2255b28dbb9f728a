//! Publishing behavior.

use std::collections::HashMap;

use crate::error::Error;
use crate::site::Site;

pub mod ghpages;

/// This can be implemented and used to handle
/// the deployment of the generated site.
pub trait Publisher {
    /// Receives the publisher's configuration table.
    fn initialize(&mut self, settings: &toml::Value);

    fn publish(&mut self, site: &Site) -> crate::Result;
}

impl<P: ?Sized> Publisher for Box<P>
where P: Publisher {
    fn initialize(&mut self, settings: &toml::Value) {
        (**self).initialize(settings)
    }

    fn publish(&mut self, site: &Site) -> crate::Result {
        (**self).publish(site)
    }
}

/// The step every publisher runs before its own.
///
/// Refuses to publish a site that hasn't been generated.
#[derive(Copy, Clone, Debug, Default)]
pub struct Generic;

impl Publisher for Generic {
    fn initialize(&mut self, _settings: &toml::Value) {}

    fn publish(&mut self, site: &Site) -> crate::Result {
        let configuration = site.configuration();
        let root = &configuration.deploy_root_path;

        if !root.exists() {
            return Err(From::from(Error::MissingDeployRoot(root.clone())));
        }

        Ok(())
    }
}

pub struct Plugin {
    name: String,
    description: String,
    constructor: fn() -> Box<dyn Publisher>,
}

impl Plugin {
    pub fn new<N, D>(
        name: N,
        description: D,
        constructor: fn() -> Box<dyn Publisher>
    ) -> Plugin
    where N: Into<String>, D: Into<String> {
        Plugin {
            name: name.into(),
            description: description.into(),
            constructor: constructor,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Publisher types, keyed by the `type` used in `[publisher.*]` tables.
pub struct Publishers {
    plugins: HashMap<String, Plugin>,
}

impl Publishers {
    pub fn new() -> Publishers {
        Publishers::empty().plugin(ghpages::GhPages::plugin())
    }

    pub fn empty() -> Publishers {
        Publishers {
            plugins: HashMap::new(),
        }
    }

    pub fn plugin(mut self, plugin: Plugin) -> Publishers {
        self.plugins.insert(plugin.name.clone(), plugin);
        self
    }

    /// Registered types and their descriptions, sorted by type.
    pub fn describe(&self) -> Vec<(&str, &str)> {
        let mut plugs =
            self.plugins.values()
            .map(|p| (p.name(), p.description()))
            .collect::<Vec<_>>();

        plugs.sort_by(|a, b| a.0.cmp(b.0));
        plugs
    }

    /// Constructs and initializes the publisher configured under `name`.
    ///
    /// Without a name, or with one that isn't configured, the first
    /// configured publisher is used instead.
    pub fn load(&self, site: &Site, name: Option<&str>) -> crate::Result<Box<dyn Publisher>> {
        let configuration = site.configuration();

        let configured = name.and_then(|n| configuration.publisher(n).map(|s| (n, s)));

        let (name, settings) = match configured {
            Some(found) => found,
            None => {
                let first =
                    configuration.publishers()
                    .and_then(|p| p.iter().next());

                match first {
                    Some((fallback, settings)) => {
                        warn!("no publisher `{}` is configured, using: {}",
                              name.unwrap_or("<default>"), fallback);
                        (fallback.as_str(), settings)
                    },
                    None => {
                        return Err(From::from(Error::NoPublisher(name.map(String::from))));
                    },
                }
            },
        };

        let kind =
            settings.get("type")
            .and_then(toml::Value::as_str)
            .ok_or_else(|| Error::MissingType(String::from(name)))?;

        let plugin =
            self.plugins.get(kind)
            .ok_or_else(|| Error::UnknownType(String::from(kind)))?;

        debug!("loading `{}` publisher of type {}", name, kind);

        let mut publisher = (plugin.constructor)();
        publisher.initialize(settings);

        Ok(publisher)
    }
}
