use std::fs;
use std::io;
use std::path::PathBuf;

/// The file read from the site root.
pub static CONFIG_FILE: &'static str = "Site.toml";

static DEFAULT_DEPLOY_ROOT: &'static str = "deploy";

/// The configuration of the site being published.
pub struct Configuration {
    toml: toml::Table,

    /// The site root
    pub root: PathBuf,

    /// The generated site, as handed to the publisher
    pub deploy_root_path: PathBuf,
}

impl Configuration {
    /// Defaults rooted at the working directory, without reading `Site.toml`.
    pub fn new() -> Configuration {
        Configuration::from_table(PathBuf::from("."), toml::Table::new())
    }

    /// Reads `Site.toml` from `root`.
    ///
    /// A missing file is treated as an empty table; a file that
    /// can't be read or parsed is an error.
    pub fn load<P>(root: P) -> crate::Result<Configuration>
    where P: Into<PathBuf> {
        let root = root.into();
        let path = root.join(CONFIG_FILE);

        let table = match fs::read_to_string(&path) {
            Ok(contents) => toml::from_str::<toml::Table>(&contents)?,
            Err(ref e) if e.kind() == io::ErrorKind::NotFound => {
                trace!("no configuration at {:?}", path);
                toml::Table::new()
            },
            Err(e) => return Err(From::from(e)),
        };

        Ok(Configuration::from_table(root, table))
    }

    fn from_table(root: PathBuf, toml: toml::Table) -> Configuration {
        let deploy_root_path =
            root.join(
                toml.get("deploy_root")
                .and_then(toml::Value::as_str)
                .unwrap_or(DEFAULT_DEPLOY_ROOT));

        Configuration {
            toml: toml,
            root: root,
            deploy_root_path: deploy_root_path,
        }
    }

    pub fn deploy_root<P>(mut self, deploy_root: P) -> Configuration
    where P: Into<PathBuf> {
        self.deploy_root_path = self.root.join(deploy_root.into());
        self
    }

    pub fn toml(&self) -> &toml::Table {
        &self.toml
    }

    pub fn toml_mut(&mut self) -> &mut toml::Table {
        &mut self.toml
    }

    /// The `[publisher.*]` tables, keyed by configuration name.
    pub fn publishers(&self) -> Option<&toml::Table> {
        self.toml.get("publisher").and_then(toml::Value::as_table)
    }

    pub fn publisher(&self, name: &str) -> Option<&toml::Value> {
        self.publishers().and_then(|p| p.get(name))
    }
}
