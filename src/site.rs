//! The site being published.

use std::sync::Arc;

use crate::configuration::Configuration;

/// A Site is what the host generator hands to a publisher:
/// its configuration, and through it the deploy root.
pub struct Site {
    configuration: Arc<Configuration>,
}

impl Site {
    pub fn new(configuration: Configuration) -> Site {
        trace!("deploy root is: {:?}", configuration.deploy_root_path);

        Site {
            configuration: Arc::new(configuration),
        }
    }

    pub fn configuration(&self) -> Arc<Configuration> {
        self.configuration.clone()
    }
}
