//! Page Context
//!
//! State read once on load and shared by every handler.

use std::rc::Rc;

use crate::client::ActionClient;
use crate::config::{PageConfig, RevisionConfig};

pub struct PageContext {
    pub config: PageConfig,
    pub client: ActionClient,
    /// `location.pathname` at load
    pub path: String,
}

/// Handlers and spawned tasks each keep a clone
pub type PageHandle = Rc<PageContext>;

impl PageContext {
    pub fn new(config: PageConfig, path: impl Into<String>) -> Self {
        let client = ActionClient::new(config.csrf_token.clone());
        Self {
            config,
            client,
            path: path.into(),
        }
    }

    pub fn revision(&self) -> &RevisionConfig {
        self.config.revision()
    }
}
