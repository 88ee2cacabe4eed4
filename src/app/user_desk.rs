use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use crate::remote::UserRemote;

use super::{controller::Controller, options::UiOptions, runtime::App};

pub const DEFAULT_TITLE: &str = "User Management";

/// Interactive user-management screen over one remote collection.
#[derive(Debug)]
pub struct UserDesk {
    remote: Arc<dyn UserRemote>,
    title: Option<String>,
    options: UiOptions,
}

impl UserDesk {
    pub fn new(remote: impl UserRemote + 'static) -> Self {
        Self::from_arc(Arc::new(remote))
    }

    pub fn from_arc(remote: Arc<dyn UserRemote>) -> Self {
        Self {
            remote,
            title: None,
            options: UiOptions::default(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_options(mut self, options: UiOptions) -> Self {
        self.options = options;
        self
    }

    /// Build the controller this desk would run, without touching the terminal.
    pub fn controller(&self) -> Controller {
        Controller::new(Arc::clone(&self.remote), &self.options)
    }

    /// Take over the terminal until the user quits.
    pub async fn run(self) -> Result<()> {
        let controller = self.controller();
        let UserDesk { title, options, .. } = self;
        let title = title.unwrap_or_else(|| DEFAULT_TITLE.to_string());

        info!(
            page_size = controller.page_size(),
            scroll_threshold = controller.scroll_threshold(),
            "starting user desk"
        );
        let mut app = App::new(controller, title, options);
        let result = app.run().await;
        info!(ok = result.is_ok(), "user desk closed");
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::InMemoryRemote;

    #[test]
    fn controller_uses_configured_page_size() {
        let desk = UserDesk::new(InMemoryRemote::seeded(3))
            .with_title("Staff")
            .with_options(UiOptions::default().with_page_size(25));
        let mut controller = desk.controller();
        assert_eq!(controller.page_size(), 25);
        assert!(controller.startup().is_some());
    }
}
