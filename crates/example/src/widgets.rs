//! The demo banner widgets.
//!
//! Each banner prepends a greeting container to its host element once its
//! ready point has passed, which is the markup the coordinator removes again
//! on teardown.

use async_trait::async_trait;
use trellis_widget::{BindingState, Host, Widget, WidgetResult};

/// Banner widget bound as `widgets/a`.
#[derive(Debug, Default)]
pub struct BannerA {
    state: BindingState,
}

#[async_trait]
impl Widget for BannerA {
    fn state(&self) -> &BindingState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut BindingState {
        &mut self.state
    }

    async fn after_ready(&mut self, host: Host<'_>) -> WidgetResult {
        host.insert_content("div", "Hi from banner A");
        Ok(())
    }
}

/// Banner widget bound as `widgets/b`.
#[derive(Debug, Default)]
pub struct BannerB {
    state: BindingState,
}

#[async_trait]
impl Widget for BannerB {
    fn state(&self) -> &BindingState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut BindingState {
        &mut self.state
    }

    async fn after_ready(&mut self, host: Host<'_>) -> WidgetResult {
        host.insert_content("div", "Hi from banner B");
        Ok(())
    }
}

/// Banner widget bound as `widgets/c`.
#[derive(Debug, Default)]
pub struct BannerC {
    state: BindingState,
}

#[async_trait]
impl Widget for BannerC {
    fn state(&self) -> &BindingState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut BindingState {
        &mut self.state
    }

    async fn after_ready(&mut self, host: Host<'_>) -> WidgetResult {
        host.insert_content("div", "Hi from banner C");
        Ok(())
    }
}
