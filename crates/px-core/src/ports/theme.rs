use anyhow::Result;
use async_trait::async_trait;

use crate::preferences::ThemeMode;

/// Applies the color scheme to the rendering layer.
#[async_trait]
pub trait ThemeApplierPort: Send + Sync {
    async fn apply(&self, theme: ThemeMode) -> Result<()>;
}
