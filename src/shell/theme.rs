use async_trait::async_trait;
use px_core::{ports::ThemeApplierPort, preferences::ThemeMode};

/// Reports theme changes on the console.
#[derive(Debug, Default)]
pub struct ConsoleThemeApplier;

#[async_trait]
impl ThemeApplierPort for ConsoleThemeApplier {
    async fn apply(&self, theme: ThemeMode) -> anyhow::Result<()> {
        println!("theme: {theme}");
        Ok(())
    }
}
