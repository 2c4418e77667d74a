//! System clipboard access.

use copypasta::{ClipboardContext, ClipboardProvider};
use tracing::debug;
use zeroize::Zeroize;

use crate::cli::Error;

/// Clipboard handle, opened on first use.
pub struct Clipboard {
    ctx: Option<ClipboardContext>,
}

impl Clipboard {
    pub fn lazy() -> Self {
        Self { ctx: None }
    }

    /// Open the system clipboard now.
    pub fn open() -> Result<Self, Error> {
        let mut clipboard = Self::lazy();
        clipboard.context()?;
        Ok(clipboard)
    }

    fn context(&mut self) -> Result<&mut ClipboardContext, Error> {
        if self.ctx.is_none() {
            let ctx = ClipboardContext::new().map_err(|e| Error::Clipboard(e.to_string()))?;
            self.ctx = Some(ctx);
        }
        self.ctx
            .as_mut()
            .ok_or_else(|| Error::Clipboard("not initialized".to_string()))
    }

    pub fn copy(&mut self, text: &str) -> Result<(), Error> {
        let ctx = self.context()?;
        ctx.set_contents(text.to_owned())
            .map_err(|e| Error::Clipboard(e.to_string()))?;
        // Read back so the provider has served the contents, then wipe our copy
        if let Ok(mut retrieved) = ctx.get_contents() {
            retrieved.zeroize();
        }
        debug!(chars = text.chars().count(), "copied to clipboard");
        Ok(())
    }
}
