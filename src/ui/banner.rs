//! ASCII-art section banner shown above every prompt screen.

use anyhow::{anyhow, Result};
use figlet_rs::FIGfont;

/// Renders section titles with the embedded standard FIGlet font. The font is
/// parsed once at startup and reused for every screen.
pub struct Banner {
    font: FIGfont,
}

impl Banner {
    pub fn new() -> Result<Self> {
        let font = FIGfont::standard()
            .map_err(|message| anyhow!("failed to load the FIGlet font: {message}"))?;
        Ok(Self { font })
    }

    /// Convert `title` to FIGlet output. Characters the font cannot represent
    /// make the conversion fail, in which case we fall back to a plain header
    /// rather than showing nothing above the prompt.
    pub fn render(&self, title: &str) -> String {
        match self.font.convert(title) {
            Some(figure) => figure.to_string(),
            None => format!("== {title} ==\n"),
        }
    }
}
