//! Terminal rendering for menu output
//!
//! Rich mode colors banner lines and styles prompts with termimad; every other
//! line, including report rows, is written unchanged so cell text is never
//! read as markup. Plain mode writes all text unchanged.

use std::io::Write;

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.bold.set_fg(Color::Yellow);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Write text to `out`, line by line in rich mode
    pub fn render<W: Write>(&self, out: &mut W, text: &str) -> Result<()> {
        if self.rich_enabled {
            for line in text.split_inclusive('\n') {
                let (content, newline) = match line.strip_suffix('\n') {
                    Some(content) => (content, "\n"),
                    None => (line, ""),
                };
                if content.starts_with("---") {
                    write!(out, "\x1b[34m{content}\x1b[0m{newline}")?;
                } else if newline.is_empty() && content.ends_with(": ") {
                    // Prompt text is ours and holds no markup characters.
                    let label = content.trim_end();
                    write!(out, "{} ", self.skin.inline(&format!("**{label}**")))?;
                } else {
                    write!(out, "{content}{newline}")?;
                }
            }
        } else {
            write!(out, "{text}")?;
        }
        out.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
