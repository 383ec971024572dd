//! Styling and classification of package names
//!
//! Decides, per name, whether the entry is shown at all and how it is
//! rendered: installed packages get the `✓` marker and an accent style,
//! already-looked-up packages are dimmed (or hidden on request), everything
//! else prints bare.

use console::Style;

use super::layout::visible_width;

/// Marker prefixed to installed package names
pub const INSTALLED_MARKER: char = '✓';

/// Glyph replacing the last character of a truncated name
const ELLIPSIS: char = '…';

/// Membership of a name in the installed and looked-up sets
#[derive(Debug, Clone, Copy, Default)]
pub struct Membership {
    pub installed: bool,
    pub looked_up: bool,
}

/// Styling class of a name, installed taking precedence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Installed,
    LookedUp,
    Plain,
}

impl Membership {
    pub fn classification(self) -> Classification {
        if self.installed {
            Classification::Installed
        } else if self.looked_up {
            Classification::LookedUp
        } else {
            Classification::Plain
        }
    }
}

/// Styling configuration, derived from CLI flags
#[derive(Debug, Clone)]
pub struct StyleOptions {
    pub dim_looked_up: bool,
    pub hide_looked_up: bool,
    pub plain: bool,
    pub truncate_chars: usize,
}

/// A display-ready entry: text with optional escape sequences, its visible
/// length, and whether it is suppressed from the report entirely
#[derive(Debug, Clone)]
pub struct StyledEntry {
    pub display: String,
    pub visible_len: usize,
    pub suppressed: bool,
}

/// Truncate `name` to `limit` characters, ending in `…` when cut
pub fn truncate_name(name: &str, limit: usize) -> String {
    if name.chars().count() <= limit {
        return name.to_string();
    }
    let mut truncated: String = name.chars().take(limit.saturating_sub(1)).collect();
    truncated.push(ELLIPSIS);
    truncated
}

/// Style one package name according to its membership.
///
/// The hide check runs before everything else: a looked-up package stays
/// hidden even when it is also installed.
pub fn style_name(name: &str, membership: Membership, opts: &StyleOptions) -> StyledEntry {
    if opts.hide_looked_up && membership.looked_up {
        return StyledEntry {
            display: String::new(),
            visible_len: 0,
            suppressed: true,
        };
    }

    let name = truncate_name(name, opts.truncate_chars);

    let display = if opts.plain {
        name
    } else {
        match membership.classification() {
            Classification::Installed => Style::new()
                .cyan()
                .bold()
                .italic()
                .apply_to(format!("{INSTALLED_MARKER} {name}"))
                .to_string(),
            Classification::LookedUp if opts.dim_looked_up => {
                Style::new().dim().apply_to(&name).to_string()
            }
            _ => name,
        }
    };

    StyledEntry {
        visible_len: visible_width(&display),
        display,
        suppressed: false,
    }
}
