//! Minimal `$variable` substitution templates.
//!
//! Placeholders are `$name` or `${name}` with `$$` as a literal dollar.
//! Rendering fails on an unknown variable rather than silently emitting
//! a hole in the page.

use std::collections::HashMap;

use crate::RenderError;

/// A parsed page or card template.
#[derive(Clone, Debug)]
pub struct Template {
    text: String,
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

impl Template {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Substitute every placeholder from the context.
    pub fn render(&self, context: &HashMap<&str, String>) -> Result<String, RenderError> {
        let mut out = String::with_capacity(self.text.len());
        let mut rest = self.text.as_str();

        while let Some(pos) = rest.find('$') {
            out.push_str(&rest[..pos]);
            let after = &rest[pos + 1..];

            if let Some(stripped) = after.strip_prefix('$') {
                out.push('$');
                rest = stripped;
                continue;
            }

            let (name, remainder) = if let Some(braced) = after.strip_prefix('{') {
                let end = braced
                    .find('}')
                    .ok_or(RenderError::DanglingSubstitution(self.offset_of(rest, pos)))?;
                (&braced[..end], &braced[end + 1..])
            } else {
                let end = after
                    .find(|c: char| !is_ident_char(c))
                    .unwrap_or(after.len());
                (&after[..end], &after[end..])
            };

            if name.is_empty() || name.starts_with(|c: char| c.is_ascii_digit()) {
                return Err(RenderError::DanglingSubstitution(self.offset_of(rest, pos)));
            }

            let value = context
                .get(name)
                .ok_or_else(|| RenderError::MissingVariable(name.to_string()))?;
            out.push_str(value);
            rest = remainder;
        }

        out.push_str(rest);
        Ok(out)
    }

    fn offset_of(&self, rest: &str, pos: usize) -> usize {
        self.text.len() - rest.len() + pos
    }
}
