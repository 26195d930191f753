//! Markdown service: parse a document into a heading hierarchy.

use std::path::Path;

use pulldown_cmark::{Event, Parser as MdParser, Tag, TagEnd};

use crate::error::AppError;
use crate::models::{MarkdownSection, MarkdownTree};

/// Stateless markdown parser.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownService;

crate::from_context!(MarkdownService);

impl MarkdownService {
    /// Read and parse a markdown file.
    pub fn parse_file(&self, path: &Path) -> Result<MarkdownTree, AppError> {
        let text = std::fs::read_to_string(path).map_err(|e| AppError::io(path, e))?;
        Ok(self.parse(&text))
    }

    /// Parse markdown text into sections nested by heading level.
    ///
    /// Text before the first heading is dropped. A heading closes every open
    /// section of the same or deeper level.
    pub fn parse(&self, text: &str) -> MarkdownTree {
        let mut roots: Vec<MarkdownSection> = Vec::new();
        let mut stack: Vec<MarkdownSection> = Vec::new();
        let mut heading: Option<MarkdownSection> = None;

        for event in MdParser::new(text) {
            match event {
                Event::Start(Tag::Heading { level, .. }) => {
                    heading = Some(MarkdownSection::new(level as u8, String::new()));
                }
                Event::End(TagEnd::Heading(_)) => {
                    if let Some(mut section) = heading.take() {
                        section.title = section.title.trim().to_string();
                        while stack.last().is_some_and(|s| s.level >= section.level) {
                            close_section(&mut stack, &mut roots);
                        }
                        stack.push(section);
                    }
                }
                Event::Text(t) | Event::Code(t) => match heading.as_mut() {
                    Some(h) => h.title.push_str(&t),
                    None => push_content(&mut stack, &t),
                },
                Event::SoftBreak | Event::HardBreak => match heading.as_mut() {
                    Some(h) => h.title.push(' '),
                    None => push_content(&mut stack, "\n"),
                },
                Event::End(TagEnd::Paragraph)
                | Event::End(TagEnd::CodeBlock)
                | Event::End(TagEnd::Item) => push_content(&mut stack, "\n"),
                _ => {}
            }
        }

        while !stack.is_empty() {
            close_section(&mut stack, &mut roots);
        }

        MarkdownTree { sections: roots }
    }
}

fn push_content(stack: &mut [MarkdownSection], text: &str) {
    if let Some(section) = stack.last_mut() {
        section.content.push_str(text);
    }
}

/// Pop the innermost open section into its parent (or the roots).
fn close_section(stack: &mut Vec<MarkdownSection>, roots: &mut Vec<MarkdownSection>) {
    if let Some(mut done) = stack.pop() {
        done.content = done.content.trim().to_string();
        match stack.last_mut() {
            Some(parent) => parent.subsections.push(done),
            None => roots.push(done),
        }
    }
}
