// =============================================================================
// Marketing Web - Markdown Blocks
// =============================================================================
// Table of Contents:
// 1. Block Model
// 2. Heading Mapping
// 3. Parser
// =============================================================================

use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};

// -----------------------------------------------------------------------------
// 1. Block Model
// -----------------------------------------------------------------------------

/// Inline content inside a block.
#[derive(Clone, Debug, PartialEq)]
pub enum Inline {
    Text(String),
    Emphasis(Vec<Inline>),
    Strong(Vec<Inline>),
    Code(String),
    Link { href: String, content: Vec<Inline> },
    Break,
}

/// Top-level markdown block, mapped onto a presentational element.
#[derive(Clone, Debug, PartialEq)]
pub enum Block {
    Heading { level: u8, content: Vec<Inline> },
    Paragraph(Vec<Inline>),
}

// -----------------------------------------------------------------------------
// 2. Heading Mapping
// -----------------------------------------------------------------------------

/// Element a heading renders as.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeadingElement {
    Title,
    Subtitle,
}

/// The first heading level is the section title; deeper levels are subtitles.
pub fn heading_element(level: u8) -> HeadingElement {
    match level {
        0 | 1 => HeadingElement::Title,
        _ => HeadingElement::Subtitle,
    }
}

fn heading_level(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

// -----------------------------------------------------------------------------
// 3. Parser
// -----------------------------------------------------------------------------

enum Frame {
    Emphasis(Vec<Inline>),
    Strong(Vec<Inline>),
    Link { href: String, content: Vec<Inline> },
}

/// Accumulates inline content for the block being parsed.
#[derive(Default)]
struct InlineBuilder {
    stack: Vec<Frame>,
    root: Vec<Inline>,
}

impl InlineBuilder {
    fn current(&mut self) -> &mut Vec<Inline> {
        match self.stack.last_mut() {
            Some(Frame::Emphasis(content))
            | Some(Frame::Strong(content))
            | Some(Frame::Link { content, .. }) => content,
            None => &mut self.root,
        }
    }

    fn push(&mut self, inline: Inline) {
        let current = self.current();
        // Adjacent text events are merged into one node.
        if let (Inline::Text(next), Some(Inline::Text(prev))) = (&inline, current.last_mut()) {
            prev.push_str(next);
            return;
        }
        current.push(inline);
    }

    fn open(&mut self, frame: Frame) {
        self.stack.push(frame);
    }

    fn close(&mut self) {
        let inline = match self.stack.pop() {
            Some(Frame::Emphasis(content)) => Inline::Emphasis(content),
            Some(Frame::Strong(content)) => Inline::Strong(content),
            Some(Frame::Link { href, content }) => Inline::Link { href, content },
            None => return,
        };
        self.push(inline);
    }

    fn finish(&mut self) -> Vec<Inline> {
        while !self.stack.is_empty() {
            self.close();
        }
        std::mem::take(&mut self.root)
    }

    fn is_empty(&self) -> bool {
        self.stack.is_empty() && self.root.is_empty()
    }
}

/// Parse markdown into the blocks the contact section renders.
///
/// Headings and paragraphs map directly. Text inside other containers
/// (lists, quotes, code blocks) is flattened into paragraphs; raw HTML
/// is dropped.
pub fn parse_blocks(source: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut inlines = InlineBuilder::default();
    let mut heading: Option<u8> = None;

    let flush = |inlines: &mut InlineBuilder, blocks: &mut Vec<Block>, heading: Option<u8>| {
        if inlines.is_empty() {
            return;
        }
        let content = inlines.finish();
        blocks.push(match heading {
            Some(level) => Block::Heading { level, content },
            None => Block::Paragraph(content),
        });
    };

    for event in Parser::new(source) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                flush(&mut inlines, &mut blocks, None);
                heading = Some(heading_level(level));
            }
            Event::End(TagEnd::Heading(_)) => {
                flush(&mut inlines, &mut blocks, heading.take());
            }
            Event::Start(Tag::Paragraph) | Event::Start(Tag::Item) | Event::Start(Tag::CodeBlock(_)) => {
                flush(&mut inlines, &mut blocks, None);
            }
            Event::End(TagEnd::Paragraph) | Event::End(TagEnd::Item) | Event::End(TagEnd::CodeBlock) => {
                flush(&mut inlines, &mut blocks, None);
            }
            Event::Start(Tag::Emphasis) => inlines.open(Frame::Emphasis(Vec::new())),
            Event::Start(Tag::Strong) => inlines.open(Frame::Strong(Vec::new())),
            Event::Start(Tag::Link { dest_url, .. }) => inlines.open(Frame::Link {
                href: dest_url.to_string(),
                content: Vec::new(),
            }),
            Event::End(TagEnd::Emphasis) | Event::End(TagEnd::Strong) | Event::End(TagEnd::Link) => {
                inlines.close();
            }
            Event::Text(text) => inlines.push(Inline::Text(text.to_string())),
            Event::Code(code) => inlines.push(Inline::Code(code.to_string())),
            Event::SoftBreak => inlines.push(Inline::Text(" ".to_string())),
            Event::HardBreak => inlines.push(Inline::Break),
            _ => {}
        }
    }
    flush(&mut inlines, &mut blocks, None);

    blocks
}
