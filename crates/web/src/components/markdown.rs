// =============================================================================
// Marketing Web - Markdown Renderer
// =============================================================================
// Maps parsed markdown blocks onto presentational elements:
// root -> Article, heading -> Title / Subtitle, paragraph -> Paragraph.
// =============================================================================

use leptos::prelude::*;

use crate::components::elements::{Article, Paragraph, Subtitle, Title};
use crate::markdown::{heading_element, parse_blocks, Block, HeadingElement, Inline};

/// Render a markdown passage.
#[component]
pub fn Markdown(#[prop(into)] source: String) -> impl IntoView {
    let blocks = parse_blocks(&source);

    view! {
        <Article>
            {blocks.into_iter().map(render_block).collect_view()}
        </Article>
    }
}

fn render_block(block: Block) -> AnyView {
    match block {
        Block::Heading { level, content } => match heading_element(level) {
            HeadingElement::Title => view! { <Title>{render_inlines(content)}</Title> }.into_any(),
            HeadingElement::Subtitle => {
                view! { <Subtitle>{render_inlines(content)}</Subtitle> }.into_any()
            }
        },
        Block::Paragraph(content) => {
            view! { <Paragraph>{render_inlines(content)}</Paragraph> }.into_any()
        }
    }
}

fn render_inlines(content: Vec<Inline>) -> AnyView {
    content
        .into_iter()
        .map(render_inline)
        .collect_view()
        .into_any()
}

fn render_inline(inline: Inline) -> AnyView {
    match inline {
        Inline::Text(text) => text.into_any(),
        Inline::Emphasis(content) => view! { <em>{render_inlines(content)}</em> }.into_any(),
        Inline::Strong(content) => view! { <strong>{render_inlines(content)}</strong> }.into_any(),
        Inline::Code(code) => view! { <code>{code}</code> }.into_any(),
        Inline::Link { href, content } => {
            view! { <a href=href class="link">{render_inlines(content)}</a> }.into_any()
        }
        Inline::Break => view! { <br /> }.into_any(),
    }
}
