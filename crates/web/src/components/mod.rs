// =============================================================================
// Marketing Web - UI Components
// =============================================================================
// Table of Contents:
// 1. Presentational Elements
// 2. Form Components
// 3. Markdown Renderer
// =============================================================================

pub mod elements;
pub mod forms;
pub mod markdown;

pub use elements::{Actions, Article, Paragraph, PillButton, Section, Subtitle, Title};
pub use forms::InputControl;
pub use markdown::Markdown;
