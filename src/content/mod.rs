//! Content module - article models, rich-text rendering and navigation

mod article;
mod block;
mod navigator;
mod richtext;

pub use article::{ArticleSummary, Author, Category, FullArticle, ImageAsset, MainImage, QueryResponse};
pub use block::{BlockKind, BlockStyle, ContentBlock, Mark, TextSpan};
pub use navigator::{locate, NavError, Navigation};
pub use richtext::{render, render_value, render_with, RenderOptions};
