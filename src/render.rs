//! Markup fragments inserted into the static pages.
//!
//! Uses [maud](https://maud.lambda.xyz/) so every interpolated field from the
//! posts document is escaped. The single exception is a post's `content`,
//! which is authored HTML and inserted as-is.
//!
//! ## Fragments
//!
//! - **Post card**: listing grid entry linking to the single-post page
//! - **Post meta**: author / date / read time lines with inline icons
//! - **Tag list**: `#tag` chips under a post
//! - **Related card**: compact link shown below a post
//! - **Load error**: replaces the loading indicator when fetching fails

use crate::posts::{category_emoji, post_href};
use crate::types::Post;
use maud::{Markup, PreEscaped, html};

const ICON_AUTHOR: &str = "M16 7a4 4 0 11-8 0 4 4 0 018 0zM12 14a7 7 0 00-7 7h14a7 7 0 00-7-7z";
const ICON_DATE: &str = "M8 7V3m8 4V3m-9 8h10M5 21h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v12a2 2 0 002 2z";
const ICON_CLOCK: &str = "M12 8v4l3 3m6-3a9 9 0 11-18 0 9 9 0 0118 0z";

/// Stroke icons for the post meta line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaIcon {
    Author,
    Date,
    ReadTime,
}

impl MetaIcon {
    fn path(self) -> &'static str {
        match self {
            MetaIcon::Author => ICON_AUTHOR,
            MetaIcon::Date => ICON_DATE,
            MetaIcon::ReadTime => ICON_CLOCK,
        }
    }
}

/// CSS `animation-delay` for the card at `index` in a freshly rendered list.
pub fn stagger_delay(index: usize) -> String {
    format!("{:.1}s", index as f64 * 0.1)
}

fn icon(icon: MetaIcon) -> Markup {
    html! {
        svg class="w-4 h-4" fill="none" stroke="currentColor" viewBox="0 0 24 24" {
            path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=(icon.path()) {}
        }
    }
}

/// A listing card. `index` drives the staggered reveal.
pub fn post_card(post: &Post, index: usize, post_page: &str, read_suffix: &str) -> Markup {
    html! {
        article.post-card.fade-in.visible style={ "animation-delay: " (stagger_delay(index)) } {
            a.block href=(post_href(post_page, post.id)) {
                div.post-banner {
                    span.post-emoji { (category_emoji(&post.category)) }
                }
                div.post-body {
                    span.post-category { (post.category) }
                    h3.post-title { (post.title) }
                    p.post-excerpt { (post.excerpt) }
                    div.post-footer {
                        span { (post.date) }
                        span { (post.read_time) " " (read_suffix) }
                    }
                }
            }
        }
    }
}

/// All listing cards, in the given order.
pub fn post_cards(posts: &[&Post], post_page: &str, read_suffix: &str) -> Markup {
    html! {
        @for (index, post) in posts.iter().enumerate() {
            (post_card(post, index, post_page, read_suffix))
        }
    }
}

/// Icon followed by a value, for the author/date/read-time slots.
pub fn meta_line(kind: MetaIcon, value: &str) -> Markup {
    html! {
        (icon(kind))
        " " (value)
    }
}

pub fn tag_list(tags: &[String]) -> Markup {
    html! {
        @for tag in tags {
            span.tag { "#" (tag) }
        }
    }
}

pub fn related_cards(posts: &[&Post], post_page: &str) -> Markup {
    html! {
        @for post in posts {
            a.related-card href=(post_href(post_page, post.id)) {
                span.post-category { (post.category) }
                h3.related-title { (post.title) }
                p.related-date { (post.date) }
            }
        }
    }
}

/// Authored post body. Not escaped.
pub fn post_content(post: &Post) -> Markup {
    PreEscaped(post.content.clone())
}

pub fn load_error(message: &str) -> Markup {
    html! {
        p.load-error { (message) }
    }
}
