//! Numbered citation cards under a bot reply.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the `sources` array of a reply in server order. Badges are
//! 1-based so they read like footnotes.

#[cfg(test)]
#[path = "source_list_test.rs"]
mod source_list_test;

use leptos::prelude::*;

use crate::net::types::Source;

/// Footnote badge text for the source at `index` (0-based).
pub fn source_badge(index: usize) -> String {
    (index + 1).to_string()
}

/// Citation list; renders nothing when `sources` is empty.
#[component]
pub fn SourceList(sources: Vec<Source>) -> impl IntoView {
    (!sources.is_empty()).then(move || {
        view! {
            <ol class="source-list">
                {sources
                    .into_iter()
                    .enumerate()
                    .map(|(index, source)| {
                        view! {
                            <li class="source-card">
                                <div class="source-card__head">
                                    <span class="source-card__badge">{source_badge(index)}</span>
                                    <span class="source-card__section">{source.section}</span>
                                </div>
                                <div class="source-card__title">{source.title}</div>
                                <div class="source-card__excerpt">{source.excerpt}</div>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ol>
        }
    })
}
