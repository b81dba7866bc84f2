//! Result cards with per-match price recording

use leptos::prelude::*;
use whisky_goggles_common::{parse_price, CandidateMatch};

use crate::store::Store;

#[component]
pub fn WhiskyResults() -> impl IntoView {
    let store = expect_context::<Store>();

    // flatten groups for display; group order and match order are preserved
    let matches = move || -> Vec<(usize, CandidateMatch)> {
        store
            .results
            .get()
            .map(|result| {
                result
                    .groups
                    .into_iter()
                    .flat_map(|group| group.matches)
                    .enumerate()
                    .collect()
            })
            .unwrap_or_default()
    };

    let has_matches = move || !matches().is_empty();

    view! {
        <Show when=has_matches>
            <div class="results">
                <div class="results-banner">
                    <h3>"Bottle Identified!"</h3>
                </div>

                <Show when=move || store.pending.get().is_some()>
                    <img
                        class="results-preview"
                        src=move || {
                            store
                                .pending
                                .get()
                                .map(|image| image.preview_url().to_string())
                                .unwrap_or_default()
                        }
                        alt="Analyzed bottle"
                    />
                </Show>

                <h3>"Top Matches:"</h3>
                <div class="match-list">
                    <For
                        each=matches
                        key=|(index, candidate)| (*index, candidate.name.clone())
                        children=move |(_, candidate)| view! { <MatchCard candidate=candidate /> }
                    />
                </div>

                <div class="actions">
                    <button class="btn btn-secondary" on:click=move |_| store.reset_recognition()>
                        "Scan Another Bottle"
                    </button>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn MatchCard(candidate: CandidateMatch) -> impl IntoView {
    let store = expect_context::<Store>();
    let name = candidate.name.clone();
    let confidence = candidate.confidence_label();

    let draft_value = {
        let name = name.clone();
        move || {
            store
                .price_drafts
                .get()
                .get(&name)
                .map(|price| price.to_string())
                .unwrap_or_default()
        }
    };
    let committable = {
        let name = name.clone();
        move || store.price_drafts.get().contains_key(&name)
    };
    let on_input = {
        let name = name.clone();
        move |ev| store.update_price_draft(&name, parse_price(&event_target_value(&ev)))
    };
    let on_save = move |_| store.commit_price(&name);

    view! {
        <div class="match-card">
            <div class="match-head">
                <h4>{candidate.name.clone()}</h4>
                <span class="confidence-badge">{confidence}</span>
            </div>

            {candidate
                .vintage
                .clone()
                .map(|vintage| view! { <p class="text-muted">{vintage}</p> })}
            {candidate.description.clone().map(|description| view! { <p>{description}</p> })}
            {candidate
                .price
                .map(|price| view! { <p class="text-muted">{format!("Listed at ${price:.2}")}</p> })}

            <div class="price-entry">
                <input
                    type="number"
                    min="0"
                    step="0.01"
                    placeholder="Record price"
                    prop:value=draft_value
                    on:input=on_input
                />
                <button class="btn btn-small" disabled=move || !committable() on:click=on_save>
                    "Save"
                </button>
            </div>
        </div>
    }
}
