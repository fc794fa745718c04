//! Followers List Component
//!
//! Fetches followers once on mount and renders them. The request is
//! aborted if the component is torn down before it resolves.

use futures::future::{abortable, Aborted};
use leptos::either::EitherOf4;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::fetch_followers;
use crate::config::use_api_config;
use crate::fetch::FetchState;
use crate::models::FollowerRecord;

/// `data-testid` of the follower at `index`
pub fn follower_test_id(index: usize) -> String {
    format!("follower-item-{index}")
}

#[component]
pub fn FollowersList() -> impl IntoView {
    let config = use_api_config();
    let (state, set_state) = signal(FetchState::<Vec<FollowerRecord>>::default());

    set_state.update(|state| {
        state.start();
    });
    let (load, abort_handle) = abortable(async move { fetch_followers(&config).await });
    spawn_local(async move {
        match load.await {
            Ok(result) => {
                match &result {
                    Ok(followers) => log::info!("loaded {} followers", followers.len()),
                    Err(e) => log::warn!("followers fetch failed: {e}"),
                }
                set_state.update(|state| {
                    state.finish(result);
                });
            }
            Err(Aborted) => log::debug!("followers fetch aborted"),
        }
    });
    on_cleanup(move || abort_handle.abort());

    view! {
        <div class="followerslist-container">
            {move || state.with(followers_view)}
        </div>
    }
}

/// Markup for each fetch state
pub fn followers_view(state: &FetchState<Vec<FollowerRecord>>) -> impl IntoView {
    match (state.error(), state.data()) {
        (Some(message), _) => EitherOf4::A(view! {
            <p class="followers-status error" data-testid="followers-error">
                {format!("Could not load followers: {message}")}
            </p>
        }),
        (None, None) => EitherOf4::B(view! {
            <p class="followers-status" data-testid="followers-loading">"Loading followers..."</p>
        }),
        (None, Some(followers)) if followers.is_empty() => EitherOf4::C(view! {
            <p class="followers-status" data-testid="followers-empty">"No followers yet."</p>
        }),
        (None, Some(followers)) => EitherOf4::D(
            followers
                .iter()
                .enumerate()
                .map(|(index, follower)| view! { <FollowerItem index=index follower=follower.clone() /> })
                .collect_view(),
        ),
    }
}

/// A single follower card
#[component]
fn FollowerItem(index: usize, follower: FollowerRecord) -> impl IntoView {
    let alt = follower.full_name();
    let FollowerRecord {
        first_name,
        last_name,
        avatar_url,
        username,
    } = follower;

    view! {
        <div class="follower-item" data-testid=follower_test_id(index)>
            <img src=avatar_url alt=alt />
            <div class="followers-details">
                <div class="follower-item-name">
                    <h4>{first_name}</h4>
                    <h4>{last_name}</h4>
                </div>
                <p>{username}</p>
            </div>
        </div>
    }
}
