use crate::state::RollcallState;
use axum::{
    extract::State,
    response::{
        Sse,
        sse::{Event, KeepAlive},
    },
};
use futures::Stream;
use std::convert::Infallible;
use tokio_stream::{StreamExt, wrappers::BroadcastStream};

pub async fn sse_feed(
    State(state): State<RollcallState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = state.subscribe_to_sse_feed();

    //a lagging subscriber just misses some re-render nudges; the next one catches it up
    let stream = BroadcastStream::new(rx)
        .filter_map(Result::ok)
        .map(|event| Ok::<_, Infallible>(Event::default().event(event.name()).data("")));

    Sse::new(stream).keep_alive(KeepAlive::default())
}
