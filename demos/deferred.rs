//! The deferred half of the crate: async adapter boundary, unwrap_async and
//! on_error_async, driven by a plain executor.

use calmly::{failure, success, try_caught_future, Outcome, PanicPayload};
use futures::executor::block_on;

async fn fetch_quota(user: &str) -> Outcome<u32, PanicPayload> {
    match user {
        "alice" => success(100),
        "bob" => failure(Box::new("bob is over quota") as PanicPayload),
        _ => panic!("unknown user"),
    }
}

fn main() {
    block_on(async {
        // success resolves through the deferred channel
        let quota = try_caught_future(fetch_quota("alice")).await.unwrap_async().await;
        println!("alice's quota: {quota}");

        // a deliberate failure is recovered in-band
        let quota = try_caught_future(fetch_quota("bob"))
            .await
            .on_error_async(|_| async { 0 })
            .await;
        println!("bob's quota after recovery: {quota}");

        // a panic inside the async operation is caught at the boundary
        let out = try_caught_future(fetch_quota("mallory")).await;
        println!("mallory's fetch failed: {}", out.is_failure());
    });
}
