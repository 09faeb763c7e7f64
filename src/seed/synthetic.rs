//! Offline user generation

use crate::error::Result;
use crate::store::{DocumentWriter, WriteBatch};
use crate::types::JsonValue;
use serde_json::json;

const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Barbara", "Claude", "Donald", "Edsger", "Frances", "Grace", "Hedy", "Ivan",
    "John", "Katherine", "Linus", "Margaret", "Niklaus", "Radia", "Shafi", "Tim", "Whitfield",
    "Yukihiro",
];

const LAST_NAMES: &[&str] = &[
    "Lovelace", "Turing", "Liskov", "Shannon", "Knuth", "Dijkstra", "Allen", "Hopper", "Lamarr",
    "Sutherland", "Backus", "Johnson", "Torvalds", "Hamilton", "Wirth", "Perlman", "Goldwasser",
    "Berners-Lee", "Diffie", "Matsumoto",
];

/// Generate `count` users shaped like randomuser.me results.
///
/// Output is deterministic; `seq` records generation order.
pub fn synthetic_users(count: usize) -> Vec<JsonValue> {
    (0..count)
        .map(|i| {
            let first = FIRST_NAMES[i % FIRST_NAMES.len()];
            let last = LAST_NAMES[(i / FIRST_NAMES.len()) % LAST_NAMES.len()];
            let username = format!("{}{}{i}", first.to_lowercase(), last.to_lowercase());
            json!({
                "seq": i,
                "name": { "first": first, "last": last },
                "email": format!("{username}@example.com"),
                "login": { "username": username },
            })
        })
        .collect()
}

/// Commit `count` synthetic users to `path` in one batch
pub async fn seed_synthetic<W>(writer: &W, path: &str, count: usize) -> Result<Vec<String>>
where
    W: DocumentWriter + ?Sized,
{
    let mut batch = WriteBatch::new();
    for user in synthetic_users(count) {
        batch.set(path, user);
    }
    writer.commit(batch).await
}
