//! Data models for the IskoArena intramurals backend.
//!
//! Wire names are camelCase to match the admin console's TypeScript types.

mod admin;
mod datastore;
mod matches;
mod media;
mod notification;
mod player;
mod result;
mod stat;
mod team;

pub use admin::*;
pub use datastore::*;
pub use matches::*;
pub use media::*;
pub use notification::*;
pub use player::*;
pub use result::*;
pub use stat::*;
pub use team::*;
