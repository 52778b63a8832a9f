pub mod impls;
pub mod model;
pub mod store;

pub use model::member::{MemberRecord, MemberSnapshot};
pub use store::MemberStore;
