pub mod checklist;
pub mod cpbook;
pub mod cses;
pub mod fetch;
pub mod output;
