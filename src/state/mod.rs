//! Page state and the rules that move it. Nothing in here touches the DOM, so
//! all of it runs under plain `cargo test`.

pub mod anchor;
pub mod contact;
pub mod filter;
pub mod forms;
pub mod modal;
pub mod nav;
pub mod notification;
pub mod page;
pub mod records;
pub mod scroll;
pub mod submit;
pub mod tasks;
