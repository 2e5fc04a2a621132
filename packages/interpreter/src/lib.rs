//! # FlowCanvas Interpreter
//!
//! Steps through a UI state machine document one event at a time, for
//! previewing a flow without running the app.
//!
//! ```rust,ignore
//! let fsm = document.as_fsm()?;
//! let mut interpreter = Interpreter::new(fsm);
//!
//! assert_eq!(interpreter.active_state_id(), Some("idle"));
//! assert!(interpreter.trigger("start"));
//! assert_eq!(interpreter.history(), ["idle"]);
//! ```
//!
//! The first transition in document order that leaves the active state on
//! the given event wins. Transitions naming undeclared states never fire.
//! Unknown events are a `false` no-op.

mod interpreter;

pub use interpreter::{Interpreter, InterpreterSnapshot};
