//! UI / rendering layer — everything that touches Ratatui widgets.
//!
//! This layer takes the *core* state and turns it into cells on the
//! terminal.  No filesystem I/O happens here.

pub mod carousel;
pub mod layout;
pub mod theme;
pub mod viewport;
