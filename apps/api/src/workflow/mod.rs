// Session workflow: the Upload → Optimizing → Review state machine, the pure
// edit functions applied in Review, the view model, and the HTTP handlers.

pub mod editing;
pub mod handlers;
pub mod machine;
pub mod review;
pub mod sessions;
