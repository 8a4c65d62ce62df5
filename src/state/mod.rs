// ============================================================================
// STATE MODULE - Reactive state with Rc<RefCell> + notifications
// ============================================================================

pub mod reactivity;
pub mod session_context;

pub use reactivity::{Listeners, ReactiveState, SubscriptionId};
pub use session_context::{SessionContext, SessionState};
