//! Message handling - Routing inbound messages to the command handler

pub mod dispatcher;
pub mod router;

pub use dispatcher::MessageDispatcher;
pub use router::CommandRouter;
