//! Domain entities - Core business objects with no external dependencies

pub mod user;
pub mod message;
pub mod command;
pub mod guild;
pub mod reply;

pub use user::User;
pub use message::IncomingMessage;
pub use command::ParsedCommand;
pub use guild::{GuildInfo, Role};
pub use reply::{AuthenticationResult, Embed};
