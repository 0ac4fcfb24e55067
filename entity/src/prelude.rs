pub use super::comment::Entity as Comment;
pub use super::post::Entity as Post;
pub use super::revoked_token::Entity as RevokedToken;
pub use super::user::Entity as User;
