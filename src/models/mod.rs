pub mod comment;
pub mod movie;
pub mod rating;
pub mod redis;
pub mod user;

pub use comment::Comment;
pub use movie::Movie;
pub use user::User;
