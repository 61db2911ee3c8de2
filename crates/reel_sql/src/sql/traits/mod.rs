pub mod comment;
pub mod like;
pub mod user;
pub mod video;

pub use comment::CommentSqlLogic;
pub use like::LikeSqlLogic;
pub use user::UserSqlLogic;
pub use video::VideoSqlLogic;
