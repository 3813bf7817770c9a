pub mod course;
pub mod dashboard;
pub mod games;
pub mod landing;
pub mod lesson;
pub mod login;
