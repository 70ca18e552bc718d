mod admission;
mod home;
mod news_list;
mod not_found;
mod student_life;

pub use admission::AdmissionPage;
pub use home::HomePage;
pub use news_list::NewsListPage;
pub use not_found::NotFoundPage;
pub use student_life::StudentLifePage;
