mod about;

pub use about::AboutPage;
